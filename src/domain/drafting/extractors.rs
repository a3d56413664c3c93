//! Field extractors.
//!
//! Each matcher takes normalized (lower-cased) text, tries an ordered list of
//! patterns and returns the first hit. Absence is `None`; matchers never fail.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::text::title_case;

/// Multiplier applied by the `lac`/`lakh` suffix.
pub const LAC: f64 = 100_000.0;

/// Party triggers in plain left-to-right order.
pub const PARTY_TRIGGERS: &[&str] = &["for", "to", "from", "vendor", "supplier", "customer"];
/// Party triggers for sales, strongest first.
pub const CUSTOMER_TRIGGERS: &[&str] = &["customer", "client", "to", "for", "from"];
/// Party triggers for purchases and purchase orders, strongest first.
pub const SUPPLIER_TRIGGERS: &[&str] = &["supplier", "vendor", "from", "to", "for"];
/// Party triggers for money received.
pub const PAYER_TRIGGERS: &[&str] = &["customer", "client", "from", "by", "for"];
/// Party triggers for salary payments.
pub const EMPLOYEE_TRIGGERS: &[&str] = &["employee", "to", "for"];

// Quantity
static QTY_FORWARD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d+(?:\.\d+)?)\s*(?:units?|pieces?|pcs?|items?|qty|quantity)\b").unwrap()
});
static QTY_REVERSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:units?|pieces?|pcs?|items?|qty|quantity)\s*(?:is|are|:)\s*(\d+(?:\.\d+)?)")
        .unwrap()
});
static QTY_AFTER_VERB: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:sold|sell|selling|purchased|purchase|bought|buy|buying|restocked|restock|ordered|order)\s+(?:for\s+|of\s+)?(\d+(?:\.\d+)?)\b",
    )
    .unwrap()
});

// Unit price
static PRICE_AT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\bat|@)\s*(?:(?:rs|pkr|inr)\.?\s*)?(\d+(?:\.\d+)?)").unwrap()
});
static PRICE_CURRENCY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d+(?:\.\d+)?)\s*(?:pkr|rs|inr|rupees)\b").unwrap());
static PRICE_PER_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d+(?:\.\d+)?)\s*per\s*(?:units?|pieces?|pcs?|items?|qty|quantity)\b").unwrap()
});

// Amount
static BARE_AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d+(?:\.\d+)?)\s*(lacs?|lakhs?)?\b").unwrap());

// Party
static PARTY_TRIGGER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(for|to|from|vendor|supplier|customer|client|employee|by)\s+").unwrap()
});
static PARTY_TERMINATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\s+(?:sku|at|per|on|for|to|from|via|by|in|with|paid|received)\b|\s*[@,;]|\s+\d",
    )
    .unwrap()
});

// Words dropped from party and person names.
const NAME_STOP_WORDS: &[&str] = &[
    "invoice", "bill", "sale", "sales", "sold", "sell", "selling", "purchase", "purchased",
    "bought", "buy", "buying", "order", "ordered", "at", "per", "po", "customer", "vendor",
    "supplier", "client", "the", "a", "an", "mr", "mrs", "ms", "cash", "credit", "payment",
    "salary", "employee", "lead", "named", "called", "new", "it", "it's", "its", "is", "january", "february", "march",
    "april", "may", "june", "july", "august", "september", "october", "november", "december",
];

// SKU
static SKU: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bsku\s*(?:is|=|:)?\s*([a-z0-9][a-z0-9_-]*)").unwrap());

// Product name
static SALE_TRIGGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:sale of|sales of|sold|selling|sell|sale)\b").unwrap());
static PURCHASE_TRIGGER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:purchase of|purchased|purchase|bought|buying|buy|restocked|restock|stock of)\b",
    )
    .unwrap()
});
static PO_TRIGGER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:purchase order for|purchase order|order goods|po for|po|order)\b").unwrap()
});
static PRODUCT_CUT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\s+(?:at|per|from|to|for|supplier|vendor|sku|on cash|on credit)\b|@|,",
    )
    .unwrap()
});
const PRODUCT_NOISE: &[&str] = &[
    "unit", "units", "piece", "pieces", "pc", "pcs", "item", "items", "qty", "quantity", "of",
    "a", "an", "the", "some", "x",
];

// Payment method
static CASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:cash|paid)\b").unwrap());
static CREDIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bcredit\b").unwrap());
static CASH_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bcash\b").unwrap());
static BANK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:bank|transfer|online|wire|ibft)\b").unwrap());
static CHEQUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:cheque|check)\b").unwrap());
static CARD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bcard\b").unwrap());

// Dates and periods
static PO_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bpo[-\s]?(\d{4})-(\d{3,4})\b").unwrap());
static MONTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sept?(?:ember)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\b(?:\s*,?\s*((?:19|20)\d{2})\b)?",
    )
    .unwrap()
});
static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b((?:19|20)\d{2})\b").unwrap());
static ISO_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{4}-\d{2}-\d{2})\b").unwrap());

// Names after an anchor phrase
static LEAD_ANCHOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\blead\b(?:\s+(?:named|called|for))?\s+").unwrap()
});
static FOLLOW_UP_ANCHOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bfollow[\s-]?up\b(?:\s+(?:with|on))?(?:\s+(?:client|customer))?\s+").unwrap()
});
static EMPLOYEE_ANCHOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:employee|hire|onboard)\b(?:\s+(?:named|called))?\s+").unwrap()
});
static NAME_CUT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\s+(?:with|at|for|on|about|regarding|re|salary|from|to|as|tomorrow|today)\b|\s*[,.;:]|\s+\d",
    )
    .unwrap()
});
static NOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:about|regarding|re:?)\s+(.+)$").unwrap());

fn parse_number(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn first_capture(re: &Regex, text: &str) -> Option<f64> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| parse_number(m.as_str()))
}

/// Quantity stated in the text, if any.
pub fn explicit_quantity(text: &str) -> Option<f64> {
    first_capture(&QTY_FORWARD, text)
        .or_else(|| first_capture(&QTY_REVERSE, text))
        .or_else(|| first_capture(&QTY_AFTER_VERB, text))
}

/// Quantity stated in the text, defaulting to one.
pub fn extract_quantity(text: &str) -> f64 {
    explicit_quantity(text).unwrap_or(1.0)
}

pub fn extract_unit_price(text: &str) -> Option<f64> {
    first_capture(&PRICE_AT, text)
        .or_else(|| first_capture(&PRICE_CURRENCY, text))
        .or_else(|| first_capture(&PRICE_PER_UNIT, text))
}

/// First bare number, with `lac`/`lakh` scaling.
pub fn extract_bare_amount(text: &str) -> Option<f64> {
    let caps = BARE_AMOUNT.captures(text)?;
    let value = parse_number(caps.get(1)?.as_str())?;
    match caps.get(2) {
        Some(_) => Some(value * LAC),
        None => Some(value),
    }
}

/// Monetary amount for journal-style flows: quantity times unit price when a
/// price is stated, otherwise the first bare number.
pub fn extract_amount(text: &str) -> Option<f64> {
    match extract_unit_price(text) {
        Some(price) => Some(extract_quantity(text) * price),
        None => extract_bare_amount(text),
    }
}

/// Party name using the plain trigger set.
pub fn extract_party_name(text: &str) -> Option<String> {
    extract_party_name_by(text, PARTY_TRIGGERS)
}

/// Party name anchored on `triggers`, tried in the given priority order.
///
/// Within one trigger word the leftmost occurrence wins. A slice that starts
/// with a number or cleans down to fewer than two characters is skipped.
pub fn extract_party_name_by(text: &str, triggers: &[&str]) -> Option<String> {
    let mut anchors: Vec<(usize, usize)> = PARTY_TRIGGER
        .captures_iter(text)
        .filter_map(|caps| {
            let word = caps.get(1)?.as_str();
            let rank = triggers.iter().position(|t| *t == word)?;
            Some((rank, caps.get(0)?.end()))
        })
        .collect();
    anchors.sort_unstable();

    anchors
        .into_iter()
        .find_map(|(_, start)| party_candidate(&text[start..]))
}

fn party_candidate(rest: &str) -> Option<String> {
    if rest.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    let end = PARTY_TERMINATOR.find(rest).map(|m| m.start()).unwrap_or(rest.len());
    clean_name(&rest[..end])
}

/// Drops numbers, stop words and stray punctuation, then title-cases.
fn clean_name(raw: &str) -> Option<String> {
    let words: Vec<&str> = raw
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '&'))
        .filter(|w| !w.is_empty() && !NAME_STOP_WORDS.contains(w))
        .filter(|w| parse_number(w).is_none())
        .collect();
    let name = words.join(" ");
    if name.chars().filter(|c| c.is_alphanumeric()).count() < 2 {
        return None;
    }
    Some(title_case(&name))
}

/// Name typed as a direct answer: a trigger slice when one is present,
/// otherwise the whole answer cleaned.
pub fn extract_name_answer(text: &str) -> Option<String> {
    extract_party_name(text).or_else(|| clean_name(text))
}

/// Product name typed as a direct answer.
pub fn extract_item_answer(text: &str) -> Option<String> {
    clean_product(text).or_else(|| {
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| title_case(trimmed))
    })
}

/// SKU token, upper-cased.
pub fn extract_sku(text: &str) -> Option<String> {
    SKU.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_uppercase())
}

/// Which trigger family anchors a product name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeKind {
    Sale,
    Purchase,
    PurchaseOrder,
}

impl TradeKind {
    fn trigger(&self) -> &'static Regex {
        match self {
            TradeKind::Sale => &SALE_TRIGGER,
            TradeKind::Purchase => &PURCHASE_TRIGGER,
            TradeKind::PurchaseOrder => &PO_TRIGGER,
        }
    }

    /// Label used when no usable product name is found.
    pub fn fallback_label(&self) -> &'static str {
        match self {
            TradeKind::Sale => "Service/Item",
            TradeKind::Purchase => "Inventory Item",
            TradeKind::PurchaseOrder => "Item",
        }
    }
}

/// Product name between the trade trigger and the first cut token.
pub fn extract_product_name(text: &str, kind: TradeKind) -> String {
    product_slice(text, kind)
        .and_then(clean_product)
        .unwrap_or_else(|| kind.fallback_label().to_string())
}

fn product_slice(text: &str, kind: TradeKind) -> Option<&str> {
    let start = kind.trigger().find(text)?.end();
    let rest = &text[start..];
    let end = PRODUCT_CUT.find(rest).map(|m| m.start()).unwrap_or(rest.len());
    Some(&rest[..end])
}

fn clean_product(raw: &str) -> Option<String> {
    let words: Vec<&str> = raw
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '-'))
        .filter(|w| !w.is_empty())
        .filter(|w| parse_number(w).is_none())
        .filter(|w| !PRODUCT_NOISE.contains(w))
        .collect();
    let name = words.join(" ");
    if name.chars().count() <= 2 {
        return None;
    }
    Some(title_case(&name))
}

/// `Cash` when the text mentions cash or paid, `Credit` when it mentions credit.
pub fn extract_payment_method(text: &str) -> Option<&'static str> {
    if CASH.is_match(text) {
        Some("Cash")
    } else if CREDIT.is_match(text) {
        Some("Credit")
    } else {
        None
    }
}

/// Settlement channel for payments and salaries.
pub fn extract_payment_channel(text: &str) -> Option<&'static str> {
    if CHEQUE.is_match(text) {
        Some("Cheque")
    } else if BANK.is_match(text) {
        Some("Bank Transfer")
    } else if CARD.is_match(text) {
        Some("Card")
    } else if CASH_ONLY.is_match(text) {
        Some("Cash")
    } else {
        None
    }
}

/// PO number normalized to `PO-YYYY-NNN`.
pub fn extract_po_number(text: &str) -> Option<String> {
    let caps = PO_NUMBER.captures(text)?;
    Some(format!("PO-{}-{}", caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

fn month_index(token: &str) -> Option<u32> {
    let prefix: String = token.chars().take(3).collect();
    let index = match prefix.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(index)
}

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// English name for a 1-based month.
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}

/// Month named in the text (1-12), or a bare number 1-12 when nothing else
/// is in the answer.
pub fn extract_month(text: &str) -> Option<u32> {
    if let Some(caps) = MONTH.captures(text) {
        return month_index(caps.get(1)?.as_str());
    }
    text.trim()
        .parse::<u32>()
        .ok()
        .filter(|m| (1..=12).contains(m))
}

pub fn extract_year(text: &str) -> Option<i32> {
    YEAR.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Salary period as `<Month> <Year>` (or just the month) and the byte span it
/// occupied, so the caller can keep the year out of amount extraction.
pub fn extract_period(text: &str) -> Option<(String, std::ops::Range<usize>)> {
    let caps = MONTH.captures(text)?;
    let whole = caps.get(0)?;
    let month = month_name(month_index(caps.get(1)?.as_str())?)?;
    let period = match caps.get(2) {
        Some(year) => format!("{} {}", month, year.as_str()),
        None => month.to_string(),
    };
    Some((period, whole.range()))
}

pub fn extract_salary_type(text: &str) -> Option<&'static str> {
    if text.contains("advance") {
        Some("Advance")
    } else if text.contains("bonus") {
        Some("Bonus")
    } else if text.contains("overtime") {
        Some("Overtime")
    } else if text.contains("monthly") || text.contains("regular") {
        Some("Monthly")
    } else {
        None
    }
}

/// First valid ISO date in the text.
pub fn extract_iso_date(text: &str) -> Option<String> {
    ISO_DATE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .find(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").is_ok())
        .map(str::to_string)
}

/// Which phrase anchors a person or organisation name in CRM-style requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameAnchor {
    Lead,
    FollowUp,
    Employee,
}

/// Name following `anchor`, cut at the first connective or number.
pub fn extract_name_after(text: &str, anchor: NameAnchor) -> Option<String> {
    let re: &Regex = match anchor {
        NameAnchor::Lead => &LEAD_ANCHOR,
        NameAnchor::FollowUp => &FOLLOW_UP_ANCHOR,
        NameAnchor::Employee => &EMPLOYEE_ANCHOR,
    };
    let start = re.find(text)?.end();
    let rest = &text[start..];
    if rest.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    let end = NAME_CUT.find(rest).map(|m| m.start()).unwrap_or(rest.len());
    clean_name(&rest[..end])
}

/// Free-text note after `about`/`regarding`/`re`.
pub fn extract_note(text: &str) -> Option<String> {
    NOTE.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}
