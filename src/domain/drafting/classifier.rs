//! Intent classification.
//!
//! Phrase categories overlap ("purchase order" vs "purchase", "bill" as an
//! expense vs a document), so the rule order below is significant.

use once_cell::sync::Lazy;
use regex::Regex;

use super::draft::{
    accounts, DraftData, EmployeeData, FollowUpData, JournalData, LeadData, LineItem,
    PaymentData, PayrollData, PoConversionData, PurchaseOrderData, PurchaseOrderLine,
    SalaryPaymentData, TradeData,
};
use super::extractors::{
    extract_amount, extract_iso_date, extract_month, extract_name_after, extract_note,
    extract_party_name_by, extract_payment_channel, extract_payment_method, extract_period,
    extract_po_number, extract_product_name, extract_quantity, extract_salary_type, extract_sku,
    extract_unit_price, extract_year, NameAnchor, TradeKind, CUSTOMER_TRIGGERS,
    EMPLOYEE_TRIGGERS, PAYER_TRIGGERS, SUPPLIER_TRIGGERS,
};
use super::intent::Intent;
use super::text::{normalize, DEFAULT_MAX_INPUT_CHARS};

/// Reply to greetings and help requests.
pub const HELP_MESSAGE: &str = "Hi! I can draft invoices, bills, purchase orders, journal entries, payments and payroll. Tell me what happened, for example 'sold 10 widgets to Acme at 100 on cash'.";

/// Reply when nothing transactional was recognized.
pub const CHAT_PROMPT: &str = "I can help you record business transactions. Try something like 'sold 10 widgets to Acme at 100 on cash' or 'rent 50000'.";

const JOURNAL_DETAIL_PROMPT: &str = "Please describe the journal entry: which account to debit, which to credit, and the amount.";
const INVOICE_DETAIL_PROMPT: &str = "Who is the customer, and what did you sell? For example 'sold 10 widgets to Acme at 100'.";
const BILL_DETAIL_PROMPT: &str = "Which vendor is the bill from, and what did you buy? For example 'bought 20 chairs from Ikea at 50'.";

/// Outcome of classifying one message.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// No transaction; reply conversationally.
    Chat { message: String },
    /// A recognized intent with too little detail to validate; returned as-is.
    Incomplete {
        intent: Intent,
        data: DraftData,
        message: String,
    },
    /// A candidate draft for the requirement validator.
    Candidate { intent: Intent, data: DraftData },
}

/// Maps a user message to a draft candidate.
pub trait IntentClassifier: Send + Sync {
    fn classify(&self, message: &str) -> Classification;
}

static GREETING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:hi|hello|hey|hiya|salam|assalam\w*(?: alaikum)?|good (?:morning|afternoon|evening)|help|what can you do|how does this work|thanks|thank you)\b",
    )
    .unwrap()
});
static PO_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bpo\s").unwrap());
static CAPITAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:invest(?:ed|ing|ment)?|capital)\b").unwrap());
static EXPENSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:rent|expenses?|utility|utilities|bill)\b").unwrap());
static UTILITIES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:utility|utilities|electricity|electric|water|gas|internet)\b").unwrap()
});
static RENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\brent\b").unwrap());
static SALARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:salary|salaries|wages?|payroll)\b").unwrap());
static PAYROLL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bpayroll\b").unwrap());
static NEW_EMPLOYEE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:add|new|create|onboard)\s+(?:an?\s+)?employee\b|\bhire\b").unwrap()
});
static NEW_LEAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:add|new|create)\s+(?:an?\s+)?(?:new\s+)?lead\b|\blead\s+(?:named|called)\b")
        .unwrap()
});
static FOLLOW_UP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bfollow[\s-]?up\b").unwrap());
static SALE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:sold|sales?|sell)\b|invoice customer").unwrap());
static PURCHASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:purchased?|bought|buy(?:ing)?|inventory|stock|restock(?:ed)?)\b").unwrap()
});
static BARE_JOURNAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:journal|record|gj)\b").unwrap());
static BARE_INVOICE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\binvoice\b").unwrap());
static BARE_BILL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bbill\b").unwrap());

const GOODS_RECEIVED_PHRASES: &[&str] = &[
    "receive goods",
    "received goods",
    "goods received",
    "goods receipt",
    "convert po to bill",
    "convert po",
];
const PURCHASE_ORDER_PHRASES: &[&str] = &["purchase order", "order goods", "send order to vendor"];
const RECEIVE_PAYMENT_PHRASES: &[&str] = &[
    "received payment",
    "payment received",
    "receive payment",
    "collected payment",
    "payment from",
];
const PAY_BILL_PHRASES: &[&str] = &[
    "pay vendor",
    "paid vendor",
    "pay supplier",
    "paid supplier",
    "vendor payment",
    "supplier payment",
];

fn contains_any(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| text.contains(p))
}

/// Greeting or help request, with no figures that suggest a transaction.
pub fn is_greeting(text: &str) -> bool {
    GREETING.is_match(text)
        && text.split_whitespace().count() <= 4
        && !text.chars().any(|c| c.is_ascii_digit())
}

/// Money received from or paid to a party, as opposed to an expense.
fn is_settlement(text: &str) -> bool {
    contains_any(text, RECEIVE_PAYMENT_PHRASES) || contains_any(text, PAY_BILL_PHRASES)
}

pub fn is_purchase_order(text: &str) -> bool {
    contains_any(text, PURCHASE_ORDER_PHRASES) || PO_WORD.is_match(text)
}

/// Keyword cascade over normalized text with field extraction per intent.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedIntentClassifier;

impl IntentClassifier for RuleBasedIntentClassifier {
    fn classify(&self, message: &str) -> Classification {
        let text = normalize(message, DEFAULT_MAX_INPUT_CHARS);
        let text = text.as_str();

        if is_greeting(text) {
            return Classification::Chat {
                message: HELP_MESSAGE.to_string(),
            };
        }

        // Before purchase orders: "convert po to bill" contains "po ".
        if contains_any(text, GOODS_RECEIVED_PHRASES) {
            return candidate(
                Intent::ConvertPoToBill,
                DraftData::PoConversion(PoConversionData {
                    po_number: extract_po_number(text),
                }),
            );
        }

        if is_purchase_order(text) {
            return candidate(Intent::CreatePurchaseOrder, purchase_order(text));
        }

        if CAPITAL.is_match(text) {
            if let Some(amount) = extract_amount(text).filter(|a| *a > 0.0) {
                return candidate(
                    Intent::CreateJournal,
                    DraftData::Journal(JournalData::balanced(
                        accounts::CASH,
                        accounts::CAPITAL,
                        amount,
                        "Owner capital investment",
                    )),
                );
            }
        }

        // "paid vendor bill 5000" settles a payable; it is not a new expense.
        if EXPENSE.is_match(text) && !SALARY.is_match(text) && !is_settlement(text) {
            if let Some(amount) = extract_amount(text).filter(|a| *a > 0.0) {
                return candidate(Intent::CreateJournal, DraftData::Journal(expense(text, amount)));
            }
        }

        if let Some(classification) = people_and_payments(text) {
            return classification;
        }

        if SALE.is_match(text) {
            return candidate(
                Intent::CreateInvoice,
                DraftData::Trade(trade(text, TradeKind::Sale, CUSTOMER_TRIGGERS)),
            );
        }

        if PURCHASE.is_match(text) && !is_purchase_order(text) {
            return candidate(
                Intent::CreateBill,
                DraftData::Trade(trade(text, TradeKind::Purchase, SUPPLIER_TRIGGERS)),
            );
        }

        if BARE_JOURNAL.is_match(text) {
            return incomplete(Intent::CreateJournal, JOURNAL_DETAIL_PROMPT);
        }
        if BARE_INVOICE.is_match(text) {
            return incomplete(Intent::CreateInvoice, INVOICE_DETAIL_PROMPT);
        }
        if BARE_BILL.is_match(text) {
            return incomplete(Intent::CreateBill, BILL_DETAIL_PROMPT);
        }

        Classification::Chat {
            message: CHAT_PROMPT.to_string(),
        }
    }
}

fn candidate(intent: Intent, data: DraftData) -> Classification {
    Classification::Candidate { intent, data }
}

fn incomplete(intent: Intent, message: &str) -> Classification {
    Classification::Incomplete {
        intent,
        data: DraftData::empty_for(intent),
        message: message.to_string(),
    }
}

fn trade(text: &str, kind: TradeKind, party_triggers: &[&str]) -> TradeData {
    TradeData {
        partner_name: extract_party_name_by(text, party_triggers),
        items: vec![LineItem {
            product_name: Some(extract_product_name(text, kind)),
            description: None,
            quantity: Some(extract_quantity(text)),
            price: extract_unit_price(text),
            sku: extract_sku(text),
        }],
        payment_method: Some(extract_payment_method(text).unwrap_or("Credit").to_string()),
    }
}

fn purchase_order(text: &str) -> DraftData {
    DraftData::PurchaseOrder(PurchaseOrderData {
        supplier_name: extract_party_name_by(text, SUPPLIER_TRIGGERS),
        items: vec![PurchaseOrderLine {
            product_name: Some(extract_product_name(text, TradeKind::PurchaseOrder)),
            quantity: Some(extract_quantity(text)),
            unit_price: extract_unit_price(text),
            sku: extract_sku(text),
            line_total: None,
        }],
        expected_delivery_date: extract_iso_date(text),
        total: None,
    })
}

fn expense(text: &str, amount: f64) -> JournalData {
    let (code, narration) = if RENT.is_match(text) {
        (accounts::RENT_EXPENSE, "Rent expense paid in cash")
    } else if UTILITIES.is_match(text) {
        (accounts::UTILITIES_EXPENSE, "Utilities expense paid in cash")
    } else {
        (accounts::GENERAL_EXPENSE, "General expense paid in cash")
    };
    JournalData::balanced(code, accounts::CASH, amount, narration)
}

/// Payments, payroll, salaries, employees, leads and follow-ups.
fn people_and_payments(text: &str) -> Option<Classification> {
    if contains_any(text, RECEIVE_PAYMENT_PHRASES) {
        return Some(candidate(
            Intent::ReceivePayment,
            DraftData::Payment(payment(text, PAYER_TRIGGERS)),
        ));
    }
    if contains_any(text, PAY_BILL_PHRASES) {
        return Some(candidate(
            Intent::PayBill,
            DraftData::Payment(payment(text, SUPPLIER_TRIGGERS)),
        ));
    }
    if PAYROLL.is_match(text) {
        return Some(candidate(
            Intent::RunPayroll,
            DraftData::Payroll(PayrollData {
                month: extract_month(text),
                year: extract_year(text),
            }),
        ));
    }
    if NEW_EMPLOYEE.is_match(text) {
        return Some(candidate(
            Intent::CreateEmployee,
            DraftData::Employee(EmployeeData {
                name: extract_name_after(text, NameAnchor::Employee),
                salary: extract_amount(text),
            }),
        ));
    }
    if SALARY.is_match(text) {
        return Some(candidate(
            Intent::RecordSalaryPayment,
            DraftData::SalaryPayment(salary_payment(text)),
        ));
    }
    if NEW_LEAD.is_match(text) {
        return Some(candidate(
            Intent::CreateLead,
            DraftData::Lead(LeadData {
                name: extract_name_after(text, NameAnchor::Lead),
                notes: extract_note(text),
            }),
        ));
    }
    if FOLLOW_UP.is_match(text) {
        return Some(candidate(
            Intent::FollowUpClient,
            DraftData::FollowUp(FollowUpData {
                client_name: extract_name_after(text, NameAnchor::FollowUp),
                note: extract_note(text),
            }),
        ));
    }
    None
}

fn payment(text: &str, party_triggers: &[&str]) -> PaymentData {
    PaymentData {
        partner_name: extract_party_name_by(text, party_triggers),
        amount: extract_amount(text),
        method: extract_payment_channel(text).map(str::to_string),
    }
}

fn salary_payment(text: &str) -> SalaryPaymentData {
    // The period's year must not be read as the amount.
    let period = extract_period(text);
    let rest = match &period {
        Some((_, span)) => format!("{} {}", &text[..span.start], &text[span.end..]),
        None => text.to_string(),
    };

    SalaryPaymentData {
        employee_name: extract_party_name_by(&rest, EMPLOYEE_TRIGGERS),
        amount: extract_amount(&rest),
        salary_type: extract_salary_type(&rest).map(str::to_string),
        payment_method: extract_payment_channel(&rest).map(str::to_string),
        period: period.map(|(period, _)| period),
    }
}
