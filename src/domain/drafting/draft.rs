//! Draft value objects: the structured, possibly-incomplete transaction
//! extracted from user text, and the per-intent data payloads it carries.

use serde::{Deserialize, Serialize};

use super::intent::Intent;
use super::requirements::RequiredField;
use super::status::MissingFieldStatus;

/// Ledger account codes used by the pre-balanced journal templates.
pub mod accounts {
    pub const CASH: u32 = 101;
    pub const CAPITAL: u32 = 301;
    pub const RENT_EXPENSE: u32 = 502;
    pub const UTILITIES_EXPENSE: u32 = 503;
    pub const GENERAL_EXPENSE: u32 = 506;

    /// Display name for a template account code.
    pub fn name(code: u32) -> &'static str {
        match code {
            CASH => "Cash",
            CAPITAL => "Owner's Capital",
            RENT_EXPENSE => "Rent Expense",
            UTILITIES_EXPENSE => "Utilities Expense",
            GENERAL_EXPENSE => "General Expense",
            _ => "Account",
        }
    }
}

/// Result of one engine turn, returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub intent: Intent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    pub ready_to_execute: bool,
    pub data: DraftData,
    pub message: String,
    /// Field currently being solicited, when the draft was parked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MissingFieldStatus>,
    /// Every missing field, in check order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<RequiredField>,
}

impl Draft {
    /// A conversational reply that carries no transaction.
    pub fn chat(message: impl Into<String>) -> Self {
        Self {
            intent: Intent::GeneralChat,
            confidence: None,
            ready_to_execute: false,
            data: DraftData::Chat {},
            message: message.into(),
            status: None,
            missing: Vec::new(),
        }
    }

    /// A fully-specified draft ready for the external poster.
    pub fn ready(intent: Intent, data: DraftData, message: impl Into<String>) -> Self {
        Self {
            intent,
            confidence: None,
            ready_to_execute: true,
            data,
            message: message.into(),
            status: None,
            missing: Vec::new(),
        }
    }

    /// A draft that still needs input from the user.
    pub fn incomplete(intent: Intent, data: DraftData, message: impl Into<String>) -> Self {
        Self {
            intent,
            confidence: None,
            ready_to_execute: false,
            data,
            message: message.into(),
            status: None,
            missing: Vec::new(),
        }
    }

    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = Some(confidence.clamp(0.0, 1.0));
        self
    }

    pub fn with_missing(mut self, missing: Vec<RequiredField>) -> Self {
        self.missing = missing;
        self
    }

    pub fn with_status(mut self, status: MissingFieldStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Intent-shaped payload of a draft.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DraftData {
    /// Invoice (sale) or bill (purchase).
    Trade(TradeData),
    PurchaseOrder(PurchaseOrderData),
    Journal(JournalData),
    PoConversion(PoConversionData),
    /// Receive payment from a customer or pay a vendor bill.
    Payment(PaymentData),
    Payroll(PayrollData),
    SalaryPayment(SalaryPaymentData),
    Lead(LeadData),
    FollowUp(FollowUpData),
    Employee(EmployeeData),
    Chat {},
}

impl DraftData {
    /// Empty payload of the shape an intent expects.
    pub fn empty_for(intent: Intent) -> Self {
        match intent {
            Intent::CreateInvoice | Intent::CreateBill => DraftData::Trade(TradeData::default()),
            Intent::CreatePurchaseOrder => DraftData::PurchaseOrder(PurchaseOrderData::default()),
            Intent::CreateJournal => DraftData::Journal(JournalData::default()),
            Intent::ConvertPoToBill => DraftData::PoConversion(PoConversionData::default()),
            Intent::ReceivePayment | Intent::PayBill => DraftData::Payment(PaymentData::default()),
            Intent::RunPayroll => DraftData::Payroll(PayrollData::default()),
            Intent::RecordSalaryPayment => {
                DraftData::SalaryPayment(SalaryPaymentData::default())
            }
            Intent::CreateLead => DraftData::Lead(LeadData::default()),
            Intent::FollowUpClient => DraftData::FollowUp(FollowUpData::default()),
            Intent::CreateEmployee => DraftData::Employee(EmployeeData::default()),
            Intent::GeneralChat => DraftData::Chat {},
        }
    }

    /// Deserializes an untrusted JSON object into the payload shape for `intent`.
    pub fn from_value(intent: Intent, value: serde_json::Value) -> Result<Self, serde_json::Error> {
        Ok(match intent {
            Intent::CreateInvoice | Intent::CreateBill => {
                DraftData::Trade(serde_json::from_value(value)?)
            }
            Intent::CreatePurchaseOrder => DraftData::PurchaseOrder(serde_json::from_value(value)?),
            Intent::CreateJournal => DraftData::Journal(serde_json::from_value(value)?),
            Intent::ConvertPoToBill => DraftData::PoConversion(serde_json::from_value(value)?),
            Intent::ReceivePayment | Intent::PayBill => {
                DraftData::Payment(serde_json::from_value(value)?)
            }
            Intent::RunPayroll => DraftData::Payroll(serde_json::from_value(value)?),
            Intent::RecordSalaryPayment => DraftData::SalaryPayment(serde_json::from_value(value)?),
            Intent::CreateLead => DraftData::Lead(serde_json::from_value(value)?),
            Intent::FollowUpClient => DraftData::FollowUp(serde_json::from_value(value)?),
            Intent::CreateEmployee => DraftData::Employee(serde_json::from_value(value)?),
            Intent::GeneralChat => DraftData::Chat {},
        })
    }

    /// Whether this payload has the shape `intent` expects.
    pub fn fits(&self, intent: Intent) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(&DraftData::empty_for(intent))
    }
}

/// One invoice or bill line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default, alias = "unitPrice")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
}

impl LineItem {
    /// Product name, falling back to the free-text description.
    pub fn label(&self) -> Option<&str> {
        self.product_name
            .as_deref()
            .or(self.description.as_deref())
            .filter(|s| !s.trim().is_empty())
    }

    pub fn line_total(&self) -> Option<f64> {
        Some(self.quantity? * self.price?)
    }
}

/// Payload for `create_invoice` (partner is the customer) and
/// `create_bill` (partner is the vendor).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeData {
    #[serde(default)]
    pub partner_name: Option<String>,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub payment_method: Option<String>,
}

impl TradeData {
    pub fn first_item(&self) -> Option<&LineItem> {
        self.items.first()
    }

    /// First line, created on demand so follow-up answers always have a target.
    pub fn first_item_mut(&mut self) -> &mut LineItem {
        if self.items.is_empty() {
            self.items.push(LineItem::default());
        }
        &mut self.items[0]
    }
}

/// One purchase-order line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderLine {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default, alias = "price")]
    pub unit_price: Option<f64>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_total: Option<f64>,
}

/// Payload for `create_purchase_order`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderData {
    #[serde(default, alias = "partnerName")]
    pub supplier_name: Option<String>,
    #[serde(default)]
    pub items: Vec<PurchaseOrderLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_delivery_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
}

impl PurchaseOrderData {
    pub fn first_item_mut(&mut self) -> &mut PurchaseOrderLine {
        if self.items.is_empty() {
            self.items.push(PurchaseOrderLine::default());
        }
        &mut self.items[0]
    }

    /// Fills `line_total` on every priced line and the order `total`.
    pub fn recompute_totals(&mut self) {
        let mut total = 0.0;
        for line in &mut self.items {
            line.line_total = match (line.quantity, line.unit_price) {
                (Some(q), Some(p)) => Some(q * p),
                _ => None,
            };
            total += line.line_total.unwrap_or(0.0);
        }
        self.total = Some(total);
    }
}

/// One side of a journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalLine {
    pub account_code: u32,
    #[serde(default)]
    pub account_name: String,
    #[serde(default)]
    pub debit: f64,
    #[serde(default)]
    pub credit: f64,
}

impl JournalLine {
    pub fn debit(account_code: u32, amount: f64) -> Self {
        Self {
            account_code,
            account_name: accounts::name(account_code).to_string(),
            debit: amount,
            credit: 0.0,
        }
    }

    pub fn credit(account_code: u32, amount: f64) -> Self {
        Self {
            account_code,
            account_name: accounts::name(account_code).to_string(),
            debit: 0.0,
            credit: amount,
        }
    }
}

/// Payload for `create_journal`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalData {
    #[serde(default)]
    pub entries: Vec<JournalLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narration: Option<String>,
}

impl JournalData {
    /// Two-line entry moving `amount` from `credit_code` to `debit_code`.
    pub fn balanced(debit_code: u32, credit_code: u32, amount: f64, narration: &str) -> Self {
        Self {
            entries: vec![
                JournalLine::debit(debit_code, amount),
                JournalLine::credit(credit_code, amount),
            ],
            narration: Some(narration.to_string()),
        }
    }

    pub fn total_debit(&self) -> f64 {
        self.entries.iter().map(|e| e.debit).sum()
    }

    pub fn total_credit(&self) -> f64 {
        self.entries.iter().map(|e| e.credit).sum()
    }

    pub fn is_balanced(&self) -> bool {
        (self.total_debit() - self.total_credit()).abs() < 0.005
    }
}

/// Payload for `convert_po_to_bill`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoConversionData {
    #[serde(default)]
    pub po_number: Option<String>,
}

/// Payload for `receive_payment` and `pay_bill`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentData {
    #[serde(default)]
    pub partner_name: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub method: Option<String>,
}

/// Payload for `run_payroll`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollData {
    /// Calendar month, 1-12.
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub year: Option<i32>,
}

/// Payload for `record_salary_payment`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryPaymentData {
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub salary_type: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
}

/// Payload for `create_lead`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Payload for `follow_up_client`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpData {
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Payload for `create_employee`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn line_item_label_prefers_product_name() {
        let item = LineItem {
            product_name: Some("Widget".into()),
            description: Some("blue widget".into()),
            ..Default::default()
        };
        assert_eq!(item.label(), Some("Widget"));

        let item = LineItem {
            description: Some("consulting".into()),
            ..Default::default()
        };
        assert_eq!(item.label(), Some("consulting"));
    }

    #[test]
    fn purchase_order_totals_follow_lines() {
        let mut po = PurchaseOrderData::default();
        let line = po.first_item_mut();
        line.quantity = Some(10.0);
        line.unit_price = Some(50.0);

        po.recompute_totals();

        assert_eq!(po.items[0].line_total, Some(500.0));
        assert_eq!(po.total, Some(500.0));
    }

    #[test]
    fn balanced_journal_has_matching_sides() {
        let journal = JournalData::balanced(accounts::CASH, accounts::CAPITAL, 500_000.0, "Capital");
        assert!(journal.is_balanced());
        assert_eq!(journal.entries[0].account_code, 101);
        assert_eq!(journal.entries[1].credit, 500_000.0);
    }

    #[test]
    fn draft_serializes_camel_case_with_untagged_data() {
        let draft = Draft::ready(
            Intent::ConvertPoToBill,
            DraftData::PoConversion(PoConversionData {
                po_number: Some("PO-2024-001".into()),
            }),
            "ok",
        );
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["intent"], "convert_po_to_bill");
        assert_eq!(value["readyToExecute"], true);
        assert_eq!(value["data"]["poNumber"], "PO-2024-001");
        assert!(value.get("missing").is_none());
    }

    #[test]
    fn chat_data_serializes_as_empty_object() {
        let value = serde_json::to_value(Draft::chat("hi")).unwrap();
        assert_eq!(value["data"], json!({}));
    }

    #[test]
    fn from_value_accepts_unit_price_alias_on_trade_lines() {
        let data = DraftData::from_value(
            Intent::CreateInvoice,
            json!({ "partnerName": "Acme", "items": [{ "productName": "Widget", "quantity": 2, "unitPrice": 5 }] }),
        )
        .unwrap();
        match data {
            DraftData::Trade(trade) => assert_eq!(trade.items[0].price, Some(5.0)),
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[test]
    fn fits_checks_payload_shape() {
        assert!(DraftData::Trade(TradeData::default()).fits(Intent::CreateBill));
        assert!(!DraftData::Trade(TradeData::default()).fits(Intent::PayBill));
    }
}
