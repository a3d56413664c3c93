//! Missing-field status: the single field a parked draft is waiting for.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::hints::{known_suffix, TenantHints};
use super::intent::Intent;
use super::pending::DraftSummary;
use super::requirements::RequiredField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingFieldStatus {
    // invoice
    WaitingForCustomer,
    WaitingForItem,
    WaitingForQuantity,
    WaitingForPrice,
    // bill
    WaitingForSupplier,
    WaitingForBillItem,
    WaitingForBillQuantity,
    WaitingForBillPrice,
    // invoice, bill and purchase order
    WaitingForSku,
    WaitingForPaymentMethod,
    // purchase order
    WaitingForPoSupplier,
    WaitingForPoItem,
    WaitingForPoQuantity,
    WaitingForPoPrice,
    WaitingForPoNumber,
    // payments
    WaitingForPayer,
    WaitingForPayee,
    WaitingForPaymentAmount,
    WaitingForPaymentChannel,
    // payroll
    WaitingForPayrollMonth,
    WaitingForPayrollYear,
    WaitingForEmployee,
    WaitingForSalaryAmount,
    WaitingForSalaryType,
    WaitingForSalaryPeriod,
    // crm and people
    WaitingForLeadName,
    WaitingForClientName,
    WaitingForEmployeeName,
}

impl MissingFieldStatus {
    /// Status for the first missing field of `intent`, when that pairing is
    /// one the engine knows how to ask about.
    pub fn for_field(intent: Intent, field: RequiredField) -> Option<Self> {
        use MissingFieldStatus::*;
        use RequiredField as F;

        let status = match (intent, field) {
            (Intent::CreateInvoice, F::PartnerName) => WaitingForCustomer,
            (Intent::CreateInvoice, F::ItemName) => WaitingForItem,
            (Intent::CreateInvoice, F::ItemQuantity) => WaitingForQuantity,
            (Intent::CreateInvoice, F::ItemPrice) => WaitingForPrice,

            (Intent::CreateBill, F::PartnerName) => WaitingForSupplier,
            (Intent::CreateBill, F::ItemName) => WaitingForBillItem,
            (Intent::CreateBill, F::ItemQuantity) => WaitingForBillQuantity,
            (Intent::CreateBill, F::ItemPrice) => WaitingForBillPrice,

            (Intent::CreateInvoice | Intent::CreateBill, F::ItemSku) => WaitingForSku,
            (Intent::CreateInvoice | Intent::CreateBill, F::PaymentMethod) => {
                WaitingForPaymentMethod
            }

            (Intent::CreatePurchaseOrder, F::SupplierName) => WaitingForPoSupplier,
            (Intent::CreatePurchaseOrder, F::ItemName) => WaitingForPoItem,
            (Intent::CreatePurchaseOrder, F::ItemQuantity) => WaitingForPoQuantity,
            (Intent::CreatePurchaseOrder, F::ItemUnitPrice) => WaitingForPoPrice,
            (Intent::CreatePurchaseOrder, F::ItemSku) => WaitingForSku,

            (Intent::ConvertPoToBill, F::PoNumber) => WaitingForPoNumber,

            (Intent::ReceivePayment, F::PartnerName) => WaitingForPayer,
            (Intent::PayBill, F::PartnerName) => WaitingForPayee,
            (Intent::ReceivePayment | Intent::PayBill, F::Amount) => WaitingForPaymentAmount,
            (Intent::ReceivePayment | Intent::PayBill, F::Method) => WaitingForPaymentChannel,

            (Intent::RunPayroll, F::Month) => WaitingForPayrollMonth,
            (Intent::RunPayroll, F::Year) => WaitingForPayrollYear,

            (Intent::RecordSalaryPayment, F::EmployeeName) => WaitingForEmployee,
            (Intent::RecordSalaryPayment, F::Amount) => WaitingForSalaryAmount,
            (Intent::RecordSalaryPayment, F::SalaryType) => WaitingForSalaryType,
            (Intent::RecordSalaryPayment, F::PaymentMethod) => WaitingForPaymentChannel,
            (Intent::RecordSalaryPayment, F::Period) => WaitingForSalaryPeriod,

            (Intent::CreateLead, F::Name) => WaitingForLeadName,
            (Intent::FollowUpClient, F::ClientName) => WaitingForClientName,
            (Intent::CreateEmployee, F::Name) => WaitingForEmployeeName,

            _ => return None,
        };
        Some(status)
    }

    pub fn as_str(&self) -> &'static str {
        use MissingFieldStatus::*;
        match self {
            WaitingForCustomer => "waiting_for_customer",
            WaitingForItem => "waiting_for_item",
            WaitingForQuantity => "waiting_for_quantity",
            WaitingForPrice => "waiting_for_price",
            WaitingForSupplier => "waiting_for_supplier",
            WaitingForBillItem => "waiting_for_bill_item",
            WaitingForBillQuantity => "waiting_for_bill_quantity",
            WaitingForBillPrice => "waiting_for_bill_price",
            WaitingForSku => "waiting_for_sku",
            WaitingForPaymentMethod => "waiting_for_payment_method",
            WaitingForPoSupplier => "waiting_for_po_supplier",
            WaitingForPoItem => "waiting_for_po_item",
            WaitingForPoQuantity => "waiting_for_po_quantity",
            WaitingForPoPrice => "waiting_for_po_price",
            WaitingForPoNumber => "waiting_for_po_number",
            WaitingForPayer => "waiting_for_payer",
            WaitingForPayee => "waiting_for_payee",
            WaitingForPaymentAmount => "waiting_for_payment_amount",
            WaitingForPaymentChannel => "waiting_for_payment_channel",
            WaitingForPayrollMonth => "waiting_for_payroll_month",
            WaitingForPayrollYear => "waiting_for_payroll_year",
            WaitingForEmployee => "waiting_for_employee",
            WaitingForSalaryAmount => "waiting_for_salary_amount",
            WaitingForSalaryType => "waiting_for_salary_type",
            WaitingForSalaryPeriod => "waiting_for_salary_period",
            WaitingForLeadName => "waiting_for_lead_name",
            WaitingForClientName => "waiting_for_client_name",
            WaitingForEmployeeName => "waiting_for_employee_name",
        }
    }

    /// User-facing question for this status, with tenant names appended
    /// where they help the user answer.
    pub fn question(&self, summary: &DraftSummary, hints: &TenantHints) -> String {
        use MissingFieldStatus::*;

        let item = summary.item.as_deref().unwrap_or("this item");
        match self {
            WaitingForCustomer => format!(
                "Who is the customer for this invoice?{}",
                known_suffix("customers", &hints.customers)
            ),
            WaitingForItem => format!(
                "Which product or service did you sell?{}",
                known_suffix("products", &hints.products)
            ),
            WaitingForQuantity => format!("How many units of {} did you sell?", item),
            WaitingForPrice => format!("What is the selling price per unit of {}?", item),
            WaitingForSupplier => format!(
                "Which vendor is this bill from?{}",
                known_suffix("vendors", &hints.vendors)
            ),
            WaitingForBillItem => format!(
                "What did you purchase?{}",
                known_suffix("products", &hints.products)
            ),
            WaitingForBillQuantity => format!("How many units of {} did you purchase?", item),
            WaitingForBillPrice => format!("What was the cost per unit of {}?", item),
            WaitingForSku => format!(
                "What is the SKU for {}? Reply 'auto' to generate one.",
                item
            ),
            WaitingForPaymentMethod => "Was this paid in cash or on credit?".to_string(),
            WaitingForPoSupplier => format!(
                "Which supplier should this purchase order go to?{}",
                known_suffix("vendors", &hints.vendors)
            ),
            WaitingForPoItem => format!(
                "Which item do you want to order?{}",
                known_suffix("products", &hints.products)
            ),
            WaitingForPoQuantity => format!("How many units of {} should be ordered?", item),
            WaitingForPoPrice => format!("What is the agreed unit price for {}?", item),
            WaitingForPoNumber => {
                "Which purchase order were the goods received against? (e.g. PO-2024-001)"
                    .to_string()
            }
            WaitingForPayer => format!(
                "Which customer made this payment?{}",
                known_suffix("customers", &hints.customers)
            ),
            WaitingForPayee => format!(
                "Which vendor are you paying?{}",
                known_suffix("vendors", &hints.vendors)
            ),
            WaitingForPaymentAmount => "What is the payment amount?".to_string(),
            WaitingForPaymentChannel => {
                "How was it paid? (cash, bank transfer, cheque or card)".to_string()
            }
            WaitingForPayrollMonth => "Which month should payroll be run for?".to_string(),
            WaitingForPayrollYear => "Which year is this payroll for?".to_string(),
            WaitingForEmployee => format!(
                "Which employee is this salary for?{}",
                known_suffix("employees", &hints.employees)
            ),
            WaitingForSalaryAmount => "How much salary was paid?".to_string(),
            WaitingForSalaryType => "Is this a monthly salary, an advance or a bonus?".to_string(),
            WaitingForSalaryPeriod => {
                "Which period does this salary cover? (e.g. March 2025)".to_string()
            }
            WaitingForLeadName => "What is the name of the lead?".to_string(),
            WaitingForClientName => format!(
                "Which client should I set the follow-up for?{}",
                known_suffix("customers", &hints.customers)
            ),
            WaitingForEmployeeName => "What is the new employee's name?".to_string(),
        }
    }
}

impl fmt::Display for MissingFieldStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
