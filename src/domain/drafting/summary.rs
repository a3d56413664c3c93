//! Human-readable summaries for finalized drafts.

use super::draft::{DraftData, JournalData, PurchaseOrderData, TradeData};
use super::extractors::month_name;
use super::intent::Intent;
use super::text::format_amount;

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

fn amount(value: Option<f64>) -> String {
    value.map(format_amount).unwrap_or_else(|| "-".to_string())
}

/// Confirmation message for a draft that is ready to post.
pub fn ready_message(intent: Intent, data: &DraftData) -> String {
    match (intent, data) {
        (Intent::CreateInvoice, DraftData::Trade(trade)) => trade_message("Invoice", "for", trade),
        (Intent::CreateBill, DraftData::Trade(trade)) => trade_message("Bill", "from", trade),
        (Intent::CreatePurchaseOrder, DraftData::PurchaseOrder(po)) => purchase_order_message(po),
        (Intent::CreateJournal, DraftData::Journal(journal)) => journal_message(journal),
        (Intent::ConvertPoToBill, DraftData::PoConversion(conversion)) => format!(
            "Ready to convert {} into a bill for the received goods.",
            or_dash(conversion.po_number.as_deref())
        ),
        (Intent::ReceivePayment, DraftData::Payment(payment)) => format!(
            "Payment of {} received from {} by {} is ready to record.",
            amount(payment.amount),
            or_dash(payment.partner_name.as_deref()),
            or_dash(payment.method.as_deref())
        ),
        (Intent::PayBill, DraftData::Payment(payment)) => format!(
            "Payment of {} to {} by {} is ready to record.",
            amount(payment.amount),
            or_dash(payment.partner_name.as_deref()),
            or_dash(payment.method.as_deref())
        ),
        (Intent::RunPayroll, DraftData::Payroll(payroll)) => format!(
            "Payroll for {} {} is ready to run.",
            or_dash(payroll.month.and_then(month_name)),
            payroll.year.map(|y| y.to_string()).unwrap_or_default()
        ),
        (Intent::RecordSalaryPayment, DraftData::SalaryPayment(salary)) => format!(
            "{} salary of {} to {} for {} by {} is ready to record.",
            or_dash(salary.salary_type.as_deref()),
            amount(salary.amount),
            or_dash(salary.employee_name.as_deref()),
            or_dash(salary.period.as_deref()),
            or_dash(salary.payment_method.as_deref())
        ),
        (Intent::CreateLead, DraftData::Lead(lead)) => {
            format!("Lead {} is ready to be added.", or_dash(lead.name.as_deref()))
        }
        (Intent::FollowUpClient, DraftData::FollowUp(follow_up)) => format!(
            "Follow-up with {} is ready to be scheduled.",
            or_dash(follow_up.client_name.as_deref())
        ),
        (Intent::CreateEmployee, DraftData::Employee(employee)) => format!(
            "Employee {} is ready to be added.",
            or_dash(employee.name.as_deref())
        ),
        _ => format!("{} draft is ready.", intent),
    }
}

fn trade_message(document: &str, preposition: &str, trade: &TradeData) -> String {
    let partner = or_dash(trade.partner_name.as_deref());
    let method = or_dash(trade.payment_method.as_deref());
    match trade.first_item() {
        Some(item) => format!(
            "{} ready {} {}: {} x {} ({}) @ {} = {}, payment: {}.",
            document,
            preposition,
            partner,
            amount(item.quantity),
            or_dash(item.label()),
            or_dash(item.sku.as_deref()),
            amount(item.price),
            amount(item.line_total()),
            method
        ),
        None => format!("{} ready {} {}, payment: {}.", document, preposition, partner, method),
    }
}

/// Itemized purchase-order summary. Expects totals to be computed already.
fn purchase_order_message(po: &PurchaseOrderData) -> String {
    let mut lines = vec![format!(
        "Purchase order ready for {}:",
        or_dash(po.supplier_name.as_deref())
    )];
    for line in &po.items {
        lines.push(format!(
            "- {} (SKU {}): {} x {} = {}",
            or_dash(line.product_name.as_deref()),
            or_dash(line.sku.as_deref()),
            amount(line.quantity),
            amount(line.unit_price),
            amount(line.line_total)
        ));
    }
    lines.push(format!("PO total: {}", amount(po.total)));
    if let Some(date) = &po.expected_delivery_date {
        lines.push(format!("Expected delivery: {}", date));
    }
    lines.push(
        "No accounting or inventory postings are made until the goods are received.".to_string(),
    );
    if po.expected_delivery_date.is_none() {
        lines.push("Tip: you can add an expected delivery date (YYYY-MM-DD).".to_string());
    }
    lines.join("\n")
}

fn journal_message(journal: &JournalData) -> String {
    let sides: Vec<String> = journal
        .entries
        .iter()
        .map(|entry| {
            if entry.debit > 0.0 {
                format!("Dr {} ({}) {}", entry.account_name, entry.account_code, format_amount(entry.debit))
            } else {
                format!("Cr {} ({}) {}", entry.account_name, entry.account_code, format_amount(entry.credit))
            }
        })
        .collect();
    match &journal.narration {
        Some(narration) => format!("Journal entry ready: {}. {}", sides.join("; "), narration),
        None => format!("Journal entry ready: {}.", sides.join("; ")),
    }
}
