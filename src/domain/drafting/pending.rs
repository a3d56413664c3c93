//! Parked drafts awaiting one more answer from the same session.

use serde::Serialize;

use super::draft::DraftData;
use super::intent::Intent;
use super::requirements::RequiredField;
use super::status::MissingFieldStatus;

/// Running summary of what has been captured so far.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DraftSummary {
    pub item: Option<String>,
    pub quantity: Option<f64>,
    pub unit_price: Option<f64>,
    pub total: Option<f64>,
}

impl DraftSummary {
    pub fn of(data: &DraftData) -> Self {
        match data {
            DraftData::Trade(trade) => match trade.first_item() {
                Some(item) => Self {
                    item: item.label().map(str::to_string),
                    quantity: item.quantity,
                    unit_price: item.price,
                    total: item.line_total(),
                },
                None => Self::default(),
            },
            DraftData::PurchaseOrder(po) => match po.items.first() {
                Some(line) => Self {
                    item: line.product_name.clone(),
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                    total: line.quantity.zip(line.unit_price).map(|(q, p)| q * p),
                },
                None => Self::default(),
            },
            DraftData::Payment(payment) => Self {
                item: payment.partner_name.clone(),
                total: payment.amount,
                ..Self::default()
            },
            DraftData::SalaryPayment(salary) => Self {
                item: salary.employee_name.clone(),
                total: salary.amount,
                ..Self::default()
            },
            DraftData::Journal(journal) if !journal.entries.is_empty() => Self {
                item: journal.narration.clone(),
                total: Some(journal.total_debit()),
                ..Self::default()
            },
            _ => Self::default(),
        }
    }
}

/// Incomplete draft parked for a session, read once on the next message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PendingDraft {
    pub intent: Intent,
    pub data: DraftData,
    pub status: MissingFieldStatus,
    pub missing: Vec<RequiredField>,
    pub summary: DraftSummary,
}

impl PendingDraft {
    pub fn new(
        intent: Intent,
        data: DraftData,
        status: MissingFieldStatus,
        missing: Vec<RequiredField>,
    ) -> Self {
        let summary = DraftSummary::of(&data);
        Self {
            intent,
            data,
            status,
            missing,
            summary,
        }
    }
}
