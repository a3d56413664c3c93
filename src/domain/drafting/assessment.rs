//! Validation outcome for a candidate draft.

use super::draft::{Draft, DraftData};
use super::hints::TenantHints;
use super::intent::Intent;
use super::pending::PendingDraft;
use super::requirements::missing_fields;
use super::status::MissingFieldStatus;
use super::summary::ready_message;

/// What a validated candidate turns into.
#[derive(Debug, Clone, PartialEq)]
pub enum Assessment {
    /// Every required field is present.
    Ready(Draft),
    /// A question was asked; `pending` must be stored for the session.
    Parked { draft: Draft, pending: PendingDraft },
    /// Fields are missing but none can be asked about one at a time.
    Discarded(Draft),
}

impl Assessment {
    pub fn draft(&self) -> &Draft {
        match self {
            Assessment::Ready(draft) | Assessment::Discarded(draft) => draft,
            Assessment::Parked { draft, .. } => draft,
        }
    }

    pub fn into_draft(self) -> Draft {
        match self {
            Assessment::Ready(draft) | Assessment::Discarded(draft) => draft,
            Assessment::Parked { draft, .. } => draft,
        }
    }
}

/// Runs the requirement validator over a candidate and decides whether it is
/// ready, should be parked behind a question, or must be discarded.
pub fn assess(intent: Intent, mut data: DraftData, hints: &TenantHints) -> Assessment {
    if let DraftData::PurchaseOrder(po) = &mut data {
        po.recompute_totals();
    }

    let missing = missing_fields(intent, &data);
    let Some(first) = missing.first().copied() else {
        let message = ready_message(intent, &data);
        return Assessment::Ready(Draft::ready(intent, data, message));
    };

    match MissingFieldStatus::for_field(intent, first) {
        Some(status) => {
            let pending = PendingDraft::new(intent, data.clone(), status, missing.clone());
            let question = status.question(&pending.summary, hints);
            let draft = Draft::incomplete(intent, data, question)
                .with_status(status)
                .with_missing(missing);
            Assessment::Parked { draft, pending }
        }
        None => {
            let labels: Vec<&str> = missing.iter().map(|f| f.label()).collect();
            let message = format!(
                "Some required information is missing ({}). Please restate the full transaction.",
                labels.join(", ")
            );
            Assessment::Discarded(Draft::incomplete(intent, data, message).with_missing(missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::drafting::draft::{
        EmployeeData, FollowUpData, JournalData, LeadData, LineItem, PaymentData, PayrollData,
        PoConversionData, PurchaseOrderData, PurchaseOrderLine, SalaryPaymentData, TradeData,
    };
    use crate::domain::drafting::requirements::required_fields;
    use crate::domain::drafting::requirements::RequiredField;

    fn invoice_without_sku() -> DraftData {
        DraftData::Trade(TradeData {
            partner_name: Some("Acme".into()),
            items: vec![LineItem {
                product_name: Some("Widgets".into()),
                quantity: Some(10.0),
                price: Some(100.0),
                ..Default::default()
            }],
            payment_method: Some("Cash".into()),
        })
    }

    #[test]
    fn complete_data_is_ready() {
        let mut data = invoice_without_sku();
        if let DraftData::Trade(trade) = &mut data {
            trade.items[0].sku = Some("SKU-1".into());
        }
        let assessment = assess(Intent::CreateInvoice, data, &TenantHints::empty());
        let draft = assessment.draft();
        assert!(draft.ready_to_execute);
        assert!(draft.missing.is_empty());
        assert!(draft.status.is_none());
    }

    #[test]
    fn first_missing_field_parks_the_draft() {
        match assess(Intent::CreateInvoice, invoice_without_sku(), &TenantHints::empty()) {
            Assessment::Parked { draft, pending } => {
                assert!(!draft.ready_to_execute);
                assert_eq!(draft.status, Some(MissingFieldStatus::WaitingForSku));
                assert_eq!(pending.status, MissingFieldStatus::WaitingForSku);
                assert_eq!(pending.missing, vec![RequiredField::ItemSku]);
                assert_eq!(pending.summary.total, Some(1000.0));
            }
            other => panic!("expected parked draft, got {:?}", other),
        }
    }

    #[test]
    fn unmapped_field_discards() {
        let assessment = assess(
            Intent::CreateJournal,
            DraftData::Journal(JournalData::default()),
            &TenantHints::empty(),
        );
        match assessment {
            Assessment::Discarded(draft) => {
                assert!(!draft.ready_to_execute);
                assert!(draft.message.contains("entries"));
            }
            other => panic!("expected discard, got {:?}", other),
        }
    }

    #[test]
    fn purchase_order_totals_are_computed_before_finalizing() {
        let data = DraftData::PurchaseOrder(PurchaseOrderData {
            supplier_name: Some("Ikea".into()),
            items: vec![PurchaseOrderLine {
                product_name: Some("Chairs".into()),
                quantity: Some(10.0),
                unit_price: Some(50.0),
                sku: Some("CH-1".into()),
                line_total: None,
            }],
            ..Default::default()
        });
        let draft = assess(Intent::CreatePurchaseOrder, data, &TenantHints::empty()).into_draft();
        match draft.data {
            DraftData::PurchaseOrder(po) => {
                assert_eq!(po.items[0].line_total, Some(500.0));
                assert_eq!(po.total, Some(500.0));
            }
            other => panic!("unexpected payload {:?}", other),
        }
    }

    fn complete_trade() -> DraftData {
        DraftData::Trade(TradeData {
            partner_name: Some("Acme".into()),
            items: vec![LineItem {
                product_name: Some("Widgets".into()),
                description: None,
                quantity: Some(10.0),
                price: Some(100.0),
                sku: Some("SKU-1".into()),
            }],
            payment_method: Some("Cash".into()),
        })
    }

    fn complete_payment() -> DraftData {
        DraftData::Payment(PaymentData {
            partner_name: Some("Acme".into()),
            amount: Some(5000.0),
            method: Some("Cheque".into()),
        })
    }

    fn complete_payloads() -> Vec<(Intent, DraftData)> {
        vec![
            (Intent::CreateInvoice, complete_trade()),
            (Intent::CreateBill, complete_trade()),
            (
                Intent::CreatePurchaseOrder,
                DraftData::PurchaseOrder(PurchaseOrderData {
                    supplier_name: Some("Ikea".into()),
                    items: vec![PurchaseOrderLine {
                        product_name: Some("Chairs".into()),
                        quantity: Some(10.0),
                        unit_price: Some(50.0),
                        sku: Some("CH-1".into()),
                        line_total: None,
                    }],
                    expected_delivery_date: None,
                    total: None,
                }),
            ),
            (
                Intent::ConvertPoToBill,
                DraftData::PoConversion(PoConversionData {
                    po_number: Some("PO-2024-001".into()),
                }),
            ),
            (Intent::ReceivePayment, complete_payment()),
            (Intent::PayBill, complete_payment()),
            (
                Intent::RunPayroll,
                DraftData::Payroll(PayrollData {
                    month: Some(3),
                    year: Some(2025),
                }),
            ),
            (
                Intent::RecordSalaryPayment,
                DraftData::SalaryPayment(SalaryPaymentData {
                    employee_name: Some("Ali".into()),
                    amount: Some(50_000.0),
                    salary_type: Some("Monthly".into()),
                    payment_method: Some("Bank Transfer".into()),
                    period: Some("March 2025".into()),
                }),
            ),
            (
                Intent::CreateLead,
                DraftData::Lead(LeadData {
                    name: Some("Sara Khan".into()),
                    notes: None,
                }),
            ),
            (
                Intent::FollowUpClient,
                DraftData::FollowUp(FollowUpData {
                    client_name: Some("Acme".into()),
                    note: None,
                }),
            ),
            (
                Intent::CreateEmployee,
                DraftData::Employee(EmployeeData {
                    name: Some("Ali Raza".into()),
                    salary: None,
                }),
            ),
        ]
    }

    /// Clears one required field from an otherwise complete payload.
    fn without(data: &DraftData, field: RequiredField) -> DraftData {
        use RequiredField as F;

        let mut data = data.clone();
        match &mut data {
            DraftData::Trade(trade) => match field {
                F::PartnerName => trade.partner_name = None,
                F::ItemName => trade.items[0].product_name = None,
                F::ItemQuantity => trade.items[0].quantity = None,
                F::ItemPrice => trade.items[0].price = None,
                F::ItemSku => trade.items[0].sku = None,
                F::PaymentMethod => trade.payment_method = None,
                other => panic!("{} is not a trade field", other),
            },
            DraftData::PurchaseOrder(po) => match field {
                F::SupplierName => po.supplier_name = None,
                F::ItemName => po.items[0].product_name = None,
                F::ItemQuantity => po.items[0].quantity = None,
                F::ItemUnitPrice => po.items[0].unit_price = None,
                F::ItemSku => po.items[0].sku = None,
                other => panic!("{} is not a purchase order field", other),
            },
            DraftData::PoConversion(conversion) => conversion.po_number = None,
            DraftData::Payment(payment) => match field {
                F::PartnerName => payment.partner_name = None,
                F::Amount => payment.amount = None,
                F::Method => payment.method = None,
                other => panic!("{} is not a payment field", other),
            },
            DraftData::Payroll(payroll) => match field {
                F::Month => payroll.month = None,
                F::Year => payroll.year = None,
                other => panic!("{} is not a payroll field", other),
            },
            DraftData::SalaryPayment(salary) => match field {
                F::EmployeeName => salary.employee_name = None,
                F::Amount => salary.amount = None,
                F::SalaryType => salary.salary_type = None,
                F::PaymentMethod => salary.payment_method = None,
                F::Period => salary.period = None,
                other => panic!("{} is not a salary field", other),
            },
            DraftData::Lead(lead) => lead.name = None,
            DraftData::FollowUp(follow_up) => follow_up.client_name = None,
            DraftData::Employee(employee) => employee.name = None,
            other => panic!("no required fields on {:?}", other),
        }
        data
    }

    #[test]
    fn fully_specified_payloads_are_ready() {
        for (intent, data) in complete_payloads() {
            match assess(intent, data, &TenantHints::empty()) {
                Assessment::Ready(draft) => {
                    assert!(draft.ready_to_execute, "intent {}", intent);
                    assert!(draft.missing.is_empty(), "intent {}", intent);
                }
                other => panic!("expected {} to be ready, got {:?}", intent, other),
            }
        }
    }

    #[test]
    fn each_dropped_field_parks_with_its_own_status() {
        for (intent, data) in complete_payloads() {
            for &field in required_fields(intent) {
                let expected = MissingFieldStatus::for_field(intent, field)
                    .unwrap_or_else(|| panic!("no status for {} on {}", field, intent));

                match assess(intent, without(&data, field), &TenantHints::empty()) {
                    Assessment::Parked { draft, pending } => {
                        assert_eq!(draft.status, Some(expected), "{} on {}", field, intent);
                        assert_eq!(pending.status, expected, "{} on {}", field, intent);
                        assert_eq!(pending.missing, vec![field], "{} on {}", field, intent);
                    }
                    other => panic!("expected {} on {} to park, got {:?}", field, intent, other),
                }
            }
        }
    }
}
