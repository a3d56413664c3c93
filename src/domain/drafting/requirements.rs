//! Requirement validator: which mandatory fields a draft still lacks.

use serde::Serialize;
use std::fmt;

use super::draft::{DraftData, LineItem};
use super::intent::Intent;

/// A mandatory draft field, serialized as its data path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RequiredField {
    #[serde(rename = "partnerName")]
    PartnerName,
    #[serde(rename = "items[0].productName")]
    ItemName,
    #[serde(rename = "items[0].quantity")]
    ItemQuantity,
    #[serde(rename = "items[0].price")]
    ItemPrice,
    #[serde(rename = "items[0].unitPrice")]
    ItemUnitPrice,
    #[serde(rename = "items[0].sku")]
    ItemSku,
    #[serde(rename = "paymentMethod")]
    PaymentMethod,
    #[serde(rename = "supplierName")]
    SupplierName,
    #[serde(rename = "amount")]
    Amount,
    #[serde(rename = "method")]
    Method,
    #[serde(rename = "month")]
    Month,
    #[serde(rename = "year")]
    Year,
    #[serde(rename = "employeeName")]
    EmployeeName,
    #[serde(rename = "salaryType")]
    SalaryType,
    #[serde(rename = "period")]
    Period,
    #[serde(rename = "poNumber")]
    PoNumber,
    #[serde(rename = "entries")]
    Entries,
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "clientName")]
    ClientName,
}

impl RequiredField {
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::PartnerName => "partnerName",
            RequiredField::ItemName => "items[0].productName",
            RequiredField::ItemQuantity => "items[0].quantity",
            RequiredField::ItemPrice => "items[0].price",
            RequiredField::ItemUnitPrice => "items[0].unitPrice",
            RequiredField::ItemSku => "items[0].sku",
            RequiredField::PaymentMethod => "paymentMethod",
            RequiredField::SupplierName => "supplierName",
            RequiredField::Amount => "amount",
            RequiredField::Method => "method",
            RequiredField::Month => "month",
            RequiredField::Year => "year",
            RequiredField::EmployeeName => "employeeName",
            RequiredField::SalaryType => "salaryType",
            RequiredField::Period => "period",
            RequiredField::PoNumber => "poNumber",
            RequiredField::Entries => "entries",
            RequiredField::Name => "name",
            RequiredField::ClientName => "clientName",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Required fields for `intent`, in check order.
pub fn required_fields(intent: Intent) -> &'static [RequiredField] {
    use RequiredField::*;
    match intent {
        Intent::CreateInvoice | Intent::CreateBill => {
            &[PartnerName, ItemName, ItemQuantity, ItemPrice, ItemSku, PaymentMethod]
        }
        Intent::CreatePurchaseOrder => {
            &[SupplierName, ItemName, ItemQuantity, ItemUnitPrice, ItemSku]
        }
        Intent::ReceivePayment | Intent::PayBill => &[PartnerName, Amount, Method],
        Intent::RunPayroll => &[Month, Year],
        Intent::RecordSalaryPayment => {
            &[EmployeeName, Amount, SalaryType, PaymentMethod, Period]
        }
        Intent::ConvertPoToBill => &[PoNumber],
        Intent::CreateJournal => &[Entries],
        Intent::CreateLead | Intent::CreateEmployee => &[Name],
        Intent::FollowUpClient => &[ClientName],
        Intent::GeneralChat => &[],
    }
}

fn blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |s| s.trim().is_empty())
}

fn not_positive(value: Option<f64>) -> bool {
    !matches!(value, Some(v) if v.is_finite() && v > 0.0)
}

fn check(missing: &mut Vec<RequiredField>, absent: bool, field: RequiredField) {
    if absent {
        missing.push(field);
    }
}

/// Ordered list of required fields `data` lacks for `intent`.
///
/// A payload of the wrong shape for the intent lacks every required field.
pub fn missing_fields(intent: Intent, data: &DraftData) -> Vec<RequiredField> {
    use RequiredField::*;

    let mut missing = Vec::new();
    match (intent, data) {
        (Intent::CreateInvoice | Intent::CreateBill, DraftData::Trade(trade)) => {
            let item = trade.first_item();
            check(&mut missing, blank(&trade.partner_name), PartnerName);
            check(&mut missing, item.and_then(LineItem::label).is_none(), ItemName);
            check(&mut missing, not_positive(item.and_then(|i| i.quantity)), ItemQuantity);
            check(&mut missing, not_positive(item.and_then(|i| i.price)), ItemPrice);
            check(&mut missing, item.map_or(true, |i| blank(&i.sku)), ItemSku);
            check(&mut missing, blank(&trade.payment_method), PaymentMethod);
        }
        (Intent::CreatePurchaseOrder, DraftData::PurchaseOrder(po)) => {
            let line = po.items.first();
            check(&mut missing, blank(&po.supplier_name), SupplierName);
            check(&mut missing, line.map_or(true, |l| blank(&l.product_name)), ItemName);
            check(&mut missing, not_positive(line.and_then(|l| l.quantity)), ItemQuantity);
            check(&mut missing, not_positive(line.and_then(|l| l.unit_price)), ItemUnitPrice);
            check(&mut missing, line.map_or(true, |l| blank(&l.sku)), ItemSku);
        }
        (Intent::ReceivePayment | Intent::PayBill, DraftData::Payment(payment)) => {
            check(&mut missing, blank(&payment.partner_name), PartnerName);
            check(&mut missing, not_positive(payment.amount), Amount);
            check(&mut missing, blank(&payment.method), Method);
        }
        (Intent::RunPayroll, DraftData::Payroll(payroll)) => {
            check(&mut missing, !matches!(payroll.month, Some(1..=12)), Month);
            check(&mut missing, payroll.year.is_none(), Year);
        }
        (Intent::RecordSalaryPayment, DraftData::SalaryPayment(salary)) => {
            check(&mut missing, blank(&salary.employee_name), EmployeeName);
            check(&mut missing, not_positive(salary.amount), Amount);
            check(&mut missing, blank(&salary.salary_type), SalaryType);
            check(&mut missing, blank(&salary.payment_method), PaymentMethod);
            check(&mut missing, blank(&salary.period), Period);
        }
        (Intent::ConvertPoToBill, DraftData::PoConversion(conversion)) => {
            check(&mut missing, blank(&conversion.po_number), PoNumber);
        }
        (Intent::CreateJournal, DraftData::Journal(journal)) => {
            check(&mut missing, journal.entries.is_empty(), Entries);
        }
        (Intent::CreateLead, DraftData::Lead(lead)) => {
            check(&mut missing, blank(&lead.name), Name);
        }
        (Intent::FollowUpClient, DraftData::FollowUp(follow_up)) => {
            check(&mut missing, blank(&follow_up.client_name), ClientName);
        }
        (Intent::CreateEmployee, DraftData::Employee(employee)) => {
            check(&mut missing, blank(&employee.name), Name);
        }
        (Intent::GeneralChat, _) => {}
        (intent, _) => missing.extend_from_slice(required_fields(intent)),
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::drafting::draft::{
        PaymentData, PayrollData, PurchaseOrderData, PurchaseOrderLine, TradeData,
    };
    use proptest::prelude::*;

    fn complete_trade() -> TradeData {
        TradeData {
            partner_name: Some("Acme".into()),
            items: vec![LineItem {
                product_name: Some("Widgets".into()),
                description: None,
                quantity: Some(10.0),
                price: Some(100.0),
                sku: Some("SKU-1".into()),
            }],
            payment_method: Some("Cash".into()),
        }
    }

    #[test]
    fn complete_invoice_has_nothing_missing() {
        let data = DraftData::Trade(complete_trade());
        assert!(missing_fields(Intent::CreateInvoice, &data).is_empty());
        assert!(missing_fields(Intent::CreateBill, &data).is_empty());
    }

    #[test]
    fn invoice_fields_are_checked_in_order() {
        let data = DraftData::Trade(TradeData::default());
        assert_eq!(
            missing_fields(Intent::CreateInvoice, &data),
            required_fields(Intent::CreateInvoice).to_vec()
        );
    }

    #[test]
    fn description_satisfies_item_name() {
        let mut trade = complete_trade();
        trade.items[0].product_name = None;
        trade.items[0].description = Some("consulting".into());
        assert!(missing_fields(Intent::CreateInvoice, &DraftData::Trade(trade)).is_empty());
    }

    #[test]
    fn zero_quantity_and_blank_sku_are_missing() {
        let mut trade = complete_trade();
        trade.items[0].quantity = Some(0.0);
        trade.items[0].sku = Some("  ".into());
        assert_eq!(
            missing_fields(Intent::CreateInvoice, &DraftData::Trade(trade)),
            vec![RequiredField::ItemQuantity, RequiredField::ItemSku]
        );
    }

    #[test]
    fn purchase_order_uses_unit_price() {
        let po = PurchaseOrderData {
            supplier_name: Some("Ikea".into()),
            items: vec![PurchaseOrderLine {
                product_name: Some("Chairs".into()),
                quantity: Some(10.0),
                unit_price: None,
                sku: Some("CH-1".into()),
                line_total: None,
            }],
            ..Default::default()
        };
        assert_eq!(
            missing_fields(Intent::CreatePurchaseOrder, &DraftData::PurchaseOrder(po)),
            vec![RequiredField::ItemUnitPrice]
        );
    }

    #[test]
    fn payroll_month_must_be_calendar_month() {
        let data = DraftData::Payroll(PayrollData { month: Some(13), year: Some(2025) });
        assert_eq!(missing_fields(Intent::RunPayroll, &data), vec![RequiredField::Month]);
    }

    #[test]
    fn wrong_payload_shape_lacks_everything() {
        let data = DraftData::Payment(PaymentData::default());
        assert_eq!(
            missing_fields(Intent::CreatePurchaseOrder, &data),
            required_fields(Intent::CreatePurchaseOrder).to_vec()
        );
    }

    #[test]
    fn general_chat_requires_nothing() {
        assert!(missing_fields(Intent::GeneralChat, &DraftData::Chat {}).is_empty());
    }

    #[test]
    fn fields_serialize_as_data_paths() {
        let value = serde_json::to_value(vec![RequiredField::PartnerName, RequiredField::ItemSku]).unwrap();
        assert_eq!(value, serde_json::json!(["partnerName", "items[0].sku"]));
        assert_eq!(RequiredField::ItemUnitPrice.to_string(), "items[0].unitPrice");
    }

    fn arb_text() -> impl Strategy<Value = Option<String>> {
        prop::option::of(prop_oneof![Just(String::new()), Just(" ".to_string()), "[a-z]{1,8}"])
    }

    fn arb_number() -> impl Strategy<Value = Option<f64>> {
        prop::option::of(-5.0f64..500.0)
    }

    prop_compose! {
        fn arb_trade()(
            partner_name in arb_text(),
            product_name in arb_text(),
            quantity in arb_number(),
            price in arb_number(),
            sku in arb_text(),
            payment_method in arb_text(),
            with_item in any::<bool>(),
        ) -> TradeData {
            let items = if with_item {
                vec![LineItem { product_name, description: None, quantity, price, sku }]
            } else {
                Vec::new()
            };
            TradeData { partner_name, items, payment_method }
        }
    }

    proptest! {
        #[test]
        fn revalidation_is_idempotent(trade in arb_trade()) {
            let data = DraftData::Trade(trade);
            let first = missing_fields(Intent::CreateBill, &data);
            let second = missing_fields(Intent::CreateBill, &data);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn missing_fields_follow_declared_order(trade in arb_trade()) {
            let data = DraftData::Trade(trade);
            let missing = missing_fields(Intent::CreateInvoice, &data);
            let order = required_fields(Intent::CreateInvoice);
            let positions: Vec<usize> = missing
                .iter()
                .map(|f| order.iter().position(|o| o == f).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
