//! Turn resolver: merges a follow-up answer into a parked draft.

use chrono::Utc;

use super::draft::DraftData;
use super::errors::ResolveError;
use super::extractors::{
    explicit_quantity, extract_bare_amount, extract_item_answer, extract_month,
    extract_name_answer, extract_payment_channel, extract_payment_method, extract_period,
    extract_po_number, extract_salary_type, extract_sku, extract_unit_price, extract_year,
};
use super::intent::Intent;
use super::pending::PendingDraft;
use super::status::MissingFieldStatus;
use super::text::{non_empty, title_case};

/// Answers that ask the engine to make up a SKU.
const AUTO_SKU_ANSWERS: &[&str] = &["auto", "autogen", "generate"];

/// Synthetic SKU derived from the current time.
pub fn generate_sku() -> String {
    format!("SKU-{}", Utc::now().timestamp_millis())
}

/// Overwrites `slot` only when the answer yielded a value.
fn fill<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

fn passthrough(answer: &str) -> Option<String> {
    non_empty(answer).map(|s| title_case(&s))
}

fn quantity_answer(answer: &str) -> Option<f64> {
    explicit_quantity(answer).or_else(|| extract_bare_amount(answer))
}

fn price_answer(answer: &str) -> Option<f64> {
    extract_unit_price(answer).or_else(|| extract_bare_amount(answer))
}

fn sku_answer(answer: &str) -> Option<String> {
    let trimmed = non_empty(answer)?;
    if AUTO_SKU_ANSWERS.contains(&trimmed.as_str()) {
        return Some(generate_sku());
    }
    extract_sku(&trimmed).or_else(|| {
        trimmed
            .split_whitespace()
            .next()
            .map(|token| token.to_uppercase())
    })
}

fn payment_method_answer(answer: &str) -> Option<String> {
    extract_payment_method(answer)
        .map(str::to_string)
        .or_else(|| passthrough(answer))
}

fn channel_answer(answer: &str) -> Option<String> {
    extract_payment_channel(answer)
        .map(str::to_string)
        .or_else(|| passthrough(answer))
}

fn po_number_answer(answer: &str) -> Option<String> {
    extract_po_number(answer).or_else(|| extract_po_number(&format!("po {}", answer.trim())))
}

/// Applies `answer` to the field `pending.status` was waiting for.
///
/// Unparseable answers leave the field untouched; the caller re-validates and
/// asks again. A status that does not fit the stored payload is an error.
pub fn merge_answer(
    pending: PendingDraft,
    answer: &str,
) -> Result<(Intent, DraftData), ResolveError> {
    use MissingFieldStatus::*;

    let PendingDraft {
        intent,
        mut data,
        status,
        ..
    } = pending;

    match (status, &mut data) {
        (WaitingForCustomer | WaitingForSupplier, DraftData::Trade(trade)) => {
            fill(&mut trade.partner_name, extract_name_answer(answer));
        }
        (WaitingForItem | WaitingForBillItem, DraftData::Trade(trade)) => {
            fill(&mut trade.first_item_mut().product_name, extract_item_answer(answer));
        }
        (WaitingForQuantity | WaitingForBillQuantity, DraftData::Trade(trade)) => {
            fill(&mut trade.first_item_mut().quantity, quantity_answer(answer));
        }
        (WaitingForPrice | WaitingForBillPrice, DraftData::Trade(trade)) => {
            fill(&mut trade.first_item_mut().price, price_answer(answer));
        }
        (WaitingForSku, DraftData::Trade(trade)) => {
            fill(&mut trade.first_item_mut().sku, sku_answer(answer));
        }
        (WaitingForPaymentMethod, DraftData::Trade(trade)) => {
            fill(&mut trade.payment_method, payment_method_answer(answer));
        }

        (WaitingForPoSupplier, DraftData::PurchaseOrder(po)) => {
            fill(&mut po.supplier_name, extract_name_answer(answer));
        }
        (WaitingForPoItem, DraftData::PurchaseOrder(po)) => {
            fill(&mut po.first_item_mut().product_name, extract_item_answer(answer));
        }
        (WaitingForPoQuantity, DraftData::PurchaseOrder(po)) => {
            fill(&mut po.first_item_mut().quantity, quantity_answer(answer));
        }
        (WaitingForPoPrice, DraftData::PurchaseOrder(po)) => {
            fill(&mut po.first_item_mut().unit_price, price_answer(answer));
        }
        (WaitingForSku, DraftData::PurchaseOrder(po)) => {
            fill(&mut po.first_item_mut().sku, sku_answer(answer));
        }

        (WaitingForPoNumber, DraftData::PoConversion(conversion)) => {
            fill(&mut conversion.po_number, po_number_answer(answer));
        }

        (WaitingForPayer | WaitingForPayee, DraftData::Payment(payment)) => {
            fill(&mut payment.partner_name, extract_name_answer(answer));
        }
        (WaitingForPaymentAmount, DraftData::Payment(payment)) => {
            fill(&mut payment.amount, extract_bare_amount(answer));
        }
        (WaitingForPaymentChannel, DraftData::Payment(payment)) => {
            fill(&mut payment.method, channel_answer(answer));
        }

        (WaitingForPayrollMonth, DraftData::Payroll(payroll)) => {
            fill(&mut payroll.month, extract_month(answer));
            if payroll.year.is_none() {
                payroll.year = extract_year(answer);
            }
        }
        (WaitingForPayrollYear, DraftData::Payroll(payroll)) => {
            fill(&mut payroll.year, extract_year(answer));
        }

        (WaitingForEmployee, DraftData::SalaryPayment(salary)) => {
            fill(&mut salary.employee_name, extract_name_answer(answer));
        }
        (WaitingForSalaryAmount, DraftData::SalaryPayment(salary)) => {
            fill(&mut salary.amount, extract_bare_amount(answer));
        }
        (WaitingForSalaryType, DraftData::SalaryPayment(salary)) => {
            let salary_type = extract_salary_type(answer)
                .map(str::to_string)
                .or_else(|| passthrough(answer));
            fill(&mut salary.salary_type, salary_type);
        }
        (WaitingForPaymentChannel, DraftData::SalaryPayment(salary)) => {
            fill(&mut salary.payment_method, channel_answer(answer));
        }
        (WaitingForSalaryPeriod, DraftData::SalaryPayment(salary)) => {
            let period = extract_period(answer)
                .map(|(period, _)| period)
                .or_else(|| passthrough(answer));
            fill(&mut salary.period, period);
        }

        (WaitingForLeadName, DraftData::Lead(lead)) => {
            fill(&mut lead.name, extract_name_answer(answer));
        }
        (WaitingForClientName, DraftData::FollowUp(follow_up)) => {
            fill(&mut follow_up.client_name, extract_name_answer(answer));
        }
        (WaitingForEmployeeName, DraftData::Employee(employee)) => {
            fill(&mut employee.name, extract_name_answer(answer));
        }

        _ => return Err(ResolveError::StatusNotApplicable { status, intent }),
    }

    Ok((intent, data))
}
