//! System prompt for model-assisted classification.

use super::hints::TenantHints;
use super::intent::Intent;

const INSTRUCTIONS: &str = r#"You turn short business messages into draft accounting transactions.
Reply with a single JSON object and nothing else:
{"intent": "<intent>", "confidence": <0..1>, "data": {...}, "message": "<short reply>"}

Data shapes by intent:
- create_invoice / create_bill: {"partnerName", "items": [{"productName", "quantity", "price", "sku"}], "paymentMethod": "Cash" | "Credit"}
- create_purchase_order: {"supplierName", "items": [{"productName", "quantity", "unitPrice", "sku"}], "expectedDeliveryDate": "YYYY-MM-DD"}
- create_journal: {"entries": [{"accountCode", "accountName", "debit", "credit"}], "narration"}
- convert_po_to_bill: {"poNumber": "PO-YYYY-NNN"}
- receive_payment / pay_bill: {"partnerName", "amount", "method"}
- run_payroll: {"month": 1-12, "year"}
- record_salary_payment: {"employeeName", "amount", "salaryType", "paymentMethod", "period"}
- create_lead: {"name", "notes"}
- follow_up_client: {"clientName", "note"}
- create_employee: {"name", "salary"}
- general_chat: {}

Leave out any field the user did not state. Never invent amounts, names or SKUs."#;

/// Builds the system prompt, listing the tenant's known names when available.
pub fn system_prompt(hints: &TenantHints) -> String {
    let intents: Vec<&str> = Intent::ALL.iter().map(|i| i.as_str()).collect();
    let mut prompt = format!("{}\n\nAllowed intents: {}", INSTRUCTIONS, intents.join(", "));

    let known = hints.prompt_block();
    if !known.is_empty() {
        prompt.push_str("\n\nKnown records for this business:\n");
        prompt.push_str(&known);
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_lists_every_intent() {
        let prompt = system_prompt(&TenantHints::empty());
        for intent in Intent::ALL {
            assert!(prompt.contains(intent.as_str()));
        }
        assert!(!prompt.contains("Known records"));
    }

    #[test]
    fn prompt_includes_hints() {
        let hints = TenantHints {
            customers: vec!["Acme".into()],
            ..Default::default()
        };
        assert!(system_prompt(&hints).contains("Customers: Acme"));
    }
}
