//! Business intents a message can be interpreted as requesting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Closed set of business actions the engine can draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    CreateInvoice,
    CreateBill,
    CreateJournal,
    CreatePurchaseOrder,
    ConvertPoToBill,
    RunPayroll,
    RecordSalaryPayment,
    ReceivePayment,
    PayBill,
    CreateLead,
    FollowUpClient,
    CreateEmployee,
    GeneralChat,
}

impl Intent {
    /// All intents, in declaration order.
    pub const ALL: [Intent; 13] = [
        Intent::CreateInvoice,
        Intent::CreateBill,
        Intent::CreateJournal,
        Intent::CreatePurchaseOrder,
        Intent::ConvertPoToBill,
        Intent::RunPayroll,
        Intent::RecordSalaryPayment,
        Intent::ReceivePayment,
        Intent::PayBill,
        Intent::CreateLead,
        Intent::FollowUpClient,
        Intent::CreateEmployee,
        Intent::GeneralChat,
    ];

    /// Wire name of the intent.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::CreateInvoice => "create_invoice",
            Intent::CreateBill => "create_bill",
            Intent::CreateJournal => "create_journal",
            Intent::CreatePurchaseOrder => "create_purchase_order",
            Intent::ConvertPoToBill => "convert_po_to_bill",
            Intent::RunPayroll => "run_payroll",
            Intent::RecordSalaryPayment => "record_salary_payment",
            Intent::ReceivePayment => "receive_payment",
            Intent::PayBill => "pay_bill",
            Intent::CreateLead => "create_lead",
            Intent::FollowUpClient => "follow_up_client",
            Intent::CreateEmployee => "create_employee",
            Intent::GeneralChat => "general_chat",
        }
    }

    /// Whether a draft of this intent can ever be handed to the poster.
    pub fn is_transactional(&self) -> bool {
        !matches!(self, Intent::GeneralChat)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Intent::ALL
            .iter()
            .copied()
            .find(|intent| intent.as_str() == wanted)
            .ok_or_else(|| {
                ValidationError::invalid_format("intent", format!("unknown value '{}'", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intent_round_trips_through_wire_name() {
        for intent in Intent::ALL {
            assert_eq!(intent.as_str().parse::<Intent>().unwrap(), intent);
        }
    }

    #[test]
    fn intent_serializes_snake_case() {
        let json = serde_json::to_string(&Intent::ConvertPoToBill).unwrap();
        assert_eq!(json, "\"convert_po_to_bill\"");
    }

    #[test]
    fn unknown_intent_is_rejected() {
        assert!("refund".parse::<Intent>().is_err());
    }

    #[test]
    fn only_general_chat_is_non_transactional() {
        assert!(!Intent::GeneralChat.is_transactional());
        assert!(Intent::CreateBill.is_transactional());
    }
}
