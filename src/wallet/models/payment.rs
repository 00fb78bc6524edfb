use crate::ids::{AccountId, PaymentId};
use crate::Money;

use serde::{Deserialize, Serialize};

pub type PaymentCategory = String;

/// Payment lifecycle. Payments are created `InProgress` and can only move to `Failed`
/// through a reject; nothing in the wallet settles a payment to `Done`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    #[serde(rename = "INPROGRESS")]
    InProgress,

    #[serde(rename = "DONE")]
    Done,

    #[serde(rename = "FAIL")]
    Failed,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    pub id: PaymentId,
    pub account_id: AccountId,
    pub amount: Money,
    pub category: PaymentCategory,
    pub status: PaymentStatus,
}

impl Payment {
    pub fn new(
        id: PaymentId,
        account_id: AccountId,
        amount: Money,
        category: PaymentCategory,
    ) -> Self {
        return Self {
            id,
            account_id,
            amount,
            category,
            status: PaymentStatus::InProgress,
        };
    }

    pub fn is_failed(&self) -> bool {
        self.status == PaymentStatus::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_payment_is_in_progress() {
        let payment = Payment::new(
            PaymentId::from("p-1"),
            AccountId(1),
            Money(100_000),
            "auto".to_string(),
        );

        assert_eq!(payment.status, PaymentStatus::InProgress);
        assert!(!payment.is_failed());
    }

    #[test]
    fn status_serializes_as_upper_case_tag() {
        assert_eq!(
            serde_json::to_string(&PaymentStatus::InProgress).unwrap(),
            "\"INPROGRESS\""
        );
        assert_eq!(serde_json::to_string(&PaymentStatus::Done).unwrap(), "\"DONE\"");
        assert_eq!(serde_json::to_string(&PaymentStatus::Failed).unwrap(), "\"FAIL\"");
    }

    #[test]
    fn payment_serializes_ids_transparently() {
        let payment = Payment::new(
            PaymentId::from("p-1"),
            AccountId(7),
            Money(250),
            "food".to_string(),
        );

        let json = serde_json::to_value(&payment).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "p-1",
                "account_id": 7,
                "amount": 250,
                "category": "food",
                "status": "INPROGRESS",
            })
        );
    }
}
