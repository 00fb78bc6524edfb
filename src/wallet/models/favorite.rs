use super::{Payment, PaymentCategory};

use crate::ids::{AccountId, FavoriteId};
use crate::Money;

use serde::{Deserialize, Serialize};

/// A named template captured from an earlier payment
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id: FavoriteId,
    pub account_id: AccountId,
    pub name: String,
    pub amount: Money,
    pub category: PaymentCategory,
}

impl Favorite {
    pub fn from_payment(id: FavoriteId, name: String, payment: &Payment) -> Self {
        return Self {
            id,
            account_id: payment.account_id,
            name,
            amount: payment.amount,
            category: payment.category.clone(),
        };
    }
}
