use crate::ids::AccountId;
use crate::Money;

use serde::{Deserialize, Serialize};

pub type Phone = String;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub phone: Phone,
    pub balance: Money,
}

impl Account {
    pub fn new(id: AccountId, phone: Phone) -> Self {
        return Self {
            id,
            phone,
            balance: Money::ZERO,
        };
    }
}
