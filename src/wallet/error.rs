use crate::ids::{AccountId, FavoriteId, PaymentId};
use crate::models::Phone;
use crate::{Money, MoneyError};

use thiserror::Error;

/// Every failure a wallet operation can report. None of them are retryable and none of
/// them leave partial state behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("Phone already registered: {0}")]
    PhoneAlreadyRegistered(Phone),

    #[error("Amount must be greater than 0, got {0}")]
    AmountMustBePositive(Money),

    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("Not enough balance on account {account_id}: balance {balance}, required {required}")]
    InsufficientBalance {
        account_id: AccountId,
        balance: Money,
        required: Money,
    },

    #[error("Payment not found: {0}")]
    PaymentNotFound(PaymentId),

    #[error("Favorite not found: {0}")]
    FavoriteNotFound(FavoriteId),

    #[error("Payment {0} is already rejected")]
    PaymentAlreadyFailed(PaymentId),

    #[error("Id generator repeated id: {0}")]
    DuplicateId(String),

    #[error(transparent)]
    Money(#[from] MoneyError),
}
