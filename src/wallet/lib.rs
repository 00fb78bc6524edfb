pub mod ids;
pub mod models;
pub mod services;
mod error;
mod ledger;
mod money;
mod result;

pub use error::WalletError;
pub use ledger::Ledger;
pub use money::{Money, MoneyError};
pub use result::Result;

/// Builds a wallet with no accounts that hands out UUID v4 payment and favorite ids
pub fn build_wallet_service() -> services::WalletService {
    let account_service = services::AccountService::new();
    let wallet_service =
        services::WalletService::new(account_service, Box::new(ids::UuidGenerator));

    return wallet_service;
}
