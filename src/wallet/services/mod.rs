mod account_service;
mod shared_wallet_service;
mod wallet_service;

pub use account_service::AccountService;
pub use shared_wallet_service::SharedWalletService;
pub use wallet_service::WalletService;
