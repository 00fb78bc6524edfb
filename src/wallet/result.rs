use crate::WalletError;

/// Convenience type to make error mapping cleaner
pub type Result<T = (), E = WalletError> = std::result::Result<T, E>;
