use super::WalletService;

use crate::ids::{AccountId, FavoriteId, PaymentId};
use crate::models::{Account, Favorite, Payment, PaymentCategory, Phone};
use crate::{Money, Result};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle for callers on several threads.
///
/// Every operation holds one exclusive lock for its whole duration, so operations are
/// applied one at a time in lock acquisition order. Results are returned as owned copies.
#[derive(Clone)]
pub struct SharedWalletService {
    inner: Arc<Mutex<WalletService>>,
}

impl SharedWalletService {
    pub fn new(service: WalletService) -> Self {
        return Self {
            inner: Arc::new(Mutex::new(service)),
        };
    }

    /// Runs `f` with exclusive access to the wallet
    pub fn with<R>(&self, f: impl FnOnce(&mut WalletService) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn register_account(&self, phone: impl Into<Phone>) -> Result<Account> {
        self.lock().register_account(phone)
    }

    pub fn deposit(&self, account_id: AccountId, amount: Money) -> Result {
        self.lock().deposit(account_id, amount)
    }

    pub fn pay(
        &self,
        account_id: AccountId,
        amount: Money,
        category: impl Into<PaymentCategory>,
    ) -> Result<Payment> {
        self.lock().pay(account_id, amount, category)
    }

    pub fn find_account_by_id(&self, account_id: AccountId) -> Result<Account> {
        self.lock().find_account_by_id(account_id).cloned()
    }

    pub fn find_payment_by_id(&self, payment_id: &PaymentId) -> Result<Payment> {
        self.lock().find_payment_by_id(payment_id).cloned()
    }

    pub fn find_favorite_by_id(&self, favorite_id: &FavoriteId) -> Result<Favorite> {
        self.lock().find_favorite_by_id(favorite_id).cloned()
    }

    pub fn reject(&self, payment_id: &PaymentId) -> Result {
        self.lock().reject(payment_id)
    }

    pub fn repeat(&self, payment_id: &PaymentId) -> Result<Payment> {
        self.lock().repeat(payment_id)
    }

    pub fn favorite_payment(
        &self,
        payment_id: &PaymentId,
        name: impl Into<String>,
    ) -> Result<Favorite> {
        self.lock().favorite_payment(payment_id, name)
    }

    pub fn pay_from_favorite(&self, favorite_id: &FavoriteId) -> Result<Payment> {
        self.lock().pay_from_favorite(favorite_id)
    }

    pub fn account_count(&self) -> usize {
        self.lock().account_count()
    }

    // operations validate before mutating, a poisoned wallet is still consistent
    fn lock(&self) -> MutexGuard<'_, WalletService> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<WalletService> for SharedWalletService {
    fn from(service: WalletService) -> Self {
        Self::new(service)
    }
}
