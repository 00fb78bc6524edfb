use super::AccountService;

use crate::ids::{AccountId, FavoriteId, IdGenerator, PaymentId};
use crate::models::{Account, Favorite, Payment, PaymentCategory, PaymentStatus, Phone};
use crate::{Ledger, Money, Result, WalletError};

/// The wallet: registered accounts, the payments made from them and the favorites
/// captured from those payments.
///
/// Every operation checks its preconditions before touching any state, so a failed call
/// leaves the wallet exactly as it was.
pub struct WalletService {
    account_service: AccountService,
    payments: Ledger<PaymentId, Payment>,
    favorites: Ledger<FavoriteId, Favorite>,
    id_generator: Box<dyn IdGenerator>,
}

impl WalletService {
    pub fn new(account_service: AccountService, id_generator: Box<dyn IdGenerator>) -> Self {
        return Self {
            account_service,
            payments: Ledger::new(),
            favorites: Ledger::new(),
            id_generator,
        };
    }

    pub fn register_account(&mut self, phone: impl Into<Phone>) -> Result<Account> {
        let account = self.account_service.register(phone.into())?;

        log::debug!("Registered account: {account:?}");

        return Ok(account.clone());
    }

    pub fn deposit(&mut self, account_id: AccountId, amount: Money) -> Result {
        return self.account_service.deposit(&account_id, amount);
    }

    /// Debits the account and records a new `InProgress` payment
    pub fn pay(
        &mut self,
        account_id: AccountId,
        amount: Money,
        category: impl Into<PaymentCategory>,
    ) -> Result<Payment> {
        if !amount.is_positive() {
            Err(WalletError::AmountMustBePositive(amount))?
        }

        let payment_id = PaymentId::from(self.id_generator.next_id());
        if self.payments.contains(&payment_id) {
            log::error!("Id generator repeated payment id {payment_id}");
            Err(WalletError::DuplicateId(payment_id.to_string()))?
        }

        self.account_service.debit(&account_id, amount)?;

        let payment = Payment::new(payment_id, account_id, amount, category.into());

        log::debug!("Created payment: {payment:?}");

        self.payments.append(payment.id.clone(), payment.clone());

        return Ok(payment);
    }

    pub fn find_account_by_id(&self, account_id: AccountId) -> Result<&Account> {
        return self.account_service.find(&account_id);
    }

    pub fn find_payment_by_id(&self, payment_id: &PaymentId) -> Result<&Payment> {
        return self
            .payments
            .get(payment_id)
            .ok_or_else(|| WalletError::PaymentNotFound(payment_id.clone()));
    }

    pub fn find_favorite_by_id(&self, favorite_id: &FavoriteId) -> Result<&Favorite> {
        return self
            .favorites
            .get(favorite_id)
            .ok_or_else(|| WalletError::FavoriteNotFound(favorite_id.clone()));
    }

    /// Marks the payment as failed and returns its amount to the account.
    ///
    /// Rejecting a payment that is already failed is an error and changes nothing.
    pub fn reject(&mut self, payment_id: &PaymentId) -> Result {
        let payment = self.find_payment_by_id(payment_id)?;

        if payment.is_failed() {
            log::warn!("Payment {payment_id} is already rejected");
            Err(WalletError::PaymentAlreadyFailed(payment_id.clone()))?
        }

        let account_id = payment.account_id;
        let amount = payment.amount;

        self.account_service.credit(&account_id, amount)?;

        if let Some(payment) = self.payments.get_mut(payment_id) {
            payment.status = PaymentStatus::Failed;
        }

        log::debug!("Rejected payment {payment_id}, returned {amount} to account {account_id}");

        return Ok(());
    }

    /// Pays again with the account, amount and category of an earlier payment. The new
    /// payment gets its own id and status.
    pub fn repeat(&mut self, payment_id: &PaymentId) -> Result<Payment> {
        let payment = self.find_payment_by_id(payment_id)?;

        log::debug!("Repeating payment: {payment:?}");

        let (account_id, amount, category) =
            (payment.account_id, payment.amount, payment.category.clone());

        return self.pay(account_id, amount, category);
    }

    /// Saves the account, amount and category of a payment under a display name
    pub fn favorite_payment(
        &mut self,
        payment_id: &PaymentId,
        name: impl Into<String>,
    ) -> Result<Favorite> {
        let payment = self.find_payment_by_id(payment_id)?.clone();
        self.account_service.find(&payment.account_id)?;

        let favorite_id = FavoriteId::from(self.id_generator.next_id());
        if self.favorites.contains(&favorite_id) {
            log::error!("Id generator repeated favorite id {favorite_id}");
            Err(WalletError::DuplicateId(favorite_id.to_string()))?
        }

        let favorite = Favorite::from_payment(favorite_id, name.into(), &payment);

        log::debug!("Created favorite: {favorite:?}");

        self.favorites.append(favorite.id.clone(), favorite.clone());

        return Ok(favorite);
    }

    pub fn pay_from_favorite(&mut self, favorite_id: &FavoriteId) -> Result<Payment> {
        let favorite = self.find_favorite_by_id(favorite_id)?;

        log::debug!("Paying from favorite: {favorite:?}");

        let (account_id, amount, category) =
            (favorite.account_id, favorite.amount, favorite.category.clone());

        return self.pay(account_id, amount, category);
    }

    pub fn account_count(&self) -> usize {
        self.account_service.len()
    }

    /// Payments made from the account, oldest first
    pub fn payments_for_account(&self, account_id: AccountId) -> Result<Vec<&Payment>> {
        self.account_service.find(&account_id)?;

        return Ok(self
            .payments
            .iter()
            .filter(|payment| payment.account_id == account_id)
            .collect());
    }

    /// Favorites saved for the account, oldest first
    pub fn favorites_for_account(&self, account_id: AccountId) -> Result<Vec<&Favorite>> {
        self.account_service.find(&account_id)?;

        return Ok(self
            .favorites
            .iter()
            .filter(|favorite| favorite.account_id == account_id)
            .collect());
    }
}
