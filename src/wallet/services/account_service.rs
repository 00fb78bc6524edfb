use crate::ids::AccountId;
use crate::models::{Account, Phone};
use crate::{Ledger, Money, Result, WalletError};

use std::collections::HashMap;

/// Owns the registered accounts and every balance change applied to them
#[derive(Debug, Default)]
pub struct AccountService {
    repository: Ledger<AccountId, Account>,
    phones: HashMap<Phone, AccountId>,
    last_account_id: i64,
}

impl AccountService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, phone: Phone) -> Result<&Account> {
        if self.phones.contains_key(&phone) {
            log::warn!("Rejected registration, phone already on file: {phone}");
            Err(WalletError::PhoneAlreadyRegistered(phone.clone()))?
        }

        let id = AccountId(self.last_account_id + 1);
        let account = Account::new(id, phone.clone());

        log::debug!("Registering account: {account:?}");

        self.last_account_id = id.0;
        self.phones.insert(phone, id);
        self.repository.append(id, account);

        return self.find(&id);
    }

    pub fn find(&self, account_id: &AccountId) -> Result<&Account> {
        return self
            .repository
            .get(account_id)
            .ok_or_else(|| WalletError::AccountNotFound(*account_id));
    }

    /// Credits a positive amount. Deposits are not recorded as payments.
    pub fn deposit(&mut self, account_id: &AccountId, amount: Money) -> Result {
        if !amount.is_positive() {
            Err(WalletError::AmountMustBePositive(amount))?
        }

        self.credit(account_id, amount)
    }

    /// Debits the account, failing without any change when the balance doesn't cover `amount`
    pub fn debit(&mut self, account_id: &AccountId, amount: Money) -> Result {
        let account = self.find_mut(account_id)?;

        if account.balance < amount {
            Err(WalletError::InsufficientBalance {
                account_id: *account_id,
                balance: account.balance,
                required: amount,
            })?
        }

        account.balance.sub(&amount)?;

        log::debug!("Debited {amount} from account {account_id}, balance: {}", account.balance);

        return Ok(());
    }

    pub fn credit(&mut self, account_id: &AccountId, amount: Money) -> Result {
        let account = self.find_mut(account_id)?;

        account.balance.add(&amount)?;

        log::debug!("Credited {amount} to account {account_id}, balance: {}", account.balance);

        return Ok(());
    }

    pub fn len(&self) -> usize {
        self.repository.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repository.is_empty()
    }

    fn find_mut(&mut self, account_id: &AccountId) -> Result<&mut Account> {
        return self
            .repository
            .get_mut(account_id)
            .ok_or_else(|| WalletError::AccountNotFound(*account_id));
    }
}
