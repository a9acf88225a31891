//! In-memory bank account.
//!
//! Operations never mutate in place: each one returns the updated account
//! and leaves the original untouched.

use std::fmt;

use crate::error::AccountError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankAccount {
    owner: String,
    balance: u64,
}

impl BankAccount {
    /// Open an account with a zero balance.
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            balance: 0,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn deposit(&self, amount: u64) -> Result<Self, AccountError> {
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(AccountError::Overflow(amount))?;
        Ok(Self {
            owner: self.owner.clone(),
            balance,
        })
    }

    pub fn withdraw(&self, amount: u64) -> Result<Self, AccountError> {
        if self.balance < amount {
            return Err(AccountError::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            });
        }
        Ok(Self {
            owner: self.owner.clone(),
            balance: self.balance - amount,
        })
    }

    pub fn change_owner(&self, new_owner: impl Into<String>) -> Self {
        Self {
            owner: new_owner.into(),
            balance: self.balance,
        }
    }
}

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Owner: {}, Balance: {}", self.owner, self.balance)
    }
}
