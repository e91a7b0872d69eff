use ink::prelude::string::String;
use ink::primitives::AccountId;

use crate::model::{Amount, Result};

/// Balance and allowance accounting for a single fungible asset.
#[ink::trait_definition]
pub trait FungibleLedger {
    #[ink(message)]
    fn name(&self) -> String;

    #[ink(message)]
    fn symbol(&self) -> String;

    #[ink(message)]
    fn decimals(&self) -> u8;

    #[ink(message)]
    fn total_supply(&self) -> Amount;

    /// Zero for accounts that never held anything.
    #[ink(message)]
    fn balance_of(&self, owner_acc: AccountId) -> Amount;

    #[ink(message)]
    fn allowance(&self, owner_acc: AccountId, spender_acc: AccountId) -> Amount;

    /// Moves `amount_val` from the caller to `to_acc`.
    #[ink(message)]
    fn transfer(&mut self, to_acc: AccountId, amount_val: Amount) -> Result<()>;

    /// Sets the caller's allowance for `spender_acc`, replacing any previous value.
    #[ink(message)]
    fn approve(&mut self, spender_acc: AccountId, amount_val: Amount) -> Result<()>;

    /// Moves funds out of `from_acc` against the caller's allowance.
    #[ink(message)]
    fn transfer_from(&mut self, from_acc: AccountId, to_acc: AccountId, amount_val: Amount) -> Result<()>;
}

/// Single-owner access control. The owner may be a contract.
#[ink::trait_definition]
pub trait Ownable {
    #[ink(message)]
    fn owner(&self) -> AccountId;

    #[ink(message)]
    fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<()>;
}

/// Owner-gated supply expansion.
#[ink::trait_definition]
pub trait Mintable {
    #[ink(message)]
    fn mint(&mut self, to_acc: AccountId, amount_val: Amount) -> Result<()>;
}
