#![cfg_attr(not(feature = "std"), no_std)]

//! Shared ledger pieces for the Token42 contracts: the 256-bit `Amount`, the
//! error taxonomy, the event set, the capability traits and the balance /
//! ownership rules every token contract runs its messages through.

mod logic;
mod model;
mod traits;

pub use logic::{
    ensure_valid_owner, mint_to, move_balance, only_owner, set_allowance, spend_and_move,
    LedgerStorage,
};
pub use model::{
    is_null, null_account, Amount, Approval, OwnershipTransferred, Result, TokenError, Transfer,
    DECIMALS, INITIAL_SUPPLY, INITIAL_SUPPLY_UNITS,
};
pub use traits::{FungibleLedger, Mintable, Ownable};
