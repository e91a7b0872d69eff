use ink::primitives::AccountId;

use crate::model::{is_null, Amount, Result, TokenError};

/// Slot access a token contract exposes to the ledger rules.
///
/// Missing balance or allowance entries read as zero.
pub trait LedgerStorage {
    fn read_supply(&self) -> Amount;
    fn write_supply(&mut self, supply_val: Amount);
    fn read_balance(&self, account_acc: &AccountId) -> Amount;
    fn write_balance(&mut self, account_acc: &AccountId, balance_val: Amount);
    fn read_allowance(&self, owner_acc: &AccountId, spender_acc: &AccountId) -> Amount;
    fn write_allowance(&mut self, owner_acc: &AccountId, spender_acc: &AccountId, amount_val: Amount);
}

// Every rule below reads and checks first and writes last, so an `Err`
// leaves storage exactly as it was.

// -------- access control --------

pub fn only_owner(owner_acc: &AccountId, caller_acc: &AccountId) -> Result<()> {
    if caller_acc != owner_acc {
        return Err(TokenError::UnauthorizedAccount(*caller_acc))
    }
    Ok(())
}

pub fn ensure_valid_owner(new_owner: &AccountId) -> Result<()> {
    if is_null(new_owner) {
        return Err(TokenError::InvalidOwner)
    }
    Ok(())
}

// -------- balances --------

/// New balances for both sides of a transfer, computed but not yet written.
struct StagedMove {
    from_acc: AccountId,
    to_acc: AccountId,
    new_from: Amount,
    new_to: Amount,
}

impl StagedMove {
    fn commit<S: LedgerStorage>(self, store: &mut S) {
        // debit before credit
        store.write_balance(&self.from_acc, self.new_from);
        store.write_balance(&self.to_acc, self.new_to);
    }
}

fn stage_move<S: LedgerStorage>(
    store: &S,
    from_acc: AccountId,
    to_acc: AccountId,
    amount_val: Amount,
) -> Result<StagedMove> {
    if is_null(&to_acc) {
        return Err(TokenError::InvalidReceiver)
    }
    let from_bal = store.read_balance(&from_acc);
    if from_bal < amount_val {
        return Err(TokenError::InsufficientBalance {
            account: from_acc,
            available: from_bal,
            requested: amount_val,
        })
    }
    if from_acc == to_acc {
        return Ok(StagedMove { from_acc, to_acc, new_from: from_bal, new_to: from_bal })
    }
    let to_bal = store.read_balance(&to_acc);
    let new_from = from_bal.checked_sub(amount_val).ok_or(TokenError::ArithmeticOverflow)?;
    let new_to = to_bal.checked_add(amount_val).ok_or(TokenError::ArithmeticOverflow)?;
    Ok(StagedMove { from_acc, to_acc, new_from, new_to })
}

pub fn move_balance<S: LedgerStorage>(
    store: &mut S,
    from_acc: AccountId,
    to_acc: AccountId,
    amount_val: Amount,
) -> Result<()> {
    stage_move(store, from_acc, to_acc, amount_val)?.commit(store);
    Ok(())
}

pub fn mint_to<S: LedgerStorage>(store: &mut S, to_acc: AccountId, amount_val: Amount) -> Result<()> {
    if is_null(&to_acc) {
        return Err(TokenError::InvalidReceiver)
    }
    let new_total = store
        .read_supply()
        .checked_add(amount_val)
        .ok_or(TokenError::ArithmeticOverflow)?;
    let new_to = store
        .read_balance(&to_acc)
        .checked_add(amount_val)
        .ok_or(TokenError::ArithmeticOverflow)?;
    store.write_balance(&to_acc, new_to);
    store.write_supply(new_total);
    Ok(())
}

// -------- allowances --------

/// Overwrites, never adds.
pub fn set_allowance<S: LedgerStorage>(
    store: &mut S,
    owner_acc: AccountId,
    spender_acc: AccountId,
    amount_val: Amount,
) -> Result<()> {
    if is_null(&spender_acc) {
        return Err(TokenError::InvalidSpender)
    }
    store.write_allowance(&owner_acc, &spender_acc, amount_val);
    Ok(())
}

/// `transfer_from`: charge `spender_acc`'s allowance on `from_acc` and move
/// the funds. An allowance of `Amount::MAX` is unlimited and never charged.
pub fn spend_and_move<S: LedgerStorage>(
    store: &mut S,
    spender_acc: AccountId,
    from_acc: AccountId,
    to_acc: AccountId,
    amount_val: Amount,
) -> Result<()> {
    let current_allow = store.read_allowance(&from_acc, &spender_acc);
    if current_allow < amount_val {
        return Err(TokenError::InsufficientAllowance {
            owner: from_acc,
            spender: spender_acc,
            available: current_allow,
            requested: amount_val,
        })
    }
    let new_allow = if current_allow == Amount::MAX {
        None
    } else {
        Some(current_allow.checked_sub(amount_val).ok_or(TokenError::ArithmeticOverflow)?)
    };

    let staged = stage_move(store, from_acc, to_acc, amount_val)?;
    staged.commit(store);
    if let Some(new_allow) = new_allow {
        store.write_allowance(&from_acc, &spender_acc, new_allow);
    }
    Ok(())
}
