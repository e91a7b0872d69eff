use core::cmp::Ordering;

use ink::primitives::AccountId;
use primitive_types::U256;

pub const DECIMALS: u8 = 18;

/// Whole tokens credited to the initial owner at construction.
pub const INITIAL_SUPPLY_UNITS: u128 = 1_000_000;

pub const INITIAL_SUPPLY: Amount =
    Amount::from_u128(INITIAL_SUPPLY_UNITS * 10u128.pow(DECIMALS as u32));

pub type Result<T> = core::result::Result<T, TokenError>;

#[derive(scale::Encode, scale::Decode, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum TokenError {
    InsufficientBalance {
        account: AccountId,
        available: Amount,
        requested: Amount,
    },
    InsufficientAllowance {
        owner: AccountId,
        spender: AccountId,
        available: Amount,
        requested: Amount,
    },
    InvalidReceiver,
    InvalidSpender,
    InvalidOwner,
    UnauthorizedAccount(AccountId),
    ArithmeticOverflow,
}

/// Unsigned 256-bit token quantity.
///
/// Kept as four little-endian 64-bit limbs so it is a plain packed value for
/// contract storage; arithmetic goes through `U256`.
#[derive(scale::Encode, scale::Decode, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct Amount([u64; 4]);

impl Amount {
    pub const ZERO: Self = Self([0; 4]);

    /// Largest representable amount; as an allowance it means "unlimited".
    pub const MAX: Self = Self([u64::MAX; 4]);

    pub const fn from_u128(value: u128) -> Self {
        Self([value as u64, (value >> 64) as u64, 0, 0])
    }

    /// `whole` tokens scaled by `10^DECIMALS`.
    pub fn units(whole: u128) -> Self {
        Self::from_wide(U256::from(whole).saturating_mul(U256::exp10(DECIMALS as usize)))
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.wide().checked_add(rhs.wide()).map(Self::from_wide)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.wide().checked_sub(rhs.wide()).map(Self::from_wide)
    }

    fn wide(self) -> U256 {
        U256(self.0)
    }

    fn from_wide(value: U256) -> Self {
        Self(value.0)
    }
}

impl Ord for Amount {
    fn cmp(&self, other: &Self) -> Ordering {
        self.wide().cmp(&other.wide())
    }
}

impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl From<U256> for Amount {
    fn from(value: U256) -> Self {
        Self::from_wide(value)
    }
}

impl From<Amount> for U256 {
    fn from(value: Amount) -> Self {
        value.wide()
    }
}

/// The all-zero account, used as "nobody".
pub fn null_account() -> AccountId {
    AccountId::from([0u8; 32])
}

pub fn is_null(account: &AccountId) -> bool {
    *account == null_account()
}

// -------- events --------

/// Balance movement. `from_acc` is `None` for a mint.
#[ink::event]
pub struct Transfer {
    #[ink(topic)]
    pub from_acc: Option<AccountId>,
    #[ink(topic)]
    pub to_acc: Option<AccountId>,
    pub amount_val: Amount,
}

#[ink::event]
pub struct Approval {
    #[ink(topic)]
    pub owner_acc: AccountId,
    #[ink(topic)]
    pub spender_acc: AccountId,
    pub amount_val: Amount,
}

/// `previous_acc` is `None` for the assignment made at construction.
#[ink::event]
pub struct OwnershipTransferred {
    #[ink(topic)]
    pub previous_acc: Option<AccountId>,
    #[ink(topic)]
    pub new_acc: AccountId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_compares_high_limbs_first() {
        let low = Amount::from_u128(u64::MAX as u128);
        let high = Amount::from_u128(1u128 << 64);
        assert!(low < high);
        assert!(Amount::MAX > high);
        assert_eq!(Amount::ZERO.cmp(&Amount::ZERO), Ordering::Equal);
    }

    #[test]
    fn units_scale_by_decimals() {
        assert_eq!(Amount::units(1), Amount::from_u128(1_000_000_000_000_000_000));
        assert_eq!(Amount::units(INITIAL_SUPPLY_UNITS), INITIAL_SUPPLY);
    }

    #[test]
    fn arithmetic_is_checked_at_256_bits() {
        assert_eq!(Amount::MAX.checked_add(Amount::from_u128(1)), None);
        assert_eq!(Amount::ZERO.checked_sub(Amount::from_u128(1)), None);

        // carries past u128 instead of failing there
        let big = Amount::from_u128(u128::MAX);
        let sum = big.checked_add(Amount::from_u128(1)).expect("fits in 256 bits");
        assert!(sum > big);
        assert_eq!(sum.checked_sub(Amount::from_u128(1)), Some(big));
    }

    #[test]
    fn null_account_is_all_zero() {
        assert!(is_null(&AccountId::from([0u8; 32])));
        assert!(!is_null(&AccountId::from([1u8; 32])));
    }
}
