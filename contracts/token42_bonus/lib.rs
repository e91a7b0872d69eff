#![cfg_attr(not(feature = "std"), no_std, no_main)]

#[ink::contract]
mod token42_bonus {
    use ink::prelude::string::String;
    use ink::storage::Mapping;
    use token42_ledger::{
        ensure_valid_owner, mint_to, move_balance, only_owner, set_allowance, spend_and_move,
        Amount, Approval, FungibleLedger, LedgerStorage, Mintable, Ownable, OwnershipTransferred, Result,
        TokenError, Transfer, DECIMALS, INITIAL_SUPPLY,
    };

    pub const TOKEN_NAME: &str = "pbeheyt42 Bonus";
    pub const TOKEN_SYMBOL: &str = "PBT42B";

    /// Ledger whose owner can mint after construction. The owner may be an
    /// executor contract relaying the call.
    #[ink(storage)]
    pub struct Token42Bonus {
        // governance
        owner_acc: AccountId,

        // token state
        total_supply: Amount,
        balances: Mapping<AccountId, Amount>,
        allowances: Mapping<(AccountId, AccountId), Amount>,
    }

    impl Token42Bonus {
        #[ink(constructor)]
        pub fn new(initial_owner: AccountId) -> core::result::Result<Self, TokenError> {
            ensure_valid_owner(&initial_owner)?;
            let mut token = Self {
                owner_acc: initial_owner,
                total_supply: Amount::ZERO,
                balances: Mapping::default(),
                allowances: Mapping::default(),
            };
            mint_to(&mut token, initial_owner, INITIAL_SUPPLY)?;

            Self::env().emit_event(OwnershipTransferred {
                previous_acc: None,
                new_acc: initial_owner,
            });
            Self::env().emit_event(Transfer {
                from_acc: None,
                to_acc: Some(initial_owner),
                amount_val: INITIAL_SUPPLY,
            });
            Ok(token)
        }
    }

    impl FungibleLedger for Token42Bonus {
        #[ink(message)]
        fn name(&self) -> String {
            String::from(TOKEN_NAME)
        }

        #[ink(message)]
        fn symbol(&self) -> String {
            String::from(TOKEN_SYMBOL)
        }

        #[ink(message)]
        fn decimals(&self) -> u8 {
            DECIMALS
        }

        #[ink(message)]
        fn total_supply(&self) -> Amount {
            self.total_supply
        }

        #[ink(message)]
        fn balance_of(&self, owner_acc: AccountId) -> Amount {
            self.read_balance(&owner_acc)
        }

        #[ink(message)]
        fn allowance(&self, owner_acc: AccountId, spender_acc: AccountId) -> Amount {
            self.read_allowance(&owner_acc, &spender_acc)
        }

        #[ink(message)]
        fn transfer(&mut self, to_acc: AccountId, amount_val: Amount) -> Result<()> {
            let from_acc = self.env().caller();
            move_balance(self, from_acc, to_acc, amount_val)?;
            self.env().emit_event(Transfer {
                from_acc: Some(from_acc),
                to_acc: Some(to_acc),
                amount_val,
            });
            Ok(())
        }

        #[ink(message)]
        fn approve(&mut self, spender_acc: AccountId, amount_val: Amount) -> Result<()> {
            let owner_acc = self.env().caller();
            set_allowance(self, owner_acc, spender_acc, amount_val)?;
            self.env().emit_event(Approval { owner_acc, spender_acc, amount_val });
            Ok(())
        }

        #[ink(message)]
        fn transfer_from(
            &mut self,
            from_acc: AccountId,
            to_acc: AccountId,
            amount_val: Amount,
        ) -> Result<()> {
            let spender_acc = self.env().caller();
            spend_and_move(self, spender_acc, from_acc, to_acc, amount_val)?;
            self.env().emit_event(Transfer {
                from_acc: Some(from_acc),
                to_acc: Some(to_acc),
                amount_val,
            });
            Ok(())
        }
    }

    impl Ownable for Token42Bonus {
        #[ink(message)]
        fn owner(&self) -> AccountId {
            self.owner_acc
        }

        #[ink(message)]
        fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<()> {
            only_owner(&self.owner_acc, &self.env().caller())?;
            ensure_valid_owner(&new_owner)?;
            let previous_acc = self.owner_acc;
            self.owner_acc = new_owner;
            self.env().emit_event(OwnershipTransferred {
                previous_acc: Some(previous_acc),
                new_acc: new_owner,
            });
            Ok(())
        }
    }

    impl Mintable for Token42Bonus {
        #[ink(message)]
        fn mint(&mut self, to_acc: AccountId, amount_val: Amount) -> Result<()> {
            only_owner(&self.owner_acc, &self.env().caller())?;
            mint_to(self, to_acc, amount_val)?;
            self.env().emit_event(Transfer {
                from_acc: None,
                to_acc: Some(to_acc),
                amount_val,
            });
            Ok(())
        }
    }

    // ---- storage slots ----

    impl LedgerStorage for Token42Bonus {
        fn read_supply(&self) -> Amount {
            self.total_supply
        }

        fn write_supply(&mut self, supply_val: Amount) {
            self.total_supply = supply_val;
        }

        fn read_balance(&self, account_acc: &AccountId) -> Amount {
            self.balances.get(account_acc).unwrap_or_default()
        }

        fn write_balance(&mut self, account_acc: &AccountId, balance_val: Amount) {
            self.balances.insert(account_acc, &balance_val);
        }

        fn read_allowance(&self, owner_acc: &AccountId, spender_acc: &AccountId) -> Amount {
            self.allowances.get(&(*owner_acc, *spender_acc)).unwrap_or_default()
        }

        fn write_allowance(&mut self, owner_acc: &AccountId, spender_acc: &AccountId, amount_val: Amount) {
            self.allowances.insert(&(*owner_acc, *spender_acc), &amount_val);
        }
    }


}
