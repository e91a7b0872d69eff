#![cfg_attr(not(feature = "std"), no_std, no_main)]

/// Multisig-style executor meant to sit as the owner of a `Mintable` token.
///
/// Signers propose and confirm mints; once a proposal reaches the threshold
/// any signer can execute it, and the token sees this contract as the caller.
#[ink::contract]
mod mint_executor {
    use ink::prelude::vec::Vec;
    use ink::storage::Mapping;
    use token42_ledger::{Amount, Mintable, TokenError};

    pub type ProposalId = u32;
    pub type Result<T> = core::result::Result<T, Error>;

    #[derive(scale::Encode, scale::Decode, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
    pub enum Error {
        NotSigner,
        InvalidThreshold,
        DuplicateSigner,
        ProposalMissing,
        AlreadyConfirmed,
        AlreadyExecuted,
        BelowThreshold,
        Overflow,
        /// The token rejected the relayed mint.
        Token(TokenError),
    }

    #[derive(scale::Encode, scale::Decode, Debug, Clone, PartialEq, Eq)]
    #[cfg_attr(
        feature = "std",
        derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
    )]
    pub struct MintProposal {
        pub token_acc: AccountId,
        pub to_acc: AccountId,
        pub amount_val: Amount,
        pub confirmations_cnt: u32,
        pub executed_flag: bool,
    }

    #[ink(event)]
    pub struct MintProposed {
        #[ink(topic)]
        proposal_id: ProposalId,
        #[ink(topic)]
        proposer_acc: AccountId,
        token_acc: AccountId,
        to_acc: AccountId,
        amount_val: Amount,
    }

    #[ink(event)]
    pub struct MintConfirmed {
        #[ink(topic)]
        proposal_id: ProposalId,
        #[ink(topic)]
        signer_acc: AccountId,
        confirmations_cnt: u32,
    }

    #[ink(event)]
    pub struct MintExecuted {
        #[ink(topic)]
        proposal_id: ProposalId,
        #[ink(topic)]
        token_acc: AccountId,
        to_acc: AccountId,
        amount_val: Amount,
    }

    #[ink(storage)]
    pub struct SafeMintExecutor {
        signers: Vec<AccountId>,
        threshold_cnt: u32,
        next_id: ProposalId,
        proposals: Mapping<ProposalId, MintProposal>,
        confirmed: Mapping<(ProposalId, AccountId), bool>,
    }

    impl SafeMintExecutor {
        #[ink(constructor)]
        pub fn new(signers: Vec<AccountId>, threshold_cnt: u32) -> core::result::Result<Self, Error> {
            if threshold_cnt == 0 || threshold_cnt as usize > signers.len() {
                return Err(Error::InvalidThreshold)
            }
            for (idx, signer_acc) in signers.iter().enumerate() {
                if signers[..idx].contains(signer_acc) {
                    return Err(Error::DuplicateSigner)
                }
            }
            Ok(Self {
                signers,
                threshold_cnt,
                next_id: 0,
                proposals: Mapping::default(),
                confirmed: Mapping::default(),
            })
        }

        // -------- read API --------

        #[ink(message)]
        pub fn signers(&self) -> Vec<AccountId> {
            self.signers.clone()
        }

        #[ink(message)]
        pub fn threshold(&self) -> u32 {
            self.threshold_cnt
        }

        #[ink(message)]
        pub fn proposal(&self, proposal_id: ProposalId) -> Option<MintProposal> {
            self.proposals.get(proposal_id)
        }

        #[ink(message)]
        pub fn is_confirmed(&self, proposal_id: ProposalId, signer_acc: AccountId) -> bool {
            self.confirmed.get((proposal_id, signer_acc)).unwrap_or(false)
        }

        // -------- write API --------

        /// Records a mint proposal; the proposer's confirmation is included.
        #[ink(message)]
        pub fn propose_mint(
            &mut self,
            token_acc: AccountId,
            to_acc: AccountId,
            amount_val: Amount,
        ) -> Result<ProposalId> {
            let proposer_acc = self.only_signer()?;
            let proposal_id = self.next_id;
            self.next_id = self.next_id.checked_add(1).ok_or(Error::Overflow)?;

            let proposal = MintProposal {
                token_acc,
                to_acc,
                amount_val,
                confirmations_cnt: 1,
                executed_flag: false,
            };
            self.proposals.insert(proposal_id, &proposal);
            self.confirmed.insert((proposal_id, proposer_acc), &true);

            self.env().emit_event(MintProposed {
                proposal_id,
                proposer_acc,
                token_acc,
                to_acc,
                amount_val,
            });
            self.env().emit_event(MintConfirmed {
                proposal_id,
                signer_acc: proposer_acc,
                confirmations_cnt: 1,
            });
            Ok(proposal_id)
        }

        #[ink(message)]
        pub fn confirm(&mut self, proposal_id: ProposalId) -> Result<()> {
            let signer_acc = self.only_signer()?;
            let mut proposal = self.proposals.get(proposal_id).ok_or(Error::ProposalMissing)?;
            if proposal.executed_flag {
                return Err(Error::AlreadyExecuted)
            }
            if self.is_confirmed(proposal_id, signer_acc) {
                return Err(Error::AlreadyConfirmed)
            }
            proposal.confirmations_cnt = proposal
                .confirmations_cnt
                .checked_add(1)
                .ok_or(Error::Overflow)?;
            self.proposals.insert(proposal_id, &proposal);
            self.confirmed.insert((proposal_id, signer_acc), &true);

            self.env().emit_event(MintConfirmed {
                proposal_id,
                signer_acc,
                confirmations_cnt: proposal.confirmations_cnt,
            });
            Ok(())
        }

        /// Relays the proposal's mint to its token. A token rejection comes
        /// back as `Error::Token` and reverts this call as a whole.
        #[ink(message)]
        pub fn execute(&mut self, proposal_id: ProposalId) -> Result<()> {
            self.only_signer()?;
            let mut proposal = self.proposals.get(proposal_id).ok_or(Error::ProposalMissing)?;
            if proposal.executed_flag {
                return Err(Error::AlreadyExecuted)
            }
            if proposal.confirmations_cnt < self.threshold_cnt {
                return Err(Error::BelowThreshold)
            }

            // spent before the relay so a re-entrant execute sees it as used
            proposal.executed_flag = true;
            self.proposals.insert(proposal_id, &proposal);

            let mut token: ink::contract_ref!(Mintable) = proposal.token_acc.into();
            if let Err(token_err) = token.mint(proposal.to_acc, proposal.amount_val) {
                ink::env::debug_println!(
                    "mint relay for proposal {} rejected: {:?}",
                    proposal_id,
                    token_err
                );
                return Err(Error::Token(token_err))
            }

            self.env().emit_event(MintExecuted {
                proposal_id,
                token_acc: proposal.token_acc,
                to_acc: proposal.to_acc,
                amount_val: proposal.amount_val,
            });
            Ok(())
        }

        // ---- internals ----

        fn only_signer(&self) -> Result<AccountId> {
            let caller_acc = self.env().caller();
            if !self.signers.contains(&caller_acc) {
                return Err(Error::NotSigner)
            }
            Ok(caller_acc)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use ink::env::test::{self, DefaultAccounts};
        use ink::env::DefaultEnvironment;

        fn accounts() -> DefaultAccounts<DefaultEnvironment> {
            test::default_accounts::<DefaultEnvironment>()
        }

        fn set_caller(caller_acc: AccountId) {
            test::set_caller::<DefaultEnvironment>(caller_acc);
        }

        fn token_acc() -> AccountId {
            AccountId::from([0x42; 32])
        }

        fn two_of_three() -> SafeMintExecutor {
            let accs = accounts();
            set_caller(accs.alice);
            SafeMintExecutor::new(vec![accs.alice, accs.bob, accs.charlie], 2).expect("valid setup")
        }

        #[ink::test]
        fn new_validates_threshold_and_signers() {
            let accs = accounts();
            assert_eq!(
                SafeMintExecutor::new(vec![accs.alice], 0).err(),
                Some(Error::InvalidThreshold)
            );
            assert_eq!(
                SafeMintExecutor::new(vec![accs.alice], 2).err(),
                Some(Error::InvalidThreshold)
            );
            assert_eq!(
                SafeMintExecutor::new(vec![accs.alice, accs.alice], 1).err(),
                Some(Error::DuplicateSigner)
            );

            let executor = two_of_three();
            assert_eq!(executor.threshold(), 2);
            assert_eq!(executor.signers(), vec![accs.alice, accs.bob, accs.charlie]);
        }

        #[ink::test]
        fn propose_counts_proposer_confirmation() {
            let accs = accounts();
            let mut executor = two_of_three();

            let proposal_id = executor
                .propose_mint(token_acc(), accs.django, Amount::units(1_000))
                .expect("signer proposes");
            assert_eq!(proposal_id, 0);
            assert!(executor.is_confirmed(proposal_id, accs.alice));
            assert!(!executor.is_confirmed(proposal_id, accs.bob));

            let proposal = executor.proposal(proposal_id).expect("stored");
            assert_eq!(proposal.token_acc, token_acc());
            assert_eq!(proposal.to_acc, accs.django);
            assert_eq!(proposal.amount_val, Amount::units(1_000));
            assert_eq!(proposal.confirmations_cnt, 1);
            assert!(!proposal.executed_flag);

            assert_eq!(test::recorded_events().count(), 2);
        }

        #[ink::test]
        fn outsiders_cannot_propose_confirm_or_execute() {
            let accs = accounts();
            let mut executor = two_of_three();
            let proposal_id = executor
                .propose_mint(token_acc(), accs.django, Amount::units(1))
                .expect("signer proposes");

            set_caller(accs.eve);
            assert_eq!(
                executor.propose_mint(token_acc(), accs.eve, Amount::units(1)),
                Err(Error::NotSigner)
            );
            assert_eq!(executor.confirm(proposal_id), Err(Error::NotSigner));
            assert_eq!(executor.execute(proposal_id), Err(Error::NotSigner));
        }

        #[ink::test]
        fn confirm_once_per_signer() {
            let accs = accounts();
            let mut executor = two_of_three();
            let proposal_id = executor
                .propose_mint(token_acc(), accs.django, Amount::units(1))
                .expect("signer proposes");

            assert_eq!(executor.confirm(proposal_id), Err(Error::AlreadyConfirmed));

            set_caller(accs.bob);
            assert_eq!(executor.confirm(proposal_id), Ok(()));
            assert_eq!(executor.confirm(proposal_id), Err(Error::AlreadyConfirmed));
            assert_eq!(
                executor.proposal(proposal_id).map(|p| p.confirmations_cnt),
                Some(2)
            );
            assert_eq!(executor.confirm(7), Err(Error::ProposalMissing));
        }

        #[ink::test]
        fn execute_needs_threshold() {
            let accs = accounts();
            let mut executor = two_of_three();
            let proposal_id = executor
                .propose_mint(token_acc(), accs.django, Amount::units(1))
                .expect("signer proposes");

            assert_eq!(executor.execute(proposal_id), Err(Error::BelowThreshold));
            assert_eq!(executor.execute(proposal_id + 1), Err(Error::ProposalMissing));
            assert_eq!(executor.proposal(proposal_id).map(|p| p.executed_flag), Some(false));
        }

        #[ink::test]
        fn proposal_ids_increase() {
            let accs = accounts();
            let mut executor = two_of_three();
            let first = executor.propose_mint(token_acc(), accs.django, Amount::units(1));
            let second = executor.propose_mint(token_acc(), accs.django, Amount::units(2));
            assert_eq!(first, Ok(0));
            assert_eq!(second, Ok(1));
        }
    }
}

pub use self::mint_executor::{
    Error, MintProposal, ProposalId, SafeMintExecutor, SafeMintExecutorRef,
};
