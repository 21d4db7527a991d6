use std::collections::{HashMap, hash_map::Entry};

use rust_decimal::Decimal;

use crate::{
    account::{Account, AccountId},
    command::{Operation, OperationKind},
    holder::{AccountHolder, HolderHandle},
    stats::{StatsHandle, TaxId},
};

use super::{OperationProcessError, OperationProcessor};

/// Holds every holder and account of one logical process, all sharing one
/// stats registry.
#[derive(Default)]
pub struct InMemoryBank {
    stats: StatsHandle,
    holders: HashMap<TaxId, HolderHandle>,
    pub accounts: HashMap<AccountId, Account>,
}

impl InMemoryBank {
    pub fn stats(&self) -> &StatsHandle {
        &self.stats
    }

    fn account_mut(&mut self, id: AccountId) -> Result<&mut Account, OperationProcessError> {
        self.accounts
            .get_mut(&id)
            .ok_or(OperationProcessError::UnknownAccount(id))
    }
}

impl OperationProcessor for InMemoryBank {
    fn process_operation(
        &mut self,
        kind: OperationKind,
        account: Option<AccountId>,
        counterparty: Option<AccountId>,
        amount: Option<Decimal>,
        name: Option<String>,
        tax_id: Option<TaxId>,
    ) -> Result<(), OperationProcessError> {
        let op = Operation::parse(kind, account, counterparty, amount, name, tax_id)?;
        match op {
            Operation::RegisterHolder { name, tax_id } => {
                // duplicate tax ids are accepted, the newer holder wins
                let holder = AccountHolder::register(name, tax_id, &self.stats);
                self.holders.insert(tax_id, holder);
            }
            Operation::OpenAccount { id, tax_id } => {
                let holder = self
                    .holders
                    .get(&tax_id)
                    .ok_or(OperationProcessError::UnknownHolder(tax_id))?;
                let holder = HolderHandle::clone(holder);
                match self.accounts.entry(id) {
                    Entry::Occupied(_) => {
                        return Err(OperationProcessError::DuplicateAccount(id));
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(Account::open(id, holder, StatsHandle::clone(&self.stats)));
                    }
                }
            }
            Operation::Deposit { account, amount } => {
                // a rejected deposit is a no-op, not an error
                self.account_mut(account)?.deposit(amount);
            }
            Operation::Withdraw { account, amount } => {
                self.account_mut(account)?.withdraw(amount);
            }
            Operation::Transfer { from, to, amount } => {
                if from == to {
                    return Err(OperationProcessError::SelfTransfer(from));
                }
                let [src, dst] = self.accounts.get_disjoint_mut([&from, &to]);
                let src = src.ok_or(OperationProcessError::UnknownAccount(from))?;
                let dst = dst.ok_or(OperationProcessError::UnknownAccount(to))?;
                src.transfer_to(dst, amount);
            }
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::prelude::FromPrimitive;

    use super::*;

    fn bank_with_two_accounts() -> InMemoryBank {
        let mut bank = InMemoryBank::default();
        bank.process_operation(
            OperationKind::Holder,
            None,
            None,
            None,
            Some("joao".into()),
            Some(11111),
        )
        .unwrap();
        bank.process_operation(OperationKind::Open, Some(1), None, None, None, Some(11111))
            .unwrap();
        bank.process_operation(
            OperationKind::Holder,
            None,
            None,
            None,
            Some("Maria".into()),
            Some(22222),
        )
        .unwrap();
        bank.process_operation(OperationKind::Open, Some(2), None, None, None, Some(22222))
            .unwrap();
        bank
    }

    #[test]
    fn process_some_operations() {
        let mut bank = bank_with_two_accounts();
        assert_eq!(bank.accounts.len(), 2);
        assert_eq!(bank.stats().last_holder_tax_id(), Some(22222));
        // opening accounts creates no transactions
        assert_eq!(bank.stats().total_transactions(), 0);

        bank.process_operation(
            OperationKind::Deposit,
            Some(1),
            None,
            Some(Decimal::from_u32(50).unwrap()),
            None,
            None,
        )
        .unwrap();
        bank.process_operation(
            OperationKind::Transfer,
            Some(1),
            Some(2),
            Some(Decimal::from_u32(3).unwrap()),
            None,
            None,
        )
        .unwrap();

        let a1 = bank.accounts.get(&1).unwrap();
        assert_eq!(a1.balance(), Decimal::from_u32(57).unwrap());
        let a2 = bank.accounts.get(&2).unwrap();
        assert_eq!(a2.balance(), Decimal::from_u32(13).unwrap());
        assert_eq!(bank.stats().total_transactions(), 3);
    }

    #[test]
    fn rejected_operations_succeed_silently() {
        let mut bank = bank_with_two_accounts();
        // over-limit withdrawal is not an error, just a no-op
        bank.process_operation(
            OperationKind::Withdraw,
            Some(1),
            None,
            Some(Decimal::from_u32(100_000).unwrap()),
            None,
            None,
        )
        .unwrap();
        assert_eq!(
            bank.accounts.get(&1).unwrap().balance(),
            Decimal::from_u32(10).unwrap()
        );
        assert_eq!(bank.stats().total_transactions(), 0);
    }

    #[test]
    fn unknown_account_is_an_error() {
        let mut bank = InMemoryBank::default();
        let err = bank
            .process_operation(
                OperationKind::Deposit,
                Some(7),
                None,
                Some(Decimal::from_u32(1).unwrap()),
                None,
                None,
            )
            .unwrap_err();
        assert!(matches!(err, OperationProcessError::UnknownAccount(7)));
    }

    #[test]
    fn open_requires_registered_holder() {
        let mut bank = InMemoryBank::default();
        let err = bank
            .process_operation(OperationKind::Open, Some(1), None, None, None, Some(11111))
            .unwrap_err();
        assert!(matches!(err, OperationProcessError::UnknownHolder(11111)));
    }

    #[test]
    fn duplicate_open_is_an_error() {
        let mut bank = bank_with_two_accounts();
        let err = bank
            .process_operation(OperationKind::Open, Some(1), None, None, None, Some(22222))
            .unwrap_err();
        assert!(matches!(err, OperationProcessError::DuplicateAccount(1)));
    }

    #[test]
    fn self_transfer_is_rejected() {
        let mut bank = bank_with_two_accounts();
        let err = bank
            .process_operation(
                OperationKind::Transfer,
                Some(1),
                Some(1),
                Some(Decimal::from_u32(1).unwrap()),
                None,
                None,
            )
            .unwrap_err();
        assert!(matches!(err, OperationProcessError::SelfTransfer(1)));
        assert_eq!(bank.stats().total_transactions(), 0);
    }

    #[test]
    fn one_holder_can_open_several_accounts() {
        let mut bank = bank_with_two_accounts();
        bank.process_operation(OperationKind::Open, Some(3), None, None, None, Some(11111))
            .unwrap();
        assert_eq!(bank.accounts.get(&3).unwrap().holder().name(), "joao");
        // the last-holder slot reflects registrations, not openings
        assert_eq!(bank.stats().last_holder_tax_id(), Some(22222));
    }
}
