use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::holder::{AccountHolder, HolderHandle};
use crate::stats::StatsHandle;

pub type AccountId = u32;

/// Every account opens with this balance. Opening is not a transaction.
fn opening_balance() -> Decimal {
    Decimal::new(1000, 2)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Deposit => f.write_str("deposit"),
            EntryKind::Withdrawal => f.write_str("withdrawal"),
        }
    }
}

/// One accepted balance-changing event. Entries are append-only and keep
/// insertion order; rejected operations leave no trace here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementEntry {
    pub kind: EntryKind,
    pub amount: Decimal,
    pub balance_after: Decimal,
}

impl fmt::Display for StatementEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} balance {}", self.kind, self.amount, self.balance_after)
    }
}

/// Why an operation was ignored. Invalid operations are discarded, not
/// failed: callers that don't inspect the [`Outcome`] observe a plain no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    NonPositiveAmount,
    InsufficientFunds,
}

/// Result of a balance-changing operation. Intentionally not `#[must_use]`:
/// the contract is "ignore invalid input silently", and default call sites
/// stay indifferent to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    Ignored(IgnoreReason),
}

impl Outcome {
    pub fn accepted(self) -> bool {
        matches!(self, Outcome::Accepted)
    }
}

/// A checking account: caller-supplied id (uniqueness is the caller's
/// business), a handle to its holder, a balance that never goes negative,
/// and an append-only statement of accepted operations.
#[derive(Debug)]
pub struct Account {
    id: AccountId,
    holder: HolderHandle,
    balance: Decimal,
    statement: Vec<StatementEntry>,
    stats: StatsHandle,
}

impl Account {
    pub fn open(id: AccountId, holder: HolderHandle, stats: StatsHandle) -> Self {
        Self {
            id,
            holder,
            balance: opening_balance(),
            statement: Vec::new(),
            stats,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn holder(&self) -> &AccountHolder {
        &self.holder
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn entries(&self) -> &[StatementEntry] {
        &self.statement
    }

    /// Statement text, one line per accepted operation in insertion order.
    /// A pure projection of [`Self::entries`].
    pub fn statement(&self) -> String {
        self.statement
            .iter()
            .map(StatementEntry::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Credits `amount`. Non-positive amounts are discarded without any
    /// observable effect; accepted deposits append one statement entry and
    /// count as one transaction.
    pub fn deposit(&mut self, amount: Decimal) -> Outcome {
        if amount <= Decimal::ZERO {
            debug!(account = self.id, %amount, "deposit ignored, non-positive amount");
            return Outcome::Ignored(IgnoreReason::NonPositiveAmount);
        }
        self.balance += amount;
        self.record(EntryKind::Deposit, amount);
        Outcome::Accepted
    }

    /// Debits `amount`. An amount above the balance is rejected in full;
    /// non-positive amounts are discarded for symmetry with [`Self::deposit`].
    /// Accepted withdrawals append one statement entry and count as one
    /// transaction.
    pub fn withdraw(&mut self, amount: Decimal) -> Outcome {
        if amount <= Decimal::ZERO {
            debug!(account = self.id, %amount, "withdrawal ignored, non-positive amount");
            return Outcome::Ignored(IgnoreReason::NonPositiveAmount);
        }
        if amount > self.balance {
            debug!(account = self.id, %amount, balance = %self.balance, "withdrawal ignored, insufficient funds");
            return Outcome::Ignored(IgnoreReason::InsufficientFunds);
        }
        self.balance -= amount;
        self.record(EntryKind::Withdrawal, amount);
        Outcome::Accepted
    }

    /// Moves `amount` to `dest`. The debit is attempted exactly as a
    /// withdrawal; the credit happens only if the debit was accepted, so a
    /// rejected transfer leaves both accounts untouched and a successful one
    /// writes one entry on each side and counts as two transactions.
    pub fn transfer_to(&mut self, dest: &mut Account, amount: Decimal) -> Outcome {
        let debit = self.withdraw(amount);
        if debit.accepted() {
            // an accepted debit implies a positive amount, so the credit
            // cannot be rejected
            let credit = dest.deposit(amount);
            debug_assert!(credit.accepted());
        }
        debit
    }

    fn record(&mut self, kind: EntryKind, amount: Decimal) {
        self.statement.push(StatementEntry {
            kind,
            amount,
            balance_after: self.balance,
        });
        self.stats.record_transaction();
    }
}
