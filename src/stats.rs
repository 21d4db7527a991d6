use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicU64, Ordering},
};

pub type TaxId = u32;

/// Handle to the registry shared by every holder and account of one
/// logical process. Constructed once at startup (or once per test).
pub type StatsHandle = Arc<ProcessStats>;

/// Process-wide accounting state.
///
/// An explicitly owned registry instead of statics, so each test run can
/// start from a fresh instance. The counter covers every *accepted*
/// balance-changing operation across all accounts; a transfer contributes
/// one debit plus one credit. The last-holder slot is a single scalar
/// overwritten on every holder registration, not a per-account lookup.
#[derive(Debug, Default)]
pub struct ProcessStats {
    transactions: AtomicU64,
    last_holder_tax_id: Mutex<Option<TaxId>>,
}

impl ProcessStats {
    pub fn new_handle() -> StatsHandle {
        Arc::new(Self::default())
    }

    pub(crate) fn record_transaction(&self) {
        self.transactions.fetch_add(1, Ordering::Relaxed);
    }

    /// Accepted deposits and withdrawals across all accounts, ever.
    /// Never reset for the lifetime of the registry.
    pub fn total_transactions(&self) -> u64 {
        self.transactions.load(Ordering::Relaxed)
    }

    pub(crate) fn record_holder(&self, tax_id: TaxId) {
        *self.lock_slot() = Some(tax_id);
    }

    /// Tax id of the most recently registered holder, `None` until the
    /// first registration.
    pub fn last_holder_tax_id(&self) -> Option<TaxId> {
        *self.lock_slot()
    }

    fn lock_slot(&self) -> std::sync::MutexGuard<'_, Option<TaxId>> {
        self.last_holder_tax_id
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_accumulates() {
        let stats = ProcessStats::new_handle();
        assert_eq!(stats.total_transactions(), 0);
        stats.record_transaction();
        stats.record_transaction();
        assert_eq!(stats.total_transactions(), 2);
    }

    #[test]
    fn last_holder_slot_is_overwritten() {
        let stats = ProcessStats::new_handle();
        assert_eq!(stats.last_holder_tax_id(), None);
        stats.record_holder(11111);
        stats.record_holder(22222);
        assert_eq!(stats.last_holder_tax_id(), Some(22222));
    }
}
