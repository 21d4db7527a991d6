use std::sync::Arc;

use crate::stats::{StatsHandle, TaxId};

/// Shared-ownership handle to a holder. One holder may back any number of
/// accounts and outlives all of them; no account owns its holder.
pub type HolderHandle = Arc<AccountHolder>;

/// Immutable identity record of an account holder. Neither field is
/// validated: empty names and duplicate tax ids are accepted as-is.
#[derive(Debug, PartialEq, Eq)]
pub struct AccountHolder {
    name: String,
    tax_id: TaxId,
}

impl AccountHolder {
    /// Creates a holder and records its tax id as the process-wide
    /// "last registered holder".
    pub fn register(name: impl Into<String>, tax_id: TaxId, stats: &StatsHandle) -> HolderHandle {
        stats.record_holder(tax_id);
        Arc::new(Self {
            name: name.into(),
            tax_id,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tax_id(&self) -> TaxId {
        self.tax_id
    }
}
