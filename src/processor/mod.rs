use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::AccountId,
    command::{OperationKind, OperationParseError},
    stats::TaxId,
};

pub mod in_memory_bank;

/// Driver-level failures: malformed or unroutable operations. Core-level
/// rejections (insufficient funds, non-positive amounts) are deliberately
/// not represented here; those are silent no-ops, not errors.
#[derive(Debug, Error)]
pub enum OperationProcessError {
    #[error(transparent)]
    ParseErr(#[from] OperationParseError),
    #[error("Account {0} does not exist")]
    UnknownAccount(AccountId),
    #[error("No holder registered with tax id {0}")]
    UnknownHolder(TaxId),
    #[error("Account {0} is already open")]
    DuplicateAccount(AccountId),
    #[error("Transfer needs two distinct accounts, got {0} twice")]
    SelfTransfer(AccountId),
}

pub trait OperationProcessor {
    fn process_operation(
        &mut self,
        kind: OperationKind,
        account: Option<AccountId>,
        counterparty: Option<AccountId>,
        amount: Option<Decimal>,
        name: Option<String>,
        tax_id: Option<TaxId>,
    ) -> Result<(), OperationProcessError>;
}
