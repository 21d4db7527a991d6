use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::account::AccountId;
use crate::stats::TaxId;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Holder,
    Open,
    Deposit,
    Withdraw,
    Transfer,
}

#[derive(Debug, Error)]
pub enum OperationParseError {
    #[error("Field `{field}` is required for {kind:?}")]
    FieldRequired {
        kind: OperationKind,
        field: &'static str,
    },
}

/// A fully validated driver operation. Raw rows carry every field as an
/// `Option`; parsing pins down which ones each kind actually needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    RegisterHolder { name: String, tax_id: TaxId },
    OpenAccount { id: AccountId, tax_id: TaxId },
    Deposit { account: AccountId, amount: Decimal },
    Withdraw { account: AccountId, amount: Decimal },
    Transfer {
        from: AccountId,
        to: AccountId,
        amount: Decimal,
    },
}

impl Operation {
    pub fn parse(
        kind: OperationKind,
        account: Option<AccountId>,
        counterparty: Option<AccountId>,
        amount: Option<Decimal>,
        name: Option<String>,
        tax_id: Option<TaxId>,
    ) -> Result<Self, OperationParseError> {
        let missing = |field: &'static str| OperationParseError::FieldRequired { kind, field };
        match kind {
            OperationKind::Holder => Ok(Self::RegisterHolder {
                name: name.ok_or_else(|| missing("name"))?,
                tax_id: tax_id.ok_or_else(|| missing("tax_id"))?,
            }),
            OperationKind::Open => Ok(Self::OpenAccount {
                id: account.ok_or_else(|| missing("account"))?,
                tax_id: tax_id.ok_or_else(|| missing("tax_id"))?,
            }),
            OperationKind::Deposit => Ok(Self::Deposit {
                account: account.ok_or_else(|| missing("account"))?,
                amount: amount.ok_or_else(|| missing("amount"))?,
            }),
            OperationKind::Withdraw => Ok(Self::Withdraw {
                account: account.ok_or_else(|| missing("account"))?,
                amount: amount.ok_or_else(|| missing("amount"))?,
            }),
            OperationKind::Transfer => Ok(Self::Transfer {
                from: account.ok_or_else(|| missing("account"))?,
                to: counterparty.ok_or_else(|| missing("counterparty"))?,
                amount: amount.ok_or_else(|| missing("amount"))?,
            }),
        }
    }
}
