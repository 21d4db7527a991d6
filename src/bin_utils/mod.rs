//! This module could be a separate crate on its own, to bootstrap
//! [`checking_ledger`] within binary but for simplicitly purposes, I include
//! this module directly in binary.

use std::io::{Read, Write};

use crate::processor::{OperationProcessError, OperationProcessor, in_memory_bank::InMemoryBank};
use anyhow::Result;
use csv_parser::CsvOperationParser;
use csv_printer::{AccountSummary, print_accounts};
use tracing::info;
pub mod csv_parser;
pub mod csv_printer;

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, OperationProcessError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvOperationParser::new(self.input);

        let mut bank = InMemoryBank::default();

        for (line, row) in parser {
            if let Err(err) = bank.process_operation(
                row.op,
                row.account,
                row.counterparty,
                row.amount,
                row.name,
                row.tax_id,
            ) {
                (self.error_printer)(line, err);
            }
        }

        info!(
            total_transactions = bank.stats().total_transactions(),
            last_holder_tax_id = bank.stats().last_holder_tax_id(),
            "all operations processed"
        );

        print_accounts(
            self.output,
            bank.accounts.iter().map(|(id, acc)| AccountSummary {
                account: *id,
                tax_id: acc.holder().tax_id(),
                balance: acc.balance(),
                transactions: acc.entries().len(),
            }),
        )
    }
}
