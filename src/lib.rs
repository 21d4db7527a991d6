/// Account holder identity records, shared between accounts through a
/// reference-counted handle.
pub mod holder;

/// Process-wide registry: the accepted-transaction counter and the
/// last-registered-holder slot, shared by every account in the process.
pub mod stats;

/// All logic related to a single checking account: balance, statement
/// and the silent-no-op guard policy for deposit, withdraw and transfer.
pub mod account;

/// Typed driver operations, validated before execution by [`processor`].
pub mod command;

/// Operation processor interface, plus "in memory" implementation.
/// Coordinates holder registration, account opening and routing of
/// balance-changing operations.
///
/// NOTE: Technically this interface is not necessary, but it might be
/// good integration point to replace in memory implementation with
/// something more sophisticated.
pub mod processor;

/// Ideally, this module should exists on its own crate, as a way to
/// bootstrap core logic. However, I want to use it for integration test
/// so I put it here.
pub mod bin_utils;
