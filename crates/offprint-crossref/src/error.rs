//! Deposit generation errors
//!
//! Article tree assembly itself is infallible: missing optional metadata
//! is omitted from the output rather than reported. Errors only arise at
//! the deposit-document level.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DepositError {
    /// A submission references an issue the lookup cannot resolve
    #[error("issue {0} could not be resolved")]
    UnknownIssue(i64),
}
