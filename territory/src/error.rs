use miette::Diagnostic;
use thiserror::Error;

/// Error surface for the whole crate.
///
/// Construction failures and operation precondition failures are the only
/// two kinds; nothing retries or degrades internally.
#[derive(Debug, Error, Diagnostic)]
pub enum TerritoryError {
    #[error("Invalid territory shape: {0}")]
    #[diagnostic(
        code(territory::invalid_shape),
        help("A territory is 1-26 columns of equal, non-zero length holding only 0 or 1")
    )]
    InvalidShape(String),

    #[error("Invalid argument: {0}")]
    #[diagnostic(code(territory::invalid_argument))]
    InvalidArgument(String),
}
