//! Pagination configuration errors.
//!
//! Navigation itself never fails; every transition is guarded. The only
//! error surface is validation of the construction parameters.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while validating a [`PaginationConfig`](super::PaginationConfig).
#[derive(Error, Diagnostic, Debug, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Invalid results per page: {value}")]
    #[diagnostic(
        code(paginate::config::invalid_results_per_page),
        help("resultsPerPage must be a positive integer (default: 10)")
    )]
    InvalidResultsPerPage { value: i64 },

    #[error("Missing navigation label")]
    #[diagnostic(
        code(paginate::config::missing_label),
        help("Provide a non-empty label; it names the navigation region for assistive technology")
    )]
    MissingLabel,
}

/// Result type for pagination configuration.
pub type PaginationResult<T> = Result<T, PaginationError>;
