use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::pagination::PaginationError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Pagination(#[from] PaginationError),

    #[error("Failed to read config file {}", .path.display())]
    #[diagnostic(
        code(paginate::cli::config_read),
        help("Check that the file exists and is readable, or pass the options as flags instead.")
    )]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}", .path.display())]
    #[diagnostic(
        code(paginate::cli::config_parse),
        help("Expected a JSON object with totalResults and optional resultsPerPage, activePage and label fields.")
    )]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown navigation event: '{event}'")]
    #[diagnostic(
        code(paginate::cli::invalid_event),
        help("Use next, prev, a page number, resize=<total results> or per-page=<n>")
    )]
    InvalidEvent { event: String },

    #[error("Failed to serialize output: {message}")]
    #[diagnostic(code(paginate::cli::serialization))]
    Serialization { message: String },
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization {
            message: e.to_string(),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
