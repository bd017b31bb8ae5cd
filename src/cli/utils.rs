//! Shared utilities for CLI commands

use std::env;

use tabled::{Table, settings::Style};

/// Output format used when neither `--format` nor `PAGINATE_FORMAT` is set
pub const DEFAULT_FORMAT: &str = "table";

/// Resolve the output format
///
/// Priority:
/// 1. Explicit `--format` flag
/// 2. PAGINATE_FORMAT environment variable
/// 3. Default: table
pub fn resolve_format(format: Option<String>) -> String {
    format
        .or_else(|| env::var("PAGINATE_FORMAT").ok())
        .unwrap_or_else(|| DEFAULT_FORMAT.to_string())
}

/// Apply consistent table styling
pub fn apply_table_style(table: &mut Table) {
    table.with(Style::rounded());
}
