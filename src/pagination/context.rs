//! Construction parameters for a pagination control.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::{PaginationError, PaginationResult};

/// Results shown per page when the caller does not say otherwise.
pub const DEFAULT_RESULTS_PER_PAGE: usize = 10;

/// Raw, caller-supplied options.
///
/// Integers are signed so malformed input (negative counts) can be
/// deserialized and rejected or clamped in [`PaginationConfig::validate`]
/// instead of failing inside serde.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationConfig {
    pub total_results: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results_per_page: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_page: Option<i64>,
    #[serde(default)]
    pub label: String,
}

impl PaginationConfig {
    pub fn new(total_results: i64, label: impl Into<String>) -> Self {
        Self {
            total_results,
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_results_per_page(mut self, results_per_page: i64) -> Self {
        self.results_per_page = Some(results_per_page);
        self
    }

    pub fn with_active_page(mut self, active_page: i64) -> Self {
        self.active_page = Some(active_page);
        self
    }

    /// Validate into a [`PaginationContext`].
    ///
    /// A non-positive page size or an empty label is rejected. A negative
    /// result count is clamped to zero and an out-of-range initial page falls
    /// back to page 1, both with a warning.
    pub fn validate(&self) -> PaginationResult<PaginationContext> {
        if self.label.trim().is_empty() {
            return Err(PaginationError::MissingLabel);
        }

        let results_per_page = match self.results_per_page {
            None => DEFAULT_RESULTS_PER_PAGE,
            Some(value) if value > 0 => value as usize,
            Some(value) => return Err(PaginationError::InvalidResultsPerPage { value }),
        };

        let total_results = if self.total_results < 0 {
            warn!(
                total_results = self.total_results,
                "negative total results, treating as empty"
            );
            0
        } else {
            self.total_results as usize
        };

        let mut context = PaginationContext {
            label: self.label.clone(),
            total_results,
            results_per_page,
            active_page: 1,
        };

        if let Some(requested) = self.active_page {
            let total_pages = context.total_pages();
            if requested >= 1 && (requested as usize) <= total_pages {
                context.active_page = requested as usize;
            } else {
                warn!(requested, total_pages, "initial page out of range, starting at page 1");
            }
        }

        Ok(context)
    }
}

/// Validated pagination parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationContext {
    label: String,
    total_results: usize,
    results_per_page: usize,
    active_page: usize,
}

impl PaginationContext {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn total_results(&self) -> usize {
        self.total_results
    }

    pub fn results_per_page(&self) -> usize {
        self.results_per_page
    }

    /// Initial active page.
    pub fn active_page(&self) -> usize {
        self.active_page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_results, self.results_per_page)
    }

    /// 1-based inclusive range of items shown on `page`.
    ///
    /// `None` when there are no results or `page` does not exist.
    pub fn item_range(&self, page: usize) -> Option<(usize, usize)> {
        item_range(page, self.total_results, self.results_per_page)
    }

    pub(crate) fn set_total_results(&mut self, total_results: usize) {
        self.total_results = total_results;
    }

    pub(crate) fn set_results_per_page(&mut self, results_per_page: usize) {
        self.results_per_page = results_per_page.max(1);
    }
}

/// `ceil(total_results / results_per_page)`; a zero page size yields no pages.
pub fn total_pages(total_results: usize, results_per_page: usize) -> usize {
    if results_per_page == 0 {
        return 0;
    }
    total_results.div_ceil(results_per_page)
}

/// 1-based inclusive range of items on `page`, `None` if the page does not exist.
pub fn item_range(page: usize, total_results: usize, results_per_page: usize) -> Option<(usize, usize)> {
    if page == 0 || page > total_pages(total_results, results_per_page) {
        return None;
    }
    let first = (page - 1) * results_per_page + 1;
    let last = (page * results_per_page).min(total_results);
    Some((first, last))
}
