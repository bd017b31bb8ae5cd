//! Page window calculation.
//!
//! Maps `(active page, total pages)` to the ordered run of page numbers and
//! ellipses a numbered pagination control displays. The first and last page
//! are always anchored; interior positions follow the active page.

use std::fmt;

use serde::Serialize;

/// Maximum number of tokens (pages and ellipses) in a window.
pub const MAX_VISIBLE_PAGES: usize = 7;

/// Pages shown in the fixed leading or trailing block next to a single ellipsis.
const EDGE_BLOCK: usize = MAX_VISIBLE_PAGES - 2;

/// Distance from the last page at which the trailing block takes over.
const TRAILING_REACH: usize = MAX_VISIBLE_PAGES / 2;

/// A single entry of a [`Window`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "page", rename_all = "lowercase")]
pub enum PageToken {
    /// A concrete, selectable page number (1-based).
    Page(usize),
    /// Non-interactive placeholder for skipped pages.
    Ellipsis,
}

impl PageToken {
    /// Page number carried by the token, `None` for an ellipsis.
    pub fn page(&self) -> Option<usize> {
        match self {
            PageToken::Page(page) => Some(*page),
            PageToken::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageToken::Ellipsis)
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::Page(page) => write!(f, "{}", page),
            PageToken::Ellipsis => f.write_str("..."),
        }
    }
}

/// Ordered tokens to display, at most [`MAX_VISIBLE_PAGES`] long.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Window(Vec<PageToken>);

impl Window {
    pub fn tokens(&self) -> &[PageToken] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PageToken> {
        self.0.iter()
    }

    /// Concrete page numbers in display order, ellipses skipped.
    pub fn pages(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().filter_map(PageToken::page)
    }

    /// Tokens paired with their position.
    ///
    /// A window can hold two ellipses, so list renderers key entries by
    /// position rather than by token value.
    pub fn keyed(&self) -> Vec<(usize, PageToken)> {
        self.0.iter().copied().enumerate().collect()
    }
}

impl<'a> IntoIterator for &'a Window {
    type Item = &'a PageToken;
    type IntoIter = std::slice::Iter<'a, PageToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", rendered.join(", "))
    }
}

/// Compute the window for `active_page` out of `total_pages`.
///
/// Returns an empty window when there are no pages.
pub fn compute_window(active_page: usize, total_pages: usize) -> Window {
    use PageToken::{Ellipsis, Page};

    if total_pages <= MAX_VISIBLE_PAGES {
        return Window((1..=total_pages).map(Page).collect());
    }

    let mut tokens = Vec::with_capacity(MAX_VISIBLE_PAGES);

    if active_page < EDGE_BLOCK {
        tokens.extend((1..=EDGE_BLOCK).map(Page));
        tokens.push(Ellipsis);
        tokens.push(Page(total_pages));
    } else if active_page + TRAILING_REACH < total_pages {
        tokens.push(Page(1));
        tokens.push(Ellipsis);
        tokens.extend((active_page - 1..=active_page + 1).map(Page));
        tokens.push(Ellipsis);
        tokens.push(Page(total_pages));
    } else {
        tokens.push(Page(1));
        tokens.push(Ellipsis);
        tokens.extend((total_pages + 1 - EDGE_BLOCK..=total_pages).map(Page));
    }

    Window(tokens)
}
