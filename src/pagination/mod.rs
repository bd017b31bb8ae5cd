//! Numbered pagination core.
//!
//! # Architecture
//!
//! - `window`: pure page-window calculation
//! - `controller`: paging state machine and change notification
//! - `context`: construction parameters and derived page counts
//! - `controls`: render model consumed by button renderers
//! - `error`: configuration validation errors

mod context;
mod controller;
mod controls;
mod error;
mod window;

#[cfg(test)]
mod controller_test;
#[cfg(test)]
mod controls_test;

pub use context::{
    DEFAULT_RESULTS_PER_PAGE, PaginationConfig, PaginationContext, item_range, total_pages,
};
pub use controller::{
    PageChange, PageChangeListener, PageEvent, PagingController, PagingState, Transition,
};
pub use controls::{ButtonVariant, PageControl, render_text};
pub use error::{PaginationError, PaginationResult};
pub use window::{MAX_VISIBLE_PAGES, PageToken, Window, compute_window};

#[cfg(test)]
pub(crate) use controller::MockPageChangeListener;
