pub mod ui_components;

pub use ui_components::{ButtonSize, PageButton, Pagination};
