use serde::Serialize;
use tracing::warn;

use crate::cli::error::CliResult;
use crate::pagination::{PageControl, PagingState, Window, render_text};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowReport {
    pub active_page: usize,
    pub total_pages: usize,
    pub window: Window,
    pub controls: Vec<PageControl>,
}

impl From<PagingState> for WindowReport {
    fn from(state: PagingState) -> Self {
        Self {
            active_page: state.active_page(),
            total_pages: state.total_pages(),
            window: state.window(),
            controls: state.controls(),
        }
    }
}

/// Show the window and control bar for `active` out of `total_pages`
pub fn show_window(active: usize, total_pages: usize, format: &str) -> CliResult<String> {
    let state = PagingState::new(Some(active), total_pages);
    if state.active_page() != active {
        warn!(
            requested = active,
            total_pages, "page out of range, showing page 1"
        );
    }

    let report = WindowReport::from(state);

    match format {
        "json" => Ok(serde_json::to_string_pretty(&report)?),
        _ => {
            if report.window.is_empty() {
                return Ok("No pages.".to_string());
            }
            Ok(format!(
                "{}\n{}",
                report.window,
                render_text(&report.controls)
            ))
        }
    }
}
