use std::fs;
use std::path::Path;

use serde::Serialize;
use tabled::{Table, Tabled};

use crate::cli::error::{CliError, CliResult};
use crate::cli::utils::apply_table_style;
use crate::pagination::{
    PageChangeListener, PageEvent, PaginationConfig, PagingController, Window, render_text,
};

/// Label used when neither the config file nor `--label` provides one
pub const DEFAULT_LABEL: &str = "Results";

/// Flag overrides applied on top of the config file
#[derive(Debug, Default)]
pub struct NavigateParams {
    pub total_results: Option<i64>,
    pub per_page: Option<i64>,
    pub active: Option<i64>,
    pub label: Option<String>,
}

/// One step of a navigation script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Event(PageEvent),
    SetTotalResults(usize),
    SetResultsPerPage(usize),
}

impl Step {
    pub fn parse(raw: &str) -> CliResult<Self> {
        let invalid = || CliError::InvalidEvent {
            event: raw.to_string(),
        };
        let token = raw.trim().to_ascii_lowercase();

        let step = match token.as_str() {
            "next" | "n" => Step::Event(PageEvent::Next),
            "prev" | "previous" | "p" => Step::Event(PageEvent::Previous),
            other => {
                if let Some(value) = other.strip_prefix("resize=") {
                    Step::SetTotalResults(value.parse().map_err(|_| invalid())?)
                } else if let Some(value) = other.strip_prefix("per-page=") {
                    match value.parse() {
                        Ok(size) if size > 0 => Step::SetResultsPerPage(size),
                        _ => return Err(invalid()),
                    }
                } else {
                    Step::Event(PageEvent::Select(other.parse().map_err(|_| invalid())?))
                }
            }
        };

        Ok(step)
    }
}

/// Result of one replayed step
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRecord {
    pub step: String,
    pub active_page: usize,
    pub total_pages: usize,
    pub window: Window,
    pub bar: String,
    /// Page delivered to the change listener, if it fired
    pub notified: Option<usize>,
}

#[derive(Tabled)]
pub(crate) struct StepDisplay {
    #[tabled(rename = "Step")]
    pub(crate) step: String,
    #[tabled(rename = "Page")]
    pub(crate) page: String,
    #[tabled(rename = "Controls")]
    pub(crate) bar: String,
    #[tabled(rename = "onChange")]
    pub(crate) notified: String,
}

impl From<&StepRecord> for StepDisplay {
    fn from(record: &StepRecord) -> Self {
        Self {
            step: record.step.clone(),
            page: format!("{}/{}", record.active_page, record.total_pages),
            bar: record.bar.clone(),
            notified: record
                .notified
                .map(|page| page.to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Collects the pages announced by the controller
#[derive(Debug, Default)]
struct NotificationLog {
    pages: Vec<usize>,
}

impl NotificationLog {
    fn take_latest(&mut self) -> Option<usize> {
        let latest = self.pages.last().copied();
        self.pages.clear();
        latest
    }
}

impl PageChangeListener for NotificationLog {
    fn page_changed(&mut self, page: usize) {
        self.pages.push(page);
    }
}

/// Load a JSON config file, or start from an empty config
pub fn load_config(path: Option<&Path>) -> CliResult<PaginationConfig> {
    let Some(path) = path else {
        return Ok(PaginationConfig::default());
    };

    let raw = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Merge flag overrides into `config`
pub fn apply_params(mut config: PaginationConfig, params: NavigateParams) -> PaginationConfig {
    if let Some(total_results) = params.total_results {
        config.total_results = total_results;
    }
    if let Some(per_page) = params.per_page {
        config.results_per_page = Some(per_page);
    }
    if let Some(active) = params.active {
        config.active_page = Some(active);
    }
    match params.label {
        Some(label) => config.label = label,
        None if config.label.is_empty() => config.label = DEFAULT_LABEL.to_string(),
        None => {}
    }
    config
}

/// Replay `events` against a fresh controller built from `config`
pub fn replay(config: &PaginationConfig, events: &[String]) -> CliResult<Vec<StepRecord>> {
    let context = config.validate()?;
    let steps = events
        .iter()
        .map(|raw| Step::parse(raw))
        .collect::<CliResult<Vec<_>>>()?;

    let mut controller = PagingController::initialize(context, NotificationLog::default());
    let mut records = Vec::with_capacity(steps.len() + 1);

    let mut record = |controller: &mut PagingController<NotificationLog>, step: String| {
        let state = controller.state();
        let notified = controller.listener_mut().take_latest();
        records.push(StepRecord {
            step,
            active_page: state.active_page(),
            total_pages: state.total_pages(),
            window: controller.window().clone(),
            bar: render_text(&state.controls()),
            notified,
        });
    };

    record(&mut controller, "init".to_string());
    for (raw, step) in events.iter().zip(steps) {
        match step {
            Step::Event(event) => {
                controller.dispatch(event);
            }
            Step::SetTotalResults(total) => {
                controller.set_total_results(total);
            }
            Step::SetResultsPerPage(size) => {
                controller.set_results_per_page(size);
            }
        }
        record(&mut controller, raw.clone());
    }

    Ok(records)
}

/// Replay navigation events and format the resulting steps
pub fn navigate(
    config_path: Option<&Path>,
    params: NavigateParams,
    events: &[String],
    format: &str,
) -> CliResult<String> {
    let config = apply_params(load_config(config_path)?, params);
    let records = replay(&config, events)?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&records)?),
        _ => Ok(format_table(&records)),
    }
}

pub(crate) fn format_table(records: &[StepRecord]) -> String {
    let display: Vec<StepDisplay> = records.iter().map(StepDisplay::from).collect();
    let mut table = Table::new(display);
    apply_table_style(&mut table);
    table.to_string()
}
