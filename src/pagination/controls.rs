//! Render model for the controls of a pagination bar.
//!
//! Renderers (the Leptos component, the CLI text bar) only need a clickable,
//! possibly disabled, possibly active label. [`PageControl`] carries exactly
//! that, so the paging rules stay out of the markup.

use serde::Serialize;

use super::controller::{PageEvent, PagingState};
use super::window::PageToken;

/// Visual weight of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    Primary,
    Link,
}

/// One control in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PageControl {
    Previous { disabled: bool },
    Page { page: usize, active: bool },
    Ellipsis,
    Next { disabled: bool },
}

impl PageControl {
    pub fn variant(&self) -> ButtonVariant {
        match self {
            PageControl::Page { active: true, .. } => ButtonVariant::Primary,
            _ => ButtonVariant::Link,
        }
    }

    pub fn is_disabled(&self) -> bool {
        match self {
            PageControl::Previous { disabled } | PageControl::Next { disabled } => *disabled,
            PageControl::Page { .. } => false,
            PageControl::Ellipsis => true,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, PageControl::Page { active: true, .. })
    }

    /// Visible text. Navigation controls are icon-only and have none.
    pub fn text(&self) -> Option<String> {
        match self {
            PageControl::Page { page, .. } => Some(page.to_string()),
            PageControl::Ellipsis => Some("...".to_string()),
            PageControl::Previous { .. } | PageControl::Next { .. } => None,
        }
    }

    /// Accessible name; `None` for the inert ellipsis.
    pub fn aria_label(&self) -> Option<String> {
        match self {
            PageControl::Previous { .. } => Some("Previous page".to_string()),
            PageControl::Next { .. } => Some("Next page".to_string()),
            PageControl::Page { page, active: true } => Some(format!("Page {}, current page", page)),
            PageControl::Page { page, .. } => Some(format!("Page {}", page)),
            PageControl::Ellipsis => None,
        }
    }

    /// Event to dispatch when the control is clicked.
    ///
    /// Disabled controls and ellipses have no handler.
    pub fn event(&self) -> Option<PageEvent> {
        match *self {
            PageControl::Previous { disabled: false } => Some(PageEvent::Previous),
            PageControl::Next { disabled: false } => Some(PageEvent::Next),
            PageControl::Page { page, .. } => Some(PageEvent::Select(page)),
            _ => None,
        }
    }
}

impl PagingState {
    /// Full control list: previous, the window tokens, next.
    pub fn controls(&self) -> Vec<PageControl> {
        let window = self.window();
        let mut controls = Vec::with_capacity(window.len() + 2);

        controls.push(PageControl::Previous {
            disabled: !self.can_go_previous(),
        });
        controls.extend(window.iter().map(|token| match *token {
            PageToken::Page(page) => PageControl::Page {
                page,
                active: page == self.active_page(),
            },
            PageToken::Ellipsis => PageControl::Ellipsis,
        }));
        controls.push(PageControl::Next {
            disabled: !self.can_go_next(),
        });

        controls
    }
}

/// One-line text rendering, e.g. `‹ 1 ... 5 [6] 7 ... 12 ›`.
///
/// Disabled navigation controls are drawn as `·`.
pub fn render_text(controls: &[PageControl]) -> String {
    controls
        .iter()
        .map(|control| match control {
            PageControl::Previous { disabled: false } => "‹".to_string(),
            PageControl::Next { disabled: false } => "›".to_string(),
            PageControl::Previous { .. } | PageControl::Next { .. } => "·".to_string(),
            PageControl::Page { page, active: true } => format!("[{}]", page),
            PageControl::Page { page, .. } => page.to_string(),
            PageControl::Ellipsis => "...".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
