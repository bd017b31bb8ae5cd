//! Tests for the control render model.

use crate::pagination::{ButtonVariant, PageControl, PageEvent, PagingState, render_text};

#[test]
fn controls_wrap_window_with_navigation() {
    let controls = PagingState::new(Some(6), 12).controls();
    assert_eq!(controls.len(), 9);
    assert_eq!(controls[0], PageControl::Previous { disabled: false });
    assert_eq!(controls[8], PageControl::Next { disabled: false });
    assert_eq!(controls[4], PageControl::Page { page: 6, active: true });
    assert_eq!(controls[2], PageControl::Ellipsis);
}

#[test]
fn boundary_controls_disable_at_edges() {
    let first = PagingState::new(Some(1), 3).controls();
    assert!(first[0].is_disabled());
    assert!(!first[first.len() - 1].is_disabled());

    let last = PagingState::new(Some(3), 3).controls();
    assert!(!last[0].is_disabled());
    assert!(last[last.len() - 1].is_disabled());
}

#[test]
fn only_active_page_uses_primary_variant() {
    let controls = PagingState::new(Some(2), 5).controls();
    let primary: Vec<&PageControl> = controls
        .iter()
        .filter(|control| control.variant() == ButtonVariant::Primary)
        .collect();
    assert_eq!(primary, vec![&PageControl::Page { page: 2, active: true }]);
}

#[test]
fn ellipsis_is_inert() {
    let ellipsis = PageControl::Ellipsis;
    assert!(ellipsis.is_disabled());
    assert_eq!(ellipsis.event(), None);
    assert_eq!(ellipsis.aria_label(), None);
    assert_eq!(ellipsis.text().as_deref(), Some("..."));
}

#[test]
fn controls_map_to_events() {
    assert_eq!(
        PageControl::Page { page: 4, active: false }.event(),
        Some(PageEvent::Select(4))
    );
    assert_eq!(
        PageControl::Previous { disabled: false }.event(),
        Some(PageEvent::Previous)
    );
    assert_eq!(PageControl::Next { disabled: true }.event(), None);
}

#[test]
fn navigation_controls_are_icon_only_with_aria_labels() {
    let previous = PageControl::Previous { disabled: false };
    assert_eq!(previous.text(), None);
    assert_eq!(previous.aria_label().as_deref(), Some("Previous page"));
    assert_eq!(
        PageControl::Page { page: 3, active: true }.aria_label().as_deref(),
        Some("Page 3, current page")
    );
}

#[test]
fn text_rendering_marks_active_and_disabled() {
    assert_eq!(
        render_text(&PagingState::new(Some(6), 12).controls()),
        "‹ 1 ... 5 [6] 7 ... 12 ›"
    );
    assert_eq!(
        render_text(&PagingState::new(Some(1), 12).controls()),
        "· [1] 2 3 4 5 ... 12 ›"
    );
    assert_eq!(render_text(&PagingState::new(None, 0).controls()), "· ·");
}
