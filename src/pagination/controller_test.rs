//! Tests for the paging state machine and controller.

use mockall::Sequence;
use mockall::predicate::eq;

use crate::pagination::PageToken::{Ellipsis, Page};
use crate::pagination::{
    MockPageChangeListener, PageChange, PageChangeListener, PageEvent, PaginationConfig,
    PaginationContext, PagingController, PagingState,
};

/// Listener that records every notification.
#[derive(Default)]
struct Recorder {
    pages: Vec<usize>,
}

impl PageChangeListener for Recorder {
    fn page_changed(&mut self, page: usize) {
        self.pages.push(page);
    }
}

fn context(total_results: i64, active_page: Option<i64>) -> PaginationContext {
    let mut config = PaginationConfig::new(total_results, "Results");
    config.active_page = active_page;
    config.validate().unwrap()
}

// =============================================================================
// Transition function
// =============================================================================

#[test]
fn previous_is_guarded_on_first_page() {
    let state = PagingState::new(None, 12);
    let transition = state.apply(PageEvent::Previous);
    assert_eq!(transition.state, state);
    assert_eq!(transition.notification, None);
}

#[test]
fn next_is_guarded_on_last_page() {
    let state = PagingState::new(Some(12), 12);
    let transition = state.apply(PageEvent::Next);
    assert_eq!(transition.state.active_page(), 12);
    assert_eq!(transition.notification, None);
}

#[test]
fn next_moves_forward_and_recomputes_window() {
    let transition = PagingState::new(Some(5), 12).apply(PageEvent::Next);
    assert_eq!(transition.state.active_page(), 6);
    assert_eq!(
        transition.window.tokens(),
        &[Page(1), Ellipsis, Page(5), Page(6), Page(7), Ellipsis, Page(12)]
    );
    assert_eq!(
        transition.notification,
        Some(PageChange {
            previous: 5,
            current: 6
        })
    );
}

#[test]
fn select_ignores_missing_and_current_pages() {
    let state = PagingState::new(Some(3), 12);
    for page in [0, 3, 13] {
        let transition = state.apply(PageEvent::Select(page));
        assert_eq!(transition.state, state, "page={page}");
        assert_eq!(transition.notification, None, "page={page}");
    }

    let transition = state.apply(PageEvent::Select(10));
    assert_eq!(transition.state.active_page(), 10);
    assert!(transition.notification.is_some());
}

#[test]
fn resize_clamps_active_page() {
    let state = PagingState::new(Some(10), 12);
    let transition = state.apply(PageEvent::Resize(4));
    assert_eq!(transition.state.active_page(), 4);
    assert_eq!(transition.state.total_pages(), 4);
    assert_eq!(
        transition.notification,
        Some(PageChange {
            previous: 10,
            current: 4
        })
    );

    let grown = transition.state.apply(PageEvent::Resize(40));
    assert_eq!(grown.state.active_page(), 4);
    assert_eq!(grown.notification, None);
}

#[test]
fn resize_to_zero_pages_keeps_page_one() {
    let transition = PagingState::new(Some(3), 5).apply(PageEvent::Resize(0));
    assert_eq!(transition.state.active_page(), 1);
    assert!(transition.window.is_empty());
    assert!(!transition.state.can_go_next());
    assert!(!transition.state.can_go_previous());
}

#[test]
fn active_page_stays_in_bounds_for_any_event_sequence() {
    let events = [
        PageEvent::Next,
        PageEvent::Next,
        PageEvent::Select(9),
        PageEvent::Next,
        PageEvent::Next,
        PageEvent::Next,
        PageEvent::Next,
        PageEvent::Previous,
        PageEvent::Select(1),
        PageEvent::Previous,
        PageEvent::Previous,
    ];
    let mut state = PagingState::new(None, 10);
    for event in events {
        state = state.apply(event).state;
        assert!((1..=10).contains(&state.active_page()), "{event:?}");
    }
    assert_eq!(state.active_page(), 1);
}

// =============================================================================
// Controller
// =============================================================================

#[test]
fn initialize_notifies_default_start_page() {
    let mut listener = MockPageChangeListener::new();
    listener
        .expect_page_changed()
        .with(eq(1))
        .times(1)
        .return_const(());

    let controller = PagingController::initialize(context(120, None), listener);
    assert_eq!(controller.active_page(), 1);
    assert_eq!(controller.total_pages(), 12);
}

#[test]
fn initialize_honours_override() {
    let controller = PagingController::initialize(context(120, Some(6)), Recorder::default());
    assert_eq!(controller.active_page(), 6);
    assert_eq!(controller.window().to_string(), "[1, ..., 5, 6, 7, ..., 12]");
    assert_eq!(controller.listener().pages, vec![6]);
}

#[test]
fn listener_fires_once_per_committed_change() {
    let mut listener = MockPageChangeListener::new();
    let mut seq = Sequence::new();
    for page in [1, 2, 3, 2, 12] {
        listener
            .expect_page_changed()
            .with(eq(page))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
    }

    let mut controller = PagingController::initialize(context(120, None), listener);
    assert!(!controller.go_to_previous());
    assert!(controller.go_to_next());
    assert!(controller.go_to_next());
    assert!(controller.go_to_previous());
    assert!(!controller.select_page(2));
    assert!(controller.select_page(12));
    assert!(!controller.go_to_next());
}

#[test]
fn next_on_last_page_is_silent() {
    let mut controller = PagingController::initialize(context(120, Some(12)), Recorder::default());
    assert!(!controller.go_to_next());
    assert_eq!(controller.active_page(), 12);
    assert_eq!(controller.listener().pages, vec![12]);
}

#[test]
fn shrinking_result_count_clamps_and_notifies() {
    let mut controller = PagingController::initialize(context(120, Some(11)), Recorder::default());
    assert!(controller.set_total_results(30));
    assert_eq!(controller.active_page(), 3);
    assert_eq!(controller.window().to_string(), "[1, 2, 3]");
    assert_eq!(controller.listener().pages, vec![11, 3]);
}

#[test]
fn growing_page_size_clamps_active_page() {
    let mut controller = PagingController::initialize(context(120, Some(8)), Recorder::default());
    assert!(controller.set_results_per_page(50));
    assert_eq!(controller.total_pages(), 3);
    assert_eq!(controller.active_page(), 3);

    assert!(!controller.set_results_per_page(40));
    assert_eq!(controller.active_page(), 3);
    assert_eq!(controller.into_listener().pages, vec![8, 3]);
}

#[test]
fn closures_work_as_listeners() {
    let mut seen: Vec<usize> = Vec::new();
    {
        let mut controller = PagingController::initialize(context(45, None), |page: usize| seen.push(page));
        controller.go_to_next();
        controller.select_page(5);
    }
    assert_eq!(seen, vec![1, 2, 5]);
}

#[test]
fn empty_result_set_has_no_navigation() {
    let mut controller = PagingController::initialize(context(0, None), Recorder::default());
    assert!(controller.window().is_empty());
    assert!(!controller.go_to_next());
    assert!(!controller.go_to_previous());
    assert!(!controller.select_page(1));
    assert_eq!(controller.active_page(), 1);
    assert_eq!(controller.listener().pages, vec![1]);
}
