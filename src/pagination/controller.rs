//! Paging state machine.
//!
//! States are "active page = k" for k in `[1, total_pages]`. Every event goes
//! through [`PagingState::apply`], a pure transition that returns the next
//! state, its recomputed window and the notification (if any) owed to the
//! caller. [`PagingController`] owns one state and delivers those
//! notifications to a [`PageChangeListener`].

use serde::Serialize;
use tracing::debug;

#[cfg(test)]
use mockall::automock;

use super::context::PaginationContext;
use super::window::{Window, compute_window};

/// Navigation events accepted by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum PageEvent {
    Previous,
    Next,
    Select(usize),
    /// The number of pages changed (new result count or page size).
    Resize(usize),
}

/// Active page within a known page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingState {
    active_page: usize,
    total_pages: usize,
}

impl PagingState {
    /// Start on `requested` when it names an existing page, otherwise on page 1.
    pub fn new(requested: Option<usize>, total_pages: usize) -> Self {
        let active_page = requested
            .filter(|page| (1..=total_pages).contains(page))
            .unwrap_or(1);
        Self {
            active_page,
            total_pages,
        }
    }

    pub fn active_page(&self) -> usize {
        self.active_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn can_go_previous(&self) -> bool {
        self.active_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.active_page < self.total_pages
    }

    pub fn window(&self) -> Window {
        compute_window(self.active_page, self.total_pages)
    }

    /// Apply `event` and return the resulting transition.
    ///
    /// Guarded events (previous on page 1, next on the last page, selecting a
    /// missing or already active page) leave the state untouched and carry no
    /// notification.
    pub fn apply(self, event: PageEvent) -> Transition {
        let next = match event {
            PageEvent::Previous if self.can_go_previous() => Self {
                active_page: self.active_page - 1,
                ..self
            },
            PageEvent::Next if self.can_go_next() => Self {
                active_page: self.active_page + 1,
                ..self
            },
            PageEvent::Select(page) if (1..=self.total_pages).contains(&page) => Self {
                active_page: page,
                ..self
            },
            PageEvent::Resize(total_pages) => Self {
                active_page: self.active_page.clamp(1, total_pages.max(1)),
                total_pages,
            },
            _ => self,
        };

        let notification = (next.active_page != self.active_page).then_some(PageChange {
            previous: self.active_page,
            current: next.active_page,
        });

        Transition {
            state: next,
            window: next.window(),
            notification,
        }
    }
}

/// A committed change of the active page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageChange {
    pub previous: usize,
    pub current: usize,
}

/// Outcome of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: PagingState,
    pub window: Window,
    pub notification: Option<PageChange>,
}

/// Receives the new active page after every committed change.
#[cfg_attr(test, automock)]
pub trait PageChangeListener {
    fn page_changed(&mut self, page: usize);
}

impl<F> PageChangeListener for F
where
    F: FnMut(usize),
{
    fn page_changed(&mut self, page: usize) {
        self(page)
    }
}

/// Owns the active page of one pagination control.
pub struct PagingController<L> {
    context: PaginationContext,
    state: PagingState,
    window: Window,
    listener: L,
}

impl<L: PageChangeListener> PagingController<L> {
    /// Create the controller and announce the starting page.
    ///
    /// The listener is called once here even when the caller did not ask for a
    /// specific page, so it always learns the effective start.
    pub fn initialize(context: PaginationContext, mut listener: L) -> Self {
        let state = PagingState::new(Some(context.active_page()), context.total_pages());
        let window = state.window();

        debug!(
            label = context.label(),
            active_page = state.active_page(),
            total_pages = state.total_pages(),
            "pagination initialized"
        );
        listener.page_changed(state.active_page());

        Self {
            context,
            state,
            window,
            listener,
        }
    }

    /// Apply `event`; returns true when the active page changed.
    pub fn dispatch(&mut self, event: PageEvent) -> bool {
        let transition = self.state.apply(event);
        self.state = transition.state;
        self.window = transition.window;

        match transition.notification {
            Some(change) => {
                debug!(
                    ?event,
                    from = change.previous,
                    to = change.current,
                    "active page changed"
                );
                self.listener.page_changed(change.current);
                true
            }
            None => false,
        }
    }

    pub fn go_to_previous(&mut self) -> bool {
        self.dispatch(PageEvent::Previous)
    }

    pub fn go_to_next(&mut self) -> bool {
        self.dispatch(PageEvent::Next)
    }

    pub fn select_page(&mut self, page: usize) -> bool {
        self.dispatch(PageEvent::Select(page))
    }

    /// Replace the result count, clamping the active page into the new range.
    pub fn set_total_results(&mut self, total_results: usize) -> bool {
        self.context.set_total_results(total_results);
        self.dispatch(PageEvent::Resize(self.context.total_pages()))
    }

    /// Replace the page size, clamping the active page into the new range.
    pub fn set_results_per_page(&mut self, results_per_page: usize) -> bool {
        self.context.set_results_per_page(results_per_page);
        self.dispatch(PageEvent::Resize(self.context.total_pages()))
    }

    pub fn active_page(&self) -> usize {
        self.state.active_page()
    }

    pub fn total_pages(&self) -> usize {
        self.state.total_pages()
    }

    pub fn state(&self) -> PagingState {
        self.state
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn context(&self) -> &PaginationContext {
        &self.context
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }
}
