use leptos::prelude::*;
use paginate::pagination::{PageControl, PageEvent, PagingState};

/// Return type for use_pagination hook
pub struct UsePaginationReturn {
    pub state: ReadSignal<PagingState>,
    pub controls: Memo<Vec<PageControl>>,
    pub dispatch: Callback<PageEvent>,
}

/// Hook for managing pagination state
///
/// `on_change` runs once with the starting page, then once for every change
/// of the active page. When `total_pages` shrinks below the active page the
/// page is clamped immediately.
///
/// # Example
/// ```rust
/// let total_pages = Signal::derive(move || total_pages(results.get(), 10));
/// let pagination = use_pagination(total_pages, None, Callback::new(move |page| {
///     set_page.set(page);
/// }));
///
/// view! {
///     <button on:click=move |_| pagination.dispatch.run(PageEvent::Next)>"Next"</button>
/// }
/// ```
pub fn use_pagination(
    total_pages: Signal<usize>,
    initial_page: Option<usize>,
    on_change: Callback<usize>,
) -> UsePaginationReturn {
    let (state, set_state) = signal(PagingState::new(
        initial_page,
        total_pages.get_untracked(),
    ));
    on_change.run(state.get_untracked().active_page());

    let dispatch = Callback::new(move |event: PageEvent| {
        let transition = state.get_untracked().apply(event);
        set_state.set(transition.state);
        if let Some(change) = transition.notification {
            on_change.run(change.current);
        }
    });

    Effect::new(move |_| {
        dispatch.run(PageEvent::Resize(total_pages.get()));
    });

    let controls = Memo::new(move |_| state.get().controls());

    UsePaginationReturn {
        state,
        controls,
        dispatch,
    }
}
