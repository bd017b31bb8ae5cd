use leptos::prelude::*;
use paginate::pagination::{
    ButtonVariant, DEFAULT_RESULTS_PER_PAGE, PageControl, PageEvent, item_range, total_pages,
};

use crate::hooks::use_pagination;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
}

fn button_class(size: ButtonSize, variant: ButtonVariant) -> String {
    let size = match size {
        ButtonSize::Small => "min-w-8 h-8 px-2 text-sm",
        ButtonSize::Medium => "min-w-10 h-10 px-3",
    };
    let variant = match variant {
        ButtonVariant::Primary => "bg-ctp-blue text-ctp-base border border-ctp-blue font-semibold",
        ButtonVariant::Link => {
            "bg-transparent text-ctp-text border border-transparent hover:border-ctp-blue"
        }
    };
    format!(
        "{} {} rounded inline-flex items-center justify-center disabled:opacity-50 disabled:cursor-not-allowed",
        size, variant
    )
}

/// Clickable control used for every entry of the pagination bar.
///
/// Icon-only buttons must pass `aria_label`.
#[component]
pub fn PageButton(
    #[prop(optional)] size: ButtonSize,
    variant: ButtonVariant,
    #[prop(optional)] icon: Option<&'static str>,
    #[prop(optional)] label: Option<String>,
    #[prop(optional)] aria_label: Option<String>,
    #[prop(optional)] disabled: bool,
    #[prop(optional)] current: bool,
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=button_class(size, variant)
            aria-label=aria_label
            aria-current=current.then_some("page")
            disabled=disabled
            on:click=move |_| {
                if !disabled {
                    on_click.run(());
                }
            }
        >
            {icon.map(|icon| view! { <span aria-hidden="true">{icon}</span> })}
            {label}
        </button>
    }
}

/// Renders one entry of the control list.
#[component]
fn PaginationControl(control: PageControl, dispatch: Callback<PageEvent>) -> impl IntoView {
    let on_click = Callback::new(move |_: ()| {
        if let Some(event) = control.event() {
            dispatch.run(event);
        }
    });

    match control {
        PageControl::Ellipsis => view! {
            <span class="min-w-8 text-center text-ctp-overlay0 select-none" aria-hidden="true">
                "..."
            </span>
        }
        .into_any(),
        PageControl::Previous { disabled } | PageControl::Next { disabled } => {
            let icon = if matches!(control, PageControl::Previous { .. }) {
                "‹"
            } else {
                "›"
            };
            view! {
                <PageButton
                    size=ButtonSize::Small
                    variant=control.variant()
                    icon=icon
                    aria_label=control.aria_label().unwrap_or_default()
                    disabled=disabled
                    on_click=on_click
                />
            }
            .into_any()
        }
        PageControl::Page { active, .. } => view! {
            <PageButton
                size=ButtonSize::Small
                variant=control.variant()
                label=control.text().unwrap_or_default()
                aria_label=control.aria_label().unwrap_or_default()
                current=active
                on_click=on_click
            />
        }
        .into_any(),
    }
}

/// Numbered pagination bar.
///
/// `active_page` only seeds the starting page; afterwards the component owns
/// it and reports every change through `on_change` (including the start).
#[component]
pub fn Pagination(
    #[prop(into)] total_results: Signal<usize>,
    #[prop(into)] label: String,
    on_change: Callback<usize>,
    #[prop(optional)] results_per_page: Option<usize>,
    #[prop(optional)] active_page: Option<usize>,
    #[prop(optional)] show_summary: Option<bool>,
    #[prop(optional)] item_name: Option<String>,
) -> impl IntoView {
    let show_summary = show_summary.unwrap_or(false);
    let item_name = item_name.unwrap_or_else(|| "items".to_string());
    let page_size = results_per_page
        .filter(|size| *size > 0)
        .unwrap_or(DEFAULT_RESULTS_PER_PAGE);

    let pages = Signal::derive(move || total_pages(total_results.get(), page_size));
    let pagination = use_pagination(pages, active_page, on_change);
    let state = pagination.state;
    let controls = pagination.controls;
    let dispatch = pagination.dispatch;

    let summary = move || {
        let total = total_results.get();
        item_range(state.get().active_page(), total, page_size)
            .map(|(first, last)| format!("Showing {} - {} of {} {}", first, last, total, item_name))
    };

    view! {
        <nav aria-label=label class="flex flex-col items-center gap-2">
            {show_summary
                .then(|| {
                    view! { <div class="text-sm text-ctp-overlay0">{summary}</div> }
                })}

            <Show when=move || { pages.get() > 0 }>
                <div class="flex justify-center items-center gap-1">
                    <For
                        each=move || controls.get().into_iter().enumerate()
                        key=|(position, control)| (*position, *control)
                        children=move |(_, control)| {
                            view! { <PaginationControl control=control dispatch=dispatch/> }
                        }
                    />
                </div>
            </Show>
        </nav>
    }
}
