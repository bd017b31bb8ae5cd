use leptos::prelude::*;
use paginate::pagination::{ButtonVariant, item_range};

use crate::components::{ButtonSize, PageButton, Pagination};

const PAGE_SIZE: usize = 10;
const RESIZE_STEP: usize = 25;

#[component]
pub fn App() -> impl IntoView {
    let (total_results, set_total_results) = signal(120usize);
    let (page, set_page) = signal(1usize);

    let on_change = Callback::new(move |new_page: usize| {
        web_sys::console::log_1(&format!("Active page changed to {}", new_page).into());
        set_page.set(new_page);
    });

    let add_results = Callback::new(move |_: ()| {
        set_total_results.update(|total| *total += RESIZE_STEP);
    });
    let remove_results = Callback::new(move |_: ()| {
        set_total_results.update(|total| *total = total.saturating_sub(RESIZE_STEP));
    });

    let rows = move || {
        item_range(page.get(), total_results.get(), PAGE_SIZE)
            .map(|(first, last)| (first..=last).collect::<Vec<_>>())
            .unwrap_or_default()
    };

    view! {
        <main class="min-h-screen bg-ctp-base flex flex-col">
            <div class="container mx-auto px-6 py-8 flex flex-col gap-6">
                <div class="flex items-center justify-between">
                    <h1 class="text-3xl font-bold text-ctp-text">"paginate"</h1>
                    <span class="text-xs text-ctp-subtext0 font-mono">
                        {env!("CARGO_PKG_VERSION")}
                    </span>
                </div>

                <div class="flex gap-2 items-center">
                    <PageButton
                        size=ButtonSize::Medium
                        variant=ButtonVariant::Link
                        label=format!("+{} results", RESIZE_STEP)
                        on_click=add_results
                    />
                    <PageButton
                        size=ButtonSize::Medium
                        variant=ButtonVariant::Link
                        label=format!("-{} results", RESIZE_STEP)
                        on_click=remove_results
                    />
                </div>

                <Show
                    when=move || { total_results.get() > 0 }
                    fallback=|| {
                        view! { <p class="text-ctp-overlay0">"No results."</p> }
                    }
                >
                    <ul class="grid gap-2">
                        {move || {
                            rows()
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <li class="bg-ctp-surface0 border border-ctp-surface1 rounded px-4 py-2 text-ctp-text">
                                            "Result #" {item}
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </Show>

                <Pagination
                    total_results=total_results
                    results_per_page=PAGE_SIZE
                    label="Search results"
                    on_change=on_change
                    show_summary=true
                    item_name="results".to_string()
                />
            </div>
        </main>
    }
}
