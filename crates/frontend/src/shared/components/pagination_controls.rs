use crate::shared::icons::icon;
use contracts::domain::a003_product::Pagination;
use leptos::prelude::*;

/// Prev/next pager over the server's 1-based pagination block
#[component]
pub fn PaginationControls(
    #[prop(into)] pagination: Signal<Pagination>,
    /// Receives the requested 1-based page
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let current = move || pagination.get().current_page;

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || !pagination.get().has_prev_page
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current().saturating_sub(1).max(1))
                disabled=move || !pagination.get().has_prev_page
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let p = pagination.get();
                    format!("Page {} of {} ({} products)", p.current_page, p.total_pages.max(1), p.total_products)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current() + 1)
                disabled=move || !pagination.get().has_next_page
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(pagination.get().total_pages.max(1))
                disabled=move || !pagination.get().has_next_page
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
