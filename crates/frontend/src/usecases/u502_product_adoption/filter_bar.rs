use contracts::domain::a003_product::{ProductCategory, ProductSearchOptions, StockStatus};
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Search text, category and (for adopted products) stock status.
///
/// Edits only touch `query`; `on_search` runs on Enter or the Search button.
#[component]
pub fn FilterBar(
    query: RwSignal<ProductSearchOptions>,
    placeholder: &'static str,
    #[prop(optional)] with_stock: bool,
    on_search: Callback<()>,
) -> impl IntoView {
    view! {
        <Flex align=FlexAlign::Center class="filter-bar">
            <input
                class="form__input"
                type="search"
                placeholder=placeholder
                prop:value=move || query.with(|q| q.search.clone().unwrap_or_default())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    query.update(|q| q.search = Some(value));
                }
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        on_search.run(());
                    }
                }
            />
            <select
                class="form__select"
                prop:value=move || query.with(|q| q.category.clone().unwrap_or_default())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    query.update(|q| q.category = Some(value));
                }
            >
                <option value="">"All Categories"</option>
                {ProductCategory::ALL
                    .iter()
                    .map(|c| view! { <option value=c.label()>{c.display_name()}</option> })
                    .collect_view()}
            </select>
            {with_stock.then(|| view! {
                <select
                    class="form__select"
                    prop:value=move || query.with(|q| q.stock_status.map(|s| s.as_str()).unwrap_or_default())
                    on:change=move |ev| {
                        let status = StockStatus::parse(&event_target_value(&ev));
                        query.update(|q| q.stock_status = status);
                    }
                >
                    <option value="">"All Status"</option>
                    <option value=StockStatus::InStock.as_str()>{StockStatus::InStock.label()}</option>
                    <option value=StockStatus::OutOfStock.as_str()>{StockStatus::OutOfStock.label()}</option>
                </select>
            })}
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_search.run(())>
                {icon("search")}
                " Search"
            </Button>
        </Flex>
    }
}
