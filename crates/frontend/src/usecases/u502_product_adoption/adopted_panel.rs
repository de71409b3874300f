use contracts::domain::a003_product::{format_price, AdoptedProduct, StockStatus};
use leptos::prelude::*;
use thaw::*;

use super::available_panel::category_label;
use super::filter_bar::FilterBar;
use super::view_model::AdoptionViewModel;
use crate::shared::components::PaginationControls;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::system::session::SessionContext;

fn stock_badge(status: StockStatus) -> impl IntoView {
    let color = match status {
        StockStatus::InStock => BadgeColor::Success,
        StockStatus::OutOfStock => BadgeColor::Danger,
    };
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>{status.label()}</Badge>
    }
}

fn adopted_card(vm: AdoptionViewModel, product: AdoptedProduct) -> impl IntoView {
    let thumbnail = product.thumbnail().map(str::to_string);
    let weight = vm.weight_label(&product.selected_weight);
    let adopted_on = product
        .product_created_at
        .as_deref()
        .map(format_date)
        .unwrap_or_default();
    let name = product.product_name.clone();
    let category = category_label(&product.product_category);
    let price = format_price(product.effective_price());
    let status = product.stock_status;
    let quantity = product.product_quantity;

    view! {
        <div class="product-card">
            {thumbnail.map(|src| view! { <img class="product-card__image" src=src alt="" /> })}
            <div class="product-card__name">{name}</div>
            <div class="product-card__meta">{category}</div>
            <div class="product-card__price">{price}</div>
            <Flex>
                <Badge appearance=BadgeAppearance::Outline>{weight}</Badge>
                {stock_badge(status)}
            </Flex>
            <div class="product-card__meta">{format!("Quantity: {}", quantity)}</div>
            <div class="product-card__caption">{format!("Adopted: {}", adopted_on)}</div>
            <Button
                appearance=ButtonAppearance::Secondary
                size=ButtonSize::Small
                on_click=move |_| vm.open_manage(product.clone())
            >
                {icon("edit")}
                " Manage"
            </Button>
        </div>
    }
}

/// Products already adopted, with stock and quantity at a glance
#[component]
pub fn AdoptedPanel(vm: AdoptionViewModel, session: SessionContext) -> impl IntoView {
    let on_search = Callback::new(move |_| vm.search(session));
    let on_page = Callback::new(move |page: u32| vm.go_to_page(session, page));

    let filtered = move || {
        vm.adopted_query.with(|q| {
            q.search.as_deref().is_some_and(|s| !s.trim().is_empty())
                || q.category.as_deref().is_some_and(|c| !c.is_empty())
                || q.stock_status.is_some()
        })
    };

    let grid = move || {
        let products = vm.adopted.get();
        if products.is_empty() {
            let hint = if filtered() {
                "Try adjusting your search criteria"
            } else {
                "Start by adopting products from the Available Products tab"
            };
            view! {
                <div class="empty-state">
                    {icon("package")}
                    <h3>"No adopted products found"</h3>
                    <p>{hint}</p>
                </div>
            }
            .into_any()
        } else {
            view! {
                <div class="product-grid">
                    {products.into_iter().map(|p| adopted_card(vm, p)).collect_view()}
                </div>
            }
            .into_any()
        }
    };

    view! {
        <FilterBar
            query=vm.adopted_query
            placeholder="Search my products..."
            with_stock=true
            on_search=on_search
        />
        {grid}
        <Show when=move || vm.adopted_page.with(|p| p.total_pages > 1)>
            <PaginationControls pagination=vm.adopted_page on_page_change=on_page />
        </Show>
    }
}
