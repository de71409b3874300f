use contracts::domain::a003_product::{format_price, AdminProduct, ProductCategory};
use leptos::prelude::*;
use thaw::*;

use super::filter_bar::FilterBar;
use super::view_model::AdoptionViewModel;
use crate::shared::components::PaginationControls;
use crate::shared::icons::icon;
use crate::system::session::SessionContext;

/// Title-cased category, or the stored value when it is not in the vocabulary
pub fn category_label(stored: &str) -> String {
    ProductCategory::parse(stored)
        .map(|c| c.display_name())
        .unwrap_or_else(|| stored.to_string())
}

fn product_card(vm: AdoptionViewModel, product: AdminProduct) -> impl IntoView {
    let adopted = product.is_adopted.unwrap_or(false);
    let thumbnail = product.thumbnail().map(str::to_string);
    let brand = product.product_brand.clone().filter(|b| !b.trim().is_empty());
    let weights = product.available_weights.len();
    let name = product.product_name.clone();
    let category = category_label(&product.product_category);
    let price = format_price(product.effective_price());

    view! {
        <div class="product-card">
            {thumbnail.map(|src| view! { <img class="product-card__image" src=src alt="" /> })}
            <div class="product-card__name">{name}</div>
            <div class="product-card__meta">{category}</div>
            <div class="product-card__price">{price}</div>
            {brand.map(|b| view! { <Badge appearance=BadgeAppearance::Outline>{b}</Badge> })}
            <div class="product-card__meta">{format!("Available weights: {}", weights)}</div>
            {adopted.then(|| view! {
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                    {icon("check")}
                    " Already Adopted"
                </Badge>
            })}
            <Button
                appearance=ButtonAppearance::Primary
                size=ButtonSize::Small
                disabled=adopted
                on_click=move |_| vm.open_adopt(product.clone())
            >
                {icon("plus")}
                {if adopted { " Adopted" } else { " Adopt Product" }}
            </Button>
        </div>
    }
}

/// Catalog products the business owner can still adopt
#[component]
pub fn AvailablePanel(vm: AdoptionViewModel, session: SessionContext) -> impl IntoView {
    let on_search = Callback::new(move |_| vm.search(session));
    let on_page = Callback::new(move |page: u32| vm.go_to_page(session, page));

    let grid = move || {
        let products = vm.available.get();
        if products.is_empty() {
            view! {
                <div class="empty-state">
                    <h3>"No products found"</h3>
                    <p>"Try adjusting your search criteria"</p>
                </div>
            }
            .into_any()
        } else {
            view! {
                <div class="product-grid">
                    {products.into_iter().map(|p| product_card(vm, p)).collect_view()}
                </div>
            }
            .into_any()
        }
    };

    view! {
        <FilterBar
            query=vm.available_query
            placeholder="Search available products..."
            on_search=on_search
        />
        {grid}
        <Show when=move || vm.available_page.with(|p| p.total_pages > 1)>
            <PaginationControls pagination=vm.available_page on_page_change=on_page />
        </Show>
    }
}
