//! Tab key to view. Every tab key is matched here and nowhere else.

use super::tab_labels::{product_id_from_key, tab_label_for_key};
use crate::dashboards::d400_overview::OverviewDashboard;
use crate::domain::a001_business_owner::ui::list::BusinessOwnerList;
use crate::domain::a002_delivery_person::ui::list::DeliveryPersonList;
use crate::domain::a003_product::ui::create::ProductCreate;
use crate::domain::a003_product::ui::details::ProductDetails;
use crate::domain::a003_product::ui::list::ProductList;
use crate::layout::global_context::AppGlobalContext;
use crate::usecases::u501_bulk_product_import::BulkProductUpload;
use crate::usecases::u502_product_adoption::ProductAdoption;
use leptos::prelude::*;

/// Returns the content for a tab key, or a placeholder for unknown keys.
///
/// `tabs_store` lets detail pages close their own tab.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();
    let close_self = Callback::new(move |_| tabs_store.close_tab(&key_for_close));

    match key {
        "d400_overview" => view! { <OverviewDashboard /> }.into_any(),

        "a001_business_owner" => view! { <BusinessOwnerList /> }.into_any(),
        "a002_delivery_person" => view! { <DeliveryPersonList /> }.into_any(),

        "a003_product" => view! { <ProductList /> }.into_any(),
        "a003_product_new" => {
            let key = key.to_string();
            let on_created = Callback::new(move |_| {
                tabs_store.replace_tab(&key, "a003_product", tab_label_for_key("a003_product"));
            });
            view! { <ProductCreate on_created=on_created on_cancel=close_self /> }.into_any()
        }
        k if k.starts_with("a003_product_detail_") => match product_id_from_key(k) {
            Some(id) => view! { <ProductDetails id=id.to_string() on_close=close_self /> }.into_any(),
            None => {
                log::warn!("Bad product tab key: {}", k);
                view! { <div class="placeholder">{"Bad product tab key"}</div> }.into_any()
            }
        },

        "u501_bulk_product_import" => view! { <BulkProductUpload /> }.into_any(),
        "u502_product_adoption" => view! { <ProductAdoption /> }.into_any(),

        _ => {
            log::warn!("Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
