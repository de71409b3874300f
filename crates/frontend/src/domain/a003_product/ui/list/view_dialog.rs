use contracts::domain::a003_product::{format_price, AdminProduct, DiscountType, ProductCategory};
use leptos::prelude::*;
use thaw::*;

use crate::shared::date_utils::format_datetime;

fn detail_row(label: &'static str, value: String) -> impl IntoView {
    view! {
        <tr>
            <th class="details__label">{label}</th>
            <td>{value}</td>
        </tr>
    }
}

/// Read-only product card with images, pricing and metadata
#[component]
pub fn ProductViewDialog(product: RwSignal<Option<AdminProduct>>, open: RwSignal<bool>) -> impl IntoView {
    let body = move || {
        product.get().map(|p| {
            let images = p
                .cloudinary_urls
                .iter()
                .map(|img| {
                    let url = img.url.clone();
                    view! { <img class="details__image" src=url alt="Product image" /> }
                })
                .collect_view();

            let category = ProductCategory::parse(&p.product_category)
                .map(|c| c.display_name())
                .unwrap_or_else(|| p.product_category.clone());
            let discount = match p.discount_type {
                DiscountType::None => "None".to_string(),
                DiscountType::Percentage => format!("{}% off", p.discount_value),
                DiscountType::Fixed => format!("{} off", format_price(p.discount_value)),
            };
            let tags = if p.tags.is_empty() { "-".to_string() } else { p.tags.join(", ") };
            let created_by = p
                .created_by
                .as_ref()
                .map(|c| c.email.clone())
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| "-".to_string());

            view! {
                <div class="details">
                    <h3 class="details__title">{p.product_name.clone()}</h3>
                    <p class="details__description">{p.product_description.clone()}</p>
                    <div class="details__images">{images}</div>
                    <table class="details__table">
                        <tbody>
                            {detail_row("Category", category)}
                            {detail_row("Brand", p.product_brand.clone().unwrap_or_else(|| "-".to_string()))}
                            {detail_row("Price", format_price(p.product_price))}
                            {detail_row("Discount", discount)}
                            {detail_row("Final price", format_price(p.effective_price()))}
                            {detail_row("Weights", p.weight_labels().join(", "))}
                            {detail_row("Tags", tags)}
                            {detail_row("Adoptions", p.adoption_count.to_string())}
                            {detail_row("Status", if p.is_active { "Active" } else { "Inactive" }.to_string())}
                            {detail_row("Created by", created_by)}
                            {detail_row("Created", p.created_at.as_deref().map(format_datetime).unwrap_or_default())}
                            {detail_row("Updated", p.updated_at.as_deref().map(format_datetime).unwrap_or_default())}
                        </tbody>
                    </table>
                </div>
            }
        })
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Product details"</DialogTitle>
                    <DialogContent>{body}</DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                            "Close"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
