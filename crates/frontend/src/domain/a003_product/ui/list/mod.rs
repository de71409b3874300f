mod view_dialog;

use std::collections::HashSet;

use contracts::domain::a003_product::{
    format_price, AdminProduct, Pagination, ProductCategory, ProductSearchOptions, SortOrder,
};
use leptos::prelude::*;
use thaw::*;

use self::view_dialog::ProductViewDialog;
use crate::domain::a003_product::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_label, product_detail_key, tab_label_for_key};
use crate::shared::components::{MessageBanner, PageHeader, PaginationControls};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::session::use_session;

const SORT_FIELDS: [(&str, &str); 4] = [
    ("createdAt", "Date created"),
    ("productName", "Name"),
    ("productPrice", "Price"),
    ("adoptionCount", "Adoption count"),
];

/// Text inputs of the filter bar
#[derive(Debug, Clone, Default, PartialEq)]
struct FilterInputs {
    search: String,
    category: String,
    brand: String,
    min_price: String,
    max_price: String,
    sort_by: String,
}

fn parse_price_filter(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
}

fn non_blank(raw: &str) -> Option<String> {
    Some(raw.trim().to_string()).filter(|s| !s.is_empty())
}

/// Search options for the first page of the current filters
fn build_options(current: &ProductSearchOptions, inputs: &FilterInputs) -> ProductSearchOptions {
    ProductSearchOptions {
        search: non_blank(&inputs.search),
        category: non_blank(&inputs.category),
        brand: non_blank(&inputs.brand),
        min_price: parse_price_filter(&inputs.min_price),
        max_price: parse_price_filter(&inputs.max_price),
        sort_by: non_blank(&inputs.sort_by).or_else(|| current.sort_by.clone()),
        page: 1,
        ..current.clone()
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let session = use_session();
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let products = RwSignal::new(Vec::<AdminProduct>::new());
    let pagination = RwSignal::new(Pagination::default());
    let options = RwSignal::new(ProductSearchOptions::default());
    let inputs = RwSignal::new(FilterInputs {
        sort_by: "createdAt".to_string(),
        ..FilterInputs::default()
    });
    let search_text = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let selected = RwSignal::new(HashSet::<String>::new());

    let viewing = RwSignal::new(None::<AdminProduct>);
    let view_open = RwSignal::new(false);
    let pending_delete = RwSignal::new(None::<AdminProduct>);
    let delete_open = RwSignal::new(false);
    let bulk_open = RwSignal::new(false);
    let deleting = RwSignal::new(false);

    let load = move |opts: ProductSearchOptions| {
        options.set(opts.clone());
        loading.set(true);
        let client = session.client();
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_products(&client, &opts).await {
                Ok(page) => {
                    log::debug!("Loaded {} products (page {})", page.products.len(), opts.page);
                    products.set(page.products);
                    pagination.set(page.pagination);
                    selected.set(HashSet::new());
                    error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load products: {}", e);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    };

    let apply_filters = move || {
        inputs.update(|i| i.search = search_text.get_untracked());
        let opts = build_options(&options.get_untracked(), &inputs.get_untracked());
        load(opts);
    };
    let set_filter = move |update: fn(&mut FilterInputs, String), value: String| {
        inputs.update(|i| update(i, value));
        apply_filters();
    };

    let reload = move || load(options.get_untracked());
    let on_page_change = Callback::new(move |page: u32| {
        let mut opts = options.get_untracked();
        opts.page = page;
        load(opts);
    });

    // Lookup only feeds the drift check; the filter uses the local vocabulary
    {
        let client = session.client();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = api::fetch_categories(&client).await {
                log::warn!("Error loading categories: {}", e);
            }
        });
    }
    load(options.get_untracked());

    let open_edit = move |product: &AdminProduct| {
        tabs_store.open_tab(
            &product_detail_key(&product.id),
            &detail_tab_label("Product", &product.product_name),
        );
    };

    let confirm_delete = move |_| {
        let Some(product) = pending_delete.get_untracked() else {
            return;
        };
        deleting.set(true);
        let client = session.client();
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_product(&client, &product.id).await {
                Ok(message) => {
                    log::info!("Deleted product {}", product.id);
                    notice.set(Some(message.unwrap_or_else(|| "Product deleted successfully".to_string())));
                    delete_open.set(false);
                    pending_delete.set(None);
                    reload();
                }
                Err(e) => {
                    delete_open.set(false);
                    error.set(Some(e));
                }
            }
            deleting.set(false);
        });
    };

    let confirm_bulk_delete = move |_| {
        let ids: Vec<String> = selected.get_untracked().into_iter().collect();
        if ids.is_empty() {
            return;
        }
        let count = ids.len();
        deleting.set(true);
        let client = session.client();
        wasm_bindgen_futures::spawn_local(async move {
            match api::bulk_delete_products(&client, ids).await {
                Ok(message) => {
                    log::info!("Bulk deleted {} products", count);
                    notice.set(Some(message.unwrap_or_else(|| format!("{} products deleted", count))));
                    reload();
                }
                Err(e) => error.set(Some(e)),
            }
            bulk_open.set(false);
            deleting.set(false);
        });
    };

    let page_ids = move || products.with(|p| p.iter().map(|p| p.id.clone()).collect::<Vec<_>>());
    let all_selected = move || {
        let ids = page_ids();
        !ids.is_empty() && selected.with(|s| ids.iter().all(|id| s.contains(id)))
    };
    let toggle_all = move |checked: bool| {
        let ids = page_ids();
        selected.update(|s| {
            if checked {
                s.extend(ids);
            } else {
                s.clear();
            }
        });
    };

    let row_view = move |product: AdminProduct| {
        let id = product.id.clone();
        let id_checked = id.clone();
        let thumb = product.thumbnail().map(str::to_string);
        let category = ProductCategory::parse(&product.product_category)
            .map(|c| c.display_name())
            .unwrap_or_else(|| product.product_category.clone());
        let price = format_price(product.effective_price());
        let original = product
            .has_discount()
            .then(|| format_price(product.product_price));
        let weights = product.weight_labels().join(", ");
        let created = product.created_at.as_deref().map(format_date).unwrap_or_default();
        let active = product.is_active;
        let adoption_count = product.adoption_count;
        let name = product.product_name.clone();
        let for_view = product.clone();
        let for_edit = product.clone();
        let for_delete = product;

        view! {
            <TableRow>
                <TableCell>
                    <input
                        type="checkbox"
                        prop:checked=move || selected.with(|s| s.contains(&id_checked))
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            let id = id.clone();
                            selected.update(|s| {
                                if checked {
                                    s.insert(id);
                                } else {
                                    s.remove(&id);
                                }
                            });
                        }
                    />
                </TableCell>
                <TableCell>
                    {match thumb {
                        Some(src) => view! { <img class="product-thumb" src=src alt="" /> }.into_any(),
                        None => view! { <div class="product-thumb product-thumb--empty">{icon("package")}</div> }.into_any(),
                    }}
                </TableCell>
                <TableCell>
                    <TableCellLayout truncate=true>{name}</TableCellLayout>
                </TableCell>
                <TableCell>{category}</TableCell>
                <TableCell>
                    <span class="price">{price}</span>
                    {original.map(|o| view! { <span class="price price--original">{o}</span> })}
                </TableCell>
                <TableCell>
                    <TableCellLayout truncate=true>{weights}</TableCellLayout>
                </TableCell>
                <TableCell>{adoption_count}</TableCell>
                <TableCell>
                    {if active {
                        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Active"</Badge> }.into_any()
                    } else {
                        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>"Inactive"</Badge> }.into_any()
                    }}
                </TableCell>
                <TableCell>{created}</TableCell>
                <TableCell>
                    <Space>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| {
                                viewing.set(Some(for_view.clone()));
                                view_open.set(true);
                            }
                        >
                            {icon("eye")}
                        </Button>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| open_edit(&for_edit)
                        >
                            {icon("edit")}
                        </Button>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| {
                                pending_delete.set(Some(for_delete.clone()));
                                delete_open.set(true);
                            }
                        >
                            {icon("delete")}
                        </Button>
                    </Space>
                </TableCell>
            </TableRow>
        }
    };

    let subtitle = Signal::derive(move || {
        let p = pagination.get();
        Some(format!(
            "{} products, page {} of {}",
            p.total_products,
            p.current_page,
            p.total_pages.max(1)
        ))
    });

    view! {
        <PageFrame page_id="a003_product--list" category=PAGE_CAT_LIST>
            <PageHeader title="Products" subtitle=subtitle>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| bulk_open.set(true)
                    disabled=Signal::derive(move || selected.with(HashSet::is_empty))
                >
                    {icon("delete")}
                    {move || format!(" Delete ({})", selected.with(HashSet::len))}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| tabs_store.open_tab("u501_bulk_product_import", tab_label_for_key("u501_bulk_product_import"))
                >
                    {icon("upload")}
                    " Bulk upload"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| tabs_store.open_tab("a003_product_new", tab_label_for_key("a003_product_new"))
                >
                    {icon("plus")}
                    " Upload product"
                </Button>
            </PageHeader>

            <MessageBanner message=error />
            <MessageBanner message=notice intent=MessageBarIntent::Success />

            <div class="filter-panel">
                <Flex align=FlexAlign::End>
                    <div class="form__group" on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            apply_filters();
                        }
                    }>
                        <label class="form__label">"Search"</label>
                        <Input value=search_text placeholder="Search products..." />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Category"</label>
                        <select
                            class="form__select"
                            prop:value=move || inputs.with(|i| i.category.clone())
                            on:change=move |ev| set_filter(|i, v| i.category = v, event_target_value(&ev))
                        >
                            <option value="">"All categories"</option>
                            {ProductCategory::ALL.iter().map(|c| view! {
                                <option value=c.label()>{c.display_name()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Brand"</label>
                        <input
                            class="form__input"
                            prop:value=move || inputs.with(|i| i.brand.clone())
                            on:change=move |ev| set_filter(|i, v| i.brand = v, event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Min price"</label>
                        <input
                            class="form__input"
                            type="number"
                            min="0"
                            prop:value=move || inputs.with(|i| i.min_price.clone())
                            on:change=move |ev| set_filter(|i, v| i.min_price = v, event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Max price"</label>
                        <input
                            class="form__input"
                            type="number"
                            min="0"
                            prop:value=move || inputs.with(|i| i.max_price.clone())
                            on:change=move |ev| set_filter(|i, v| i.max_price = v, event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Sort by"</label>
                        <select
                            class="form__select"
                            prop:value=move || inputs.with(|i| i.sort_by.clone())
                            on:change=move |ev| set_filter(|i, v| i.sort_by = v, event_target_value(&ev))
                        >
                            {SORT_FIELDS.iter().map(|(value, label)| view! {
                                <option value=*value>{*label}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| apply_filters()>
                        {icon("search")}
                        " Search"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| {
                            let mut opts = options.get_untracked();
                            opts.sort_order = Some(opts.sort_order.unwrap_or_default().toggled());
                            opts.page = 1;
                            load(opts);
                        }
                    >
                        {move || {
                            let asc = options.with(|o| o.sort_order == Some(SortOrder::Asc));
                            if asc { icon("arrow-up") } else { icon("arrow-down") }
                        }}
                    </Button>
                </Flex>
            </div>

            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>
                                <input
                                    type="checkbox"
                                    prop:checked=all_selected
                                    on:change=move |ev| toggle_all(event_target_checked(&ev))
                                />
                            </TableHeaderCell>
                            <TableHeaderCell>"Image"</TableHeaderCell>
                            <TableHeaderCell>"Name"</TableHeaderCell>
                            <TableHeaderCell>"Category"</TableHeaderCell>
                            <TableHeaderCell>"Price"</TableHeaderCell>
                            <TableHeaderCell>"Weights"</TableHeaderCell>
                            <TableHeaderCell>"Adoptions"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Created"</TableHeaderCell>
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            if loading.get() && products.with(Vec::is_empty) {
                                view! { <Flex justify=FlexJustify::Center><Spinner /></Flex> }.into_any()
                            } else if products.with(Vec::is_empty) {
                                view! { <div class="empty-state">"No products found"</div> }.into_any()
                            } else {
                                products.get().into_iter().map(row_view).collect_view().into_any()
                            }
                        }}
                    </TableBody>
                </Table>
            </div>

            <PaginationControls pagination=pagination on_page_change=on_page_change />

            <ProductViewDialog product=viewing open=view_open />

            <Dialog open=delete_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"Delete product"</DialogTitle>
                        <DialogContent>
                            {move || pending_delete.get().map(|p| format!(
                                "Are you sure you want to delete \"{}\"? This action cannot be undone.",
                                p.product_name
                            ))}
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| delete_open.set(false)>
                                "Cancel"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=Signal::derive(move || deleting.get())
                                on_click=confirm_delete
                            >
                                "Delete"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>

            <Dialog open=bulk_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"Delete selected products"</DialogTitle>
                        <DialogContent>
                            {move || format!(
                                "Delete {} selected products? This action cannot be undone.",
                                selected.with(HashSet::len)
                            )}
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| bulk_open.set(false)>
                                "Cancel"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=Signal::derive(move || deleting.get())
                                on_click=confirm_bulk_delete
                            >
                                "Delete"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_options_resets_page_and_drops_blanks() {
        let current = ProductSearchOptions {
            page: 4,
            ..ProductSearchOptions::default()
        };
        let inputs = FilterInputs {
            search: "  rice ".into(),
            category: String::new(),
            brand: " ".into(),
            min_price: "10".into(),
            max_price: "abc".into(),
            sort_by: "productPrice".into(),
        };
        let opts = build_options(&current, &inputs);
        assert_eq!(opts.page, 1);
        assert_eq!(opts.search.as_deref(), Some("rice"));
        assert_eq!(opts.category, None);
        assert_eq!(opts.brand, None);
        assert_eq!(opts.min_price, Some(10.0));
        assert_eq!(opts.max_price, None);
        assert_eq!(opts.sort_by.as_deref(), Some("productPrice"));
        assert_eq!(opts.limit, 12);
    }

    #[test]
    fn test_price_filter_rejects_negative() {
        assert_eq!(parse_price_filter("-5"), None);
        assert_eq!(parse_price_filter("0"), Some(0.0));
    }
}
