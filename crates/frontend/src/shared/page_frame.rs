//! PageFrame: root wrapper for every page rendered inside a tab.
//!
//! Sets two attributes on the root element:
//!   - `id` as `"{entity}--{category}"`, e.g. `"a003_product--list"`
//!   - `data-page-category`, one of the `PAGE_CAT_*` constants

use leptos::prelude::*;

/// Table with filters and pagination
pub const PAGE_CAT_LIST: &str = "list";
/// Edit or create form for a single record
pub const PAGE_CAT_DETAIL: &str = "detail";
/// Stat cards
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";
/// Multi-step action page (bulk upload, adoption)
pub const PAGE_CAT_USECASE: &str = "usecase";

#[component]
pub fn PageFrame(
    #[prop(into)]
    page_id: String,
    category: &'static str,
    /// Extra CSS classes appended after the base class
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}
