//! Catalog product endpoints under `/admin/products` plus the shared lookups.

use contracts::domain::a003_product::lookup::{
    CategoriesResponse, CustomWeightUnitsResponse, WeightOptionsResponse,
};
use contracts::domain::a003_product::{
    category_drift, AdminProduct, BulkDeleteRequest, LookupOption, ProductPage, ProductResponse,
    ProductSearchOptions, ProductUpdateDto,
};
use contracts::shared::api_response::ApiMessage;
use web_sys::FormData;

use crate::shared::api_client::{segment, ApiClient, Gate};

pub async fn fetch_products(
    client: &ApiClient,
    options: &ProductSearchOptions,
) -> Result<ProductPage<AdminProduct>, String> {
    let query = options
        .to_query()
        .map_err(|e| format!("Failed to build query: {}", e))?;
    let page: ProductPage<AdminProduct> = client
        .get(&format!("/admin/products?{}", query), Gate::Open, "Failed to load products")
        .await?;
    if !page.success {
        return Err(page.message.unwrap_or_else(|| "Failed to load products".to_string()));
    }
    Ok(page)
}

pub async fn fetch_product(client: &ApiClient, id: &str) -> Result<AdminProduct, String> {
    let response: ProductResponse = client
        .get(
            &format!("/admin/products/{}", segment(id)),
            Gate::Open,
            "Failed to load product data",
        )
        .await?;
    match response.product {
        Some(product) if response.success => Ok(product),
        _ => Err(response
            .message
            .unwrap_or_else(|| "Failed to load product data".to_string())),
    }
}

pub async fn update_product(
    client: &ApiClient,
    id: &str,
    dto: &ProductUpdateDto,
) -> Result<Option<String>, String> {
    let response: ApiMessage = client
        .put_json(
            &format!("/admin/products/{}", segment(id)),
            dto,
            Gate::Open,
            "Failed to update product",
        )
        .await?;
    response.into_result("Failed to update product")
}

pub async fn delete_product(client: &ApiClient, id: &str) -> Result<Option<String>, String> {
    let response: ApiMessage = client
        .delete(
            &format!("/admin/products/{}", segment(id)),
            "Failed to delete product",
        )
        .await?;
    response.into_result("Failed to delete product")
}

pub async fn bulk_delete_products(
    client: &ApiClient,
    product_ids: Vec<String>,
) -> Result<Option<String>, String> {
    let response: ApiMessage = client
        .delete_json(
            "/admin/products/bulk",
            &BulkDeleteRequest { product_ids },
            "Failed to delete products",
        )
        .await?;
    response.into_result("Failed to delete products")
}

/// Multipart create; the form already carries the text fields and images
pub async fn create_product(client: &ApiClient, form: FormData) -> Result<ProductResponse, String> {
    let response: ProductResponse = client
        .post_form("/admin/products", form, "Failed to create product")
        .await?;
    if !response.success {
        return Err(response
            .message
            .unwrap_or_else(|| "Failed to create product".to_string()));
    }
    Ok(response)
}

/// Remote category list; differences from the local vocabulary are logged
pub async fn fetch_categories(client: &ApiClient) -> Result<Vec<LookupOption>, String> {
    let response: CategoriesResponse = client
        .get("/categories", Gate::Open, "Failed to load categories")
        .await?;
    let drift = category_drift(&response.categories);
    if !drift.is_empty() {
        log::warn!(
            "Category vocabulary drift: missing remotely {:?}, unknown locally {:?}",
            drift.missing_remotely,
            drift.unknown_locally
        );
    }
    Ok(response.categories)
}

pub async fn fetch_weight_options(client: &ApiClient) -> Result<Vec<LookupOption>, String> {
    let response: WeightOptionsResponse = client
        .get("/weight-options", Gate::Open, "Failed to load form data")
        .await?;
    Ok(response.weight_options)
}

pub async fn fetch_custom_weight_units(client: &ApiClient) -> Result<Vec<LookupOption>, String> {
    let response: CustomWeightUnitsResponse = client
        .get("/custom-weight-units", Gate::Open, "Failed to load form data")
        .await?;
    Ok(response.custom_weight_units)
}
