//! Business-owner product endpoints: catalog search, adopt and the adopted list.

use contracts::domain::a003_product::{
    AdminProduct, AdoptedProduct, AdoptedProductUpdate, AdoptionRequest, ProductPage,
    ProductSearchOptions,
};
use contracts::shared::api_response::ApiMessage;

use crate::shared::api_client::{segment, ApiClient, Gate};

async fn fetch_page<T: serde::de::DeserializeOwned>(
    client: &ApiClient,
    path: &str,
    options: &ProductSearchOptions,
    fallback: &str,
) -> Result<ProductPage<T>, String> {
    let query = options
        .to_query()
        .map_err(|e| format!("Failed to build query: {}", e))?;
    let page: ProductPage<T> = client
        .get(&format!("{}?{}", path, query), Gate::Open, fallback)
        .await?;
    if !page.success {
        return Err(page.message.unwrap_or_else(|| fallback.to_string()));
    }
    Ok(page)
}

pub async fn search_products(
    client: &ApiClient,
    options: &ProductSearchOptions,
) -> Result<ProductPage<AdminProduct>, String> {
    fetch_page(
        client,
        "/business-owner/products/search",
        options,
        "Failed to load available products",
    )
    .await
}

pub async fn adopt_product(
    client: &ApiClient,
    product_id: &str,
    request: &AdoptionRequest,
) -> Result<Option<String>, String> {
    let response: ApiMessage = client
        .post_json(
            &format!("/business-owner/products/adopt/{}", segment(product_id)),
            request,
            Gate::Open,
            "Failed to adopt product",
        )
        .await?;
    response.into_result("Failed to adopt product")
}

pub async fn fetch_adopted(
    client: &ApiClient,
    options: &ProductSearchOptions,
) -> Result<ProductPage<AdoptedProduct>, String> {
    fetch_page(
        client,
        "/business-owner/products/adopted",
        options,
        "Failed to load adopted products",
    )
    .await
}

pub async fn update_adopted(
    client: &ApiClient,
    id: &str,
    update: &AdoptedProductUpdate,
) -> Result<Option<String>, String> {
    let response: ApiMessage = client
        .put_json(
            &format!("/business-owner/products/adopted/{}", segment(id)),
            update,
            Gate::Open,
            "Failed to update adopted product",
        )
        .await?;
    response.into_result("Failed to update adopted product")
}

pub async fn remove_adopted(client: &ApiClient, id: &str) -> Result<Option<String>, String> {
    let response: ApiMessage = client
        .delete(
            &format!("/business-owner/products/adopted/{}", segment(id)),
            "Failed to remove adopted product",
        )
        .await?;
    response.into_result("Failed to remove adopted product")
}
