use contracts::usecases::u501_bulk_product_import::{
    BulkCreateRequest, BulkCreateResponse, BulkUploadResult, ProductRecord,
};

use crate::shared::api_client::{ApiClient, Gate};

/// POST the validated batch; the per-record partition comes back even when
/// some records failed
pub async fn bulk_create(
    client: &ApiClient,
    products: Vec<ProductRecord>,
) -> Result<BulkUploadResult, String> {
    let response: BulkCreateResponse = client
        .post_json(
            "/admin/products/bulk",
            &BulkCreateRequest { products },
            Gate::Open,
            "Failed to upload products",
        )
        .await?;
    response.into_result()
}
