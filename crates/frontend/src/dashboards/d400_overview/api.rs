use contracts::dashboards::d400_overview::OverviewStats;
use contracts::domain::a003_product::ProductSearchOptions;

use crate::domain::a001_business_owner::api::fetch_business_owners;
use crate::domain::a003_product::api::fetch_products;
use crate::shared::api_client::ApiClient;

/// Owners list plus a one-item product page, combined into the card numbers
pub async fn fetch_overview(client: &ApiClient) -> Result<OverviewStats, String> {
    let owners = fetch_business_owners(client).await?;
    let products = fetch_products(client, &ProductSearchOptions::count_only()).await?;
    Ok(OverviewStats::from_parts(
        &owners,
        products.pagination.total_products,
        chrono::Utc::now(),
    ))
}
