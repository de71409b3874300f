use contracts::domain::a001_business_owner::{
    normalize_business_owners, BusinessOwner, BusinessOwnerDto, BusinessOwnerResponse,
};
use contracts::domain::common::VerificationUpdate;
use serde::Serialize;
use serde_json::Value;

use crate::shared::api_client::{segment, ApiClient, Gate};

pub async fn fetch_business_owners(client: &ApiClient) -> Result<Vec<BusinessOwner>, String> {
    let body: Value = client
        .get(
            "/auth/all-business-owners",
            Gate::AdminKey,
            "Failed to fetch business owners",
        )
        .await?;
    normalize_business_owners(&body).map_err(|e| format!("Failed to parse business owners: {}", e))
}

pub async fn create_business_owner(
    client: &ApiClient,
    dto: &BusinessOwnerDto,
) -> Result<BusinessOwnerResponse, String> {
    client
        .post_json(
            "/auth/create-business-owner",
            dto,
            Gate::Open,
            "Failed to create business owner",
        )
        .await
}

async fn put_business_owner<B: Serialize>(client: &ApiClient, id: &str, body: &B) -> Result<(), String> {
    let _: Value = client
        .put_json(
            &format!("/auth/update-business-owner/{}", segment(id)),
            body,
            Gate::AdminKey,
            "Failed to update business owner",
        )
        .await?;
    Ok(())
}

pub async fn update_business_owner(
    client: &ApiClient,
    id: &str,
    dto: &BusinessOwnerDto,
) -> Result<(), String> {
    put_business_owner(client, id, dto).await
}

/// Partial update carrying only `isVerified`
pub async fn set_business_owner_verified(
    client: &ApiClient,
    id: &str,
    is_verified: bool,
) -> Result<(), String> {
    put_business_owner(client, id, &VerificationUpdate { is_verified }).await
}
