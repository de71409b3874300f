use contracts::domain::a002_delivery_person::{
    normalize_delivery_persons, DeliveryPerson, DeliveryPersonDto, DeliveryPersonResponse,
};
use serde_json::Value;

use crate::shared::api_client::{segment, ApiClient, Gate};

pub async fn fetch_delivery_persons(client: &ApiClient) -> Result<Vec<DeliveryPerson>, String> {
    let body: Value = client
        .get(
            "/auth/all-delivery-persons",
            Gate::AdminKey,
            "Failed to fetch delivery persons",
        )
        .await?;
    normalize_delivery_persons(&body)
        .map_err(|e| format!("Failed to parse delivery persons: {}", e))
}

pub async fn create_delivery_person(
    client: &ApiClient,
    dto: &DeliveryPersonDto,
) -> Result<DeliveryPersonResponse, String> {
    client
        .post_json(
            "/auth/create-delivery-person",
            dto,
            Gate::Open,
            "Failed to create delivery person",
        )
        .await
}

pub async fn update_delivery_person(
    client: &ApiClient,
    id: &str,
    dto: &DeliveryPersonDto,
) -> Result<(), String> {
    let _: Value = client
        .put_json(
            &format!("/auth/update-delivery-person/{}", segment(id)),
            dto,
            Gate::AdminKey,
            "Failed to update delivery person",
        )
        .await?;
    Ok(())
}
