use contracts::domain::a002_delivery_person::metadata::{cell_value, ENTITY_METADATA, FIELDS};
use contracts::domain::a002_delivery_person::{DeliveryPerson, DeliveryPersonDto};
use contracts::domain::common::AccountDocuments;
use contracts::shared::metadata::{EntityMetadataInfo, FieldMetadata, FormValues};

use super::api;
use crate::shared::api_client::ApiClient;
use crate::shared::date_utils::format_date;
use crate::shared::entity_crud::CrudEntity;

impl CrudEntity for DeliveryPerson {
    type Dto = DeliveryPersonDto;

    const METADATA: EntityMetadataInfo = ENTITY_METADATA;
    const FIELDS: &'static [FieldMetadata] = FIELDS;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> String {
        self.display_name().to_string()
    }

    fn cell(&self, field: &str) -> String {
        cell_value(self, field)
    }

    fn is_verified(&self) -> bool {
        self.is_verified
    }

    fn set_verified(&mut self, verified: bool) {
        self.is_verified = verified;
    }

    fn last_active(&self) -> Option<&str> {
        self.last_active.as_deref()
    }

    fn form_values(&self) -> FormValues {
        DeliveryPersonDto::from(self).to_form()
    }

    fn dto_from_form(values: &FormValues) -> DeliveryPersonDto {
        DeliveryPersonDto::from_form(values)
    }

    fn apply(&mut self, dto: &DeliveryPersonDto) {
        DeliveryPerson::apply(self, dto);
    }

    fn detail_rows(&self) -> Vec<(&'static str, String)> {
        let text = |v: &Option<String>| v.clone().filter(|s| !s.is_empty()).unwrap_or_else(|| "-".into());
        vec![
            ("Name", text(&self.name)),
            ("Email", self.email.clone()),
            ("Phone", text(&self.phone_number)),
            ("Address", text(&self.address)),
            ("Vehicle type", text(&self.vehicle_type)),
            ("Vehicle number", text(&self.vehicle_number)),
            ("Rating", self.rating.map(|r| format!("{:.1}", r)).unwrap_or_else(|| "-".into())),
            ("Joined", self.created_at.as_deref().map(format_date).unwrap_or_else(|| "-".into())),
        ]
    }

    fn documents(&self) -> Option<&AccountDocuments> {
        self.documents.as_ref()
    }

    async fn fetch_all(client: &ApiClient) -> Result<Vec<Self>, String> {
        api::fetch_delivery_persons(client).await
    }

    async fn create(client: &ApiClient, dto: &DeliveryPersonDto) -> Result<Option<Self>, String> {
        Ok(api::create_delivery_person(client, dto).await?.delivery_person)
    }

    async fn update(client: &ApiClient, id: &str, dto: &DeliveryPersonDto) -> Result<(), String> {
        api::update_delivery_person(client, id, dto).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::entity_crud::entity::filter_rows;

    #[test]
    fn test_vehicle_column_is_searchable() {
        let rider = DeliveryPerson {
            id: "r1".into(),
            email: "rider@example.com".into(),
            vehicle_type: Some("Bike".into()),
            vehicle_number: Some("KA01AB1234".into()),
            ..DeliveryPerson::default()
        };
        assert_eq!(rider.cell("vehicle"), "Bike (KA01AB1234)");
        assert_eq!(filter_rows(&[rider], "ka01").len(), 1);
    }

    #[test]
    fn test_form_has_no_vehicle_field() {
        let rider = DeliveryPerson {
            id: "r1".into(),
            email: "rider@example.com".into(),
            name: Some("Ravi".into()),
            ..DeliveryPerson::default()
        };
        let values = rider.form_values();
        assert!(!values.contains_key("vehicle"));
        assert_eq!(values.get("name").map(String::as_str), Some("Ravi"));
    }
}
