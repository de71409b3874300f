use contracts::domain::a001_business_owner::metadata::{cell_value, ENTITY_METADATA, FIELDS};
use contracts::domain::a001_business_owner::{BusinessOwner, BusinessOwnerDto};
use contracts::domain::common::{AccountDocuments, AccountImage};
use contracts::shared::metadata::{EntityMetadataInfo, FieldMetadata, FormValues};

use super::api;
use crate::shared::api_client::ApiClient;
use crate::shared::date_utils::format_date;
use crate::shared::entity_crud::CrudEntity;

fn or_dash(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("-")
        .to_string()
}

impl CrudEntity for BusinessOwner {
    type Dto = BusinessOwnerDto;

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
        let mut dto = BusinessOwnerDto::from(self);
        if let Some(address) = self.business_address.as_ref().filter(|a| !a.trim().is_empty()) {
            dto.address = address.clone();
        }
        dto.to_form()
    }

    fn dto_from_form(values: &FormValues) -> BusinessOwnerDto {
        BusinessOwnerDto::from_form(values)
    }

    fn apply(&mut self, dto: &BusinessOwnerDto) {
        BusinessOwner::apply(self, dto);
    }

    fn detail_rows(&self) -> Vec<(&'static str, String)> {
        let categories = if self.categories.is_empty() {
            "-".to_string()
        } else {
            self.categories.join(", ")
        };
        vec![
            ("Email", self.email.clone()),
            ("Business name", or_dash(self.business_name.as_deref())),
            ("Phone", or_dash(self.phone_number.as_deref())),
            ("Address", or_dash(self.address.as_deref())),
            ("Business address", or_dash(self.business_address.as_deref())),
            ("Pincode", or_dash(self.pincode.as_deref())),
            ("Business type", or_dash(self.business_type.as_deref())),
            ("GSTIN", or_dash(self.gstin.as_deref())),
            ("Categories", categories),
            (
                "Rating",
                self.rating.map(|r| format!("{:.1}", r)).unwrap_or_else(|| "-".to_string()),
            ),
            ("Joined", self.created_at.as_deref().map(format_date).unwrap_or_else(|| "-".to_string())),
        ]
    }

    fn documents(&self) -> Option<&AccountDocuments> {
        self.documents.as_ref()
    }

    fn images(&self) -> &[AccountImage] {
        &self.business_images
    }

    async fn fetch_all(client: &ApiClient) -> Result<Vec<Self>, String> {
        api::fetch_business_owners(client).await
    }

    async fn create(client: &ApiClient, dto: &BusinessOwnerDto) -> Result<Option<Self>, String> {
        let response = api::create_business_owner(client, dto).await?;
        Ok(response.business_owner)
    }

    async fn update(client: &ApiClient, id: &str, dto: &BusinessOwnerDto) -> Result<(), String> {
        api::update_business_owner(client, id, dto).await
    }

    async fn set_verification(client: &ApiClient, id: &str, verified: bool) -> Result<(), String> {
        api::set_business_owner_verified(client, id, verified).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::entity_crud::entity::{filter_rows, form_fields, list_fields, remove_row};

    fn owner(id: &str, email: &str, name: &str) -> BusinessOwner {
        BusinessOwner {
            id: id.to_string(),
            email: email.to_string(),
            business_name: Some(name.to_string()),
            ..BusinessOwner::default()
        }
    }

    #[test]
    fn test_search_matches_listed_columns() {
        let rows = vec![
            owner("1", "fresh@example.com", "Fresh Mart"),
            owner("2", "daily@example.com", "Daily Needs"),
        ];
        let hits = filter_rows(&rows, "  FRESH ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
        assert_eq!(filter_rows(&rows, "").len(), 2);
        assert!(filter_rows(&rows, "nothing").is_empty());
    }

    #[test]
    fn test_deleted_row_leaves_the_list() {
        let mut rows = vec![
            owner("1", "fresh@example.com", "Fresh Mart"),
            owner("2", "daily@example.com", "Daily Needs"),
        ];
        assert!(remove_row(&mut rows, "1"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "2");
        assert!(!remove_row(&mut rows, "missing"));
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_address_is_searched_only_when_listed() {
        let mut row = owner("1", "a@example.com", "A");
        row.address = Some("MG Road".to_string());
        assert!(filter_rows(&[row], "mg road").is_empty());
    }

    #[test]
    fn test_form_prefers_business_address() {
        let mut row = owner("1", "a@example.com", "A");
        row.address = Some("Home".to_string());
        row.business_address = Some("Shop 4, Market".to_string());
        assert_eq!(row.form_values().get("address").map(String::as_str), Some("Shop 4, Market"));

        row.business_address = Some("  ".to_string());
        assert_eq!(row.form_values().get("address").map(String::as_str), Some("Home"));
    }

    #[test]
    fn test_schema_columns() {
        let listed: Vec<_> = list_fields::<BusinessOwner>().iter().map(|f| f.name).collect();
        assert_eq!(listed, vec!["email", "businessName", "phoneNumber"]);
        assert_eq!(form_fields::<BusinessOwner>().len(), 4);
    }
}
