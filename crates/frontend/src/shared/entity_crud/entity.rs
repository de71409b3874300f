//! The contract an account entity fulfils to get a CRUD table.

use contracts::domain::common::{AccountDocuments, AccountImage};
use contracts::shared::metadata::{EntityMetadataInfo, FieldMetadata, FormValues};
use serde::Serialize;

use crate::shared::api_client::ApiClient;

/// Schema, row accessors and remote operations of one entity.
///
/// Operations outside the entity's capability set keep the default body,
/// which reports them as unsupported.
#[allow(async_fn_in_trait)]
pub trait CrudEntity: Clone + PartialEq + Send + Sync + 'static {
    type Dto: Clone + Serialize + Send + Sync + 'static;

    const METADATA: EntityMetadataInfo;
    const FIELDS: &'static [FieldMetadata];

    fn id(&self) -> &str;
    fn title(&self) -> String;
    /// Cell text for a list-visible field
    fn cell(&self, field: &str) -> String;
    fn is_verified(&self) -> bool;
    fn set_verified(&mut self, verified: bool);
    fn last_active(&self) -> Option<&str>;

    fn form_values(&self) -> FormValues;
    fn dto_from_form(values: &FormValues) -> Self::Dto;
    /// Local copy of a successful update
    fn apply(&mut self, dto: &Self::Dto);

    /// Label/value pairs for the details dialog
    fn detail_rows(&self) -> Vec<(&'static str, String)>;
    fn documents(&self) -> Option<&AccountDocuments> {
        None
    }
    fn images(&self) -> &[AccountImage] {
        &[]
    }

    async fn fetch_all(client: &ApiClient) -> Result<Vec<Self>, String>;
    /// The created record when the server echoes it back
    async fn create(client: &ApiClient, dto: &Self::Dto) -> Result<Option<Self>, String>;
    async fn update(client: &ApiClient, id: &str, dto: &Self::Dto) -> Result<(), String>;

    async fn set_verification(_client: &ApiClient, _id: &str, _verified: bool) -> Result<(), String> {
        Err(format!("{} verification is not supported", Self::METADATA.element_name))
    }

    async fn delete(_client: &ApiClient, _id: &str) -> Result<(), String> {
        Err(format!("Deleting a {} is not supported", Self::METADATA.element_name.to_lowercase()))
    }
}

/// Rows whose list-visible cells contain `query` (case-insensitive)
pub fn filter_rows<E: CrudEntity>(rows: &[E], query: &str) -> Vec<E> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| {
            E::FIELDS
                .iter()
                .filter(|f| f.visible_in_list())
                .any(|f| row.cell(f.name).to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

/// Drops the row with `id`; returns whether one was removed
pub fn remove_row<E: CrudEntity>(rows: &mut Vec<E>, id: &str) -> bool {
    let before = rows.len();
    rows.retain(|row| row.id() != id);
    rows.len() != before
}

pub fn list_fields<E: CrudEntity>() -> Vec<&'static FieldMetadata> {
    E::FIELDS.iter().filter(|f| f.visible_in_list()).collect()
}

pub fn form_fields<E: CrudEntity>() -> Vec<&'static FieldMetadata> {
    E::FIELDS.iter().filter(|f| f.visible_in_form()).collect()
}
