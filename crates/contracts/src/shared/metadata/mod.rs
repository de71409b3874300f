//! Compile-time schema for the account entities
//!
//! A schema drives the generic CRUD table: which columns are listed, which
//! fields the create / edit dialog shows, and how they are validated.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::domain::a001_business_owner::metadata::{ENTITY_METADATA, FIELDS};
//! use contracts::shared::metadata::{empty_form, validate_form};
//!
//! let values = empty_form(FIELDS);
//! assert!(validate_form(FIELDS, &values).is_err());
//! ```

mod field_type;
mod types;
mod validation;

pub use field_type::FieldType;
pub use types::{
    empty_form, validate_form, Capabilities, Capability, EntityMetadataInfo, FieldMetadata,
    FieldUiMetadata, FormValues,
};
pub use validation::ValidationRules;
