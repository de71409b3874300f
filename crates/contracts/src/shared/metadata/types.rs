//! Static schema types for account entities
//!
//! All types use 'static data so a schema can live in a `const`.

use std::collections::BTreeMap;

use super::field_type::FieldType;
use super::validation::ValidationRules;

// ============================================================================
// Entity-level metadata
// ============================================================================

/// Operations a CRUD table offers for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    List,
    Create,
    Edit,
    ViewDetails,
    Delete,
    ToggleVerification,
}

/// Small copyable set of capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities(u8);

impl Capabilities {
    pub const fn empty() -> Self {
        Self(0)
    }

    const fn bit(cap: Capability) -> u8 {
        match cap {
            Capability::List => 1,
            Capability::Create => 1 << 1,
            Capability::Edit => 1 << 2,
            Capability::ViewDetails => 1 << 3,
            Capability::Delete => 1 << 4,
            Capability::ToggleVerification => 1 << 5,
        }
    }

    pub const fn with(self, cap: Capability) -> Self {
        Self(self.0 | Self::bit(cap))
    }

    pub const fn has(&self, cap: Capability) -> bool {
        self.0 & Self::bit(cap) != 0
    }
}

/// Metadata for an account entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityMetadataInfo {
    /// Index used for tab keys, e.g. `a001_business_owner`
    pub entity_index: &'static str,
    pub element_name: &'static str,
    pub list_name: &'static str,
    pub icon: Option<&'static str>,
    pub capabilities: Capabilities,
}

// ============================================================================
// Field-level metadata
// ============================================================================

/// Metadata for a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMetadata {
    /// Wire name of the field
    pub name: &'static str,
    pub field_type: FieldType,
    pub ui: FieldUiMetadata,
    pub validation: ValidationRules,
}

impl FieldMetadata {
    pub fn visible_in_list(&self) -> bool {
        self.ui.visible_in_list
    }

    pub fn visible_in_form(&self) -> bool {
        self.ui.visible_in_form
    }

    /// Length rules then the format check of the field type
    pub fn validate(&self, value: &str) -> Result<(), String> {
        self.validation.validate_string(value, self.ui.label)?;
        if !self.field_type.check(value) {
            return Err(format!("{} {}", self.ui.label, self.field_type.format_error()));
        }
        Ok(())
    }
}

/// UI metadata for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldUiMetadata {
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub visible_in_list: bool,
    pub visible_in_form: bool,
}

impl Default for FieldUiMetadata {
    fn default() -> Self {
        Self {
            label: "",
            placeholder: None,
            visible_in_list: true,
            visible_in_form: true,
        }
    }
}

// ============================================================================
// Form values
// ============================================================================

/// Form state keyed by field name
pub type FormValues = BTreeMap<&'static str, String>;

/// Empty values for every form field of a schema
pub fn empty_form(fields: &[FieldMetadata]) -> FormValues {
    fields
        .iter()
        .filter(|f| f.visible_in_form())
        .map(|f| (f.name, String::new()))
        .collect()
}

/// Validate the form fields of a schema, collecting every message in field order
pub fn validate_form(fields: &[FieldMetadata], values: &FormValues) -> Result<(), Vec<String>> {
    let errors: Vec<String> = fields
        .iter()
        .filter(|f| f.visible_in_form())
        .filter_map(|f| {
            let value = values.get(f.name).map(String::as_str).unwrap_or("");
            f.validate(value).err()
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[FieldMetadata] = &[
        FieldMetadata {
            name: "email",
            field_type: FieldType::Email,
            ui: FieldUiMetadata {
                label: "Email",
                placeholder: None,
                visible_in_list: true,
                visible_in_form: true,
            },
            validation: ValidationRules::required(),
        },
        FieldMetadata {
            name: "address",
            field_type: FieldType::Multiline,
            ui: FieldUiMetadata {
                label: "Address",
                placeholder: None,
                visible_in_list: false,
                visible_in_form: true,
            },
            validation: ValidationRules::none().with_max_length(10),
        },
    ];

    #[test]
    fn test_capabilities() {
        let caps = Capabilities::empty()
            .with(Capability::List)
            .with(Capability::Edit);
        assert!(caps.has(Capability::List));
        assert!(caps.has(Capability::Edit));
        assert!(!caps.has(Capability::Delete));
    }

    #[test]
    fn test_validate_form_rejects_missing_required() {
        let values = empty_form(FIELDS);
        assert_eq!(
            validate_form(FIELDS, &values),
            Err(vec!["Email is required".to_string()])
        );
    }

    #[test]
    fn test_validate_form_collects_all_errors() {
        let mut values = empty_form(FIELDS);
        values.insert("email", "not-an-email".into());
        values.insert("address", "a very long address".into());
        let errors = validate_form(FIELDS, &values).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0], "Email must be a valid email address");
        assert_eq!(errors[1], "Address too long (max 10 characters)");

        values.insert("email", "a@b.in".into());
        values.insert("address", "Pune".into());
        assert!(validate_form(FIELDS, &values).is_ok());
    }
}
