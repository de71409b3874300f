use crate::shared::metadata::{
    Capabilities, Capability, EntityMetadataInfo, FieldMetadata, FieldType, FieldUiMetadata,
    FormValues, ValidationRules,
};

use super::aggregate::{BusinessOwner, BusinessOwnerDto};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_index: "a001_business_owner",
    element_name: "Business owner",
    list_name: "Business owners",
    icon: Some("store"),
    capabilities: Capabilities::empty()
        .with(Capability::List)
        .with(Capability::Create)
        .with(Capability::Edit)
        .with(Capability::ViewDetails)
        .with(Capability::ToggleVerification),
};

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata {
        name: "email",
        field_type: FieldType::Email,
        ui: FieldUiMetadata {
            label: "Email",
            placeholder: Some("owner@example.com"),
            visible_in_list: true,
            visible_in_form: true,
        },
        validation: ValidationRules::required(),
    },
    FieldMetadata {
        name: "businessName",
        field_type: FieldType::Text,
        ui: FieldUiMetadata {
            label: "Business name",
            placeholder: None,
            visible_in_list: true,
            visible_in_form: true,
        },
        validation: ValidationRules::required().with_max_length(100),
    },
    FieldMetadata {
        name: "phoneNumber",
        field_type: FieldType::Phone,
        ui: FieldUiMetadata {
            label: "Phone number",
            placeholder: Some("+91 98765 43210"),
            visible_in_list: true,
            visible_in_form: true,
        },
        validation: ValidationRules::none().with_max_length(20),
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
        validation: ValidationRules::none().with_max_length(300),
    },
];

impl BusinessOwnerDto {
    pub fn from_form(values: &FormValues) -> Self {
        let get = |key: &str| values.get(key).map(|v| v.trim().to_string()).unwrap_or_default();
        Self {
            email: get("email"),
            business_name: get("businessName"),
            phone_number: get("phoneNumber"),
            address: get("address"),
        }
    }

    pub fn to_form(&self) -> FormValues {
        FormValues::from([
            ("email", self.email.clone()),
            ("businessName", self.business_name.clone()),
            ("phoneNumber", self.phone_number.clone()),
            ("address", self.address.clone()),
        ])
    }
}

/// Cell text for a listed field
pub fn cell_value(owner: &BusinessOwner, field: &str) -> String {
    match field {
        "email" => owner.email.clone(),
        "businessName" => owner.business_name.clone().unwrap_or_default(),
        "phoneNumber" => owner.phone_number.clone().unwrap_or_default(),
        "address" => owner
            .business_address
            .clone()
            .or_else(|| owner.address.clone())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::validate_form;

    #[test]
    fn test_form_roundtrip_through_schema() {
        let dto = BusinessOwnerDto {
            email: "shop@example.com".into(),
            business_name: "Fresh Mart".into(),
            phone_number: "+91 98765 43210".into(),
            address: "MG Road".into(),
        };
        let values = dto.to_form();
        assert!(validate_form(FIELDS, &values).is_ok());
        assert_eq!(BusinessOwnerDto::from_form(&values), dto);
    }

    #[test]
    fn test_missing_business_name_rejected() {
        let mut values = BusinessOwnerDto::default().to_form();
        values.insert("email", "shop@example.com".into());
        assert_eq!(
            validate_form(FIELDS, &values),
            Err(vec!["Business name is required".to_string()])
        );
    }

    #[test]
    fn test_capabilities() {
        let caps = ENTITY_METADATA.capabilities;
        assert!(caps.has(Capability::ToggleVerification));
        assert!(!caps.has(Capability::Delete));
    }
}
