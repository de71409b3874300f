use crate::shared::metadata::{
    Capabilities, Capability, EntityMetadataInfo, FieldMetadata, FieldType, FieldUiMetadata,
    FormValues, ValidationRules,
};

use super::aggregate::{DeliveryPerson, DeliveryPersonDto};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_index: "a002_delivery_person",
    element_name: "Delivery person",
    list_name: "Delivery persons",
    icon: Some("truck"),
    capabilities: Capabilities::empty()
        .with(Capability::List)
        .with(Capability::Create)
        .with(Capability::Edit)
        .with(Capability::ViewDetails),
};

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata {
        name: "name",
        field_type: FieldType::Text,
        ui: FieldUiMetadata {
            label: "Name",
            placeholder: None,
            visible_in_list: true,
            visible_in_form: true,
        },
        validation: ValidationRules::required().with_max_length(100),
    },
    FieldMetadata {
        name: "email",
        field_type: FieldType::Email,
        ui: FieldUiMetadata {
            label: "Email",
            placeholder: Some("rider@example.com"),
            visible_in_list: true,
            visible_in_form: true,
        },
        validation: ValidationRules::required(),
    },
    FieldMetadata {
        name: "phoneNumber",
        field_type: FieldType::Phone,
        ui: FieldUiMetadata {
            label: "Phone number",
            placeholder: None,
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
    FieldMetadata {
        name: "vehicle",
        field_type: FieldType::Text,
        ui: FieldUiMetadata {
            label: "Vehicle",
            placeholder: None,
            visible_in_list: true,
            visible_in_form: false,
        },
        validation: ValidationRules::none(),
    },
];

impl DeliveryPersonDto {
    pub fn from_form(values: &FormValues) -> Self {
        let get = |key: &str| values.get(key).map(|v| v.trim().to_string()).unwrap_or_default();
        Self {
            email: get("email"),
            name: get("name"),
            phone_number: get("phoneNumber"),
            address: get("address"),
        }
    }

    pub fn to_form(&self) -> FormValues {
        FormValues::from([
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("phoneNumber", self.phone_number.clone()),
            ("address", self.address.clone()),
        ])
    }
}

pub fn cell_value(person: &DeliveryPerson, field: &str) -> String {
    match field {
        "name" => person.name.clone().unwrap_or_default(),
        "email" => person.email.clone(),
        "phoneNumber" => person.phone_number.clone().unwrap_or_default(),
        "address" => person.address.clone().unwrap_or_default(),
        "vehicle" => match (&person.vehicle_type, &person.vehicle_number) {
            (Some(kind), Some(number)) => format!("{} ({})", kind, number),
            (Some(kind), None) => kind.clone(),
            (None, Some(number)) => number.clone(),
            (None, None) => String::new(),
        },
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::{empty_form, validate_form};

    #[test]
    fn test_vehicle_is_list_only() {
        let form = empty_form(FIELDS);
        assert!(!form.contains_key("vehicle"));
        assert_eq!(form.len(), 4);
    }

    #[test]
    fn test_missing_fields_rejected() {
        let errors = validate_form(FIELDS, &empty_form(FIELDS)).unwrap_err();
        assert_eq!(errors, vec!["Name is required", "Email is required"]);
    }

    #[test]
    fn test_vehicle_cell() {
        let person = DeliveryPerson {
            vehicle_type: Some("bike".into()),
            vehicle_number: Some("KA-01".into()),
            ..DeliveryPerson::default()
        };
        assert_eq!(cell_value(&person, "vehicle"), "bike (KA-01)");
    }
}
