use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::common::AccountDocuments;

// ============================================================================
// Aggregate
// ============================================================================

/// Delivery person account as returned by `/auth/all-delivery-persons`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryPerson {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub last_active: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub documents: Option<AccountDocuments>,
    #[serde(default)]
    pub vehicle_type: Option<String>,
    #[serde(default)]
    pub vehicle_number: Option<String>,
}

impl DeliveryPerson {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }

    pub fn apply(&mut self, dto: &DeliveryPersonDto) {
        self.email = dto.email.clone();
        self.name = Some(dto.name.clone());
        self.phone_number = Some(dto.phone_number.clone());
        self.address = Some(dto.address.clone());
    }
}

// ============================================================================
// DTO
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryPersonDto {
    pub email: String,
    pub name: String,
    pub phone_number: String,
    pub address: String,
}

impl From<&DeliveryPerson> for DeliveryPersonDto {
    fn from(person: &DeliveryPerson) -> Self {
        Self {
            email: person.email.clone(),
            name: person.name.clone().unwrap_or_default(),
            phone_number: person.phone_number.clone().unwrap_or_default(),
            address: person.address.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryPersonResponse {
    #[serde(default)]
    pub delivery_person: Option<DeliveryPerson>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `{deliveryPersons: [...]}` or `{deliveryPersons: {data: [...]}}`
pub fn normalize_delivery_persons(body: &Value) -> Result<Vec<DeliveryPerson>, serde_json::Error> {
    let list = match body.get("deliveryPersons") {
        Some(list @ Value::Array(_)) => Some(list),
        Some(Value::Object(map)) => map.get("data").filter(|v| v.is_array()),
        _ => None,
    };

    match list {
        Some(list) => serde_json::from_value(list.clone()),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_flat_and_nested() {
        let person = json!({
            "_id": "d1",
            "email": "rider@example.com",
            "name": "Ravi",
            "vehicleType": "bike",
            "documents": {"license": {"number": "DL-1", "verified": true}}
        });
        let flat = normalize_delivery_persons(&json!({"deliveryPersons": [person.clone()]})).unwrap();
        let nested =
            normalize_delivery_persons(&json!({"deliveryPersons": {"data": [person]}})).unwrap();

        assert_eq!(flat, nested);
        assert_eq!(flat[0].vehicle_type.as_deref(), Some("bike"));
        let docs = flat[0].documents.as_ref().unwrap();
        assert_eq!(docs.present()[0].0, "Driving license");
    }

    #[test]
    fn test_unknown_shape_is_empty() {
        let body = json!({"deliveryPersons": {"items": []}});
        assert!(normalize_delivery_persons(&body).unwrap().is_empty());
    }
}
