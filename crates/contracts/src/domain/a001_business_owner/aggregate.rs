use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::common::{AccountDocuments, AccountImage};

// ============================================================================
// Aggregate
// ============================================================================

/// Business owner account as returned by `/auth/all-business-owners`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessOwner {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub business_name: Option<String>,
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
    pub categories: Vec<String>,
    #[serde(default)]
    pub business_address: Option<String>,
    #[serde(default)]
    pub pincode: Option<String>,
    #[serde(default)]
    pub business_type: Option<String>,
    #[serde(default)]
    pub gstin: Option<String>,
    #[serde(default)]
    pub business_images: Vec<AccountImage>,
}

impl BusinessOwner {
    /// Name shown in tables and pickers, falls back to the email
    pub fn display_name(&self) -> &str {
        self.business_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }

    /// Merge an accepted edit into the cached row
    pub fn apply(&mut self, dto: &BusinessOwnerDto) {
        self.email = dto.email.clone();
        self.business_name = Some(dto.business_name.clone());
        self.phone_number = Some(dto.phone_number.clone());
        self.address = Some(dto.address.clone());
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Create / update payload for a business owner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessOwnerDto {
    pub email: String,
    pub business_name: String,
    pub phone_number: String,
    pub address: String,
}

impl From<&BusinessOwner> for BusinessOwnerDto {
    fn from(owner: &BusinessOwner) -> Self {
        Self {
            email: owner.email.clone(),
            business_name: owner.business_name.clone().unwrap_or_default(),
            phone_number: owner.phone_number.clone().unwrap_or_default(),
            address: owner.address.clone().unwrap_or_default(),
        }
    }
}

/// Body of a successful create call
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessOwnerResponse {
    #[serde(default)]
    pub business_owner: Option<BusinessOwner>,
    #[serde(default)]
    pub message: Option<String>,
}

// ============================================================================
// List normalization
// ============================================================================

/// Extract the owner list from the list endpoint body.
///
/// The backend has returned `{businessOwners: [...]}`,
/// `{businessOwners: {data: [...]}}` and `{businessOwners: {<key>: [...]}}`
/// over time. All of them end up as a flat list; anything else is empty.
pub fn normalize_business_owners(body: &Value) -> Result<Vec<BusinessOwner>, serde_json::Error> {
    let Some(owners) = body.get("businessOwners") else {
        return Ok(Vec::new());
    };

    let list = match owners {
        Value::Array(_) => Some(owners),
        Value::Object(map) => map
            .get("data")
            .filter(|v| v.is_array())
            .or_else(|| map.values().find(|v| v.is_array())),
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

    fn owner_json() -> Value {
        json!({
            "_id": "64a1",
            "email": "shop@example.com",
            "businessName": "Fresh Mart",
            "isVerified": true,
            "categories": ["dairy, bread & eggs"],
            "businessImages": [{"url": "i.jpg", "publicId": "p1"}]
        })
    }

    #[test]
    fn test_three_response_shapes_normalize_to_same_list() {
        let flat = json!({ "businessOwners": [owner_json()] });
        let nested = json!({ "businessOwners": { "data": [owner_json()] } });
        let keyed = json!({ "businessOwners": { "owners": [owner_json()], "count": 1 } });

        let a = normalize_business_owners(&flat).unwrap();
        let b = normalize_business_owners(&nested).unwrap();
        let c = normalize_business_owners(&keyed).unwrap();

        assert_eq!(a.len(), 1);
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a[0].id, "64a1");
        assert!(a[0].is_verified);
        assert_eq!(a[0].business_images[0].public_id, "p1");
    }

    #[test]
    fn test_missing_list_is_empty() {
        assert!(normalize_business_owners(&json!({})).unwrap().is_empty());
        assert!(normalize_business_owners(&json!({"businessOwners": {"count": 0}}))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut owner: BusinessOwner = serde_json::from_value(owner_json()).unwrap();
        assert_eq!(owner.display_name(), "Fresh Mart");
        owner.business_name = Some("  ".into());
        assert_eq!(owner.display_name(), "shop@example.com");
    }

    #[test]
    fn test_apply_dto() {
        let mut owner: BusinessOwner = serde_json::from_value(owner_json()).unwrap();
        let mut dto = BusinessOwnerDto::from(&owner);
        dto.phone_number = "+91 99999".into();
        owner.apply(&dto);
        assert_eq!(owner.phone_number.as_deref(), Some("+91 99999"));
        assert_eq!(owner.business_name.as_deref(), Some("Fresh Mart"));
    }
}
