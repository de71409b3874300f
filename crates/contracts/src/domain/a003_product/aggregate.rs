use serde::{Deserialize, Deserializer, Serialize};

use super::discount::{discounted_price, DiscountType};

// ============================================================================
// Value objects
// ============================================================================

/// Image stored by the backend's media host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub url: String,
    #[serde(default)]
    pub public_id: String,
    #[serde(default)]
    pub folder: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// Weight outside the preset options, e.g. `750 gm`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomWeight {
    #[serde(deserialize_with = "string_or_number")]
    pub value: String,
    pub unit: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl CustomWeight {
    pub fn new(unit: &str) -> Self {
        Self {
            value: String::new(),
            unit: unit.to_string(),
            description: String::new(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.value.trim().is_empty() && !self.unit.trim().is_empty()
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.value.trim(), self.unit.trim())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatedBy {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
}

// ============================================================================
// Aggregate
// ============================================================================

/// Catalog product as the admin endpoints return it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProduct {
    #[serde(rename = "_id")]
    pub id: String,
    pub product_name: String,
    #[serde(default)]
    pub product_description: String,
    #[serde(default)]
    pub product_price: f64,
    #[serde(default)]
    pub product_category: String,
    #[serde(default)]
    pub product_brand: Option<String>,
    #[serde(default)]
    pub available_weights: Vec<String>,
    #[serde(default)]
    pub custom_weights: Vec<CustomWeight>,
    #[serde(default, deserialize_with = "discount_type_lenient")]
    pub discount_type: DiscountType,
    #[serde(default)]
    pub discount_value: f64,
    #[serde(default)]
    pub discount_start_date: Option<String>,
    #[serde(default)]
    pub discount_end_date: Option<String>,
    #[serde(default)]
    pub discounted_price: Option<f64>,
    #[serde(default)]
    pub cloudinary_urls: Vec<ProductImage>,
    #[serde(default)]
    pub created_by: Option<CreatedBy>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub adoption_count: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub search_keywords: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub is_adopted: Option<bool>,
}

impl AdminProduct {
    /// Backend price when present, otherwise computed from the discount
    pub fn effective_price(&self) -> f64 {
        self.discounted_price.unwrap_or_else(|| {
            discounted_price(self.product_price, self.discount_type, self.discount_value)
        })
    }

    pub fn has_discount(&self) -> bool {
        self.discount_type != DiscountType::None && self.effective_price() < self.product_price
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.cloudinary_urls.first().map(|img| img.url.as_str())
    }

    /// Preset weights followed by the custom ones
    pub fn weight_labels(&self) -> Vec<String> {
        self.available_weights
            .iter()
            .cloned()
            .chain(self.custom_weights.iter().map(CustomWeight::label))
            .collect()
    }
}

/// Partial update sent to `PUT /admin/products/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdateDto {
    pub product_name: String,
    pub product_description: String,
    pub product_price: f64,
    pub product_category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_brand: Option<String>,
    pub available_weights: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_weights: Option<Vec<CustomWeight>>,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_end_date: Option<String>,
    pub tags: Vec<String>,
    pub is_active: bool,
}

/// Body of `GET /admin/products/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct ProductResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub product: Option<AdminProduct>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `DELETE /admin/products/bulk`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteRequest {
    pub product_ids: Vec<String>,
}

// ============================================================================
// Formatting
// ============================================================================

/// Rupee amount with Indian digit grouping, e.g. `₹1,23,456.50`
pub fn format_price(price: f64) -> String {
    let sign = if price < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", price.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let grouped = if int_part.len() <= 3 {
        int_part.to_string()
    } else {
        let (head, last3) = int_part.split_at(int_part.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 2 {
            groups.push(&head[end - 2..end]);
            end -= 2;
        }
        groups.push(&head[..end]);
        groups.reverse();
        format!("{},{}", groups.join(","), last3)
    };

    format!("{}₹{}.{}", sign, grouped, frac_part)
}

// ============================================================================
// Serde helpers
// ============================================================================

fn default_true() -> bool {
    true
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

fn discount_type_lenient<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<DiscountType, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map(|s| DiscountType::parse(&s)).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_product() {
        let product: AdminProduct = serde_json::from_str(
            r#"{
                "_id": "p1",
                "productName": "Basmati Rice",
                "productPrice": 250,
                "productCategory": "atta, rice & dal",
                "availableWeights": ["1kg"],
                "customWeights": [{"value": 750, "unit": "gm"}],
                "discountType": "percentage",
                "discountValue": 10,
                "cloudinaryUrls": [{"url": "a.jpg", "publicId": "x", "folder": "products"}],
                "createdBy": {"_id": "u1", "email": "a@b.c", "role": "admin"}
            }"#,
        )
        .unwrap();

        assert_eq!(product.custom_weights[0].value, "750");
        assert_eq!(product.weight_labels(), vec!["1kg", "750 gm"]);
        assert_eq!(product.effective_price(), 225.0);
        assert!(product.has_discount());
        assert!(product.is_active);
        assert_eq!(product.thumbnail(), Some("a.jpg"));
    }

    #[test]
    fn test_unknown_discount_type_is_none() {
        let product: AdminProduct =
            serde_json::from_str(r#"{"_id":"p","productName":"x","discountType":null}"#).unwrap();
        assert_eq!(product.discount_type, DiscountType::None);
        assert!(!product.has_discount());
    }

    #[test]
    fn test_format_price_indian_grouping() {
        assert_eq!(format_price(99.99), "₹99.99");
        assert_eq!(format_price(1234.5), "₹1,234.50");
        assert_eq!(format_price(123456.0), "₹1,23,456.00");
        assert_eq!(format_price(12345678.9), "₹1,23,45,678.90");
    }

    #[test]
    fn test_bulk_delete_wire_name() {
        let body = serde_json::to_string(&BulkDeleteRequest {
            product_ids: vec!["a".into()],
        })
        .unwrap();
        assert_eq!(body, r#"{"productIds":["a"]}"#);
    }
}
