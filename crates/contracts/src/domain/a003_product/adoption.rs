use serde::{Deserialize, Serialize};

use super::aggregate::ProductImage;
use super::discount::DiscountType;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StockStatus {
    #[default]
    InStock,
    OutOfStock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InStock => "inStock",
            Self::OutOfStock => "outOfStock",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::InStock => "In stock",
            Self::OutOfStock => "Out of stock",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "inStock" => Some(Self::InStock),
            "outOfStock" => Some(Self::OutOfStock),
            _ => None,
        }
    }
}

/// Body of `POST /business-owner/products/adopt/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionRequest {
    pub selected_weights: Vec<String>,
    pub stock_status: StockStatus,
    pub product_quantity: u32,
}

impl AdoptionRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.selected_weights.is_empty() {
            return Err("Please select at least one weight option".to_string());
        }
        Ok(())
    }

    pub fn success_message(&self) -> String {
        format!(
            "Product adopted successfully with {} weight option(s)!",
            self.selected_weights.len()
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptedImage {
    pub image_url: String,
    #[serde(default)]
    pub public_id: String,
}

/// A catalog product adopted into a business owner's shop
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptedProduct {
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
    pub discount_type: Option<DiscountType>,
    #[serde(default)]
    pub discount_value: f64,
    #[serde(default)]
    pub discounted_price: Option<f64>,
    #[serde(default)]
    pub product_images: Vec<AdoptedImage>,
    #[serde(default)]
    pub cloudinary_urls: Vec<ProductImage>,
    #[serde(default)]
    pub available_weights: Vec<String>,
    #[serde(default)]
    pub selected_weight: String,
    #[serde(default)]
    pub product_quantity: u32,
    #[serde(default)]
    pub stock_status: StockStatus,
    #[serde(default)]
    pub original_product_id: String,
    #[serde(default)]
    pub business_owner_phone: Option<String>,
    #[serde(default)]
    pub business_owner_email: Option<String>,
    #[serde(default)]
    pub business_owner_address: Option<String>,
    #[serde(default)]
    pub product_created_at: Option<String>,
    #[serde(default)]
    pub product_updated_at: Option<String>,
}

impl AdoptedProduct {
    pub fn thumbnail(&self) -> Option<&str> {
        self.cloudinary_urls
            .first()
            .map(|img| img.url.as_str())
            .or_else(|| self.product_images.first().map(|img| img.image_url.as_str()))
    }

    pub fn effective_price(&self) -> f64 {
        self.discounted_price.unwrap_or(self.product_price)
    }
}

/// Partial update of an adopted product; unset fields are left alone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptedProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_status: Option<StockStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_weight: Option<String>,
}

impl AdoptedProductUpdate {
    pub fn is_empty(&self) -> bool {
        self.stock_status.is_none() && self.product_quantity.is_none() && self.selected_weight.is_none()
    }

    /// Only the fields that differ from `current`
    pub fn diff(current: &AdoptedProduct, stock: StockStatus, quantity: u32, weight: &str) -> Self {
        Self {
            stock_status: (stock != current.stock_status).then_some(stock),
            product_quantity: (quantity != current.product_quantity).then_some(quantity),
            selected_weight: (weight != current.selected_weight).then(|| weight.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adoption_request_requires_weight() {
        let mut req = AdoptionRequest {
            selected_weights: vec![],
            stock_status: StockStatus::InStock,
            product_quantity: 0,
        };
        assert!(req.validate().is_err());
        req.selected_weights = vec!["1kg".into(), "500gm".into()];
        assert!(req.validate().is_ok());
        assert_eq!(
            req.success_message(),
            "Product adopted successfully with 2 weight option(s)!"
        );
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains(r#""stockStatus":"inStock""#));
        assert!(json.contains(r#""selectedWeights":["1kg","500gm"]"#));
    }

    #[test]
    fn test_update_diff_only_changed_fields() {
        let current = AdoptedProduct {
            id: "a1".into(),
            product_name: "Ghee".into(),
            selected_weight: "1kg".into(),
            product_quantity: 5,
            ..AdoptedProduct::default()
        };
        let update = AdoptedProductUpdate::diff(&current, StockStatus::OutOfStock, 5, "1kg");
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"stockStatus":"outOfStock"}"#
        );
        assert!(AdoptedProductUpdate::diff(&current, StockStatus::InStock, 5, "1kg").is_empty());
    }

    #[test]
    fn test_thumbnail_falls_back_to_product_images() {
        let product: AdoptedProduct = serde_json::from_str(
            r#"{"_id":"a","productName":"x","productImages":[{"imageUrl":"p.jpg","publicId":"1"}]}"#,
        )
        .unwrap();
        assert_eq!(product.thumbnail(), Some("p.jpg"));
        assert_eq!(product.stock_status, StockStatus::InStock);
    }
}
