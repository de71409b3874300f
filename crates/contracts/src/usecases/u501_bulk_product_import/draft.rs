use serde::Serialize;

use crate::domain::a003_product::{Discount, DiscountType, ProductCategory};

/// Separator of weights and tags inside a CSV cell
pub const CSV_LIST_SEPARATOR: char = ';';
/// Separator of weights and tags in the manual entry inputs
pub const MANUAL_LIST_SEPARATOR: char = ',';

/// Split a list cell, trimming tokens and dropping empty ones
pub fn split_tokens(raw: &str, separator: char) -> Vec<String> {
    raw.split(separator)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// String-typed product as typed by the user or read from a CSV row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub brand: String,
    pub available_weights: Vec<String>,
    pub tags: Vec<String>,
    pub discount_type: DiscountType,
    pub discount_value: String,
    pub discount_start: String,
    pub discount_end: String,
}

impl ProductDraft {
    pub fn weights_text(&self) -> String {
        self.available_weights.join(", ")
    }

    pub fn set_weights_text(&mut self, raw: &str) {
        self.available_weights = split_tokens(raw, MANUAL_LIST_SEPARATOR);
    }

    pub fn tags_text(&self) -> String {
        self.tags.join(", ")
    }

    pub fn set_tags_text(&mut self, raw: &str) {
        self.tags = split_tokens(raw, MANUAL_LIST_SEPARATOR);
    }

    /// Price after discount for the preview column, if both parse
    pub fn discounted_price(&self) -> Option<f64> {
        if self.discount_type == DiscountType::None {
            return None;
        }
        let price = self.price.trim().parse::<f64>().ok()?;
        let value = self.discount_value.trim().parse::<f64>().ok()?;
        Some(crate::domain::a003_product::discounted_price(
            price,
            self.discount_type,
            value,
        ))
    }
}

/// Validated product, serialized as one element of the bulk create payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub product_name: String,
    pub product_description: String,
    pub product_price: f64,
    /// Trimmed as typed; casing is left to the server
    pub product_category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_brand: Option<String>,
    pub available_weights: Vec<String>,
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub discount: Option<Discount>,
}

impl ProductRecord {
    pub fn category(&self) -> Option<ProductCategory> {
        ProductCategory::parse(&self.product_category)
    }
}

impl From<&ProductRecord> for ProductDraft {
    fn from(record: &ProductRecord) -> Self {
        let discount = record.discount.clone().unwrap_or_default();
        Self {
            name: record.product_name.clone(),
            description: record.product_description.clone(),
            price: record.product_price.to_string(),
            category: record.product_category.clone(),
            brand: record.product_brand.clone().unwrap_or_default(),
            available_weights: record.available_weights.clone(),
            tags: record.tags.clone(),
            discount_type: discount.discount_type,
            discount_value: if discount.is_active() {
                discount.discount_value.to_string()
            } else {
                String::new()
            },
            discount_start: discount.discount_start_date.unwrap_or_default(),
            discount_end: discount.discount_end_date.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tokens_keeps_order_drops_empty() {
        assert_eq!(
            split_tokens(" 250gm ;; 1kg ; ", CSV_LIST_SEPARATOR),
            vec!["250gm", "1kg"]
        );
        assert!(split_tokens("", CSV_LIST_SEPARATOR).is_empty());
    }

    #[test]
    fn test_manual_text_setters() {
        let mut draft = ProductDraft::default();
        draft.set_weights_text("500gm, 1kg,");
        draft.set_tags_text("organic");
        assert_eq!(draft.available_weights, vec!["500gm", "1kg"]);
        assert_eq!(draft.weights_text(), "500gm, 1kg");
        assert_eq!(draft.tags_text(), "organic");
    }

    #[test]
    fn test_discounted_price_preview() {
        let draft = ProductDraft {
            price: "200".into(),
            discount_type: DiscountType::Percentage,
            discount_value: "25".into(),
            ..ProductDraft::default()
        };
        assert_eq!(draft.discounted_price(), Some(150.0));
        assert_eq!(ProductDraft::default().discounted_price(), None);
    }

    #[test]
    fn test_record_payload_shape() {
        let record = ProductRecord {
            product_name: "Milk".into(),
            product_description: "Toned".into(),
            product_price: 60.0,
            product_category: "Dairy, Bread & Eggs".into(),
            product_brand: None,
            available_weights: vec!["500ml".into()],
            tags: vec![],
            discount: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["productCategory"], "Dairy, Bread & Eggs");
        assert_eq!(json["productPrice"], 60.0);
        assert!(json.get("productBrand").is_none());
        assert!(json.get("discountType").is_none());

        let draft = ProductDraft::from(&record);
        assert_eq!(draft.price, "60");
        assert_eq!(draft.category, "dairy, bread & eggs");
    }
}
