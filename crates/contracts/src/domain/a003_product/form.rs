use thiserror::Error;

use super::aggregate::{AdminProduct, CustomWeight, ProductUpdateDto};
use super::category::ProductCategory;
use super::discount::{to_datetime_local, validate_discount, Discount, DiscountError, DiscountType};

/// Pseudo weight option that enables the custom weight rows
pub const CUSTOM_WEIGHT: &str = "custom";

pub const MIN_IMAGES: usize = 3;
pub const MAX_IMAGES: usize = 20;
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;
pub const ACCEPTED_IMAGE_EXTENSIONS: [&str; 4] = ["jpeg", "jpg", "png", "webp"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductFormError {
    #[error("Product name is required")]
    NameRequired,
    #[error("Product description is required")]
    DescriptionRequired,
    #[error("Valid product price is required")]
    InvalidPrice,
    #[error("Product category is required")]
    CategoryRequired,
    #[error("At least one weight option must be selected")]
    NoWeights,
    #[error("Custom weight details are required when custom weight is selected")]
    CustomWeightMissing,
    #[error("All custom weight entries must have value and unit")]
    CustomWeightIncomplete,
    #[error("Minimum 3 product images are required")]
    TooFewImages,
    #[error("Maximum 20 product images are allowed")]
    TooManyImages,
    #[error(transparent)]
    Discount(#[from] DiscountError),
}

/// Whether a picked file can be attached as a product image
pub fn is_acceptable_image(file_name: &str, size: u64) -> bool {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();
    size <= MAX_IMAGE_BYTES && ACCEPTED_IMAGE_EXTENSIONS.contains(&ext.as_str())
}

/// String-typed state of the single product create / edit form
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub brand: String,
    pub available_weights: Vec<String>,
    pub custom_weights: Vec<CustomWeight>,
    pub discount_type: DiscountType,
    pub discount_value: String,
    pub discount_start: String,
    pub discount_end: String,
    pub tags: Vec<String>,
    pub is_active: bool,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            category: String::new(),
            brand: String::new(),
            available_weights: Vec::new(),
            custom_weights: Vec::new(),
            discount_type: DiscountType::None,
            discount_value: String::new(),
            discount_start: String::new(),
            discount_end: String::new(),
            tags: Vec::new(),
            is_active: true,
        }
    }
}

impl ProductForm {
    /// Prefill from a stored product; custom weights switch on the `custom` option
    pub fn from_product(product: &AdminProduct) -> Self {
        let mut available_weights = product.available_weights.clone();
        if !product.custom_weights.is_empty() {
            available_weights.push(CUSTOM_WEIGHT.to_string());
        }

        Self {
            name: product.product_name.clone(),
            description: product.product_description.clone(),
            price: product.product_price.to_string(),
            category: product.product_category.clone(),
            brand: product.product_brand.clone().unwrap_or_default(),
            available_weights,
            custom_weights: product.custom_weights.clone(),
            discount_type: product.discount_type,
            discount_value: if product.discount_value > 0.0 {
                product.discount_value.to_string()
            } else {
                String::new()
            },
            discount_start: product
                .discount_start_date
                .as_deref()
                .map(to_datetime_local)
                .unwrap_or_default(),
            discount_end: product
                .discount_end_date
                .as_deref()
                .map(to_datetime_local)
                .unwrap_or_default(),
            tags: product.tags.clone(),
            is_active: product.is_active,
        }
    }

    pub fn uses_custom_weights(&self) -> bool {
        self.available_weights.iter().any(|w| w == CUSTOM_WEIGHT)
    }

    pub fn toggle_weight(&mut self, weight: &str, checked: bool) {
        if checked {
            if !self.available_weights.iter().any(|w| w == weight) {
                self.available_weights.push(weight.to_string());
            }
            if weight == CUSTOM_WEIGHT && self.custom_weights.is_empty() {
                self.custom_weights.push(CustomWeight::new("gm"));
            }
        } else {
            self.available_weights.retain(|w| w != weight);
            if weight == CUSTOM_WEIGHT {
                self.custom_weights.clear();
            }
        }
    }

    pub fn add_custom_weight(&mut self) {
        self.custom_weights.push(CustomWeight::new("gm"));
    }

    pub fn remove_custom_weight(&mut self, index: usize) {
        if index < self.custom_weights.len() {
            self.custom_weights.remove(index);
        }
    }

    /// Adds a trimmed tag; blanks and duplicates are ignored
    pub fn add_tag(&mut self, raw: &str) -> bool {
        let tag = raw.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    fn parsed_price(&self) -> Option<f64> {
        self.price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p > 0.0)
    }

    /// Preview of the price after the current discount input, if it is valid
    pub fn discount_preview(&self) -> Option<f64> {
        let price = self.parsed_price()?;
        validate_discount(
            self.discount_type,
            &self.discount_value,
            price,
            &self.discount_start,
            &self.discount_end,
        )
        .ok()
        .filter(Discount::is_active)
        .map(|d| d.apply(price))
    }

    /// Checks in the order the form shows them and stops at the first problem.
    /// `image_count` is only given when creating.
    pub fn validate(&self, image_count: Option<usize>) -> Result<Discount, ProductFormError> {
        if self.name.trim().is_empty() {
            return Err(ProductFormError::NameRequired);
        }
        if self.description.trim().is_empty() {
            return Err(ProductFormError::DescriptionRequired);
        }
        let price = self.parsed_price().ok_or(ProductFormError::InvalidPrice)?;
        if self.category.trim().is_empty() {
            return Err(ProductFormError::CategoryRequired);
        }
        if self.available_weights.is_empty() {
            return Err(ProductFormError::NoWeights);
        }
        if self.uses_custom_weights() {
            if self.custom_weights.is_empty() {
                return Err(ProductFormError::CustomWeightMissing);
            }
            if !self.custom_weights.iter().all(CustomWeight::is_complete) {
                return Err(ProductFormError::CustomWeightIncomplete);
            }
        }
        if let Some(count) = image_count {
            if count < MIN_IMAGES {
                return Err(ProductFormError::TooFewImages);
            }
            if count > MAX_IMAGES {
                return Err(ProductFormError::TooManyImages);
            }
        }

        Ok(validate_discount(
            self.discount_type,
            &self.discount_value,
            price,
            &self.discount_start,
            &self.discount_end,
        )?)
    }

    fn canonical_category(&self) -> String {
        ProductCategory::parse(&self.category)
            .map(|c| c.label().to_string())
            .unwrap_or_else(|| self.category.trim().to_string())
    }

    fn preset_weights(&self) -> Vec<String> {
        self.available_weights
            .iter()
            .filter(|w| *w != CUSTOM_WEIGHT)
            .cloned()
            .collect()
    }

    /// Update payload; runs the validator first
    pub fn to_update_dto(&self) -> Result<ProductUpdateDto, ProductFormError> {
        let discount = self.validate(None)?;
        let price = self.parsed_price().ok_or(ProductFormError::InvalidPrice)?;

        Ok(ProductUpdateDto {
            product_name: self.name.trim().to_string(),
            product_description: self.description.trim().to_string(),
            product_price: price,
            product_category: self.canonical_category(),
            product_brand: Some(self.brand.trim().to_string()).filter(|b| !b.is_empty()),
            available_weights: self.preset_weights(),
            custom_weights: Some(self.custom_weights.clone()).filter(|c| !c.is_empty()),
            discount_type: discount.discount_type,
            discount_value: discount.discount_value,
            discount_start_date: discount.discount_start_date,
            discount_end_date: discount.discount_end_date,
            tags: self.tags.clone(),
            is_active: self.is_active,
        })
    }

    /// Text parts of the multipart create request, in send order.
    /// The images are appended by the caller under `productImages`.
    pub fn multipart_fields(&self) -> Result<Vec<(&'static str, String)>, ProductFormError> {
        let discount = self.validate(None)?;
        let mut fields = vec![
            ("productName", self.name.trim().to_string()),
            ("productDescription", self.description.trim().to_string()),
            ("productPrice", self.price.trim().to_string()),
            ("productCategory", self.canonical_category()),
        ];

        if !self.brand.trim().is_empty() {
            fields.push(("productBrand", self.brand.trim().to_string()));
        }
        for weight in &self.available_weights {
            fields.push(("availableWeights", weight.clone()));
        }
        if self.uses_custom_weights() {
            let json = serde_json::to_string(&self.custom_weights)
                .map_err(|_| ProductFormError::CustomWeightIncomplete)?;
            fields.push(("customWeights", json));
        }

        fields.push(("discountType", discount.discount_type.as_str().to_string()));
        if discount.is_active() {
            fields.push(("discountValue", discount.discount_value.to_string()));
            if let Some(start) = discount.discount_start_date {
                fields.push(("discountStartDate", start));
            }
            if let Some(end) = discount.discount_end_date {
                fields.push(("discountEndDate", end));
            }
        }
        if !self.tags.is_empty() {
            fields.push(("tags", self.tags.join(",")));
        }

        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ProductForm {
        ProductForm {
            name: "Toor Dal".into(),
            description: "Unpolished".into(),
            price: "180".into(),
            category: "Atta, Rice & Dal".into(),
            available_weights: vec!["1kg".into()],
            ..ProductForm::default()
        }
    }

    #[test]
    fn test_validation_order() {
        let mut form = ProductForm::default();
        assert_eq!(form.validate(None), Err(ProductFormError::NameRequired));
        form.name = "x".into();
        assert_eq!(form.validate(None), Err(ProductFormError::DescriptionRequired));
        form.description = "y".into();
        form.price = "0".into();
        assert_eq!(form.validate(None), Err(ProductFormError::InvalidPrice));
        form.price = "10".into();
        assert_eq!(form.validate(None), Err(ProductFormError::CategoryRequired));
        form.category = "other".into();
        assert_eq!(form.validate(None), Err(ProductFormError::NoWeights));
    }

    #[test]
    fn test_custom_weight_toggle_and_validation() {
        let mut form = valid_form();
        form.toggle_weight(CUSTOM_WEIGHT, true);
        assert_eq!(form.custom_weights.len(), 1);
        assert_eq!(form.validate(None), Err(ProductFormError::CustomWeightIncomplete));

        form.custom_weights[0].value = "750".into();
        assert!(form.validate(None).is_ok());

        form.toggle_weight(CUSTOM_WEIGHT, false);
        assert!(form.custom_weights.is_empty());
        assert!(!form.uses_custom_weights());
    }

    #[test]
    fn test_image_count_bounds() {
        let form = valid_form();
        assert_eq!(form.validate(Some(2)), Err(ProductFormError::TooFewImages));
        assert!(form.validate(Some(3)).is_ok());
        assert!(form.validate(Some(20)).is_ok());
        assert_eq!(form.validate(Some(21)), Err(ProductFormError::TooManyImages));
    }

    #[test]
    fn test_discount_errors_surface() {
        let mut form = valid_form();
        form.discount_type = DiscountType::Fixed;
        form.discount_value = "180".into();
        assert_eq!(
            form.validate(None).unwrap_err().to_string(),
            "Fixed discount cannot be greater than or equal to product price"
        );
        form.discount_value = "30".into();
        assert_eq!(form.discount_preview(), Some(150.0));
    }

    #[test]
    fn test_update_dto_normalizes_category_and_drops_custom_marker() {
        let mut form = valid_form();
        form.toggle_weight(CUSTOM_WEIGHT, true);
        form.custom_weights[0].value = "750".into();
        form.brand = "  ".into();

        let dto = form.to_update_dto().unwrap();
        assert_eq!(dto.product_category, "atta, rice & dal");
        assert_eq!(dto.available_weights, vec!["1kg"]);
        assert_eq!(dto.custom_weights.as_ref().map(Vec::len), Some(1));
        assert_eq!(dto.product_brand, None);
        assert_eq!(dto.product_price, 180.0);
    }

    #[test]
    fn test_multipart_fields() {
        let mut form = valid_form();
        form.tags = vec!["organic".into(), "fresh".into()];
        let fields = form.multipart_fields().unwrap();
        let names: Vec<&str> = fields.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            names,
            vec![
                "productName",
                "productDescription",
                "productPrice",
                "productCategory",
                "availableWeights",
                "discountType",
                "tags"
            ]
        );
        assert_eq!(fields.last().unwrap().1, "organic,fresh");
    }

    #[test]
    fn test_tags_trim_and_dedupe() {
        let mut form = ProductForm::default();
        assert!(form.add_tag(" fresh "));
        assert!(!form.add_tag("fresh"));
        assert!(!form.add_tag("   "));
        form.remove_tag("fresh");
        assert!(form.tags.is_empty());
    }

    #[test]
    fn test_acceptable_image() {
        assert!(is_acceptable_image("photo.JPG", 1024));
        assert!(!is_acceptable_image("photo.gif", 1024));
        assert!(!is_acceptable_image("photo.png", MAX_IMAGE_BYTES + 1));
        assert!(!is_acceptable_image("noext", 10));
    }

    #[test]
    fn test_from_product_roundtrip() {
        let product = AdminProduct {
            id: "p1".into(),
            product_name: "Ghee".into(),
            product_price: 550.0,
            custom_weights: vec![CustomWeight {
                value: "750".into(),
                unit: "gm".into(),
                description: String::new(),
            }],
            discount_start_date: Some("2024-05-01T10:30:00.000Z".into()),
            is_active: true,
            ..AdminProduct::default()
        };
        let form = ProductForm::from_product(&product);
        assert!(form.uses_custom_weights());
        assert_eq!(form.price, "550");
        assert_eq!(form.discount_start, "2024-05-01T10:30");
        assert!(form.discount_value.is_empty());
    }
}
