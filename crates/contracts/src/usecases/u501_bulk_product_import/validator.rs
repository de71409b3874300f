//! Rule set shared by CSV rows and manual entries.
//!
//! Required fields are checked independently so one row can report several
//! problems. Price and category are only checked when present.

use std::fmt;

use crate::domain::a003_product::discount::validate_discount;
use crate::domain::a003_product::{DiscountType, ProductCategory};

use super::draft::{ProductDraft, ProductRecord};

pub const MAX_NAME_CHARS: usize = 100;
pub const MAX_DESCRIPTION_CHARS: usize = 1000;

/// Where a draft came from; decides the message prefix and wording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLabel {
    /// CSV line number, header is line 1
    Row(usize),
    /// 1-based position in the manual list
    Product(usize),
}

impl fmt::Display for RowLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row(n) => write!(f, "Row {}", n),
            Self::Product(n) => write!(f, "Product {}", n),
        }
    }
}

impl RowLabel {
    fn required(&self, field: &str) -> String {
        match self {
            Self::Row(_) => format!("{}: Product {} is required", self, field),
            Self::Product(_) => {
                let mut chars = field.chars();
                let capitalized: String = match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                };
                format!("{}: {} is required", self, capitalized)
            }
        }
    }
}

/// Strict decimal parse: finite and not negative
pub fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
}

/// Validate one draft, returning the record or every message for it
pub fn validate_draft(draft: &ProductDraft, label: RowLabel) -> Result<ProductRecord, Vec<String>> {
    let mut errors = Vec::new();

    let name = draft.name.trim();
    let description = draft.description.trim();
    let raw_price = draft.price.trim();
    let raw_category = draft.category.trim();

    if name.is_empty() {
        errors.push(label.required("name"));
    }
    if description.is_empty() {
        errors.push(label.required("description"));
    }
    if raw_price.is_empty() {
        errors.push(label.required("price"));
    }
    if raw_category.is_empty() {
        errors.push(label.required("category"));
    }

    let price = if raw_price.is_empty() {
        None
    } else {
        let parsed = parse_price(raw_price);
        if parsed.is_none() {
            errors.push(format!("{}: Invalid price \"{}\"", label, draft.price));
        }
        parsed
    };

    let category = if raw_category.is_empty() {
        None
    } else if ProductCategory::parse(raw_category).is_some() {
        Some(raw_category)
    } else {
        errors.push(format!("{}: Invalid category \"{}\"", label, draft.category));
        None
    };

    if name.chars().count() > MAX_NAME_CHARS {
        errors.push(format!(
            "{}: Name too long (max {} characters)",
            label, MAX_NAME_CHARS
        ));
    }
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        errors.push(format!(
            "{}: Description too long (max {} characters)",
            label, MAX_DESCRIPTION_CHARS
        ));
    }

    let discount = match (draft.discount_type, price) {
        (DiscountType::None, _) => None,
        (_, None) => None,
        (kind, Some(price)) => match validate_discount(
            kind,
            &draft.discount_value,
            price,
            &draft.discount_start,
            &draft.discount_end,
        ) {
            Ok(discount) => Some(discount),
            Err(e) => {
                errors.push(format!("{}: {}", label, e));
                None
            }
        },
    };

    match (price, category) {
        (Some(price), Some(category)) if errors.is_empty() => Ok(ProductRecord {
            product_name: name.to_string(),
            product_description: description.to_string(),
            product_price: price,
            product_category: category.to_string(),
            product_brand: Some(draft.brand.trim().to_string()).filter(|b| !b.is_empty()),
            available_weights: draft.available_weights.clone(),
            tags: draft.tags.clone(),
            discount,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, desc: &str, price: &str, category: &str) -> ProductDraft {
        ProductDraft {
            name: name.into(),
            description: desc.into(),
            price: price.into(),
            category: category.into(),
            ..ProductDraft::default()
        }
    }

    #[test]
    fn test_required_checks_are_independent() {
        let errors = validate_draft(&draft("", "", "", ""), RowLabel::Row(2)).unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Row 2: Product name is required",
                "Row 2: Product description is required",
                "Row 2: Product price is required",
                "Row 2: Product category is required",
            ]
        );
    }

    #[test]
    fn test_manual_wording() {
        let errors = validate_draft(&draft("x", "", "5", "other"), RowLabel::Product(3)).unwrap_err();
        assert_eq!(errors, vec!["Product 3: Description is required"]);
    }

    #[test]
    fn test_price_boundaries() {
        let err = validate_draft(&draft("a", "b", "-1", "other"), RowLabel::Row(2)).unwrap_err();
        assert_eq!(err, vec!["Row 2: Invalid price \"-1\""]);

        let ok = validate_draft(&draft("a", "b", "0", "other"), RowLabel::Row(2)).unwrap();
        assert_eq!(ok.product_price, 0.0);

        for bad in ["abc", "12abc", "NaN", "inf"] {
            assert!(validate_draft(&draft("a", "b", bad, "other"), RowLabel::Row(2)).is_err());
        }
    }

    #[test]
    fn test_mixed_case_category_accepted_as_typed() {
        let record =
            validate_draft(&draft("a", "b", "10", " Vegetables & Fruits "), RowLabel::Row(2)).unwrap();
        assert_eq!(record.product_category, "Vegetables & Fruits");
        assert_eq!(record.category(), Some(ProductCategory::VegetablesFruits));
    }

    #[test]
    fn test_invalid_category_keeps_raw_text() {
        let err = validate_draft(&draft("a", "b", "10", "Toys"), RowLabel::Row(4)).unwrap_err();
        assert_eq!(err, vec!["Row 4: Invalid category \"Toys\""]);
    }

    #[test]
    fn test_length_limits() {
        let long_name = "n".repeat(101);
        let long_desc = "d".repeat(1001);
        let errors =
            validate_draft(&draft(&long_name, &long_desc, "1", "other"), RowLabel::Product(1))
                .unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Product 1: Name too long (max 100 characters)",
                "Product 1: Description too long (max 1000 characters)",
            ]
        );
        assert!(validate_draft(&draft(&"n".repeat(100), "d", "1", "other"), RowLabel::Row(2)).is_ok());
    }

    #[test]
    fn test_discount_checked_for_manual_entries() {
        let mut d = draft("a", "b", "100", "other");
        d.discount_type = DiscountType::Percentage;
        d.discount_value = "150".into();
        let errors = validate_draft(&d, RowLabel::Product(2)).unwrap_err();
        assert_eq!(errors, vec!["Product 2: Percentage discount cannot exceed 100%"]);

        d.discount_value = "10".into();
        let record = validate_draft(&d, RowLabel::Product(2)).unwrap();
        assert_eq!(record.discount.map(|x| x.apply(100.0)), Some(90.0));
    }

    #[test]
    fn test_brand_blank_becomes_none() {
        let mut d = draft("a", "b", "1", "other");
        d.brand = "  ".into();
        assert_eq!(validate_draft(&d, RowLabel::Row(2)).unwrap().product_brand, None);
    }
}
