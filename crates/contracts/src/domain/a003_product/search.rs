use serde::{Deserialize, Serialize, Serializer};

use super::adoption::StockStatus;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Filters shared by the catalog list, the adoption search and the adopted list.
///
/// Unset and blank fields are left out of the query string; `weights` is
/// sent as one comma-joined value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchOptions {
    #[serde(skip_serializing_if = "is_blank")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "is_blank")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub weights: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_status: Option<StockStatus>,
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "is_blank")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl Default for ProductSearchOptions {
    fn default() -> Self {
        Self {
            search: None,
            category: None,
            min_price: None,
            max_price: None,
            brand: None,
            weights: Vec::new(),
            stock_status: None,
            page: 1,
            limit: 12,
            sort_by: Some("createdAt".to_string()),
            sort_order: Some(SortOrder::Desc),
        }
    }
}

impl ProductSearchOptions {
    /// Defaults of the adopted-products tab
    pub fn adopted() -> Self {
        Self {
            sort_by: Some("productCreatedAt".to_string()),
            ..Self::default()
        }
    }

    /// Single-item page used when only the pagination totals matter
    pub fn count_only() -> Self {
        Self {
            limit: 1,
            sort_by: None,
            sort_order: None,
            ..Self::default()
        }
    }

    pub fn to_query(&self) -> Result<String, serde_qs::Error> {
        serde_qs::to_string(self)
    }

    /// Sort by `field`, flipping the order when it is already the sort field
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_by.as_deref() == Some(field) {
            self.sort_order = Some(self.sort_order.unwrap_or_default().toggled());
        } else {
            self.sort_by = Some(field.to_string());
            self.sort_order = Some(SortOrder::Asc);
        }
        self.page = 1;
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |s| s.trim().is_empty())
}

fn comma_joined<S: Serializer>(values: &[String], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&values.join(","))
}

// ============================================================================
// Paged responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_products: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_products: 0,
            has_next_page: false,
            has_prev_page: false,
        }
    }
}

/// `{success, products, pagination}` as returned by every product listing
#[derive(Debug, Clone, Deserialize)]
pub struct ProductPage<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default = "Vec::new")]
    pub products: Vec<T>,
    #[serde(default)]
    pub pagination: Pagination,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_product::AdminProduct;
    use std::collections::BTreeMap;

    fn parse(query: &str) -> BTreeMap<String, String> {
        serde_qs::from_str(query).unwrap()
    }

    #[test]
    fn test_empty_fields_are_omitted() {
        let opts = ProductSearchOptions {
            search: Some("   ".into()),
            brand: Some(String::new()),
            ..ProductSearchOptions::default()
        };
        let q = parse(&opts.to_query().unwrap());

        assert!(!q.contains_key("search"));
        assert!(!q.contains_key("brand"));
        assert!(!q.contains_key("weights"));
        assert!(!q.contains_key("minPrice"));
        assert_eq!(q["page"], "1");
        assert_eq!(q["limit"], "12");
        assert_eq!(q["sortBy"], "createdAt");
        assert_eq!(q["sortOrder"], "desc");
    }

    #[test]
    fn test_weights_are_comma_joined() {
        let opts = ProductSearchOptions {
            search: Some("milk".into()),
            category: Some("other".into()),
            min_price: Some(10.5),
            weights: vec!["250gm".into(), "500gm".into()],
            stock_status: Some(StockStatus::OutOfStock),
            page: 2,
            ..ProductSearchOptions::default()
        };
        let q = parse(&opts.to_query().unwrap());

        assert_eq!(q["search"], "milk");
        assert_eq!(q["category"], "other");
        assert_eq!(q["minPrice"], "10.5");
        assert_eq!(q["weights"], "250gm,500gm");
        assert_eq!(q["stockStatus"], "outOfStock");
        assert_eq!(q["page"], "2");
    }

    #[test]
    fn test_count_only_query() {
        let q = parse(&ProductSearchOptions::count_only().to_query().unwrap());
        assert_eq!(q["limit"], "1");
        assert!(!q.contains_key("sortBy"));
    }

    #[test]
    fn test_toggle_sort() {
        let mut opts = ProductSearchOptions {
            page: 4,
            ..ProductSearchOptions::default()
        };
        opts.toggle_sort("productPrice");
        assert_eq!(opts.sort_by.as_deref(), Some("productPrice"));
        assert_eq!(opts.sort_order, Some(SortOrder::Asc));
        assert_eq!(opts.page, 1);
        opts.toggle_sort("productPrice");
        assert_eq!(opts.sort_order, Some(SortOrder::Desc));
    }

    #[test]
    fn test_page_defaults_when_fields_missing() {
        let page: ProductPage<AdminProduct> =
            serde_json::from_str(r#"{"success":true,"products":[]}"#).unwrap();
        assert!(page.success);
        assert_eq!(page.pagination, Pagination::default());
    }
}
