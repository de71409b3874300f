//! Tab titles.
//!
//! Account entities take their `list_name` from contracts metadata; the rest
//! are fixed strings. Unknown keys map to "" and the caller falls back to the key.

use contracts::domain::a001_business_owner::metadata::ENTITY_METADATA as A001;
use contracts::domain::a002_delivery_person::metadata::ENTITY_METADATA as A002;

const PRODUCT_DETAIL_PREFIX: &str = "a003_product_detail_";

pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "d400_overview" => "Dashboard",

        "a001_business_owner" => A001.list_name,
        "a002_delivery_person" => A002.list_name,

        "a003_product" => "Products",
        "a003_product_new" => "Add product",
        k if k.starts_with(PRODUCT_DETAIL_PREFIX) => "Edit product",

        "u501_bulk_product_import" => "Bulk upload",
        "u502_product_adoption" => "Product adoption",

        _ => "",
    }
}

/// Tab key of the edit page for a product
pub fn product_detail_key(id: &str) -> String {
    format!("{}{}", PRODUCT_DETAIL_PREFIX, id)
}

/// Product id encoded in a detail tab key
pub fn product_id_from_key(key: &str) -> Option<&str> {
    key.strip_prefix(PRODUCT_DETAIL_PREFIX).filter(|id| !id.is_empty())
}

/// Detail tab title: `<entity> · <identifier>`
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key("a001_business_owner"), "Business owners");
        assert_eq!(tab_label_for_key("a003_product_detail_abc"), "Edit product");
        assert_eq!(tab_label_for_key("unknown"), "");
    }

    #[test]
    fn test_product_detail_key() {
        let key = product_detail_key("665f1c");
        assert_eq!(key, "a003_product_detail_665f1c");
        assert_eq!(product_id_from_key(&key), Some("665f1c"));
        assert_eq!(product_id_from_key("a003_product_detail_"), None);
        assert_eq!(product_id_from_key("a003_product"), None);
    }

    #[test]
    fn test_detail_tab_label() {
        assert_eq!(detail_tab_label("Product", "Basmati rice"), "Product · Basmati rice");
    }
}
