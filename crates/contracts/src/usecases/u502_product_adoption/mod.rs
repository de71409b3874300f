//! Adopting catalog products into a business owner's shop. The request and
//! response types live with the product aggregate; this module only names
//! the use case.

use crate::usecases::common::UseCaseMetadata;

pub struct ProductAdoption;

impl UseCaseMetadata for ProductAdoption {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "product_adoption"
    }

    fn display_name() -> &'static str {
        "Product Adoption"
    }

    fn description() -> &'static str {
        "Search the catalog, adopt products with chosen weights and manage adopted stock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_is_the_tab_key() {
        assert_eq!(ProductAdoption::full_name(), "u502_product_adoption");
    }
}
