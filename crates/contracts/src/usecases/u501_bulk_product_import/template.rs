use csv::{Terminator, WriterBuilder};

use super::header::HeaderField;

pub const TEMPLATE_FILE_NAME: &str = "bulk_products_template.csv";

/// Sample row in template column order
pub const TEMPLATE_SAMPLE: [&str; 7] = [
    "Sample Product",
    "This is a sample product description",
    "99.99",
    "vegetables & fruits",
    "Sample Brand",
    "250gm;500gm;1kg",
    "organic;fresh;healthy",
];

/// Header line plus the sample row, `\n` terminated
pub fn template_csv() -> Result<String, csv::Error> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HeaderField::ALL.iter().map(HeaderField::column_name))?;
    writer.write_record(TEMPLATE_SAMPLE)?;

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_product::ProductCategory;
    use crate::usecases::u501_bulk_product_import::import_csv;

    #[test]
    fn test_template_text() {
        let text = template_csv().unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("productName,productDescription,productPrice,productCategory,productBrand,availableWeights,tags")
        );
        assert_eq!(
            lines.next(),
            Some("Sample Product,This is a sample product description,99.99,vegetables & fruits,Sample Brand,250gm;500gm;1kg,organic;fresh;healthy")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_template_imports_to_the_sample_record() {
        let outcome = import_csv(&template_csv().unwrap()).unwrap();
        assert_eq!(outcome.records.len(), 1);

        let record = &outcome.records[0];
        assert_eq!(record.product_name, "Sample Product");
        assert_eq!(record.product_description, "This is a sample product description");
        assert_eq!(record.product_price, 99.99);
        assert_eq!(record.category(), Some(ProductCategory::VegetablesFruits));
        assert_eq!(record.product_brand.as_deref(), Some("Sample Brand"));
        assert_eq!(record.available_weights, vec!["250gm", "500gm", "1kg"]);
        assert_eq!(record.tags, vec!["organic", "fresh", "healthy"]);
        assert_eq!(record.discount, None);
    }
}
