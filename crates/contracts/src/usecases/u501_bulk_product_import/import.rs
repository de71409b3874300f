use super::draft::{split_tokens, ProductDraft, ProductRecord, CSV_LIST_SEPARATOR};
use super::error::ImportError;
use super::header::{HeaderField, HeaderMap};
use super::tokenizer::tokenize;
use super::validator::{validate_draft, RowLabel};

/// Result of a CSV import that passed every check
#[derive(Debug, Clone, PartialEq)]
pub struct ImportOutcome {
    pub records: Vec<ProductRecord>,
    /// Non-blocking findings such as rows that ended inside quotes
    pub warnings: Vec<String>,
}

impl ImportOutcome {
    pub fn success_message(&self) -> String {
        format!("Successfully parsed {} products from CSV", self.records.len())
    }

    /// Records as editable drafts for the shared upload list
    pub fn drafts(&self) -> Vec<ProductDraft> {
        self.records.iter().map(ProductDraft::from).collect()
    }
}

/// Reject a picked file that is neither `text/csv` nor named `*.csv`
pub fn check_file_type(file_name: &str, mime: &str) -> Result<(), ImportError> {
    if mime == "text/csv" || file_name.to_lowercase().ends_with(".csv") {
        Ok(())
    } else {
        Err(ImportError::NotCsv)
    }
}

/// Parse and validate a whole CSV file. All or nothing: any row error
/// rejects the file.
pub fn import_csv(text: &str) -> Result<ImportOutcome, ImportError> {
    let rows = tokenize(text);
    if rows.len() < 2 {
        return Err(ImportError::NotEnoughRows);
    }

    let header = HeaderMap::resolve(&rows[0].fields)?;

    let mut records = Vec::new();
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for (i, row) in rows.iter().enumerate().skip(1) {
        let label = RowLabel::Row(i + 1);

        if row.unterminated_quote {
            warnings.push(format!("{}: Unterminated quoted field", label));
        }

        if row.fields.len() != header.width() {
            errors.push(format!("{}: Column count mismatch", label));
            continue;
        }

        let draft = draft_from_row(&header, &row.fields);
        match validate_draft(&draft, label) {
            Ok(record) => records.push(record),
            Err(row_errors) => errors.extend(row_errors),
        }
    }

    if !errors.is_empty() {
        return Err(ImportError::Validation(errors));
    }
    if records.is_empty() {
        return Err(ImportError::NoValidProducts);
    }

    Ok(ImportOutcome { records, warnings })
}

fn draft_from_row(header: &HeaderMap, values: &[String]) -> ProductDraft {
    let mut draft = ProductDraft::default();
    for (field, value) in header.fields(values) {
        match field {
            HeaderField::ProductName => draft.name = value.to_string(),
            HeaderField::ProductDescription => draft.description = value.to_string(),
            HeaderField::ProductPrice => draft.price = value.to_string(),
            HeaderField::ProductCategory => draft.category = value.to_string(),
            HeaderField::ProductBrand => draft.brand = value.to_string(),
            HeaderField::AvailableWeights => {
                draft.available_weights = split_tokens(value, CSV_LIST_SEPARATOR)
            }
            HeaderField::Tags => draft.tags = split_tokens(value, CSV_LIST_SEPARATOR),
        }
    }
    draft
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_product::ProductCategory;

    const HEADER: &str = "productName,productDescription,productPrice,productCategory";

    #[test]
    fn test_quoted_comma_row_imports() {
        let text = format!("{}\n\"Sample, Product\",desc,9.99,other\n", HEADER);
        let outcome = import_csv(&text).unwrap();
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].product_name, "Sample, Product");
        assert_eq!(outcome.records[0].product_price, 9.99);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_quoted_category_with_comma() {
        let text = format!("{}\nAtta,Whole wheat,45,\"Atta, Rice & Dal\"", HEADER);
        let outcome = import_csv(&text).unwrap();
        assert_eq!(outcome.records[0].category(), Some(ProductCategory::AttaRiceDal));
    }

    #[test]
    fn test_not_enough_rows() {
        assert_eq!(import_csv(""), Err(ImportError::NotEnoughRows));
        assert_eq!(
            import_csv(&format!("{}\n\n  \n", HEADER)),
            Err(ImportError::NotEnoughRows)
        );
    }

    #[test]
    fn test_missing_category_header_stops_before_rows() {
        let err = import_csv("productName,productDescription,productPrice\na,b,1").unwrap_err();
        assert_eq!(err, ImportError::MissingHeaders(vec!["productcategory".into()]));
    }

    #[test]
    fn test_any_row_error_rejects_everything() {
        let text = format!(
            "{}\nMilk,Toned,60,other\nBad,row\nSoap,Neem,-1,personal care\nRice,Long,90,toys",
            HEADER
        );
        let err = import_csv(&text).unwrap_err();
        assert_eq!(
            err,
            ImportError::Validation(vec![
                "Row 3: Column count mismatch".into(),
                "Row 4: Invalid price \"-1\"".into(),
                "Row 5: Invalid category \"toys\"".into(),
            ])
        );
    }

    #[test]
    fn test_row_numbers_skip_blank_lines() {
        let text = format!("{}\n\nMilk,Toned,,other", HEADER);
        let err = import_csv(&text).unwrap_err();
        assert_eq!(
            err,
            ImportError::Validation(vec!["Row 2: Product price is required".into()])
        );
    }

    #[test]
    fn test_optional_columns_and_unknown_columns() {
        let text = "productName,sku,productDescription,productPrice,productCategory,productBrand,availableWeights,tags\n\
                    Ghee,G1,Pure cow ghee,550,Oil & Ghee,Amul,500ml; 1l;,desi;;pure";
        let outcome = import_csv(text).unwrap();
        let record = &outcome.records[0];
        assert_eq!(record.product_brand.as_deref(), Some("Amul"));
        assert_eq!(record.available_weights, vec!["500ml", "1l"]);
        assert_eq!(record.tags, vec!["desi", "pure"]);
        assert_eq!(record.category(), Some(ProductCategory::OilGhee));
    }

    #[test]
    fn test_unterminated_quote_is_a_warning() {
        let text = format!("{}\nMilk,Toned,60,\"other", HEADER);
        let outcome = import_csv(&text).unwrap();
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.warnings, vec!["Row 2: Unterminated quoted field"]);
    }

    #[test]
    fn test_idempotent() {
        let text = format!("{}\nMilk,Toned,60,other\nCurd,Fresh,abc,other\n", HEADER);
        assert_eq!(import_csv(&text), import_csv(&text));
        let ok = format!("{}\nMilk,Toned,60,other\nCurd,Fresh,40,Other\n", HEADER);
        assert_eq!(import_csv(&ok), import_csv(&ok));
        assert_eq!(import_csv(&ok).unwrap().records.len(), 2);
    }

    #[test]
    fn test_category_casing_reaches_payload_unchanged() {
        let text = format!("{}\nApple,Red,10,Vegetables & Fruits", HEADER);
        let outcome = import_csv(&text).unwrap();
        let request = super::super::BulkCreateRequest {
            products: outcome.records,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["products"][0]["productCategory"], "Vegetables & Fruits");
    }

    #[test]
    fn test_file_type_check() {
        assert!(check_file_type("products.csv", "").is_ok());
        assert!(check_file_type("PRODUCTS.CSV", "application/vnd.ms-excel").is_ok());
        assert!(check_file_type("export", "text/csv").is_ok());
        assert_eq!(
            check_file_type("products.xlsx", "application/octet-stream"),
            Err(ImportError::NotCsv)
        );
        assert_eq!(ImportError::NotCsv.to_string(), "Please upload a valid CSV file");
    }

    #[test]
    fn test_crlf_input() {
        let text = format!("{}\r\nMilk,Toned,60,other\r\n", HEADER);
        let outcome = import_csv(&text).unwrap();
        assert_eq!(outcome.records[0].category(), Some(ProductCategory::Other));
        assert_eq!(outcome.success_message(), "Successfully parsed 1 products from CSV");
    }
}
