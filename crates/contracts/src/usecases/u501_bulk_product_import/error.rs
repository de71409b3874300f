use thiserror::Error;

/// How many messages a summary lists before collapsing the rest
pub const SUMMARY_LIMIT: usize = 10;

/// First ten messages, one per line, then `... and K more errors`
pub fn summarize(errors: &[String]) -> String {
    let mut text = errors
        .iter()
        .take(SUMMARY_LIMIT)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n");
    if errors.len() > SUMMARY_LIMIT {
        text.push_str(&format!("\n... and {} more errors", errors.len() - SUMMARY_LIMIT));
    }
    text
}

/// Hard stops of a CSV import. `Display` is the banner text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("Please upload a valid CSV file")]
    NotCsv,
    #[error("CSV file must contain at least a header row and one data row")]
    NotEnoughRows,
    #[error("Missing required headers: {}", .0.join(", "))]
    MissingHeaders(Vec<String>),
    #[error("CSV validation errors:\n{}", summarize(.0))]
    Validation(Vec<String>),
    #[error("No valid products found in CSV file")]
    NoValidProducts,
}

/// Reasons a batch is not sent to the bulk create endpoint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    #[error("No products to upload")]
    Empty,
    #[error("Maximum 50 products can be uploaded at once")]
    TooLarge(usize),
    #[error("Validation errors:\n{}", summarize(.0))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_truncates_after_ten() {
        let errors: Vec<String> = (1..=13).map(|i| format!("Row {}: Column count mismatch", i)).collect();
        let text = ImportError::Validation(errors).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "CSV validation errors:");
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[10], "Row 10: Column count mismatch");
        assert_eq!(lines[11], "... and 3 more errors");
    }

    #[test]
    fn test_summary_without_overflow() {
        let errors = vec!["a".to_string(), "b".to_string()];
        assert_eq!(summarize(&errors), "a\nb");
        assert_eq!(
            BatchError::Validation(errors).to_string(),
            "Validation errors:\na\nb"
        );
    }

    #[test]
    fn test_missing_headers_message() {
        let err = ImportError::MissingHeaders(vec!["productprice".into(), "productcategory".into()]);
        assert_eq!(err.to_string(), "Missing required headers: productprice, productcategory");
    }
}
