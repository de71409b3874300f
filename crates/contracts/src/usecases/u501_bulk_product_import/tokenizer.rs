//! Line-oriented CSV tokenizer.
//!
//! Rows are split on `\n` and blank rows are dropped. A `"` toggles quoted
//! mode and is never part of a value, so `""` is not an escaped quote. A
//! comma separates fields only outside quotes.

/// One non-blank input line split into trimmed fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    pub fields: Vec<String>,
    /// The line ended while still inside quotes
    pub unterminated_quote: bool,
}

pub fn split_row(line: &str) -> CsvRow {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());

    CsvRow {
        fields,
        unterminated_quote: in_quotes,
    }
}

/// All non-blank rows of `text`, header included
pub fn tokenize(text: &str) -> Vec<CsvRow> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(split_row)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_comma_stays_in_field() {
        let row = split_row(r#""Sample, Product",desc,9.99,other"#);
        assert_eq!(row.fields, vec!["Sample, Product", "desc", "9.99", "other"]);
        assert!(!row.unterminated_quote);
    }

    #[test]
    fn test_fields_are_trimmed_and_quotes_dropped() {
        let row = split_row("  a , \"b\" ,c\r");
        assert_eq!(row.fields, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_doubled_quote_is_not_unescaped() {
        let row = split_row(r#""say ""hi""",x"#);
        assert_eq!(row.fields, vec!["say hi", "x"]);
    }

    #[test]
    fn test_unterminated_quote_runs_to_end_of_row() {
        let row = split_row(r#"a,"b,c"#);
        assert_eq!(row.fields, vec!["a", "b,c"]);
        assert!(row.unterminated_quote);
    }

    #[test]
    fn test_blank_rows_dropped() {
        let rows = tokenize("h1,h2\r\n\n   \r\nv1,v2\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].fields, vec!["v1", "v2"]);
    }

    #[test]
    fn test_empty_trailing_field_kept() {
        assert_eq!(split_row("a,b,").fields, vec!["a", "b", ""]);
    }
}
