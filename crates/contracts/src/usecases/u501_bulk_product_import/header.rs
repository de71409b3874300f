use super::error::ImportError;

/// Columns the importer understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    ProductName,
    ProductDescription,
    ProductPrice,
    ProductCategory,
    ProductBrand,
    AvailableWeights,
    Tags,
}

impl HeaderField {
    pub const REQUIRED: [HeaderField; 4] = [
        Self::ProductName,
        Self::ProductDescription,
        Self::ProductPrice,
        Self::ProductCategory,
    ];

    /// Template column order
    pub const ALL: [HeaderField; 7] = [
        Self::ProductName,
        Self::ProductDescription,
        Self::ProductPrice,
        Self::ProductCategory,
        Self::ProductBrand,
        Self::AvailableWeights,
        Self::Tags,
    ];

    /// Column name as written in the template
    pub fn column_name(&self) -> &'static str {
        match self {
            Self::ProductName => "productName",
            Self::ProductDescription => "productDescription",
            Self::ProductPrice => "productPrice",
            Self::ProductCategory => "productCategory",
            Self::ProductBrand => "productBrand",
            Self::AvailableWeights => "availableWeights",
            Self::Tags => "tags",
        }
    }

    /// Normalized key used for matching
    pub fn key(&self) -> &'static str {
        match self {
            Self::ProductName => "productname",
            Self::ProductDescription => "productdescription",
            Self::ProductPrice => "productprice",
            Self::ProductCategory => "productcategory",
            Self::ProductBrand => "productbrand",
            Self::AvailableWeights => "availableweights",
            Self::Tags => "tags",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

/// Header cell as matched: trimmed, lower-cased, quotes removed
pub fn normalize_header(cell: &str) -> String {
    cell.trim().to_lowercase().replace('"', "")
}

/// Column position to field; unknown columns map to `None`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMap {
    columns: Vec<Option<HeaderField>>,
}

impl HeaderMap {
    /// Resolve the header row; every missing required column is reported
    pub fn resolve(cells: &[String]) -> Result<Self, ImportError> {
        let columns: Vec<Option<HeaderField>> = cells
            .iter()
            .map(|c| HeaderField::from_key(&normalize_header(c)))
            .collect();

        let missing: Vec<String> = HeaderField::REQUIRED
            .iter()
            .filter(|req| !columns.contains(&Some(**req)))
            .map(|req| req.key().to_string())
            .collect();

        if !missing.is_empty() {
            return Err(ImportError::MissingHeaders(missing));
        }
        Ok(Self { columns })
    }

    /// Number of columns in the header row, unknown ones included
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// (field, value) pairs of a row; unknown columns are skipped
    pub fn fields<'a>(
        &'a self,
        values: &'a [String],
    ) -> impl Iterator<Item = (HeaderField, &'a str)> + 'a {
        self.columns
            .iter()
            .zip(values)
            .filter_map(|(col, value)| col.map(|field| (field, value.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(line: &str) -> Vec<String> {
        line.split(',').map(str::to_string).collect()
    }

    #[test]
    fn test_missing_category_named_exactly() {
        let err = HeaderMap::resolve(&cells("productName,productDescription,productPrice")).unwrap_err();
        assert_eq!(err, ImportError::MissingHeaders(vec!["productcategory".into()]));
    }

    #[test]
    fn test_all_missing_in_fixed_order() {
        let err = HeaderMap::resolve(&cells("tags,foo")).unwrap_err();
        assert_eq!(
            err,
            ImportError::MissingHeaders(vec![
                "productname".into(),
                "productdescription".into(),
                "productprice".into(),
                "productcategory".into(),
            ])
        );
    }

    #[test]
    fn test_unknown_columns_ignored() {
        let map = HeaderMap::resolve(&cells(
            "\"ProductName\",sku,PRODUCTDESCRIPTION,productPrice,productCategory",
        ))
        .unwrap();
        assert_eq!(map.width(), 5);

        let row = cells("Milk,M-1,Fresh milk,60,dairy, bread & eggs");
        let fields: Vec<_> = map.fields(&row).collect();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0], (HeaderField::ProductName, "Milk"));
        assert_eq!(fields[1], (HeaderField::ProductDescription, "Fresh milk"));
    }
}
