use super::draft::{ProductDraft, ProductRecord};
use super::error::BatchError;
use super::validator::{validate_draft, RowLabel};

/// Largest batch the bulk create endpoint accepts
pub const MAX_BATCH_SIZE: usize = 50;

/// Check a batch before submitting. The size limits are checked before
/// any field is looked at.
pub fn validate_batch(drafts: &[ProductDraft]) -> Result<Vec<ProductRecord>, BatchError> {
    if drafts.is_empty() {
        return Err(BatchError::Empty);
    }
    if drafts.len() > MAX_BATCH_SIZE {
        return Err(BatchError::TooLarge(drafts.len()));
    }

    let mut records = Vec::with_capacity(drafts.len());
    let mut errors = Vec::new();
    for (i, draft) in drafts.iter().enumerate() {
        match validate_draft(draft, RowLabel::Product(i + 1)) {
            Ok(record) => records.push(record),
            Err(e) => errors.extend(e),
        }
    }

    if errors.is_empty() {
        Ok(records)
    } else {
        Err(BatchError::Validation(errors))
    }
}

/// Editable list behind both upload tabs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftBatch {
    drafts: Vec<ProductDraft>,
}

impl DraftBatch {
    pub fn drafts(&self) -> &[ProductDraft] {
        &self.drafts
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    /// Append an empty entry and return its index
    pub fn add(&mut self) -> usize {
        self.drafts.push(ProductDraft::default());
        self.drafts.len() - 1
    }

    /// Replace the list, e.g. after a CSV import
    pub fn replace(&mut self, drafts: Vec<ProductDraft>) {
        self.drafts = drafts;
    }

    pub fn update(&mut self, index: usize, edit: impl FnOnce(&mut ProductDraft)) {
        if let Some(draft) = self.drafts.get_mut(index) {
            edit(draft);
        }
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.drafts.len() {
            self.drafts.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.drafts.clear();
    }

    pub fn validate(&self) -> Result<Vec<ProductRecord>, BatchError> {
        validate_batch(&self.drafts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid(n: usize) -> ProductDraft {
        ProductDraft {
            name: format!("Product {}", n),
            description: "desc".into(),
            price: "10".into(),
            category: "other".into(),
            ..ProductDraft::default()
        }
    }

    #[test]
    fn test_empty_batch() {
        assert_eq!(validate_batch(&[]), Err(BatchError::Empty));
        assert_eq!(BatchError::Empty.to_string(), "No products to upload");
    }

    #[test]
    fn test_fifty_one_rejected_before_field_checks() {
        let drafts = vec![ProductDraft::default(); 51];
        let err = validate_batch(&drafts).unwrap_err();
        assert_eq!(err, BatchError::TooLarge(51));
        assert_eq!(err.to_string(), "Maximum 50 products can be uploaded at once");
    }

    #[test]
    fn test_fifty_accepted() {
        let drafts: Vec<_> = (1..=50).map(valid).collect();
        assert_eq!(validate_batch(&drafts).unwrap().len(), 50);
    }

    #[test]
    fn test_errors_use_product_prefix() {
        let mut drafts = vec![valid(1), valid(2)];
        drafts[1].price = "x".into();
        assert_eq!(
            validate_batch(&drafts),
            Err(BatchError::Validation(vec!["Product 2: Invalid price \"x\"".into()]))
        );
    }

    #[test]
    fn test_draft_batch_editing() {
        let mut batch = DraftBatch::default();
        let i = batch.add();
        batch.update(i, |d| {
            d.name = "Tea".into();
            d.description = "Assam".into();
            d.price = "120".into();
            d.category = "beverages & soft drinks".into();
        });
        batch.add();
        assert_eq!(batch.len(), 2);
        assert!(batch.validate().is_err());

        batch.remove(1);
        batch.remove(7);
        assert_eq!(batch.validate().unwrap()[0].product_name, "Tea");

        batch.clear();
        assert!(batch.is_empty());
    }
}
