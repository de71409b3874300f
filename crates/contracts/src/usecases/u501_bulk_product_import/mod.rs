//! Bulk product upload: CSV import, manual entry batch and the bulk create
//! request/response.

pub mod batch;
pub mod draft;
pub mod error;
pub mod header;
pub mod import;
pub mod response;
pub mod template;
pub mod tokenizer;
pub mod validator;

pub use batch::{validate_batch, DraftBatch, MAX_BATCH_SIZE};
pub use draft::{split_tokens, ProductDraft, ProductRecord};
pub use error::{BatchError, ImportError};
pub use import::{check_file_type, import_csv, ImportOutcome};
pub use response::{BulkCreateRequest, BulkCreateResponse, BulkUploadResult};
pub use template::{template_csv, TEMPLATE_FILE_NAME};
pub use validator::{validate_draft, RowLabel};

use crate::usecases::common::UseCaseMetadata;

/// Delay before leaving the screen after a fully successful upload
pub const SUCCESS_REDIRECT_MS: u32 = 3000;

pub struct BulkProductImport;

impl UseCaseMetadata for BulkProductImport {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "bulk_product_import"
    }

    fn display_name() -> &'static str {
        "Bulk Product Upload"
    }

    fn description() -> &'static str {
        "Create up to 50 catalog products at once from a CSV file or manual entry"
    }
}
