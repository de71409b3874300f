use contracts::usecases::u501_bulk_product_import::{
    check_file_type, import_csv, template_csv, BulkUploadResult, DraftBatch, ProductDraft,
    SUCCESS_REDIRECT_MS, TEMPLATE_FILE_NAME,
};
use leptos::prelude::*;
use web_sys::File;

use super::api;
use crate::shared::export::{download_text_file, CSV_MIME};
use crate::shared::file_utils::read_text;
use crate::system::session::SessionContext;

/// Which input feeds the shared upload list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadMode {
    Csv,
    Manual,
}

/// Counter that invalidates file reads still in flight.
///
/// Every read takes a ticket; clearing the file or starting another read
/// bumps the counter, so an older ticket no longer matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadGeneration(u64);

impl ReadGeneration {
    pub fn begin(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn invalidate(&mut self) {
        self.0 += 1;
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

/// What the screen does once the bulk create call answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitFollowUp {
    pub banner: String,
    /// Clear the list and leave the screen; only when nothing failed
    pub reset: bool,
}

impl SubmitFollowUp {
    pub fn for_result(result: &BulkUploadResult) -> Self {
        Self {
            banner: result.summary(),
            reset: result.is_complete_success(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct BulkUploadViewModel {
    pub mode: RwSignal<UploadMode>,
    pub batch: RwSignal<DraftBatch>,
    pub file_name: RwSignal<Option<String>>,
    generation: StoredValue<ReadGeneration>,
    pub parsing: RwSignal<bool>,
    pub submitting: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
    pub warnings: RwSignal<Vec<String>>,
    pub result: RwSignal<Option<BulkUploadResult>>,
    pub result_open: RwSignal<bool>,
}

impl BulkUploadViewModel {
    pub fn new() -> Self {
        Self {
            mode: RwSignal::new(UploadMode::Csv),
            batch: RwSignal::new(DraftBatch::default()),
            file_name: RwSignal::new(None),
            generation: StoredValue::new(ReadGeneration::default()),
            parsing: RwSignal::new(false),
            submitting: RwSignal::new(false),
            error: RwSignal::new(None),
            success: RwSignal::new(None),
            warnings: RwSignal::new(Vec::new()),
            result: RwSignal::new(None),
            result_open: RwSignal::new(false),
        }
    }

    fn clear_messages(&self) {
        self.error.set(None);
        self.success.set(None);
        self.warnings.set(Vec::new());
    }

    pub fn download_template(&self) {
        let outcome = template_csv()
            .map_err(|e| format!("Failed to build template: {}", e))
            .and_then(|content| download_text_file(&content, TEMPLATE_FILE_NAME, CSV_MIME));
        if let Err(e) = outcome {
            log::error!("Template download failed: {}", e);
            self.error.set(Some(e));
        }
    }

    /// Reads and imports a picked CSV file. The parsed rows replace the
    /// upload list only when the whole file is valid.
    pub fn pick_file(&self, file: File) {
        let name = file.name();
        let Some(ticket) = self.begin_pick(&name, &file.type_()) else {
            return;
        };

        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let text = read_text(&file).await;
            let current = this
                .generation
                .try_with_value(|g| g.is_current(ticket))
                .unwrap_or(false);
            if !current {
                log::debug!("Discarding stale read of {}", name);
                return;
            }
            this.parsing.set(false);

            let text = match text {
                Ok(text) => text,
                Err(e) => {
                    this.error.set(Some(e));
                    return;
                }
            };

            match import_csv(&text) {
                Ok(outcome) => {
                    log::info!(
                        "Imported {} products from {} ({} warnings)",
                        outcome.records.len(),
                        name,
                        outcome.warnings.len()
                    );
                    this.success.set(Some(outcome.success_message()));
                    this.warnings.set(outcome.warnings.clone());
                    this.batch.update(|b| b.replace(outcome.drafts()));
                }
                Err(e) => {
                    log::warn!("CSV import of {} rejected: {}", name, e);
                    this.error.set(Some(e.to_string()));
                }
            }
        });
    }

    /// Checks the picked file and takes a read ticket. A rejected file
    /// also drops the name of the previous one.
    pub fn begin_pick(&self, name: &str, mime: &str) -> Option<u64> {
        self.clear_messages();
        if let Err(e) = check_file_type(name, mime) {
            self.generation.update_value(ReadGeneration::invalidate);
            self.parsing.set(false);
            self.file_name.set(None);
            self.error.set(Some(e.to_string()));
            return None;
        }

        self.file_name.set(Some(name.to_string()));
        let ticket = self
            .generation
            .try_update_value(|g| g.begin())
            .unwrap_or_default();
        self.parsing.set(true);
        Some(ticket)
    }

    /// Forgets the picked file and its rows; a read still running is ignored
    pub fn clear_file(&self) {
        self.generation.update_value(ReadGeneration::invalidate);
        self.parsing.set(false);
        self.file_name.set(None);
        self.batch.update(DraftBatch::clear);
        self.clear_messages();
    }

    pub fn add_entry(&self) {
        self.batch.update(|b| {
            b.add();
        });
    }

    pub fn update_entry(&self, index: usize, edit: impl FnOnce(&mut ProductDraft)) {
        self.batch.update(|b| b.update(index, edit));
    }

    pub fn remove_entry(&self, index: usize) {
        self.batch.update(|b| b.remove(index));
    }

    pub fn clear_all(&self) {
        self.batch.update(DraftBatch::clear);
        self.clear_messages();
    }

    /// Validates and posts the list. On a fully successful upload the local
    /// state is cleared and `on_done` runs after a short delay.
    pub fn submit(&self, session: SessionContext, on_done: Callback<()>) {
        if self.submitting.get_untracked() {
            return;
        }
        self.error.set(None);
        self.success.set(None);

        let records = match self.batch.with_untracked(DraftBatch::validate) {
            Ok(records) => records,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };

        let this = *self;
        let count = records.len();
        this.submitting.set(true);
        let client = session.client();
        wasm_bindgen_futures::spawn_local(async move {
            log::info!("Submitting {} products for bulk create", count);
            let outcome = api::bulk_create(&client, records).await;
            this.submitting.set(false);

            match outcome {
                Ok(result) => {
                    log::info!(
                        "Bulk create: {} created, {} failed",
                        result.successful.len(),
                        result.failed.len()
                    );
                    let follow_up = SubmitFollowUp::for_result(&result);
                    this.success.set(Some(follow_up.banner));
                    this.result.set(Some(result));
                    this.result_open.set(true);

                    if follow_up.reset {
                        this.generation.update_value(ReadGeneration::invalidate);
                        this.file_name.set(None);
                        this.warnings.set(Vec::new());
                        this.batch.update(DraftBatch::clear);
                        gloo_timers::future::TimeoutFuture::new(SUCCESS_REDIRECT_MS).await;
                        on_done.run(());
                    }
                }
                Err(e) => {
                    log::error!("Bulk create failed: {}", e);
                    this.error.set(Some(e));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleared_read_is_stale() {
        let mut generation = ReadGeneration::default();
        let ticket = generation.begin();
        assert!(generation.is_current(ticket));

        generation.invalidate();
        assert!(!generation.is_current(ticket));
    }

    #[test]
    fn test_partial_failure_still_reports_created_count() {
        let result: BulkUploadResult = serde_json::from_str(
            r#"{"successful":[{"index":0,"productId":"p1","productName":"Milk"}],
                "failed":[{"index":1,"productName":"Curd","error":"Duplicate"}],
                "totalProcessed":2}"#,
        )
        .unwrap();
        let follow_up = SubmitFollowUp::for_result(&result);
        assert_eq!(
            follow_up.banner,
            "Bulk upload completed! 1 products created successfully."
        );
        assert!(!follow_up.reset);

        let complete = BulkUploadResult {
            failed: Vec::new(),
            ..result
        };
        assert!(SubmitFollowUp::for_result(&complete).reset);
    }

    #[test]
    fn test_rejected_file_clears_previous_name() {
        let vm = BulkUploadViewModel::new();
        assert!(vm.begin_pick("products.csv", "text/csv").is_some());
        assert_eq!(vm.file_name.get_untracked().as_deref(), Some("products.csv"));

        assert_eq!(vm.begin_pick("photo.png", "image/png"), None);
        assert_eq!(vm.file_name.get_untracked(), None);
        assert!(!vm.parsing.get_untracked());
        assert_eq!(
            vm.error.get_untracked().as_deref(),
            Some("Please upload a valid CSV file")
        );
    }

    #[test]
    fn test_newer_read_supersedes_older() {
        let mut generation = ReadGeneration::default();
        let first = generation.begin();
        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }
}
