//! Reactive state of an entity CRUD table.

use contracts::shared::metadata::{empty_form, validate_form, FormValues};
use leptos::prelude::*;

use super::entity::{filter_rows, remove_row, CrudEntity};
use crate::system::session::SessionContext;

/// Signals shared by the table and its dialogs
pub struct CrudState<E: CrudEntity> {
    pub rows: RwSignal<Vec<E>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub notice: RwSignal<Option<String>>,
    pub query: RwSignal<String>,

    pub form_open: RwSignal<bool>,
    /// `None` while creating
    pub editing: RwSignal<Option<E>>,
    pub values: RwSignal<FormValues>,
    pub form_errors: RwSignal<Vec<String>>,
    pub saving: RwSignal<bool>,

    pub details: RwSignal<Option<E>>,
    pub details_open: RwSignal<bool>,
    /// Row whose verification flag is being flipped
    pub toggling: RwSignal<Option<String>>,
    /// Row armed for deletion; a second click confirms
    pub pending_delete: RwSignal<Option<String>>,
    pub deleting: RwSignal<bool>,
    pub key_dialog_open: RwSignal<bool>,
}

impl<E: CrudEntity> Clone for CrudState<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: CrudEntity> Copy for CrudState<E> {}

impl<E: CrudEntity> CrudState<E> {
    pub fn new() -> Self {
        Self {
            rows: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            notice: RwSignal::new(None),
            query: RwSignal::new(String::new()),
            form_open: RwSignal::new(false),
            editing: RwSignal::new(None),
            values: RwSignal::new(empty_form(E::FIELDS)),
            form_errors: RwSignal::new(Vec::new()),
            saving: RwSignal::new(false),
            details: RwSignal::new(None),
            details_open: RwSignal::new(false),
            toggling: RwSignal::new(None),
            pending_delete: RwSignal::new(None),
            deleting: RwSignal::new(false),
            key_dialog_open: RwSignal::new(false),
        }
    }

    fn noun() -> String {
        E::METADATA.element_name.to_lowercase()
    }

    /// Rows matching the search box
    pub fn visible_rows(&self) -> Vec<E> {
        let query = self.query.get();
        self.rows.with(|rows| filter_rows(rows, &query))
    }

    pub fn fetch(&self, session: SessionContext) {
        let this = *self;
        this.loading.set(true);
        let client = session.client();
        wasm_bindgen_futures::spawn_local(async move {
            match E::fetch_all(&client).await {
                Ok(rows) => {
                    log::debug!("Loaded {} {}", rows.len(), E::METADATA.entity_index);
                    this.rows.set(rows);
                    this.error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load {}: {}", E::METADATA.entity_index, e);
                    this.error.set(Some(format!(
                        "Failed to load {}. Admin key may be required.",
                        E::METADATA.list_name.to_lowercase()
                    )));
                    this.key_dialog_open.set(true);
                }
            }
            this.loading.set(false);
        });
    }

    pub fn open_create(&self) {
        self.editing.set(None);
        self.values.set(empty_form(E::FIELDS));
        self.form_errors.set(Vec::new());
        self.form_open.set(true);
    }

    pub fn open_edit(&self, row: E) {
        if row.id().is_empty() {
            self.error
                .set(Some(format!("Cannot edit this {} - missing ID", Self::noun())));
            return;
        }
        self.values.set(row.form_values());
        self.editing.set(Some(row));
        self.form_errors.set(Vec::new());
        self.form_open.set(true);
    }

    pub fn open_details(&self, row: E) {
        self.details.set(Some(row));
        self.details_open.set(true);
    }

    pub fn set_field(&self, name: &'static str, value: String) {
        self.values.update(|values| {
            values.insert(name, value);
        });
    }

    pub fn submit(&self, session: SessionContext) {
        let values = self.values.get_untracked();
        if let Err(errors) = validate_form(E::FIELDS, &values) {
            self.form_errors.set(errors);
            return;
        }
        self.form_errors.set(Vec::new());

        let this = *self;
        let dto = E::dto_from_form(&values);
        let editing = self.editing.get_untracked();
        let client = session.client();
        this.saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = match editing {
                Some(row) => {
                    let id = row.id().to_string();
                    E::update(&client, &id, &dto).await.map(|_| {
                        this.rows.update(|rows| {
                            if let Some(existing) = rows.iter_mut().find(|r| r.id() == id) {
                                existing.apply(&dto);
                            }
                        });
                        format!("{} updated successfully", E::METADATA.element_name)
                    })
                }
                None => E::create(&client, &dto).await.map(|created| {
                    match created {
                        Some(row) => this.rows.update(|rows| rows.push(row)),
                        None => this.fetch(session),
                    }
                    format!("{} created successfully", E::METADATA.element_name)
                }),
            };

            match result {
                Ok(message) => {
                    this.notice.set(Some(message));
                    this.error.set(None);
                    this.form_open.set(false);
                }
                Err(e) => {
                    log::error!("Failed to save {}: {}", E::METADATA.entity_index, e);
                    this.form_errors
                        .set(vec![format!("Failed to save {}: {}", Self::noun(), e)]);
                }
            }
            this.saving.set(false);
        });
    }

    pub fn toggle_verification(&self, session: SessionContext, row: E) {
        let this = *self;
        let id = row.id().to_string();
        let verified = !row.is_verified();
        let client = session.client();
        this.toggling.set(Some(id.clone()));
        wasm_bindgen_futures::spawn_local(async move {
            match E::set_verification(&client, &id, verified).await {
                Ok(()) => {
                    let mark = |r: &mut E| r.set_verified(verified);
                    this.rows.update(|rows| {
                        if let Some(existing) = rows.iter_mut().find(|r| r.id() == id) {
                            mark(existing);
                        }
                    });
                    this.details.update(|d| {
                        if let Some(existing) = d.as_mut().filter(|r| r.id() == id) {
                            mark(existing);
                        }
                    });
                    this.notice.set(Some(format!(
                        "{} {}",
                        E::METADATA.element_name,
                        if verified { "verified" } else { "marked as unverified" }
                    )));
                }
                Err(e) => this.error.set(Some(e)),
            }
            this.toggling.set(None);
        });
    }

    /// First click arms the row, a second click on the same row deletes it
    pub fn request_delete(&self, session: SessionContext, row: &E) {
        let id = row.id().to_string();
        if self.pending_delete.get_untracked().as_deref() == Some(id.as_str()) {
            self.delete(session, id);
        } else {
            self.pending_delete.set(Some(id));
        }
    }

    pub fn delete(&self, session: SessionContext, id: String) {
        let this = *self;
        let client = session.client();
        this.deleting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match E::delete(&client, &id).await {
                Ok(()) => {
                    this.rows.update(|rows| {
                        remove_row(rows, &id);
                    });
                    this.details.update(|d| {
                        if d.as_ref().is_some_and(|r| r.id() == id) {
                            *d = None;
                        }
                    });
                    log::info!("Deleted {} {}", E::METADATA.entity_index, id);
                    this.notice.set(Some(format!(
                        "{} deleted successfully",
                        E::METADATA.element_name
                    )));
                }
                Err(e) => {
                    log::error!("Failed to delete {}: {}", E::METADATA.entity_index, e);
                    this.error.set(Some(e));
                }
            }
            this.pending_delete.set(None);
            this.deleting.set(false);
        });
    }
}
