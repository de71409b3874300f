use contracts::domain::a003_product::{AdminProduct, ProductForm};
use leptos::prelude::*;

use crate::domain::a003_product::api;
use crate::domain::a003_product::ui::form_fields::FormLookups;
use crate::system::session::SessionContext;

/// Pause before leaving the page after a successful save
pub const SAVED_REDIRECT_MS: u32 = 2000;

#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductForm>,
    pub product: RwSignal<Option<AdminProduct>>,
    pub lookups: FormLookups,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
}

impl ProductDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ProductForm::default()),
            product: RwSignal::new(None),
            lookups: FormLookups::new(),
            loading: RwSignal::new(true),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
            success: RwSignal::new(None),
        }
    }

    pub fn load(&self, session: SessionContext, id: String) {
        let this = *self;
        this.lookups.load(session, this.error);
        let client = session.client();
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_product(&client, &id).await {
                Ok(product) => {
                    this.form.set(ProductForm::from_product(&product));
                    this.product.set(Some(product));
                }
                Err(e) => {
                    log::error!("Error loading product {}: {}", id, e);
                    this.error.set(Some("Failed to load product data".to_string()));
                }
            }
            this.loading.set(false);
        });
    }

    /// Validates, sends the update and calls `on_saved` after the redirect pause
    pub fn save(&self, session: SessionContext, id: String, on_saved: Callback<()>) {
        self.error.set(None);
        self.success.set(None);

        let dto = match self.form.with_untracked(ProductForm::to_update_dto) {
            Ok(dto) => dto,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };

        let this = *self;
        this.saving.set(true);
        let client = session.client();
        wasm_bindgen_futures::spawn_local(async move {
            match api::update_product(&client, &id, &dto).await {
                Ok(_) => {
                    log::info!("Updated product {}", id);
                    this.saving.set(false);
                    this.success.set(Some("Product updated successfully!".to_string()));
                    gloo_timers::future::TimeoutFuture::new(SAVED_REDIRECT_MS).await;
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Error updating product {}: {}", id, e);
                    this.saving.set(false);
                    this.error.set(Some(e));
                }
            }
        });
    }
}
