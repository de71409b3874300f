use contracts::domain::a003_product::{
    label_for, AdminProduct, AdoptedProduct, AdoptedProductUpdate, AdoptionRequest, LookupOption,
    Pagination, ProductSearchOptions, StockStatus,
};
use leptos::prelude::*;

use super::api;
use crate::domain::a003_product::api as product_api;
use crate::system::session::SessionContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdoptionTab {
    Available,
    Adopted,
}

/// Adds or drops `weight`, keeping the order of selection
pub fn toggle_weight(selected: &mut Vec<String>, weight: &str, checked: bool) {
    let present = selected.iter().any(|w| w == weight);
    if checked && !present {
        selected.push(weight.to_string());
    } else if !checked {
        selected.retain(|w| w != weight);
    }
}

/// Quantity typed into a number input; anything unparsable counts as 0
pub fn parse_quantity(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

pub fn adopt_button_label(selected: usize) -> String {
    format!(
        "Adopt Product ({} weight{})",
        selected,
        if selected == 1 { "" } else { "s" }
    )
}

/// Editable copy of an adopted product's stock fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManageForm {
    pub product: AdoptedProduct,
    pub stock: StockStatus,
    pub quantity: u32,
    pub weight: String,
}

impl ManageForm {
    pub fn new(product: AdoptedProduct) -> Self {
        Self {
            stock: product.stock_status,
            quantity: product.product_quantity,
            weight: product.selected_weight.clone(),
            product,
        }
    }

    pub fn update(&self) -> AdoptedProductUpdate {
        AdoptedProductUpdate::diff(&self.product, self.stock, self.quantity, &self.weight)
    }
}

#[derive(Clone, Copy)]
pub struct AdoptionViewModel {
    pub tab: RwSignal<AdoptionTab>,
    pub weights: RwSignal<Vec<LookupOption>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,

    pub available: RwSignal<Vec<AdminProduct>>,
    pub available_page: RwSignal<Pagination>,
    pub available_query: RwSignal<ProductSearchOptions>,

    pub adopted: RwSignal<Vec<AdoptedProduct>>,
    pub adopted_page: RwSignal<Pagination>,
    pub adopted_query: RwSignal<ProductSearchOptions>,

    pub adopt_target: RwSignal<Option<AdminProduct>>,
    pub adopt_open: RwSignal<bool>,
    pub selected_weights: RwSignal<Vec<String>>,
    pub stock: RwSignal<StockStatus>,
    pub quantity: RwSignal<u32>,
    pub adopting: RwSignal<bool>,

    pub manage: RwSignal<Option<ManageForm>>,
    pub manage_open: RwSignal<bool>,
    pub managing: RwSignal<bool>,
}

impl AdoptionViewModel {
    pub fn new() -> Self {
        Self {
            tab: RwSignal::new(AdoptionTab::Available),
            weights: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            success: RwSignal::new(None),
            available: RwSignal::new(Vec::new()),
            available_page: RwSignal::new(Pagination::default()),
            available_query: RwSignal::new(ProductSearchOptions::default()),
            adopted: RwSignal::new(Vec::new()),
            adopted_page: RwSignal::new(Pagination::default()),
            adopted_query: RwSignal::new(ProductSearchOptions::adopted()),
            adopt_target: RwSignal::new(None),
            adopt_open: RwSignal::new(false),
            selected_weights: RwSignal::new(Vec::new()),
            stock: RwSignal::new(StockStatus::InStock),
            quantity: RwSignal::new(0),
            adopting: RwSignal::new(false),
            manage: RwSignal::new(None),
            manage_open: RwSignal::new(false),
            managing: RwSignal::new(false),
        }
    }

    pub fn weight_label(&self, value: &str) -> String {
        self.weights.with(|options| label_for(options, value).to_string())
    }

    pub fn load_weights(&self, session: SessionContext) {
        let this = *self;
        let client = session.client();
        wasm_bindgen_futures::spawn_local(async move {
            match product_api::fetch_weight_options(&client).await {
                Ok(options) => this.weights.set(options),
                Err(e) => {
                    log::error!("Error loading initial data: {}", e);
                    this.error.set(Some("Failed to load initial data".to_string()));
                }
            }
        });
    }

    pub fn switch_tab(&self, session: SessionContext, tab: AdoptionTab) {
        self.error.set(None);
        self.success.set(None);
        self.tab.set(tab);
        match tab {
            AdoptionTab::Available => self.load_available(session),
            AdoptionTab::Adopted => self.load_adopted(session),
        }
    }

    pub fn load_available(&self, session: SessionContext) {
        let this = *self;
        let client = session.client();
        let options = self.available_query.get_untracked();
        this.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::search_products(&client, &options).await {
                Ok(page) => {
                    this.available.set(page.products);
                    this.available_page.set(page.pagination);
                }
                Err(e) => {
                    log::error!("Error loading available products: {}", e);
                    this.error.set(Some(e));
                }
            }
            this.loading.set(false);
        });
    }

    pub fn load_adopted(&self, session: SessionContext) {
        let this = *self;
        let client = session.client();
        let options = self.adopted_query.get_untracked();
        this.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_adopted(&client, &options).await {
                Ok(page) => {
                    this.adopted.set(page.products);
                    this.adopted_page.set(page.pagination);
                }
                Err(e) => {
                    log::error!("Error loading adopted products: {}", e);
                    this.error.set(Some(e));
                }
            }
            this.loading.set(false);
        });
    }

    /// New search from page 1 with the current filters
    pub fn search(&self, session: SessionContext) {
        match self.tab.get_untracked() {
            AdoptionTab::Available => {
                self.available_query.update(|q| q.page = 1);
                self.load_available(session);
            }
            AdoptionTab::Adopted => {
                self.adopted_query.update(|q| q.page = 1);
                self.load_adopted(session);
            }
        }
    }

    pub fn go_to_page(&self, session: SessionContext, page: u32) {
        match self.tab.get_untracked() {
            AdoptionTab::Available => {
                self.available_query.update(|q| q.page = page);
                self.load_available(session);
            }
            AdoptionTab::Adopted => {
                self.adopted_query.update(|q| q.page = page);
                self.load_adopted(session);
            }
        }
    }

    pub fn open_adopt(&self, product: AdminProduct) {
        self.adopt_target.set(Some(product));
        self.selected_weights.set(Vec::new());
        self.stock.set(StockStatus::InStock);
        self.quantity.set(0);
        self.adopt_open.set(true);
    }

    pub fn submit_adoption(&self, session: SessionContext) {
        let Some(product) = self.adopt_target.get_untracked() else {
            return;
        };
        let request = AdoptionRequest {
            selected_weights: self.selected_weights.get_untracked(),
            stock_status: self.stock.get_untracked(),
            product_quantity: self.quantity.get_untracked(),
        };
        if let Err(e) = request.validate() {
            self.error.set(Some(e));
            return;
        }

        let this = *self;
        let client = session.client();
        this.adopting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::adopt_product(&client, &product.id, &request).await {
                Ok(_) => {
                    log::info!(
                        "Adopted {} with {} weights",
                        product.id,
                        request.selected_weights.len()
                    );
                    this.success.set(Some(request.success_message()));
                    this.adopt_open.set(false);
                    this.adopt_target.set(None);
                    this.load_available(session);
                }
                Err(e) => {
                    log::error!("Error adopting product: {}", e);
                    this.error.set(Some(e));
                }
            }
            this.adopting.set(false);
        });
    }

    pub fn open_manage(&self, product: AdoptedProduct) {
        self.manage.set(Some(ManageForm::new(product)));
        self.manage_open.set(true);
    }

    pub fn save_manage(&self, session: SessionContext) {
        let Some(form) = self.manage.get_untracked() else {
            return;
        };
        let update = form.update();
        if update.is_empty() {
            self.manage_open.set(false);
            return;
        }

        let this = *self;
        let client = session.client();
        this.managing.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::update_adopted(&client, &form.product.id, &update).await {
                Ok(message) => {
                    log::info!("Updated adopted product {}", form.product.id);
                    this.success.set(Some(
                        message.unwrap_or_else(|| "Product updated successfully".to_string()),
                    ));
                    this.manage_open.set(false);
                    this.load_adopted(session);
                }
                Err(e) => {
                    log::error!("Error updating adopted product: {}", e);
                    this.error.set(Some(e));
                }
            }
            this.managing.set(false);
        });
    }

    pub fn remove_managed(&self, session: SessionContext) {
        let Some(form) = self.manage.get_untracked() else {
            return;
        };

        let this = *self;
        let client = session.client();
        this.managing.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::remove_adopted(&client, &form.product.id).await {
                Ok(message) => {
                    log::info!("Removed adopted product {}", form.product.id);
                    this.success.set(Some(
                        message.unwrap_or_else(|| "Product removed successfully".to_string()),
                    ));
                    this.manage_open.set(false);
                    this.manage.set(None);
                    this.load_adopted(session);
                }
                Err(e) => {
                    log::error!("Error removing adopted product: {}", e);
                    this.error.set(Some(e));
                }
            }
            this.managing.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_weight() {
        let mut selected = Vec::new();
        toggle_weight(&mut selected, "1kg", true);
        toggle_weight(&mut selected, "500gm", true);
        toggle_weight(&mut selected, "1kg", true);
        assert_eq!(selected, vec!["1kg", "500gm"]);

        toggle_weight(&mut selected, "1kg", false);
        assert_eq!(selected, vec!["500gm"]);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("12"), 12);
        assert_eq!(parse_quantity(""), 0);
        assert_eq!(parse_quantity("-3"), 0);
    }

    #[test]
    fn test_adopt_button_label() {
        assert_eq!(adopt_button_label(0), "Adopt Product (0 weights)");
        assert_eq!(adopt_button_label(1), "Adopt Product (1 weight)");
    }

    #[test]
    fn test_manage_form_sends_only_changes() {
        let product = AdoptedProduct {
            id: "a1".into(),
            selected_weight: "1kg".into(),
            product_quantity: 4,
            ..AdoptedProduct::default()
        };
        let mut form = ManageForm::new(product);
        assert!(form.update().is_empty());

        form.quantity = 10;
        let update = form.update();
        assert_eq!(update.product_quantity, Some(10));
        assert_eq!(update.stock_status, None);
    }
}
