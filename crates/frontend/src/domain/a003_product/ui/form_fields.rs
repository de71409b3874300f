//! Field set shared by the product edit and create pages.

use contracts::domain::a003_product::form::CUSTOM_WEIGHT;
use contracts::domain::a003_product::{
    format_price, DiscountType, LookupOption, ProductCategory, ProductForm,
};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a003_product::api;
use crate::shared::icons::icon;
use crate::system::session::SessionContext;

/// Weight and unit lookups for the form
#[derive(Clone, Copy)]
pub struct FormLookups {
    pub weights: RwSignal<Vec<LookupOption>>,
    pub units: RwSignal<Vec<LookupOption>>,
}

impl FormLookups {
    pub fn new() -> Self {
        Self {
            weights: RwSignal::new(Vec::new()),
            units: RwSignal::new(Vec::new()),
        }
    }

    /// Loads both lookups; a failure is reported through `error`
    pub fn load(&self, session: SessionContext, error: RwSignal<Option<String>>) {
        let this = *self;
        let client = session.client();
        wasm_bindgen_futures::spawn_local(async move {
            let weights = api::fetch_weight_options(&client).await;
            let units = api::fetch_custom_weight_units(&client).await;
            match (weights, units) {
                (Ok(weights), Ok(units)) => {
                    this.weights.set(weights);
                    this.units.set(units);
                }
                (Err(e), _) | (_, Err(e)) => {
                    log::error!("Error loading form data: {}", e);
                    error.set(Some("Failed to load form data".to_string()));
                }
            }
        });
    }
}

fn text_input(
    form: RwSignal<ProductForm>,
    label: &'static str,
    input_type: &'static str,
    get: fn(&ProductForm) -> String,
    set: fn(&mut ProductForm, String),
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input"
                type=input_type
                prop:value=move || form.with(get)
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
fn WeightSection(form: RwSignal<ProductForm>, lookups: FormLookups) -> impl IntoView {
    let options = move || {
        let mut options = lookups.weights.get();
        if !options.iter().any(|o| o.value == CUSTOM_WEIGHT) {
            options.push(LookupOption::new(CUSTOM_WEIGHT, "Custom weight"));
        }
        options
    };

    let custom_rows = move || {
        let weights = form.with(|f| f.custom_weights.clone());
        weights
            .into_iter()
            .enumerate()
            .map(|(index, weight)| {
                let units = lookups.units.get();
                view! {
                    <div class="custom-weight">
                        <input
                            class="form__input"
                            type="number"
                            min="0"
                            placeholder="Value"
                            prop:value=weight.value.clone()
                            on:input=move |ev| form.update(|f| {
                                if let Some(w) = f.custom_weights.get_mut(index) {
                                    w.value = event_target_value(&ev);
                                }
                            })
                        />
                        <select
                            class="form__select"
                            prop:value=weight.unit.clone()
                            on:change=move |ev| form.update(|f| {
                                if let Some(w) = f.custom_weights.get_mut(index) {
                                    w.unit = event_target_value(&ev);
                                }
                            })
                        >
                            {units.into_iter().map(|u| view! {
                                <option value=u.value>{u.label}</option>
                            }).collect_view()}
                        </select>
                        <input
                            class="form__input"
                            placeholder="Description (optional)"
                            prop:value=weight.description.clone()
                            on:input=move |ev| form.update(|f| {
                                if let Some(w) = f.custom_weights.get_mut(index) {
                                    w.description = event_target_value(&ev);
                                }
                            })
                        />
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| form.update(|f| f.remove_custom_weight(index))
                        >
                            {icon("delete")}
                        </Button>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="form__group">
            <label class="form__label">"Available weights *"</label>
            <div class="checkbox-grid">
                {move || options().into_iter().map(|opt| {
                    let value = opt.value.clone();
                    let value_for_check = opt.value.clone();
                    view! {
                        <label class="checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.available_weights.contains(&value_for_check))
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    form.update(|f| f.toggle_weight(&value, checked));
                                }
                            />
                            {opt.label}
                        </label>
                    }
                }).collect_view()}
            </div>
            <Show when=move || form.with(ProductForm::uses_custom_weights)>
                <div class="custom-weights">
                    {custom_rows}
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| form.update(ProductForm::add_custom_weight)
                    >
                        {icon("plus")}
                        " Add custom weight"
                    </Button>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn DiscountSection(form: RwSignal<ProductForm>) -> impl IntoView {
    let has_discount = move || form.with(|f| f.discount_type != DiscountType::None);

    view! {
        <div class="form__row">
            <div class="form__group">
                <label class="form__label">"Discount type"</label>
                <select
                    class="form__select"
                    prop:value=move || form.with(|f| f.discount_type.as_str().to_string())
                    on:change=move |ev| {
                        let kind = DiscountType::parse(&event_target_value(&ev));
                        form.update(|f| f.discount_type = kind);
                    }
                >
                    {DiscountType::ALL.iter().map(|d| view! {
                        <option value=d.as_str()>{d.label()}</option>
                    }).collect_view()}
                </select>
            </div>
            <Show when=has_discount>
                {text_input(form, "Discount value", "number", |f| f.discount_value.clone(), |f, v| f.discount_value = v)}
                {text_input(form, "Start date", "datetime-local", |f| f.discount_start.clone(), |f, v| f.discount_start = v)}
                {text_input(form, "End date", "datetime-local", |f| f.discount_end.clone(), |f, v| f.discount_end = v)}
                <div class="form__group">
                    <label class="form__label">"Discounted price"</label>
                    <span class="price">
                        {move || form.with(ProductForm::discount_preview).map(format_price).unwrap_or_else(|| "-".to_string())}
                    </span>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn TagSection(form: RwSignal<ProductForm>) -> impl IntoView {
    let new_tag = RwSignal::new(String::new());
    let add = move || {
        let raw = new_tag.get_untracked();
        if form.try_update(|f| f.add_tag(&raw)).unwrap_or(false) {
            new_tag.set(String::new());
        }
    };

    view! {
        <div class="form__group">
            <label class="form__label">"Tags"</label>
            <Flex align=FlexAlign::Center>
                <div on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        add();
                    }
                }>
                    <Input value=new_tag placeholder="Add a tag" />
                </div>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| add()>"Add"</Button>
            </Flex>
            <div class="tag-list">
                {move || form.with(|f| f.tags.clone()).into_iter().map(|tag| {
                    let for_remove = tag.clone();
                    view! {
                        <span class="tag">
                            {tag}
                            <button class="tag__remove" on:click=move |_| form.update(|f| f.remove_tag(&for_remove))>
                                {icon("close")}
                            </button>
                        </span>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Every editable product field bound to one form signal
#[component]
pub fn ProductFormFields(form: RwSignal<ProductForm>, lookups: FormLookups) -> impl IntoView {
    view! {
        <div class="form">
            {text_input(form, "Product name *", "text", |f| f.name.clone(), |f, v| f.name = v)}
            <div class="form__group">
                <label class="form__label">"Description *"</label>
                <textarea
                    class="form__textarea"
                    rows="4"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                />
            </div>
            <div class="form__row">
                {text_input(form, "Price (₹) *", "number", |f| f.price.clone(), |f, v| f.price = v)}
                <div class="form__group">
                    <label class="form__label">"Category *"</label>
                    <select
                        class="form__select"
                        prop:value=move || form.with(|f| {
                            ProductCategory::parse(&f.category)
                                .map(|c| c.label().to_string())
                                .unwrap_or_default()
                        })
                        on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                    >
                        <option value="">"Select a category"</option>
                        {ProductCategory::ALL.iter().map(|c| view! {
                            <option value=c.label()>{c.display_name()}</option>
                        }).collect_view()}
                    </select>
                </div>
                {text_input(form, "Brand", "text", |f| f.brand.clone(), |f, v| f.brand = v)}
            </div>

            <WeightSection form=form lookups=lookups />
            <DiscountSection form=form />
            <TagSection form=form />

            <label class="checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || form.with(|f| f.is_active)
                    on:change=move |ev| form.update(|f| f.is_active = event_target_checked(&ev))
                />
                "Active (visible to business owners)"
            </label>
        </div>
    }
}
