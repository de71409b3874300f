use contracts::domain::a003_product::{format_price, DiscountType, ProductCategory};
use contracts::usecases::u501_bulk_product_import::{DraftBatch, ProductDraft, MAX_BATCH_SIZE};
use leptos::prelude::*;
use thaw::*;

use super::view_model::BulkUploadViewModel;
use crate::shared::icons::icon;

fn draft_input(
    vm: BulkUploadViewModel,
    index: usize,
    label: &'static str,
    input_type: &'static str,
    get: fn(&ProductDraft) -> String,
    set: fn(&mut ProductDraft, String),
) -> impl IntoView {
    let value = move || {
        vm.batch
            .with(|b| b.drafts().get(index).map(get).unwrap_or_default())
    };
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input"
                type=input_type
                prop:value=value
                on:input=move |ev| vm.update_entry(index, |d| set(d, event_target_value(&ev)))
            />
        </div>
    }
}

/// Comma list input; committed on change so separators can be typed
fn list_input(
    vm: BulkUploadViewModel,
    index: usize,
    label: &'static str,
    get: fn(&ProductDraft) -> String,
    set: fn(&mut ProductDraft, &str),
) -> impl IntoView {
    let value = move || {
        vm.batch
            .with(|b| b.drafts().get(index).map(get).unwrap_or_default())
    };
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input"
                type="text"
                placeholder="comma separated"
                prop:value=value
                on:change=move |ev| vm.update_entry(index, |d| set(d, &event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
fn ManualEntry(vm: BulkUploadViewModel, index: usize) -> impl IntoView {
    let draft = move |f: fn(&ProductDraft) -> String| {
        vm.batch
            .with(|b| b.drafts().get(index).map(f).unwrap_or_default())
    };
    let discount_type = move || {
        vm.batch.with(|b| {
            b.drafts()
                .get(index)
                .map(|d| d.discount_type)
                .unwrap_or_default()
        })
    };
    let preview = move || {
        vm.batch
            .with(|b| b.drafts().get(index).and_then(ProductDraft::discounted_price))
            .map(|p| format!("Discounted price: {}", format_price(p)))
    };

    view! {
        <Card>
            <div class="manual-entry__header">
                <span class="manual-entry__title">{format!("Product {}", index + 1)}</span>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| vm.remove_entry(index)
                >
                    {icon("delete")}
                </Button>
            </div>

            <div class="form__grid">
                {draft_input(vm, index, "Name *", "text", |d| d.name.clone(), |d, v| d.name = v)}
                {draft_input(vm, index, "Price *", "number", |d| d.price.clone(), |d, v| d.price = v)}

                <div class="form__group">
                    <label class="form__label">"Category *"</label>
                    <select
                        class="form__select"
                        prop:value=move || draft(|d| d.category.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            vm.update_entry(index, |d| d.category = value);
                        }
                    >
                        <option value="">"Select category"</option>
                        {ProductCategory::ALL
                            .iter()
                            .map(|c| view! { <option value=c.label()>{c.display_name()}</option> })
                            .collect_view()}
                    </select>
                </div>

                {draft_input(vm, index, "Brand", "text", |d| d.brand.clone(), |d, v| d.brand = v)}
                {list_input(vm, index, "Available weights", ProductDraft::weights_text, ProductDraft::set_weights_text)}
                {list_input(vm, index, "Tags", ProductDraft::tags_text, ProductDraft::set_tags_text)}
            </div>

            <div class="form__group">
                <label class="form__label">"Description *"</label>
                <textarea
                    class="form__textarea"
                    rows=3
                    prop:value=move || draft(|d| d.description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.update_entry(index, |d| d.description = value);
                    }
                ></textarea>
            </div>

            <div class="form__grid">
                <div class="form__group">
                    <label class="form__label">"Discount"</label>
                    <select
                        class="form__select"
                        prop:value=move || discount_type().as_str()
                        on:change=move |ev| {
                            let kind = DiscountType::parse(&event_target_value(&ev));
                            vm.update_entry(index, |d| d.discount_type = kind);
                        }
                    >
                        {DiscountType::ALL
                            .iter()
                            .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                            .collect_view()}
                    </select>
                </div>

                <Show when=move || discount_type() != DiscountType::None>
                    {draft_input(vm, index, "Discount value", "number", |d| d.discount_value.clone(), |d, v| d.discount_value = v)}
                    {draft_input(vm, index, "Starts", "datetime-local", |d| d.discount_start.clone(), |d, v| d.discount_start = v)}
                    {draft_input(vm, index, "Ends", "datetime-local", |d| d.discount_end.clone(), |d, v| d.discount_end = v)}
                </Show>
            </div>

            {move || preview().map(|text| view! { <div class="manual-entry__preview">{text}</div> })}
        </Card>
    }
}

/// Manual entry: one card per draft, keyed by position
#[component]
pub fn ManualEntryList(vm: BulkUploadViewModel) -> impl IntoView {
    let count = move || vm.batch.with(DraftBatch::len);

    view! {
        <Flex vertical=true>
            <Flex>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || count() >= MAX_BATCH_SIZE)
                    on_click=move |_| vm.add_entry()
                >
                    {icon("plus")}
                    " Add product"
                </Button>
                <Button
                    appearance=ButtonAppearance::Subtle
                    disabled=Signal::derive(move || count() == 0)
                    on_click=move |_| vm.clear_all()
                >
                    {icon("delete")}
                    " Clear all"
                </Button>
                <span class="manual-entry__count">
                    {move || format!("{} of {} products", count(), MAX_BATCH_SIZE)}
                </span>
            </Flex>

            <For
                each=move || 0..count()
                key=|index| *index
                children=move |index| view! { <ManualEntry vm=vm index=index /> }
            />
        </Flex>
    }
}
