use contracts::domain::a003_product::StockStatus;
use leptos::prelude::*;
use thaw::*;

use super::view_model::{parse_quantity, AdoptionViewModel, ManageForm};
use crate::shared::icons::icon;
use crate::system::session::SessionContext;

fn edit(vm: AdoptionViewModel, f: impl FnOnce(&mut ManageForm)) {
    vm.manage.update(|m| {
        if let Some(form) = m.as_mut() {
            f(form);
        }
    });
}

/// Stock, quantity and selected weight of one adopted product; only the
/// changed fields are sent
#[component]
pub fn ManageDialog(vm: AdoptionViewModel, session: SessionContext) -> impl IntoView {
    let confirm_remove = RwSignal::new(false);
    let read = move |f: fn(&ManageForm) -> String| vm.manage.with(|m| m.as_ref().map(f).unwrap_or_default());

    let weight_options = move || {
        vm.manage
            .with(|m| {
                m.as_ref()
                    .map(|f| f.product.available_weights.clone())
                    .unwrap_or_default()
            })
            .into_iter()
            .map(|w| {
                let label = vm.weight_label(&w);
                view! { <option value=w>{label}</option> }
            })
            .collect_view()
    };

    view! {
        <Dialog open=vm.manage_open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{move || read(|f| f.product.product_name.clone())}</DialogTitle>
                    <DialogContent>
                        <div class="form__group">
                            <label class="form__label">"Stock status"</label>
                            <select
                                class="form__select"
                                prop:value=move || read(|f| f.stock.as_str().to_string())
                                on:change=move |ev| {
                                    let status = StockStatus::parse(&event_target_value(&ev)).unwrap_or_default();
                                    edit(vm, |f| f.stock = status);
                                }
                            >
                                <option value=StockStatus::InStock.as_str()>{StockStatus::InStock.label()}</option>
                                <option value=StockStatus::OutOfStock.as_str()>{StockStatus::OutOfStock.label()}</option>
                            </select>
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Quantity"</label>
                            <input
                                class="form__input"
                                type="number"
                                min="0"
                                prop:value=move || read(|f| f.quantity.to_string())
                                on:input=move |ev| {
                                    let quantity = parse_quantity(&event_target_value(&ev));
                                    edit(vm, |f| f.quantity = quantity);
                                }
                            />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Selected weight"</label>
                            <select
                                class="form__select"
                                prop:value=move || read(|f| f.weight.clone())
                                on:change=move |ev| {
                                    let weight = event_target_value(&ev);
                                    edit(vm, |f| f.weight = weight);
                                }
                            >
                                {weight_options}
                            </select>
                        </div>
                        <Show when=move || confirm_remove.get()>
                            <MessageBar intent=MessageBarIntent::Warning>
                                <MessageBarBody>
                                    "Remove this product from the shop? Press Remove again to confirm."
                                </MessageBarBody>
                            </MessageBar>
                        </Show>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            disabled=Signal::derive(move || vm.managing.get())
                            on_click=move |_| {
                                if confirm_remove.get_untracked() {
                                    confirm_remove.set(false);
                                    vm.remove_managed(session);
                                } else {
                                    confirm_remove.set(true);
                                }
                            }
                        >
                            {icon("delete")}
                            " Remove"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| {
                                confirm_remove.set(false);
                                vm.manage_open.set(false);
                            }
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || vm.managing.get())
                            on_click=move |_| vm.save_manage(session)
                        >
                            {icon("save")}
                            " Save"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
