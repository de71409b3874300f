use contracts::domain::a003_product::{format_price, StockStatus};
use leptos::prelude::*;
use thaw::*;

use super::available_panel::category_label;
use super::view_model::{adopt_button_label, parse_quantity, toggle_weight, AdoptionViewModel};
use crate::system::session::SessionContext;

/// Weight choice plus initial stock settings for one catalog product
#[component]
pub fn AdoptDialog(vm: AdoptionViewModel, session: SessionContext) -> impl IntoView {
    let selected_count = move || vm.selected_weights.with(Vec::len);

    let summary = move || {
        vm.adopt_target.get().map(|p| {
            let brand = p.product_brand.clone().filter(|b| !b.trim().is_empty());
            let name = p.product_name.clone();
            let category = p.product_category.clone();
            view! {
                <div class="adopt-dialog__product">
                    {p.thumbnail().map(|src| view! { <img class="product-card__image" src=src.to_string() alt="" /> })}
                    <Flex align=FlexAlign::Center>
                        <strong>{name}</strong>
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                            {category_label(&category)}
                        </Badge>
                    </Flex>
                    <div class="product-card__price">{format_price(p.effective_price())}</div>
                    {brand.map(|b| view! { <Badge appearance=BadgeAppearance::Outline>{b}</Badge> })}
                    <p>{p.product_description.clone()}</p>
                </div>
            }
        })
    };

    let weight_options = move || {
        let weights = vm
            .adopt_target
            .with(|p| p.as_ref().map(|p| p.available_weights.clone()).unwrap_or_default());
        weights
            .into_iter()
            .map(|weight| {
                let label = vm.weight_label(&weight);
                let key = weight.clone();
                view! {
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || vm.selected_weights.with(|s| s.contains(&key))
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                vm.selected_weights.update(|s| toggle_weight(s, &weight, checked));
                            }
                        />
                        {label}
                    </label>
                }
            })
            .collect_view()
    };

    view! {
        <Dialog open=vm.adopt_open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Adopt Product"</DialogTitle>
                    <DialogContent>
                        {summary}

                        <h4>"Select Weight Options *"</h4>
                        <div class="form__checkbox-group">{weight_options}</div>

                        <h4>"Initial Settings"</h4>
                        <label class="form__checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || vm.stock.get() == StockStatus::InStock
                                on:change=move |ev| {
                                    vm.stock.set(if event_target_checked(&ev) {
                                        StockStatus::InStock
                                    } else {
                                        StockStatus::OutOfStock
                                    });
                                }
                            />
                            {move || vm.stock.get().label()}
                        </label>
                        <div class="form__group">
                            <label class="form__label">"Initial Quantity"</label>
                            <input
                                class="form__input"
                                type="number"
                                min="0"
                                prop:value=move || vm.quantity.get().to_string()
                                on:input=move |ev| vm.quantity.set(parse_quantity(&event_target_value(&ev)))
                            />
                        </div>
                        <MessageBar intent=MessageBarIntent::Info>
                            <MessageBarBody>
                                "You can modify stock status and quantity after adopting the product."
                            </MessageBarBody>
                        </MessageBar>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.adopt_open.set(false)>
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || selected_count() == 0 || vm.adopting.get())
                            on_click=move |_| vm.submit_adoption(session)
                        >
                            {move || adopt_button_label(selected_count())}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
