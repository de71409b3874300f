use contracts::shared::metadata::{FieldMetadata, FieldType};
use leptos::prelude::*;
use thaw::*;

use super::entity::{form_fields, CrudEntity};
use super::state::CrudState;
use crate::system::session::use_session;

fn field_input<E: CrudEntity>(state: CrudState<E>, field: &'static FieldMetadata) -> AnyView {
    let value = move || {
        state
            .values
            .with(|values| values.get(field.name).cloned().unwrap_or_default())
    };
    let placeholder = field.ui.placeholder.unwrap_or("");
    let on_input = move |ev| state.set_field(field.name, event_target_value(&ev));

    match field.field_type {
        FieldType::Multiline => view! {
            <textarea
                class="form__textarea"
                rows="3"
                placeholder=placeholder
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
        other => view! {
            <input
                class="form__input"
                type=other.as_str()
                placeholder=placeholder
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
    }
}

/// Create / edit dialog built from the entity's form fields
pub fn entity_form_dialog<E: CrudEntity>(state: CrudState<E>) -> impl IntoView {
    let session = use_session();

    let title = move || {
        if state.editing.with(Option::is_some) {
            format!("Edit {}", E::METADATA.element_name)
        } else {
            format!("New {}", E::METADATA.element_name)
        }
    };

    let fields = form_fields::<E>()
        .into_iter()
        .map(|field| {
            let required = if field.validation.is_required() { " *" } else { "" };
            view! {
                <div class="form__group">
                    <label class="form__label">{field.ui.label}{required}</label>
                    {field_input(state, field)}
                </div>
            }
        })
        .collect_view();

    view! {
        <Dialog open=state.form_open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{title}</DialogTitle>
                    <DialogContent>
                        {move || {
                            let errors = state.form_errors.get();
                            (!errors.is_empty()).then(|| view! {
                                <MessageBar intent=MessageBarIntent::Error>
                                    <MessageBarBody>
                                        <ul class="form__errors">
                                            {errors.into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                                        </ul>
                                    </MessageBarBody>
                                </MessageBar>
                            })
                        }}
                        <div class="form">{fields}</div>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| state.form_open.set(false)
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || state.saving.get())
                            on_click=move |_| state.submit(session)
                        >
                            {move || if state.saving.get() { "Saving..." } else { "Save" }}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
