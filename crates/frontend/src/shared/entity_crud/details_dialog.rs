use contracts::domain::common::AccountDocument;
use contracts::shared::metadata::Capability;
use leptos::prelude::*;
use thaw::*;

use super::entity::CrudEntity;
use super::state::CrudState;
use crate::shared::date_utils::format_last_active;
use crate::system::session::use_session;

pub(crate) fn verified_badge(verified: bool) -> AnyView {
    if verified {
        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Verified"</Badge> }
            .into_any()
    } else {
        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>"Unverified"</Badge> }
            .into_any()
    }
}

fn document_row(label: &'static str, doc: &AccountDocument) -> impl IntoView {
    let number = doc.number.clone().unwrap_or_else(|| "-".to_string());
    let link = doc.link().map(str::to_string);
    let verified = doc.verified;
    view! {
        <div class="details__document">
            <span class="details__label">{label}</span>
            <span>{number}</span>
            {verified_badge(verified)}
            {link.map(|href| view! {
                <a href=href target="_blank" rel="noopener noreferrer">"View"</a>
            })}
        </div>
    }
}

/// Read-only dialog with the full record, its documents and images
pub fn entity_details_dialog<E: CrudEntity>(state: CrudState<E>) -> impl IntoView {
    let session = use_session();
    let can_verify = E::METADATA.capabilities.has(Capability::ToggleVerification);

    let body = move || {
        state.details.get().map(|row| {
            let rows = row
                .detail_rows()
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <tr>
                            <th class="details__label">{label}</th>
                            <td>{value}</td>
                        </tr>
                    }
                })
                .collect_view();

            let documents = row
                .documents()
                .map(|docs| docs.present())
                .unwrap_or_default()
                .into_iter()
                .map(|(label, doc)| document_row(label, doc))
                .collect_view();

            let images = row
                .images()
                .iter()
                .map(|img| {
                    let url = img.url.clone();
                    let href = url.clone();
                    view! {
                        <a href=href target="_blank" rel="noopener noreferrer">
                            <img class="details__image" src=url alt="Business image" />
                        </a>
                    }
                })
                .collect_view();

            let has_documents = row.documents().is_some_and(|d| !d.present().is_empty());
            let has_images = !row.images().is_empty();
            let last_active = format_last_active(row.last_active());
            let verified = row.is_verified();
            let toggle_row = row.clone();
            let toggling = {
                let id = row.id().to_string();
                Signal::derive(move || state.toggling.get().as_deref() == Some(id.as_str()))
            };

            view! {
                <div class="details">
                    <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                        <h3 class="details__title">{row.title()}</h3>
                        {verified_badge(verified)}
                    </Flex>
                    <table class="details__table">
                        <tbody>
                            {rows}
                            <tr>
                                <th class="details__label">"Last active"</th>
                                <td>{last_active}</td>
                            </tr>
                        </tbody>
                    </table>
                    {has_documents.then(|| view! {
                        <h4 class="details__section">"Documents"</h4>
                        <div class="details__documents">{documents}</div>
                    })}
                    {has_images.then(|| view! {
                        <h4 class="details__section">"Images"</h4>
                        <div class="details__images">{images}</div>
                    })}
                    {can_verify.then(|| view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=toggling
                            on_click=move |_| state.toggle_verification(session, toggle_row.clone())
                        >
                            {if verified { "Mark as unverified" } else { "Verify" }}
                        </Button>
                    })}
                </div>
            }
        })
    };

    view! {
        <Dialog open=state.details_open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{format!("{} details", E::METADATA.element_name)}</DialogTitle>
                    <DialogContent>{body}</DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| state.details_open.set(false)
                        >
                            "Close"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
