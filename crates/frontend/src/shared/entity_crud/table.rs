use contracts::shared::metadata::Capability;
use leptos::prelude::*;
use thaw::*;

use super::details_dialog::{entity_details_dialog, verified_badge};
use super::entity::{list_fields, CrudEntity};
use super::form_dialog::entity_form_dialog;
use super::state::CrudState;
use crate::shared::components::{MessageBanner, PageHeader};
use crate::shared::date_utils::format_last_active;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::pages::admin_key_dialog::AdminKeyDialog;
use crate::system::session::use_session;

/// List page for an account entity.
///
/// Columns come from the list-visible fields of `E::FIELDS`; the toolbar and
/// row actions come from the capability set of `E::METADATA`. A failed load
/// asks for the admin key and retries once it is saved.
pub fn entity_crud_table<E: CrudEntity>() -> impl IntoView {
    let session = use_session();
    let state = CrudState::<E>::new();
    let caps = E::METADATA.capabilities;

    let can_create = caps.has(Capability::Create);
    let can_edit = caps.has(Capability::Edit);
    let can_view = caps.has(Capability::ViewDetails);
    let can_verify = caps.has(Capability::ToggleVerification);
    let can_delete = caps.has(Capability::Delete);

    state.fetch(session);

    let on_key_saved = Callback::new(move |_| state.fetch(session));

    let columns = list_fields::<E>();
    let header_cells = columns
        .into_iter()
        .map(|f| view! { <TableHeaderCell>{f.ui.label}</TableHeaderCell> })
        .collect_view();

    let row_view = move |row: E| {
        let cells = list_fields::<E>()
            .into_iter()
            .map(|f| {
                let text = row.cell(f.name);
                let text = if text.is_empty() { "-".to_string() } else { text };
                view! {
                    <TableCell>
                        <TableCellLayout truncate=true>{text}</TableCellLayout>
                    </TableCell>
                }
            })
            .collect_view();

        let last_active = format_last_active(row.last_active());
        let verified = row.is_verified();
        let toggling = {
            let id = row.id().to_string();
            Signal::derive(move || state.toggling.get().as_deref() == Some(id.as_str()))
        };
        let edit_row = row.clone();
        let view_row = row.clone();
        let verify_row = row.clone();
        let delete_row = row.clone();
        let armed = {
            let id = row.id().to_string();
            Signal::derive(move || state.pending_delete.get().as_deref() == Some(id.as_str()))
        };

        view! {
            <TableRow>
                {cells}
                <TableCell>{verified_badge(verified)}</TableCell>
                <TableCell>{last_active}</TableCell>
                <TableCell>
                    <Space>
                        {can_view.then(|| view! {
                            <Button
                                size=ButtonSize::Small
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| state.open_details(view_row.clone())
                            >
                                {icon("eye")}
                            </Button>
                        })}
                        {can_edit.then(|| view! {
                            <Button
                                size=ButtonSize::Small
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| state.open_edit(edit_row.clone())
                            >
                                {icon("edit")}
                            </Button>
                        })}
                        {can_verify.then(|| view! {
                            <Button
                                size=ButtonSize::Small
                                appearance=ButtonAppearance::Secondary
                                disabled=toggling
                                on_click=move |_| state.toggle_verification(session, verify_row.clone())
                            >
                                {if verified { "Unverify" } else { "Verify" }}
                            </Button>
                        })}
                        {can_delete.then(|| view! {
                            <Button
                                size=ButtonSize::Small
                                appearance=Signal::derive(move || {
                                    if armed.get() {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Subtle
                                    }
                                })
                                disabled=Signal::derive(move || state.deleting.get())
                                on_click=move |_| state.request_delete(session, &delete_row)
                            >
                                {icon("delete")}
                                {move || armed.get().then_some(" Confirm")}
                            </Button>
                        })}
                    </Space>
                </TableCell>
            </TableRow>
        }
    };

    let body = move || {
        if state.loading.get() && state.rows.with(Vec::is_empty) {
            return view! {
                <Flex justify=FlexJustify::Center>
                    <Spinner />
                </Flex>
            }
            .into_any();
        }

        let rows = state.visible_rows();
        if rows.is_empty() {
            let text = if state.query.with(|q| q.trim().is_empty()) {
                format!("No {} found", E::METADATA.list_name.to_lowercase())
            } else {
                "No results match your search".to_string()
            };
            return view! { <div class="empty-state">{text}</div> }.into_any();
        }

        rows.into_iter().map(row_view).collect_view().into_any()
    };

    let subtitle = move || {
        let total = state.rows.with(Vec::len);
        let verified = state.rows.with(|rows| rows.iter().filter(|r| r.is_verified()).count());
        format!("{} total, {} verified", total, verified)
    };

    view! {
        <PageFrame page_id=format!("{}--list", E::METADATA.entity_index) category=PAGE_CAT_LIST>
            <PageHeader title=E::METADATA.list_name subtitle=Signal::derive(move || Some(subtitle()))>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| state.fetch(session)
                    disabled=Signal::derive(move || state.loading.get())
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
                {can_create.then(|| view! {
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| state.open_create()>
                        {icon("plus")}
                        {format!(" Add {}", E::METADATA.element_name)}
                    </Button>
                })}
            </PageHeader>

            <MessageBanner message=state.error />
            <MessageBanner message=state.notice intent=MessageBarIntent::Success />

            <div class="filter-panel">
                <Flex align=FlexAlign::Center>
                    {icon("search")}
                    <Input
                        value=state.query
                        placeholder=format!("Search {}...", E::METADATA.list_name.to_lowercase())
                    />
                </Flex>
            </div>

            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            {header_cells}
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Last active"</TableHeaderCell>
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>{body}</TableBody>
                </Table>
            </div>

            {entity_form_dialog(state)}
            {entity_details_dialog(state)}
            <AdminKeyDialog open=state.key_dialog_open on_saved=on_key_saved />
        </PageFrame>
    }
}
