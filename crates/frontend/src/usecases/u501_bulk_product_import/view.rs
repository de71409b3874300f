use contracts::domain::a003_product::{format_price, ProductCategory};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_bulk_product_import::{
    BulkProductImport, DraftBatch, ProductDraft, MAX_BATCH_SIZE,
};
use leptos::prelude::*;
use thaw::*;

use super::manual_entry::ManualEntryList;
use super::results_dialog::BulkResultsDialog;
use super::view_model::{BulkUploadViewModel, UploadMode};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::components::{MessageBanner, PageHeader};
use crate::shared::file_utils::{reset_input, selected_files};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_USECASE};
use crate::system::session::use_session;

fn category_cell(draft: &ProductDraft) -> String {
    ProductCategory::parse(&draft.category)
        .map(|c| c.display_name())
        .unwrap_or_else(|| draft.category.clone())
}

fn price_cell(draft: &ProductDraft) -> String {
    let base = draft
        .price
        .trim()
        .parse::<f64>()
        .map(format_price)
        .unwrap_or_else(|_| draft.price.clone());
    match draft.discounted_price() {
        Some(discounted) => format!("{} → {}", base, format_price(discounted)),
        None => base,
    }
}

/// Read-only table of the rows that will be submitted
#[component]
fn DraftPreview(vm: BulkUploadViewModel) -> impl IntoView {
    let rows = move || {
        vm.batch.with(|b| {
            b.drafts()
                .iter()
                .enumerate()
                .map(|(i, d)| {
                    let name = d.name.clone();
                    let category = category_cell(d);
                    let price = price_cell(d);
                    let brand = d.brand.clone();
                    let weights = d.weights_text();
                    let tags = d.tags_text();
                    view! {
                        <TableRow>
                            <TableCell>{i + 1}</TableCell>
                            <TableCell><TableCellLayout truncate=true>{name}</TableCellLayout></TableCell>
                            <TableCell>{category}</TableCell>
                            <TableCell>{price}</TableCell>
                            <TableCell>{brand}</TableCell>
                            <TableCell>{weights}</TableCell>
                            <TableCell>{tags}</TableCell>
                        </TableRow>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <Show when=move || !vm.batch.with(DraftBatch::is_empty)>
            <Card>
                <h3>{move || format!("Preview ({} products)", vm.batch.with(DraftBatch::len))}</h3>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"#"</TableHeaderCell>
                            <TableHeaderCell>"Name"</TableHeaderCell>
                            <TableHeaderCell>"Category"</TableHeaderCell>
                            <TableHeaderCell>"Price"</TableHeaderCell>
                            <TableHeaderCell>"Brand"</TableHeaderCell>
                            <TableHeaderCell>"Weights"</TableHeaderCell>
                            <TableHeaderCell>"Tags"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>{rows}</TableBody>
                </Table>
            </Card>
        </Show>
    }
}

#[component]
fn CsvPanel(vm: BulkUploadViewModel) -> impl IntoView {
    let warnings = move || {
        let list = vm.warnings.get();
        (!list.is_empty()).then(|| {
            view! {
                <MessageBar intent=MessageBarIntent::Warning>
                    <MessageBarBody>
                        <div style="white-space: pre-line;">{list.join("\n")}</div>
                    </MessageBarBody>
                </MessageBar>
            }
        })
    };

    view! {
        <Card>
            <Flex vertical=true>
                <p>
                    "Columns: productName, productDescription, productPrice, productCategory "
                    "(required), productBrand, availableWeights, tags. Separate weights and tags with ';'."
                </p>
                <Flex align=FlexAlign::Center>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.download_template()>
                        {icon("download")}
                        " Download template"
                    </Button>
                    <input
                        type="file"
                        accept=".csv,text/csv"
                        on:change=move |ev| {
                            let files = selected_files(&ev);
                            reset_input(&ev);
                            if let Some(file) = files.into_iter().next() {
                                vm.pick_file(file);
                            }
                        }
                    />
                    {move || vm.parsing.get().then(|| view! { <Spinner size=SpinnerSize::Small /> })}
                </Flex>
                {move || vm.file_name.get().map(|name| view! {
                    <Flex align=FlexAlign::Center>
                        {icon("file-text")}
                        <span>{name}</span>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            on_click=move |_| vm.clear_file()
                        >
                            {icon("close")}
                            " Clear"
                        </Button>
                    </Flex>
                })}
                {warnings}
            </Flex>
        </Card>
    }
}

/// Bulk product upload from a CSV file or manual entry.
///
/// Both inputs fill one list of drafts; the list is validated as a whole
/// and sent in a single request.
#[component]
#[allow(non_snake_case)]
pub fn BulkProductUpload() -> impl IntoView {
    let session = use_session();
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let vm = BulkUploadViewModel::new();

    let on_done = Callback::new(move |_| {
        tabs_store.close_tab(&BulkProductImport::full_name());
        tabs_store.open_tab("a003_product", tab_label_for_key("a003_product"));
    });

    let count = move || vm.batch.with(DraftBatch::len);
    let submit_label = move || {
        if vm.submitting.get() {
            " Uploading...".to_string()
        } else {
            format!(" Upload {} products", count())
        }
    };

    let mode_button = move |mode: UploadMode, label: &'static str, icon_name: &'static str| {
        view! {
            <Button
                appearance=Signal::derive(move || {
                    if vm.mode.get() == mode {
                        ButtonAppearance::Primary
                    } else {
                        ButtonAppearance::Secondary
                    }
                })
                on_click=move |_| vm.mode.set(mode)
            >
                {icon(icon_name)}
                {label}
            </Button>
        }
    };

    view! {
        <PageFrame page_id=format!("{}--usecase", BulkProductImport::full_name()) category=PAGE_CAT_USECASE>
            <PageHeader
                title=BulkProductImport::display_name()
                subtitle=BulkProductImport::description().to_string()
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || vm.submitting.get() || count() == 0)
                    on_click=move |_| vm.submit(session, on_done)
                >
                    {icon("upload")}
                    {submit_label}
                </Button>
            </PageHeader>

            <MessageBanner message=vm.error />
            <MessageBanner message=vm.success intent=MessageBarIntent::Success />

            <Flex>
                {mode_button(UploadMode::Csv, " CSV file", "file-text")}
                {mode_button(UploadMode::Manual, " Manual entry", "edit")}
                <span class="bulk-upload__limit">
                    {format!("Up to {} products per upload", MAX_BATCH_SIZE)}
                </span>
            </Flex>

            {move || match vm.mode.get() {
                UploadMode::Csv => view! { <CsvPanel vm=vm /> }.into_any(),
                UploadMode::Manual => view! { <ManualEntryList vm=vm /> }.into_any(),
            }}

            <DraftPreview vm=vm />

            <BulkResultsDialog result=vm.result open=vm.result_open />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_product::DiscountType;

    #[test]
    fn test_price_cell_shows_discount() {
        let draft = ProductDraft {
            price: "200".into(),
            discount_type: DiscountType::Fixed,
            discount_value: "50".into(),
            ..ProductDraft::default()
        };
        assert_eq!(
            price_cell(&draft),
            format!("{} → {}", format_price(200.0), format_price(150.0))
        );
    }

    #[test]
    fn test_unparsed_cells_echo_input() {
        let draft = ProductDraft {
            price: "abc".into(),
            category: "toys".into(),
            ..ProductDraft::default()
        };
        assert_eq!(price_cell(&draft), "abc");
        assert_eq!(category_cell(&draft), "toys");
    }
}
