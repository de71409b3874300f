use contracts::usecases::u501_bulk_product_import::BulkUploadResult;
use leptos::prelude::*;
use thaw::*;

/// Created and failed records of the last bulk upload
#[component]
pub fn BulkResultsDialog(
    result: RwSignal<Option<BulkUploadResult>>,
    open: RwSignal<bool>,
) -> impl IntoView {
    let body = move || {
        result.get().map(|r| {
            let created = r
                .successful
                .iter()
                .cloned()
                .map(|s| {
                    let product_name = s.product_name.clone();
                    view! {
                        <TableRow>
                            <TableCell>{s.index + 1}</TableCell>
                            <TableCell><TableCellLayout truncate=true>{product_name}</TableCellLayout></TableCell>
                            <TableCell>{s.product_category.clone()}</TableCell>
                            <TableCell><code>{s.product_id.clone()}</code></TableCell>
                        </TableRow>
                    }
                })
                .collect_view();
            let failed = r
                .failed
                .iter()
                .cloned()
                .map(|f| {
                    let product_name = f.product_name.clone();
                    view! {
                        <TableRow>
                            <TableCell>{f.index + 1}</TableCell>
                            <TableCell><TableCellLayout truncate=true>{product_name}</TableCellLayout></TableCell>
                            <TableCell>{f.error.clone()}</TableCell>
                        </TableRow>
                    }
                })
                .collect_view();
            let has_failed = !r.failed.is_empty();

            view! {
                <Flex vertical=true>
                    <Flex>
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                            {format!("{} created", r.successful.len())}
                        </Badge>
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>
                            {format!("{} failed", r.failed.len())}
                        </Badge>
                        <span>{format!("{} processed", r.total_processed)}</span>
                    </Flex>

                    <h4>"Created"</h4>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"#"</TableHeaderCell>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Category"</TableHeaderCell>
                                <TableHeaderCell>"ID"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>{created}</TableBody>
                    </Table>

                    {has_failed.then(|| view! {
                        <h4>"Failed"</h4>
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"#"</TableHeaderCell>
                                    <TableHeaderCell>"Name"</TableHeaderCell>
                                    <TableHeaderCell>"Error"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>{failed}</TableBody>
                        </Table>
                    })}
                </Flex>
            }
        })
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Upload results"</DialogTitle>
                    <DialogContent>{body}</DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| open.set(false)>
                            "Close"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
