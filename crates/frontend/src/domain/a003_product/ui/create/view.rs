use contracts::domain::a003_product::form::{MAX_IMAGES, MIN_IMAGES};
use leptos::prelude::*;
use thaw::*;

use super::view_model::ProductCreateViewModel;
use crate::domain::a003_product::ui::form_fields::ProductFormFields;
use crate::shared::components::{MessageBanner, PageHeader};
use crate::shared::file_utils::{format_size, reset_input, selected_files};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::system::session::use_session;

/// Single product upload with 3 to 20 images.
///
/// `on_created` runs after the success message has been shown for a moment.
#[component]
pub fn ProductCreate(on_created: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let session = use_session();
    let vm = ProductCreateViewModel::new();
    vm.lookups.load(session, vm.error);

    let image_grid = move || {
        vm.images
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, img)| {
                let caption = format!("{} ({})", img.file.name(), format_size(img.file.size()));
                view! {
                    <div class="image-preview">
                        <img src=img.preview alt="" />
                        <span class="image-preview__caption">{caption}</span>
                        <button class="image-preview__remove" on:click=move |_| vm.remove_image(index)>
                            {icon("close")}
                        </button>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <PageFrame page_id="a003_product--new" category=PAGE_CAT_DETAIL>
            <PageHeader title="Upload product">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    {icon("close")}
                    " Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || vm.saving.get())
                    on_click=move |_| vm.submit(session, on_created)
                >
                    {icon("upload")}
                    {move || if vm.saving.get() { " Uploading..." } else { " Create product" }}
                </Button>
            </PageHeader>

            <MessageBanner message=vm.error />
            <MessageBanner message=vm.success intent=MessageBarIntent::Success />

            <Card>
                <ProductFormFields form=vm.form lookups=vm.lookups />

                <div class="form__group">
                    <label class="form__label">
                        {format!("Product images * ({} to {}, JPEG/PNG/WebP, max 5 MB each)", MIN_IMAGES, MAX_IMAGES)}
                    </label>
                    <input
                        type="file"
                        multiple=true
                        accept=".jpeg,.jpg,.png,.webp"
                        on:change=move |ev| {
                            let files = selected_files(&ev);
                            reset_input(&ev);
                            vm.add_images(files);
                        }
                    />
                    <div class="image-count">
                        {move || format!("{} of {} images selected", vm.images.with(Vec::len), MAX_IMAGES)}
                    </div>
                    <div class="image-grid">{image_grid}</div>
                </div>
            </Card>
        </PageFrame>
    }
}
