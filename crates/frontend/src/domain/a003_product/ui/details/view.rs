use leptos::prelude::*;
use thaw::*;

use super::view_model::ProductDetailsViewModel;
use crate::domain::a003_product::ui::form_fields::ProductFormFields;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_label, product_detail_key, tab_label_for_key};
use crate::shared::components::{MessageBanner, PageHeader};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::system::session::use_session;

#[component]
pub fn ProductDetails(id: String, on_close: Callback<()>) -> impl IntoView {
    let session = use_session();
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let vm = ProductDetailsViewModel::new();
    vm.load(session, id.clone());

    let tab_key = product_detail_key(&id);
    Effect::new(move |_| {
        if let Some(name) = vm.product.with(|p| p.as_ref().map(|p| p.product_name.clone())) {
            tabs_store.update_tab_title(&tab_key, &detail_tab_label("Product", &name));
        }
    });

    let on_saved = Callback::new(move |_| {
        on_close.run(());
        tabs_store.open_tab("a003_product", tab_label_for_key("a003_product"));
    });
    let save = move |_| vm.save(session, id.clone(), on_saved);

    view! {
        <PageFrame page_id="a003_product--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title="Edit product">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    {icon("close")}
                    " Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || vm.saving.get() || vm.loading.get())
                    on_click=save
                >
                    {icon("save")}
                    {move || if vm.saving.get() { " Saving..." } else { " Save changes" }}
                </Button>
            </PageHeader>

            <MessageBanner message=vm.error />
            <MessageBanner message=vm.success intent=MessageBarIntent::Success />

            <Show
                when=move || !vm.loading.get()
                fallback=|| view! { <Flex justify=FlexJustify::Center><Spinner /></Flex> }
            >
                <Show
                    when=move || vm.product.with(Option::is_some)
                    fallback=|| view! { <div class="empty-state">"Product not found"</div> }
                >
                    <Card>
                        {move || vm.product.with(|p| p.as_ref().map(|p| {
                            p.cloudinary_urls.iter().map(|img| {
                                let url = img.url.clone();
                                view! { <img class="details__image" src=url alt="Product image" /> }
                            }).collect_view()
                        }))}
                        <ProductFormFields form=vm.form lookups=vm.lookups />
                    </Card>
                </Show>
            </Show>
        </PageFrame>
    }
}
