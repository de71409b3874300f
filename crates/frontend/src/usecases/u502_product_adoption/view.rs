use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_product_adoption::ProductAdoption as Adoption;
use leptos::prelude::*;
use thaw::*;

use super::adopt_dialog::AdoptDialog;
use super::adopted_panel::AdoptedPanel;
use super::available_panel::AvailablePanel;
use super::manage_dialog::ManageDialog;
use super::view_model::{AdoptionTab, AdoptionViewModel};
use crate::shared::components::{MessageBanner, PageHeader};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_USECASE};
use crate::system::session::use_session;

/// Product adoption: available catalog products and the adopted list, each
/// with its own filters and pagination
#[component]
#[allow(non_snake_case)]
pub fn ProductAdoption() -> impl IntoView {
    let session = use_session();
    let vm = AdoptionViewModel::new();
    vm.load_weights(session);
    vm.load_available(session);

    let tab_button = move |tab: AdoptionTab, label: &'static str| {
        let total = move || match tab {
            AdoptionTab::Available => vm.available_page.with(|p| p.total_products),
            AdoptionTab::Adopted => vm.adopted_page.with(|p| p.total_products),
        };
        view! {
            <Button
                appearance=Signal::derive(move || {
                    if vm.tab.get() == tab {
                        ButtonAppearance::Primary
                    } else {
                        ButtonAppearance::Secondary
                    }
                })
                on_click=move |_| vm.switch_tab(session, tab)
            >
                {label}
                " "
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                    {move || total().to_string()}
                </Badge>
            </Button>
        }
    };

    view! {
        <PageFrame page_id=format!("{}--usecase", Adoption::full_name()) category=PAGE_CAT_USECASE>
            <PageHeader title=Adoption::display_name() subtitle=Adoption::description().to_string()>
                {move || vm.loading.get().then(|| view! { <Spinner size=SpinnerSize::Small /> })}
            </PageHeader>

            <MessageBanner message=vm.error />
            <MessageBanner message=vm.success intent=MessageBarIntent::Success />

            <Flex>
                {tab_button(AdoptionTab::Available, "Available Products")}
                {tab_button(AdoptionTab::Adopted, "My Products")}
            </Flex>

            {move || match vm.tab.get() {
                AdoptionTab::Available => view! { <AvailablePanel vm=vm session=session /> }.into_any(),
                AdoptionTab::Adopted => view! { <AdoptedPanel vm=vm session=session /> }.into_any(),
            }}

            <AdoptDialog vm=vm session=session />
            <ManageDialog vm=vm session=session />
        </PageFrame>
    }
}
