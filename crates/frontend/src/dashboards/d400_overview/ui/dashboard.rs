use crate::dashboards::d400_overview::api;
use crate::shared::components::{MessageBanner, PageHeader, StatCard};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use crate::system::session::use_session;
use contracts::dashboards::d400_overview::{OverviewStats, ACTIVE_WINDOW_DAYS};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Overview dashboard: owner and product totals
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let session = use_session();
    let (stats, set_stats) = signal(None::<OverviewStats>);
    let (loading, set_loading) = signal(false);
    let error = RwSignal::new(None::<String>);

    let load = move || {
        set_loading.set(true);
        error.set(None);
        let client = session.client();
        spawn_local(async move {
            match api::fetch_overview(&client).await {
                Ok(data) => set_stats.set(Some(data)),
                Err(e) => {
                    log::error!("Failed to load D400 overview: {}", e);
                    error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    load();

    let owners = Signal::derive(move || stats.get().map(|s| s.total_business_owners as u64));
    let products = Signal::derive(move || stats.get().map(|s| s.total_products));
    let active = Signal::derive(move || stats.get().map(|s| s.active_business_owners as u64));
    let active_subtitle = Signal::derive(move || {
        stats.get().map(|s| {
            format!(
                "{}% seen in the last {} days",
                s.active_share(),
                ACTIVE_WINDOW_DAYS
            )
        })
    });

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Dashboard" subtitle="Marketplace at a glance".to_string()>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || loading.get())
                    on_click=move |_| load()
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <MessageBanner message=error />

            <div class="stat-grid">
                <StatCard label="Total business owners" icon_name="store" value=owners />
                <StatCard label="Total products" icon_name="package" value=products />
                <StatCard
                    label="Active owners"
                    icon_name="activity"
                    value=active
                    subtitle=active_subtitle
                />
            </div>
        </PageFrame>
    }
}
