//! Application shell: auth gate plus the main layout.
//!
//! - `AppShell` shows the login/register screens until a token is present
//! - `MainLayout` is the sidebar + tab workspace

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::{tab_label_for_key, TabPage};
use crate::layout::Shell;
use crate::system::pages::login::LoginPage;
use crate::system::pages::register::RegisterPage;
use crate::system::session::use_session;
use leptos::prelude::*;

/// Tab opened when the workspace starts empty
const HOME_TAB: &str = "d400_overview";

/// Which auth screen the gate shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScreen {
    Login,
    Register,
}

/// Main application layout with the sidebar and the tab workspace.
///
/// Syncs the active tab with the URL (`?active=...`).
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    tabs_store.init_router_integration();
    if tabs_store.opened.with_untracked(|tabs| tabs.is_empty()) {
        tabs_store.open_tab(HOME_TAB, tab_label_for_key(HOME_TAB));
    }

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                }.into_any()
            }
        />
    }
}

/// Auth gate.
///
/// Shows `LoginPage` (or `RegisterPage`) until the session holds a token,
/// then `MainLayout`.
#[component]
pub fn AppShell() -> impl IntoView {
    let session = use_session();
    let screen = RwSignal::new(AuthScreen::Login);

    let auth_fallback = move || match screen.get() {
        AuthScreen::Login => view! { <LoginPage screen=screen /> }.into_any(),
        AuthScreen::Register => view! { <RegisterPage screen=screen /> }.into_any(),
    };

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=auth_fallback
        >
            <MainLayout />
        </Show>
    }
}
