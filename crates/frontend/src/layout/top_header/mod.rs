//! Top bar: sidebar toggle, title, signed-in admin, admin key and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::pages::admin_key_dialog::AdminKeyDialog;
use crate::system::session::use_session;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();
    let key_dialog_open = RwSignal::new(false);

    let is_sidebar_visible = move || ctx.left_open.get();

    let admin_email = move || {
        session
            .admin()
            .map(|a| a.email)
            .unwrap_or_else(|| "Admin".to_string())
    };

    let logout = move |_| {
        log::info!("Signing out");
        session.sign_out();
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Grocery Admin"</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| key_dialog_open.set(true)
                    title="Admin key"
                >
                    {icon("key")}
                </button>

                <div class="top-header__user">
                    {icon("user")}
                    <span>{admin_email}</span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>

            <AdminKeyDialog open=key_dialog_open />
        </div>
    }
}
