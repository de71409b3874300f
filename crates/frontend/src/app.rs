use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::system::session::SessionContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Session is restored from localStorage before anything reads it.
    provide_context(SessionContext::restore());
    provide_context(AppGlobalContext::new());

    view! {
        <AppShell />
    }
}
