use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Sidebar zone; collapsed by the top-bar toggle
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let collapsed = move || !ctx.left_open.get();

    view! {
        <aside data-zone="left" class="app-sidebar" class:hidden=collapsed aria-hidden=move || collapsed().to_string()>
            {children()}
        </aside>
    }
}
