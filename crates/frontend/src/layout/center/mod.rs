mod tab_bar;

use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

pub use tab_bar::TabBar;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let has_tabs = move || tabs_store.opened.with(|tabs| !tabs.is_empty());

    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <Show when=has_tabs>
                <TabBar />
            </Show>
            {children()}
        </div>
    }
}
