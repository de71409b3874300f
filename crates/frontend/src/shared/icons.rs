use leptos::prelude::*;

/// Inline SVG icon by name; unknown names render a neutral circle
pub fn icon(name: &str) -> AnyView {
    match name {
        "bar-chart" => outline(view! { <path d="M12 20V10"/><path d="M18 20V4"/><path d="M6 20v-4"/> }),
        "store" => outline(view! { <path d="M3 9l1-5h16l1 5"/><path d="M4 9v11h16V9"/><path d="M9 20v-6h6v6"/> }),
        "truck" => outline(view! { <path d="M3 7h13v10H3z"/><path d="M16 10h3l2 3v4h-5z"/><circle cx="7.5" cy="18" r="1.5"/><circle cx="18.5" cy="18" r="1.5"/> }),
        "package" => outline(view! { <path d="M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z"/><path d="M3.27 6.96 12 12l8.73-5.04"/><path d="M12 22V12"/> }),
        "upload" => outline(view! { <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="17 8 12 3 7 8"/><path d="M12 3v12"/> }),
        "download" => outline(view! { <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="7 10 12 15 17 10"/><path d="M12 15V3"/> }),
        "shopping-cart" => outline(view! { <circle cx="9" cy="21" r="1"/><circle cx="20" cy="21" r="1"/><path d="M1 1h4l2.68 12.39a2 2 0 0 0 2 1.61h7.72a2 2 0 0 0 2-1.61L23 6H6"/> }),
        "users" => outline(view! { <path d="M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M23 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/> }),
        "user" => outline(view! { <path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/> }),
        "activity" => outline(view! { <polyline points="22 12 18 12 15 21 9 3 6 12 2 12"/> }),
        "plus" => outline(view! { <path d="M12 5v14"/><path d="M5 12h14"/> }),
        "refresh" => outline(view! { <polyline points="23 4 23 10 17 10"/><polyline points="1 20 1 14 7 14"/><path d="M3.51 9a9 9 0 0 1 14.85-3.36L23 10M1 14l4.64 4.36A9 9 0 0 0 20.49 15"/> }),
        "delete" => outline(view! { <polyline points="3 6 5 6 21 6"/><path d="M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6"/><path d="M10 11v6"/><path d="M14 11v6"/><path d="M9 6V4a1 1 0 0 1 1-1h4a1 1 0 0 1 1 1v2"/> }),
        "edit" => outline(view! { <path d="M12 20h9"/><path d="M16.5 3.5a2.12 2.12 0 0 1 3 3L7 19l-4 1 1-4z"/> }),
        "eye" => outline(view! { <path d="M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z"/><circle cx="12" cy="12" r="3"/> }),
        "save" => outline(view! { <path d="M19 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11l5 5v11a2 2 0 0 1-2 2z"/><polyline points="17 21 17 13 7 13 7 21"/><polyline points="7 3 7 8 15 8"/> }),
        "close" => outline(view! { <path d="M18 6 6 18"/><path d="M6 6l12 12"/> }),
        "check" => outline(view! { <polyline points="20 6 9 17 4 12"/> }),
        "search" => outline(view! { <circle cx="11" cy="11" r="8"/><path d="M21 21l-4.35-4.35"/> }),
        "key" => outline(view! { <circle cx="7.5" cy="15.5" r="5.5"/><path d="M11.5 11.5 21 2"/><path d="M16 7l3 3"/> }),
        "log-out" => outline(view! { <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"/><polyline points="16 17 21 12 16 7"/><path d="M21 12H9"/> }),
        "file-text" => outline(view! { <path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/><polyline points="14 2 14 8 20 8"/><path d="M16 13H8"/><path d="M16 17H8"/> }),
        "panel-left-close" => outline(view! { <rect x="3" y="3" width="18" height="18" rx="2"/><path d="M9 3v18"/><path d="M16 15l-3-3 3-3"/> }),
        "panel-left-open" => outline(view! { <rect x="3" y="3" width="18" height="18" rx="2"/><path d="M9 3v18"/><path d="M14 9l3 3-3 3"/> }),
        "chevron-left" => outline(view! { <polyline points="15 18 9 12 15 6"/> }),
        "chevron-right" => outline(view! { <polyline points="9 18 15 12 9 6"/> }),
        "chevrons-left" => outline(view! { <polyline points="11 17 6 12 11 7"/><polyline points="18 17 13 12 18 7"/> }),
        "chevrons-right" => outline(view! { <polyline points="13 17 18 12 13 7"/><polyline points="6 17 11 12 6 7"/> }),
        "arrow-up" => outline(view! { <path d="M12 19V5"/><polyline points="5 12 12 5 19 12"/> }),
        "arrow-down" => outline(view! { <path d="M12 5v14"/><polyline points="19 12 12 19 5 12"/> }),
        _ => outline(view! { <circle cx="12" cy="12" r="10"/> }),
    }
}

/// 16px stroked frame shared by every icon
fn outline(shapes: impl IntoView + 'static) -> AnyView {
    view! {
        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {shapes}
        </svg>
    }
    .into_any()
}
