use leptos::prelude::*;
use thaw::*;

/// Dismissable message banner bound to an optional message signal.
///
/// Renders nothing while the signal is `None`; the close button resets it.
#[component]
pub fn MessageBanner(
    message: RwSignal<Option<String>>,
    #[prop(optional)] intent: Option<MessageBarIntent>,
) -> impl IntoView {
    let intent = intent.unwrap_or(MessageBarIntent::Error);
    move || {
        message.get().map(|text| {
            view! {
                <MessageBar intent=intent.clone()>
                    <MessageBarBody>
                        <div style="display: flex; align-items: flex-start; justify-content: space-between; gap: 12px;">
                            <span style="white-space: pre-line;">{text}</span>
                            <Button
                                appearance=ButtonAppearance::Transparent
                                size=ButtonSize::Small
                                on_click=move |_| message.set(None)
                            >
                                "Dismiss"
                            </Button>
                        </div>
                    </MessageBarBody>
                </MessageBar>
            }
        })
    }
}
