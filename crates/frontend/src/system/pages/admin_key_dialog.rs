use leptos::prelude::*;
use thaw::*;

use crate::system::session::use_session;

/// Dialog that stores the `x-admin-key` used for account endpoints.
///
/// Prefilled with the stored key each time it opens.
#[component]
pub fn AdminKeyDialog(
    open: RwSignal<bool>,
    #[prop(optional)] on_saved: Option<Callback<()>>,
) -> impl IntoView {
    let session = use_session();
    let key = RwSignal::new(String::new());

    Effect::new(move |_| {
        if open.get() {
            key.set(session.state.with_untracked(|s| s.admin_key.clone().unwrap_or_default()));
        }
    });

    let save = move |_| {
        session.set_admin_key(&key.get_untracked());
        open.set(false);
        if let Some(cb) = on_saved {
            cb.run(());
        }
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Admin Key Required"</DialogTitle>
                    <DialogContent>
                        <p>
                            "Please enter your admin key to access account data. "
                            "This key will be saved in your browser for future use."
                        </p>
                        <Input value=key input_type=InputType::Password placeholder="Admin key" />
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || key.get().trim().is_empty())
                            on_click=save
                        >
                            "Save"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
