use contracts::system::auth::RegisterRequest;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app_shell::AuthScreen;
use crate::system::auth::api;
use crate::system::session::use_session;

/// Pause on the success message before returning to the login screen
const BACK_TO_LOGIN_MS: u32 = 2000;

#[component]
pub fn RegisterPage(screen: RwSignal<AuthScreen>) -> impl IntoView {
    let session = use_session();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let admin_secret = RwSignal::new(String::new());
    let error_message = RwSignal::new(Option::<String>::None);
    let succeeded = RwSignal::new(false);
    let is_loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error_message.set(None);
        succeeded.set(false);

        let request = RegisterRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            admin_secret: admin_secret.get_untracked(),
        };
        if let Err(e) = request.validate(&confirm.get_untracked()) {
            error_message.set(Some(e));
            return;
        }

        is_loading.set(true);
        let client = session.client();
        spawn_local(async move {
            match api::register(&client, &request).await {
                Ok(()) => {
                    log::info!("Registered admin {}", request.email);
                    succeeded.set(true);
                    is_loading.set(false);
                    TimeoutFuture::new(BACK_TO_LOGIN_MS).await;
                    screen.set(AuthScreen::Login);
                }
                Err(e) => {
                    error_message.set(Some(e));
                    is_loading.set(false);
                }
            }
        });
    };

    let field = move |id: &'static str, label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    type=kind
                    id=id
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                    disabled=move || is_loading.get()
                />
            </div>
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Grocery Admin"</h1>
                <h2>"Register Admin Account"</h2>

                {move || error_message.get().map(|e| view! { <div class="error-message">{e}</div> })}
                <Show when=move || succeeded.get()>
                    <div class="success-message">"Registration successful! Redirecting to login..."</div>
                </Show>

                <form on:submit=on_submit>
                    {field("email", "Email address", "email", email)}
                    {field("password", "Password", "password", password)}
                    {field("confirm", "Confirm password", "password", confirm)}
                    {field("admin-secret", "Admin secret", "password", admin_secret)}

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>

                <div class="login-info">
                    <a
                        href="#"
                        on:click=move |ev| {
                            ev.prevent_default();
                            screen.set(AuthScreen::Login);
                        }
                    >
                        "Already have an account? Sign in"
                    </a>
                </div>
            </div>
        </div>
    }
}
