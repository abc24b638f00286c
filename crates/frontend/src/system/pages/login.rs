use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::system::auth::context::{do_login, use_auth, use_session};
use crate::system::auth::api;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (register_mode, set_register_mode) = signal(false);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (info_message, set_info_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let auth_state = use_auth();
    let session = StoredValue::new(use_session());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();
        let email_val = email.get();
        let registering = register_mode.get();

        set_is_loading.set(true);
        set_error_message.set(None);
        set_info_message.set(None);

        spawn_local(async move {
            if registering {
                match api::register(username_val.clone(), email_val, password_val).await {
                    Ok(user) => {
                        set_register_mode.set(false);
                        set_info_message.set(Some(format!(
                            "Account \"{}\" created, you can log in now",
                            user.username
                        )));
                    }
                    Err(e) => set_error_message.set(Some(format!("Registration failed: {}", e))),
                }
            } else {
                let session = session.get_value();
                if let Err(e) = do_login(&session, auth_state, username_val, password_val).await {
                    set_error_message.set(Some(format!("Login failed: {}", e)));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Inventory Dashboard"</h1>
                <h2>{move || if register_mode.get() { "Create account" } else { "Sign in" }}</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>
                <Show when=move || info_message.get().is_some()>
                    <div class="info-message">
                        {move || info_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <Show when=move || register_mode.get()>
                        <div class="form-group">
                            <label for="email">"Email"</label>
                            <input
                                type="email"
                                id="email"
                                value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>
                    </Show>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || match (is_loading.get(), register_mode.get()) {
                            (true, _) => "Please wait...",
                            (false, true) => "Register",
                            (false, false) => "Log in",
                        }}
                    </button>
                </form>

                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| {
                        set_error_message.set(None);
                        set_register_mode.update(|mode| *mode = !*mode);
                    }
                >
                    {move || if register_mode.get() { "Back to sign in" } else { "Create an account" }}
                </Button>
            </div>
        </div>
    }
}
