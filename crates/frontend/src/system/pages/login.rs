use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::{api, context::use_auth, context::AuthState, storage};

#[derive(Clone, Copy, PartialEq)]
enum AuthMode {
    Login,
    Register,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let mode = RwSignal::new(AuthMode::Login);

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Prabhath Motors"</h1>
                {move || match mode.get() {
                    AuthMode::Login => view! { <LoginForm mode=mode /> }.into_any(),
                    AuthMode::Register => view! { <RegisterForm mode=mode /> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn LoginForm(mode: RwSignal<AuthMode>) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(email_val, password_val).await {
                Ok(response) => match response.token {
                    Some(token) => {
                        let role = response.role.unwrap_or_default();
                        storage::save_session(&token, &role);
                        // switches the router over to the main shell
                        set_auth_state.set(AuthState {
                            token: Some(token),
                            role: Some(role),
                        });
                        set_is_loading.set(false);
                    }
                    None => {
                        set_error_message.set(Some("Invalid email or password".to_string()));
                        set_is_loading.set(false);
                    }
                },
                Err(_) => {
                    set_error_message.set(Some("Invalid email or password".to_string()));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <h2>"Log In"</h2>

        <Show when=move || error_message.get().is_some()>
            <div class="error-message">{move || error_message.get().unwrap_or_default()}</div>
        </Show>

        <form on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Email"</label>
                <input
                    type="email"
                    id="email"
                    placeholder="Enter your email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    required
                    disabled=move || is_loading.get()
                />
            </div>

            <div class="form-group">
                <label for="password">"Password"</label>
                <input
                    type="password"
                    id="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    required
                    disabled=move || is_loading.get()
                />
            </div>

            <button type="submit" class="btn btn-primary" disabled=move || is_loading.get()>
                {move || if is_loading.get() { "Logging in..." } else { "Log In" }}
            </button>
        </form>

        <p class="login-switch">
            "No account? "
            <a href="#" on:click=move |ev| {
                ev.prevent_default();
                mode.set(AuthMode::Register);
            }>"Register"</a>
        </p>
    }
}

#[component]
fn RegisterForm(mode: RwSignal<AuthMode>) -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let email_val = email.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::register(username_val, email_val, password_val).await {
                Ok(()) => {
                    set_is_loading.set(false);
                    mode.set(AuthMode::Login);
                }
                Err(e) => {
                    set_error_message.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <h2>"Register"</h2>

        <Show when=move || error_message.get().is_some()>
            <div class="error-message">{move || error_message.get().unwrap_or_default()}</div>
        </Show>

        <form on:submit=on_submit>
            <div class="form-group">
                <label for="reg-username">"Username"</label>
                <input
                    type="text"
                    id="reg-username"
                    placeholder="Choose a username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                    required
                    disabled=move || is_loading.get()
                />
            </div>

            <div class="form-group">
                <label for="reg-email">"Email"</label>
                <input
                    type="email"
                    id="reg-email"
                    placeholder="Enter your email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    required
                    disabled=move || is_loading.get()
                />
            </div>

            <div class="form-group">
                <label for="reg-password">"Password"</label>
                <input
                    type="password"
                    id="reg-password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    required
                    disabled=move || is_loading.get()
                />
            </div>

            <button type="submit" class="btn btn-primary" disabled=move || is_loading.get()>
                {move || if is_loading.get() { "Registering..." } else { "Register" }}
            </button>
        </form>

        <p class="login-switch">
            "Already registered? "
            <a href="#" on:click=move |ev| {
                ev.prevent_default();
                mode.set(AuthMode::Login);
            }>"Log in"</a>
        </p>
    }
}
