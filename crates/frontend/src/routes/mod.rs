use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Everything behind the login gate: the shell renders the sidebar and the
/// active dashboard page.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <Shell />
        </Show>
    }
}
