use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub role: Option<String>,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // Restore the session from localStorage on mount; the token is treated
    // as already-resolved context, no revalidation round-trip.
    let (auth_state, set_auth_state) = signal(AuthState {
        token: storage::get_token(),
        role: storage::get_role(),
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}
