use crate::layout::PageContext;
use crate::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Active-page state for the sidebar navigation, shared via context.
    provide_context(PageContext::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
