//! Sidebar navigation for the admin dashboard.

use super::{use_page, ActivePage};
use crate::system::auth::context::use_auth;
use crate::system::auth::storage;
use leptos::prelude::*;

const MENU_ITEMS: [(&str, ActivePage); 3] = [
    ("Employees", ActivePage::Employees),
    ("Jobs", ActivePage::Jobs),
    ("Utility Bills", ActivePage::UtilityBills),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let page = use_page();
    let (_, set_auth_state) = use_auth();

    let logout = move |_| {
        storage::clear_session();
        set_auth_state.set(Default::default());
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <h2>"Prabhath Motors"</h2>
                <span class="sidebar__subtitle">"Admin Dashboard"</span>
            </div>
            <nav class="sidebar__nav">
                {MENU_ITEMS
                    .into_iter()
                    .map(|(label, target)| {
                        view! {
                            <button
                                class="sidebar__item"
                                class=("sidebar__item--active", move || page.active.get() == target)
                                on:click=move |_| page.active.set(target)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="sidebar__footer">
                <button class="sidebar__item" on:click=logout>
                    "Log Out"
                </button>
            </div>
        </aside>
    }
}
