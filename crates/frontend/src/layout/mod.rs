pub mod sidebar;

use crate::domain::employee::ui::list::EmployeeList;
use crate::domain::job::ui::list::JobList;
use crate::domain::utility_bill::ui::list::UtilityBillList;
use leptos::prelude::*;
use sidebar::Sidebar;

/// The dashboard sections reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePage {
    Employees,
    Jobs,
    UtilityBills,
}

/// Shared navigation state: which page the center pane shows.
#[derive(Clone, Copy)]
pub struct PageContext {
    pub active: RwSignal<ActivePage>,
}

impl PageContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(ActivePage::Employees),
        }
    }
}

pub fn use_page() -> PageContext {
    use_context::<PageContext>().expect("PageContext not found in context")
}

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +-----------------------------------+
/// |  Sidebar  |       Content        |
/// +-----------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let page = use_page();

    view! {
        <div class="app-layout">
            <div class="app-body">
                <Sidebar />
                <div class="app-main">
                    {move || match page.active.get() {
                        ActivePage::Employees => view! { <EmployeeList /> }.into_any(),
                        ActivePage::Jobs => view! { <JobList /> }.into_any(),
                        ActivePage::UtilityBills => view! { <UtilityBillList /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}
