use crate::domain::employee::ui::details::EmployeeDetails;
use crate::shared::api_utils::api_base;
use crate::shared::date_utils::format_date;
use contracts::domain::employee::aggregate::Employee;
use leptos::prelude::*;
use std::rc::Rc;

#[derive(Clone, Debug)]
pub struct EmployeeRow {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub contact: String,
    pub nic: String,
    pub dob: String,
    pub gender: String,
    pub salary: f64,
}

impl From<Employee> for EmployeeRow {
    fn from(e: Employee) -> Self {
        Self {
            id: e.emp_id.unwrap_or_default(),
            name: e.display_name(),
            role: e.role,
            contact: e.contact,
            nic: e.nic,
            dob: format_date(&e.dob),
            gender: e.gender,
            salary: e.salary,
        }
    }
}

async fn fetch_employees() -> Result<Vec<Employee>, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = format!("{}/api/dashboard/employee/getAll", api_base());
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}

async fn delete_employee(id: i64) -> Result<(), String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("DELETE");
    opts.set_mode(RequestMode::Cors);

    let url = format!("{}/api/dashboard/employee/delete/{}", api_base(), id);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(())
}

/// Modal target: `None` = closed, `Some(None)` = create, `Some(Some(id))` =
/// edit that employee.
type DetailsTarget = Option<Option<i64>>;

#[component]
#[allow(non_snake_case)]
pub fn EmployeeList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<EmployeeRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (details, set_details) = signal::<DetailsTarget>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_employees().await {
                Ok(v) => {
                    let rows: Vec<EmployeeRow> = v.into_iter().map(Into::into).collect();
                    set_items.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let handle_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message("Delete this employee?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match delete_employee(id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Employees"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| set_details.set(Some(None))>
                        "New Employee"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Role"</th>
                        <th>"Contact"</th>
                        <th>"NIC"</th>
                        <th>"Date of Birth"</th>
                        <th>"Gender"</th>
                        <th>"Salary"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|row| row.id
                        children=move |row| {
                            let id = row.id;
                            view! {
                                <tr>
                                    <td>{row.name}</td>
                                    <td>{row.role}</td>
                                    <td>{row.contact}</td>
                                    <td>{row.nic}</td>
                                    <td>{row.dob}</td>
                                    <td>{row.gender}</td>
                                    <td>{format!("{:.2}", row.salary)}</td>
                                    <td class="data-table__actions">
                                        <button
                                            class="button button--small"
                                            on:click=move |_| set_details.set(Some(Some(id)))
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="button button--small button--danger"
                                            on:click=move |_| handle_delete(id)
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            {move || {
                details.get().map(|target| {
                    let on_saved = Rc::new(move |_| {
                        set_details.set(None);
                        fetch();
                    });
                    let on_cancel = Rc::new(move |_| set_details.set(None));
                    view! {
                        <div class="modal-overlay">
                            <div class="modal-surface">
                                <EmployeeDetails id=target on_saved=on_saved on_cancel=on_cancel />
                            </div>
                        </div>
                    }
                })
            }}
        </div>
    }
}
