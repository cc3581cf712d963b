use crate::domain::job::ui::details::JobDetails;
use crate::domain::job::ui::task_form::TaskForm;
use crate::shared::api_utils::api_base;
use contracts::domain::job::aggregate::Job;
use leptos::prelude::*;
use std::rc::Rc;

#[derive(Clone, Debug)]
pub struct JobRow {
    pub id: i64,
    pub job_id: String,
    pub registration_no: String,
    pub section: String,
    pub assigned_employee: String,
    pub owner_name: String,
    pub status: String,
    pub total_cost: f64,
}

impl From<Job> for JobRow {
    fn from(job: Job) -> Self {
        Self {
            id: job.id.unwrap_or_default(),
            job_id: job.job_id,
            registration_no: job.vehicle_registration_number,
            section: job.service_section.label(),
            assigned_employee: job.assigned_employee,
            owner_name: job.owner_name,
            status: job.status,
            total_cost: job.total_cost,
        }
    }
}

async fn fetch_ongoing_jobs() -> Result<Vec<Job>, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = format!("{}/api/jobs/ongoing", api_base());
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

async fn delete_job(id: i64) -> Result<(), String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("DELETE");
    opts.set_mode(RequestMode::Cors);

    let url = format!("{}/api/jobs/{}", api_base(), id);
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

#[component]
#[allow(non_snake_case)]
pub fn JobList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<JobRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_create, set_show_create) = signal(false);
    let (task_target, set_task_target) = signal::<Option<i64>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_ongoing_jobs().await {
                Ok(v) => {
                    let rows: Vec<JobRow> = v.into_iter().map(Into::into).collect();
                    set_items.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let handle_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|win| win.confirm_with_message("Delete this job?").unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match delete_job(id).await {
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
                    <h1 class="header__title">"Ongoing Jobs"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| set_show_create.set(true)>
                        "New Job"
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
                        <th>"Job ID"</th>
                        <th>"Vehicle"</th>
                        <th>"Section"</th>
                        <th>"Assigned To"</th>
                        <th>"Owner"</th>
                        <th>"Status"</th>
                        <th>"Total Cost"</th>
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
                                    <td>{row.job_id}</td>
                                    <td>{row.registration_no}</td>
                                    <td>{row.section}</td>
                                    <td>{row.assigned_employee}</td>
                                    <td>{row.owner_name}</td>
                                    <td>{row.status}</td>
                                    <td>{format!("{:.2}", row.total_cost)}</td>
                                    <td class="data-table__actions">
                                        <button
                                            class="button button--small"
                                            on:click=move |_| set_task_target.set(Some(id))
                                        >
                                            "Add Task"
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
                show_create.get().then(|| {
                    let on_saved = Rc::new(move |_| {
                        set_show_create.set(false);
                        fetch();
                    });
                    let on_cancel = Rc::new(move |_| set_show_create.set(false));
                    view! {
                        <div class="modal-overlay">
                            <div class="modal-surface">
                                <JobDetails on_saved=on_saved on_cancel=on_cancel />
                            </div>
                        </div>
                    }
                })
            }}

            {move || {
                task_target.get().map(|job_id| {
                    let on_saved = Rc::new(move |_| {
                        set_task_target.set(None);
                        fetch();
                    });
                    let on_cancel = Rc::new(move |_| set_task_target.set(None));
                    view! {
                        <div class="modal-overlay">
                            <div class="modal-surface modal-surface--narrow">
                                <TaskForm job_id=job_id on_saved=on_saved on_cancel=on_cancel />
                            </div>
                        </div>
                    }
                })
            }}
        </div>
    }
}
