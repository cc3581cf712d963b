//! Add-task form shown from the job list. Small enough to keep the state
//! and the save call in the component itself.

use contracts::domain::job::task::{Task, TaskDraft};
use contracts::shared::form_session::{FormSession, SaveError};
use leptos::prelude::*;
use std::rc::Rc;

use crate::shared::api_utils::api_base;

async fn save_task(job_id: i64, task: &Task) -> Result<(), SaveError> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let json_data = serde_json::to_string(task).map_err(|_| SaveError::general())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    let body = wasm_bindgen::JsValue::from_str(&json_data);
    opts.set_body(&body);

    let url = format!("{}/api/jobs/{}/task/save", api_base(), job_id);
    let request =
        Request::new_with_str_and_init(&url, &opts).map_err(|_| SaveError::general())?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|_| SaveError::general())?;

    let window = web_sys::window().ok_or_else(SaveError::general)?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| SaveError::general())?;
    let resp: Response = resp_value.dyn_into().map_err(|_| SaveError::general())?;

    if !resp.ok() {
        let body = match resp.text() {
            Ok(promise) => wasm_bindgen_futures::JsFuture::from(promise)
                .await
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };
        return Err(SaveError::from_response_body(&body));
    }
    Ok(())
}

#[component]
pub fn TaskForm(job_id: i64, on_saved: Rc<dyn Fn(())>, on_cancel: Rc<dyn Fn(())>) -> impl IntoView {
    let session = RwSignal::new(FormSession::create(TaskDraft::new()));

    let submit = {
        let on_saved = on_saved.clone();
        move |_| {
            let mut claimed = None;
            session.update(|s| claimed = s.begin_submit());
            let Some(draft) = claimed else {
                return;
            };
            let task = draft.to_record(Some(job_id));
            let on_saved_cb = on_saved.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = save_task(job_id, &task).await;
                let saved = outcome.is_ok();
                session.update(|s| s.finish_submit(outcome));
                if saved {
                    (on_saved_cb)(());
                }
            });
        }
    };

    view! {
        <div class="details-container task-form">
            <div class="details-header">
                <h3>"Add Task"</h3>
            </div>

            {move || {
                session
                    .get()
                    .general_error()
                    .map(|e| view! { <div class="error">{e.to_string()}</div> })
            }}

            <div class="details-form">
                <div class="form-group">
                    <label for="task-description">"Description"</label>
                    <textarea
                        id="task-description"
                        rows="2"
                        prop:value=move || session.get().draft().description.clone()
                        on:input=move |ev| {
                            session.update(|s| {
                                s.update(|d| d.description = event_target_value(&ev));
                                s.clear_field_error("description");
                            });
                        }
                        placeholder="Describe the work"
                    />
                    {move || {
                        session
                            .get()
                            .error("description")
                            .map(|e| view! { <p class="field-error">{e.to_string()}</p> })
                    }}
                </div>

                <div class="form-group">
                    <label for="task-cost">"Cost"</label>
                    <input
                        type="number"
                        id="task-cost"
                        step="0.01"
                        prop:value=move || session.get().draft().cost.to_string()
                        on:input=move |ev| {
                            session.update(|s| {
                                s.update(|d| d.set_cost_input(&event_target_value(&ev)));
                                s.clear_field_error("cost");
                            });
                        }
                    />
                    {move || {
                        session
                            .get()
                            .error("cost")
                            .map(|e| view! { <p class="field-error">{e.to_string()}</p> })
                    }}
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click=submit
                    disabled=move || session.get().is_submitting()
                >
                    {move || if session.get().is_submitting() { "Saving..." } else { "Add Task" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| (on_cancel)(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
