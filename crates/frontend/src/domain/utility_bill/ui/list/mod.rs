use crate::domain::utility_bill::ui::details::UtilityBillDetails;
use crate::shared::api_utils::api_base;
use contracts::domain::utility_bill::aggregate::UtilityBill;
use leptos::prelude::*;
use std::rc::Rc;

#[derive(Clone, Debug)]
pub struct UtilityBillRow {
    pub id: i64,
    pub billing_type: &'static str,
    pub account_no: u64,
    pub address: String,
    pub meter_no: String,
    pub unit_price: f64,
}

impl From<UtilityBill> for UtilityBillRow {
    fn from(bill: UtilityBill) -> Self {
        Self {
            id: bill.id.unwrap_or_default(),
            billing_type: bill.billing_type.as_str(),
            account_no: bill.billing_acc_no,
            address: bill.address,
            meter_no: bill.meter_no,
            unit_price: bill.unit_price,
        }
    }
}

async fn fetch_utility_bills() -> Result<Vec<UtilityBill>, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = format!("{}/utilitybill/getAll", api_base());
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

async fn delete_utility_bill(id: i64) -> Result<(), String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("DELETE");
    opts.set_mode(RequestMode::Cors);

    let url = format!("{}/utilitybill/delete/{}", api_base(), id);
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

type DetailsTarget = Option<Option<i64>>;

#[component]
#[allow(non_snake_case)]
pub fn UtilityBillList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<UtilityBillRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (details, set_details) = signal::<DetailsTarget>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_utility_bills().await {
                Ok(v) => {
                    let rows: Vec<UtilityBillRow> = v.into_iter().map(Into::into).collect();
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
                win.confirm_with_message("Delete this utility bill?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match delete_utility_bill(id).await {
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
                    <h1 class="header__title">"Utility Bills"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| set_details.set(Some(None))>
                        "New Utility Bill"
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
                        <th>"Type"</th>
                        <th>"Account No"</th>
                        <th>"Address"</th>
                        <th>"Meter No"</th>
                        <th>"Unit Price"</th>
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
                                    <td>{row.billing_type}</td>
                                    <td>{row.account_no.to_string()}</td>
                                    <td>{row.address}</td>
                                    <td>{row.meter_no}</td>
                                    <td>{format!("{:.2}", row.unit_price)}</td>
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
                                <UtilityBillDetails id=target on_saved=on_saved on_cancel=on_cancel />
                            </div>
                        </div>
                    }
                })
            }}
        </div>
    }
}
