use contracts::domain::employee::aggregate::Employee;
use contracts::domain::job::aggregate::Job;
use contracts::domain::vehicle::aggregate::Vehicle;
use contracts::shared::form_session::SaveError;

use crate::shared::api_utils::api_base;

async fn fetch_json(url: &str) -> Result<String, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

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
    text.as_string().ok_or_else(|| "bad text".to_string())
}

pub async fn fetch_vehicles() -> Result<Vec<Vehicle>, String> {
    let text = fetch_json(&format!("{}/vehicle/getAll", api_base())).await?;
    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}

pub async fn fetch_employees() -> Result<Vec<Employee>, String> {
    let text = fetch_json(&format!("{}/api/dashboard/employee/getAll", api_base())).await?;
    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}

pub async fn create(job: &Job) -> Result<(), SaveError> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let json_data = serde_json::to_string(job).map_err(|_| SaveError::general())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    let body = wasm_bindgen::JsValue::from_str(&json_data);
    opts.set_body(&body);

    let url = format!("{}/api/jobs/assign", api_base());
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
