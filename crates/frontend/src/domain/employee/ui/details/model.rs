use contracts::domain::employee::aggregate::Employee;
use contracts::shared::form_session::SaveError;

use crate::shared::api_utils::api_base;

pub async fn fetch_by_id(id: i64) -> Result<Employee, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = format!("{}/api/dashboard/employee/get/{}", api_base(), id);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if resp.status() == 404 {
        return Err("Not found".to_string());
    }
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: Employee = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(data)
}

pub async fn create(record: &Employee) -> Result<(), SaveError> {
    send_record("POST", &format!("{}/api/dashboard/employee/add", api_base()), record).await
}

pub async fn update(id: i64, record: &Employee) -> Result<(), SaveError> {
    send_record(
        "PUT",
        &format!("{}/api/dashboard/employee/update/{}", api_base(), id),
        record,
    )
    .await
}

/// POST/PUT a record. A non-2xx response body is classified by
/// [`SaveError::from_response_body`]: a field-error payload renders like
/// local validation, everything else collapses to the generic message.
async fn send_record(method: &str, url: &str, record: &Employee) -> Result<(), SaveError> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let json_data = serde_json::to_string(record).map_err(|_| SaveError::general())?;

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    let body = wasm_bindgen::JsValue::from_str(&json_data);
    opts.set_body(&body);

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|_| SaveError::general())?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|_| SaveError::general())?;
    request
        .headers()
        .set("Accept", "application/json")
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
