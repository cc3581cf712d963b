use contracts::domain::utility_bill::aggregate::UtilityBill;
use contracts::shared::form_session::SaveError;

use crate::shared::api_utils::api_base;

pub async fn fetch_by_id(id: i64) -> Result<UtilityBill, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = format!("{}/utilitybill/get/{}", api_base(), id);
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
    let data: UtilityBill = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(data)
}

pub async fn create(record: &UtilityBill) -> Result<(), SaveError> {
    send_record("POST", &format!("{}/utilitybill/save", api_base()), record).await
}

/// The update endpoint takes the id inside the record rather than the path.
pub async fn update(record: &UtilityBill) -> Result<(), SaveError> {
    send_record("PUT", &format!("{}/utilitybill/update", api_base()), record).await
}

async fn send_record(method: &str, url: &str, record: &UtilityBill) -> Result<(), SaveError> {
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
