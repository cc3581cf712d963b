//! Small DOM helpers.

use wasm_bindgen::JsCast;

/// Move input focus to the element with the given id, if it exists. Used by
/// the segmented account-number inputs to hop to the next box.
pub fn focus_input(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if let Some(element) = element {
        if let Some(input) = element.dyn_ref::<web_sys::HtmlElement>() {
            let _ = input.focus();
        }
    }
}
