// File: src/swal.rs
// Purpose: Binding to the page's SweetAlert2 global

use js_sys::Promise;
use member_validation_core::{Alert, PageError};
use wasm_bindgen::prelude::*;

use crate::js_error;

#[wasm_bindgen]
extern "C" {
    /// `Swal.fire(options)`; the promise resolves when the alert closes
    #[wasm_bindgen(js_namespace = Swal, js_name = fire, catch)]
    fn swal_fire(options: &JsValue) -> Result<Promise, JsValue>;
}

/// Open the alert and hand back its dismissal promise
pub fn fire(alert: &Alert) -> Result<Promise, PageError> {
    let options = serde_wasm_bindgen::to_value(alert)
        .map_err(|e| PageError::Alert(format!("Failed to serialize alert: {}", e)))?;

    swal_fire(&options).map_err(|e| PageError::Alert(js_error(&e)))
}
