//! Member Validation WASM
//!
//! WebAssembly bindings for the member login and registration forms.
//! `attachLoginValidation` / `attachRegisterValidation` wire the validators to
//! the page; the quick checks expose the same rules to other scripts.
//!
//! # Example (JavaScript)
//! ```javascript
//! import init, { attachRegisterValidation } from './member_validation_wasm.js';
//!
//! await init();
//! attachRegisterValidation({ alert: { confirmButtonColor: '#0d6efd' } });
//! ```

use member_validation_core::{
    is_valid_password, is_valid_phone_number, is_valid_user_id, is_valid_user_name, normalize,
    Field, FieldAttrs, LoginForm, LoginValidator, PageError, PhoneNumber, RegisterForm,
    RegisterValidator, ValidationConfig, Violation,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod attach;
mod dom;
mod swal;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Validate the login form on submit and show any server-rendered error.
///
/// `config` is optional; omit it for the default alert styling.
#[wasm_bindgen(js_name = attachLoginValidation)]
pub fn attach_login_validation(config: JsValue) -> Result<(), JsValue> {
    let config = config_from_js(config)?;
    attach::when_ready(LoginValidator::new(&config)).map_err(to_js)
}

/// Intercept the registration form's submit, run every check in order and
/// submit only when all pass. Also shows any server-rendered error.
#[wasm_bindgen(js_name = attachRegisterValidation)]
pub fn attach_register_validation(config: JsValue) -> Result<(), JsValue> {
    let config = config_from_js(config)?;
    attach::when_ready(RegisterValidator::new(&config)).map_err(to_js)
}

/// Violation returned to JavaScript
#[derive(Serialize, Debug, Clone)]
pub struct FieldMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Field>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<&Violation> for FieldMessage {
    fn from(violation: &Violation) -> Self {
        Self {
            field: violation.field(),
            title: violation.to_string(),
            message: violation.detail().map(str::to_string),
        }
    }
}

/// Every failing registration check, one per field, in submission order
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validateRegisterForm('ab', 'validPass1!', 'validPass1!', '홍길동', '01012345678');
/// // [{ field: 'userId', title: '아이디 형식 오류', message: '아이디는 3~14자, ...' }]
/// ```
#[wasm_bindgen(js_name = validateRegisterForm)]
pub fn validate_register_form(
    user_id: &str,
    password: &str,
    confirm_password: &str,
    user_name: &str,
    phone_number: &str,
) -> Result<JsValue, JsValue> {
    let form = RegisterForm::new(user_id, password, confirm_password, user_name, phone_number);
    let messages: Vec<FieldMessage> = form.violations().iter().map(FieldMessage::from).collect();
    Ok(serde_wasm_bindgen::to_value(&messages)?)
}

/// Title of the first login violation, if any
#[wasm_bindgen(js_name = validateLoginForm)]
pub fn validate_login_form(user_id: &str, password: &str) -> Option<String> {
    LoginForm::new(user_id, password)
        .first_violation()
        .map(|violation| violation.to_string())
}

#[wasm_bindgen(js_name = isValidUserId)]
pub fn is_valid_user_id_js(value: &str) -> bool {
    is_valid_user_id(normalize(value))
}

#[wasm_bindgen(js_name = isValidPassword)]
pub fn is_valid_password_js(value: &str) -> bool {
    is_valid_password(normalize(value))
}

#[wasm_bindgen(js_name = isValidUserName)]
pub fn is_valid_user_name_js(value: &str) -> bool {
    is_valid_user_name(normalize(value))
}

#[wasm_bindgen(js_name = isValidPhoneNumber)]
pub fn is_valid_phone_number_js(value: &str) -> bool {
    is_valid_phone_number(normalize(value))
}

/// `010-1234-5678` style display form, `None` for an invalid number
#[wasm_bindgen(js_name = formatPhoneNumber)]
pub fn format_phone_number_js(value: &str) -> Option<String> {
    PhoneNumber::try_new(value.to_string())
        .ok()
        .map(|phone| phone.formatted())
}

/// HTML5 attributes for a field's input, by form name (`"userId"`, ...)
#[wasm_bindgen(js_name = fieldAttributes)]
pub fn field_attributes_js(field_name: &str) -> Option<String> {
    Field::from_form_name(field_name).map(|field| FieldAttrs::for_field(field).render_html5_attrs())
}

fn config_from_js(value: JsValue) -> Result<ValidationConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(ValidationConfig::default());
    }

    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))
}

fn to_js(err: PageError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Best-effort text of a thrown JavaScript value
pub(crate) fn js_error(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Failures inside event handlers have no caller to return to
pub(crate) fn report(err: &PageError) {
    web_sys::console::error_1(&JsValue::from_str(&format!("member-validation: {}", err)));
}
