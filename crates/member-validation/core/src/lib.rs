//! Member Validation Core
//!
//! Validation rules and submit handling for the member login and registration
//! forms. Everything here is target independent: the browser crate implements
//! [`FormPage`] over the DOM, while tests and servers use the same rules and
//! validated types natively.

pub mod alert;
pub mod config;
pub mod error;
pub mod field;
pub mod html;
pub mod login;
pub mod page;
pub mod register;
pub mod rules;
pub mod types;
pub mod verdict;

pub use alert::{Alert, AlertIcon, AlertTheme};
pub use config::ValidationConfig;
pub use error::{PageError, Violation};
pub use field::{Field, LOGIN_FORM_ID, REGISTER_FORM_ID, REGISTER_USER_ID_FOCUS};
pub use html::FieldAttrs;
pub use login::{LoginForm, LoginValidator};
pub use page::{display_server_error, handle_submit, present, FormPage, FormValidator, Submission};
pub use register::{RegisterForm, RegisterValidator};
pub use rules::{
    is_valid_password, is_valid_phone_number, is_valid_user_id, is_valid_user_name, normalize,
};
pub use types::{Password, PhoneNumber, UserId, UserName, ValidMember};
pub use verdict::{Blocked, DismissAction, Verdict};

/// CSS selector of the server-rendered error message node
pub const SERVER_ERROR_SELECTOR: &str = ".alert-danger span";
