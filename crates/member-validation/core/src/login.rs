// File: src/login.rs
// Purpose: Login form checks and server error display

use crate::alert::{Alert, AlertTheme};
use crate::config::ValidationConfig;
use crate::error::{PageError, Violation};
use crate::field::{Field, LOGIN_FORM_ID};
use crate::page::{FormPage, FormValidator};
use crate::rules::normalize;
use crate::verdict::{Blocked, DismissAction, Verdict};

const SERVER_ERROR_TITLE: &str = "로그인 실패";

/// Trimmed login form values
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginForm {
    pub user_id: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(user_id: &str, password: &str) -> Self {
        Self {
            user_id: normalize(user_id).to_string(),
            password: normalize(password).to_string(),
        }
    }

    /// First blank field, user id before password.
    ///
    /// Login only checks presence; formats are the server's concern.
    pub fn first_violation(&self) -> Option<Violation> {
        [(Field::UserId, &self.user_id), (Field::Password, &self.password)]
            .into_iter()
            .find(|(_, value)| value.is_empty())
            .map(|(field, _)| Violation::EmptyField { field })
    }
}

/// Validator for the login page
#[derive(Debug, Clone, Default)]
pub struct LoginValidator {
    theme: AlertTheme,
}

impl LoginValidator {
    pub fn new(config: &ValidationConfig) -> Self {
        Self {
            theme: config.alert.clone(),
        }
    }

    pub fn check(&self, form: &LoginForm) -> Verdict {
        match form.first_violation() {
            None => Verdict::Passed,
            Some(violation) => {
                let focus = violation.field().map(Field::element_id).unwrap_or(Field::UserId.element_id());
                Verdict::Blocked(Blocked {
                    alert: Alert::for_violation(&violation, &self.theme),
                    violation,
                    on_dismiss: vec![DismissAction::Focus(focus)],
                })
            }
        }
    }
}

impl FormValidator for LoginValidator {
    type Form = LoginForm;

    const FORM_ID: &'static str = LOGIN_FORM_ID;
    const INTERCEPTS_SUBMIT: bool = false;

    fn read_form<P: FormPage>(&self, page: &P) -> Result<LoginForm, PageError> {
        Ok(LoginForm::new(
            &page.value(Field::UserId.element_id())?,
            &page.value(Field::Password.element_id())?,
        ))
    }

    fn on_submit(&self, form: &LoginForm) -> Verdict {
        self.check(form)
    }

    /// A failed login leaves the user id in place and resets the password.
    fn server_error(&self, rendered: Option<&str>) -> Option<Blocked> {
        let message = normalize(rendered?).to_string();
        let password = Field::Password.element_id();

        Some(Blocked {
            alert: Alert::server_rejected(SERVER_ERROR_TITLE, &message, &self.theme),
            violation: Violation::ServerRejected { message },
            on_dismiss: vec![DismissAction::Clear(password), DismissAction::Focus(password)],
        })
    }
}
