// File: src/register.rs
// Purpose: Registration form checks, run in a fixed short-circuiting order

use tracing::warn;

use crate::alert::{Alert, AlertTheme};
use crate::config::ValidationConfig;
use crate::error::{PageError, Violation};
use crate::field::{Field, REGISTER_FORM_ID, REGISTER_USER_ID_FOCUS};
use crate::page::{FormPage, FormValidator};
use crate::rules::normalize;
use crate::types::{Password, PhoneNumber, UserId, UserName, ValidMember};
use crate::verdict::{Blocked, DismissAction, Verdict};

const SERVER_ERROR_TITLE: &str = "회원가입 실패";

/// Trimmed registration form values
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegisterForm {
    pub user_id: String,
    pub password: String,
    pub confirm_password: String,
    pub user_name: String,
    pub phone_number: String,
}

type Check = fn(&RegisterForm) -> Option<Violation>;

/// One check per field, in submission order
const CHECKS: [Check; 5] = [
    RegisterForm::check_user_id,
    RegisterForm::check_password,
    RegisterForm::check_confirmation,
    RegisterForm::check_user_name,
    RegisterForm::check_phone_number,
];

fn presence_then_format(field: Field, value: &str) -> Option<Violation> {
    if value.is_empty() {
        Some(Violation::EmptyField { field })
    } else if !field.matches(value) {
        Some(Violation::FormatMismatch { field })
    } else {
        None
    }
}

impl RegisterForm {
    pub fn new(
        user_id: &str,
        password: &str,
        confirm_password: &str,
        user_name: &str,
        phone_number: &str,
    ) -> Self {
        Self {
            user_id: normalize(user_id).to_string(),
            password: normalize(password).to_string(),
            confirm_password: normalize(confirm_password).to_string(),
            user_name: normalize(user_name).to_string(),
            phone_number: normalize(phone_number).to_string(),
        }
    }

    fn check_user_id(&self) -> Option<Violation> {
        presence_then_format(Field::UserId, &self.user_id)
    }

    fn check_password(&self) -> Option<Violation> {
        presence_then_format(Field::Password, &self.password)
    }

    /// Confirmation has no format rule of its own; it only has to match.
    fn check_confirmation(&self) -> Option<Violation> {
        if self.confirm_password.is_empty() {
            Some(Violation::EmptyField { field: Field::ConfirmPassword })
        } else if self.confirm_password != self.password {
            Some(Violation::Mismatch)
        } else {
            None
        }
    }

    fn check_user_name(&self) -> Option<Violation> {
        presence_then_format(Field::UserName, &self.user_name)
    }

    fn check_phone_number(&self) -> Option<Violation> {
        presence_then_format(Field::PhoneNumber, &self.phone_number)
    }

    /// First failing check. Later checks are not evaluated.
    pub fn first_violation(&self) -> Option<Violation> {
        CHECKS.iter().find_map(|check| check(self))
    }

    /// The first failing check of every field, in submission order
    pub fn violations(&self) -> Vec<Violation> {
        CHECKS.iter().filter_map(|check| check(self)).collect()
    }

    /// Convert into validated member values, or the first violation
    pub fn into_member(self) -> Result<ValidMember, Violation> {
        if let Some(violation) = self.first_violation() {
            return Err(violation);
        }

        let format = |field| Violation::FormatMismatch { field };
        Ok(ValidMember {
            user_id: UserId::try_new(self.user_id).map_err(|_| format(Field::UserId))?,
            password: Password::try_new(self.password).map_err(|_| format(Field::Password))?,
            user_name: UserName::try_new(self.user_name).map_err(|_| format(Field::UserName))?,
            phone_number: PhoneNumber::try_new(self.phone_number)
                .map_err(|_| format(Field::PhoneNumber))?,
        })
    }
}

/// Where focus goes after a violation's alert is dismissed
fn dismiss_actions(violation: &Violation) -> Vec<DismissAction> {
    match violation {
        Violation::Mismatch => {
            let confirm = Field::ConfirmPassword.element_id();
            vec![DismissAction::Clear(confirm), DismissAction::Focus(confirm)]
        }
        Violation::EmptyField { field: Field::UserId }
        | Violation::FormatMismatch { field: Field::UserId } => {
            vec![DismissAction::Focus(REGISTER_USER_ID_FOCUS)]
        }
        Violation::EmptyField { field } | Violation::FormatMismatch { field } => {
            vec![DismissAction::Focus(field.element_id())]
        }
        Violation::ServerRejected { .. } => {
            warn!("server rejection reached the registration checks");
            Vec::new()
        }
    }
}

/// Validator for the registration page
#[derive(Debug, Clone, Default)]
pub struct RegisterValidator {
    theme: AlertTheme,
}

impl RegisterValidator {
    pub fn new(config: &ValidationConfig) -> Self {
        Self {
            theme: config.alert.clone(),
        }
    }

    pub fn check(&self, form: &RegisterForm) -> Verdict {
        match form.first_violation() {
            None => Verdict::Passed,
            Some(violation) => Verdict::Blocked(Blocked {
                alert: Alert::for_violation(&violation, &self.theme),
                on_dismiss: dismiss_actions(&violation),
                violation,
            }),
        }
    }
}

impl FormValidator for RegisterValidator {
    type Form = RegisterForm;

    const FORM_ID: &'static str = REGISTER_FORM_ID;
    const INTERCEPTS_SUBMIT: bool = true;

    fn read_form<P: FormPage>(&self, page: &P) -> Result<RegisterForm, PageError> {
        let read = |field: Field| page.value(field.element_id());
        Ok(RegisterForm::new(
            &read(Field::UserId)?,
            &read(Field::Password)?,
            &read(Field::ConfirmPassword)?,
            &read(Field::UserName)?,
            &read(Field::PhoneNumber)?,
        ))
    }

    fn on_submit(&self, form: &RegisterForm) -> Verdict {
        self.check(form)
    }

    /// Both password inputs are reset; the other values are kept for retry.
    fn server_error(&self, rendered: Option<&str>) -> Option<Blocked> {
        let message = normalize(rendered?).to_string();
        let password = Field::Password.element_id();

        Some(Blocked {
            alert: Alert::server_rejected(SERVER_ERROR_TITLE, &message, &self.theme),
            violation: Violation::ServerRejected { message },
            on_dismiss: vec![
                DismissAction::Clear(password),
                DismissAction::Clear(Field::ConfirmPassword.element_id()),
                DismissAction::Focus(password),
            ],
        })
    }
}
