//! End-to-end submit flows against an in-memory page
//!
//! Verifies through the public API that:
//! 1. Every field rule blocks with exactly one alert and stops there
//! 2. A clean registration is submitted programmatically with no alert
//! 3. Login never intercepts a filled form
//! 4. Dismissal side effects run only after the alert resolves

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::{ready, Future};

use futures::executor::block_on;
use member_validation_core::{
    display_server_error, handle_submit, present, Alert, Field, FormPage, LoginValidator, PageError,
    RegisterValidator, Submission, ValidationConfig, Violation,
};
use pretty_assertions::assert_eq;

#[derive(Default)]
struct FakePage {
    inputs: RefCell<HashMap<&'static str, String>>,
    server_error: Option<String>,
    alerts: RefCell<Vec<Alert>>,
    focused: RefCell<Option<String>>,
    submitted: RefCell<bool>,
}

impl FakePage {
    fn register(user_id: &str, password: &str, confirm: &str, name: &str, phone: &str) -> Self {
        let page = Self::default();
        page.inputs.borrow_mut().extend([
            ("floatingUserId", user_id.to_string()),
            ("floatingPassword", password.to_string()),
            ("floatingConfirmPassword", confirm.to_string()),
            ("floatingUserName", name.to_string()),
            ("floatingPhoneNumber", phone.to_string()),
        ]);
        page
    }

    fn login(user_id: &str, password: &str) -> Self {
        let page = Self::default();
        page.inputs.borrow_mut().extend([
            ("floatingUserId", user_id.to_string()),
            ("floatingPassword", password.to_string()),
        ]);
        page
    }

    fn input(&self, id: &str) -> String {
        self.inputs.borrow().get(id).cloned().unwrap_or_default()
    }
}

impl FormPage for FakePage {
    fn value(&self, element_id: &str) -> Result<String, PageError> {
        self.inputs
            .borrow()
            .get(element_id)
            .cloned()
            .ok_or_else(|| PageError::MissingElement(element_id.to_string()))
    }

    fn clear(&self, element_id: &str) -> Result<(), PageError> {
        if let Some(value) = self.inputs.borrow_mut().get_mut(element_id) {
            value.clear();
        }
        Ok(())
    }

    fn focus(&self, element_id: &str) -> Result<(), PageError> {
        *self.focused.borrow_mut() = Some(element_id.to_string());
        Ok(())
    }

    fn server_error_text(&self) -> Option<String> {
        self.server_error.clone()
    }

    fn submit(&self) -> Result<(), PageError> {
        *self.submitted.borrow_mut() = true;
        Ok(())
    }

    fn show_alert(&self, alert: &Alert) -> impl Future<Output = Result<(), PageError>> {
        self.alerts.borrow_mut().push(alert.clone());
        ready(Ok(()))
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

fn submit_and_dismiss<V: member_validation_core::FormValidator>(validator: &V, page: &FakePage) -> Submission {
    init_tracing();
    let submission = handle_submit(validator, page).expect("page has every input");
    if let Submission::Blocked(blocked) = &submission {
        block_on(present(page, blocked)).expect("alert dismissed");
    }
    submission
}

#[test]
fn test_well_formed_registration_is_submitted() {
    let page = FakePage::register("abc", "validPass1!", "validPass1!", "홍길동", "01012345678");
    let submission = submit_and_dismiss(&RegisterValidator::default(), &page);

    assert_eq!(submission, Submission::Submitted);
    assert!(*page.submitted.borrow(), "form.submit() should have been invoked");
    assert!(page.alerts.borrow().is_empty(), "no alert for a valid form");
}

#[test]
fn test_each_rule_blocks_with_its_own_alert() {
    let cases: [(&str, [&str; 5], &str, Option<&str>, &str); 5] = [
        (
            "user id too short",
            ["ab", "validPass1!", "validPass1!", "홍길동", "01012345678"],
            "아이디 형식 오류",
            Some("아이디는 3~14자, 영문/숫자/특수문자만 가능합니다."),
            "floatingInput",
        ),
        (
            "password too short",
            ["abc", "short1", "short1", "홍길동", "01012345678"],
            "비밀번호 형식 오류",
            Some("비밀번호는 8~14자, 영문/숫자/특수문자만 가능합니다."),
            "floatingPassword",
        ),
        (
            "confirmation differs",
            ["abc", "validPass1!", "validPass2!", "홍길동", "01012345678"],
            "비밀번호 불일치",
            Some("비밀번호가 일치하지 않습니다."),
            "floatingConfirmPassword",
        ),
        (
            "latin name",
            ["abc", "validPass1!", "validPass1!", "John", "01012345678"],
            "이름 형식 오류",
            Some("이름은 2~20자, 한글만 가능합니다."),
            "floatingUserName",
        ),
        (
            "empty phone",
            ["abc", "validPass1!", "validPass1!", "홍길동", "  "],
            "휴대전화번호를 입력해주세요",
            None,
            "floatingPhoneNumber",
        ),
    ];

    for (name, [user_id, password, confirm, user_name, phone], title, text, focus) in cases {
        let page = FakePage::register(user_id, password, confirm, user_name, phone);
        let submission = submit_and_dismiss(&RegisterValidator::default(), &page);

        assert!(matches!(submission, Submission::Blocked(_)), "{name}: should block");
        assert!(!*page.submitted.borrow(), "{name}: must not submit");

        let alerts = page.alerts.borrow();
        assert_eq!(alerts.len(), 1, "{name}: exactly one alert");
        assert_eq!(alerts[0].title, title, "{name}");
        assert_eq!(alerts[0].text.as_deref(), text, "{name}");
        assert_eq!(page.focused.borrow().as_deref(), Some(focus), "{name}");
    }
}

#[test]
fn test_mismatch_clears_only_confirmation() {
    let page = FakePage::register("abc", "validPass1!", "validPass2!", "홍길동", "01012345678");
    submit_and_dismiss(&RegisterValidator::default(), &page);

    assert_eq!(page.input("floatingConfirmPassword"), "");
    assert_eq!(page.input("floatingPassword"), "validPass1!");
}

#[test]
fn test_login_requires_both_fields() {
    let page = FakePage::login("", "secret");
    let submission = submit_and_dismiss(&LoginValidator::default(), &page);
    assert!(submission.cancels_native());
    assert_eq!(page.alerts.borrow()[0].title, "아이디를 입력해주세요");
    assert_eq!(page.focused.borrow().as_deref(), Some("floatingUserId"));

    let page = FakePage::login("hong", " ");
    submit_and_dismiss(&LoginValidator::default(), &page);
    assert_eq!(page.alerts.borrow()[0].title, "비밀번호를 입력해주세요");
    assert_eq!(page.focused.borrow().as_deref(), Some("floatingPassword"));

    let page = FakePage::login("hong", "secret");
    let submission = submit_and_dismiss(&LoginValidator::default(), &page);
    assert_eq!(submission, Submission::Proceed);
    assert!(page.alerts.borrow().is_empty());
    assert!(!*page.submitted.borrow(), "native submission continues on its own");
}

#[test]
fn test_server_errors_use_configured_theme() {
    let config = ValidationConfig::from_toml_str(
        r##"
        [alert]
        confirm_button_text = "닫기"
        confirm_button_color = "#6c757d"
        "##,
    )
    .unwrap();

    let mut page = FakePage::register("abc", "validPass1!", "validPass1!", "홍길동", "01012345678");
    page.server_error = Some("이미 사용 중인 아이디입니다.".to_string());

    let shown = block_on(display_server_error(&RegisterValidator::new(&config), &page)).unwrap();
    assert!(shown);

    let alerts = page.alerts.borrow();
    assert_eq!(alerts[0].confirm_button_text, "닫기");
    assert_eq!(alerts[0].confirm_button_color, "#6c757d");
    assert_eq!(page.input("floatingPassword"), "");
    assert_eq!(page.input("floatingConfirmPassword"), "");
    assert_eq!(page.focused.borrow().as_deref(), Some("floatingPassword"));
}

#[test]
fn test_violation_listing_matches_first_violation() {
    let form = member_validation_core::RegisterForm::new("", "validPass1!", "", "홍길동", "123");
    let all = form.violations();
    assert_eq!(all.first(), form.first_violation().as_ref());
    assert_eq!(
        all,
        vec![
            Violation::EmptyField { field: Field::UserId },
            Violation::EmptyField { field: Field::ConfirmPassword },
            Violation::FormatMismatch { field: Field::PhoneNumber },
        ]
    );
}
