// File: src/field.rs
// Purpose: Form fields, their DOM element ids and fixed display strings

use serde::Serialize;
use std::fmt;

/// Element id of the login form
pub const LOGIN_FORM_ID: &str = "loginForm";

/// Element id of the registration form
pub const REGISTER_FORM_ID: &str = "registerForm";

/// Focus target for both user id checks on the registration page.
///
/// The registration template names its user id input `floatingInput` while
/// values are still read from `floatingUserId`.
pub const REGISTER_USER_ID_FOCUS: &str = "floatingInput";

/// Input fields shared by the login and registration forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    UserId,
    Password,
    ConfirmPassword,
    UserName,
    PhoneNumber,
}

impl Field {
    /// Registration order; checks run in exactly this sequence
    pub const ALL: [Field; 5] = [
        Field::UserId,
        Field::Password,
        Field::ConfirmPassword,
        Field::UserName,
        Field::PhoneNumber,
    ];

    /// Id of the `<input>` holding this field's value
    pub const fn element_id(self) -> &'static str {
        match self {
            Field::UserId => "floatingUserId",
            Field::Password => "floatingPassword",
            Field::ConfirmPassword => "floatingConfirmPassword",
            Field::UserName => "floatingUserName",
            Field::PhoneNumber => "floatingPhoneNumber",
        }
    }

    /// Name the server binds the submitted value to
    pub const fn form_name(self) -> &'static str {
        match self {
            Field::UserId => "userId",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::UserName => "userName",
            Field::PhoneNumber => "phoneNumber",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Field::UserId => "아이디",
            Field::Password => "비밀번호",
            Field::ConfirmPassword => "비밀번호 확인",
            Field::UserName => "이름",
            Field::PhoneNumber => "휴대전화번호",
        }
    }

    /// Modal title shown when the field was left blank
    pub const fn empty_title(self) -> &'static str {
        match self {
            Field::UserId => "아이디를 입력해주세요",
            Field::Password => "비밀번호를 입력해주세요",
            Field::ConfirmPassword => "비밀번호 확인을 입력해주세요",
            Field::UserName => "이름을 입력해주세요",
            Field::PhoneNumber => "휴대전화번호를 입력해주세요",
        }
    }

    /// Modal title shown when the value does not match the field pattern
    pub const fn format_title(self) -> &'static str {
        match self {
            Field::UserId => "아이디 형식 오류",
            Field::Password | Field::ConfirmPassword => "비밀번호 형식 오류",
            Field::UserName => "이름 형식 오류",
            Field::PhoneNumber => "휴대전화번호 형식 오류",
        }
    }

    /// Explanatory modal text for a format error
    pub const fn format_hint(self) -> &'static str {
        match self {
            Field::UserId => "아이디는 3~14자, 영문/숫자/특수문자만 가능합니다.",
            Field::Password | Field::ConfirmPassword => {
                "비밀번호는 8~14자, 영문/숫자/특수문자만 가능합니다."
            }
            Field::UserName => "이름은 2~20자, 한글만 가능합니다.",
            Field::PhoneNumber => "휴대전화번호는 10~11자, 숫자만 가능합니다.",
        }
    }

    /// Look a field up by its form name (`"userId"`, `"phoneNumber"`, ...)
    pub fn from_form_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.form_name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_name())
    }
}
