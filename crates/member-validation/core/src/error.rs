// File: src/error.rs
// Purpose: Violation taxonomy and page access errors

use thiserror::Error;

use crate::field::Field;

/// A condition that blocks a submission and is surfaced to the user.
///
/// `Display` yields the modal title.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("{}", .field.empty_title())]
    EmptyField { field: Field },

    #[error("{}", .field.format_title())]
    FormatMismatch { field: Field },

    #[error("비밀번호 불일치")]
    Mismatch,

    /// Message rendered by the server after a rejected submission
    #[error("{message}")]
    ServerRejected { message: String },
}

impl Violation {
    /// Field the violation points at, if any
    pub fn field(&self) -> Option<Field> {
        match self {
            Violation::EmptyField { field } | Violation::FormatMismatch { field } => Some(*field),
            Violation::Mismatch => Some(Field::ConfirmPassword),
            Violation::ServerRejected { .. } => None,
        }
    }

    /// Explanatory text shown under the modal title. Empty-field modals have none.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Violation::EmptyField { .. } => None,
            Violation::FormatMismatch { field } => Some(field.format_hint()),
            Violation::Mismatch => Some("비밀번호가 일치하지 않습니다."),
            Violation::ServerRejected { message } => Some(message),
        }
    }
}

/// Failure to interact with the page hosting a form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("element #{id} is not {expected}")]
    WrongElement { id: String, expected: &'static str },

    #[error("alert could not be shown: {0}")]
    Alert(String),

    #[error("script error: {0}")]
    Script(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_modal_title() {
        let empty = Violation::EmptyField { field: Field::UserName };
        assert_eq!(empty.to_string(), "이름을 입력해주세요");
        assert_eq!(empty.detail(), None);

        let format = Violation::FormatMismatch { field: Field::PhoneNumber };
        assert_eq!(format.to_string(), "휴대전화번호 형식 오류");
        assert_eq!(format.detail(), Some("휴대전화번호는 10~11자, 숫자만 가능합니다."));

        assert_eq!(Violation::Mismatch.to_string(), "비밀번호 불일치");
        assert_eq!(Violation::Mismatch.field(), Some(Field::ConfirmPassword));
    }

    #[test]
    fn test_server_rejected_has_no_field() {
        let rejected = Violation::ServerRejected { message: "이미 사용 중인 아이디입니다.".into() };
        assert_eq!(rejected.field(), None);
        assert_eq!(rejected.detail(), Some("이미 사용 중인 아이디입니다."));
    }
}
