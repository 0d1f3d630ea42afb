//! Modal alert configuration
//!
//! [`Alert`] serializes to the options object accepted by the page's modal
//! library: `{ icon, title, text?, confirmButtonText, confirmButtonColor }`.

use serde::{Deserialize, Serialize};

use crate::error::Violation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertIcon {
    Error,
    Warning,
}

/// Confirmation button styling shared by every alert on a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertTheme {
    #[serde(default = "default_confirm_text", alias = "confirmButtonText")]
    pub confirm_button_text: String,

    #[serde(default = "default_confirm_color", alias = "confirmButtonColor")]
    pub confirm_button_color: String,
}

fn default_confirm_text() -> String {
    "확인".to_string()
}

fn default_confirm_color() -> String {
    "#0d6efd".to_string()
}

impl Default for AlertTheme {
    fn default() -> Self {
        Self {
            confirm_button_text: default_confirm_text(),
            confirm_button_color: default_confirm_color(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub icon: AlertIcon,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub confirm_button_text: String,
    pub confirm_button_color: String,
}

impl Alert {
    pub fn new(icon: AlertIcon, title: impl Into<String>, theme: &AlertTheme) -> Self {
        Self {
            icon,
            title: title.into(),
            text: None,
            confirm_button_text: theme.confirm_button_text.clone(),
            confirm_button_color: theme.confirm_button_color.clone(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Warning alert for a client-side violation: the violation's title plus
    /// its explanatory text when it has one.
    pub fn for_violation(violation: &Violation, theme: &AlertTheme) -> Self {
        let alert = Self::new(AlertIcon::Warning, violation.to_string(), theme);
        match violation.detail() {
            Some(detail) => alert.with_text(detail),
            None => alert,
        }
    }

    /// Error alert carrying a message the server rendered into the page
    pub fn server_rejected(title: &str, message: &str, theme: &AlertTheme) -> Self {
        Self::new(AlertIcon::Error, title, theme).with_text(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_empty_field_alert_has_no_text() {
        let alert = Alert::for_violation(
            &Violation::EmptyField { field: Field::UserId },
            &AlertTheme::default(),
        );
        assert_eq!(
            serde_json::to_value(&alert).unwrap(),
            json!({
                "icon": "warning",
                "title": "아이디를 입력해주세요",
                "confirmButtonText": "확인",
                "confirmButtonColor": "#0d6efd"
            })
        );
    }

    #[test]
    fn test_server_alert_uses_error_icon() {
        let theme = AlertTheme {
            confirm_button_text: "OK".into(),
            confirm_button_color: "#198754".into(),
        };
        let alert = Alert::server_rejected("로그인 실패", "아이디와 비밀번호를 정확히 입력해 주세요.", &theme);
        assert_eq!(
            serde_json::to_value(&alert).unwrap(),
            json!({
                "icon": "error",
                "title": "로그인 실패",
                "text": "아이디와 비밀번호를 정확히 입력해 주세요.",
                "confirmButtonText": "OK",
                "confirmButtonColor": "#198754"
            })
        );
    }
}
