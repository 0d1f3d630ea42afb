// File: src/html.rs
// Purpose: HTML5 input attributes derived from the field rules

use std::collections::BTreeMap;

use crate::field::Field;

/// HTML5 attributes for one form input
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldAttrs {
    /// Attribute name to value; an empty value renders as a bare attribute
    pub html5_attrs: BTreeMap<&'static str, String>,
    /// Field label for display
    pub label: &'static str,
}

impl FieldAttrs {
    /// Attributes for a field's input, mirroring the submit checks so the
    /// browser's own constraint validation agrees with them
    pub fn for_field(field: Field) -> Self {
        let mut attrs = BTreeMap::new();
        attrs.insert("id", field.element_id().to_string());
        attrs.insert("name", field.form_name().to_string());
        attrs.insert("required", String::new());

        let input_type = match field {
            Field::Password | Field::ConfirmPassword => "password",
            Field::PhoneNumber => "tel",
            Field::UserId | Field::UserName => "text",
        };
        attrs.insert("type", input_type.to_string());

        // Confirmation only has to equal the password
        if field != Field::ConfirmPassword {
            let pattern = field.pattern();
            attrs.insert("pattern", pattern.source());
            attrs.insert("minlength", pattern.min.to_string());
            attrs.insert("maxlength", pattern.max.to_string());
        }

        if field == Field::PhoneNumber {
            attrs.insert("inputmode", "numeric".to_string());
        }

        Self {
            html5_attrs: attrs,
            label: field.label(),
        }
    }

    /// Render HTML5 attributes as a string
    pub fn render_html5_attrs(&self) -> String {
        self.html5_attrs
            .iter()
            .map(|(k, v)| {
                if v.is_empty() {
                    k.to_string()
                } else {
                    format!("{}=\"{}\"", k, escape_attr(v))
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_number_attrs() {
        let attrs = FieldAttrs::for_field(Field::PhoneNumber);
        assert_eq!(
            attrs.render_html5_attrs(),
            "id=\"floatingPhoneNumber\" inputmode=\"numeric\" maxlength=\"11\" minlength=\"10\" \
             name=\"phoneNumber\" pattern=\"[0-9]{10,11}\" required type=\"tel\""
        );
        assert_eq!(attrs.label, "휴대전화번호");
    }

    #[test]
    fn test_credential_pattern_is_escaped() {
        let rendered = FieldAttrs::for_field(Field::UserId).render_html5_attrs();
        assert!(rendered.contains(r#"pattern="[A-Za-z0-9!@#$%\^&amp;*\(\)_+=\-]{3,14}""#));
    }

    #[test]
    fn test_confirmation_has_no_pattern() {
        let attrs = FieldAttrs::for_field(Field::ConfirmPassword);
        assert!(!attrs.html5_attrs.contains_key("pattern"));
        assert_eq!(attrs.html5_attrs["type"], "password");
    }
}
