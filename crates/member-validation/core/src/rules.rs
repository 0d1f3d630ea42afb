//! Field format rules
//!
//! Each rule is a single character class with a length range. The same source
//! compiles to the anchored [`Regex`] used here and to the HTML `pattern`
//! attribute rendered into the form, so both sides agree on what is valid.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::field::Field;

/// Letters, digits and `! @ # $ % ^ & * ( ) _ + = -`.
///
/// Escaped so the class is also valid in an HTML `pattern` attribute, which
/// browsers compile with the `v` flag.
const CREDENTIAL_CLASS: &str = r"A-Za-z0-9!@#$%\^&*\(\)_+=\-";

/// Precomposed Hangul syllables, U+AC00 to U+D7A3
const HANGUL_CLASS: &str = "가-힣";

const DIGIT_CLASS: &str = "0-9";

/// A character class repeated between `min` and `max` times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPattern {
    class: &'static str,
    pub min: usize,
    pub max: usize,
}

impl FieldPattern {
    const fn new(class: &'static str, min: usize, max: usize) -> Self {
        Self { class, min, max }
    }

    /// Unanchored pattern source, e.g. `[0-9]{10,11}`
    pub fn source(&self) -> String {
        format!("[{}]{{{},{}}}", self.class, self.min, self.max)
    }

    fn compile(&self) -> Regex {
        Regex::new(&format!("^{}$", self.source())).expect("field patterns are valid literals")
    }
}

pub const USER_ID: FieldPattern = FieldPattern::new(CREDENTIAL_CLASS, 3, 14);
pub const PASSWORD: FieldPattern = FieldPattern::new(CREDENTIAL_CLASS, 8, 14);
pub const USER_NAME: FieldPattern = FieldPattern::new(HANGUL_CLASS, 2, 20);
pub const PHONE_NUMBER: FieldPattern = FieldPattern::new(DIGIT_CLASS, 10, 11);

static USER_ID_RE: Lazy<Regex> = Lazy::new(|| USER_ID.compile());
static PASSWORD_RE: Lazy<Regex> = Lazy::new(|| PASSWORD.compile());
static USER_NAME_RE: Lazy<Regex> = Lazy::new(|| USER_NAME.compile());
static PHONE_NUMBER_RE: Lazy<Regex> = Lazy::new(|| PHONE_NUMBER.compile());

impl Field {
    /// Format rule for the field. Confirmation reuses the password rule.
    pub const fn pattern(self) -> FieldPattern {
        match self {
            Field::UserId => USER_ID,
            Field::Password | Field::ConfirmPassword => PASSWORD,
            Field::UserName => USER_NAME,
            Field::PhoneNumber => PHONE_NUMBER,
        }
    }

    /// Whether an already trimmed value satisfies the field's format rule
    pub fn matches(self, value: &str) -> bool {
        let re: &Regex = match self {
            Field::UserId => &USER_ID_RE,
            Field::Password | Field::ConfirmPassword => &PASSWORD_RE,
            Field::UserName => &USER_NAME_RE,
            Field::PhoneNumber => &PHONE_NUMBER_RE,
        };
        re.is_match(value)
    }
}

/// ECMAScript `WhiteSpace` and `LineTerminator`: Unicode white space except
/// NEL (U+0085), plus the BOM.
fn is_js_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Strip leading and trailing whitespace the way the browser's
/// `String.prototype.trim` does.
pub fn normalize(value: &str) -> &str {
    value.trim_matches(is_js_whitespace)
}

pub fn is_valid_user_id(value: &str) -> bool {
    Field::UserId.matches(value)
}

pub fn is_valid_password(value: &str) -> bool {
    Field::Password.matches(value)
}

pub fn is_valid_user_name(value: &str) -> bool {
    Field::UserName.matches(value)
}

pub fn is_valid_phone_number(value: &str) -> bool {
    Field::PhoneNumber.matches(value)
}
