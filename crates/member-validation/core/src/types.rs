//! Validated member values
//!
//! Newtypes built with `nutype` that enforce the same rules as the form
//! checks, so server handlers and the browser share one definition of a valid
//! member. Construction trims the input first, like the form checks do.
//!
//! ```rust
//! use member_validation_core::{PhoneNumber, UserName};
//!
//! let phone = PhoneNumber::try_new(" 0101234567 ".to_string()).unwrap();
//! assert_eq!(phone.formatted(), "010-123-4567");
//! assert!(UserName::try_new("John".to_string()).is_err());
//! ```

use nutype::nutype;
use std::fmt;

use crate::rules::{is_valid_password, is_valid_phone_number, is_valid_user_id, is_valid_user_name, normalize};

#[nutype(
    sanitize(with = |s: String| normalize(&s).to_string()),
    validate(predicate = is_valid_user_id),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct UserId(String);

/// Password satisfying the credential rule. `Debug` is redacted and there is
/// no `Display` or `Serialize`.
#[nutype(
    sanitize(with = |s: String| normalize(&s).to_string()),
    validate(predicate = is_valid_password),
    derive(Clone, PartialEq, Eq, AsRef, TryFrom, Deserialize)
)]
pub struct Password(String);

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[nutype(
    sanitize(with = |s: String| normalize(&s).to_string()),
    validate(predicate = is_valid_user_name),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct UserName(String);

/// Digits only, 10 or 11 of them
#[nutype(
    sanitize(with = |s: String| normalize(&s).to_string()),
    validate(predicate = is_valid_phone_number),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        TryFrom,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Hyphenated display form: `010-123-4567` for 10 digits,
    /// `010-1234-5678` for 11.
    pub fn formatted(&self) -> String {
        let digits = self.to_string();
        let middle_end = if digits.len() == 10 { 6 } else { 7 };
        format!("{}-{}-{}", &digits[..3], &digits[3..middle_end], &digits[middle_end..])
    }
}

/// Values of a registration that passed every check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidMember {
    pub user_id: UserId,
    pub password: Password,
    pub user_name: UserName,
    pub phone_number: PhoneNumber,
}
