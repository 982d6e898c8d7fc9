// crates/thaiaddr-core/src/model/postal.rs
use crate::error::PostalCodeError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const POSTAL_CODE_LEN: usize = 5;

/// A Thai postal code: exactly five ASCII digits, the first one 1–9.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PostalCode(String);

impl PostalCode {
    /// Validates `text` without trimming or filtering it.
    ///
    /// ```rust
    /// use thaiaddr_core::model::PostalCode;
    /// use thaiaddr_core::error::PostalCodeError;
    ///
    /// assert!(PostalCode::parse("10500").is_ok());
    /// assert_eq!(PostalCode::parse("01234"), Err(PostalCodeError::LeadingZero));
    /// assert_eq!(PostalCode::parse("1050"), Err(PostalCodeError::WrongLength(4)));
    /// ```
    pub fn parse(text: &str) -> Result<Self, PostalCodeError> {
        if !text.chars().all(|c| c.is_ascii_digit()) {
            return Err(PostalCodeError::NonDigit);
        }
        if text.len() != POSTAL_CODE_LEN {
            return Err(PostalCodeError::WrongLength(text.len()));
        }
        if text.starts_with('0') {
            return Err(PostalCodeError::LeadingZero);
        }
        Ok(Self(text.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PostalCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PostalCode {
    type Error = PostalCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PostalCode> for String {
    fn from(value: PostalCode) -> Self {
        value.0
    }
}

impl std::str::FromStr for PostalCode {
    type Err = PostalCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
