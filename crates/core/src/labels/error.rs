//! Label formatting errors.

use thiserror::Error;

/// Errors raised while configuring label output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    /// The locale tag is not one of the supported locales.
    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),
}

impl LabelError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedLocale(_) => "UNSUPPORTED_LOCALE",
        }
    }
}
