use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PercentageParseError {
    #[error("not a number")]
    Invalid(#[from] ParseFloatError),
    #[error("percentage is not finite: {0}")]
    NotFinite(String),
}

/// Strips whitespace and `%` signs around a cell value, `None` when nothing is left.
pub fn strip_percentage(value: &str) -> Option<&str> {
    let stripped = value.trim().trim_matches('%').trim();
    (!stripped.is_empty()).then_some(stripped)
}

/// Parses a percentage cell such as `"42%"` into a fraction (`0.42`).
///
/// A blank cell is `None`, which callers treat as "skip", never as `0.0`.
/// `NaN` and infinities are errors since they have no JSON number form.
/// # Examples
/// ```
/// use case_config::domain::cases::percentage::parse_percentage;
/// assert_eq!(parse_percentage("42%"), Some(Ok(0.42)));
/// assert_eq!(parse_percentage("  7 % "), Some(Ok(0.07)));
/// assert_eq!(parse_percentage(""), None);
/// assert!(matches!(parse_percentage("NaN%"), Some(Err(_))));
/// ```
pub fn parse_percentage(value: &str) -> Option<Result<f64, PercentageParseError>> {
    strip_percentage(value).map(|stripped| {
        let percent = stripped.parse::<f64>()?;
        if !percent.is_finite() {
            return Err(PercentageParseError::NotFinite(stripped.to_string()));
        }
        Ok(percent / 100.0)
    })
}
