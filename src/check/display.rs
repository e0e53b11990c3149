//! Value display for mismatch messages.

use crate::rules::ExpectedValue;

/// Formats expected and live values for inclusion in messages.
pub trait ValueFormatter {
    /// Display form of an expected value.
    fn display_expected(&self, value: &ExpectedValue) -> String;

    /// Display form of a live value; `None` means unset.
    fn display_actual(&self, value: Option<&str>) -> String;
}

/// The default formatter.
///
/// Strings are shown verbatim (message templates supply the quotes),
/// booleans as `true`/`false`, numbers in plain form and null or unset
/// values as `null`.
///
/// # Example
///
/// ```
/// use envcheck::check::{PlainFormatter, ValueFormatter};
/// use envcheck::rules::ExpectedValue;
///
/// let f = PlainFormatter;
/// assert_eq!(f.display_expected(&ExpectedValue::from(false)), "false");
/// assert_eq!(f.display_actual(None), "null");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

const NULL: &str = "null";

impl ValueFormatter for PlainFormatter {
    fn display_expected(&self, value: &ExpectedValue) -> String {
        match value {
            ExpectedValue::Null => NULL.to_string(),
            other => other.env_text(),
        }
    }

    fn display_actual(&self, value: Option<&str>) -> String {
        value.unwrap_or(NULL).to_string()
    }
}
