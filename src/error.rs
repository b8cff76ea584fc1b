//! Errors raised while building MIX elements.

use thiserror::Error;

/// Why a builder refused its input. No partial element is ever returned
/// alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MixError {
    /// A restricted element or attribute got a value outside its enumerated set.
    #[error("The value \"{value}\" is invalid for {element}, accepted values are: {}", quote_all(accepted))]
    InvalidValue {
        element: &'static str,
        value: String,
        accepted: &'static [&'static str],
    },

    /// Content of the wrong kind, e.g. text where a rational numerator was expected.
    #[error("Invalid content for {element}: expected {expected}, found {found}")]
    InvalidType {
        element: String,
        expected: &'static str,
        found: String,
    },

    /// A rational given as a list that does not hold exactly one or two parts.
    #[error("Rational value for {element} must have one or two components, got {len}")]
    MalformedRational { element: String, len: usize },

    #[error("Key \"{key}\" not in supported keys for {template}")]
    UnknownKey { key: String, template: &'static str },

    #[error("Contents for {found} cannot be used to build {expected}")]
    TemplateMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A caller-supplied child that has no place in the parent's schema sequence.
    #[error("Element {child} is not allowed inside {parent}")]
    UnexpectedChild { parent: &'static str, child: String },
}

pub type Result<T> = std::result::Result<T, MixError>;

fn quote_all(values: &[&str]) -> String {
    values
        .iter()
        .map(|v| format!("\"{}\"", v))
        .collect::<Vec<_>>()
        .join(", ")
}
