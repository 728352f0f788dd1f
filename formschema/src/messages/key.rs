//! Identifiers for every default message.

use crate::types::Kind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifies a default error message and carries its parameters.
///
/// Numeric bounds are `f64`, so keys are `PartialEq` but not `Eq` or `Hash`.
/// Key maps by [`MessageKey::code`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum MessageKey {
    /// A required value is missing.
    Required,
    /// The value is not of the type's kind.
    Invalid {
        /// The expected kind.
        kind: Kind,
    },
    /// Text shorter than `min` characters.
    MinLength {
        /// Minimum character count.
        min: usize,
    },
    /// Text longer than `max` characters.
    MaxLength {
        /// Maximum character count.
        max: usize,
    },
    /// Text length outside `min..=max`.
    RangeLength {
        /// Minimum character count.
        min: usize,
        /// Maximum character count.
        max: usize,
    },
    /// The value does not match a pattern.
    Pattern,
    /// Not an email address.
    Email,
    /// Not a URL.
    Url,
    /// Text without a letter.
    ContainsLetter,
    /// Text without an uppercase letter.
    ContainsUppercaseLetter,
    /// Text without a lowercase letter.
    ContainsLowercaseLetter,
    /// Text without a digit.
    ContainsNumber,
    /// The value is not one of the allowed values.
    OneOf {
        /// The allowed values, comma separated.
        values: String,
    },
    /// A number with a fractional part.
    Integer,
    /// A number below `min`.
    Min {
        /// Inclusive lower bound.
        min: f64,
    },
    /// A number above `max`.
    Max {
        /// Inclusive upper bound.
        max: f64,
    },
    /// A number outside `min..=max`.
    Range {
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
    /// A date before `min`.
    DateMin {
        /// Earliest allowed date.
        min: DateTime<Utc>,
    },
    /// A date after `max`.
    DateMax {
        /// Latest allowed date.
        max: DateTime<Utc>,
    },
    /// A date outside `min..=max`.
    DateRange {
        /// Earliest allowed date.
        min: DateTime<Utc>,
        /// Latest allowed date.
        max: DateTime<Utc>,
    },
    /// An array with fewer than `min` items.
    ArrayMinLength {
        /// Minimum item count.
        min: usize,
    },
    /// An array with more than `max` items.
    ArrayMaxLength {
        /// Maximum item count.
        max: usize,
    },
    /// An array whose item count is outside `min..=max`.
    ArrayRangeLength {
        /// Minimum item count.
        min: usize,
        /// Maximum item count.
        max: usize,
    },
    /// An array with repeated items.
    Unrepeatable,
    /// The value differs from another field.
    EqualTo {
        /// The field compared against.
        field: String,
    },
}

impl MessageKey {
    /// Returns the catalog code for this key.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Invalid { kind } => match kind {
                Kind::Mixed => "invalid.mixed",
                Kind::String => "invalid.string",
                Kind::Number => "invalid.number",
                Kind::Boolean => "invalid.boolean",
                Kind::Date => "invalid.date",
                Kind::Array => "invalid.array",
                Kind::Object => "invalid.object",
            },
            Self::MinLength { .. } => "string.min_length",
            Self::MaxLength { .. } => "string.max_length",
            Self::RangeLength { .. } => "string.range_length",
            Self::Pattern => "pattern",
            Self::Email => "string.email",
            Self::Url => "string.url",
            Self::ContainsLetter => "string.contains_letter",
            Self::ContainsUppercaseLetter => "string.contains_uppercase_letter",
            Self::ContainsLowercaseLetter => "string.contains_lowercase_letter",
            Self::ContainsNumber => "string.contains_number",
            Self::OneOf { .. } => "one_of",
            Self::Integer => "number.integer",
            Self::Min { .. } => "number.min",
            Self::Max { .. } => "number.max",
            Self::Range { .. } => "number.range",
            Self::DateMin { .. } => "date.min",
            Self::DateMax { .. } => "date.max",
            Self::DateRange { .. } => "date.range",
            Self::ArrayMinLength { .. } => "array.min_length",
            Self::ArrayMaxLength { .. } => "array.max_length",
            Self::ArrayRangeLength { .. } => "array.range_length",
            Self::Unrepeatable => "array.unrepeatable",
            Self::EqualTo { .. } => "equal_to",
        }
    }

    /// Returns the built-in English template.
    #[must_use]
    pub fn default_template(&self) -> &'static str {
        match self {
            Self::Required => "This field is required",
            Self::Invalid { kind } => match kind {
                Kind::Mixed => "Please enter a valid value",
                Kind::String => "Please enter a valid string",
                Kind::Number => "Please enter a valid number",
                Kind::Boolean => "Please enter a valid boolean",
                Kind::Date => "Please enter a valid date",
                Kind::Array => "Please enter a valid array",
                Kind::Object => "Please enter a valid object",
            },
            Self::MinLength { .. } => "Must be at least {min} characters",
            Self::MaxLength { .. } => "Must be at most {max} characters",
            Self::RangeLength { .. } => "Must be between {min} and {max} characters",
            Self::Pattern => "Does not match the required pattern",
            Self::Email => "Please enter a valid email address",
            Self::Url => "Please enter a valid URL",
            Self::ContainsLetter => "Must contain at least one letter",
            Self::ContainsUppercaseLetter => "Must contain at least one uppercase letter",
            Self::ContainsLowercaseLetter => "Must contain at least one lowercase letter",
            Self::ContainsNumber => "Must contain at least one number",
            Self::OneOf { .. } => "Must be one of: {values}",
            Self::Integer => "Must be an integer",
            Self::Min { .. } => "Must be at least {min}",
            Self::Max { .. } => "Must be at most {max}",
            Self::Range { .. } | Self::DateRange { .. } => "Must be between {min} and {max}",
            Self::DateMin { .. } => "Must not be before {min}",
            Self::DateMax { .. } => "Must not be after {max}",
            Self::ArrayMinLength { .. } => "Must contain at least {min} items",
            Self::ArrayMaxLength { .. } => "Must contain at most {max} items",
            Self::ArrayRangeLength { .. } => "Must contain between {min} and {max} items",
            Self::Unrepeatable => "Items must not repeat",
            Self::EqualTo { .. } => "Must match {field}",
        }
    }

    /// Returns the template parameters as name/value pairs.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::MinLength { min } | Self::ArrayMinLength { min } => vec![("min", min.to_string())],
            Self::MaxLength { max } | Self::ArrayMaxLength { max } => vec![("max", max.to_string())],
            Self::RangeLength { min, max } | Self::ArrayRangeLength { min, max } => {
                vec![("min", min.to_string()), ("max", max.to_string())]
            }
            Self::OneOf { values } => vec![("values", values.clone())],
            Self::Min { min } => vec![("min", min.to_string())],
            Self::Max { max } => vec![("max", max.to_string())],
            Self::Range { min, max } => vec![("min", min.to_string()), ("max", max.to_string())],
            Self::DateMin { min } => vec![("min", min.to_rfc3339())],
            Self::DateMax { max } => vec![("max", max.to_rfc3339())],
            Self::DateRange { min, max } => {
                vec![("min", min.to_rfc3339()), ("max", max.to_rfc3339())]
            }
            Self::EqualTo { field } => vec![("field", field.clone())],
            _ => Vec::new(),
        }
    }
}
