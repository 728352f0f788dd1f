//! Error types for the formschema crate.
//!
//! Validation failures are never errors: they are reported through
//! [`CheckResult`](crate::core::CheckResult). The types here cover the
//! programming mistakes a check can surface instead.

use thiserror::Error;

/// A fault raised while checking a value or a record.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The schema has no declaration for the requested field.
    #[error("Unknown field: '{field}' is not declared in the schema")]
    UnknownField {
        /// The requested field name.
        field: String,
    },

    /// A rule implementation returned an error instead of an outcome.
    #[error("Rule {index} failed to evaluate{}: {source}", fmt_path(.path))]
    RuleFault {
        /// Location of the value inside the record (`address.zip`, `tags[2]`).
        path: String,
        /// Position of the rule in its type's chain.
        index: usize,
        /// The error returned by the rule.
        #[source]
        source: anyhow::Error,
    },

    /// A synchronous result was requested from a check that suspended on an
    /// asynchronous rule.
    #[error("Check is pending on an asynchronous rule")]
    Pending,
}

fn fmt_path(path: &str) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!(" at '{path}'")
    }
}

impl CheckError {
    /// Creates an unknown field error.
    #[must_use]
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }

    /// Creates a rule fault for the rule at `index`.
    #[must_use]
    pub fn rule_fault(index: usize, source: anyhow::Error) -> Self {
        Self::RuleFault {
            path: String::new(),
            index,
            source,
        }
    }

    /// Returns true for [`CheckError::UnknownField`].
    #[must_use]
    pub fn is_unknown_field(&self) -> bool {
        matches!(self, Self::UnknownField { .. })
    }

    /// Returns true for [`CheckError::RuleFault`].
    #[must_use]
    pub fn is_rule_fault(&self) -> bool {
        matches!(self, Self::RuleFault { .. })
    }

    /// Prefixes the fault path with a field name.
    #[must_use]
    pub fn within_field(self, field: &str) -> Self {
        self.prefix_path(field)
    }

    /// Prefixes the fault path with an array index.
    #[must_use]
    pub fn within_index(self, index: usize) -> Self {
        self.prefix_path(&format!("[{index}]"))
    }

    fn prefix_path(self, segment: &str) -> Self {
        match self {
            Self::RuleFault {
                path,
                index,
                source,
            } => {
                let path = if path.is_empty() {
                    segment.to_string()
                } else if path.starts_with('[') {
                    format!("{segment}{path}")
                } else {
                    format!("{segment}.{path}")
                };
                Self::RuleFault {
                    path,
                    index,
                    source,
                }
            }
            other => other,
        }
    }
}

/// Errors raised while loading a message catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog is not valid JSON or has the wrong shape.
    #[error("Serialization error: {0}")]
    Parse(#[from] serde_json::Error),
}
