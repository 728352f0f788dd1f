//! # Formschema
//!
//! Declarative, schema-driven validation for form-like records.
//!
//! Formschema provides a structured approach to validating field values
//! with support for:
//!
//! - **Typed builders**: string, number, boolean, date, array, object and
//!   mixed types with chainable built-in rules
//! - **Custom rules**: synchronous closures, future-returning closures and
//!   `async_trait` rule types, run strictly in order with short-circuiting
//! - **Cross-field checks**: every rule sees the whole record
//! - **Nesting**: array item types and nested object schemas
//! - **Caller-defined messages**: any payload type, with a configurable
//!   catalog of default English messages for `String`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use formschema::prelude::*;
//! use serde_json::json;
//!
//! let schema = Schema::new()
//!     .field("email", StringType::new().required().is_email())
//!     .field("password", StringType::new().required().min_length(8))
//!     .field("confirm", StringType::new().equal_to("password"));
//!
//! let record = json!({"email": "ada@example.com", "password": "hunter22"});
//! let result = schema.check(&record).await?;
//! assert!(result.is_valid());
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod core;
pub mod errors;
pub mod messages;
pub mod rules;
pub mod schema;
pub mod testing;
pub mod types;

pub use crate::core::{CheckResult, Checked, Record, RuleOutcome, SchemaCheckResult};
pub use crate::errors::{CatalogError, CheckError};
pub use crate::schema::Schema;
pub use crate::types::{Type, TypeBuilder};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        CheckResult, Checked, IntoRuleOutcome, NoRecord, Record, RuleOutcome, RuleResult,
        SchemaCheckResult,
    };
    pub use crate::errors::{CatalogError, CheckError};
    pub use crate::messages::{
        clear_message_catalog, set_message_catalog, ErrorMessage, MessageCatalog, MessageKey,
    };
    pub use crate::rules::{AsyncRule, Rule};
    pub use crate::schema::Schema;
    pub use crate::types::{
        ArrayType, BooleanType, DateType, Kind, MixedType, NumberType, ObjectType, StringType,
        Type, TypeBuilder, TypeKind,
    };
}
