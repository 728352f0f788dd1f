//! Core value types shared by types, rules and schemas:
//! - check results for single values and whole records
//! - rule outcomes and their conversions
//! - ready/pending checks
//! - record field access

mod checked;
mod outcome;
mod record;
mod result;

pub use checked::Checked;
pub use outcome::{IntoRuleOutcome, RuleOutcome, RuleResult};
pub use record::{is_absent, is_empty_text, NoRecord, Record};
pub use result::{CheckResult, SchemaCheckResult};
