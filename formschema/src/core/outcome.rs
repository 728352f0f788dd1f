//! Rule outcomes and the conversions rules may return.

use super::CheckResult;

/// Result of evaluating one rule. An `Err` is a fault in the rule itself,
/// never a validation failure.
pub type RuleResult<M> = Result<RuleOutcome<M>, anyhow::Error>;

/// What a rule decided about a value.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleOutcome<M> {
    /// The value passed.
    Pass,
    /// The value failed. `None` uses the message bound to the rule, then the
    /// type's default message.
    Fail(Option<M>),
    /// A complete result that decides both pass/fail and the message.
    Custom(CheckResult<M>),
}

impl<M> RuleOutcome<M> {
    /// Creates a failure with its own message.
    pub fn fail(message: impl Into<M>) -> Self {
        Self::Fail(Some(message.into()))
    }

    /// Returns true if the outcome rejects the value.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        match self {
            Self::Pass => false,
            Self::Fail(_) => true,
            Self::Custom(result) => result.has_error,
        }
    }
}

/// Conversion from the values a rule may return into a [`RuleResult`].
///
/// `true` and `()` pass, `false` fails with the bound message, a
/// [`CheckResult`] is used verbatim, and `Err` becomes a rule fault.
pub trait IntoRuleOutcome<M> {
    /// Performs the conversion.
    fn into_rule_result(self) -> RuleResult<M>;
}

impl<M> IntoRuleOutcome<M> for bool {
    fn into_rule_result(self) -> RuleResult<M> {
        Ok(if self {
            RuleOutcome::Pass
        } else {
            RuleOutcome::Fail(None)
        })
    }
}

impl<M> IntoRuleOutcome<M> for () {
    fn into_rule_result(self) -> RuleResult<M> {
        Ok(RuleOutcome::Pass)
    }
}

impl<M> IntoRuleOutcome<M> for RuleOutcome<M> {
    fn into_rule_result(self) -> RuleResult<M> {
        Ok(self)
    }
}

impl<M> IntoRuleOutcome<M> for CheckResult<M> {
    fn into_rule_result(self) -> RuleResult<M> {
        Ok(RuleOutcome::Custom(self))
    }
}

impl<M, T, E> IntoRuleOutcome<M> for Result<T, E>
where
    T: IntoRuleOutcome<M>,
    E: Into<anyhow::Error>,
{
    fn into_rule_result(self) -> RuleResult<M> {
        self.map_err(Into::into).and_then(T::into_rule_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert<R: IntoRuleOutcome<String>>(value: R) -> RuleResult<String> {
        value.into_rule_result()
    }

    #[test]
    fn test_bool_conversion() {
        assert_eq!(convert(true).unwrap(), RuleOutcome::Pass);
        assert_eq!(convert(false).unwrap(), RuleOutcome::Fail(None));
    }

    #[test]
    fn test_unit_passes() {
        assert_eq!(convert(()).unwrap(), RuleOutcome::Pass);
    }

    #[test]
    fn test_check_result_is_custom() {
        let outcome = convert(CheckResult::error("custom".to_string())).unwrap();
        assert!(outcome.is_failure());
        assert!(matches!(outcome, RuleOutcome::Custom(_)));

        let outcome = convert(CheckResult::<String>::valid()).unwrap();
        assert!(!outcome.is_failure());
    }

    #[test]
    fn test_result_conversion() {
        let ok: Result<bool, anyhow::Error> = Ok(false);
        assert_eq!(convert(ok).unwrap(), RuleOutcome::Fail(None));

        let err: Result<bool, std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "lookup failed"));
        let fault = convert(err).unwrap_err();
        assert_eq!(fault.to_string(), "lookup failed");
    }

    #[test]
    fn test_fail_with_message() {
        let outcome: RuleOutcome<String> = RuleOutcome::fail("too short");
        assert_eq!(outcome, RuleOutcome::Fail(Some("too short".to_string())));
    }
}
