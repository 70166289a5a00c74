//! Converter configuration.
//!
//! Configuration is resolved once by the host (for example from its own settings file or
//! environment at startup) and passed by reference into every conversion. Nothing in this
//! crate reads process-wide state while converting.

use std::fmt;
use std::str::FromStr;

/// What to do when a business-object choice value holds a type the target field does not
/// declare.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChoicePolicy {
    /// Return [`crate::ConvertError::InvalidChoiceType`].
    #[default]
    Fail,
    /// Log a warning and emit the choice wrapper with no variant set.
    EmptyMessage,
}

impl ChoicePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChoicePolicy::Fail => "fail",
            ChoicePolicy::EmptyMessage => "empty-message",
        }
    }
}

impl fmt::Display for ChoicePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A choice policy name that is not `fail` or `empty-message`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown choice policy '{0}' (expected 'fail' or 'empty-message')")]
pub struct ChoicePolicyError(pub String);

impl FromStr for ChoicePolicy {
    type Err = ChoicePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" => Ok(ChoicePolicy::Fail),
            "empty-message" | "empty_message" => Ok(ChoicePolicy::EmptyMessage),
            _ => Err(ChoicePolicyError(s.to_string())),
        }
    }
}

/// Parse the choice policy from an optional configuration value.
///
/// If `value` is `None` or empty/whitespace, returns the default policy.
///
/// # Errors
///
/// Returns [`ChoicePolicyError`] for any other value that is not a policy name.
pub fn choice_policy_from_value(value: Option<String>) -> Result<ChoicePolicy, ChoicePolicyError> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let parsed = value.map(|v| v.parse::<ChoicePolicy>()).transpose()?;

    Ok(parsed.unwrap_or_default())
}

/// Converter configuration resolved at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConverterConfig {
    choice_policy: ChoicePolicy,
}

impl ConverterConfig {
    pub fn new(choice_policy: ChoicePolicy) -> Self {
        Self { choice_policy }
    }

    pub fn choice_policy(&self) -> ChoicePolicy {
        self.choice_policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_fails() {
        assert_eq!(ConverterConfig::default().choice_policy(), ChoicePolicy::Fail);
    }

    #[test]
    fn parses_policy_names() {
        assert_eq!("fail".parse::<ChoicePolicy>(), Ok(ChoicePolicy::Fail));
        assert_eq!(
            " Empty-Message ".parse::<ChoicePolicy>(),
            Ok(ChoicePolicy::EmptyMessage)
        );
        assert_eq!(
            "ignore".parse::<ChoicePolicy>(),
            Err(ChoicePolicyError("ignore".to_string()))
        );
    }

    #[test]
    fn policy_name_round_trips_through_display() {
        for policy in [ChoicePolicy::Fail, ChoicePolicy::EmptyMessage] {
            assert_eq!(policy.to_string().parse::<ChoicePolicy>(), Ok(policy));
        }
    }

    #[test]
    fn blank_value_falls_back_to_default() {
        assert_eq!(choice_policy_from_value(None), Ok(ChoicePolicy::Fail));
        assert_eq!(
            choice_policy_from_value(Some("   ".to_string())),
            Ok(ChoicePolicy::Fail)
        );
        assert_eq!(
            choice_policy_from_value(Some("empty-message".to_string())),
            Ok(ChoicePolicy::EmptyMessage)
        );
        assert!(choice_policy_from_value(Some("sometimes".to_string())).is_err());
    }
}
