//! Declarative request-body validation.
//!
//! Route modules build an immutable [`RuleSet`] once at startup (via
//! `std::sync::LazyLock`) mapping each body field to an ordered list of
//! rules. [`RuleSet::validate`] runs the rules against the raw JSON body
//! before it is deserialized into a typed payload, so the business logic
//! always receives the submitted input unmodified.

pub mod rules;

use serde_json::Value;

use crate::error::AppError;

/// A named predicate together with its positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Required,
    Email,
    MinLength(usize),
}

impl Predicate {
    pub fn check(&self, value: &Value) -> bool {
        match self {
            Predicate::Required => rules::is_required(value),
            Predicate::Email => rules::is_email(value),
            Predicate::MinLength(length) => rules::min_length(value, *length),
        }
    }
}

/// A predicate plus the message reported when it fails.
#[derive(Debug, Clone)]
pub struct ValidationRule {
    predicate: Predicate,
    message: String,
}

impl ValidationRule {
    pub fn new(predicate: Predicate, message: impl Into<String>) -> Self {
        Self {
            predicate,
            message: message.into(),
        }
    }

    pub fn required(message: impl Into<String>) -> Self {
        Self::new(Predicate::Required, message)
    }

    pub fn email(message: impl Into<String>) -> Self {
        Self::new(Predicate::Email, message)
    }

    pub fn min_length(length: usize, message: impl Into<String>) -> Self {
        Self::new(Predicate::MinLength(length), message)
    }
}

/// Ordered mapping from field name to its validation rules.
///
/// Field order is declaration order and it matters: validation stops at the
/// first failing rule anywhere in the set, not merely within one field.
/// Collecting every violation would change the observable contract, so the
/// global short-circuit is kept on purpose.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    fields: Vec<(String, Vec<ValidationRule>)>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field and its ordered rules. Builder-style, used at
    /// startup only.
    pub fn field(mut self, name: impl Into<String>, rules: Vec<ValidationRule>) -> Self {
        self.fields.push((name.into(), rules));
        self
    }

    /// Runs the pipeline against a JSON body. An absent field is checked as
    /// `Value::Null`. Returns the first failing rule's message wrapped in
    /// [`AppError::Validation`]; the body itself is never touched.
    pub fn validate(&self, body: &Value) -> Result<(), AppError> {
        for (field, field_rules) in &self.fields {
            let value = body.get(field).unwrap_or(&Value::Null);
            for rule in field_rules {
                if !rule.predicate.check(value) {
                    return Err(AppError::Validation(rule.message.clone()));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(result: Result<(), AppError>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    fn signup_rules() -> RuleSet {
        RuleSet::new()
            .field(
                "username",
                vec![
                    ValidationRule::required("Username is required"),
                    ValidationRule::min_length(3, "Username must be at least 3 characters"),
                ],
            )
            .field(
                "email",
                vec![
                    ValidationRule::required("Email is required"),
                    ValidationRule::email("Email is invalid"),
                ],
            )
    }

    #[test]
    fn passes_when_every_rule_holds() {
        let body = json!({"username": "alice", "email": "alice@example.com"});
        assert!(signup_rules().validate(&body).is_ok());
    }

    #[test]
    fn reports_first_failing_rule_of_a_field() {
        let body = json!({"username": "al", "email": "alice@example.com"});
        assert_eq!(
            message(signup_rules().validate(&body)),
            "Username must be at least 3 characters"
        );
    }

    #[test]
    fn earliest_declared_field_wins_when_several_fail() {
        // Both fields fail; the reported message belongs to the field
        // declared first, regardless of body key order.
        let body = json!({"email": "nope", "username": ""});
        assert_eq!(
            message(signup_rules().validate(&body)),
            "Username is required"
        );
    }

    #[test]
    fn stops_at_first_failure_across_fields() {
        // A failure in the first field must mask the second field's failure
        // entirely (global short-circuit, not per-field).
        let body = json!({"username": "", "email": "also-bad"});
        assert_eq!(
            message(signup_rules().validate(&body)),
            "Username is required"
        );
    }

    #[test]
    fn absent_field_is_checked_as_null() {
        let body = json!({});
        assert_eq!(
            message(signup_rules().validate(&body)),
            "Username is required"
        );
    }

    #[test]
    fn non_object_body_fails_on_first_required_field() {
        assert_eq!(
            message(signup_rules().validate(&json!("just a string"))),
            "Username is required"
        );
    }

    #[test]
    fn input_is_not_modified_by_validation() {
        let body = json!({"username": "alice", "email": "alice@example.com", "extra": 1});
        let before = body.clone();
        signup_rules().validate(&body).unwrap();
        assert_eq!(body, before);
    }

    #[test]
    fn empty_rule_set_always_passes() {
        assert!(RuleSet::new().validate(&json!({})).is_ok());
        assert!(RuleSet::new().validate(&Value::Null).is_ok());
    }

    #[test]
    fn rules_run_in_declaration_order_within_a_field() {
        let rules = RuleSet::new().field(
            "password",
            vec![
                ValidationRule::min_length(8, "Password too short"),
                ValidationRule::required("Password is required"),
            ],
        );
        // min_length is declared first, so a missing value reports the
        // length message even though required would also fail.
        assert_eq!(
            message(rules.validate(&json!({}))),
            "Password too short"
        );
    }
}
