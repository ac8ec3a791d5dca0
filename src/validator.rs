//! Strict pass/fail validation with explicit reasons.
//!
//! Deliberately decoupled from the graded scorer: account-creation flows
//! need a complete list of unmet hard requirements, not a percentage.

use secrecy::{ExposeSecret, SecretString};

use crate::blacklist::is_blacklisted;
use crate::criteria::Criterion;
use crate::types::ValidationResult;

const REQUIRED: &str = "Password is required";
const TOO_COMMON: &str = "Password is too common";

/// Checks every hard requirement and accumulates one error per failure.
///
/// Empty input short-circuits with the single "required" error; otherwise
/// all five requirements are evaluated in the fixed criterion order with no
/// early exit.
pub fn validate(password: &SecretString) -> ValidationResult {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return ValidationResult {
            valid: false,
            errors: vec![REQUIRED.to_string()],
        };
    }

    let errors: Vec<String> = Criterion::ALL
        .iter()
        .filter(|c| !c.is_met(pwd))
        .map(|c| c.requirement().to_string())
        .collect();

    ValidationResult {
        valid: errors.is_empty(),
        errors,
    }
}

/// [`validate`], plus a rejection when the candidate appears in the loaded
/// common-password blacklist. Behaves exactly like [`validate`] when the
/// blacklist was never initialized.
pub fn validate_with_blacklist(password: &SecretString) -> ValidationResult {
    let mut result = validate(password);

    let pwd = password.expose_secret();
    if !pwd.is_empty() && is_blacklisted(pwd) {
        result.errors.push(TOO_COMMON.to_string());
        result.valid = false;
    }

    result
}
