//! Password strength evaluation library
//!
//! Pure, synchronous scoring, feedback and validation for candidate
//! passwords, plus an optional common-password blacklist.
//!
//! # Features
//!
//! - `async` (default): Enables debounced report delivery over a channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_METER_BLACKLIST_PATH`: Custom path to blacklist file
//!   (default: `./assets/common-passwords.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{feedback, is_strong_enough, score, validate};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abcdefg1!".to_string().into());
//!
//! let assessment = score(&password);
//! assert_eq!(assessment.percentage, 100);
//! assert_eq!(assessment.label(), "Strong");
//!
//! assert!(is_strong_enough(&password));
//! assert!(validate(&password).valid);
//! assert_eq!(feedback(&password).len(), 1);
//! ```

// Internal modules
mod blacklist;
mod criteria;
mod evaluator;
mod feedback;
mod types;
mod validator;

// Public API
pub use blacklist::{
    BLACKLIST_PATH_ENV, BlacklistError, get_blacklist, init_blacklist, init_blacklist_from_path,
    is_blacklisted,
};
pub use criteria::{Criterion, MIN_LENGTH, SPECIAL_CHARS};
pub use evaluator::{is_strong_enough, report, score};
pub use feedback::{EMPTY_PROMPT, STRONG_ACK, feedback};
pub use types::{StrengthAssessment, StrengthLevel, StrengthReport, ValidationResult};
pub use validator::{validate, validate_with_blacklist};

#[cfg(feature = "async")]
pub use evaluator::report_tx;
