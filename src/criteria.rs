//! The five password-content criteria shared by the scorer, the feedback
//! generator and the strict validator.
//!
//! Each criterion is an independent check against the candidate; callers
//! always evaluate all of them, in the fixed order given by
//! [`Criterion::ALL`].

pub const MIN_LENGTH: usize = 8;

/// Exact special-character set accepted by the special criterion. Character
/// classes are deliberate set-membership checks rather than regex so the
/// accepted set cannot drift with a regex dialect.
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl Criterion {
    /// Fixed evaluation and reporting order.
    pub const ALL: [Criterion; 5] = [
        Criterion::MinLength,
        Criterion::Uppercase,
        Criterion::Lowercase,
        Criterion::Digit,
        Criterion::Special,
    ];

    /// Whether the candidate satisfies this criterion. Non-ASCII content
    /// simply fails the character-class checks; nothing panics.
    pub fn is_met(self, pwd: &str) -> bool {
        match self {
            Criterion::MinLength => pwd.chars().count() >= MIN_LENGTH,
            Criterion::Uppercase => pwd.chars().any(|c| c.is_ascii_uppercase()),
            Criterion::Lowercase => pwd.chars().any(|c| c.is_ascii_lowercase()),
            Criterion::Digit => pwd.chars().any(|c| c.is_ascii_digit()),
            Criterion::Special => pwd.chars().any(|c| SPECIAL_CHARS.contains(c)),
        }
    }

    /// Improvement suggestion shown while the user is still typing.
    pub fn suggestion(self) -> &'static str {
        match self {
            Criterion::MinLength => "Use at least 8 characters",
            Criterion::Uppercase => "Add an uppercase letter",
            Criterion::Lowercase => "Add a lowercase letter",
            Criterion::Digit => "Add a number",
            Criterion::Special => "Add a special character",
        }
    }

    /// Hard-requirement error used by the strict validator.
    pub fn requirement(self) -> &'static str {
        match self {
            Criterion::MinLength => "Password must be at least 8 characters long",
            Criterion::Uppercase => "Password must contain at least one uppercase letter",
            Criterion::Lowercase => "Password must contain at least one lowercase letter",
            Criterion::Digit => "Password must contain at least one number",
            Criterion::Special => "Password must contain at least one special character",
        }
    }
}

/// Number of satisfied criteria, 0..=5.
pub fn met_count(pwd: &str) -> usize {
    Criterion::ALL.iter().filter(|c| c.is_met(pwd)).count()
}
