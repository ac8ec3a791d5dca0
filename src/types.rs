//! Result types produced by the evaluator.

/// Qualitative strength tier derived from the percentage score.
///
/// `None` is reserved for empty input; the other four tiers are a step
/// function of the percentage (see [`StrengthLevel::from_percentage`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum StrengthLevel {
    None = 0,
    Weak = 1,
    Medium = 2,
    Good = 3,
    Strong = 4,
}

impl StrengthLevel {
    /// Maps a percentage score in [0, 100] to its tier.
    ///
    /// Only meaningful for non-empty input; empty input short-circuits to
    /// [`StrengthLevel::None`] before any scoring happens.
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            0..40 => Self::Weak,
            40..70 => Self::Medium,
            70..90 => Self::Good,
            _ => Self::Strong,
        }
    }

    /// Human-readable label for this tier.
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Graded strength assessment for a single candidate password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthAssessment {
    pub level: StrengthLevel,
    /// Score in [0, 100]; a meter widget renders this directly.
    pub percentage: u8,
}

impl StrengthAssessment {
    pub fn label(&self) -> &'static str {
        self.level.label()
    }
}

/// Strict pass/fail report with one error per unmet hard requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Assessment plus suggestions, computed in one call for form layers that
/// render both the meter and the hint list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    pub assessment: StrengthAssessment,
    pub suggestions: Vec<String>,
}
