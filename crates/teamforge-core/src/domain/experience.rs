//! Ordinal experience model.

use std::fmt;

/// A participant's self-declared experience.
///
/// Ordered `Beginner < Intermediate < Advanced`.
///
/// # Examples
///
/// ```
/// use teamforge_core::ExperienceLevel;
///
/// assert_eq!(ExperienceLevel::parse_label("advanced"), ExperienceLevel::Advanced);
/// // Unknown labels fall back to the lowest rank.
/// assert_eq!(ExperienceLevel::parse_label("guru"), ExperienceLevel::Beginner);
/// assert!(ExperienceLevel::Intermediate < ExperienceLevel::Advanced);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    /// All levels, lowest first.
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
    ];

    /// Ordinal rank: beginner=1, intermediate=2, advanced=3.
    #[inline]
    pub const fn rank(self) -> u8 {
        match self {
            ExperienceLevel::Beginner => 1,
            ExperienceLevel::Intermediate => 2,
            ExperienceLevel::Advanced => 3,
        }
    }

    /// Parses a free-form label, case-insensitively.
    ///
    /// Total: any unrecognized label maps to `Beginner`.
    pub fn parse_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "intermediate" => ExperienceLevel::Intermediate,
            "advanced" => ExperienceLevel::Advanced,
            _ => ExperienceLevel::Beginner,
        }
    }

    /// Lowercase label, as entered on the registration form.
    pub const fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
        };
        f.write_str(label)
    }
}

/// Minimum experience a requirement asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RequiredExperience {
    /// No minimum; every participant qualifies.
    #[default]
    Any,
    /// Participant rank must be at least this level's rank.
    AtLeast(ExperienceLevel),
}

impl RequiredExperience {
    /// Parses a requirement label.
    ///
    /// Empty, `"any"` and `"mixed"` mean no minimum. Other labels go through
    /// [`ExperienceLevel::parse_label`], so an unknown label behaves like
    /// `"beginner"`.
    ///
    /// ```
    /// use teamforge_core::{ExperienceLevel, RequiredExperience};
    ///
    /// assert_eq!(RequiredExperience::parse_label("mixed"), RequiredExperience::Any);
    /// assert_eq!(
    ///     RequiredExperience::parse_label("Intermediate"),
    ///     RequiredExperience::AtLeast(ExperienceLevel::Intermediate)
    /// );
    /// ```
    pub fn parse_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "" | "any" | "mixed" => RequiredExperience::Any,
            other => RequiredExperience::AtLeast(ExperienceLevel::parse_label(other)),
        }
    }

    /// Returns the minimum level, if one is set.
    #[inline]
    pub const fn minimum(self) -> Option<ExperienceLevel> {
        match self {
            RequiredExperience::Any => None,
            RequiredExperience::AtLeast(level) => Some(level),
        }
    }
}

impl From<ExperienceLevel> for RequiredExperience {
    fn from(level: ExperienceLevel) -> Self {
        RequiredExperience::AtLeast(level)
    }
}

impl From<Option<ExperienceLevel>> for RequiredExperience {
    fn from(level: Option<ExperienceLevel>) -> Self {
        level.map_or(RequiredExperience::Any, RequiredExperience::AtLeast)
    }
}

impl fmt::Display for RequiredExperience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredExperience::Any => f.write_str("Any"),
            RequiredExperience::AtLeast(level) => write!(f, "{}", level),
        }
    }
}
