//! Error types for TeamForge

use thiserror::Error;

/// Main error type for TeamForge operations.
///
/// These are all validation or state errors: none of them leave the
/// participant/requirement collections partially mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamForgeError {
    /// A participant or requirement draft selected no skills.
    #[error("Validation error: at least one skill must be selected")]
    EmptySkills,

    /// A participant with the same contact identifier is already registered.
    #[error("Validation error: participant with contact '{0}' already exists")]
    DuplicateContact(String),

    /// A requirement asked for a team of zero members.
    #[error("Validation error: team size must be positive, got {0}")]
    InvalidTeamSize(usize),

    /// Restored or externally built state violates an assignment invariant.
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type alias for TeamForge operations
pub type Result<T> = std::result::Result<T, TeamForgeError>;
