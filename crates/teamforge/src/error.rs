//! Errors surfaced by the registry.

use teamforge_core::TeamForgeError;
use teamforge_matching::MatchError;
use teamforge_store::StoreError;
use thiserror::Error;

/// Error type for [`TeamRegistry`](crate::TeamRegistry) operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Input validation failed or restored state is inconsistent.
    #[error(transparent)]
    Invalid(#[from] TeamForgeError),

    /// A targeted match made no assignment.
    #[error(transparent)]
    Match(#[from] MatchError),

    /// Reading or writing the attached store failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl RegistryError {
    /// True if the caller's input was rejected before any state changed.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RegistryError::Invalid(
                TeamForgeError::EmptySkills
                    | TeamForgeError::DuplicateContact(_)
                    | TeamForgeError::InvalidTeamSize(_)
            )
        )
    }
}
