//! TeamForge - skill-based participant to team matching.
//!
//! Participants register with a set of skills and an experience level;
//! teams post requirements naming the skills and minimum experience they
//! need. A [`TeamRegistry`] holds both collections and fills open slots
//! greedily, first come first served.
//!
//! # Example
//!
//! ```
//! use teamforge::prelude::*;
//!
//! let mut registry = TeamRegistry::new();
//! let ada = registry
//!     .register_participant(
//!         ParticipantDraft::new("Ada", "ada@example.com").with_skills(["rust", "sql"]),
//!     )
//!     .unwrap();
//! let team = registry
//!     .submit_requirement(RequirementDraft::new("Backend", 1).with_skills(["rust"]))
//!     .unwrap();
//!
//! assert_eq!(registry.participant(ada).unwrap().team(), Some(team));
//! assert!(registry.requirement(team).unwrap().is_completed());
//! ```

mod error;
mod registry;
mod shared;

pub use error::RegistryError;
pub use registry::TeamRegistry;
pub use shared::SharedRegistry;

// Domain types
pub use teamforge_core::{
    check_consistency, Assignment, ExperienceLevel, Participant, ParticipantDraft, ParticipantId,
    RequiredExperience, Requirement, RequirementDraft, RequirementId, SkillSet, TeamForgeError,
};

// Matching
pub use teamforge_matching::{
    CountingMatchListener, LoggingMatchListener, MatchError, MatchListener, MatchReport,
    MatchedPair, ParticipantStatus, RosterSummary,
};

// Configuration and persistence
pub use teamforge_config::TeamForgeConfig;
pub use teamforge_store::{JsonFileStore, MemoryStore, Snapshot, StateStore, StoreError};

#[cfg(feature = "console")]
pub use teamforge_console as console;

pub mod prelude {
    pub use super::{
        ExperienceLevel, MatchError, MatchReport, ParticipantDraft, ParticipantId,
        RegistryError, RequiredExperience, RequirementDraft, RequirementId, SharedRegistry,
        TeamForgeConfig, TeamRegistry,
    };
}
