//! Domain model for matching participants to team requirements
//!
//! - `Participant`: a registered individual, assignable to at most one team
//! - `Requirement`: a team request with a fixed size and skill needs
//! - `SkillSet`: insertion-ordered, deduplicated skill names
//! - `ExperienceLevel` / `RequiredExperience`: ordinal experience model

mod draft;
mod experience;
mod ids;
mod participant;
mod requirement;
mod skills;

#[cfg(test)]
mod tests;

pub use draft::{ParticipantDraft, RequirementDraft};
pub use experience::{ExperienceLevel, RequiredExperience};
pub use ids::{ParticipantId, RequirementId};
pub use participant::{Assignment, Participant};
pub use requirement::{check_consistency, Requirement};
pub use skills::SkillSet;
