//! TeamForge Core - Domain types for participant/team matching
//!
//! This crate provides the fundamental data model for TeamForge:
//! - Participants with skills and an experience level
//! - Requirements describing a team to be filled
//! - Drafts: validated input shapes handed in by the caller
//! - The assignment primitive that binds a participant to a requirement

pub mod domain;
pub mod error;

pub use domain::{
    check_consistency, Assignment, ExperienceLevel, Participant, ParticipantDraft, ParticipantId,
    RequiredExperience, Requirement, RequirementDraft, RequirementId, SkillSet,
};
pub use error::{Result, TeamForgeError};
