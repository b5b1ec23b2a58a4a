//! Registered participants.

use super::draft::normalize_contact;
use super::{ExperienceLevel, ParticipantDraft, ParticipantId, RequirementId, SkillSet};

/// Assignment state of a participant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Assignment {
    #[default]
    Unassigned,
    /// Back-reference to the requirement this participant was matched to.
    Assigned(RequirementId),
}

/// A registered participant.
///
/// Only [`Requirement::admit`](super::Requirement::admit) changes the
/// assignment, so a participant belongs to at most one requirement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Participant {
    id: ParticipantId,
    name: String,
    contact: String,
    experience: ExperienceLevel,
    skills: SkillSet,
    languages: String,
    #[cfg_attr(feature = "serde", serde(default))]
    assignment: Assignment,
}

impl Participant {
    /// Creates an unassigned participant from a validated draft.
    pub fn from_draft(id: ParticipantId, draft: ParticipantDraft) -> Self {
        Self {
            id,
            name: draft.name,
            contact: draft.contact.trim().to_string(),
            experience: draft.experience,
            skills: draft.skills,
            languages: draft.languages,
            assignment: Assignment::Unassigned,
        }
    }

    #[inline]
    pub fn id(&self) -> ParticipantId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Contact identifier in the form used for duplicate detection.
    pub fn normalized_contact(&self) -> String {
        normalize_contact(&self.contact)
    }

    #[inline]
    pub fn experience(&self) -> ExperienceLevel {
        self.experience
    }

    pub fn skills(&self) -> &SkillSet {
        &self.skills
    }

    /// Free-text language list; `None` when left blank.
    pub fn languages(&self) -> Option<&str> {
        let languages = self.languages.trim();
        (!languages.is_empty()).then_some(languages)
    }

    #[inline]
    pub fn assignment(&self) -> Assignment {
        self.assignment
    }

    #[inline]
    pub fn is_assigned(&self) -> bool {
        matches!(self.assignment, Assignment::Assigned(_))
    }

    /// The requirement this participant is matched to, if any.
    #[inline]
    pub fn team(&self) -> Option<RequirementId> {
        match self.assignment {
            Assignment::Assigned(id) => Some(id),
            Assignment::Unassigned => None,
        }
    }

    pub(super) fn bind_to(&mut self, requirement: RequirementId) {
        debug_assert!(!self.is_assigned());
        self.assignment = Assignment::Assigned(requirement);
    }
}
