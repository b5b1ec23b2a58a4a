//! Builders for participants and requirements.
//!
//! Defaults are filled from the id so that every built value is valid and
//! unique: name `"Participant 7"`, contact `"p7@example.com"`, team name
//! `"Team 3"`.

use teamforge_core::{
    ExperienceLevel, Participant, ParticipantDraft, ParticipantId, RequiredExperience, Requirement,
    RequirementDraft, RequirementId,
};

/// Starts a participant with the given id.
pub fn participant(id: u64) -> ParticipantBuilder {
    ParticipantBuilder::new(id)
}

/// Starts a requirement with the given id and target size.
pub fn requirement(id: u64, target_size: usize) -> RequirementBuilder {
    RequirementBuilder::new(id, target_size)
}

#[derive(Debug, Clone)]
pub struct ParticipantBuilder {
    id: u64,
    draft: ParticipantDraft,
}

impl ParticipantBuilder {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            draft: ParticipantDraft::new(format!("Participant {}", id), format!("p{}@example.com", id)),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.draft.name = name.into();
        self
    }

    pub fn contact(mut self, contact: impl Into<String>) -> Self {
        self.draft.contact = contact.into();
        self
    }

    pub fn experience(mut self, experience: ExperienceLevel) -> Self {
        self.draft.experience = experience;
        self
    }

    pub fn skills<S: AsRef<str>>(mut self, skills: impl IntoIterator<Item = S>) -> Self {
        self.draft.skills.extend(skills);
        self
    }

    pub fn languages(mut self, languages: impl Into<String>) -> Self {
        self.draft.languages = languages.into();
        self
    }

    /// Returns the draft, for registry-level tests.
    pub fn draft(self) -> ParticipantDraft {
        self.draft
    }

    pub fn build(self) -> Participant {
        Participant::from_draft(ParticipantId(self.id), self.draft)
    }
}

#[derive(Debug, Clone)]
pub struct RequirementBuilder {
    id: u64,
    draft: RequirementDraft,
}

impl RequirementBuilder {
    pub fn new(id: u64, target_size: usize) -> Self {
        Self {
            id,
            draft: RequirementDraft::new(format!("Team {}", id), target_size),
        }
    }

    pub fn team_name(mut self, team_name: impl Into<String>) -> Self {
        self.draft.team_name = team_name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.draft.description = description.into();
        self
    }

    pub fn skills<S: AsRef<str>>(mut self, skills: impl IntoIterator<Item = S>) -> Self {
        self.draft.required_skills.extend(skills);
        self
    }

    pub fn min_experience(mut self, min_experience: impl Into<RequiredExperience>) -> Self {
        self.draft.min_experience = min_experience.into();
        self
    }

    pub fn draft(self) -> RequirementDraft {
        self.draft
    }

    pub fn build(self) -> Requirement {
        Requirement::from_draft(RequirementId(self.id), self.draft)
    }
}
