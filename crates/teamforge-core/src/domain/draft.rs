//! Input drafts handed to the registry by the input collector.

use crate::error::{Result, TeamForgeError};

use super::{ExperienceLevel, RequiredExperience, SkillSet};

/// A participant as submitted on the registration form.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticipantDraft {
    pub name: String,
    /// Contact identifier (an e-mail address in practice). Used as dedup key.
    pub contact: String,
    pub experience: ExperienceLevel,
    pub skills: SkillSet,
    /// Free-text list of spoken languages.
    pub languages: String,
}

impl ParticipantDraft {
    /// Creates a draft with no skills and beginner experience.
    pub fn new(name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
            ..Self::default()
        }
    }

    pub fn with_experience(mut self, experience: ExperienceLevel) -> Self {
        self.experience = experience;
        self
    }

    pub fn with_skills<S: AsRef<str>>(mut self, skills: impl IntoIterator<Item = S>) -> Self {
        self.skills.extend(skills);
        self
    }

    pub fn with_languages(mut self, languages: impl Into<String>) -> Self {
        self.languages = languages.into();
        self
    }

    /// Contact identifier in the form used for duplicate detection.
    pub fn normalized_contact(&self) -> String {
        normalize_contact(&self.contact)
    }

    /// Checks the draft on its own. Contact uniqueness needs the registry
    /// and is checked there.
    ///
    /// # Errors
    ///
    /// Returns [`TeamForgeError::EmptySkills`] if no skill was selected.
    pub fn validate(&self) -> Result<()> {
        if self.skills.is_empty() {
            return Err(TeamForgeError::EmptySkills);
        }
        Ok(())
    }
}

/// A team requirement as submitted on the requirement form.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequirementDraft {
    pub team_name: String,
    pub description: String,
    pub target_size: usize,
    pub required_skills: SkillSet,
    pub min_experience: RequiredExperience,
}

impl Default for RequirementDraft {
    fn default() -> Self {
        Self {
            team_name: String::new(),
            description: String::new(),
            target_size: 1,
            required_skills: SkillSet::new(),
            min_experience: RequiredExperience::Any,
        }
    }
}

impl RequirementDraft {
    /// Creates a draft for a team of `target_size` with no skill needs yet.
    pub fn new(team_name: impl Into<String>, target_size: usize) -> Self {
        Self {
            team_name: team_name.into(),
            target_size,
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_skills<S: AsRef<str>>(mut self, skills: impl IntoIterator<Item = S>) -> Self {
        self.required_skills.extend(skills);
        self
    }

    pub fn with_min_experience(mut self, min_experience: impl Into<RequiredExperience>) -> Self {
        self.min_experience = min_experience.into();
        self
    }

    /// # Errors
    ///
    /// Returns [`TeamForgeError::InvalidTeamSize`] for a zero target size and
    /// [`TeamForgeError::EmptySkills`] if no skill is required.
    pub fn validate(&self) -> Result<()> {
        if self.target_size == 0 {
            return Err(TeamForgeError::InvalidTeamSize(self.target_size));
        }
        if self.required_skills.is_empty() {
            return Err(TeamForgeError::EmptySkills);
        }
        Ok(())
    }
}

pub(crate) fn normalize_contact(contact: &str) -> String {
    contact.trim().to_lowercase()
}
