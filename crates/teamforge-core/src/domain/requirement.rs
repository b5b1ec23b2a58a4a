//! Team requirements and the assignment primitive.

use std::collections::{HashMap, HashSet};

use crate::error::{Result, TeamForgeError};

use super::{Participant, ParticipantId, RequiredExperience, RequirementDraft, RequirementId, SkillSet};

/// A team request: a fixed number of slots, the skills every member must
/// have, and a minimum experience.
///
/// Invariants, upheld by [`Requirement::admit`]:
/// - `assigned().len() <= target_size()`
/// - `is_completed()` iff `assigned().len() == target_size()`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Requirement {
    id: RequirementId,
    team_name: String,
    description: String,
    target_size: usize,
    required_skills: SkillSet,
    #[cfg_attr(feature = "serde", serde(default))]
    min_experience: RequiredExperience,
    /// Match order.
    #[cfg_attr(feature = "serde", serde(default))]
    assigned: Vec<ParticipantId>,
    #[cfg_attr(feature = "serde", serde(default))]
    completed: bool,
}

impl Requirement {
    /// Creates an open requirement from a validated draft.
    pub fn from_draft(id: RequirementId, draft: RequirementDraft) -> Self {
        Self {
            id,
            team_name: draft.team_name,
            description: draft.description,
            target_size: draft.target_size,
            required_skills: draft.required_skills,
            min_experience: draft.min_experience,
            assigned: Vec::with_capacity(draft.target_size),
            completed: false,
        }
    }

    #[inline]
    pub fn id(&self) -> RequirementId {
        self.id
    }

    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    /// Project description; `None` when left blank.
    pub fn description(&self) -> Option<&str> {
        let description = self.description.trim();
        (!description.is_empty()).then_some(description)
    }

    #[inline]
    pub fn target_size(&self) -> usize {
        self.target_size
    }

    pub fn required_skills(&self) -> &SkillSet {
        &self.required_skills
    }

    #[inline]
    pub fn min_experience(&self) -> RequiredExperience {
        self.min_experience
    }

    /// Assigned participants, in the order they were matched.
    pub fn assigned(&self) -> &[ParticipantId] {
        &self.assigned
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Number of slots still open.
    #[inline]
    pub fn open_slots(&self) -> usize {
        self.target_size.saturating_sub(self.assigned.len())
    }

    /// `(assigned, target)` for "2/4 members found" style displays.
    pub fn progress(&self) -> (usize, usize) {
        (self.assigned.len(), self.target_size)
    }

    /// Binds `participant` to this requirement.
    ///
    /// Records the participant id here (in match order) and the back-reference
    /// on the participant, then recomputes completion. Refuses, leaving both
    /// sides untouched, when this requirement is full or the participant is
    /// already assigned. Eligibility is the caller's concern.
    ///
    /// # Examples
    ///
    /// ```
    /// use teamforge_core::*;
    ///
    /// let mut req = Requirement::from_draft(
    ///     RequirementId(1),
    ///     RequirementDraft::new("Rustaceans", 1).with_skills(["rust"]),
    /// );
    /// let mut alice = Participant::from_draft(
    ///     ParticipantId(1),
    ///     ParticipantDraft::new("Alice", "alice@example.com").with_skills(["rust"]),
    /// );
    /// let mut bob = Participant::from_draft(
    ///     ParticipantId(2),
    ///     ParticipantDraft::new("Bob", "bob@example.com").with_skills(["rust"]),
    /// );
    ///
    /// assert!(req.admit(&mut alice));
    /// assert!(req.is_completed());
    /// assert!(!req.admit(&mut bob));
    /// assert_eq!(alice.team(), Some(RequirementId(1)));
    /// assert_eq!(bob.team(), None);
    /// ```
    pub fn admit(&mut self, participant: &mut Participant) -> bool {
        if self.completed || self.assigned.len() >= self.target_size || participant.is_assigned() {
            return false;
        }
        self.assigned.push(participant.id());
        participant.bind_to(self.id);
        self.completed = self.assigned.len() == self.target_size;
        true
    }

    /// Checks the invariants local to this requirement.
    ///
    /// # Errors
    ///
    /// Returns [`TeamForgeError::InvalidState`] describing the first violation.
    pub fn check_invariants(&self) -> Result<()> {
        if self.target_size == 0 {
            return Err(TeamForgeError::InvalidState(format!(
                "requirement {} has zero target size",
                self.id
            )));
        }
        if self.required_skills.is_empty() {
            return Err(TeamForgeError::InvalidState(format!(
                "requirement {} requires no skills",
                self.id
            )));
        }
        if self.assigned.len() > self.target_size {
            return Err(TeamForgeError::InvalidState(format!(
                "requirement {} has {} members for {} slots",
                self.id,
                self.assigned.len(),
                self.target_size
            )));
        }
        if self.completed != (self.assigned.len() == self.target_size) {
            return Err(TeamForgeError::InvalidState(format!(
                "requirement {} completion flag disagrees with {}/{} members",
                self.id,
                self.assigned.len(),
                self.target_size
            )));
        }
        let mut seen = HashSet::with_capacity(self.assigned.len());
        if let Some(dup) = self.assigned.iter().find(|id| !seen.insert(**id)) {
            return Err(TeamForgeError::InvalidState(format!(
                "participant {} listed twice in requirement {}",
                dup, self.id
            )));
        }
        Ok(())
    }
}

/// Checks the cross-entity assignment invariants of a whole roster.
///
/// - ids are unique within each collection
/// - every requirement satisfies [`Requirement::check_invariants`]
/// - each participant appears in at most one requirement's assigned list
/// - a participant's back-reference and the requirement's list agree
///
/// # Errors
///
/// Returns [`TeamForgeError::InvalidState`] describing the first violation.
pub fn check_consistency(participants: &[Participant], requirements: &[Requirement]) -> Result<()> {
    let mut by_id: HashMap<ParticipantId, &Participant> = HashMap::with_capacity(participants.len());
    for p in participants {
        if p.skills().is_empty() {
            return Err(TeamForgeError::InvalidState(format!(
                "participant {} has no skills",
                p.id()
            )));
        }
        if by_id.insert(p.id(), p).is_some() {
            return Err(TeamForgeError::InvalidState(format!(
                "duplicate participant id {}",
                p.id()
            )));
        }
    }

    let mut requirement_ids = HashSet::with_capacity(requirements.len());
    let mut owner: HashMap<ParticipantId, RequirementId> = HashMap::new();
    for r in requirements {
        if !requirement_ids.insert(r.id()) {
            return Err(TeamForgeError::InvalidState(format!(
                "duplicate requirement id {}",
                r.id()
            )));
        }
        r.check_invariants()?;
        for &pid in r.assigned() {
            if let Some(prev) = owner.insert(pid, r.id()) {
                return Err(TeamForgeError::InvalidState(format!(
                    "participant {} assigned to both {} and {}",
                    pid,
                    prev,
                    r.id()
                )));
            }
            match by_id.get(&pid) {
                None => {
                    return Err(TeamForgeError::InvalidState(format!(
                        "requirement {} lists unknown participant {}",
                        r.id(),
                        pid
                    )))
                }
                Some(p) if p.team() != Some(r.id()) => {
                    return Err(TeamForgeError::InvalidState(format!(
                        "participant {} does not point back to requirement {}",
                        pid,
                        r.id()
                    )))
                }
                Some(_) => {}
            }
        }
    }

    for p in participants {
        if let Some(team) = p.team() {
            if owner.get(&p.id()) != Some(&team) {
                return Err(TeamForgeError::InvalidState(format!(
                    "participant {} points to {} which does not list it",
                    p.id(),
                    team
                )));
            }
        }
    }

    Ok(())
}
