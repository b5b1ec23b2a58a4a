//! Outcomes of a matching pass.

use thiserror::Error;

use teamforge_core::{ParticipantId, RequirementId};

/// One assignment made during a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchedPair {
    pub requirement: RequirementId,
    pub participant: ParticipantId,
}

/// Result of a bulk [`auto_match`](crate::auto_match) pass.
///
/// Assignments are listed in the order they were made.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReport {
    pub assignments: Vec<MatchedPair>,
    /// Requirements that reached their target size during this pass.
    pub completed: Vec<RequirementId>,
}

impl MatchReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the pass made at least one assignment.
    ///
    /// Callers use this to decide whether to refresh views and persist.
    #[inline]
    pub fn matched_any(&self) -> bool {
        !self.assignments.is_empty()
    }

    /// Number of assignments made.
    #[inline]
    pub fn assigned_count(&self) -> usize {
        self.assignments.len()
    }

    /// Participants assigned to `requirement` in this pass, in match order.
    pub fn assigned_to(&self, requirement: RequirementId) -> impl Iterator<Item = ParticipantId> + '_ {
        self.assignments
            .iter()
            .filter(move |pair| pair.requirement == requirement)
            .map(|pair| pair.participant)
    }

    pub(crate) fn record(&mut self, requirement: RequirementId, participant: ParticipantId) {
        self.assignments.push(MatchedPair {
            requirement,
            participant,
        });
    }
}

/// Why a targeted [`match_requirement`](crate::match_requirement) made no
/// assignment. None of these mutate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    /// No requirement with this id exists.
    #[error("Requirement {0} not found")]
    NotFound(RequirementId),

    /// The requirement is already full.
    #[error("Requirement {0} is already complete")]
    AlreadyCompleted(RequirementId),

    /// No unassigned participant qualifies.
    #[error("No suitable participants found for requirement {0}")]
    NoCandidates(RequirementId),
}

impl MatchError {
    /// True for the "not found / no-op" family, as opposed to an empty
    /// candidate pool.
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, MatchError::NotFound(_) | MatchError::AlreadyCompleted(_))
    }

    /// The requirement the call targeted.
    pub fn requirement(&self) -> RequirementId {
        match *self {
            MatchError::NotFound(id) | MatchError::AlreadyCompleted(id) | MatchError::NoCandidates(id) => id,
        }
    }
}
