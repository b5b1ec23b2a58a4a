//! Greedy allocation of participants to requirement slots.
//!
//! Both entry points visit requirements in ascending id (creation) order and
//! participants in ascending id (registration) order, regardless of how the
//! slices are laid out. The first eligible participant takes the slot; there
//! is no scoring, lookahead or backtracking, so identical inputs always yield
//! identical assignments.
//!
//! Already-assigned participants and completed requirements are skipped, so
//! re-running a pass with no new input is a no-op.

use std::sync::Arc;
use std::time::Instant;

use teamforge_core::{Participant, Requirement, RequirementId};
use tracing::{debug, info, trace};

use crate::eligibility::{check_candidate, Rejection};
use crate::event::{MatchEventSupport, MatchListener};
use crate::report::{MatchError, MatchReport};

/// The matching engine.
///
/// Holds no roster state of its own: participants and requirements are
/// passed into each call and mutated in place. The engine only carries the
/// listeners to notify.
#[derive(Debug, Default)]
pub struct MatchingEngine {
    events: MatchEventSupport,
}

impl MatchingEngine {
    /// Creates an engine with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener notified on every assignment.
    pub fn add_listener(&mut self, listener: Arc<dyn MatchListener>) {
        self.events.add_listener(listener);
    }

    pub fn events(&self) -> &MatchEventSupport {
        &self.events
    }

    /// Bulk pass over every open requirement.
    ///
    /// For each open requirement, walks the participants that are still
    /// unassigned and binds each one that qualifies until the requirement is
    /// full. Participants taken by an earlier requirement are not available to
    /// later ones in the same pass.
    pub fn auto_match(
        &self,
        participants: &mut [Participant],
        requirements: &mut [Requirement],
    ) -> MatchReport {
        let started = Instant::now();
        info!(
            event = "match_pass_start",
            participants = participants.len() as u64,
            requirements = requirements.len() as u64,
        );

        let participant_order = registration_order(participants, Participant::id);
        let requirement_order = registration_order(requirements, Requirement::id);
        let mut report = MatchReport::new();

        for ri in requirement_order {
            let requirement = &mut requirements[ri];
            if requirement.is_completed() {
                continue;
            }

            for &pi in &participant_order {
                if requirement.open_slots() == 0 {
                    break;
                }
                let participant = &mut participants[pi];
                match check_candidate(participant, requirement) {
                    Ok(()) => {
                        if self.bind(requirement, participant) {
                            report.record(requirement.id(), participant.id());
                        }
                    }
                    Err(Rejection::AlreadyAssigned) => {}
                    Err(reason) => trace!(
                        event = "candidate_rejected",
                        requirement = %requirement.id(),
                        participant = %participant.id(),
                        reason = ?reason,
                    ),
                }
            }

            if requirement.is_completed() {
                report.completed.push(requirement.id());
            }
        }

        info!(
            event = "match_pass_end",
            assigned = report.assigned_count() as u64,
            completed = report.completed.len() as u64,
            duration_ms = started.elapsed().as_millis() as u64,
        );
        self.events.fire_pass_finished(&report);
        report
    }

    /// Targeted pass for a single requirement.
    ///
    /// Collects every unassigned participant that qualifies, then binds them
    /// in registration order up to the number of open slots. Returns how many
    /// were bound.
    ///
    /// # Errors
    ///
    /// - [`MatchError::NotFound`] if no requirement has this id
    /// - [`MatchError::AlreadyCompleted`] if the requirement is already full
    /// - [`MatchError::NoCandidates`] if nobody qualifies
    ///
    /// State is untouched in every error case.
    pub fn match_requirement(
        &self,
        requirement_id: RequirementId,
        participants: &mut [Participant],
        requirements: &mut [Requirement],
    ) -> Result<usize, MatchError> {
        let requirement = requirements
            .iter_mut()
            .find(|r| r.id() == requirement_id)
            .ok_or(MatchError::NotFound(requirement_id))?;
        if requirement.is_completed() {
            return Err(MatchError::AlreadyCompleted(requirement_id));
        }

        let candidates: Vec<usize> = {
            let target: &Requirement = requirement;
            registration_order(participants, Participant::id)
                .into_iter()
                .filter(|&pi| check_candidate(&participants[pi], target).is_ok())
                .collect()
        };
        if candidates.is_empty() {
            info!(
                event = "no_candidates",
                requirement = %requirement_id,
                team = requirement.team_name(),
            );
            return Err(MatchError::NoCandidates(requirement_id));
        }

        let needed = requirement.open_slots();
        let mut assigned = 0usize;
        for pi in candidates.into_iter().take(needed) {
            if self.bind(requirement, &mut participants[pi]) {
                assigned += 1;
            }
        }

        info!(
            event = "requirement_matched",
            requirement = %requirement_id,
            team = requirement.team_name(),
            assigned = assigned as u64,
            completed = requirement.is_completed(),
        );
        Ok(assigned)
    }

    fn bind(&self, requirement: &mut Requirement, participant: &mut Participant) -> bool {
        if !requirement.admit(participant) {
            return false;
        }
        debug!(
            event = "assigned",
            requirement = %requirement.id(),
            participant = %participant.id(),
            open_slots = requirement.open_slots() as u64,
        );
        self.events.fire_assigned(requirement, participant);
        if requirement.is_completed() {
            debug!(event = "requirement_completed", requirement = %requirement.id());
            self.events.fire_requirement_completed(requirement);
        }
        true
    }
}

/// Bulk pass with no listeners. See [`MatchingEngine::auto_match`].
pub fn auto_match(participants: &mut [Participant], requirements: &mut [Requirement]) -> MatchReport {
    MatchingEngine::new().auto_match(participants, requirements)
}

/// Targeted pass with no listeners. See [`MatchingEngine::match_requirement`].
///
/// # Errors
///
/// See [`MatchingEngine::match_requirement`].
pub fn match_requirement(
    requirement_id: RequirementId,
    participants: &mut [Participant],
    requirements: &mut [Requirement],
) -> Result<usize, MatchError> {
    MatchingEngine::new().match_requirement(requirement_id, participants, requirements)
}

// Indices into `items`, sorted by id. Stable, so equal ids keep slice order.
fn registration_order<T, K: Ord>(items: &[T], id: impl Fn(&T) -> K) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by_key(|&i| id(&items[i]));
    order
}
