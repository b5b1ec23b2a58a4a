//! Read-only views derived from assignment state.
//!
//! Nothing here mutates its inputs. Orderings are stable so that anything
//! rendered from these views is deterministic.

use std::collections::HashMap;
use std::fmt;

use teamforge_core::{Participant, ParticipantId, Requirement, RequirementId, SkillSet};

/// Completed requirements, in creation order.
pub fn completed_teams(requirements: &[Requirement]) -> Vec<&Requirement> {
    let mut teams: Vec<&Requirement> = requirements.iter().filter(|r| r.is_completed()).collect();
    teams.sort_by_key(|r| r.id());
    teams
}

/// Members of `requirement`, in match order.
///
/// Ids with no matching participant are skipped.
pub fn team_members<'a>(requirement: &Requirement, participants: &'a [Participant]) -> Vec<&'a Participant> {
    let by_id: HashMap<ParticipantId, &Participant> =
        participants.iter().map(|p| (p.id(), p)).collect();
    requirement
        .assigned()
        .iter()
        .filter_map(|id| by_id.get(id).copied())
        .collect()
}

/// Union of the members' skills.
///
/// Ordered by first appearance, walking members in match order.
///
/// # Examples
///
/// ```
/// use teamforge_core::*;
/// use teamforge_matching::{auto_match, team_skill_set};
///
/// let mut people = vec![
///     Participant::from_draft(ParticipantId(1),
///         ParticipantDraft::new("A", "a@x").with_skills(["web", "ml"])),
///     Participant::from_draft(ParticipantId(2),
///         ParticipantDraft::new("B", "b@x").with_skills(["web", "design"])),
/// ];
/// let mut reqs = vec![Requirement::from_draft(RequirementId(1),
///     RequirementDraft::new("Site", 2).with_skills(["web"]))];
///
/// auto_match(&mut people, &mut reqs);
/// let skills = team_skill_set(&reqs[0], &people);
/// assert_eq!(skills.iter().collect::<Vec<_>>(), vec!["web", "ml", "design"]);
/// ```
pub fn team_skill_set(requirement: &Requirement, participants: &[Participant]) -> SkillSet {
    let mut skills = SkillSet::new();
    for member in team_members(requirement, participants) {
        skills.extend_from(member.skills());
    }
    skills
}

/// Where a participant stands, for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParticipantStatus<'a> {
    /// Not yet on a team.
    Available,
    /// On the given team.
    MatchedTo(&'a Requirement),
    /// Points at a requirement that is not in the roster.
    UnknownTeam(RequirementId),
}

impl fmt::Display for ParticipantStatus<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParticipantStatus::Available => f.write_str("Available for matching"),
            ParticipantStatus::MatchedTo(requirement) => {
                write!(f, "Matched to: {}", requirement.team_name())
            }
            ParticipantStatus::UnknownTeam(_) => f.write_str("Unknown Team"),
        }
    }
}

/// Resolves a participant's back-reference against `requirements`.
pub fn participant_status<'a>(
    participant: &Participant,
    requirements: &'a [Requirement],
) -> ParticipantStatus<'a> {
    match participant.team() {
        None => ParticipantStatus::Available,
        Some(id) => requirements
            .iter()
            .find(|r| r.id() == id)
            .map_or(ParticipantStatus::UnknownTeam(id), ParticipantStatus::MatchedTo),
    }
}

/// Headline counts for a roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterSummary {
    pub participants: usize,
    pub available: usize,
    pub requirements: usize,
    pub open: usize,
    pub completed: usize,
}

impl RosterSummary {
    pub fn of(participants: &[Participant], requirements: &[Requirement]) -> Self {
        let completed = requirements.iter().filter(|r| r.is_completed()).count();
        Self {
            participants: participants.len(),
            available: participants.iter().filter(|p| !p.is_assigned()).count(),
            requirements: requirements.len(),
            open: requirements.len() - completed,
            completed,
        }
    }
}
