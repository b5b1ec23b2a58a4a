//! TeamForge Matching Engine
//!
//! This crate assigns registered participants to open team requirements:
//! - Experience comparison (`experience`)
//! - Full skill-coverage eligibility (`eligibility`)
//! - The greedy, order-deterministic allocator (`engine`)
//! - Read-only team views derived from assignment state (`aggregate`)
//! - Listener hooks notified as assignments are made (`event`)
//!
//! The engine never searches or backtracks: requirements are visited in
//! creation order, participants in registration order, and the first
//! eligible participant takes the slot.

pub mod aggregate;
pub mod eligibility;
pub mod engine;
pub mod event;
pub mod experience;
pub mod report;


pub use aggregate::{
    completed_teams, participant_status, team_members, team_skill_set, ParticipantStatus,
    RosterSummary,
};
pub use eligibility::{check_candidate, is_eligible, qualifies, Rejection};
pub use engine::{auto_match, match_requirement, MatchingEngine};
pub use event::{CountingMatchListener, LoggingMatchListener, MatchEventSupport, MatchListener};
pub use experience::satisfies_experience;
pub use report::{MatchError, MatchReport, MatchedPair};
