//! Match event hooks.
//!
//! The engine never renders or persists anything. Callers that need to react
//! to individual assignments (refresh a view, write an audit line) register
//! a [`MatchListener`]; everything else can use the returned report.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use teamforge_matching::{CountingMatchListener, MatchingEngine};
//!
//! let counter = Arc::new(CountingMatchListener::new());
//! let mut engine = MatchingEngine::new();
//! engine.add_listener(counter.clone());
//!
//! let report = engine.auto_match(&mut [], &mut []);
//! assert!(!report.matched_any());
//! assert_eq!(counter.assigned_count(), 0);
//! ```

use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use teamforge_core::{Participant, Requirement};
use tracing::info;

use crate::report::MatchReport;

/// Listener for assignment events.
///
/// Called synchronously, in registration order, while the engine holds the
/// participant and requirement collections.
pub trait MatchListener: Send + Sync + Debug {
    /// Called after `participant` was bound to `requirement`.
    fn on_assigned(&self, requirement: &Requirement, participant: &Participant);

    /// Called when `requirement` reaches its target size.
    fn on_requirement_completed(&self, _requirement: &Requirement) {}

    /// Called once at the end of a bulk pass.
    fn on_pass_finished(&self, _report: &MatchReport) {}
}

/// Central broadcaster for match events.
#[derive(Default)]
pub struct MatchEventSupport {
    listeners: Vec<Arc<dyn MatchListener>>,
}

impl MatchEventSupport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&mut self, listener: Arc<dyn MatchListener>) {
        self.listeners.push(listener);
    }

    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn fire_assigned(&self, requirement: &Requirement, participant: &Participant) {
        for listener in &self.listeners {
            listener.on_assigned(requirement, participant);
        }
    }

    pub fn fire_requirement_completed(&self, requirement: &Requirement) {
        for listener in &self.listeners {
            listener.on_requirement_completed(requirement);
        }
    }

    pub fn fire_pass_finished(&self, report: &MatchReport) {
        for listener in &self.listeners {
            listener.on_pass_finished(report);
        }
    }
}

impl Debug for MatchEventSupport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchEventSupport")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Counts events. Useful in tests.
#[derive(Debug, Default)]
pub struct CountingMatchListener {
    assigned: AtomicUsize,
    completed: AtomicUsize,
    passes: AtomicUsize,
}

impl CountingMatchListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assigned_count(&self) -> usize {
        self.assigned.load(Ordering::SeqCst)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn pass_count(&self) -> usize {
        self.passes.load(Ordering::SeqCst)
    }
}

impl MatchListener for CountingMatchListener {
    fn on_assigned(&self, _requirement: &Requirement, _participant: &Participant) {
        self.assigned.fetch_add(1, Ordering::SeqCst);
    }

    fn on_requirement_completed(&self, _requirement: &Requirement) {
        self.completed.fetch_add(1, Ordering::SeqCst);
    }

    fn on_pass_finished(&self, _report: &MatchReport) {
        self.passes.fetch_add(1, Ordering::SeqCst);
    }
}

/// Logs one `info` line per assignment and completed team.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingMatchListener;

impl MatchListener for LoggingMatchListener {
    fn on_assigned(&self, requirement: &Requirement, participant: &Participant) {
        info!(
            event = "member_joined",
            team = requirement.team_name(),
            member = participant.name(),
            filled = requirement.assigned().len() as u64,
            size = requirement.target_size() as u64,
        );
    }

    fn on_requirement_completed(&self, requirement: &Requirement) {
        info!(
            event = "team_completed",
            team = requirement.team_name(),
            size = requirement.target_size() as u64,
        );
    }
}
