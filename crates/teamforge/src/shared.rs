//! Thread-safe handle to a registry.

use std::sync::Arc;

use parking_lot::Mutex;
use teamforge_core::{ParticipantDraft, ParticipantId, RequirementDraft, RequirementId};
use teamforge_matching::{MatchReport, RosterSummary};
use teamforge_store::Snapshot;

use crate::error::RegistryError;
use crate::registry::TeamRegistry;

/// A [`TeamRegistry`] behind a mutex, cheap to clone across threads.
///
/// Each operation holds the lock for its whole duration, including any
/// matching pass it triggers, so concurrent callers observe registrations
/// and passes one at a time.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<TeamRegistry>>,
}

impl SharedRegistry {
    pub fn new(registry: TeamRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// See [`TeamRegistry::register_participant`].
    pub fn register_participant(
        &self,
        draft: ParticipantDraft,
    ) -> Result<ParticipantId, RegistryError> {
        self.inner.lock().register_participant(draft)
    }

    /// See [`TeamRegistry::submit_requirement`].
    pub fn submit_requirement(
        &self,
        draft: RequirementDraft,
    ) -> Result<RequirementId, RegistryError> {
        self.inner.lock().submit_requirement(draft)
    }

    /// See [`TeamRegistry::auto_match`].
    pub fn auto_match(&self) -> Result<MatchReport, RegistryError> {
        self.inner.lock().auto_match()
    }

    /// See [`TeamRegistry::match_requirement`].
    pub fn match_requirement(&self, requirement: RequirementId) -> Result<usize, RegistryError> {
        self.inner.lock().match_requirement(requirement)
    }

    /// See [`TeamRegistry::reset`].
    pub fn reset(&self) -> Result<(), RegistryError> {
        self.inner.lock().reset()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.inner.lock().snapshot()
    }

    pub fn summary(&self) -> RosterSummary {
        self.inner.lock().summary()
    }

    /// Runs `f` with the registry locked.
    pub fn with<R>(&self, f: impl FnOnce(&TeamRegistry) -> R) -> R {
        f(&*self.inner.lock())
    }

    /// Runs `f` with the registry locked for writing.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut TeamRegistry) -> R) -> R {
        f(&mut *self.inner.lock())
    }
}

impl From<TeamRegistry> for SharedRegistry {
    fn from(registry: TeamRegistry) -> Self {
        Self::new(registry)
    }
}
