//! The roster: registered participants, posted requirements, and the
//! matching passes that connect them.

use std::sync::Arc;

use teamforge_config::TeamForgeConfig;
use teamforge_core::{
    check_consistency, Participant, ParticipantDraft, ParticipantId, Requirement,
    RequirementDraft, RequirementId, SkillSet, TeamForgeError,
};
use teamforge_matching::{
    completed_teams, participant_status, team_members, team_skill_set, MatchListener,
    MatchReport, MatchingEngine, ParticipantStatus, RosterSummary,
};
use teamforge_store::{JsonFileStore, Snapshot, StateStore};
use tracing::{debug, info, warn};

use crate::error::RegistryError;

/// Owns all participants and requirements and runs matching over them.
///
/// Ids are handed out in registration order starting at 1, so ascending id
/// is also arrival order. Every mutating call either succeeds completely or
/// leaves the roster as it was; the only exception is a failing store write,
/// which is reported after the in-memory change has been made.
///
/// When a store is attached, the full roster is saved after every change.
#[derive(Debug)]
pub struct TeamRegistry {
    config: TeamForgeConfig,
    engine: MatchingEngine,
    participants: Vec<Participant>,
    requirements: Vec<Requirement>,
    next_participant: u64,
    next_requirement: u64,
    last_report: MatchReport,
    store: Option<Arc<dyn StateStore>>,
}

impl Default for TeamRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TeamRegistry {
    /// Creates an empty registry with default configuration and no store.
    pub fn new() -> Self {
        Self::with_config(TeamForgeConfig::default())
    }

    /// Creates an empty registry with custom configuration.
    ///
    /// The `store` section is not opened here; see [`TeamRegistry::open`].
    pub fn with_config(config: TeamForgeConfig) -> Self {
        Self {
            config,
            engine: MatchingEngine::new(),
            participants: Vec::new(),
            requirements: Vec::new(),
            next_participant: 1,
            next_requirement: 1,
            last_report: MatchReport::new(),
            store: None,
        }
    }

    /// Creates a registry from configuration, opening the configured JSON
    /// store and restoring whatever it holds.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or holds inconsistent
    /// state.
    pub fn open(config: TeamForgeConfig) -> Result<Self, RegistryError> {
        let store = config
            .store
            .as_ref()
            .map(|store| Arc::new(JsonFileStore::from_config(store)) as Arc<dyn StateStore>);
        let mut registry = Self::with_config(config);
        if let Some(store) = store {
            registry.attach_store(store)?;
        }
        Ok(registry)
    }

    /// Attaches a store, replacing the roster with its saved snapshot.
    ///
    /// An empty store leaves the registry empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or holds inconsistent
    /// state. The store is not attached in that case.
    pub fn attach_store(&mut self, store: Arc<dyn StateStore>) -> Result<(), RegistryError> {
        self.load(store.as_ref())?;
        self.store = Some(store);
        Ok(())
    }

    /// Adds a listener notified of every assignment.
    pub fn add_listener(&mut self, listener: Arc<dyn MatchListener>) {
        self.engine.add_listener(listener);
    }

    /// Registers a participant and, if enabled, runs a bulk matching pass.
    ///
    /// # Errors
    ///
    /// - [`TeamForgeError::EmptySkills`] if no skill was selected
    /// - [`TeamForgeError::DuplicateContact`] if the contact identifier is
    ///   already registered (compared trimmed, case-insensitively)
    /// - [`RegistryError::Store`] if saving the new state fails
    pub fn register_participant(
        &mut self,
        draft: ParticipantDraft,
    ) -> Result<ParticipantId, RegistryError> {
        if let Err(err) = self.check_participant(&draft) {
            warn!(
                event = "registration_rejected",
                name = draft.name.as_str(),
                reason = %err,
            );
            return Err(err.into());
        }

        let id = ParticipantId(self.next_participant);
        self.next_participant = next_id(std::iter::once(id.get()), "participant")?;
        let participant = Participant::from_draft(id, draft);
        info!(
            event = "participant_registered",
            participant = %id,
            name = participant.name(),
            skills = participant.skills().len() as u64,
        );
        self.participants.push(participant);

        if self.config.matching.auto_match_on_register && !self.requirements.is_empty() {
            self.run_auto_match();
        } else {
            self.last_report = MatchReport::new();
        }
        self.persist()?;
        Ok(id)
    }

    /// Posts a team requirement and, if enabled, runs a bulk matching pass.
    ///
    /// # Errors
    ///
    /// - [`TeamForgeError::InvalidTeamSize`] if the target size is zero
    /// - [`TeamForgeError::EmptySkills`] if no skill was selected
    /// - [`RegistryError::Store`] if saving the new state fails
    pub fn submit_requirement(
        &mut self,
        draft: RequirementDraft,
    ) -> Result<RequirementId, RegistryError> {
        if let Err(err) = draft.validate() {
            warn!(
                event = "registration_rejected",
                name = draft.team_name.as_str(),
                reason = %err,
            );
            return Err(err.into());
        }

        let id = RequirementId(self.next_requirement);
        self.next_requirement = next_id(std::iter::once(id.get()), "requirement")?;
        let requirement = Requirement::from_draft(id, draft);
        info!(
            event = "requirement_submitted",
            requirement = %id,
            name = requirement.team_name(),
            size = requirement.target_size() as u64,
        );
        self.requirements.push(requirement);

        if self.config.matching.auto_match_on_requirement && !self.participants.is_empty() {
            self.run_auto_match();
        } else {
            self.last_report = MatchReport::new();
        }
        self.persist()?;
        Ok(id)
    }

    /// Runs a bulk matching pass over every open requirement.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Store`] if assignments were made but saving
    /// them failed.
    pub fn auto_match(&mut self) -> Result<MatchReport, RegistryError> {
        self.run_auto_match();
        if self.last_report.matched_any() {
            self.persist()?;
        }
        Ok(self.last_report.clone())
    }

    /// Fills as many open slots of one requirement as qualified participants
    /// allow. Returns the number of assignments made.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::Match`] if the requirement is unknown, already
    ///   complete, or nobody qualifies; nothing changes in these cases
    /// - [`RegistryError::Store`] if saving the new state fails
    pub fn match_requirement(&mut self, requirement: RequirementId) -> Result<usize, RegistryError> {
        let assigned = self.engine.match_requirement(
            requirement,
            &mut self.participants,
            &mut self.requirements,
        )?;
        if assigned > 0 {
            self.persist()?;
        }
        Ok(assigned)
    }

    /// Clears every participant and requirement and restarts ids at 1.
    ///
    /// The attached store, if any, is cleared too.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Store`] if the store cannot be cleared.
    pub fn reset(&mut self) -> Result<(), RegistryError> {
        self.participants.clear();
        self.requirements.clear();
        self.next_participant = 1;
        self.next_requirement = 1;
        self.last_report = MatchReport::new();
        info!(event = "roster_reset");
        if let Some(store) = &self.store {
            store.clear()?;
        }
        Ok(())
    }

    /// Copies the full roster for persistence.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.participants.clone(), self.requirements.clone())
    }

    /// Replaces the roster with `snapshot`.
    ///
    /// Id counters resume past the largest restored id.
    ///
    /// # Errors
    ///
    /// Returns [`TeamForgeError::InvalidState`] if the snapshot breaks an
    /// assignment invariant, repeats a contact, or holds an id no successor
    /// can follow. The roster is unchanged in
    /// that case.
    pub fn restore(&mut self, snapshot: Snapshot) -> Result<(), RegistryError> {
        let Snapshot {
            participants,
            requirements,
            ..
        } = snapshot;
        check_consistency(&participants, &requirements)?;
        check_unique_contacts(&participants)?;

        let next_participant = next_id(participants.iter().map(|p| p.id().get()), "participant")?;
        let next_requirement = next_id(requirements.iter().map(|r| r.id().get()), "requirement")?;

        self.next_participant = next_participant;
        self.next_requirement = next_requirement;
        self.participants = participants;
        self.requirements = requirements;
        self.last_report = MatchReport::new();
        info!(
            event = "roster_restored",
            participants = self.participants.len() as u64,
            requirements = self.requirements.len() as u64,
        );
        Ok(())
    }

    /// Writes the roster to `store`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Store`] if the write fails.
    pub fn save(&self, store: &dyn StateStore) -> Result<(), RegistryError> {
        store.save(&self.snapshot())?;
        Ok(())
    }

    /// Replaces the roster with the snapshot held by `store`.
    ///
    /// Returns `false` and empties the registry if the store holds nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or its snapshot is
    /// inconsistent. The roster is unchanged in that case.
    pub fn load(&mut self, store: &dyn StateStore) -> Result<bool, RegistryError> {
        match store.load()? {
            Some(snapshot) => {
                self.restore(snapshot)?;
                Ok(true)
            }
            None => {
                self.restore(Snapshot::default())?;
                Ok(false)
            }
        }
    }

    pub fn config(&self) -> &TeamForgeConfig {
        &self.config
    }

    /// All participants in registration order.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// All requirements in creation order.
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id() == id)
    }

    pub fn requirement(&self, id: RequirementId) -> Option<&Requirement> {
        self.requirements.iter().find(|r| r.id() == id)
    }

    /// Outcome of the most recent bulk pass.
    pub fn last_report(&self) -> &MatchReport {
        &self.last_report
    }

    /// Requirements that reached their target size, in creation order.
    pub fn completed_teams(&self) -> Vec<&Requirement> {
        completed_teams(&self.requirements)
    }

    /// Members of a team in the order they joined. Empty for unknown ids.
    pub fn team_members(&self, id: RequirementId) -> Vec<&Participant> {
        self.requirement(id)
            .map(|r| team_members(r, &self.participants))
            .unwrap_or_default()
    }

    /// Union of the members' skills. Empty for unknown ids.
    pub fn team_skill_set(&self, id: RequirementId) -> SkillSet {
        self.requirement(id)
            .map(|r| team_skill_set(r, &self.participants))
            .unwrap_or_default()
    }

    pub fn participant_status(&self, id: ParticipantId) -> Option<ParticipantStatus<'_>> {
        self.participant(id)
            .map(|p| participant_status(p, &self.requirements))
    }

    pub fn summary(&self) -> RosterSummary {
        RosterSummary::of(&self.participants, &self.requirements)
    }

    fn check_participant(&self, draft: &ParticipantDraft) -> Result<(), TeamForgeError> {
        draft.validate()?;
        let contact = draft.normalized_contact();
        if self
            .participants
            .iter()
            .any(|p| p.normalized_contact() == contact)
        {
            return Err(TeamForgeError::DuplicateContact(draft.contact.trim().to_string()));
        }
        Ok(())
    }

    fn run_auto_match(&mut self) {
        self.last_report = self
            .engine
            .auto_match(&mut self.participants, &mut self.requirements);
    }

    fn persist(&self) -> Result<(), RegistryError> {
        if let Some(store) = &self.store {
            store.save(&self.snapshot())?;
            debug!(event = "roster_saved");
        }
        Ok(())
    }
}

// First id after the largest in `ids`, or 1 when empty.
fn next_id(ids: impl Iterator<Item = u64>, kind: &str) -> Result<u64, TeamForgeError> {
    ids.max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or_else(|| TeamForgeError::InvalidState(format!("{} id space exhausted", kind)))
}

fn check_unique_contacts(participants: &[Participant]) -> Result<(), TeamForgeError> {
    let mut seen = std::collections::HashSet::with_capacity(participants.len());
    for p in participants {
        if !seen.insert(p.normalized_contact()) {
            return Err(TeamForgeError::InvalidState(format!(
                "participant {} repeats contact '{}'",
                p.id(),
                p.contact()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
