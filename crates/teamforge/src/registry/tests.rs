//! Tests for the registry.

use std::sync::Arc;

use teamforge_config::{MatchingConfig, TeamForgeConfig};
use teamforge_core::{
    ExperienceLevel, ParticipantDraft, ParticipantId, RequirementDraft, RequirementId,
    TeamForgeError,
};
use teamforge_matching::{CountingMatchListener, MatchError};
use teamforge_store::{MemoryStore, Snapshot, StateStore};
use teamforge_test::{participant, requirement, Roster};

use super::TeamRegistry;
use crate::error::RegistryError;

fn backend_dev(n: u64) -> ParticipantDraft {
    participant(n).skills(["backend"]).draft()
}

fn backend_team(size: usize) -> RequirementDraft {
    RequirementDraft::new("Backend", size).with_skills(["backend"])
}

#[test]
fn test_ids_follow_registration_order() {
    let mut registry = TeamRegistry::new();
    let a = registry.register_participant(backend_dev(1)).unwrap();
    let b = registry.register_participant(backend_dev(2)).unwrap();
    let r = registry.submit_requirement(backend_team(5)).unwrap();

    assert_eq!(a, ParticipantId(1));
    assert_eq!(b, ParticipantId(2));
    assert_eq!(r, RequirementId(1));
}

#[test]
fn test_register_without_requirements_skips_matching() {
    let mut registry = TeamRegistry::new();
    registry.register_participant(backend_dev(1)).unwrap();

    assert!(!registry.last_report().matched_any());
    assert!(!registry.participants()[0].is_assigned());
}

#[test]
fn test_register_triggers_matching() {
    let mut registry = TeamRegistry::new();
    let team = registry.submit_requirement(backend_team(1)).unwrap();
    let id = registry.register_participant(backend_dev(1)).unwrap();

    assert_eq!(registry.participant(id).unwrap().team(), Some(team));
    assert_eq!(registry.last_report().assigned_count(), 1);
    assert_eq!(registry.last_report().completed, vec![team]);
}

#[test]
fn test_duplicate_contact_rejected_case_insensitive() {
    let mut registry = TeamRegistry::new();
    registry
        .register_participant(ParticipantDraft::new("Ada", "ada@example.com").with_skills(["rust"]))
        .unwrap();

    let err = registry
        .register_participant(
            ParticipantDraft::new("Ada Again", "  ADA@Example.com ").with_skills(["go"]),
        )
        .unwrap_err();

    assert!(err.is_validation());
    assert!(matches!(
        err,
        RegistryError::Invalid(TeamForgeError::DuplicateContact(ref c)) if c == "ADA@Example.com"
    ));
    assert_eq!(registry.participants().len(), 1);

    // Rejected registrations do not consume an id.
    let next = registry.register_participant(backend_dev(9)).unwrap();
    assert_eq!(next, ParticipantId(2));
}

#[test]
fn test_empty_skills_rejected() {
    let mut registry = TeamRegistry::new();
    let err = registry
        .register_participant(ParticipantDraft::new("Nobody", "n@example.com"))
        .unwrap_err();
    assert!(matches!(err, RegistryError::Invalid(TeamForgeError::EmptySkills)));

    let err = registry
        .submit_requirement(RequirementDraft::new("Empty", 2))
        .unwrap_err();
    assert!(matches!(err, RegistryError::Invalid(TeamForgeError::EmptySkills)));

    assert!(registry.participants().is_empty());
    assert!(registry.requirements().is_empty());
}

#[test]
fn test_zero_team_size_rejected() {
    let mut registry = TeamRegistry::new();
    let err = registry.submit_requirement(backend_team(0)).unwrap_err();

    assert!(matches!(err, RegistryError::Invalid(TeamForgeError::InvalidTeamSize(0))));
    assert!(registry.requirements().is_empty());
}

#[test]
fn test_auto_match_disabled_by_config() {
    let mut registry = TeamRegistry::with_config(TeamForgeConfig::new().without_auto_match());
    registry.submit_requirement(backend_team(1)).unwrap();
    registry.register_participant(backend_dev(1)).unwrap();
    assert_eq!(registry.summary().available, 1);

    let report = registry.auto_match().unwrap();
    assert_eq!(report.assigned_count(), 1);
    assert_eq!(registry.summary().available, 0);
    assert_eq!(registry.completed_teams().len(), 1);
}

#[test]
fn test_match_requirement_errors() {
    let mut registry = TeamRegistry::with_config(TeamForgeConfig::new().without_auto_match());
    let team = registry.submit_requirement(backend_team(1)).unwrap();

    let err = registry.match_requirement(team).unwrap_err();
    assert!(matches!(err, RegistryError::Match(MatchError::NoCandidates(id)) if id == team));

    let err = registry.match_requirement(RequirementId(42)).unwrap_err();
    assert!(matches!(err, RegistryError::Match(MatchError::NotFound(_))));

    registry.register_participant(backend_dev(1)).unwrap();
    assert_eq!(registry.match_requirement(team).unwrap(), 1);

    let err = registry.match_requirement(team).unwrap_err();
    assert!(matches!(err, RegistryError::Match(MatchError::AlreadyCompleted(_))));
}

#[test]
fn test_views() {
    let mut registry = TeamRegistry::with_config(TeamForgeConfig::new().without_auto_match());
    let (people, teams) = Roster::hackathon_drafts();
    for draft in people {
        registry.register_participant(draft).unwrap();
    }
    for draft in teams {
        registry.submit_requirement(draft).unwrap();
    }
    registry.auto_match().unwrap();

    let members: Vec<&str> = registry
        .team_members(RequirementId(1))
        .iter()
        .map(|p| p.name())
        .collect();
    assert_eq!(members, vec!["Ada", "Margaret"]);

    let team_skills = registry.team_skill_set(RequirementId(1));
    let skills: Vec<&str> = team_skills.iter().collect();
    assert_eq!(skills, vec!["backend", "database", "devops"]);

    assert_eq!(
        registry
            .participant_status(ParticipantId(2))
            .unwrap()
            .to_string(),
        "Matched to: Pixel Pushers"
    );
    assert_eq!(
        registry
            .participant_status(ParticipantId(3))
            .unwrap()
            .to_string(),
        "Available for matching"
    );
    assert!(registry.participant_status(ParticipantId(99)).is_none());
    assert!(registry.team_members(RequirementId(99)).is_empty());
}

#[test]
fn test_listener_sees_registry_assignments() {
    let counter = Arc::new(CountingMatchListener::new());
    let mut registry = TeamRegistry::new();
    registry.add_listener(counter.clone());

    registry.submit_requirement(backend_team(2)).unwrap();
    registry.register_participant(backend_dev(1)).unwrap();
    registry.register_participant(backend_dev(2)).unwrap();

    assert_eq!(counter.assigned_count(), 2);
    assert_eq!(counter.completed_count(), 1);
}

#[test]
fn test_reset_restarts_ids() {
    let mut registry = TeamRegistry::new();
    registry.submit_requirement(backend_team(1)).unwrap();
    registry.register_participant(backend_dev(1)).unwrap();

    registry.reset().unwrap();
    assert!(registry.participants().is_empty());
    assert!(registry.requirements().is_empty());
    assert!(!registry.last_report().matched_any());

    let id = registry.register_participant(backend_dev(1)).unwrap();
    assert_eq!(id, ParticipantId(1));
}

#[test]
fn test_restore_resumes_ids() {
    let Roster {
        participants,
        requirements,
    } = Roster::hackathon();
    let mut registry = TeamRegistry::new();
    registry
        .restore(Snapshot::new(participants, requirements))
        .unwrap();

    let p = registry.register_participant(backend_dev(7)).unwrap();
    let r = registry.submit_requirement(backend_team(1)).unwrap();
    assert_eq!(p, ParticipantId(7));
    assert_eq!(r, RequirementId(4));
}

#[test]
fn test_restore_rejects_inconsistent_snapshot() {
    let mut registry = TeamRegistry::new();
    registry.register_participant(backend_dev(1)).unwrap();

    let twins = Snapshot::new(
        vec![
            participant(1).contact("same@example.com").skills(["a"]).build(),
            participant(2).contact("SAME@example.com").skills(["b"]).build(),
        ],
        Vec::new(),
    );
    let err = registry.restore(twins).unwrap_err();
    assert!(matches!(err, RegistryError::Invalid(TeamForgeError::InvalidState(_))));

    let clash = Snapshot::new(
        vec![participant(1).skills(["a"]).build(), participant(1).skills(["b"]).build()],
        vec![requirement(1, 1).skills(["a"]).build()],
    );
    assert!(registry.restore(clash).is_err());

    // Untouched.
    assert_eq!(registry.participants().len(), 1);
}

#[test]
fn test_store_receives_every_change() {
    let store = Arc::new(MemoryStore::new());
    let mut registry = TeamRegistry::new();
    registry.attach_store(store.clone()).unwrap();
    assert_eq!(store.stored_len(), 0);

    registry.submit_requirement(backend_team(1)).unwrap();
    registry
        .register_participant(
            ParticipantDraft::new("Ada", "ada@example.com")
                .with_skills(["backend"])
                .with_experience(ExperienceLevel::Advanced),
        )
        .unwrap();

    let saved = store.load().unwrap().unwrap();
    assert_eq!(saved, registry.snapshot());
    assert!(saved.participants[0].is_assigned());
}

#[test]
fn test_attach_store_restores_state() {
    let store = Arc::new(MemoryStore::new());
    {
        let mut registry = TeamRegistry::new();
        registry.attach_store(store.clone()).unwrap();
        registry.submit_requirement(backend_team(2)).unwrap();
        registry.register_participant(backend_dev(1)).unwrap();
    }

    let mut reopened = TeamRegistry::new();
    reopened.attach_store(store.clone()).unwrap();
    assert_eq!(reopened.participants().len(), 1);
    assert_eq!(reopened.requirements()[0].assigned(), &[ParticipantId(1)]);

    reopened.register_participant(backend_dev(2)).unwrap();
    assert!(reopened.requirements()[0].is_completed());
}

#[test]
fn test_reset_clears_store() {
    let store = Arc::new(MemoryStore::new());
    let mut registry = TeamRegistry::new();
    registry.attach_store(store.clone()).unwrap();
    registry.register_participant(backend_dev(1)).unwrap();
    assert!(store.stored_len() > 0);

    registry.reset().unwrap();
    assert!(store.load().unwrap().is_none());
}

#[test]
fn test_load_empty_store_empties_registry() {
    let mut registry = TeamRegistry::new();
    registry.register_participant(backend_dev(1)).unwrap();

    let loaded = registry.load(&MemoryStore::new()).unwrap();
    assert!(!loaded);
    assert!(registry.participants().is_empty());
}

#[test]
fn test_skipped_pass_clears_last_report() {
    let config = TeamForgeConfig {
        matching: MatchingConfig {
            auto_match_on_register: false,
            auto_match_on_requirement: true,
        },
        ..TeamForgeConfig::default()
    };
    let mut registry = TeamRegistry::with_config(config);
    registry.register_participant(backend_dev(1)).unwrap();
    registry.submit_requirement(backend_team(2)).unwrap();
    assert_eq!(registry.last_report().assigned_count(), 1);

    registry.register_participant(backend_dev(2)).unwrap();
    assert!(!registry.last_report().matched_any());
    assert!(registry.last_report().completed.is_empty());
}

#[test]
fn test_restore_rejects_exhausted_id_space() {
    let mut registry = TeamRegistry::new();
    registry.register_participant(backend_dev(1)).unwrap();

    let snapshot = Snapshot::new(vec![participant(u64::MAX).skills(["a"]).build()], Vec::new());
    let err = registry.restore(snapshot).unwrap_err();
    assert!(matches!(err, RegistryError::Invalid(TeamForgeError::InvalidState(_))));
    assert_eq!(registry.participants().len(), 1);

    let snapshot = Snapshot::new(
        Vec::new(),
        vec![requirement(u64::MAX, 1).skills(["a"]).build()],
    );
    assert!(registry.restore(snapshot).is_err());
}

#[test]
fn test_registration_at_last_id_fails_cleanly() {
    let mut registry = TeamRegistry::new();
    let snapshot = Snapshot::new(
        vec![participant(u64::MAX - 1).skills(["a"]).build()],
        Vec::new(),
    );
    registry.restore(snapshot).unwrap();

    let err = registry.register_participant(backend_dev(1)).unwrap_err();
    assert!(matches!(err, RegistryError::Invalid(TeamForgeError::InvalidState(_))));
    assert_eq!(registry.participants().len(), 1);
}

#[test]
fn test_restore_rejects_empty_skill_sets() {
    let mut registry = TeamRegistry::new();

    let skill_less_team = Snapshot::new(
        vec![participant(1).skills(["a"]).build()],
        vec![requirement(1, 1).build()],
    );
    let err = registry.restore(skill_less_team).unwrap_err();
    assert!(matches!(err, RegistryError::Invalid(TeamForgeError::InvalidState(_))));

    let skill_less_participant = Snapshot::new(
        vec![participant(1).build()],
        vec![requirement(1, 1).skills(["a"]).build()],
    );
    let err = registry.restore(skill_less_participant).unwrap_err();
    assert!(matches!(err, RegistryError::Invalid(TeamForgeError::InvalidState(_))));

    assert!(registry.requirements().is_empty());
    assert_eq!(registry.auto_match().unwrap().assigned_count(), 0);
}
