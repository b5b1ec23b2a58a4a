//! Tests for the domain model.

use super::*;
use crate::error::TeamForgeError;

fn participant(id: u64, skills: &[&str]) -> Participant {
    Participant::from_draft(
        ParticipantId(id),
        ParticipantDraft::new(format!("P{}", id), format!("p{}@example.com", id))
            .with_skills(skills.iter().copied()),
    )
}

fn requirement(id: u64, size: usize, skills: &[&str]) -> Requirement {
    Requirement::from_draft(
        RequirementId(id),
        RequirementDraft::new(format!("Team {}", id), size).with_skills(skills.iter().copied()),
    )
}

#[test]
fn test_experience_rank_order() {
    assert_eq!(ExperienceLevel::Beginner.rank(), 1);
    assert_eq!(ExperienceLevel::Intermediate.rank(), 2);
    assert_eq!(ExperienceLevel::Advanced.rank(), 3);
    assert!(ExperienceLevel::Beginner < ExperienceLevel::Advanced);
}

#[test]
fn test_experience_label_parsing() {
    assert_eq!(ExperienceLevel::parse_label(" Advanced "), ExperienceLevel::Advanced);
    assert_eq!(ExperienceLevel::parse_label(""), ExperienceLevel::Beginner);
    assert_eq!(ExperienceLevel::parse_label("expert"), ExperienceLevel::Beginner);
    for level in ExperienceLevel::ALL {
        assert_eq!(ExperienceLevel::parse_label(level.label()), level);
    }
}

#[test]
fn test_required_experience_parsing() {
    assert_eq!(RequiredExperience::parse_label(""), RequiredExperience::Any);
    assert_eq!(RequiredExperience::parse_label("ANY"), RequiredExperience::Any);
    assert_eq!(RequiredExperience::parse_label("mixed"), RequiredExperience::Any);
    assert_eq!(
        RequiredExperience::parse_label("advanced"),
        RequiredExperience::AtLeast(ExperienceLevel::Advanced)
    );
    assert_eq!(
        RequiredExperience::parse_label("wizard"),
        RequiredExperience::AtLeast(ExperienceLevel::Beginner)
    );
    assert_eq!(RequiredExperience::from(None), RequiredExperience::Any);
}

#[test]
fn test_skill_set_dedup_and_order() {
    let mut skills = SkillSet::new();
    assert!(skills.insert("ml"));
    assert!(skills.insert(" design "));
    assert!(!skills.insert("ml"));
    assert!(!skills.insert("   "));

    assert_eq!(skills.iter().collect::<Vec<_>>(), vec!["ml", "design"]);
    assert!(skills.contains("design"));
    assert_eq!(skills.to_string(), "ml, design");
}

#[test]
fn test_skill_set_equality_ignores_order() {
    let a: SkillSet = ["a", "b"].into_iter().collect();
    let b: SkillSet = ["b", "a"].into_iter().collect();
    let c: SkillSet = ["a"].into_iter().collect();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_skill_set_superset_and_missing() {
    let have: SkillSet = ["frontend", "design"].into_iter().collect();
    let need: SkillSet = ["frontend", "backend", "devops"].into_iter().collect();

    assert!(!have.is_superset_of(&need));
    assert!(have.is_superset_of(&SkillSet::new()));
    assert_eq!(have.missing_from(&need).collect::<Vec<_>>(), vec!["backend", "devops"]);
}

#[test]
fn test_participant_draft_validation() {
    let draft = ParticipantDraft::new("Ada", "ada@example.com");
    assert_eq!(draft.validate(), Err(TeamForgeError::EmptySkills));

    let draft = draft.with_skills(["backend"]);
    assert!(draft.validate().is_ok());
    assert_eq!(
        ParticipantDraft::new("Ada", "  Ada@Example.COM ").normalized_contact(),
        "ada@example.com"
    );
}

#[test]
fn test_requirement_draft_validation() {
    let draft = RequirementDraft::new("Zero", 0).with_skills(["x"]);
    assert_eq!(draft.validate(), Err(TeamForgeError::InvalidTeamSize(0)));

    let draft = RequirementDraft::new("NoSkills", 2);
    assert_eq!(draft.validate(), Err(TeamForgeError::EmptySkills));

    let draft = RequirementDraft::new("Ok", 2)
        .with_skills(["x"])
        .with_min_experience(ExperienceLevel::Intermediate);
    assert!(draft.validate().is_ok());
    assert_eq!(
        draft.min_experience,
        RequiredExperience::AtLeast(ExperienceLevel::Intermediate)
    );
}

#[test]
fn test_participant_optional_text() {
    let p = Participant::from_draft(
        ParticipantId(1),
        ParticipantDraft::new("Ada", "ada@example.com")
            .with_skills(["x"])
            .with_languages("  "),
    );
    assert_eq!(p.languages(), None);
    assert_eq!(p.assignment(), Assignment::Unassigned);
}

#[test]
fn test_admit_fills_and_completes() {
    let mut req = requirement(1, 2, &["x"]);
    let mut a = participant(1, &["x"]);
    let mut b = participant(2, &["x"]);
    let mut c = participant(3, &["x"]);

    assert!(req.admit(&mut a));
    assert!(!req.is_completed());
    assert_eq!(req.open_slots(), 1);
    assert_eq!(req.progress(), (1, 2));

    assert!(req.admit(&mut b));
    assert!(req.is_completed());
    assert_eq!(req.open_slots(), 0);

    assert!(!req.admit(&mut c));
    assert!(!c.is_assigned());
    assert_eq!(req.assigned(), &[ParticipantId(1), ParticipantId(2)]);
    assert_eq!(a.team(), Some(RequirementId(1)));
}

#[test]
fn test_admit_refuses_assigned_participant() {
    let mut first = requirement(1, 1, &["x"]);
    let mut second = requirement(2, 1, &["x"]);
    let mut p = participant(1, &["x"]);

    assert!(first.admit(&mut p));
    assert!(!second.admit(&mut p));
    assert!(second.assigned().is_empty());
    assert_eq!(p.team(), Some(RequirementId(1)));
}

#[test]
fn test_consistency_accepts_admitted_state() {
    let mut reqs = vec![requirement(1, 1, &["x"]), requirement(2, 2, &["x"])];
    let mut people = vec![participant(1, &["x"]), participant(2, &["x"]), participant(3, &["x"])];

    assert!(reqs[0].admit(&mut people[0]));
    assert!(reqs[1].admit(&mut people[2]));

    assert!(check_consistency(&people, &reqs).is_ok());
    assert!(check_consistency(&[], &[]).is_ok());
}

#[test]
fn test_consistency_rejects_dangling_member() {
    let mut reqs = vec![requirement(1, 2, &["x"])];
    let mut people = vec![participant(1, &["x"])];
    assert!(reqs[0].admit(&mut people[0]));

    // Drop the participant but keep the requirement's member list.
    let err = check_consistency(&[], &reqs).unwrap_err();
    assert!(matches!(err, TeamForgeError::InvalidState(_)));
}

#[test]
fn test_consistency_rejects_duplicate_ids() {
    let people = vec![participant(1, &["x"]), participant(1, &["y"])];
    assert!(check_consistency(&people, &[]).is_err());
}

#[test]
fn test_consistency_rejects_empty_skill_sets() {
    let skill_less = Participant::from_draft(
        ParticipantId(1),
        ParticipantDraft::new("P", "p@example.com"),
    );
    let err = check_consistency(&[skill_less], &[]).unwrap_err();
    assert!(matches!(err, TeamForgeError::InvalidState(_)));

    let open_team =
        Requirement::from_draft(RequirementId(1), RequirementDraft::new("Anyone", 1));
    assert!(matches!(open_team.check_invariants(), Err(TeamForgeError::InvalidState(_))));
    assert!(check_consistency(&[participant(1, &["x"])], &[open_team]).is_err());
}
