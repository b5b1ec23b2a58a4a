//! Eligibility: may this participant fill a slot on this requirement?
//!
//! Skill coverage is all-or-nothing. A participant qualifies only when
//! they hold every required skill; sharing some of them is not enough.

use teamforge_core::{Participant, Requirement, SkillSet};

use crate::experience::satisfies_experience;

/// Why a candidate was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Already bound to a requirement.
    AlreadyAssigned,
    /// Lacks at least one required skill.
    MissingSkills,
    /// Experience rank below the requirement's minimum.
    InsufficientExperience,
}

/// Full-coverage skill test.
///
/// True iff `participant_skills` contains every skill in `required_skills`.
///
/// # Examples
///
/// ```
/// use teamforge_core::SkillSet;
/// use teamforge_matching::is_eligible;
///
/// let required: SkillSet = ["frontend", "backend", "devops"].into_iter().collect();
/// let one_of_three: SkillSet = ["frontend"].into_iter().collect();
/// let all_three: SkillSet = ["devops", "backend", "frontend", "ml"].into_iter().collect();
///
/// assert!(!is_eligible(&one_of_three, &required));
/// assert!(is_eligible(&all_three, &required));
/// ```
#[inline]
pub fn is_eligible(participant_skills: &SkillSet, required_skills: &SkillSet) -> bool {
    participant_skills.is_superset_of(required_skills)
}

/// Skill coverage and experience, ignoring assignment state.
#[inline]
pub fn qualifies(participant: &Participant, requirement: &Requirement) -> bool {
    is_eligible(participant.skills(), requirement.required_skills())
        && satisfies_experience(participant.experience(), requirement.min_experience())
}

/// Full candidate check, including whether the participant is still free.
///
/// # Errors
///
/// Returns the first [`Rejection`] that applies.
pub fn check_candidate(participant: &Participant, requirement: &Requirement) -> Result<(), Rejection> {
    if participant.is_assigned() {
        return Err(Rejection::AlreadyAssigned);
    }
    if !is_eligible(participant.skills(), requirement.required_skills()) {
        return Err(Rejection::MissingSkills);
    }
    if !satisfies_experience(participant.experience(), requirement.min_experience()) {
        return Err(Rejection::InsufficientExperience);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamforge_core::ExperienceLevel;
    use teamforge_test::{participant, requirement};

    fn skills(names: &[&str]) -> SkillSet {
        names.iter().copied().collect()
    }

    #[test]
    fn test_partial_overlap_is_not_eligible() {
        let required = skills(&["frontend", "backend", "devops"]);
        assert!(!is_eligible(&skills(&["frontend"]), &required));
        assert!(!is_eligible(&skills(&["frontend", "backend"]), &required));
        assert!(is_eligible(&skills(&["frontend", "backend", "devops"]), &required));
    }

    #[test]
    fn test_extra_skills_do_not_hurt() {
        let required = skills(&["backend"]);
        assert!(is_eligible(&skills(&["design", "backend", "ml"]), &required));
    }

    #[test]
    fn test_disjoint_skills() {
        assert!(!is_eligible(&skills(&["design"]), &skills(&["backend"])));
    }

    #[test]
    fn test_check_candidate_reasons() {
        let req = requirement(1, 1)
            .skills(["backend"])
            .min_experience(ExperienceLevel::Intermediate)
            .build();

        let novice = participant(1).skills(["backend"]).build();
        assert_eq!(check_candidate(&novice, &req), Err(Rejection::InsufficientExperience));

        let designer = participant(2)
            .skills(["design"])
            .experience(ExperienceLevel::Advanced)
            .build();
        assert_eq!(check_candidate(&designer, &req), Err(Rejection::MissingSkills));

        let dev = participant(3)
            .skills(["backend"])
            .experience(ExperienceLevel::Advanced)
            .build();
        assert_eq!(check_candidate(&dev, &req), Ok(()));
        assert!(qualifies(&dev, &req));
    }

    #[test]
    fn test_check_candidate_rejects_assigned() {
        let mut req = requirement(1, 2).skills(["backend"]).build();
        let mut dev = participant(1).skills(["backend"]).build();
        assert!(req.admit(&mut dev));

        assert_eq!(check_candidate(&dev, &req), Err(Rejection::AlreadyAssigned));
        // Eligibility alone ignores assignment.
        assert!(qualifies(&dev, &req));
    }
}
