//! Experience comparison.

use teamforge_core::{ExperienceLevel, RequiredExperience};

/// Returns true if a participant at `participant` level meets `required`.
///
/// `Any` accepts everyone; otherwise the participant's rank must be at
/// least the required rank.
///
/// # Examples
///
/// ```
/// use teamforge_core::{ExperienceLevel, RequiredExperience};
/// use teamforge_matching::satisfies_experience;
///
/// let needs_intermediate = RequiredExperience::AtLeast(ExperienceLevel::Intermediate);
/// assert!(satisfies_experience(ExperienceLevel::Advanced, needs_intermediate));
/// assert!(!satisfies_experience(ExperienceLevel::Beginner, needs_intermediate));
/// assert!(satisfies_experience(ExperienceLevel::Beginner, RequiredExperience::Any));
/// ```
#[inline]
pub fn satisfies_experience(participant: ExperienceLevel, required: RequiredExperience) -> bool {
    match required {
        RequiredExperience::Any => true,
        RequiredExperience::AtLeast(minimum) => participant.rank() >= minimum.rank(),
    }
}
