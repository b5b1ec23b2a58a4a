//! Sample hackathon sign-ups.

use teamforge::{ExperienceLevel, ParticipantDraft, RequirementDraft};

pub fn participants() -> Vec<ParticipantDraft> {
    use ExperienceLevel::*;

    [
        ("Ada Lovelace", "ada@analytical.engine", Advanced, &["rust", "math", "backend"][..], "English"),
        ("Grace Hopper", "grace@navy.mil", Advanced, &["cobol", "compilers", "backend"][..], "English"),
        ("Katherine Johnson", "kj@nasa.gov", Advanced, &["math", "python"][..], "English"),
        ("Linus Torvalds", "linus@kernel.org", Intermediate, &["c", "devops", "backend"][..], "Finnish, English"),
        ("Margaret Hamilton", "margaret@mit.edu", Advanced, &["rust", "devops", "testing"][..], "English"),
        ("Tim Berners-Lee", "timbl@w3.org", Intermediate, &["frontend", "design"][..], "English, French"),
        ("Radia Perlman", "radia@networks.org", Intermediate, &["networking", "c"][..], "English"),
        ("Alan Kay", "alan@parc.com", Beginner, &["frontend", "design", "smalltalk"][..], "English"),
        ("Frances Allen", "fran@ibm.com", Beginner, &["compilers", "testing"][..], "English"),
    ]
    .into_iter()
    .map(|(name, contact, level, skills, languages)| {
        ParticipantDraft::new(name, contact)
            .with_experience(level)
            .with_skills(skills.iter().copied())
            .with_languages(languages)
    })
    .collect()
}

pub fn requirements() -> Vec<RequirementDraft> {
    vec![
        RequirementDraft::new("Rustaceans", 2)
            .with_description("Embedded telemetry in Rust")
            .with_skills(["rust"])
            .with_min_experience(ExperienceLevel::Intermediate),
        RequirementDraft::new("Web Weavers", 2)
            .with_description("Accessible front end for the judges")
            .with_skills(["frontend", "design"]),
        RequirementDraft::new("Number Crunchers", 1)
            .with_skills(["math", "python"])
            .with_min_experience(ExperienceLevel::Advanced),
        RequirementDraft::new("Compiler Crew", 2)
            .with_skills(["compilers"]),
        RequirementDraft::new("Packet Pushers", 2)
            .with_skills(["networking", "devops"]),
    ]
}
