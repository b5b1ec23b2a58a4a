//! Ready-made rosters.

use teamforge_core::{ExperienceLevel, Participant, ParticipantDraft, Requirement, RequirementDraft};

use crate::builder::{participant, requirement, ParticipantBuilder, RequirementBuilder};

/// A participant/requirement pair of collections, both in id order.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub participants: Vec<Participant>,
    pub requirements: Vec<Requirement>,
}

impl Roster {
    pub fn new(participants: Vec<Participant>, requirements: Vec<Requirement>) -> Self {
        Self {
            participants,
            requirements,
        }
    }

    /// One full-stack slot, one frontend-only and one full-stack candidate.
    ///
    /// Only participant 2 covers both required skills.
    pub fn full_stack_pair() -> Self {
        Self::new(
            vec![
                participant(1).name("A").skills(["frontend"]).build(),
                participant(2).name("B").skills(["frontend", "backend"]).build(),
            ],
            vec![requirement(1, 1)
                .team_name("Full Stack")
                .skills(["frontend", "backend"])
                .build()],
        )
    }

    /// A small hackathon: three teams competing for six people.
    pub fn hackathon() -> Self {
        Self::new(
            hackathon_participants().into_iter().map(ParticipantBuilder::build).collect(),
            hackathon_requirements().into_iter().map(RequirementBuilder::build).collect(),
        )
    }

    /// The [`Roster::hackathon`] inputs as drafts, in registration order.
    pub fn hackathon_drafts() -> (Vec<ParticipantDraft>, Vec<RequirementDraft>) {
        (
            hackathon_participants().into_iter().map(ParticipantBuilder::draft).collect(),
            hackathon_requirements().into_iter().map(RequirementBuilder::draft).collect(),
        )
    }
}

fn hackathon_participants() -> Vec<ParticipantBuilder> {
    vec![
        participant(1)
            .name("Ada")
            .skills(["backend", "database"])
            .experience(ExperienceLevel::Advanced)
            .languages("English, French"),
        participant(2)
            .name("Grace")
            .skills(["frontend", "design"])
            .experience(ExperienceLevel::Intermediate),
        participant(3)
            .name("Linus")
            .skills(["backend", "devops"])
            .experience(ExperienceLevel::Beginner),
        participant(4)
            .name("Margaret")
            .skills(["backend", "database", "devops"])
            .experience(ExperienceLevel::Intermediate),
        participant(5)
            .name("Alan")
            .skills(["ml", "backend"])
            .experience(ExperienceLevel::Advanced),
        participant(6)
            .name("Barbara")
            .skills(["frontend"])
            .experience(ExperienceLevel::Beginner),
    ]
}

fn hackathon_requirements() -> Vec<RequirementBuilder> {
    vec![
        requirement(1, 2)
            .team_name("Data Crunchers")
            .description("Analytics backend")
            .skills(["backend", "database"])
            .min_experience(ExperienceLevel::Intermediate),
        requirement(2, 2)
            .team_name("Pixel Pushers")
            .skills(["frontend"]),
        requirement(3, 1)
            .team_name("Ops Squad")
            .skills(["devops"])
            .min_experience(ExperienceLevel::Advanced),
    ]
}
