//! Plain terminal rendering of the roster.

use owo_colors::OwoColorize;
use teamforge::{Requirement, TeamRegistry};

pub fn print_teams(registry: &TeamRegistry) {
    println!();
    println!("{}", "Teams".bright_white().bold().underline());
    for requirement in registry.requirements() {
        print_team(registry, requirement);
    }
}

fn print_team(registry: &TeamRegistry, requirement: &Requirement) {
    let (filled, size) = requirement.progress();
    let status = if requirement.is_completed() {
        "complete".bright_green().to_string()
    } else {
        format!("{} open", requirement.open_slots()).yellow().to_string()
    };
    println!(
        "  {} {} ({}/{}) {}",
        requirement.id().bright_black(),
        requirement.team_name().bright_cyan().bold(),
        filled,
        size,
        status,
    );
    if let Some(description) = requirement.description() {
        println!("      {}", description.italic());
    }
    println!(
        "      needs: {} │ experience: {}",
        requirement.required_skills(),
        requirement.min_experience(),
    );
    for member in registry.team_members(requirement.id()) {
        println!(
            "      {} {} ({})",
            "+".bright_green(),
            member.name().white(),
            member.experience(),
        );
    }
    if !requirement.assigned().is_empty() {
        println!(
            "      team skills: {}",
            registry.team_skill_set(requirement.id()).bright_black()
        );
    }
}

pub fn print_participants(registry: &TeamRegistry) {
    println!();
    println!("{}", "Participants".bright_white().bold().underline());
    for participant in registry.participants() {
        let status = registry
            .participant_status(participant.id())
            .map(|s| s.to_string())
            .unwrap_or_default();
        let status = if participant.is_assigned() {
            status.bright_green().to_string()
        } else {
            status.yellow().to_string()
        };
        println!(
            "  {} {:<20} {:<12} {}",
            participant.id().bright_black(),
            participant.name(),
            participant.experience().to_string(),
            status,
        );
    }
}

pub fn print_summary(registry: &TeamRegistry) {
    let summary = registry.summary();
    println!();
    println!(
        "{} {} participants ({} available) │ {} teams ({} complete, {} open)",
        "▸".bright_green(),
        summary.participants.bright_yellow(),
        summary.available,
        summary.requirements.bright_yellow(),
        summary.completed,
        summary.open,
    );
}
