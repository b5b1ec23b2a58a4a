//! Hackathon team matching demo for TeamForge.
//!
//! Registers a handful of participants and team requirements, lets the
//! registry match them as they arrive, and prints the resulting teams.
//!
//! Run with: cargo run -p hackathon
//!
//! Settings are read from `teamforge.toml` in the working directory when
//! present. With a `[store]` section, state persists between runs; pass
//! `--reset` to start over.

mod data;
mod display;

use std::process::ExitCode;

use owo_colors::OwoColorize;
use teamforge::{console, MatchError, RegistryError, TeamForgeConfig, TeamRegistry};

fn main() -> ExitCode {
    let config = TeamForgeConfig::load("teamforge.toml").unwrap_or_default();
    console::init_with(&config.console);

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".bright_red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(config: TeamForgeConfig) -> Result<(), RegistryError> {
    let mut registry = TeamRegistry::open(config)?;
    if std::env::args().any(|arg| arg == "--reset") {
        registry.reset()?;
    }

    if registry.participants().is_empty() && registry.requirements().is_empty() {
        for draft in data::participants() {
            registry.register_participant(draft)?;
        }
        for draft in data::requirements() {
            registry.submit_requirement(draft)?;
        }
    }

    // Retry teams that are still short, one by one.
    let open: Vec<_> = registry
        .requirements()
        .iter()
        .filter(|r| !r.is_completed())
        .map(|r| r.id())
        .collect();
    for id in open {
        match registry.match_requirement(id) {
            Ok(_) | Err(RegistryError::Match(MatchError::NoCandidates(_))) => {}
            Err(err) => return Err(err),
        }
    }

    display::print_teams(&registry);
    display::print_participants(&registry);
    display::print_summary(&registry);
    Ok(())
}
