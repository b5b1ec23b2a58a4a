//! Colorful console output for TeamForge.
//!
//! Provides a custom `tracing` layer that formats registry and matching
//! events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (registrations, matching passes, completed teams)
//! - **DEBUG**: Individual assignments, store reads and writes
//! - **TRACE**: Rejected candidates

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use teamforge_config::{ConsoleConfig, DEFAULT_LOG_FILTER};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes console output with default settings.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    init_with(&ConsoleConfig::default());
}

/// Initializes console output from configuration.
///
/// `RUST_LOG` overrides the configured filter when set. Safe to call
/// multiple times - only the first call has effect.
pub fn init_with(config: &ConsoleConfig) {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        if config.banner {
            print_banner();
        }

        let directive = config.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER);
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(directive))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(TeamConsoleLayer)
            .try_init();
    });
}

fn elapsed_secs() -> f64 {
    EPOCH.get().map_or(0.0, |epoch| epoch.elapsed().as_secs_f64())
}

/// Prints the TeamForge banner to stdout.
pub fn print_banner() {
    let banner = r#"
 _____                    _____
|_   _|__  __ _ _ __ ___ |  ___|__  _ __ __ _  ___
  | |/ _ \/ _` | '_ ` _ \| |_ / _ \| '__/ _` |/ _ \
  | |  __/ (_| | | | | | |  _| (_) | | | (_| |  __/
  |_|\___|\__,_|_| |_| |_|_|  \___/|_|  \__, |\___|
                                        |___/
"#;

    let version_line = format!(
        "                   v{} - Skill-Based Team Matching\n",
        VERSION
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats TeamForge events with colors.
pub struct TeamConsoleLayer;

impl<S: Subscriber> Layer<S> for TeamConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        // Accept events from TeamForge crates only
        if !metadata.target().starts_with("teamforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    team: Option<String>,
    member: Option<String>,
    name: Option<String>,
    requirement: Option<String>,
    participant: Option<String>,
    reason: Option<String>,
    participants: Option<u64>,
    requirements: Option<u64>,
    assigned: Option<u64>,
    completed_count: Option<u64>,
    completed: Option<bool>,
    filled: Option<u64>,
    size: Option<u64>,
    duration_ms: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "team" => self.team = Some(s),
            "member" => self.member = Some(s),
            "name" => self.name = Some(s),
            "requirement" => self.requirement = Some(s),
            "participant" => self.participant = Some(s),
            "reason" => self.reason = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "participants" => self.participants = Some(value),
            "requirements" => self.requirements = Some(value),
            "assigned" => self.assigned = Some(value),
            "completed" => self.completed_count = Some(value),
            "filled" => self.filled = Some(value),
            "size" => self.size = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "completed" {
            self.completed = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let value = value.to_string();
        match field.name() {
            "event" => self.event = Some(value),
            "team" => self.team = Some(value),
            "member" => self.member = Some(value),
            "name" => self.name = Some(value),
            "requirement" => self.requirement = Some(value),
            "participant" => self.participant = Some(value),
            "reason" => self.reason = Some(value),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "match_pass_start" => format_pass_start(v),
        "match_pass_end" => format_pass_end(v),
        "member_joined" => format_member_joined(v),
        "team_completed" => format_team_completed(v),
        "requirement_matched" => format_requirement_matched(v),
        "no_candidates" => format_no_candidates(v),
        "participant_registered" => format_registered(v, "Participant"),
        "requirement_submitted" => format_registered(v, "Requirement"),
        "registration_rejected" => format_rejected(v),
        "roster_restored" => format_restored(v),
        "roster_reset" => format!("{} {} Roster cleared", format_elapsed(), "↺".bright_yellow()),
        "assigned" if level >= Level::DEBUG => format_assigned(v),
        "candidate_rejected" if level == Level::TRACE => format_candidate_rejected(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(n: Option<u64>) -> String {
    n.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_pass_start(v: &EventVisitor) -> String {
    format!(
        "{} {} Matching │ {} participants │ {} requirements",
        format_elapsed(),
        "▶".bright_green().bold(),
        count(v.participants).bright_yellow(),
        count(v.requirements).bright_yellow(),
    )
}

fn format_pass_end(v: &EventVisitor) -> String {
    let assigned = v.assigned.unwrap_or(0);
    let marker = if assigned > 0 {
        "■".bright_cyan().bold().to_string()
    } else {
        "■".bright_black().to_string()
    };

    format!(
        "{} {} Matching complete │ {} assigned │ {} teams completed │ {}",
        format_elapsed(),
        marker,
        count(v.assigned).bright_magenta().bold(),
        count(v.completed_count).bright_green(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    )
}

fn format_member_joined(v: &EventVisitor) -> String {
    format!(
        "{}   {} {} → {} ({}/{})",
        format_elapsed(),
        "+".bright_green(),
        v.member.as_deref().unwrap_or("?").white().bold(),
        v.team.as_deref().unwrap_or("?").bright_cyan(),
        count(v.filled),
        count(v.size),
    )
}

fn format_team_completed(v: &EventVisitor) -> String {
    format!(
        "{} {} Team {} complete │ {} members",
        format_elapsed(),
        "✓".bright_green().bold(),
        v.team.as_deref().unwrap_or("?").bright_cyan().bold(),
        count(v.size).bright_yellow(),
    )
}

fn format_requirement_matched(v: &EventVisitor) -> String {
    let status = if v.completed.unwrap_or(false) {
        "complete".bright_green().bold().to_string()
    } else {
        "open".yellow().to_string()
    };
    format!(
        "{} {} Matched {} to {} │ {}",
        format_elapsed(),
        "▶".bright_blue(),
        count(v.assigned).bright_magenta().bold(),
        v.team.as_deref().unwrap_or("?").bright_cyan(),
        status,
    )
}

fn format_no_candidates(v: &EventVisitor) -> String {
    format!(
        "{} {} No suitable participants for {} yet",
        format_elapsed(),
        "!".bright_yellow().bold(),
        v.team.as_deref().unwrap_or("?").bright_cyan(),
    )
}

fn format_registered(v: &EventVisitor, kind: &str) -> String {
    format!(
        "{} {} {} {} registered",
        format_elapsed(),
        "•".bright_blue(),
        kind,
        v.name.as_deref().unwrap_or("?").white().bold(),
    )
}

fn format_rejected(v: &EventVisitor) -> String {
    format!(
        "{} {} Rejected {}: {}",
        format_elapsed(),
        "✗".bright_red().bold(),
        v.name.as_deref().unwrap_or("?").white(),
        v.reason.as_deref().unwrap_or("invalid input").bright_red(),
    )
}

fn format_restored(v: &EventVisitor) -> String {
    format!(
        "{} {} Restored {} participants │ {} requirements",
        format_elapsed(),
        "↺".bright_cyan(),
        count(v.participants).bright_yellow(),
        count(v.requirements).bright_yellow(),
    )
}

fn format_assigned(v: &EventVisitor) -> String {
    format!(
        "{}     {} {} ⇢ {}",
        format_elapsed(),
        "·".bright_black(),
        v.participant.as_deref().unwrap_or("?").bright_black(),
        v.requirement.as_deref().unwrap_or("?").bright_black(),
    )
}

fn format_candidate_rejected(v: &EventVisitor) -> String {
    format!(
        "{}     {} {} ✗ {} ({})",
        format_elapsed(),
        "·".bright_black(),
        v.participant.as_deref().unwrap_or("?").bright_black(),
        v.requirement.as_deref().unwrap_or("?").bright_black(),
        v.reason.as_deref().unwrap_or("?").bright_black(),
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
