//! Shared test fixtures for TeamForge crates.
//!
//! This crate provides data builders and canned scenarios for testing.
//! It depends only on `teamforge-core` so every other crate can use it as a
//! dev-dependency without cycles.
//!
//! - [`builder`] - Participant and requirement builders
//! - [`scenario`] - Ready-made rosters
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! teamforge-test = { workspace = true }
//! ```
//!
//! ```
//! use teamforge_test::{participant, requirement};
//!
//! let p = participant(1).skills(["frontend", "backend"]).build();
//! let r = requirement(1, 2).skills(["backend"]).build();
//! assert_eq!(p.skills().len(), 2);
//! assert_eq!(r.target_size(), 2);
//! ```

pub mod builder;
pub mod scenario;

pub use builder::{participant, requirement, ParticipantBuilder, RequirementBuilder};
pub use scenario::Roster;
