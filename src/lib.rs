//! `zz4l` reconstructs four-lepton ZZ candidates in batches of
//! collider events and evaluates the standard four-lepton selection.
//!
//! Per event, all valid same-flavor opposite-charge lepton pairings
//! are enumerated, pairing ambiguities are resolved towards the
//! nominal Z mass, and the best disjoint candidate pairs of the
//! three channels (4e, 4μ, 2e2μ) are merged into a per-event
//! candidate list. Selection steps and histogram-ready observables
//! are derived from that list.
//!
//! # How to use
//!
//! Probably the best way to get started is to look at
//! `demos/minimal.rs`.
//!
//! ## Most relevant modules
//!
//! - [prelude] exports a list of the most relevant classes and objects
//! - [analysis] contains the main class and lists the steps that are performed
//! - [reconstruct] for the combinatorial candidate reconstruction
//! - [selection] for the selection steps and their thresholds
//! - [reader] defines readers from one or more event files
//! - [writer] for writing per-event records to a file
//!

/// The analysis pipeline
pub mod analysis;
/// Z and ZZ candidate classes
pub mod candidate;
/// Event categories
pub mod category;
/// Analysis configuration
pub mod config;
/// Conversion between input records and internal format
pub mod converter;
/// Scattering event class
pub mod event;
/// Four-vector class
pub mod four_vector;
/// Toy event generation
pub mod generator;
/// Lepton classes
pub mod lepton;
/// Object-level lepton preselection
pub mod object_selection;
/// Per-event observables
pub mod observables;
/// Combinatorial pair enumeration
pub mod pairs;
/// Most important exports
pub mod prelude;
/// Progress bar
pub mod progress_bar;
/// Event readers
pub mod reader;
/// ZZ candidate reconstruction
pub mod reconstruct;
/// Selection steps
pub mod selection;
/// Cut-flow statistics
pub mod stats;
/// Common traits
pub mod traits;
/// Record writer
pub mod writer;

use lazy_static::lazy_static;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
lazy_static! {
    pub static ref VERSION_MAJOR: u32 =
        env!("CARGO_PKG_VERSION_MAJOR").parse().unwrap();
    pub static ref VERSION_MINOR: u32 =
        env!("CARGO_PKG_VERSION_MINOR").parse().unwrap();
    pub static ref VERSION_PATCH: u32 =
        env!("CARGO_PKG_VERSION_PATCH").parse().unwrap();
}
pub const GIT_REV: Option<&str> = option_env!("VERGEN_GIT_SHA");
pub const GIT_BRANCH: Option<&str> = option_env!("VERGEN_GIT_BRANCH");
