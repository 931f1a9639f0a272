//! Classroom simulator for query injection and script injection.
//!
//! Nothing here touches a database or runs a script. Every "attack" is a
//! deterministic classification of the student's input against a fixed
//! in-memory table, so each result can be explained step by step:
//!
//! - **Query injection**: [`evaluate_lookup`] simulates a login form whose
//!   backend either concatenates input into SQL or binds it as parameters.
//! - **Script injection**: [`evaluate_rendering`] simulates a guestbook that
//!   either escapes comments or inserts them raw.
//! - **Walkthroughs**: a [`Sequencer`] steps through a scripted table of
//!   [`TutorialStep`]s, each of which presets the inputs and mode.
//! - **Sessions**: a [`Lab`] ties it together for a front-end, turning
//!   discrete [`Action`]s into state changes.
//!
//! # Core Types
//!
//! - [`RecordStore`]: immutable user table the lookups read
//! - [`Outcome`] / [`Verdict`]: result of a simulated login
//! - [`Rendering`]: both renderings of a comment plus the execution flag
//! - [`SafeHtml`]: text that has been through [`neutralize`]
//!
//! # Examples
//!
//! ```
//! use injection_lab::{evaluate_lookup, evaluate_rendering, Mode, RecordStore, Verdict};
//!
//! let store = RecordStore::fixed();
//!
//! // A stray quote breaks the concatenated query
//! let outcome = evaluate_lookup(&store, "'", "anything", Mode::Unprotected);
//! assert_eq!(outcome.verdict, Verdict::Malformed);
//!
//! // The tautology dumps the whole table
//! let outcome = evaluate_lookup(&store, "' OR '1'='1", "x", Mode::Unprotected);
//! assert_eq!(outcome.matched.len(), store.len());
//!
//! // Raw output with a script tag "runs"
//! let rendering = evaluate_rendering("Mallory", "<script>alert(1)</script>", Mode::Unprotected);
//! assert!(rendering.execution_simulated);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod action;
mod builder;
mod error;
mod escaped;
mod lab;
mod logging;
mod lookup;
mod mode;
mod pattern;
mod record;
mod rendering;
mod secret;
mod tutorial;

#[cfg(test)]
mod test_utils;

pub use action::Action;
pub use builder::LabBuilder;
pub use error::{Error, ErrorKind};
pub use escaped::SafeHtml;
pub use lab::{Inputs, Lab, Scenario};
pub use logging::LabLog;
pub use lookup::{evaluate_lookup, Outcome, SimulatedQuery, Verdict};
pub use mode::Mode;
pub use pattern::{contains_executable_marker, is_attack_pattern, is_malformed, neutralize};
pub use record::{Record, RecordStore, Role};
pub use rendering::{evaluate_rendering, Comment, Rendering};
pub use secret::Secret;
pub use tutorial::{lookup_steps, rendering_steps, Sequencer, StepEffect, TutorialStep};
