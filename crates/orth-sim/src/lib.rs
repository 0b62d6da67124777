//! Simulation driver for random bridge building.
//!
//! A [`Simulation`] owns one [`Grid`](orth_grid::Grid) and repeatedly places
//! a bridge on a random empty cell until a spanning path exists along
//! axis 0 or the grid runs out of room. Progress is reported through
//! `tracing`; the `bridge-sim` binary wires a subscriber and a CLI on top.
//!
//! ```
//! use orth_sim::{Outcome, SimConfig, Simulation};
//! use std::time::Duration;
//!
//! let config = SimConfig {
//!     lengths: vec![6, 4],
//!     seed: Some(1),
//!     step_delay: Duration::ZERO,
//!     render_every: None,
//!     ..SimConfig::default()
//! };
//! let report = Simulation::new(config).unwrap().run().unwrap();
//! assert_eq!(report.outcome, Outcome::Spanned);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod simulation;

pub use config::{ConfigError, SimConfig};
pub use error::SimError;
pub use simulation::{Outcome, SimReport, Simulation, StepOutcome};
