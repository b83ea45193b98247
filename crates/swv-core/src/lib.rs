//! # swv-core
//!
//! Shared value types and error handling for the SWV toolkit.
//!
//! This crate holds the plain data handed between the simulator
//! (`swv-sim`) and the analysis stage (`swv-analysis`): a sweep is a
//! sequence of (potential, current) samples, and the analysis stage derives
//! an extrapolated linear baseline plus a corrected peak from it. No
//! algorithmic code lives here.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{BaselineModel, CurrentSample, PeakReport, SweepResult};
