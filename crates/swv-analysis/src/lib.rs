//! # swv-analysis
//!
//! Baseline estimation and peak extraction for SWV current series.
//!
//! This crate provides:
//! - [`BaselineEstimator`]: sliding-window OLS over the early portion of a
//!   series, selecting the most linear window by coefficient of
//!   determination,
//! - [`find_peak`]: background-corrected peak height and location.
//!
//! Both stages are deterministic scans over an immutable [`swv_core::SweepResult`];
//! the per-window regression fits are read-only and run in parallel.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Sliding-window OLS baseline estimation.
pub mod baseline;
/// Background-corrected peak extraction.
pub mod peak;

pub use baseline::BaselineEstimator;
pub use peak::find_peak;
