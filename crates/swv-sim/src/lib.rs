//! # swv-sim
//!
//! Square-wave voltammetry simulation.
//!
//! This crate provides:
//! - a validated [`SwvParameters`] set (redox couple, excitation waveform,
//!   discretization),
//! - the in-place [`DiffusionProfile`] with its Nernstian surface boundary
//!   condition and explicit diffusion stencil,
//! - the [`simulate_sweep`] driver producing a net current series.
//!
//! The integration is inherently sequential (every sub-step depends on the
//! previous concentration state); the whole crate is single-threaded and
//! deterministic.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Physical/numerical parameter set and derived discretization quantities.
pub mod params;
/// Concentration profiles and the half-pulse integrator.
pub mod profile;
/// Staircase sweep driver assembling the net current series.
pub mod sweep;

pub use params::SwvParameters;
pub use profile::DiffusionProfile;
pub use sweep::simulate_sweep;
