//! Square-wave sweep driver.
//!
//! Marches the potential staircase, integrating one forward and one reverse
//! half pulse per step, and assembles the net current series.
//!
//! # Current conventions (documented)
//! - Faradaic current: `−n·F·D·(C_O[1] − C_O[0]) / dx` (discrete surface
//!   flux, forward-difference gradient), evaluated after each half pulse.
//! - Capacitive current: `C_dl·E_sw/(τ/2)` on the forward pulse, negated on
//!   the reverse pulse (opposite-sign voltage step).
//! - A constant background offset is added to both half-pulse totals; it
//!   cancels in the net current `forward − reverse` but is kept explicit to
//!   match the modeled instrument response.
//! - All currents are in amperes; scaling to microamps happens only at the
//!   persistence/reporting boundary.

use swv_core::{CurrentSample, Error, Result, SweepResult};

use crate::params::SwvParameters;
use crate::profile::DiffusionProfile;

/// Run one square-wave sweep and return the net current series.
///
/// The diffusion profile is created once and kept evolving across staircase
/// steps (it is not reset between steps). Fails fast with
/// [`Error::Config`] on an invalid parameter set and with
/// [`Error::Instability`] if the explicit scheme's stability factor exceeds
/// 0.5.
pub fn simulate_sweep(params: &SwvParameters) -> Result<SweepResult> {
    params.validate()?;

    let alpha = params.stability_factor();
    if alpha > 0.5 {
        return Err(Error::Instability(format!(
            "stability factor {alpha:.4} exceeds the explicit-scheme bound 0.5; \
             lower alpha_target"
        )));
    }

    let dx = params.dx();
    let n_f_d = params.electrons as f64 * params.faraday * params.diffusion_coefficient;
    let faradaic = |profile: &DiffusionProfile| -n_f_d * profile.surface_delta_oxidized() / dx;
    let capacitive = params.double_layer_capacitance * params.pulse_amplitude / params.half_period();

    let mut profile = DiffusionProfile::new(params.grid_points, params.bulk_concentration);
    let staircase = params.staircase();
    let mut samples = Vec::with_capacity(staircase.len());

    for e_base in staircase {
        let e_fwd = e_base + params.pulse_amplitude;
        profile.advance_half_pulse(params.nernst_ratio(e_fwd), alpha, params.steps_per_half);
        let total_fwd = faradaic(&profile) + capacitive + params.background_offset;

        let e_rev = e_base - params.pulse_amplitude;
        profile.advance_half_pulse(params.nernst_ratio(e_rev), alpha, params.steps_per_half);
        let total_rev = faradaic(&profile) - capacitive + params.background_offset;

        samples.push(CurrentSample { potential: e_base, current: total_fwd - total_rev });
    }

    Ok(SweepResult::new(samples))
}
