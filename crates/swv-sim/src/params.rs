//! Physical and numerical parameters for a square-wave voltammetry sweep.
//!
//! All parameters live in one immutable value passed by reference into the
//! simulator; there is no module-level state. Units follow the cm-based
//! electrochemical convention of the reference system: concentrations in
//! mol/cm³, diffusion coefficients in cm²/s, currents in amperes.

use serde::{Deserialize, Serialize};
use swv_core::{Error, Result};

/// Parameters of the redox couple, the excitation waveform, and the
/// discretization.
///
/// `Default` carries the documented reference values (a one-electron
/// reversible couple with a formal potential of −0.33 V swept from −0.6 V to
/// −0.15 V at 25 Hz).
///
/// # Discretization policy (documented)
/// - The sub-step duration is `dt = (τ/2) / steps_per_half` with `τ = 1/f`.
/// - The spatial step is **derived**: `dx = sqrt(D·dt / alpha_target)`, so the
///   explicit scheme's stability factor `α = D·dt/dx²` lands on
///   `alpha_target` by construction. `dx` is never configured independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwvParameters {
    /// Formal potential of the couple (V)
    pub e_formal: f64,
    /// First staircase potential (V)
    pub e_initial: f64,
    /// Staircase upper bound, excluded per the half-open endpoint policy (V)
    pub e_final: f64,
    /// Bulk analyte concentration (mol/cm³)
    pub bulk_concentration: f64,
    /// Diffusion coefficient of both species (cm²/s)
    pub diffusion_coefficient: f64,
    /// Electrons transferred per redox event
    pub electrons: u32,
    /// Faraday constant (C/mol)
    pub faraday: f64,
    /// Gas constant (J/(mol·K))
    pub gas_constant: f64,
    /// Temperature (K)
    pub temperature: f64,
    /// Staircase increment (V)
    pub e_step: f64,
    /// Square-wave pulse amplitude (V)
    pub pulse_amplitude: f64,
    /// Square-wave frequency (Hz)
    pub frequency: f64,
    /// Double-layer capacitance of the film (F)
    pub double_layer_capacitance: f64,
    /// Constant non-faradaic background current (A)
    pub background_offset: f64,
    /// Number of equal sub-steps per half pulse
    pub steps_per_half: usize,
    /// Number of spatial grid points (index 0 = electrode surface)
    pub grid_points: usize,
    /// Target stability factor used to derive `dx` (safe below 0.5)
    pub alpha_target: f64,
}

impl Default for SwvParameters {
    fn default() -> Self {
        Self {
            e_formal: -0.33,
            e_initial: -0.6,
            e_final: -0.15,
            bulk_concentration: 1.0e-7,
            diffusion_coefficient: 1.0e-5,
            electrons: 1,
            faraday: 96485.0,
            gas_constant: 8.314,
            temperature: 298.15,
            e_step: 0.005,
            pulse_amplitude: 0.025,
            frequency: 25.0,
            double_layer_capacitance: 10.0e-6,
            background_offset: 0.5e-6,
            steps_per_half: 40,
            grid_points: 150,
            alpha_target: 0.45,
        }
    }
}

impl SwvParameters {
    /// Validate the parameter set before any simulation work begins.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("bulk_concentration", self.bulk_concentration),
            ("diffusion_coefficient", self.diffusion_coefficient),
            ("faraday", self.faraday),
            ("gas_constant", self.gas_constant),
            ("temperature", self.temperature),
            ("e_step", self.e_step),
            ("pulse_amplitude", self.pulse_amplitude),
            ("frequency", self.frequency),
            ("double_layer_capacitance", self.double_layer_capacitance),
            ("alpha_target", self.alpha_target),
        ];
        for (name, v) in positive {
            if !v.is_finite() || v <= 0.0 {
                return Err(Error::Config(format!("{name} must be finite and > 0, got {v}")));
            }
        }
        for (name, v) in [
            ("e_formal", self.e_formal),
            ("e_initial", self.e_initial),
            ("e_final", self.e_final),
            ("background_offset", self.background_offset),
        ] {
            if !v.is_finite() {
                return Err(Error::Config(format!("{name} must be finite, got {v}")));
            }
        }
        if self.electrons == 0 {
            return Err(Error::Config("electrons must be >= 1".to_string()));
        }
        if self.e_final <= self.e_initial {
            return Err(Error::Config(format!(
                "e_final must be > e_initial, got {} <= {}",
                self.e_final, self.e_initial
            )));
        }
        if self.steps_per_half < 2 {
            return Err(Error::Config(format!(
                "steps_per_half must be >= 2, got {}",
                self.steps_per_half
            )));
        }
        // The surface flux uses C[0] and C[1], and the diffusion stencil needs
        // at least one interior point between the two boundaries.
        if self.grid_points < 3 {
            return Err(Error::Config(format!(
                "grid_points must be >= 3 for the central-difference stencil, got {}",
                self.grid_points
            )));
        }
        Ok(())
    }

    /// Duration of one full square-wave cycle, `τ = 1/f` (s).
    pub fn tau(&self) -> f64 {
        1.0 / self.frequency
    }

    /// Duration of one half pulse, `τ/2` (s).
    pub fn half_period(&self) -> f64 {
        self.tau() / 2.0
    }

    /// Sub-step duration (s).
    pub fn dt(&self) -> f64 {
        self.half_period() / self.steps_per_half as f64
    }

    /// Derived diffusion-layer slice thickness (cm).
    pub fn dx(&self) -> f64 {
        (self.diffusion_coefficient * self.dt() / self.alpha_target).sqrt()
    }

    /// Actual stability factor `α = D·dt/dx²` of the explicit scheme.
    ///
    /// Equals `alpha_target` up to rounding since `dx` is derived from it; the
    /// sweep driver still checks it against the 0.5 bound.
    pub fn stability_factor(&self) -> f64 {
        let dx = self.dx();
        self.diffusion_coefficient * self.dt() / (dx * dx)
    }

    /// Nernst exponent prefactor `n·F/(R·T)` (1/V).
    pub fn nernst_exponent(&self) -> f64 {
        self.electrons as f64 * self.faraday / (self.gas_constant * self.temperature)
    }

    /// Equilibrium ratio `C_O/C_R = exp(n·F/(R·T) · (E − E_formal))` at the
    /// surface for an applied potential.
    pub fn nernst_ratio(&self, e_applied: f64) -> f64 {
        (self.nernst_exponent() * (e_applied - self.e_formal)).exp()
    }

    /// Half-open staircase from `e_initial` towards `e_final`.
    ///
    /// # Endpoint policy (documented)
    /// `count = ceil((e_final − e_initial) / e_step)` samples starting at
    /// `e_initial`; `e_final` itself is excluded, also when the span is an
    /// exact multiple of the step.
    pub fn staircase(&self) -> Vec<f64> {
        let count = ((self.e_final - self.e_initial) / self.e_step).ceil() as usize;
        (0..count).map(|i| self.e_initial + i as f64 * self.e_step).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_validate() {
        SwvParameters::default().validate().unwrap();
    }

    #[test]
    fn test_stability_factor_hits_target() {
        let p = SwvParameters::default();
        assert_relative_eq!(p.stability_factor(), 0.45, max_relative = 1e-12);
        assert!(p.stability_factor() <= 0.5);
    }

    #[test]
    fn test_dx_derived_from_dt_and_target() {
        let p = SwvParameters::default();
        // dt = (1/25 / 2) / 40 = 5e-4 s; dx = sqrt(1e-5 * 5e-4 / 0.45).
        assert_relative_eq!(p.dt(), 5.0e-4, max_relative = 1e-12);
        assert_relative_eq!(p.dx(), (1.0e-5 * 5.0e-4 / 0.45_f64).sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn test_staircase_is_half_open_and_strictly_increasing() {
        let p = SwvParameters::default();
        let e = p.staircase();
        assert_eq!(e.len(), 90);
        assert_eq!(e[0], -0.6);
        for w in e.windows(2) {
            assert!(w[1] > w[0]);
            assert_relative_eq!(w[1] - w[0], 0.005, max_relative = 1e-9);
        }
        assert!(*e.last().unwrap() < p.e_final);
    }

    #[test]
    fn test_staircase_excludes_exact_final() {
        let p = SwvParameters { e_initial: 0.0, e_final: 1.0, e_step: 0.25, ..Default::default() };
        assert_eq!(p.staircase(), vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_nernst_ratio_is_one_at_formal_potential() {
        let p = SwvParameters::default();
        assert_relative_eq!(p.nernst_ratio(p.e_formal), 1.0, max_relative = 1e-15);
        assert!(p.nernst_ratio(p.e_formal + 0.1) > 1.0);
        assert!(p.nernst_ratio(p.e_formal - 0.1) < 1.0);
    }

    #[test]
    fn test_validate_rejects_small_grid() {
        let p = SwvParameters { grid_points: 2, ..Default::default() };
        assert!(matches!(p.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_single_substep() {
        let p = SwvParameters { steps_per_half: 1, ..Default::default() };
        assert!(matches!(p.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let p = SwvParameters { e_initial: -0.1, e_final: -0.2, ..Default::default() };
        assert!(matches!(p.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_nonpositive_constants() {
        let p = SwvParameters { temperature: 0.0, ..Default::default() };
        assert!(p.validate().is_err());
        let p = SwvParameters { diffusion_coefficient: -1e-5, ..Default::default() };
        assert!(p.validate().is_err());
    }
}
