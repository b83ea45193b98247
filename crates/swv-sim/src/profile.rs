//! Concentration profiles and the half-pulse integrator.
//!
//! A [`DiffusionProfile`] holds oxidized and reduced concentrations on a 1-D
//! grid extending away from the electrode (index 0 = surface, last index =
//! semi-infinite bulk reservoir). It is created once per sweep and mutated in
//! place by every half pulse; state deliberately carries across staircase
//! steps so the sweep models one continuous experiment.

/// Oxidized/reduced concentration profiles over the diffusion layer.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffusionProfile {
    oxidized: Vec<f64>,
    reduced: Vec<f64>,
}

impl DiffusionProfile {
    /// Fresh profile: oxidized species at bulk concentration everywhere,
    /// reduced species absent.
    ///
    /// Requires `grid_points >= 2`: the surface reaction and the flux
    /// evaluation index points 0 and 1 directly. The sweep driver validates
    /// the stricter stencil bound (>= 3) before constructing a profile.
    pub fn new(grid_points: usize, bulk_concentration: f64) -> Self {
        debug_assert!(grid_points >= 2, "profile needs a surface point and a neighbor");
        Self { oxidized: vec![bulk_concentration; grid_points], reduced: vec![0.0; grid_points] }
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.oxidized.len()
    }

    /// Whether the grid is empty.
    pub fn is_empty(&self) -> bool {
        self.oxidized.is_empty()
    }

    /// Oxidized concentrations, surface first.
    pub fn oxidized(&self) -> &[f64] {
        &self.oxidized
    }

    /// Reduced concentrations, surface first.
    pub fn reduced(&self) -> &[f64] {
        &self.reduced
    }

    /// Discrete surface concentration difference `C_O[1] − C_O[0]`, the
    /// forward-difference gradient used for the faradaic current.
    pub fn surface_delta_oxidized(&self) -> f64 {
        self.oxidized[1] - self.oxidized[0]
    }

    /// Advance the profile through one half pulse at a fixed applied
    /// potential, given the surface equilibrium `ratio = C_O/C_R` and the
    /// stability factor `alpha = D·dt/dx²`.
    ///
    /// Each sub-step re-partitions the surface point between the two species
    /// (instantaneous Nernstian equilibrium; the sum at index 0 is preserved)
    /// and then applies an explicit second-difference diffusion update to the
    /// interior points of both species. Boundary points are excluded from
    /// diffusion: index 0 is governed by the surface reaction and the last
    /// index is held at its value, approximating the bulk reservoir.
    ///
    /// Pure numerical routine; all validation happens in the sweep driver.
    pub fn advance_half_pulse(&mut self, ratio: f64, alpha: f64, sub_steps: usize) {
        for _ in 0..sub_steps {
            self.partition_surface(ratio);
            second_difference_step(&mut self.oxidized, alpha);
            second_difference_step(&mut self.reduced, alpha);
        }
    }

    /// Re-split the surface point's total concentration per the equilibrium
    /// ratio: `C_R[0] = total/(1 + ratio)`, `C_O[0] = total − C_R[0]`.
    fn partition_surface(&mut self, ratio: f64) {
        let total = self.oxidized[0] + self.reduced[0];
        self.reduced[0] = total / (1.0 + ratio);
        self.oxidized[0] = total - self.reduced[0];
    }
}

/// One explicit diffusion step on the interior points of `c`.
///
/// The second difference is evaluated against the pre-step state: old left
/// and center values are carried through the scan while `c[i + 1]` has not
/// been overwritten yet.
fn second_difference_step(c: &mut [f64], alpha: f64) {
    let n = c.len();
    let mut left = c[0];
    for i in 1..n - 1 {
        let center = c[i];
        c[i] = center + alpha * (c[i + 1] - 2.0 * center + left);
        left = center;
    }
}
