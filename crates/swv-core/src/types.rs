//! Common data types for the SWV toolkit

use serde::{Deserialize, Serialize};

/// One point of a square-wave voltammogram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentSample {
    /// Staircase potential (V)
    pub potential: f64,
    /// Net (forward − reverse) current. Amperes as produced by the simulator;
    /// microamps after [`SweepResult::to_microamps`].
    pub current: f64,
}

/// Full voltammogram from one potential sweep, in ascending potential order.
///
/// Produced once per sweep and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    /// Samples in ascending potential order
    pub samples: Vec<CurrentSample>,
}

impl SweepResult {
    /// Create a sweep result from an ordered sample list.
    pub fn new(samples: Vec<CurrentSample>) -> Self {
        Self { samples }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the sweep holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Potentials in sweep order.
    pub fn potentials(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.potential).collect()
    }

    /// Currents in sweep order.
    pub fn currents(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.current).collect()
    }

    /// Copy of the sweep with currents scaled from amperes to microamps.
    ///
    /// Potentials are left untouched. Used at the persistence/reporting
    /// boundary so stored and printed values agree with the `uA` unit label.
    pub fn to_microamps(&self) -> Self {
        Self {
            samples: self
                .samples
                .iter()
                .map(|s| CurrentSample { potential: s.potential, current: s.current * 1e6 })
                .collect(),
        }
    }
}

/// Best-fitting linear baseline over a current series.
///
/// The line is fitted on the winning sliding window and extrapolated across
/// the entire potential range via [`BaselineModel::predict`]. Slope and
/// intercept are in the series' current unit (per volt / absolute).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineModel {
    /// Fitted slope (current unit per V)
    pub slope: f64,
    /// Fitted intercept (current unit)
    pub intercept: f64,
    /// Coefficient of determination of the winning window fit
    pub r_squared: f64,
    /// Potential of the first sample in the winning window (V)
    pub window_start: f64,
    /// Potential of the last sample in the winning window (V)
    pub window_end: f64,
}

impl BaselineModel {
    /// Evaluate the baseline at a potential.
    pub fn predict(&self, potential: f64) -> f64 {
        self.slope * potential + self.intercept
    }
}

/// Background-corrected peak extracted from a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeakReport {
    /// Potential of the maximum net current (V)
    pub peak_potential: f64,
    /// Raw current at the peak (series current unit)
    pub raw_peak_current: f64,
    /// Baseline evaluated at the peak potential
    pub baseline_current: f64,
    /// Corrected height: raw current minus baseline
    pub peak_height: f64,
}
