//! Sliding-window baseline estimation.
//!
//! The non-faradaic background dominates the early portion of a voltammogram,
//! away from the peak. The estimator slides a fixed-width window across that
//! region, fits an ordinary-least-squares line per window, and keeps the
//! window with the highest coefficient of determination as the "most linear"
//! region. Its line, extrapolated over the whole potential range, is the
//! baseline.

use nalgebra::{DMatrix, DVector};
use rayon::prelude::*;
use swv_core::{BaselineModel, Error, Result, SweepResult};

/// One candidate window fit.
#[derive(Debug, Clone, Copy)]
struct WindowFit {
    start: usize,
    slope: f64,
    intercept: f64,
    r_squared: f64,
}

/// Baseline estimator configured with a window size and a search fraction.
#[derive(Debug, Clone, Copy)]
pub struct BaselineEstimator {
    /// Number of consecutive samples per candidate window (>= 2)
    pub window: usize,
    /// Fraction of the series (from the start) searched for the baseline,
    /// in (0, 1]
    pub search_fraction: f64,
}

impl Default for BaselineEstimator {
    /// Reference settings: 10-sample windows over the first 40% of the series.
    fn default() -> Self {
        Self { window: 10, search_fraction: 0.4 }
    }
}

impl BaselineEstimator {
    /// Create an estimator with an explicit window size and search fraction.
    pub fn new(window: usize, search_fraction: f64) -> Self {
        Self { window, search_fraction }
    }

    /// Fit the baseline to a current series.
    ///
    /// Window start positions cover `0..=search_limit − window` with
    /// `search_limit = floor(len·search_fraction)`, so every candidate lies
    /// fully inside the search range. The candidate fits are independent and
    /// evaluated in parallel; the winner is picked by a sequential reduction
    /// with a first-maximum tie-break, so the result is deterministic.
    pub fn fit(&self, series: &SweepResult) -> Result<BaselineModel> {
        if series.is_empty() {
            return Err(Error::EmptyInput("cannot fit a baseline to an empty series".to_string()));
        }
        if self.window < 2 {
            return Err(Error::Config(format!(
                "baseline window must be >= 2 samples, got {}",
                self.window
            )));
        }
        if !self.search_fraction.is_finite()
            || self.search_fraction <= 0.0
            || self.search_fraction > 1.0
        {
            return Err(Error::Config(format!(
                "search_fraction must be in (0, 1], got {}",
                self.search_fraction
            )));
        }

        let search_limit = (series.len() as f64 * self.search_fraction).floor() as usize;
        if search_limit < self.window {
            return Err(Error::Config(format!(
                "search range ({search_limit} samples) is shorter than the window ({}); \
                 no candidate fits",
                self.window
            )));
        }

        let n_starts = search_limit - self.window + 1;
        let fits = (0..n_starts)
            .into_par_iter()
            .map(|start| fit_window(series, start, self.window))
            .collect::<Result<Vec<_>>>()?;

        // Explicit best-so-far reduction: strict `>` keeps the first window
        // achieving the maximum, stable under ties.
        let mut best = fits[0];
        for fit in &fits[1..] {
            if fit.r_squared > best.r_squared {
                best = *fit;
            }
        }

        Ok(BaselineModel {
            slope: best.slope,
            intercept: best.intercept,
            r_squared: best.r_squared,
            window_start: series.samples[best.start].potential,
            window_end: series.samples[best.start + self.window - 1].potential,
        })
    }
}

/// OLS line through `window` samples starting at `start`, with its r².
///
/// Solves the 2×2 normal equations `(X^T X) beta = X^T y` for an
/// intercept-plus-slope design.
fn fit_window(series: &SweepResult, start: usize, window: usize) -> Result<WindowFit> {
    let samples = &series.samples[start..start + window];
    let n = window as f64;

    let mut sx = 0.0;
    let mut sy = 0.0;
    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for s in samples {
        sx += s.potential;
        sy += s.current;
        sxx += s.potential * s.potential;
        sxy += s.potential * s.current;
    }

    let xtx = DMatrix::from_row_slice(2, 2, &[n, sx, sx, sxx]);
    let xty = DVector::from_row_slice(&[sy, sxy]);
    let beta = xtx.lu().solve(&xty).ok_or_else(|| {
        Error::Computation(format!(
            "baseline window at {start} has singular normal equations (degenerate potentials)"
        ))
    })?;
    let (intercept, slope) = (beta[0], beta[1]);

    let mean = sy / n;
    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for s in samples {
        let r = s.current - (slope * s.potential + intercept);
        ss_res += r * r;
        let d = s.current - mean;
        ss_tot += d * d;
    }

    // Degenerate zero-variance window: a perfect constant fit scores 1, any
    // residual scores 0.
    let r_squared = if ss_tot > 0.0 {
        1.0 - ss_res / ss_tot
    } else if ss_res < f64::EPSILON {
        1.0
    } else {
        0.0
    };

    Ok(WindowFit { start, slope, intercept, r_squared })
}
