//! Textual peak-analysis report.
//!
//! Fixed-precision summary printed after the analysis stage. Currents are
//! expected in microamps (the persistence unit), so values are printed as-is
//! with a `uA` label.

use swv_core::{BaselineModel, PeakReport};

/// Render the peak-analysis report.
pub fn render(baseline: &BaselineModel, peak: &PeakReport) -> String {
    format!(
        "--- Peak Analysis ---\n\
         Raw Peak Current: {:.2} uA\n\
         Best Baseline equation: y = {:.2e} * x + {:.2e}\n\
         Best Baseline R^2: {:.5}\n\
         Calculated Peak Height: {:.5} uA at {:.3} V\n",
        peak.raw_peak_current,
        baseline.slope,
        baseline.intercept,
        baseline.r_squared,
        peak.peak_height,
        peak.peak_potential,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_formatting() {
        let baseline = BaselineModel {
            slope: 14.410338152952179,
            intercept: 32.394696349460734,
            r_squared: 0.99848,
            window_start: -0.55,
            window_end: -0.505,
        };
        let peak = PeakReport {
            peak_potential: -0.33,
            raw_peak_current: 92.6113063864302,
            baseline_current: 27.639,
            peak_height: 64.97202162744368,
        };
        let text = render(&baseline, &peak);
        assert!(text.starts_with("--- Peak Analysis ---\n"));
        assert!(text.contains("Raw Peak Current: 92.61 uA"));
        assert!(text.contains("Best Baseline R^2: 0.99848"));
        assert!(text.contains("Calculated Peak Height: 64.97202 uA at -0.330 V"));
    }
}
