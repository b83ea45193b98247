//! Peak extraction.

use swv_core::{BaselineModel, Error, PeakReport, Result, SweepResult};

/// Locate the maximum net current and report its baseline-corrected height.
///
/// The first occurrence wins on ties. Pure function; the only failure mode is
/// an empty series.
pub fn find_peak(series: &SweepResult, baseline: &BaselineModel) -> Result<PeakReport> {
    let mut peak = series
        .samples
        .first()
        .copied()
        .ok_or_else(|| Error::EmptyInput("cannot extract a peak from an empty series".to_string()))?;
    for s in &series.samples[1..] {
        if s.current > peak.current {
            peak = *s;
        }
    }

    let baseline_current = baseline.predict(peak.potential);
    Ok(PeakReport {
        peak_potential: peak.potential,
        raw_peak_current: peak.current,
        baseline_current,
        peak_height: peak.current - baseline_current,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde::Deserialize;
    use swv_core::CurrentSample;

    fn flat_baseline(value: f64) -> BaselineModel {
        BaselineModel {
            slope: 0.0,
            intercept: value,
            r_squared: 1.0,
            window_start: 0.0,
            window_end: 0.0,
        }
    }

    #[test]
    fn test_peak_height_is_raw_minus_baseline_exactly() {
        let series = SweepResult::new(vec![
            CurrentSample { potential: 0.0, current: 1.0 },
            CurrentSample { potential: 0.1, current: 6.0 },
            CurrentSample { potential: 0.2, current: 2.0 },
        ]);
        let baseline =
            BaselineModel { slope: 10.0, intercept: 1.0, r_squared: 1.0, window_start: 0.0, window_end: 0.2 };
        let report = find_peak(&series, &baseline).unwrap();
        assert_eq!(report.peak_potential, 0.1);
        assert_eq!(report.raw_peak_current, 6.0);
        assert_eq!(report.baseline_current, 2.0);
        assert_eq!(report.peak_height, 4.0);
        assert!(report.peak_height > 0.0);
    }

    #[test]
    fn test_first_occurrence_wins_on_ties() {
        let series = SweepResult::new(vec![
            CurrentSample { potential: -0.3, current: 5.0 },
            CurrentSample { potential: -0.2, current: 5.0 },
            CurrentSample { potential: -0.1, current: 1.0 },
        ]);
        let report = find_peak(&series, &flat_baseline(0.0)).unwrap();
        assert_eq!(report.peak_potential, -0.3);
    }

    #[test]
    fn test_empty_series_is_empty_input_error() {
        let series = SweepResult::new(vec![]);
        assert!(matches!(find_peak(&series, &flat_baseline(0.0)), Err(Error::EmptyInput(_))));
    }

    #[derive(Debug, Deserialize)]
    struct Expected {
        slope: f64,
        intercept: f64,
        peak_potential: f64,
        raw_peak_current: f64,
        baseline_current: f64,
        peak_height: f64,
    }

    #[derive(Debug, Deserialize)]
    struct Fixture {
        potentials: Vec<f64>,
        currents: Vec<f64>,
        expected: Expected,
    }

    #[test]
    fn test_peak_matches_fixture() {
        let fx: Fixture = serde_json::from_str(include_str!(
            "../../../tests/fixtures/analysis/linear_peak.json"
        ))
        .unwrap();
        let series = SweepResult::new(
            fx.potentials
                .iter()
                .zip(&fx.currents)
                .map(|(&potential, &current)| CurrentSample { potential, current })
                .collect(),
        );
        let baseline = BaselineModel {
            slope: fx.expected.slope,
            intercept: fx.expected.intercept,
            r_squared: 1.0,
            window_start: 0.0,
            window_end: 0.0,
        };
        let report = find_peak(&series, &baseline).unwrap();
        assert_eq!(report.peak_potential, fx.expected.peak_potential);
        assert_eq!(report.raw_peak_current, fx.expected.raw_peak_current);
        assert_relative_eq!(report.baseline_current, fx.expected.baseline_current, max_relative = 1e-12);
        assert_relative_eq!(report.peak_height, fx.expected.peak_height, max_relative = 1e-9);
    }
}
