//! Two-header-row CSV persistence for sweep results.
//!
//! Layout: a column-name row (`Vstep,Idif`), a units row (`V,uA`), then one
//! comma-separated data row per sample. Currents are stored in microamps so
//! the units row is truthful; callers convert with
//! [`SweepResult::to_microamps`] before writing. Floats are written with the
//! shortest round-trip representation, so read-back is bit-exact.

use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use swv_core::{CurrentSample, SweepResult};

const HEADER_NAMES: &str = "Vstep,Idif";
const HEADER_UNITS: &str = "V,uA";

/// Write a sweep (currents already in microamps) to a CSV file.
pub fn write_series(path: &Path, series: &SweepResult) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);
    writeln!(w, "{HEADER_NAMES}")?;
    writeln!(w, "{HEADER_UNITS}")?;
    for s in &series.samples {
        writeln!(w, "{},{}", s.potential, s.current)?;
    }
    w.flush()?;
    Ok(())
}

/// Read a sweep back from a CSV file written by [`write_series`].
pub fn read_series(path: &Path) -> Result<SweepResult> {
    let file = File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mut lines = BufReader::new(file).lines();

    let names = lines.next().transpose()?.unwrap_or_default();
    if names.trim() != HEADER_NAMES {
        bail!("unexpected column header {names:?}, expected {HEADER_NAMES:?}");
    }
    let units = lines
        .next()
        .transpose()?
        .ok_or_else(|| anyhow::anyhow!("missing units header row"))?;
    if units.trim() != HEADER_UNITS {
        bail!("unexpected units header {units:?}, expected {HEADER_UNITS:?}");
    }

    let mut samples = Vec::new();
    for (idx, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let row = idx + 3; // 1-based, after the two header rows
        let (v, i) = line
            .split_once(',')
            .with_context(|| format!("row {row}: expected two comma-separated columns"))?;
        let potential: f64 =
            v.trim().parse().with_context(|| format!("row {row}: bad potential {v:?}"))?;
        let current: f64 =
            i.trim().parse().with_context(|| format!("row {row}: bad current {i:?}"))?;
        if !potential.is_finite() || !current.is_finite() {
            bail!("row {row}: values must be finite");
        }
        samples.push(CurrentSample { potential, current });
    }
    Ok(SweepResult::new(samples))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn tmp_path(filename: &str) -> PathBuf {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
        let mut p = std::env::temp_dir();
        p.push(format!("swv_csv_{}_{}_{}", std::process::id(), nanos, filename));
        p
    }

    #[test]
    fn test_round_trip_is_bit_exact() {
        let series = SweepResult::new(vec![
            CurrentSample { potential: -0.6, current: -9.656874521146204 },
            CurrentSample { potential: -0.595, current: 15.700599588333107 },
            CurrentSample { potential: -0.59, current: 20.304042694340773 },
        ]);
        let path = tmp_path("roundtrip.csv");
        write_series(&path, &series).unwrap();
        let back = read_series(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(back, series);
    }

    #[test]
    fn test_written_file_has_both_header_rows() {
        let series = SweepResult::new(vec![CurrentSample { potential: 0.1, current: 2.0 }]);
        let path = tmp_path("headers.csv");
        write_series(&path, &series).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Vstep,Idif"));
        assert_eq!(lines.next(), Some("V,uA"));
        assert_eq!(lines.next(), Some("0.1,2"));
    }

    #[test]
    fn test_rejects_wrong_header() {
        let path = tmp_path("badheader.csv");
        std::fs::write(&path, "Volt,Amp\nV,A\n0.1,2\n").unwrap();
        let err = read_series(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(err.to_string().contains("unexpected column header"));
    }

    #[test]
    fn test_rejects_wrong_units_row() {
        let path = tmp_path("badunits.csv");
        std::fs::write(&path, "Vstep,Idif\nV,A\n0.1,2\n").unwrap();
        let err = read_series(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(err.to_string().contains("unexpected units header"), "err: {err}");
    }

    #[test]
    fn test_rejects_malformed_row() {
        let path = tmp_path("badrow.csv");
        std::fs::write(&path, "Vstep,Idif\nV,uA\n0.1,not-a-number\n").unwrap();
        assert!(read_series(&path).is_err());
        std::fs::remove_file(&path).ok();
    }
}
