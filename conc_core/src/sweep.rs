//! # Parameter Sweeps
//!
//! Generates `(x, y)` series by rebuilding a section across a range of one
//! parameter and sampling a capacity function at each step. This is the
//! data-export counterpart of a charting front-end: the engine returns named
//! series; rendering them is the caller's business.
//!
//! ## Example
//!
//! ```rust
//! use conc_core::section::SectionInput;
//! use conc_core::sweep::{sweep_depth, SweepMetric};
//!
//! let base = SectionInput { bar_diameter_mm: 10.0, ..SectionInput::default() };
//! let series = sweep_depth(&base, 100.0, 400.0, 50.0, SweepMetric::Deemed, "fc = 32").unwrap();
//! assert_eq!(series.points.len(), 6);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::ConcResult;
use crate::section::{Section, SectionInput};

/// Which capacity function a sweep samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepMetric {
    /// Reinforced bending capacity (kN·m)
    Bending,
    /// Reinforced shear capacity (kN)
    Shear,
    /// Plain-concrete bending capacity (kN·m)
    PlainBending,
    /// Plain-concrete shear capacity (kN)
    PlainShear,
    /// Deemed-to-comply minimum steel at f = 0.2 (mm²/m)
    Deemed,
}

impl SweepMetric {
    fn sample(&self, section: &Section) -> f64 {
        match self {
            SweepMetric::Bending => section.bending(),
            SweepMetric::Shear => section.shear(),
            SweepMetric::PlainBending => section.plain_concrete_bending(),
            SweepMetric::PlainShear => section.plain_concrete_shear(),
            SweepMetric::Deemed => section.deemed_default(),
        }
    }
}

/// One sampled point of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Swept parameter value (mm for geometry sweeps)
    pub x: f64,
    /// Sampled capacity value, in the metric's unit
    pub y: f64,
}

/// A named `(x, y)` series, ready for plotting or export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    /// Legend name for this series
    pub name: String,
    /// Sampled points in sweep order
    pub points: Vec<SweepPoint>,
}

/// Sweep the overall depth from `start_mm` to `end_mm` exclusive in steps of
/// `step_mm`, sampling `metric` at each depth. All other parameters come
/// from `base`; any effective-depth override in `base` is cleared so each
/// depth re-derives its own `d`.
///
/// Depths where the derived effective depth falls outside `(0, D]` (cover
/// plus half a bar swallowing the whole section) are skipped rather than
/// failing the sweep. Any other invalid parameter still aborts.
pub fn sweep_depth(
    base: &SectionInput,
    start_mm: f64,
    end_mm: f64,
    step_mm: f64,
    metric: SweepMetric,
    name: impl Into<String>,
) -> ConcResult<Series> {
    let mut points = Vec::new();
    let mut depth_mm = start_mm;
    while depth_mm < end_mm {
        match Section::new(&SectionInput {
            depth_mm,
            effective_depth_mm: None,
            ..base.clone()
        }) {
            Ok(section) => points.push(SweepPoint {
                x: depth_mm,
                y: metric.sample(&section),
            }),
            Err(e) if e.field() == "effective_depth_mm" => {}
            Err(e) => return Err(e),
        }
        depth_mm += step_mm;
    }
    Ok(Series {
        name: name.into(),
        points,
    })
}

/// Deemed-to-comply minimum steel against depth, one series per cover.
///
/// Covers run 20..80 mm in 5 mm steps and depths 60..750 mm in 10 mm steps,
/// with 10 mm class N bars. Each series is named `"d = D - {cover + 5}"`
/// (cover plus half a bar diameter).
pub fn deemed_sweep_family(fc_mpa: f64) -> ConcResult<Vec<Series>> {
    let mut family = Vec::new();
    let mut cover_mm = 20.0;
    while cover_mm < 80.0 {
        let base = SectionInput {
            fc_mpa,
            cover_mm,
            bar_diameter_mm: 10.0,
            ductility: crate::section::DuctilityClass::Normal,
            ..SectionInput::default()
        };
        let name = format!("d = D - {}", cover_mm + 5.0);
        family.push(sweep_depth(&base, 60.0, 750.0, 10.0, SweepMetric::Deemed, name)?);
        cover_mm += 5.0;
    }
    Ok(family)
}
