//! # Concrete Section Model
//!
//! Defines a rectangular reinforced (or plain) concrete cross-section and the
//! quantities derived from it at construction time. All dimensions are in
//! millimetres and all strengths in MPa, matching AS3600-style design
//! provisions.
//!
//! ## Design Philosophy
//!
//! A [`Section`] is an immutable value object produced by a deterministic
//! factory: every derived field (effective depth, flexural tensile strength,
//! steel area, stress-block coefficients) is computed exactly once when the
//! section is built, and the capacity functions in
//! [`capacity`](crate::capacity) are pure reads. There are no lazily computed
//! properties and no hidden caches.
//!
//! ## Example
//!
//! ```rust
//! use conc_core::section::{Section, SectionInput};
//!
//! // 200 mm slab strip, N32 concrete, SL82-style mesh (7.6 mm @ 100 mm)
//! let section = Section::new(&SectionInput::default()).unwrap();
//!
//! assert!((section.effective_depth_mm - 176.2).abs() < 1e-9);
//! assert!((section.ast_mm2 - 450.0).abs() < 1e-9);
//! ```

use std::f64::consts::PI;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ConcError, ConcResult};

/// Ductility class of the steel reinforcement.
///
/// Affects the strength-reduction factor (phi) used for bending. The class
/// codes follow the Australian convention: "L" for low-ductility mesh,
/// "N" for normal-ductility deformed bar. Anything else is carried as
/// [`DuctilityClass::Unspecified`] and uses the low-ductility factor, the
/// conservative fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DuctilityClass {
    /// Low ductility (class L mesh), phi = 0.65 for bending
    #[default]
    Low,
    /// Normal ductility (class N bar), phi varies with ku in [0.65, 0.85]
    Normal,
    /// Unrecognized class code, treated as Low for phi
    Unspecified,
}

impl DuctilityClass {
    /// Parse from a class code, case-insensitively.
    ///
    /// "L"/"l" and "N"/"n" map to their classes; any other code (including
    /// an empty string) is `Unspecified`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "L" | "l" => DuctilityClass::Low,
            "N" | "n" => DuctilityClass::Normal,
            _ => DuctilityClass::Unspecified,
        }
    }

    /// Single-letter class code for display
    pub fn code(&self) -> &'static str {
        match self {
            DuctilityClass::Low => "L",
            DuctilityClass::Normal => "N",
            DuctilityClass::Unspecified => "-",
        }
    }

    /// Bending strength-reduction factor for this class at neutral-axis
    /// ratio `ku`.
    ///
    /// Low and Unspecified use the constant 0.65. Normal uses
    /// `1.24 - 13*ku/12` clamped to [0.65, 0.85]; the clamp holds for any
    /// `ku`, physical or not.
    pub fn phi_bending(&self, ku: f64) -> f64 {
        match self {
            DuctilityClass::Low | DuctilityClass::Unspecified => 0.65,
            DuctilityClass::Normal => (1.24 - 13.0 * ku / 12.0).clamp(0.65, 0.85),
        }
    }
}

impl FromStr for DuctilityClass {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DuctilityClass::from_code(s))
    }
}

/// Input parameters for a rectangular concrete section.
///
/// All lengths are in millimetres, all strengths in MPa. Defaults describe a
/// 200 mm one-way slab strip per metre width with SL82-style mesh in N32
/// concrete.
///
/// ## JSON Example
///
/// ```json
/// {
///   "depth_mm": 200.0,
///   "width_mm": 1000.0,
///   "cover_mm": 20.0,
///   "fc_mpa": 32.0,
///   "bar_diameter_mm": 7.6,
///   "bar_spacing_mm": 100.0,
///   "ductility": "Low",
///   "fsy_mpa": 500.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionInput {
    /// Overall depth D (mm)
    pub depth_mm: f64,

    /// Width b (mm); 1000 gives per-metre results for slabs
    pub width_mm: f64,

    /// Concrete cover to the reinforcement (mm)
    pub cover_mm: f64,

    /// Concrete characteristic compressive strength f'c (MPa)
    pub fc_mpa: f64,

    /// Reinforcement bar diameter (mm)
    pub bar_diameter_mm: f64,

    /// Reinforcement bar spacing (mm)
    pub bar_spacing_mm: f64,

    /// Steel ductility class
    pub ductility: DuctilityClass,

    /// Steel yield strength fsy (MPa)
    pub fsy_mpa: f64,

    /// Effective depth d override (mm).
    ///
    /// When supplied, this takes precedence over the geometric derivation
    /// `D - cover - diameter/2` and is passed through unchecked against
    /// cover/diameter consistency. It must still lie in `(0, D]`.
    pub effective_depth_mm: Option<f64>,
}

impl Default for SectionInput {
    fn default() -> Self {
        SectionInput {
            depth_mm: 200.0,
            width_mm: 1000.0,
            cover_mm: 20.0,
            fc_mpa: 32.0,
            bar_diameter_mm: 7.6,
            bar_spacing_mm: 100.0,
            ductility: DuctilityClass::Low,
            fsy_mpa: 500.0,
            effective_depth_mm: None,
        }
    }
}

impl SectionInput {
    /// Validate input parameters.
    ///
    /// Checks only the raw inputs; the derived effective depth is checked in
    /// [`Section::new`] because it depends on the override.
    pub fn validate(&self) -> ConcResult<()> {
        if self.depth_mm <= 0.0 {
            return Err(ConcError::invalid_parameter(
                "depth_mm",
                self.depth_mm.to_string(),
                "Depth must be positive",
            ));
        }
        if self.width_mm <= 0.0 {
            return Err(ConcError::invalid_parameter(
                "width_mm",
                self.width_mm.to_string(),
                "Width must be positive",
            ));
        }
        if self.cover_mm < 0.0 {
            return Err(ConcError::invalid_parameter(
                "cover_mm",
                self.cover_mm.to_string(),
                "Cover cannot be negative",
            ));
        }
        if self.fc_mpa <= 0.0 {
            return Err(ConcError::invalid_parameter(
                "fc_mpa",
                self.fc_mpa.to_string(),
                "Concrete strength must be positive",
            ));
        }
        if self.fsy_mpa <= 0.0 {
            return Err(ConcError::invalid_parameter(
                "fsy_mpa",
                self.fsy_mpa.to_string(),
                "Steel yield strength must be positive",
            ));
        }
        if self.bar_diameter_mm <= 0.0 {
            return Err(ConcError::invalid_parameter(
                "bar_diameter_mm",
                self.bar_diameter_mm.to_string(),
                "Bar diameter must be positive",
            ));
        }
        if self.bar_spacing_mm <= 0.0 {
            return Err(ConcError::invalid_parameter(
                "bar_spacing_mm",
                self.bar_spacing_mm.to_string(),
                "Bar spacing must be positive",
            ));
        }
        Ok(())
    }
}

/// A fully-derived rectangular concrete section.
///
/// Built once from a [`SectionInput`]; never mutated afterwards. The capacity
/// methods in [`capacity`](crate::capacity) consume it by shared reference,
/// so sections are trivially shareable across threads.
///
/// Serializes for reporting but deliberately does not deserialize: the only
/// way to obtain a `Section` is through [`Section::new`], which enforces the
/// construction invariants.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    /// Overall depth D (mm)
    pub depth_mm: f64,
    /// Width b (mm)
    pub width_mm: f64,
    /// Cover (mm)
    pub cover_mm: f64,
    /// Concrete strength f'c (MPa)
    pub fc_mpa: f64,
    /// Bar diameter (mm)
    pub bar_diameter_mm: f64,
    /// Bar spacing (mm)
    pub bar_spacing_mm: f64,
    /// Steel ductility class
    pub ductility: DuctilityClass,
    /// Steel yield strength fsy (MPa)
    pub fsy_mpa: f64,

    /// Effective depth d (mm): `D - cover - diameter/2`, or the override
    pub effective_depth_mm: f64,
    /// Concrete flexural tensile strength fct.f = 0.6*sqrt(f'c) (MPa)
    pub fctf_mpa: f64,
    /// Total tension steel area Ast over the width b (mm²)
    pub ast_mm2: f64,
    /// Stress-block coefficient alpha2, floored at 0.67
    pub alpha2: f64,
    /// Stress-block coefficient gamma, floored at 0.67
    pub gamma: f64,
}

impl Section {
    /// Build a section, computing all derived quantities.
    ///
    /// Fails with [`ConcError::InvalidParameter`] if any raw input is
    /// non-positive (cover may be zero) or if the effective depth, derived
    /// or overridden, falls outside `(0, D]`.
    pub fn new(input: &SectionInput) -> ConcResult<Section> {
        input.validate()?;

        let effective_depth_mm = match input.effective_depth_mm {
            Some(d) => d,
            None => input.depth_mm - input.cover_mm - input.bar_diameter_mm / 2.0,
        };
        if effective_depth_mm <= 0.0 || effective_depth_mm > input.depth_mm {
            return Err(ConcError::invalid_parameter(
                "effective_depth_mm",
                effective_depth_mm.to_string(),
                "Effective depth must lie in (0, D]",
            ));
        }

        let fctf_mpa = 0.6 * input.fc_mpa.sqrt();

        // Per-bar area is floored to a whole mm² before scaling by the bar
        // count. The truncation is normative; do not fold it into a single
        // floating-point expression.
        let bar_area_mm2 = (input.bar_diameter_mm.powi(2) * PI / 4.0).floor();
        let ast_mm2 = bar_area_mm2 * (input.width_mm / input.bar_spacing_mm);

        let alpha2 = (0.85 - 0.0015 * input.fc_mpa).max(0.67);
        let gamma = (0.97 - 0.0025 * input.fc_mpa).max(0.67);

        Ok(Section {
            depth_mm: input.depth_mm,
            width_mm: input.width_mm,
            cover_mm: input.cover_mm,
            fc_mpa: input.fc_mpa,
            bar_diameter_mm: input.bar_diameter_mm,
            bar_spacing_mm: input.bar_spacing_mm,
            ductility: input.ductility,
            fsy_mpa: input.fsy_mpa,
            effective_depth_mm,
            fctf_mpa,
            ast_mm2,
            alpha2,
            gamma,
        })
    }
}
