//! # Section Capacity Calculations
//!
//! Design capacities for a [`Section`]: reinforced bending and shear,
//! plain-concrete bending and shear, and the deemed-to-comply minimum steel
//! check. Every function is a pure read of the section; returned values
//! already include the code strength-reduction factor (phi).
//!
//! ## Known limitations
//!
//! The formulas are reproduced without defensive clamping, matching the code
//! provisions they come from:
//!
//! - `bending()` does not validate the neutral-axis ratio `ku`. Degenerate
//!   inputs (tiny effective depth, very heavy reinforcement) can push `ku`
//!   past 1 and the returned moment negative. Sanity-checking the result is
//!   the caller's job.
//! - The plain-concrete functions subtract a fixed 50 mm from the overall
//!   depth. For `D <= 50` the `(D - 50)` term is zero or negative and the
//!   returned capacity is zero or non-physical, again unclamped.
//!
//! ## Example
//!
//! ```rust
//! use conc_core::capacity::calculate;
//! use conc_core::section::SectionInput;
//!
//! let report = calculate(&SectionInput::default()).unwrap();
//! println!("phi.Muo = {:.1} kN.m", report.bending_knm);
//! println!("phi.Vuc = {:.1} kN", report.shear_kn);
//! println!("min Ast = {:.0} mm2/m", report.deemed_min_ast_mm2);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::ConcResult;
use crate::section::{Section, SectionInput};

/// Strength-reduction factor for reinforced shear
const PHI_SHEAR: f64 = 0.75;

/// Strength-reduction factor for plain (unreinforced) concrete
const PHI_PLAIN: f64 = 0.6;

/// Depth reduction applied by the plain-concrete clause (mm)
const PLAIN_DEPTH_REDUCTION_MM: f64 = 50.0;

/// Strut angle for the simplified shear method (degrees).
///
/// Retained for traceability to the code clause; the simplified kv formula
/// below does not use it.
#[allow(dead_code)]
const THETA_V_DEG: f64 = 36.0;

/// Deemed-to-comply factor for a one-way slab or beam (the default)
pub const DEEMED_ONE_WAY: f64 = 0.2;
/// Deemed-to-comply factor for a two-way slab supported on beams or walls
pub const DEEMED_TWO_WAY: f64 = 0.19;
/// Deemed-to-comply factor for a flat slab supported on columns
pub const DEEMED_FLAT_SLAB: f64 = 0.24;

impl Section {
    /// Design bending capacity phi.Muo (kN·m) of the reinforced section.
    ///
    /// Rectangular stress block: the neutral-axis depth follows from force
    /// equilibrium `Ast*fsy = alpha2*f'c*b*(gamma*dn)`, the lever arm from
    /// the block centroid, and phi from the steel ductility class via
    /// [`DuctilityClass::phi_bending`](crate::section::DuctilityClass::phi_bending).
    pub fn bending(&self) -> f64 {
        let dn = (self.ast_mm2 * self.fsy_mpa)
            / (self.alpha2 * self.fc_mpa * self.width_mm * self.gamma);
        let ku = dn / self.effective_depth_mm;
        let muo_knm = self.ast_mm2
            * self.fsy_mpa
            * (self.effective_depth_mm - 0.5 * self.gamma * ku * self.effective_depth_mm)
            / 1e6;
        muo_knm * self.ductility.phi_bending(ku)
    }

    /// Design shear capacity phi.Vuc (kN) of the reinforced section,
    /// simplified method without minimum shear reinforcement.
    pub fn shear(&self) -> f64 {
        let dv = (0.72 * self.depth_mm).max(0.9 * self.effective_depth_mm);
        let bv = self.width_mm;
        let kv = (200.0 / (1000.0 + 1.3 * dv)).min(0.1);
        let vuc_kn = kv * bv * dv * self.fc_mpa.sqrt().min(8.0) / 1000.0;
        vuc_kn * PHI_SHEAR
    }

    /// Design bending capacity phi.Muo (kN·m) treating the section as plain
    /// concrete: no reinforcement, flexural tension carried by the concrete
    /// over a depth reduced by 50 mm.
    pub fn plain_concrete_bending(&self) -> f64 {
        let reduced_depth_mm = self.depth_mm - PLAIN_DEPTH_REDUCTION_MM;
        let resultant_n = self.fctf_mpa * self.width_mm * reduced_depth_mm / 2.0;
        let muo_knm = resultant_n * reduced_depth_mm * 2.0 / 3.0 / 1e6;
        muo_knm * PHI_PLAIN
    }

    /// Design shear capacity phi.Vu (kN) treating the section as plain
    /// concrete, over the same reduced depth.
    pub fn plain_concrete_shear(&self) -> f64 {
        let reduced_depth_mm = self.depth_mm - PLAIN_DEPTH_REDUCTION_MM;
        let vu_kn = 0.15 * self.width_mm * reduced_depth_mm * self.fc_mpa.cbrt() / 1000.0;
        vu_kn * PHI_PLAIN
    }

    /// Minimum steel (mm²/m) for the deemed-to-comply crack-control and
    /// minimum-bending provisions, with member factor `f`:
    ///
    /// - [`DEEMED_TWO_WAY`] (0.19) for a two-way slab,
    /// - [`DEEMED_ONE_WAY`] (0.2) for a one-way slab or beam,
    /// - [`DEEMED_FLAT_SLAB`] (0.24) for a flat slab on columns.
    pub fn deemed(&self, f: f64) -> f64 {
        self.width_mm
            * self.effective_depth_mm
            * f
            * (self.depth_mm / self.effective_depth_mm).powi(2)
            * self.fctf_mpa
            / self.fsy_mpa
    }

    /// [`Section::deemed`] with the one-way slab/beam factor (0.2).
    pub fn deemed_default(&self) -> f64 {
        self.deemed(DEEMED_ONE_WAY)
    }
}

/// Bundled design capacities for one section.
///
/// All values include phi. Serializes cleanly to JSON for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacityReport {
    /// Effective depth d used throughout (mm)
    pub effective_depth_mm: f64,
    /// Tension steel area Ast over the section width (mm²)
    pub ast_mm2: f64,
    /// Reinforced bending capacity phi.Muo (kN·m)
    pub bending_knm: f64,
    /// Reinforced shear capacity phi.Vuc (kN)
    pub shear_kn: f64,
    /// Plain-concrete bending capacity (kN·m)
    pub plain_bending_knm: f64,
    /// Plain-concrete shear capacity (kN)
    pub plain_shear_kn: f64,
    /// Deemed-to-comply minimum steel at f = 0.2 (mm²/m)
    pub deemed_min_ast_mm2: f64,
}

/// Build a [`Section`] from `input` and evaluate every capacity function.
pub fn calculate(input: &SectionInput) -> ConcResult<CapacityReport> {
    let section = Section::new(input)?;
    Ok(CapacityReport {
        effective_depth_mm: section.effective_depth_mm,
        ast_mm2: section.ast_mm2,
        bending_knm: section.bending(),
        shear_kn: section.shear(),
        plain_bending_knm: section.plain_concrete_bending(),
        plain_shear_kn: section.plain_concrete_shear(),
        deemed_min_ast_mm2: section.deemed_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::DuctilityClass;

    fn default_section() -> Section {
        Section::new(&SectionInput::default()).unwrap()
    }

    #[test]
    fn test_bending_default_slab() {
        // D=200, b=1000, cover=20, fc=32, 7.6 @ 100, class L, fsy=500:
        // Ast=450, a2=0.802, gamma=0.89, d=176.2
        // dn = 450*500 / (0.802*32*1000*0.89) = 9.8508...
        // ku = 0.055906..., Muo = 38.6587 kN.m, phi = 0.65
        let m = default_section().bending();
        assert!((m - 25.12815254831671).abs() < 1e-9);
    }

    #[test]
    fn test_shear_default_slab() {
        // dv = max(144, 158.58) = 158.58, kv caps at 0.1
        let v = default_section().shear();
        assert!((v - 67.27979601633763).abs() < 1e-9);
    }

    #[test]
    fn test_bending_deep_beam_n50() {
        let section = Section::new(&SectionInput {
            depth_mm: 500.0,
            fc_mpa: 50.0,
            ..SectionInput::default()
        })
        .unwrap();
        // a2=0.775, gamma=0.845, d=476.2, ku=0.0144299..., phi=0.65
        assert!((section.bending() - 69.21965322580645).abs() < 1e-9);
        // dv = max(360, 428.58) = 428.58; sqrt(50) = 7.07 stays under the
        // 8 MPa cap
        assert!((section.shear() - 227.28886821069796).abs() < 1e-9);
    }

    #[test]
    fn test_bending_normal_ductility_uses_clamped_phi() {
        let section = Section::new(&SectionInput {
            ductility: DuctilityClass::Normal,
            ..SectionInput::default()
        })
        .unwrap();
        // ku is tiny, so phi clamps to the 0.85 ceiling
        assert!((section.bending() - 32.85989179395262).abs() < 1e-9);
    }

    #[test]
    fn test_bending_degenerate_ku_propagates() {
        // Heavy bars on a shallow effective depth: ku >> 1, moment negative.
        // The engine does not clamp this; the caller must sanity-check.
        let section = Section::new(&SectionInput {
            ductility: DuctilityClass::Normal,
            bar_diameter_mm: 36.0,
            bar_spacing_mm: 50.0,
            effective_depth_mm: Some(50.0),
            ..SectionInput::default()
        })
        .unwrap();
        let m = section.bending();
        assert!(m < 0.0);
        assert!((m - -979.2627376870325).abs() < 1e-6);
    }

    #[test]
    fn test_plain_concrete_default_slab() {
        let section = default_section();
        assert!((section.plain_concrete_bending() - 15.273506473629425).abs() < 1e-9);
        assert!((section.plain_concrete_shear() - 42.85982840314138).abs() < 1e-9);
    }

    #[test]
    fn test_plain_concrete_thin_sections() {
        // D = 50: the reduced depth is exactly zero, both capacities zero
        let at = Section::new(&SectionInput {
            depth_mm: 50.0,
            ..SectionInput::default()
        })
        .unwrap();
        assert_eq!(at.plain_concrete_bending(), 0.0);
        assert_eq!(at.plain_concrete_shear(), 0.0);

        // D < 50: (D-50) is negative and unclamped. Shear goes negative;
        // bending stays positive because the term enters squared.
        let below = Section::new(&SectionInput {
            depth_mm: 40.0,
            effective_depth_mm: Some(30.0),
            ..SectionInput::default()
        })
        .unwrap();
        assert!(below.plain_concrete_shear() < 0.0);
        assert!(below.plain_concrete_bending() > 0.0);
    }

    #[test]
    fn test_deemed_default_slab() {
        let section = default_section();
        assert!((section.deemed_default() - 308.20545286678123).abs() < 1e-9);
        assert!((section.deemed(DEEMED_TWO_WAY) - 292.7951802234422).abs() < 1e-9);
        assert!((section.deemed(DEEMED_FLAT_SLAB) - 369.84654344013745).abs() < 1e-9);
    }

    #[test]
    fn test_deemed_non_negative_across_geometries() {
        for depth_mm in [60.0, 120.0, 250.0, 400.0, 740.0] {
            for cover_mm in [20.0, 40.0, 60.0] {
                let section = Section::new(&SectionInput {
                    depth_mm,
                    cover_mm,
                    bar_diameter_mm: 10.0,
                    ..SectionInput::default()
                })
                .unwrap();
                assert!(section.deemed_default() >= 0.0);
            }
        }
    }

    #[test]
    fn test_calculate_report() {
        let report = calculate(&SectionInput::default()).unwrap();
        assert!((report.bending_knm - 25.12815254831671).abs() < 1e-9);
        assert!((report.shear_kn - 67.27979601633763).abs() < 1e-9);
        assert!((report.deemed_min_ast_mm2 - 308.20545286678123).abs() < 1e-9);

        // Serializes for the CLI / external reporting
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("bending_knm"));
    }

    #[test]
    fn test_calculate_rejects_bad_input() {
        let err = calculate(&SectionInput {
            fc_mpa: -32.0,
            ..SectionInput::default()
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
    }
}
