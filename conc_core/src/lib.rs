//! # conc_core - Concrete Section Capacity Engine
//!
//! `conc_core` computes design capacities for rectangular reinforced and
//! plain concrete cross-sections following AS3600-style provisions: bending,
//! shear, and the deemed-to-comply minimum steel check. Returned values
//! already include the code strength-reduction factor (phi).
//!
//! ## Design Philosophy
//!
//! - **Stateless**: a [`Section`](section::Section) is built once with all
//!   derived quantities computed at construction, then read by pure capacity
//!   functions. Nothing mutates, nothing caches.
//! - **JSON-First**: inputs, reports, and sweep series all implement
//!   Serialize/Deserialize.
//! - **Rich Errors**: construction failures carry the offending field, not
//!   just a message.
//! - **Faithful formulas**: the normative expressions are reproduced exactly,
//!   including the floor on the per-bar steel area and the absence of
//!   clamping on degenerate results.
//!
//! ## Quick Start
//!
//! ```rust
//! use conc_core::section::{Section, SectionInput};
//!
//! // 200 mm slab strip in N32 concrete with 7.6 mm mesh at 100 mm centres
//! let section = Section::new(&SectionInput::default()).unwrap();
//!
//! println!("phi.Muo = {:.1} kN.m", section.bending());
//! println!("phi.Vuc = {:.1} kN", section.shear());
//! println!("min Ast = {:.0} mm2/m", section.deemed_default());
//! ```
//!
//! ## Modules
//!
//! - [`section`] - Section model, ductility class, and derived properties
//! - [`capacity`] - Capacity functions and the bundled report
//! - [`sweep`] - Parameter sweeps producing `(x, y)` series for export
//! - [`errors`] - Structured error types

pub mod capacity;
pub mod errors;
pub mod section;
pub mod sweep;

// Re-export commonly used types at crate root for convenience
pub use capacity::{calculate, CapacityReport};
pub use errors::{ConcError, ConcResult};
pub use section::{DuctilityClass, Section, SectionInput};
