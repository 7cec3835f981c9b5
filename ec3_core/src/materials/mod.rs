//! # Materials Database
//!
//! Steel grade strengths and buckling-curve imperfection factors for
//! EN 1993-1-1 member checks.
//!
//! ## Example
//!
//! ```rust
//! use ec3_core::materials::{SteelGrade, BucklingCurve};
//!
//! let grade = SteelGrade::from_str_flexible("S355").unwrap();
//! assert_eq!(grade.yield_strength(12.7), 355.0);
//! assert_eq!(BucklingCurve::B.alpha(), 0.34);
//! ```

pub mod buckling_curves;
pub mod steel;

pub use buckling_curves::{BucklingCurve, LtbCurve};
pub use steel::{epsilon, tensile_strength, yield_strength, SteelGrade};
