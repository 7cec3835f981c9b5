//! Structural steel grades (EN 10025-2)
//!
//! Nominal yield and ultimate strengths per EN 1993-1-1 Table 3.1. Yield
//! strength drops with nominal thickness; the governing thickness for an
//! open section is the flange, for a hollow section the wall.
//!
//! ## Example
//!
//! ```rust
//! use ec3_core::materials::steel::{yield_strength, epsilon, SteelGrade};
//!
//! let fy = yield_strength("s355", 12.7).unwrap();
//! assert_eq!(fy, 355.0);
//! assert!((epsilon(fy) - 0.8136).abs() < 1e-4);
//!
//! let grade = SteelGrade::from_str_flexible("S275").unwrap();
//! assert_eq!(grade.yield_strength(40.0), 265.0);
//! assert_eq!(grade.tensile_strength(), 430.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Thickness band upper limits (mm), inclusive
const THICKNESS_BANDS_MM: [f64; 5] = [16.0, 40.0, 63.0, 80.0, 999.0];

/// Steel grades covered by the yield strength table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    S235,
    S275,
    S355,
    S450,
}

impl SteelGrade {
    /// All grades for iteration
    pub const ALL: [SteelGrade; 4] = [
        SteelGrade::S235,
        SteelGrade::S275,
        SteelGrade::S355,
        SteelGrade::S450,
    ];

    /// Parse a grade designation, ignoring case and surrounding whitespace
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "S235" => Ok(SteelGrade::S235),
            "S275" => Ok(SteelGrade::S275),
            "S355" => Ok(SteelGrade::S355),
            "S450" => Ok(SteelGrade::S450),
            _ => Err(CalcError::unknown_grade(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SteelGrade::S235 => "S235",
            SteelGrade::S275 => "S275",
            SteelGrade::S355 => "S355",
            SteelGrade::S450 => "S450",
        }
    }

    /// fy (N/mm²) for each thickness band
    fn yield_bands(&self) -> [f64; 5] {
        match self {
            SteelGrade::S235 => [235.0, 225.0, 215.0, 215.0, 195.0],
            SteelGrade::S275 => [275.0, 265.0, 255.0, 245.0, 235.0],
            SteelGrade::S355 => [355.0, 345.0, 335.0, 325.0, 315.0],
            SteelGrade::S450 => [440.0, 430.0, 410.0, 390.0, 380.0],
        }
    }

    /// Nominal yield strength fy (N/mm²) for a given element thickness (mm).
    ///
    /// Uses the first band whose upper limit is ≥ the thickness; thicker
    /// material falls back to the last band.
    pub fn yield_strength(&self, thickness_mm: f64) -> f64 {
        let bands = self.yield_bands();
        THICKNESS_BANDS_MM
            .iter()
            .zip(bands.iter())
            .find(|(limit, _)| thickness_mm <= **limit)
            .map(|(_, fy)| *fy)
            .unwrap_or(bands[bands.len() - 1])
    }

    /// Nominal ultimate tensile strength fu (N/mm²)
    pub fn tensile_strength(&self) -> f64 {
        match self {
            SteelGrade::S235 => 360.0,
            SteelGrade::S275 => 430.0,
            SteelGrade::S355 => 510.0,
            SteelGrade::S450 => 550.0,
        }
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Yield strength lookup by grade string.
///
/// Fails with [`CalcError::UnknownGrade`] for anything outside the table.
pub fn yield_strength(grade: &str, thickness_mm: f64) -> CalcResult<f64> {
    Ok(SteelGrade::from_str_flexible(grade)?.yield_strength(thickness_mm))
}

/// Tensile strength lookup by grade string.
pub fn tensile_strength(grade: &str) -> CalcResult<f64> {
    Ok(SteelGrade::from_str_flexible(grade)?.tensile_strength())
}

/// Material factor ε = √(235/fy)
pub fn epsilon(fy_mpa: f64) -> f64 {
    (235.0 / fy_mpa).sqrt()
}
