//! # Unit Types
//!
//! Type-safe wrappers for engineering units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## Conventions
//!
//! Section tables quote areas in cm², second moments in cm⁴, warping constants
//! in cm⁶ and moduli in cm³. Every resistance formula in this crate works in
//! newtons and millimetres, so the conversions below are the only place the
//! factors of ten live.
//!
//! - Length: metres (m), millimetres (mm)
//! - Force: newtons (N), kilonewtons (kN)
//! - Moment: newton-metres (N·m), kilonewton-metres (kN·m), newton-millimetres (N·mm)
//!
//! ## Example
//!
//! ```rust
//! use ec3_core::units::{CubicCentimetres, CubicMillimetres, Metres, Millimetres};
//!
//! let span = Metres(6.0);
//! let span_mm: Millimetres = span.into();
//! assert_eq!(span_mm.0, 6000.0);
//!
//! let wpl: CubicMillimetres = CubicCentimetres(1470.0).into();
//! assert_eq!(wpl.0, 1_470_000.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

macro_rules! unit_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub f64);

        impl Add for $name {
            type Output = $name;
            fn add(self, rhs: $name) -> $name {
                $name(self.0 + rhs.0)
            }
        }

        impl Sub for $name {
            type Output = $name;
            fn sub(self, rhs: $name) -> $name {
                $name(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $name {
            type Output = $name;
            fn mul(self, rhs: f64) -> $name {
                $name(self.0 * rhs)
            }
        }
    };
}

macro_rules! scale_conversion {
    ($from:ident => $to:ident, $factor:expr) => {
        impl From<$from> for $to {
            fn from(v: $from) -> Self {
                $to(v.0 * $factor)
            }
        }

        impl From<$to> for $from {
            fn from(v: $to) -> Self {
                $from(v.0 / $factor)
            }
        }
    };
}

// ============================================================================
// Length Units
// ============================================================================

unit_newtype!(
    /// Length in metres
    Metres
);
unit_newtype!(
    /// Length in millimetres
    Millimetres
);
scale_conversion!(Metres => Millimetres, 1.0e3);

// ============================================================================
// Force Units
// ============================================================================

unit_newtype!(
    /// Force in newtons
    Newtons
);
unit_newtype!(
    /// Force in kilonewtons
    Kilonewtons
);
scale_conversion!(Kilonewtons => Newtons, 1.0e3);

// ============================================================================
// Moment Units
// ============================================================================

unit_newtype!(
    /// Moment in newton-metres
    NewtonMetres
);
unit_newtype!(
    /// Moment in kilonewton-metres
    KilonewtonMetres
);
unit_newtype!(
    /// Moment in newton-millimetres
    NewtonMillimetres
);
scale_conversion!(KilonewtonMetres => NewtonMetres, 1.0e3);
scale_conversion!(NewtonMetres => NewtonMillimetres, 1.0e3);
scale_conversion!(KilonewtonMetres => NewtonMillimetres, 1.0e6);

// ============================================================================
// Line Load Units
// ============================================================================

unit_newtype!(
    /// Distributed load in newtons per metre
    NewtonsPerMetre
);
unit_newtype!(
    /// Distributed load in newtons per millimetre
    NewtonsPerMillimetre
);
scale_conversion!(NewtonsPerMillimetre => NewtonsPerMetre, 1.0e3);

// ============================================================================
// Section Property Units
// ============================================================================

unit_newtype!(
    /// Area in cm²
    SquareCentimetres
);
unit_newtype!(
    /// Area in mm²
    SquareMillimetres
);
unit_newtype!(
    /// Section modulus in cm³
    CubicCentimetres
);
unit_newtype!(
    /// Section modulus in mm³
    CubicMillimetres
);
unit_newtype!(
    /// Second moment of area / torsion constant in cm⁴
    QuarticCentimetres
);
unit_newtype!(
    /// Second moment of area / torsion constant in mm⁴
    QuarticMillimetres
);
unit_newtype!(
    /// Warping constant in cm⁶
    SexticCentimetres
);
unit_newtype!(
    /// Warping constant in mm⁶
    SexticMillimetres
);
scale_conversion!(SquareCentimetres => SquareMillimetres, 1.0e2);
scale_conversion!(CubicCentimetres => CubicMillimetres, 1.0e3);
scale_conversion!(QuarticCentimetres => QuarticMillimetres, 1.0e4);
scale_conversion!(SexticCentimetres => SexticMillimetres, 1.0e6);

// ============================================================================
// Convenience helpers for result records
// ============================================================================

/// Convert a force in N to kN
pub fn n_to_kn(n: f64) -> f64 {
    Kilonewtons::from(Newtons(n)).0
}

/// Convert a moment in N·mm to kN·m
pub fn nmm_to_knm(nmm: f64) -> f64 {
    KilonewtonMetres::from(NewtonMillimetres(nmm)).0
}

/// Convert a moment in kN·m to N·mm
pub fn knm_to_nmm(knm: f64) -> f64 {
    NewtonMillimetres::from(KilonewtonMetres(knm)).0
}

/// Convert a force in kN to N
pub fn kn_to_n(kn: f64) -> f64 {
    Newtons::from(Kilonewtons(kn)).0
}

/// Convert a length in m to mm
pub fn m_to_mm(m: f64) -> f64 {
    Millimetres::from(Metres(m)).0
}

/// Convert a moment in N·m to N·mm
pub fn nm_to_nmm(nm: f64) -> f64 {
    NewtonMillimetres::from(NewtonMetres(nm)).0
}

/// Convert a moment in kN·m to N·m
pub fn knm_to_nm(knm: f64) -> f64 {
    NewtonMetres::from(KilonewtonMetres(knm)).0
}

/// Convert a line load in N/m to N/mm
pub fn n_per_m_to_n_per_mm(w: f64) -> f64 {
    NewtonsPerMillimetre::from(NewtonsPerMetre(w)).0
}

/// Convert a section modulus in mm³ to cm³
pub fn mm3_to_cm3(mm3: f64) -> f64 {
    CubicCentimetres::from(CubicMillimetres(mm3)).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversion() {
        let mm: Millimetres = Metres(2.5).into();
        assert!((mm.0 - 2500.0).abs() < 1e-9);
        let m: Metres = Millimetres(450.0).into();
        assert!((m.0 - 0.45).abs() < 1e-12);
    }

    #[test]
    fn test_moment_conversion() {
        let nmm: NewtonMillimetres = KilonewtonMetres(150.0).into();
        assert!((nmm.0 - 150.0e6).abs() < 1e-3);
        let nm: NewtonMetres = KilonewtonMetres(1.5).into();
        assert!((nm.0 - 1500.0).abs() < 1e-9);
        assert!((nmm_to_knm(522.0e6) - 522.0).abs() < 1e-9);
        assert!((nm_to_nmm(135_000.0) - 135.0e6).abs() < 1e-6);
        assert!((knm_to_nm(60.0) - 60_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_helper_conversions() {
        assert!((m_to_mm(6.0) - 6000.0).abs() < 1e-9);
        assert!((n_per_m_to_n_per_mm(-30_000.0) + 30.0).abs() < 1e-12);
        assert!((mm3_to_cm3(1.47e6) - 1470.0).abs() < 1e-9);
    }

    #[test]
    fn test_section_property_conversion() {
        assert!((SquareMillimetres::from(SquareCentimetres(85.5)).0 - 8550.0).abs() < 1e-9);
        assert!((QuarticMillimetres::from(QuarticCentimetres(1450.0)).0 - 1.45e7).abs() < 1e-3);
        assert!((SexticMillimetres::from(SexticCentimetres(705_000.0)).0 - 7.05e11).abs() < 1.0);
    }

    #[test]
    fn test_arithmetic() {
        let total = Kilonewtons(10.0) + Kilonewtons(5.0);
        assert_eq!(total, Kilonewtons(15.0));
        assert_eq!(Kilonewtons(10.0) - Kilonewtons(4.0), Kilonewtons(6.0));
        assert_eq!(Metres(3.0) * 0.9, Metres(2.7));
    }

    #[test]
    fn test_serialization_is_transparent() {
        let json = serde_json::to_string(&Kilonewtons(12.5)).unwrap();
        assert_eq!(json, "12.5");
    }
}
