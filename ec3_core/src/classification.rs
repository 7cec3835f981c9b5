//! # Cross-Section Classification
//!
//! Width-to-thickness checks per EN 1993-1-1 Table 5.2. Every part is
//! compared against its class 1/2/3 limits scaled by ε; anything beyond the
//! class 3 limit is class 4. The section class is the worst part class.
//!
//! Classification never fails: degenerate geometry simply falls through to
//! class 4.
//!
//! ## Example
//!
//! ```rust
//! use ec3_core::classification::classify_beam;
//! use ec3_core::materials::epsilon;
//! use ec3_core::sections::lookup_open;
//!
//! let ub = lookup_open("UB 457x191x67").unwrap();
//! let cls = classify_beam(&ub, epsilon(275.0));
//! assert_eq!(cls.section_class, 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::sections::{HollowSectionData, SteelSectionData};

/// Limit used when a formula denominator vanishes
const UNBOUNDED_LIMIT: f64 = 999.0;

/// Class from a c/t ratio and the class 1/2/3 upper limits (inclusive)
pub fn class_from_limits(ct: f64, limits: [f64; 3]) -> u8 {
    if ct <= limits[0] {
        1
    } else if ct <= limits[1] {
        2
    } else if ct <= limits[2] {
        3
    } else {
        4
    }
}

/// Classification of an I/H section (web and compression flange)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpenClassification {
    /// Web compressive fraction α (0.5 for pure bending)
    pub alpha_web: f64,
    pub c_web_mm: f64,
    pub ct_web: f64,
    pub web_class: u8,
    pub c_flange_mm: f64,
    pub ct_flange: f64,
    pub flange_class: u8,
    pub section_class: u8,
}

/// Classification of a rectangular hollow section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HollowClassification {
    /// Flat width of the h-side wall, h - 2t
    pub c_h_mm: f64,
    /// Flat width of the b-side wall, b - 2t
    pub c_b_mm: f64,
    /// Governing c/t
    pub ct: f64,
    pub section_class: u8,
}

/// Outstand flange in compression: c = (b - tw)/2 - r, limits 9ε/10ε/14ε
fn classify_flange(section: &SteelSectionData, eps: f64) -> (f64, f64, u8) {
    let c = (section.b_mm - section.tw_mm) / 2.0 - section.r_mm;
    let ct = c / section.tf_mm;
    let class = class_from_limits(ct, [9.0 * eps, 10.0 * eps, 14.0 * eps]);
    (c, ct, class)
}

/// Classify an I/H section in pure bending (beams).
///
/// Web c = d with limits 72ε/83ε/124ε.
pub fn classify_beam(section: &SteelSectionData, eps: f64) -> OpenClassification {
    let c_web = section.d_mm;
    let ct_web = c_web / section.tw_mm;
    let web_class = class_from_limits(ct_web, [72.0 * eps, 83.0 * eps, 124.0 * eps]);
    let (c_flange, ct_flange, flange_class) = classify_flange(section, eps);

    OpenClassification {
        alpha_web: 0.5,
        c_web_mm: c_web,
        ct_web,
        web_class,
        c_flange_mm: c_flange,
        ct_flange,
        flange_class,
        section_class: web_class.max(flange_class),
    }
}

/// Compressed fraction α of the web under axial force plus major-axis moment.
///
/// With both NEd > 0 and My,Ed ≠ 0 the plastic neutral axis shifts by
/// NEd/(2·tw·fy); pure compression gives α = 1, no compression α = 0.5.
pub fn web_compression_fraction(c_web_mm: f64, tw_mm: f64, fy: f64, n_ed_n: f64, my_ed_nmm: f64) -> f64 {
    if n_ed_n > 0.0 && my_ed_nmm != 0.0 {
        let alpha = (c_web_mm / 2.0 + n_ed_n / (2.0 * tw_mm * fy)) / c_web_mm;
        alpha.clamp(0.0, 1.0)
    } else if n_ed_n > 0.0 {
        1.0
    } else {
        0.5
    }
}

/// Web limits for bending plus compression.
///
/// Returns `[class 1, class 2, class 3]` upper limits.
pub fn web_limits_combined(alpha: f64, eps: f64) -> [f64; 3] {
    let (limit1, limit2) = if alpha > 0.5 {
        let denom = 13.0 * alpha - 1.0;
        (396.0 * eps / denom, 456.0 * eps / denom)
    } else if alpha > 0.0 {
        (36.0 * eps / alpha, 41.5 * eps / alpha)
    } else {
        (UNBOUNDED_LIMIT, UNBOUNDED_LIMIT)
    };

    // Stress ratio ψ approximated from α
    let psi = if alpha >= 1.0 {
        1.0
    } else {
        (2.0 * alpha - 1.0).clamp(-1.0, 1.0)
    };
    let denom = 0.67 + 0.33 * psi;
    let limit3 = if denom > 0.0 {
        42.0 * eps / denom
    } else {
        UNBOUNDED_LIMIT
    };

    [limit1, limit2, limit3]
}

/// Classify an I/H section under axial compression plus bending (columns).
pub fn classify_column(
    section: &SteelSectionData,
    fy: f64,
    eps: f64,
    n_ed_n: f64,
    my_ed_nmm: f64,
) -> OpenClassification {
    let (c_flange, ct_flange, flange_class) = classify_flange(section, eps);

    let c_web = section.d_mm;
    let ct_web = c_web / section.tw_mm;
    let alpha = web_compression_fraction(c_web, section.tw_mm, fy, n_ed_n, my_ed_nmm);
    let web_class = class_from_limits(ct_web, web_limits_combined(alpha, eps));

    OpenClassification {
        alpha_web: alpha,
        c_web_mm: c_web,
        ct_web,
        web_class,
        c_flange_mm: c_flange,
        ct_flange,
        flange_class,
        section_class: web_class.max(flange_class),
    }
}

/// Classify a hollow section in compression: internal parts, limits 33ε/38ε/42ε.
pub fn classify_hollow(section: &HollowSectionData, eps: f64) -> HollowClassification {
    let c_h = section.h_mm - 2.0 * section.t_mm;
    let c_b = section.b_mm - 2.0 * section.t_mm;
    let ct = (c_h / section.t_mm).max(c_b / section.t_mm);

    HollowClassification {
        c_h_mm: c_h,
        c_b_mm: c_b,
        ct,
        section_class: class_from_limits(ct, [33.0 * eps, 38.0 * eps, 42.0 * eps]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::epsilon;
    use crate::sections::{lookup_hollow, lookup_open};

    #[test]
    fn test_limits_are_inclusive() {
        assert_eq!(class_from_limits(9.0, [9.0, 10.0, 14.0]), 1);
        assert_eq!(class_from_limits(9.0001, [9.0, 10.0, 14.0]), 2);
        assert_eq!(class_from_limits(14.0, [9.0, 10.0, 14.0]), 3);
        assert_eq!(class_from_limits(14.5, [9.0, 10.0, 14.0]), 4);
    }

    #[test]
    fn test_class_monotone_in_ct() {
        let limits = [72.0, 83.0, 124.0];
        let mut prev = 1;
        let mut ct = 0.0;
        while ct < 200.0 {
            let class = class_from_limits(ct, limits);
            assert!(class >= prev);
            prev = class;
            ct += 0.5;
        }
        assert_eq!(prev, 4);
    }

    #[test]
    fn test_beam_classification_ub457() {
        let ub = lookup_open("UB 457x191x67").unwrap();
        let cls = classify_beam(&ub, epsilon(275.0));
        // c = (189.9 - 8.5)/2 - 10.2 = 80.5; c/t = 6.34
        assert!((cls.c_flange_mm - 80.5).abs() < 1e-9);
        assert!((cls.ct_flange - 80.5 / 12.7).abs() < 1e-9);
        // d/tw = 407.6/8.5 = 47.95
        assert!((cls.ct_web - 47.953).abs() < 1e-3);
        assert_eq!(cls.web_class, 1);
        assert_eq!(cls.flange_class, 1);
        assert_eq!(cls.section_class, 1);
    }

    #[test]
    fn test_compression_fraction() {
        assert_eq!(web_compression_fraction(160.8, 7.2, 355.0, 500e3, 0.0), 1.0);
        assert_eq!(web_compression_fraction(160.8, 7.2, 355.0, 0.0, 50e6), 0.5);
        assert_eq!(web_compression_fraction(160.8, 7.2, 355.0, -10e3, 50e6), 0.5);
        let alpha = web_compression_fraction(160.8, 7.2, 355.0, 100e3, 50e6);
        let expected = (80.4 + 100e3 / (2.0 * 7.2 * 355.0)) / 160.8;
        assert!((alpha - expected).abs() < 1e-12);
        // large axial force saturates
        assert_eq!(web_compression_fraction(160.8, 7.2, 355.0, 5e6, 50e6), 1.0);
    }

    #[test]
    fn test_combined_limits_pure_compression() {
        let eps = 1.0;
        let limits = web_limits_combined(1.0, eps);
        assert!((limits[0] - 33.0).abs() < 1e-12);
        assert!((limits[1] - 38.0).abs() < 1e-12);
        assert!((limits[2] - 42.0).abs() < 1e-12);
    }

    #[test]
    fn test_combined_limits_pure_bending() {
        let limits = web_limits_combined(0.5, 1.0);
        assert!((limits[0] - 72.0).abs() < 1e-12);
        assert!((limits[1] - 83.0).abs() < 1e-12);
        // ψ = 0: 42/0.67
        assert!((limits[2] - 42.0 / 0.67).abs() < 1e-9);
    }

    #[test]
    fn test_zero_alpha_is_unbounded() {
        let limits = web_limits_combined(0.0, 1.0);
        assert_eq!(limits[0], 999.0);
        assert_eq!(limits[1], 999.0);
    }

    #[test]
    fn test_column_classification_uc() {
        let uc = lookup_open("UC 203x203x46").unwrap();
        let fy = 355.0;
        let cls = classify_column(&uc, fy, epsilon(fy), 800e3, 0.0);
        assert_eq!(cls.alpha_web, 1.0);
        // d/tw = 22.3 < 33ε = 26.8
        assert_eq!(cls.web_class, 1);
        assert!(cls.section_class <= 2);
    }

    #[test]
    fn test_hollow_classification() {
        let shs = lookup_hollow("SHS 100x100x5").unwrap();
        let cls = classify_hollow(&shs, epsilon(355.0));
        assert!((cls.ct - 18.0).abs() < 1e-12);
        assert_eq!(cls.section_class, 1);

        let rhs = lookup_hollow("RHS 150x100x6.3").unwrap();
        let cls = classify_hollow(&rhs, 1.0);
        assert!((cls.ct - (150.0 - 12.6) / 6.3).abs() < 1e-9);
    }

    #[test]
    fn test_slender_hollow_is_class_4() {
        let thin = HollowSectionData::shs("SHS 200x200x3", 200.0, 3.0, 23.0, 1460.0, 79.6, 146.0, 168.0, 18.1);
        let cls = classify_hollow(&thin, epsilon(355.0));
        assert_eq!(cls.section_class, 4);
    }

    #[test]
    fn test_open_class_never_improves_with_strength() {
        for designation in ["UB 457x191x67", "UB 305x165x40", "UC 203x203x46", "UC 254x254x73"] {
            let section = lookup_open(designation).unwrap();
            let mut prev = 1;
            for fy in (200..=900).step_by(10) {
                let cls = classify_beam(&section, epsilon(fy as f64));
                assert!(cls.section_class >= prev, "{designation} at fy = {fy}");
                assert_eq!(cls.section_class, cls.web_class.max(cls.flange_class));
                prev = cls.section_class;
            }
        }
    }

    #[test]
    fn test_hollow_class_never_improves_with_thinner_walls() {
        for eps in [epsilon(235.0), epsilon(355.0), epsilon(450.0)] {
            let mut prev = 1;
            for tenths in (20..=160).rev() {
                let t = tenths as f64 / 10.0;
                let shs = HollowSectionData::shs("SHS 200x200", 200.0, t, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0);
                let cls = classify_hollow(&shs, eps);
                assert!(cls.section_class >= prev, "t = {t} mm");
                prev = cls.section_class;
            }
            assert_eq!(prev, 4);
        }
    }
}
