//! # Cross-Section Resistance
//!
//! Resistance primitives shared by the check pipelines (EN 1993-1-1 §6.2).
//! All quantities are in N and mm; results come back in N and N·mm.

use crate::sections::SteelSectionData;

/// Utilisation reported when the capacity is zero or undefined
pub const UTILISATION_SENTINEL: f64 = 999.0;

/// Demand/capacity ratio, [`UTILISATION_SENTINEL`] when capacity ≤ 0.
pub fn utilisation(demand: f64, capacity: f64) -> f64 {
    if capacity > 0.0 {
        demand / capacity
    } else {
        log::warn!(
            "capacity {} is not positive (demand {}), reporting sentinel utilisation",
            capacity,
            demand
        );
        UTILISATION_SENTINEL
    }
}

/// Like [`utilisation`], but zero demand is always 0 even without capacity.
pub fn demand_utilisation(demand: f64, capacity: f64) -> f64 {
    if demand <= 0.0 {
        0.0
    } else {
        utilisation(demand, capacity)
    }
}

/// Plastic for class 1/2, elastic otherwise
pub fn bending_modulus(section_class: u8, wpl_mm3: f64, wel_mm3: f64) -> f64 {
    if section_class <= 2 {
        wpl_mm3
    } else {
        wel_mm3
    }
}

/// Moment resistance W·fy/γ (N·mm)
pub fn moment_resistance(w_mm3: f64, fy: f64, gamma: f64) -> f64 {
    w_mm3 * fy / gamma
}

/// Squash load A·fy/γ (N)
pub fn axial_resistance(area_mm2: f64, fy: f64, gamma: f64) -> f64 {
    area_mm2 * fy / gamma
}

/// Shear area of a rolled I/H section loaded parallel to the web (§6.2.6(3)a), η = 1.
///
/// Av = A - 2·b·tf + (tw + 2r)·tf, not less than hw·tw.
pub fn shear_area(section: &SteelSectionData) -> f64 {
    let av = section.area_mm2() - 2.0 * section.b_mm * section.tf_mm
        + (section.tw_mm + 2.0 * section.r_mm) * section.tf_mm;
    av.max(section.hi_mm * section.tw_mm)
}

/// Plastic shear resistance Av·(fy/√3)/γM0 (N)
pub fn plastic_shear_resistance(av_mm2: f64, fy: f64, gamma_m0: f64) -> f64 {
    av_mm2 * (fy / 3f64.sqrt()) / gamma_m0
}

/// Result of the bending + shear interaction (§6.2.8)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShearReducedMoment {
    pub low_shear: bool,
    /// Reduction factor ρ applied to fy in the shear area
    pub rho: f64,
    /// Reduced moment resistance Mv,Rd (N·mm)
    pub mv_rd_nmm: f64,
}

/// Moment resistance reduced for high shear.
///
/// Below half the plastic shear resistance no reduction applies. Otherwise
/// ρ = (2·VEd/Vpl,Rd − 1)² and the whole modulus works at (1 − ρ)·fy.
pub fn shear_reduced_moment(
    v_ed_n: f64,
    vpl_rd_n: f64,
    w_mm3: f64,
    fy: f64,
    gamma_m0: f64,
) -> ShearReducedMoment {
    let v = v_ed_n.abs();
    if v <= 0.5 * vpl_rd_n {
        ShearReducedMoment {
            low_shear: true,
            rho: 0.0,
            mv_rd_nmm: moment_resistance(w_mm3, fy, gamma_m0),
        }
    } else {
        let rho = (2.0 * v / vpl_rd_n - 1.0).powi(2);
        ShearReducedMoment {
            low_shear: false,
            rho,
            mv_rd_nmm: moment_resistance(w_mm3, (1.0 - rho) * fy, gamma_m0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::lookup_open;

    #[test]
    fn test_utilisation_sentinel() {
        assert_eq!(utilisation(10.0, 0.0), UTILISATION_SENTINEL);
        assert_eq!(utilisation(0.0, -1.0), UTILISATION_SENTINEL);
        assert!((utilisation(50.0, 200.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_demand_utilisation_zero_demand() {
        assert_eq!(demand_utilisation(0.0, 0.0), 0.0);
        assert_eq!(demand_utilisation(0.0, 1000.0), 0.0);
        assert_eq!(demand_utilisation(5.0, 0.0), UTILISATION_SENTINEL);
    }

    #[test]
    fn test_bending_modulus_by_class() {
        assert_eq!(bending_modulus(1, 1470.0, 1300.0), 1470.0);
        assert_eq!(bending_modulus(2, 1470.0, 1300.0), 1470.0);
        assert_eq!(bending_modulus(3, 1470.0, 1300.0), 1300.0);
        assert_eq!(bending_modulus(4, 1470.0, 1300.0), 1300.0);
    }

    #[test]
    fn test_shear_area_ub457() {
        let ub = lookup_open("UB 457x191x67").unwrap();
        // 8550 - 2·189.9·12.7 + (8.5 + 20.4)·12.7 = 4093.6
        let av = shear_area(&ub);
        assert!((av - 4093.6).abs() < 0.1);
        assert!(av >= ub.hi_mm * ub.tw_mm);
    }

    #[test]
    fn test_plastic_shear() {
        let vpl = plastic_shear_resistance(4093.6, 275.0, 1.0);
        assert!((vpl - 4093.6 * 275.0 / 3f64.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_shear_reduced_moment() {
        let low = shear_reduced_moment(100e3, 300e3, 1.0e6, 275.0, 1.0);
        assert!(low.low_shear);
        assert_eq!(low.rho, 0.0);
        assert!((low.mv_rd_nmm - 275e6).abs() < 1e-6);

        // exactly half is still low shear
        assert!(shear_reduced_moment(150e3, 300e3, 1.0e6, 275.0, 1.0).low_shear);

        let high = shear_reduced_moment(-225e3, 300e3, 1.0e6, 275.0, 1.0);
        assert!(!high.low_shear);
        assert!((high.rho - 0.25).abs() < 1e-12);
        assert!((high.mv_rd_nmm - 0.75 * 275e6).abs() < 1e-3);
    }
}
