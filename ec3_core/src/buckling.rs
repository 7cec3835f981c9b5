//! # Buckling Primitives
//!
//! Reduction factors for flexural buckling (§6.3.1.2) and lateral-torsional
//! buckling (§6.3.2.3), elastic critical forces and moments, and the
//! curve-selection rules for rolled I sections.
//!
//! ```rust
//! use ec3_core::buckling::flexural_reduction_factor;
//!
//! let rf = flexural_reduction_factor(0.0, 0.34);
//! assert_eq!(rf.chi, 1.0);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::materials::BucklingCurve;

/// Slenderness reported when the elastic critical moment is zero
pub const SLENDERNESS_SENTINEL: f64 = 999.0;

/// β and λ̄₀ for flexural buckling
pub const FLEXURAL_BETA: f64 = 1.0;
pub const FLEXURAL_LAMBDA_0: f64 = 0.2;

/// β and λ̄LT,0 for rolled sections (§6.3.2.3)
pub const ROLLED_LTB_BETA: f64 = 0.75;
pub const ROLLED_LTB_LAMBDA_0: f64 = 0.4;

/// Intermediate value Φ and reduction factor χ
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReductionFactor {
    pub phi: f64,
    pub chi: f64,
}

/// General reduction factor:
/// Φ = 0.5·(1 + α·(λ̄ − λ̄₀) + β·λ̄²), χ = 1/(Φ + √(Φ² − β·λ̄²)), capped at 1.
///
/// A non-positive discriminant gives χ = 1.
pub fn reduction_factor(lambda: f64, alpha: f64, beta: f64, lambda_0: f64) -> ReductionFactor {
    let phi = 0.5 * (1.0 + alpha * (lambda - lambda_0) + beta * lambda * lambda);
    let disc = phi * phi - beta * lambda * lambda;
    let chi = if disc > 0.0 {
        1.0 / (phi + disc.sqrt())
    } else {
        1.0
    };
    ReductionFactor {
        phi,
        chi: chi.min(1.0),
    }
}

/// χ for flexural buckling (β = 1, λ̄₀ = 0.2)
pub fn flexural_reduction_factor(lambda: f64, alpha: f64) -> ReductionFactor {
    reduction_factor(lambda, alpha, FLEXURAL_BETA, FLEXURAL_LAMBDA_0)
}

/// χLT for rolled sections (β = 0.75, λ̄LT,0 = 0.4), also capped at 1/λ̄LT²
pub fn ltb_reduction_factor(lambda_lt: f64, alpha_lt: f64) -> ReductionFactor {
    let mut rf = reduction_factor(lambda_lt, alpha_lt, ROLLED_LTB_BETA, ROLLED_LTB_LAMBDA_0);
    if lambda_lt > 0.0 {
        rf.chi = rf.chi.min(1.0 / (lambda_lt * lambda_lt));
    }
    rf
}

/// λ1 = 93.9ε
pub fn euler_slenderness(eps: f64) -> f64 {
    93.9 * eps
}

/// λ̄ = Lcr/(i·λ1); zero when either length or radius is not positive
pub fn flexural_slenderness(lcr_mm: f64, radius_mm: f64, lambda_1: f64) -> f64 {
    if radius_mm > 0.0 && lcr_mm > 0.0 {
        lcr_mm / (radius_mm * lambda_1)
    } else {
        0.0
    }
}

/// Ncr = π²EI/L² (N); infinite for a zero buckling length
pub fn critical_force(e_mpa: f64, i_mm4: f64, l_mm: f64) -> f64 {
    if l_mm > 0.0 {
        PI * PI * e_mpa * i_mm4 / (l_mm * l_mm)
    } else {
        f64::INFINITY
    }
}

/// Torsional critical force Ncr,T = (G·It + π²E·Iw/L²)/i0² with i0² = (Iy + Iz)/A
#[allow(clippy::too_many_arguments)]
pub fn torsional_critical_force(
    e_mpa: f64,
    g_mpa: f64,
    area_mm2: f64,
    iy_mm4: f64,
    iz_mm4: f64,
    it_mm4: f64,
    iw_mm6: f64,
    l_mm: f64,
) -> f64 {
    if l_mm <= 0.0 {
        return f64::INFINITY;
    }
    let i0_sq = (iy_mm4 + iz_mm4) / area_mm2;
    (g_mpa * it_mm4 + PI * PI * e_mpa * iw_mm6 / (l_mm * l_mm)) / i0_sq
}

/// Elastic critical moment for a doubly symmetric section (N·mm):
///
/// Mcr = C1·π²EIz/L² · √(Iw/Iz + L²·G·It/(π²·E·Iz))
pub fn elastic_critical_moment(
    c1: f64,
    e_mpa: f64,
    g_mpa: f64,
    iz_mm4: f64,
    it_mm4: f64,
    iw_mm6: f64,
    l_mm: f64,
) -> f64 {
    if l_mm <= 0.0 {
        return f64::INFINITY;
    }
    if iz_mm4 <= 0.0 {
        return 0.0;
    }
    let euler = PI * PI * e_mpa * iz_mm4 / (l_mm * l_mm);
    let warping = iw_mm6 / iz_mm4;
    let torsion = l_mm * l_mm * g_mpa * it_mm4 / (PI * PI * e_mpa * iz_mm4);
    c1 * euler * (warping + torsion).sqrt()
}

/// λ̄LT = √(W·fy/Mcr), [`SLENDERNESS_SENTINEL`] when Mcr ≤ 0
pub fn ltb_slenderness(w_mm3: f64, fy: f64, mcr_nmm: f64) -> f64 {
    if mcr_nmm > 0.0 {
        (w_mm3 * fy / mcr_nmm).sqrt()
    } else {
        SLENDERNESS_SENTINEL
    }
}

/// Moment gradient factor from quarter-point moments (absolute values):
///
/// C1 = 12.5·Mmax/(2.5·Mmax + 3MA + 4MB + 3MC), never below 1.
pub fn c1_quarter_point(m_max: f64, m_a: f64, m_b: f64, m_c: f64) -> f64 {
    let denom = 2.5 * m_max + 3.0 * m_a + 4.0 * m_b + 3.0 * m_c;
    let c1 = if denom > 0.0 { 12.5 * m_max / denom } else { 1.0 };
    c1.max(1.0)
}

/// Modification factor f = min(1 − 0.5(1 − kc)(1 − 2(λ̄LT − 0.8)²), 1)
pub fn ltb_modification_factor(kc: f64, lambda_lt: f64) -> f64 {
    let f = 1.0 - 0.5 * (1.0 - kc) * (1.0 - 2.0 * (lambda_lt - 0.8).powi(2));
    f.min(1.0)
}

/// χLT,mod = min(χLT/f, 1); χLT unchanged when f ≤ 0
pub fn modified_ltb_factor(chi_lt: f64, f: f64) -> f64 {
    if f > 0.0 {
        (chi_lt / f).min(1.0)
    } else {
        chi_lt
    }
}

/// Flexural buckling curves (y-y, z-z) for rolled I sections, S235–S420 (Table 6.2)
pub fn rolled_i_flexural_curves(h_mm: f64, b_mm: f64, tf_mm: f64) -> (BucklingCurve, BucklingCurve) {
    if h_mm / b_mm > 1.2 {
        if tf_mm <= 40.0 {
            (BucklingCurve::A, BucklingCurve::B)
        } else {
            (BucklingCurve::B, BucklingCurve::C)
        }
    } else if tf_mm <= 100.0 {
        (BucklingCurve::B, BucklingCurve::C)
    } else {
        (BucklingCurve::D, BucklingCurve::D)
    }
}
