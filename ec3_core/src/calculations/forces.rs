//! Linear internal-force distribution along a member.
//!
//! With a uniformly distributed local load w, the shear is linear and the
//! moment quadratic in x (measured from the start node, in m):
//!
//! - V(x) = V0 + w·x
//! - M(x) = M0 + V0·x + w·x²/2

use serde::{Deserialize, Serialize};

use crate::units::{m_to_mm, n_per_m_to_n_per_mm, nm_to_nmm};

/// Number of intervals used when sampling along the span
pub const SPAN_SAMPLE_INTERVALS: usize = 100;

/// End conditions for the deflected shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeflectionSupport {
    /// Pinned at both ends
    #[default]
    SimplySupported,
    /// Clamped at one end, free at the other
    Cantilever,
}

/// Member-end forces plus a uniformly distributed load, SI units.
///
/// ## JSON Example
///
/// ```json
/// { "shear_at_start_n": 90000.0, "moment_at_start_nm": 0.0, "udl_n_per_m": -30000.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LinearForceDistribution {
    /// Shear at the start node (N)
    pub shear_at_start_n: f64,
    /// Moment at the start node (N·m)
    pub moment_at_start_nm: f64,
    /// Uniformly distributed load in local coordinates (N/m)
    pub udl_n_per_m: f64,
}

impl LinearForceDistribution {
    /// Simply supported span under a downward UDL of `q_n_per_m`
    pub fn simply_supported_udl(q_n_per_m: f64, span_m: f64) -> Self {
        LinearForceDistribution {
            shear_at_start_n: q_n_per_m * span_m / 2.0,
            moment_at_start_nm: 0.0,
            udl_n_per_m: -q_n_per_m,
        }
    }

    /// True when every term is zero
    pub fn is_zero(&self) -> bool {
        self.shear_at_start_n == 0.0 && self.moment_at_start_nm == 0.0 && self.udl_n_per_m == 0.0
    }

    /// Bending moment at x (N·m)
    pub fn moment_at(&self, x_m: f64) -> f64 {
        self.moment_at_start_nm + self.shear_at_start_n * x_m + self.udl_n_per_m * x_m * x_m / 2.0
    }

    /// Shear force at x (N)
    pub fn shear_at(&self, x_m: f64) -> f64 {
        self.shear_at_start_n + self.udl_n_per_m * x_m
    }

    /// Positions of `intervals + 1` equally spaced points on [start, end]
    pub fn sample_points(start_m: f64, end_m: f64, intervals: usize) -> impl Iterator<Item = f64> {
        (0..=intervals).map(move |k| start_m + k as f64 / intervals as f64 * (end_m - start_m))
    }

    /// Largest |M| over [0, span] (N·m).
    ///
    /// Uses the closed-form extremum (ends plus the zero-shear point) and
    /// never reports less than the 101-point sampled maximum.
    pub fn peak_moment_abs(&self, span_m: f64) -> f64 {
        let mut peak = self.moment_at(0.0).abs().max(self.moment_at(span_m).abs());
        if self.udl_n_per_m != 0.0 {
            let x_star = -self.shear_at_start_n / self.udl_n_per_m;
            if x_star > 0.0 && x_star < span_m {
                peak = peak.max(self.moment_at(x_star).abs());
            }
        }
        let sampled = Self::sample_points(0.0, span_m, SPAN_SAMPLE_INTERVALS)
            .map(|x| self.moment_at(x).abs())
            .fold(0.0, f64::max);
        peak.max(sampled)
    }

    /// Largest |V| over [0, span] (N); V is linear so an end governs
    pub fn peak_shear_abs(&self, span_m: f64) -> f64 {
        self.shear_at(0.0).abs().max(self.shear_at(span_m).abs())
    }

    /// Largest deflection over the span (mm).
    ///
    /// Integrates M/EI twice and samples the result at 101 points. The
    /// integration constants follow `support`:
    ///
    /// - [`DeflectionSupport::SimplySupported`]: zero displacement at both
    ///   ends, so the result is measured from the chord. A simply supported
    ///   span under UDL gives 5qL⁴/384EI.
    /// - [`DeflectionSupport::Cantilever`]: zero displacement and slope at
    ///   the root, taken as the end with the larger |M|. A cantilever under
    ///   UDL gives qL⁴/8EI at the tip.
    pub fn max_deflection_mm(&self, span_m: f64, e_mpa: f64, i_mm4: f64, support: DeflectionSupport) -> f64 {
        let ei = e_mpa * i_mm4;
        if span_m <= 0.0 || ei <= 0.0 {
            return 0.0;
        }
        let l_mm = m_to_mm(span_m);
        let m0 = nm_to_nmm(self.moment_at_start_nm);
        let v0 = self.shear_at_start_n;
        let w = n_per_m_to_n_per_mm(self.udl_n_per_m);

        // EI·v(x) = c0 + c1·x − (M0·x²/2 + V0·x³/6 + w·x⁴/24)
        let curvature_integral = |x: f64| m0 * x * x / 2.0 + v0 * x.powi(3) / 6.0 + w * x.powi(4) / 24.0;
        let slope_integral = |x: f64| m0 * x + v0 * x * x / 2.0 + w * x.powi(3) / 6.0;

        let (c0, c1) = match support {
            DeflectionSupport::SimplySupported => (0.0, curvature_integral(l_mm) / l_mm),
            DeflectionSupport::Cantilever if self.moment_at(span_m).abs() > self.moment_at(0.0).abs() => {
                let slope_end = slope_integral(l_mm);
                (curvature_integral(l_mm) - slope_end * l_mm, slope_end)
            }
            DeflectionSupport::Cantilever => (0.0, 0.0),
        };

        Self::sample_points(0.0, l_mm, SPAN_SAMPLE_INTERVALS)
            .map(|x| ((c0 + c1 * x - curvature_integral(x)) / ei).abs())
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_moment_and_shear() {
        let d = LinearForceDistribution::simply_supported_udl(30_000.0, 6.0);
        assert_relative_eq!(d.shear_at(0.0), 90_000.0);
        assert_relative_eq!(d.shear_at(6.0), -90_000.0);
        assert_relative_eq!(d.moment_at(3.0), 135_000.0);
        assert!(d.moment_at(6.0).abs() < 1e-6);
    }

    #[test]
    fn test_peak_moment_closed_form() {
        let d = LinearForceDistribution::simply_supported_udl(30_000.0, 6.0);
        assert_relative_eq!(d.peak_moment_abs(6.0), 135_000.0, max_relative = 1e-12);
        assert_relative_eq!(d.peak_shear_abs(6.0), 90_000.0);
    }

    #[test]
    fn test_peak_between_samples() {
        // zero-shear point at x = 1/3 m falls between grid points
        let d = LinearForceDistribution {
            shear_at_start_n: 1000.0,
            moment_at_start_nm: 0.0,
            udl_n_per_m: -3000.0,
        };
        let exact = d.moment_at(1.0 / 3.0).abs();
        let sampled = LinearForceDistribution::sample_points(0.0, 1.0, 100)
            .map(|x| d.moment_at(x).abs())
            .fold(0.0, f64::max);
        let peak = d.peak_moment_abs(1.0);
        assert!(peak >= sampled);
        assert_relative_eq!(peak, exact, max_relative = 1e-12);
    }

    #[test]
    fn test_uniform_moment() {
        let d = LinearForceDistribution {
            shear_at_start_n: 0.0,
            moment_at_start_nm: 50_000.0,
            udl_n_per_m: 0.0,
        };
        assert_relative_eq!(d.peak_moment_abs(4.0), 50_000.0);
        assert_eq!(d.peak_shear_abs(4.0), 0.0);
    }

    #[test]
    fn test_udl_deflection_matches_formula() {
        let q = 30_000.0; // N/m
        let span = 6.0;
        let e = 210_000.0;
        let i = 2.94e8;
        let d = LinearForceDistribution::simply_supported_udl(q, span);
        let expected = 5.0 * (q / 1e3) * (span * 1e3f64).powi(4) / (384.0 * e * i);
        assert_relative_eq!(d.max_deflection_mm(span, e, i, DeflectionSupport::SimplySupported), expected, max_relative = 1e-9);
    }

    #[test]
    fn test_uniform_moment_deflection() {
        // constant M: δ = M·L²/(8EI)
        let d = LinearForceDistribution {
            shear_at_start_n: 0.0,
            moment_at_start_nm: 10_000.0,
            udl_n_per_m: 0.0,
        };
        let expected = 10_000.0e3 * 4000.0f64.powi(2) / (8.0 * 210_000.0 * 1.0e7);
        assert_relative_eq!(d.max_deflection_mm(4.0, 210_000.0, 1.0e7, DeflectionSupport::SimplySupported), expected, max_relative = 1e-9);
    }

    #[test]
    fn test_zero_span_deflection() {
        let d = LinearForceDistribution::simply_supported_udl(1000.0, 0.0);
        assert_eq!(d.max_deflection_mm(0.0, 210_000.0, 1e7, DeflectionSupport::Cantilever), 0.0);
    }

    /// Cantilever of span L under downward UDL q, root at the start node
    fn cantilever_root_at_start(q: f64, span: f64) -> LinearForceDistribution {
        LinearForceDistribution {
            shear_at_start_n: q * span,
            moment_at_start_nm: -q * span * span / 2.0,
            udl_n_per_m: -q,
        }
    }

    #[test]
    fn test_cantilever_tip_deflection() {
        let (q, span, e, i) = (10_000.0, 3.0, 210_000.0, 2.94e8);
        let d = cantilever_root_at_start(q, span);
        let expected = (q / 1e3) * (span * 1e3f64).powi(4) / (8.0 * e * i);
        assert_relative_eq!(
            d.max_deflection_mm(span, e, i, DeflectionSupport::Cantilever),
            expected,
            max_relative = 1e-9
        );
        // the chord of a cantilever hides most of the tip movement
        assert!(d.max_deflection_mm(span, e, i, DeflectionSupport::SimplySupported) < 0.5 * expected);
    }

    #[test]
    fn test_cantilever_root_at_end() {
        // free at the start node, clamped at the end node
        let (q, span, e, i) = (10_000.0, 3.0, 210_000.0, 2.94e8);
        let d = LinearForceDistribution {
            shear_at_start_n: 0.0,
            moment_at_start_nm: 0.0,
            udl_n_per_m: -q,
        };
        let expected = (q / 1e3) * (span * 1e3f64).powi(4) / (8.0 * e * i);
        assert_relative_eq!(
            d.max_deflection_mm(span, e, i, DeflectionSupport::Cantilever),
            expected,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_cantilever_tip_moment() {
        // end moment P·L at the root from a tip load P: δ = PL³/3EI
        let (p, span, e, i) = (5_000.0, 2.0, 210_000.0, 1.0e7);
        let d = LinearForceDistribution {
            shear_at_start_n: p,
            moment_at_start_nm: -p * span,
            udl_n_per_m: 0.0,
        };
        let expected = p * (span * 1e3f64).powi(3) / (3.0 * e * i);
        assert_relative_eq!(
            d.max_deflection_mm(span, e, i, DeflectionSupport::Cantilever),
            expected,
            max_relative = 1e-9
        );
    }
}
