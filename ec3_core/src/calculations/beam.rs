//! # Beam Check
//!
//! Verifies a rolled I/H beam bending about its major axis per EN 1993-1-1:
//!
//! 1. Yield strength (Table 3.1), governed by the flange thickness
//! 2. Cross-section classification in pure bending (Table 5.2)
//! 3. Bending resistance (§6.2.5)
//! 4. Shear resistance (§6.2.6)
//! 5. Shear buckling screening (§6.2.6(6)), reported only
//! 6. Bending + shear interaction (§6.2.8)
//! 7. Lateral-torsional buckling per unrestrained segment (§6.3.2.3)
//! 8. Deflection against span/ratio
//!
//! ## Forces
//!
//! Forces are either explicit peaks ([`BeamForces::Explicit`]) or a linear
//! distribution along the member ([`BeamForces::Distribution`]). With a
//! distribution the peaks, the moment shape in every LTB segment, and (unless
//! supplied) the deflection all come from the distribution. With explicit
//! peaks each segment is checked under a uniform moment |MEd|.
//!
//! ## Example
//!
//! ```rust
//! use ec3_core::calculations::beam::{calculate, BeamForces, BeamInput, DeflectionLimitType};
//! use ec3_core::calculations::forces::LinearForceDistribution;
//! use ec3_core::sections::lookup_open;
//! use ec3_core::settings::DesignSettings;
//!
//! let input = BeamInput {
//!     label: "B-1".to_string(),
//!     section: lookup_open("UB 457x191x67").unwrap(),
//!     grade: "S275".to_string(),
//!     span_m: 6.0,
//!     forces: BeamForces::Distribution(LinearForceDistribution::simply_supported_udl(30_000.0, 6.0)),
//!     restraint_positions_m: vec![0.0, 3.0, 6.0],
//!     deflection_limit: DeflectionLimitType::Other,
//!     max_deflection_mm: None,
//! };
//!
//! let result = calculate(&input, &DesignSettings::default()).unwrap();
//! assert!(result.bending_ok);
//! assert_eq!(result.ltb_segments.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::buckling::{
    c1_quarter_point, elastic_critical_moment, ltb_modification_factor, ltb_reduction_factor,
    ltb_slenderness, modified_ltb_factor,
};
use crate::calculations::forces::{DeflectionSupport, LinearForceDistribution};
use crate::calculations::steps::{first_max_index, governing_check, DesignStep, GoverningCheck};
use crate::classification::{classify_beam, OpenClassification};
use crate::errors::CalcResult;
use crate::materials::{epsilon, LtbCurve, SteelGrade};
use crate::resistance::{
    bending_modulus, moment_resistance, plastic_shear_resistance, shear_area, shear_reduced_moment,
    utilisation,
};
use crate::sections::SteelSectionData;
use crate::settings::DesignSettings;
use crate::units::{kn_to_n, knm_to_nm, knm_to_nmm, m_to_mm, mm3_to_cm3, n_to_kn, nm_to_nmm, nmm_to_knm};

/// Points sampled per LTB segment (intervals; 21 points)
const LTB_SEGMENT_INTERVALS: usize = 20;

/// Design forces acting on a beam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BeamForces {
    /// Peak design moment and shear
    Explicit { m_ed_knm: f64, v_ed_kn: f64 },
    /// End forces plus UDL, in N / N·m / N/m
    Distribution(LinearForceDistribution),
}

/// Deflection limit category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeflectionLimitType {
    /// span/180
    Cantilever,
    /// span/360, members carrying brittle finishes
    Brittle,
    /// span/200
    #[default]
    Other,
}

impl DeflectionLimitType {
    pub fn ratio(&self) -> f64 {
        match self {
            DeflectionLimitType::Cantilever => 180.0,
            DeflectionLimitType::Brittle => 360.0,
            DeflectionLimitType::Other => 200.0,
        }
    }

    /// End conditions used when the deflection comes from the force distribution
    pub fn support(&self) -> DeflectionSupport {
        match self {
            DeflectionLimitType::Cantilever => DeflectionSupport::Cantilever,
            DeflectionLimitType::Brittle | DeflectionLimitType::Other => DeflectionSupport::SimplySupported,
        }
    }

    /// Parse "cantilever" / "brittle"; anything else is "other"
    pub fn from_str_flexible(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "cantilever" => DeflectionLimitType::Cantilever,
            "brittle" => DeflectionLimitType::Brittle,
            _ => DeflectionLimitType::Other,
        }
    }
}

/// Input parameters for a beam check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamInput {
    /// User label (e.g., "B-1")
    pub label: String,

    pub section: SteelSectionData,

    /// Steel grade ("S235", "S275", "S355", "S450")
    pub grade: String,

    pub span_m: f64,

    pub forces: BeamForces,

    /// Lateral restraint positions from the start node (m).
    /// The member ends are always restraints.
    #[serde(default)]
    pub restraint_positions_m: Vec<f64>,

    #[serde(default)]
    pub deflection_limit: DeflectionLimitType,

    /// Maximum deflection from analysis (mm). When absent it is derived from
    /// the force distribution, or taken as zero for explicit forces.
    #[serde(default)]
    pub max_deflection_mm: Option<f64>,
}

impl BeamInput {
    /// Sorted, de-duplicated restraint positions within [0, span], ends included
    pub fn restraint_positions(&self) -> Vec<f64> {
        let mut positions: Vec<f64> = self
            .restraint_positions_m
            .iter()
            .copied()
            .filter(|x| x.is_finite() && *x >= 0.0 && *x <= self.span_m)
            .chain([0.0, self.span_m])
            .collect();
        positions.sort_by(f64::total_cmp);
        positions.dedup_by(|a, b| (*a - *b).abs() < 1e-9);
        positions
    }
}

/// LTB check of one unrestrained segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LtbSegment {
    pub start_m: f64,
    pub end_m: f64,
    pub length_mm: f64,
    /// Largest |M| in the segment
    pub m_ed_knm: f64,
    pub c1: f64,
    pub kc: f64,
    pub mcr_knm: f64,
    pub lambda_lt: f64,
    pub phi_lt: f64,
    pub chi_lt: f64,
    pub f_mod: f64,
    pub chi_lt_mod: f64,
    pub mb_rd_knm: f64,
    pub utilisation: f64,
    pub ok: bool,
}

/// Results from a beam check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamResult {
    // Step 1
    pub fy_mpa: f64,
    pub epsilon: f64,

    // Step 2
    pub classification: OpenClassification,

    // Design forces
    pub m_ed_knm: f64,
    pub v_ed_kn: f64,

    // Step 3
    /// Modulus used for bending (plastic for class 1/2)
    pub w_y_mm3: f64,
    pub mc_rd_knm: f64,
    pub bending_util: f64,
    pub bending_ok: bool,

    // Step 4
    pub av_mm2: f64,
    pub vpl_rd_kn: f64,
    pub shear_util: f64,
    pub shear_ok: bool,

    // Step 5
    pub hw_tw: f64,
    pub hw_tw_limit: f64,
    pub shear_buckling_ok: bool,

    // Step 6
    pub low_shear: bool,
    pub rho: f64,
    pub mv_rd_knm: f64,
    pub combined_util: f64,
    pub combined_ok: bool,

    // Step 7
    pub ltb_curve: LtbCurve,
    pub alpha_lt: f64,
    pub ltb_segments: Vec<LtbSegment>,
    pub governing_segment: Option<usize>,
    pub ltb_util: f64,
    pub ltb_ok: bool,

    // Step 8
    pub deflection_limit: DeflectionLimitType,
    pub defl_ratio: f64,
    pub delta_max_mm: f64,
    pub delta_limit_mm: f64,
    pub deflection_util: f64,
    pub deflection_ok: bool,

    pub overall_ok: bool,
}

impl BeamResult {
    /// Check if the beam passes (shear buckling is reported, not aggregated)
    pub fn passes(&self) -> bool {
        self.overall_ok
    }

    /// Governing LTB segment, if any
    pub fn governing_ltb_segment(&self) -> Option<&LtbSegment> {
        self.governing_segment.and_then(|i| self.ltb_segments.get(i))
    }

    /// Check with the highest utilisation
    pub fn governing_check(&self) -> Option<GoverningCheck> {
        governing_check(&[
            ("bending", self.bending_util),
            ("shear", self.shear_util),
            ("combined", self.combined_util),
            ("LTB", self.ltb_util),
            ("deflection", self.deflection_util),
        ])
    }

    /// Highest utilisation among the aggregated checks
    pub fn max_utilisation(&self) -> f64 {
        self.governing_check().map(|g| g.utilisation).unwrap_or(0.0)
    }

    /// Flatten into the eight reported steps
    pub fn steps(&self) -> Vec<DesignStep> {
        let cls = &self.classification;
        let mut ltb = DesignStep::new(7, "Lateral-Torsional Buckling (§6.3.2.3)", self.ltb_ok)
            .with_utilisation(self.ltb_util)
            .detail("curve_LT", self.ltb_curve.letter())
            .detail("segments", self.ltb_segments.len());
        if let Some(seg) = self.governing_ltb_segment() {
            ltb = ltb
                .detail("Mcr_kNm", seg.mcr_knm)
                .detail("C1", seg.c1)
                .detail("lambda_LT", seg.lambda_lt)
                .detail("chi_LT", seg.chi_lt)
                .detail("chi_LT_mod", seg.chi_lt_mod)
                .detail("Mb_Rd_kNm", seg.mb_rd_knm);
        }

        vec![
            DesignStep::new(1, "Yield Strength (Table 3.1)", true)
                .detail("fy_MPa", self.fy_mpa)
                .detail("epsilon", self.epsilon),
            DesignStep::new(2, "Cross-Section Classification (Table 5.2)", cls.section_class <= 3)
                .detail("section_class", cls.section_class)
                .detail("web_class", cls.web_class)
                .detail("flange_class", cls.flange_class)
                .detail("c_web", cls.c_web_mm)
                .detail("ct_web", cls.ct_web)
                .detail("c_flange", cls.c_flange_mm)
                .detail("ct_flange", cls.ct_flange),
            DesignStep::new(3, "Bending Resistance (§6.2.5)", self.bending_ok)
                .with_utilisation(self.bending_util)
                .detail("Wy_cm3", mm3_to_cm3(self.w_y_mm3))
                .detail("Mc_Rd_kNm", self.mc_rd_knm),
            DesignStep::new(4, "Shear Resistance (§6.2.6)", self.shear_ok)
                .with_utilisation(self.shear_util)
                .detail("Av_mm2", self.av_mm2)
                .detail("Vpl_Rd_kN", self.vpl_rd_kn),
            DesignStep::new(5, "Shear Buckling (§6.2.7)", self.shear_buckling_ok)
                .detail("hw_tw", self.hw_tw)
                .detail("hw_tw_limit", self.hw_tw_limit),
            DesignStep::new(6, "Combined Bending + Shear (§6.2.8)", self.combined_ok)
                .with_utilisation(self.combined_util)
                .detail("low_shear", self.low_shear)
                .detail("rho", self.rho)
                .detail("Mv_Rd_kNm", self.mv_rd_knm),
            ltb,
            DesignStep::new(8, "Serviceability (Deflection)", self.deflection_ok)
                .with_utilisation(self.deflection_util)
                .detail("delta_max_mm", self.delta_max_mm)
                .detail("delta_limit_mm", self.delta_limit_mm)
                .detail("defl_ratio", self.defl_ratio),
        ]
    }
}

/// Check one unrestrained segment under a given moment shape.
#[allow(clippy::too_many_arguments)]
fn check_segment(
    section: &SteelSectionData,
    settings: &DesignSettings,
    curve: LtbCurve,
    w_mm3: f64,
    fy: f64,
    start_m: f64,
    end_m: f64,
    moment_abs_nm: impl Fn(f64) -> f64,
) -> LtbSegment {
    let length_mm = m_to_mm(end_m - start_m);

    let moments: Vec<f64> = LinearForceDistribution::sample_points(start_m, end_m, LTB_SEGMENT_INTERVALS)
        .map(&moment_abs_nm)
        .collect();
    let m_max = moments.iter().copied().fold(0.0, f64::max);
    let m_a = moments[LTB_SEGMENT_INTERVALS / 4];
    let m_b = moments[LTB_SEGMENT_INTERVALS / 2];
    let m_c = moments[3 * LTB_SEGMENT_INTERVALS / 4];

    let c1 = c1_quarter_point(m_max, m_a, m_b, m_c);
    let kc = 1.0 / c1.sqrt();

    let mcr = elastic_critical_moment(
        c1,
        settings.e_mpa,
        settings.g_mpa,
        section.iz_mm4(),
        section.it_mm4(),
        section.iw_mm6(),
        length_mm,
    );
    let lambda_lt = ltb_slenderness(w_mm3, fy, mcr);
    let rf = ltb_reduction_factor(lambda_lt, curve.alpha());
    let f_mod = ltb_modification_factor(kc, lambda_lt);
    let chi_lt_mod = modified_ltb_factor(rf.chi, f_mod);

    let mb_rd = moment_resistance(w_mm3, fy, settings.gamma_m1) * chi_lt_mod;
    let m_ed_nmm = nm_to_nmm(m_max);
    let util = utilisation(m_ed_nmm, mb_rd);

    LtbSegment {
        start_m,
        end_m,
        length_mm,
        m_ed_knm: nmm_to_knm(m_ed_nmm),
        c1,
        kc,
        mcr_knm: nmm_to_knm(mcr),
        lambda_lt,
        phi_lt: rf.phi,
        chi_lt: rf.chi,
        f_mod,
        chi_lt_mod,
        mb_rd_knm: nmm_to_knm(mb_rd),
        utilisation: util,
        ok: util <= 1.0,
    }
}

/// Run the beam check.
///
/// # Returns
///
/// * `Ok(BeamResult)` - Every step populated
/// * `Err(CalcError::UnknownGrade)` - Grade not in the yield strength table
pub fn calculate(input: &BeamInput, settings: &DesignSettings) -> CalcResult<BeamResult> {
    let section = &input.section;
    let grade = SteelGrade::from_str_flexible(&input.grade)?;

    // Step 1 - yield strength
    let fy = grade.yield_strength(section.tf_mm);
    let eps = epsilon(fy);
    log::debug!("{}: fy = {} N/mm², ε = {:.4}", input.label, fy, eps);

    // Design forces (N, N·mm)
    let (m_ed_nmm, v_ed_n) = match &input.forces {
        BeamForces::Explicit { m_ed_knm, v_ed_kn } => (knm_to_nmm(m_ed_knm.abs()), kn_to_n(v_ed_kn.abs())),
        BeamForces::Distribution(dist) => (
            nm_to_nmm(dist.peak_moment_abs(input.span_m)),
            dist.peak_shear_abs(input.span_m),
        ),
    };

    // Step 2 - classification
    let classification = classify_beam(section, eps);
    log::debug!(
        "{}: class {} (web {}, flange {})",
        input.label,
        classification.section_class,
        classification.web_class,
        classification.flange_class
    );

    // Step 3 - bending
    let w_y = bending_modulus(classification.section_class, section.wpl_y_mm3(), section.wel_y_mm3());
    let mc_rd = moment_resistance(w_y, fy, settings.gamma_m0);
    let bending_util = utilisation(m_ed_nmm, mc_rd);
    log::debug!("{}: Mc,Rd = {:.2} kNm, util {:.3}", input.label, nmm_to_knm(mc_rd), bending_util);

    // Step 4 - shear
    let av = shear_area(section);
    let vpl_rd = plastic_shear_resistance(av, fy, settings.gamma_m0);
    let shear_util = utilisation(v_ed_n, vpl_rd);
    log::debug!("{}: Vpl,Rd = {:.2} kN, util {:.3}", input.label, n_to_kn(vpl_rd), shear_util);

    // Step 5 - shear buckling screening, η = 1
    let hw_tw = section.d_mm / section.tw_mm;
    let hw_tw_limit = 72.0 * eps / 1.0;
    let shear_buckling_ok = hw_tw <= hw_tw_limit;
    if !shear_buckling_ok {
        log::warn!("{}: web needs a shear buckling check (d/tw = {:.1})", input.label, hw_tw);
    }

    // Step 6 - bending + shear
    let reduced = shear_reduced_moment(v_ed_n, vpl_rd, w_y, fy, settings.gamma_m0);
    let combined_util = utilisation(m_ed_nmm, reduced.mv_rd_nmm);

    // Step 7 - segment LTB
    let ltb_curve = LtbCurve::for_rolled_i_section(section.h_mm, section.b_mm);
    let restraints = input.restraint_positions();
    let ltb_segments: Vec<LtbSegment> = restraints
        .windows(2)
        .map(|pair| {
            let (start, end) = (pair[0], pair[1]);
            match &input.forces {
                BeamForces::Distribution(dist) => {
                    check_segment(section, settings, ltb_curve, w_y, fy, start, end, |x| dist.moment_at(x).abs())
                }
                BeamForces::Explicit { m_ed_knm, .. } => {
                    let m_nm = knm_to_nm(m_ed_knm.abs());
                    check_segment(section, settings, ltb_curve, w_y, fy, start, end, |_| m_nm)
                }
            }
        })
        .collect();

    let governing_segment = first_max_index(ltb_segments.iter().map(|s| s.utilisation));
    let (ltb_util, ltb_ok) = match governing_segment.and_then(|i| ltb_segments.get(i)) {
        Some(seg) => {
            log::debug!(
                "{}: LTB governed by segment {:.2}-{:.2} m, Mcr = {:.1} kNm, χLT,mod = {:.3}, util {:.3}",
                input.label,
                seg.start_m,
                seg.end_m,
                seg.mcr_knm,
                seg.chi_lt_mod,
                seg.utilisation
            );
            (seg.utilisation, seg.ok)
        }
        None => (0.0, true),
    };

    // Step 8 - deflection
    let delta_max_mm = match (input.max_deflection_mm, &input.forces) {
        (Some(delta), _) => delta,
        (None, BeamForces::Distribution(dist)) => {
            dist.max_deflection_mm(input.span_m, settings.e_mpa, section.iy_mm4(), input.deflection_limit.support())
        }
        (None, BeamForces::Explicit { .. }) => 0.0,
    };
    let defl_ratio = input.deflection_limit.ratio();
    let delta_limit_mm = m_to_mm(input.span_m) / defl_ratio;
    let deflection_util = utilisation(delta_max_mm.abs(), delta_limit_mm);

    let bending_ok = bending_util <= 1.0;
    let shear_ok = shear_util <= 1.0;
    let combined_ok = combined_util <= 1.0;
    let deflection_ok = deflection_util <= 1.0;
    let overall_ok = bending_ok && shear_ok && combined_ok && ltb_ok && deflection_ok;

    Ok(BeamResult {
        fy_mpa: fy,
        epsilon: eps,
        classification,
        m_ed_knm: nmm_to_knm(m_ed_nmm),
        v_ed_kn: n_to_kn(v_ed_n),
        w_y_mm3: w_y,
        mc_rd_knm: nmm_to_knm(mc_rd),
        bending_util,
        bending_ok,
        av_mm2: av,
        vpl_rd_kn: n_to_kn(vpl_rd),
        shear_util,
        shear_ok,
        hw_tw,
        hw_tw_limit,
        shear_buckling_ok,
        low_shear: reduced.low_shear,
        rho: reduced.rho,
        mv_rd_knm: nmm_to_knm(reduced.mv_rd_nmm),
        combined_util,
        combined_ok,
        ltb_curve,
        alpha_lt: ltb_curve.alpha(),
        ltb_segments,
        governing_segment,
        ltb_util,
        ltb_ok,
        deflection_limit: input.deflection_limit,
        defl_ratio,
        delta_max_mm,
        delta_limit_mm,
        deflection_util,
        deflection_ok,
        overall_ok,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::lookup_open;
    use approx::assert_relative_eq;

    fn udl_beam(q_n_per_m: f64) -> BeamInput {
        BeamInput {
            label: "Test Beam".to_string(),
            section: lookup_open("UB 457x191x67").unwrap(),
            grade: "S275".to_string(),
            span_m: 6.0,
            forces: BeamForces::Distribution(LinearForceDistribution::simply_supported_udl(q_n_per_m, 6.0)),
            restraint_positions_m: vec![],
            deflection_limit: DeflectionLimitType::Other,
            max_deflection_mm: None,
        }
    }

    #[test]
    fn test_bending_resistance() {
        let result = calculate(&udl_beam(30_000.0), &DesignSettings::default()).unwrap();
        assert_eq!(result.fy_mpa, 275.0);
        assert_eq!(result.classification.section_class, 1);
        // Wpl,y·fy = 1470e3 · 275 = 404.25 kNm
        assert_relative_eq!(result.mc_rd_knm, 404.25, epsilon = 1e-9);
        assert_relative_eq!(result.m_ed_knm, 135.0, epsilon = 1e-9);
        assert_relative_eq!(result.v_ed_kn, 90.0, epsilon = 1e-9);
        assert!(result.bending_ok);
        assert!(result.low_shear);
        assert_eq!(result.mv_rd_knm, result.mc_rd_knm);
    }

    #[test]
    fn test_default_restraints_single_segment() {
        let result = calculate(&udl_beam(30_000.0), &DesignSettings::default()).unwrap();
        assert_eq!(result.ltb_segments.len(), 1);
        assert_eq!(result.governing_segment, Some(0));
        let seg = &result.ltb_segments[0];
        assert_eq!(seg.start_m, 0.0);
        assert_eq!(seg.end_m, 6.0);
        // parabolic moment: C1 = 12.5/11 before the 1.0 floor
        assert_relative_eq!(seg.c1, 12.5 / 11.0, epsilon = 1e-9);
        assert_eq!(result.ltb_curve, LtbCurve::C);
    }

    #[test]
    fn test_restraints_sorted_and_deduplicated() {
        let mut input = udl_beam(30_000.0);
        input.restraint_positions_m = vec![6.0, 3.0, 0.0, 3.0, 7.5, -1.0];
        assert_eq!(input.restraint_positions(), vec![0.0, 3.0, 6.0]);
        let result = calculate(&input, &DesignSettings::default()).unwrap();
        assert_eq!(result.ltb_segments.len(), 2);
        // symmetric loading: both halves equal, first one governs
        assert_relative_eq!(
            result.ltb_segments[0].utilisation,
            result.ltb_segments[1].utilisation,
            max_relative = 1e-9
        );
        assert_eq!(result.governing_segment, Some(0));
    }

    #[test]
    fn test_uniform_moment_segment_c1_is_one() {
        let mut input = udl_beam(0.0);
        input.forces = BeamForces::Distribution(LinearForceDistribution {
            shear_at_start_n: 0.0,
            moment_at_start_nm: 100_000.0,
            udl_n_per_m: 0.0,
        });
        let result = calculate(&input, &DesignSettings::default()).unwrap();
        assert_eq!(result.ltb_segments.len(), 1);
        assert_relative_eq!(result.ltb_segments[0].c1, 1.0, epsilon = 1e-12);
        assert_relative_eq!(result.ltb_segments[0].kc, 1.0, epsilon = 1e-12);
        assert_relative_eq!(result.ltb_segments[0].f_mod, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_explicit_forces_use_uniform_moment() {
        let mut input = udl_beam(0.0);
        input.forces = BeamForces::Explicit {
            m_ed_knm: -150.0,
            v_ed_kn: 40.0,
        };
        input.restraint_positions_m = vec![2.0, 4.0];
        let result = calculate(&input, &DesignSettings::default()).unwrap();
        assert_relative_eq!(result.m_ed_knm, 150.0);
        assert_eq!(result.ltb_segments.len(), 3);
        for seg in &result.ltb_segments {
            assert_relative_eq!(seg.c1, 1.0, epsilon = 1e-12);
            assert_relative_eq!(seg.m_ed_knm, 150.0, epsilon = 1e-9);
        }
        // no analysis deflection supplied
        assert_eq!(result.delta_max_mm, 0.0);
        assert!(result.deflection_ok);
    }

    #[test]
    fn test_deflection_limits() {
        assert_eq!(DeflectionLimitType::Cantilever.ratio(), 180.0);
        assert_eq!(DeflectionLimitType::Brittle.ratio(), 360.0);
        assert_eq!(DeflectionLimitType::Other.ratio(), 200.0);
        assert_eq!(DeflectionLimitType::from_str_flexible("BRITTLE"), DeflectionLimitType::Brittle);
        assert_eq!(DeflectionLimitType::from_str_flexible("floor"), DeflectionLimitType::Other);

        let mut input = udl_beam(30_000.0);
        input.deflection_limit = DeflectionLimitType::Brittle;
        input.max_deflection_mm = Some(-20.0);
        let result = calculate(&input, &DesignSettings::default()).unwrap();
        assert_relative_eq!(result.delta_limit_mm, 6000.0 / 360.0);
        assert_relative_eq!(result.deflection_util, 20.0 * 360.0 / 6000.0);
        assert!(!result.deflection_ok);
        assert!(!result.overall_ok);
    }

    #[test]
    fn test_high_shear_reduces_moment() {
        let mut input = udl_beam(0.0);
        input.forces = BeamForces::Explicit {
            m_ed_knm: 100.0,
            v_ed_kn: 500.0,
        };
        let result = calculate(&input, &DesignSettings::default()).unwrap();
        assert!(!result.low_shear);
        assert!(result.rho > 0.0);
        assert!(result.mv_rd_knm < result.mc_rd_knm);
        assert!(result.combined_util > result.bending_util);
    }

    #[test]
    fn test_shear_buckling_not_aggregated() {
        let mut input = udl_beam(5_000.0);
        // slender web: d/tw well beyond 72ε
        input.section.tw_mm = 4.0;
        let result = calculate(&input, &DesignSettings::default()).unwrap();
        assert!(!result.shear_buckling_ok);
        assert_eq!(
            result.overall_ok,
            result.bending_ok && result.shear_ok && result.combined_ok && result.ltb_ok && result.deflection_ok
        );
    }

    #[test]
    fn test_zero_span_has_no_segments() {
        let mut input = udl_beam(0.0);
        input.span_m = 0.0;
        input.forces = BeamForces::Explicit {
            m_ed_knm: 0.0,
            v_ed_kn: 0.0,
        };
        let result = calculate(&input, &DesignSettings::default()).unwrap();
        assert!(result.ltb_segments.is_empty());
        assert!(result.ltb_ok);
        assert_eq!(result.ltb_util, 0.0);
        // zero span gives a zero deflection limit
        assert_eq!(result.deflection_util, 999.0);
    }

    #[test]
    fn test_unknown_grade_fails_fast() {
        let mut input = udl_beam(30_000.0);
        input.grade = "S690".to_string();
        let err = calculate(&input, &DesignSettings::default()).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_GRADE");
    }

    #[test]
    fn test_steps() {
        let result = calculate(&udl_beam(30_000.0), &DesignSettings::default()).unwrap();
        let steps = result.steps();
        assert_eq!(steps.len(), 8);
        assert_eq!(steps[0].title, "Yield Strength (Table 3.1)");
        assert_eq!(steps[1].number("section_class"), Some(1.0));
        assert_eq!(steps[2].number("Mc_Rd_kNm"), Some(result.mc_rd_knm));
        assert!(steps[6].number("Mcr_kNm").is_some());
        let numbers: Vec<u32> = steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_serialization() {
        let input = udl_beam(30_000.0);
        let json = serde_json::to_string_pretty(&input).unwrap();
        assert!(json.contains("\"mode\": \"distribution\""));
        let roundtrip: BeamInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
