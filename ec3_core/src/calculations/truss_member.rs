//! # Truss Member Check
//!
//! Axially loaded SHS/RHS members per EN 1993-1-1:
//!
//! 1. Yield and tensile strength (Table 3.1)
//! 2. Classification of the internal walls in compression (Table 5.2)
//! 3. Cross-section resistance (§6.2.4)
//! 4. Flexural buckling in and out of plane (§6.3.1)
//! 5. Compression check
//! 6. Tension resistance, gross and net section (§6.2.3)
//! 7. Tension check
//!
//! Demands are positive magnitudes in kN. A member carries whichever of the
//! two is non-zero; a zero demand always passes.

use serde::{Deserialize, Serialize};

use crate::buckling::{euler_slenderness, flexural_reduction_factor, flexural_slenderness};
use crate::calculations::steps::{governing_check, DesignStep, GoverningCheck};
use crate::classification::{classify_hollow, HollowClassification};
use crate::errors::CalcResult;
use crate::materials::{epsilon, BucklingCurve, SteelGrade};
use crate::resistance::{axial_resistance, demand_utilisation};
use crate::sections::HollowSectionData;
use crate::settings::DesignSettings;
use crate::units::{m_to_mm, n_to_kn, SquareCentimetres, SquareMillimetres};

fn default_curve() -> String {
    BucklingCurve::default().letter().to_string()
}

/// Input parameters for a truss member check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "D-3",
///   "section": { "designation": "SHS 100x100x5", "...": "..." },
///   "grade": "S355",
///   "compression_kn": 150.0,
///   "tension_kn": 0.0,
///   "lcr_in_plane_m": 2.7,
///   "lcr_out_of_plane_m": 3.0,
///   "buckling_curve": "a"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrussMemberInput {
    pub label: String,

    pub section: HollowSectionData,

    pub grade: String,

    /// Compression demand (kN, ≥ 0)
    #[serde(default)]
    pub compression_kn: f64,

    /// Tension demand (kN, ≥ 0)
    #[serde(default)]
    pub tension_kn: f64,

    /// In-plane buckling length (m), uses iy
    pub lcr_in_plane_m: f64,

    /// Out-of-plane buckling length (m), uses iz
    pub lcr_out_of_plane_m: f64,

    /// Flexural buckling curve: "a" for hot-finished, "c" for cold-formed
    #[serde(default = "default_curve")]
    pub buckling_curve: String,

    /// Bolt holes at the connections
    #[serde(default)]
    pub has_holes: bool,

    /// Net area at the holes (cm²), only used with `has_holes`
    #[serde(default)]
    pub net_area_cm2: f64,
}

/// Split a signed axial force (kN, tension positive) into
/// `(compression_kn, tension_kn)` magnitudes.
pub fn split_axial_force(axial_kn: f64) -> (f64, f64) {
    if axial_kn < 0.0 {
        (-axial_kn, 0.0)
    } else {
        (0.0, axial_kn)
    }
}

impl TrussMemberInput {
    /// Set both demands from a signed axial force (kN, tension positive)
    pub fn with_axial_force(mut self, axial_kn: f64) -> Self {
        let (compression, tension) = split_axial_force(axial_kn);
        self.compression_kn = compression;
        self.tension_kn = tension;
        self
    }

    pub fn net_area_mm2(&self) -> f64 {
        SquareMillimetres::from(SquareCentimetres(self.net_area_cm2)).0
    }
}

/// Results from a truss member check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrussMemberResult {
    // Step 1
    pub fy_mpa: f64,
    pub fu_mpa: f64,
    pub epsilon: f64,

    // Step 2
    pub classification: HollowClassification,

    // Step 3
    pub n_rd_kn: f64,

    // Step 4
    pub lambda_1: f64,
    pub lambda_bar_in_plane: f64,
    pub lambda_bar_out_of_plane: f64,
    pub lambda_bar: f64,
    pub curve: BucklingCurve,
    pub phi: f64,
    pub chi: f64,
    pub nb_rd_kn: f64,

    // Step 5
    pub compression_util: f64,
    pub compression_ok: bool,

    // Step 6
    /// Net-section resistance, when holes are declared
    pub nu_rd_kn: Option<f64>,
    pub nt_rd_kn: f64,

    // Step 7
    pub tension_util: f64,
    pub tension_ok: bool,

    pub overall_ok: bool,
}

impl TrussMemberResult {
    pub fn passes(&self) -> bool {
        self.overall_ok
    }

    pub fn governing_check(&self) -> Option<GoverningCheck> {
        governing_check(&[("compression", self.compression_util), ("tension", self.tension_util)])
    }

    pub fn max_utilisation(&self) -> f64 {
        self.compression_util.max(self.tension_util)
    }

    pub fn steps(&self) -> Vec<DesignStep> {
        let mut tension_step = DesignStep::new(6, "Tension Resistance (§6.2.3)", true).detail("Nt_Rd_kN", self.nt_rd_kn);
        if let Some(nu) = self.nu_rd_kn {
            tension_step = tension_step.detail("Nu_Rd_kN", nu);
        }

        vec![
            DesignStep::new(1, "Yield Strength (Table 3.1)", true)
                .detail("fy_MPa", self.fy_mpa)
                .detail("fu_MPa", self.fu_mpa)
                .detail("epsilon", self.epsilon),
            DesignStep::new(2, "Cross-Section Classification", self.classification.section_class <= 3)
                .detail("section_class", self.classification.section_class)
                .detail("ct", self.classification.ct),
            DesignStep::new(3, "Cross-Section Resistance (§6.2.4)", true).detail("NRd_kN", self.n_rd_kn),
            DesignStep::new(4, "Flexural Buckling (§6.3.1)", true)
                .detail("chi", self.chi)
                .detail("Nb_Rd_kN", self.nb_rd_kn)
                .detail("lambda_bar", self.lambda_bar)
                .detail("curve", self.curve.letter()),
            DesignStep::new(5, "Compression Check", self.compression_ok).with_utilisation(self.compression_util),
            tension_step,
            DesignStep::new(7, "Tension Check", self.tension_ok).with_utilisation(self.tension_util),
        ]
    }
}

/// Run the truss member check.
///
/// # Returns
///
/// * `Ok(TrussMemberResult)` - Every step populated
/// * `Err(CalcError::UnknownGrade)` - Grade not in the yield strength table
/// * `Err(CalcError::InvalidInput)` - Unrecognised buckling curve
pub fn calculate(input: &TrussMemberInput, settings: &DesignSettings) -> CalcResult<TrussMemberResult> {
    let s = &input.section;
    let grade = SteelGrade::from_str_flexible(&input.grade)?;
    let curve = BucklingCurve::from_str_flexible(&input.buckling_curve)?;
    let area = s.area_mm2();

    // Step 1
    let fy = grade.yield_strength(s.t_mm);
    let fu = grade.tensile_strength();
    let eps = epsilon(fy);

    // Step 2
    let classification = classify_hollow(s, eps);

    // Step 3
    let n_rd = axial_resistance(area, fy, settings.gamma_m0);

    // Step 4
    let lambda_1 = euler_slenderness(eps);
    let lambda_ip = flexural_slenderness(m_to_mm(input.lcr_in_plane_m), s.radius_y_mm, lambda_1);
    let lambda_oop = flexural_slenderness(m_to_mm(input.lcr_out_of_plane_m), s.radius_z_mm, lambda_1);
    let lambda_bar = lambda_ip.max(lambda_oop);
    let rf = flexural_reduction_factor(lambda_bar, curve.alpha());
    let nb_rd = rf.chi * area * fy / settings.gamma_m1;
    log::debug!(
        "{}: class {}, λ̄ = {:.3} (curve {}), χ = {:.3}, Nb,Rd = {:.1} kN",
        input.label,
        classification.section_class,
        lambda_bar,
        curve,
        rf.chi,
        n_to_kn(nb_rd)
    );

    // Step 5
    let compression_util = demand_utilisation(input.compression_kn, n_to_kn(nb_rd));

    // Step 6
    let nu_rd = (input.has_holes && input.net_area_cm2 > 0.0)
        .then(|| 0.9 * input.net_area_mm2() * fu / settings.gamma_m2);
    let nt_rd = match nu_rd {
        Some(nu) => n_rd.min(nu),
        None => n_rd,
    };

    // Step 7
    let tension_util = demand_utilisation(input.tension_kn, n_to_kn(nt_rd));

    let compression_ok = compression_util <= 1.0;
    let tension_ok = tension_util <= 1.0;

    Ok(TrussMemberResult {
        fy_mpa: fy,
        fu_mpa: fu,
        epsilon: eps,
        classification,
        n_rd_kn: n_to_kn(n_rd),
        lambda_1,
        lambda_bar_in_plane: lambda_ip,
        lambda_bar_out_of_plane: lambda_oop,
        lambda_bar,
        curve,
        phi: rf.phi,
        chi: rf.chi,
        nb_rd_kn: n_to_kn(nb_rd),
        compression_util,
        compression_ok,
        nu_rd_kn: nu_rd.map(n_to_kn),
        nt_rd_kn: n_to_kn(nt_rd),
        tension_util,
        tension_ok,
        overall_ok: compression_ok && tension_ok,
    })
}
