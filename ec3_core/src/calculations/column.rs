//! # Column Check
//!
//! Verifies a rolled I/H member under axial compression with biaxial bending
//! per EN 1993-1-1 (beam-column design):
//!
//! 1. Yield strength (Table 3.1)
//! 2. Classification under compression plus bending (Table 5.2)
//! 3. Axial resistance (§6.2.4)
//! 4. Bending resistance about both axes (§6.2.5)
//! 5. Shear resistance (§6.2.6)
//! 6. Conservative linear interaction (§6.2.1(7))
//! 7. Reduced plastic moment interaction (§6.2.9.1)
//! 8. Flexural buckling about both axes (§6.3.1)
//! 9. Lateral-torsional buckling, uniform moment (§6.3.2)
//! 10. Combined buckling, Annex A method 1 (§6.3.3)
//!
//! Forces are in kN and kNm, compression positive; buckling lengths in m.
//!
//! ## Example
//!
//! ```rust
//! use ec3_core::calculations::column::{calculate, ColumnInput};
//! use ec3_core::sections::lookup_open;
//! use ec3_core::settings::DesignSettings;
//!
//! let input = ColumnInput {
//!     label: "C-1".to_string(),
//!     section: lookup_open("UC 254x254x73").unwrap(),
//!     grade: "S355".to_string(),
//!     n_ed_kn: 1200.0,
//!     my_ed_knm: 60.0,
//!     mz_ed_knm: 0.0,
//!     v_ed_kn: 30.0,
//!     lcr_y_m: 4.0,
//!     lcr_z_m: 4.0,
//!     psi_y: 0.0,
//!     psi_z: 1.0,
//!     lcr_lt_m: None,
//! };
//!
//! let result = calculate(&input, &DesignSettings::default()).unwrap();
//! assert!(result.nb_rd_kn > 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::buckling::{
    critical_force, elastic_critical_moment, euler_slenderness, flexural_reduction_factor,
    flexural_slenderness, ltb_reduction_factor, ltb_slenderness, rolled_i_flexural_curves,
    torsional_critical_force,
};
use crate::calculations::steps::{governing_check, DesignStep, GoverningCheck};
use crate::classification::{classify_column, OpenClassification};
use crate::errors::CalcResult;
use crate::materials::{epsilon, BucklingCurve, LtbCurve, SteelGrade};
use crate::resistance::{
    axial_resistance, bending_modulus, moment_resistance, plastic_shear_resistance, shear_area,
    utilisation,
};
use crate::sections::SteelSectionData;
use crate::settings::DesignSettings;
use crate::units::{kn_to_n, knm_to_nmm, m_to_mm, n_to_kn, nmm_to_knm};

/// Floor applied to (1 − NEd/Ncr) terms used as divisors
const AMPLIFIER_FLOOR: f64 = 1e-10;

/// Interaction factor reported when its C coefficient is not positive
const INTERACTION_SENTINEL: f64 = 999.0;

fn default_psi() -> f64 {
    1.0
}

/// Input parameters for a column check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "C-1",
///   "section": { "designation": "UC 203x203x46", "...": "..." },
///   "grade": "S355",
///   "n_ed_kn": 800.0,
///   "my_ed_knm": 25.0,
///   "mz_ed_knm": 0.0,
///   "v_ed_kn": 10.0,
///   "lcr_y_m": 3.5,
///   "lcr_z_m": 3.5,
///   "psi_y": 0.0,
///   "psi_z": 1.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInput {
    pub label: String,

    pub section: SteelSectionData,

    pub grade: String,

    /// Axial compression (kN)
    pub n_ed_kn: f64,

    /// Major-axis moment (kNm)
    #[serde(default)]
    pub my_ed_knm: f64,

    /// Minor-axis moment (kNm)
    #[serde(default)]
    pub mz_ed_knm: f64,

    /// Shear (kN)
    #[serde(default)]
    pub v_ed_kn: f64,

    /// Buckling length about y-y (m)
    pub lcr_y_m: f64,

    /// Buckling length about z-z (m)
    pub lcr_z_m: f64,

    /// End moment ratio about y, −1 ≤ ψ ≤ 1 (1 = uniform moment)
    #[serde(default = "default_psi")]
    pub psi_y: f64,

    /// End moment ratio about z
    #[serde(default = "default_psi")]
    pub psi_z: f64,

    /// LTB length (m); the z-z buckling length when absent
    #[serde(default)]
    pub lcr_lt_m: Option<f64>,
}

impl ColumnInput {
    pub fn lcr_lt(&self) -> f64 {
        self.lcr_lt_m.unwrap_or(self.lcr_z_m)
    }
}

/// Annex A (method 1) interaction results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnexAResult {
    pub ncr_y_kn: f64,
    pub ncr_z_kn: f64,
    pub ncr_t_kn: f64,
    pub a_lt: f64,
    pub lambda_bar_0: f64,
    /// λ̄0 limit above which the moment factors account for LTB
    pub lambda_bar_0_limit: f64,
    pub cmy: f64,
    pub cmz: f64,
    pub cmlt: f64,
    pub cyy: f64,
    pub cyz: f64,
    pub czy: f64,
    pub czz: f64,
    pub kyy: f64,
    pub kyz: f64,
    pub kzy: f64,
    pub kzz: f64,
    pub eq6_61: f64,
    pub eq6_62: f64,
    pub combined_buckling_ok: bool,
}

/// Results from a column check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnResult {
    // Step 1
    pub fy_mpa: f64,
    pub epsilon: f64,

    // Step 2
    pub classification: OpenClassification,

    // Step 3
    pub n_rd_kn: f64,

    // Step 4
    pub w_y_mm3: f64,
    pub w_z_mm3: f64,
    pub my_rd_knm: f64,
    pub mz_rd_knm: f64,

    // Step 5
    pub av_mm2: f64,
    pub vpl_rd_kn: f64,
    pub shear_util: f64,
    pub shear_ok: bool,

    // Step 6
    pub conservative_util: f64,
    pub conservative_ok: bool,

    // Step 7
    pub a_w: f64,
    pub mn_y_rd_knm: f64,
    pub mn_z_rd_knm: f64,
    pub alpha_interact: f64,
    pub beta_interact: f64,
    pub alternative_util: f64,
    pub alternative_ok: bool,

    // Step 8
    pub radius_y_mm: f64,
    pub radius_z_mm: f64,
    pub lambda_1: f64,
    pub lambda_bar_y: f64,
    pub lambda_bar_z: f64,
    pub curve_y: BucklingCurve,
    pub curve_z: BucklingCurve,
    pub phi_y: f64,
    pub phi_z: f64,
    pub chi_y: f64,
    pub chi_z: f64,
    pub nb_rd_kn: f64,

    // Step 9
    pub lcr_lt_m: f64,
    pub ltb_curve: LtbCurve,
    pub mcr_knm: f64,
    pub lambda_lt: f64,
    pub phi_lt: f64,
    pub chi_lt: f64,
    pub mb_rd_knm: f64,

    // Step 10
    pub annex_a: AnnexAResult,

    /// Applied axial force, for the buckling check
    pub n_ed_kn: f64,

    pub overall_ok: bool,
}

impl ColumnResult {
    pub fn passes(&self) -> bool {
        self.overall_ok
    }

    /// NEd/Nb,Rd, only defined for a positive buckling resistance
    pub fn flexural_buckling_util(&self) -> Option<f64> {
        (self.nb_rd_kn > 0.0).then(|| self.n_ed_kn / self.nb_rd_kn)
    }

    /// Check with the highest utilisation
    pub fn governing_check(&self) -> Option<GoverningCheck> {
        let mut checks = vec![
            ("shear", self.shear_util),
            ("conservative combined", self.conservative_util),
            ("alternative combined", self.alternative_util),
        ];
        if let Some(util) = self.flexural_buckling_util() {
            checks.push(("flexural buckling", util));
        }
        checks.push(("Eq.6.61", self.annex_a.eq6_61));
        checks.push(("Eq.6.62", self.annex_a.eq6_62));
        governing_check(&checks)
    }

    pub fn max_utilisation(&self) -> f64 {
        self.governing_check().map(|g| g.utilisation).unwrap_or(0.0)
    }

    /// Flatten into the ten reported steps
    pub fn steps(&self) -> Vec<DesignStep> {
        let cls = &self.classification;
        let a = &self.annex_a;
        vec![
            DesignStep::new(1, "Yield Strength (Table 3.1)", true)
                .detail("fy_MPa", self.fy_mpa)
                .detail("epsilon", self.epsilon),
            DesignStep::new(2, "Cross-Section Classification (Table 5.2)", cls.section_class <= 3)
                .detail("section_class", cls.section_class)
                .detail("web_class", cls.web_class)
                .detail("flange_class", cls.flange_class)
                .detail("alpha_web", cls.alpha_web),
            DesignStep::new(3, "Axial Compression Resistance (§6.2.4)", true).detail("NRd_kN", self.n_rd_kn),
            DesignStep::new(4, "Bending Resistance (§6.2.5)", true)
                .detail("My_Rd_kNm", self.my_rd_knm)
                .detail("Mz_Rd_kNm", self.mz_rd_knm),
            DesignStep::new(5, "Shear Resistance (§6.2.6)", self.shear_ok)
                .with_utilisation(self.shear_util)
                .detail("Av_mm2", self.av_mm2)
                .detail("Vpl_Rd_kN", self.vpl_rd_kn),
            DesignStep::new(6, "Conservative Combined (§6.2.1)", self.conservative_ok)
                .with_utilisation(self.conservative_util),
            DesignStep::new(7, "Alternative Combined (§6.2.9.1)", self.alternative_ok)
                .with_utilisation(self.alternative_util)
                .detail("MN_y_Rd_kNm", self.mn_y_rd_knm)
                .detail("MN_z_Rd_kNm", self.mn_z_rd_knm),
            DesignStep::new(8, "Flexural Buckling (§6.3.1)", self.nb_rd_kn > 0.0)
                .detail("chi_y", self.chi_y)
                .detail("chi_z", self.chi_z)
                .detail("lambda_bar_y", self.lambda_bar_y)
                .detail("lambda_bar_z", self.lambda_bar_z)
                .detail("Nb_Rd_kN", self.nb_rd_kn)
                .detail("curve_y", self.curve_y.letter())
                .detail("curve_z", self.curve_z.letter()),
            DesignStep::new(9, "Lateral-Torsional Buckling (§6.3.2)", true)
                .detail("Mcr_kNm", self.mcr_knm)
                .detail("lambda_LT", self.lambda_lt)
                .detail("chi_LT", self.chi_lt)
                .detail("Mb_Rd_kNm", self.mb_rd_knm),
            DesignStep::new(10, "Combined Buckling - Annex A (§6.3.3)", a.combined_buckling_ok)
                .with_utilisation(a.eq6_61.max(a.eq6_62))
                .detail("eq6_61", a.eq6_61)
                .detail("eq6_62", a.eq6_62)
                .detail("Cmy", a.cmy)
                .detail("Cmz", a.cmz)
                .detail("CmLT", a.cmlt)
                .detail("kyy", a.kyy)
                .detail("kyz", a.kyz)
                .detail("kzy", a.kzy)
                .detail("kzz", a.kzz),
        ]
    }
}

/// Equivalent uniform moment factor Cm,0 for linear end moments (Table A.2)
pub fn cm0_linear(psi: f64, n_ed_n: f64, ncr_n: f64) -> f64 {
    0.79 + 0.21 * psi + 0.36 * (psi - 0.33) * n_ed_n / ncr_n
}

/// (1 − NEd/Ncr), or 1 when Ncr is not positive
fn amplifier(n_ed_n: f64, ncr_n: f64) -> f64 {
    if ncr_n > 0.0 {
        1.0 - n_ed_n / ncr_n
    } else {
        1.0
    }
}

/// a / b when b > 0, else 0
fn guarded_ratio(a: f64, b: f64) -> f64 {
    if b > 0.0 {
        a / b
    } else {
        0.0
    }
}

/// Quantities feeding the Annex A interaction, in N and N·mm
struct AnnexAInputs<'a> {
    section: &'a SteelSectionData,
    settings: &'a DesignSettings,
    fy: f64,
    section_class: u8,
    n_ed: f64,
    my_ed: f64,
    mz_ed: f64,
    lcr_y_mm: f64,
    lcr_z_mm: f64,
    lcr_lt_mm: f64,
    psi_y: f64,
    psi_z: f64,
    lambda_bar_y: f64,
    lambda_bar_z: f64,
    chi_y: f64,
    chi_z: f64,
    lambda_lt: f64,
    chi_lt: f64,
}

/// Annex A, method 1 (Tables A.1 and A.2), with C1 = 1
fn annex_a(p: &AnnexAInputs) -> AnnexAResult {
    let s = p.section;
    let e = p.settings.e_mpa;
    let g = p.settings.g_mpa;
    let gamma_m1 = p.settings.gamma_m1;
    let area = s.area_mm2();
    let (wel_y, wpl_y, wel_z, wpl_z) = (s.wel_y_mm3(), s.wpl_y_mm3(), s.wel_z_mm3(), s.wpl_z_mm3());
    let n = p.n_ed;
    let my = p.my_ed.abs();
    let mz = p.mz_ed.abs();

    // Critical forces
    let ncr_y = critical_force(e, s.iy_mm4(), p.lcr_y_mm);
    let ncr_z = critical_force(e, s.iz_mm4(), p.lcr_z_mm);
    let ncr_t = torsional_critical_force(e, g, area, s.iy_mm4(), s.iz_mm4(), s.it_mm4(), s.iw_mm6(), p.lcr_lt_mm);

    // Characteristic resistances
    let n_rk = area * p.fy;
    let my_rk = bending_modulus(p.section_class, wpl_y, wel_y) * p.fy;
    let mz_rk = bending_modulus(p.section_class, wpl_z, wel_z) * p.fy;
    let mpl_y_rd = moment_resistance(wpl_y, p.fy, gamma_m1);
    let mpl_z_rd = moment_resistance(wpl_z, p.fy, gamma_m1);

    let a_lt = (1.0 - s.it_mm4() / s.iy_mm4()).max(0.0);
    let lambda_0 = p.lambda_lt;

    let cmy0 = cm0_linear(p.psi_y, n, ncr_y);
    let cmz0 = cm0_linear(p.psi_z, n, ncr_z);

    let eps_y = if n > 0.0 && wel_y > 0.0 { (my / n) * (area / wel_y) } else { 0.0 };

    let nz = amplifier(n, ncr_z);
    let n_tf = amplifier(n, ncr_t);
    let c1: f64 = 1.0;
    let lambda_0_limit = 0.2 * c1.sqrt() * (nz * n_tf).max(0.0).powf(0.25);

    let (cmy, cmlt) = if lambda_0 <= lambda_0_limit {
        (cmy0, 1.0)
    } else {
        let denom = 1.0 + eps_y * a_lt;
        let cmy = if denom != 0.0 {
            cmy0 + (1.0 - cmy0) * eps_y * a_lt / denom
        } else {
            cmy0
        };
        let nz_fac = nz.max(AMPLIFIER_FLOOR);
        let nt_fac = if ncr_t > 0.0 {
            (1.0 - n / ncr_t).max(AMPLIFIER_FLOOR)
        } else {
            1.0
        };
        (cmy, (cmy * cmy * a_lt / (nz_fac * nt_fac)).max(1.0))
    };
    let cmz = cmz0;

    // Auxiliary terms (Table A.1)
    let my_lt_capacity = p.chi_lt * mpl_y_rd;
    let my_cm_capacity = cmy * p.chi_lt * mpl_y_rd;
    let mz_cm_capacity = cmz * mpl_z_rd;
    let lz4 = p.lambda_bar_z.powi(4);

    let b_lt = 0.5 * a_lt * lambda_0 * lambda_0 * guarded_ratio(my, my_lt_capacity) * guarded_ratio(mz, mpl_z_rd);
    let c_lt = 10.0 * a_lt * lambda_0 * lambda_0 / (5.0 + lz4) * guarded_ratio(my, my_cm_capacity);
    let d_lt = if my_cm_capacity > 0.0 && mz_cm_capacity > 0.0 {
        2.0 * a_lt * lambda_0 / (0.1 + lz4) * my / my_cm_capacity * mz / mz_cm_capacity
    } else {
        0.0
    };
    let e_lt = 1.7 * a_lt * lambda_0 / (0.1 + lz4) * guarded_ratio(my, my_cm_capacity);

    let npl = guarded_ratio(n, n_rk / gamma_m1);
    let wy = if wel_y > 0.0 { (wpl_y / wel_y).min(1.5) } else { 1.0 };
    let wz = if wel_z > 0.0 { (wpl_z / wel_z).min(1.5) } else { 1.0 };
    let lambda_max = p.lambda_bar_y.max(p.lambda_bar_z);

    let cyy = (1.0
        + (wy - 1.0)
            * ((2.0 - 1.6 / wy * cmy * cmy * lambda_max - 1.6 / wy * cmy * cmy * lambda_max * lambda_max) * npl
                - b_lt))
        .max(if wpl_y > 0.0 { wel_y / wpl_y } else { 1.0 });

    let cyz = (1.0 + (wz - 1.0) * ((2.0 - 14.0 * cmz * cmz * lambda_max * lambda_max / wz.powi(5)) * npl - c_lt))
        .max(if wpl_z > 0.0 && wy > 0.0 {
            0.6 * (wz / wy).sqrt() * wel_z / wpl_z
        } else {
            1.0
        });

    let czy = (1.0 + (wy - 1.0) * ((2.0 - 14.0 * cmy * cmy * lambda_max * lambda_max / wy.powi(5)) * npl - d_lt))
        .max(if wpl_y > 0.0 && wz > 0.0 {
            0.6 * (wy / wz).sqrt() * wel_y / wpl_y
        } else {
            1.0
        });

    let czz = (1.0
        + (wz - 1.0)
            * ((2.0 - 1.6 / wz * cmz * cmz * lambda_max - 1.6 / wz * cmz * cmz * lambda_max * lambda_max) * npl
                - e_lt))
        .max(if wpl_z > 0.0 { wel_z / wpl_z } else { 1.0 });

    // μ factors
    let ny = amplifier(n, ncr_y);
    let mu = |amp: f64, chi: f64, ncr: f64| {
        let denom = 1.0 - chi * n / ncr;
        if ncr > 0.0 && denom != 0.0 {
            amp / denom
        } else {
            1.0
        }
    };
    let mu_y = mu(ny, p.chi_y, ncr_y);
    let mu_z = mu(nz, p.chi_z, ncr_z);

    let ny_fac = ny.max(AMPLIFIER_FLOOR);
    let nz_fac = nz.max(AMPLIFIER_FLOOR);

    let kyy = if cyy > 0.0 { cmy * cmlt * mu_y / ny_fac / cyy } else { INTERACTION_SENTINEL };
    let kyz = if cyz > 0.0 && wy > 0.0 {
        cmz * mu_y / nz_fac / cyz * 0.6 * (wz / wy).sqrt()
    } else {
        INTERACTION_SENTINEL
    };
    let kzy = if czy > 0.0 && wz > 0.0 {
        cmy * cmlt * mu_z / ny_fac / czy * 0.6 * (wy / wz).sqrt()
    } else {
        INTERACTION_SENTINEL
    };
    let kzz = if czz > 0.0 { cmz * mu_z / nz_fac / czz } else { INTERACTION_SENTINEL };

    // Interaction equations; terms with no capacity drop out
    let chi_y_nrk = p.chi_y * n_rk / gamma_m1;
    let chi_z_nrk = p.chi_z * n_rk / gamma_m1;
    let chi_lt_myrk = p.chi_lt * my_rk / gamma_m1;
    let mzrk = mz_rk / gamma_m1;

    let eq6_61 = guarded_ratio(n, chi_y_nrk) + guarded_ratio(kyy * my, chi_lt_myrk) + guarded_ratio(kyz * mz, mzrk);
    let eq6_62 = guarded_ratio(n, chi_z_nrk) + guarded_ratio(kzy * my, chi_lt_myrk) + guarded_ratio(kzz * mz, mzrk);

    AnnexAResult {
        ncr_y_kn: n_to_kn(ncr_y),
        ncr_z_kn: n_to_kn(ncr_z),
        ncr_t_kn: n_to_kn(ncr_t),
        a_lt,
        lambda_bar_0: lambda_0,
        lambda_bar_0_limit: lambda_0_limit,
        cmy,
        cmz,
        cmlt,
        cyy,
        cyz,
        czy,
        czz,
        kyy,
        kyz,
        kzy,
        kzz,
        eq6_61,
        eq6_62,
        combined_buckling_ok: eq6_61 <= 1.0 && eq6_62 <= 1.0,
    }
}

/// Run the column check.
///
/// # Returns
///
/// * `Ok(ColumnResult)` - Every step populated
/// * `Err(CalcError::UnknownGrade)` - Grade not in the yield strength table
pub fn calculate(input: &ColumnInput, settings: &DesignSettings) -> CalcResult<ColumnResult> {
    let s = &input.section;
    let grade = SteelGrade::from_str_flexible(&input.grade)?;

    let n_ed = kn_to_n(input.n_ed_kn);
    let my_ed = knm_to_nmm(input.my_ed_knm);
    let mz_ed = knm_to_nmm(input.mz_ed_knm);
    let v_ed = kn_to_n(input.v_ed_kn);
    let area = s.area_mm2();

    // Step 1
    let fy = grade.yield_strength(s.tf_mm);
    let eps = epsilon(fy);

    // Step 2
    let classification = classify_column(s, fy, eps, n_ed, my_ed);
    let class = classification.section_class;
    log::debug!(
        "{}: fy = {} N/mm², α = {:.3}, class {}",
        input.label,
        fy,
        classification.alpha_web,
        class
    );

    // Step 3
    let n_rd = axial_resistance(area, fy, settings.gamma_m0);

    // Step 4
    let w_y = bending_modulus(class, s.wpl_y_mm3(), s.wel_y_mm3());
    let w_z = bending_modulus(class, s.wpl_z_mm3(), s.wel_z_mm3());
    let my_rd = moment_resistance(w_y, fy, settings.gamma_m0);
    let mz_rd = moment_resistance(w_z, fy, settings.gamma_m0);

    // Step 5
    let av = shear_area(s);
    let vpl_rd = plastic_shear_resistance(av, fy, settings.gamma_m0);
    let shear_util = utilisation(v_ed.abs(), vpl_rd);

    // Step 6
    let conservative_util =
        guarded_ratio(n_ed, n_rd) + guarded_ratio(my_ed.abs(), my_rd) + guarded_ratio(mz_ed.abs(), mz_rd);
    log::debug!(
        "{}: NRd = {:.1} kN, My,Rd = {:.1} kNm, Mz,Rd = {:.1} kNm, conservative util {:.3}",
        input.label,
        n_to_kn(n_rd),
        nmm_to_knm(my_rd),
        nmm_to_knm(mz_rd),
        conservative_util
    );

    // Step 7
    let n = guarded_ratio(n_ed, n_rd);
    let (a_w, mn_y_rd, mn_z_rd, alpha_interact, beta_interact, alternative_util) = if class <= 2 {
        let a_w = ((area - 2.0 * s.b_mm * s.tf_mm) / area).min(0.5);
        let mn_y = (my_rd * (1.0 - n) / (1.0 - 0.5 * a_w)).min(my_rd);
        let mn_z = if n <= a_w {
            mz_rd
        } else {
            mz_rd * (1.0 - ((n - a_w) / (1.0 - a_w)).powi(2))
        };
        let alpha = 2.0;
        let beta = (5.0 * n).max(1.0);
        let mut interaction = 0.0;
        if mn_y > 0.0 {
            interaction += (my_ed.abs() / mn_y).powf(alpha);
        }
        if mn_z > 0.0 {
            interaction += (mz_ed.abs() / mn_z).powf(beta);
        }
        (a_w, mn_y, mn_z, alpha, beta, n.max(interaction))
    } else {
        (0.0, my_rd, mz_rd, 2.0, 1.0, conservative_util)
    };

    // Step 8
    let radius_y = s.radius_y_mm();
    let radius_z = s.radius_z_mm();
    let lambda_1 = euler_slenderness(eps);
    let lcr_y_mm = m_to_mm(input.lcr_y_m);
    let lcr_z_mm = m_to_mm(input.lcr_z_m);
    let lambda_bar_y = flexural_slenderness(lcr_y_mm, radius_y, lambda_1);
    let lambda_bar_z = flexural_slenderness(lcr_z_mm, radius_z, lambda_1);
    let (curve_y, curve_z) = rolled_i_flexural_curves(s.h_mm, s.b_mm, s.tf_mm);
    let rf_y = flexural_reduction_factor(lambda_bar_y, curve_y.alpha());
    let rf_z = flexural_reduction_factor(lambda_bar_z, curve_z.alpha());
    let nb_rd = rf_y.chi.min(rf_z.chi) * area * fy / settings.gamma_m1;
    log::debug!(
        "{}: λ̄y = {:.3} ({}), λ̄z = {:.3} ({}), Nb,Rd = {:.1} kN",
        input.label,
        lambda_bar_y,
        curve_y,
        lambda_bar_z,
        curve_z,
        n_to_kn(nb_rd)
    );

    // Step 9
    let lcr_lt_m = input.lcr_lt();
    let lcr_lt_mm = m_to_mm(lcr_lt_m);
    let ltb_curve = LtbCurve::for_rolled_i_section(s.h_mm, s.b_mm);
    let mcr = elastic_critical_moment(1.0, settings.e_mpa, settings.g_mpa, s.iz_mm4(), s.it_mm4(), s.iw_mm6(), lcr_lt_mm);
    let lambda_lt = ltb_slenderness(w_y, fy, mcr);
    let rf_lt = ltb_reduction_factor(lambda_lt, ltb_curve.alpha());
    let mb_rd = rf_lt.chi * moment_resistance(w_y, fy, settings.gamma_m1);

    // Step 10
    let annex = annex_a(&AnnexAInputs {
        section: s,
        settings,
        fy,
        section_class: class,
        n_ed,
        my_ed,
        mz_ed,
        lcr_y_mm,
        lcr_z_mm,
        lcr_lt_mm,
        psi_y: input.psi_y,
        psi_z: input.psi_z,
        lambda_bar_y,
        lambda_bar_z,
        chi_y: rf_y.chi,
        chi_z: rf_z.chi,
        lambda_lt,
        chi_lt: rf_lt.chi,
    });
    log::debug!(
        "{}: Annex A Cmy = {:.3}, CmLT = {:.3}, eq 6.61 = {:.3}, eq 6.62 = {:.3}",
        input.label,
        annex.cmy,
        annex.cmlt,
        annex.eq6_61,
        annex.eq6_62
    );

    let shear_ok = shear_util <= 1.0;
    let conservative_ok = conservative_util <= 1.0;
    let alternative_ok = alternative_util <= 1.0;
    let overall_ok = shear_ok
        && conservative_ok
        && alternative_ok
        && nb_rd >= n_ed
        && rf_lt.chi > 0.0
        && annex.combined_buckling_ok;

    Ok(ColumnResult {
        fy_mpa: fy,
        epsilon: eps,
        classification,
        n_rd_kn: n_to_kn(n_rd),
        w_y_mm3: w_y,
        w_z_mm3: w_z,
        my_rd_knm: nmm_to_knm(my_rd),
        mz_rd_knm: nmm_to_knm(mz_rd),
        av_mm2: av,
        vpl_rd_kn: n_to_kn(vpl_rd),
        shear_util,
        shear_ok,
        conservative_util,
        conservative_ok,
        a_w,
        mn_y_rd_knm: nmm_to_knm(mn_y_rd),
        mn_z_rd_knm: nmm_to_knm(mn_z_rd),
        alpha_interact,
        beta_interact,
        alternative_util,
        alternative_ok,
        radius_y_mm: radius_y,
        radius_z_mm: radius_z,
        lambda_1,
        lambda_bar_y,
        lambda_bar_z,
        curve_y,
        curve_z,
        phi_y: rf_y.phi,
        phi_z: rf_z.phi,
        chi_y: rf_y.chi,
        chi_z: rf_z.chi,
        nb_rd_kn: n_to_kn(nb_rd),
        lcr_lt_m,
        ltb_curve,
        mcr_knm: nmm_to_knm(mcr),
        lambda_lt,
        phi_lt: rf_lt.phi,
        chi_lt: rf_lt.chi,
        mb_rd_knm: nmm_to_knm(mb_rd),
        annex_a: annex,
        n_ed_kn: input.n_ed_kn,
        overall_ok,
    })
}
