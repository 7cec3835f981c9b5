//! # Structure Design
//!
//! Batch checking of every member of a structure. Members are described by
//! role, section designation and the internal forces from an external
//! analysis; buckling lengths, ψ and truss demands are derived here when
//! not given explicitly.
//!
//! ```text
//! StructureDesign
//! ├── name, steel_grade
//! ├── settings: DesignSettings
//! └── members: Vec<StructureMember>
//!         └── design: Beam | Column | TrussMember
//! ```
//!
//! ## Example
//!
//! ```rust
//! use ec3_core::structure::{StructureDesign, StructureMember, TrussMemberDesign};
//!
//! let mut structure = StructureDesign::new("Roof truss");
//! structure.add_member(StructureMember::truss_member(
//!     "D1",
//!     "SHS 80x80x4",
//!     2.5,
//!     TrussMemberDesign::from_axial_force(-120.0),
//! ));
//!
//! let results = structure.design_all().unwrap();
//! assert_eq!(results.elements.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::truss_member::split_axial_force;
use crate::calculations::{
    BeamForces, BeamInput, CalculationItem, CalculationResult, ColumnInput, DeflectionLimitType, DesignStep,
    MemberRole, TrussMemberInput,
};
use crate::effective_length::{buckling_length, column_psi, truss_buckling_lengths, MemberEnd, SwayMode};
use crate::errors::CalcResult;
use crate::materials::BucklingCurve;
use crate::sections::{SectionCatalog, BUILTIN_CATALOG};
use crate::settings::DesignSettings;

fn default_curve() -> String {
    BucklingCurve::default().letter().to_string()
}

/// Beam forces and serviceability data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamDesign {
    pub forces: BeamForces,

    /// Lateral restraint positions along the span (m)
    #[serde(default)]
    pub restraint_positions_m: Vec<f64>,

    #[serde(default)]
    pub deflection_limit: DeflectionLimitType,

    /// Deflection from analysis (mm), derived from the forces when absent
    #[serde(default)]
    pub max_deflection_mm: Option<f64>,
}

/// Column forces and end conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDesign {
    /// Axial compression (kN)
    pub n_ed_kn: f64,

    /// Signed major-axis moment at the start node (kNm)
    #[serde(default)]
    pub m_start_knm: f64,

    /// Signed major-axis moment at the end node (kNm)
    #[serde(default)]
    pub m_end_knm: f64,

    #[serde(default)]
    pub mz_ed_knm: f64,

    #[serde(default)]
    pub v_ed_kn: f64,

    #[serde(default)]
    pub sway_mode: SwayMode,

    #[serde(default)]
    pub start: MemberEnd,

    #[serde(default)]
    pub end: MemberEnd,

    /// Buckling length overrides (m)
    #[serde(default)]
    pub lcr_y_m: Option<f64>,
    #[serde(default)]
    pub lcr_z_m: Option<f64>,
    #[serde(default)]
    pub lcr_lt_m: Option<f64>,
}

/// Truss member force and buckling data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrussMemberDesign {
    /// Signed axial force (kN, tension positive)
    pub axial_force_kn: f64,

    /// Buckling length overrides (m)
    #[serde(default)]
    pub lcr_in_plane_m: Option<f64>,
    #[serde(default)]
    pub lcr_out_of_plane_m: Option<f64>,

    #[serde(default = "default_curve")]
    pub buckling_curve: String,

    #[serde(default)]
    pub has_holes: bool,

    /// Net area at the holes (cm²)
    #[serde(default)]
    pub net_area_cm2: f64,
}

impl TrussMemberDesign {
    pub fn from_axial_force(axial_force_kn: f64) -> Self {
        TrussMemberDesign {
            axial_force_kn,
            lcr_in_plane_m: None,
            lcr_out_of_plane_m: None,
            buckling_curve: default_curve(),
            has_holes: false,
            net_area_cm2: 0.0,
        }
    }
}

/// Role-specific member data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum MemberDesign {
    Beam(BeamDesign),
    Column(ColumnDesign),
    TrussMember(TrussMemberDesign),
}

impl MemberDesign {
    pub fn role(&self) -> MemberRole {
        match self {
            MemberDesign::Beam(_) => MemberRole::Beam,
            MemberDesign::Column(_) => MemberRole::Column,
            MemberDesign::TrussMember(_) => MemberRole::TrussMember,
        }
    }
}

/// One member of a structure.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "C1",
///   "designation": "UC 254x254x73",
///   "length_m": 4.0,
///   "design": {
///     "role": "column",
///     "n_ed_kn": 1200.0,
///     "m_start_knm": 40.0,
///     "m_end_knm": -20.0,
///     "start": { "support": "pinned" },
///     "end": { "connection": "continuous" }
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureMember {
    pub name: String,

    pub designation: String,

    /// Grade override; the structure grade applies when absent
    #[serde(default)]
    pub grade: Option<String>,

    /// Member length between nodes (m)
    pub length_m: f64,

    pub design: MemberDesign,
}

impl StructureMember {
    pub fn beam(name: impl Into<String>, designation: impl Into<String>, span_m: f64, design: BeamDesign) -> Self {
        Self::with_design(name, designation, span_m, MemberDesign::Beam(design))
    }

    pub fn column(
        name: impl Into<String>,
        designation: impl Into<String>,
        length_m: f64,
        design: ColumnDesign,
    ) -> Self {
        Self::with_design(name, designation, length_m, MemberDesign::Column(design))
    }

    pub fn truss_member(
        name: impl Into<String>,
        designation: impl Into<String>,
        length_m: f64,
        design: TrussMemberDesign,
    ) -> Self {
        Self::with_design(name, designation, length_m, MemberDesign::TrussMember(design))
    }

    fn with_design(name: impl Into<String>, designation: impl Into<String>, length_m: f64, design: MemberDesign) -> Self {
        StructureMember {
            name: name.into(),
            designation: designation.into(),
            grade: None,
            length_m,
            design,
        }
    }

    /// Use a grade other than the structure's
    pub fn with_grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = Some(grade.into());
        self
    }

    /// Build the check input, resolving the section in `catalog`.
    ///
    /// Fails with `SectionNotFound` when the designation is not in the
    /// catalog for the member's section family.
    pub fn to_item(&self, default_grade: &str, catalog: &SectionCatalog) -> CalcResult<CalculationItem> {
        let grade = self.grade.clone().unwrap_or_else(|| default_grade.to_string());
        let label = self.name.clone();

        Ok(match &self.design {
            MemberDesign::Beam(b) => CalculationItem::Beam(BeamInput {
                label,
                section: catalog.open(&self.designation)?.clone(),
                grade,
                span_m: self.length_m,
                forces: b.forces.clone(),
                restraint_positions_m: b.restraint_positions_m.clone(),
                deflection_limit: b.deflection_limit,
                max_deflection_mm: b.max_deflection_mm,
            }),
            MemberDesign::Column(c) => {
                let auto_length = buckling_length(self.length_m, c.sway_mode, &c.start, &c.end);
                CalculationItem::Column(ColumnInput {
                    label,
                    section: catalog.open(&self.designation)?.clone(),
                    grade,
                    n_ed_kn: c.n_ed_kn.abs(),
                    my_ed_knm: c.m_start_knm.abs().max(c.m_end_knm.abs()),
                    mz_ed_knm: c.mz_ed_knm,
                    v_ed_kn: c.v_ed_kn,
                    lcr_y_m: c.lcr_y_m.unwrap_or(auto_length),
                    lcr_z_m: c.lcr_z_m.unwrap_or(auto_length),
                    psi_y: column_psi(c.m_start_knm, c.m_end_knm),
                    psi_z: 1.0,
                    lcr_lt_m: c.lcr_lt_m,
                })
            }
            MemberDesign::TrussMember(t) => {
                let (lcr_ip, lcr_oop) = truss_buckling_lengths(self.length_m);
                let (compression_kn, tension_kn) = split_axial_force(t.axial_force_kn);
                CalculationItem::TrussMember(TrussMemberInput {
                    label,
                    section: catalog.hollow(&self.designation)?.clone(),
                    grade,
                    compression_kn,
                    tension_kn,
                    lcr_in_plane_m: t.lcr_in_plane_m.unwrap_or(lcr_ip),
                    lcr_out_of_plane_m: t.lcr_out_of_plane_m.unwrap_or(lcr_oop),
                    buckling_curve: t.buckling_curve.clone(),
                    has_holes: t.has_holes,
                    net_area_cm2: t.net_area_cm2,
                })
            }
        })
    }
}

fn default_structure_grade() -> String {
    DesignSettings::default().default_grade
}

/// A named set of members checked together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureDesign {
    pub name: String,

    #[serde(default = "default_structure_grade")]
    pub steel_grade: String,

    #[serde(default)]
    pub settings: DesignSettings,

    #[serde(default)]
    pub members: Vec<StructureMember>,
}

impl StructureDesign {
    pub fn new(name: impl Into<String>) -> Self {
        let settings = DesignSettings::default();
        StructureDesign {
            name: name.into(),
            steel_grade: settings.default_grade.clone(),
            settings,
            members: Vec::new(),
        }
    }

    pub fn add_member(&mut self, member: StructureMember) {
        self.members.push(member);
    }

    /// Check every member against the built-in section catalog
    pub fn design_all(&self) -> CalcResult<StructureDesignResults> {
        self.design_all_with(&BUILTIN_CATALOG)
    }

    /// Check every member, resolving sections in `catalog`.
    ///
    /// Stops at the first member that cannot be checked (unknown grade,
    /// missing section, invalid buckling curve).
    pub fn design_all_with(&self, catalog: &SectionCatalog) -> CalcResult<StructureDesignResults> {
        let mut elements = Vec::with_capacity(self.members.len());

        for member in &self.members {
            let item = member.to_item(&self.steel_grade, catalog)?;
            let result = item.calculate(&self.settings)?;
            let element = ElementDesignResult::new(member, result);
            log::info!(
                "{} ({}, {}): {} {:.3} {}",
                element.name,
                element.role.code(),
                element.designation,
                element.governing_check,
                element.max_utilisation,
                if element.overall_ok { "PASS" } else { "FAIL" }
            );
            elements.push(element);
        }

        let all_pass = elements.iter().all(|e| e.overall_ok);
        if !all_pass {
            log::warn!("{}: {} member(s) fail", self.name, elements.iter().filter(|e| !e.overall_ok).count());
        }

        Ok(StructureDesignResults {
            structure_name: self.name.clone(),
            steel_grade: self.steel_grade.clone(),
            all_pass,
            elements,
        })
    }
}

/// Check outcome for one member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementDesignResult {
    pub name: String,
    pub role: MemberRole,
    pub designation: String,
    pub length_m: f64,
    pub overall_ok: bool,
    pub max_utilisation: f64,
    pub governing_check: String,
    pub steps: Vec<DesignStep>,
    pub result: CalculationResult,
}

impl ElementDesignResult {
    fn new(member: &StructureMember, result: CalculationResult) -> Self {
        let governing = result.governing_check();
        ElementDesignResult {
            name: member.name.clone(),
            role: member.design.role(),
            designation: member.designation.clone(),
            length_m: member.length_m,
            overall_ok: result.passes(),
            max_utilisation: governing.as_ref().map(|g| g.utilisation).unwrap_or(0.0),
            governing_check: governing.map(|g| g.name).unwrap_or_default(),
            steps: result.steps(),
            result,
        }
    }
}

/// One row of the structure summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub name: String,
    pub role: String,
    pub designation: String,
    pub length_m: f64,
    pub governing_check: String,
    pub utilisation: f64,
    pub ok: bool,
}

/// Results of a batch design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureDesignResults {
    pub structure_name: String,
    pub steel_grade: String,
    pub all_pass: bool,
    pub elements: Vec<ElementDesignResult>,
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

impl StructureDesignResults {
    pub fn element(&self, name: &str) -> Option<&ElementDesignResult> {
        self.elements.iter().find(|e| e.name == name)
    }

    /// Rows in member order; length to 2 and utilisation to 3 decimals
    pub fn summary_table(&self) -> Vec<SummaryRow> {
        self.elements
            .iter()
            .map(|e| SummaryRow {
                name: e.name.clone(),
                role: e.role.code().to_string(),
                designation: e.designation.clone(),
                length_m: round_to(e.length_m, 2),
                governing_check: e.governing_check.clone(),
                utilisation: round_to(e.max_utilisation, 3),
                ok: e.overall_ok,
            })
            .collect()
    }
}
