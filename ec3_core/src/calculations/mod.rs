//! # Member Checks
//!
//! Each member check follows the pattern:
//!
//! - `*Input` - Section, grade and design forces (JSON-serializable)
//! - `*Result` - Every intermediate quantity plus `overall_ok` (JSON-serializable)
//! - `calculate(input, &settings) -> CalcResult<*Result>` - Pure check function
//!
//! Results can be flattened into ordered [`DesignStep`]s and report the
//! check that governs.
//!
//! ## Available Checks
//!
//! - [`beam`] - Rolled I/H beams: bending, shear, LTB by segment, deflection
//! - [`column`] - Rolled I/H beam-columns: combined resistance, buckling, Annex A
//! - [`truss_member`] - Axially loaded SHS/RHS members

pub mod beam;
pub mod column;
pub mod forces;
pub mod steps;
pub mod truss_member;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::settings::DesignSettings;

// Re-export commonly used types
pub use beam::{BeamForces, BeamInput, BeamResult, DeflectionLimitType};
pub use column::{ColumnInput, ColumnResult};
pub use forces::{DeflectionSupport, LinearForceDistribution};
pub use steps::{DesignStep, DetailValue, GoverningCheck};
pub use truss_member::{TrussMemberInput, TrussMemberResult};

/// Structural role of a member, selecting its check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    Beam,
    Column,
    TrussMember,
}

impl MemberRole {
    pub const ALL: [MemberRole; 3] = [MemberRole::Beam, MemberRole::Column, MemberRole::TrussMember];

    /// Lower-case name used in summary tables
    pub fn code(&self) -> &'static str {
        match self {
            MemberRole::Beam => "beam",
            MemberRole::Column => "column",
            MemberRole::TrussMember => "truss_member",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MemberRole::Beam => "Beam",
            MemberRole::Column => "Column",
            MemberRole::TrussMember => "Truss Member",
        }
    }
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Enum wrapper for all check inputs.
///
/// Lets heterogeneous members live in one collection while keeping a clean,
/// tagged serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    Beam(BeamInput),
    Column(ColumnInput),
    TrussMember(TrussMemberInput),
}

impl CalculationItem {
    /// Get the user-provided label for this member
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Beam(b) => &b.label,
            CalculationItem::Column(c) => &c.label,
            CalculationItem::TrussMember(t) => &t.label,
        }
    }

    /// Get the check type as a string
    pub fn calc_type(&self) -> &'static str {
        self.role().display_name()
    }

    pub fn role(&self) -> MemberRole {
        match self {
            CalculationItem::Beam(_) => MemberRole::Beam,
            CalculationItem::Column(_) => MemberRole::Column,
            CalculationItem::TrussMember(_) => MemberRole::TrussMember,
        }
    }

    /// Section designation
    pub fn designation(&self) -> &str {
        match self {
            CalculationItem::Beam(b) => &b.section.designation,
            CalculationItem::Column(c) => &c.section.designation,
            CalculationItem::TrussMember(t) => &t.section.designation,
        }
    }

    /// Run the check for this member
    pub fn calculate(&self, settings: &DesignSettings) -> CalcResult<CalculationResult> {
        Ok(match self {
            CalculationItem::Beam(input) => CalculationResult::Beam(beam::calculate(input, settings)?),
            CalculationItem::Column(input) => CalculationResult::Column(column::calculate(input, settings)?),
            CalculationItem::TrussMember(input) => {
                CalculationResult::TrussMember(truss_member::calculate(input, settings)?)
            }
        })
    }
}

/// Enum wrapper for all check results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationResult {
    Beam(BeamResult),
    Column(ColumnResult),
    TrussMember(TrussMemberResult),
}

impl CalculationResult {
    pub fn passes(&self) -> bool {
        match self {
            CalculationResult::Beam(r) => r.passes(),
            CalculationResult::Column(r) => r.passes(),
            CalculationResult::TrussMember(r) => r.passes(),
        }
    }

    pub fn governing_check(&self) -> Option<GoverningCheck> {
        match self {
            CalculationResult::Beam(r) => r.governing_check(),
            CalculationResult::Column(r) => r.governing_check(),
            CalculationResult::TrussMember(r) => r.governing_check(),
        }
    }

    pub fn steps(&self) -> Vec<DesignStep> {
        match self {
            CalculationResult::Beam(r) => r.steps(),
            CalculationResult::Column(r) => r.steps(),
            CalculationResult::TrussMember(r) => r.steps(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::{lookup_hollow, lookup_open};

    fn truss_item() -> CalculationItem {
        CalculationItem::TrussMember(TrussMemberInput {
            label: "T-1".to_string(),
            section: lookup_hollow("SHS 80x80x4").unwrap(),
            grade: "S355".to_string(),
            compression_kn: 0.0,
            tension_kn: 100.0,
            lcr_in_plane_m: 1.8,
            lcr_out_of_plane_m: 2.0,
            buckling_curve: "a".to_string(),
            has_holes: false,
            net_area_cm2: 0.0,
        })
    }

    #[test]
    fn test_item_accessors() {
        let item = truss_item();
        assert_eq!(item.label(), "T-1");
        assert_eq!(item.calc_type(), "Truss Member");
        assert_eq!(item.role(), MemberRole::TrussMember);
        assert_eq!(item.designation(), "SHS 80x80x4");
    }

    #[test]
    fn test_item_dispatch() {
        let result = truss_item().calculate(&DesignSettings::default()).unwrap();
        assert!(result.passes());
        assert_eq!(result.steps().len(), 7);
        assert_eq!(result.governing_check().unwrap().name, "tension");
    }

    #[test]
    fn test_item_serialization_tag() {
        let item = CalculationItem::Column(ColumnInput {
            label: "C-1".to_string(),
            section: lookup_open("UC 203x203x46").unwrap(),
            grade: "S275".to_string(),
            n_ed_kn: 500.0,
            my_ed_knm: 0.0,
            mz_ed_knm: 0.0,
            v_ed_kn: 0.0,
            lcr_y_m: 3.0,
            lcr_z_m: 3.0,
            psi_y: 1.0,
            psi_z: 1.0,
            lcr_lt_m: None,
        });
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\":\"Column\""));
        let roundtrip: CalculationItem = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, item);
    }

    #[test]
    fn test_role_codes() {
        let codes: Vec<_> = MemberRole::ALL.iter().map(MemberRole::code).collect();
        assert_eq!(codes, vec!["beam", "column", "truss_member"]);
    }
}
