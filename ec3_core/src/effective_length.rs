//! # Effective Buckling Lengths
//!
//! Length factors for members whose buckling lengths are not given
//! explicitly, plus the end-moment ratio ψ used by the column check.
//!
//! Each end is either fixed or pinned. A supported end follows its support
//! type; an unsupported end is fixed when the connection is continuous.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// In-plane buckling length of a truss member as a fraction of its length
pub const TRUSS_IN_PLANE_FACTOR: f64 = 0.9;

/// Out-of-plane buckling length of a truss member as a fraction of its length
pub const TRUSS_OUT_OF_PLANE_FACTOR: f64 = 1.0;

/// End moments below this magnitude (kNm) count as zero when computing ψ
const MOMENT_TOLERANCE: f64 = 1e-6;

/// Rotational restraint at a member end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndCondition {
    Fixed,
    Pinned,
}

/// Whether the frame is braced against sway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwayMode {
    #[default]
    SwayPrevented,
    Sway,
}

impl SwayMode {
    pub const ALL: [SwayMode; 2] = [SwayMode::SwayPrevented, SwayMode::Sway];

    pub fn display_name(&self) -> &'static str {
        match self {
            SwayMode::SwayPrevented => "Sway prevented",
            SwayMode::Sway => "Sway",
        }
    }
}

/// Support at a member end node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportType {
    Fixed,
    Pinned,
    Roller,
}

impl SupportType {
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "fixed" => Ok(SupportType::Fixed),
            "pinned" | "pin" => Ok(SupportType::Pinned),
            "roller" | "roller_x" | "roller_y" => Ok(SupportType::Roller),
            _ => Err(CalcError::invalid_input(
                "support",
                s,
                "Support must be fixed, pinned or roller",
            )),
        }
    }
}

/// Member-to-member connection at an unsupported end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionType {
    #[default]
    Continuous,
    Pinned,
}

/// Description of one member end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MemberEnd {
    /// Support at the end node, if any
    #[serde(default)]
    pub support: Option<SupportType>,
    #[serde(default)]
    pub connection: ConnectionType,
}

impl MemberEnd {
    pub fn supported(support: SupportType) -> Self {
        MemberEnd {
            support: Some(support),
            connection: ConnectionType::default(),
        }
    }

    pub fn connected(connection: ConnectionType) -> Self {
        MemberEnd {
            support: None,
            connection,
        }
    }

    pub fn condition(&self) -> EndCondition {
        end_condition(self.support, self.connection)
    }
}

/// Fixed or pinned, from the support if there is one, else the connection
pub fn end_condition(support: Option<SupportType>, connection: ConnectionType) -> EndCondition {
    match (support, connection) {
        (Some(SupportType::Fixed), _) => EndCondition::Fixed,
        (Some(_), _) => EndCondition::Pinned,
        (None, ConnectionType::Continuous) => EndCondition::Fixed,
        (None, ConnectionType::Pinned) => EndCondition::Pinned,
    }
}

/// Buckling length factor for a pair of end conditions
pub fn effective_length_factor(sway: SwayMode, start: EndCondition, end: EndCondition) -> f64 {
    use EndCondition::{Fixed, Pinned};

    match (sway, start, end) {
        (SwayMode::SwayPrevented, Fixed, Fixed) => 0.7,
        (SwayMode::SwayPrevented, Fixed, Pinned) | (SwayMode::SwayPrevented, Pinned, Fixed) => 0.85,
        (SwayMode::SwayPrevented, Pinned, Pinned) => 1.0,
        (SwayMode::Sway, Fixed, Fixed) => 1.2,
        (SwayMode::Sway, Fixed, Pinned) | (SwayMode::Sway, Pinned, Fixed) => 1.5,
        (SwayMode::Sway, Pinned, Pinned) => 2.0,
    }
}

/// Buckling length (m) of a member of length `length_m`
pub fn buckling_length(length_m: f64, sway: SwayMode, start: &MemberEnd, end: &MemberEnd) -> f64 {
    effective_length_factor(sway, start.condition(), end.condition()) * length_m
}

/// Default `(in-plane, out-of-plane)` buckling lengths of a truss member (m)
pub fn truss_buckling_lengths(length_m: f64) -> (f64, f64) {
    (
        TRUSS_IN_PLANE_FACTOR * length_m,
        TRUSS_OUT_OF_PLANE_FACTOR * length_m,
    )
}

/// End moment ratio ψ = M_min/M_max from signed end moments.
///
/// M_max is the end with the larger magnitude (the start end on a tie).
/// Same signs give single curvature (ψ > 0), opposite signs double
/// curvature (ψ < 0). Both ends near zero give ψ = 1.
pub fn column_psi(m_start: f64, m_end: f64) -> f64 {
    if m_start.abs() <= MOMENT_TOLERANCE && m_end.abs() <= MOMENT_TOLERANCE {
        return 1.0;
    }
    let (m_max, m_min) = if m_start.abs() >= m_end.abs() {
        (m_start, m_end)
    } else {
        (m_end, m_start)
    };
    m_min / m_max
}
