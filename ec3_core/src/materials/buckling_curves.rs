//! Buckling curves and imperfection factors (EN 1993-1-1 Tables 6.1 and 6.3)

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Flexural buckling curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BucklingCurve {
    #[serde(rename = "a0")]
    A0,
    #[serde(rename = "a")]
    A,
    #[serde(rename = "b")]
    B,
    #[serde(rename = "c")]
    C,
    #[serde(rename = "d")]
    D,
}

impl BucklingCurve {
    pub const ALL: [BucklingCurve; 5] = [
        BucklingCurve::A0,
        BucklingCurve::A,
        BucklingCurve::B,
        BucklingCurve::C,
        BucklingCurve::D,
    ];

    /// Parse a curve letter ("a0", "a" … "d"), case-insensitive.
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "a0" => Ok(BucklingCurve::A0),
            "a" => Ok(BucklingCurve::A),
            "b" => Ok(BucklingCurve::B),
            "c" => Ok(BucklingCurve::C),
            "d" => Ok(BucklingCurve::D),
            _ => Err(CalcError::invalid_input(
                "buckling_curve",
                s,
                "Buckling curve must be one of a0, a, b, c, d",
            )),
        }
    }

    /// Imperfection factor α (Table 6.1)
    pub fn alpha(&self) -> f64 {
        match self {
            BucklingCurve::A0 => 0.13,
            BucklingCurve::A => 0.21,
            BucklingCurve::B => 0.34,
            BucklingCurve::C => 0.49,
            BucklingCurve::D => 0.76,
        }
    }

    /// Curve letter as written in the code tables
    pub fn letter(&self) -> &'static str {
        match self {
            BucklingCurve::A0 => "a0",
            BucklingCurve::A => "a",
            BucklingCurve::B => "b",
            BucklingCurve::C => "c",
            BucklingCurve::D => "d",
        }
    }
}

impl Default for BucklingCurve {
    fn default() -> Self {
        BucklingCurve::A
    }
}

impl std::fmt::Display for BucklingCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Lateral-torsional buckling curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LtbCurve {
    #[serde(rename = "a")]
    A,
    #[serde(rename = "b")]
    B,
    #[serde(rename = "c")]
    C,
    #[serde(rename = "d")]
    D,
}

impl LtbCurve {
    /// Imperfection factor αLT (Table 6.3)
    pub fn alpha(&self) -> f64 {
        match self {
            LtbCurve::A => 0.21,
            LtbCurve::B => 0.34,
            LtbCurve::C => 0.49,
            LtbCurve::D => 0.76,
        }
    }

    /// Curve for rolled I sections (Table 6.5): b when h/b ≤ 2, else c
    pub fn for_rolled_i_section(h_mm: f64, b_mm: f64) -> Self {
        if h_mm / b_mm <= 2.0 {
            LtbCurve::B
        } else {
            LtbCurve::C
        }
    }

    pub fn letter(&self) -> &'static str {
        match self {
            LtbCurve::A => "a",
            LtbCurve::B => "b",
            LtbCurve::C => "c",
            LtbCurve::D => "d",
        }
    }
}

impl std::fmt::Display for LtbCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_values() {
        let alphas: Vec<f64> = BucklingCurve::ALL.iter().map(|c| c.alpha()).collect();
        assert_eq!(alphas, vec![0.13, 0.21, 0.34, 0.49, 0.76]);
        assert_eq!(LtbCurve::B.alpha(), 0.34);
        assert_eq!(LtbCurve::C.alpha(), 0.49);
    }

    #[test]
    fn test_parse_curve() {
        assert_eq!(BucklingCurve::from_str_flexible("A0").unwrap(), BucklingCurve::A0);
        assert_eq!(BucklingCurve::from_str_flexible("c").unwrap(), BucklingCurve::C);
        let err = BucklingCurve::from_str_flexible("e").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_serde_letters() {
        assert_eq!(serde_json::to_string(&BucklingCurve::A0).unwrap(), "\"a0\"");
        let c: BucklingCurve = serde_json::from_str("\"d\"").unwrap();
        assert_eq!(c, BucklingCurve::D);
    }

    #[test]
    fn test_rolled_ltb_curve() {
        assert_eq!(LtbCurve::for_rolled_i_section(453.4, 189.9), LtbCurve::C);
        assert_eq!(LtbCurve::for_rolled_i_section(303.4, 165.0), LtbCurve::B);
    }
}
