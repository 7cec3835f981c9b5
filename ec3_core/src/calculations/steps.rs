//! Step-by-step check records and governing-check selection.
//!
//! Every pipeline can flatten its result into an ordered list of
//! [`DesignStep`]s: the surface a report or UI walks to render a
//! compliance narrative.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A named numeric, integer, text or boolean detail on a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DetailValue {
    Flag(bool),
    Integer(i64),
    Number(f64),
    Text(String),
}

impl From<f64> for DetailValue {
    fn from(v: f64) -> Self {
        DetailValue::Number(v)
    }
}

impl From<u8> for DetailValue {
    fn from(v: u8) -> Self {
        DetailValue::Integer(i64::from(v))
    }
}

impl From<usize> for DetailValue {
    fn from(v: usize) -> Self {
        DetailValue::Integer(v as i64)
    }
}

impl From<bool> for DetailValue {
    fn from(v: bool) -> Self {
        DetailValue::Flag(v)
    }
}

impl From<&str> for DetailValue {
    fn from(v: &str) -> Self {
        DetailValue::Text(v.to_string())
    }
}

impl From<String> for DetailValue {
    fn from(v: String) -> Self {
        DetailValue::Text(v)
    }
}

impl DetailValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DetailValue::Number(v) => Some(*v),
            DetailValue::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }
}

impl std::fmt::Display for DetailValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetailValue::Flag(v) => write!(f, "{}", v),
            DetailValue::Integer(v) => write!(f, "{}", v),
            DetailValue::Number(v) => write!(f, "{:.3}", v),
            DetailValue::Text(v) => write!(f, "{}", v),
        }
    }
}

/// One step of a member check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "step_number": 3,
///   "title": "Bending Resistance (§6.2.5)",
///   "ok": true,
///   "utilisation": 0.334,
///   "details": { "Mc_Rd_kNm": 404.25, "Wy_cm3": 1470.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignStep {
    pub step_number: u32,
    pub title: String,
    pub ok: bool,
    pub utilisation: Option<f64>,
    pub details: BTreeMap<String, DetailValue>,
}

impl DesignStep {
    pub fn new(step_number: u32, title: impl Into<String>, ok: bool) -> Self {
        DesignStep {
            step_number,
            title: title.into(),
            ok,
            utilisation: None,
            details: BTreeMap::new(),
        }
    }

    pub fn with_utilisation(mut self, utilisation: f64) -> Self {
        self.utilisation = Some(utilisation);
        self
    }

    pub fn detail(mut self, key: &str, value: impl Into<DetailValue>) -> Self {
        self.details.insert(key.to_string(), value.into());
        self
    }

    /// Numeric detail by name
    pub fn number(&self, key: &str) -> Option<f64> {
        self.details.get(key).and_then(DetailValue::as_f64)
    }
}

/// Name and utilisation of the check that governs a member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoverningCheck {
    pub name: String,
    pub utilisation: f64,
}

/// Pick the check with the highest utilisation.
///
/// Only a strictly greater value replaces the current best, so the first of
/// several equal maxima wins.
pub fn governing_check(checks: &[(&str, f64)]) -> Option<GoverningCheck> {
    checks
        .iter()
        .fold(None::<(&str, f64)>, |best, &(name, util)| match best {
            Some((_, best_util)) if util <= best_util => best,
            _ => Some((name, util)),
        })
        .map(|(name, utilisation)| GoverningCheck {
            name: name.to_string(),
            utilisation,
        })
}

/// Index of the first maximum, strict `>` fold
pub fn first_max_index<I: IntoIterator<Item = f64>>(values: I) -> Option<usize> {
    values
        .into_iter()
        .enumerate()
        .fold(None::<(usize, f64)>, |best, (i, v)| match best {
            Some((_, best_v)) if v <= best_v => best,
            _ => Some((i, v)),
        })
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_governing_first_max_wins_ties() {
        let g = governing_check(&[("bending", 0.8), ("LTB", 0.9), ("deflection", 0.9)]).unwrap();
        assert_eq!(g.name, "LTB");
        assert_eq!(g.utilisation, 0.9);
    }

    #[test]
    fn test_governing_empty() {
        assert!(governing_check(&[]).is_none());
    }

    #[test]
    fn test_first_max_index() {
        assert_eq!(first_max_index(vec![0.2, 0.7, 0.7, 0.1]), Some(1));
        assert_eq!(first_max_index(Vec::<f64>::new()), None);
        assert_eq!(first_max_index(vec![0.0]), Some(0));
    }

    #[test]
    fn test_step_builder() {
        let step = DesignStep::new(2, "Cross-Section Classification (Table 5.2)", true)
            .detail("section_class", 1u8)
            .detail("ct_web", 47.95)
            .detail("curve", "b");
        assert_eq!(step.number("section_class"), Some(1.0));
        assert_eq!(step.number("curve"), None);
        assert!(step.utilisation.is_none());
    }

    #[test]
    fn test_step_serialization() {
        let step = DesignStep::new(1, "Yield Strength (Table 3.1)", true).detail("fy_MPa", 275.0);
        let json = serde_json::to_string(&step).unwrap();
        assert!(json.contains("\"fy_MPa\":275.0"));
        let roundtrip: DesignStep = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.number("fy_MPa"), Some(275.0));
    }
}
