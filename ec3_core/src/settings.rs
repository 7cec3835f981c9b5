//! # Design Settings
//!
//! Partial factors and elastic constants applied by every check pipeline.
//! Defaults follow the UK National Annex to EN 1993-1-1.
//!
//! ```rust
//! use ec3_core::settings::DesignSettings;
//!
//! let settings: DesignSettings = serde_json::from_str(r#"{ "gamma_m2": 1.1 }"#).unwrap();
//! assert_eq!(settings.gamma_m0, 1.0);
//! assert_eq!(settings.gamma_m2, 1.1);
//! ```

use serde::{Deserialize, Serialize};

/// Global design settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// Partial factor for cross-section resistance (γM0)
    pub gamma_m0: f64,

    /// Partial factor for member buckling resistance (γM1)
    pub gamma_m1: f64,

    /// Partial factor for net-section fracture (γM2)
    pub gamma_m2: f64,

    /// Elastic modulus E (N/mm²)
    pub e_mpa: f64,

    /// Shear modulus G (N/mm²)
    pub g_mpa: f64,

    /// Grade used when a member does not name its own
    pub default_grade: String,
}

impl Default for DesignSettings {
    fn default() -> Self {
        DesignSettings {
            gamma_m0: 1.0,
            gamma_m1: 1.0,
            gamma_m2: 1.25,
            e_mpa: 210_000.0,
            g_mpa: 80_770.0,
            default_grade: "S355".to_string(),
        }
    }
}
