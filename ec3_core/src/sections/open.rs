//! Doubly-symmetric rolled I/H sections (UB, UC)

use serde::{Deserialize, Serialize};

use crate::units::{
    CubicCentimetres, CubicMillimetres, QuarticCentimetres, QuarticMillimetres, SexticCentimetres,
    SexticMillimetres, SquareCentimetres, SquareMillimetres,
};

/// Geometric and static properties of an open I/H section.
///
/// Dimensions are in mm, properties in the cm-based units used by the
/// section tables. Use the `*_mm2`/`*_mm3`/`*_mm4`/`*_mm6` accessors in
/// formulas.
///
/// ## JSON Example
///
/// ```json
/// {
///   "designation": "UB 457x191x67",
///   "h_mm": 453.4, "b_mm": 189.9, "tw_mm": 8.5, "tf_mm": 12.7,
///   "r_mm": 10.2, "d_mm": 407.6, "hi_mm": 428.0,
///   "area_cm2": 85.5, "iy_cm4": 29400.0, "iz_cm4": 1450.0,
///   "it_cm4": 37.1, "iw_cm6": 705000.0,
///   "wel_y_cm3": 1300.0, "wpl_y_cm3": 1470.0,
///   "wel_z_cm3": 153.0, "wpl_z_cm3": 237.0,
///   "mass_kg_m": 67.1
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteelSectionData {
    pub designation: String,

    /// Overall depth h
    pub h_mm: f64,
    /// Flange width b
    pub b_mm: f64,
    /// Web thickness tw
    pub tw_mm: f64,
    /// Flange thickness tf
    pub tf_mm: f64,
    /// Root radius r
    pub r_mm: f64,
    /// Depth between fillets d
    pub d_mm: f64,
    /// Clear web height between flanges hi = h - 2tf
    pub hi_mm: f64,

    pub area_cm2: f64,
    pub iy_cm4: f64,
    pub iz_cm4: f64,
    /// St Venant torsion constant
    pub it_cm4: f64,
    /// Warping constant
    pub iw_cm6: f64,
    pub wel_y_cm3: f64,
    pub wpl_y_cm3: f64,
    pub wel_z_cm3: f64,
    pub wpl_z_cm3: f64,

    pub mass_kg_m: f64,
}

impl SteelSectionData {
    pub fn area_mm2(&self) -> f64 {
        SquareMillimetres::from(SquareCentimetres(self.area_cm2)).0
    }

    pub fn iy_mm4(&self) -> f64 {
        QuarticMillimetres::from(QuarticCentimetres(self.iy_cm4)).0
    }

    pub fn iz_mm4(&self) -> f64 {
        QuarticMillimetres::from(QuarticCentimetres(self.iz_cm4)).0
    }

    pub fn it_mm4(&self) -> f64 {
        QuarticMillimetres::from(QuarticCentimetres(self.it_cm4)).0
    }

    pub fn iw_mm6(&self) -> f64 {
        SexticMillimetres::from(SexticCentimetres(self.iw_cm6)).0
    }

    pub fn wel_y_mm3(&self) -> f64 {
        CubicMillimetres::from(CubicCentimetres(self.wel_y_cm3)).0
    }

    pub fn wpl_y_mm3(&self) -> f64 {
        CubicMillimetres::from(CubicCentimetres(self.wpl_y_cm3)).0
    }

    pub fn wel_z_mm3(&self) -> f64 {
        CubicMillimetres::from(CubicCentimetres(self.wel_z_cm3)).0
    }

    pub fn wpl_z_mm3(&self) -> f64 {
        CubicMillimetres::from(CubicCentimetres(self.wpl_z_cm3)).0
    }

    /// Radius of gyration about y (mm)
    pub fn radius_y_mm(&self) -> f64 {
        radius_of_gyration(self.iy_mm4(), self.area_mm2())
    }

    /// Radius of gyration about z (mm)
    pub fn radius_z_mm(&self) -> f64 {
        radius_of_gyration(self.iz_mm4(), self.area_mm2())
    }
}

/// i = √(I/A), zero for a degenerate section
pub fn radius_of_gyration(i_mm4: f64, area_mm2: f64) -> f64 {
    if area_mm2 > 0.0 && i_mm4 > 0.0 {
        (i_mm4 / area_mm2).sqrt()
    } else {
        0.0
    }
}

impl std::fmt::Display for SteelSectionData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (A={:.1} cm², Iy={:.0} cm⁴, Wpl,y={:.0} cm³)",
            self.designation, self.area_cm2, self.iy_cm4, self.wpl_y_cm3
        )
    }
}
