//! Rectangular and square hollow sections (SHS, RHS)

use serde::{Deserialize, Serialize};

use crate::units::{
    CubicCentimetres, CubicMillimetres, QuarticCentimetres, QuarticMillimetres, SquareCentimetres,
    SquareMillimetres,
};

/// Hollow section shape tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HollowShape {
    #[serde(rename = "SHS")]
    Shs,
    #[serde(rename = "RHS")]
    Rhs,
}

impl HollowShape {
    pub fn display_name(&self) -> &'static str {
        match self {
            HollowShape::Shs => "SHS",
            HollowShape::Rhs => "RHS",
        }
    }
}

/// Properties of a rectangular or square hollow section.
///
/// `h_mm` is the depth measured along z (bending about y), `b_mm` the width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HollowSectionData {
    pub designation: String,
    pub shape: HollowShape,

    pub h_mm: f64,
    pub b_mm: f64,
    /// Wall thickness
    pub t_mm: f64,

    pub area_cm2: f64,
    pub iy_cm4: f64,
    pub iz_cm4: f64,
    /// Radius of gyration about y
    pub radius_y_mm: f64,
    /// Radius of gyration about z
    pub radius_z_mm: f64,
    pub wel_y_cm3: f64,
    pub wel_z_cm3: f64,
    pub wpl_y_cm3: f64,
    pub wpl_z_cm3: f64,

    pub mass_kg_m: f64,
}

impl HollowSectionData {
    /// Square hollow section. Minor-axis properties mirror the major axis.
    #[allow(clippy::too_many_arguments)]
    pub fn shs(
        designation: impl Into<String>,
        b_mm: f64,
        t_mm: f64,
        area_cm2: f64,
        i_cm4: f64,
        radius_mm: f64,
        wel_cm3: f64,
        wpl_cm3: f64,
        mass_kg_m: f64,
    ) -> Self {
        HollowSectionData {
            designation: designation.into(),
            shape: HollowShape::Shs,
            h_mm: b_mm,
            b_mm,
            t_mm,
            area_cm2,
            iy_cm4: i_cm4,
            iz_cm4: i_cm4,
            radius_y_mm: radius_mm,
            radius_z_mm: radius_mm,
            wel_y_cm3: wel_cm3,
            wel_z_cm3: wel_cm3,
            wpl_y_cm3: wpl_cm3,
            wpl_z_cm3: wpl_cm3,
            mass_kg_m,
        }
    }

    pub fn area_mm2(&self) -> f64 {
        SquareMillimetres::from(SquareCentimetres(self.area_cm2)).0
    }

    pub fn iy_mm4(&self) -> f64 {
        QuarticMillimetres::from(QuarticCentimetres(self.iy_cm4)).0
    }

    pub fn iz_mm4(&self) -> f64 {
        QuarticMillimetres::from(QuarticCentimetres(self.iz_cm4)).0
    }

    pub fn wel_y_mm3(&self) -> f64 {
        CubicMillimetres::from(CubicCentimetres(self.wel_y_cm3)).0
    }

    pub fn wpl_y_mm3(&self) -> f64 {
        CubicMillimetres::from(CubicCentimetres(self.wpl_y_cm3)).0
    }
}

impl std::fmt::Display for HollowSectionData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (A={:.1} cm², iy={:.1} mm, iz={:.1} mm)",
            self.designation, self.area_cm2, self.radius_y_mm, self.radius_z_mm
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shs_mirrors_axes() {
        let s = HollowSectionData::shs("SHS 100x100x5", 100.0, 5.0, 18.7, 283.0, 38.9, 56.6, 67.1, 14.7);
        assert_eq!(s.shape, HollowShape::Shs);
        assert_eq!(s.h_mm, s.b_mm);
        assert_eq!(s.iy_cm4, s.iz_cm4);
        assert_eq!(s.radius_y_mm, s.radius_z_mm);
        assert_eq!(s.wpl_y_cm3, s.wpl_z_cm3);
        assert!((s.area_mm2() - 1870.0).abs() < 1e-9);
    }

    #[test]
    fn test_shape_serde() {
        assert_eq!(serde_json::to_string(&HollowShape::Rhs).unwrap(), "\"RHS\"");
    }
}
