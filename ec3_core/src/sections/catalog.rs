//! Built-in section catalog
//!
//! A small set of common UK sections (properties from the SCI "Blue Book",
//! EN 10365 / EN 10210 dimensions) so that demos and tests do not need an
//! external table. Larger catalogs are supplied by the caller as
//! [`SteelSectionData`] / [`HollowSectionData`] records.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::errors::{CalcError, CalcResult};
use crate::sections::hollow::{HollowSectionData, HollowShape};
use crate::sections::open::SteelSectionData;

/// Section lookup by designation.
#[derive(Debug, Clone, Default)]
pub struct SectionCatalog {
    open: HashMap<String, SteelSectionData>,
    hollow: HashMap<String, HollowSectionData>,
}

/// Normalise a designation for lookup: upper case, single spaces
fn catalog_key(designation: &str) -> String {
    designation
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

impl SectionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_open(&mut self, section: SteelSectionData) {
        self.open.insert(catalog_key(&section.designation), section);
    }

    pub fn insert_hollow(&mut self, section: HollowSectionData) {
        self.hollow.insert(catalog_key(&section.designation), section);
    }

    /// Find an I/H section (case-insensitive)
    pub fn open(&self, designation: &str) -> CalcResult<&SteelSectionData> {
        self.open
            .get(&catalog_key(designation))
            .ok_or_else(|| CalcError::section_not_found(designation))
    }

    /// Find a hollow section (case-insensitive)
    pub fn hollow(&self, designation: &str) -> CalcResult<&HollowSectionData> {
        self.hollow
            .get(&catalog_key(designation))
            .ok_or_else(|| CalcError::section_not_found(designation))
    }

    /// All designations, sorted
    pub fn designations(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .open
            .values()
            .map(|s| s.designation.as_str())
            .chain(self.hollow.values().map(|s| s.designation.as_str()))
            .collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.open.len() + self.hollow.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-wide built-in catalog, built on first use
pub static BUILTIN_CATALOG: Lazy<SectionCatalog> = Lazy::new(builtin_sections);

/// Look up an I/H section in the built-in catalog
pub fn lookup_open(designation: &str) -> CalcResult<SteelSectionData> {
    BUILTIN_CATALOG.open(designation).cloned()
}

/// Look up a hollow section in the built-in catalog
pub fn lookup_hollow(designation: &str) -> CalcResult<HollowSectionData> {
    BUILTIN_CATALOG.hollow(designation).cloned()
}

fn builtin_sections() -> SectionCatalog {
    let mut catalog = SectionCatalog::new();

    // (designation, h, b, tw, tf, r, d, hi, A, Iy, Iz, It, Iw, Wel,y, Wpl,y, Wel,z, Wpl,z, mass)
    let open_sections = [
        ("UB 457x191x67", 453.4, 189.9, 8.5, 12.7, 10.2, 407.6, 428.0, 85.5, 29400.0, 1450.0, 37.1, 705000.0, 1300.0, 1470.0, 153.0, 237.0, 67.1),
        ("UB 305x165x40", 303.4, 165.0, 6.0, 10.2, 8.9, 265.2, 283.0, 51.3, 8500.0, 764.0, 14.7, 164000.0, 560.0, 623.0, 92.6, 142.0, 40.3),
        ("UC 203x203x46", 203.2, 203.6, 7.2, 11.0, 10.2, 160.8, 181.2, 58.7, 4570.0, 1550.0, 22.2, 143000.0, 450.0, 497.0, 152.0, 231.0, 46.1),
        ("UC 254x254x73", 254.1, 254.6, 8.6, 14.2, 12.7, 200.3, 225.7, 93.1, 11400.0, 3910.0, 57.6, 562000.0, 898.0, 992.0, 307.0, 465.0, 73.1),
    ];

    for (designation, h, b, tw, tf, r, d, hi, a, iy, iz, it, iw, wely, wply, welz, wplz, mass) in open_sections {
        catalog.insert_open(SteelSectionData {
            designation: designation.to_string(),
            h_mm: h,
            b_mm: b,
            tw_mm: tw,
            tf_mm: tf,
            r_mm: r,
            d_mm: d,
            hi_mm: hi,
            area_cm2: a,
            iy_cm4: iy,
            iz_cm4: iz,
            it_cm4: it,
            iw_cm6: iw,
            wel_y_cm3: wely,
            wpl_y_cm3: wply,
            wel_z_cm3: welz,
            wpl_z_cm3: wplz,
            mass_kg_m: mass,
        });
    }

    // (designation, b, t, A, I, i, Wel, Wpl, mass)
    let square_hollow = [
        ("SHS 100x100x5", 100.0, 5.0, 18.7, 283.0, 38.9, 56.6, 67.1, 14.7),
        ("SHS 80x80x4", 80.0, 4.0, 11.7, 110.0, 30.6, 27.5, 32.9, 9.22),
    ];

    for (designation, b, t, a, i, radius, wel, wpl, mass) in square_hollow {
        catalog.insert_hollow(HollowSectionData::shs(designation, b, t, a, i, radius, wel, wpl, mass));
    }

    catalog.insert_hollow(HollowSectionData {
        designation: "RHS 150x100x6.3".to_string(),
        shape: HollowShape::Rhs,
        h_mm: 150.0,
        b_mm: 100.0,
        t_mm: 6.3,
        area_cm2: 29.7,
        iy_cm4: 896.0,
        iz_cm4: 475.0,
        radius_y_mm: 54.9,
        radius_z_mm: 40.0,
        wel_y_cm3: 120.0,
        wel_z_cm3: 95.0,
        wpl_y_cm3: 147.0,
        wpl_z_cm3: 110.0,
        mass_kg_m: 23.3,
    });

    catalog
}
