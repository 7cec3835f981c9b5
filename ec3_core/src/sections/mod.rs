//! # Cross-Section Data
//!
//! Immutable section records consumed by the check pipelines, plus a small
//! built-in catalog of common UK sections.
//!
//! ```rust
//! use ec3_core::sections::lookup_open;
//!
//! let ub = lookup_open("UB 457x191x67").unwrap();
//! assert_eq!(ub.area_mm2(), 8550.0);
//! ```

pub mod catalog;
pub mod hollow;
pub mod open;

pub use catalog::{lookup_hollow, lookup_open, SectionCatalog, BUILTIN_CATALOG};
pub use hollow::{HollowSectionData, HollowShape};
pub use open::{radius_of_gyration, SteelSectionData};
