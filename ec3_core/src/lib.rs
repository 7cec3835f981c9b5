//! # ec3_core - Eurocode 3 Member Design Checks
//!
//! `ec3_core` verifies steel members against EN 1993-1-1 strength and
//! stability rules. Given a section, a steel grade and the internal forces
//! from an analysis, each check returns every intermediate quantity, a
//! list of named steps with utilisations, and the governing check. All
//! inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **N and mm inside**: Forces reported in kN/kNm, lengths in m
//!
//! ## Quick Start
//!
//! ```rust
//! use ec3_core::calculations::beam::{calculate, BeamForces, BeamInput};
//! use ec3_core::calculations::LinearForceDistribution;
//! use ec3_core::sections::lookup_open;
//! use ec3_core::DesignSettings;
//!
//! let input = BeamInput {
//!     label: "B-1".to_string(),
//!     section: lookup_open("UB 457x191x67").unwrap(),
//!     grade: "S275".to_string(),
//!     span_m: 6.0,
//!     forces: BeamForces::Distribution(LinearForceDistribution::simply_supported_udl(30_000.0, 6.0)),
//!     restraint_positions_m: vec![0.0, 3.0, 6.0],
//!     deflection_limit: Default::default(),
//!     max_deflection_mm: None,
//! };
//!
//! let result = calculate(&input, &DesignSettings::default()).unwrap();
//! assert_eq!(result.classification.section_class, 1);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Beam, column and truss member checks
//! - [`structure`] - Batch design of all members of a structure
//! - [`sections`] - Section records and the built-in catalog
//! - [`materials`] - Steel grades and buckling curves
//! - [`classification`] - Cross-section classification (Table 5.2)
//! - [`resistance`] - Cross-section resistance primitives
//! - [`buckling`] - Slenderness and reduction factors
//! - [`effective_length`] - Buckling length factors and end-moment ratios
//! - [`settings`] - Partial factors and elastic constants
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Structure files with atomic saves

pub mod buckling;
pub mod calculations;
pub mod classification;
pub mod effective_length;
pub mod errors;
pub mod file_io;
pub mod materials;
pub mod resistance;
pub mod sections;
pub mod settings;
pub mod structure;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationResult, DesignStep, GoverningCheck, MemberRole};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_structure, save_results, save_structure};
pub use settings::DesignSettings;
pub use structure::{ElementDesignResult, StructureDesign, StructureDesignResults, StructureMember};
