//! ev-constructions: synthesize layered constructions from assembly R-values.
//!
//! Provides:
//! - Seven construction categories (wood stud, steel stud, double stud, SIP,
//!   CMU, ICF, generic mass), each with a closed-form inversion of its
//!   parallel-path relation
//! - Candidate-list synthesis with fallback and a `matched` flag
//! - Materialization into parallel-path layer stacks
//! - Verification of the delivered R-value
//! - Default candidate catalogs for walls, roofs, floors, rim joists and
//!   foundation walls
//!
//! # Example
//!
//! ```
//! use ev_constructions::{WallType, synthesize, wall_category};
//! use ev_materials::SidingType;
//!
//! let walls = wall_category(WallType::WoodStud, 0.5, SidingType::Vinyl).unwrap();
//! let solved = synthesize(&walls, 15.0, 0.85).unwrap();
//! assert!(solved.matched);
//! assert!((solved.achieved_r() - 15.0).abs() < 1e-6);
//! ```

pub mod algebra;
pub mod assembly;
pub mod catalog;
pub mod category;
pub mod cmu;
pub mod double_stud;
pub mod error;
pub mod generic;
pub mod icf;
pub mod sip;
pub mod steel_stud;
pub mod traits;
pub mod verify;
pub mod wood_stud;

pub use assembly::{Assembly, AssemblyBuilder, AssemblyLayer, materialize};
pub use catalog::{
    WallType, floor_category, foundation_wall_category, rim_joist_category, roof_category,
    wall_category,
};
pub use category::{
    CandidateSet, CategoryKind, ConstructionCategory, SolvedConstruction, synthesize,
};
pub use cmu::CmuSet;
pub use double_stud::DoubleStudSet;
pub use error::{ConstructionError, ConstructionResult};
pub use generic::{GenericSet, MassMaterial};
pub use icf::IcfSet;
pub use sip::SipSet;
pub use steel_stud::SteelStudSet;
pub use traits::{ConstructionSet, FixedLayers};
pub use verify::{DEFAULT_RVALUE_TOLERANCE, Verification, verify};
pub use wood_stud::WoodStudSet;
