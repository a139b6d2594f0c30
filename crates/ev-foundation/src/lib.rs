//! ev-foundation: ground-contact (Kiva) instance apportionment.
//!
//! Provides:
//! - Foundation walls, slabs and their interior spaces
//! - Grouping by foundation space
//! - Wall/slab consistency checks
//! - Perimeter and area apportionment with conservation checking
//!
//! # Example
//!
//! ```
//! use ev_foundation::{FoundationSpace, FoundationWall, Slab, apportion};
//! use ev_core::units::to_ft;
//!
//! let space = FoundationSpace::BasementConditioned;
//! let walls = [FoundationWall::new("FW1", space, true, 320.0, 8.0, 7.0)];
//! let slabs = [Slab::new("S1", space, 100.0, 1000.0, 7.0)];
//!
//! let instances = apportion(&walls, &slabs).unwrap();
//! assert_eq!(instances.len(), 2);
//! assert!((to_ft(instances[1].exposed_perimeter) - 60.0).abs() < 1e-9);
//! ```

pub mod apportion;
pub mod consistency;
pub mod error;
pub mod space;
pub mod types;

// Re-exports for ergonomics
pub use apportion::{ApportionConfig, apportion, apportion_with_config, check_conservation};
pub use consistency::check_consistency;
pub use error::{FoundationError, FoundationResult};
pub use space::FoundationSpace;
pub use types::{FoundationSpaceGroup, FoundationWall, KivaInstance, Slab, group_by_space};
