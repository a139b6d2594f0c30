//! Envelope description file schema.

use ev_constructions::WallType;
use ev_foundation::{FoundationSpace, FoundationWall, Slab};
use ev_materials::{Exposure, FilmOrientation, FloorCovering, RoofingType, SidingType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnvelopeDef {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub surfaces: Vec<SurfaceDef>,
    #[serde(default)]
    pub foundation_walls: Vec<FoundationWallDef>,
    #[serde(default)]
    pub slabs: Vec<SlabDef>,
}

/// An opaque surface whose construction is synthesized from its R-value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SurfaceDef {
    pub id: String,
    pub kind: SurfaceKindDef,
    /// Requested assembly R-value including air films, h·ft²·°F/Btu.
    pub assembly_r: f64,
    #[serde(default)]
    pub exposure: Exposure,
    #[serde(default = "default_drywall_in")]
    pub drywall_thickness_in: f64,
}

fn default_drywall_in() -> f64 {
    0.5
}

fn default_pitch() -> f64 {
    6.0
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SurfaceKindDef {
    Wall {
        wall_type: WallType,
        #[serde(default)]
        siding: SidingType,
    },
    RimJoist {
        #[serde(default)]
        siding: SidingType,
    },
    Roof {
        /// Rise per 12 in of run.
        #[serde(default = "default_pitch")]
        pitch: f64,
        #[serde(default)]
        roofing: RoofingType,
    },
    Floor {
        #[serde(default)]
        covering: FloorCovering,
    },
    FoundationWall {
        thickness_in: f64,
    },
}

impl SurfaceKindDef {
    pub fn orientation(&self) -> FilmOrientation {
        match self {
            SurfaceKindDef::Roof { pitch, .. } => FilmOrientation::Roof { pitch: *pitch },
            SurfaceKindDef::Floor { .. } => FilmOrientation::Floor,
            SurfaceKindDef::Wall { .. }
            | SurfaceKindDef::RimJoist { .. }
            | SurfaceKindDef::FoundationWall { .. } => FilmOrientation::Vertical,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoundationWallDef {
    pub id: String,
    pub space: FoundationSpace,
    #[serde(default = "default_true")]
    pub exterior: bool,
    pub area_sqft: f64,
    pub height_ft: f64,
    #[serde(default)]
    pub depth_below_grade_ft: f64,
}

impl FoundationWallDef {
    pub fn to_wall(&self) -> FoundationWall {
        FoundationWall::new(
            self.id.clone(),
            self.space,
            self.exterior,
            self.area_sqft,
            self.height_ft,
            self.depth_below_grade_ft,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlabDef {
    pub id: String,
    pub space: FoundationSpace,
    pub exposed_perimeter_ft: f64,
    pub area_sqft: f64,
    #[serde(default)]
    pub depth_below_grade_ft: f64,
}

impl SlabDef {
    pub fn to_slab(&self) -> Slab {
        Slab::new(
            self.id.clone(),
            self.space,
            self.exposed_perimeter_ft,
            self.area_sqft,
            self.depth_below_grade_ft,
        )
    }
}
