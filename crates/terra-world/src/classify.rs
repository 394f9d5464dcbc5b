//! Terrain classification rules.
//!
//! The rule set is a first-match-wins decision table over a snapshot of a
//! cell's attributes. The elevation regime picks the branch; within each
//! branch the checks below run top to bottom and the first one that holds
//! decides. Every comparison is strict.

use tracing::trace;

use crate::terrain::{ElevationRegime, Feature, TerrainType, UndergroundType, UnderwaterType};

/// Underground cells below this height are magma.
pub const MAGMA_HEIGHT: f32 = -10.0;
/// Underground cells wetter than this are wet soil.
pub const WET_SOIL_MOISTURE: f32 = 0.7;
/// Surface cells wetter than this are submerged regardless of height.
pub const FLOOD_MOISTURE: f32 = 0.8;
/// Submerged surface cells below this height are deep water.
pub const DEEP_WATER_HEIGHT: f32 = -5.0;
/// Snow needs temperature below this.
pub const FREEZING_TEMPERATURE: f32 = 0.0;
/// Snow needs moisture above this.
pub const SNOW_MOISTURE: f32 = 0.5;
/// Desert needs moisture below this.
pub const ARID_MOISTURE: f32 = 0.2;
/// Desert needs temperature above this.
pub const DESERT_TEMPERATURE: f32 = 30.0;
/// Forest needs vegetation density above this.
pub const FOREST_VEGETATION: f32 = 0.6;
/// Mountain needs height above this.
pub const MOUNTAIN_HEIGHT: f32 = 15.0;

/// The attributes the classification rule reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellAttributes {
    /// Elevation relative to the sea-level datum
    pub height: f32,
    /// Moisture in [0, 1]
    pub moisture: f32,
    /// Temperature in degrees Celsius
    pub temperature: f32,
    /// Vegetation density in [0, 1]
    pub vegetation_density: f32,
    /// Layer index selecting the regime
    pub elevation_level: i32,
    /// Optional override tag
    pub feature: Option<Feature>,
}

/// Outcome of classifying one attribute snapshot.
///
/// Sub-types are `Some` only when the taken branch assigns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Derived terrain type
    pub terrain_type: TerrainType,
    /// Underground material assigned by the underground branch
    pub underground_type: Option<UndergroundType>,
    /// Depth class assigned by the submerged surface branch
    pub underwater_type: Option<UnderwaterType>,
}

impl Classification {
    const fn terrain(terrain_type: TerrainType) -> Self {
        Self {
            terrain_type,
            underground_type: None,
            underwater_type: None,
        }
    }

    const fn underground(underground_type: UndergroundType, terrain_type: TerrainType) -> Self {
        Self {
            terrain_type,
            underground_type: Some(underground_type),
            underwater_type: None,
        }
    }

    const fn underwater(underwater_type: UnderwaterType, terrain_type: TerrainType) -> Self {
        Self {
            terrain_type,
            underground_type: None,
            underwater_type: Some(underwater_type),
        }
    }
}

/// Classifies an attribute snapshot.
///
/// Total over every input, NaN included: a NaN fails every strict
/// comparison and falls through to the branch default.
#[must_use]
pub fn classify(attrs: &CellAttributes) -> Classification {
    let result = match ElevationRegime::from_level(attrs.elevation_level) {
        ElevationRegime::Underground => classify_underground(attrs),
        ElevationRegime::Aerial => classify_aerial(attrs),
        ElevationRegime::Surface => classify_surface(attrs),
    };
    trace!(
        "Classified h={} m={} t={} elev={} -> {}",
        attrs.height,
        attrs.moisture,
        attrs.temperature,
        attrs.elevation_level,
        result.terrain_type
    );
    result
}

fn classify_underground(attrs: &CellAttributes) -> Classification {
    if attrs.height < MAGMA_HEIGHT {
        Classification::underground(UndergroundType::Magma, TerrainType::UndergroundMagma)
    } else if attrs.moisture > WET_SOIL_MOISTURE {
        Classification::underground(UndergroundType::WetSoil, TerrainType::UndergroundWetSoil)
    } else {
        Classification::underground(UndergroundType::Rock, TerrainType::UndergroundRock)
    }
}

fn classify_aerial(attrs: &CellAttributes) -> Classification {
    if attrs.feature == Some(Feature::Storm) {
        Classification::terrain(TerrainType::StormCloud)
    } else {
        Classification::terrain(TerrainType::Air)
    }
}

fn classify_surface(attrs: &CellAttributes) -> Classification {
    if attrs.height < 0.0 || attrs.moisture > FLOOD_MOISTURE {
        return if attrs.height < DEEP_WATER_HEIGHT {
            Classification::underwater(UnderwaterType::DeepWater, TerrainType::DeepWater)
        } else {
            Classification::underwater(UnderwaterType::ShallowWater, TerrainType::ShallowWater)
        };
    }

    let base = if attrs.temperature < FREEZING_TEMPERATURE && attrs.moisture > SNOW_MOISTURE {
        TerrainType::Snow
    } else if attrs.moisture < ARID_MOISTURE && attrs.temperature > DESERT_TEMPERATURE {
        TerrainType::Desert
    } else if attrs.vegetation_density > FOREST_VEGETATION {
        TerrainType::Forest
    } else if attrs.height > MOUNTAIN_HEIGHT {
        TerrainType::Mountain
    } else {
        TerrainType::Grassland
    };

    let terrain = match attrs.feature {
        Some(Feature::River) => TerrainType::River,
        Some(Feature::Volcano) => TerrainType::Volcanic,
        _ => base,
    };
    Classification::terrain(terrain)
}
