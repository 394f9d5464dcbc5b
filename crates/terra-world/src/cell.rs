//! Terrain cell data structures.

use std::collections::HashMap;

use terra_common::CellCoord;
use tracing::debug;

use crate::classify::{classify, CellAttributes};
use crate::config::GridConfig;
use crate::terrain::{ElevationRegime, Feature, TerrainType, UndergroundType, UnderwaterType};

/// One unit volume of world space.
///
/// The terrain type is derived: it is recomputed from the other attributes
/// whenever the height changes. Other setters store their value without
/// reclassifying, so the terrain type reflects the attributes as they were at
/// the last height change (or the last explicit override).
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainCell {
    /// Grid coordinate, fixed at creation
    position: CellCoord,
    /// Edge length
    size: f32,
    /// Elevation relative to the sea-level datum
    height: f32,
    /// Moisture (0.0 - 1.0)
    moisture: f32,
    /// Temperature in degrees Celsius
    temperature: f32,
    /// Vegetation density (0.0 - 1.0)
    vegetation_density: f32,
    /// Air quality (0.0 - 1.0)
    air_quality: f32,
    /// Layer index (negative underground, zero surface, positive aerial)
    elevation_level: i32,
    /// Underground material, meaningful below the surface
    underground_type: Option<UndergroundType>,
    /// Depth class, meaningful for submerged surface cells
    underwater_type: Option<UnderwaterType>,
    /// Resource name to richness (0.0 - 1.0)
    resource_richness: HashMap<String, f32>,
    /// Shielded from severe weather
    weather_safe: bool,
    /// Special override tag
    feature: Option<Feature>,
    /// Derived classification
    terrain_type: TerrainType,
}

impl TerrainCell {
    /// Creates a cell at `position` using the defaults in `config`.
    ///
    /// The terrain type is taken from the defaults as-is; construction does
    /// not run the classifier.
    #[must_use]
    pub fn new(position: CellCoord, config: &GridConfig) -> Self {
        let defaults = &config.cell;
        Self {
            position,
            size: config.cell_size,
            height: config.default_height,
            moisture: defaults.moisture.clamp(0.0, 1.0),
            temperature: defaults.temperature,
            vegetation_density: defaults.vegetation_density.clamp(0.0, 1.0),
            air_quality: defaults.air_quality.clamp(0.0, 1.0),
            elevation_level: defaults.elevation_level,
            underground_type: None,
            underwater_type: None,
            resource_richness: HashMap::new(),
            weather_safe: defaults.weather_safe,
            feature: None,
            terrain_type: defaults.terrain_type,
        }
    }

    /// Grid coordinate of this cell.
    #[must_use]
    pub const fn position(&self) -> CellCoord {
        self.position
    }

    /// Edge length.
    #[must_use]
    pub const fn size(&self) -> f32 {
        self.size
    }

    /// Elevation relative to the sea-level datum.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Moisture (0.0 - 1.0).
    #[must_use]
    pub const fn moisture(&self) -> f32 {
        self.moisture
    }

    /// Temperature in degrees Celsius.
    #[must_use]
    pub const fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Vegetation density (0.0 - 1.0).
    #[must_use]
    pub const fn vegetation_density(&self) -> f32 {
        self.vegetation_density
    }

    /// Air quality (0.0 - 1.0).
    #[must_use]
    pub const fn air_quality(&self) -> f32 {
        self.air_quality
    }

    /// Layer index.
    #[must_use]
    pub const fn elevation_level(&self) -> i32 {
        self.elevation_level
    }

    /// Regime selected by the elevation level.
    #[must_use]
    pub const fn elevation_regime(&self) -> ElevationRegime {
        ElevationRegime::from_level(self.elevation_level)
    }

    /// Underground material, if assigned.
    #[must_use]
    pub const fn underground_type(&self) -> Option<UndergroundType> {
        self.underground_type
    }

    /// Underwater depth class, if assigned.
    #[must_use]
    pub const fn underwater_type(&self) -> Option<UnderwaterType> {
        self.underwater_type
    }

    /// Whether the cell is shielded from severe weather.
    #[must_use]
    pub const fn weather_safe(&self) -> bool {
        self.weather_safe
    }

    /// Feature tag, if any.
    #[must_use]
    pub const fn feature(&self) -> Option<Feature> {
        self.feature
    }

    /// Current terrain type.
    #[must_use]
    pub const fn terrain_type(&self) -> TerrainType {
        self.terrain_type
    }

    /// Richness of a named resource, if it has been set.
    #[must_use]
    pub fn resource_richness(&self, name: &str) -> Option<f32> {
        self.resource_richness.get(name).copied()
    }

    /// Iterates over all resources and their richness, in no particular order.
    pub fn resources(&self) -> impl Iterator<Item = (&str, f32)> + '_ {
        self.resource_richness
            .iter()
            .map(|(name, richness)| (name.as_str(), *richness))
    }

    /// Checks if the cell is standing water (shallow or deep).
    #[must_use]
    pub const fn is_water(&self) -> bool {
        self.terrain_type.is_water()
    }

    /// Snapshot of the attributes the classifier reads.
    #[must_use]
    pub const fn attributes(&self) -> CellAttributes {
        CellAttributes {
            height: self.height,
            moisture: self.moisture,
            temperature: self.temperature,
            vegetation_density: self.vegetation_density,
            elevation_level: self.elevation_level,
            feature: self.feature,
        }
    }

    /// Sets the height and reclassifies the cell.
    ///
    /// Sub-types the taken branch does not assign keep their previous value.
    pub fn set_height(&mut self, height: f32) {
        self.height = height;
        let result = classify(&self.attributes());
        self.terrain_type = result.terrain_type;
        if let Some(underground) = result.underground_type {
            self.underground_type = Some(underground);
        }
        if let Some(underwater) = result.underwater_type {
            self.underwater_type = Some(underwater);
        }
    }

    /// Sets moisture, clamped to [0, 1]. Does not reclassify.
    pub fn set_moisture(&mut self, moisture: f32) {
        self.moisture = moisture.clamp(0.0, 1.0);
    }

    /// Sets temperature. Does not reclassify.
    pub fn set_temperature(&mut self, temperature: f32) {
        self.temperature = temperature;
    }

    /// Sets vegetation density, clamped to [0, 1]. Does not reclassify.
    pub fn set_vegetation_density(&mut self, density: f32) {
        self.vegetation_density = density.clamp(0.0, 1.0);
    }

    /// Sets air quality, clamped to [0, 1].
    pub fn set_air_quality(&mut self, quality: f32) {
        self.air_quality = quality.clamp(0.0, 1.0);
    }

    /// Sets the elevation level. Does not reclassify; the new regime applies
    /// at the next height change.
    pub fn set_elevation_level(&mut self, level: i32) {
        self.elevation_level = level;
    }

    /// Inserts or replaces a resource, clamping richness to [0, 1].
    pub fn set_resource_richness(&mut self, name: impl Into<String>, richness: f32) {
        self.resource_richness
            .insert(name.into(), richness.clamp(0.0, 1.0));
    }

    /// Sets or clears the feature tag. Does not reclassify.
    pub fn set_feature(&mut self, feature: Option<Feature>) {
        self.feature = feature;
    }

    /// Sets or clears the underground material.
    pub fn set_underground_type(&mut self, underground: Option<UndergroundType>) {
        self.underground_type = underground;
    }

    /// Sets or clears the underwater depth class.
    pub fn set_underwater_type(&mut self, underwater: Option<UnderwaterType>) {
        self.underwater_type = underwater;
    }

    /// Sets weather shielding.
    pub fn set_weather_safe(&mut self, safe: bool) {
        self.weather_safe = safe;
    }

    /// Forces the terrain type, bypassing classification until the next
    /// height change.
    pub fn override_terrain_type(&mut self, terrain_type: TerrainType) {
        debug!(
            "Override terrain at {}: {} -> {}",
            self.position, self.terrain_type, terrain_type
        );
        self.terrain_type = terrain_type;
    }
}

impl std::fmt::Display for TerrainCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cell({},{},{})[{}, h={}]",
            self.position.x, self.position.y, self.position.z, self.terrain_type, self.height
        )
    }
}
