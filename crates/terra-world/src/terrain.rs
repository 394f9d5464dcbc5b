//! Closed vocabularies for terrain classification.
//!
//! Every enum here has a canonical snake_case token used by `Display`,
//! `FromStr`, and serde, so text coming from a caller is validated once at
//! the boundary instead of being compared as free strings downstream.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use terra_common::{TerrainError, TerrainResult};

/// The single derived category of a terrain cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrainType {
    /// No category assigned.
    Unclassified,
    /// Construction default, before any classification has run.
    #[default]
    Grass,
    /// Temperate surface with nothing more specific.
    Grassland,
    /// Cold and wet surface.
    Snow,
    /// Hot and dry surface.
    Desert,
    /// Densely vegetated surface.
    Forest,
    /// High surface.
    Mountain,
    /// Surface tagged with a river feature.
    River,
    /// Surface tagged with a volcano feature.
    Volcanic,
    /// Submerged surface, at most 5 below datum.
    ShallowWater,
    /// Submerged surface, more than 5 below datum.
    DeepWater,
    /// Underground, below the magma line.
    UndergroundMagma,
    /// Underground, saturated soil.
    UndergroundWetSoil,
    /// Underground, dry rock.
    UndergroundRock,
    /// Aerial layer inside a storm.
    StormCloud,
    /// Aerial layer, clear.
    Air,
}

impl TerrainType {
    /// Get all terrain types.
    #[must_use]
    pub const fn all() -> [Self; 16] {
        [
            Self::Unclassified,
            Self::Grass,
            Self::Grassland,
            Self::Snow,
            Self::Desert,
            Self::Forest,
            Self::Mountain,
            Self::River,
            Self::Volcanic,
            Self::ShallowWater,
            Self::DeepWater,
            Self::UndergroundMagma,
            Self::UndergroundWetSoil,
            Self::UndergroundRock,
            Self::StormCloud,
            Self::Air,
        ]
    }

    /// Canonical token for this terrain type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unclassified => "unclassified",
            Self::Grass => "grass",
            Self::Grassland => "grassland",
            Self::Snow => "snow",
            Self::Desert => "desert",
            Self::Forest => "forest",
            Self::Mountain => "mountain",
            Self::River => "river",
            Self::Volcanic => "volcanic",
            Self::ShallowWater => "shallow_water",
            Self::DeepWater => "deep_water",
            Self::UndergroundMagma => "underground_magma",
            Self::UndergroundWetSoil => "underground_wet_soil",
            Self::UndergroundRock => "underground_rock",
            Self::StormCloud => "storm_cloud",
            Self::Air => "air",
        }
    }

    /// Check if this terrain type is a body of standing water.
    ///
    /// Rivers are a surface feature and do not count.
    #[must_use]
    pub const fn is_water(self) -> bool {
        matches!(self, Self::ShallowWater | Self::DeepWater)
    }

    /// Check if this terrain type belongs to the underground regime.
    #[must_use]
    pub const fn is_underground(self) -> bool {
        matches!(
            self,
            Self::UndergroundMagma | Self::UndergroundWetSoil | Self::UndergroundRock
        )
    }

    /// Check if this terrain type belongs to the aerial regime.
    #[must_use]
    pub const fn is_aerial(self) -> bool {
        matches!(self, Self::StormCloud | Self::Air)
    }
}

impl std::fmt::Display for TerrainType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TerrainType {
    type Err = TerrainError;

    fn from_str(s: &str) -> TerrainResult<Self> {
        let token = s.trim();
        Self::all()
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| TerrainError::UnknownTerrainType(s.to_string()))
    }
}

/// Special tag that overrides the attribute-derived terrain type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Flowing water across the surface.
    River,
    /// Active volcano.
    Volcano,
    /// Severe weather system.
    Storm,
    /// Opening into the underground layers.
    CaveEntrance,
    /// Forest marker.
    Forest,
}

impl Feature {
    /// Get all features.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::River,
            Self::Volcano,
            Self::Storm,
            Self::CaveEntrance,
            Self::Forest,
        ]
    }

    /// Canonical token for this feature.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::River => "river",
            Self::Volcano => "volcano",
            Self::Storm => "storm",
            Self::CaveEntrance => "cave_entrance",
            Self::Forest => "forest",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = TerrainError;

    fn from_str(s: &str) -> TerrainResult<Self> {
        let token = s.trim();
        Self::all()
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| TerrainError::UnknownFeature(s.to_string()))
    }
}

/// Material of an underground cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndergroundType {
    /// Loose soil.
    Soil,
    /// Solid rock.
    Rock,
    /// Molten rock.
    Magma,
    /// Water-saturated soil.
    WetSoil,
}

impl UndergroundType {
    /// Get all underground types.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Soil, Self::Rock, Self::Magma, Self::WetSoil]
    }

    /// Canonical token for this underground type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Soil => "soil",
            Self::Rock => "rock",
            Self::Magma => "magma",
            Self::WetSoil => "wet_soil",
        }
    }
}

impl std::fmt::Display for UndergroundType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UndergroundType {
    type Err = TerrainError;

    fn from_str(s: &str) -> TerrainResult<Self> {
        let token = s.trim();
        Self::all()
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| TerrainError::UnknownUndergroundType(s.to_string()))
    }
}

/// Depth class of a submerged surface cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnderwaterType {
    /// Submerged by at most 5.
    ShallowWater,
    /// Submerged by more than 5.
    DeepWater,
}

impl UnderwaterType {
    /// Get all underwater types.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::ShallowWater, Self::DeepWater]
    }

    /// Canonical token for this underwater type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShallowWater => "shallow_water",
            Self::DeepWater => "deep_water",
        }
    }
}

impl std::fmt::Display for UnderwaterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnderwaterType {
    type Err = TerrainError;

    fn from_str(s: &str) -> TerrainResult<Self> {
        let token = s.trim();
        Self::all()
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| TerrainError::UnknownUnderwaterType(s.to_string()))
    }
}

/// Classification regime selected by a cell's elevation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElevationRegime {
    /// Negative elevation level.
    Underground,
    /// Elevation level zero.
    Surface,
    /// Positive elevation level.
    Aerial,
}

impl ElevationRegime {
    /// Regime for an elevation level.
    #[must_use]
    pub const fn from_level(level: i32) -> Self {
        if level < 0 {
            Self::Underground
        } else if level > 0 {
            Self::Aerial
        } else {
            Self::Surface
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terrain_type_tokens_parse_back() {
        for t in TerrainType::all() {
            assert_eq!(t.as_str().parse::<TerrainType>(), Ok(t));
        }
        assert_eq!(" Mountain ".parse::<TerrainType>(), Ok(TerrainType::Mountain));
    }

    #[test]
    fn test_unknown_tokens_rejected() {
        assert_eq!(
            "mountian".parse::<TerrainType>(),
            Err(TerrainError::UnknownTerrainType("mountian".to_string()))
        );
        assert_eq!(
            "water".parse::<TerrainType>(),
            Err(TerrainError::UnknownTerrainType("water".to_string()))
        );
        assert_eq!(
            "tornado".parse::<Feature>(),
            Err(TerrainError::UnknownFeature("tornado".to_string()))
        );
        assert!("lava".parse::<UndergroundType>().is_err());
        assert!("puddle".parse::<UnderwaterType>().is_err());
    }

    #[test]
    fn test_feature_tokens() {
        assert_eq!("cave_entrance".parse::<Feature>(), Ok(Feature::CaveEntrance));
        assert_eq!(Feature::Volcano.to_string(), "volcano");
        assert_eq!(UndergroundType::WetSoil.to_string(), "wet_soil");
        assert_eq!(UnderwaterType::DeepWater.to_string(), "deep_water");
    }

    #[test]
    fn test_water_check_covers_only_standing_water() {
        let water: Vec<_> = TerrainType::all()
            .into_iter()
            .filter(|t| t.is_water())
            .collect();
        assert_eq!(water, vec![TerrainType::ShallowWater, TerrainType::DeepWater]);
        assert!(!TerrainType::River.is_water());
    }

    #[test]
    fn test_regime_from_level() {
        assert_eq!(ElevationRegime::from_level(-3), ElevationRegime::Underground);
        assert_eq!(ElevationRegime::from_level(0), ElevationRegime::Surface);
        assert_eq!(ElevationRegime::from_level(2), ElevationRegime::Aerial);
    }

    #[test]
    fn test_default_terrain_is_grass_literal() {
        assert_eq!(TerrainType::default(), TerrainType::Grass);
        assert_ne!(TerrainType::Grass, TerrainType::Grassland);
    }
}
