//! # Terra World
//!
//! Terrain model for Project Terra.
//!
//! This crate handles:
//! - Terrain cells and their environmental attributes
//! - Rule-based terrain classification
//! - The dense 3D terrain grid and its neighborhood queries
//! - Grid configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod cell;
pub mod classify;
pub mod config;
pub mod grid;
pub mod terrain;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cell::*;
    pub use crate::classify::{classify, CellAttributes, Classification};
    pub use crate::config::*;
    pub use crate::grid::*;
    pub use crate::terrain::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;
    use terra_common::TerrainError;

    #[test]
    fn test_demo_grid_starts_as_grass() {
        let grid = TerrainGrid::with_height(3, 3, 2, 0.0).expect("valid grid");
        assert_eq!(grid.len(), 18);
        assert!(grid
            .iter()
            .all(|cell| cell.terrain_type() == TerrainType::Grass && cell.height() == 0.0));
    }

    #[test]
    fn test_demo_update_override_wins() {
        let mut grid = TerrainGrid::with_height(3, 3, 2, 0.0).expect("valid grid");

        // Classification alone would say grassland
        let mut detached = grid.get_cell(1, 1, 0).expect("in bounds").clone();
        detached.set_height(5.0);
        assert_eq!(detached.terrain_type(), TerrainType::Grassland);

        grid.update_cell(
            1,
            1,
            0,
            CellUpdate::height(5.0).with_terrain_type(TerrainType::Mountain),
        )
        .expect("in bounds");

        let cell = grid.get_cell(1, 1, 0).expect("in bounds");
        assert_eq!(cell.height(), 5.0);
        assert_eq!(cell.terrain_type(), TerrainType::Mountain);

        // Neighbors are untouched
        for neighbor in grid.neighbors(1, 1, 0).expect("in bounds") {
            assert_eq!(neighbor.terrain_type(), TerrainType::Grass);
        }
    }

    #[test]
    fn test_surface_deep_water() {
        let mut grid = TerrainGrid::with_height(2, 2, 1, 0.0).expect("valid grid");
        grid.get_cell_mut(0, 0, 0)
            .expect("in bounds")
            .set_moisture(0.1);
        let cell = grid
            .update_cell(0, 0, 0, CellUpdate::height(-6.0))
            .expect("in bounds");
        assert_eq!(cell.terrain_type(), TerrainType::DeepWater);
        assert!(cell.is_water());
    }

    #[test]
    fn test_underground_magma() {
        let mut config = GridConfig::default();
        config.cell.elevation_level = -1;
        config.cell.moisture = 0.95;
        let mut grid = TerrainGrid::new(2, 2, 1, &config).expect("valid grid");

        let cell = grid
            .update_cell(1, 0, 0, CellUpdate::height(-12.0))
            .expect("in bounds");
        assert_eq!(cell.terrain_type(), TerrainType::UndergroundMagma);
        assert_eq!(cell.underground_type(), Some(UndergroundType::Magma));
    }

    #[test]
    fn test_parsed_override_from_text() {
        let mut grid = TerrainGrid::with_height(2, 2, 2, 0.0).expect("valid grid");
        let terrain: TerrainType = "volcanic".parse().expect("known token");
        grid.update_cell(0, 1, 1, CellUpdate::terrain_type(terrain))
            .expect("in bounds");
        assert_eq!(
            grid.get_cell(0, 1, 1).expect("in bounds").terrain_type(),
            TerrainType::Volcanic
        );

        assert!(matches!(
            "lava_lake".parse::<TerrainType>(),
            Err(TerrainError::UnknownTerrainType(_))
        ));
    }

    #[test]
    fn test_aerial_layer_storm() {
        let mut grid = TerrainGrid::with_height(1, 1, 3, 0.0).expect("valid grid");
        let cell = grid.get_cell_mut(0, 0, 2).expect("in bounds");
        cell.set_elevation_level(1);
        cell.set_feature(Some(Feature::Storm));
        assert_eq!(cell.terrain_type(), TerrainType::Grass);

        cell.set_height(120.0);
        assert_eq!(cell.terrain_type(), TerrainType::StormCloud);
    }
}
