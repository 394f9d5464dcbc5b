//! Dense 3D terrain grid.

use terra_common::{Axis, CellCoord, GridDims, TerrainError, TerrainResult, NEIGHBOR_OFFSETS};
use tracing::debug;

use crate::cell::TerrainCell;
use crate::config::GridConfig;
use crate::terrain::TerrainType;

/// Changes applied by [`TerrainGrid::update_cell`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CellUpdate {
    /// New height; triggers reclassification
    pub height: Option<f32>,
    /// Explicit terrain type, applied after any height change
    pub terrain_type: Option<TerrainType>,
}

impl CellUpdate {
    /// An update that only changes the height.
    #[must_use]
    pub const fn height(height: f32) -> Self {
        Self {
            height: Some(height),
            terrain_type: None,
        }
    }

    /// An update that only overrides the terrain type.
    #[must_use]
    pub const fn terrain_type(terrain_type: TerrainType) -> Self {
        Self {
            height: None,
            terrain_type: Some(terrain_type),
        }
    }

    /// Returns the update with an explicit terrain type added.
    #[must_use]
    pub const fn with_terrain_type(mut self, terrain_type: TerrainType) -> Self {
        self.terrain_type = Some(terrain_type);
        self
    }
}

/// A dense grid of terrain cells, one per coordinate in
/// `[0, x_size) × [0, y_size) × [0, z_size)`.
///
/// All cells are allocated at construction and are never added or removed
/// afterwards, only mutated in place. Every public method takes coordinates
/// in `(x, y, z)` order; the storage layout is private.
#[derive(Debug, Clone)]
pub struct TerrainGrid {
    dims: GridDims,
    config: GridConfig,
    cells: Vec<TerrainCell>,
}

impl TerrainGrid {
    /// Creates a grid with every cell initialized from `config`.
    ///
    /// Fails with [`TerrainError::InvalidDimension`] if any size is zero or
    /// negative, and with [`TerrainError::TooManyCells`] if the cells cannot
    /// be allocated.
    pub fn new(x_size: i32, y_size: i32, z_size: i32, config: &GridConfig) -> TerrainResult<Self> {
        let dims = GridDims::new(x_size, y_size, z_size)?;
        let mut config = config.clone();
        config.validate();

        let mut cells: Vec<TerrainCell> = Vec::new();
        cells
            .try_reserve_exact(dims.cell_count())
            .map_err(|_| TerrainError::TooManyCells {
                x_size,
                y_size,
                z_size,
            })?;
        cells.extend(
            (0..dims.cell_count()).map(|index| TerrainCell::new(dims.from_index(index), &config)),
        );

        debug!(
            "Created terrain grid {}x{}x{} ({} cells)",
            dims.x_size(),
            dims.y_size(),
            dims.z_size(),
            cells.len()
        );

        Ok(Self {
            dims,
            config,
            cells,
        })
    }

    /// Creates a grid with default configuration and the given starting height.
    pub fn with_height(
        x_size: i32,
        y_size: i32,
        z_size: i32,
        default_height: f32,
    ) -> TerrainResult<Self> {
        Self::new(
            x_size,
            y_size,
            z_size,
            &GridConfig::default().with_default_height(default_height),
        )
    }

    /// Returns the grid extents.
    #[must_use]
    pub const fn dims(&self) -> GridDims {
        self.dims
    }

    /// Returns the configuration the cells were created from.
    #[must_use]
    pub const fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a grid holds at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Checks if a coordinate lies inside the grid.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        self.dims.contains(CellCoord::new(x, y, z))
    }

    /// Gets the cell at a coordinate.
    pub fn get_cell(&self, x: i32, y: i32, z: i32) -> TerrainResult<&TerrainCell> {
        let index = self.dims.index_of(CellCoord::new(x, y, z))?;
        Ok(&self.cells[index])
    }

    /// Gets the cell at a coordinate for mutation through its own setters.
    pub fn get_cell_mut(&mut self, x: i32, y: i32, z: i32) -> TerrainResult<&mut TerrainCell> {
        let index = self.dims.index_of(CellCoord::new(x, y, z))?;
        Ok(&mut self.cells[index])
    }

    /// Applies an update to one cell.
    ///
    /// A height change runs classification first; an explicit terrain type is
    /// applied afterwards and therefore wins.
    pub fn update_cell(
        &mut self,
        x: i32,
        y: i32,
        z: i32,
        update: CellUpdate,
    ) -> TerrainResult<&TerrainCell> {
        let cell = self.get_cell_mut(x, y, z)?;
        if let Some(height) = update.height {
            cell.set_height(height);
        }
        if let Some(terrain_type) = update.terrain_type {
            cell.override_terrain_type(terrain_type);
        }
        Ok(&*cell)
    }

    /// Coordinates of the in-bounds cells in the 26-neighborhood of a cell.
    ///
    /// Order is fixed: z outermost, then y, then x.
    pub fn neighbor_coords(&self, x: i32, y: i32, z: i32) -> TerrainResult<Vec<CellCoord>> {
        let center = CellCoord::new(x, y, z);
        self.dims.check(center)?;

        Ok(NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dx, dy, dz)| center.offset(dx, dy, dz))
            .filter(|coord| self.dims.contains(*coord))
            .collect())
    }

    /// The in-bounds cells in the 26-neighborhood of a cell.
    ///
    /// Out-of-range offsets are skipped; the center itself is never included.
    pub fn neighbors(&self, x: i32, y: i32, z: i32) -> TerrainResult<Vec<&TerrainCell>> {
        let coords = self.neighbor_coords(x, y, z)?;
        Ok(coords
            .into_iter()
            .filter_map(|coord| self.dims.to_index(coord))
            .map(|index| &self.cells[index])
            .collect())
    }

    /// The cells of one z layer as rows, y outer and x inner.
    pub fn slice(&self, z: i32) -> TerrainResult<Vec<Vec<&TerrainCell>>> {
        self.dims.check_axis(Axis::Z, z)?;

        let width = self.dims.x_size() as usize;
        let layer = width * self.dims.y_size() as usize;
        let start = z as usize * layer;

        Ok(self.cells[start..start + layer]
            .chunks(width)
            .map(|row| row.iter().collect())
            .collect())
    }

    /// Iterates over every cell in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &TerrainCell> + '_ {
        self.cells.iter()
    }

    /// Iterates mutably over every cell in storage order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut TerrainCell> + '_ {
        self.cells.iter_mut()
    }
}

impl<'a> IntoIterator for &'a TerrainGrid {
    type Item = &'a TerrainCell;
    type IntoIter = std::slice::Iter<'a, TerrainCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
