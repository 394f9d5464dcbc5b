//! Coordinate types for grid cells and grid extents.

use serde::{Deserialize, Serialize};

use crate::error::{TerrainError, TerrainResult};

/// One of the three grid axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Horizontal axis, fastest-varying in storage
    X,
    /// Horizontal axis, row index within a layer
    Y,
    /// Vertical axis, layer index
    Z,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        };
        f.write_str(name)
    }
}

/// The 26 offsets of a 3D Moore neighborhood, z outermost, x innermost.
pub const NEIGHBOR_OFFSETS: [(i32, i32, i32); 26] = [
    (-1, -1, -1),
    (0, -1, -1),
    (1, -1, -1),
    (-1, 0, -1),
    (0, 0, -1),
    (1, 0, -1),
    (-1, 1, -1),
    (0, 1, -1),
    (1, 1, -1),
    (-1, -1, 0),
    (0, -1, 0),
    (1, -1, 0),
    (-1, 0, 0),
    (1, 0, 0),
    (-1, 1, 0),
    (0, 1, 0),
    (1, 1, 0),
    (-1, -1, 1),
    (0, -1, 1),
    (1, -1, 1),
    (-1, 0, 1),
    (0, 0, 1),
    (1, 0, 1),
    (-1, 1, 1),
    (0, 1, 1),
    (1, 1, 1),
];

/// Integer coordinate of a cell in a terrain grid.
///
/// Signed so that callers can express (and be told about) coordinates that
/// fall before the grid origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
    /// Z coordinate (layer)
    pub z: i32,
}

impl CellCoord {
    /// Creates a new cell coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns this coordinate shifted by the given deltas.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// Returns the component along an axis.
    #[must_use]
    pub const fn along(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

impl std::fmt::Display for CellCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<(i32, i32, i32)> for CellCoord {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

/// Unvalidated extents as they appear in serialized form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawDims {
    x_size: i32,
    y_size: i32,
    z_size: i32,
}

/// Validated extents of a terrain grid.
///
/// Every extent is at least 1 and the total cell count fits in `usize`.
/// Cells live at `[0, x_size) × [0, y_size) × [0, z_size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDims", into = "RawDims")]
pub struct GridDims {
    x_size: u32,
    y_size: u32,
    z_size: u32,
    cell_count: usize,
}

impl GridDims {
    /// Validates and creates grid extents.
    ///
    /// Fails with [`TerrainError::InvalidDimension`] naming the first axis
    /// whose size is zero or negative, or [`TerrainError::TooManyCells`] if
    /// the product of the sizes overflows `usize`.
    pub fn new(x_size: i32, y_size: i32, z_size: i32) -> TerrainResult<Self> {
        for (axis, size) in [(Axis::X, x_size), (Axis::Y, y_size), (Axis::Z, z_size)] {
            if size <= 0 {
                return Err(TerrainError::InvalidDimension { axis, size });
            }
        }
        let cell_count = (x_size as usize)
            .checked_mul(y_size as usize)
            .and_then(|layer| layer.checked_mul(z_size as usize))
            .ok_or(TerrainError::TooManyCells {
                x_size,
                y_size,
                z_size,
            })?;
        Ok(Self {
            x_size: x_size as u32,
            y_size: y_size as u32,
            z_size: z_size as u32,
            cell_count,
        })
    }

    /// Extent along the X axis.
    #[must_use]
    pub const fn x_size(&self) -> u32 {
        self.x_size
    }

    /// Extent along the Y axis.
    #[must_use]
    pub const fn y_size(&self) -> u32 {
        self.y_size
    }

    /// Extent along the Z axis.
    #[must_use]
    pub const fn z_size(&self) -> u32 {
        self.z_size
    }

    /// Extent along an arbitrary axis.
    #[must_use]
    pub const fn extent(&self, axis: Axis) -> u32 {
        match axis {
            Axis::X => self.x_size,
            Axis::Y => self.y_size,
            Axis::Z => self.z_size,
        }
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Checks if a coordinate lies inside the grid.
    #[must_use]
    pub fn contains(&self, coord: CellCoord) -> bool {
        self.check(coord).is_ok()
    }

    /// Checks a coordinate, reporting the first axis (x, then y, then z) that is out of range.
    pub fn check(&self, coord: CellCoord) -> TerrainResult<()> {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            self.check_axis(axis, coord.along(axis))?;
        }
        Ok(())
    }

    /// Checks a single component against the extent of its axis.
    pub fn check_axis(&self, axis: Axis, value: i32) -> TerrainResult<()> {
        let extent = self.extent(axis);
        if value < 0 || value as u32 >= extent {
            return Err(TerrainError::OutOfBounds {
                axis,
                value,
                extent,
            });
        }
        Ok(())
    }

    /// Converts a coordinate to a linear storage index (x fastest, then y, then z).
    pub fn index_of(&self, coord: CellCoord) -> TerrainResult<usize> {
        self.check(coord)?;
        let (x, y, z) = (coord.x as usize, coord.y as usize, coord.z as usize);
        let (xs, ys) = (self.x_size as usize, self.y_size as usize);
        Ok((z * ys + y) * xs + x)
    }

    /// Like [`GridDims::index_of`], discarding the error.
    #[must_use]
    pub fn to_index(&self, coord: CellCoord) -> Option<usize> {
        self.index_of(coord).ok()
    }

    /// Converts a linear storage index back to its coordinate.
    #[must_use]
    pub const fn from_index(&self, index: usize) -> CellCoord {
        let xs = self.x_size as usize;
        let ys = self.y_size as usize;
        CellCoord {
            x: (index % xs) as i32,
            y: ((index / xs) % ys) as i32,
            z: (index / (xs * ys)) as i32,
        }
    }
}

impl TryFrom<RawDims> for GridDims {
    type Error = TerrainError;

    fn try_from(raw: RawDims) -> TerrainResult<Self> {
        Self::new(raw.x_size, raw.y_size, raw.z_size)
    }
}

impl From<GridDims> for RawDims {
    fn from(dims: GridDims) -> Self {
        Self {
            x_size: dims.x_size as i32,
            y_size: dims.y_size as i32,
            z_size: dims.z_size as i32,
        }
    }
}
