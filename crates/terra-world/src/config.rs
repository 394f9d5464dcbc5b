//! Grid configuration.
//!
//! Default attribute values for freshly allocated cells live here instead of
//! in module-level constants, so grids with different defaults can coexist.
//! A configuration can be loaded from and saved to a TOML file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::{info, warn};

use crate::terrain::TerrainType;

/// Attribute values every new cell starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellDefaults {
    /// Initial moisture (0.0 - 1.0)
    pub moisture: f32,
    /// Initial temperature in degrees Celsius
    pub temperature: f32,
    /// Initial vegetation density (0.0 - 1.0)
    pub vegetation_density: f32,
    /// Initial air quality (0.0 - 1.0)
    pub air_quality: f32,
    /// Initial elevation level
    pub elevation_level: i32,
    /// Initial weather shielding
    pub weather_safe: bool,
    /// Terrain type assigned before any classification runs
    pub terrain_type: TerrainType,
}

impl Default for CellDefaults {
    fn default() -> Self {
        Self {
            moisture: 0.5,
            temperature: 20.0,
            vegetation_density: 0.0,
            air_quality: 1.0,
            elevation_level: 0,
            weather_safe: false,
            terrain_type: TerrainType::Grass,
        }
    }
}

/// Grid construction parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Height given to every cell at construction
    pub default_height: f32,
    /// Edge length of each cell
    pub cell_size: f32,
    /// Remaining per-cell defaults
    pub cell: CellDefaults,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            default_height: 0.0,
            cell_size: 1.0,
            cell: CellDefaults::default(),
        }
    }
}

impl GridConfig {
    /// Returns the default configuration with a different starting height.
    #[must_use]
    pub fn with_default_height(mut self, height: f32) -> Self {
        self.default_height = height;
        self
    }

    /// Returns the configuration with a different cell size.
    #[must_use]
    pub fn with_cell_size(mut self, cell_size: f32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Load configuration from a specific path.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("Grid config not found at {}, using defaults", path.display());
            return Self::default();
        }

        match fs::File::open(path) {
            Ok(mut file) => {
                let mut contents = String::new();
                if let Err(e) = file.read_to_string(&mut contents) {
                    warn!("Failed to read grid config: {e}");
                    return Self::default();
                }

                match toml::from_str::<Self>(&contents) {
                    Ok(mut config) => {
                        config.validate();
                        info!("Loaded grid config from {}", path.display());
                        config
                    },
                    Err(e) => {
                        warn!("Failed to parse grid config: {e}");
                        Self::default()
                    },
                }
            },
            Err(e) => {
                warn!("Failed to open grid config: {e}");
                Self::default()
            },
        }
    }

    /// Save configuration to a specific path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let mut file = fs::File::create(path)?;
        file.write_all(contents.as_bytes())?;

        info!("Saved grid config to {}", path.display());
        Ok(())
    }

    /// Clamp configuration values to the ranges cells accept.
    pub fn validate(&mut self) {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            warn!("Invalid cell size {}, falling back to 1.0", self.cell_size);
            self.cell_size = 1.0;
        }

        self.cell.moisture = self.cell.moisture.clamp(0.0, 1.0);
        self.cell.vegetation_density = self.cell.vegetation_density.clamp(0.0, 1.0);
        self.cell.air_quality = self.cell.air_quality.clamp(0.0, 1.0);
    }
}
