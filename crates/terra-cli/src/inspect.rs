//! Plain-text rendering of cells, slices, and neighbor sets.

use std::fmt::Write;

use terra_world::TerrainCell;

/// Separator between cells on one printed row.
pub const CELL_SEPARATOR: &str = " | ";

/// Formats one cell as a single inspection line.
#[must_use]
pub fn format_cell(cell: &TerrainCell) -> String {
    let pos = cell.position();
    format!(
        "({}, {}, {}) | Type: {}, Height: {}, Moisture: {}, Temp: {}°C, Elev: {}",
        pos.x,
        pos.y,
        pos.z,
        cell.terrain_type(),
        cell.height(),
        cell.moisture(),
        cell.temperature(),
        cell.elevation_level()
    )
}

/// Formats a z layer, one line per row.
#[must_use]
pub fn format_slice(z: i32, rows: &[Vec<&TerrainCell>]) -> String {
    let mut out = format!("Slice at Z={z}\n");
    for row in rows {
        let line: Vec<String> = row.iter().map(|cell| format_cell(cell)).collect();
        let _ = writeln!(out, "{}", line.join(CELL_SEPARATOR));
    }
    out
}

/// Formats a neighbor set, one cell per line, sorted by position.
#[must_use]
pub fn format_neighbors(center: &TerrainCell, neighbors: &[&TerrainCell]) -> String {
    let mut sorted = neighbors.to_vec();
    sorted.sort_by_key(|cell| {
        let p = cell.position();
        (p.z, p.y, p.x)
    });

    let mut out = format!("Neighbors of {} ({}):\n", center.position(), sorted.len());
    for cell in sorted {
        let _ = writeln!(out, "  {}", format_cell(cell));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use terra_world::{CellUpdate, TerrainGrid, TerrainType};

    #[test]
    fn test_format_cell() {
        let mut grid = TerrainGrid::with_height(3, 3, 2, 0.0).expect("valid grid");
        let cell = grid
            .update_cell(
                1,
                1,
                0,
                CellUpdate::height(5.0).with_terrain_type(TerrainType::Mountain),
            )
            .expect("in bounds");
        assert_eq!(
            format_cell(cell),
            "(1, 1, 0) | Type: mountain, Height: 5, Moisture: 0.5, Temp: 20°C, Elev: 0"
        );
    }

    #[test]
    fn test_format_slice_layout() {
        let grid = TerrainGrid::with_height(2, 3, 1, 0.0).expect("valid grid");
        let rows = grid.slice(0).expect("in bounds");
        let text = format_slice(0, &rows);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Slice at Z=0");
        assert!(lines[1].starts_with("(0, 0, 0) | Type: grass"));
        assert!(lines[1].contains(" | (1, 0, 0) | Type: grass"));
        assert!(lines[3].starts_with("(0, 2, 0)"));
    }

    #[test]
    fn test_format_neighbors_sorted() {
        let grid = TerrainGrid::with_height(2, 2, 2, 0.0).expect("valid grid");
        let center = grid.get_cell(1, 1, 1).expect("in bounds");
        let neighbors = grid.neighbors(1, 1, 1).expect("in bounds");
        let text = format_neighbors(center, &neighbors);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Neighbors of (1, 1, 1) (7):");
        assert_eq!(lines.len(), 8);
        assert!(lines[1].trim_start().starts_with("(0, 0, 0)"));
        assert!(lines[7].trim_start().starts_with("(0, 1, 1)"));
    }
}
