//! Procedural stadium city grid.
//!
//! The study area is approximated by a pill-shaped silhouette filled with a
//! regular block grid. Two central arteries plus a secondary road lattice are
//! carved out; every surviving cell becomes a [`Block`] with a deterministic
//! density scalar. Synthesis is pure: the same [`GridConfig`] always yields
//! the same block sequence, ordered ascending column then row.

use serde::{Deserialize, Serialize};

/// Grid parameters. Fixed in the app today, but explicit so synthesis stays
/// a pure function of its inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub cols: usize,
    pub rows: usize,
    /// Half-width (in cells) of the two central arteries.
    pub artery_half_width: usize,
    /// Every n-th column/row is a secondary road.
    pub road_spacing: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        // 60 columns at a 1.8 aspect ratio roughly matches the district's
        // east-west elongation.
        Self {
            cols: 60,
            rows: (60.0 / 1.8) as usize,
            artery_half_width: 2,
            road_spacing: 8,
        }
    }
}

impl GridConfig {
    /// Map a cell coordinate into roughly [-1, 1] on both axes.
    pub fn normalized(&self, column: usize, row: usize) -> (f64, f64) {
        (
            (column as f64 / self.cols as f64) * 2.0 - 1.0,
            (row as f64 / self.rows as f64) * 2.0 - 1.0,
        )
    }

    /// Stadium silhouette test: a rectangular body with rounded end caps.
    pub fn inside_stadium(&self, column: usize, row: usize) -> bool {
        let (nx, ny) = self.normalized(column, row);
        let body = nx.abs() < 0.5 && ny.abs() < 0.9;
        let cap_dist = ((nx.abs() - 0.5).powi(2) + (ny * 1.4).powi(2)).sqrt();
        body || cap_dist < 0.7
    }

    /// Road test: central cross arteries plus the secondary lattice.
    pub fn is_road(&self, column: usize, row: usize) -> bool {
        let mid_col = self.cols / 2;
        let mid_row = self.rows / 2;
        column.abs_diff(mid_col) < self.artery_half_width
            || row.abs_diff(mid_row) < self.artery_half_width
            || column % self.road_spacing == 0
            || row % self.road_spacing == 0
    }

    /// Grid center in cell coordinates.
    pub fn center(&self) -> (f64, f64) {
        (self.cols as f64 / 2.0, self.rows as f64 / 2.0)
    }

    /// Euclidean distance from a cell to the grid center.
    pub fn center_distance(&self, column: usize, row: usize) -> f64 {
        let (cx, cy) = self.center();
        ((column as f64 - cx).powi(2) + (row as f64 - cy).powi(2)).sqrt()
    }
}

/// Pseudo-periodic density field, always in [0, 1].
pub fn density_at(column: usize, row: usize) -> f64 {
    ((column as f64 * 0.2).sin() * (row as f64 * 0.2).cos()).abs()
}

/// A synthesized building block.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub column: usize,
    pub row: usize,
    /// Density scalar in [0, 1], immutable after synthesis.
    pub density: f64,
    /// Stable identifier derived from the coordinates.
    pub id: u32,
}

/// The synthesized city: config plus every block inside the silhouette that
/// is not a road cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CityGrid {
    pub config: GridConfig,
    pub blocks: Vec<Block>,
}

impl CityGrid {
    pub fn synthesize(config: GridConfig) -> Self {
        let mut blocks = Vec::new();
        for column in 0..config.cols {
            for row in 0..config.rows {
                if !config.inside_stadium(column, row) || config.is_road(column, row) {
                    continue;
                }
                blocks.push(Block {
                    column,
                    row,
                    density: density_at(column, row),
                    id: (column * 1000 + row) as u32,
                });
            }
        }
        Self { config, blocks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff < 1e-4,
            "expected {expected}, got {actual} (diff: {diff})"
        );
    }

    #[test]
    fn default_config_dimensions() {
        let config = GridConfig::default();
        assert_eq!(config.cols, 60);
        assert_eq!(config.rows, 33);
    }

    #[test]
    fn synthesis_is_deterministic() {
        let a = CityGrid::synthesize(GridConfig::default());
        let b = CityGrid::synthesize(GridConfig::default());
        assert_eq!(a, b);
        assert!(!a.blocks.is_empty());
    }

    #[test]
    fn blocks_are_ordered_column_major() {
        let city = CityGrid::synthesize(GridConfig::default());
        for pair in city.blocks.windows(2) {
            let key = |b: &Block| (b.column, b.row);
            assert!(key(&pair[0]) < key(&pair[1]));
        }
    }

    #[test]
    fn every_block_passes_boundary_and_no_road_test() {
        let city = CityGrid::synthesize(GridConfig::default());
        for block in &city.blocks {
            assert!(city.config.inside_stadium(block.column, block.row));
            assert!(!city.config.is_road(block.column, block.row));
        }
    }

    #[test]
    fn excluded_cells_fail_boundary_or_are_roads() {
        let city = CityGrid::synthesize(GridConfig::default());
        let config = city.config;
        let member: std::collections::HashSet<(usize, usize)> =
            city.blocks.iter().map(|b| (b.column, b.row)).collect();
        for column in 0..config.cols {
            for row in 0..config.rows {
                if !member.contains(&(column, row)) {
                    assert!(
                        !config.inside_stadium(column, row) || config.is_road(column, row),
                        "cell ({column},{row}) excluded without cause"
                    );
                }
            }
        }
    }

    #[test]
    fn density_stays_in_unit_range() {
        let city = CityGrid::synthesize(GridConfig::default());
        for block in &city.blocks {
            assert!((0.0..=1.0).contains(&block.density));
        }
    }

    #[test]
    fn central_cross_cell_is_a_road() {
        let config = GridConfig::default();
        // (30,16) sits on both arteries: mid column 30, mid row 16.
        assert!(config.is_road(30, 16));
        let city = CityGrid::synthesize(config);
        assert!(!city.blocks.iter().any(|b| b.column == 30 && b.row == 16));
    }

    #[test]
    fn density_field_at_reference_cell() {
        // sin(1.0) * cos(1.0), absolute value.
        assert_close(density_at(5, 5), 0.454649);
    }

    #[test]
    fn far_corner_cell_falls_outside_the_caps() {
        // (5,5) normalizes to (-0.833, -0.697): outside the rectangular body
        // and at cap distance ~1.031, beyond the 0.7 radius.
        let config = GridConfig::default();
        assert!(!config.inside_stadium(5, 5));
    }

    #[test]
    fn interior_cell_synthesizes_as_a_block() {
        let config = GridConfig::default();
        assert!(config.inside_stadium(20, 10));
        assert!(!config.is_road(20, 10));
        let city = CityGrid::synthesize(config);
        let block = city
            .blocks
            .iter()
            .find(|b| b.column == 20 && b.row == 10)
            .expect("cell (20,10) should survive synthesis");
        assert_eq!(block.id, 20_010);
        assert_close(block.density, ((4.0f64).sin() * (2.0f64).cos()).abs());
    }
}
