//! Per-frame styling policy for the stadium grid.
//!
//! Everything here is a pure function of its arguments: the painting side
//! hands in the surface dimensions, the frame clock, the stress-test
//! intensity and a [`FlickerField`], and gets back screen rectangles and CSS
//! fills. The canvas itself never appears in this module.

use serde::{Deserialize, Serialize};

use crate::colors::{self, rgb_css, rgba_css};
use crate::grid::{Block, GridConfig};

/// Margin between the drawing surface edge and the grid, CSS pixels per side.
pub const SURFACE_PADDING: f64 = 20.0;
/// Gap subtracted from each cell rectangle so streets read between blocks.
pub const CELL_GAP: f64 = 1.0;

/// Fraction of the grid half-width treated as the urban core in the
/// stress-test visualization.
const CORE_RADIUS: f64 = 0.3;

/// Visualization mode for the stadium grid.
///
/// `Hero`, `Raw` and `Heatmap` are accepted by the interface but currently
/// render as the flat neutral fill; they are reserved, not bugs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderMode {
    Hero,
    Master,
    Raw,
    Heatmap,
    Simulation,
    Wireframe,
}

impl RenderMode {
    /// Animated modes redraw every frame; the rest draw once per change.
    pub fn is_animated(self) -> bool {
        matches!(self, RenderMode::Master | RenderMode::Simulation)
    }
}

/// Screen-space placement of the grid inside a drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub cell_size: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// A block's screen rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl GridLayout {
    /// Fit the grid into a `width` x `height` surface, centered, with square
    /// cells. Returns `None` when the surface is degenerate; the caller
    /// skips the frame entirely rather than failing.
    pub fn fit(config: &GridConfig, width: f64, height: f64) -> Option<Self> {
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        let avail_w = width - SURFACE_PADDING * 2.0;
        let avail_h = height - SURFACE_PADDING * 2.0;
        if avail_w <= 0.0 || avail_h <= 0.0 {
            return None;
        }
        let cell_size = (avail_w / config.cols as f64).min(avail_h / config.rows as f64);
        Some(Self {
            cell_size,
            offset_x: (width - cell_size * config.cols as f64) / 2.0,
            offset_y: (height - cell_size * config.rows as f64) / 2.0,
        })
    }

    /// Screen rectangle for one block, or `None` when the gapped extent
    /// collapses below zero.
    pub fn cell_rect(&self, block: &Block) -> Option<CellRect> {
        let w = self.cell_size - CELL_GAP;
        let h = self.cell_size - CELL_GAP;
        if w < 0.0 || h < 0.0 {
            return None;
        }
        Some(CellRect {
            x: self.offset_x + block.column as f64 * self.cell_size,
            y: self.offset_y + block.row as f64 * self.cell_size,
            w,
            h,
        })
    }
}

/// Resolved fill for one block on one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Fill {
    pub color: String,
    pub alpha: f64,
}

/// Deterministic per-cell unit draws for the master-mode activity flicker.
///
/// Seeded once per frame (from the frame clock in production, from a fixed
/// value in tests) so the styling pipeline itself stays free of hidden
/// randomness.
#[derive(Clone, Copy, Debug)]
pub struct FlickerField {
    seed: u32,
}

impl FlickerField {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    pub fn from_clock(time_ms: f64) -> Self {
        Self::new(time_ms as i64 as u32)
    }

    /// Unit draw in [0, 1) keyed by cell id.
    pub fn draw(&self, cell_id: u32) -> f64 {
        let mut key = [0u8; 8];
        key[..4].copy_from_slice(&self.seed.to_le_bytes());
        key[4..].copy_from_slice(&cell_id.to_le_bytes());
        crc32fast::hash(&key) as f64 / (u32::MAX as f64 + 1.0)
    }
}

/// Activity pulse travelling outward from the grid center.
pub fn center_pulse(time_ms: f64, center_distance: f64) -> f64 {
    (time_ms * 0.003 - center_distance * 0.2).sin()
}

/// Core heat opacity for the stress test. Intensity is clamped here, so any
/// out-of-range caller value still yields an alpha in [0.2, 1.0].
pub fn core_heat_alpha(intensity: f64) -> f64 {
    0.2 + intensity.clamp(0.0, 1.0) * 0.8
}

/// Periphery drain opacity for the stress test, always in [0.4, 1.0].
pub fn periphery_drain_alpha(intensity: f64) -> f64 {
    1.0 - intensity.clamp(0.0, 1.0) * 0.6
}

/// Resolve the fill for one block under the active mode.
pub fn block_fill(
    config: &GridConfig,
    block: &Block,
    mode: RenderMode,
    time_ms: f64,
    intensity: f64,
    flicker: &FlickerField,
) -> Fill {
    match mode {
        RenderMode::Master => {
            let banded = if block.density > 0.6 {
                colors::INK
            } else if block.density > 0.3 {
                colors::GRAPHITE
            } else {
                colors::FOG
            };
            let pulse = center_pulse(time_ms, config.center_distance(block.column, block.row));
            let color = if pulse > 0.8 && flicker.draw(block.id) > 0.7 {
                colors::ACCENT
            } else {
                banded
            };
            Fill {
                color: rgb_css(color),
                alpha: 1.0,
            }
        }
        RenderMode::Simulation => {
            let norm_dist = config.center_distance(block.column, block.row)
                / (config.cols as f64 / 2.0);
            let color = if norm_dist < CORE_RADIUS {
                rgba_css(colors::EMBER, core_heat_alpha(intensity))
            } else {
                rgba_css(colors::DRAIN, periphery_drain_alpha(intensity))
            };
            Fill { color, alpha: 1.0 }
        }
        RenderMode::Wireframe => Fill {
            color: rgb_css(colors::INK),
            alpha: 0.05,
        },
        RenderMode::Hero | RenderMode::Raw | RenderMode::Heatmap => Fill {
            color: rgb_css(colors::NEUTRAL),
            alpha: 1.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::density_at;

    fn block(column: usize, row: usize) -> Block {
        Block {
            column,
            row,
            density: density_at(column, row),
            id: (column * 1000 + row) as u32,
        }
    }

    #[test]
    fn animated_modes() {
        assert!(RenderMode::Master.is_animated());
        assert!(RenderMode::Simulation.is_animated());
        for mode in [
            RenderMode::Hero,
            RenderMode::Raw,
            RenderMode::Heatmap,
            RenderMode::Wireframe,
        ] {
            assert!(!mode.is_animated());
        }
    }

    #[test]
    fn degenerate_surfaces_produce_no_layout() {
        let config = GridConfig::default();
        assert_eq!(GridLayout::fit(&config, 0.0, 600.0), None);
        assert_eq!(GridLayout::fit(&config, 800.0, 0.0), None);
        assert_eq!(GridLayout::fit(&config, -10.0, -10.0), None);
        // Too small for the fixed padding counts as degenerate too.
        assert_eq!(GridLayout::fit(&config, 30.0, 30.0), None);
    }

    #[test]
    fn layout_centers_the_grid() {
        let config = GridConfig::default();
        let layout = GridLayout::fit(&config, 800.0, 600.0).expect("layout");
        let grid_w = layout.cell_size * config.cols as f64;
        let grid_h = layout.cell_size * config.rows as f64;
        assert!((layout.offset_x * 2.0 + grid_w - 800.0).abs() < 1e-9);
        assert!((layout.offset_y * 2.0 + grid_h - 600.0).abs() < 1e-9);
        assert!(grid_w <= 800.0 - SURFACE_PADDING * 2.0 + 1e-9);
    }

    #[test]
    fn sub_gap_cells_are_skipped() {
        let layout = GridLayout {
            cell_size: 0.5,
            offset_x: 0.0,
            offset_y: 0.0,
        };
        assert_eq!(layout.cell_rect(&block(3, 3)), None);
    }

    #[test]
    fn stress_opacities_stay_clamped() {
        for intensity in [-1.0, 0.0, 0.5, 1.0, 2.0] {
            let core = core_heat_alpha(intensity);
            let periphery = periphery_drain_alpha(intensity);
            assert!((0.2..=1.0).contains(&core), "core alpha {core}");
            assert!((0.4..=1.0).contains(&periphery), "periphery alpha {periphery}");
        }
    }

    #[test]
    fn simulation_fill_splits_core_and_periphery() {
        let config = GridConfig::default();
        let flicker = FlickerField::new(0);
        // Near the center: core heat at baseline intensity.
        let core = block_fill(&config, &block(31, 17), RenderMode::Simulation, 0.0, 0.0, &flicker);
        assert_eq!(core.color, "rgba(215,78,70,0.2)");
        // Far from the center: periphery drain, fully opaque at zero load.
        let edge = block_fill(&config, &block(55, 16), RenderMode::Simulation, 0.0, 0.0, &flicker);
        assert_eq!(edge.color, "rgba(142,142,147,1)");
    }

    #[test]
    fn placeholder_modes_fall_back_to_neutral() {
        let config = GridConfig::default();
        let flicker = FlickerField::new(0);
        for mode in [RenderMode::Hero, RenderMode::Raw, RenderMode::Heatmap] {
            let fill = block_fill(&config, &block(20, 10), mode, 123.0, 0.7, &flicker);
            assert_eq!(fill.color, "rgb(229,229,234)");
            assert_eq!(fill.alpha, 1.0);
        }
    }

    #[test]
    fn wireframe_is_a_faint_ghost() {
        let config = GridConfig::default();
        let fill = block_fill(
            &config,
            &block(20, 10),
            RenderMode::Wireframe,
            0.0,
            0.0,
            &FlickerField::new(0),
        );
        assert_eq!(fill.alpha, 0.05);
    }

    #[test]
    fn flicker_draws_are_deterministic_per_seed() {
        let a = FlickerField::new(42);
        let b = FlickerField::new(42);
        let c = FlickerField::new(43);
        for id in [0u32, 17, 20_010, 59_032] {
            let draw = a.draw(id);
            assert!((0.0..1.0).contains(&draw));
            assert_eq!(draw, b.draw(id));
        }
        assert_ne!(a.draw(20_010), c.draw(20_010));
    }

    #[test]
    fn master_bands_follow_density() {
        let config = GridConfig::default();
        // Quiet flicker: pick a time where the pulse is deeply negative for
        // the probed cells so the banded color always wins.
        let flicker = FlickerField::new(7);
        let probe = |density: f64| {
            let mut b = block(20, 10);
            b.density = density;
            let mut time = 0.0;
            loop {
                if center_pulse(time, config.center_distance(20, 10)) < 0.0 {
                    break;
                }
                time += 100.0;
            }
            block_fill(&config, &b, RenderMode::Master, time, 0.0, &flicker).color
        };
        assert_eq!(probe(0.9), "rgb(29,29,31)");
        assert_eq!(probe(0.45), "rgb(134,134,139)");
        assert_eq!(probe(0.1), "rgb(209,209,214)");
    }
}
