pub mod colors;
pub mod grid;
pub mod render;
pub mod scatter;
pub mod sim;

pub use grid::{Block, CityGrid, GridConfig};
pub use render::{CellRect, Fill, FlickerField, GridLayout, RenderMode};
pub use scatter::{PolicyZone, SamplePoint};
pub use sim::{Predictor, VitalityReadout};
