// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; exports dataset loading, scene construction and rendering.

pub mod axis;
pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod scale;
pub mod scene;
pub mod svg;
pub mod text;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use axis::{Axis, AxisSelection, AxisSide, Tick};
pub use chart::ScatterChart;
pub use config::ChartConfig;
pub use data::{Dataset, Field, Record};
pub use error::ChartError;
pub use scale::{LinearScale, Padding};
pub use scene::{build_scene, Marker, MarkerLabel, Scene};
pub use theme::Theme;
pub use tooltip::{HoverEvent, HoverTracker, Tooltip};
