// File: crates/plot-core/src/lib.rs
// Summary: Library entry point; exports the chart/figure API and headless PNG rendering.

pub mod axis;
pub mod chart;
pub mod crop;
pub mod figure;
pub mod geometry;
pub mod grid;
pub mod legend;
pub mod render;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::Axis;
pub use chart::{Chart, RenderOptions};
pub use figure::Figure;
pub use series::{Marker, Series, SeriesStyle};
pub use text::TextShaper;
pub use theme::Theme;
pub use types::{FigureSize, TextSizes};
pub use view::ViewState;

pub use skia_safe::Color;
