// File: crates/plot-core/src/series.rs
// Summary: Line series model: labelled (x, y) points plus stroke and marker styling.

use skia_safe as skia;

/// Point marker drawn at every data point of a series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    None,
    Circle,
    Square,
    TriangleUp,
    Diamond,
}

/// Stroke and marker appearance; sizes are in points.
#[derive(Clone, Copy, Debug)]
pub struct SeriesStyle {
    pub color: skia::Color,
    pub marker: Marker,
    pub line_width: f32,
    pub marker_size: f32,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            color: skia::Color::from_rgb(64, 160, 255),
            marker: Marker::None,
            line_width: 1.5,
            marker_size: 6.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub data_xy: Vec<(f64, f64)>,
    pub style: SeriesStyle,
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), data_xy: Vec::new(), style: SeriesStyle::default() }
    }

    pub fn with_data(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), data_xy: data, style: SeriesStyle::default() }
    }

    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.data_xy.is_empty()
    }

    /// Stable sort by x; points sharing an x keep their insertion order.
    pub fn sort_by_x(&mut self) {
        self.data_xy.sort_by(|a, b| a.0.total_cmp(&b.0));
    }
}
