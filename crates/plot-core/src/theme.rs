// File: crates/plot-core/src/theme.rs
// Summary: Color themes for static report rendering.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Figure background outside the plot areas; tight cropping trims to it.
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: Option<skia::Color>,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_border: skia::Color,
    pub legend_text: skia::Color,
}

impl Theme {
    /// Grey plot area with a faint white grid and no spines.
    pub fn darkgrid() -> Self {
        Self {
            name: "darkgrid",
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 0xea, 0xea, 0xf2),
            grid: skia::Color::from_argb(77, 255, 255, 255),
            axis_line: None,
            axis_label: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            tick: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            title: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            legend_fill: skia::Color::from_argb(204, 0xea, 0xea, 0xf2),
            legend_border: skia::Color::from_argb(204, 0xcc, 0xcc, 0xcc),
            legend_text: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            plot_background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(77, 120, 120, 130),
            axis_line: Some(skia::Color::from_argb(255, 60, 60, 70)),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            title: skia::Color::from_argb(255, 20, 20, 30),
            legend_fill: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 210, 210, 215),
            legend_text: skia::Color::from_argb(255, 20, 20, 30),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::darkgrid() }
}
