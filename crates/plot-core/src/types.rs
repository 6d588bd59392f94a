// File: crates/plot-core/src/types.rs
// Summary: Shared units and sizes (inches, points, pixels) and per-role font sizes.

/// Points per inch; font sizes and stroke widths are given in points.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Default figure width in inches.
pub const WIDTH_IN: f32 = 14.0;
/// Default figure height in inches.
pub const HEIGHT_IN: f32 = 8.0;
/// Default output resolution.
pub const DPI: f32 = 300.0;

/// Physical figure size plus resolution; converts to pixel dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureSize {
    pub width_in: f32,
    pub height_in: f32,
    pub dpi: f32,
}

impl FigureSize {
    pub const fn new(width_in: f32, height_in: f32, dpi: f32) -> Self {
        Self { width_in, height_in, dpi }
    }

    /// Pixel width, at least one pixel.
    pub fn width_px(&self) -> i32 {
        ((self.width_in * self.dpi).round() as i32).max(1)
    }

    /// Pixel height, at least one pixel.
    pub fn height_px(&self) -> i32 {
        ((self.height_in * self.dpi).round() as i32).max(1)
    }

    /// Convert a length in points to pixels at this resolution.
    #[inline]
    pub fn pt(&self, points: f32) -> f32 {
        points * self.dpi / POINTS_PER_INCH
    }

    /// Convert a length in inches to pixels at this resolution.
    #[inline]
    pub fn inch(&self, inches: f32) -> f32 {
        inches * self.dpi
    }
}

impl Default for FigureSize {
    fn default() -> Self {
        Self::new(WIDTH_IN, HEIGHT_IN, DPI)
    }
}

/// Font sizes in points for the text roles of a panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextSizes {
    pub title: f32,
    pub label: f32,
    pub tick: f32,
    pub legend: f32,
}

impl Default for TextSizes {
    fn default() -> Self {
        Self { title: 14.0, label: 12.0, tick: 10.0, legend: 11.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_size_follows_dpi() {
        let s = FigureSize::new(14.0, 8.0, 300.0);
        assert_eq!(s.width_px(), 4200);
        assert_eq!(s.height_px(), 2400);
        assert!((s.pt(72.0) - 300.0).abs() < 1e-3);
    }

    #[test]
    fn tiny_sizes_clamp_to_one_pixel() {
        let s = FigureSize::new(0.0, 0.001, 10.0);
        assert_eq!(s.width_px(), 1);
        assert_eq!(s.height_px(), 1);
    }
}
