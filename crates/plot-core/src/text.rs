// File: crates/plot-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; supports bold runs, alignment and rotation.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Horizontal anchor of a text run relative to its x coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Size (pixels), color and weight of one text run.
#[derive(Clone, Copy, Debug)]
pub struct TextSpec {
    pub size: f32,
    pub color: skia::Color,
    pub bold: bool,
}

impl TextSpec {
    pub fn regular(size: f32, color: skia::Color) -> Self {
        Self { size, color, bold: false }
    }

    pub fn bold(size: f32, color: skia::Color) -> Self {
        Self { size, color, bold: true }
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None::<&str>);
        Self { fonts: fc }
    }

    fn make_style(spec: &TextSpec) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(spec.size.max(1.0));
        ts.set_color(spec.color);
        if spec.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts.set_font_families(&["DejaVu Sans", "Arial", "Helvetica", "Liberation Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, spec: &TextSpec) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, self.fonts.clone());
        let style = Self::make_style(spec);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(100_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, spec: &TextSpec) -> f32 {
        // width of the longest line
        self.layout(text, spec).longest_line()
    }

    /// Draw `text` with its baseline at `y`, anchored at `x` per `align`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, spec: &TextSpec, align: Align) {
        let mut p = self.layout(text, spec);
        let w = p.longest_line();
        let left = match align {
            Align::Left => x,
            Align::Center => x - w * 0.5,
            Align::Right => x - w,
        };
        p.paint(canvas, (left, y - p.alphabetic_baseline()));
    }

    /// Draw `text` rotated 90 degrees counter-clockwise, centered on `(cx, cy)`.
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, cx: f32, cy: f32, spec: &TextSpec) {
        let mut p = self.layout(text, spec);
        let w = p.longest_line();
        let h = p.height();
        canvas.save();
        canvas.rotate(-90.0, Some(skia::Point::new(cx, cy)));
        p.paint(canvas, (cx - w * 0.5, cy - h * 0.5));
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
