// File: crates/plot-core/src/chart.rs
// Summary: Chart (one panel) model, render options, and the per-panel Skia drawing routines.

use anyhow::Result;
use skia_safe as skia;

use crate::axis::Axis;
use crate::geometry::RectF;
use crate::legend::{best_corner, corner_rect};
use crate::render;
use crate::series::{Marker, Series};
use crate::text::{Align, TextShaper, TextSpec};
use crate::theme::Theme;
use crate::types::{FigureSize, TextSizes};
use crate::view::{ViewState, DEFAULT_MARGIN};

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub size: FigureSize,
    pub theme: Theme,
    pub text: TextSizes,
    /// Skip all text (titles, ticks, legend labels); layout space is still reserved.
    pub draw_labels: bool,
    /// Crop the output to the drawn content plus `tight_pad_in`.
    pub tight: bool,
    pub tight_pad_in: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: FigureSize::default(),
            theme: Theme::default(),
            text: TextSizes::default(),
            draw_labels: true,
            tight: true,
            tight_pad_in: 0.1,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: bool,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            legend: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axis ranges to the data, padding each side by `margin` of the span.
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self, margin).apply_to_chart(self);
    }

    /// Same as `autoscale_axes` with the default 5% margin.
    pub fn autoscale(&mut self) {
        self.autoscale_axes(DEFAULT_MARGIN);
    }

    /// Render to an RGBA8 buffer. Returns (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let img = render::rasterize(&[self], 1, opts)?;
        let stride = img.width as usize * 4;
        Ok((img.pixels, img.width, img.height, stride))
    }

    /// Render to in-memory PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        render::encode_png(&render::rasterize(&[self], 1, opts)?)
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        render::write_file(output_png_path.as_ref(), &bytes)
    }
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

// ---- panel drawing ------------------------------------------------------------

/// Everything a panel needs while drawing: options, pixel conversions and text.
pub(crate) struct PanelCtx<'a> {
    pub opts: &'a RenderOptions,
    pub shaper: Option<&'a TextShaper>,
}

impl PanelCtx<'_> {
    fn pt(&self, points: f32) -> f32 { self.opts.size.pt(points) }

    fn spec(&self, points: f32, color: skia::Color, bold: bool) -> TextSpec {
        let size = self.pt(points);
        if bold { TextSpec::bold(size, color) } else { TextSpec::regular(size, color) }
    }

    /// Text width in pixels; estimated from the character count when text is disabled.
    fn text_width(&self, text: &str, spec: &TextSpec) -> f32 {
        match self.shaper {
            Some(s) => s.measure_width(text, spec),
            None => text.chars().count() as f32 * spec.size * 0.6,
        }
    }
}

/// Plot rectangle left after reserving room for title, labels and tick labels.
pub(crate) fn plot_rect(chart: &Chart, cell: &RectF, ctx: &PanelCtx) -> RectF {
    let sizes = &ctx.opts.text;
    let pad = ctx.opts.size.inch(0.1);
    let title_h = if chart.title.is_empty() { 0.0 } else { ctx.pt(sizes.title) * 1.25 + ctx.pt(6.0) };
    let label_h = ctx.pt(sizes.label) * 1.25 + ctx.pt(4.0);
    let tick_h = ctx.pt(sizes.tick) * 1.25 + ctx.pt(3.5);

    let tick_spec = ctx.spec(sizes.tick, ctx.opts.theme.tick, false);
    let tick_w = chart
        .y_axis
        .ticks()
        .iter()
        .map(|(_, l)| ctx.text_width(l, &tick_spec))
        .fold(0.0f32, f32::max)
        + ctx.pt(3.5);

    RectF::from_ltrb(
        cell.left + pad + label_h + tick_w,
        cell.top + pad + title_h,
        cell.right - pad - ctx.pt(8.0),
        cell.bottom - pad - label_h - tick_h,
    )
}

pub(crate) fn draw_panel(canvas: &skia::Canvas, chart: &Chart, cell: &RectF, ctx: &PanelCtx) {
    let theme = &ctx.opts.theme;
    let plot = plot_rect(chart, cell, ctx);
    if plot.width() <= 1.0 || plot.height() <= 1.0 {
        tracing::warn!(title = %chart.title, "panel too small to draw");
        return;
    }

    let mut bg = skia::Paint::default();
    bg.set_color(theme.plot_background);
    canvas.draw_rect(plot.to_skia(), &bg);

    draw_grid(canvas, &plot, chart, ctx);
    if let Some(c) = theme.axis_line {
        draw_axes(canvas, &plot, c, ctx.pt(1.0));
    }

    let runs: Vec<Vec<Vec<(f32, f32)>>> = chart
        .series
        .iter()
        .map(|s| to_pixel_runs(&plot, &chart.x_axis, &chart.y_axis, &s.data_xy))
        .collect();

    canvas.save();
    canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
    for (s, series_runs) in chart.series.iter().zip(&runs) {
        draw_line_series(canvas, s, series_runs, ctx);
    }
    canvas.restore();

    if let Some(shaper) = ctx.shaper {
        draw_labels(canvas, shaper, &plot, chart, ctx);
    }
    if chart.legend && !chart.series.is_empty() {
        let lines: Vec<Vec<(f32, f32)>> = runs.into_iter().flatten().collect();
        draw_legend(canvas, &plot, chart, &lines, ctx);
    }
}

/// Pixel positions of `data`, split into connected runs. A non-finite point ends a run
/// and is itself not drawn.
pub(crate) fn to_pixel_runs(plot: &RectF, x_axis: &Axis, y_axis: &Axis, data: &[(f64, f64)]) -> Vec<Vec<(f32, f32)>> {
    let mut runs = Vec::new();
    let mut run = Vec::new();
    for &(x, y) in data {
        if x.is_finite() && y.is_finite() {
            run.push((x_to_px(plot, x_axis, x), y_to_px(plot, y_axis, y)));
        } else if !run.is_empty() {
            runs.push(std::mem::take(&mut run));
        }
    }
    if !run.is_empty() {
        runs.push(run);
    }
    runs
}

fn x_to_px(plot: &RectF, axis: &Axis, x: f64) -> f32 {
    plot.left + ((x - axis.min) / axis.span()) as f32 * plot.width()
}

fn y_to_px(plot: &RectF, axis: &Axis, y: f64) -> f32 {
    plot.bottom - ((y - axis.min) / axis.span()) as f32 * plot.height()
}

fn draw_grid(canvas: &skia::Canvas, plot: &RectF, chart: &Chart, ctx: &PanelCtx) {
    let mut paint = skia::Paint::default();
    paint.set_color(ctx.opts.theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(ctx.pt(0.8));

    // verticals
    for (x, _) in chart.x_axis.ticks() {
        let px = x_to_px(plot, &chart.x_axis, x);
        canvas.draw_line((px, plot.top), (px, plot.bottom), &paint);
    }
    // horizontals
    for (y, _) in chart.y_axis.ticks() {
        let py = y_to_px(plot, &chart.y_axis, y);
        canvas.draw_line((plot.left, py), (plot.right, py), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, plot: &RectF, color: skia::Color, width: f32) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(color);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(width);

    canvas.draw_line((plot.left, plot.bottom), (plot.right, plot.bottom), &axis_paint);
    canvas.draw_line((plot.left, plot.top), (plot.left, plot.bottom), &axis_paint);
}

fn draw_line_series(canvas: &skia::Canvas, series: &Series, runs: &[Vec<(f32, f32)>], ctx: &PanelCtx) {
    let style = &series.style;
    let mut path = skia::Path::new();
    for run in runs.iter().filter(|r| r.len() >= 2) {
        path.move_to(run[0]);
        for &p in &run[1..] {
            path.line_to(p);
        }
    }
    if !path.is_empty() {
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(ctx.pt(style.line_width));
        stroke.set_stroke_join(skia::paint::Join::Round);
        stroke.set_stroke_cap(skia::paint::Cap::Round);
        stroke.set_color(style.color);
        canvas.draw_path(&path, &stroke);
    }

    let radius = ctx.pt(style.marker_size) * 0.5;
    for &(x, y) in runs.iter().flatten() {
        draw_marker(canvas, style.marker, x, y, radius, style.color);
    }
}

pub(crate) fn draw_marker(canvas: &skia::Canvas, marker: Marker, x: f32, y: f32, r: f32, color: skia::Color) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(color);

    match marker {
        Marker::None => {}
        Marker::Circle => {
            canvas.draw_circle((x, y), r, &fill);
        }
        Marker::Square => {
            // squares look larger than circles of the same size
            let h = r * 0.88;
            canvas.draw_rect(skia::Rect::from_ltrb(x - h, y - h, x + h, y + h), &fill);
        }
        Marker::TriangleUp => {
            let mut path = skia::Path::new();
            path.move_to((x, y - r));
            path.line_to((x + r * 0.87, y + r * 0.5));
            path.line_to((x - r * 0.87, y + r * 0.5));
            path.close();
            canvas.draw_path(&path, &fill);
        }
        Marker::Diamond => {
            let mut path = skia::Path::new();
            path.move_to((x, y - r));
            path.line_to((x + r * 0.7, y));
            path.line_to((x, y + r));
            path.line_to((x - r * 0.7, y));
            path.close();
            canvas.draw_path(&path, &fill);
        }
    }
}

fn draw_labels(canvas: &skia::Canvas, shaper: &TextShaper, plot: &RectF, chart: &Chart, ctx: &PanelCtx) {
    let theme = &ctx.opts.theme;
    let sizes = &ctx.opts.text;
    let tick_spec = ctx.spec(sizes.tick, theme.tick, false);
    let tick_pad = ctx.pt(3.5);

    for (x, label) in chart.x_axis.ticks() {
        let px = x_to_px(plot, &chart.x_axis, x);
        shaper.draw(canvas, &label, px, plot.bottom + tick_pad + tick_spec.size, &tick_spec, Align::Center);
    }
    let mut y_label_left = plot.left;
    for (y, label) in chart.y_axis.ticks() {
        let py = y_to_px(plot, &chart.y_axis, y);
        shaper.draw(canvas, &label, plot.left - tick_pad, py + tick_spec.size * 0.35, &tick_spec, Align::Right);
        y_label_left = y_label_left.min(plot.left - tick_pad - shaper.measure_width(&label, &tick_spec));
    }

    let label_spec = ctx.spec(sizes.label, theme.axis_label, true);
    let x_label_y = plot.bottom + tick_pad + tick_spec.size * 1.25 + ctx.pt(4.0) + label_spec.size;
    shaper.draw(canvas, &chart.x_axis.label, plot.center_x(), x_label_y, &label_spec, Align::Center);
    let y_label_cx = y_label_left - ctx.pt(4.0) - label_spec.size * 0.6;
    shaper.draw_vertical(canvas, &chart.y_axis.label, y_label_cx, plot.center_y(), &label_spec);

    if !chart.title.is_empty() {
        let title_spec = ctx.spec(sizes.title, theme.title, true);
        shaper.draw(canvas, &chart.title, plot.center_x(), plot.top - ctx.pt(6.0), &title_spec, Align::Center);
    }
}

fn draw_legend(canvas: &skia::Canvas, plot: &RectF, chart: &Chart, lines: &[Vec<(f32, f32)>], ctx: &PanelCtx) {
    let theme = &ctx.opts.theme;
    let spec = ctx.spec(ctx.opts.text.legend, theme.legend_text, false);
    let font = spec.size;
    let pad = font * 0.5;
    let row_h = font * 1.4;
    let handle = font * 2.0;
    let gap = font * 0.8;
    let text_w = chart
        .series
        .iter()
        .map(|s| ctx.text_width(&s.label, &spec))
        .fold(0.0f32, f32::max);
    let w = pad * 2.0 + handle + gap + text_w;
    let h = pad * 2.0 + row_h * chart.series.len() as f32;
    let margin = font * 0.5;

    let corner = best_corner(plot, w, h, margin, lines);
    let r = corner_rect(plot, w, h, margin, corner);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(theme.legend_fill);
    canvas.draw_round_rect(r.to_skia(), font * 0.3, font * 0.3, &fill);
    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(ctx.pt(0.8));
    border.set_color(theme.legend_border);
    canvas.draw_round_rect(r.to_skia(), font * 0.3, font * 0.3, &border);

    for (i, s) in chart.series.iter().enumerate() {
        let cy = r.top + pad + row_h * (i as f32 + 0.5);
        let x0 = r.left + pad;
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(ctx.pt(s.style.line_width));
        stroke.set_color(s.style.color);
        canvas.draw_line((x0, cy), (x0 + handle, cy), &stroke);
        draw_marker(canvas, s.style.marker, x0 + handle * 0.5, cy, ctx.pt(s.style.marker_size) * 0.5, s.style.color);
        if let Some(shaper) = ctx.shaper {
            shaper.draw(canvas, &s.label, x0 + handle + gap, cy + font * 0.35, &spec, Align::Left);
        }
    }
}
