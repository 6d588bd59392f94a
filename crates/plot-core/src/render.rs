// File: crates/plot-core/src/render.rs
// Summary: Headless raster pipeline: Skia CPU surface -> RGBA8 pixels -> tight crop -> PNG.

use anyhow::{anyhow, Context, Result};
use skia_safe as skia;

use crate::chart::{draw_panel, PanelCtx, RenderOptions};
use crate::crop::{content_bounds, crop_rgba};
use crate::geometry::{RectF, RectI32};
use crate::text::TextShaper;
use crate::Chart;

/// Straight (unpremultiplied) RGBA8 pixels, rows top to bottom.
pub struct RgbaImage {
    pub pixels: Vec<u8>,
    pub width: i32,
    pub height: i32,
}

/// Draw `panels` into a grid of `cols` columns and read the result back as RGBA8.
/// The surface lives only for the duration of this call.
pub(crate) fn rasterize(panels: &[&Chart], cols: usize, opts: &RenderOptions) -> Result<RgbaImage> {
    let width = opts.size.width_px();
    let height = opts.size.height_px();
    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| anyhow!("failed to create {}x{} raster surface", width, height))?;

    {
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);

        let shaper = if opts.draw_labels { Some(TextShaper::new()) } else { None };
        let ctx = PanelCtx { opts, shaper: shaper.as_ref() };
        let cells = grid_cells(panels.len(), cols, width as f32, height as f32);
        for (chart, cell) in panels.iter().zip(&cells) {
            draw_panel(canvas, chart, cell, &ctx);
        }
    }

    let info = skia::ImageInfo::new((width, height), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = width as usize * 4;
    let mut pixels = vec![0u8; stride * height as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(anyhow!("failed to read back {}x{} pixels", width, height));
    }
    drop(surface);

    let full = RgbaImage { pixels, width, height };
    if !opts.tight {
        return Ok(full);
    }
    let bg = opts.theme.background;
    let pad = opts.size.inch(opts.tight_pad_in).round() as i32;
    Ok(tight_crop(full, [bg.r(), bg.g(), bg.b(), bg.a()], pad))
}

/// Crop to the non-background content grown by `pad` pixels; blank images are left whole.
pub fn tight_crop(img: RgbaImage, background: [u8; 4], pad: i32) -> RgbaImage {
    let Some(content) = content_bounds(&img.pixels, img.width, img.height, background) else {
        return img;
    };
    let bounds = RectI32::from_ltwh(0, 0, img.width, img.height);
    let rect = content.outset_within(pad, &bounds);
    tracing::debug!(?rect, width = img.width, height = img.height, "tight crop");
    RgbaImage { pixels: crop_rgba(&img.pixels, img.width, &rect), width: rect.width(), height: rect.height() }
}

/// Split a `width` x `height` canvas into `n` equal cells, `cols` per row.
pub fn grid_cells(n: usize, cols: usize, width: f32, height: f32) -> Vec<RectF> {
    if n == 0 { return Vec::new(); }
    let cols = cols.clamp(1, n);
    let rows = n.div_ceil(cols);
    let cw = width / cols as f32;
    let ch = height / rows as f32;
    (0..n)
        .map(|i| {
            let (r, c) = (i / cols, i % cols);
            RectF::from_ltrb(c as f32 * cw, r as f32 * ch, (c + 1) as f32 * cw, (r + 1) as f32 * ch)
        })
        .collect()
}

pub(crate) fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let buf = image::RgbaImage::from_raw(img.width as u32, img.height as u32, img.pixels.clone())
        .ok_or_else(|| anyhow!("pixel buffer does not match {}x{}", img.width, img.height))?;
    let mut out = std::io::Cursor::new(Vec::new());
    buf.write_to(&mut out, image::ImageFormat::Png).context("encode PNG failed")?;
    Ok(out.into_inner())
}

pub(crate) fn write_file(path: &std::path::Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote png");
    Ok(())
}
