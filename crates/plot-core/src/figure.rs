// File: crates/plot-core/src/figure.rs
// Summary: Multi-panel figure: several charts laid out in a grid and rendered into one image.

use anyhow::Result;

use crate::chart::RenderOptions;
use crate::render;
use crate::Chart;

#[derive(Clone, Debug)]
pub struct Figure {
    pub panels: Vec<Chart>,
    /// Panels per row; rows are added as needed.
    pub cols: usize,
}

impl Figure {
    pub fn new(cols: usize) -> Self {
        Self { panels: Vec::new(), cols: cols.max(1) }
    }

    /// Panels placed side by side in a single row.
    pub fn row(panels: Vec<Chart>) -> Self {
        let cols = panels.len().max(1);
        Self { panels, cols }
    }

    pub fn add_panel(&mut self, chart: Chart) {
        self.panels.push(chart);
    }

    pub fn rows(&self) -> usize {
        self.panels.len().div_ceil(self.cols.max(1))
    }

    fn panel_refs(&self) -> Vec<&Chart> {
        self.panels.iter().collect()
    }

    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let img = render::rasterize(&self.panel_refs(), self.cols, opts)?;
        let stride = img.width as usize * 4;
        Ok((img.pixels, img.width, img.height, stride))
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        render::encode_png(&render::rasterize(&self.panel_refs(), self.cols, opts)?)
    }

    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        render::write_file(output_png_path.as_ref(), &bytes)
    }
}
