// File: crates/plot-core/src/crop.rs
// Summary: Tight cropping of RGBA8 buffers to the region that differs from the background.

use crate::geometry::RectI32;

/// Bounding box (right/bottom exclusive) of pixels that differ from `background`.
/// Returns `None` when every pixel matches.
pub fn content_bounds(pixels: &[u8], width: i32, height: i32, background: [u8; 4]) -> Option<RectI32> {
    let w = width.max(0) as usize;
    let h = height.max(0) as usize;
    if pixels.len() < w * h * 4 { return None; }
    let mut left = usize::MAX;
    let mut right = 0usize;
    let mut top = usize::MAX;
    let mut bottom = 0usize;
    for y in 0..h {
        let row = &pixels[y * w * 4..(y + 1) * w * 4];
        for (x, px) in row.chunks_exact(4).enumerate() {
            if px != background {
                left = left.min(x);
                right = right.max(x + 1);
                top = top.min(y);
                bottom = bottom.max(y + 1);
            }
        }
    }
    if left == usize::MAX { return None; }
    Some(RectI32::from_ltrb(left as i32, top as i32, right as i32, bottom as i32))
}

/// Copy the `rect` region out of a `width`-wide RGBA8 buffer.
pub fn crop_rgba(pixels: &[u8], width: i32, rect: &RectI32) -> Vec<u8> {
    let stride = width.max(0) as usize * 4;
    let row_len = rect.width().max(0) as usize * 4;
    let mut out = Vec::with_capacity(row_len * rect.height().max(0) as usize);
    for y in rect.top..rect.bottom {
        let start = y as usize * stride + rect.left as usize * 4;
        out.extend_from_slice(&pixels[start..start + row_len]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: [u8; 4] = [255, 255, 255, 255];

    fn canvas(w: usize, h: usize) -> Vec<u8> {
        BG.iter().copied().cycle().take(w * h * 4).collect()
    }

    fn set(px: &mut [u8], w: usize, x: usize, y: usize) {
        let i = (y * w + x) * 4;
        px[i..i + 4].copy_from_slice(&[10, 20, 30, 255]);
    }

    #[test]
    fn blank_buffer_has_no_bounds() {
        assert_eq!(content_bounds(&canvas(8, 4), 8, 4, BG), None);
    }

    #[test]
    fn bounds_enclose_marked_pixels() {
        let mut px = canvas(10, 6);
        set(&mut px, 10, 2, 1);
        set(&mut px, 10, 7, 4);
        let r = content_bounds(&px, 10, 6, BG).unwrap();
        assert_eq!(r, RectI32::from_ltrb(2, 1, 8, 5));
    }

    #[test]
    fn crop_copies_rows() {
        let mut px = canvas(4, 4);
        set(&mut px, 4, 1, 2);
        let out = crop_rgba(&px, 4, &RectI32::from_ltrb(1, 2, 3, 3));
        assert_eq!(out.len(), 2 * 4);
        assert_eq!(&out[0..4], &[10, 20, 30, 255]);
        assert_eq!(&out[4..8], &BG);
    }
}
