// File: crates/plot-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (plot areas, panel cells, crop boxes).

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Grow by `pad` on every side, then clamp into `bounds`.
    pub fn outset_within(&self, pad: i32, bounds: &RectI32) -> Self {
        Self {
            left: clamp(self.left - pad, bounds.left, bounds.right),
            top: clamp(self.top - pad, bounds.top, bounds.bottom),
            right: clamp(self.right + pad, bounds.left, bounds.right),
            bottom: clamp(self.bottom + pad, bounds.top, bounds.bottom),
        }
    }
}

/// Float rectangle used while laying out a panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) * 0.5 }
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
    pub fn to_skia(&self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outset_is_clamped_to_bounds() {
        let bounds = RectI32::from_ltwh(0, 0, 100, 50);
        let r = RectI32::from_ltrb(5, 10, 90, 45).outset_within(8, &bounds);
        assert_eq!(r, RectI32::from_ltrb(0, 2, 98, 50));
        assert_eq!(r.width(), 98);
        assert_eq!(r.height(), 48);
    }

    #[test]
    fn rectf_contains_edges() {
        let r = RectF::from_ltrb(0.0, 0.0, 10.0, 5.0);
        assert!(r.contains(0.0, 5.0));
        assert!(!r.contains(10.5, 1.0));
        assert_eq!(r.center_x(), 5.0);
    }
}
