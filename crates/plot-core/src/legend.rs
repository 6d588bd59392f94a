// File: crates/plot-core/src/legend.rs
// Summary: Legend placement; picks the plot corner that covers the fewest data points.

use crate::geometry::RectF;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

/// Candidate order; earlier corners win ties.
pub const CORNERS: [Corner; 4] = [Corner::UpperRight, Corner::UpperLeft, Corner::LowerLeft, Corner::LowerRight];

/// Box of size `w` x `h` placed in `corner` of `plot`, `margin` pixels from its edges.
pub fn corner_rect(plot: &RectF, w: f32, h: f32, margin: f32, corner: Corner) -> RectF {
    let (left, top) = match corner {
        Corner::UpperRight => (plot.right - margin - w, plot.top + margin),
        Corner::UpperLeft => (plot.left + margin, plot.top + margin),
        Corner::LowerLeft => (plot.left + margin, plot.bottom - margin - h),
        Corner::LowerRight => (plot.right - margin - w, plot.bottom - margin - h),
    };
    RectF::from_ltrb(left, top, left + w, top + h)
}

/// Corner whose legend box would hide the fewest of `points` (pixel coordinates).
/// Each polyline in `lines` contributes its vertices and segment midpoints.
pub fn best_corner(plot: &RectF, w: f32, h: f32, margin: f32, lines: &[Vec<(f32, f32)>]) -> Corner {
    let mut samples: Vec<(f32, f32)> = Vec::new();
    for line in lines {
        samples.extend(line.iter().copied());
        for pair in line.windows(2) {
            samples.push(((pair[0].0 + pair[1].0) * 0.5, (pair[0].1 + pair[1].1) * 0.5));
        }
    }
    let mut best = CORNERS[0];
    let mut best_hits = usize::MAX;
    for corner in CORNERS {
        let r = corner_rect(plot, w, h, margin, corner);
        let hits = samples.iter().filter(|&&(x, y)| r.contains(x, y)).count();
        if hits < best_hits {
            best_hits = hits;
            best = corner;
        }
    }
    best
}
