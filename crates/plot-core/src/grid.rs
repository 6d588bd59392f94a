// File: crates/plot-core/src/grid.rs
// Summary: Grid/tick layout helpers ("nice" tick steps and tick label formatting).

/// Round `span / target` to a step of 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span.abs() / target.max(1) as f64;
    if !raw.is_finite() || raw <= 0.0 { return 1.0; }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Tick positions inside `[min, max]`, aligned to multiples of a nice step.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min { return vec![min]; }
    let step = nice_step(max - min, target);
    let first = (min / step).ceil() * step;
    let eps = step * 1e-9;
    let mut out = Vec::new();
    let mut k = 0usize;
    loop {
        let v = first + step * k as f64;
        if v > max + eps || k > 1000 { break; }
        // snap values like 2.9999999 onto the step grid
        let snapped = (v / step).round() * step;
        out.push(if snapped.abs() < eps { 0.0 } else { snapped });
        k += 1;
    }
    out
}

/// Format a tick value with just enough decimals for `step`.
pub fn format_tick(v: f64, step: f64) -> String {
    if step >= 1.0 && (step.fract()).abs() < 1e-9 {
        return format!("{:.0}", v);
    }
    let decimals = (-step.log10().floor()).max(0.0) as usize;
    // 2.5 * 10^k needs one extra digit
    let decimals = if ((step / 10f64.powi(-(decimals as i32))) - 2.5).abs() < 1e-9 { decimals + 1 } else { decimals };
    format!("{:.*}", decimals, v)
}
