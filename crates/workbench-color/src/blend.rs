//! Mixing, gradients, and HSL-space adjustments.

use crate::rgb::Rgb;
use crate::space::Hsl;

/// Linear interpolation per RGB channel. `ratio` is clamped to [0, 1];
/// 0 yields `a`, 1 yields `b`.
pub fn mix(a: Rgb, b: Rgb, ratio: f64) -> Rgb {
    let ratio = ratio.clamp(0.0, 1.0);
    let lerp = |x: u8, y: u8| {
        (f64::from(x) * (1.0 - ratio) + f64::from(y) * ratio).round() as u8
    };

    Rgb::new(lerp(a.r, b.r), lerp(a.g, b.g), lerp(a.b, b.b))
}

/// `steps` evenly spaced mixes from `a` to `b` inclusive. A single step
/// degenerates to `[a]`.
pub fn gradient(a: Rgb, b: Rgb, steps: usize) -> Vec<Rgb> {
    if steps <= 1 {
        return vec![a];
    }

    (0..steps)
        .map(|i| mix(a, b, i as f64 / (steps - 1) as f64))
        .collect()
}

/// Raise HSL lightness by `amount` percentage points, saturating at 100.
pub fn lighten(color: Rgb, amount: f64) -> Rgb {
    let hsl = color.to_hsl();
    Hsl::new(hsl.h, hsl.s, hsl.l + amount).to_rgb()
}

/// Lower HSL lightness by `amount` percentage points, saturating at 0.
pub fn darken(color: Rgb, amount: f64) -> Rgb {
    let hsl = color.to_hsl();
    Hsl::new(hsl.h, hsl.s, hsl.l - amount).to_rgb()
}

/// Raise HSL saturation by `amount` percentage points, saturating at 100.
pub fn saturate(color: Rgb, amount: f64) -> Rgb {
    let hsl = color.to_hsl();
    Hsl::new(hsl.h, hsl.s + amount, hsl.l).to_rgb()
}

/// Lower HSL saturation by `amount` percentage points, saturating at 0.
pub fn desaturate(color: Rgb, amount: f64) -> Rgb {
    let hsl = color.to_hsl();
    Hsl::new(hsl.h, hsl.s - amount, hsl.l).to_rgb()
}
