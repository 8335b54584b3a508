//! Luminance, contrast, and light/dark classification.
//!
//! Two separate heuristics live here and are not interchangeable:
//! [`contrast_ratio`] is the WCAG 2.1 ratio over gamma-linearized luminance,
//! while [`is_light`] is a plain HSL-lightness threshold used for picking a
//! readable text color. Callers that need accessibility math use the ratio;
//! callers that need a quick black-or-white text decision use the threshold.

use crate::rgb::Rgb;

/// Relative luminance per WCAG 2.1: linearize each sRGB channel, then weight
/// `0.2126 R + 0.7152 G + 0.0722 B`. Returns a value in [0.0, 1.0].
pub fn relative_luminance(color: Rgb) -> f64 {
    let linear = |channel: u8| {
        let c = f64::from(channel) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };

    0.2126 * linear(color.r) + 0.7152 * linear(color.g) + 0.0722 * linear(color.b)
}

/// WCAG 2.1 contrast ratio `(lighter + 0.05) / (darker + 0.05)`, in
/// [1.0, 21.0] regardless of argument order.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Light/dark classification by HSL lightness > 50%. A display heuristic,
/// not the WCAG ratio.
pub fn is_light(color: Rgb) -> bool {
    color.to_hsl().l > 50.0
}

/// Black text on light backgrounds, white text on dark ones.
pub fn contrasting_text_color(background: Rgb) -> Rgb {
    if is_light(background) {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_endpoints() {
        assert!(relative_luminance(Rgb::BLACK).abs() < 1e-9);
        assert!((relative_luminance(Rgb::WHITE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_green_dominates_luminance() {
        let red = relative_luminance(Rgb::new(255, 0, 0));
        let green = relative_luminance(Rgb::new(0, 255, 0));
        let blue = relative_luminance(Rgb::new(0, 0, 255));

        assert!(green > red && red > blue);
        assert!((red - 0.2126).abs() < 1e-4);
        assert!((green - 0.7152).abs() < 1e-4);
        assert!((blue - 0.0722).abs() < 1e-4);
    }

    #[test]
    fn test_black_white_ratio_is_21() {
        assert!((contrast_ratio(Rgb::BLACK, Rgb::WHITE) - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_is_symmetric_and_at_least_one() {
        let a = Rgb::new(0x3b, 0x82, 0xf6);
        let b = Rgb::new(0xf5, 0x9e, 0x0b);
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
        assert!(contrast_ratio(a, a) >= 1.0);
    }

    #[test]
    fn test_is_light_threshold() {
        assert!(is_light(Rgb::WHITE));
        assert!(!is_light(Rgb::BLACK));
        assert!(is_light("#fbbf24".parse().unwrap()));
        assert!(!is_light("#1e3a8a".parse().unwrap()));
    }

    #[test]
    fn test_contrasting_text_color() {
        assert_eq!(contrasting_text_color(Rgb::WHITE), Rgb::BLACK);
        assert_eq!(contrasting_text_color(Rgb::BLACK), Rgb::WHITE);
    }
}
