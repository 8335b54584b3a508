//! Palette generation. Every scheme derives exactly five colors from one
//! base color by moving through HSL space.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::rgb::Rgb;
use crate::space::Hsl;

/// Number of colors in every generated palette.
pub const PALETTE_SIZE: usize = 5;

/// Palette schemes, named for how the derived hues relate to the base hue.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteKind {
    /// Single hue, five lightness steps.
    Monochromatic,
    /// Five neighboring hues at ±15° and ±30°.
    Analogous,
    /// Base hue variants plus the hue 180° across the wheel.
    Complementary,
    /// Three hues 120° apart plus two lightness-boosted repeats.
    Triadic,
}

impl PaletteKind {
    pub const ALL: [PaletteKind; 4] = [
        PaletteKind::Monochromatic,
        PaletteKind::Analogous,
        PaletteKind::Complementary,
        PaletteKind::Triadic,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            PaletteKind::Monochromatic => "monochromatic",
            PaletteKind::Analogous => "analogous",
            PaletteKind::Complementary => "complementary",
            PaletteKind::Triadic => "triadic",
        }
    }
}

impl Display for PaletteKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monochromatic" | "mono" => Ok(PaletteKind::Monochromatic),
            "analogous" => Ok(PaletteKind::Analogous),
            "complementary" => Ok(PaletteKind::Complementary),
            "triadic" => Ok(PaletteKind::Triadic),
            _ => Err(Error::UnknownPaletteKind(s.to_string())),
        }
    }
}

/// An ordered set of [`PALETTE_SIZE`] colors tagged with the scheme and the
/// base color it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub kind: PaletteKind,
    pub base: Rgb,
    pub colors: Vec<Rgb>,
}

/// Derive a five-color palette from `base`.
///
/// For the complementary and triadic schemes the base color appears verbatim
/// as the first entry; the monochromatic and analogous schemes re-derive all
/// five entries in HSL space, so the center entry may differ from the base
/// by one rounding step per channel.
pub fn generate(base: Rgb, kind: PaletteKind) -> Palette {
    let Hsl { h, s, l } = base.to_hsl();

    let colors = match kind {
        PaletteKind::Monochromatic => [-40.0, -20.0, 0.0, 20.0, 40.0]
            .iter()
            .map(|offset| Hsl::new(h, s, l + offset).to_rgb())
            .collect(),

        PaletteKind::Analogous => [-30.0, -15.0, 0.0, 15.0, 30.0]
            .iter()
            .map(|offset| Hsl::new(h + offset, s, l).to_rgb())
            .collect(),

        PaletteKind::Complementary => vec![
            base,
            Hsl::new(h + 180.0, s, l).to_rgb(),
            Hsl::new(h, s * 0.7, l * 1.2).to_rgb(),
            Hsl::new(h + 180.0, s * 0.7, l * 1.2).to_rgb(),
            Hsl::new(h, s * 0.5, l * 0.8).to_rgb(),
        ],

        PaletteKind::Triadic => vec![
            base,
            Hsl::new(h + 120.0, s, l).to_rgb(),
            Hsl::new(h + 240.0, s, l).to_rgb(),
            Hsl::new(h, s * 0.7, l * 1.2).to_rgb(),
            Hsl::new(h + 120.0, s * 0.7, l * 1.2).to_rgb(),
        ],
    };

    debug_assert_eq!(colors.len(), PALETTE_SIZE);

    Palette { kind, base, colors }
}
