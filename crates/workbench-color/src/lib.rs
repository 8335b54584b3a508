//! Color-space math and palette tooling.
//!
//! [`Rgb`] is the canonical representation; [`Hsl`] and [`Hsv`] convert to
//! and from it with the canonical max/min-channel formulas, and every
//! conversion round-trips within ±1 per 8-bit channel. On top of the value
//! types sit palette generation ([`generate`]), WCAG contrast math
//! ([`contrast`]), blending ([`blend`]), and palette export ([`export`]).
//!
//! Everything here is a pure function over immutable values; the only
//! randomness is the explicitly non-cryptographic [`Rgb::random`].

// The color crate uses only safe Rust.
#![forbid(unsafe_code)]

pub mod blend;
pub mod contrast;
pub mod error;
pub mod export;
pub mod palette;
pub mod rgb;
pub mod space;

pub use blend::{darken, desaturate, gradient, lighten, mix, saturate};
pub use contrast::{contrast_ratio, contrasting_text_color, is_light, relative_luminance};
pub use error::Error;
pub use export::{ExportFormat, export};
pub use palette::{PALETTE_SIZE, Palette, PaletteKind, generate};
pub use rgb::Rgb;
pub use space::{Hsl, Hsv};
