//! Palette serialization to stylesheet and interchange formats.

use std::fmt::Write as _;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::Error;
use crate::rgb::Rgb;

/// Output formats for [`export`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExportFormat {
    /// CSS custom properties plus background/text/border utility classes.
    Css,
    /// SCSS variable declarations.
    Scss,
    /// Pretty-printed JSON array of hex strings.
    Json,
    /// Plain `Color N: #hex` swatch list.
    Swatch,
}

impl ExportFormat {
    pub const fn name(&self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Scss => "scss",
            ExportFormat::Json => "json",
            ExportFormat::Swatch => "swatch",
        }
    }
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "css" => Ok(ExportFormat::Css),
            "scss" => Ok(ExportFormat::Scss),
            "json" => Ok(ExportFormat::Json),
            "swatch" | "txt" => Ok(ExportFormat::Swatch),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// Serialize `colors` in the requested format.
pub fn export(colors: &[Rgb], format: ExportFormat) -> String {
    match format {
        ExportFormat::Css => export_css(colors),
        ExportFormat::Scss => export_scss(colors),
        ExportFormat::Json => export_json(colors),
        ExportFormat::Swatch => export_swatch(colors),
    }
}

fn export_css(colors: &[Rgb]) -> String {
    let mut out = String::from(":root {\n");

    for (i, color) in colors.iter().enumerate() {
        writeln!(&mut out, "  --color-{}: {color};", i + 1).expect("should be infallible");
    }
    out.push_str("}\n\n/* Utility classes */\n");

    for i in 1..=colors.len() {
        writeln!(
            &mut out,
            ".bg-color-{i} {{ background-color: var(--color-{i}); }}"
        )
        .expect("should be infallible");
        writeln!(&mut out, ".text-color-{i} {{ color: var(--color-{i}); }}")
            .expect("should be infallible");
        writeln!(
            &mut out,
            ".border-color-{i} {{ border-color: var(--color-{i}); }}"
        )
        .expect("should be infallible");
    }

    out
}

fn export_scss(colors: &[Rgb]) -> String {
    let mut out = String::new();
    for (i, color) in colors.iter().enumerate() {
        writeln!(&mut out, "$color-{}: {color};", i + 1).expect("should be infallible");
    }
    out
}

fn export_json(colors: &[Rgb]) -> String {
    let hex: Vec<String> = colors.iter().map(Rgb::to_string).collect();
    serde_json::to_string_pretty(&hex).expect("should be infallible")
}

fn export_swatch(colors: &[Rgb]) -> String {
    colors
        .iter()
        .enumerate()
        .map(|(i, color)| format!("Color {}: {color}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
