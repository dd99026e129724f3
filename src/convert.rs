//! The functional surface used by theme assembly and the command line: parse
//! a hex code all the way to OKLCH, format the result for CSS and derive the
//! dark-mode primary.
//!
//! Every function here is a pure mapping from values to values, so they can
//! be called from any number of threads at once.

use crate::{
    color::Component,
    error::ColorError,
    models::{Oklch, Srgb},
};

/// Convert a hex code to OKLCH.
///
/// The path is sRGB -> linear sRGB -> XYZ-D65 -> Oklab -> OKLCH. Achromatic
/// inputs (black, white, grays) come back with a hue of 0.
///
/// ```rust
/// let purple = oklch_theme::hex_to_oklch("#8B42E6").unwrap();
/// assert!((purple.hue - 298.935).abs() < 1.0e-3);
/// ```
pub fn hex_to_oklch(hex: &str) -> Result<Oklch, ColorError> {
    let oklch = Srgb::from_hex(hex)?
        .to_linear_light()
        .to_xyz()
        .to_oklab()
        .to_polar();

    log::trace!("converted {hex} to {oklch}");

    Ok(oklch)
}

/// Format as `oklch(L C H)` with three decimals per component.
pub fn format_oklch_css(oklch: &Oklch) -> String {
    oklch.to_string()
}

/// Derive the primary color for dark themes with the default
/// [`DarkAdjustment`].
pub fn adjust_primary_for_dark(oklch: &Oklch) -> Oklch {
    DarkAdjustment::default().apply(oklch)
}

/// The fixed lightness and chroma the primary color is moved to for dark
/// themes. The hue of the primary is kept as is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DarkAdjustment {
    /// Target lightness.
    pub lightness: Component,
    /// Target chroma.
    pub chroma: Component,
}

impl DarkAdjustment {
    /// Lightness used unless configured otherwise.
    pub const DEFAULT_LIGHTNESS: Component = 0.541;
    /// Chroma used unless configured otherwise.
    pub const DEFAULT_CHROMA: Component = 0.281;

    /// Override lightness and chroma of `oklch`.
    pub fn apply(&self, oklch: &Oklch) -> Oklch {
        oklch.with_lightness_and_chroma(self.lightness, self.chroma)
    }
}

impl Default for DarkAdjustment {
    fn default() -> Self {
        Self {
            lightness: Self::DEFAULT_LIGHTNESS,
            chroma: Self::DEFAULT_CHROMA,
        }
    }
}
