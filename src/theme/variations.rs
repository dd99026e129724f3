use serde::Serialize;

use super::Mode;
use crate::{color::Component, models::Oklch};

/// Surface colors tinted with the hue of a base color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Variations {
    /// Page background.
    pub background: Oklch,
    /// Body text.
    pub foreground: Oklch,
    /// Subdued surfaces.
    pub muted: Oklch,
    /// Borders and separators.
    pub border: Oklch,
}

// (lightness, chroma) for background, foreground, muted and border.
#[rustfmt::skip]
const LIGHT: [(Component, Component); 4] = [(0.98, 0.005), (0.15, 0.01), (0.95, 0.01), (0.9, 0.01)];
#[rustfmt::skip]
const DARK: [(Component, Component); 4] = [(0.15, 0.01), (0.98, 0.005), (0.25, 0.01), (0.3, 0.02)];

impl Variations {
    /// Derive the variations for `mode` from the hue of `base`.
    pub fn for_mode(base: &Oklch, mode: Mode) -> Self {
        let [background, foreground, muted, border] = match mode {
            Mode::Light => LIGHT,
            Mode::Dark => DARK,
        }
        .map(|(lightness, chroma)| base.with_lightness_and_chroma(lightness, chroma));

        Self {
            background,
            foreground,
            muted,
            border,
        }
    }

    /// Iterate over `(name, color)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Oklch)> {
        [
            ("background", &self.background),
            ("foreground", &self.foreground),
            ("muted", &self.muted),
            ("border", &self.border),
        ]
        .into_iter()
    }
}

/// Serialized as CSS strings keyed by name.
impl Serialize for Variations {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(name, color)| (name, color.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_variations_keep_base_hue() {
        let base = Oklch::new(0.56, 0.23, 298.9);
        let v = Variations::for_mode(&base, Mode::Light);
        assert_eq!(v.background, Oklch::new(0.98, 0.005, 298.9));
        assert_eq!(v.foreground, Oklch::new(0.15, 0.01, 298.9));
        assert_eq!(v.muted, Oklch::new(0.95, 0.01, 298.9));
        assert_eq!(v.border, Oklch::new(0.9, 0.01, 298.9));
    }

    #[test]
    fn dark_variations_swap_background_and_foreground() {
        let base = Oklch::new(0.5, 0.1, 42.0);
        let light = Variations::for_mode(&base, Mode::Light);
        let dark = Variations::for_mode(&base, Mode::Dark);
        assert_eq!(dark.background, light.foreground);
        assert_eq!(dark.foreground, light.background);
        assert_eq!(dark.muted, Oklch::new(0.25, 0.01, 42.0));
        assert_eq!(dark.border, Oklch::new(0.3, 0.02, 42.0));
    }

    #[test]
    fn iterates_in_declaration_order() {
        let v = Variations::for_mode(&Oklch::new(0.5, 0.1, 10.0), Mode::Light);
        let names = v.iter().map(|(name, _)| name).collect::<Vec<_>>();
        assert_eq!(names, ["background", "foreground", "muted", "border"]);
    }
}
