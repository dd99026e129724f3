//! Assemble light and dark design-token themes around a primary color.
//!
//! This is plain data shaping: three hex codes are converted, and the primary
//! is merged into the static tables in [`tokens`].
//!
//! ```rust
//! use oklch_theme::theme::{Modes, Palette, Theme};
//! use oklch_theme::DarkAdjustment;
//!
//! let palette = Palette::from_hex("#8B42E6", "#1E1E2E", "#F5F5F5").unwrap();
//! let theme = Theme::assemble(&palette, &DarkAdjustment::default(), Modes::all());
//! assert_eq!(theme.light().unwrap().get("primary"), Some("oklch(0.560 0.232 298.935)"));
//! assert_eq!(theme.dark().unwrap().get("ring"), Some("oklch(0.541 0.281 298.935)"));
//! ```

mod css;
pub mod tokens;
mod variations;

use bitflags::bitflags;
use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::{convert::DarkAdjustment, error::ColorError, hex_to_oklch, models::Oklch};

pub use tokens::Token;
pub use variations::Variations;

/// One of the two theme variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// The default, light theme.
    Light,
    /// The dark theme.
    Dark,
}

impl Mode {
    /// Both modes in output order.
    pub const ALL: [Mode; 2] = [Mode::Light, Mode::Dark];

    /// The flag selecting this mode.
    pub fn flag(self) -> Modes {
        match self {
            Mode::Light => Modes::LIGHT,
            Mode::Dark => Modes::DARK,
        }
    }

    /// The lowercase name of the mode.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    /// The CSS selector the mode's custom properties are declared on.
    pub fn selector(self) -> &'static str {
        match self {
            Mode::Light => ":root",
            Mode::Dark => ".dark",
        }
    }
}

bitflags! {
    /// Selects which modes get assembled.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Modes : u8 {
        /// Assemble the light theme.
        const LIGHT = 1 << 0;
        /// Assemble the dark theme.
        const DARK = 1 << 1;
    }
}

/// The three converted input colors.
///
/// Only the primary shapes the tokens. The dark and light samples are
/// converted so they can be reported back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// The brand color.
    pub primary: Oklch,
    /// The dark sample.
    pub dark: Oklch,
    /// The light sample.
    pub light: Oklch,
}

impl Palette {
    /// Convert the three hex codes. Fails on the first invalid one.
    pub fn from_hex(primary: &str, dark: &str, light: &str) -> Result<Self, ColorError> {
        Ok(Self {
            primary: hex_to_oklch(primary)?,
            dark: hex_to_oklch(dark)?,
            light: hex_to_oklch(light)?,
        })
    }

    /// The CSS form of all three colors.
    pub fn conversions(&self) -> Conversions {
        Conversions {
            primary: self.primary.to_string(),
            dark: self.dark.to_string(),
            light: self.light.to_string(),
        }
    }
}

/// The formatted inputs, reported next to the generated theme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Conversions {
    /// The primary color.
    pub primary: String,
    /// The dark sample.
    pub dark: String,
    /// The light sample.
    pub light: String,
}

/// Named token values for a single mode, in table order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tokens(Vec<(&'static str, String)>);

impl Tokens {
    /// Resolve a token table against the primary color for its mode.
    pub fn resolve(table: &[(&'static str, Token)], primary: &Oklch) -> Self {
        let primary = primary.to_string();
        Self(
            table
                .iter()
                .map(|&(name, token)| {
                    let value = match token {
                        Token::Fixed(value) => value.to_owned(),
                        Token::Primary => primary.clone(),
                    };
                    (name, value)
                })
                .collect(),
        )
    }

    /// Look up a token by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate over `(name, value)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(name, value)| (*name, value.as_str()))
    }

    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Serialized as a map so the output keeps the table order.
impl Serialize for Tokens {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// A generated theme with up to one token set per mode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Theme {
    #[serde(skip_serializing_if = "Option::is_none")]
    light: Option<Tokens>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dark: Option<Tokens>,
}

impl Theme {
    /// Merge the palette's primary into the token tables of the selected
    /// modes. The dark tables use the primary after `adjustment`.
    pub fn assemble(palette: &Palette, adjustment: &DarkAdjustment, modes: Modes) -> Self {
        let mut theme = Self::default();

        for mode in Mode::ALL {
            if !modes.contains(mode.flag()) {
                continue;
            }

            let primary = match mode {
                Mode::Light => palette.primary,
                Mode::Dark => adjustment.apply(&palette.primary),
            };
            log::debug!("assembling {mode:?} tokens around {primary}");

            let tokens = Tokens::resolve(tokens::table(mode), &primary);
            match mode {
                Mode::Light => theme.light = Some(tokens),
                Mode::Dark => theme.dark = Some(tokens),
            }
        }

        theme
    }

    /// The light tokens, if assembled.
    pub fn light(&self) -> Option<&Tokens> {
        self.light.as_ref()
    }

    /// The dark tokens, if assembled.
    pub fn dark(&self) -> Option<&Tokens> {
        self.dark.as_ref()
    }

    /// The tokens for `mode`, if assembled.
    pub fn tokens(&self, mode: Mode) -> Option<&Tokens> {
        match mode {
            Mode::Light => self.light(),
            Mode::Dark => self.dark(),
        }
    }
}

/// The full result of generating a theme: the tokens plus the formatted
/// inputs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ThemeReport {
    /// Always true; failures never produce a report.
    pub success: bool,
    /// The assembled tokens.
    pub theme: Theme,
    /// The three inputs formatted for CSS.
    pub conversions: Conversions,
}

impl ThemeReport {
    /// Convert the inputs and assemble the theme in one step.
    pub fn generate(
        primary: &str,
        dark: &str,
        light: &str,
        adjustment: &DarkAdjustment,
        modes: Modes,
    ) -> Result<Self, ColorError> {
        let palette = Palette::from_hex(primary, dark, light)?;
        Ok(Self {
            success: true,
            theme: Theme::assemble(&palette, adjustment, modes),
            conversions: palette.conversions(),
        })
    }
}
