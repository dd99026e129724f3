//! Model a color in the sRGB color space.

use std::str::FromStr;

use crate::{
    color::Component,
    error::ColorError,
    math::{finite_or_zero, transform, transform_3x3, Transform},
    models::XyzD65,
};

pub mod encoding {
    //! Tags that tell gamma encoded and linear light sRGB apart.

    use crate::color::{Component, Components};

    /// This trait is used to identify tags that specify gamma encoding.
    pub trait Encoding {}

    /// Components carry the sRGB transfer function, as in hex codes.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct GammaEncoded;
    impl Encoding for GammaEncoded {}

    /// Components are proportional to light intensity.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct LinearLight;
    impl Encoding for LinearLight {}

    /// Apply the sRGB transfer function to linear light components.
    pub fn to_gamma_encoded(from: &Components) -> Components {
        from.map(|value| {
            let abs = value.abs();

            if abs > 0.0031308 {
                value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
            } else {
                12.92 * value
            }
        })
    }

    /// Undo the sRGB transfer function.
    pub fn to_linear_light(from: &Components) -> Components {
        from.map(|value: Component| {
            let abs = value.abs();

            if abs <= 0.04045 {
                value / 12.92
            } else {
                value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
            }
        })
    }
}

oklch_theme_macros::gen_model! {
    /// A color specified in the sRGB color space.
    pub struct Rgb<E: encoding::Encoding> {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

/// Model for a color in the sRGB color space with gamma encoding.
pub type Srgb = Rgb<encoding::GammaEncoded>;

/// Model for a color in the sRGB color space with no gamma encoding.
pub type SrgbLinear = Rgb<encoding::LinearLight>;

impl Srgb {
    /// Parse a hex code such as `#8B42E6` or `8b42e6`.
    ///
    /// After stripping one optional `#`, exactly 6 hex digits must remain.
    /// Each byte pair is divided by 255.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        if digits.chars().count() != 6 {
            return Err(ColorError::InvalidFormat(hex.to_owned()));
        }

        // `from_str_radix` accepts a leading `+`, so check the digits first.
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigits(hex.to_owned()));
        }

        let channel = |at: usize| {
            u8::from_str_radix(&digits[at..at + 2], 16)
                .map(|v| Component::from(v) / 255.0)
                .map_err(|_| ColorError::InvalidDigits(hex.to_owned()))
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Render the color as an uppercase `#RRGGBB` hex code. Components are
    /// clamped into `[0, 1]` first.
    pub fn to_hex(&self) -> String {
        let byte = |v: Component| (finite_or_zero(v).clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02X}{:02X}{:02X}",
            byte(self.red),
            byte(self.green),
            byte(self.blue)
        )
    }

    /// Convert this model from gamma encoded to linear light.
    pub fn to_linear_light(&self) -> SrgbLinear {
        encoding::to_linear_light(&self.to_components()).into()
    }
}

impl FromStr for Srgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const TO_XYZ: Transform = transform_3x3(
    0.4123907992659595,  0.35758433938387796, 0.1804807884018343,
    0.21263900587151036, 0.7151686787677559,  0.07219231536073371,
    0.01933081871559185, 0.11919477979462599, 0.9505321522496606,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const FROM_XYZ: Transform = transform_3x3(
     3.2409699419045213, -1.5373831775700935, -0.4986107602930033,
    -0.9692436362808798,  1.8759675015077206,  0.04155505740717561,
     0.05563007969699361, -0.20397695888897657, 1.0569715142428786,
);

impl SrgbLinear {
    /// Convert this model from linear light to gamma encoded.
    pub fn to_gamma_encoded(&self) -> Srgb {
        encoding::to_gamma_encoded(&self.to_components()).into()
    }

    /// Convert this color to CIE-XYZ with a D65 white point.
    pub fn to_xyz(&self) -> XyzD65 {
        transform(&TO_XYZ, self.to_components()).into()
    }
}

impl From<XyzD65> for SrgbLinear {
    fn from(value: XyzD65) -> Self {
        transform(&FROM_XYZ, value.to_components()).into()
    }
}
