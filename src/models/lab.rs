//! Models for the rectangular and polar forms of the Oklab color space.

use std::fmt;

use crate::{
    color::Component,
    math::{finite_or_zero, normalize_hue, transform, transform_3x3, Transform},
    models::XyzD65,
};

/// Colors with a chroma below this value are achromatic and get a hue of 0.
#[cfg(feature = "f64")]
pub const ACHROMATIC_THRESHOLD: Component = 1.0e-6;

/// Colors with a chroma below this value are achromatic and get a hue of 0.
#[cfg(not(feature = "f64"))]
pub const ACHROMATIC_THRESHOLD: Component = 1.0e-4;

oklch_theme_macros::gen_model! {
    /// The model for a color specified in the oklab color space with the
    /// rectangular orthogonal form.
    pub struct Oklab {
        /// The lightness component.
        pub lightness: Component,
        /// The green-red axis.
        pub a: Component,
        /// The blue-yellow axis.
        pub b: Component,
    }
}

// XYZ to LMS as recalculated by CSS Color 4 for a consistent D65 white, and
// the LMS' to Oklab matrix from Björn Ottosson's Oklab post.
//
// Ottosson's published M1 (0.8189330101, 0.3618667424, ...) was derived for a
// slightly different white point. Paired with the sRGB matrices above it
// leaves grays with a chroma of about 1.2e-4, which is above
// ACHROMATIC_THRESHOLD and would give white a hue. The recalculated matrix
// maps every gray to a chroma below 4e-8. Hues move by a few hundredths of a
// degree compared to M1.
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LMS: Transform = transform_3x3(
    0.8190224432164319,    0.3619062562801221,  -0.12887378261216414,
    0.0329836671980271,    0.9292868468965546,   0.03614466816999844,
    0.048177199566046255,  0.26423952494422764,  0.6335478258136937,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LMS_TO_OKLAB: Transform = transform_3x3(
    0.2104542553,  0.7936177850, -0.0040720468,
    1.9779984951, -2.4285922050,  0.4505937099,
    0.0259040371,  0.7827717662, -0.8086757660,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLAB_TO_LMS: Transform = transform_3x3(
    0.99999999845051981432,  0.39633779217376785678,   0.21580375806075880339,
    1.0000000088817607767,  -0.1055613423236563494,   -0.063854174771705903402,
    1.0000000546724109177,  -0.089484182094965759684, -1.2914855378640917399,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LMS_TO_XYZ: Transform = transform_3x3(
     1.2268798733741557,  -0.5578149965554813,   0.28139105017721583,
    -0.04057576262431372,  1.1122868293970594,  -0.07171106666151701,
    -0.07637294974672142, -0.4214933239627914,   1.5869240244272418,
);

impl From<XyzD65> for Oklab {
    fn from(value: XyzD65) -> Self {
        let lms = transform(&XYZ_TO_LMS, value.to_components());
        let lms = lms.map(|v| v.cbrt());
        transform(&LMS_TO_OKLAB, lms).into()
    }
}

impl Oklab {
    /// Convert this color back to CIE-XYZ.
    pub fn to_xyz(&self) -> XyzD65 {
        let lms = transform(&OKLAB_TO_LMS, self.to_components());
        let lms = lms.map(|v| v * v * v);
        transform(&LMS_TO_XYZ, lms).into()
    }

    /// Convert this orthogonal rectangular model into its cylindrical polar
    /// form.
    ///
    /// When the chroma is too small for the angle to mean anything, or the
    /// math produced a non-finite value, the hue is 0.
    pub fn to_polar(&self) -> Oklch {
        let chroma = finite_or_zero((self.a * self.a + self.b * self.b).sqrt());
        let hue = if chroma < ACHROMATIC_THRESHOLD {
            log::trace!("hue is powerless at chroma {chroma:e}, using 0");
            0.0
        } else {
            finite_or_zero(normalize_hue(self.b.atan2(self.a).to_degrees()))
        };

        Oklch::new(self.lightness, chroma, hue)
    }
}

oklch_theme_macros::gen_model! {
    /// The model for a color specified in the oklab color space with the
    /// cylindrical polar form.
    pub struct Oklch {
        /// The lightness component.
        pub lightness: Component,
        /// The chroma component.
        pub chroma: Component,
        /// The hue component in degrees.
        pub hue: Component,
    }
}

impl Oklch {
    /// Convert this cylindrical polar model into its orthogonal rectangular
    /// form.
    pub fn to_rectangular(&self) -> Oklab {
        let hue = self.hue.to_radians();
        let a = self.chroma * hue.cos();
        let b = self.chroma * hue.sin();

        Oklab::new(self.lightness, a, b)
    }

    /// Return true if the color has no meaningful hue.
    pub fn is_achromatic(&self) -> bool {
        self.chroma.is_nan() || self.chroma < ACHROMATIC_THRESHOLD
    }

    /// Return a copy with the lightness and chroma replaced. The hue is kept
    /// bit for bit.
    #[must_use]
    pub fn with_lightness_and_chroma(&self, lightness: Component, chroma: Component) -> Self {
        Self::new(lightness, chroma, self.hue)
    }
}

/// Format a component for CSS, mapping NaN, infinities and anything that
/// rounds to zero onto `0`.
fn css_component(value: Component) -> Component {
    let value = finite_or_zero(value);
    if value.abs() < 0.0005 {
        0.0
    } else {
        value
    }
}

/// Renders `oklch(L C H)` with exactly three decimals per component.
impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "oklch({:.3} {:.3} {:.3})",
            css_component(self.lightness),
            css_component(self.chroma),
            css_component(self.hue)
        )
    }
}

impl From<Oklch> for Oklab {
    fn from(value: Oklch) -> Self {
        value.to_rectangular()
    }
}

impl From<Oklab> for Oklch {
    fn from(value: Oklab) -> Self {
        value.to_polar()
    }
}
