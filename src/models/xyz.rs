//! Model a color in the CIE-XYZ color space.

use crate::color::{Component, Components};
use crate::models::Oklab;

oklch_theme_macros::gen_model! {
    /// A model for a color in the CIE-XYZ color space with a D65 white point
    /// reference.
    pub struct XyzD65 {
        /// The X component of the color.
        pub x: Component,
        /// The Y component of the color.
        pub y: Component,
        /// The Z component of the color.
        pub z: Component,
    }
}

impl XyzD65 {
    /// The D65 reference white, as produced by the sRGB matrix for `#FFFFFF`.
    #[allow(clippy::excessive_precision)]
    pub const WHITE_POINT: Components =
        Components(0.9504559270516716, 1.0, 1.0890577507598784);

    /// Convert this color to Oklab.
    pub fn to_oklab(&self) -> Oklab {
        Oklab::from(*self)
    }
}
