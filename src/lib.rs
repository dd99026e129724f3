//! oklch-theme converts hex colors to the OKLCH color space and assembles
//! light and dark design-token themes around a primary color.
//!
//! ```rust
//! use oklch_theme::{adjust_primary_for_dark, format_oklch_css, hex_to_oklch};
//!
//! let primary = hex_to_oklch("#8B42E6").unwrap();
//! assert_eq!(format_oklch_css(&primary), "oklch(0.560 0.232 298.935)");
//!
//! let dark = adjust_primary_for_dark(&primary);
//! assert_eq!(format_oklch_css(&dark), "oklch(0.541 0.281 298.935)");
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod math;
pub mod models;
pub mod theme;


pub use color::{Component, Components};
pub use convert::{adjust_primary_for_dark, format_oklch_css, hex_to_oklch, DarkAdjustment};
pub use error::ColorError;
pub use models::{Oklab, Oklch, Srgb, SrgbLinear, XyzD65};
