//! Each color space/form is modeled with its own type. Conversions are only
//! implemented on relevant models, so the path from a hex code to OKLCH reads
//! as a chain of plain value transforms.
//!
//! ```rust
//! use oklch_theme::models::Srgb;
//! let oklch = Srgb::from_hex("#D2691E")
//!     .unwrap()
//!     .to_linear_light() // convert to srgb-linear.
//!     .to_xyz()          // convert to xyz-d65.
//!     .to_oklab()        // convert to oklab.
//!     .to_polar();       // convert to oklch.
//! assert_eq!(oklch.to_string(), "oklch(0.634 0.155 50.266)");
//! ```

pub mod lab;
pub mod rgb;
pub mod xyz;

pub use lab::{Oklab, Oklch, ACHROMATIC_THRESHOLD};
pub use rgb::{encoding, Rgb, Srgb, SrgbLinear};
pub use xyz::XyzD65;
