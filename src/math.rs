//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

/// A 3x3 color matrix stored in the upper left corner of a 4x4 transform.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a [`Transform`] from a 3x3 matrix given in row-major order, so that
/// the matrix reads the same as it does in the color literature.
#[rustfmt::skip]
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m00: Component, m01: Component, m02: Component,
    m10: Component, m11: Component, m12: Component,
    m20: Component, m21: Component, m22: Component,
) -> Transform {
    // euclid multiplies row vectors, so the matrix is stored transposed.
    Transform::new(
        m00, m10, m20, 0.0,
        m01, m11, m21, 0.0,
        m02, m12, m22, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Components(x, y, z) = components;
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    Components(x, y, z)
}

/// Fold an angle in degrees into `[0, 360)`.
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue.rem_euclid(360.0);
    // Tiny negative angles round up to exactly 360.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// Replace NaN and infinite values with zero.
pub fn finite_or_zero<T: Float>(value: T) -> T {
    if value.is_finite() {
        value
    } else {
        T::zero()
    }
}
