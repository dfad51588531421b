//! Immutable 3D vector, position and rotation math for block-grid worlds.
//!
//! Positions carry two views of the same location: continuous `f64`
//! coordinates and the integer block cell containing them, where block
//! coordinates always round toward negative infinity. All value types are
//! `Copy` and every operation returns a new value, so they are safe to share
//! across threads without synchronization.
//!
//! # Modules
//!
//! - [`scalar`] - floor/ceil/round/clamp with block-grid semantics
//! - [`position`] - the read-only [`Position`] capability
//! - [`vector3d`] / [`vector3i`] - the continuous and integer vector variants
//! - [`rotation`] - quaternion [`Rotation`] construction and application
//! - [`util`] - arcs, circles, projections and other vector algorithms
//! - [`adapter`] - conversions to and from host engine types (glam, nalgebra)
//!
//! # Example
//!
//! ```
//! use voxmath::{Position, Rotation, Vector3d};
//!
//! let v = Vector3d::new(0.5, -1.25, 3.0);
//! assert_eq!(v.block_y(), -2);
//!
//! let spin = Rotation::from_axis_angle(Vector3d::Y, std::f64::consts::FRAC_PI_2)?;
//! let turned = spin.apply_to(Vector3d::X);
//! assert!((turned - Vector3d::new(0.0, 0.0, -1.0)).length() < 1e-12);
//! # Ok::<(), voxmath::Error>(())
//! ```

pub mod adapter;
pub mod position;
pub mod rotation;
pub mod scalar;
pub mod util;
pub mod vector3d;
pub mod vector3i;

pub use adapter::Adapters;
pub use position::Position;
pub use rotation::Rotation;
pub use vector3d::Vector3d;
pub use vector3i::Vector3i;

/// Errors raised by vector construction, rotation construction and adapter
/// lookup.
///
/// All of these are deterministic contract violations raised at the point of
/// the offending call; degenerate numeric inputs such as normalizing a zero
/// vector are not errors and resolve to documented defaults instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A rotation axis with zero length has no defined direction.
    #[error("rotation axis has zero length")]
    ZeroLengthAxis,
    /// Coordinate slices must hold exactly three components.
    #[error("expected 3 coordinates, found {found}")]
    InvalidSliceLength {
        /// Length of the offending slice.
        found: usize,
    },
    /// No adapter was registered for the requested foreign type.
    #[error("no adapter registered for type {type_name}")]
    UnregisteredType {
        /// Fully qualified name of the requested type.
        type_name: &'static str,
    },
}
