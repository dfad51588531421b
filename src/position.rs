//! Read-only 3D position capability.
//!
//! A [`Position`] exposes a location both as continuous coordinates and as
//! the block-grid cell containing it. [`Vector3d`](crate::Vector3d) and
//! [`Vector3i`](crate::Vector3i) both implement it, so distance and
//! conversion helpers work across the two variants.

use crate::vector3d::Vector3d;
use crate::vector3i::Vector3i;

/// A read-only position in 3D space.
///
/// The block coordinates are always the floor of the continuous coordinates,
/// never a truncation.
pub trait Position {
    /// The continuous x coordinate.
    fn x(&self) -> f64;

    /// The continuous y coordinate.
    fn y(&self) -> f64;

    /// The continuous z coordinate.
    fn z(&self) -> f64;

    /// The x coordinate of the containing block.
    fn block_x(&self) -> i32;

    /// The y coordinate of the containing block.
    fn block_y(&self) -> i32;

    /// The z coordinate of the containing block.
    fn block_z(&self) -> i32;

    /// Euclidean distance to another position.
    fn distance(&self, other: impl Position) -> f64 {
        self.distance_sq(other).sqrt()
    }

    /// Squared Euclidean distance to another position.
    ///
    /// Avoids the square root, prefer this when only comparing distances.
    fn distance_sq(&self, other: impl Position) -> f64 {
        let dx = other.x() - self.x();
        let dy = other.y() - self.y();
        let dz = other.z() - self.z();
        dx * dx + dy * dy + dz * dz
    }

    /// This position as a continuous vector.
    fn to_vector3d(&self) -> Vector3d {
        Vector3d::new(self.x(), self.y(), self.z())
    }

    /// This position as an integer vector, flooring each coordinate.
    fn to_vector3i(&self) -> Vector3i {
        Vector3i::new(self.block_x(), self.block_y(), self.block_z())
    }

    /// The midpoint of the block containing this position.
    ///
    /// Each coordinate is floored and offset by 0.5.
    fn center(&self) -> Vector3d {
        Vector3d::new(
            self.block_x() as f64 + 0.5,
            self.block_y() as f64 + 0.5,
            self.block_z() as f64 + 0.5,
        )
    }

    /// Continuous coordinates as an array.
    fn to_array(&self) -> [f64; 3] {
        [self.x(), self.y(), self.z()]
    }

    /// Block coordinates as an array.
    fn to_int_array(&self) -> [i32; 3] {
        [self.block_x(), self.block_y(), self.block_z()]
    }

    /// The smallest of the three continuous coordinates.
    fn min_component(&self) -> f64 {
        self.x().min(self.y().min(self.z()))
    }

    /// The largest of the three continuous coordinates.
    fn max_component(&self) -> f64 {
        self.x().max(self.y().max(self.z()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_between_variants() {
        let a = Vector3d::new(1.0, 2.0, 3.0);
        let b = Vector3i::new(1, 2, 7);
        assert_eq!(a.distance_sq(b), 16.0);
        assert_eq!(a.distance(b), 4.0);
    }

    #[test]
    fn center_targets_block_midpoint() {
        let v = Vector3d::new(1.2, -0.3, 4.9);
        assert_eq!(v.center(), Vector3d::new(1.5, -0.5, 4.5));
    }

    #[test]
    fn component_extremes() {
        let v = Vector3d::new(3.0, -1.0, 2.0);
        assert_eq!(v.min_component(), -1.0);
        assert_eq!(v.max_component(), 3.0);
    }

    #[test]
    fn array_views() {
        let v = Vector3d::new(0.5, 1.5, -2.5);
        assert_eq!(v.to_array(), [0.5, 1.5, -2.5]);
        assert_eq!(v.to_int_array(), [0, 1, -3]);
    }
}
