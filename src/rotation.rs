//! Quaternion-based rotation.
//!
//! A [`Rotation`] is a unit quaternion built from an axis and an angle. The
//! half-angle is negated during construction, which fixes the rotation
//! direction as clockwise when looking along the axis from the origin.
//! Dependent geometry code relies on that convention, so it must not change.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::Error;
use crate::vector3d::Vector3d;

/// Immutable rotation in 3D space, stored as a unit quaternion.
///
/// `q0` is the scalar part, `q1..q3` the vector part. Construction from a
/// normalized axis/angle pair keeps the norm at one; no renormalization
/// happens afterwards.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
pub struct Rotation {
    q0: f64,
    q1: f64,
    q2: f64,
    q3: f64,
}

static_assertions::assert_eq_size!(Rotation, [f64; 4]);

impl Rotation {
    /// Build a rotation of `angle` radians around `axis`.
    ///
    /// The axis does not need to be normalized. Fails with
    /// [`Error::ZeroLengthAxis`] when the axis has zero length, since the
    /// division by its norm would be undefined.
    pub fn from_axis_angle(axis: Vector3d, angle: f64) -> Result<Rotation, Error> {
        let norm = axis.length();
        if norm == 0.0 {
            return Err(Error::ZeroLengthAxis);
        }
        let half_angle = -0.5 * angle;
        let coeff = half_angle.sin() / norm;
        Ok(Rotation {
            q0: half_angle.cos(),
            q1: coeff * axis.x,
            q2: coeff * axis.y,
            q3: coeff * axis.z,
        })
    }

    /// The scalar part of the quaternion.
    pub fn q0(&self) -> f64 {
        self.q0
    }

    /// The first vector part of the quaternion.
    pub fn q1(&self) -> f64 {
        self.q1
    }

    /// The second vector part of the quaternion.
    pub fn q2(&self) -> f64 {
        self.q2
    }

    /// The third vector part of the quaternion.
    pub fn q3(&self) -> f64 {
        self.q3
    }

    /// Quaternion components as an array, scalar part first.
    pub fn to_array(&self) -> [f64; 4] {
        [self.q0, self.q1, self.q2, self.q3]
    }

    /// Rotate a vector.
    pub fn apply_to(&self, v: Vector3d) -> Vector3d {
        self.apply(v.x, v.y, v.z, self.q0)
    }

    /// Rotate a vector by the inverse of this rotation.
    pub fn apply_inverse_to(&self, v: Vector3d) -> Vector3d {
        self.apply(v.x, v.y, v.z, -self.q0)
    }

    /// Compose `r` with this rotation: `r` is applied first, then `self`.
    ///
    /// Composition is associative but not commutative.
    pub fn compose(&self, r: Rotation) -> Rotation {
        self.hamilton(r, r.q0, r.q1, r.q2, r.q3)
    }

    /// Compose `r` with the inverse of this rotation.
    pub fn compose_inverse(&self, r: Rotation) -> Rotation {
        self.hamilton(r, -r.q0, -r.q1, -r.q2, -r.q3)
    }

    /// The 3x3 matrix corresponding to this rotation.
    ///
    /// Multiplying the matrix with a column vector matches [`apply_to`]
    /// exactly.
    ///
    /// [`apply_to`]: Rotation::apply_to
    pub fn matrix(&self) -> [[f64; 3]; 3] {
        // products
        let q0q0 = self.q0 * self.q0;
        let q0q1 = self.q0 * self.q1;
        let q0q2 = self.q0 * self.q2;
        let q0q3 = self.q0 * self.q3;
        let q1q1 = self.q1 * self.q1;
        let q1q2 = self.q1 * self.q2;
        let q1q3 = self.q1 * self.q3;
        let q2q2 = self.q2 * self.q2;
        let q2q3 = self.q2 * self.q3;
        let q3q3 = self.q3 * self.q3;

        let mut m = [[0.0; 3]; 3];
        m[0][0] = 2.0 * (q0q0 + q1q1) - 1.0;
        m[1][0] = 2.0 * (q1q2 - q0q3);
        m[2][0] = 2.0 * (q1q3 + q0q2);

        m[0][1] = 2.0 * (q1q2 + q0q3);
        m[1][1] = 2.0 * (q0q0 + q2q2) - 1.0;
        m[2][1] = 2.0 * (q2q3 - q0q1);

        m[0][2] = 2.0 * (q1q3 - q0q2);
        m[1][2] = 2.0 * (q2q3 + q0q1);
        m[2][2] = 2.0 * (q0q0 + q3q3) - 1.0;
        m
    }

    // Closed-form quaternion sandwich product. m0 is q0 for the forward
    // rotation and -q0 for the inverse.
    fn apply(&self, x: f64, y: f64, z: f64, m0: f64) -> Vector3d {
        let s = self.q1 * x + self.q2 * y + self.q3 * z;
        Vector3d::new(
            2.0 * (m0 * (x * m0 - (self.q2 * z - self.q3 * y)) + s * self.q1) - x,
            2.0 * (m0 * (y * m0 - (self.q3 * x - self.q1 * z)) + s * self.q2) - y,
            2.0 * (m0 * (z * m0 - (self.q1 * y - self.q2 * x)) + s * self.q3) - z,
        )
    }

    // Hamilton product with r, where m0..m3 are r's components, negated for
    // the inverse composition.
    fn hamilton(&self, r: Rotation, m0: f64, m1: f64, m2: f64, m3: f64) -> Rotation {
        Rotation {
            q0: m0 * self.q0 - (r.q1 * self.q1 + r.q2 * self.q2 + r.q3 * self.q3),
            q1: m1 * self.q0 + r.q0 * self.q1 + (r.q2 * self.q3 - r.q3 * self.q2),
            q2: m2 * self.q0 + r.q0 * self.q2 + (r.q3 * self.q1 - r.q1 * self.q3),
            q3: m3 * self.q0 + r.q0 * self.q3 + (r.q1 * self.q2 - r.q2 * self.q1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-12;

    fn assert_close(a: Vector3d, b: Vector3d) {
        assert!(
            (a - b).length() < EPS,
            "expected {b:?}, got {a:?}"
        );
    }

    #[test]
    fn zero_axis_is_rejected() {
        let err = Rotation::from_axis_angle(Vector3d::ZERO, 1.0).unwrap_err();
        assert!(matches!(err, Error::ZeroLengthAxis));
    }

    #[test]
    fn quarter_turn_around_y() {
        let r = Rotation::from_axis_angle(Vector3d::Y, FRAC_PI_2).unwrap();
        assert_close(r.apply_to(Vector3d::X), Vector3d::NEG_Z);
        assert_close(r.apply_to(Vector3d::NEG_Z), Vector3d::NEG_X);
        // the axis itself is fixed
        assert_close(r.apply_to(Vector3d::Y), Vector3d::Y);
    }

    #[test]
    fn axis_scale_does_not_change_the_rotation() {
        let a = Rotation::from_axis_angle(Vector3d::Y, FRAC_PI_2).unwrap();
        let b = Rotation::from_axis_angle(Vector3d::Y * 10.0, FRAC_PI_2).unwrap();
        assert_eq!(a.to_array(), b.to_array());
    }

    #[test]
    fn inverse_round_trips() {
        let r = Rotation::from_axis_angle(Vector3d::new(1.0, 2.0, -0.5), 0.73).unwrap();
        let v = Vector3d::new(3.0, -1.0, 4.0);
        assert_close(r.apply_inverse_to(r.apply_to(v)), v);
        assert_close(r.apply_to(r.apply_inverse_to(v)), v);
    }

    #[test]
    fn two_quarter_turns_make_a_half_turn() {
        let quarter = Rotation::from_axis_angle(Vector3d::Y, FRAC_PI_2).unwrap();
        let half = Rotation::from_axis_angle(Vector3d::Y, PI).unwrap();
        let composed = quarter.compose(quarter);
        for (a, b) in composed.to_array().iter().zip(half.to_array()) {
            assert!((a - b).abs() < EPS);
        }
    }

    #[test]
    fn compose_applies_the_operand_first() {
        let a = Rotation::from_axis_angle(Vector3d::Y, 0.4).unwrap();
        let b = Rotation::from_axis_angle(Vector3d::X, 1.1).unwrap();
        let v = Vector3d::new(0.3, -2.0, 1.7);
        assert_close(a.compose(b).apply_to(v), a.apply_to(b.apply_to(v)));
    }

    #[test]
    fn compose_inverse_cancels_compose() {
        let a = Rotation::from_axis_angle(Vector3d::new(0.2, 1.0, 0.5), 2.1).unwrap();
        let r = Rotation::from_axis_angle(Vector3d::Z, 0.9).unwrap();
        let round_trip = a.compose(a.compose_inverse(r));
        let v = Vector3d::new(1.0, 2.0, 3.0);
        assert_close(round_trip.apply_to(v), r.apply_to(v));
    }

    #[test]
    fn matrix_matches_apply_to() {
        let r = Rotation::from_axis_angle(Vector3d::new(1.0, -1.0, 2.0), 1.3).unwrap();
        let v = Vector3d::new(0.5, 2.0, -3.0);
        let m = r.matrix();
        let mv = Vector3d::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        );
        assert_close(mv, r.apply_to(v));
    }
}
