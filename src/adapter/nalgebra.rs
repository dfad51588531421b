//! Adapter for [`nalgebra`] vectors and points.
//!
//! Covers `Vector3<f64>`, `Point3<f64>` and `Vector3<i32>`, mirroring the
//! glam integration: continuous conversions are lossless, integer
//! conversions from continuous types floor each component.

use nalgebra as na;

use super::Adapters;
use crate::position::Position;
use crate::vector3d::Vector3d;
use crate::vector3i::Vector3i;

impl From<na::Vector3<f64>> for Vector3d {
    fn from(v: na::Vector3<f64>) -> Self {
        Vector3d::new(v.x, v.y, v.z)
    }
}

impl From<Vector3d> for na::Vector3<f64> {
    fn from(v: Vector3d) -> Self {
        na::Vector3::new(v.x, v.y, v.z)
    }
}

impl From<na::Point3<f64>> for Vector3d {
    fn from(p: na::Point3<f64>) -> Self {
        Vector3d::new(p.x, p.y, p.z)
    }
}

impl From<Vector3d> for na::Point3<f64> {
    fn from(v: Vector3d) -> Self {
        na::Point3::new(v.x, v.y, v.z)
    }
}

impl From<na::Vector3<i32>> for Vector3i {
    fn from(v: na::Vector3<i32>) -> Self {
        Vector3i::new(v.x, v.y, v.z)
    }
}

impl From<Vector3i> for na::Vector3<i32> {
    fn from(v: Vector3i) -> Self {
        na::Vector3::new(v.x, v.y, v.z)
    }
}

impl From<na::Vector3<i32>> for Vector3d {
    fn from(v: na::Vector3<i32>) -> Self {
        Vector3d::new(v.x as f64, v.y as f64, v.z as f64)
    }
}

impl From<Vector3d> for na::Vector3<i32> {
    fn from(v: Vector3d) -> Self {
        na::Vector3::new(v.block_x(), v.block_y(), v.block_z())
    }
}

impl From<na::Vector3<f64>> for Vector3i {
    fn from(v: na::Vector3<f64>) -> Self {
        Vector3i::from_f64(v.x, v.y, v.z)
    }
}

impl From<Vector3i> for na::Vector3<f64> {
    fn from(v: Vector3i) -> Self {
        na::Vector3::new(v.x as f64, v.y as f64, v.z as f64)
    }
}

/// Register the nalgebra types on a continuous-vector registry.
pub fn register_vector3d(adapters: &mut Adapters<Vector3d>) {
    adapters.register::<na::Vector3<f64>, _, _>(
        |v| Vector3d::from(*v),
        |p| na::Vector3::<f64>::from(*p),
    );
    adapters.register::<na::Point3<f64>, _, _>(
        |p| Vector3d::from(*p),
        |v| na::Point3::from(*v),
    );
    adapters.register::<na::Vector3<i32>, _, _>(
        |v| Vector3d::from(*v),
        |p| na::Vector3::<i32>::from(*p),
    );
}

/// Register the nalgebra types on an integer-vector registry.
pub fn register_vector3i(adapters: &mut Adapters<Vector3i>) {
    adapters.register::<na::Vector3<f64>, _, _>(
        |v| Vector3i::from(*v),
        |p| na::Vector3::<f64>::from(*p),
    );
    adapters.register::<na::Vector3<i32>, _, _>(
        |v| Vector3i::from(*v),
        |p| na::Vector3::<i32>::from(*p),
    );
}

/// Register the nalgebra types on both registries.
pub fn register(vector3d: &mut Adapters<Vector3d>, vector3i: &mut Adapters<Vector3i>) {
    register_vector3d(vector3d);
    register_vector3i(vector3i);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_round_trip_is_lossless() {
        let v = Vector3d::new(0.5, -2.75, 9.0);
        assert_eq!(Vector3d::from(na::Vector3::<f64>::from(v)), v);
        assert_eq!(Vector3d::from(na::Point3::<f64>::from(v)), v);
    }

    #[test]
    fn integer_conversion_floors() {
        let v = na::Vector3::new(-1.5, 0.5, 2.0);
        assert_eq!(Vector3i::from(v), Vector3i::new(-2, 0, 2));
    }

    #[test]
    fn registry_round_trip() {
        let mut vector3d = Adapters::new();
        let mut vector3i = Adapters::new();
        register(&mut vector3d, &mut vector3i);

        let v = vector3d.adapt(&na::Point3::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(v, Vector3d::new(1.0, 2.0, 3.0));
        let p: na::Point3<f64> = vector3d.convert(&v).unwrap();
        assert_eq!(p, na::Point3::new(1.0, 2.0, 3.0));

        let i = vector3i.adapt(&na::Vector3::new(0.5, -0.5, 2.0)).unwrap();
        assert_eq!(i, Vector3i::new(0, -1, 2));
    }
}
