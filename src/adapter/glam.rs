//! Adapter for [`glam`] vectors: `DVec3` doubles, `Vec3` floats and `IVec3`
//! integers.
//!
//! Continuous conversions to `DVec3` are lossless; `Vec3` narrows to `f32`
//! and `IVec3` takes the block coordinates. Integer conversions from
//! continuous glam types floor each component.

use glam::{DVec3, IVec3, Vec3};

use super::Adapters;
use crate::position::Position;
use crate::vector3d::Vector3d;
use crate::vector3i::Vector3i;

impl From<DVec3> for Vector3d {
    fn from(v: DVec3) -> Self {
        Vector3d::new(v.x, v.y, v.z)
    }
}

impl From<Vector3d> for DVec3 {
    fn from(v: Vector3d) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for Vector3d {
    fn from(v: Vec3) -> Self {
        Vector3d::new(v.x as f64, v.y as f64, v.z as f64)
    }
}

impl From<Vector3d> for Vec3 {
    fn from(v: Vector3d) -> Self {
        Vec3::new(v.x as f32, v.y as f32, v.z as f32)
    }
}

impl From<IVec3> for Vector3d {
    fn from(v: IVec3) -> Self {
        Vector3d::new(v.x as f64, v.y as f64, v.z as f64)
    }
}

impl From<Vector3d> for IVec3 {
    fn from(v: Vector3d) -> Self {
        IVec3::new(v.block_x(), v.block_y(), v.block_z())
    }
}

impl From<IVec3> for Vector3i {
    fn from(v: IVec3) -> Self {
        Vector3i::new(v.x, v.y, v.z)
    }
}

impl From<Vector3i> for IVec3 {
    fn from(v: Vector3i) -> Self {
        IVec3::new(v.x, v.y, v.z)
    }
}

impl From<DVec3> for Vector3i {
    fn from(v: DVec3) -> Self {
        Vector3i::from_f64(v.x, v.y, v.z)
    }
}

impl From<Vector3i> for DVec3 {
    fn from(v: Vector3i) -> Self {
        DVec3::new(v.x as f64, v.y as f64, v.z as f64)
    }
}

impl From<Vec3> for Vector3i {
    fn from(v: Vec3) -> Self {
        Vector3i::from_f64(v.x as f64, v.y as f64, v.z as f64)
    }
}

impl From<Vector3i> for Vec3 {
    fn from(v: Vector3i) -> Self {
        Vec3::new(v.x as f32, v.y as f32, v.z as f32)
    }
}

/// Register the glam types on a continuous-vector registry.
pub fn register_vector3d(adapters: &mut Adapters<Vector3d>) {
    adapters.register::<DVec3, _, _>(|v| Vector3d::from(*v), |p| DVec3::from(*p));
    adapters.register::<Vec3, _, _>(|v| Vector3d::from(*v), |p| Vec3::from(*p));
    adapters.register::<IVec3, _, _>(|v| Vector3d::from(*v), |p| IVec3::from(*p));
}

/// Register the glam types on an integer-vector registry.
pub fn register_vector3i(adapters: &mut Adapters<Vector3i>) {
    adapters.register::<DVec3, _, _>(|v| Vector3i::from(*v), |p| DVec3::from(*p));
    adapters.register::<Vec3, _, _>(|v| Vector3i::from(*v), |p| Vec3::from(*p));
    adapters.register::<IVec3, _, _>(|v| Vector3i::from(*v), |p| IVec3::from(*p));
}

/// Register the glam types on both registries.
pub fn register(vector3d: &mut Adapters<Vector3d>, vector3i: &mut Adapters<Vector3i>) {
    register_vector3d(vector3d);
    register_vector3i(vector3i);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dvec3_round_trip_is_lossless() {
        let v = Vector3d::new(0.125, -7.5, 2.25);
        assert_eq!(Vector3d::from(DVec3::from(v)), v);
    }

    #[test]
    fn ivec3_conversion_floors_continuous_coordinates() {
        let v = Vector3d::new(-0.5, 1.9, 3.0);
        assert_eq!(IVec3::from(v), IVec3::new(-1, 1, 3));
        assert_eq!(Vector3i::from(DVec3::new(-0.5, 1.9, 3.0)), Vector3i::new(-1, 1, 3));
    }

    #[test]
    fn registry_serves_all_three_types() {
        let mut vector3d = Adapters::new();
        let mut vector3i = Adapters::new();
        register(&mut vector3d, &mut vector3i);

        let v = vector3d.adapt(&DVec3::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(v, Vector3d::new(1.0, 2.0, 3.0));
        let native: Vec3 = vector3d.convert(&v).unwrap();
        assert_eq!(native, Vec3::new(1.0, 2.0, 3.0));

        let i = vector3i.adapt(&Vec3::new(0.5, -0.5, 2.0)).unwrap();
        assert_eq!(i, Vector3i::new(0, -1, 2));
        let back: IVec3 = vector3i.convert(&i).unwrap();
        assert_eq!(back, IVec3::new(0, -1, 2));
    }
}
