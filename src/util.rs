//! Vector utility algorithms: arcs, circles, projections and grid helpers.
//!
//! Everything here is a pure function of its inputs, built on top of
//! [`Vector3d`], [`Vector3i`] and [`Rotation`]. The only exception is
//! [`gaussian_offset`], which draws from the thread-local RNG; callers that
//! need reproducible results use [`gaussian_offset_with`] and supply their
//! own seeded source.

use std::sync::LazyLock;

use rand::Rng;
use rand_distr::StandardNormal;

use crate::Error;
use crate::position::Position;
use crate::rotation::Rotation;
use crate::scalar;
use crate::vector3d::Vector3d;
use crate::vector3i::Vector3i;

/// Reference directions for [`nearest_face`]: the six axis-aligned unit
/// vectors followed by the four diagonal directions in the XZ plane. The
/// order is part of the contract since ties resolve to the first maximum.
static AXES: LazyLock<[Vector3d; 10]> = LazyLock::new(|| {
    [
        Vector3d::X,
        Vector3d::Y,
        Vector3d::Z,
        Vector3d::NEG_X,
        Vector3d::NEG_Y,
        Vector3d::NEG_Z,
        (Vector3d::X + Vector3d::Z).normalize(),
        (Vector3d::Z + Vector3d::NEG_X).normalize(),
        (Vector3d::NEG_X + Vector3d::NEG_Z).normalize(),
        (Vector3d::NEG_Z + Vector3d::X).normalize(),
    ]
});

/// Repeatedly rotate `start` by a fixed delta, clockwise.
///
/// Each step rotates the previous result, so the output is the sequence of
/// intermediate directions, `times` entries long. `start` itself is not
/// included.
pub fn rotate(start: Vector3d, rotation: Rotation, times: usize) -> Vec<Vector3d> {
    let mut arc = Vec::with_capacity(times);
    let mut current = start;
    for _ in 0..times {
        current = rotation.apply_to(current);
        arc.push(current);
    }
    arc
}

/// Repeatedly rotate `start` around `axis` by `angle` radians, clockwise.
pub fn rotate_about(
    start: Vector3d,
    axis: Vector3d,
    angle: f64,
    times: usize,
) -> Result<Vec<Vector3d>, Error> {
    Ok(rotate(start, Rotation::from_axis_angle(axis, angle)?, times))
}

/// Repeatedly rotate `start` by a fixed delta, counter-clockwise.
pub fn rotate_inverse(start: Vector3d, rotation: Rotation, times: usize) -> Vec<Vector3d> {
    let mut arc = Vec::with_capacity(times);
    let mut current = start;
    for _ in 0..times {
        current = rotation.apply_inverse_to(current);
        arc.push(current);
    }
    arc
}

/// Repeatedly rotate `start` around `axis` by `angle` radians,
/// counter-clockwise.
pub fn rotate_inverse_about(
    start: Vector3d,
    axis: Vector3d,
    angle: f64,
    times: usize,
) -> Result<Vec<Vector3d>, Error> {
    Ok(rotate_inverse(
        start,
        Rotation::from_axis_angle(axis, angle)?,
        times,
    ))
}

/// Build a symmetric fan of directions around `start`.
///
/// `rays` is clamped to a minimum of 3 and rounded up to the nearest odd
/// number. The result holds `start` first, then all forward-rotated steps,
/// then all inverse-rotated steps; the two halves are not interleaved.
pub fn create_arc(
    start: Vector3d,
    axis: Vector3d,
    angle: f64,
    rays: usize,
) -> Result<Vec<Vector3d>, Error> {
    let rotation = Rotation::from_axis_angle(axis, angle)?;
    let mut rays = rays.max(3);
    if rays % 2 == 0 {
        rays += 1;
    }
    let half = (rays - 1) / 2;
    let mut arc = Vec::with_capacity(rays);
    arc.push(start);
    arc.extend(rotate(start, rotation, half));
    arc.extend(rotate_inverse(start, rotation, half));
    Ok(arc)
}

/// Sample `times` equally spaced points around the circle traced by rotating
/// `start` around `axis`.
pub fn circle(start: Vector3d, axis: Vector3d, times: usize) -> Result<Vec<Vector3d>, Error> {
    let angle = 2.0 * std::f64::consts::PI / times as f64;
    rotate_about(start, axis, angle, times)
}

/// Construct a vector perpendicular to `axis`, rotated by `radians` around
/// it and scaled to `length`.
///
/// The seed perpendicular is `(axis.y, -axis.x, 0)`. When `axis` is parallel
/// to Z that seed is the zero vector and normalize falls back to
/// [`Vector3d::X`] instead of failing.
pub fn orthogonal(axis: Vector3d, radians: f64, length: f64) -> Result<Vector3d, Error> {
    let perpendicular = Vector3d::new(axis.y, -axis.x, 0.0).normalize() * length;
    let rotation = Rotation::from_axis_angle(axis, radians)?;
    Ok(rotation.apply_to(perpendicular))
}

/// Rotate `v` around the X axis by an angle given as its cosine and sine.
pub fn rotate_around_axis_x(v: Vector3d, cos: f64, sin: f64) -> Vector3d {
    Vector3d::new(v.x, v.y * cos - v.z * sin, v.y * sin + v.z * cos)
}

/// Rotate `v` around the Y axis by an angle given as its cosine and sine.
pub fn rotate_around_axis_y(v: Vector3d, cos: f64, sin: f64) -> Vector3d {
    Vector3d::new(v.x * cos + v.z * sin, v.y, v.x * -sin + v.z * cos)
}

/// Rotate `v` around the Z axis by an angle given as its cosine and sine.
pub fn rotate_around_axis_z(v: Vector3d, cos: f64, sin: f64) -> Vector3d {
    Vector3d::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos, v.z)
}

/// Project `target` onto the segment from `start` to `end`.
///
/// The parametric position is clamped into `[0, 1]`, so the result always
/// lies on the segment, never on its infinite extension.
pub fn closest_point(start: Vector3d, end: Vector3d, target: Vector3d) -> Vector3d {
    let to_end = end - start;
    let t = scalar::clamp((target - start).dot(to_end) / to_end.dot(to_end), 0.0, 1.0);
    start + to_end * t
}

/// Perpendicular distance from `point` to the infinite line through
/// `point_on_line` with direction `line`.
pub fn distance_from_line(line: Vector3d, point_on_line: Vector3d, point: Vector3d) -> f64 {
    (point - point_on_line).cross(line).length() / line.length()
}

/// Decompose a diagonal move into its cardinal block-face components.
///
/// Computes the block-grid delta of moving from `origin` by `direction`,
/// clamps each axis to `[-1, 1]` and emits the nonzero deltas as unit
/// axis-aligned vectors, in x, y, z order. Moving within the same block
/// yields a single zero vector. Useful to enumerate the block faces a
/// diagonal move can collide with.
pub fn decompose_diagonals(origin: Vector3d, direction: Vector3d) -> Vec<Vector3i> {
    let temp = (origin + direction).to_vector3i() - origin.to_vector3i();
    let mut faces = Vec::with_capacity(3);
    let delta = scalar::clamp(temp.x, -1, 1);
    if delta != 0 {
        faces.push(Vector3i::new(delta, 0, 0));
    }
    let delta = scalar::clamp(temp.y, -1, 1);
    if delta != 0 {
        faces.push(Vector3i::new(0, delta, 0));
    }
    let delta = scalar::clamp(temp.z, -1, 1);
    if delta != 0 {
        faces.push(Vector3i::new(0, 0, delta));
    }
    if faces.is_empty() {
        faces.push(Vector3i::ZERO);
    }
    faces
}

/// Offset `target` by Gaussian noise with the same standard deviation on
/// every axis.
pub fn gaussian_offset(target: Vector3d, offset: f64) -> Vector3d {
    gaussian_offset_xyz(target, offset, offset, offset)
}

/// Offset `target` by Gaussian noise with a per-axis standard deviation.
///
/// Draws from the thread-local RNG, so concurrent callers do not contend.
pub fn gaussian_offset_xyz(
    target: Vector3d,
    offset_x: f64,
    offset_y: f64,
    offset_z: f64,
) -> Vector3d {
    gaussian_offset_with(&mut rand::thread_rng(), target, offset_x, offset_y, offset_z)
}

/// [`gaussian_offset_xyz`] with an explicit random source, for callers that
/// need reproducible offsets.
pub fn gaussian_offset_with<R: Rng + ?Sized>(
    rng: &mut R,
    target: Vector3d,
    offset_x: f64,
    offset_y: f64,
    offset_z: f64,
) -> Vector3d {
    let nx: f64 = rng.sample(StandardNormal);
    let ny: f64 = rng.sample(StandardNormal);
    let nz: f64 = rng.sample(StandardNormal);
    target + Vector3d::new(nx * offset_x, ny * offset_y, nz * offset_z)
}

/// The reference direction closest to `dir`.
///
/// `dir` is normalized, then matched against ten fixed directions: the six
/// axis-aligned unit vectors and the four XZ-plane diagonals. The first
/// direction with the largest dot product wins; ties resolve to whichever
/// comes first in the fixed list, not by any value-based ordering.
pub fn nearest_face(dir: Vector3d) -> Vector3d {
    let normal = dir.normalize();
    let mut result = AXES[0];
    let mut best = f64::MIN_POSITIVE;
    for face in AXES.iter() {
        let g = normal.dot(*face);
        if g > best {
            best = g;
            result = *face;
        }
    }
    result
}
