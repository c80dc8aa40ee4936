// orbit.rs - Circular orbits and ground-plane movement vectors
//
// World space, y up (three.js convention).

use std::f32::consts::TAU;

use glam::Vec3;

/// Point on a circle of `distance` in the XZ plane.
#[inline]
pub fn orbit_position(angle: f32, distance: f32) -> Vec3 {
    Vec3::new(angle.cos() * distance, 0.0, angle.sin() * distance)
}

/// Advance an angle by `delta` radians and wrap it into `[0, TAU)`.
///
/// Keeps long-running angles small so per-frame steps stay representable
/// in f32.
#[inline]
pub fn spin(angle: &mut f32, delta: f32) {
    *angle = (*angle + delta).rem_euclid(TAU);
}

/// Forward and right movement axes for a camera looking along `look`.
///
/// Forward is `look` projected onto the ground plane; right is
/// `look x up`. Both are unit length, or zero when the projection
/// degenerates (camera looking straight up or down).
pub fn ground_axes(look: Vec3, up: Vec3) -> (Vec3, Vec3) {
    let flat = Vec3::new(look.x, 0.0, look.z);
    let forward = flat.normalize_or_zero();
    let right = flat.cross(up).normalize_or_zero();
    (forward, right)
}
