// forces.rs - Pointer repulsion, rest return, link opacity
//
// Screen space, y down, units are CSS pixels.

use glam::Vec2;

/// Displacement pushing a particle at `pos` away from the pointer.
///
/// Zero when the pointer is unset, at or beyond `radius`, or exactly on
/// top of the particle (no direction to push along).
#[inline]
pub fn repulsion(pos: Vec2, pointer: Option<Vec2>, radius: f32, density: f32, strength: f32) -> Vec2 {
    let Some(pointer) = pointer else { return Vec2::ZERO };
    let toward = pointer - pos;
    let dist = toward.length();
    if dist >= radius || dist == 0.0 {
        return Vec2::ZERO;
    }
    let force = (radius - dist) / radius;
    -(toward / dist) * force * density * strength
}

/// Whether the pointer is close enough to repel a particle at `pos`.
#[inline]
pub fn in_repulsion_range(pos: Vec2, pointer: Option<Vec2>, radius: f32) -> bool {
    pointer.is_some_and(|p| p.distance(pos) < radius)
}

/// Step from `pos` toward `rest`, covering 1/divisor of the gap.
#[inline]
pub fn rest_return(pos: Vec2, rest: Vec2, divisor: f32) -> Vec2 {
    pos - (pos - rest) / divisor
}

/// Opacity of a particle-to-particle link. Literal formula, not clamped.
#[inline]
pub fn link_alpha(dist: f32) -> f32 {
    0.2 - dist / 1000.0
}

/// Opacity of a particle-to-pointer link. Literal formula, not clamped.
#[inline]
pub fn pointer_alpha(dist: f32) -> f32 {
    0.5 - dist / 400.0
}
