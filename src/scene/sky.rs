// sky.rs - Starfield, nebula and the soft point sprite

use super::graph::{NodeKind, PointsMaterial};
use crate::render::Rgb;

const STAR_SPREAD: f32 = 4000.0;
const NEBULA_SPREAD: [f32; 3] = [1000.0, 200.0, 1000.0];
pub const SPRITE_SIZE: u32 = 32;

/// Uniform sample in [-range/2, range/2).
#[inline]
fn spread(rng: &mut fastrand::Rng, range: f32) -> f32 {
    (rng.f32() - 0.5) * range
}

pub fn star_color(draw: f32) -> Rgb {
    if draw > 0.9 {
        Rgb::hex(0xaaaaff)
    } else if draw > 0.7 {
        Rgb::hex(0xffddaa)
    } else {
        Rgb::WHITE
    }
}

pub fn nebula_color(draw: f32) -> Rgb {
    if draw > 0.6 {
        Rgb::hex(0x8800ff) // purple
    } else if draw > 0.3 {
        Rgb::hex(0xff0088) // pink
    } else {
        Rgb::hex(0x0088ff) // blue
    }
}

pub fn starfield(rng: &mut fastrand::Rng, count: usize) -> NodeKind {
    let mut positions = Vec::with_capacity(count * 3);
    let mut colors = Vec::with_capacity(count * 3);
    for _ in 0..count {
        for _ in 0..3 {
            positions.push(spread(rng, STAR_SPREAD));
        }
        colors.extend_from_slice(&star_color(rng.f32()).unit());
    }
    NodeKind::Points {
        positions,
        colors,
        material: PointsMaterial {
            size: 2.0,
            opacity: 0.8,
            additive: false,
            depth_write: true,
            sprite: false,
        },
    }
}

pub fn nebula(rng: &mut fastrand::Rng, count: usize) -> NodeKind {
    let mut positions = Vec::with_capacity(count * 3);
    let mut colors = Vec::with_capacity(count * 3);
    for _ in 0..count {
        for range in NEBULA_SPREAD {
            positions.push(spread(rng, range));
        }
        colors.extend_from_slice(&nebula_color(rng.f32()).unit());
    }
    NodeKind::Points {
        positions,
        colors,
        material: PointsMaterial {
            size: 100.0,
            opacity: 0.1,
            additive: true,
            depth_write: false,
            sprite: true,
        },
    }
}

/// RGBA texture, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Texture {
    /// Zero-sized texture with no pixel storage.
    pub fn empty() -> Self {
        Self { width: 0, height: 0, rgba: Vec::new() }
    }
}

/// Radial gradient from opaque white at the centre to transparent black
/// at the edge. Corners past the radius keep the edge color.
pub fn sprite_texture(size: u32) -> Texture {
    let half = size as f32 / 2.0;
    let mut rgba = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - half;
            let dy = y as f32 + 0.5 - half;
            let t = ((dx * dx + dy * dy).sqrt() / half).min(1.0);
            let v = ((1.0 - t) * 255.0).round() as u8;
            rgba.extend_from_slice(&[v, v, v, v]);
        }
    }
    Texture { width: size, height: size, rgba }
}
