// particle.rs - A single drifting, pointer-shy particle

use glam::Vec2;

use crate::config::FieldConfig;
use crate::render::{Rgb, Surface};
use crate::world::{in_repulsion_range, repulsion, rest_return};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Spawn position the particle drifts back to when left alone.
    pub rest: Vec2,
    pub size: f32,
    /// Scales how hard the pointer pushes this particle.
    pub density: f32,
    pub color: Rgb,
}

impl Particle {
    /// Random particle inside `bounds` (width, height).
    pub fn spawn(rng: &mut fastrand::Rng, bounds: Vec2, accents: [Rgb; 2]) -> Self {
        let pos = Vec2::new(rng.f32() * bounds.x, rng.f32() * bounds.y);
        let vel = Vec2::new((rng.f32() - 0.5) * 2.0, (rng.f32() - 0.5) * 2.0);
        let size = rng.f32() * 3.0 + 1.0;
        let density = rng.f32() * 30.0 + 1.0;
        let color = if rng.f32() > 0.5 { accents[0] } else { accents[1] };
        Self { pos, vel, rest: pos, size, density, color }
    }

    /// Advance one frame.
    pub fn update(&mut self, pointer: Option<Vec2>, bounds: Vec2, cfg: &FieldConfig) {
        if in_repulsion_range(self.pos, pointer, cfg.repulsion_radius) {
            self.pos += repulsion(
                self.pos,
                pointer,
                cfg.repulsion_radius,
                self.density,
                cfg.repulsion_strength,
            );
        } else {
            self.pos = rest_return(self.pos, self.rest, cfg.return_divisor);
        }

        self.pos += self.vel;

        // Bounce off edges
        if self.pos.x < 0.0 || self.pos.x > bounds.x {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > bounds.y {
            self.vel.y = -self.vel.y;
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, glow: f32) {
        surface.fill_circle(self.pos.x, self.pos.y, self.size, self.color, glow);
    }
}
