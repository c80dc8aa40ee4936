// sim/ - Pointer-reactive particle field
//
// A fixed-size set of particles drifting over the viewport. The whole set
// is rebuilt on resize since positions are viewport-relative.

mod particle;

pub use particle::Particle;

use glam::Vec2;

use crate::config::FieldConfig;
use crate::error::Result;
use crate::frame::{Lifecycle, RenderLoop};
use crate::input::PointerState;
use crate::render::{Rgb, Surface};
use crate::world::{link_alpha, pointer_alpha};

const LINK_WIDTH: f32 = 0.8;
const POINTER_LINK_WIDTH: f32 = 1.0;
const POINTER_LINK_COLOR: Rgb = Rgb::hex(0x00f2ff);

pub struct ParticleField {
    cfg: FieldConfig,
    accents: [Rgb; 2],
    bounds: Vec2,
    particles: Vec<Particle>,
    rng: fastrand::Rng,
    frames: RenderLoop,
}

impl ParticleField {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self::build(width, height, seed, FieldConfig::default())
    }

    /// Fails when `cfg` does not pass `FieldConfig::validate`.
    pub fn with_config(width: f32, height: f32, seed: u64, cfg: FieldConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self::build(width, height, seed, cfg))
    }

    fn build(width: f32, height: f32, seed: u64, cfg: FieldConfig) -> Self {
        let accents = cfg.accents.map(Rgb::hex);
        let mut field = Self {
            cfg,
            accents,
            bounds: Vec2::ZERO,
            particles: Vec::new(),
            rng: fastrand::Rng::with_seed(seed),
            frames: RenderLoop::new(),
        };
        field.resize(width, height);
        field
    }

    /// Adopt new viewport dimensions. Every particle is discarded and the
    /// field respawned inside the new bounds. Ignored once disposed.
    pub fn resize(&mut self, width: f32, height: f32) {
        if self.lifecycle() == Lifecycle::Disposed {
            log::debug!("ignoring resize of a disposed particle field");
            return;
        }
        self.bounds = Vec2::new(width.max(0.0), height.max(0.0));
        self.spawn_field(self.cfg.count);
        log::debug!(
            "particle field resized to {}x{}, {} particles",
            self.bounds.x,
            self.bounds.y,
            self.particles.len()
        );
    }

    /// Replace the field with `count` fresh random particles.
    pub fn spawn_field(&mut self, count: usize) {
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let p = Particle::spawn(&mut self.rng, self.bounds, self.accents);
            self.particles.push(p);
        }
    }

    /// Update, draw and connect every particle for one frame.
    pub fn render_frame<S: Surface + ?Sized>(&mut self, input: &PointerState, surface: &mut S) {
        surface.clear(self.bounds.x, self.bounds.y);
        let pointer = input.position;

        for i in 0..self.particles.len() {
            self.particles[i].update(pointer, self.bounds, &self.cfg);
            let p = self.particles[i];
            p.draw(surface, self.cfg.glow_blur);

            // Later particles have not moved yet this frame
            for q in &self.particles[i + 1..] {
                let dist = p.pos.distance(q.pos);
                if dist < self.cfg.link_distance {
                    surface.stroke_line(xy(p.pos), xy(q.pos), Rgb::WHITE, link_alpha(dist), LINK_WIDTH);
                }
            }

            if let Some(ptr) = pointer {
                let dist = p.pos.distance(ptr);
                if dist < self.cfg.pointer_link_distance {
                    surface.stroke_line(
                        xy(p.pos),
                        xy(ptr),
                        POINTER_LINK_COLOR,
                        pointer_alpha(dist),
                        POINTER_LINK_WIDTH,
                    );
                }
            }
        }
    }

    /// Render one frame if running. Returns whether another frame is wanted.
    pub fn tick<S: Surface + ?Sized>(&mut self, input: &PointerState, surface: &mut S) -> bool {
        let mut frames = std::mem::take(&mut self.frames);
        let more = frames.frame(|| self.render_frame(input, surface));
        self.frames = frames;
        more
    }

    pub fn start(&mut self) {
        self.frames.start();
        log::info!("particle field started");
    }

    pub fn stop(&mut self) {
        self.frames.stop();
        log::info!("particle field stopped after {} frames", self.frames.frames());
    }

    pub fn dispose(&mut self) {
        self.frames.dispose();
        self.particles = Vec::new();
        log::info!("particle field disposed");
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.frames.state()
    }

    pub fn render_loop(&self) -> &RenderLoop {
        &self.frames
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn config(&self) -> &FieldConfig {
        &self.cfg
    }
}

#[inline]
fn xy(v: Vec2) -> (f32, f32) {
    (v.x, v.y)
}
