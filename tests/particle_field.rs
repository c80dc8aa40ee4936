use glam::Vec2;
use space_engine::config::FieldConfig;
use space_engine::frame::Lifecycle;
use space_engine::input::PointerState;
use space_engine::render::{DrawList, OP_CIRCLE, OP_CLEAR, OP_LINE, Rgb, Surface};
use space_engine::sim::{Particle, ParticleField};

/// Surface that records every call for inspection.
#[derive(Default)]
struct Recorder {
    clears: Vec<(f32, f32)>,
    circles: Vec<(f32, f32, f32, Rgb, f32)>,
    lines: Vec<((f32, f32), (f32, f32), Rgb, f32, f32)>,
}

impl Surface for Recorder {
    fn clear(&mut self, width: f32, height: f32) {
        self.clears.push((width, height));
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb, glow: f32) {
        self.circles.push((x, y, radius, color, glow));
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgb, alpha: f32, width: f32) {
        self.lines.push((from, to, color, alpha, width));
    }
}

fn fixed(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
    Particle {
        pos: Vec2::new(x, y),
        vel: Vec2::new(vx, vy),
        rest: Vec2::new(x, y),
        size: 2.0,
        density: 10.0,
        color: Rgb::hex(0x00f2ff),
    }
}

/// Field whose particles are replaced by the given ones.
fn field_with(width: f32, height: f32, particles: &[Particle]) -> ParticleField {
    let mut field = ParticleField::with_config(
        width,
        height,
        1,
        FieldConfig { count: particles.len(), ..FieldConfig::default() },
    )
    .expect("valid config");
    field.particles_mut().copy_from_slice(particles);
    field
}

// ==================================================================================
// Spawning and resize
// ==================================================================================

#[test]
fn spawn_on_full_hd() {
    let field = ParticleField::new(1920.0, 1080.0, 42);
    assert_eq!(field.particles().len(), 100);
    for p in field.particles() {
        assert!((1.0..=4.0).contains(&p.size));
        assert!((1.0..=31.0).contains(&p.density));
        assert!(p.pos.x >= 0.0 && p.pos.x <= 1920.0);
        assert!(p.pos.y >= 0.0 && p.pos.y <= 1080.0);
    }
}

#[test]
fn spawn_field_replaces_the_set() {
    let mut field = ParticleField::new(800.0, 600.0, 5);
    field.spawn_field(7);
    assert_eq!(field.particles().len(), 7);
}

#[test]
fn resize_rebuilds_inside_new_bounds() {
    let mut field = ParticleField::new(1920.0, 1080.0, 11);
    let before: Vec<Particle> = field.particles().to_vec();
    field.resize(320.0, 240.0);

    assert_eq!(field.particles().len(), 100);
    assert_eq!(field.bounds(), Vec2::new(320.0, 240.0));
    for p in field.particles() {
        assert!(p.pos.x <= 320.0 && p.pos.y <= 240.0);
    }
    assert_ne!(before, field.particles());
}

#[test]
fn disposed_field_ignores_resize() {
    let mut field = ParticleField::new(800.0, 600.0, 4);
    field.dispose();
    field.resize(1024.0, 768.0);
    assert!(field.particles().is_empty());
    assert_eq!(field.bounds(), Vec2::new(800.0, 600.0));
}

#[test]
fn zero_return_divisor_is_rejected() {
    let cfg = FieldConfig { return_divisor: 0.0, ..FieldConfig::default() };
    assert!(ParticleField::with_config(400.0, 300.0, 1, cfg).is_err());
    let cfg = FieldConfig { repulsion_radius: f32::NAN, ..FieldConfig::default() };
    assert!(ParticleField::with_config(400.0, 300.0, 1, cfg).is_err());
}

#[test]
fn same_seed_same_field() {
    let a = ParticleField::new(640.0, 480.0, 99);
    let b = ParticleField::new(640.0, 480.0, 99);
    assert_eq!(a.particles(), b.particles());
}

// ==================================================================================
// Motion
// ==================================================================================

#[test]
fn bounce_at_right_edge() {
    let cfg = FieldConfig::default();
    let mut p = fixed(500.0, 100.0, 0.7, 0.0);
    p.update(None, Vec2::new(500.0, 300.0), &cfg);
    assert!(p.vel.x < 0.0);
    assert_eq!(p.vel.x, -0.7);
}

#[test]
fn bounce_at_left_and_top_edges() {
    let cfg = FieldConfig::default();
    let bounds = Vec2::new(500.0, 300.0);

    let mut p = fixed(0.0, 100.0, -0.5, 0.0);
    p.update(None, bounds, &cfg);
    assert_eq!(p.vel.x, 0.5);

    let mut p = fixed(100.0, 0.0, 0.0, -0.5);
    p.update(None, bounds, &cfg);
    assert_eq!(p.vel.y, 0.5);

    // sitting exactly on the edge is still inside
    let mut p = fixed(0.5, 0.5, -0.5, -0.5);
    p.update(None, bounds, &cfg);
    assert_eq!(p.vel, Vec2::new(-0.5, -0.5));
}

#[test]
fn particles_stay_near_the_viewport() {
    let mut field = ParticleField::new(400.0, 300.0, 3);
    field.start();
    let pointer = PointerState::default();
    let mut rec = Recorder::default();
    for _ in 0..2000 {
        field.tick(&pointer, &mut rec);
        for p in field.particles() {
            // one frame of overshoot at most (|v| <= 1)
            assert!(p.pos.x >= -1.0 && p.pos.x <= 401.0, "x = {}", p.pos.x);
            assert!(p.pos.y >= -1.0 && p.pos.y <= 301.0, "y = {}", p.pos.y);
        }
        rec = Recorder::default();
    }
}

#[test]
fn rest_return_shrinks_geometrically() {
    let cfg = FieldConfig::default();
    let bounds = Vec2::new(1000.0, 1000.0);
    let mut p = fixed(100.0, 100.0, 0.0, 0.0);
    p.pos = Vec2::new(180.0, 60.0);

    let far = Some(Vec2::new(900.0, 900.0));
    let mut err = p.pos - p.rest;
    for _ in 0..50 {
        p.update(far, bounds, &cfg);
        let next = p.pos - p.rest;
        assert!((next - err * 0.95).length() < 1e-3);
        // never crosses the rest point
        assert!(next.x >= 0.0 && next.y <= 0.0);
        err = next;
    }
}

#[test]
fn unset_pointer_behaves_as_far_away() {
    let cfg = FieldConfig::default();
    let bounds = Vec2::new(1000.0, 1000.0);
    let mut a = fixed(100.0, 100.0, 0.0, 0.0);
    a.pos = Vec2::new(140.0, 100.0);
    let mut b = a;
    a.update(None, bounds, &cfg);
    b.update(Some(Vec2::new(900.0, 900.0)), bounds, &cfg);
    assert_eq!(a, b);
    assert!(a.pos.x.is_finite() && a.pos.y.is_finite());
}

// ==================================================================================
// Rendering
// ==================================================================================

#[test]
fn links_only_under_150() {
    let ps = [
        fixed(100.0, 100.0, 0.0, 0.0),
        fixed(200.0, 100.0, 0.0, 0.0), // 100 from first
        fixed(400.0, 100.0, 0.0, 0.0), // 200 from second
    ];
    let mut field = field_with(1000.0, 1000.0, &ps);
    let mut rec = Recorder::default();
    field.render_frame(&PointerState::default(), &mut rec);

    assert_eq!(rec.clears, vec![(1000.0, 1000.0)]);
    assert_eq!(rec.circles.len(), 3);
    assert_eq!(rec.lines.len(), 1);
    let (from, to, color, alpha, width) = rec.lines[0];
    assert_eq!((from, to), ((100.0, 100.0), (200.0, 100.0)));
    assert_eq!(color, Rgb::WHITE);
    assert!((alpha - 0.1).abs() < 1e-6);
    assert_eq!(width, 0.8);
}

#[test]
fn pointer_links_use_cyan() {
    let ps = [fixed(100.0, 100.0, 0.0, 0.0), fixed(700.0, 700.0, 0.0, 0.0)];
    let mut field = field_with(1000.0, 1000.0, &ps);
    let mut pointer = PointerState::default();
    pointer.moved(400.0, 100.0);

    let mut rec = Recorder::default();
    field.render_frame(&pointer, &mut rec);

    // first particle is 300 away, no repulsion and no link; nothing is
    // within 200 of the pointer
    assert!(rec.lines.is_empty());

    pointer.moved(180.0, 100.0);
    let mut rec = Recorder::default();
    field.render_frame(&pointer, &mut rec);
    let pointer_lines: Vec<_> = rec.lines.iter().filter(|l| l.2 == Rgb::hex(0x00f2ff)).collect();
    assert_eq!(pointer_lines.len(), 1);
    let (from, to, _, alpha, width) = *pointer_lines[0];
    assert_eq!(to, (180.0, 100.0));
    let dist = ((to.0 - from.0).powi(2) + (to.1 - from.1).powi(2)).sqrt();
    assert!((alpha - (0.5 - dist / 400.0)).abs() < 1e-5);
    assert_eq!(width, 1.0);
}

#[test]
fn circles_glow_with_their_color() {
    let mut field = ParticleField::new(300.0, 300.0, 8);
    let mut rec = Recorder::default();
    field.render_frame(&PointerState::default(), &mut rec);
    assert_eq!(rec.circles.len(), 100);
    for (i, c) in rec.circles.iter().enumerate() {
        let p = field.particles()[i];
        assert_eq!((c.0, c.1, c.2, c.3), (p.pos.x, p.pos.y, p.size, p.color));
        assert_eq!(c.4, 15.0);
    }
}

#[test]
fn draw_list_encodes_a_frame() {
    let ps = [fixed(10.0, 10.0, 0.0, 0.0), fixed(20.0, 10.0, 0.0, 0.0)];
    let mut field = field_with(100.0, 100.0, &ps);
    let mut dl = DrawList::new();
    field.render_frame(&PointerState::default(), &mut dl);

    let ops: Vec<f32> = (0..dl.commands()).map(|i| dl.command(i)[0]).collect();
    assert_eq!(ops, vec![OP_CLEAR, OP_CIRCLE, OP_LINE, OP_CIRCLE]);

    // next frame replaces the previous one
    field.render_frame(&PointerState::default(), &mut dl);
    assert_eq!(dl.commands(), 4);
}

// ==================================================================================
// Lifecycle
// ==================================================================================

#[test]
fn tick_respects_lifecycle() {
    let mut field = ParticleField::new(200.0, 200.0, 2);
    let pointer = PointerState::default();
    let mut rec = Recorder::default();

    assert_eq!(field.lifecycle(), Lifecycle::Created);
    assert!(!field.tick(&pointer, &mut rec));
    assert!(rec.clears.is_empty());

    field.start();
    assert!(field.tick(&pointer, &mut rec));
    assert_eq!(rec.clears.len(), 1);

    field.stop();
    assert!(!field.tick(&pointer, &mut rec));
    assert_eq!(field.render_loop().frames(), 1);

    field.dispose();
    assert_eq!(field.lifecycle(), Lifecycle::Disposed);
    assert!(field.particles().is_empty());
}
