// planets.rs - Table-driven planets on circular orbits

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;

use super::graph::{Geometry, Material, NodeId, NodeKind, SceneGraph, Side};
use crate::world::{orbit_position, spin};

/// Spin about the planet's own axis, radians per frame.
const SPIN: f32 = 0.01;

const ORBIT_HALF_WIDTH: f32 = 0.3;
const ORBIT_COLOR: u32 = 0xffffff;
const ORBIT_OPACITY: f32 = 0.08;
const RING_COLOR: u32 = 0xaa8866;
const RING_OPACITY: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetSpec {
    pub name: &'static str,
    pub size: f32,
    /// Orbit radius.
    pub distance: f32,
    /// Orbital angle advanced per frame, radians.
    pub speed: f32,
    pub color: u32,
    pub ring: bool,
}

const fn spec(name: &'static str, size: f32, distance: f32, speed: f32, color: u32, ring: bool) -> PlanetSpec {
    PlanetSpec { name, size, distance, speed, color, ring }
}

pub const PLANETS: [PlanetSpec; 8] = [
    spec("Mercury", 2.0, 40.0, 0.02, 0xaaaaaa, false),
    spec("Venus", 3.0, 60.0, 0.015, 0xe3bb76, false),
    spec("Earth", 3.2, 80.0, 0.01, 0x2233ff, false),
    spec("Mars", 2.5, 100.0, 0.008, 0xff4500, false),
    spec("Jupiter", 8.0, 150.0, 0.004, 0xd8ca9d, false),
    spec("Saturn", 7.0, 200.0, 0.002, 0xc5ab6e, true),
    spec("Uranus", 5.0, 250.0, 0.001, 0x4fd0e7, false),
    spec("Neptune", 5.0, 300.0, 0.0005, 0x2990b5, false),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub spec: PlanetSpec,
    pub mesh: NodeId,
    pub orbit: NodeId,
    pub ring: Option<NodeId>,
    pub angle: f32,
}

impl Planet {
    /// Add the planet, its orbit ring and optional ring system to `graph`.
    pub fn build(graph: &mut SceneGraph, spec: PlanetSpec, rng: &mut fastrand::Rng) -> Self {
        let mesh = graph.add(None, spec.name, NodeKind::Mesh {
            geometry: Geometry::Sphere { radius: spec.size, segments: 32 },
            material: Material::Standard { color: spec.color, roughness: 0.7, metalness: 0.2 },
        });

        let angle = rng.f32() * TAU;
        graph.node_mut(mesh).position = orbit_position(angle, spec.distance);

        let orbit = graph.add(None, format!("{}-orbit", spec.name), NodeKind::Mesh {
            geometry: Geometry::Ring {
                inner: spec.distance - ORBIT_HALF_WIDTH,
                outer: spec.distance + ORBIT_HALF_WIDTH,
                segments: 128,
            },
            material: Material::translucent(ORBIT_COLOR, ORBIT_OPACITY, Side::Double),
        });
        graph.node_mut(orbit).rotation = Vec3::new(FRAC_PI_2, 0.0, 0.0);

        let ring = spec.ring.then(|| {
            let ring = graph.add(Some(mesh), format!("{}-ring", spec.name), NodeKind::Mesh {
                geometry: Geometry::Ring { inner: spec.size + 3.0, outer: spec.size + 8.0, segments: 64 },
                material: Material::translucent(RING_COLOR, RING_OPACITY, Side::Double),
            });
            graph.node_mut(ring).rotation = Vec3::new(FRAC_PI_2, 0.0, 0.0);
            ring
        });

        Self { spec, mesh, orbit, ring, angle }
    }

    /// Move one frame along the orbit and spin.
    pub fn advance(&mut self, graph: &mut SceneGraph) {
        spin(&mut self.angle, self.spec.speed);
        let node = graph.node_mut(self.mesh);
        node.position = orbit_position(self.angle, self.spec.distance);
        spin(&mut node.rotation.y, SPIN);
    }
}
