// scene/ - Navigable solar-system diorama
//
// Owns the scene graph, camera and orbit controls. Construction either
// fully succeeds or returns an error; there is no partial scene.

pub mod camera;
pub mod graph;
pub mod planets;
pub mod renderer;
pub mod sky;

pub use camera::{Camera, DampedOrbitControls, OrbitControls};
pub use graph::{Geometry, Material, Node, NodeId, NodeKind, SceneGraph, Side};
pub use planets::{PLANETS, Planet, PlanetSpec};
pub use renderer::{PoseEncoder, SceneRenderer};
pub use sky::{SPRITE_SIZE, Texture};

use glam::Vec3;

use crate::config::SceneConfig;
use crate::error::{EngineError, Result};
use crate::frame::{Lifecycle, RenderLoop};
use crate::input::MoveState;
use crate::world::{ground_axes, spin};

const BACKGROUND: u32 = 0x050510;
const FOG_DENSITY: f32 = 0.0005;
const CAMERA_START: Vec3 = Vec3::new(0.0, 100.0, 300.0);

// Per-frame spin about Y, radians
const SUN_SPIN: f32 = 0.002;
const STAR_SPIN: f32 = -0.0002;
const NEBULA_SPIN: f32 = -0.0001;

pub struct OrbitScene<R: SceneRenderer, C: OrbitControls = DampedOrbitControls> {
    graph: SceneGraph,
    camera: Camera,
    controls: C,
    renderer: R,
    sun: NodeId,
    stars: NodeId,
    nebula: NodeId,
    planets: Vec<Planet>,
    sprite: Texture,
    frames: RenderLoop,
}

impl<R: SceneRenderer> OrbitScene<R, DampedOrbitControls> {
    /// Build the scene with the stock damped orbit controls.
    pub fn initialize(width: f32, height: f32, seed: u64, cfg: &SceneConfig, renderer: R) -> Result<Self> {
        let controls = DampedOrbitControls::from_config(cfg);
        Self::with_controls(width, height, seed, cfg, renderer, controls)
    }
}

impl<R: SceneRenderer, C: OrbitControls> OrbitScene<R, C> {
    pub fn with_controls(
        width: f32,
        height: f32,
        seed: u64,
        cfg: &SceneConfig,
        mut renderer: R,
        mut controls: C,
    ) -> Result<Self> {
        cfg.validate()?;
        if !valid_viewport(width, height) {
            return Err(EngineError::InvalidViewport { width, height });
        }
        renderer.attach(width, height)?;

        let mut camera = Camera::new(CAMERA_START, width / height);
        controls.update(&mut camera);

        let mut rng = fastrand::Rng::with_seed(seed);
        let mut graph = SceneGraph::new(BACKGROUND, FOG_DENSITY);

        graph.add(None, "ambient", NodeKind::AmbientLight { color: 0x444444 });
        graph.add(None, "sunlight", NodeKind::PointLight { color: 0xffffff, intensity: 2.0, distance: 800.0 });

        let sun = graph.add(None, "sun", NodeKind::Mesh {
            geometry: Geometry::Sphere { radius: 20.0, segments: 64 },
            material: Material::basic(0xffdd00),
        });
        graph.add(Some(sun), "sun-glow", NodeKind::Mesh {
            geometry: Geometry::Sphere { radius: 24.0, segments: 64 },
            material: Material::translucent(0xffaa00, 0.3, Side::Back),
        });

        let planets = PLANETS
            .iter()
            .map(|spec| Planet::build(&mut graph, *spec, &mut rng))
            .collect();

        let stars = graph.add(None, "stars", sky::starfield(&mut rng, cfg.star_count));
        let nebula = graph.add(None, "nebula", sky::nebula(&mut rng, cfg.nebula_count));

        log::info!("orbit scene ready: {} nodes", graph.len());

        Ok(Self {
            graph,
            camera,
            controls,
            renderer,
            sun,
            stars,
            nebula,
            planets,
            sprite: sky::sprite_texture(SPRITE_SIZE),
            frames: RenderLoop::new(),
        })
    }

    /// Translate camera and orbit target together along the ground plane.
    pub fn update_movement(&mut self, moves: &MoveState) {
        if !moves.any() {
            return;
        }
        let (forward, right) = ground_axes(self.camera.world_direction(), self.camera.up);

        let mut step = Vec3::ZERO;
        if moves.forward {
            step += forward * moves.speed;
        }
        if moves.backward {
            step -= forward * moves.speed;
        }
        if moves.right {
            step += right * moves.speed;
        }
        if moves.left {
            step -= right * moves.speed;
        }

        self.camera.position += step;
        *self.controls.target_mut() += step;
    }

    pub fn render_frame(&mut self, moves: &MoveState) {
        if self.frames.state() == Lifecycle::Disposed {
            return;
        }
        self.update_movement(moves);

        spin(&mut self.graph.node_mut(self.sun).rotation.y, SUN_SPIN);
        spin(&mut self.graph.node_mut(self.stars).rotation.y, STAR_SPIN);
        spin(&mut self.graph.node_mut(self.nebula).rotation.y, NEBULA_SPIN);

        for planet in &mut self.planets {
            planet.advance(&mut self.graph);
        }

        self.controls.update(&mut self.camera);
        self.renderer.render(&self.graph, &self.camera);
    }

    /// Render one frame if running. Returns whether another frame is wanted.
    pub fn tick(&mut self, moves: &MoveState) -> bool {
        let mut frames = std::mem::take(&mut self.frames);
        let more = frames.frame(|| self.render_frame(moves));
        self.frames = frames;
        more
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        if !valid_viewport(width, height) {
            log::warn!("ignoring resize to {width}x{height}");
            return;
        }
        self.camera.aspect = width / height;
        self.renderer.set_size(width, height);
        log::debug!("orbit scene resized to {width}x{height}");
    }

    pub fn start(&mut self) {
        self.frames.start();
        log::info!("orbit scene started");
    }

    pub fn stop(&mut self) {
        self.frames.stop();
        log::info!("orbit scene stopped after {} frames", self.frames.frames());
    }

    /// Stop for good and release the graph, planets and sprite. Later
    /// frames are ignored and `scene_json` fails.
    pub fn dispose(&mut self) {
        self.frames.dispose();
        self.graph = SceneGraph::new(BACKGROUND, FOG_DENSITY);
        self.planets = Vec::new();
        self.sprite = Texture::empty();
        log::info!("orbit scene disposed");
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.frames.state()
    }

    pub fn render_loop(&self) -> &RenderLoop {
        &self.frames
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut SceneGraph {
        &mut self.graph
    }

    /// Static scene description the host builds its meshes from.
    pub fn scene_json(&self) -> Result<String> {
        if self.lifecycle() == Lifecycle::Disposed {
            return Err(EngineError::Disposed);
        }
        Ok(self.graph.to_json()?)
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn controls(&self) -> &C {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut C {
        &mut self.controls
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn planets_mut(&mut self) -> &mut [Planet] {
        &mut self.planets
    }

    pub fn sun(&self) -> NodeId {
        self.sun
    }

    pub fn stars(&self) -> NodeId {
        self.stars
    }

    pub fn nebula(&self) -> NodeId {
        self.nebula
    }

    pub fn sprite(&self) -> &Texture {
        &self.sprite
    }
}

fn valid_viewport(width: f32, height: f32) -> bool {
    width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
}
