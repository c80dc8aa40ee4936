use wasm_bindgen::prelude::*;

// ============================================================================
// SPACE ENGINE - Particle field and solar system backdrops for the site
// ============================================================================
//
// The page's JS owns requestAnimationFrame, the canvas and WebGL. Each
// effect here exposes `tick()`; the host calls it once per frame, replays
// the output buffer, and schedules another frame while `tick()` is true.

pub mod config;
pub mod error;
pub mod frame;
pub mod input;
pub mod logging;
pub mod render;
pub mod scene;
pub mod sim;
pub mod world;

use config::{FieldConfig, SceneConfig};
use error::{EngineError, scene_error_message};
use input::{MoveState, PointerState};
use render::DrawList;
use scene::{DampedOrbitControls, OrbitScene, PoseEncoder};
use sim::ParticleField;

/// Radians of rotation for a drag spanning the full viewport height.
const DRAG_TURN: f32 = std::f32::consts::TAU;

#[wasm_bindgen]
pub fn init_logging(level: &str) {
    logging::init(logging::parse_level(level));
}

// ----------------------------------------------------------------------------
// 2D particle field
// ----------------------------------------------------------------------------

#[wasm_bindgen]
pub struct ParticleCanvas {
    field: ParticleField,
    pointer: PointerState,
    draw: DrawList,
}

#[wasm_bindgen]
impl ParticleCanvas {
    #[wasm_bindgen(constructor)]
    pub fn new(w: u32, h: u32, seed: u32) -> Self {
        Self::build(ParticleField::new(w as f32, h as f32, seed as u64))
    }

    /// Construct with a JSON object overriding any `FieldConfig` keys.
    pub fn with_config(w: u32, h: u32, seed: u32, json: &str) -> Result<ParticleCanvas, JsValue> {
        let field = FieldConfig::from_json(json)
            .and_then(|cfg| ParticleField::with_config(w as f32, h as f32, seed as u64, cfg))
            .inspect_err(|e| log::error!("{e}"))?;
        Ok(Self::build(field))
    }

    pub fn tick(&mut self) -> bool {
        self.field.tick(&self.pointer, &mut self.draw)
    }

    pub fn resize(&mut self, w: u32, h: u32) {
        self.field.resize(w as f32, h as f32);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer.moved(x, y);
    }

    pub fn pointer_leave(&mut self) {
        self.pointer.left();
    }

    pub fn start(&mut self) { self.field.start(); }
    pub fn stop(&mut self) { self.field.stop(); }

    pub fn dispose(&mut self) {
        self.field.dispose();
        self.draw = DrawList::new();
    }

    pub fn particle_count(&self) -> usize { self.field.particles().len() }

    // Accessors for the draw list
    pub fn output_ptr(&self) -> *const f32 { self.draw.ptr() }
    pub fn output_len(&self) -> usize { self.draw.len() }
    pub fn width(&self) -> f32 { self.field.bounds().x }
    pub fn height(&self) -> f32 { self.field.bounds().y }
}

impl ParticleCanvas {
    fn build(mut field: ParticleField) -> Self {
        field.start();
        Self {
            field,
            pointer: PointerState::default(),
            draw: DrawList::new(),
        }
    }
}

// ----------------------------------------------------------------------------
// 3D solar system
// ----------------------------------------------------------------------------

#[wasm_bindgen]
pub struct SolarSystem {
    scene: OrbitScene<PoseEncoder, DampedOrbitControls>,
    moves: MoveState,
    height: f32,
}

#[wasm_bindgen]
impl SolarSystem {
    /// Fails with "Error loading 3D Scene: ..." for the loading screen.
    #[wasm_bindgen(constructor)]
    pub fn new(w: u32, h: u32, seed: u32, gl_available: bool) -> Result<SolarSystem, JsValue> {
        Self::build(w, h, seed, gl_available, SceneConfig::default())
    }

    pub fn with_config(w: u32, h: u32, seed: u32, gl_available: bool, json: &str) -> Result<SolarSystem, JsValue> {
        let cfg = SceneConfig::from_json(json).map_err(scene_error)?;
        Self::build(w, h, seed, gl_available, cfg)
    }

    pub fn tick(&mut self) -> bool {
        self.scene.tick(&self.moves)
    }

    pub fn resize(&mut self, w: u32, h: u32) {
        self.height = h as f32;
        self.scene.resize(w as f32, h as f32);
    }

    /// `KeyboardEvent.code` of a pressed key.
    pub fn key_down(&mut self, code: &str) -> bool {
        self.moves.key_down(code)
    }

    pub fn key_up(&mut self, code: &str) -> bool {
        self.moves.key_up(code)
    }

    /// Pointer drag delta in pixels; a drag the height of the viewport is
    /// one full turn.
    pub fn pointer_drag(&mut self, dx: f32, dy: f32) {
        let h = self.height.max(1.0);
        self.scene.controls_mut().rotate(DRAG_TURN * dx / h, DRAG_TURN * dy / h);
    }

    /// Wheel delta; positive zooms out.
    pub fn zoom(&mut self, delta: f32) {
        self.scene.controls_mut().zoom(delta);
    }

    pub fn start(&mut self) { self.scene.start(); }
    pub fn stop(&mut self) { self.scene.stop(); }
    pub fn dispose(&mut self) { self.scene.dispose(); }

    /// Static scene description the host builds its meshes from.
    pub fn scene_json(&self) -> Result<String, JsValue> {
        Ok(self.scene.scene_json()?)
    }

    pub fn node_count(&self) -> usize { self.scene.graph().len() }

    // Accessors for the pose buffer and nebula sprite
    pub fn output_ptr(&self) -> *const f32 { self.scene.renderer().ptr() }
    pub fn output_len(&self) -> usize { self.scene.renderer().len() }
    pub fn sprite_ptr(&self) -> *const u8 { self.scene.sprite().rgba.as_ptr() }
    pub fn sprite_len(&self) -> usize { self.scene.sprite().rgba.len() }
    pub fn sprite_size(&self) -> u32 { self.scene.sprite().width }
}

impl SolarSystem {
    fn build(w: u32, h: u32, seed: u32, gl_available: bool, cfg: SceneConfig) -> Result<SolarSystem, JsValue> {
        let renderer = PoseEncoder::new(gl_available);
        let mut scene = OrbitScene::initialize(w as f32, h as f32, seed as u64, &cfg, renderer)
            .map_err(scene_error)?;
        scene.start();
        Ok(Self {
            scene,
            moves: MoveState::with_speeds(cfg.walk_speed, cfg.run_speed),
            height: h as f32,
        })
    }
}

fn scene_error(err: EngineError) -> JsValue {
    log::error!("{err}");
    js_sys::Error::new(&scene_error_message(&err)).into()
}
