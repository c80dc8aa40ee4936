// input.rs - Host input state
//
// Written by event handlers, read once per frame by the update step.
// Both sides run on the host's main thread so no synchronization is needed.

use glam::Vec2;

/// Last known pointer position. `None` until the first move event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub position: Option<Vec2>,
}

impl PointerState {
    pub fn moved(&mut self, x: f32, y: f32) {
        self.position = Some(Vec2::new(x, y));
    }

    pub fn left(&mut self) {
        self.position = None;
    }
}

const WALK_SPEED: f32 = 2.0;
const RUN_SPEED: f32 = 5.0;

/// Free-look movement flags for the orbit scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub speed: f32,
    walk: f32,
    run: f32,
}

impl Default for MoveState {
    fn default() -> Self {
        Self::with_speeds(WALK_SPEED, RUN_SPEED)
    }
}

impl MoveState {
    pub fn with_speeds(walk: f32, run: f32) -> Self {
        Self {
            forward: false,
            backward: false,
            left: false,
            right: false,
            speed: walk,
            walk,
            run,
        }
    }

    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Apply a `KeyboardEvent.code`. Returns whether the key was recognized.
    pub fn handle_key(&mut self, code: &str, pressed: bool) -> bool {
        match code {
            "KeyW" => self.forward = pressed,
            "KeyS" => self.backward = pressed,
            "KeyA" => self.left = pressed,
            "KeyD" => self.right = pressed,
            "ShiftLeft" => self.speed = if pressed { self.run } else { self.walk },
            _ => return false,
        }
        true
    }

    pub fn key_down(&mut self, code: &str) -> bool {
        self.handle_key(code, true)
    }

    pub fn key_up(&mut self, code: &str) -> bool {
        self.handle_key(code, false)
    }
}
