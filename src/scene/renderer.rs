// renderer.rs - 3D render target seam
//
// Pose buffer layout written by `PoseEncoder` each frame:
//   per node, in graph order:  px, py, pz, rx, ry, rz
//   then the camera:           px, py, pz, lx, ly, lz, aspect
// where l is the point one unit ahead of the camera.

use super::camera::Camera;
use super::graph::SceneGraph;
use crate::error::{EngineError, Result};

pub const NODE_STRIDE: usize = 6;
pub const CAMERA_STRIDE: usize = 7;

pub trait SceneRenderer {
    /// Claim the rendering surface. Fails when the host cannot render 3D.
    fn attach(&mut self, width: f32, height: f32) -> Result<()>;
    fn set_size(&mut self, width: f32, height: f32);
    fn render(&mut self, graph: &SceneGraph, camera: &Camera);
}

/// Writes node and camera poses for a WebGL host to apply.
#[derive(Debug)]
pub struct PoseEncoder {
    gl_available: bool,
    size: (f32, f32),
    out: Vec<f32>,
}

impl PoseEncoder {
    pub fn new(gl_available: bool) -> Self {
        Self { gl_available, size: (0.0, 0.0), out: Vec::new() }
    }

    pub fn ptr(&self) -> *const f32 {
        self.out.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn poses(&self) -> &[f32] {
        &self.out
    }

    pub fn size(&self) -> (f32, f32) {
        self.size
    }
}

impl SceneRenderer for PoseEncoder {
    fn attach(&mut self, width: f32, height: f32) -> Result<()> {
        if !self.gl_available {
            return Err(EngineError::Unsupported("WebGL is not available".into()));
        }
        self.size = (width, height);
        Ok(())
    }

    fn set_size(&mut self, width: f32, height: f32) {
        self.size = (width, height);
    }

    fn render(&mut self, graph: &SceneGraph, camera: &Camera) {
        self.out.clear();
        self.out.reserve(graph.len() * NODE_STRIDE + CAMERA_STRIDE);
        for node in graph.nodes() {
            self.out.extend_from_slice(&node.position.to_array());
            self.out.extend_from_slice(&node.rotation.to_array());
        }
        let look = camera.position + camera.world_direction();
        self.out.extend_from_slice(&camera.position.to_array());
        self.out.extend_from_slice(&look.to_array());
        self.out.push(camera.aspect);
    }
}
