// render.rs - 2D draw commands for the canvas host
//
// Output encoding (fixed stride of 10 f32 per command):
//   [0, w, h, 0, 0, 0, 0, 0, 0, 0]              clear
//   [1, x, y, radius, r, g, b, blur, 0, 0]      filled circle with glow
//   [2, x1, y1, x2, y2, r, g, b, alpha, width]  line
//
// Color channels are 0-255. Alpha is written as computed; the canvas
// clamps it, so negative values simply draw nothing.

pub const STRIDE: usize = 10;

pub const OP_CLEAR: f32 = 0.0;
pub const OP_CIRCLE: f32 = 1.0;
pub const OP_LINE: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::hex(0xffffff);

    pub const fn hex(v: u32) -> Self {
        Self {
            r: ((v >> 16) & 0xff) as u8,
            g: ((v >> 8) & 0xff) as u8,
            b: (v & 0xff) as u8,
        }
    }

    pub fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Channels as 0.0-1.0 floats (vertex color order).
    pub fn unit(self) -> [f32; 3] {
        [self.r as f32 / 255.0, self.g as f32 / 255.0, self.b as f32 / 255.0]
    }
}

/// A 2D drawing target.
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb, glow: f32);
    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgb, alpha: f32, width: f32);
}

/// Command buffer the host replays onto a `CanvasRenderingContext2D`.
#[derive(Debug, Default)]
pub struct DrawList {
    out: Vec<f32>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.out.clear();
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

    pub fn commands(&self) -> usize {
        self.out.len() / STRIDE
    }

    pub fn command(&self, i: usize) -> &[f32] {
        &self.out[i * STRIDE..(i + 1) * STRIDE]
    }

    #[inline]
    fn push(&mut self, cmd: [f32; STRIDE]) {
        self.out.extend_from_slice(&cmd);
    }
}

impl Surface for DrawList {
    /// Clearing also drops the previous frame's commands.
    fn clear(&mut self, width: f32, height: f32) {
        self.out.clear();
        self.push([OP_CLEAR, width, height, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb, glow: f32) {
        self.push([
            OP_CIRCLE,
            x,
            y,
            radius,
            color.r as f32,
            color.g as f32,
            color.b as f32,
            glow,
            0.0,
            0.0,
        ]);
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgb, alpha: f32, width: f32) {
        self.push([
            OP_LINE,
            from.0,
            from.1,
            to.0,
            to.1,
            color.r as f32,
            color.g as f32,
            color.b as f32,
            alpha,
            width,
        ]);
    }
}
