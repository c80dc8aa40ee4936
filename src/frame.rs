// frame.rs - Render loop with explicit lifecycle
//
// The host owns the animation-frame clock and calls `tick()` each frame.
// The loop decides whether that frame runs and tells the host whether to
// schedule another one. Tests drive a fixed number of frames directly.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Created,
    Running,
    Stopped,
    Disposed,
}

/// Shared stop flag. Clones observe and trigger the same cancellation.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }

    fn reset(&self) {
        self.0.set(false);
    }
}

#[derive(Debug)]
pub struct RenderLoop {
    state: Lifecycle,
    token: CancelToken,
    frames: u64,
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderLoop {
    pub fn new() -> Self {
        Self {
            state: Lifecycle::Created,
            token: CancelToken::default(),
            frames: 0,
        }
    }

    pub fn state(&self) -> Lifecycle {
        // A cancelled token stops the loop even if nobody called stop().
        if self.state == Lifecycle::Running && self.token.is_cancelled() {
            Lifecycle::Stopped
        } else {
            self.state
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == Lifecycle::Running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn start(&mut self) {
        match self.state {
            Lifecycle::Disposed => log::warn!("start() on a disposed render loop ignored"),
            _ => {
                self.token.reset();
                self.state = Lifecycle::Running;
            }
        }
    }

    pub fn stop(&mut self) {
        if self.state == Lifecycle::Running {
            self.token.cancel();
            self.state = Lifecycle::Stopped;
        }
    }

    pub fn dispose(&mut self) {
        self.token.cancel();
        self.state = Lifecycle::Disposed;
    }

    /// Run one frame if the loop is running. Returns whether the host
    /// should schedule the next frame.
    pub fn frame<F: FnOnce()>(&mut self, f: F) -> bool {
        if !self.is_running() {
            self.sync();
            return false;
        }
        f();
        self.frames += 1;
        self.sync();
        self.is_running()
    }

    /// Drive up to `n` frames back to back. Returns how many ran.
    pub fn run_frames<F: FnMut()>(&mut self, n: usize, mut f: F) -> usize {
        let mut ran = 0;
        for _ in 0..n {
            if !self.is_running() {
                break;
            }
            f();
            self.frames += 1;
            ran += 1;
        }
        self.sync();
        ran
    }

    fn sync(&mut self) {
        if self.state == Lifecycle::Running && self.token.is_cancelled() {
            self.state = Lifecycle::Stopped;
        }
    }
}
