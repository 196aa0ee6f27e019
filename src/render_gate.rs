//! Flags shared between the render thread and whoever else may poke at them.

use std::sync::atomic::{AtomicBool, Ordering};

/// Decides, once per loop iteration, whether a frame should be drawn.
#[derive(Debug)]
pub struct RenderGate {
    continuous: AtomicBool,
    requested: AtomicBool,
}

impl Default for RenderGate {
    fn default() -> Self {
        Self {
            continuous: AtomicBool::new(true),
            requested: AtomicBool::new(false),
        }
    }
}

impl RenderGate {
    /// Continuous rendering, no pending request.
    pub fn new() -> Self {
        Self::default()
    }
    /// Enables or disables redrawing on every iteration.
    pub fn set_continuous_rendering(&self, continuous: bool) {
        self.continuous.store(continuous, Ordering::SeqCst);
    }
    #[allow(missing_docs)]
    pub fn is_continuous_rendering(&self) -> bool {
        self.continuous.load(Ordering::SeqCst)
    }
    /// Asks for one frame to be drawn on the next iteration.
    pub fn request_rendering(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }
    /// Should a frame be drawn now?
    ///
    /// Reading this consumes any pending request, whatever the answer.
    pub fn should_render(&self) -> bool {
        let requested = self.requested.swap(false, Ordering::SeqCst);
        requested || self.is_continuous_rendering()
    }
}

/// Window status, as reported by the native event thread.
#[derive(Debug, Default)]
pub struct StatusFlags {
    foreground: AtomicBool,
    minimized: AtomicBool,
}

impl StatusFlags {
    /// Not in the foreground, not minimized.
    pub fn new() -> Self {
        Self::default()
    }
    #[allow(missing_docs)]
    pub fn set_foreground(&self, foreground: bool) {
        self.foreground.store(foreground, Ordering::SeqCst);
    }
    #[allow(missing_docs)]
    pub fn is_foreground(&self) -> bool {
        self.foreground.load(Ordering::SeqCst)
    }
    #[allow(missing_docs)]
    pub fn set_minimized(&self, minimized: bool) {
        self.minimized.store(minimized, Ordering::SeqCst);
    }
    #[allow(missing_docs)]
    pub fn is_minimized(&self) -> bool {
        self.minimized.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn request_is_consumed_once() {
        let gate = RenderGate::new();
        gate.set_continuous_rendering(false);
        assert!(!gate.should_render());
        gate.request_rendering();
        assert!(gate.should_render());
        assert!(!gate.should_render());
        assert!(!gate.should_render());
    }

    #[test]
    fn continuous_mode_always_renders_and_still_consumes() {
        let gate = RenderGate::new();
        assert!(gate.is_continuous_rendering());
        gate.request_rendering();
        assert!(gate.should_render());
        gate.set_continuous_rendering(false);
        // The request was consumed by the read above.
        assert!(!gate.should_render());
    }

    #[test]
    fn status_flags_are_visible_across_threads() {
        let flags = Arc::new(StatusFlags::new());
        assert!(!flags.is_foreground());
        let remote = flags.clone();
        thread::spawn(move || {
            remote.set_foreground(true);
            remote.set_minimized(true);
        }).join().unwrap();
        assert!(flags.is_foreground());
        assert!(flags.is_minimized());
    }

    #[test]
    fn requests_from_other_threads() {
        let gate = Arc::new(RenderGate::new());
        gate.set_continuous_rendering(false);
        let remote = gate.clone();
        thread::spawn(move || remote.request_rendering()).join().unwrap();
        assert!(gate.should_render());
        assert!(!gate.should_render());
    }
}
