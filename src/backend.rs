//! The native windowing/OpenGL library surface the adapter is built on.
//!
//! The adapter never talks to a windowing system directly. Everything goes
//! through [`Backend`] and [`BackendWindow`], which map almost 1:1 to the
//! native calls; `GlfwBackend` is the implementation shipped with this crate.

use std::time::Duration;

use crate::display::{DisplayMode, MonitorId};
use crate::error::Result;
use crate::event::WindowEvent;
use crate::gl::GLFunctions;
use crate::window::{CursorMode, WindowSettings};
use crate::{Extent2, Vec2};

#[cfg(feature = "glfw")]
pub mod glfw;
#[cfg(feature = "glfw")]
pub use self::glfw::{GlfwBackend, GlfwWindow, GlowFunctions};

#[cfg(test)]
pub(crate) mod mock;

/// Library-wide native state: monitors, window creation, swap interval.
pub trait Backend {
    /// The native window, along with its OpenGL context.
    type Window: BackendWindow<GL = Self::GL>;
    /// GL entry points, loaded from a current context.
    type GL: GLFunctions;

    /// Number of connected monitors. The primary monitor comes first.
    fn monitor_count(&self) -> usize;
    /// The monitor's current video mode.
    fn video_mode(&self, monitor: MonitorId) -> Option<DisplayMode>;
    /// All video modes the monitor supports.
    fn video_modes(&self, monitor: MonitorId) -> Vec<DisplayMode>;
    /// The monitor's physical size, in millimetres.
    fn physical_size(&self, monitor: MonitorId) -> Option<Extent2<u32>>;

    /// Creates a hidden-or-visible window as described by `settings`.
    ///
    /// When `share` is given, the new context shares GL objects with it.
    fn create_window(&mut self, settings: &WindowSettings, share: Option<&Self::Window>) -> Result<Self::Window>;
    /// Destroys a window and its context.
    fn destroy_window(&mut self, window: Self::Window);

    /// Sets the swap interval of the current context.
    fn set_swap_interval(&mut self, interval: u32);
    /// Is the extension supported by the current context?
    fn extension_supported(&self, name: &str) -> bool;
    /// Processes pending native events; windows queue theirs for `drain_events()`.
    fn poll_events(&mut self);
    /// The native high-resolution clock.
    fn time(&self) -> Duration;
}

/// A native window and its OpenGL context.
pub trait BackendWindow {
    /// GL entry points, loaded from this window's context.
    type GL: GLFunctions;

    /// Makes the window's context current on the calling thread.
    fn make_current(&mut self);
    /// Loads GL entry points. The context must be current.
    fn load_gl(&mut self) -> Self::GL;
    /// Presents the back buffer.
    fn swap_buffers(&mut self);

    #[allow(missing_docs)]
    fn cursor_mode(&self) -> CursorMode;
    #[allow(missing_docs)]
    fn set_cursor_mode(&mut self, mode: CursorMode);
    #[allow(missing_docs)]
    fn set_position(&mut self, position: Vec2<i32>);
    #[allow(missing_docs)]
    fn set_size(&mut self, size: Extent2<u32>);
    /// Sets the title, or fails with `ErrorKind::InvalidArgument` if the
    /// native library can't represent it; the old title is then kept.
    fn set_title(&mut self, title: &str) -> Result<()>;
    #[allow(missing_docs)]
    fn show(&mut self);
    #[allow(missing_docs)]
    fn hide(&mut self);
    /// Minimizes the window.
    fn iconify(&mut self);
    /// The reciprocal of `iconify()`.
    fn restore(&mut self);
    #[allow(missing_docs)]
    fn should_close(&self) -> bool;
    /// Takes the events queued since the last call.
    fn drain_events(&mut self) -> Vec<WindowEvent>;
}
