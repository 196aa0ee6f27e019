//! Parameters for creating native windows.

use crate::display::MonitorId;
use crate::gl::{BufferFormat, GLVersion};
use crate::Extent2;

/// How the cursor behaves over a window.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum CursorMode {
    /// Visible and free to leave the window.
    Normal,
    /// Invisible while over the window, but free to leave it.
    Hidden,
    /// Invisible and locked to the window; the mouse is "captured".
    Disabled,
}

impl Default for CursorMode {
    fn default() -> Self {
        CursorMode::Normal
    }
}

/// The absolute minimum information a window needs at creation time.
///
/// Anything that can be changed on a live window (position, visibility,
/// swap interval) is not part of this struct.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSettings<'a> {
    /// Size, in screen coordinates. For full-screen windows, this selects the
    /// closest video mode of `fullscreen_monitor`.
    pub size: Extent2<u32>,
    /// Initial title.
    pub title: &'a str,
    /// `Some` to go full-screen on that monitor, `None` for a regular window.
    pub fullscreen_monitor: Option<MonitorId>,
    /// The default framebuffer's format. It can't be changed afterwards.
    pub buffer_format: BufferFormat,
    /// If `false`, the window won't be resizable, not even manually by
    /// the user.
    pub resizable: bool,
    /// If `false`, the window has no title bar nor borders.
    pub decorated: bool,
    /// Whether the window is mapped right away.
    pub visible: bool,
    /// The OpenGL context version to request, or `None` to let the
    /// native library pick.
    pub gl_version: Option<GLVersion>,
}

impl<'a> WindowSettings<'a> {
    /// Is this a full-screen window?
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen_monitor.is_some()
    }
}
