//! Everything the adapter needs to know at construction time.

use crate::display::MonitorId;
use crate::gl::{BufferFormat, GLVersion};
use crate::{Extent2, Rgba, Vec2};

/// Construction-time settings of the graphics adapter.
///
/// The `Default` implementation gives a visible, resizable, decorated
/// 640x480 window centered on the primary monitor, with vsync on.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphicsConfig {
    /// Initial window size, in screen coordinates.
    pub size: Extent2<u32>,
    /// Requested default framebuffer format.
    pub buffer_format: BufferFormat,
    /// Start in full-screen mode?
    pub fullscreen: bool,
    /// Monitor to go full-screen on. `None`, or an index past the connected
    /// monitors, means "whichever monitor the window is on".
    pub fullscreen_monitor: Option<MonitorId>,
    /// Wait for vertical blank before swapping buffers.
    pub vsync: bool,
    #[allow(missing_docs)]
    pub resizable: bool,
    /// No title bar, no borders.
    pub undecorated: bool,
    /// Initial window position. `-1` on either axis centers the window on
    /// the desktop.
    pub position: Vec2<i32>,
    #[allow(missing_docs)]
    pub title: String,
    /// Color the window is cleared to when it is first shown.
    pub initial_background_color: Rgba<f32>,
    /// Request an OpenGL 3.2 core context instead of the native default.
    pub use_gl30: bool,
    /// Start with the window hidden.
    pub hidden: bool,
}

impl Default for GraphicsConfig {
    fn default() -> Self {
        Self {
            size: Extent2::new(640, 480),
            buffer_format: Default::default(),
            fullscreen: false,
            fullscreen_monitor: None,
            vsync: true,
            resizable: true,
            undecorated: false,
            position: Vec2::new(-1, -1),
            title: "glfw-graphics".to_owned(),
            initial_background_color: Rgba::new(0., 0., 0., 1.),
            use_gl30: false,
            hidden: false,
        }
    }
}

impl<T: Into<Extent2<u32>>> From<T> for GraphicsConfig {
    fn from(size: T) -> Self {
        Self {
            size: size.into(),
            .. Default::default()
        }
    }
}

impl GraphicsConfig {
    /// The context version requested from the native library, if any.
    pub fn gl_version(&self) -> Option<GLVersion> {
        if self.use_gl30 {
            Some(GLVersion::new_desktop(3, 2))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GraphicsConfig::from(Extent2::new(800, 600));
        assert_eq!(config.size, Extent2::new(800, 600));
        assert_eq!(config.position, Vec2::new(-1, -1));
        assert!(config.vsync);
        assert_eq!(config.gl_version(), None);
        assert_eq!(config.buffer_format, BufferFormat::default());
    }

    #[test]
    fn gl30_requests_core_profile_version() {
        let config = GraphicsConfig { use_gl30: true, .. Default::default() };
        assert_eq!(config.gl_version(), Some(GLVersion::new_desktop(3, 2)));
    }
}
