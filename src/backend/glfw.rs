//! GLFW implementation of the native backend, with GL entry points loaded by
//! `glow`.
//!
//! GLFW must be driven from the main thread; neither `GlfwBackend` nor
//! `GlfwWindow` may leave it.

use std::sync::Arc;
use std::time::Duration;

use ::glfw::{self as native, Context as _};
use glow::HasContext as _;

use super::{Backend, BackendWindow};
use crate::display::{DisplayMode, MonitorId};
use crate::error::{self, Error, Result};
use crate::event::WindowEvent;
use crate::gl::GLFunctions;
use crate::window::{CursorMode, WindowSettings};
use crate::{Extent2, Rgba, Vec2};

/// An initialized GLFW library.
pub struct GlfwBackend {
    glfw: native::Glfw,
}

/// A GLFW window, its OpenGL context and its event queue.
pub struct GlfwWindow {
    window: native::PWindow,
    events: native::GlfwReceiver<(f64, native::WindowEvent)>,
}

/// GL entry points loaded through `glow`.
///
/// Cloning is cheap; all clones share one function table.
#[derive(Clone)]
pub struct GlowFunctions(Arc<glow::Context>);

impl GlfwBackend {
    /// Initializes GLFW. Errors reported later by GLFW are logged.
    pub fn init() -> Result<Self> {
        let glfw = native::init(|err: native::Error, description: String| {
            error!("GLFW error {:?}: {}", err, description);
        }).map_err(|e| Error::failed(format!("Unable to initialize GLFW: {:?}", e)))?;
        trace!("Initialized GLFW {}", native::get_version_string());
        Ok(Self { glfw })
    }

    /// The underlying GLFW handle.
    pub fn glfw(&self) -> &native::Glfw {
        &self.glfw
    }

    fn with_monitor<T, F>(&self, monitor: MonitorId, f: F) -> Option<T>
        where F: FnOnce(&native::Monitor) -> T
    {
        let mut glfw = self.glfw.clone();
        glfw.with_connected_monitors(|_, monitors| monitors.get(monitor.0).map(|m| f(m)))
    }

    fn apply_hints(&mut self, settings: &WindowSettings) {
        use ::glfw::WindowHint;

        let f = settings.buffer_format;
        let glfw = &mut self.glfw;
        glfw.default_window_hints();
        glfw.window_hint(WindowHint::Visible(settings.visible));
        glfw.window_hint(WindowHint::Resizable(settings.resizable));
        glfw.window_hint(WindowHint::Decorated(settings.decorated));
        glfw.window_hint(WindowHint::RedBits(Some(f.r as u32)));
        glfw.window_hint(WindowHint::GreenBits(Some(f.g as u32)));
        glfw.window_hint(WindowHint::BlueBits(Some(f.b as u32)));
        glfw.window_hint(WindowHint::AlphaBits(Some(f.a as u32)));
        glfw.window_hint(WindowHint::DepthBits(Some(f.depth as u32)));
        glfw.window_hint(WindowHint::StencilBits(Some(f.stencil as u32)));
        glfw.window_hint(WindowHint::Samples(Some(f.samples as u32)));

        if let Some(version) = settings.gl_version {
            let api = if version.is_es() {
                native::ClientApiHint::OpenGlEs
            } else {
                native::ClientApiHint::OpenGl
            };
            glfw.window_hint(WindowHint::ClientApi(api));
            glfw.window_hint(WindowHint::ContextVersion(version.major as u32, version.minor as u32));
            if version.is_desktop() && version.at_least(3, 2) {
                glfw.window_hint(WindowHint::OpenGlProfile(native::OpenGlProfileHint::Core));
                glfw.window_hint(WindowHint::OpenGlForwardCompat(true));
            }
        }
    }
}

fn display_mode(mode: native::VidMode) -> DisplayMode {
    DisplayMode::from_channels(mode.width, mode.height, mode.refresh_rate, mode.red_bits, mode.green_bits, mode.blue_bits)
}

impl Backend for GlfwBackend {
    type Window = GlfwWindow;
    type GL = GlowFunctions;

    fn monitor_count(&self) -> usize {
        let mut glfw = self.glfw.clone();
        glfw.with_connected_monitors(|_, monitors| monitors.len())
    }
    fn video_mode(&self, monitor: MonitorId) -> Option<DisplayMode> {
        self.with_monitor(monitor, |m| m.get_video_mode()).and_then(|mode| mode.map(display_mode))
    }
    fn video_modes(&self, monitor: MonitorId) -> Vec<DisplayMode> {
        self.with_monitor(monitor, |m| m.get_video_modes().into_iter().map(display_mode).collect())
            .unwrap_or_default()
    }
    fn physical_size(&self, monitor: MonitorId) -> Option<Extent2<u32>> {
        self.with_monitor(monitor, |m| {
            let (w, h) = m.get_physical_size();
            Extent2::new(w.max(0) as u32, h.max(0) as u32)
        })
    }

    fn create_window(&mut self, settings: &WindowSettings, share: Option<&GlfwWindow>) -> Result<GlfwWindow> {
        if settings.title.contains('\0') {
            return error::invalid_arg("Window title contains a NUL byte");
        }
        self.apply_hints(settings);

        let width = settings.size.w.max(1);
        let height = settings.size.h.max(1);
        let title = settings.title;
        let created = self.glfw.with_connected_monitors(|glfw, monitors| {
            let mode = match settings.fullscreen_monitor {
                None => native::WindowMode::Windowed,
                Some(id) => match monitors.get(id.0) {
                    Some(monitor) => native::WindowMode::FullScreen(monitor),
                    None => return error::invalid_arg(format!("No monitor at index {}", id.0)),
                },
            };
            Ok(match share {
                Some(share) => share.window.create_shared(width, height, title, mode),
                None => glfw.create_window(width, height, title, mode),
            })
        })?;

        let (mut window, events) = match created {
            Some(created) => created,
            None => return error::failed(format!(
                "glfwCreateWindow() failed for {}x{}, fullscreen: {}", width, height, settings.is_fullscreen()
            )),
        };
        window.set_size_polling(true);
        window.set_pos_polling(true);
        window.set_focus_polling(true);
        window.set_iconify_polling(true);
        window.set_close_polling(true);
        Ok(GlfwWindow { window, events })
    }
    fn destroy_window(&mut self, window: GlfwWindow) {
        drop(window);
    }

    fn set_swap_interval(&mut self, interval: u32) {
        let interval = match interval {
            0 => native::SwapInterval::None,
            n => native::SwapInterval::Sync(n),
        };
        self.glfw.set_swap_interval(interval);
    }
    fn extension_supported(&self, name: &str) -> bool {
        self.glfw.extension_supported(name)
    }
    fn poll_events(&mut self) {
        self.glfw.poll_events();
    }
    fn time(&self) -> Duration {
        Duration::from_secs_f64(self.glfw.get_time().max(0.))
    }
}

impl GlfwWindow {
    /// The underlying GLFW window.
    ///
    /// Don't hold on to it: the adapter replaces the window whenever
    /// full-screen state or display mode changes.
    pub fn native(&self) -> &native::PWindow {
        &self.window
    }
}

impl BackendWindow for GlfwWindow {
    type GL = GlowFunctions;

    fn make_current(&mut self) {
        self.window.make_current();
    }
    fn load_gl(&mut self) -> GlowFunctions {
        let window = &mut self.window;
        let gl = unsafe {
            glow::Context::from_loader_function(|name| window.get_proc_address(name) as *const _)
        };
        GlowFunctions(Arc::new(gl))
    }
    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn cursor_mode(&self) -> CursorMode {
        match self.window.get_cursor_mode() {
            native::CursorMode::Hidden => CursorMode::Hidden,
            native::CursorMode::Disabled => CursorMode::Disabled,
            _ => CursorMode::Normal,
        }
    }
    fn set_cursor_mode(&mut self, mode: CursorMode) {
        let mode = match mode {
            CursorMode::Normal => native::CursorMode::Normal,
            CursorMode::Hidden => native::CursorMode::Hidden,
            CursorMode::Disabled => native::CursorMode::Disabled,
        };
        self.window.set_cursor_mode(mode);
    }
    fn set_position(&mut self, position: Vec2<i32>) {
        self.window.set_pos(position.x, position.y);
    }
    fn set_size(&mut self, size: Extent2<u32>) {
        let clamp = |v: u32| v.min(i32::max_value() as u32) as i32;
        self.window.set_size(clamp(size.w), clamp(size.h));
    }
    fn set_title(&mut self, title: &str) -> Result<()> {
        if title.contains('\0') {
            return error::invalid_arg("Window title contains a NUL byte");
        }
        self.window.set_title(title);
        Ok(())
    }
    fn show(&mut self) {
        self.window.show();
    }
    fn hide(&mut self) {
        self.window.hide();
    }
    fn iconify(&mut self) {
        self.window.iconify();
    }
    fn restore(&mut self) {
        self.window.restore();
    }
    fn should_close(&self) -> bool {
        self.window.should_close()
    }
    fn drain_events(&mut self) -> Vec<WindowEvent> {
        native::flush_messages(&self.events).filter_map(|(_, event)| match event {
            native::WindowEvent::Size(w, h) => Some(WindowEvent::Resized(Extent2::new(w, h))),
            native::WindowEvent::Pos(x, y) => Some(WindowEvent::Moved(Vec2::new(x, y))),
            native::WindowEvent::Focus(focused) => Some(WindowEvent::Focused(focused)),
            native::WindowEvent::Iconify(iconified) => Some(WindowEvent::Iconified(iconified)),
            native::WindowEvent::Close => Some(WindowEvent::CloseRequested),
            _ => None,
        }).collect()
    }
}

impl GlowFunctions {
    /// The full GL API.
    pub fn glow(&self) -> &glow::Context {
        &self.0
    }
    /// A shared handle to the full GL API.
    pub fn shared(&self) -> Arc<glow::Context> {
        self.0.clone()
    }
}

impl GLFunctions for GlowFunctions {
    fn version_string(&self) -> String {
        unsafe { self.0.get_parameter_string(glow::VERSION) }
    }
    fn viewport(&self, x: i32, y: i32, width: u32, height: u32) {
        unsafe { self.0.viewport(x, y, width as i32, height as i32) }
    }
    fn clear(&self, color: Rgba<f32>) {
        unsafe {
            self.0.clear_color(color.r, color.g, color.b, color.a);
            self.0.clear(glow::COLOR_BUFFER_BIT);
        }
    }
}
