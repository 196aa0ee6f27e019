//! The `Graphics` capability and its implementation over a native backend.
//!
//! The host owns one [`NativeGraphics`], drives it from the thread that owns
//! the native window, and calls [`frame_start`], [`size_changed`] and
//! [`position_changed`] as its loop runs (or lets [`poll_events`] and
//! [`tick`] do the routing).
//!
//! # Examples
//!
//! ```rust,no_run
//! # #[cfg(feature = "glfw")]
//! # fn foo() -> glfw_graphics::Result<()> {
//! use glfw_graphics::{Extent2, GlfwGraphics, GraphicsConfig, Graphics};
//!
//! let config = GraphicsConfig::from(Extent2::new(800, 600));
//! let mut graphics = GlfwGraphics::open(&config)?;
//!
//! while !graphics.should_close() {
//!     graphics.poll_events();
//!     graphics.tick();
//!     if graphics.should_render() {
//!         // Render with graphics.gl().glow() ...
//!         graphics.present();
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`frame_start`]: struct.NativeGraphics.html#method.frame_start
//! [`size_changed`]: struct.NativeGraphics.html#method.size_changed
//! [`position_changed`]: struct.NativeGraphics.html#method.position_changed
//! [`poll_events`]: struct.NativeGraphics.html#method.poll_events
//! [`tick`]: struct.NativeGraphics.html#method.tick

use std::fmt;
use std::mem;
use std::sync::Arc;

use crate::backend::{Backend, BackendWindow};
use crate::config::GraphicsConfig;
use crate::display::{DisplayMode, MonitorId, PhysicalMetrics};
use crate::error::{Error, Result};
use crate::event::WindowEvent;
use crate::frame_clock::FrameClock;
use crate::gl::{self, BufferFormat, GLFunctions, GLVersion};
use crate::render_gate::{RenderGate, StatusFlags};
use crate::time_utils;
use crate::window::{CursorMode, WindowSettings};
use crate::{Extent2, Rgba, Vec2};

/// What a host framework needs from its graphics backend.
pub trait Graphics {
    /// GL entry points.
    type GL: GLFunctions;

    /// GL entry points of the current context.
    fn gl(&self) -> &Self::GL;
    /// The context's OpenGL version.
    fn gl_version(&self) -> GLVersion;
    /// Was a GL 3 context requested, and obtained?
    ///
    /// `true` only if the configuration asked for a GL 3 context
    /// (`use_gl30`) and the context reports version 3.0 or later.
    fn is_gl30_available(&self) -> bool;
    /// Is the OpenGL extension supported by the current context?
    fn supports_extension(&self, extension: &str) -> bool;

    /// Width of the drawable area, never less than 1.
    fn width(&self) -> u32;
    /// Height of the drawable area, never less than 1.
    fn height(&self) -> u32;
    /// Id of the current frame; `-1` before the first frame.
    fn frame_id(&self) -> i64;
    /// Seconds between the last two frames.
    fn delta_time(&self) -> f32;
    /// Seconds between the last two frames, without smoothing.
    fn raw_delta_time(&self) -> f32;
    /// Frames drawn during the last full second.
    fn frames_per_second(&self) -> u32;

    #[allow(missing_docs)]
    fn ppi_x(&self) -> f32;
    #[allow(missing_docs)]
    fn ppi_y(&self) -> f32;
    #[allow(missing_docs)]
    fn ppc_x(&self) -> f32;
    #[allow(missing_docs)]
    fn ppc_y(&self) -> f32;
    /// Diagonal pixels per inch over 160.
    fn density(&self) -> f32;

    /// Can `set_display_mode()` be used at all?
    fn supports_display_mode_change(&self) -> bool;
    /// Video modes of the monitor the window is on.
    fn display_modes(&self) -> Vec<DisplayMode>;
    /// Current video mode of the monitor the window is on.
    fn desktop_display_mode(&self) -> Option<DisplayMode>;
    /// Switches to `mode`, keeping the current full-screen state.
    ///
    /// Returns `false` if the replacement window couldn't be created, in
    /// which case nothing changed.
    fn set_display_mode(&mut self, mode: DisplayMode) -> bool;
    /// Resizes the window, entering or leaving full-screen as requested.
    ///
    /// Returns `false` if the replacement window couldn't be created, in
    /// which case nothing changed.
    fn set_windowed_mode(&mut self, width: u32, height: u32, fullscreen: bool) -> bool;
    #[allow(missing_docs)]
    fn is_fullscreen(&self) -> bool;
    /// The format the current window was created with.
    fn buffer_format(&self) -> BufferFormat;

    /// Sets the window title; `None` clears it.
    ///
    /// A title the native library rejects (e.g one with a NUL byte) leaves
    /// the current title in place.
    fn set_title(&mut self, title: Option<&str>) -> Result<()>;
    #[allow(missing_docs)]
    fn set_vsync(&mut self, vsync: bool);

    /// Redraw on every iteration (`true`), or only when requested.
    fn set_continuous_rendering(&self, continuous: bool);
    #[allow(missing_docs)]
    fn is_continuous_rendering(&self) -> bool;
    /// Asks for one frame to be drawn, even when not rendering continuously.
    fn request_rendering(&self);
}

/// Window state that survives window recreation.
#[derive(Debug, Clone, PartialEq)]
struct WindowState {
    title: String,
    resizable: bool,
    undecorated: bool,
    buffer_format: BufferFormat,
    gl_version: Option<GLVersion>,
    vsync: bool,
    visible: bool,
    fullscreen: bool,
    fullscreen_monitor: Option<MonitorId>,
    position: Vec2<i32>,
    size: Extent2<u32>,
}

impl WindowState {
    fn new(config: &GraphicsConfig) -> Self {
        Self {
            title: config.title.clone(),
            resizable: config.resizable,
            undecorated: config.undecorated,
            buffer_format: config.buffer_format,
            gl_version: config.gl_version(),
            vsync: config.vsync,
            visible: false,
            fullscreen: false,
            fullscreen_monitor: None,
            position: config.position,
            size: config.size,
        }
    }

    /// The monitor a full-screen window is on, or the primary monitor.
    fn window_monitor(&self) -> MonitorId {
        match (self.fullscreen, self.fullscreen_monitor) {
            (true, Some(monitor)) => monitor,
            _ => MonitorId::PRIMARY,
        }
    }
}

/// Creates and sets up a window from `state`, sharing GL objects with
/// `share`. `state` is only updated once the native window exists.
fn open_window<B: Backend>(
    backend: &mut B, state: &mut WindowState, size: Extent2<u32>, fullscreen: bool, share: Option<&B::Window>,
) -> Result<B::Window> {
    let monitor = state.fullscreen_monitor.unwrap_or_else(|| state.window_monitor());
    let mouse_captured = share.map(|w| w.cursor_mode() == CursorMode::Disabled).unwrap_or(false);

    let settings = WindowSettings {
        size,
        title: &state.title,
        fullscreen_monitor: if fullscreen { Some(monitor) } else { None },
        buffer_format: state.buffer_format,
        resizable: state.resizable,
        decorated: !state.undecorated,
        visible: false,
        gl_version: state.gl_version,
    };
    let mut window = backend.create_window(&settings, share)?;

    if fullscreen {
        state.fullscreen_monitor = Some(monitor);
    }
    state.size = Extent2::new(size.w.max(1), size.h.max(1));
    state.fullscreen = fullscreen;
    if !fullscreen {
        if state.position.x == -1 || state.position.y == -1 {
            match backend.video_mode(MonitorId::PRIMARY) {
                Some(mode) => {
                    state.position.x = (mode.width as i32 - state.size.w as i32) / 2;
                    state.position.y = (mode.height as i32 - state.size.h as i32) / 2;
                },
                None => {
                    warn!("No video mode for the primary monitor, placing the window at the origin");
                    state.position = Vec2::zero();
                },
            }
        }
        window.set_position(state.position);
    }

    // Full-screen windows would otherwise keep the mouse to themselves.
    window.set_cursor_mode(if mouse_captured { CursorMode::Disabled } else { CursorMode::Normal });

    window.make_current();
    backend.set_swap_interval(state.vsync as u32);
    if state.visible {
        window.show();
    }
    Ok(window)
}

/// The `Graphics` capability over a native windowing/GL backend.
pub struct NativeGraphics<B: Backend> {
    backend: B,
    window: B::Window,
    gl: B::GL,
    gl_version: GLVersion,
    state: WindowState,
    initial_background_color: Rgba<f32>,
    clock: FrameClock,
    render_gate: Arc<RenderGate>,
    status: Arc<StatusFlags>,
    resize_listener: Option<Box<dyn FnMut(u32, u32)>>,
}

impl<B: Backend> fmt::Debug for NativeGraphics<B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("NativeGraphics")
            .field("gl_version", &self.gl_version)
            .field("state", &self.state)
            .field("clock", &self.clock)
            .field("render_gate", &self.render_gate)
            .field("status", &self.status)
            .finish()
    }
}

#[cfg(feature = "glfw")]
/// The adapter over GLFW.
pub type GlfwGraphics = NativeGraphics<crate::backend::GlfwBackend>;

#[cfg(feature = "glfw")]
impl NativeGraphics<crate::backend::GlfwBackend> {
    /// Initializes GLFW, then opens the window as described by `config`.
    pub fn open(config: &GraphicsConfig) -> Result<Self> {
        let backend = crate::backend::GlfwBackend::init()?;
        Self::new(backend, config)
    }
}

impl<B: Backend> NativeGraphics<B> {
    /// Creates the window, checks the OpenGL context, and shows the window
    /// unless `config.hidden` is set.
    ///
    /// # Errors
    /// - `ErrorKind::Failed` if the window can't be created;
    /// - `ErrorKind::Unsupported` if the context is older than OpenGL 2.0,
    ///   or is 2.x without framebuffer objects.
    pub fn new(mut backend: B, config: &GraphicsConfig) -> Result<Self> {
        let mut state = WindowState::new(config);
        if let Some(monitor) = config.fullscreen_monitor {
            if monitor.0 < backend.monitor_count() {
                state.fullscreen_monitor = Some(monitor);
            } else {
                warn!("Ignoring fullscreen monitor {}: only {} connected", monitor.0, backend.monitor_count());
            }
        }

        let size = config.size;
        let mut window = open_window(&mut backend, &mut state, size, config.fullscreen, None)
            .map_err(|e| Error::failed(format!(
                "Unable to create window: {}x{}, fullscreen: {} ({})", size.w, size.h, config.fullscreen, e
            )))?;
        info!("Created {}x{} window, fullscreen: {}", state.size.w, state.size.h, state.fullscreen);

        let gl = window.load_gl();
        let version_string = gl.version_string();
        info!("OpenGL version: {}", version_string);
        let gl_version = match gl::check_requirements(&version_string, |ext| backend.extension_supported(ext)) {
            Ok(version) => version,
            Err(e) => {
                backend.destroy_window(window);
                return Err(e);
            },
        };

        let mut graphics = Self {
            backend,
            window,
            gl,
            gl_version,
            state,
            initial_background_color: config.initial_background_color,
            clock: FrameClock::new(),
            render_gate: Arc::new(RenderGate::new()),
            status: Arc::new(StatusFlags::new()),
            resize_listener: None,
        };
        if !config.hidden {
            graphics.show();
        }
        Ok(graphics)
    }

    /// Replaces the window, keeping the old one if the new one can't be
    /// created.
    fn recreate_window(&mut self, size: Extent2<u32>, fullscreen: bool) -> bool {
        match open_window(&mut self.backend, &mut self.state, size, fullscreen, Some(&self.window)) {
            Ok(window) => {
                let old = mem::replace(&mut self.window, window);
                self.backend.destroy_window(old);
                info!("Recreated window: {}x{}, fullscreen: {}", self.state.size.w, self.state.size.h, fullscreen);
                true
            },
            Err(e) => {
                warn!("Unable to recreate window: {}x{}, fullscreen: {} ({})", size.w, size.h, fullscreen, e);
                false
            },
        }
    }

    fn physical_metrics(&self) -> Option<PhysicalMetrics> {
        let monitor = self.state.window_monitor();
        Some(PhysicalMetrics {
            size_mm: self.backend.physical_size(monitor)?,
            mode: self.backend.video_mode(monitor)?,
        })
    }

    fn metric<F: FnOnce(&PhysicalMetrics) -> f32>(&self, f: F) -> f32 {
        self.physical_metrics().as_ref().map(f).unwrap_or(0.)
    }

    /// Host callback: a frame starts at `time`, in nanoseconds.
    pub fn frame_start(&mut self, time: u64) {
        self.clock.frame_start(time);
    }

    /// `frame_start()` at the backend's current time.
    pub fn tick(&mut self) {
        let now = time_utils::duration_to_nanos(&self.backend.time());
        self.frame_start(now);
    }

    /// Host callback: the window was resized.
    ///
    /// Updates the viewport, notifies the resize listener and requests a
    /// frame.
    pub fn size_changed(&mut self, width: i32, height: i32) {
        if cfg!(target_os = "macos") {
            // Refreshes the NSOpenGLContext.
            self.window.show();
        }
        let width = width.max(1) as u32;
        let height = height.max(1) as u32;
        self.state.size = Extent2::new(width, height);
        self.gl.viewport(0, 0, width, height);
        if let Some(listener) = self.resize_listener.as_mut() {
            listener(width, height);
        }
        self.request_rendering();
    }

    /// Host callback: the window moved.
    pub fn position_changed(&mut self, x: i32, y: i32) {
        self.state.position = Vec2::new(x, y);
    }

    /// Processes native events and routes them to the host callbacks and
    /// status flags.
    pub fn poll_events(&mut self) {
        self.backend.poll_events();
        for event in self.window.drain_events() {
            trace!("Window event: {:?}", event);
            match event {
                WindowEvent::Resized(size) => self.size_changed(size.w, size.h),
                WindowEvent::Moved(position) => self.position_changed(position.x, position.y),
                WindowEvent::Focused(focused) => self.status.set_foreground(focused),
                WindowEvent::Iconified(iconified) => self.status.set_minimized(iconified),
                WindowEvent::CloseRequested => debug!("Close requested"),
            }
        }
    }

    /// Should a frame be drawn on this iteration? Consumes any pending
    /// rendering request.
    pub fn should_render(&self) -> bool {
        self.render_gate.should_render()
    }

    /// Presents the frame.
    pub fn present(&mut self) {
        self.window.swap_buffers();
    }

    /// Did the user ask to close the window?
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Called with the new size whenever the drawable area changes.
    pub fn set_resize_listener<F: FnMut(u32, u32) + 'static>(&mut self, listener: F) {
        self.resize_listener = Some(Box::new(listener));
    }

    /// Render-gate flags, to request frames from other threads.
    pub fn render_gate(&self) -> Arc<RenderGate> {
        self.render_gate.clone()
    }
    /// Focus/minimized flags, to be updated by a notification thread.
    pub fn status_flags(&self) -> Arc<StatusFlags> {
        self.status.clone()
    }

    /// The native window.
    ///
    /// Don't hold on to it: it is replaced whenever full-screen state or
    /// display mode changes.
    pub fn window(&self) -> &B::Window {
        &self.window
    }
    /// The native window, e.g for capturing the mouse.
    pub fn window_mut(&mut self) -> &mut B::Window {
        &mut self.window
    }
    /// The native backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Window position, in desktop coordinates.
    pub fn x(&self) -> i32 {
        self.state.position.x
    }
    #[allow(missing_docs)]
    pub fn y(&self) -> i32 {
        self.state.position.y
    }
    /// Moves the window's top-left corner.
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.state.position = Vec2::new(x, y);
        self.window.set_position(self.state.position);
    }
    #[allow(missing_docs)]
    pub fn title(&self) -> &str {
        &self.state.title
    }

    /// Shows the window, cleared to the initial background color.
    pub fn show(&mut self) {
        self.state.visible = true;
        self.window.show();
        self.gl.clear(self.initial_background_color);
        self.window.swap_buffers();
    }
    #[allow(missing_docs)]
    pub fn hide(&mut self) {
        self.state.visible = false;
        self.window.hide();
    }
    #[allow(missing_docs)]
    pub fn is_hidden(&self) -> bool {
        !self.state.visible
    }
    /// Minimizes the window.
    pub fn minimize(&mut self) {
        self.window.iconify();
    }
    /// The reciprocal of `minimize()`.
    pub fn restore(&mut self) {
        self.window.restore();
    }
    #[allow(missing_docs)]
    pub fn is_minimized(&self) -> bool {
        self.status.is_minimized()
    }
    /// Does the window have input focus?
    pub fn is_foreground(&self) -> bool {
        self.status.is_foreground()
    }
}

impl<B: Backend> Graphics for NativeGraphics<B> {
    type GL = B::GL;

    fn gl(&self) -> &B::GL {
        &self.gl
    }
    fn gl_version(&self) -> GLVersion {
        self.gl_version
    }
    fn is_gl30_available(&self) -> bool {
        self.state.gl_version.is_some() && self.gl_version.at_least(3, 0)
    }
    fn supports_extension(&self, extension: &str) -> bool {
        self.backend.extension_supported(extension)
    }

    fn width(&self) -> u32 {
        self.state.size.w
    }
    fn height(&self) -> u32 {
        self.state.size.h
    }
    fn frame_id(&self) -> i64 {
        self.clock.frame_id()
    }
    fn delta_time(&self) -> f32 {
        self.clock.delta_time()
    }
    fn raw_delta_time(&self) -> f32 {
        self.clock.delta_time()
    }
    fn frames_per_second(&self) -> u32 {
        self.clock.frames_per_second()
    }

    fn ppi_x(&self) -> f32 {
        self.metric(PhysicalMetrics::ppi_x)
    }
    fn ppi_y(&self) -> f32 {
        self.metric(PhysicalMetrics::ppi_y)
    }
    fn ppc_x(&self) -> f32 {
        self.metric(PhysicalMetrics::ppc_x)
    }
    fn ppc_y(&self) -> f32 {
        self.metric(PhysicalMetrics::ppc_y)
    }
    fn density(&self) -> f32 {
        self.metric(PhysicalMetrics::density)
    }

    fn supports_display_mode_change(&self) -> bool {
        true
    }
    fn display_modes(&self) -> Vec<DisplayMode> {
        self.backend.video_modes(self.state.window_monitor())
    }
    fn desktop_display_mode(&self) -> Option<DisplayMode> {
        self.backend.video_mode(self.state.window_monitor())
    }
    fn set_display_mode(&mut self, mode: DisplayMode) -> bool {
        let previous_format = self.state.buffer_format;
        self.state.buffer_format = previous_format.for_bits_per_pixel(mode.bits_per_pixel);
        let fullscreen = self.state.fullscreen;
        if !self.recreate_window(mode.size(), fullscreen) {
            self.state.buffer_format = previous_format;
            return false;
        }
        if fullscreen {
            self.size_changed(mode.width as i32, mode.height as i32);
        }
        true
    }
    fn set_windowed_mode(&mut self, width: u32, height: u32, fullscreen: bool) -> bool {
        let size = Extent2::new(width, height);
        if fullscreen || self.state.fullscreen {
            if !self.recreate_window(size, fullscreen) {
                return false;
            }
            if fullscreen {
                self.size_changed(width as i32, height as i32);
            }
            return true;
        }
        self.window.set_size(size);
        true
    }
    fn is_fullscreen(&self) -> bool {
        self.state.fullscreen
    }
    fn buffer_format(&self) -> BufferFormat {
        self.state.buffer_format
    }

    fn set_title(&mut self, title: Option<&str>) -> Result<()> {
        let title = title.unwrap_or("");
        self.window.set_title(title)?;
        self.state.title = title.to_owned();
        Ok(())
    }
    fn set_vsync(&mut self, vsync: bool) {
        self.state.vsync = vsync;
        self.backend.set_swap_interval(vsync as u32);
    }

    fn set_continuous_rendering(&self, continuous: bool) {
        self.render_gate.set_continuous_rendering(continuous);
    }
    fn is_continuous_rendering(&self) -> bool {
        self.render_gate.is_continuous_rendering()
    }
    fn request_rendering(&self) {
        self.render_gate.request_rendering();
    }
}
