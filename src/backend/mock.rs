//! In-memory backend recording every native call, for tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::{Backend, BackendWindow};
use crate::display::{DisplayMode, MonitorId};
use crate::error::{self, Result};
use crate::event::WindowEvent;
use crate::gl::{BufferFormat, GLFunctions, GLVersion};
use crate::window::{CursorMode, WindowSettings};
use crate::{Extent2, Rgba, Vec2};

#[derive(Debug, Clone)]
pub struct MockMonitor {
    pub size_mm: Extent2<u32>,
    pub current: DisplayMode,
    pub modes: Vec<DisplayMode>,
}

impl MockMonitor {
    pub fn new(width: u32, height: u32, size_mm: Extent2<u32>) -> Self {
        let current = DisplayMode::from_channels(width, height, 60, 8, 8, 8);
        Self {
            size_mm,
            current,
            modes: vec![DisplayMode::from_channels(800, 600, 60, 5, 6, 5), current],
        }
    }
}

#[derive(Debug)]
pub struct MockBackend {
    pub monitors: Vec<MockMonitor>,
    pub gl_version: String,
    pub extensions: Vec<&'static str>,
    pub fail_creation: bool,
    pub created: u32,
    pub destroyed: Vec<u32>,
    pub swap_interval: Option<u32>,
    pub polls: u32,
    pub time: Duration,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            monitors: vec![MockMonitor::new(1920, 1080, Extent2::new(520, 290))],
            gl_version: "3.3.0 Mock".to_owned(),
            extensions: vec![],
            fail_creation: false,
            created: 0,
            destroyed: vec![],
            swap_interval: None,
            polls: 0,
            time: Duration::default(),
        }
    }
}

/// Creation parameters, as the window received them.
#[derive(Debug, Clone, PartialEq)]
pub struct MockSettings {
    pub size: Extent2<u32>,
    pub title: String,
    pub fullscreen_monitor: Option<MonitorId>,
    pub buffer_format: BufferFormat,
    pub resizable: bool,
    pub decorated: bool,
    pub visible: bool,
    pub gl_version: Option<GLVersion>,
}

#[derive(Debug)]
pub struct MockWindow {
    pub id: u32,
    pub settings: MockSettings,
    pub shared_with: Option<u32>,
    pub cursor: CursorMode,
    pub cursor_sets: Vec<CursorMode>,
    pub position: Option<Vec2<i32>>,
    pub size: Extent2<u32>,
    pub title: String,
    pub visible: bool,
    pub iconified: bool,
    pub current: bool,
    pub swaps: u32,
    pub close: bool,
    pub events: Vec<WindowEvent>,
    gl_version: String,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GLCall {
    Viewport(i32, i32, u32, u32),
    Clear(Rgba<f32>),
}

#[derive(Debug, Clone)]
pub struct MockGL {
    version: String,
    calls: Rc<RefCell<Vec<GLCall>>>,
}

impl MockGL {
    pub fn calls(&self) -> Vec<GLCall> {
        self.calls.borrow().clone()
    }
}

impl GLFunctions for MockGL {
    fn version_string(&self) -> String {
        self.version.clone()
    }
    fn viewport(&self, x: i32, y: i32, width: u32, height: u32) {
        self.calls.borrow_mut().push(GLCall::Viewport(x, y, width, height));
    }
    fn clear(&self, color: Rgba<f32>) {
        self.calls.borrow_mut().push(GLCall::Clear(color));
    }
}

impl Backend for MockBackend {
    type Window = MockWindow;
    type GL = MockGL;

    fn monitor_count(&self) -> usize {
        self.monitors.len()
    }
    fn video_mode(&self, monitor: MonitorId) -> Option<DisplayMode> {
        self.monitors.get(monitor.0).map(|m| m.current)
    }
    fn video_modes(&self, monitor: MonitorId) -> Vec<DisplayMode> {
        self.monitors.get(monitor.0).map(|m| m.modes.clone()).unwrap_or_default()
    }
    fn physical_size(&self, monitor: MonitorId) -> Option<Extent2<u32>> {
        self.monitors.get(monitor.0).map(|m| m.size_mm)
    }

    fn create_window(&mut self, settings: &WindowSettings, share: Option<&MockWindow>) -> Result<MockWindow> {
        if self.fail_creation {
            return error::failed("mock refused to create a window");
        }
        if settings.title.contains('\0') {
            return error::invalid_arg("Window title contains a NUL byte");
        }
        if let Some(id) = settings.fullscreen_monitor {
            if id.0 >= self.monitors.len() {
                return error::invalid_arg(format!("No monitor at index {}", id.0));
            }
        }
        self.created += 1;
        Ok(MockWindow {
            id: self.created,
            settings: MockSettings {
                size: settings.size,
                title: settings.title.to_owned(),
                fullscreen_monitor: settings.fullscreen_monitor,
                buffer_format: settings.buffer_format,
                resizable: settings.resizable,
                decorated: settings.decorated,
                visible: settings.visible,
                gl_version: settings.gl_version,
            },
            shared_with: share.map(|w| w.id),
            cursor: CursorMode::Normal,
            cursor_sets: vec![],
            position: None,
            size: settings.size,
            title: settings.title.to_owned(),
            visible: settings.visible,
            iconified: false,
            current: false,
            swaps: 0,
            close: false,
            events: vec![],
            gl_version: self.gl_version.clone(),
        })
    }
    fn destroy_window(&mut self, window: MockWindow) {
        self.destroyed.push(window.id);
    }

    fn set_swap_interval(&mut self, interval: u32) {
        self.swap_interval = Some(interval);
    }
    fn extension_supported(&self, name: &str) -> bool {
        self.extensions.iter().any(|ext| *ext == name)
    }
    fn poll_events(&mut self) {
        self.polls += 1;
    }
    fn time(&self) -> Duration {
        self.time
    }
}

impl BackendWindow for MockWindow {
    type GL = MockGL;

    fn make_current(&mut self) {
        self.current = true;
    }
    fn load_gl(&mut self) -> MockGL {
        MockGL {
            version: self.gl_version.clone(),
            calls: Default::default(),
        }
    }
    fn swap_buffers(&mut self) {
        self.swaps += 1;
    }
    fn cursor_mode(&self) -> CursorMode {
        self.cursor
    }
    fn set_cursor_mode(&mut self, mode: CursorMode) {
        self.cursor = mode;
        self.cursor_sets.push(mode);
    }
    fn set_position(&mut self, position: Vec2<i32>) {
        self.position = Some(position);
    }
    fn set_size(&mut self, size: Extent2<u32>) {
        self.size = size;
    }
    fn set_title(&mut self, title: &str) -> Result<()> {
        if title.contains('\0') {
            return error::invalid_arg("Window title contains a NUL byte");
        }
        self.title = title.to_owned();
        Ok(())
    }
    fn show(&mut self) {
        self.visible = true;
    }
    fn hide(&mut self) {
        self.visible = false;
    }
    fn iconify(&mut self) {
        self.iconified = true;
    }
    fn restore(&mut self) {
        self.iconified = false;
    }
    fn should_close(&self) -> bool {
        self.close
    }
    fn drain_events(&mut self) -> Vec<WindowEvent> {
        ::std::mem::replace(&mut self.events, vec![])
    }
}
