//! A GLFW-backed implementation of a game framework's `Graphics` capability.
//!
//! The host framework constructs a [`NativeGraphics`] from a
//! [`GraphicsConfig`], then drives it once per loop iteration: frame timing,
//! resize and move notifications, and the decision of whether to redraw at
//! all. Everything else (window creation, display modes, vsync, OpenGL
//! entry points) is forwarded to the native library through the
//! [`Backend`] trait.
//!
//! [`NativeGraphics`]: graphics/struct.NativeGraphics.html
//! [`GraphicsConfig`]: config/struct.GraphicsConfig.html
//! [`Backend`]: backend/trait.Backend.html

#![doc(html_root_url = "https://docs.rs/glfw-graphics/0.1.0")]
#![warn(missing_docs)]

#[allow(unused_imports)]
#[macro_use]
extern crate log;
extern crate vek;

pub use vek::{Vec2, Extent2, Rgba};

pub mod error;
pub use error::{ErrorKind, Error, Result};
pub mod config;
pub use config::GraphicsConfig;
pub mod gl;
pub use gl::{BufferFormat, GLVersion, GLFunctions};
pub mod display;
pub use display::{DisplayMode, MonitorId, PhysicalMetrics};
pub mod window;
pub use window::{WindowSettings, CursorMode};
pub mod event;
pub use event::WindowEvent;
pub mod backend;
pub use backend::{Backend, BackendWindow};
pub mod frame_clock;
pub use frame_clock::FrameClock;
pub mod render_gate;
pub use render_gate::{RenderGate, StatusFlags};
pub mod graphics;
pub use graphics::{Graphics, NativeGraphics};
#[cfg(feature = "glfw")]
pub use graphics::GlfwGraphics;
#[cfg(feature = "glfw")]
pub use backend::{GlfwBackend, GlfwWindow, GlowFunctions};

mod version_cmp;
mod time_utils;
