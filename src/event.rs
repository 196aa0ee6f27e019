//! Window events reported by the native library.

use crate::{Extent2, Vec2};

/// A window event, as drained from the native library after polling.
///
/// Only the events the adapter routes to its host callbacks or status flags
/// are represented.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum WindowEvent {
    /// The window's size changed, in screen coordinates.
    Resized(Extent2<i32>),
    /// The window's top-left corner moved, in desktop coordinates.
    Moved(Vec2<i32>),
    /// The window gained (`true`) or lost (`false`) input focus.
    Focused(bool),
    /// The window was minimized (`true`) or restored (`false`).
    Iconified(bool),
    /// The user asked for the window to be closed.
    CloseRequested,
}
