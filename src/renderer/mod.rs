//! Rendering module
//!
//! The board is described as a `Frame` of draw commands, then replayed onto
//! a canvas 2D context in the browser.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod commands;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use commands::{DrawCmd, Frame, Rect, TextStyle};
pub use shapes::build_frame;
