//! Rendering module
//!
//! Implementations of the simulation's `Surface`:
//! - `CanvasSurface`: HTML canvas 2D context (wasm only)
//! - `RecordingSurface`: records draw calls (native runs and tests)

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};
