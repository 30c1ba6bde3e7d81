//! Browser host for Neon Pong
//!
//! Owns the canvas lookup, HiDPI sizing and the per-frame event queue.
//! Drawing and audio stay in the page's JavaScript, which reads the
//! postcard-encoded `FrameSnapshot` returned from each frame.

pub mod input;
pub mod session;
pub mod surface;

pub use session::*;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::NeonPong;
