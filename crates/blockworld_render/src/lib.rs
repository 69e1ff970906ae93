//! # Blockworld Render
//!
//! Turns world state into pixels.
//!
//! ## Architecture
//!
//! ```text
//! WorldState ──→ Compositor ──→ impl Canvas
//! (grid, players)  (stateless)    (FrameBuffer, window, ...)
//! ```
//!
//! The engine never owns a surface. Callers pass one in per frame, so the
//! whole pipeline runs headless in tests.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod canvas;
pub mod compositor;
pub mod stats;

pub use canvas::{Canvas, FrameBuffer};
pub use compositor::Compositor;
pub use stats::FrameStats;
