//! # Blockworld
//!
//! A small shared multiplayer block world, integrating all engine crates.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                        BlockworldApp                           │
//! │   strings in (ids, directions, block names), strings out       │
//! ├──────────────────────┬────────────────────┬────────────────────┤
//! │  blockworld_core     │ blockworld_        │ blockworld_render  │
//! │                      │ procedural         │                    │
//! │  • Grid              │ • WorldSeed        │ • Canvas           │
//! │  • Players           │ • Simplex noise    │ • FrameBuffer      │
//! │  • WorldState        │ • GridGenerator    │ • Compositor       │
//! └──────────────────────┴────────────────────┴────────────────────┘
//!                               │
//!                        RenderLoop (own thread, fixed FPS)
//! ```
//!
//! ## Modules
//!
//! - `config`: TOML configuration
//! - `app`: The command facade a transport layer calls
//! - `render_loop`: Frame pacing on a dedicated thread

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod app;
pub mod config;
pub mod render_loop;

// Re-export the engine crates
pub use blockworld_core as core;
pub use blockworld_procedural as procedural;
pub use blockworld_render as render;

pub use app::BlockworldApp;
pub use config::{BlockworldConfig, ConfigError, ConfigResult};
pub use render_loop::{RenderLoop, RenderLoopConfig, RenderLoopStats};
