//! Browser client for Pong
//!
//! Canvas 2D rendering of the `game_core` simulation, with mouse and
//! keyboard input. The DOM-facing parts only build for wasm32.

pub mod input;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod canvas;

#[cfg(target_arch = "wasm32")]
pub use app::{pause_game, start};
