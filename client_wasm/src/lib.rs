//! WebGPU client for the arcade game
//!
//! Engine-free rendering using wgpu 24.0 with the "webgpu" feature. Input
//! mapping and the frame-loop owner are plain Rust so they build and test on
//! any target; everything touching the browser is wasm32 only.

pub mod input;
pub mod simulation;

#[cfg(target_arch = "wasm32")]
mod bindings;
#[cfg(target_arch = "wasm32")]
mod camera;
#[cfg(target_arch = "wasm32")]
mod hud;
#[cfg(target_arch = "wasm32")]
mod mesh;
#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
pub use bindings::*;

pub use simulation::LocalGame;
