// src/globe/mod.rs

pub mod animation;
pub mod config;
pub mod decal;
pub mod gaze;
pub mod grid;
pub mod orientation;
pub mod pointer;
pub mod systems;

pub use animation::{AnimationClock, AppearanceState};
pub use config::GlobeConfig;
pub use gaze::GazeState;
pub use orientation::OrientationState;
pub use pointer::PointerInput;
