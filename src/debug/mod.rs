// src/debug/mod.rs

pub mod ui;

pub use ui::globe_control_ui_system;
