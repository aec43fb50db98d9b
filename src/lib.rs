//! Sketchboard: a retained-mode drawing canvas for Wayland.
//!
//! The drawing model (canvas, engine, history, export) is independent of the
//! windowing backend so it can be driven and inspected without a compositor.

pub mod backend;
pub mod config;
pub mod draw;
pub mod engine;
pub mod export;
pub mod history;
pub mod input;
pub mod notification;
pub mod ui;
pub mod util;

pub use config::Config;
