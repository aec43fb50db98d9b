//! Retained canvas, primitives and Cairo rendering.
//!
//! This module defines the drawing types shared by the window and PNG export:
//! - [`Color`]: RGBA color representation with the palette constants
//! - [`Primitive`]: A line, rectangle or oval with its [`Style`]
//! - [`CanvasSurface`]: The create/delete contract the drawing engine targets
//! - [`RetainedCanvas`]: The in-memory implementation of that contract
//! - Rendering functions for Cairo-based output

pub mod canvas;
pub mod color;
pub mod primitive;
pub mod render;
pub mod surface;

// Re-export commonly used types at module level
pub use canvas::RetainedCanvas;
pub use color::Color;
pub use primitive::{LineCap, PREVIEW_DASH, Primitive, PrimitiveId, PrimitiveKind, Style};
pub use render::{render_background, render_canvas, render_primitive};
pub use surface::CanvasSurface;

// Re-export color constants for public API
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, PURPLE, RED, WHITE, YELLOW};
