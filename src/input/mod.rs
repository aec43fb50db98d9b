//! Input handling and interaction state.
//!
//! This module translates backend keyboard and mouse events into drawing
//! actions. It holds the current tool, color, brush width and fill mode and
//! routes pointer events to the toolbar or the drawing engine.

pub mod events;
pub mod modifiers;
pub mod settings;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{Key, MouseButton};
pub use settings::InteractionState;
pub use state::InputState;
pub use tool::{FillMode, Tool};

// Re-export for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use modifiers::Modifiers;
