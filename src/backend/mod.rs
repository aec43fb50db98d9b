use anyhow::Result;

use crate::config::Config;

pub mod wayland;

/// Opens the drawing window and runs the event loop until it is closed.
pub fn run_wayland(config: Config) -> Result<()> {
    let mut backend = wayland::WaylandBackend::new(config)?;
    backend.run()
}
