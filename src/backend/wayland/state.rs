// Holds the live Wayland protocol state shared by the backend loop and the handler
// submodules; owns rendering into shared memory buffers.
use anyhow::{Context, Result};
use log::debug;
use smithay_client_toolkit::{
    output::OutputState, registry::RegistryState, seat::SeatState, shell::WaylandSurface,
    shm::Shm,
};
use wayland_client::{
    QueueHandle,
    protocol::{wl_keyboard, wl_pointer, wl_shm},
};

use crate::{config::Config, draw::CanvasSurface, input::InputState, ui, util::Rect};

use super::surface::SurfaceState;

/// Internal Wayland state shared across modules.
pub(super) struct WaylandState {
    // Wayland protocol objects
    pub(super) registry_state: RegistryState,
    pub(super) shm: Shm,
    pub(super) output_state: OutputState,
    pub(super) seat_state: SeatState,
    pub(super) keyboard: Option<wl_keyboard::WlKeyboard>,
    pub(super) pointer: Option<wl_pointer::WlPointer>,

    // Window and buffer management
    pub(super) surface: SurfaceState,

    // Configuration
    pub(super) config: Config,

    // Input state
    pub(super) input_state: InputState,

    // Tokio runtime handle for desktop notifications
    pub(super) tokio_handle: tokio::runtime::Handle,
}

impl WaylandState {
    pub(super) fn new(
        registry_state: RegistryState,
        shm: Shm,
        output_state: OutputState,
        seat_state: SeatState,
        config: Config,
        input_state: InputState,
        tokio_handle: tokio::runtime::Handle,
    ) -> Self {
        let surface = SurfaceState::new(config.ui.window_width, config.ui.window_height);
        Self {
            registry_state,
            shm,
            output_state,
            seat_state,
            keyboard: None,
            pointer: None,
            surface,
            config,
            input_state,
            tokio_handle,
        }
    }

    pub(super) fn render(&mut self, qh: &QueueHandle<Self>) -> Result<()> {
        debug!("=== RENDER START ===");
        let buffer_count = self.config.performance.buffer_count as usize;
        let width = self.surface.width();
        let height = self.surface.height();

        // Get a buffer from the pool
        let (buffer, canvas) = {
            let pool = self.surface.ensure_pool(&self.shm, buffer_count)?;
            pool.create_buffer(
                width as i32,
                height as i32,
                (width * 4) as i32,
                wl_shm::Format::Argb8888,
            )
            .context("Failed to create buffer")?
        };

        // SAFETY: This unsafe block creates a Cairo surface from raw memory buffer.
        // Safety invariants that must be maintained:
        // 1. `canvas` is a valid mutable slice from SlotPool with exactly
        //    (width * height * 4) bytes
        // 2. The buffer format ARgb32 matches the allocation (4 bytes per pixel)
        // 3. The stride (width * 4) correctly represents the number of bytes per row
        // 4. `cairo_surface` and `ctx` are explicitly dropped before the buffer is committed
        //    to Wayland, so Cairo doesn't access memory after ownership transfers
        // 5. No other references to this memory exist during Cairo's usage
        let cairo_surface = unsafe {
            cairo::ImageSurface::create_for_data_unsafe(
                canvas.as_mut_ptr(),
                cairo::Format::ARgb32,
                width as i32,
                height as i32,
                (width * 4) as i32,
            )
            .context("Failed to create Cairo surface")?
        };

        let ctx = cairo::Context::new(&cairo_surface).context("Failed to create Cairo context")?;

        // Buffers are recycled, so every frame is painted in full
        debug!("Rendering {} primitives", self.input_state.canvas.len());
        ui::render_frame(&ctx, &self.input_state);

        cairo_surface.flush();
        drop(ctx);
        drop(cairo_surface);

        let wl_surface = self
            .surface
            .window()
            .context("Window not created")?
            .wl_surface();
        wl_surface.attach(Some(buffer.wl_buffer()), 0, 0);

        let surface_width = width.min(i32::MAX as u32) as i32;
        let surface_height = height.min(i32::MAX as u32) as i32;
        let dirty_regions = resolve_damage_regions(
            surface_width,
            surface_height,
            self.input_state.take_damage(),
        );

        for rect in &dirty_regions {
            debug!(
                "Damaging buffer region x={} y={} w={} h={}",
                rect.x, rect.y, rect.width, rect.height
            );
            wl_surface.damage_buffer(rect.x, rect.y, rect.width, rect.height);
        }

        if self.config.performance.enable_vsync {
            wl_surface.frame(qh, wl_surface.clone());
        }

        wl_surface.commit();
        debug!("=== RENDER COMPLETE ===");

        Ok(())
    }
}

/// Drops invalid rectangles and falls back to full damage when nothing is left.
fn resolve_damage_regions(width: i32, height: i32, mut regions: Vec<Rect>) -> Vec<Rect> {
    regions.retain(Rect::is_valid);

    if regions.is_empty()
        && let Some(full) = Rect::new(0, 0, width, height)
    {
        regions.push(full);
    }

    regions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_damage_returns_full_when_empty() {
        let regions = resolve_damage_regions(1000, 700, Vec::new());
        assert_eq!(regions, vec![Rect::new(0, 0, 1000, 700).unwrap()]);
    }

    #[test]
    fn resolve_damage_filters_invalid_rects() {
        let regions = resolve_damage_regions(
            800,
            600,
            vec![
                Rect {
                    x: 10,
                    y: 54,
                    width: 50,
                    height: 40,
                },
                Rect {
                    x: 0,
                    y: 0,
                    width: 0,
                    height: 10,
                },
            ],
        );

        assert_eq!(regions, vec![Rect::new(10, 54, 50, 40).unwrap()]);
    }
}
