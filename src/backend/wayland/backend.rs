// Coordinates backend startup/shutdown and drives the event loop while delegating
// rendering & protocol state to `WaylandState` and its handler modules.
use anyhow::{Context, Result};
use log::{debug, info, warn};
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    registry::RegistryState,
    seat::SeatState,
    shell::{
        WaylandSurface,
        xdg::{XdgShell, window::WindowDecorations},
    },
    shm::Shm,
};
use wayland_client::{Connection, globals::registry_queue_init};

use super::state::WaylandState;
use crate::{
    config::{Config, KeybindingsConfig},
    input::InputState,
    notification,
};

const WINDOW_TITLE: &str = "Sketchboard";
const APP_ID: &str = "sketchboard";
const MAX_RENDER_FAILURES: u32 = 10;

/// Wayland backend state
pub struct WaylandBackend {
    config: Option<Config>,
    /// Tokio runtime for desktop notifications
    tokio_runtime: tokio::runtime::Runtime,
}

impl WaylandBackend {
    pub fn new(config: Config) -> Result<Self> {
        let tokio_runtime = tokio::runtime::Runtime::new()
            .context("Failed to create Tokio runtime for notifications")?;
        Ok(Self {
            config: Some(config),
            tokio_runtime,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        info!("Starting Wayland backend");
        let config = self
            .config
            .take()
            .context("Wayland backend can only run once")?;

        // Connect to Wayland compositor
        let conn =
            Connection::connect_to_env().context("Failed to connect to Wayland compositor")?;
        debug!("Connected to Wayland display");

        // Initialize registry and event queue
        let (globals, mut event_queue) =
            registry_queue_init(&conn).context("Failed to initialize Wayland registry")?;
        let qh = event_queue.handle();

        // Bind global interfaces
        let compositor_state =
            CompositorState::bind(&globals, &qh).context("wl_compositor not available")?;
        debug!("Bound compositor");

        let xdg_shell = XdgShell::bind(&globals, &qh).context("xdg_wm_base not available")?;
        debug!("Bound xdg shell");

        let shm = Shm::bind(&globals, &qh).context("wl_shm not available")?;
        debug!("Bound shared memory");

        let output_state = OutputState::new(&globals, &qh);
        debug!("Initialized output state");

        let seat_state = SeatState::new(&globals, &qh);
        debug!("Initialized seat state");

        let registry_state = RegistryState::new(&globals);

        debug!("  Color: {:?}", config.drawing.default_color);
        debug!("  Width: {}px", config.drawing.default_width);
        debug!("  Tool: {}", config.drawing.default_tool);
        debug!("  Fill: {}", config.drawing.default_fill_mode);
        debug!("  Buffer count: {}", config.performance.buffer_count);
        debug!("  VSync: {}", config.performance.enable_vsync);

        // Build keybinding action map
        let action_map = match config.keybindings.build_action_map() {
            Ok(map) => map,
            Err(e) => {
                warn!("Invalid keybindings: {}. Using defaults.", e);
                KeybindingsConfig::default()
                    .build_action_map()
                    .map_err(anyhow::Error::msg)
                    .context("Default keybindings are invalid")?
            }
        };

        let input_state = InputState::with_config(&config, action_map);
        let tokio_handle = self.tokio_runtime.handle().clone();

        // Create the toplevel window
        info!("Creating window");
        let wl_surface = compositor_state.create_surface(&qh);
        let window = xdg_shell.create_window(wl_surface, WindowDecorations::RequestServer, &qh);
        window.set_title(WINDOW_TITLE);
        window.set_app_id(APP_ID);
        window.set_min_size(Some((
            crate::config::MIN_WINDOW_WIDTH,
            crate::config::MIN_WINDOW_HEIGHT,
        )));
        window.commit();

        // Create application state
        let mut state = WaylandState::new(
            registry_state,
            shm,
            output_state,
            seat_state,
            config,
            input_state,
            tokio_handle,
        );
        state.surface.set_window(window);
        info!("Window created");

        // Track consecutive render failures for error recovery
        let mut consecutive_render_failures = 0u32;

        // Main event loop
        let mut loop_error: Option<anyhow::Error> = None;
        loop {
            if state.input_state.should_exit {
                info!("Exit requested, breaking event loop");
                break;
            }

            match event_queue.blocking_dispatch(&mut state) {
                Ok(_) => {
                    if state.input_state.should_exit {
                        info!("Exit requested after dispatch, breaking event loop");
                        break;
                    }
                }
                Err(e) => {
                    warn!("Event queue error: {}", e);
                    loop_error = Some(anyhow::anyhow!("Wayland event queue error: {}", e));
                    break;
                }
            }

            if let Some(notice) = state.input_state.take_pending_desktop_notice() {
                notification::send_notice_async(&state.tokio_handle, notice);
            }

            // Render if configured and needs redraw, but only if no frame callback pending
            // This throttles rendering to display refresh rate (when vsync is enabled)
            let can_render = state.surface.is_configured()
                && state.input_state.needs_redraw
                && (!state.surface.frame_callback_pending()
                    || !state.config.performance.enable_vsync);

            if can_render {
                match state.render(&qh) {
                    Ok(()) => {
                        consecutive_render_failures = 0;
                        state.input_state.needs_redraw = false;
                        if state.config.performance.enable_vsync {
                            state.surface.set_frame_callback_pending(true);
                        }
                    }
                    Err(e) => {
                        consecutive_render_failures += 1;
                        warn!(
                            "Rendering error (attempt {}/{}): {}",
                            consecutive_render_failures, MAX_RENDER_FAILURES, e
                        );

                        if consecutive_render_failures >= MAX_RENDER_FAILURES {
                            return Err(anyhow::anyhow!(
                                "Too many consecutive render failures ({}), exiting: {}",
                                consecutive_render_failures,
                                e
                            ));
                        }

                        // Clear redraw flag to avoid infinite error loop
                        state.input_state.needs_redraw = false;
                    }
                }
            } else if state.input_state.needs_redraw && state.surface.frame_callback_pending() {
                debug!("Main loop: Skipping render - frame callback already pending");
            }
        }

        info!("Wayland backend exiting");

        match loop_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
