use cairo::{Context, ImageSurface};
use sketchboard::config::{Action, Config, HelpOverlayStyle, StatusBarStyle, ToolbarStyle};
use sketchboard::input::state::{Notice, PromptKind, TextPrompt};
use sketchboard::input::InputState;

fn make_input_state(width: u32, height: u32) -> InputState {
    let config = Config::default();
    let action_map = config.keybindings.build_action_map().unwrap();
    let mut state = InputState::with_config(&config, action_map);
    state.update_window_dimensions(width, height);
    state
}

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn surface_has_pixels(surface: &mut ImageSurface) -> bool {
    surface
        .data()
        .map(|data| data.iter().any(|byte| *byte != 0))
        .unwrap_or(false)
}

/// Reads one pixel as (r, g, b, a).
fn pixel(surface: &mut ImageSurface, x: i32, y: i32) -> (u8, u8, u8, u8) {
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let offset = y as usize * stride + x as usize * 4;
    // ARgb32 is stored as native-endian u32, BGRA on little-endian
    (
        data[offset + 2],
        data[offset + 1],
        data[offset],
        data[offset + 3],
    )
}

#[test]
fn render_status_bar_draws_at_bottom() {
    let input = make_input_state(400, 200);
    let style = StatusBarStyle::default();
    let (mut surface, ctx) = surface_with_context(400, 200);
    sketchboard::ui::render_status_bar(&ctx, &input, &style, 400, 200);
    drop(ctx);

    assert!(surface_has_pixels(&mut surface));
    // Nothing above the bar
    assert_eq!(pixel(&mut surface, 200, 10).3, 0);
    assert_ne!(pixel(&mut surface, 200, 195).3, 0);
}

#[test]
fn render_help_overlay_draws_content() {
    let input = make_input_state(800, 600);
    let style = HelpOverlayStyle::default();
    let (mut surface, ctx) = surface_with_context(800, 600);
    sketchboard::ui::render_help_overlay(&ctx, input.help_entries(), &style, 800, 600);
    drop(ctx);
    assert!(surface_has_pixels(&mut surface));
}

#[test]
fn render_notice_and_prompt_draw_content() {
    let style = HelpOverlayStyle::default();

    let (mut surface, ctx) = surface_with_context(600, 400);
    let notice = Notice::error("Save Error", "Could not save image: denied");
    sketchboard::ui::render_notice(&ctx, &notice, &style, 600, 400);
    drop(ctx);
    assert!(surface_has_pixels(&mut surface));

    let (mut surface, ctx) = surface_with_context(600, 400);
    let prompt = TextPrompt::new(PromptKind::Save, "/tmp/sketch.png");
    sketchboard::ui::render_prompt(&ctx, &prompt, &style, 600, 400);
    drop(ctx);
    assert!(surface_has_pixels(&mut surface));

    let (mut surface, ctx) = surface_with_context(600, 400);
    let prompt = TextPrompt::new(PromptKind::Color, "#ff0000");
    sketchboard::ui::render_prompt(&ctx, &prompt, &style, 600, 400);
    drop(ctx);
    assert!(surface_has_pixels(&mut surface));
}

#[test]
fn render_toolbar_fills_the_strip() {
    let input = make_input_state(1000, 300);
    let style = ToolbarStyle::default();
    let (mut surface, ctx) = surface_with_context(1000, 300);
    sketchboard::ui::render_toolbar(&ctx, input.toolbar(), &input, &style, 1000);
    drop(ctx);

    assert_ne!(pixel(&mut surface, 2, 2).3, 0);
    // Canvas area untouched
    assert_eq!(pixel(&mut surface, 500, 200).3, 0);
}

#[test]
fn toolbar_buttons_do_not_overlap() {
    let layout = sketchboard::ui::layout_toolbar(&ToolbarStyle::default(), 1000.0);
    for a in &layout.items {
        for b in &layout.items {
            if std::ptr::eq(a, b) {
                continue;
            }
            let apart = a.x + a.width <= b.x
                || b.x + b.width <= a.x
                || a.y + a.height <= b.y
                || b.y + b.height <= a.y;
            assert!(apart, "{:?} overlaps {:?}", a.action, b.action);
        }
    }
    assert!(layout.item_for(Action::Save).is_some());
}

#[test]
fn render_toolbar_paints_save_button_inside_default_window() {
    let config = Config::default();
    let width = config.ui.window_width;
    let height = config.ui.window_height;
    let input = make_input_state(width, height);
    let save = input.toolbar().item_for(Action::Save).unwrap();
    assert!(save.x + save.width <= width as f64);

    let (mut surface, ctx) = surface_with_context(width as i32, height as i32);
    let style = ToolbarStyle::default();
    sketchboard::ui::render_toolbar(&ctx, input.toolbar(), &input, &style, width);
    drop(ctx);

    let (cx, cy) = (save.x + save.width / 2.0, save.y + save.height / 2.0);
    assert_ne!(pixel(&mut surface, cx as i32, cy as i32).3, 0);
}

#[test]
fn render_frame_paints_canvas_background_below_toolbar() {
    let mut input = make_input_state(1000, 700);
    input.show_status_bar = false;
    let (mut surface, ctx) = surface_with_context(1000, 700);
    sketchboard::ui::render_frame(&ctx, &input);
    drop(ctx);

    // Default canvas background is white
    let below = input.canvas_origin_y() + 50;
    assert_eq!(pixel(&mut surface, 500, below), (255, 255, 255, 255));
}

#[test]
fn render_frame_draws_committed_strokes_in_canvas_coordinates() {
    let mut input = make_input_state(1000, 700);
    input.show_status_bar = false;
    input.handle_action(Action::SelectRectangle);
    input.handle_action(Action::FillFilled);
    input.handle_action(Action::SetColorRed);

    let origin = input.canvas_origin_y();
    input.on_mouse_press(sketchboard::input::MouseButton::Left, 20, origin + 20);
    input.on_mouse_motion(80, origin + 80);
    input.on_mouse_release(sketchboard::input::MouseButton::Left, 80, origin + 80);

    let (mut surface, ctx) = surface_with_context(1000, 700);
    sketchboard::ui::render_frame(&ctx, &input);
    drop(ctx);

    assert_eq!(pixel(&mut surface, 50, origin + 50), (255, 0, 0, 255));
    assert_eq!(pixel(&mut surface, 150, origin + 50), (255, 255, 255, 255));
}
