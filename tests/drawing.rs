use std::fs::File;

use sketchboard::config::{Action, Config};
use sketchboard::draw::color::{BLUE, RED, WHITE};
use sketchboard::draw::{CanvasSurface, PrimitiveKind, RetainedCanvas};
use sketchboard::engine::DrawingEngine;
use sketchboard::export;
use sketchboard::history::{HistoryManager, RedoOutcome};
use sketchboard::input::state::NoticeKind;
use sketchboard::input::{FillMode, InputState, InteractionState, Key, MouseButton, Tool};

fn make_input_state() -> InputState {
    let config = Config::default();
    let action_map = config.keybindings.build_action_map().unwrap();
    let mut state = InputState::with_config(&config, action_map);
    state.update_window_dimensions(1000, 700);
    state
}

/// Drags through `points` in canvas coordinates.
fn stroke(state: &mut InputState, points: &[(i32, i32)]) {
    let origin = state.canvas_origin_y();
    let (first, rest) = points.split_first().unwrap();
    state.on_mouse_press(MouseButton::Left, first.0, first.1 + origin);
    for (x, y) in rest {
        state.on_mouse_motion(*x, *y + origin);
    }
    let last = points.last().unwrap();
    state.on_mouse_release(MouseButton::Left, last.0, last.1 + origin);
}

fn png_pixel(path: &std::path::Path, x: i32, y: i32) -> (u8, u8, u8, u8) {
    let mut file = File::open(path).unwrap();
    let mut surface = cairo::ImageSurface::create_from_png(&mut file).unwrap();
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let offset = y as usize * stride + x as usize * 4;
    (
        data[offset + 2],
        data[offset + 1],
        data[offset],
        data[offset + 3],
    )
}

#[test]
fn each_drag_commits_exactly_one_primitive() {
    let mut state = make_input_state();
    stroke(&mut state, &[(10, 10), (20, 15), (30, 25), (40, 30)]);
    state.handle_action(Action::SelectLine);
    stroke(&mut state, &[(50, 50), (60, 70), (90, 90)]);
    state.handle_action(Action::SelectOval);
    stroke(&mut state, &[(100, 20), (140, 60)]);

    assert_eq!(state.canvas.len(), 3);
    assert_eq!(state.history.undo_len(), 3);
    let kinds: Vec<_> = state.canvas.iter().map(|(_, p)| p.kind).collect();
    assert_eq!(
        kinds,
        vec![PrimitiveKind::Line, PrimitiveKind::Line, PrimitiveKind::Oval]
    );
    // Committed shapes are never dashed
    assert!(state.canvas.iter().all(|(_, p)| p.style.dash.is_none()));
}

#[test]
fn n_undos_empty_the_canvas() {
    let mut state = make_input_state();
    for i in 0..4 {
        stroke(&mut state, &[(10 * i, 10), (10 * i + 5, 40), (10 * i + 8, 60)]);
    }
    for _ in 0..4 {
        assert!(state.action_enabled(Action::Undo));
        state.handle_action(Action::Undo);
    }
    assert!(state.canvas.is_empty());
    assert!(!state.action_enabled(Action::Undo));
    assert_eq!(state.history.redo_len(), 4);

    // One more is harmless
    state.handle_action(Action::Undo);
    assert!(state.canvas.is_empty());
}

#[test]
fn redo_reports_notice_without_restoring() {
    let mut state = make_input_state();
    stroke(&mut state, &[(10, 10), (40, 40)]);
    stroke(&mut state, &[(60, 60), (90, 90)]);
    state.handle_action(Action::Undo);
    let after_undo = state.canvas.len();

    state.on_key_press(Key::Ctrl);
    state.on_key_press(Key::Char('y'));
    state.on_key_release(Key::Ctrl);

    assert_eq!(state.canvas.len(), after_undo);
    assert_eq!(state.current_notice().map(|n| n.kind), Some(NoticeKind::Info));
}

#[test]
fn new_stroke_disables_redo() {
    let mut state = make_input_state();
    stroke(&mut state, &[(10, 10), (40, 40)]);
    state.handle_action(Action::Undo);
    assert!(state.action_enabled(Action::Redo));

    // Pressing with a freehand tool clears redo before anything is drawn
    let origin = state.canvas_origin_y();
    state.on_mouse_press(MouseButton::Left, 50, 50 + origin);
    assert!(!state.action_enabled(Action::Redo));
    state.on_mouse_release(MouseButton::Left, 50, 50 + origin);
}

#[test]
fn eraser_paints_background_color() {
    let mut state = make_input_state();
    state.handle_action(Action::SetColorBlue);
    stroke(&mut state, &[(10, 10), (50, 10)]);
    state.handle_action(Action::SelectEraser);
    stroke(&mut state, &[(10, 10), (50, 10)]);

    let (_, eraser) = state.canvas.iter().last().unwrap();
    assert_eq!(eraser.style.stroke, Some(WHITE));
}

#[test]
fn clear_then_export_writes_blank_image() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = make_input_state();
    stroke(&mut state, &[(10, 10), (100, 100)]);
    state.on_key_press(Key::Char('e'));
    assert!(state.canvas.is_empty());

    let target = dir.path().join("blank.png");
    let written = export::render_canvas_png(
        &state.canvas,
        state.engine.background(),
        state.canvas_width(),
        state.canvas_height(),
        &target.to_string_lossy(),
    )
    .unwrap();

    assert_eq!(written, target);
    assert_eq!(png_pixel(&written, 55, 55), (255, 255, 255, 255));
}

#[test]
fn export_matches_filled_and_outlined_shapes() {
    let dir = tempfile::tempdir().unwrap();
    let mut canvas = RetainedCanvas::new();
    let mut history = HistoryManager::new();
    let mut engine = DrawingEngine::new(WHITE, sketchboard::draw::color::BLACK);
    let mut settings = InteractionState::new(Tool::Rectangle, RED, 2, FillMode::Filled);

    engine.on_press(10, 10, &settings, &mut canvas, &mut history);
    engine.on_drag(60, 60, &settings, &mut canvas);
    engine.on_release(60, 60, &settings, &mut canvas, &mut history);

    settings.set_fill_mode(FillMode::Outline);
    settings.set_color(BLUE);
    engine.on_press(80, 10, &settings, &mut canvas, &mut history);
    engine.on_release(130, 60, &settings, &mut canvas, &mut history);

    let path = export::render_canvas_png(
        &canvas,
        WHITE,
        160,
        80,
        &dir.path().join("shapes").to_string_lossy(),
    )
    .unwrap();
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("png"));

    assert_eq!(png_pixel(&path, 35, 35), (255, 0, 0, 255));
    // Outline only: interior stays background
    assert_eq!(png_pixel(&path, 105, 35), (255, 255, 255, 255));
    assert_eq!(png_pixel(&path, 80, 35), (0, 0, 255, 255));
}

#[test]
fn history_and_surface_agree_after_mixed_operations() {
    let mut canvas = RetainedCanvas::new();
    let mut history = HistoryManager::new();
    let mut engine = DrawingEngine::new(WHITE, sketchboard::draw::color::BLACK);
    let settings = InteractionState::new(Tool::Line, BLUE, 3, FillMode::Outline);

    let mut ids = Vec::new();
    for i in 0..3 {
        engine.on_press(0, i * 10, &settings, &mut canvas, &mut history);
        engine.on_drag(40, i * 10, &settings, &mut canvas);
        ids.push(
            engine
                .on_release(50, i * 10, &settings, &mut canvas, &mut history)
                .unwrap(),
        );
    }

    assert_eq!(history.undo(&mut canvas), Some(ids[2]));
    assert!(!canvas.contains(ids[2]));
    assert!(canvas.contains(ids[1]));
    assert_eq!(history.redo(), RedoOutcome::Unsupported);
    assert_eq!(history.redo(), RedoOutcome::Nothing);

    history.clear(&mut canvas);
    assert!(canvas.is_empty());
    assert!(!history.can_undo());
}
