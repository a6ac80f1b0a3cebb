//! # Hello UI
//!
//! Four side-by-side layouts. The first button of each toggles a column
//! of extra buttons; "See this ->" toggles the next layout's column.
//!
//! Runs a scripted session on the headless backend. `RUST_LOG=debug`
//! shows clicks and the frame rate.
//!
//! Run with: cargo run -p quill --features demos --bin hello_ui

use quill::{
    Action, Event, FrameClock, HeadlessBackend, Key, MouseButton, Orientation, RawInput, Rect,
    Window, WindowConfig,
};
use tracing_subscriber::EnvFilter;

const LAYOUTS: usize = 4;
const LAYOUT_WIDTH: i32 = 250;

fn click_at(x: f64, y: f64) -> Vec<RawInput> {
    vec![
        RawInput::CursorPos { x, y },
        RawInput::MouseButton { button: Some(MouseButton::Left), action: Action::Press },
    ]
}

fn release() -> Vec<RawInput> {
    vec![RawInput::MouseButton { button: Some(MouseButton::Left), action: Action::Release }]
}

/// Input the "user" produces on a given frame.
fn script(frame: u64) -> Vec<RawInput> {
    match frame {
        // Open the first column, then follow its arrow to the second.
        2 => click_at(10.0, 10.0),
        3 | 6 | 9 => release(),
        5 => click_at(10.0, 70.0),
        // Close the second column again.
        8 => click_at(260.0, 10.0),
        12 => vec![RawInput::Key { key: Some(Key::Escape), action: Action::Press }],
        _ => Vec::new(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let backend = HeadlessBackend::new();
    let handle = backend.handle();
    let mut window = Window::create(backend, WindowConfig::new(1080, 720, "Hello Quill/ui"))?;
    let mut ui = window.setup_ui();

    let mut open = [false; LAYOUTS];
    let mut clock = FrameClock::new();

    while window.alive() {
        handle.send_all(script(clock.frame() + 1));

        for event in window.events().drain() {
            if event == Event::KeyDown(Key::Escape) {
                window.die();
            }
        }

        window.draw();

        for i in 0..LAYOUTS {
            let x = i as i32 * LAYOUT_WIDTH;
            let place = Rect::from_corners(x, 0, x + LAYOUT_WIDTH - 2, 400);
            ui.layout(i, Orientation::Vertical, place);

            if ui.text_button(0, "Open/Close Me", None) {
                open[i] = !open[i];
            }
            if open[i] {
                if ui.text_button(1, "See this ->", None) {
                    open[(i + 1) % LAYOUTS] = !open[(i + 1) % LAYOUTS];
                }
                ui.text_button(2, "How", None);
                ui.text_button(3, "is the", None);
                ui.text_button(4, "Weather?", None);
            }
        }

        window.draw_ui(&mut ui);
        window.clear();

        clock.tick();
        tracing::debug!(frame = clock.frame(), fps = clock.fps(), "frame");
    }

    tracing::info!(open = ?open, rasterized = ui.rasterizations(), "window closed");
    Ok(())
}
