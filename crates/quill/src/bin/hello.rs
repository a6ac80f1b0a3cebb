//! # Hello
//!
//! Three coloured rectangles that drift right with every input event.
//! Escape closes the window.
//!
//! Runs a scripted session on the headless backend. Use `RUST_LOG=info`
//! to see the events as they arrive.
//!
//! Run with: cargo run -p quill --features demos --bin hello

use std::sync::Arc;

use quill::ui::Point;
use quill::{
    Action, Bitmap, Color, Event, HeadlessBackend, Key, MouseButton, RawInput, Rect, Window,
    WindowConfig,
};
use tracing_subscriber::EnvFilter;

/// Frames after which the session gives up waiting for Escape.
const MAX_FRAMES: u64 = 600;

fn solid(rect: Rect, color: Color) -> Arc<Bitmap> {
    Arc::new(Bitmap::filled(rect.size(), color))
}

/// Input the "user" produces on a given frame.
fn script(frame: u64) -> Vec<RawInput> {
    let key = |key, action| RawInput::Key { key: Some(key), action };
    match frame {
        1 => vec![
            RawInput::CursorPos { x: 140.0, y: 420.0 },
            RawInput::MouseButton { button: Some(MouseButton::Left), action: Action::Press },
            RawInput::MouseButton { button: Some(MouseButton::Left), action: Action::Release },
        ],
        2 => vec![RawInput::Char('h'), RawInput::Char('i')],
        3 => vec![key(Key::Space, Action::Press), key(Key::Space, Action::Release)],
        4 => vec![RawInput::Scroll { dx: 0.0, dy: -1.0 }],
        10 => vec![key(Key::Escape, Action::Press)],
        _ => Vec::new(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let backend = HeadlessBackend::new();
    let handle = backend.handle();
    let mut window = Window::create(backend, WindowConfig::new(1080, 720, "Hello Quill"))?;

    let mut shapes = [
        (Rect::from_corners(20, 300, 420, 700), Color::rgb(200, 30, 30)),
        (Rect::from_corners(120, 400, 320, 600), Color::rgb(255, 0, 0)),
        (Rect::from_corners(220, 250, 260, 310), Color::rgb(23, 200, 23)),
    ];
    let bitmaps: Vec<Arc<Bitmap>> =
        shapes.iter().map(|&(rect, color)| solid(rect, color)).collect();

    let mut frame = 0u64;
    while window.alive() {
        frame += 1;
        handle.send_all(script(frame));
        if frame == MAX_FRAMES {
            handle.request_close();
        }

        for event in window.events().drain() {
            match event {
                Event::KeyDown(Key::Escape) => window.die(),
                Event::KeyDown(key) => tracing::info!(%key, "key down"),
                Event::TextInput(c) => tracing::info!(%c, "typed"),
                Event::PointerDown(_) => tracing::info!(%event, "pointer down"),
                _ => {}
            }
            for (rect, _) in &mut shapes {
                *rect = rect.translate(Point::new(1, 0));
            }
        }

        for ((rect, _), bitmap) in shapes.iter().zip(&bitmaps) {
            window.to_draw(*rect, Arc::clone(bitmap));
        }
        window.draw();
    }

    tracing::info!(frames = frame, presents = handle.presents(), "window closed");
    Ok(())
}
