//! Cached vs. freshly rasterized buttons, and frame compositing.
//!
//! Run with: cargo bench --package quill_ui --bench button_cache

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quill_input::Pointer;
use quill_ui::{composite, Bitmap, DrawQueue, Orientation, Rect, Size, Ui};

fn declare_frame(ui: &mut Ui) {
    ui.layout(0, Orientation::Vertical, Rect::new(0, 0, 250, 600));
    for slot in 0..8 {
        black_box(ui.text_button(slot, "Button", None));
    }
    ui.end_frame();
}

fn benchmark_cached_frame(c: &mut Criterion) {
    let queue = DrawQueue::new();
    let mut ui = Ui::new(Pointer::new(), queue.clone());
    declare_frame(&mut ui);
    let _ = queue.take();

    c.bench_function("cached_frame_8_buttons", |b| {
        b.iter(|| {
            declare_frame(&mut ui);
            black_box(queue.take())
        });
    });
}

fn benchmark_invalidated_frame(c: &mut Criterion) {
    let queue = DrawQueue::new();
    let mut ui = Ui::new(Pointer::new(), queue.clone());

    c.bench_function("invalidated_frame_8_buttons", |b| {
        b.iter(|| {
            ui.layout(0, Orientation::Vertical, Rect::new(0, 0, 250, 600));
            ui.invalidate_elements();
            declare_frame(&mut ui);
            black_box(queue.take())
        });
    });
}

fn benchmark_composite(c: &mut Criterion) {
    let queue = DrawQueue::new();
    let mut ui = Ui::new(Pointer::new(), queue.clone());
    let mut canvas = Bitmap::new(Size::new(1280, 720));

    c.bench_function("composite_8_buttons", |b| {
        b.iter(|| {
            declare_frame(&mut ui);
            let ops = queue.take();
            black_box(composite(&mut canvas, &ops))
        });
    });
}

criterion_group!(benches, benchmark_cached_frame, benchmark_invalidated_frame, benchmark_composite);
criterion_main!(benches);
