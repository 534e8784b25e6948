use std::time::Duration;

use bubble_progress::{ProgressDownload, Renderer, Widget, WidgetConfig, WidgetError};

const FRAME: Duration = Duration::from_millis(16);

/// Host loop in miniature: tick, redraw on request, until settled.
fn run_frames(widget: &mut ProgressDownload, renderer: &mut Renderer) -> usize {
    let mut draws = 0;
    while widget.is_animating() {
        widget.tick(FRAME);
        if widget.take_redraw_request() && widget.on_draw(renderer) {
            draws += 1;
        }
    }
    draws
}

#[test]
fn animates_through_intermediate_values() {
    let mut widget = ProgressDownload::new();
    let mut renderer = Renderer::new(600, 200).unwrap();
    widget.on_resize(600, 200);

    widget.set_percentage(80).unwrap();
    let mut seen = Vec::new();
    while widget.is_animating() {
        if widget.tick(FRAME) {
            seen.push(widget.progress());
        }
    }
    assert!(seen.len() > 2, "{seen:?}");
    assert_eq!(seen.last(), Some(&80));
    assert!(seen.windows(2).all(|w| w[0] < w[1]));

    widget.set_percentage(20).unwrap();
    assert!(run_frames(&mut widget, &mut renderer) > 0);
    assert_eq!(widget.progress(), 20);
}

#[test]
fn works_through_trait_object() {
    let mut widget: Box<dyn Widget> = Box::new(ProgressDownload::new());
    let mut renderer = Renderer::new(300, 100).unwrap();

    assert!(!widget.on_draw(&mut renderer));
    widget.on_resize(300, 100);
    assert!(widget.on_draw(&mut renderer));

    assert_eq!(widget.set_value(-1), Err(WidgetError::InvalidArgument { value: -1 }));
    widget.set_value(100).unwrap();
    let mut changed = false;
    for _ in 0..200 {
        changed |= widget.tick(FRAME);
    }
    assert!(changed);
}

#[test]
fn bubble_follows_the_marker() {
    let mut widget = ProgressDownload::new();
    let mut renderer = Renderer::new(600, 240).unwrap();
    widget.on_resize(600, 240);
    widget.set_percentage(50).unwrap();
    run_frames(&mut widget, &mut renderer);
    widget.on_draw(&mut renderer);

    // split at (275, 211); the bubble body ends 24px above it
    let paths = widget.paths().unwrap();
    let x = paths.split.x as u32;
    let y = paths.split.y as u32 - 40;
    assert_eq!(renderer.pixel(x, y), Some([255, 255, 255, 255]));
    assert_eq!(renderer.pixel(x, 20), Some([0xEC, 0x57, 0x45, 255]));
}

#[test]
fn custom_config_changes_the_look() {
    let config = WidgetConfig::from_json_str(
        r##"{ "background_color": "#000000", "padding": 10, "bubble_follows_marker": false }"##,
    )
    .unwrap();
    let mut widget = ProgressDownload::with_config(config).unwrap();
    let mut renderer = Renderer::new(200, 120).unwrap();
    widget.on_resize(200, 120);
    widget.on_draw(&mut renderer);

    // bubble pinned at the origin
    assert_eq!(renderer.pixel(40, 30), Some([255, 255, 255, 255]));
    assert_eq!(renderer.pixel(150, 5), Some([0, 0, 0, 255]));
    assert_eq!(widget.paths().unwrap().track_remaining.points()[0].x, 10.0);
}
