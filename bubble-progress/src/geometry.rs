//! Track and bubble geometry
//!
//! Pure functions from `(progress, width, height, padding)` to paths. All
//! positions are computed in integer pixels with truncating division and only
//! converted to `f32` when placed, so identical inputs give identical paths.
//!
//! `width` is the x coordinate where the track ends (surface width minus the
//! right padding); `padding` is where it starts. Track arithmetic is done in
//! `i64` so any `u32` surface fits.

use glam::Vec2;
use serde::Serialize;

use crate::path::{Oval, Path};

/// Bubble outline dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BubbleShape {
    pub width: i32,
    pub height: i32,
    pub corner_radius: i32,
}

impl BubbleShape {
    pub fn arrow_width(&self) -> i32 {
        self.width / 3
    }

    pub fn arrow_height(&self) -> i32 {
        self.arrow_width() / 2
    }

    /// Arrow tip, in bubble-local coordinates.
    pub fn tip(&self) -> Vec2 {
        Vec2::new((self.width / 2) as f32, self.height as f32)
    }
}

impl Default for BubbleShape {
    fn default() -> Self {
        Self {
            width: 85,
            height: 70,
            corner_radius: 8,
        }
    }
}

/// The three paths drawn by the widget.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PathSet {
    /// From the split point to the track end.
    pub track_filled: Path,
    /// From the track start to the split point.
    pub track_remaining: Path,
    /// Bubble outline in bubble-local coordinates.
    pub bubble: Path,
    /// Shared endpoint of both track segments.
    pub split: Vec2,
    pub bubble_shape: BubbleShape,
}

impl PathSet {
    /// Translation placing the bubble's arrow tip `gap` pixels above the
    /// split point.
    pub fn bubble_offset(&self, gap: f32) -> Vec2 {
        self.split - self.bubble_shape.tip() - Vec2::new(0.0, gap)
    }
}

/// x coordinate of the split point.
pub fn split_x(progress: i32, width: i64, padding: i64) -> i64 {
    padding.max(i64::from(progress) * width / 100)
}

/// Vertical offset of the split point: a triangle peaking at 50%.
pub fn delta_y(progress: i32, width: i64) -> i64 {
    let progress = i64::from(progress);
    if progress <= 50 {
        (progress * width / 6) / 50
    } else {
        ((100 - progress) * width / 6) / 50
    }
}

pub fn split_point(progress: i32, width: i64, height: i64, padding: i64) -> Vec2 {
    Vec2::new(
        split_x(progress, width, padding) as f32,
        (height / 2 + delta_y(progress, width)) as f32,
    )
}

pub fn track_filled(progress: i32, width: i64, height: i64, padding: i64) -> Path {
    let split = split_point(progress, width, height, padding);
    let mut path = Path::new();
    path.move_to(split.x, split.y);
    path.line_to(width as f32, (height / 2) as f32);
    path
}

pub fn track_remaining(progress: i32, width: i64, height: i64, padding: i64) -> Path {
    let split = split_point(progress, width, height, padding);
    let mut path = Path::new();
    path.move_to(padding as f32, (height / 2) as f32);
    path.line_to(split.x, split.y);
    path
}

/// Rounded rectangle with a downward arrow centred on its bottom edge,
/// traced from the arrow's left base anticlockwise on screen.
pub fn bubble(shape: BubbleShape) -> Path {
    let w = shape.width;
    let h = shape.height;
    let r = shape.corner_radius;
    let aw = shape.arrow_width();
    let ah = shape.arrow_height();
    let body_bottom = h - ah;

    let mut path = Path::new();

    // arrow
    path.move_to((w / 2 - aw / 2) as f32, body_bottom as f32);
    path.line_to((w / 2) as f32, h as f32);
    path.line_to((w / 2 + aw / 2) as f32, body_bottom as f32);

    // bottom-right
    path.line_to((w - r) as f32, body_bottom as f32);
    path.arc_to(oval(w - 2 * r, body_bottom - 2 * r, w, body_bottom), 90.0, -90.0);

    // top-right
    path.line_to(w as f32, ah as f32);
    path.arc_to(oval(w - 2 * r, 0, w, 2 * r), 0.0, -90.0);

    // top-left
    path.line_to(r as f32, 0.0);
    path.arc_to(oval(0, 0, 2 * r, 2 * r), 270.0, -90.0);

    // bottom-left
    path.line_to(0.0, (body_bottom - r) as f32);
    path.arc_to(oval(0, body_bottom - 2 * r, 2 * r, body_bottom), 180.0, -90.0);

    path.close();
    path
}

fn oval(left: i32, top: i32, right: i32, bottom: i32) -> Oval {
    Oval::new(left as f32, top as f32, right as f32, bottom as f32)
}

/// Build all three paths for one frame.
pub fn build_paths(
    progress: i32,
    width: i64,
    height: i64,
    padding: i64,
    shape: BubbleShape,
) -> PathSet {
    PathSet {
        track_filled: track_filled(progress, width, height, padding),
        track_remaining: track_remaining(progress, width, height, padding),
        bubble: bubble(shape),
        split: split_point(progress, width, height, padding),
        bubble_shape: shape,
    }
}
