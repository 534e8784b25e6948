/// 2D rendering wrapper around tiny-skia.

use std::path::Path as FsPath;

use glam::Vec2;
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, Pixmap, Stroke, Transform};

use crate::config::WidgetConfig;
use crate::error::RenderError;
use crate::geometry::PathSet;
use crate::path::Path;
use crate::theme::Color;

/// How one path is painted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Style {
    Stroke { color: Color, width: f32 },
    Fill { color: Color },
}

/// The three styles the widget draws with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paints {
    pub track_filled: Style,
    pub track_remaining: Style,
    pub bubble: Style,
}

impl Paints {
    pub fn from_config(config: &WidgetConfig) -> Self {
        Self {
            track_filled: Style::Stroke {
                color: config.track_filled_color,
                width: config.stroke_width,
            },
            track_remaining: Style::Stroke {
                color: config.track_remaining_color,
                width: config.stroke_width,
            },
            bubble: Style::Fill {
                color: config.bubble_color,
            },
        }
    }
}

pub struct Renderer {
    pub pixmap: Pixmap,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        let pixmap = Pixmap::new(width, height).ok_or(RenderError::EmptySurface { width, height })?;
        Ok(Self { pixmap })
    }

    /// Replace the surface with a blank one of the new size.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        if width != self.width() || height != self.height() {
            *self = Self::new(width, height)?;
        }
        Ok(())
    }

    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(color.to_skia());
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Premultiplied RGBA of one pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap.pixel(x, y).map(|p| [p.red(), p.green(), p.blue(), p.alpha()])
    }

    pub fn save_png(&self, path: impl AsRef<FsPath>) -> Result<(), RenderError> {
        self.pixmap
            .save_png(path)
            .map_err(|e| RenderError::Png(e.to_string()))
    }

    pub fn draw_path(&mut self, path: &Path, style: Style, offset: Vec2) {
        let Some(path) = path.to_skia() else {
            return;
        };
        let transform = Transform::from_translate(offset.x, offset.y);

        match style {
            Style::Stroke { color, width } => {
                let mut paint = Paint::default();
                paint.set_color(color.to_skia());
                paint.anti_alias = true;

                let mut stroke = Stroke::default();
                stroke.width = width;
                stroke.line_cap = LineCap::Round;
                stroke.line_join = LineJoin::Round;

                self.pixmap.stroke_path(&path, &paint, &stroke, transform, None);
            }
            Style::Fill { color } => {
                let mut paint = Paint::default();
                paint.set_color(color.to_skia());
                paint.anti_alias = true;

                self.pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
            }
        }
    }

    /// Draw back to front: filled track, remaining track, then the bubble
    /// translated by `bubble_offset`.
    pub fn draw_path_set(&mut self, paths: &PathSet, paints: &Paints, bubble_offset: Vec2) {
        self.draw_path(&paths.track_filled, paints.track_filled, Vec2::ZERO);
        self.draw_path(&paths.track_remaining, paints.track_remaining, Vec2::ZERO);
        self.draw_path(&paths.bubble, paints.bubble, bubble_offset);
    }
}
