//! Vector paths
//!
//! A small, renderer-independent path model. Geometry is built here so it can
//! be inspected and compared in tests, then converted to a `tiny_skia::Path`
//! at draw time.
//!
//! Arcs follow the oval/start/sweep form: angles are degrees measured from the
//! positive x axis in y-down screen space, so positive sweeps run clockwise on
//! screen. An arc that does not start at the current point is preceded by an
//! implicit straight line to its start.

use glam::Vec2;
use serde::Serialize;
use tiny_skia::PathBuilder;

/// Axis-aligned rectangle given by its edges.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Oval {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Oval {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new((self.left + self.right) / 2.0, (self.top + self.bottom) / 2.0)
    }

    pub fn radii(&self) -> Vec2 {
        Vec2::new((self.right - self.left) / 2.0, (self.bottom - self.top) / 2.0)
    }

    /// Point on the ellipse inscribed in this rectangle at `degrees`.
    pub fn point_at(&self, degrees: f32) -> Vec2 {
        let (sin, cos) = degrees.to_radians().sin_cos();
        self.center() + self.radii() * Vec2::new(cos, sin)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum PathCommand {
    MoveTo(Vec2),
    LineTo(Vec2),
    ArcTo {
        oval: Oval,
        start_angle: f32,
        sweep_angle: f32,
    },
    Close,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::MoveTo(Vec2::new(x, y)));
    }

    pub fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::LineTo(Vec2::new(x, y)));
    }

    pub fn arc_to(&mut self, oval: Oval, start_angle: f32, sweep_angle: f32) {
        self.commands.push(PathCommand::ArcTo {
            oval,
            start_angle,
            sweep_angle,
        });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn contour_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::MoveTo(_)))
            .count()
    }

    pub fn arc_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::ArcTo { .. }))
            .count()
    }

    /// True when the last contour ends with `Close`.
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    pub fn start_point(&self) -> Option<Vec2> {
        self.commands.iter().find_map(|c| match c {
            PathCommand::MoveTo(p) => Some(*p),
            _ => None,
        })
    }

    /// Pen position after the last command. `Close` returns to the contour
    /// start.
    pub fn end_point(&self) -> Option<Vec2> {
        let mut contour_start = None;
        let mut current = None;
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    contour_start = Some(p);
                    current = Some(p);
                }
                PathCommand::LineTo(p) => current = Some(p),
                PathCommand::ArcTo {
                    oval,
                    start_angle,
                    sweep_angle,
                } => current = Some(oval.point_at(start_angle + sweep_angle)),
                PathCommand::Close => current = contour_start,
            }
        }
        current
    }

    /// Flattened list of explicit points: move/line targets and arc endpoints.
    pub fn points(&self) -> Vec<Vec2> {
        let mut points = Vec::new();
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => points.push(p),
                PathCommand::ArcTo {
                    oval,
                    start_angle,
                    sweep_angle,
                } => {
                    points.push(oval.point_at(start_angle));
                    points.push(oval.point_at(start_angle + sweep_angle));
                }
                PathCommand::Close => {}
            }
        }
        points
    }

    /// Convert to a tiny-skia path. Arcs become cubic segments of at most 90°.
    pub fn to_skia(&self) -> Option<tiny_skia::Path> {
        let mut pb = PathBuilder::new();
        let mut current: Option<Vec2> = None;
        let mut contour_start: Option<Vec2> = None;

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    pb.move_to(p.x, p.y);
                    current = Some(p);
                    contour_start = Some(p);
                }
                PathCommand::LineTo(p) => {
                    if current.is_none() {
                        pb.move_to(p.x, p.y);
                        contour_start = Some(p);
                    } else {
                        pb.line_to(p.x, p.y);
                    }
                    current = Some(p);
                }
                PathCommand::ArcTo {
                    oval,
                    start_angle,
                    sweep_angle,
                } => {
                    let start = oval.point_at(start_angle);
                    match current {
                        None => {
                            pb.move_to(start.x, start.y);
                            contour_start = Some(start);
                        }
                        Some(p) if p.distance_squared(start) > f32::EPSILON => {
                            pb.line_to(start.x, start.y);
                        }
                        Some(_) => {}
                    }
                    append_arc(&mut pb, oval, start_angle, sweep_angle);
                    current = Some(oval.point_at(start_angle + sweep_angle));
                }
                PathCommand::Close => {
                    pb.close();
                    current = contour_start;
                }
            }
        }
        pb.finish()
    }
}

fn append_arc(pb: &mut PathBuilder, oval: Oval, start_angle: f32, sweep_angle: f32) {
    if sweep_angle == 0.0 {
        return;
    }
    let center = oval.center();
    let radii = oval.radii();
    let segments = (sweep_angle.abs() / 90.0).ceil().max(1.0) as usize;
    let step = (sweep_angle / segments as f32).to_radians();
    let k = 4.0 / 3.0 * (step / 4.0).tan();

    let mut a0 = start_angle.to_radians();
    for _ in 0..segments {
        let a1 = a0 + step;
        let (s0, c0) = a0.sin_cos();
        let (s1, c1) = a1.sin_cos();
        let p0 = center + radii * Vec2::new(c0, s0);
        let p1 = center + radii * Vec2::new(c1, s1);
        let ctrl0 = p0 + radii * Vec2::new(-s0, c0) * k;
        let ctrl1 = p1 - radii * Vec2::new(-s1, c1) * k;
        pb.cubic_to(ctrl0.x, ctrl0.y, ctrl1.x, ctrl1.y, p1.x, p1.y);
        a0 = a1;
    }
}
