//! Balloon path model.
//!
//! The path is built with a small fluent API (`m`, `l`, `arc`, `z`) and can be
//! emitted as SVG path data or converted into a tiny-skia path for filling.
//! Corner arcs are always quarter circles, so they convert to a single cubic each.

use std::fmt::Write as _;

use glam::{DVec2, dvec2};

/// Cubic control-point distance for a quarter circle of unit radius
const KAPPA: f64 = 0.552_284_749_830_793_4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
    /// Clockwise quarter circle from the current point to `to` around `center`
    QuarterArc { to: DVec2, center: DVec2, radius: f64 },
    Close,
}

impl PathCommand {
    /// End point of the command, if it moves the pen
    pub fn end_point(&self) -> Option<DVec2> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::QuarterArc { to, .. } => Some(to),
            PathCommand::Close => None,
        }
    }
}

/// A filled balloon outline, in device pixels
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BalloonPath {
    commands: Vec<PathCommand>,
}

impl BalloonPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn m(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::MoveTo(dvec2(x, y)));
        self
    }

    pub fn l(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::LineTo(dvec2(x, y)));
        self
    }

    /// Quarter arc to `(x, y)` around `(cx, cy)`. A zero radius degrades to a line.
    pub fn arc(mut self, radius: f64, cx: f64, cy: f64, x: f64, y: f64) -> Self {
        let to = dvec2(x, y);
        if radius > 0.0 {
            self.commands.push(PathCommand::QuarterArc { to, center: dvec2(cx, cy), radius });
        } else {
            self.commands.push(PathCommand::LineTo(to));
        }
        self
    }

    pub fn z(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Pen positions of each subpath, split at every `MoveTo`.
    pub fn subpaths(&self) -> Vec<Vec<DVec2>> {
        let mut out: Vec<Vec<DVec2>> = Vec::new();
        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) => out.push(vec![*p]),
                PathCommand::Close => {}
                other => {
                    if let (Some(current), Some(p)) = (out.last_mut(), other.end_point()) {
                        current.push(p);
                    }
                }
            }
        }
        out
    }

    /// Every subpath ends where it started and is followed by a close.
    pub fn is_closed(&self) -> bool {
        let returns_home = self
            .subpaths()
            .iter()
            .all(|pts| pts.first() == pts.last());
        let closes = self.commands.iter().filter(|c| matches!(c, PathCommand::Close)).count();
        let moves = self.commands.iter().filter(|c| matches!(c, PathCommand::MoveTo(_))).count();
        returns_home && moves > 0 && closes == moves
    }

    /// SVG path data (`d` attribute). Arcs become `A` commands with sweep flag 1.
    pub fn to_svg_data(&self) -> String {
        let mut d = String::new();
        for cmd in &self.commands {
            if !d.is_empty() {
                d.push(' ');
            }
            // Writing into a String cannot fail
            let _ = match *cmd {
                PathCommand::MoveTo(p) => write!(d, "M{},{}", p.x, p.y),
                PathCommand::LineTo(p) => write!(d, "L{},{}", p.x, p.y),
                PathCommand::QuarterArc { to, radius, .. } => {
                    write!(d, "A{radius},{radius} 0 0 1 {},{}", to.x, to.y)
                }
                PathCommand::Close => write!(d, "Z"),
            };
        }
        d
    }

    /// Convert into a tiny-skia path. Returns `None` for paths with no area to fill.
    pub fn to_skia(&self) -> Option<tiny_skia::Path> {
        let mut pb = tiny_skia::PathBuilder::new();
        let mut pen = DVec2::ZERO;
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    pb.move_to(p.x as f32, p.y as f32);
                    pen = p;
                }
                PathCommand::LineTo(p) => {
                    pb.line_to(p.x as f32, p.y as f32);
                    pen = p;
                }
                PathCommand::QuarterArc { to, center, .. } => {
                    let c1 = pen + (to - center) * KAPPA;
                    let c2 = to + (pen - center) * KAPPA;
                    pb.cubic_to(c1.x as f32, c1.y as f32, c2.x as f32, c2.y as f32, to.x as f32, to.y as f32);
                    pen = to;
                }
                PathCommand::Close => pb.close(),
            }
        }
        pb.finish()
    }
}
