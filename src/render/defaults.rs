//! Default balloon style (logical pixels)

use crate::types::{Color, Edge};

pub const CORNER_RADIUS: f64 = 5.0;
pub const POINTER_HEIGHT: f64 = 5.0;
pub const POINTER_BASE: f64 = 10.0;
pub const EDGE: Edge = Edge::South;
pub const FILL: Color = Color::BLACK;
pub const FILL_ALPHA: f32 = 0.75;

/// Candidates inspected per hover, nearest first
pub const MAX_DEPTH: usize = 3;

/// Content style of the default measurer
pub const FONT_SIZE: f64 = 10.0;
pub const PADDING: f64 = 5.0;
pub const LINE_HEIGHT: f64 = 1.2;
