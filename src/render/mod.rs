//! Balloon rendering
//!
//! This module is organized into submodules:
//! - `defaults`: Default style constants
//! - `path`: Path model, SVG output and tiny-skia conversion
//! - `surface`: The raster surface the balloon is painted on

pub mod defaults;
pub mod path;
pub mod surface;

pub use path::{BalloonPath, PathCommand};
pub use surface::Surface;

use crate::config::BalloonStyle;
use crate::layout::Layout;
use crate::types::{Edge, PixelScale, PointerOffset, Size};

/// Complete input to the renderer, in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalloonGeometry {
    pub body: Size,
    pub edge: Edge,
    pub pointer_offset: PointerOffset,
    pub corner_radius: f64,
    pub pointer_base: f64,
    pub pointer_height: f64,
    pub scale: PixelScale,
}

impl BalloonGeometry {
    /// Geometry for painting a laid-out balloon onto its surface.
    ///
    /// The outline is one logical pixel short of the body on each axis so the
    /// anti-aliased right and bottom edges land on the surface.
    pub fn from_layout(layout: &Layout, style: &BalloonStyle, scale: PixelScale) -> Self {
        Self {
            body: Size::new(layout.body.width - 1.0, layout.body.height - 1.0),
            edge: layout.edge,
            pointer_offset: layout.pointer_offset,
            corner_radius: style.corner_radius,
            pointer_base: style.pointer_base,
            pointer_height: style.pointer_height,
            scale,
        }
    }
}

/// Build the balloon outline in device pixels.
///
/// The body rectangle gives up `pointer_height` on the pointer side; the triangle
/// fills that strip with its apex on the outer boundary.
pub fn balloon_path(geom: &BalloonGeometry) -> BalloonPath {
    let s = geom.scale;
    let w = s.px(geom.body.width);
    let h = s.px(geom.body.height);
    let tip = s.px(geom.pointer_height);
    let edge_len = if geom.edge.is_horizontal() { w } else { h };
    let base = s.px(geom.pointer_base).min(edge_len.max(0.0));
    let offset = geom.pointer_offset.raw();

    let (x, y, rw, rh) = match geom.edge {
        Edge::South => (0.0, tip, w, h - tip),
        Edge::North => (0.0, 0.0, w, h - tip),
        Edge::East => (tip, 0.0, w - tip, h),
        Edge::West => (0.0, 0.0, w - tip, h),
    };
    let r = s.px(geom.corner_radius).min(rw / 2.0).min(rh / 2.0).max(0.0);
    let path = round_rect(BalloonPath::new(), x, y, rw, rh, r);

    let center = (offset * edge_len).round();
    let path = match geom.edge {
        Edge::South => {
            let half = (base / 2.0).round();
            path.m(center, 0.0)
                .l(center + half, tip)
                .l(center - half, tip)
                .l(center, 0.0)
        }
        Edge::North => {
            let half = (base / 2.0).round();
            path.m(center, h)
                .l(center + half, h - tip)
                .l(center - half, h - tip)
                .l(center, h)
        }
        Edge::East => path
            .m(0.0, center)
            .l(tip, (center - base / 2.0).round())
            .l(tip, (center + base / 2.0).round())
            .l(0.0, center),
        Edge::West => path
            .m(w, center)
            .l(w - tip, (center - base / 2.0).round())
            .l(w - tip, (center + base / 2.0).round())
            .l(w, center),
    };
    path.z()
}

/// Rounded rectangle, clockwise from just right of the top-left corner
fn round_rect(path: BalloonPath, x: f64, y: f64, w: f64, h: f64, r: f64) -> BalloonPath {
    let (x2, y2) = (x + w, y + h);
    path.m(x + r, y)
        .l(x2 - r, y)
        .arc(r, x2 - r, y + r, x2, y + r)
        .l(x2, y2 - r)
        .arc(r, x2 - r, y2 - r, x2 - r, y2)
        .l(x + r, y2)
        .arc(r, x + r, y2 - r, x, y2 - r)
        .l(x, y + r)
        .arc(r, x + r, y + r, x + r, y)
        .z()
}

/// Paint the balloon, replacing whatever the surface held before.
///
/// `canvas` is the logical size of the surface; `geom.body` is the outline inside it.
pub fn paint(surface: &mut Surface, canvas: Size, geom: &BalloonGeometry, style: &BalloonStyle) -> BalloonPath {
    let path = balloon_path(geom);
    if surface.prepare(canvas, geom.scale) {
        surface.fill(&path, style.fill, style.alpha);
    }
    path
}
