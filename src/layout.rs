//! Layout engine: where the balloon goes and where its pointer aims.
//!
//! The engine only knows rectangles. It never touches the raster surface; the
//! renderer receives the resulting body size and pointer offset and nothing else.

use glam::{DVec2, dvec2};

use crate::config::{BalloonStyle, LayoutMode};
use crate::log::{debug, warn};
use crate::types::{Edge, PointerOffset, Rect, Size};

/// Everything the engine needs for one layout pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRequest {
    /// Element the tooltip points at, in container-local coordinates
    pub anchor: Rect,
    /// Box the balloon must stay inside (FitInto mode only)
    pub container: Rect,
    /// Natural size of the rendered content
    pub content: Size,
    pub edge: Edge,
}

/// Result of a layout pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Top-left corner of the balloon body
    pub origin: DVec2,
    pub edge: Edge,
    pub pointer_offset: PointerOffset,
    /// Balloon size including the pointer protrusion
    pub body: Size,
    /// Where the content sits inside the body
    pub content_offset: DVec2,
    /// True when the body was pushed back inside the container
    pub clamped: bool,
}

impl Layout {
    #[inline]
    pub fn tooltip_left(&self) -> f64 {
        self.origin.x
    }

    #[inline]
    pub fn tooltip_top(&self) -> f64 {
        self.origin.y
    }

    /// Bounding rectangle of the balloon, pointer included
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.body)
    }
}

/// Compute balloon position, body size and pointer offset.
pub fn layout(request: &LayoutRequest, mode: LayoutMode, style: &BalloonStyle) -> Layout {
    let LayoutRequest { anchor, container, content, edge } = *request;
    let tip = style.pointer_height;
    let anchor_center = anchor.center();

    // `along` is the axis the pointer slides on; `across` is fixed by the edge.
    let (along_center, extent, lo, span) = if edge.is_horizontal() {
        (anchor_center.x, content.width, container.left, container.width)
    } else {
        (anchor_center.y, content.height, container.top, container.height)
    };
    let across = match edge {
        Edge::South => anchor.bottom(),
        Edge::North => anchor.top - content.height - tip,
        Edge::East => anchor.right(),
        Edge::West => anchor.left - content.width - tip,
    };

    let candidate = along_center - extent / 2.0;
    let (along, clamped) = match mode {
        LayoutMode::AbsoluteAnchor => (candidate, false),
        LayoutMode::FitInto => clamp_axis(candidate, extent, lo, span),
    };

    let pointer_offset = if clamped {
        if extent > span {
            warn!(%edge, extent, span, "content larger than container, pointer may miss anchor");
        }
        aim_pointer(along_center, along, extent)
    } else {
        PointerOffset::CENTER
    };

    let (origin, body, content_offset) = match edge {
        Edge::North | Edge::South => (
            dvec2(along, across),
            Size::new(content.width, content.height + tip),
            if edge == Edge::South { dvec2(0.0, tip) } else { DVec2::ZERO },
        ),
        Edge::East | Edge::West => (
            dvec2(across, along),
            Size::new(content.width + tip, content.height),
            if edge == Edge::East { dvec2(tip, 0.0) } else { DVec2::ZERO },
        ),
    };

    debug!(%edge, x = origin.x, y = origin.y, offset = pointer_offset.raw(), clamped, "balloon layout");

    Layout { origin, edge, pointer_offset, body, content_offset, clamped }
}

/// Keep `[pos, pos + extent]` inside `[lo, lo + span]`. The low side is checked
/// first; content longer than the span can still hang past `lo`.
fn clamp_axis(pos: f64, extent: f64, lo: f64, span: f64) -> (f64, bool) {
    if pos < lo {
        (lo, true)
    } else if pos + extent > lo + span {
        (lo + span - extent, true)
    } else {
        (pos, false)
    }
}

/// Fraction of `extent` at which `target` lies when the body starts at `start`.
fn aim_pointer(target: f64, start: f64, extent: f64) -> PointerOffset {
    if extent == 0.0 {
        return PointerOffset::CENTER;
    }
    PointerOffset::clamped((target - start) / extent)
}
