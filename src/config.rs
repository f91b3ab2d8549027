//! Style knobs and component configuration.
//!
//! Every instance carries its own copy; nothing here is global.

use crate::errors::TooltipError;
use crate::render::defaults;
use crate::types::{Color, Edge, NumericError};

/// Static balloon style, in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalloonStyle {
    pub corner_radius: f64,
    /// Width of the pointer triangle where it meets the body
    pub pointer_base: f64,
    /// Distance the pointer protrudes from the body
    pub pointer_height: f64,
    /// Edge used when neither the caller nor the candidate names one
    pub default_edge: Edge,
    pub fill: Color,
    pub alpha: f32,
}

impl Default for BalloonStyle {
    fn default() -> Self {
        Self {
            corner_radius: defaults::CORNER_RADIUS,
            pointer_base: defaults::POINTER_BASE,
            pointer_height: defaults::POINTER_HEIGHT,
            default_edge: defaults::EDGE,
            fill: defaults::FILL,
            alpha: defaults::FILL_ALPHA,
        }
    }
}

impl BalloonStyle {
    pub fn corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn pointer_base(mut self, base: f64) -> Self {
        self.pointer_base = base;
        self
    }

    pub fn pointer_height(mut self, height: f64) -> Self {
        self.pointer_height = height;
        self
    }

    pub fn default_edge(mut self, edge: Edge) -> Self {
        self.default_edge = edge;
        self
    }

    pub fn fill(mut self, fill: Color, alpha: f32) -> Self {
        self.fill = fill;
        self.alpha = alpha;
        self
    }

    /// Reject knobs that would poison layout math (NaN, infinite, negative).
    pub fn validate(&self) -> Result<(), TooltipError> {
        let knobs = [
            ("corner radius", self.corner_radius),
            ("pointer base", self.pointer_base),
            ("pointer height", self.pointer_height),
        ];
        for (name, value) in knobs {
            NumericError::check_non_negative(value)
                .map_err(|reason| TooltipError::dimension(name, value, reason))?;
        }
        let alpha = f64::from(self.alpha);
        NumericError::check_non_negative(alpha)
            .map_err(|reason| TooltipError::dimension("fill alpha", alpha, reason))?;
        Ok(())
    }
}

/// How the layout engine treats the containing rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Place the balloon directly against the anchor, ignoring the container.
    AbsoluteAnchor,
    /// Clamp the balloon inside the container and re-aim the pointer at the anchor.
    #[default]
    FitInto,
}

/// Per-instance tooltip configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipConfig {
    pub style: BalloonStyle,
    pub mode: LayoutMode,
    /// Hover candidates inspected before giving up (default: 3).
    pub max_depth: usize,
    /// Round the platform pixel ratio to 1x/2x instead of using it verbatim.
    pub snap_pixel_ratio: bool,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            style: BalloonStyle::default(),
            mode: LayoutMode::default(),
            max_depth: defaults::MAX_DEPTH,
            snap_pixel_ratio: true,
        }
    }
}

impl TooltipConfig {
    pub fn style(mut self, style: BalloonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn mode(mut self, mode: LayoutMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn snap_pixel_ratio(mut self, snap: bool) -> Self {
        self.snap_pixel_ratio = snap;
        self
    }
}
