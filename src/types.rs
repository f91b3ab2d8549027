//! Strongly-typed geometry primitives for balloon layout.
//!
//! All coordinates are logical (CSS) pixels unless a type says otherwise.
//! Device pixels only appear after a [`PixelScale`] has been applied.

use std::fmt;
use std::str::FromStr;

use glam::{DVec2, dvec2};

use crate::errors::TooltipError;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl NumericError {
    /// Check that a value is finite.
    pub fn check_finite(val: f64) -> Result<f64, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(val)
        }
    }

    /// Check that a value is finite and not negative.
    pub fn check_non_negative(val: f64) -> Result<f64, NumericError> {
        let val = Self::check_finite(val)?;
        if val < 0.0 { Err(NumericError::Negative) } else { Ok(val) }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Width and height in logical pixels
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    pub const fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }

    /// Length of the side the pointer travels along for `edge`.
    pub fn along(&self, edge: Edge) -> f64 {
        if edge.is_horizontal() { self.width } else { self.height }
    }
}

/// Axis-aligned rectangle, measured fresh from the current layout pass.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Rect { left, top, width, height }
    }

    /// Create a Rect with validation (rejects NaN/infinite fields)
    pub fn try_new(left: f64, top: f64, width: f64, height: f64) -> Result<Self, TooltipError> {
        let field = |name, v| NumericError::check_finite(v).map_err(|e| TooltipError::dimension(name, v, e));
        Ok(Rect {
            left: field("rect left", left)?,
            top: field("rect top", top)?,
            width: field("rect width", width)?,
            height: field("rect height", height)?,
        })
    }

    pub fn from_origin_size(origin: DVec2, size: Size) -> Self {
        Rect::new(origin.x, origin.y, size.width, size.height)
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn origin(&self) -> DVec2 {
        dvec2(self.left, self.top)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> DVec2 {
        dvec2(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Inclusive point containment: points on the border count as inside.
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.left && p.x <= self.right() && p.y >= self.top && p.y <= self.bottom()
    }

    pub fn is_finite(&self) -> bool {
        self.left.is_finite() && self.top.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// Where the balloon sits relative to its anchor.
///
/// The pointer protrudes from the balloon side that faces the anchor:
/// `South` places the balloon below the anchor with the pointer on its upper edge,
/// `East` places it to the right with the pointer on its left edge, and so on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Edge {
    North,
    #[default]
    South,
    East,
    West,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::North, Edge::South, Edge::East, Edge::West];

    /// True when the pointer lies on a horizontal side of the body.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Edge::North | Edge::South)
    }

    /// Name used by host attributes (`tooltip-position`).
    pub fn attribute_name(self) -> &'static str {
        match self {
            Edge::North => "top",
            Edge::South => "bottom",
            Edge::East => "right",
            Edge::West => "left",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attribute_name())
    }
}

/// Returned when an edge name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown edge: {0:?}")]
pub struct UnknownEdge(pub String);

impl FromStr for Edge {
    type Err = UnknownEdge;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "top" | "n" => Ok(Edge::North),
            "south" | "bottom" | "s" => Ok(Edge::South),
            "east" | "right" | "e" => Ok(Edge::East),
            "west" | "left" | "w" => Ok(Edge::West),
            _ => Err(UnknownEdge(s.to_string())),
        }
    }
}

/// Fraction along the pointer edge where the tip sits, always in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct PointerOffset(f64);

impl PointerOffset {
    pub const START: PointerOffset = PointerOffset(0.0);
    pub const CENTER: PointerOffset = PointerOffset(0.5);
    pub const END: PointerOffset = PointerOffset(1.0);

    /// Clamp into `[0, 1]`. NaN falls back to the center.
    pub fn clamped(val: f64) -> Self {
        if val.is_nan() {
            PointerOffset::CENTER
        } else {
            PointerOffset(val.clamp(0.0, 1.0))
        }
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl Default for PointerOffset {
    fn default() -> Self {
        PointerOffset::CENTER
    }
}

impl fmt::Display for PointerOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Device pixels per logical pixel on the raster surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelScale(f64);

impl PixelScale {
    pub const ONE: PixelScale = PixelScale(1.0);

    /// Create a PixelScale with validation (rejects NaN, infinite, zero, negative)
    pub fn try_new(ratio: f64) -> Result<Self, NumericError> {
        let ratio = NumericError::check_finite(ratio)?;
        if ratio == 0.0 {
            Err(NumericError::Zero)
        } else if ratio < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(PixelScale(ratio))
        }
    }

    /// Snap a platform device pixel ratio to 1x or 2x.
    ///
    /// Ratios above 1.6 render at 2x; anything else, including unusable values, at 1x.
    pub fn snapped(device_ratio: f64) -> Self {
        if device_ratio > 1.6 { PixelScale(2.0) } else { PixelScale::ONE }
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Scale a logical length to device pixels.
    #[inline]
    pub fn px(self, logical: f64) -> f64 {
        logical * self.0
    }

    /// Device-pixel extent of the surface backing `size` (rounded up).
    pub fn surface_extent(self, size: Size) -> (u32, u32) {
        let dim = |v: f64| {
            let v = (v * self.0).ceil();
            if v.is_finite() && v > 0.0 { v.min(u32::MAX as f64) as u32 } else { 0 }
        };
        (dim(size.width), dim(size.height))
    }
}

impl Default for PixelScale {
    fn default() -> Self {
        PixelScale::ONE
    }
}

impl TryFrom<f64> for PixelScale {
    type Error = TooltipError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        PixelScale::try_new(value).map_err(|_| TooltipError::InvalidScale { value })
    }
}

/// Opaque RGB fill color; alpha is carried separately by the style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Returned when a color string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color: {0:?}")]
pub struct InvalidColor(pub String);

impl FromStr for Color {
    type Err = InvalidColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || InvalidColor(s.to_string());
        match trimmed.to_ascii_lowercase().as_str() {
            "black" => return Ok(Color::BLACK),
            "white" => return Ok(Color::WHITE),
            _ => {}
        }
        let hex = trimmed.strip_prefix('#').ok_or_else(err)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map_err(|_| err());
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        match hex.len() {
            // #rgb expands each digit: #abc -> #aabbcc
            3 => Ok(Color::rgb(nibble(0)? * 17, nibble(1)? * 17, nibble(2)? * 17)),
            6 => Ok(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
            _ => Err(err()),
        }
    }
}
