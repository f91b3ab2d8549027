//! Speech-balloon tooltips.
//!
//! A balloon is a rounded rectangle fused with a triangular pointer that aims at an
//! anchor rectangle. [`layout`](mod@layout) decides where the balloon goes and where along its
//! edge the pointer sits; [`render`](mod@render) turns that into a path and paints it on a
//! raster surface at device-pixel resolution; [`Tooltip`] ties both together
//! behind `show`/`hide`/`hover`.
//!
//! ```
//! use balloontip::{Edge, Rect, Tooltip, TooltipConfig};
//!
//! let mut tooltip = Tooltip::new(TooltipConfig::default())?;
//! tooltip.set_device_pixel_ratio(2.0)?;
//!
//! let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
//! let button = Rect::new(120.0, 40.0, 64.0, 24.0);
//! let session = tooltip.show("Save changes", &button, Some(Edge::South), viewport)?;
//! assert_eq!(session.layout.tooltip_top(), button.bottom());
//! # Ok::<(), balloontip::TooltipError>(())
//! ```

pub mod config;
pub mod errors;
pub mod layout;
pub mod log;
pub mod measure;
pub mod render;
pub mod tooltip;
pub mod types;

pub use config::{BalloonStyle, LayoutMode, TooltipConfig};
pub use errors::TooltipError;
pub use layout::{Layout, LayoutRequest};
pub use measure::{Content, ProportionalMeasure, TextMeasure};
pub use render::{BalloonGeometry, BalloonPath, PathCommand, Surface, balloon_path};
pub use tooltip::{Anchor, HasTooltipData, HoverOutcome, Tooltip, TooltipSession, TooltipTarget};
pub use types::{Color, Edge, NumericError, PixelScale, PointerOffset, Rect, Size};
