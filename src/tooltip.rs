//! The tooltip component: one balloon, at most one visible session.
//!
//! Show and hide run to completion synchronously. A new show replaces the
//! active session outright; hiding an already hidden tooltip does nothing.

use glam::DVec2;

use crate::config::TooltipConfig;
use crate::errors::TooltipError;
use crate::layout::{Layout, LayoutRequest, layout};
use crate::log::{debug, warn};
use crate::measure::{Content, ProportionalMeasure, TextMeasure};
use crate::render::{BalloonGeometry, BalloonPath, Surface, paint};
use crate::types::{Edge, PixelScale, Rect};

/// Something the balloon can point at
pub trait Anchor {
    /// Current bounding rectangle, or `None` when it cannot be resolved
    fn bounding_rect(&self) -> Option<Rect>;
}

impl Anchor for Rect {
    fn bounding_rect(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl Anchor for Option<Rect> {
    fn bounding_rect(&self) -> Option<Rect> {
        *self
    }
}

/// Candidate elements that may declare tooltip content.
pub trait HasTooltipData: Anchor {
    fn content(&self) -> Option<Content>;

    /// Preferred edge; `None` uses the configured default
    fn edge(&self) -> Option<Edge> {
        None
    }
}

/// Adapter for hosts that describe candidates with string attributes
/// (`tooltip` and `tooltip-position`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipTarget {
    pub rect: Option<Rect>,
    pub content: Option<Content>,
    pub edge: Option<Edge>,
}

impl TooltipTarget {
    pub fn new(rect: Rect, content: impl Into<Content>) -> Self {
        Self { rect: Some(rect), content: Some(content.into()), edge: None }
    }

    /// Element without tooltip data
    pub fn plain(rect: Rect) -> Self {
        Self { rect: Some(rect), ..Self::default() }
    }

    pub fn with_edge(mut self, edge: Edge) -> Self {
        self.edge = Some(edge);
        self
    }

    /// Build from raw attribute values. Unknown positions fall back to the default edge.
    pub fn from_attributes(rect: Option<Rect>, tooltip: Option<&str>, position: Option<&str>) -> Self {
        let edge = position.and_then(|p| match p.parse::<Edge>() {
            Ok(edge) => Some(edge),
            Err(err) => {
                warn!(%err, "ignoring tooltip position");
                None
            }
        });
        Self {
            rect,
            content: tooltip.map(|t| Content::Markup(t.to_string())),
            edge,
        }
    }
}

impl Anchor for TooltipTarget {
    fn bounding_rect(&self) -> Option<Rect> {
        self.rect
    }
}

impl HasTooltipData for TooltipTarget {
    fn content(&self) -> Option<Content> {
        self.content.clone()
    }

    fn edge(&self) -> Option<Edge> {
        self.edge
    }
}

/// State of the visible tooltip. Replaced wholesale on each show.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipSession {
    pub content: Content,
    /// Anchor snapshot; pointer movement inside it keeps the session alive
    pub anchor: Rect,
    pub layout: Layout,
    pub geometry: BalloonGeometry,
    /// Outline as painted, in device pixels
    pub path: BalloonPath,
}

/// Result of feeding a pointer position to [`Tooltip::hover`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverOutcome {
    /// Pointer is still over the active anchor; nothing changed
    StillInside,
    /// A candidate carried content and is now shown
    Shown,
    /// No candidate within the depth limit carried content
    Nothing,
}

type VisibilityListener = Box<dyn FnMut(bool)>;

pub struct Tooltip<M = ProportionalMeasure> {
    config: TooltipConfig,
    measure: M,
    scale: PixelScale,
    session: Option<TooltipSession>,
    surface: Surface,
    visible: bool,
    listeners: Vec<VisibilityListener>,
}

impl Tooltip<ProportionalMeasure> {
    pub fn new(config: TooltipConfig) -> Result<Self, TooltipError> {
        Self::with_measure(config, ProportionalMeasure::default())
    }
}

impl<M: TextMeasure> Tooltip<M> {
    /// Create a hidden tooltip that measures content with `measure`.
    pub fn with_measure(config: TooltipConfig, measure: M) -> Result<Self, TooltipError> {
        config.style.validate()?;
        Ok(Self {
            config,
            measure,
            scale: PixelScale::ONE,
            session: None,
            surface: Surface::new(),
            visible: false,
            listeners: Vec::new(),
        })
    }

    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    pub fn pixel_scale(&self) -> PixelScale {
        self.scale
    }

    /// Adopt the platform's device pixel ratio for subsequent paints.
    pub fn set_device_pixel_ratio(&mut self, ratio: f64) -> Result<(), TooltipError> {
        let exact = PixelScale::try_from(ratio)?;
        self.scale = if self.config.snap_pixel_ratio { PixelScale::snapped(ratio) } else { exact };
        debug!(ratio, scale = self.scale.raw(), "pixel scale updated");
        Ok(())
    }

    pub fn session(&self) -> Option<&TooltipSession> {
        self.session.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The raster surface holding the last painted balloon
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Subscribe to visibility transitions (host transition styling).
    pub fn on_visibility(&mut self, listener: impl FnMut(bool) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Toggle visibility, notifying listeners only when the state changes.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        for listener in &mut self.listeners {
            listener(visible);
        }
    }

    /// Lay out and paint `content` against `anchor`, replacing any active session.
    ///
    /// `container` bounds the content width and, in fit-into mode, the balloon itself.
    pub fn show<A>(
        &mut self,
        content: impl Into<Content>,
        anchor: &A,
        edge: Option<Edge>,
        container: Rect,
    ) -> Result<&TooltipSession, TooltipError>
    where
        A: Anchor + ?Sized,
    {
        let rect = anchor.bounding_rect().ok_or(TooltipError::MissingAnchor)?;
        let rect = Rect::try_new(rect.left, rect.top, rect.width, rect.height)?;
        let container = Rect::try_new(container.left, container.top, container.width, container.height)?;

        let content = content.into();
        let style = self.config.style;
        let edge = edge.unwrap_or(style.default_edge);
        let measured = self.measure.measure(&content, container.width);

        let request = LayoutRequest { anchor: rect, container, content: measured, edge };
        let layout = layout(&request, self.config.mode, &style);
        let geometry = BalloonGeometry::from_layout(&layout, &style, self.scale);
        let path = paint(&mut self.surface, layout.body, &geometry, &style);

        if self.session.is_some() {
            debug!("replacing active tooltip session");
        }
        self.set_visible(true);
        Ok(&*self.session.insert(TooltipSession { content, anchor: rect, layout, geometry, path }))
    }

    /// End the active session. Calling it while hidden is a no-op.
    pub fn hide(&mut self) {
        if self.session.take().is_some() {
            debug!("tooltip hidden");
        }
        self.set_visible(false);
    }

    /// Clicking the balloon dismisses it.
    pub fn click(&mut self) {
        self.hide();
    }

    /// React to pointer movement over a ranked candidate chain (nearest first).
    ///
    /// Only the first `max_depth` candidates are inspected. Staying inside the
    /// active anchor keeps the current balloon; anything else hides it before the
    /// chain is searched.
    pub fn hover<'a, C, I>(
        &mut self,
        pointer: DVec2,
        candidates: I,
        container: Rect,
    ) -> Result<HoverOutcome, TooltipError>
    where
        C: HasTooltipData + ?Sized + 'a,
        I: IntoIterator<Item = &'a C>,
    {
        if self.session.as_ref().is_some_and(|s| s.anchor.contains(pointer)) {
            return Ok(HoverOutcome::StillInside);
        }
        self.hide();

        for candidate in candidates.into_iter().take(self.config.max_depth) {
            let Some(content) = candidate.content().filter(|c| !c.is_empty()) else {
                continue;
            };
            let edge = candidate.edge();
            self.show(content, candidate, edge, container)?;
            return Ok(HoverOutcome::Shown);
        }
        Ok(HoverOutcome::Nothing)
    }
}
