//! Raster surface owned by the renderer.
//!
//! Every paint overwrites the whole surface; there is no dirty-region tracking.

use tiny_skia::{FillRule, Paint, Pixmap, Transform};

use super::path::BalloonPath;
use crate::log::{debug, warn};
use crate::types::{Color, PixelScale, Size};

#[derive(Debug, Default)]
pub struct Surface {
    pixmap: Option<Pixmap>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Size the backing store for `logical` at `scale` and clear it.
    ///
    /// The pixmap is reused when the device extent is unchanged. Returns false when
    /// the extent is empty, in which case nothing can be painted.
    pub fn prepare(&mut self, logical: Size, scale: PixelScale) -> bool {
        let (width, height) = scale.surface_extent(logical);
        let reuse = self
            .pixmap
            .as_ref()
            .is_some_and(|p| p.width() == width && p.height() == height);

        if reuse {
            if let Some(pixmap) = self.pixmap.as_mut() {
                pixmap.fill(tiny_skia::Color::TRANSPARENT);
            }
            return true;
        }

        debug!(width, height, "allocating balloon surface");
        self.pixmap = Pixmap::new(width, height);
        if self.pixmap.is_none() {
            warn!(width, height, "empty balloon surface, skipping paint");
        }
        self.pixmap.is_some()
    }

    /// Fill `path` with a single color at a fixed alpha.
    pub fn fill(&mut self, path: &BalloonPath, color: Color, alpha: f32) {
        let Some(pixmap) = self.pixmap.as_mut() else {
            return;
        };
        let Some(skia_path) = path.to_skia() else {
            warn!("balloon path has no fillable area");
            return;
        };

        let mut paint = Paint::default();
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        paint.set_color_rgba8(color.r, color.g, color.b, a);
        paint.anti_alias = true;

        pixmap.fill_path(&skia_path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    pub fn pixmap(&self) -> Option<&Pixmap> {
        self.pixmap.as_ref()
    }

    /// Device-pixel extent, `(0, 0)` when unallocated
    pub fn extent(&self) -> (u32, u32) {
        self.pixmap.as_ref().map_or((0, 0), |p| (p.width(), p.height()))
    }

    /// Alpha of one device pixel, 0 outside the surface
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.pixmap
            .as_ref()
            .and_then(|p| p.pixel(x, y))
            .map_or(0, |px| px.alpha())
    }
}
