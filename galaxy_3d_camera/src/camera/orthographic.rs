//! Orthographic projection model and the `OrthographicCamera` setters.
//!
//! Zoom multiplies each box extent, so a zoom of 2 shows a box twice as
//! wide and tall. Near and far are never scaled.

use glam::Mat4;
use crate::error::Result;
use super::camera::Camera;
use super::projection::{ensure_clip_range, ensure_extent, ensure_finite_matrix, ensure_positive, ProjectionModel};

const LOG_SOURCE: &str = "galaxy3d::OrthographicProjection";

/// Default near clip distance.
pub const DEFAULT_NEAR: f32 = 1e-6;
/// Default far clip distance.
pub const DEFAULT_FAR: f32 = 1e27;
/// Default zoom factor (no zoom).
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Camera with an orthographic projection.
pub type OrthographicCamera = Camera<OrthographicProjection>;

/// Orthographic projection parameters: a view-space box plus clip range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthographicProjection {
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    near: f32,
    far: f32,
    zoom: f32,
}

impl Default for OrthographicProjection {
    /// Unit box [-1, 1] x [-1, 1].
    fn default() -> Self {
        Self {
            left: -1.0,
            right: 1.0,
            top: 1.0,
            bottom: -1.0,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl OrthographicProjection {
    /// Create an orthographic model with zoom 1.
    pub fn new(left: f32, right: f32, top: f32, bottom: f32, near: f32, far: f32) -> Result<Self> {
        let mut projection = Self::default();
        projection.set_bounds(left, right, top, bottom)?;
        projection.set_clip_planes(near, far)?;
        Ok(projection)
    }

    /// Box of `width` x `height` centered on the view axis.
    pub fn from_size(width: f32, height: f32, near: f32, far: f32) -> Result<Self> {
        ensure_positive(LOG_SOURCE, "width", width)?;
        ensure_positive(LOG_SOURCE, "height", height)?;
        let half_width = width * 0.5;
        let half_height = height * 0.5;
        Self::new(-half_width, half_width, half_height, -half_height, near, far)
    }

    /// Same model with a zoom factor.
    pub fn with_zoom(mut self, zoom: f32) -> Result<Self> {
        self.set_zoom(zoom)?;
        Ok(self)
    }

    // ===== GETTERS =====

    /// Left extent, before zoom.
    pub fn left(&self) -> f32 {
        self.left
    }

    /// Right extent, before zoom.
    pub fn right(&self) -> f32 {
        self.right
    }

    /// Top extent, before zoom.
    pub fn top(&self) -> f32 {
        self.top
    }

    /// Bottom extent, before zoom.
    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    /// Near clip distance. Never scaled by zoom.
    pub fn near(&self) -> f32 {
        self.near
    }

    /// Far clip distance. Never scaled by zoom.
    pub fn far(&self) -> f32 {
        self.far
    }

    /// Zoom factor (1 = no zoom).
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Box used for the matrix: `[left, right, top, bottom]`, each scaled by zoom.
    pub fn effective_bounds(&self) -> [f32; 4] {
        [
            self.left * self.zoom,
            self.right * self.zoom,
            self.top * self.zoom,
            self.bottom * self.zoom,
        ]
    }

    // ===== SETTERS =====

    /// Set the left extent; must differ from the right one.
    pub fn set_left(&mut self, left: f32) -> Result<()> {
        ensure_extent(LOG_SOURCE, "left", left, "right", self.right)?;
        self.commit(Self { left, ..*self })
    }

    /// Set the right extent; must differ from the left one.
    pub fn set_right(&mut self, right: f32) -> Result<()> {
        ensure_extent(LOG_SOURCE, "left", self.left, "right", right)?;
        self.commit(Self { right, ..*self })
    }

    /// Set the top extent; must differ from the bottom one.
    pub fn set_top(&mut self, top: f32) -> Result<()> {
        ensure_extent(LOG_SOURCE, "bottom", self.bottom, "top", top)?;
        self.commit(Self { top, ..*self })
    }

    /// Set the bottom extent; must differ from the top one.
    pub fn set_bottom(&mut self, bottom: f32) -> Result<()> {
        ensure_extent(LOG_SOURCE, "bottom", bottom, "top", self.top)?;
        self.commit(Self { bottom, ..*self })
    }

    /// Set all four extents at once.
    pub fn set_bounds(&mut self, left: f32, right: f32, top: f32, bottom: f32) -> Result<()> {
        ensure_extent(LOG_SOURCE, "left", left, "right", right)?;
        ensure_extent(LOG_SOURCE, "bottom", bottom, "top", top)?;
        self.commit(Self { left, right, top, bottom, ..*self })
    }

    /// Set the near distance; must stay below the current far distance.
    pub fn set_near(&mut self, near: f32) -> Result<()> {
        ensure_clip_range(LOG_SOURCE, near, self.far)?;
        self.commit(Self { near, ..*self })
    }

    /// Set the far distance; must stay above the current near distance.
    pub fn set_far(&mut self, far: f32) -> Result<()> {
        ensure_clip_range(LOG_SOURCE, self.near, far)?;
        self.commit(Self { far, ..*self })
    }

    /// Set both clip distances at once. Near may be negative.
    pub fn set_clip_planes(&mut self, near: f32, far: f32) -> Result<()> {
        ensure_clip_range(LOG_SOURCE, near, far)?;
        self.commit(Self { near, far, ..*self })
    }

    /// Set the zoom factor, > 0. Values above 1 show a larger box.
    pub fn set_zoom(&mut self, zoom: f32) -> Result<()> {
        ensure_positive(LOG_SOURCE, "zoom", zoom)?;
        self.commit(Self { zoom, ..*self })
    }

    /// Store `candidate` only if its zoomed box and clip range keep a
    /// finite non-zero size and its matrix stays finite.
    fn commit(&mut self, candidate: Self) -> Result<()> {
        let [left, right, top, bottom] = candidate.effective_bounds();
        let width = right - left;
        let height = top - bottom;
        let depth = candidate.far - candidate.near;
        if !(width.is_normal() && height.is_normal() && depth.is_normal()) {
            return Err(crate::camera_err!(
                LOG_SOURCE, DegenerateParameters,
                "zoomed box {:?} x [{}, {}] has a zero or overflowing size (zoom {})",
                [left, right, top, bottom], candidate.near, candidate.far, candidate.zoom
            ));
        }
        ensure_finite_matrix(LOG_SOURCE, &candidate, &candidate.update_projection())?;
        *self = candidate;
        Ok(())
    }
}

impl ProjectionModel for OrthographicProjection {
    fn update_projection(&self) -> Mat4 {
        let [left, right, top, bottom] = self.effective_bounds();
        Mat4::orthographic_rh(left, right, bottom, top, self.near, self.far)
    }
}

// ===== CAMERA SETTERS (raise PROJECTION only) =====

/// `Camera::right()` is the local +X direction, so the right extent is
/// read through `projection_model().right()`.
impl Camera<OrthographicProjection> {
    /// Create an orthographic camera at the origin.
    pub fn orthographic(left: f32, right: f32, top: f32, bottom: f32, near: f32, far: f32) -> Result<Self> {
        Ok(Self::new(OrthographicProjection::new(left, right, top, bottom, near, far)?))
    }

    /// Left extent, before zoom.
    pub fn left(&self) -> f32 {
        self.projection_model().left()
    }

    /// Top extent, before zoom.
    pub fn top(&self) -> f32 {
        self.projection_model().top()
    }

    /// Bottom extent, before zoom.
    pub fn bottom(&self) -> f32 {
        self.projection_model().bottom()
    }

    /// Near clip distance.
    pub fn near(&self) -> f32 {
        self.projection_model().near()
    }

    /// Far clip distance.
    pub fn far(&self) -> f32 {
        self.projection_model().far()
    }

    /// Zoom factor (1 = no zoom).
    pub fn zoom(&self) -> f32 {
        self.projection_model().zoom()
    }

    /// Box used for the projection matrix, `[left, right, top, bottom]`.
    pub fn effective_bounds(&self) -> [f32; 4] {
        self.projection_model().effective_bounds()
    }

    /// Set the left extent.
    pub fn set_left(&mut self, left: f32) -> Result<()> {
        self.update_projection_model(|p| p.set_left(left))
    }

    /// Set the right extent.
    pub fn set_right(&mut self, right: f32) -> Result<()> {
        self.update_projection_model(|p| p.set_right(right))
    }

    /// Set the top extent.
    pub fn set_top(&mut self, top: f32) -> Result<()> {
        self.update_projection_model(|p| p.set_top(top))
    }

    /// Set the bottom extent.
    pub fn set_bottom(&mut self, bottom: f32) -> Result<()> {
        self.update_projection_model(|p| p.set_bottom(bottom))
    }

    /// Set all four extents at once.
    pub fn set_bounds(&mut self, left: f32, right: f32, top: f32, bottom: f32) -> Result<()> {
        self.update_projection_model(|p| p.set_bounds(left, right, top, bottom))
    }

    /// Set the near clip distance.
    pub fn set_near(&mut self, near: f32) -> Result<()> {
        self.update_projection_model(|p| p.set_near(near))
    }

    /// Set the far clip distance.
    pub fn set_far(&mut self, far: f32) -> Result<()> {
        self.update_projection_model(|p| p.set_far(far))
    }

    /// Set both clip distances at once.
    pub fn set_clip_planes(&mut self, near: f32, far: f32) -> Result<()> {
        self.update_projection_model(|p| p.set_clip_planes(near, far))
    }

    /// Set the zoom factor.
    pub fn set_zoom(&mut self, zoom: f32) -> Result<()> {
        self.update_projection_model(|p| p.set_zoom(zoom))
    }
}

#[cfg(test)]
#[path = "orthographic_tests.rs"]
mod tests;
