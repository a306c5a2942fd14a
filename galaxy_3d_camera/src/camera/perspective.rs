//! Perspective projection model and the `PerspectiveCamera` setters.
//!
//! Zoom narrows the field of view through its tangent:
//! `effective_fov = 2 * atan(tan(fov / 2) / zoom)`, so doubling the zoom
//! doubles image magnification instead of halving the angle.

use glam::Mat4;
use crate::error::Result;
use super::camera::Camera;
use super::projection::{ensure_clip_range, ensure_finite_matrix, ensure_positive, ProjectionModel};

const LOG_SOURCE: &str = "galaxy3d::PerspectiveProjection";

/// Default vertical field of view, in degrees.
pub const DEFAULT_FOV: f32 = 50.0;
/// Default width / height ratio.
pub const DEFAULT_ASPECT: f32 = 1.0;
/// Default near clip distance.
pub const DEFAULT_NEAR: f32 = 1e-6;
/// Default far clip distance.
pub const DEFAULT_FAR: f32 = 1e27;
/// Default zoom factor (no zoom).
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Camera with a perspective projection.
pub type PerspectiveCamera = Camera<PerspectiveProjection>;

/// Perspective projection parameters.
///
/// Every setter validates before storing, so a model that exists is
/// always buildable into a finite matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveProjection {
    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
    zoom: f32,
}

impl Default for PerspectiveProjection {
    fn default() -> Self {
        Self {
            fov: DEFAULT_FOV,
            aspect: DEFAULT_ASPECT,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl PerspectiveProjection {
    /// Create a perspective model with zoom 1.
    ///
    /// # Arguments
    ///
    /// * `fov` - Vertical field of view in degrees, in (0, 180)
    /// * `aspect` - Width / height, > 0
    /// * `near` - Near clip distance, > 0
    /// * `far` - Far clip distance, > near
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> Result<Self> {
        let mut projection = Self::default();
        projection.set_fov(fov)?;
        projection.set_aspect(aspect)?;
        projection.set_clip_planes(near, far)?;
        Ok(projection)
    }

    /// Same model with a zoom factor.
    pub fn with_zoom(mut self, zoom: f32) -> Result<Self> {
        self.set_zoom(zoom)?;
        Ok(self)
    }

    // ===== GETTERS =====

    /// Field of view in degrees, before zoom.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Width / height ratio.
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Near clip distance.
    pub fn near(&self) -> f32 {
        self.near
    }

    /// Far clip distance.
    pub fn far(&self) -> f32 {
        self.far
    }

    /// Zoom factor (1 = no zoom).
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Field of view actually used for the matrix, in degrees.
    pub fn effective_fov(&self) -> f32 {
        self.effective_fov_radians().to_degrees()
    }

    fn effective_fov_radians(&self) -> f32 {
        2.0 * ((self.fov.to_radians() * 0.5).tan() / self.zoom).atan()
    }

    // ===== SETTERS =====

    /// Set the vertical field of view in degrees, in (0, 180).
    pub fn set_fov(&mut self, fov: f32) -> Result<()> {
        ensure_positive(LOG_SOURCE, "fov", fov)?;
        if fov >= 180.0 {
            return Err(crate::camera_err!(LOG_SOURCE, InvalidParameter, "fov must be < 180 degrees, got {}", fov));
        }
        self.commit(Self { fov, ..*self })
    }

    /// Set the width / height ratio, > 0.
    pub fn set_aspect(&mut self, aspect: f32) -> Result<()> {
        ensure_positive(LOG_SOURCE, "aspect", aspect)?;
        self.commit(Self { aspect, ..*self })
    }

    /// Set the near distance; must stay below the current far distance.
    pub fn set_near(&mut self, near: f32) -> Result<()> {
        ensure_positive(LOG_SOURCE, "near", near)?;
        ensure_clip_range(LOG_SOURCE, near, self.far)?;
        self.commit(Self { near, ..*self })
    }

    /// Set the far distance; must stay above the current near distance.
    pub fn set_far(&mut self, far: f32) -> Result<()> {
        ensure_clip_range(LOG_SOURCE, self.near, far)?;
        self.commit(Self { far, ..*self })
    }

    /// Set both clip distances at once, for moves that would cross the
    /// current range one value at a time.
    pub fn set_clip_planes(&mut self, near: f32, far: f32) -> Result<()> {
        ensure_positive(LOG_SOURCE, "near", near)?;
        ensure_clip_range(LOG_SOURCE, near, far)?;
        self.commit(Self { near, far, ..*self })
    }

    /// Set the zoom factor, > 0. Values above 1 magnify.
    pub fn set_zoom(&mut self, zoom: f32) -> Result<()> {
        ensure_positive(LOG_SOURCE, "zoom", zoom)?;
        self.commit(Self { zoom, ..*self })
    }

    /// Store `candidate` only if its effective fov and matrix stay finite.
    fn commit(&mut self, candidate: Self) -> Result<()> {
        let fov = candidate.effective_fov_radians();
        if !fov.is_normal() {
            return Err(crate::camera_err!(
                LOG_SOURCE, DegenerateParameters,
                "effective fov {} rad is degenerate (fov {}, zoom {})", fov, candidate.fov, candidate.zoom
            ));
        }
        ensure_finite_matrix(LOG_SOURCE, &candidate, &candidate.update_projection())?;
        *self = candidate;
        Ok(())
    }
}

impl ProjectionModel for PerspectiveProjection {
    fn update_projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.effective_fov_radians(), self.aspect, self.near, self.far)
    }
}

// ===== CAMERA SETTERS (raise PROJECTION only) =====

impl Camera<PerspectiveProjection> {
    /// Create a perspective camera at the origin.
    pub fn perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Result<Self> {
        Ok(Self::new(PerspectiveProjection::new(fov, aspect, near, far)?))
    }

    /// Field of view in degrees, before zoom.
    pub fn fov(&self) -> f32 {
        self.projection_model().fov()
    }

    /// Width / height ratio.
    pub fn aspect(&self) -> f32 {
        self.projection_model().aspect()
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

    /// Field of view used for the projection matrix, in degrees.
    pub fn effective_fov(&self) -> f32 {
        self.projection_model().effective_fov()
    }

    /// Set the field of view in degrees.
    pub fn set_fov(&mut self, fov: f32) -> Result<()> {
        self.update_projection_model(|p| p.set_fov(fov))
    }

    /// Set the width / height ratio.
    pub fn set_aspect(&mut self, aspect: f32) -> Result<()> {
        self.update_projection_model(|p| p.set_aspect(aspect))
    }

    /// Set the aspect ratio from a viewport size in pixels.
    pub fn set_aspect_from_size(&mut self, width: u32, height: u32) -> Result<()> {
        if height == 0 {
            return Err(crate::camera_err!(LOG_SOURCE, InvalidParameter, "viewport height must be > 0 (width {})", width));
        }
        self.set_aspect(width as f32 / height as f32)
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
#[path = "perspective_tests.rs"]
mod tests;
