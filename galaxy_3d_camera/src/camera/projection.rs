//! ProjectionModel: capability every camera carries to build its
//! camera-to-clip matrix.
//!
//! The camera is generic over this trait, so a camera without a
//! projection strategy cannot be constructed.

use glam::Mat4;
use crate::camera_err;
use crate::error::Result;

/// Builds a projection matrix from model-specific parameters.
///
/// `Camera` calls `update_projection` only while its `PROJECTION` bit is
/// set, and raises that bit whenever the model is mutated through
/// `Camera::update_projection_model` or a variant setter. Implementations
/// must therefore be pure functions of their own parameters.
pub trait ProjectionModel {
    /// Build the camera-to-clip matrix for the current parameters.
    fn update_projection(&self) -> Mat4;
}

// ===== PARAMETER VALIDATION (shared by projection models) =====

pub(crate) fn ensure_finite(source: &str, name: &str, value: f32) -> Result<()> {
    if !value.is_finite() {
        return Err(camera_err!(source, InvalidParameter, "{} must be finite, got {}", name, value));
    }
    Ok(())
}

pub(crate) fn ensure_positive(source: &str, name: &str, value: f32) -> Result<()> {
    ensure_finite(source, name, value)?;
    if value <= 0.0 {
        return Err(camera_err!(source, InvalidParameter, "{} must be > 0, got {}", name, value));
    }
    Ok(())
}

/// `near < far`, both finite.
pub(crate) fn ensure_clip_range(source: &str, near: f32, far: f32) -> Result<()> {
    ensure_finite(source, "near", near)?;
    ensure_finite(source, "far", far)?;
    if near >= far {
        return Err(camera_err!(
            source, DegenerateParameters, "near ({}) must be < far ({})", near, far
        ));
    }
    Ok(())
}

/// Matrix built from a candidate model contains only finite values.
///
/// Each parameter can be valid on its own while their combination (e.g. a
/// huge zoom on a wide box) overflows once the matrix is assembled.
pub(crate) fn ensure_finite_matrix(source: &str, model: &impl std::fmt::Debug, matrix: &Mat4) -> Result<()> {
    if !matrix.is_finite() {
        return Err(camera_err!(
            source, DegenerateParameters, "{:?} produces a non-finite projection matrix", model
        ));
    }
    Ok(())
}

/// Two opposite box extents, both finite and not equal.
pub(crate) fn ensure_extent(source: &str, low_name: &str, low: f32, high_name: &str, high: f32) -> Result<()> {
    ensure_finite(source, low_name, low)?;
    ensure_finite(source, high_name, high)?;
    if low == high {
        return Err(camera_err!(
            source, DegenerateParameters, "{} and {} must differ, both are {}", low_name, high_name, low
        ));
    }
    Ok(())
}
