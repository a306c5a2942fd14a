/// Camera: lazily-evaluated transform cache.
///
/// The Camera owns a translation, an orientation and an up reference, and
/// derives the matrices a renderer needs from them: world, view, projection
/// and the combined view-projection. Mutators only raise dirty bits; no
/// matrix math runs until a getter is read. Each getter validates its own
/// matrix (recomputing it if its bits are set), clears the bits it owns and
/// returns the cached value.
///
/// Getters take `&mut self`: reading has side effects on the cache, so a
/// camera shared between threads needs external locking (e.g. a `Mutex`).

use glam::{Mat4, Quat, Vec3};
use crate::error::Result;
use crate::{camera_debug, camera_err, camera_trace};
use super::dirty_flags::DirtyFlags;
use super::frustum::Frustum;
use super::projection::ProjectionModel;
use super::uniform::CameraUniform;

const LOG_SOURCE: &str = "galaxy3d::Camera";

/// Squared-length threshold under which a vector or quaternion is treated
/// as zero, and a look-at direction as parallel to the up reference.
const DEGENERATE_EPSILON: f32 = 1e-12;

/// Camera with cached world/view/projection matrices.
///
/// Generic over its projection model; see `PerspectiveCamera` and
/// `OrthographicCamera` for the two built-in variants.
#[derive(Debug, Clone)]
pub struct Camera<P: ProjectionModel> {
    translation: Vec3,
    orientation: Quat,
    up: Vec3,
    world_matrix: Mat4,
    view_matrix: Mat4,
    projection_matrix: Mat4,
    view_projection_matrix: Mat4,
    frustum: Frustum,
    dirty: DirtyFlags,
    projection_model: P,
}

impl<P: ProjectionModel + Default> Default for Camera<P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<P: ProjectionModel> Camera<P> {
    /// Create a camera at the origin with identity orientation and +Y up.
    ///
    /// Every matrix starts dirty; the first read of each getter computes it.
    pub fn new(projection_model: P) -> Self {
        camera_debug!(LOG_SOURCE, "Camera created (up = {:?})", Vec3::Y);
        Self::build(projection_model, Vec3::Y)
    }

    /// Create a camera with a custom up reference for `look_at`.
    ///
    /// The up reference is normalized and cannot be changed afterwards.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `up` is zero-length or not finite.
    pub fn with_up(projection_model: P, up: Vec3) -> Result<Self> {
        if !up.is_finite() || up.length_squared() < DEGENERATE_EPSILON {
            return Err(camera_err!(LOG_SOURCE, InvalidParameter, "up reference must be a finite non-zero vector, got {:?}", up));
        }
        let up = up.normalize();
        camera_debug!(LOG_SOURCE, "Camera created (up = {:?})", up);
        Ok(Self::build(projection_model, up))
    }

    fn build(projection_model: P, up: Vec3) -> Self {
        Self {
            translation: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            up,
            world_matrix: Mat4::IDENTITY,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
            view_projection_matrix: Mat4::IDENTITY,
            frustum: Frustum::default(),
            dirty: DirtyFlags::all(),
            projection_model,
        }
    }

    // ===== CACHED MATRICES =====

    /// World matrix (camera-to-world): translation * orientation, unit scale.
    pub fn world(&mut self) -> &Mat4 {
        if self.dirty.contains(DirtyFlags::WORLD) {
            self.world_matrix = Mat4::from_scale_rotation_translation(
                Vec3::ONE,
                self.orientation,
                self.translation,
            );
            self.dirty.remove(DirtyFlags::WORLD);
            self.dirty.insert(DirtyFlags::COMBINED);
            camera_trace!(LOG_SOURCE, "World matrix recomputed");
        }
        &self.world_matrix
    }

    /// View matrix (world-to-camera), the inverse of the world matrix.
    ///
    /// Recomputing it validates the world matrix first.
    pub fn view(&mut self) -> &Mat4 {
        if self.dirty.intersects(DirtyFlags::TRANSFORM) {
            let world = *self.world();
            self.view_matrix = world.inverse();
            self.dirty.remove(DirtyFlags::VIEW);
            self.dirty.insert(DirtyFlags::COMBINED);
            camera_trace!(LOG_SOURCE, "View matrix recomputed");
        }
        &self.view_matrix
    }

    /// Projection matrix (camera-to-clip), built by the projection model.
    pub fn projection(&mut self) -> &Mat4 {
        if self.dirty.contains(DirtyFlags::PROJECTION) {
            self.projection_matrix = self.projection_model.update_projection();
            self.dirty.remove(DirtyFlags::PROJECTION);
            self.dirty.insert(DirtyFlags::COMBINED);
            camera_trace!(LOG_SOURCE, "Projection matrix recomputed");
        }
        &self.projection_matrix
    }

    /// Combined view-projection matrix (view applied first, then projection).
    ///
    /// Staleness is sampled once on entry, before the view and projection
    /// getters clear their bits, so a stale read performs exactly one
    /// combination pass.
    pub fn view_projection(&mut self) -> &Mat4 {
        if !self.dirty.is_empty() {
            let view = *self.view();
            let projection = *self.projection();
            self.view_projection_matrix = projection * view;
            self.dirty.remove(DirtyFlags::COMBINED);
            camera_trace!(LOG_SOURCE, "View-projection matrix recombined");
        }
        &self.view_projection_matrix
    }

    // ===== TRANSFORM STATE =====

    /// Camera position in world space.
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Set the camera position.
    pub fn set_translation(&mut self, translation: Vec3) {
        self.translation = translation;
        self.dirty.insert(DirtyFlags::TRANSFORM);
    }

    /// Camera rotation in world space (unit quaternion).
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Set the camera rotation. The quaternion is normalized before storing.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `orientation` is zero-length or not finite.
    pub fn set_orientation(&mut self, orientation: Quat) -> Result<()> {
        if !orientation.is_finite() || orientation.length_squared() < DEGENERATE_EPSILON {
            return Err(camera_err!(LOG_SOURCE, InvalidParameter, "orientation must be a finite non-zero quaternion, got {:?}", orientation));
        }
        self.orientation = orientation.normalize();
        self.dirty.insert(DirtyFlags::TRANSFORM);
        Ok(())
    }

    /// Up reference used by `look_at`.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Move along `axis` expressed in the camera's local frame.
    ///
    /// `axis` is rotated by the current orientation, scaled by `distance`
    /// and added to the translation. Orientation is unchanged.
    pub fn translate(&mut self, axis: Vec3, distance: f32) {
        self.translation += self.orientation * (axis * distance);
        self.dirty.insert(DirtyFlags::TRANSFORM);
    }

    /// Rotate by `angle` radians around `axis` in the camera's local frame.
    ///
    /// The new rotation is composed after the existing orientation
    /// (`orientation * rotation`), then renormalized.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `axis` is zero-length or not finite, or if
    /// `angle` is not finite.
    pub fn rotate(&mut self, axis: Vec3, angle: f32) -> Result<()> {
        if !axis.is_finite() || axis.length_squared() < DEGENERATE_EPSILON {
            return Err(camera_err!(LOG_SOURCE, InvalidParameter, "rotation axis must be a finite non-zero vector, got {:?}", axis));
        }
        if !angle.is_finite() {
            return Err(camera_err!(LOG_SOURCE, InvalidParameter, "rotation angle must be finite, got {}", angle));
        }
        let rotation = Quat::from_axis_angle(axis.normalize(), angle);
        self.orientation = (self.orientation * rotation).normalize();
        self.dirty.insert(DirtyFlags::TRANSFORM);
        Ok(())
    }

    /// Turn the camera to face `point`, keeping its translation.
    ///
    /// The orientation is extracted from a right-handed look-at matrix
    /// built from the current translation, `point` and the up reference.
    /// The camera's local -Z then points at `point`.
    ///
    /// # Errors
    ///
    /// `DegenerateParameters` if `point` coincides with the camera position
    /// or lies along the up reference; the camera is left unchanged.
    pub fn look_at(&mut self, point: Vec3) -> Result<()> {
        let direction = point - self.translation;
        if !direction.is_finite() || direction.length_squared() < DEGENERATE_EPSILON {
            return Err(camera_err!(LOG_SOURCE, DegenerateParameters, "look-at target {:?} coincides with the camera position", point));
        }
        if direction.normalize().cross(self.up).length_squared() < DEGENERATE_EPSILON {
            return Err(camera_err!(LOG_SOURCE, DegenerateParameters, "look-at direction {:?} is parallel to the up reference {:?}", direction, self.up));
        }

        // look_at_rh is world-to-camera; the camera's orientation is its inverse
        let look = Mat4::look_at_rh(self.translation, point, self.up);
        self.orientation = Quat::from_mat4(&look).conjugate().normalize();
        self.dirty.insert(DirtyFlags::TRANSFORM);
        Ok(())
    }

    /// Force-invalidate the transform matrices.
    ///
    /// `true` raises World and View regardless of the current state, for
    /// callers that change what the camera depends on through means it
    /// cannot observe (e.g. a parent transform). `false` is a no-op: it
    /// never clears a bit.
    pub fn set_dirty(&mut self, dirty: bool) {
        if dirty {
            self.dirty.insert(DirtyFlags::TRANSFORM);
            camera_trace!(LOG_SOURCE, "Transform forcibly invalidated");
        }
    }

    // ===== DIRECTIONS =====

    /// Local -Z in world space (the direction the camera looks at).
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Local +X in world space.
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    /// Local +Y in world space. Not the same as the `up()` reference.
    pub fn up_direction(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    // ===== PROJECTION MODEL =====

    /// Current projection model.
    pub fn projection_model(&self) -> &P {
        &self.projection_model
    }

    /// Mutate the projection model and mark the projection dirty.
    ///
    /// The closure works on a copy; if it fails, the model and dirty bits
    /// are left untouched. Every projection parameter setter goes through
    /// here, so it raises only the Projection bit.
    pub fn update_projection_model<F>(&mut self, update: F) -> Result<()>
    where
        P: Clone,
        F: FnOnce(&mut P) -> Result<()>,
    {
        let mut model = self.projection_model.clone();
        update(&mut model)?;
        self.projection_model = model;
        self.dirty.insert(DirtyFlags::PROJECTION);
        Ok(())
    }

    // ===== FRUSTUM =====

    /// Stored frustum. Never recomputed by the camera.
    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    /// Store a frustum computed by the caller.
    pub fn set_frustum(&mut self, frustum: Frustum) {
        self.frustum = frustum;
    }

    // ===== GPU HAND-OFF =====

    /// Validate every matrix and pack them for upload.
    pub fn uniform(&mut self) -> CameraUniform {
        let view_projection = *self.view_projection();
        CameraUniform::new(
            &self.view_matrix,
            &self.projection_matrix,
            &view_projection,
            self.translation,
        )
    }

    #[cfg(test)]
    pub(crate) fn dirty_flags(&self) -> DirtyFlags {
        self.dirty
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
