//! Camera module: lazily-evaluated camera transform cache.
//!
//! A `Camera` owns position/orientation state and a projection model, and
//! derives world, view, projection and view-projection matrices on demand,
//! recomputing each only when its inputs changed since the last read.
//! Cameras are owned and driven by the caller; nothing here is global.

mod camera;
mod dirty_flags;
mod frustum;
mod orthographic;
mod perspective;
mod projection;
mod uniform;

pub use camera::Camera;
pub use dirty_flags::DirtyFlags;
pub use frustum::{
    Frustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use orthographic::{OrthographicCamera, OrthographicProjection};
pub use perspective::{PerspectiveCamera, PerspectiveProjection};
pub use projection::ProjectionModel;
pub use uniform::CameraUniform;

/// Default values for the perspective model.
pub mod perspective_defaults {
    pub use super::perspective::{
        DEFAULT_ASPECT, DEFAULT_FAR, DEFAULT_FOV, DEFAULT_NEAR, DEFAULT_ZOOM,
    };
}

/// Default values for the orthographic model.
pub mod orthographic_defaults {
    pub use super::orthographic::{DEFAULT_FAR, DEFAULT_NEAR, DEFAULT_ZOOM};
}
