/*!
# Galaxy 3D Camera

Lazily-evaluated camera transform cache for the Galaxy3D engine.

A camera holds translation, orientation and projection parameters and
derives the matrices a renderer needs (world, view, projection and the
combined view-projection). Mutators only raise dirty bits; each matrix is
recomputed on the first read after one of its inputs changed.

## Architecture

- **Camera**: generic cache over a projection model
- **ProjectionModel**: capability that builds the projection matrix
- **PerspectiveProjection** / **OrthographicProjection**: built-in models
- **DirtyFlags**: invalidation bits (World, View, Projection)
- **Frustum**: culling planes stored for collaborators
- **CameraUniform**: GPU upload layout of the matrices

## Example

```no_run
use galaxy_3d_camera::galaxy3d::camera::PerspectiveCamera;
use galaxy_3d_camera::glam::Vec3;

let mut camera = PerspectiveCamera::perspective(60.0, 16.0 / 9.0, 0.1, 1000.0)?;
camera.set_translation(Vec3::new(0.0, 2.0, 10.0));
camera.look_at(Vec3::ZERO)?;

let view_projection = *camera.view_projection();
# let _ = view_projection;
# Ok::<(), galaxy_3d_camera::galaxy3d::Error>(())
```
*/

// Internal modules
mod error;
pub mod camera;
pub mod log;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (functions and types; macros live at the crate root)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, set_max_severity, max_severity, enabled,
            log, log_detailed,
        };
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }
}

// Re-export math library at crate root
pub use glam;
