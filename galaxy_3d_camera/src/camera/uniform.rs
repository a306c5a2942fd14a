//! GPU-ready snapshot of a camera's matrices.

use glam::{Mat4, Vec3};

/// Camera data laid out for a uniform buffer.
///
/// Matrices are column-major, matching glam and WGSL/GLSL `mat4x4<f32>`.
/// 208 bytes, 16-byte aligned members.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// World-to-camera matrix.
    pub view: [[f32; 4]; 4],
    /// Camera-to-clip matrix.
    pub projection: [[f32; 4]; 4],
    /// World-to-clip matrix (projection * view).
    pub view_projection: [[f32; 4]; 4],
    /// Camera world-space position, w = 1.
    pub position: [f32; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new(&Mat4::IDENTITY, &Mat4::IDENTITY, &Mat4::IDENTITY, Vec3::ZERO)
    }
}

impl CameraUniform {
    /// Pack already-validated matrices.
    pub fn new(view: &Mat4, projection: &Mat4, view_projection: &Mat4, position: Vec3) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            view_projection: view_projection.to_cols_array_2d(),
            position: position.extend(1.0).to_array(),
        }
    }

    /// Raw bytes for a buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
#[path = "uniform_tests.rs"]
mod tests;
