//! Integration tests for the camera transform cache
//!
//! Drives cameras through the public galaxy3d API only.
//!
//! Run with: cargo test --test camera_integration_tests

use galaxy_3d_camera::galaxy3d::camera::{
    Camera, CameraUniform, Frustum, OrthographicCamera, PerspectiveCamera, PerspectiveProjection,
    ProjectionModel,
};
use galaxy_3d_camera::galaxy3d::Error;
use galaxy_3d_camera::glam::{Mat4, Quat, Vec3};
use std::sync::{Arc, Mutex};

const EPSILON: f32 = 1e-4;

fn compose(translation: Vec3, orientation: Quat) -> Mat4 {
    Mat4::from_scale_rotation_translation(Vec3::ONE, orientation, translation)
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_integration_default_camera_is_identity() {
    let mut camera = PerspectiveCamera::default();

    assert_eq!(camera.translation(), Vec3::ZERO);
    assert_eq!(camera.orientation(), Quat::IDENTITY);
    assert_eq!(*camera.world(), Mat4::IDENTITY);
    assert!(camera.view().abs_diff_eq(Mat4::IDENTITY, EPSILON));
}

#[test]
fn test_integration_perspective_zoom_narrows_fov() {
    let mut camera = PerspectiveCamera::perspective(90.0, 1.0, 0.1, 100.0).unwrap();
    camera.set_zoom(2.0).unwrap();

    let expected_fov = (2.0 * (45.0f32.to_radians().tan() / 2.0).atan()).to_degrees();
    assert!((camera.effective_fov() - expected_fov).abs() < 1e-3);
    assert!((camera.effective_fov() - 53.13).abs() < 1e-2);

    let expected = Mat4::perspective_rh(expected_fov.to_radians(), 1.0, 0.1, 100.0);
    assert!(camera.projection().abs_diff_eq(expected, EPSILON));
}

#[test]
fn test_integration_orthographic_zoom_scales_bounds() {
    let mut camera = OrthographicCamera::orthographic(-1.0, 1.0, 1.0, -1.0, 0.1, 100.0).unwrap();
    camera.set_zoom(2.0).unwrap();

    assert_eq!(camera.effective_bounds(), [-2.0, 2.0, 2.0, -2.0]);
    let expected = Mat4::orthographic_rh(-2.0, 2.0, -2.0, 2.0, 0.1, 100.0);
    assert!(camera.projection().abs_diff_eq(expected, EPSILON));
}

#[test]
fn test_integration_look_at_places_point_on_forward_axis() {
    let mut camera = PerspectiveCamera::default();
    let point = Vec3::new(0.0, 0.0, -10.0);
    camera.look_at(point).unwrap();

    let in_view = camera.view().transform_point3(point);
    assert!(in_view.x.abs() < EPSILON);
    assert!(in_view.y.abs() < EPSILON);
    assert!((in_view.z + 10.0).abs() < EPSILON);
}

#[test]
fn test_integration_degenerate_look_at_is_reported() {
    let mut camera = PerspectiveCamera::default();
    match camera.look_at(Vec3::ZERO) {
        Err(Error::DegenerateParameters(msg)) => assert!(msg.contains("coincides")),
        other => panic!("unexpected result: {:?}", other),
    }
}

// ============================================================================
// PROPERTIES OVER A MUTATION SEQUENCE
// ============================================================================

#[test]
fn test_integration_cache_tracks_every_mutation() {
    let mut camera = PerspectiveCamera::perspective(60.0, 1.5, 0.1, 500.0).unwrap();

    let steps: Vec<Box<dyn Fn(&mut PerspectiveCamera)>> = vec![
        Box::new(|c: &mut PerspectiveCamera| c.set_translation(Vec3::new(3.0, -2.0, 8.0))),
        Box::new(|c: &mut PerspectiveCamera| c.rotate(Vec3::Y, 0.8).unwrap()),
        Box::new(|c: &mut PerspectiveCamera| c.translate(Vec3::NEG_Z, 4.0)),
        Box::new(|c: &mut PerspectiveCamera| c.set_zoom(1.7).unwrap()),
        Box::new(|c: &mut PerspectiveCamera| c.look_at(Vec3::new(-5.0, 1.0, 0.0)).unwrap()),
        Box::new(|c: &mut PerspectiveCamera| c.rotate(Vec3::new(1.0, 0.0, 1.0), -0.3).unwrap()),
        Box::new(|c: &mut PerspectiveCamera| c.set_fov(35.0).unwrap()),
        Box::new(|c: &mut PerspectiveCamera| c.set_orientation(Quat::from_rotation_z(1.1)).unwrap()),
        Box::new(|c: &mut PerspectiveCamera| c.set_dirty(true)),
    ];

    for (i, step) in steps.iter().enumerate() {
        step(&mut camera);

        // Read in a different order each step
        if i % 2 == 0 {
            let _ = camera.view_projection();
        } else {
            let _ = camera.world();
        }

        let expected_world = compose(camera.translation(), camera.orientation());
        assert!(camera.world().abs_diff_eq(expected_world, EPSILON), "world stale at step {}", i);

        let world = *camera.world();
        let view = *camera.view();
        assert!((view * world).abs_diff_eq(Mat4::IDENTITY, EPSILON), "view not inverse at step {}", i);

        let projection = camera.projection_model().update_projection();
        assert!(camera.projection().abs_diff_eq(projection, EPSILON), "projection stale at step {}", i);

        let combined = *camera.view_projection();
        assert!(combined.abs_diff_eq(projection * view, 1e-3), "view-projection stale at step {}", i);
        assert_eq!(camera.view_projection().to_cols_array(), combined.to_cols_array());
    }
}

#[test]
fn test_integration_projection_setters_keep_world_and_view() {
    let mut camera = PerspectiveCamera::default();
    camera.set_translation(Vec3::new(1.0, 2.0, 3.0));
    camera.rotate(Vec3::X, 0.4).unwrap();
    let world = *camera.world();
    let view = *camera.view();

    camera.set_fov(80.0).unwrap();
    camera.set_aspect(2.0).unwrap();
    camera.set_clip_planes(0.5, 50.0).unwrap();
    camera.set_zoom(3.0).unwrap();

    assert_eq!(*camera.world(), world);
    assert_eq!(*camera.view(), view);
}

#[test]
fn test_integration_transform_mutators_keep_projection() {
    let mut camera = OrthographicCamera::orthographic(-4.0, 4.0, 3.0, -3.0, 0.1, 10.0).unwrap();
    let projection = *camera.projection();

    camera.set_translation(Vec3::new(0.0, 5.0, 0.0));
    camera.translate(Vec3::X, 2.0);
    camera.rotate(Vec3::Z, 0.2).unwrap();
    camera.set_orientation(Quat::from_rotation_y(0.1)).unwrap();

    assert_eq!(*camera.projection(), projection);
}

// ============================================================================
// CUSTOM PROJECTION MODEL
// ============================================================================

/// Oblique projection: any type implementing the capability plugs in.
#[derive(Debug, Clone)]
struct ObliqueProjection {
    base: PerspectiveProjection,
    shear: f32,
}

impl ProjectionModel for ObliqueProjection {
    fn update_projection(&self) -> Mat4 {
        let mut matrix = self.base.update_projection();
        matrix.z_axis.x += self.shear;
        matrix
    }
}

#[test]
fn test_integration_custom_projection_model() {
    let mut camera = Camera::new(ObliqueProjection {
        base: PerspectiveProjection::default(),
        shear: 0.0,
    });
    let plain = *camera.projection();

    camera
        .update_projection_model(|p| {
            p.shear = 0.25;
            Ok(())
        })
        .unwrap();

    let sheared = *camera.projection();
    assert!((sheared.z_axis.x - plain.z_axis.x - 0.25).abs() < 1e-6);
}

// ============================================================================
// COLLABORATOR SURFACE
// ============================================================================

#[test]
fn test_integration_frustum_refreshed_by_caller() {
    let mut camera = PerspectiveCamera::perspective(90.0, 1.0, 0.1, 100.0).unwrap();
    camera.set_translation(Vec3::new(0.0, 0.0, 20.0));

    let frustum = Frustum::from_view_projection(camera.view_projection());
    camera.set_frustum(frustum);

    assert!(camera.frustum().contains_point(Vec3::ZERO));
    assert!(!camera.frustum().contains_point(Vec3::new(0.0, 0.0, 30.0)));
}

#[test]
fn test_integration_uniform_upload() {
    let mut camera = PerspectiveCamera::default();
    camera.set_translation(Vec3::new(0.0, 1.0, 5.0));
    let uniform: CameraUniform = camera.uniform();

    assert_eq!(uniform.as_bytes().len(), std::mem::size_of::<CameraUniform>());
    assert_eq!(uniform.position, [0.0, 1.0, 5.0, 1.0]);
    assert_eq!(uniform.view_projection, camera.view_projection().to_cols_array_2d());
}

#[test]
fn test_integration_camera_behind_mutex() {
    let camera = Arc::new(Mutex::new(PerspectiveCamera::default()));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let camera = Arc::clone(&camera);
            std::thread::spawn(move || {
                let mut camera = camera.lock().unwrap();
                camera.translate(Vec3::X, 1.0);
                let _ = camera.view_projection();
                i
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let mut camera = camera.lock().unwrap();
    assert!(camera.translation().abs_diff_eq(Vec3::new(4.0, 0.0, 0.0), EPSILON));
    assert!(camera.view().abs_diff_eq(Mat4::from_translation(Vec3::new(-4.0, 0.0, 0.0)), EPSILON));
}
