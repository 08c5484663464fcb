//! Camera driver system.

use bevy::prelude::*;

use crate::visualization::resources::DirectorRes;

/// Milliseconds since startup, the clock the director runs on.
pub fn now_ms(time: &Time) -> f64 {
    time.elapsed_secs_f64() * 1000.0
}

/// Advance the director one frame and copy its pose onto the camera.
///
/// Nothing is ticked until the camera entity exists, so the orbit never
/// runs ahead of what is on screen.
pub fn camera_director_system(
    time: Res<Time>,
    mut director: ResMut<DirectorRes>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
) {
    let Ok(mut transform) = camera_query.get_single_mut() else {
        return;
    };

    if let Some(pose) = director.0.tick(now_ms(&time)) {
        *transform = Transform::from_translation(pose.position).looking_at(pose.target, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraDirector;

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(DirectorRes(CameraDirector::default()))
            .add_systems(Update, camera_director_system);
        app
    }

    fn orbit_angle(app: &App) -> f32 {
        app.world().resource::<DirectorRes>().0.orbit().angle()
    }

    #[test]
    fn test_tick_skipped_until_camera_exists() {
        let mut app = app();

        app.update();
        app.update();
        assert_eq!(orbit_angle(&app), 0.0);

        let camera = app
            .world_mut()
            .spawn((Camera3d::default(), Transform::default()))
            .id();
        app.update();

        let director = &app.world().resource::<DirectorRes>().0;
        assert!(orbit_angle(&app) > 0.0);
        assert!((director.orbit().angle() - director.orbit().speed).abs() < 1e-9);

        let pose = director.pose();
        let expected =
            Transform::from_translation(pose.position).looking_at(pose.target, Vec3::Y);
        let transform = app.world().get::<Transform>(camera).unwrap();
        assert!((transform.translation - expected.translation).length() < 1e-3);
        assert!(transform.rotation.abs_diff_eq(expected.rotation, 1e-5));
    }
}
