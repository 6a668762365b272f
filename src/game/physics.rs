use bevy::prelude::*;

use super::components::{LinearVelocity, RigidBody2d};
use crate::config::tuning::Tuning;

/// PhysicsSet: integrate velocity → position.
pub fn integrate_bodies(
    tuning: Res<Tuning>,
    mut query: Query<(&mut Transform, &LinearVelocity, &RigidBody2d)>,
) {
    let dt = tuning.dt;
    for (mut transform, vel, body) in &mut query {
        if body.is_static() {
            continue;
        }
        transform.translation.x += vel.0.x * dt;
        transform.translation.y += vel.0.y * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(bevy::MinimalPlugins);
        app.insert_resource(Tuning::default());
        app.add_systems(FixedUpdate, integrate_bodies);
        app
    }

    #[test]
    fn test_dynamic_body_moves_by_velocity_times_dt() {
        let mut app = setup_test_app();
        let body = app
            .world_mut()
            .spawn((RigidBody2d::Dynamic, LinearVelocity(Vec2::new(6.0, -3.0))))
            .id();

        app.world_mut().run_schedule(FixedUpdate);

        let dt = Tuning::default().dt;
        let pos = app.world().get::<Transform>(body).unwrap().translation;
        assert!((pos.x - 6.0 * dt).abs() < 1e-6);
        assert!((pos.y + 3.0 * dt).abs() < 1e-6);
        assert_eq!(pos.z, 0.0);
    }

    #[test]
    fn test_static_body_ignores_velocity() {
        let mut app = setup_test_app();
        let body = app
            .world_mut()
            .spawn((
                RigidBody2d::Static,
                LinearVelocity(Vec2::new(10.0, 10.0)),
                Transform::from_xyz(1.0, 2.0, 0.0),
            ))
            .id();

        app.world_mut().run_schedule(FixedUpdate);
        app.world_mut().run_schedule(FixedUpdate);

        let pos = app.world().get::<Transform>(body).unwrap().translation;
        assert_eq!(pos, Vec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_body_spawned_alone_gets_zero_velocity() {
        let mut app = setup_test_app();
        let body = app.world_mut().spawn(RigidBody2d::default()).id();

        assert_eq!(
            app.world().get::<LinearVelocity>(body),
            Some(&LinearVelocity(Vec2::ZERO))
        );
    }
}
