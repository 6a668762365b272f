use bevy::camera::ScalingMode;
use bevy::prelude::*;

use crate::config::tuning::Tuning;
use crate::game::components::*;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_game);

        // ── Always-on ───────────────────────────────────────────────────
        app.add_systems(Update, (toggle_controller_input, tuning_reload_input));
    }
}

// ── Startup ─────────────────────────────────────────────────────────

fn setup_game(
    mut commands: Commands,
    tuning: Res<Tuning>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let ppu = tuning.pixels_per_unit.max(1.0);

    // 1 world unit = `ppu` pixels
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::WindowSize,
            scale: 1.0 / ppu,
            ..OrthographicProjection::default_2d()
        }),
    ));

    // Static spawn pad: a body the physics step never moves
    let pad_mesh = meshes.add(Annulus::new(tuning.player_radius * 1.4, tuning.player_radius * 1.6));
    commands.spawn((
        RigidBody2d::Static,
        Mesh2d(pad_mesh),
        MeshMaterial2d(materials.add(Color::srgba(0.5, 0.5, 0.6, 0.6))),
        Transform::from_translation(Vec3::new(0.0, 0.0, -1.0)),
    ));

    let player_mesh = meshes.add(Circle::new(tuning.player_radius));
    let player = commands
        .spawn((
            PlayerControlled,
            PlayerController::new(tuning.player_speed),
            Mesh2d(player_mesh),
            MeshMaterial2d(materials.add(Color::srgb(0.2, 0.6, 1.0))),
            Transform::default(),
        ))
        .id();
    info!(
        "Spawned player {player} (speed={:.2}, fixed dt={:.4}s)",
        tuning.player_speed, tuning.dt
    );
}

// ── Always-on ───────────────────────────────────────────────────────

/// Enable/disable the player controller with Tab.
fn toggle_controller_input(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    query: Query<(Entity, Has<ControllerDisabled>), With<PlayerControlled>>,
) {
    if !keyboard.just_pressed(KeyCode::Tab) {
        return;
    }
    for (entity, disabled) in &query {
        if disabled {
            commands.entity(entity).remove::<ControllerDisabled>();
        } else {
            commands.entity(entity).insert(ControllerDisabled);
        }
    }
}

/// Reload tuning with F5. Speed applies to controllers spawned afterwards.
fn tuning_reload_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut tuning: ResMut<Tuning>,
    mut fixed: ResMut<Time<Fixed>>,
) {
    if keyboard.just_pressed(KeyCode::F5) {
        tuning.reload();
        fixed.set_timestep_seconds(tuning.dt as f64);
    }
}
