use bevy::prelude::*;

use crate::game::actions::PlayerInputActions;
use crate::game::components::*;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_ui);
        app.add_systems(Update, update_controller_display);
    }
}

#[derive(Component)]
struct InputText;

#[derive(Component)]
struct VelocityText;

#[derive(Component)]
struct StatusText;

fn setup_ui(mut commands: Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(6.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                InputText,
                Text::new("Input: ---"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));

            parent.spawn((
                VelocityText,
                Text::new("Velocity: ---"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));

            parent.spawn((
                StatusText,
                Text::new("Controller: ---"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.2)),
            ));
        });
}

fn update_controller_display(
    player: Query<
        (
            &PlayerController,
            &PlayerInputActions,
            &LinearVelocity,
            Has<ControllerDisabled>,
        ),
        With<PlayerControlled>,
    >,
    mut input_text: Query<&mut Text, (With<InputText>, Without<VelocityText>, Without<StatusText>)>,
    mut velocity_text: Query<&mut Text, (With<VelocityText>, Without<InputText>, Without<StatusText>)>,
    mut status_text: Query<&mut Text, (With<StatusText>, Without<InputText>, Without<VelocityText>)>,
) {
    let Some((controller, actions, vel, disabled)) = player.iter().next() else { return; };

    for mut text in &mut input_text {
        **text = format!(
            "Input: ({:.2}, {:.2})  Move: {:?}",
            controller.move_input.x, controller.move_input.y, actions.player.move_action.phase
        );
    }
    for mut text in &mut velocity_text {
        **text = format!("Velocity: ({:.2}, {:.2})", vel.0.x, vel.0.y);
    }
    for mut text in &mut status_text {
        let state = if disabled { "disabled" } else { "enabled" };
        **text = format!("Controller: {state}  [Tab] toggle  [F5] reload tuning");
    }
}
