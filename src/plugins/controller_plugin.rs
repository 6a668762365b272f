use bevy::prelude::*;

use crate::config::tuning::Tuning;
use crate::game::{
    actions,
    bindings::{self, MoveBindings},
    controller,
    events::ActionMessage,
    physics,
};

// ── SystemSets ──────────────────────────────────────────────────────

/// Strict FixedUpdate ordering: controller writes velocity, then bodies integrate.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FixedGameSet {
    ControlSet,
    PhysicsSet,
}

/// Per-frame input: read devices into action phases, then dispatch to controllers.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputSet {
    ReadActions,
    Dispatch,
}

/// Input actions, the player controller and the bodies it drives.
///
/// Needs `Tuning` and `ButtonInput<KeyCode>` in the world; no rendering.
pub struct ControllerPlugin;

impl Plugin for ControllerPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ActionMessage>();
        app.init_resource::<MoveBindings>();

        app.configure_sets(
            FixedUpdate,
            (FixedGameSet::ControlSet, FixedGameSet::PhysicsSet).chain(),
        );
        app.configure_sets(Update, (InputSet::ReadActions, InputSet::Dispatch).chain());

        // ── Lifecycle ───────────────────────────────────────────────────
        app.add_observer(controller::on_controller_added);
        app.add_observer(controller::on_controller_disabled);
        app.add_observer(controller::on_controller_removed);

        // ── Update ──────────────────────────────────────────────────────
        app.add_systems(
            Update,
            (
                bindings::sync_bindings_with_tuning.run_if(resource_exists_and_changed::<Tuning>),
                controller::enable_controllers,
                actions::update_player_actions,
            )
                .chain()
                .in_set(InputSet::ReadActions),
        );
        app.add_systems(
            Update,
            controller::handle_move_messages.in_set(InputSet::Dispatch),
        );

        // ── FixedUpdate ─────────────────────────────────────────────────
        app.add_systems(
            FixedUpdate,
            controller::apply_move_velocity.in_set(FixedGameSet::ControlSet),
        );
        app.add_systems(
            FixedUpdate,
            physics::integrate_bodies.in_set(FixedGameSet::PhysicsSet),
        );
    }
}
