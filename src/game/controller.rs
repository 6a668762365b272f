use bevy::prelude::*;

use super::actions::{ActionPhase, PlayerAction, PlayerInputActions};
use super::components::*;
use super::events::ActionMessage;

// ── Lifecycle ───────────────────────────────────────────────────────

/// A new controller starts listening right away unless it was spawned disabled.
pub fn on_controller_added(
    add: On<Add, PlayerController>,
    mut query: Query<(&mut PlayerInputActions, Has<ControllerDisabled>)>,
) {
    let Ok((mut actions, disabled)) = query.get_mut(add.entity) else {
        return;
    };
    if disabled {
        return;
    }
    actions.player.enable();
    info!("[Controller] {} enabled", add.entity);
}

/// Disabling unsubscribes first, so the cancel raised by the map is never seen.
pub fn on_controller_disabled(
    add: On<Add, ControllerDisabled>,
    mut query: Query<&mut PlayerInputActions, With<PlayerController>>,
    mut messages: MessageWriter<ActionMessage>,
) {
    let Ok(mut actions) = query.get_mut(add.entity) else {
        return;
    };
    disable_actions(add.entity, &mut actions, &mut messages);
    info!("[Controller] {} disabled", add.entity);
}

/// A removed controller stops listening, whether or not it was disabled.
pub fn on_controller_removed(
    remove: On<Remove, PlayerController>,
    mut query: Query<&mut PlayerInputActions>,
    mut messages: MessageWriter<ActionMessage>,
) {
    let Ok(mut actions) = query.get_mut(remove.entity) else {
        return;
    };
    if actions.player.is_enabled() {
        disable_actions(remove.entity, &mut actions, &mut messages);
        info!("[Controller] {} removed", remove.entity);
    }
}

fn disable_actions(
    entity: Entity,
    actions: &mut PlayerInputActions,
    messages: &mut MessageWriter<ActionMessage>,
) {
    if let Some(phase) = actions.player.disable() {
        messages.write(ActionMessage {
            target: entity,
            action: PlayerAction::Move,
            phase,
            value: Vec2::ZERO,
            interrupted: true,
        });
    }
}

/// Re-enable controllers whose `ControllerDisabled` went away.
///
/// Runs as a system rather than an observer so despawned entities and
/// entities that lost their controller are skipped.
pub fn enable_controllers(
    mut removed: RemovedComponents<ControllerDisabled>,
    mut query: Query<&mut PlayerInputActions, (With<PlayerController>, Without<ControllerDisabled>)>,
) {
    for entity in removed.read() {
        let Ok(mut actions) = query.get_mut(entity) else {
            continue;
        };
        if actions.player.is_enabled() {
            continue;
        }
        actions.player.enable();
        info!("[Controller] {entity} enabled");
    }
}

// ── Update ──────────────────────────────────────────────────────────

/// Move performed/canceled → `move_input`. Started is not subscribed, and
/// cancels raised by disabling arrive after unsubscribing.
pub fn handle_move_messages(
    mut messages: MessageReader<ActionMessage>,
    mut controllers: Query<&mut PlayerController, Without<ControllerDisabled>>,
) {
    for message in messages.read() {
        if message.action != PlayerAction::Move || message.interrupted {
            continue;
        }
        if !matches!(message.phase, ActionPhase::Performed | ActionPhase::Canceled) {
            continue;
        }
        let Ok(mut controller) = controllers.get_mut(message.target) else {
            continue;
        };
        controller.move_input = message.value;
    }
}

// ── FixedUpdate ─────────────────────────────────────────────────────

/// ControlSet: overwrite body velocity from the latest input.
pub fn apply_move_velocity(
    mut query: Query<(&PlayerController, &mut LinearVelocity), Without<ControllerDisabled>>,
) {
    for (controller, mut vel) in &mut query {
        vel.0 = controller.target_velocity();
    }
}
