use bevy::prelude::*;

use super::bindings::MoveBindings;
use super::events::ActionMessage;

/// Actions in the Player map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    Move,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionPhase {
    /// Enabled and at rest.
    #[default]
    Waiting,
    /// Left the rest value this frame.
    Started,
    /// Holds a non-zero value.
    Performed,
    /// Returned to rest, or was interrupted by disabling.
    Canceled,
}

/// Value-type action: reports every change of its `Vec2` value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActionState {
    pub phase: ActionPhase,
    pub value: Vec2,
}

impl ActionState {
    pub fn is_actuated(&self) -> bool {
        self.value != Vec2::ZERO
    }

    /// Feed this frame's control value, returning the phases to dispatch in order.
    pub fn update(&mut self, value: Vec2) -> Vec<ActionPhase> {
        if value == self.value {
            return Vec::new();
        }
        let was_actuated = self.is_actuated();
        self.value = value;

        if value == Vec2::ZERO {
            self.phase = ActionPhase::Waiting;
            vec![ActionPhase::Canceled]
        } else if was_actuated {
            self.phase = ActionPhase::Performed;
            vec![ActionPhase::Performed]
        } else {
            self.phase = ActionPhase::Performed;
            vec![ActionPhase::Started, ActionPhase::Performed]
        }
    }

    /// Drop back to rest. Returns `Canceled` if the action was in progress.
    pub fn reset(&mut self) -> Option<ActionPhase> {
        let was_actuated = self.is_actuated();
        *self = Self::default();
        was_actuated.then_some(ActionPhase::Canceled)
    }
}

/// The Player action map. Only updated while enabled.
#[derive(Debug, Default)]
pub struct PlayerActionMap {
    enabled: bool,
    pub move_action: ActionState,
}

impl PlayerActionMap {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Disable the map, canceling any action still in progress.
    pub fn disable(&mut self) -> Option<ActionPhase> {
        self.enabled = false;
        self.move_action.reset()
    }
}

/// One entity's own instance of the input actions.
#[derive(Component, Debug, Default)]
pub struct PlayerInputActions {
    pub player: PlayerActionMap,
}

/// Read bound devices and dispatch Move phase changes for every enabled map.
pub fn update_player_actions(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    bindings: Res<MoveBindings>,
    mut maps: Query<(Entity, &mut PlayerInputActions)>,
    mut messages: MessageWriter<ActionMessage>,
) {
    let value = bindings.read_move_value(&keyboard, gamepads.iter().map(Gamepad::left_stick));

    for (entity, mut actions) in &mut maps {
        if !actions.player.is_enabled() || actions.player.move_action.value == value {
            continue;
        }
        for phase in actions.player.move_action.update(value) {
            debug!("[Move] {entity} {phase:?} {value}");
            messages.write(ActionMessage {
                target: entity,
                action: PlayerAction::Move,
                phase,
                value,
                interrupted: false,
            });
        }
    }
}
