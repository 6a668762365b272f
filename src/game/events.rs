use bevy::prelude::*;

use super::actions::{ActionPhase, PlayerAction};

/// A phase change on one entity's input action, delivered like a callback.
#[derive(Message, Debug, Clone, PartialEq)]
pub struct ActionMessage {
    pub target: Entity,
    pub action: PlayerAction,
    pub phase: ActionPhase,
    pub value: Vec2,
    /// Raised by the map being disabled rather than by a device.
    pub interrupted: bool,
}
