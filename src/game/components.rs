use bevy::prelude::*;

use super::actions::PlayerInputActions;

// ── Player controller ───────────────────────────────────────────────

/// Drives the body's velocity from the Move action.
///
/// Spawning one pulls in a physics body and its own input action instance.
#[derive(Component, Debug, Clone)]
#[require(RigidBody2d, PlayerInputActions)]
pub struct PlayerController {
    /// World units per second at full deflection.
    pub speed: f32,
    /// Latest Move value; applied on the next fixed tick.
    pub move_input: Vec2,
}

impl PlayerController {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            move_input: Vec2::ZERO,
        }
    }

    pub fn target_velocity(&self) -> Vec2 {
        self.move_input * self.speed
    }
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new(5.0)
    }
}

/// Marker: the controller on this entity is disabled.
#[derive(Component, Debug, Default)]
pub struct ControllerDisabled;

// ── Physics body ────────────────────────────────────────────────────

/// How the physics step treats a body.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[require(LinearVelocity, Transform)]
pub enum RigidBody2d {
    #[default]
    Dynamic,
    /// Never moved by the physics step, whatever its velocity says.
    Static,
}

impl RigidBody2d {
    pub fn is_static(self) -> bool {
        matches!(self, RigidBody2d::Static)
    }
}

/// World units per second.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearVelocity(pub Vec2);

// ── Scene ───────────────────────────────────────────────────────────

/// Marker for the locally controlled player entity.
#[derive(Component)]
pub struct PlayerControlled;
