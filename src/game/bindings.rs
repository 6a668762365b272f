use bevy::prelude::*;

use crate::config::tuning::Tuning;

/// Radial deadzone for analog sticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickDeadzone {
    pub min: f32,
    pub max: f32,
}

impl StickDeadzone {
    /// Rescale the stick magnitude from `[min, max]` to `[0, 1]`, keeping its direction.
    pub fn process(&self, raw: Vec2) -> Vec2 {
        let magnitude = raw.length();
        if magnitude < self.min || magnitude <= f32::EPSILON {
            return Vec2::ZERO;
        }
        let span = (self.max - self.min).max(f32::EPSILON);
        let adjusted = ((magnitude - self.min) / span).min(1.0);
        raw / magnitude * adjusted
    }
}

impl Default for StickDeadzone {
    fn default() -> Self {
        Self {
            min: 0.125,
            max: 0.925,
        }
    }
}

/// Controls bound to the Move action: a 2D-vector key composite plus the
/// left stick of every connected gamepad.
#[derive(Resource, Debug, Clone)]
pub struct MoveBindings {
    pub up: Vec<KeyCode>,
    pub down: Vec<KeyCode>,
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,
    pub stick_deadzone: StickDeadzone,
}

impl MoveBindings {
    #[allow(clippy::should_implement_trait)]
    pub fn default() -> Self {
        Self {
            up: vec![KeyCode::KeyW, KeyCode::ArrowUp],
            down: vec![KeyCode::KeyS, KeyCode::ArrowDown],
            left: vec![KeyCode::KeyA, KeyCode::ArrowLeft],
            right: vec![KeyCode::KeyD, KeyCode::ArrowRight],
            stick_deadzone: StickDeadzone::default(),
        }
    }
}

impl FromWorld for MoveBindings {
    fn from_world(world: &mut World) -> Self {
        let mut bindings = Self::default();
        if let Some(tuning) = world.get_resource::<Tuning>() {
            bindings.apply_tuning(tuning);
        }
        bindings
    }
}

impl MoveBindings {
    pub fn apply_tuning(&mut self, tuning: &Tuning) {
        self.stick_deadzone = StickDeadzone {
            min: tuning.stick_deadzone_min,
            max: tuning.stick_deadzone_max,
        };
    }

    /// Digital-normalized composite: opposing keys cancel, diagonals have unit length.
    pub fn composite_value(&self, keyboard: &ButtonInput<KeyCode>) -> Vec2 {
        let axis = |neg: &[KeyCode], pos: &[KeyCode]| {
            let n = keyboard.any_pressed(neg.iter().copied()) as i8;
            let p = keyboard.any_pressed(pos.iter().copied()) as i8;
            (p - n) as f32
        };
        Vec2::new(axis(&self.left, &self.right), axis(&self.down, &self.up)).normalize_or_zero()
    }

    /// Current Move value. When several controls are actuated the strongest one wins.
    pub fn read_move_value(
        &self,
        keyboard: &ButtonInput<KeyCode>,
        sticks: impl IntoIterator<Item = Vec2>,
    ) -> Vec2 {
        sticks
            .into_iter()
            .map(|raw| self.stick_deadzone.process(raw))
            .chain(std::iter::once(self.composite_value(keyboard)))
            .fold(Vec2::ZERO, |best, value| {
                if value.length_squared() > best.length_squared() {
                    value
                } else {
                    best
                }
            })
    }
}

/// Keep the stick deadzone in step with a reloaded tuning file.
pub fn sync_bindings_with_tuning(tuning: Res<Tuning>, mut bindings: ResMut<MoveBindings>) {
    bindings.apply_tuning(&tuning);
}
