#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic movement system that turns observer input into
//! displacement commands.
//!
//! The system is pure: it consumes the frame's world events plus an input
//! snapshot and emits [`Command::Displace`] values. Collision is not its
//! concern; the world resolves every proposed displacement axis-separately
//! against the grid.

use glam::{Vec2, Vec3};
use hedge_maze_core::{Command, Event, MoveIntent};

/// Per-frame input snapshot handed over by the input collaborator.
///
/// The facing vector is the camera's forward direction and may pitch up or
/// down freely; the system flattens it before use.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverInput {
    /// Directional intents active during the frame.
    pub intent: MoveIntent,
    /// Facing direction of the observer's camera.
    pub facing: Vec3,
}

impl ObserverInput {
    /// Creates a snapshot from the frame's intents and camera facing.
    #[must_use]
    pub const fn new(intent: MoveIntent, facing: Vec3) -> Self {
        Self { intent, facing }
    }
}

/// Pure system that reacts to world events and emits displacement commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct Movement;

impl Movement {
    /// Consumes world events and the frame's input snapshot to emit
    /// displacement commands.
    ///
    /// One displacement is proposed per [`Event::TimeAdvanced`], scaled by
    /// that event's delta time. Idle or self-canceling intents propose
    /// nothing.
    pub fn handle(
        &mut self,
        events: &[Event],
        input: &ObserverInput,
        movement_speed: f32,
        out: &mut Vec<Command>,
    ) {
        for event in events {
            if let Event::TimeAdvanced { dt } = event {
                if let Some(delta) = displacement(input, movement_speed, dt.as_secs_f32()) {
                    out.push(Command::Displace {
                        dx: delta.x,
                        dz: delta.y,
                    });
                }
            }
        }
    }
}

/// Displacement proposed for one frame, or `None` when no motion applies.
///
/// Intents are summed into a single direction and normalized, so diagonal
/// motion is never faster than axis-aligned motion.
fn displacement(input: &ObserverInput, speed: f32, elapsed: f32) -> Option<Vec2> {
    let forward = flatten(input.facing)?;
    let right = Vec2::new(-forward.y, forward.x);

    let direction = forward * input.intent.longitudinal() + right * input.intent.lateral();
    if direction.length_squared() <= f32::EPSILON {
        return None;
    }

    Some(direction.normalize() * (speed * elapsed))
}

/// Projects the camera facing onto the horizontal plane and re-normalizes,
/// so looking up or down never changes movement speed.
///
/// Returns `None` for a facing that is vertical or degenerate.
fn flatten(facing: Vec3) -> Option<Vec2> {
    let planar = Vec2::new(facing.x, facing.z);
    if planar.length_squared() <= f32::EPSILON {
        return None;
    }
    Some(planar.normalize())
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};
    use hedge_maze_core::MoveIntent;

    use super::{displacement, flatten, ObserverInput};

    const FORWARD: MoveIntent = MoveIntent::new(true, false, false, false);

    fn assert_close(actual: Vec2, expected: Vec2) {
        assert!(
            (actual - expected).length() < 1e-5,
            "expected {expected:?}, received {actual:?}"
        );
    }

    #[test]
    fn pitched_facing_never_scales_speed() {
        let level = ObserverInput::new(FORWARD, Vec3::new(0.0, 0.0, -1.0));
        let pitched = ObserverInput::new(FORWARD, Vec3::new(0.0, -0.7, -0.7));

        let level_delta = displacement(&level, 10.0, 0.5).expect("level facing moves");
        let pitched_delta = displacement(&pitched, 10.0, 0.5).expect("pitched facing moves");

        assert_close(level_delta, Vec2::new(0.0, -5.0));
        assert_close(pitched_delta, level_delta);
    }

    #[test]
    fn diagonal_intent_is_normalized() {
        let input = ObserverInput::new(
            MoveIntent::new(true, false, false, true),
            Vec3::new(0.0, 0.0, -1.0),
        );

        let delta = displacement(&input, 10.0, 0.5).expect("diagonal intent moves");

        assert!((delta.length() - 5.0).abs() < 1e-5);
        assert_close(delta, Vec2::new(5.0, -5.0).normalize() * 5.0);
    }

    #[test]
    fn backward_intent_reverses_the_facing() {
        let input = ObserverInput::new(
            MoveIntent::new(false, true, false, false),
            Vec3::new(0.0, 0.0, -1.0),
        );

        let delta = displacement(&input, 4.0, 0.25).expect("backward intent moves");

        assert_close(delta, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn idle_and_self_canceling_intents_propose_nothing() {
        let facing = Vec3::new(1.0, 0.0, 0.0);
        let idle = ObserverInput::new(MoveIntent::idle(), facing);
        let canceled = ObserverInput::new(MoveIntent::new(true, true, true, true), facing);

        assert_eq!(displacement(&idle, 10.0, 0.5), None);
        assert_eq!(displacement(&canceled, 10.0, 0.5), None);
    }

    #[test]
    fn vertical_facing_has_no_horizontal_heading() {
        assert_eq!(flatten(Vec3::new(0.0, -1.0, 0.0)), None);

        let input = ObserverInput::new(FORWARD, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(displacement(&input, 10.0, 0.5), None);
    }
}
