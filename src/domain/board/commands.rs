//! Validated board commands.
//!
//! A command is only ever constructed after every field has passed
//! validation; a half-checked command never exists, so nothing invalid can
//! reach the driver. Field order inside each `validate` is part of the API
//! contract: the first failing check wins.

use super::errors::ValidationError;
use super::value_objects::{
    LedId, LedState, MotorDirection, MoveDirection, MoveDuration, Speed,
};
use serde_json::Value;

/// Switch one of the user LEDs on or off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedCommand {
    pub led: LedId,
    pub state: LedState,
}

impl LedCommand {
    pub fn new(led: LedId, state: LedState) -> Self {
        Self { led, state }
    }
}

/// Timed whole-robot move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveCommand {
    pub direction: MoveDirection,
    pub speed: Speed,
    pub duration: MoveDuration,
}

impl MoveCommand {
    /// Checked in order: direction, speed, duration.
    pub fn validate(
        direction: &str,
        speed: &Value,
        duration: &Value,
    ) -> Result<Self, ValidationError> {
        let direction = MoveDirection::parse(direction)?;
        let speed = Speed::parse("speed", speed)?;
        let duration = MoveDuration::parse("duration", duration)?;
        Ok(Self {
            direction,
            speed,
            duration,
        })
    }
}

/// Direct differential drive of both motors, no time limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorsCommand {
    pub left_direction: MotorDirection,
    pub left_speed: Speed,
    pub right_direction: MotorDirection,
    pub right_speed: Speed,
}

impl MotorsCommand {
    /// Checked in order: left_direction, left_speed, right_direction,
    /// right_speed.
    pub fn validate(
        left_direction: &str,
        left_speed: &Value,
        right_direction: &str,
        right_speed: &Value,
    ) -> Result<Self, ValidationError> {
        let left_direction = MotorDirection::parse("left_direction", left_direction)?;
        let left_speed = Speed::parse("left_speed", left_speed)?;
        let right_direction = MotorDirection::parse("right_direction", right_direction)?;
        let right_speed = Speed::parse("right_speed", right_speed)?;
        Ok(Self {
            left_direction,
            left_speed,
            right_direction,
            right_speed,
        })
    }
}
