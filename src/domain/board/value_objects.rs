//! Value objects for board control.
//!
//! Every enum and numeric parameter the HTTP surface accepts is parsed here,
//! once, into a typed value. Handlers never compare raw strings themselves.

use super::errors::ValidationError;
use serde_json::Value;
use std::fmt;

/// One of the two user LEDs on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedId {
    Led1,
    Led2,
}

impl LedId {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw {
            "1" => Ok(LedId::Led1),
            "2" => Ok(LedId::Led2),
            _ => Err(ValidationError::UnknownValue {
                field: "led_no",
                value: raw.to_string(),
            }),
        }
    }
}

/// One of the two switch inputs on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchId {
    Switch1,
    Switch2,
}

impl SwitchId {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw {
            "1" => Ok(SwitchId::Switch1),
            "2" => Ok(SwitchId::Switch2),
            _ => Err(ValidationError::UnknownValue {
                field: "switch_no",
                value: raw.to_string(),
            }),
        }
    }
}

/// Requested LED state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedState {
    On,
    Off,
}

impl LedState {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw {
            "on" => Ok(LedState::On),
            "off" => Ok(LedState::Off),
            _ => Err(ValidationError::UnknownValue {
                field: "state",
                value: raw.to_string(),
            }),
        }
    }

    pub fn is_on(self) -> bool {
        matches!(self, LedState::On)
    }
}

/// Direction of a timed whole-robot move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Reverse,
    Right,
    Left,
}

impl MoveDirection {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw {
            "forward" => Ok(MoveDirection::Forward),
            "reverse" => Ok(MoveDirection::Reverse),
            "right" => Ok(MoveDirection::Right),
            "left" => Ok(MoveDirection::Left),
            _ => Err(ValidationError::UnknownValue {
                field: "direction",
                value: raw.to_string(),
            }),
        }
    }
}

/// Spin direction of a single motor.
///
/// The motor driver takes a binary direction code: forward=0, reverse=1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorDirection {
    Forward,
    Reverse,
}

impl MotorDirection {
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, ValidationError> {
        match raw {
            "forward" => Ok(MotorDirection::Forward),
            "reverse" => Ok(MotorDirection::Reverse),
            _ => Err(ValidationError::UnknownValue {
                field,
                value: raw.to_string(),
            }),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            MotorDirection::Forward => 0,
            MotorDirection::Reverse => 1,
        }
    }
}

/// Motor speed as a percentage in [0, 100].
///
/// The browser UI posts speeds as strings, generic clients post numbers;
/// both are accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Speed(f64);

impl Speed {
    pub fn parse(field: &'static str, raw: &Value) -> Result<Self, ValidationError> {
        let percent = parse_float(field, raw)?;
        if !(0.0..=100.0).contains(&percent) {
            return Err(ValidationError::SpeedOutOfRange {
                field,
                value: percent,
            });
        }
        Ok(Speed(percent))
    }

    pub fn percent(self) -> f64 {
        self.0
    }

    /// Speed as the [0, 1] fraction the motor driver expects.
    pub fn fraction(self) -> f64 {
        self.0 / 100.0
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Duration of a timed move, in seconds. Never negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveDuration(f64);

impl MoveDuration {
    pub fn parse(field: &'static str, raw: &Value) -> Result<Self, ValidationError> {
        let seconds = parse_float(field, raw)?;
        if seconds < 0.0 {
            return Err(ValidationError::NegativeDuration {
                field,
                value: seconds,
            });
        }
        Ok(MoveDuration(seconds))
    }

    pub fn seconds(self) -> f64 {
        self.0
    }
}

/// Lexical float conversion for a JSON field: numbers pass through, numeric
/// strings are parsed, everything else is rejected naming the field and the
/// raw value.
pub fn parse_float(field: &'static str, raw: &Value) -> Result<f64, ValidationError> {
    let parsed = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| ValidationError::NotAFloat {
        field,
        value: raw_text(raw),
    })
}

/// Render a JSON value the way the client wrote it, for error messages.
/// Strings are shown bare, everything else as JSON.
fn raw_text(raw: &Value) -> String {
    match raw {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
