use super::errors::HardwareError;
use super::value_objects::{LedId, SwitchId};

/// Capability interface of the RasPiRobot Board V3.
///
/// The HTTP layer only ever talks to the board through this trait, after
/// validation. Calls are synchronous by contract: a timed move returns when
/// the motors have stopped, which for `/v1/move` means the request blocks
/// for up to `duration_s` seconds.
///
/// Speeds are fractions in [0, 1]; motor direction codes are forward=0,
/// reverse=1.
pub trait BoardDriver: Send + Sync {
    /// Switch a user LED on or off.
    fn set_led(&self, led: LedId, on: bool) -> Result<(), HardwareError>;

    /// Read a switch input. `true` means the contact is closed.
    fn switch_closed(&self, switch: SwitchId) -> Result<bool, HardwareError>;

    fn move_forward(&self, duration_s: f64, speed_fraction: f64) -> Result<(), HardwareError>;

    fn move_reverse(&self, duration_s: f64, speed_fraction: f64) -> Result<(), HardwareError>;

    fn move_left(&self, duration_s: f64, speed_fraction: f64) -> Result<(), HardwareError>;

    fn move_right(&self, duration_s: f64, speed_fraction: f64) -> Result<(), HardwareError>;

    /// Drive both motors directly until the next command.
    fn set_motors(
        &self,
        right_speed_fraction: f64,
        right_direction_code: u8,
        left_speed_fraction: f64,
        left_direction_code: u8,
    ) -> Result<(), HardwareError>;

    /// Stop both motors immediately.
    fn stop(&self) -> Result<(), HardwareError>;

    /// Sonar distance in centimeters.
    fn read_distance(&self) -> Result<f64, HardwareError>;

    /// Release GPIO resources. Called exactly once at shutdown.
    fn cleanup(&self) -> Result<(), HardwareError>;
}
