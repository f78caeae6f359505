use crate::domain::board::{BoardDriver, HardwareError, LedId, SwitchId};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

/// Driver stand-in for running without the physical board.
///
/// Logs every command and honors timed-move durations by sleeping, so the
/// blocking behavior of `/v1/move` matches the real board. Switches read as
/// open and the sonar reports a fixed distance.
pub struct MockBoard;

impl Default for MockBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBoard {
    pub fn new() -> Self {
        info!("Using mock board driver; hardware commands are simulated");
        Self
    }

    fn run_motors(&self, label: &str, duration_s: f64, speed_fraction: f64) {
        debug!(
            "Mock {} for {:.2}s at {:.0}% power",
            label,
            duration_s,
            speed_fraction * 100.0
        );
        // Non-finite durations cannot be slept on
        if let Ok(duration) = Duration::try_from_secs_f64(duration_s) {
            thread::sleep(duration);
        }
    }
}

impl BoardDriver for MockBoard {
    fn set_led(&self, led: LedId, on: bool) -> Result<(), HardwareError> {
        debug!("Mock set_led {:?} -> {}", led, if on { "on" } else { "off" });
        Ok(())
    }

    fn switch_closed(&self, switch: SwitchId) -> Result<bool, HardwareError> {
        debug!("Mock switch_closed {:?}", switch);
        Ok(false)
    }

    fn move_forward(&self, duration_s: f64, speed_fraction: f64) -> Result<(), HardwareError> {
        self.run_motors("forward", duration_s, speed_fraction);
        Ok(())
    }

    fn move_reverse(&self, duration_s: f64, speed_fraction: f64) -> Result<(), HardwareError> {
        self.run_motors("reverse", duration_s, speed_fraction);
        Ok(())
    }

    fn move_left(&self, duration_s: f64, speed_fraction: f64) -> Result<(), HardwareError> {
        self.run_motors("left", duration_s, speed_fraction);
        Ok(())
    }

    fn move_right(&self, duration_s: f64, speed_fraction: f64) -> Result<(), HardwareError> {
        self.run_motors("right", duration_s, speed_fraction);
        Ok(())
    }

    fn set_motors(
        &self,
        right_speed_fraction: f64,
        right_direction_code: u8,
        left_speed_fraction: f64,
        left_direction_code: u8,
    ) -> Result<(), HardwareError> {
        debug!(
            "Mock set_motors right {:.2}/{} left {:.2}/{}",
            right_speed_fraction, right_direction_code, left_speed_fraction, left_direction_code
        );
        Ok(())
    }

    fn stop(&self) -> Result<(), HardwareError> {
        debug!("Mock stop");
        Ok(())
    }

    fn read_distance(&self) -> Result<f64, HardwareError> {
        // Arbitrary but stable, handy for exercising the UI
        Ok(42.0)
    }

    fn cleanup(&self) -> Result<(), HardwareError> {
        info!("Mock board cleanup");
        Ok(())
    }
}
