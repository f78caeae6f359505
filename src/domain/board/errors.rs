use thiserror::Error;

/// Failures raised by the board driver itself, after validation has passed.
#[derive(Error, Debug)]
pub enum HardwareError {
    #[error("GPIO operation failed: {0}")]
    Gpio(String),

    #[error("Sensor read failed: {0}")]
    SensorRead(String),

    #[error("Board not initialized")]
    NotInitialized,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Rejected client input. The message always carries the offending field
/// and the raw value the client sent.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Unknown {field} {value}")]
    UnknownValue { field: &'static str, value: String },

    #[error("Parameter {field} not a float ({value})")]
    NotAFloat { field: &'static str, value: String },

    #[error("Parameter {field} not in range 0..100 ({value})")]
    SpeedOutOfRange { field: &'static str, value: f64 },

    #[error("Parameter {field} less than 0 ({value})")]
    NegativeDuration { field: &'static str, value: f64 },
}
