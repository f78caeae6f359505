use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reply for `/ping` (with `v1`) and `/v1/ping` (without).
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub server: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v1: Option<&'static str>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SwitchPosition {
    Open,
    Closed,
}

#[derive(Debug, Serialize)]
pub struct SwitchResponse {
    pub state: SwitchPosition,
}

#[derive(Debug, Serialize)]
pub struct DistanceResponse {
    pub distance: f64,
}

/// Body of `POST /v1/led/{led_no}`. Unknown fields are rejected.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LedRequest {
    pub state: String,
}

/// Body of `POST /v1/move`. Speed and duration stay raw JSON here because
/// the browser UI sends them as strings; the lexical float conversion is the
/// validator's job.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoveRequest {
    pub direction: String,
    pub speed: Value,
    pub duration: Value,
}

/// Body of `POST /v1/motors`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MotorsRequest {
    pub left_direction: String,
    pub left_speed: Value,
    pub right_direction: String,
    pub right_speed: Value,
}
