use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use super::error_response::ErrorResponse;
use super::models::{
    DistanceResponse, LedRequest, MotorsRequest, MoveRequest, PingResponse, SwitchPosition,
    SwitchResponse,
};
use crate::domain::board::{
    BoardDriver, LedCommand, LedId, LedState, MotorsCommand, MoveCommand, MoveDirection, SwitchId,
};

/// Shared server state: the one board driver, behind a lock so at most one
/// hardware command is in flight at a time.
pub struct BoardState {
    pub board: Mutex<Box<dyn BoardDriver>>,
}

impl BoardState {
    pub fn new(board: Box<dyn BoardDriver>) -> Self {
        Self {
            board: Mutex::new(board),
        }
    }
}

/// GET /ping
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        server: "rrb",
        v1: Some("supported"),
    })
}

/// GET /v1/ping
pub async fn ping_v1() -> Json<PingResponse> {
    Json(PingResponse {
        server: "rrb",
        v1: None,
    })
}

/// POST /v1/led/{led_no}
pub async fn set_led(
    State(state): State<Arc<BoardState>>,
    Path(led_no): Path<String>,
    body: Result<Json<LedRequest>, JsonRejection>,
) -> Result<Json<Value>, ErrorResponse> {
    // The led_no from the URL is checked before the body is even looked at.
    let led = LedId::parse(&led_no)?;
    let Json(request) = body.map_err(bad_json)?;
    let led_state = LedState::parse(&request.state)?;
    let command = LedCommand::new(led, led_state);

    info!("LED command: {:?}", command);
    let board = state.board.lock().await;
    board.set_led(command.led, command.state.is_on())?;

    Ok(Json(json!({})))
}

/// GET /v1/switch/{switch_no}
pub async fn read_switch(
    State(state): State<Arc<BoardState>>,
    Path(switch_no): Path<String>,
) -> Result<Json<SwitchResponse>, ErrorResponse> {
    let switch = SwitchId::parse(&switch_no)?;

    let board = state.board.lock().await;
    let closed = board.switch_closed(switch)?;

    Ok(Json(SwitchResponse {
        state: if closed {
            SwitchPosition::Closed
        } else {
            SwitchPosition::Open
        },
    }))
}

/// POST /v1/move
///
/// Blocks for up to `duration` seconds: the driver returns only after the
/// timed move has finished.
pub async fn drive(
    State(state): State<Arc<BoardState>>,
    body: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<Value>, ErrorResponse> {
    let Json(request) = body.map_err(bad_json)?;
    let command = MoveCommand::validate(&request.direction, &request.speed, &request.duration)?;

    info!("Move command: {:?}", command);
    let seconds = command.duration.seconds();
    let fraction = command.speed.fraction();

    let board = state.board.lock().await;
    match command.direction {
        MoveDirection::Forward => board.move_forward(seconds, fraction)?,
        MoveDirection::Reverse => board.move_reverse(seconds, fraction)?,
        MoveDirection::Right => board.move_right(seconds, fraction)?,
        MoveDirection::Left => board.move_left(seconds, fraction)?,
    }

    Ok(Json(json!({})))
}

/// POST /v1/motors
pub async fn set_motors(
    State(state): State<Arc<BoardState>>,
    body: Result<Json<MotorsRequest>, JsonRejection>,
) -> Result<Json<Value>, ErrorResponse> {
    let Json(request) = body.map_err(bad_json)?;
    let command = MotorsCommand::validate(
        &request.left_direction,
        &request.left_speed,
        &request.right_direction,
        &request.right_speed,
    )?;

    info!("Motors command: {:?}", command);
    let board = state.board.lock().await;
    board.set_motors(
        command.right_speed.fraction(),
        command.right_direction.code(),
        command.left_speed.fraction(),
        command.left_direction.code(),
    )?;

    Ok(Json(json!({})))
}

/// POST /v1/stop
pub async fn stop(State(state): State<Arc<BoardState>>) -> Result<Json<Value>, ErrorResponse> {
    info!("Stop command");
    let board = state.board.lock().await;
    board.stop()?;
    Ok(Json(json!({})))
}

/// GET /v1/distance
pub async fn read_distance(
    State(state): State<Arc<BoardState>>,
) -> Result<Json<DistanceResponse>, ErrorResponse> {
    let board = state.board.lock().await;
    let distance = board.read_distance()?;
    Ok(Json(DistanceResponse { distance }))
}

/// A body that failed to decode (bad JSON, missing or unknown field) is a
/// validation failure; axum's rejection text names the offending field.
fn bad_json(rejection: JsonRejection) -> ErrorResponse {
    ErrorResponse::new(
        StatusCode::BAD_REQUEST,
        format!("Invalid request body: {}", rejection.body_text()),
    )
}
