use super::{
    BoardState, assets, cors,
    error_response::ErrorResponse,
    handlers::{drive, ping, ping_v1, read_distance, read_switch, set_led, set_motors, stop},
};
use crate::domain::board::BoardDriver;
use axum::{
    Router,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::net::{IpAddr, Ipv4Addr, SocketAddr, UdpSocket};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tracing::{error, info};

/// Build the complete application router around the shared board state.
pub(crate) fn build_router(state: Arc<BoardState>) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/v1/ping", get(ping_v1))
        .route("/v1/led/{led_no}", post(set_led))
        .route("/v1/switch/{switch_no}", get(read_switch))
        .route("/v1/move", post(drive))
        .route("/v1/motors", post(set_motors))
        .route("/v1/stop", post(stop))
        .route("/v1/distance", get(read_distance))
        // Wrong method on a known path is reported the same as an unknown
        // path, not as a 405
        .method_not_allowed_fallback(unknown_path)
        .fallback(static_or_not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(cors::cors_layer))
                .layer(middleware::map_response(set_json_charset)),
        )
}

/// Run the web server until Ctrl-C, then release the board exactly once.
pub async fn create_server(
    host: String,
    port: u16,
    board: Box<dyn BoardDriver>,
) -> anyhow::Result<()> {
    info!(
        "Starting RRB server {} (built {})",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_TIMESTAMP")
    );

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    let state = Arc::new(BoardState::new(board));
    let app = build_router(state.clone());

    let listener = TcpListener::bind(&addr).await?;
    let bound = listener.local_addr()?;

    println!("Server listening at {bound}");
    println!();
    let ip = outbound_ip();
    println!("RRB server homepage : http://{ip}:{port}/");
    println!("Scratch extension URL: http://{ip}:{port}/scratch_extension.js");
    println!();
    println!("Press Ctrl-C to stop server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Sole owner again after serve returns; cleanup runs exactly once.
    let board = state.board.lock().await;
    if let Err(e) = board.cleanup() {
        error!("Board cleanup failed: {e}");
    }

    Ok(())
}

/// Serve an allow-listed static asset on GET; anything else is an unknown
/// path.
async fn static_or_not_found(method: Method, uri: Uri, headers: HeaderMap) -> Response {
    if method == Method::GET
        && let Some(asset_name) = assets::lookup(uri.path())
    {
        let host_port = headers
            .get(header::HOST)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("localhost");

        return match assets::render(asset_name, host_port) {
            Some(response) => response,
            // The allow-list is curated; a missing embedded file is a bug
            None => ErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Asset {asset_name} missing from build"),
            )
            .into_response(),
        };
    }

    unknown_path(uri).await.into_response()
}

async fn unknown_path(uri: Uri) -> ErrorResponse {
    ErrorResponse::new(
        StatusCode::NOT_FOUND,
        format!("Unknown path {}", uri.path()),
    )
}

/// axum's `Json` writes `application/json` without a charset; the wire
/// contract is `application/json; charset=UTF-8`.
async fn set_json_charset(mut response: Response) -> Response {
    let is_bare_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .is_some_and(|value| value.as_bytes() == b"application/json");
    if is_bare_json {
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json; charset=UTF-8"),
        );
    }
    response
}

/// Best-effort outbound IP for the startup banner: connect a UDP socket to
/// an arbitrary public host (no packet is sent) and read the local address,
/// falling back to loopback.
fn outbound_ip() -> IpAddr {
    let probe = || -> std::io::Result<IpAddr> {
        let socket = UdpSocket::bind("0.0.0.0:0")?;
        socket.connect("8.8.8.8:80")?;
        Ok(socket.local_addr()?.ip())
    };
    probe().unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    info!("Shutdown signal received");
}
