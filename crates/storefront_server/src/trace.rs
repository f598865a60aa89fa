//! Per-request access logging.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use log::{info, warn};
use std::time::Instant;
use uuid::Uuid;

pub async fn log_requests(request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;
    let status = response.status();
    let duration_ms = started_at.elapsed().as_millis();

    if status.is_server_error() {
        warn!(
            "event=http_request module=server status={} method={} path={} duration_ms={} request_id={}",
            status.as_u16(),
            method,
            path,
            duration_ms,
            request_id
        );
    } else {
        info!(
            "event=http_request module=server status={} method={} path={} duration_ms={} request_id={}",
            status.as_u16(),
            method,
            path,
            duration_ms,
            request_id
        );
    }

    response
}
