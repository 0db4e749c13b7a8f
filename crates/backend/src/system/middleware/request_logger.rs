use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Logs method, path, status, duration and response size of every request
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                "{} {} -> {} in {}ms, body read failed: {}",
                method,
                path,
                parts.status.as_u16(),
                start.elapsed().as_millis(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let status = parts.status.as_u16();
    let duration = start.elapsed().as_millis();
    if parts.status.is_server_error() {
        tracing::error!("{} {} -> {} in {}ms", method, path, status, duration);
    } else {
        tracing::info!(
            "{} {} -> {} in {}ms ({} bytes)",
            method,
            path,
            status,
            duration,
            bytes.len()
        );
    }

    Response::from_parts(parts, Body::from(bytes))
}
