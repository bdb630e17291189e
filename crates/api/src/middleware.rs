use std::time::{Duration, Instant};

use axum::{extract::Request, middleware::Next, response::Response};

/// Log one line per request with method, path, status and latency.
pub async fn request_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let res = next.run(req).await;
    let elapsed_ms = elapsed_millis(started.elapsed());

    tracing::info!(
        %method,
        %path,
        status = res.status().as_u16(),
        elapsed_ms,
        "request"
    );
    res
}

/// Whole milliseconds, saturating at `u64::MAX`.
fn elapsed_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_millis_saturates_instead_of_wrapping() {
        assert_eq!(elapsed_millis(Duration::from_micros(2_500)), 2);
        assert_eq!(elapsed_millis(Duration::MAX), u64::MAX);
    }
}
