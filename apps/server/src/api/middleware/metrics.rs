//! Metrics middleware - tracks HTTP request metrics

use axum::{extract::Request, middleware::Next, response::Response};
use prometheus::IntGauge;
use std::time::Instant;

/// Holds one unit of the in-flight gauge until dropped, so a request whose
/// future is cancelled mid-flight still gives it back.
struct InFlight(IntGauge);

impl InFlight {
    fn enter(gauge: IntGauge) -> Self {
        gauge.inc();
        Self(gauge)
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.dec();
    }
}

pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = crate::metrics::sanitize_path(req.uri().path());

    let _in_flight = InFlight::enter(
        crate::metrics::HTTP_REQUESTS_IN_FLIGHT.with_label_values(&[method.as_str(), path]),
    );

    let response = next.run(req).await;

    let status = response.status().as_u16().to_string();
    crate::metrics::HTTP_REQUESTS_TOTAL
        .with_label_values(&[method.as_str(), path, status.as_str()])
        .inc();
    crate::metrics::HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method.as_str(), path])
        .observe(start.elapsed().as_secs_f64());

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_flight_guard_releases_on_drop() {
        let gauge = IntGauge::new("in_flight_guard_test", "guard test").unwrap();

        let guard = InFlight::enter(gauge.clone());
        assert_eq!(gauge.get(), 1);

        drop(guard);
        assert_eq!(gauge.get(), 0);
    }
}
