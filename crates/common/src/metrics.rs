use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{
    register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec,
    TextEncoder,
};

// Prometheus metrics (default registry)
pub static REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "seller_api_requests_total",
        "Total HTTP requests handled, by method and status",
        &["method", "status"]
    )
    .expect("register requests_total")
});

pub static NOT_FOUND_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "seller_api_not_found_total",
        "Total lookups that missed their store"
    )
    .expect("register not_found_total")
});

pub static LICENSE_VERIFICATIONS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "seller_api_license_verifications_total",
        "Total successful license verifications"
    )
    .expect("register license_verifications_total")
});

/// Record one finished request.
pub fn record_request(method: &str, status: u16) {
    REQUESTS_TOTAL
        .with_label_values(&[method, &status.to_string()])
        .inc();
    if status == StatusCode::NOT_FOUND.as_u16() {
        NOT_FOUND_TOTAL.inc();
    }
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_requests_show_up_in_exposition() {
        record_request("GET", 404);
        LICENSE_VERIFICATIONS_TOTAL.inc();
        let (status, body) = encode_metrics();
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("seller_api_requests_total"));
        assert!(body.contains("seller_api_not_found_total"));
        assert!(body.contains("seller_api_license_verifications_total"));
    }
}
