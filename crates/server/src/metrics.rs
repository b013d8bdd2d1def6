use axum::{extract::Request, middleware::Next, response::{IntoResponse, Response}};
use common::metrics::{encode_metrics, record_request};

/// Count every finished request by method and status.
pub async fn track_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let resp = next.run(req).await;
    record_request(method.as_str(), resp.status().as_u16());
    resp
}

pub async fn metrics() -> impl IntoResponse {
    encode_metrics()
}
