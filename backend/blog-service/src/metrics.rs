//! Prometheus metrics for blog-service.
//!
//! Collectors are registered in the default registry and rendered by the
//! `/metrics` handler.

use actix_web::HttpResponse;
use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec,
    TextEncoder,
};

lazy_static! {
    /// Upvote toggles segmented by outcome (added/removed).
    pub static ref UPVOTE_TOGGLES_TOTAL: IntCounterVec = register_int_counter_vec!(
        "blog_upvote_toggles_total",
        "Upvote toggles segmented by resulting action",
        &["action"]
    )
    .expect("failed to register blog_upvote_toggles_total");

    /// Successful post writes segmented by operation (create/update/delete).
    pub static ref POST_MUTATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "blog_post_mutations_total",
        "Successful post mutations segmented by operation",
        &["operation"]
    )
    .expect("failed to register blog_post_mutations_total");

    /// Ownership checks that rejected the caller.
    pub static ref AUTHORIZATION_DENIED_TOTAL: IntCounterVec = register_int_counter_vec!(
        "blog_authorization_denied_total",
        "Requests rejected because the caller does not own the resource",
        &["operation"]
    )
    .expect("failed to register blog_authorization_denied_total");

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "blog_http_request_duration_seconds",
        "HTTP request duration segmented by method and status",
        &["method", "status"]
    )
    .expect("failed to register blog_http_request_duration_seconds");
}

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}
