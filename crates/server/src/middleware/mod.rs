//! HTTP middleware stack shared by the services.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. `TraceLayer` (request span with status and latency)
//! 3. Request ID (recorded into the span, echoed in the response)
//! 4. Panic catcher (handler panics become 500)

pub mod request_id;

use axum::http::{Request, Response};
use tower_http::trace::{DefaultOnResponse, MakeSpan, OnResponse};
use tracing::Span;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};

/// Span factory for `TraceLayer`, tagged with the owning service.
///
/// Leaves `request_id`, `status` and `latency_ms` empty so later stages can
/// record them.
#[derive(Debug, Clone, Copy)]
pub struct HttpMakeSpan {
    service: &'static str,
}

impl HttpMakeSpan {
    #[must_use]
    pub const fn new(service: &'static str) -> Self {
        Self { service }
    }
}

impl<B> MakeSpan<B> for HttpMakeSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "http_request",
            service = self.service,
            method = %request.method(),
            uri = %request.uri(),
            request_id = tracing::field::Empty,
            status = tracing::field::Empty,
            latency_ms = tracing::field::Empty,
        )
    }
}

/// Response hook for `TraceLayer` that fills in status and latency.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpOnResponse;

impl<B> OnResponse<B> for HttpOnResponse {
    fn on_response(self, response: &Response<B>, latency: std::time::Duration, span: &Span) {
        span.record("status", response.status().as_u16());
        #[allow(clippy::cast_possible_truncation)] // Request latency never exceeds u64 millis
        let latency_ms = latency.as_millis() as u64;
        span.record("latency_ms", latency_ms);
        DefaultOnResponse::default().on_response(response, latency, span);
    }
}
