//! W3C `traceparent` extraction for incoming requests.

use opentelemetry::{Context, global, propagation::Extractor, trace::TraceContextExt as _};
use salvo::http::{HeaderMap, HeaderName};

/// Remote parent carried by the request, if its span context is valid.
pub(super) fn extract_parent_context(headers: &HeaderMap) -> Option<Context> {
    // Start from an empty context so a request without trace headers does not
    // inherit whatever span is active in-process.
    let context = global::get_text_map_propagator(|propagator| {
        propagator.extract_with_context(&Context::new(), &RequestHeaders(headers))
    });

    let is_valid = context.span().span_context().is_valid();

    is_valid.then_some(context)
}

struct RequestHeaders<'a>(&'a HeaderMap);

impl Extractor for RequestHeaders<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|value| value.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(HeaderName::as_str).collect()
    }
}
