use axum::http::{HeaderName, HeaderValue, Request};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Stamps each request with a fresh UUID unless the caller already sent one.
#[derive(Clone, Default)]
pub struct MakeUuidRequestId;

impl MakeRequestId for MakeUuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let value = HeaderValue::from_str(&Uuid::new_v4().to_string()).ok()?;
        Some(RequestId::new(value))
    }
}

/// Layer that assigns the `x-request-id` header on incoming requests.
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeUuidRequestId> {
    SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeUuidRequestId)
}

/// Layer that copies the request's `x-request-id` onto the response, so
/// clients can quote it when reporting a failed call.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(REQUEST_ID_HEADER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_distinct_request_ids() {
        let mut make = MakeUuidRequestId;
        let request = Request::new(());
        let first = make.make_request_id(&request).unwrap();
        let second = make.make_request_id(&request).unwrap();
        assert_ne!(first.header_value(), second.header_value());
    }

    #[test]
    fn should_generate_hyphenated_uuid_values() {
        let mut make = MakeUuidRequestId;
        let request = Request::new(());
        let id = make.make_request_id(&request).unwrap();
        let value = id.header_value().to_str().unwrap();
        assert_eq!(value.len(), 36);
        assert!(Uuid::parse_str(value).is_ok());
    }
}
