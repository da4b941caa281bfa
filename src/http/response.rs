//! HTTP response building module

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::function::FunctionResponse;

/// Convert a function response into a hyper response
///
/// An unrepresentable status or header degrades to a bare 500.
pub fn into_hyper_response(resp: FunctionResponse) -> Response<Full<Bytes>> {
    let FunctionResponse {
        status,
        headers,
        body,
    } = resp;

    let mut builder = Response::builder().status(status);
    for (key, value) in &headers {
        builder = builder.header(key.as_str(), value.as_str());
    }

    builder
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error(&status.to_string(), &e);
            build_500_response()
        })
}

/// Build 500 Internal Server Error response
pub fn build_500_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("500 Internal Server Error")))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            let mut resp = Response::new(Full::new(Bytes::from("500 Internal Server Error")));
            *resp.status_mut() = hyper::StatusCode::INTERNAL_SERVER_ERROR;
            resp
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
