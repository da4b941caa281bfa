//! Request dispatch module
//!
//! Every request, whatever its path, is handed to the function.

use crate::config::AppState;
use crate::function::FunctionRequest;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response, Version};
use std::net::SocketAddr;
use std::time::Instant;

/// Main entry point for HTTP request handling
///
/// The request body is never read, so any body type is accepted.
pub fn handle_request<B>(
    req: &Request<B>,
    peer_addr: Option<SocketAddr>,
    state: &AppState,
) -> Response<Full<Bytes>> {
    let started = Instant::now();
    let access_log = state.access_log_enabled();
    let entry = access_log.then(|| build_access_entry(req, peer_addr));

    let function_req = FunctionRequest::new(req.method().clone(), req.uri().to_string());
    let function_resp = state.trigger.handle(&function_req);
    let body_bytes = function_resp.body.len();
    let response = http::into_hyper_response(function_resp);

    if let Some(mut entry) = entry {
        entry.complete(response.status().as_u16(), body_bytes, started.elapsed());
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    response
}

fn build_access_entry<B>(req: &Request<B>, peer_addr: Option<SocketAddr>) -> AccessLogEntry {
    let remote_addr = peer_addr.map_or_else(|| "-".to_string(), |a| a.ip().to_string());
    let mut entry = AccessLogEntry::new(
        remote_addr,
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = version_label(req.version()).to_string();
    entry.referer = header_value(req, "referer");
    entry.user_agent = header_value(req, "user-agent");
    entry
}

fn header_value<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use chrono::NaiveDateTime;
    use http_body_util::{BodyExt, Empty};
    use hyper::{Method, StatusCode};

    fn state() -> AppState {
        let mut cfg = Config::load_from("does-not-exist/config").unwrap();
        cfg.logging.access_log = false;
        AppState::new(&cfg)
    }

    fn request(method: Method, uri: &str) -> Request<Empty<Bytes>> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Empty::new())
            .unwrap()
    }

    async fn body_string(resp: Response<Full<Bytes>>) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_get_api_hello() {
        let resp = handle_request(&request(Method::GET, "/api/hello"), None, &state());
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["content-type"], "text/plain");
        assert_eq!(resp.headers()["access-control-allow-origin"], "*");

        let body = body_string(resp).await;
        let stamp = body
            .strip_prefix("Hello, World! Current time: ")
            .expect("greeting prefix");
        assert!(NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M:%S").is_ok());
    }

    #[tokio::test]
    async fn test_post_with_body() {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/api/hello")
            .header("content-type", "application/json")
            .body(Full::new(Bytes::from(r#"{"ignored":true}"#)))
            .unwrap();
        let resp = handle_request(&req, None, &state());
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_string(resp).await;
        assert!(body.contains("Hello, World!"));
        assert!(body.contains("Current time:"));
    }

    #[tokio::test]
    async fn test_options_api_hello() {
        let resp = handle_request(&request(Method::OPTIONS, "/api/hello"), None, &state());
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            resp.headers()["access-control-allow-methods"],
            "GET, POST, OPTIONS"
        );
        assert_eq!(resp.headers()["access-control-max-age"], "86400");
        assert!(body_string(resp).await.is_empty());
    }

    #[test]
    fn test_any_path_is_served() {
        let resp = handle_request(&request(Method::GET, "/some/other?x=1"), None, &state());
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[test]
    fn test_access_log_enabled_does_not_change_response() {
        let cfg = Config::load_from("does-not-exist/config").unwrap();
        let state = AppState::new(&cfg);
        let peer: SocketAddr = "10.0.0.7:51234".parse().unwrap();
        let resp = handle_request(&request(Method::GET, "/api/hello"), Some(peer), &state);
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[test]
    fn test_access_entry_fields() {
        let req = Request::builder()
            .method(Method::GET)
            .uri("/api/hello?name=x")
            .version(Version::HTTP_10)
            .header("user-agent", "curl/8.0")
            .body(())
            .unwrap();
        let peer: SocketAddr = "10.0.0.7:51234".parse().unwrap();
        let entry = build_access_entry(&req, Some(peer));
        assert_eq!(entry.remote_addr, "10.0.0.7");
        assert_eq!(entry.path, "/api/hello");
        assert_eq!(entry.query.as_deref(), Some("name=x"));
        assert_eq!(entry.http_version, "1.0");
        assert_eq!(entry.user_agent.as_deref(), Some("curl/8.0"));
        assert!(entry.referer.is_none());

        let anonymous = build_access_entry(&req, None);
        assert_eq!(anonymous.remote_addr, "-");
    }
}
