use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use futures_util::StreamExt;
use std::{
    cmp::Ordering,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    time::{Duration, SystemTime, UNIX_EPOCH},
};
use tokio::time::Instant;
use tower_http::services::{ServeDir, ServeFile};
use url::Url;

use crate::contact::{validate, ContactForm, ContactResponse};

const DEFAULT_CONTACT_RELAY_TIMEOUT_MS: u64 = 6_000;
const DEFAULT_CONTACT_RELAY_CONNECT_TIMEOUT_MS: u64 = 3_000;
const DEFAULT_CONTACT_RELAY_MAX_RESPONSE_BYTES: usize = 64 * 1024;
const DEFAULT_CONTACT_MAX_FIELD_CHARS: usize = 2_000;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const CONTACT_RELAY_TIMEOUT_MS_BOUNDS: (u64, u64) = (100, 120_000);
const CONTACT_RELAY_CONNECT_TIMEOUT_MS_BOUNDS: (u64, u64) = (100, 30_000);
const CONTACT_RELAY_MAX_RESPONSE_BYTES_BOUNDS: (usize, usize) = (1_024, 1024 * 1024);
const CONTACT_MAX_FIELD_CHARS_BOUNDS: (usize, usize) = (100, 20_000);

const USER_AGENT: &str = "portfolio-contact-relay/1.0";
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, PartialEq, Eq)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

#[derive(Clone)]
struct ContactRuntimeConfig {
    relay_url: Option<Url>,
    relay_timeout: Duration,
    relay_connect_timeout: Duration,
    relay_max_response_bytes: usize,
    max_field_chars: usize,
    log_level: LogLevel,
}

impl ContactRuntimeConfig {
    fn from_env() -> Self {
        let relay_timeout_ms = parse_env_u64_with_bounds(
            "CONTACT_RELAY_TIMEOUT_MS",
            DEFAULT_CONTACT_RELAY_TIMEOUT_MS,
            CONTACT_RELAY_TIMEOUT_MS_BOUNDS,
        );
        let relay_connect_timeout_ms = parse_env_u64_with_bounds(
            "CONTACT_RELAY_CONNECT_TIMEOUT_MS",
            DEFAULT_CONTACT_RELAY_CONNECT_TIMEOUT_MS,
            CONTACT_RELAY_CONNECT_TIMEOUT_MS_BOUNDS,
        );
        let relay_max_response_bytes = parse_env_usize_with_bounds(
            "CONTACT_RELAY_MAX_RESPONSE_BYTES",
            DEFAULT_CONTACT_RELAY_MAX_RESPONSE_BYTES,
            CONTACT_RELAY_MAX_RESPONSE_BYTES_BOUNDS,
        );
        let max_field_chars = parse_env_usize_with_bounds(
            "CONTACT_MAX_FIELD_CHARS",
            DEFAULT_CONTACT_MAX_FIELD_CHARS,
            CONTACT_MAX_FIELD_CHARS_BOUNDS,
        );

        Self {
            relay_url: parse_env_http_url("CONTACT_RELAY_URL"),
            relay_timeout: Duration::from_millis(relay_timeout_ms),
            relay_connect_timeout: Duration::from_millis(relay_connect_timeout_ms),
            relay_max_response_bytes,
            max_field_chars,
            log_level: parse_log_level("LOG_LEVEL", DEFAULT_LOG_LEVEL),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    config: ContactRuntimeConfig,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let bind_address = format!("0.0.0.0:{port}");
    let config = ContactRuntimeConfig::from_env();

    if config.relay_url.is_none() {
        log_event(
            &config,
            LogLevel::Info,
            "contact_relay_unconfigured",
            serde_json::json!({
                "hint": "set CONTACT_RELAY_URL to enable message delivery",
            }),
        );
    }

    let state = AppState { config };
    let static_service = ServeDir::new("dist").not_found_service(ServeFile::new("dist/index.html"));

    let app = Router::new()
        .route("/api/contact", post(submit_contact))
        .fallback_service(static_service)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    println!("server listening on http://127.0.0.1:{port}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn submit_contact(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Json(form): Json<ContactForm>,
) -> impl IntoResponse {
    let request_started_at = Instant::now();
    let request_id = resolve_request_id(&headers);

    log_event(
        &state.config,
        LogLevel::Info,
        "contact_request_start",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "method": method.as_str(),
            "path": uri.path(),
        }),
    );

    if let Some(error_class) = reject_payload(&form, state.config.max_field_chars) {
        log_event(
            &state.config,
            LogLevel::Info,
            "contact_request_failed",
            serde_json::json!({
                "request_id": request_id.as_str(),
                "error_class": error_class,
                "duration_ms": request_started_at.elapsed().as_millis(),
            }),
        );
        return json_response(
            StatusCode::BAD_REQUEST,
            ContactResponse::rejected("invalid submission"),
            &request_id,
        );
    }

    let Some(relay_url) = state.config.relay_url.clone() else {
        log_event(
            &state.config,
            LogLevel::Info,
            "contact_request_failed",
            serde_json::json!({
                "request_id": request_id.as_str(),
                "error_class": "relay_unconfigured",
                "duration_ms": request_started_at.elapsed().as_millis(),
            }),
        );
        return json_response(
            StatusCode::SERVICE_UNAVAILABLE,
            ContactResponse::rejected("message delivery is not configured"),
            &request_id,
        );
    };

    match relay_message(&form, relay_url, &state.config).await {
        Ok(()) => {
            log_event(
                &state.config,
                LogLevel::Info,
                "contact_request_complete",
                serde_json::json!({
                    "request_id": request_id.as_str(),
                    "status": StatusCode::OK.as_u16(),
                    "duration_ms": request_started_at.elapsed().as_millis(),
                }),
            );
            json_response(StatusCode::OK, ContactResponse::accepted(), &request_id)
        }
        Err(error_class) => {
            log_event(
                &state.config,
                LogLevel::Info,
                "contact_relay_failed",
                serde_json::json!({
                    "request_id": request_id.as_str(),
                    "error_class": error_class,
                    "duration_ms": request_started_at.elapsed().as_millis(),
                }),
            );
            json_response(
                StatusCode::BAD_GATEWAY,
                ContactResponse::rejected("message could not be delivered"),
                &request_id,
            )
        }
    }
}

/// Size guard first, content rules after; the content rules are the same
/// ones the form applies client-side.
fn reject_payload(form: &ContactForm, max_field_chars: usize) -> Option<&'static str> {
    if has_oversized_field(form, max_field_chars) {
        return Some("field_too_long");
    }

    if !validate(form).is_empty() {
        return Some("validation_failed");
    }

    None
}

fn has_oversized_field(form: &ContactForm, max_field_chars: usize) -> bool {
    [&form.name, &form.email, &form.subject, &form.message]
        .into_iter()
        .any(|value| value.chars().count() > max_field_chars)
}

async fn relay_message(
    form: &ContactForm,
    relay_url: Url,
    config: &ContactRuntimeConfig,
) -> Result<(), &'static str> {
    let client = reqwest::Client::builder()
        .timeout(config.relay_timeout)
        .connect_timeout(config.relay_connect_timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|_| "client_build_failed")?;

    let response = client
        .post(relay_url)
        .json(form)
        .send()
        .await
        .map_err(classify_send_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(status_error_class(status));
    }

    // The reply body is ignored, but drain it with a cap so a misbehaving
    // relay cannot stream unbounded data.
    read_limited_body(response, config.relay_max_response_bytes)
        .await
        .map(|_| ())
}

fn classify_send_error(error: reqwest::Error) -> &'static str {
    if error.is_timeout() {
        "relay_timeout"
    } else if error.is_connect() {
        "relay_connect_failed"
    } else {
        "relay_request_failed"
    }
}

fn status_error_class(status: StatusCode) -> &'static str {
    if status.is_client_error() {
        "relay_rejected"
    } else if status.is_server_error() {
        "relay_upstream_error"
    } else {
        "relay_unexpected_status"
    }
}

async fn read_limited_body(
    response: reqwest::Response,
    max_response_bytes: usize,
) -> Result<String, &'static str> {
    let mut stream = response.bytes_stream();
    let mut body: Vec<u8> = Vec::with_capacity(8192);

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(|_| "relay_body_read_failed")?;

        if body.len() + chunk.len() > max_response_bytes {
            return Err("relay_body_too_large");
        }

        body.extend_from_slice(&chunk);
    }

    Ok(String::from_utf8_lossy(&body).to_string())
}

fn json_response(
    status: StatusCode,
    payload: ContactResponse,
    request_id: &str,
) -> axum::response::Response {
    let mut headers = HeaderMap::new();
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response_with_request_id(status, headers, Json(payload), request_id)
}

fn response_with_request_id(
    status: StatusCode,
    mut headers: HeaderMap,
    payload: impl IntoResponse,
    request_id: &str,
) -> axum::response::Response {
    if let Ok(request_id_header) = HeaderValue::from_str(request_id) {
        headers.insert(REQUEST_ID_HEADER, request_id_header);
    }
    (status, headers, payload).into_response()
}

fn parse_env_u64_with_bounds(name: &str, default: u64, bounds: (u64, u64)) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_usize_with_bounds(name: &str, default: usize, bounds: (usize, usize)) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_env_http_url(name: &str) -> Option<Url> {
    let value = parse_env_non_empty_string(name)?;
    let parsed = Url::parse(&value).ok()?;

    if parsed.scheme() == "http" || parsed.scheme() == "https" {
        Some(parsed)
    } else {
        None
    }
}

fn parse_log_level(name: &str, default: LogLevel) -> LogLevel {
    match parse_env_non_empty_string(name)
        .unwrap_or_else(|| default.as_str().to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        _ => default,
    }
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

fn log_event(
    config: &ContactRuntimeConfig,
    level: LogLevel,
    event: &str,
    fields: serde_json::Value,
) {
    if level < config.log_level {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert(
        "level".to_string(),
        serde_json::Value::String(level.as_str().to_string()),
    );
    payload.insert(
        "event".to_string(),
        serde_json::Value::String(event.to_string()),
    );

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> ContactForm {
        ContactForm {
            name: "Swaraj Kumar".to_string(),
            email: "user@example.com".to_string(),
            subject: "Collaboration".to_string(),
            message: "I would like to discuss a project.".to_string(),
        }
    }

    #[test]
    fn complete_payload_is_accepted() {
        assert_eq!(
            reject_payload(&complete_form(), DEFAULT_CONTACT_MAX_FIELD_CHARS),
            None
        );
    }

    #[test]
    fn invalid_payload_is_classified_as_validation_failure() {
        let mut form = complete_form();
        form.email = "not-an-email".to_string();

        assert_eq!(
            reject_payload(&form, DEFAULT_CONTACT_MAX_FIELD_CHARS),
            Some("validation_failed")
        );
    }

    #[test]
    fn oversized_field_is_rejected_before_content_rules() {
        let mut form = complete_form();
        form.message = "a".repeat(DEFAULT_CONTACT_MAX_FIELD_CHARS + 1);

        assert_eq!(
            reject_payload(&form, DEFAULT_CONTACT_MAX_FIELD_CHARS),
            Some("field_too_long")
        );
    }

    #[test]
    fn field_at_the_size_limit_passes_the_guard() {
        let mut form = complete_form();
        form.message = "a".repeat(DEFAULT_CONTACT_MAX_FIELD_CHARS);

        assert_eq!(
            reject_payload(&form, DEFAULT_CONTACT_MAX_FIELD_CHARS),
            None
        );
    }

    #[test]
    fn out_of_range_env_values_fall_back_to_defaults() {
        std::env::set_var("TEST_CONTACT_TIMEOUT_OUT_OF_RANGE", "999999999");
        assert_eq!(
            parse_env_u64_with_bounds(
                "TEST_CONTACT_TIMEOUT_OUT_OF_RANGE",
                DEFAULT_CONTACT_RELAY_TIMEOUT_MS,
                CONTACT_RELAY_TIMEOUT_MS_BOUNDS,
            ),
            DEFAULT_CONTACT_RELAY_TIMEOUT_MS
        );

        std::env::set_var("TEST_CONTACT_TIMEOUT_IN_RANGE", "2500");
        assert_eq!(
            parse_env_u64_with_bounds(
                "TEST_CONTACT_TIMEOUT_IN_RANGE",
                DEFAULT_CONTACT_RELAY_TIMEOUT_MS,
                CONTACT_RELAY_TIMEOUT_MS_BOUNDS,
            ),
            2_500
        );
    }

    #[test]
    fn relay_url_must_be_http() {
        std::env::set_var("TEST_CONTACT_RELAY_URL_FTP", "ftp://relay.example.com/send");
        assert!(parse_env_http_url("TEST_CONTACT_RELAY_URL_FTP").is_none());

        std::env::set_var(
            "TEST_CONTACT_RELAY_URL_HTTPS",
            "https://relay.example.com/send",
        );
        assert!(parse_env_http_url("TEST_CONTACT_RELAY_URL_HTTPS").is_some());
    }

    #[test]
    fn upstream_statuses_map_to_error_classes() {
        assert_eq!(
            status_error_class(StatusCode::UNPROCESSABLE_ENTITY),
            "relay_rejected"
        );
        assert_eq!(
            status_error_class(StatusCode::BAD_GATEWAY),
            "relay_upstream_error"
        );
        assert_eq!(
            status_error_class(StatusCode::MOVED_PERMANENTLY),
            "relay_unexpected_status"
        );
    }

    #[test]
    fn request_id_prefers_the_inbound_header() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("req-inbound-7"));
        assert_eq!(resolve_request_id(&headers), "req-inbound-7");

        let generated = resolve_request_id(&HeaderMap::new());
        assert!(generated.starts_with("req-"));
    }

    #[test]
    fn debug_logs_rank_below_info() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(matches!(
            parse_log_level("TEST_CONTACT_LOG_LEVEL_UNSET", LogLevel::Info),
            LogLevel::Info
        ));
    }

    #[test]
    fn rejected_response_serializes_its_error() {
        let accepted = serde_json::to_value(ContactResponse::accepted()).expect("serializable");
        assert_eq!(accepted, serde_json::json!({ "ok": true }));

        let rejected = serde_json::to_value(ContactResponse::rejected("invalid submission"))
            .expect("serializable");
        assert_eq!(
            rejected,
            serde_json::json!({ "ok": false, "error": "invalid submission" })
        );
    }
}
