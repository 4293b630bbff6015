//! Request inspection helpers.
//!
//! # Responsibilities
//! - Parse query strings into a multi-valued map
//! - Parse numeric parameters for `/delay` and `/error`
//! - Flatten request headers into a JSON object for echo
//! - Interpret POST bodies (JSON first, raw text fallback)

use std::collections::HashMap;
use std::time::Duration;

use axum::http::{HeaderMap, StatusCode};
use serde_json::{Map, Value};

use crate::error::RequestError;

/// Query parameters, each key mapping to every value it was given.
///
/// Blank values (`?ms=`) are dropped, so a blank parameter behaves as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    params: HashMap<String, Vec<String>>,
}

impl QueryParams {
    pub fn parse(query: Option<&str>) -> Self {
        let mut params: HashMap<String, Vec<String>> = HashMap::new();
        if let Some(query) = query {
            for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
                if value.is_empty() {
                    continue;
                }
                params
                    .entry(key.into_owned())
                    .or_default()
                    .push(value.into_owned());
            }
        }
        Self { params }
    }

    /// First value given for `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.params
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

/// Read `ms` as a sleep duration, falling back to `default_ms`.
pub fn delay_param(query: &QueryParams, default_ms: f64) -> Result<Duration, RequestError> {
    let ms = match query.first("ms") {
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| RequestError::InvalidNumber {
                param: "ms",
                value: raw.to_string(),
            })?,
        None => default_ms,
    };

    Duration::try_from_secs_f64(ms / 1000.0)
        .map_err(|_| RequestError::InvalidDelay(ms.to_string()))
}

/// Read `code` as an HTTP status, falling back to `default_code`.
///
/// Only final statuses (200..=999) are accepted; a 1xx cannot end a response.
pub fn status_param(query: &QueryParams, default_code: u16) -> Result<StatusCode, RequestError> {
    let code = match query.first("code") {
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| RequestError::InvalidNumber {
                param: "code",
                value: raw.to_string(),
            })?,
        None => i64::from(default_code),
    };

    u16::try_from(code)
        .ok()
        .filter(|code| *code >= 200)
        .and_then(|code| StatusCode::from_u16(code).ok())
        .ok_or_else(|| RequestError::InvalidStatusCode(code.to_string()))
}

/// Render seconds with at least one decimal place (`1.0`, `0.05`, `2.5`).
pub fn format_seconds(secs: f64) -> String {
    if secs.fract() == 0.0 {
        format!("{:.1}", secs)
    } else {
        secs.to_string()
    }
}

/// Collect headers into a JSON object; repeated names are joined with ", ".
pub fn header_map(headers: &HeaderMap) -> Map<String, Value> {
    let mut map = Map::new();
    for name in headers.keys() {
        let joined = headers
            .get_all(name)
            .iter()
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
            .collect::<Vec<_>>()
            .join(", ");
        map.insert(name.as_str().to_string(), Value::String(joined));
    }
    map
}

/// Interpret a POST body.
///
/// Valid JSON is returned as-is. Anything else, including an empty body, is
/// wrapped as `{"raw": "<text>"}`.
pub fn parse_body(bytes: &[u8]) -> Value {
    if !bytes.is_empty() {
        if let Ok(value) = serde_json::from_slice::<Value>(bytes) {
            return value;
        }
    }

    let mut wrapped = Map::new();
    wrapped.insert(
        "raw".to_string(),
        Value::String(String::from_utf8_lossy(bytes).into_owned()),
    );
    Value::Object(wrapped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use serde_json::json;

    #[test]
    fn test_query_repeated_and_blank() {
        let q = QueryParams::parse(Some("ms=5&ms=7&code=&x=a%20b"));
        assert_eq!(q.first("ms"), Some("5"));
        assert_eq!(q.first("code"), None);
        assert_eq!(q.first("x"), Some("a b"));
        assert_eq!(QueryParams::parse(None).first("ms"), None);
    }

    #[test]
    fn test_delay_param() {
        let q = QueryParams::parse(Some("ms=50"));
        assert_eq!(delay_param(&q, 1000.0).unwrap(), Duration::from_millis(50));

        let q = QueryParams::parse(None);
        assert_eq!(delay_param(&q, 1000.0).unwrap(), Duration::from_secs(1));

        let q = QueryParams::parse(Some("ms=abc"));
        assert_eq!(
            delay_param(&q, 1000.0).unwrap_err(),
            RequestError::InvalidNumber {
                param: "ms",
                value: "abc".into()
            }
        );

        let q = QueryParams::parse(Some("ms=-10"));
        assert!(matches!(
            delay_param(&q, 1000.0),
            Err(RequestError::InvalidDelay(_))
        ));

        let q = QueryParams::parse(Some("ms=inf"));
        assert!(matches!(
            delay_param(&q, 1000.0),
            Err(RequestError::InvalidDelay(_))
        ));
    }

    #[test]
    fn test_status_param() {
        let q = QueryParams::parse(Some("code=418"));
        assert_eq!(status_param(&q, 500).unwrap(), StatusCode::IM_A_TEAPOT);

        let q = QueryParams::parse(None);
        assert_eq!(
            status_param(&q, 500).unwrap(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let q = QueryParams::parse(Some("code=200"));
        assert_eq!(status_param(&q, 500).unwrap(), StatusCode::OK);

        let q = QueryParams::parse(Some("code=4.5"));
        assert!(matches!(
            status_param(&q, 500),
            Err(RequestError::InvalidNumber { param: "code", .. })
        ));

        for bad in [
            "code=99", "code=100", "code=150", "code=199", "code=1000", "code=-1", "code=70000",
        ] {
            let q = QueryParams::parse(Some(bad));
            assert!(matches!(
                status_param(&q, 500),
                Err(RequestError::InvalidStatusCode(_))
            ));
        }
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(0.05), "0.05");
        assert_eq!(format_seconds(1.0), "1.0");
        assert_eq!(format_seconds(2.5), "2.5");
        assert_eq!(format_seconds(0.0), "0.0");
    }

    #[test]
    fn test_header_map_joins_repeats() {
        let mut headers = HeaderMap::new();
        headers.insert("host", HeaderValue::from_static("example"));
        headers.append("x-tag", HeaderValue::from_static("a"));
        headers.append("x-tag", HeaderValue::from_static("b"));

        let map = header_map(&headers);
        assert_eq!(map["host"], "example");
        assert_eq!(map["x-tag"], "a, b");
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(br#"{"a":1}"#), json!({"a": 1}));
        assert_eq!(parse_body(b"[1,2]"), json!([1, 2]));
        assert_eq!(parse_body(b"hello"), json!({"raw": "hello"}));
        assert_eq!(parse_body(b""), json!({"raw": ""}));
    }
}
