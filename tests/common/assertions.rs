//! Response assertions
//!
//! Checks for the two error body shapes the API returns: `{"msg": ...}` and
//! `{"errors": [{"param": ..., "msg": ...}]}`.

use axum::http::StatusCode;
use axum_test::TestResponse;
use pretty_assertions::assert_eq;
use serde_json::Value;

/// Assert a status code and a `{"msg": ...}` body
pub fn assert_msg(response: &TestResponse, status: StatusCode, msg: &str) {
    assert_eq!(response.status_code(), status, "body: {}", response.text());
    assert_eq!(response.json::<Value>()["msg"], msg);
}

/// Assert a 400 validation response listing exactly these field errors
pub fn assert_field_errors(response: &TestResponse, expected: &[(&str, &str)]) {
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "body: {}", response.text());

    let body = response.json::<Value>();
    let errors: Vec<(String, String)> = body["errors"]
        .as_array()
        .expect("validation body has an errors array")
        .iter()
        .map(|e| {
            (
                e["param"].as_str().unwrap_or_default().to_string(),
                e["msg"].as_str().unwrap_or_default().to_string(),
            )
        })
        .collect();

    let expected: Vec<(String, String)> = expected
        .iter()
        .map(|(param, msg)| (param.to_string(), msg.to_string()))
        .collect();

    assert_eq!(errors, expected);
}
