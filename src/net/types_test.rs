use super::*;

// =============================================================
// AuthError classification
// =============================================================

#[test]
fn body_code_401_is_invalid_credentials() {
    let body = ApiErrorBody {
        code: 401,
        message: "unauthorized".to_owned(),
    };
    assert_eq!(
        AuthError::from_error_body(Some(&body)),
        AuthError::InvalidCredentials
    );
}

#[test]
fn other_body_codes_are_unknown() {
    for code in [400, 403, 422, 500, 503] {
        let body = ApiErrorBody {
            code,
            message: String::new(),
        };
        assert_eq!(AuthError::from_error_body(Some(&body)), AuthError::Unknown);
    }
}

#[test]
fn missing_body_is_unknown() {
    assert_eq!(AuthError::from_error_body(None), AuthError::Unknown);
}

#[test]
fn auth_error_messages() {
    assert_eq!(
        AuthError::InvalidCredentials.message(),
        "Invalid email or password"
    );
    assert_eq!(AuthError::Unknown.message(), "An error occurred during login");
}

// =============================================================
// Wire formats
// =============================================================

#[test]
fn login_response_parses_envelope() {
    let raw = r#"{"data":{"token":"abc","user":{"id":7,"email":"user@example.com"}}}"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.data.0["token"], "abc");
    assert_eq!(resp.data.0["user"]["id"], 7);
}

#[test]
fn error_body_parses_without_message() {
    let body: ApiErrorBody = serde_json::from_str(r#"{"code":401}"#).unwrap();
    assert_eq!(body.code, 401);
    assert!(body.message.is_empty());
}

#[test]
fn session_serializes_transparently() {
    let session = Session(serde_json::json!({"token": "abc"}));
    let raw = serde_json::to_value(&session).unwrap();
    assert_eq!(raw, serde_json::json!({"token": "abc"}));
}
