use super::*;
use serde_json::json;

fn rejected(status: u16, status_text: &str, detail: Option<serde_json::Value>) -> RemoteOutcome {
    RemoteOutcome::Rejected {
        status,
        status_text: status_text.to_owned(),
        detail,
    }
}

// =============================================================
// Success
// =============================================================

#[test]
fn login_success_persists_session_and_redirects_once() {
    let outcome = RemoteOutcome::Success(json!({
        "token": "t",
        "user_id": "1",
        "username": "u",
        "email": "e"
    }));
    let n = normalize(FormKind::Login, &outcome);

    assert!(n.success);
    assert_eq!(n.redirect, Some("/dashboard"));
    assert_eq!(
        n.session,
        Some(SessionRecord {
            token: "t".to_owned(),
            user_id: "1".to_owned(),
            username: "u".to_owned(),
            email: "e".to_owned(),
        })
    );
}

#[test]
fn login_success_stringifies_numeric_user_id() {
    let outcome = RemoteOutcome::Success(json!({
        "token": "t",
        "user_id": 42,
        "username": "u",
        "email": "e"
    }));
    let n = normalize(FormKind::Login, &outcome);
    assert_eq!(n.session.expect("session").user_id, "42");
}

#[test]
fn signup_success_redirects_to_login() {
    let outcome = RemoteOutcome::Success(json!({
        "message": "Account created successfully.",
        "user": {"id": 7, "username": "u", "email": "e"},
        "token": "t"
    }));
    let n = normalize(FormKind::Signup, &outcome);

    assert!(n.success);
    assert_eq!(n.redirect, Some("/login"));
    assert_eq!(n.message, "Account created successfully.");
    let session = n.session.expect("token present, session persisted");
    assert_eq!(session.user_id, "7");
}

#[test]
fn signup_success_without_token_persists_nothing() {
    let outcome = RemoteOutcome::Success(json!({"message": "ok"}));
    let n = normalize(FormKind::Signup, &outcome);
    assert!(n.success);
    assert!(n.session.is_none());
}

#[test]
fn success_with_non_object_payload_is_unexpected() {
    let n = normalize(FormKind::Login, &RemoteOutcome::Success(json!("ok")));
    assert!(!n.success);
    assert_eq!(n.message, "An unexpected error occurred. Please try again.");
}

// =============================================================
// Structured failure detail precedence
// =============================================================

#[test]
fn detail_field_used_verbatim() {
    let n = normalize(
        FormKind::Login,
        &rejected(403, "Forbidden", Some(json!({"detail": "Account locked."}))),
    );
    assert_eq!(n.message, "Account locked.");
    assert!(!n.success);
}

#[test]
fn non_field_errors_first_element_wins() {
    let n = normalize(
        FormKind::Login,
        &rejected(400, "Bad Request", Some(json!({"non_field_errors": ["bad creds"]}))),
    );
    assert_eq!(n.message, "bad creds");
}

#[test]
fn detail_outranks_non_field_errors() {
    let n = normalize(
        FormKind::Signup,
        &rejected(
            400,
            "Bad Request",
            Some(json!({"non_field_errors": ["second"], "detail": "first"})),
        ),
    );
    assert_eq!(n.message, "first");
}

#[test]
fn signup_checks_password_before_email() {
    let n = normalize(
        FormKind::Signup,
        &rejected(
            400,
            "Bad Request",
            Some(json!({"password": ["too common"], "email": ["invalid"]})),
        ),
    );
    assert_eq!(n.message, "too common");
}

#[test]
fn signup_checks_email_before_username() {
    let n = normalize(
        FormKind::Signup,
        &rejected(
            400,
            "Bad Request",
            Some(json!({"username": ["taken"], "email": ["already registered"]})),
        ),
    );
    assert_eq!(n.message, "already registered");
}

#[test]
fn login_checks_email_before_password() {
    let n = normalize(
        FormKind::Login,
        &rejected(
            400,
            "Bad Request",
            Some(json!({"password": ["required"], "email": ["invalid"]})),
        ),
    );
    assert_eq!(n.message, "invalid");
}

#[test]
fn unrecognized_fields_flatten_in_order() {
    let n = normalize(
        FormKind::Login,
        &rejected(
            400,
            "Bad Request",
            Some(json!({"foo": ["x"], "bar": ["y", "z"]})),
        ),
    );
    assert_eq!(n.message, "x, y, z");
}

#[test]
fn empty_message_arrays_fall_through_to_flatten() {
    let n = normalize(
        FormKind::Signup,
        &rejected(
            400,
            "Bad Request",
            Some(json!({"password": [], "age": ["must be a number"]})),
        ),
    );
    assert_eq!(n.message, "must be a number");
}

// =============================================================
// Unusable detail → status fallbacks
// =============================================================

#[test]
fn bare_400_uses_fixed_login_message() {
    let n = normalize(FormKind::Login, &rejected(400, "Bad Request", None));
    assert_eq!(n.message, "Invalid email or password.");
}

#[test]
fn bare_400_uses_fixed_signup_message() {
    let n = normalize(FormKind::Signup, &rejected(400, "Bad Request", None));
    assert_eq!(n.message, "Please check your input. Some fields are invalid.");
}

#[test]
fn empty_detail_object_counts_as_unusable() {
    let n = normalize(FormKind::Login, &rejected(400, "Bad Request", Some(json!({}))));
    assert_eq!(n.message, "Invalid email or password.");
}

#[test]
fn other_statuses_interpolate_status_text() {
    let n = normalize(FormKind::Login, &rejected(503, "Service Unavailable", None));
    assert_eq!(n.message, "Login failed: Service Unavailable");

    let n = normalize(FormKind::Signup, &rejected(500, "Internal Server Error", None));
    assert_eq!(n.message, "Signup failed: Internal Server Error");
}

// =============================================================
// Transport / setup failures
// =============================================================

#[test]
fn no_response_uses_connectivity_message() {
    let n = normalize(FormKind::Login, &RemoteOutcome::NoResponse);
    assert_eq!(
        n.message,
        "No response from server. Please check your internet connection."
    );
    assert!(!n.success);
    assert!(n.redirect.is_none());
}

#[test]
fn setup_error_message_passes_through_verbatim() {
    let n = normalize(
        FormKind::Signup,
        &RemoteOutcome::Setup("invalid request body".to_owned()),
    );
    assert_eq!(n.message, "invalid request body");
    assert_eq!(n.title, "Signup Failed");
}
