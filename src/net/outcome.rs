//! Reduction of a settled authentication call into one display message.
//!
//! The backend reports validation failures as a field-name to
//! message-array mapping with no fixed shape, so picking the most
//! relevant message is an ordered precedence chain. The chain is kept
//! as an explicit rule table per form kind so the order stays
//! auditable and testable away from any rendering concern.

#[cfg(test)]
#[path = "outcome_test.rs"]
mod outcome_test;

use serde_json::Value;

/// Which credential form produced the outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Signup,
}

/// Identity and token data persisted client-side after authentication.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionRecord {
    pub token: String,
    pub user_id: String,
    pub username: String,
    pub email: String,
}

/// The settled result of calling the authentication endpoints.
#[derive(Clone, Debug)]
pub enum RemoteOutcome {
    /// 2xx response with its JSON payload.
    Success(Value),
    /// Non-2xx response; `detail` is the JSON body when one parsed.
    Rejected {
        status: u16,
        status_text: String,
        detail: Option<Value>,
    },
    /// The request was sent but no response arrived.
    NoResponse,
    /// The request could not be built or sent at all.
    Setup(String),
}

/// One display message plus the follow-on effects for the caller to
/// perform. Produced for every outcome; normalization never fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Normalized {
    pub success: bool,
    pub title: String,
    pub message: String,
    /// Session to persist, present only on an authenticated success.
    pub session: Option<SessionRecord>,
    /// Route to navigate to, present only on success.
    pub redirect: Option<&'static str>,
}

/// How to pull a message out of one field of the failure detail map.
#[derive(Clone, Copy)]
enum FieldRule {
    /// Use the field's string value verbatim.
    Verbatim(&'static str),
    /// Use the first element of the field's message array.
    FirstOf(&'static str),
}

/// Ordered extraction rules for login failures.
const LOGIN_RULES: &[FieldRule] = &[
    FieldRule::Verbatim("detail"),
    FieldRule::FirstOf("non_field_errors"),
    FieldRule::FirstOf("email"),
    FieldRule::FirstOf("password"),
];

/// Ordered extraction rules for signup failures. Password errors are
/// checked before email and username so strength/mismatch complaints
/// from the server win over uniqueness complaints.
const SIGNUP_RULES: &[FieldRule] = &[
    FieldRule::Verbatim("detail"),
    FieldRule::FirstOf("non_field_errors"),
    FieldRule::FirstOf("password"),
    FieldRule::FirstOf("email"),
    FieldRule::FirstOf("username"),
];

impl FormKind {
    fn rules(self) -> &'static [FieldRule] {
        match self {
            Self::Login => LOGIN_RULES,
            Self::Signup => SIGNUP_RULES,
        }
    }

    fn failure_title(self) -> &'static str {
        match self {
            Self::Login => "Login Failed",
            Self::Signup => "Signup Failed",
        }
    }

    fn bad_request_message(self) -> &'static str {
        match self {
            Self::Login => "Invalid email or password.",
            Self::Signup => "Please check your input. Some fields are invalid.",
        }
    }

    fn failed_message(self, status_text: &str) -> String {
        match self {
            Self::Login => format!("Login failed: {status_text}"),
            Self::Signup => format!("Signup failed: {status_text}"),
        }
    }
}

/// Generic message for outcomes no rule recognizes.
const UNEXPECTED: &str = "An unexpected error occurred. Please try again.";

/// Reduce a remote outcome to exactly one display message and the
/// follow-on action. Strict precedence: the first matching branch
/// fires and later branches are never consulted.
pub fn normalize(kind: FormKind, outcome: &RemoteOutcome) -> Normalized {
    match outcome {
        RemoteOutcome::Success(payload) => normalize_success(kind, payload),
        RemoteOutcome::Rejected {
            status,
            status_text,
            detail,
        } => {
            let extracted = detail.as_ref().and_then(|d| extract_detail(kind, d));
            let message = match extracted {
                Some(msg) => msg,
                None if *status == 400 => kind.bad_request_message().to_owned(),
                None => kind.failed_message(status_text),
            };
            failure(kind, message)
        }
        RemoteOutcome::NoResponse => failure(
            kind,
            "No response from server. Please check your internet connection.".to_owned(),
        ),
        RemoteOutcome::Setup(message) => failure(kind, message.clone()),
    }
}

fn failure(kind: FormKind, message: String) -> Normalized {
    Normalized {
        success: false,
        title: kind.failure_title().to_owned(),
        message,
        session: None,
        redirect: None,
    }
}

fn normalize_success(kind: FormKind, payload: &Value) -> Normalized {
    let Some(map) = payload.as_object() else {
        // A 2xx with a non-object body is unclassifiable.
        return failure(kind, UNEXPECTED.to_owned());
    };

    match kind {
        FormKind::Login => Normalized {
            success: true,
            title: "Login Successful".to_owned(),
            message: "Welcome back to StackIt!".to_owned(),
            session: Some(SessionRecord {
                token: string_field(map.get("token")),
                user_id: string_field(map.get("user_id")),
                username: string_field(map.get("username")),
                email: string_field(map.get("email")),
            }),
            redirect: Some("/dashboard"),
        },
        FormKind::Signup => {
            let message = map
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(
                    "Welcome to StackIt! Please check your email to verify your account.",
                )
                .to_owned();

            // The backend may auto-login by returning a token with the
            // created user; only then is a session persisted.
            let session = map.get("token").and_then(Value::as_str).map(|token| {
                let user = map.get("user").and_then(Value::as_object);
                SessionRecord {
                    token: token.to_owned(),
                    user_id: string_field(user.and_then(|u| u.get("id"))),
                    username: string_field(user.and_then(|u| u.get("username"))),
                    email: string_field(user.and_then(|u| u.get("email"))),
                }
            });

            Normalized {
                success: true,
                title: "Account Created".to_owned(),
                message,
                session,
                redirect: Some("/login"),
            }
        }
    }
}

/// Walk the rule table for `kind` over a structured failure detail and
/// return the first message that matches; fall back to flattening all
/// field values into one comma-joined message. Returns `None` when the
/// detail is not a mapping or yields nothing usable.
fn extract_detail(kind: FormKind, detail: &Value) -> Option<String> {
    let map = detail.as_object()?;

    for rule in kind.rules() {
        match rule {
            FieldRule::Verbatim(field) => {
                if let Some(msg) = map.get(*field).and_then(Value::as_str) {
                    return Some(msg.to_owned());
                }
            }
            FieldRule::FirstOf(field) => {
                if let Some(msg) = first_message(map.get(*field)) {
                    return Some(msg);
                }
            }
        }
    }

    let all: Vec<String> = map.values().flat_map(flatten_messages).collect();
    if all.is_empty() {
        None
    } else {
        Some(all.join(", "))
    }
}

/// First element of a non-empty message array, or the value itself
/// when the server sent a bare string instead of an array.
fn first_message(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Array(items) => items.first().map(message_text),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

/// Flatten one field value into its message strings.
fn flatten_messages(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().map(message_text).collect(),
        other => vec![message_text(other)],
    }
}

fn message_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Stringify an identity field that may arrive as a string or number.
fn string_field(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
