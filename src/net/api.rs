//! REST API helpers for the authentication endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs, since these endpoints are only meaningful
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call settles into a [`RemoteOutcome`]; nothing here panics or
//! propagates transport errors past the normalizer.

#![allow(clippy::unused_async)]

use super::outcome::RemoteOutcome;

/// Base path of the backend API.
pub const API_BASE: &str = "/api";

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
#[derive(serde::Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
#[derive(serde::Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
    #[serde(rename = "confirmPassword")]
    confirm_password: &'a str,
}

/// Log in via `POST /api/accounts/login/`.
pub async fn login(email: &str, password: &str) -> RemoteOutcome {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            &format!("{API_BASE}/accounts/login/"),
            &LoginRequest { email, password },
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        RemoteOutcome::Setup("not available on server".to_owned())
    }
}

/// Register via `POST /api/accounts/register/`. The confirm field is
/// sent along so the backend can re-validate the match.
pub async fn register(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> RemoteOutcome {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            &format!("{API_BASE}/accounts/register/"),
            &RegisterRequest {
                username,
                email,
                password,
                confirm_password,
            },
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, email, password, confirm_password);
        RemoteOutcome::Setup("not available on server".to_owned())
    }
}

/// POST a JSON body and settle the response into a `RemoteOutcome`.
#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize>(url: &str, body: &B) -> RemoteOutcome {
    // A body that fails to serialize means the request never existed.
    let request = match gloo_net::http::Request::post(url).json(body) {
        Ok(req) => req,
        Err(e) => return RemoteOutcome::Setup(e.to_string()),
    };

    // A rejected fetch means the request went out but nothing came back.
    let response = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            leptos::logging::warn!("auth request failed: {e}");
            return RemoteOutcome::NoResponse;
        }
    };

    if response.ok() {
        // A 2xx body that is not JSON falls through the normalizer's
        // non-object branch as an unclassified error.
        let payload = response
            .json::<serde_json::Value>()
            .await
            .unwrap_or(serde_json::Value::Null);
        RemoteOutcome::Success(payload)
    } else {
        let status = response.status();
        let status_text = response.status_text();
        let detail = response.json::<serde_json::Value>().await.ok();
        RemoteOutcome::Rejected {
            status,
            status_text,
            detail,
        }
    }
}
