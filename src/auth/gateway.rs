//! Login, registration and password-reset requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call the gateway and render whatever [`AuthOutcome`] comes back. The
//! gateway never persists anything: on a login success the caller hands the
//! grant to the session store (see [`super::complete_login`]).
//!
//! ERROR HANDLING
//! ==============
//! Every failure (no response, rejected request, unreadable body) is logged
//! and folded into `AuthOutcome::Failure` with a display message. Nothing is
//! retried; the user re-submits.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use serde::Deserialize;

use super::session::{Session, UserProfile};
use crate::config::ApiConfig;
use crate::net::transport::{HttpResponse, Transport};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const FORGOT_PASSWORD_PATH: &str = "/api/auth/forgot-password";

/// Shown when the request could not complete or the reply was unreadable.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Internal failure taxonomy, normalized to [`AuthOutcome::Failure`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("network failure: {0}")]
    NetworkFailure(String),

    #[error("backend rejected request: status {status}")]
    BackendRejected { status: u16, message: Option<String> },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Authentication operations the gateway performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOperation {
    Login,
    Register,
    ForgotPassword,
}

impl AuthOperation {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Register => REGISTER_PATH,
            Self::ForgotPassword => FORGOT_PASSWORD_PATH,
        }
    }

    /// Message used when the backend rejects the request without saying why.
    pub fn rejection_fallback(self) -> &'static str {
        match self {
            Self::Login => "Invalid email or password",
            Self::Register => "Registration failed",
            Self::ForgotPassword => "Failed to send reset email",
        }
    }

    /// Message used when a successful reply carries no message of its own.
    pub fn success_fallback(self) -> &'static str {
        match self {
            Self::Login => "Logged in",
            Self::Register => "Registration successful",
            Self::ForgotPassword => "Reset link sent",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
            Self::ForgotPassword => "forgot-password",
        }
    }
}

impl AuthError {
    /// Display string for the failure, per operation.
    pub fn display_message(&self, op: AuthOperation) -> String {
        match self {
            Self::BackendRejected { message: Some(message), .. } => message.clone(),
            Self::BackendRejected { message: None, .. } => op.rejection_fallback().to_owned(),
            Self::NetworkFailure(_) | Self::MalformedResponse(_) => GENERIC_FAILURE.to_owned(),
        }
    }
}

/// Normalized result of an authentication request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome<T> {
    Success(T),
    Failure { message: String },
}

impl<T> AuthOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure { message } => Some(message),
        }
    }
}

/// Credential returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginGrant {
    pub token: String,
    #[serde(default, alias = "profile")]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginGrant {
    pub fn into_session(self) -> Session {
        Session::new(self.token, self.user)
    }
}

/// Confirmation text returned by register / forgot-password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: Option<String>,
}

fn body_message(body: &str) -> Option<String> {
    serde_json::from_str::<MessageBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

/// Success payloads the gateway knows how to decode.
trait Reply: Sized {
    fn decode(op: AuthOperation, body: &str) -> Result<Self, AuthError>;
}

impl Reply for LoginGrant {
    fn decode(_op: AuthOperation, body: &str) -> Result<Self, AuthError> {
        let grant = serde_json::from_str::<LoginGrant>(body).map_err(|e| AuthError::MalformedResponse(e.to_string()))?;
        if grant.token.is_empty() {
            return Err(AuthError::MalformedResponse("empty token".to_owned()));
        }
        Ok(grant)
    }
}

impl Reply for Acknowledgement {
    fn decode(op: AuthOperation, body: &str) -> Result<Self, AuthError> {
        let message = body_message(body).unwrap_or_else(|| op.success_fallback().to_owned());
        Ok(Self { message })
    }
}

/// Classify a raw response for `op`.
fn interpret<T: Reply>(op: AuthOperation, resp: &HttpResponse) -> Result<T, AuthError> {
    if !resp.is_success() {
        return Err(AuthError::BackendRejected { status: resp.status, message: body_message(&resp.body) });
    }
    T::decode(op, &resp.body)
}

/// Talks to the backend's `/api/auth/*` endpoints.
#[derive(Clone, Debug)]
pub struct AuthGateway<T> {
    transport: T,
    config: ApiConfig,
}

impl<T: Transport> AuthGateway<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self { transport, config }
    }

    pub async fn login(&self, email: &str, password: &str) -> AuthOutcome<LoginGrant> {
        let payload = serde_json::json!({ "email": email, "password": password });
        self.request(AuthOperation::Login, &payload).await
    }

    pub async fn register(&self, email: &str, password: &str) -> AuthOutcome<Acknowledgement> {
        let payload = serde_json::json!({ "email": email, "password": password });
        self.request(AuthOperation::Register, &payload).await
    }

    pub async fn forgot_password(&self, email: &str) -> AuthOutcome<Acknowledgement> {
        let payload = serde_json::json!({ "email": email });
        self.request(AuthOperation::ForgotPassword, &payload).await
    }

    async fn request<R: Reply>(&self, op: AuthOperation, payload: &serde_json::Value) -> AuthOutcome<R> {
        let url = self.config.endpoint(op.path());
        let result = match self.transport.post_json(&url, payload).await {
            Ok(resp) => interpret::<R>(op, &resp),
            Err(e) => Err(AuthError::NetworkFailure(e.0)),
        };
        match result {
            Ok(reply) => {
                log::info!("auth {} succeeded", op.name());
                AuthOutcome::Success(reply)
            }
            Err(err) => {
                log::warn!("auth {} failed: {err}", op.name());
                AuthOutcome::Failure { message: err.display_message(op) }
            }
        }
    }
}
