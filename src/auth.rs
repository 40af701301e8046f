use std::env;
use std::time::Duration;

use thiserror::Error;

use crate::user::{SignUpProfile, User};

const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
const API_URL_VAR: &str = "LEARNHUB_API_URL";

#[derive(Debug, Error)]
pub enum AuthError {
    /// The service rejected the request; the message is shown to the
    /// user verbatim.
    #[error("{0}")]
    Rejected(String),
    #[error("Could not reach the LearnHub service: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client for the external auth service. Exposes exactly two operations;
/// everything behind them (sessions, persistence) is the service's
/// business.
pub struct AuthClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl AuthClient {
    pub fn from_env() -> Result<Self, AuthError> {
        let base_url =
            env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { base_url, http })
    }

    pub fn sign_up_with_email(&self, profile: &SignUpProfile) -> Result<User, AuthError> {
        let response = self
            .http
            .post(format!("{}/api/users/signup", self.base_url))
            .json(profile)
            .send()?;
        Self::into_user(response)
    }

    pub fn sign_in_with_google(&self) -> Result<User, AuthError> {
        let response = self
            .http
            .post(format!("{}/api/users/google-signin", self.base_url))
            .send()?;
        Self::into_user(response)
    }

    fn into_user(response: reqwest::blocking::Response) -> Result<User, AuthError> {
        if response.status().is_success() {
            Ok(response.json()?)
        } else {
            Err(AuthError::Rejected(response.text()?))
        }
    }
}
