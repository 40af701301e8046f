use axum::{extract::State, routing::post, Json, Router};
use tracing::info;

use super::error::ApiError;
use super::state::SharedRegistry;
use crate::user::{SignUpProfile, User};

/// The user-route module mounted under `/api/users`.
pub fn user_routes() -> Router<SharedRegistry> {
    Router::new()
        .route("/signup", post(sign_up_handler))
        .route("/google-signin", post(google_sign_in_handler))
}

pub async fn sign_up_handler(
    State(registry): State<SharedRegistry>,
    Json(profile): Json<SignUpProfile>,
) -> Result<Json<User>, ApiError> {
    let user = registry.sign_up(profile).await?;
    info!(user = user.id, "registered {}", user.email);
    Ok(Json(user))
}

/// The identity provider lives outside this backend; nothing is
/// configured here, so the call fails with a message the client shows
/// as-is.
pub async fn google_sign_in_handler() -> Result<Json<User>, ApiError> {
    Err(ApiError::ProviderUnavailable)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::server::state::Registry;
    use crate::user::SignUpProfile;

    fn profile(email: &str) -> SignUpProfile {
        SignUpProfile {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: email.to_string(),
            password: "analytical".to_string(),
            dob_month: "12".to_string(),
            dob_day: "10".to_string(),
            dob_year: "1995".to_string(),
        }
    }

    #[tokio::test]
    async fn sign_up_returns_the_created_user() {
        let registry = Arc::new(Registry::new());
        let Json(user) = sign_up_handler(State(registry), Json(profile("ada@example.com")))
            .await
            .unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.first_name, "Ada");
    }

    #[tokio::test]
    async fn the_wire_format_is_camel_case() {
        let registry = Arc::new(Registry::new());
        let Json(user) = sign_up_handler(State(registry), Json(profile("ada@example.com")))
            .await
            .unwrap();
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert!(json.get("first_name").is_none());
    }

    #[tokio::test]
    async fn duplicate_sign_up_fails() {
        let registry = Arc::new(Registry::new());
        sign_up_handler(State(registry.clone()), Json(profile("ada@example.com")))
            .await
            .unwrap();
        let err = sign_up_handler(State(registry), Json(profile("ada@example.com")))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::EmailTaken));
    }

    #[tokio::test]
    async fn google_sign_in_is_a_terminal_failure() {
        let err = google_sign_in_handler().await.unwrap_err();
        assert!(matches!(err, ApiError::ProviderUnavailable));
    }
}
