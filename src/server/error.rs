use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Terminal user-route failures; the message body is what the client
/// shows inline.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("An account with this email already exists.")]
    EmailTaken,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for field: {0}")]
    InvalidField(&'static str),

    #[error("Google sign-in is not configured for this deployment.")]
    ProviderUnavailable,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::EmailTaken => StatusCode::CONFLICT,
            ApiError::MissingField(_) | ApiError::InvalidField(_) => StatusCode::BAD_REQUEST,
            ApiError::ProviderUnavailable => StatusCode::BAD_GATEWAY,
        };

        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_match_the_failure_kind() {
        assert_eq!(
            ApiError::EmailTaken.into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::InvalidField("dateOfBirth").into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::ProviderUnavailable.into_response().status(),
            StatusCode::BAD_GATEWAY
        );
    }
}
