use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::RwLock;

use super::error::ApiError;
use crate::user::{SignUpProfile, User};

pub type SharedRegistry = Arc<Registry>;

/// In-memory user registry, keyed by normalized email. Persistence is
/// the real auth service's problem, not this preview backend's.
#[derive(Default)]
pub struct Registry {
    users: RwLock<HashMap<String, User>>,
    next_id: AtomicU32,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            next_id: AtomicU32::new(1),
        }
    }

    pub async fn sign_up(&self, profile: SignUpProfile) -> Result<User, ApiError> {
        validate(&profile)?;

        let email = profile.email.trim().to_ascii_lowercase();
        let mut users = self.users.write().await;
        if users.contains_key(&email) {
            return Err(ApiError::EmailTaken);
        }

        let user = User {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            first_name: profile.first_name.trim().to_string(),
            last_name: profile.last_name.trim().to_string(),
            email: email.clone(),
        };
        users.insert(email, user.clone());
        Ok(user)
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

fn validate(profile: &SignUpProfile) -> Result<(), ApiError> {
    let required = [
        (&profile.first_name, "firstName"),
        (&profile.last_name, "lastName"),
        (&profile.email, "email"),
        (&profile.password, "password"),
        (&profile.dob_month, "dobMonth"),
        (&profile.dob_day, "dobDay"),
        (&profile.dob_year, "dobYear"),
    ];
    for (value, field) in required {
        if value.trim().is_empty() {
            return Err(ApiError::MissingField(field));
        }
    }

    if !profile.email.contains('@') {
        return Err(ApiError::InvalidField("email"));
    }

    let year = profile.dob_year.trim().parse::<i32>();
    let month = profile.dob_month.trim().parse::<u32>();
    let day = profile.dob_day.trim().parse::<u32>();
    match (year, month, day) {
        (Ok(y), Ok(m), Ok(d)) if NaiveDate::from_ymd_opt(y, m, d).is_some() => Ok(()),
        _ => Err(ApiError::InvalidField("dateOfBirth")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    async fn sign_up_assigns_sequential_ids() {
        let registry = Registry::new();
        let first = registry.sign_up(profile("ada@example.com")).await.unwrap();
        let second = registry.sign_up(profile("grace@example.com")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(registry.user_count().await, 2);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_case_insensitively() {
        let registry = Registry::new();
        registry.sign_up(profile("ada@example.com")).await.unwrap();
        let err = registry
            .sign_up(profile("Ada@Example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::EmailTaken));
        assert_eq!(registry.user_count().await, 1);
    }

    #[tokio::test]
    async fn impossible_birth_date_is_rejected() {
        let registry = Registry::new();
        let mut bad = profile("ada@example.com");
        bad.dob_month = "02".to_string();
        bad.dob_day = "30".to_string();
        let err = registry.sign_up(bad).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidField("dateOfBirth")));
    }

    #[tokio::test]
    async fn blank_fields_are_rejected() {
        let registry = Registry::new();
        let mut bad = profile("ada@example.com");
        bad.first_name = "   ".to_string();
        let err = registry.sign_up(bad).await.unwrap_err();
        assert!(matches!(err, ApiError::MissingField("firstName")));
    }

    #[tokio::test]
    async fn email_needs_an_at_sign() {
        let registry = Registry::new();
        let err = registry
            .sign_up(profile("ada.example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidField("email")));
    }
}
