use serde::{Deserialize, Serialize};

/// A registered LearnHub user as returned by the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Sign-up form payload. Date-of-birth components stay strings, the way
/// the form collects them; the server validates them as a calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub dob_month: String,
    pub dob_day: String,
    pub dob_year: String,
}
