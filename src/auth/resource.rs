use chrono::{DateTime, Utc};
use fake::faker::internet::en::{Password, SafeEmail};
use fake::faker::name::en::{FirstName, LastName};
use fake::Dummy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Defines user data structure as returned by the auth service.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    #[serde(rename = "firstName")]
    #[dummy(faker = "FirstName()")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    #[dummy(faker = "LastName()")]
    pub last_name: String,
    #[dummy(faker = "SafeEmail()")]
    pub email: String,
    pub activated: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Defines sign-in request body.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize)]
pub struct Credentials {
    #[dummy(faker = "SafeEmail()")]
    pub email: String,
    #[dummy(faker = "Password(8..16)")]
    pub password: String,
}

/// Defines registration request body.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize)]
pub struct Registration {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub password: String,
}
