//! Auth service integration module.
//!
//! This module handles all interaction with the authentication service:
//! - HTTP client with a session cookie store
//! - Resource types (user, credentials, registration)
//! - Service-specific error types

mod client;
mod error;
mod models;
mod resource;

pub use error::ApiError;
pub use resource::*;

use client::Client;
use log::*;

const CURRENT_USER_PATH: &str = "currentuser";
const SIGN_IN_PATH: &str = "signin";
const REGISTER_PATH: &str = "register";

/// Responsible for asynchronous interaction with the auth service including
/// transformation of response data into explicitly-defined types.
///
pub struct AuthApi {
    client: Client,
}

impl AuthApi {
    /// Returns a new instance for the given base URL.
    ///
    pub fn new(base_url: &str) -> Result<AuthApi, ApiError> {
        debug!("Initializing auth client for {}...", base_url);
        Ok(AuthApi {
            client: Client::new(base_url)?,
        })
    }

    /// Returns the user the current session cookie belongs to.
    ///
    pub async fn current_user(&self) -> Result<User, ApiError> {
        debug!("Requesting current user...");
        self.client.get::<User>(CURRENT_USER_PATH).await
    }

    /// Signs in with the credentials, storing the session cookie on success.
    ///
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<User, ApiError> {
        debug!("Signing in as {}...", credentials.email);
        self.client.post(SIGN_IN_PATH, credentials).await
    }

    /// Creates an account, which also starts a session for it.
    ///
    pub async fn register(&self, registration: &Registration) -> Result<User, ApiError> {
        debug!("Registering account for {}...", registration.email);
        self.client.post(REGISTER_PATH, registration).await
    }

    /// Discard the session cookie by replacing the underlying client.
    ///
    pub fn reset(&mut self) -> Result<(), ApiError> {
        debug!("Discarding session cookies...");
        self.client = Client::new(&self.client.base_url)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::{FreeEmail, Password};
    use fake::{Fake, Faker};
    use httpmock::MockServer;
    use serde_json::json;

    fn user_json(user: &User) -> serde_json::Value {
        json!({
            "id": user.id,
            "firstName": user.first_name,
            "lastName": user.last_name,
            "email": user.email,
            "activated": user.activated,
            "created_at": user.created_at,
        })
    }

    #[tokio::test]
    async fn current_user_success() -> Result<(), ApiError> {
        let user: User = Faker.fake();

        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/currentuser");
                then.status(200).json_body(json!({ "data": user_json(&user) }));
            })
            .await;

        let api = AuthApi::new(&server.base_url())?;
        let loaded = api.current_user().await?;
        mock.assert_async().await;
        assert_eq!(loaded, user);
        Ok(())
    }

    #[tokio::test]
    async fn current_user_unauthorized() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/currentuser");
                then.status(401)
                    .json_body(json!({ "data": { "error": "unauthorized" } }));
            })
            .await;

        let api = AuthApi::new(&server.base_url()).unwrap();
        let result = api.current_user().await;
        mock.assert_async().await;
        match result {
            Err(ApiError::Status { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "unauthorized");
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[tokio::test]
    async fn sign_in_success() -> Result<(), ApiError> {
        let user: User = Faker.fake();
        let credentials = Credentials {
            email: FreeEmail().fake(),
            password: Password(8..16).fake(),
        };

        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/signin").json_body(json!({
                    "email": credentials.email,
                    "password": credentials.password,
                }));
                then.status(200).json_body(json!({ "data": user_json(&user) }));
            })
            .await;

        let api = AuthApi::new(&server.base_url())?;
        assert_eq!(api.sign_in(&credentials).await?, user);
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn sign_in_invalid_credentials() {
        let credentials: Credentials = Faker.fake();

        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/signin");
                then.status(401)
                    .json_body(json!({ "data": { "error": "invalid credentials" } }));
            })
            .await;

        let api = AuthApi::new(&server.base_url()).unwrap();
        let error = api.sign_in(&credentials).await.unwrap_err();
        mock.assert_async().await;
        assert_eq!(error.status(), Some(401));
        assert_eq!(error.summary(), "invalid credentials");
    }

    #[tokio::test]
    async fn register_bare_payload() -> Result<(), ApiError> {
        let user: User = Faker.fake();
        let registration = Registration {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            password: Password(8..16).fake(),
        };

        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/register").json_body(json!({
                    "firstName": registration.first_name,
                    "lastName": registration.last_name,
                    "email": registration.email,
                    "password": registration.password,
                }));
                then.status(201).json_body(user_json(&user));
            })
            .await;

        let api = AuthApi::new(&server.base_url())?;
        assert_eq!(api.register(&registration).await?, user);
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn register_conflict_without_json() {
        let registration: Registration = Faker.fake();

        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/register");
                then.status(422).body("nope");
            })
            .await;

        let api = AuthApi::new(&server.base_url()).unwrap();
        let error = api.register(&registration).await.unwrap_err();
        mock.assert_async().await;
        assert_eq!(error.status(), Some(422));
        assert_eq!(error.summary(), "unprocessable entity");
    }

    #[tokio::test]
    async fn session_cookie_is_sent_back() -> Result<(), ApiError> {
        let user: User = Faker.fake();
        let credentials: Credentials = Faker.fake();

        let server = MockServer::start_async().await;
        let sign_in = server
            .mock_async(|when, then| {
                when.method("POST").path("/signin");
                then.status(200)
                    .header("Set-Cookie", "user-session=abc123; Path=/")
                    .json_body(json!({ "data": user_json(&user) }));
            })
            .await;
        let me = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/currentuser")
                    .header("Cookie", "user-session=abc123");
                then.status(200).json_body(json!({ "data": user_json(&user) }));
            })
            .await;

        let api = AuthApi::new(&server.base_url())?;
        api.sign_in(&credentials).await?;
        assert_eq!(api.current_user().await?, user);
        sign_in.assert_async().await;
        me.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn reset_discards_cookie() -> Result<(), ApiError> {
        let user: User = Faker.fake();
        let credentials: Credentials = Faker.fake();

        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("POST").path("/signin");
                then.status(200)
                    .header("Set-Cookie", "user-session=abc123; Path=/")
                    .json_body(json!({ "data": user_json(&user) }));
            })
            .await;
        let me = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/currentuser")
                    .header("Cookie", "user-session=abc123");
                then.status(200).json_body(json!({ "data": user_json(&user) }));
            })
            .await;

        let mut api = AuthApi::new(&server.base_url())?;
        api.sign_in(&credentials).await?;
        api.reset()?;
        assert!(api.current_user().await.is_err());
        me.assert_hits_async(0).await;
        Ok(())
    }
}
