//! HTTP client for the TeamDynamix web API.
//!
//! This module provides the `TdxClient` struct, which owns the configured
//! credentials and the current session token and dispatches authenticated
//! requests against the TDX REST API.
//!
//! # Token lifecycle
//!
//! ```text
//! NO_TOKEN --login--> VALID --23h elapse--> STALE --next request--> VALID
//!                                                 \--login fails--> error for that call
//! ```
//!
//! TDX tokens live for 24 hours; the client treats them as stale after 23.
//! A token the server rejects early stays cached until its local expiry.
//! Such a rejection surfaces as `TdxError::Api` and is not retried.
//!
//! Concurrent callers that find the token stale queue behind a single
//! login instead of each issuing their own.
//!
//! # Security
//!
//! The password, web services key and bearer token are never logged.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};
use mockable::{Clock, DefaultClock};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::error::TdxError;
use crate::models::login_body;

/// How long a token is trusted after issuance, one hour short of the
/// 24 hours TDX grants.
pub const TOKEN_LIFETIME_HOURS: i64 = 23;

/// A bearer token together with the instant it stops being trusted.
#[derive(Clone)]
pub struct SessionToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl SessionToken {
    /// Creates a token issued at `now`, expiring [`TOKEN_LIFETIME_HOURS`] later.
    pub fn issued_at(value: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            value: value.into(),
            expires_at: now + Duration::hours(TOKEN_LIFETIME_HOURS),
        }
    }

    /// Returns true while `now` is strictly before the expiry.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    /// The instant after which the token is considered stale.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// The raw bearer token.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionToken")
            .field("value", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Authenticated client for the TDX web API.
///
/// Cloning is cheap; clones share the HTTP connection pool and the cached
/// session token.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env()?;
/// let client = TdxClient::new(&config)?;
///
/// let ticket = client.get("/tickets/12345").await?;
/// ```
#[derive(Clone)]
pub struct TdxClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// Immutable configuration, including secrets.
    /// SECURITY: Never log the secret fields!
    config: Arc<Config>,

    /// Time source for token expiry.
    clock: Arc<dyn Clock + Send + Sync>,

    /// Current session token; `None` until the first login.
    session: Arc<Mutex<Option<SessionToken>>>,

    /// Copy of the current bearer token for redaction. Readable while a
    /// request or login holds `session`.
    redact_token: Arc<RwLock<Option<String>>>,
}

impl TdxClient {
    /// Creates a new TDX client from configuration.
    ///
    /// No network call is made until the first request or an explicit
    /// [`TdxClient::authenticate`].
    ///
    /// # Errors
    ///
    /// Returns `TdxError::HttpClient` if the HTTP client fails to initialize.
    pub fn new(config: &Config) -> Result<Self, TdxError> {
        Self::with_clock(config, Arc::new(DefaultClock))
    }

    /// Creates a client that reads the current time from `clock`.
    ///
    /// # Errors
    ///
    /// Returns `TdxError::HttpClient` if the HTTP client fails to initialize.
    pub fn with_clock(
        config: &Config,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Result<Self, TdxError> {
        let http = Client::builder()
            .user_agent(concat!("tdx-mcp/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(TdxError::HttpClient)?;

        Ok(Self {
            http,
            config: Arc::new(config.clone()),
            clock,
            session: Arc::new(Mutex::new(None)),
            redact_token: Arc::new(RwLock::new(None)),
        })
    }

    /// Returns the secrets to strip from any message leaving the process.
    ///
    /// This should ONLY be used for sanitizing error messages, never for logging.
    pub fn secrets_for_sanitization(&self) -> Vec<String> {
        let mut secrets = Vec::new();

        if let Ok(credentials) = self.config.credentials() {
            secrets.push(credentials.secret().to_string());
        }

        let token = self
            .redact_token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(token) = token.as_ref() {
            secrets.push(token.clone());
        }

        secrets
    }

    /// Returns the expiry of the cached token, if one is held.
    pub async fn token_expiry(&self) -> Option<DateTime<Utc>> {
        self.session.lock().await.as_ref().map(SessionToken::expires_at)
    }

    /// Logs in with the configured credentials and caches the new token.
    ///
    /// Any previously held token is replaced unconditionally.
    ///
    /// # Errors
    ///
    /// - `TdxError::Config` if the secrets for the configured auth method are
    ///   missing. No request is sent in that case.
    /// - `TdxError::Authentication` if the login endpoint returns a
    ///   non-success status.
    /// - `TdxError::Http` on transport failure.
    pub async fn authenticate(&self) -> Result<(), TdxError> {
        let mut session = self.session.lock().await;
        let token = self.login().await?;
        self.store_session(&mut session, token);
        Ok(())
    }

    /// Replaces the cached session and its redaction copy together.
    fn store_session(&self, session: &mut Option<SessionToken>, token: SessionToken) {
        let mut redact = self
            .redact_token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *redact = Some(token.value.clone());
        *session = Some(token);
    }

    /// Tests connectivity by performing a fresh login.
    ///
    /// # Errors
    ///
    /// Returns whatever [`TdxClient::authenticate`] returns.
    pub async fn test_connection(&self) -> Result<(), TdxError> {
        tracing::debug!(base_url = %self.config.base_url, "Testing connection to TDX");
        self.authenticate().await?;
        tracing::info!("Connection test successful");
        Ok(())
    }

    /// Performs the login round-trip without touching the cached session.
    async fn login(&self) -> Result<SessionToken, TdxError> {
        let credentials = self.config.credentials()?;
        let (path, body) = login_body(&credentials)?;
        let url = format!("{}{}", self.config.base_url, path);

        tracing::debug!(method = %credentials.method(), "Authenticating with TDX");

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(TdxError::Http)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TdxError::Authentication { status, body });
        }

        // TDX returns the JWT as a plain string, not JSON.
        let token = response.text().await.map_err(TdxError::Http)?;
        let token = SessionToken::issued_at(token, self.clock.utc());

        tracing::info!(expires_at = %token.expires_at, "Authenticated with TDX");

        Ok(token)
    }

    /// Returns a bearer token that is valid now, logging in first if the
    /// cached one is missing or stale.
    async fn ensure_authenticated(&self) -> Result<String, TdxError> {
        let mut session = self.session.lock().await;

        if let Some(token) = session.as_ref() {
            if token.is_valid_at(self.clock.utc()) {
                return Ok(token.value.clone());
            }
            tracing::debug!("Session token expired, re-authenticating");
        }

        let token = self.login().await?;
        let value = token.value.clone();
        self.store_session(&mut session, token);
        Ok(value)
    }

    /// Makes an authenticated request to the TDX API.
    ///
    /// `path` is appended verbatim to the base URL and must start with `/`.
    ///
    /// # Returns
    ///
    /// `None` when the server answers with an empty body, otherwise the
    /// decoded JSON exactly as received.
    ///
    /// # Errors
    ///
    /// - Any error from authentication, when a login was needed.
    /// - `TdxError::Api` on a non-success status.
    /// - `TdxError::Decode` if a non-empty success body is not JSON.
    /// - `TdxError::Http` on transport failure.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Option<Value>, TdxError> {
        let token = self.ensure_authenticated().await?;
        let url = format!("{}{}", self.config.base_url, path);

        tracing::debug!(method = %method, path = %path, "Making TDX API request");

        let mut req = self
            .http
            .request(method.clone(), &url)
            .bearer_auth(&token)
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await.map_err(TdxError::Http)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TdxError::Api {
                method,
                path: path.to_string(),
                status,
                body,
            });
        }

        // Some endpoints return empty responses
        let text = response.text().await.map_err(TdxError::Http)?;
        if text.is_empty() {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&text)?))
    }

    /// Prefixes an endpoint with the application scope.
    fn scoped(&self, endpoint: &str) -> String {
        format!("/api/{}{}", self.config.app_id, endpoint)
    }

    /// GET request scoped to the configured application.
    pub async fn get(&self, endpoint: &str) -> Result<Option<Value>, TdxError> {
        self.request(Method::GET, &self.scoped(endpoint), None).await
    }

    /// POST request scoped to the configured application.
    pub async fn post(
        &self,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<Option<Value>, TdxError> {
        self.request(Method::POST, &self.scoped(endpoint), body).await
    }

    /// PUT request scoped to the configured application.
    pub async fn put(
        &self,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<Option<Value>, TdxError> {
        self.request(Method::PUT, &self.scoped(endpoint), body).await
    }

    /// PATCH request scoped to the configured application.
    pub async fn patch(
        &self,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<Option<Value>, TdxError> {
        self.request(Method::PATCH, &self.scoped(endpoint), body).await
    }

    /// DELETE request scoped to the configured application.
    pub async fn delete(&self, endpoint: &str) -> Result<Option<Value>, TdxError> {
        self.request(Method::DELETE, &self.scoped(endpoint), None).await
    }

    /// Scoped GET that decodes the JSON into `T`.
    ///
    /// # Errors
    ///
    /// As [`TdxClient::request`], plus `TdxError::Decode` if the JSON does
    /// not match `T`.
    pub async fn get_json<T>(&self, endpoint: &str) -> Result<Option<T>, TdxError>
    where
        T: DeserializeOwned,
    {
        decode(self.get(endpoint).await?)
    }

    /// Scoped POST of a serializable body that decodes the JSON into `T`.
    ///
    /// # Errors
    ///
    /// As [`TdxClient::request`], plus `TdxError::Decode` if the body cannot
    /// be serialized or the JSON does not match `T`.
    pub async fn post_json<T, B>(&self, endpoint: &str, body: &B) -> Result<Option<T>, TdxError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        decode(self.post(endpoint, Some(&body)).await?)
    }
}

fn decode<T: DeserializeOwned>(value: Option<Value>) -> Result<Option<T>, TdxError> {
    value
        .map(serde_json::from_value)
        .transpose()
        .map_err(TdxError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthMethod;
    use chrono::TimeZone;

    fn test_config() -> Config {
        Config {
            base_url: "https://tdx.example.com/TDWebApi".to_string(),
            app_id: "42".to_string(),
            auth_method: AuthMethod::Login,
            username: Some("jdoe".to_string()),
            password: Some("hunter2".to_string()),
            beid: None,
            web_services_key: None,
        }
    }

    #[test]
    fn test_session_token_expires_after_23_hours() {
        let issued = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
        let token = SessionToken::issued_at("jwt", issued);

        assert!(token.is_valid_at(issued));
        assert!(token.is_valid_at(issued + Duration::hours(23) - Duration::seconds(1)));
        assert!(!token.is_valid_at(issued + Duration::hours(23)));
        assert!(!token.is_valid_at(issued + Duration::hours(24)));
    }

    #[test]
    fn test_session_token_debug_hides_value() {
        let token = SessionToken::issued_at("very-secret-jwt", Utc::now());
        assert!(!format!("{:?}", token).contains("very-secret-jwt"));
    }

    #[test]
    fn test_scoped_prefixes_app_id() {
        let client = TdxClient::new(&test_config()).unwrap();
        assert_eq!(client.scoped("/tickets/7"), "/api/42/tickets/7");
    }

    #[test]
    fn test_secrets_include_password() {
        let client = TdxClient::new(&test_config()).unwrap();
        assert_eq!(client.secrets_for_sanitization(), vec!["hunter2".to_string()]);
    }

    #[tokio::test]
    async fn test_secrets_include_token_while_session_is_locked() {
        let client = TdxClient::new(&test_config()).unwrap();
        let mut session = client.session.lock().await;
        client.store_session(&mut session, SessionToken::issued_at("live-jwt", Utc::now()));

        // An in-flight request keeps `session` locked.
        let secrets = client.secrets_for_sanitization();
        assert!(secrets.contains(&"live-jwt".to_string()));

        let err = TdxError::Api {
            method: Method::GET,
            path: "/api/42/tickets/1".to_string(),
            status: reqwest::StatusCode::FORBIDDEN,
            body: "token live-jwt is not allowed".to_string(),
        };
        assert!(!err.sanitized_display(&secrets).contains("live-jwt"));
        drop(session);
    }

    #[test]
    fn test_secrets_skip_unconfigured_method() {
        let mut config = test_config();
        config.password = None;
        let client = TdxClient::new(&config).unwrap();
        assert!(client.secrets_for_sanitization().is_empty());
    }

    #[tokio::test]
    async fn test_new_client_holds_no_token() {
        let client = TdxClient::new(&test_config()).unwrap();
        assert!(client.token_expiry().await.is_none());
    }

    #[test]
    fn test_decode_none_stays_none() {
        let decoded: Option<Vec<u32>> = decode(None).unwrap();
        assert!(decoded.is_none());
    }
}
