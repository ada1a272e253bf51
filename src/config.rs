//! Configuration management for the TDX MCP server.
//!
//! This module handles loading configuration from environment variables,
//! with validation to ensure all required values are present.

use std::env;
use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::TdxError;

/// Environment variable holding the TDX base URL.
pub const ENV_BASE_URL: &str = "TDX_BASE_URL";
/// Environment variable holding the ticketing application ID.
pub const ENV_APP_ID: &str = "TDX_APP_ID";
/// Environment variable selecting the authentication method.
pub const ENV_AUTH_METHOD: &str = "TDX_AUTH_METHOD";
/// Environment variable holding the username for `login`.
pub const ENV_USERNAME: &str = "TDX_USERNAME";
/// Environment variable holding the password for `login`.
pub const ENV_PASSWORD: &str = "TDX_PASSWORD";
/// Environment variable holding the BEID for `loginadmin`.
pub const ENV_BEID: &str = "TDX_BEID";
/// Environment variable holding the web services key for `loginadmin`.
pub const ENV_WEB_SERVICES_KEY: &str = "TDX_WEB_SERVICES_KEY";

/// How the client obtains its bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMethod {
    /// Username and password against `/api/auth/login`.
    Login,
    /// BEID and web services key against `/api/auth/loginadmin`.
    LoginAdmin,
}

impl AuthMethod {
    /// Returns the value used in `TDX_AUTH_METHOD` for this method.
    pub fn as_str(self) -> &'static str {
        match self {
            AuthMethod::Login => "login",
            AuthMethod::LoginAdmin => "loginadmin",
        }
    }
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthMethod {
    type Err = TdxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "login" => Ok(AuthMethod::Login),
            "loginadmin" => Ok(AuthMethod::LoginAdmin),
            _ => Err(invalid_auth_method()),
        }
    }
}

fn invalid_auth_method() -> TdxError {
    TdxError::invalid_config(format!(
        "{} must be \"login\" or \"loginadmin\"",
        ENV_AUTH_METHOD
    ))
}

/// Resolved secrets for one authentication method.
///
/// Each variant carries exactly the fields its login endpoint needs.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Username/password login.
    Login {
        /// TDX username.
        username: String,
        /// TDX password.
        password: String,
    },
    /// Administrative (web services) login.
    Admin {
        /// Business entity ID.
        beid: String,
        /// Web services key.
        web_services_key: String,
    },
}

impl Credentials {
    /// The method these credentials authenticate with.
    pub fn method(&self) -> AuthMethod {
        match self {
            Credentials::Login { .. } => AuthMethod::Login,
            Credentials::Admin { .. } => AuthMethod::LoginAdmin,
        }
    }

    /// The secret half of the credentials, for redaction.
    pub(crate) fn secret(&self) -> &str {
        match self {
            Credentials::Login { password, .. } => password,
            Credentials::Admin {
                web_services_key, ..
            } => web_services_key,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Login { username, .. } => f
                .debug_struct("Login")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
            Credentials::Admin { beid, .. } => f
                .debug_struct("Admin")
                .field("beid", beid)
                .field("web_services_key", &"[REDACTED]")
                .finish(),
        }
    }
}

/// Configuration for connecting to TeamDynamix.
///
/// Secrets for both methods are optional here; [`Config::credentials`]
/// checks that the ones the selected method needs are present.
/// Secrets are never logged or exposed in error messages.
#[derive(Clone)]
pub struct Config {
    /// Base URL for the TDX instance, without trailing slash
    /// (e.g., `https://example.teamdynamix.com/TDWebApi`).
    pub base_url: String,

    /// Ticketing application ID used to scope API paths.
    pub app_id: String,

    /// Selected authentication method.
    pub auth_method: AuthMethod,

    /// Username for `login`.
    pub username: Option<String>,

    /// Password for `login`.
    /// This value must never be logged or included in error messages.
    pub password: Option<String>,

    /// BEID for `loginadmin`.
    pub beid: Option<String>,

    /// Web services key for `loginadmin`.
    /// This value must never be logged or included in error messages.
    pub web_services_key: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `TDX_BASE_URL`: The base URL of the TDX web API
    /// - `TDX_APP_ID`: The ticketing application ID
    /// - `TDX_AUTH_METHOD`: `login` or `loginadmin`
    ///
    /// Method-specific secrets (`TDX_USERNAME`/`TDX_PASSWORD` or
    /// `TDX_BEID`/`TDX_WEB_SERVICES_KEY`) are read but only checked by
    /// [`Config::credentials`].
    ///
    /// # Errors
    ///
    /// Returns `TdxError::Config` if any required variable is missing
    /// or if values fail validation.
    pub fn from_env() -> Result<Self, TdxError> {
        let base_url = Self::get_required_env(ENV_BASE_URL)?;
        let app_id = Self::get_required_env(ENV_APP_ID)?;
        let auth_method = env::var(ENV_AUTH_METHOD)
            .map_err(|_| invalid_auth_method())
            .and_then(|value| value.parse::<AuthMethod>())?;

        let base_url = Self::validate_base_url(base_url)?;

        Ok(Config {
            base_url,
            app_id: app_id.trim().to_string(),
            auth_method,
            username: Self::get_optional_env(ENV_USERNAME),
            password: Self::get_optional_env(ENV_PASSWORD),
            beid: Self::get_optional_env(ENV_BEID),
            web_services_key: Self::get_optional_env(ENV_WEB_SERVICES_KEY),
        })
    }

    /// Resolves the secrets required by the configured auth method.
    ///
    /// # Errors
    ///
    /// Returns `TdxError::Config` naming the variables that are required
    /// for the selected method when either of them is absent.
    pub fn credentials(&self) -> Result<Credentials, TdxError> {
        match self.auth_method {
            AuthMethod::Login => match (non_empty(&self.username), non_empty(&self.password)) {
                (Some(username), Some(password)) => Ok(Credentials::Login {
                    username: username.to_string(),
                    password: password.to_string(),
                }),
                _ => Err(TdxError::invalid_config(format!(
                    "{} and {} are required for login auth method",
                    ENV_USERNAME, ENV_PASSWORD
                ))),
            },
            AuthMethod::LoginAdmin => {
                match (non_empty(&self.beid), non_empty(&self.web_services_key)) {
                    (Some(beid), Some(key)) => Ok(Credentials::Admin {
                        beid: beid.to_string(),
                        web_services_key: key.to_string(),
                    }),
                    _ => Err(TdxError::invalid_config(format!(
                        "{} and {} are required for loginadmin auth method",
                        ENV_BEID, ENV_WEB_SERVICES_KEY
                    ))),
                }
            }
        }
    }

    /// Gets a required environment variable, returning an error if missing or empty.
    fn get_required_env(name: &str) -> Result<String, TdxError> {
        env::var(name)
            .map_err(|_| TdxError::missing_env(name))
            .and_then(|value| {
                if value.trim().is_empty() {
                    Err(TdxError::missing_env(name))
                } else {
                    Ok(value)
                }
            })
    }

    /// Gets an optional environment variable, treating blank values as absent.
    fn get_optional_env(name: &str) -> Option<String> {
        env::var(name).ok().filter(|value| !value.trim().is_empty())
    }

    /// Validates and normalizes the base URL.
    fn validate_base_url(url: String) -> Result<String, TdxError> {
        let url = url.trim().trim_end_matches('/').to_string();

        let parsed = Url::parse(&url).map_err(|e| {
            TdxError::invalid_config(format!("{} is not a valid URL: {}", ENV_BASE_URL, e))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(TdxError::invalid_config(format!(
                "{} must start with http:// or https://",
                ENV_BASE_URL
            )));
        }

        Ok(url)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
