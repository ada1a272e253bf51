//! Login request bodies for the TDX auth endpoints.

use serde::Serialize;

use crate::config::Credentials;

/// Body for `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    /// TDX username.
    pub username: &'a str,
    /// TDX password.
    pub password: &'a str,
}

/// Body for `POST /api/auth/loginadmin`.
#[derive(Debug, Clone, Serialize)]
pub struct AdminLoginRequest<'a> {
    /// Business entity ID.
    #[serde(rename = "BEID")]
    pub beid: &'a str,
    /// Web services key.
    #[serde(rename = "WebServicesKey")]
    pub web_services_key: &'a str,
}

/// Returns the login path and JSON body for the given credentials.
pub fn login_body(
    credentials: &Credentials,
) -> Result<(&'static str, serde_json::Value), serde_json::Error> {
    match credentials {
        Credentials::Login { username, password } => Ok((
            "/api/auth/login",
            serde_json::to_value(LoginRequest { username, password })?,
        )),
        Credentials::Admin {
            beid,
            web_services_key,
        } => Ok((
            "/api/auth/loginadmin",
            serde_json::to_value(AdminLoginRequest {
                beid,
                web_services_key,
            })?,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_login_body_uses_lowercase_fields() {
        let creds = Credentials::Login {
            username: "jdoe".to_string(),
            password: "hunter2".to_string(),
        };
        let (path, body) = login_body(&creds).unwrap();
        assert_eq!(path, "/api/auth/login");
        assert_eq!(body, json!({"username": "jdoe", "password": "hunter2"}));
    }

    #[test]
    fn test_admin_login_body_uses_tdx_field_names() {
        let creds = Credentials::Admin {
            beid: "B-1".to_string(),
            web_services_key: "K-1".to_string(),
        };
        let (path, body) = login_body(&creds).unwrap();
        assert_eq!(path, "/api/auth/loginadmin");
        assert_eq!(body, json!({"BEID": "B-1", "WebServicesKey": "K-1"}));
    }
}
