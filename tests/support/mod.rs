#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use tdx_mcp::config::{AuthMethod, Config};
use tdx_mcp::tdx_client::TdxClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const APP_ID: &str = "42";
pub const TOKEN: &str = "jwt-token-1";

/// Clock whose time only moves when a test advances it.
#[derive(Clone)]
pub struct ManualClock(Arc<Mutex<DateTime<Utc>>>);

impl ManualClock {
    pub fn new() -> Self {
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
        Self(Arc::new(Mutex::new(start)))
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.0.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

pub fn login_config(server: &MockServer) -> Config {
    Config {
        base_url: server.uri(),
        app_id: APP_ID.to_string(),
        auth_method: AuthMethod::Login,
        username: Some("jdoe".to_string()),
        password: Some("hunter2".to_string()),
        beid: None,
        web_services_key: None,
    }
}

pub fn admin_config(server: &MockServer) -> Config {
    Config {
        base_url: server.uri(),
        app_id: APP_ID.to_string(),
        auth_method: AuthMethod::LoginAdmin,
        username: None,
        password: None,
        beid: Some("beid-1".to_string()),
        web_services_key: Some("wsk-secret".to_string()),
    }
}

pub fn client_with_clock(config: &Config, clock: &ManualClock) -> TdxClient {
    TdxClient::with_clock(config, Arc::new(clock.clone())).expect("client")
}

/// Mounts a login endpoint that hands out [`TOKEN`] and must be hit
/// exactly `times` times.
pub async fn mount_login(server: &MockServer, times: u64) {
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TOKEN))
        .expect(times)
        .mount(server)
        .await;
}

pub fn scoped(endpoint: &str) -> String {
    format!("/api/{}{}", APP_ID, endpoint)
}
