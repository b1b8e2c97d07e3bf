//! Configuration model loaded from external sources.

use std::time::Duration;

use serde::Deserialize;

fn default_request_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    pub assets_dir: String,
    /// Base URL the dashboard uses to reach the Sirius API.
    pub sirius_url: String,
    /// Base URL of Sirius as seen by the browser, used for sign-in redirects and links.
    pub sirius_public_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Where the browser is sent to sign in again.
    pub fn auth_url(&self) -> String {
        format!("{}/auth", self.sirius_public_url)
    }
}
