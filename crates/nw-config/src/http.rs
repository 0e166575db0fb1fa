//! HTTP client configuration.

use serde::{Deserialize, Serialize};

const fn default_page_timeout_secs() -> u64 {
    25
}

const fn default_probe_timeout_secs() -> u64 {
    20
}

fn default_user_agent() -> String {
    String::from(
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/116.0.0.0 Safari/537.36",
    )
}

fn default_accept_language() -> String {
    String::from("en-US,en;q=0.9")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HttpConfig {
    /// Timeout for schedule, program and episode page fetches.
    #[serde(default = "default_page_timeout_secs")]
    pub page_timeout_secs: u64,

    /// Timeout for each audio size probe request.
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_accept_language")]
    pub accept_language: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            page_timeout_secs: default_page_timeout_secs(),
            probe_timeout_secs: default_probe_timeout_secs(),
            user_agent: default_user_agent(),
            accept_language: default_accept_language(),
        }
    }
}
