use serde::{Deserialize, Serialize};

// Configuration data saved to JSON in the user config directory
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigData {
    /// Base URL of the LED strip device, e.g. "http://ledstrip.local".
    #[serde(default = "default_device_url")]
    pub device_url: String,

    /// Per-request timeout in seconds for device calls.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_device_url() -> String {
    // Matches the mDNS hostname the firmware announces
    String::from("http://ledstrip.local")
}

fn default_timeout_secs() -> u64 {
    5
}

impl Default for ConfigData {
    fn default() -> Self {
        Self {
            device_url: default_device_url(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}
