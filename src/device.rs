use log::debug;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Errors raised by device calls, split by where the call failed.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// The request never completed (connection refused, DNS failure, timeout).
    #[error("device unreachable: {0}")]
    Transport(#[source] reqwest::Error),

    /// The device answered with a non-success HTTP status.
    #[error("device returned HTTP {0}")]
    Status(StatusCode),

    /// The device answered 2xx but the body was not the expected JSON shape.
    #[error("malformed device response: {0}")]
    Malformed(#[source] reqwest::Error),
}

/// An animation offered by the device firmware.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Animation {
    pub id: u32,
    pub name: String,
}

// How the animation is displayed in the panel button list
impl std::fmt::Display for Animation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

// The device nests the power flag under a "status" object
#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: PowerStatus,
}

#[derive(Debug, Deserialize)]
struct PowerStatus {
    #[serde(rename = "powerOn")]
    power_on: bool,
}

#[derive(Debug, Deserialize)]
struct AnimationListResponse {
    animations: Vec<Animation>,
}

#[derive(Debug, Deserialize)]
struct SelectResponse {
    result: SelectResult,
}

#[derive(Debug, Deserialize)]
struct SelectResult {
    id: u32,
}

/// Color and optional effect type pushed to `/api/effects/set`. Channel
/// values here are the final, already alpha-scaled ones that go on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectParams {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub effect_type: Option<String>,
}

impl EffectParams {
    /// Query pairs exactly as they are transmitted. `type` is only emitted
    /// when an effect type is set.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("r", self.r.to_string()),
            ("g", self.g.to_string()),
            ("b", self.b.to_string()),
        ];
        if let Some(effect_type) = &self.effect_type {
            pairs.push(("type", effect_type.clone()));
        }
        pairs
    }
}

/// Thin client for the device's HTTP action surface. Every call is a single
/// best-effort GET: no retries, no caching, one configured timeout.
#[derive(Clone)]
pub struct DeviceClient {
    base: String,
    http: Client,
}

impl DeviceClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DeviceError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(DeviceError::Transport)?;
        Ok(Self {
            base: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    // Shared GET-and-parse path for all JSON-bearing actions
    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, DeviceError> {
        debug!("GET {} {:?}", path, query);
        let response = self
            .http
            .get(self.endpoint(path))
            .query(query)
            .send()
            .map_err(DeviceError::Transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(DeviceError::Status(status));
        }
        response.json::<T>().map_err(DeviceError::Malformed)
    }

    /// `GET /api/status`: the device's current power flag.
    pub fn get_status(&self) -> Result<bool, DeviceError> {
        let parsed: StatusResponse = self.get_json("/api/status", &[])?;
        Ok(parsed.status.power_on)
    }

    /// `GET /api/power/toggle`: the device decides the new state; callers
    /// must adopt exactly the returned value, never a locally negated one.
    pub fn toggle_power(&self) -> Result<bool, DeviceError> {
        let parsed: StatusResponse = self.get_json("/api/power/toggle", &[])?;
        Ok(parsed.status.power_on)
    }

    /// `GET /api/animations/get`: all animations the firmware offers.
    pub fn list_animations(&self) -> Result<Vec<Animation>, DeviceError> {
        let parsed: AnimationListResponse = self.get_json("/api/animations/get", &[])?;
        Ok(parsed.animations)
    }

    /// `GET /api/animations/select?id=`: returns the id the device confirmed.
    pub fn select_animation(&self, id: u32) -> Result<u32, DeviceError> {
        let parsed: SelectResponse =
            self.get_json("/api/animations/select", &[("id", id.to_string())])?;
        Ok(parsed.result.id)
    }

    /// `GET /api/effects/set?r=&g=&b=[&type=]`: the ack body is checked for
    /// well-formedness and discarded.
    pub fn set_effect(&self, params: &EffectParams) -> Result<(), DeviceError> {
        let _ack: serde_json::Value = self.get_json("/api/effects/set", &params.query())?;
        Ok(())
    }

    /// `GET /api/reset`: developer-only board reset. No body is consumed.
    pub fn reset(&self) -> Result<(), DeviceError> {
        let response = self
            .http
            .get(self.endpoint("/api/reset"))
            .send()
            .map_err(DeviceError::Transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(DeviceError::Status(status));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> DeviceClient {
        DeviceClient::new(base, Duration::from_secs(1)).expect("client should build")
    }

    #[test]
    fn endpoint_trims_trailing_slash() {
        let client = client("http://ledstrip.local/");
        assert_eq!(client.base_url(), "http://ledstrip.local");
        assert_eq!(
            client.endpoint("/api/status"),
            "http://ledstrip.local/api/status"
        );
    }

    #[test]
    fn status_wire_format() {
        let parsed: StatusResponse =
            serde_json::from_str(r#"{"status":{"powerOn":true}}"#).unwrap();
        assert!(parsed.status.power_on);

        let parsed: StatusResponse =
            serde_json::from_str(r#"{"status":{"powerOn":false}}"#).unwrap();
        assert!(!parsed.status.power_on);
    }

    #[test]
    fn status_rejects_numeric_power_flag() {
        // One firmware iteration reported 0/1; the pinned contract is a bool.
        let parsed = serde_json::from_str::<StatusResponse>(r#"{"status":{"powerOn":1}}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn animation_list_wire_format() {
        let body = r#"{"animations":[
            {"id":1,"name":"Cop Lights Alternating"},
            {"id":4,"name":"Rainy Day"}
        ]}"#;
        let parsed: AnimationListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.animations.len(), 2);
        assert_eq!(parsed.animations[0].id, 1);
        assert_eq!(parsed.animations[1].name, "Rainy Day");
    }

    #[test]
    fn select_wire_format() {
        let parsed: SelectResponse = serde_json::from_str(r#"{"result":{"id":3}}"#).unwrap();
        assert_eq!(parsed.result.id, 3);
    }

    #[test]
    fn effect_query_emits_type_only_when_set() {
        let plain = EffectParams {
            r: 100,
            g: 50,
            b: 25,
            effect_type: None,
        };
        assert_eq!(
            plain.query(),
            vec![
                ("r", "100".to_string()),
                ("g", "50".to_string()),
                ("b", "25".to_string()),
            ]
        );

        let typed = EffectParams {
            effect_type: Some("solid".to_string()),
            ..plain
        };
        assert_eq!(typed.query().last(), Some(&("type", "solid".to_string())));
    }
}
