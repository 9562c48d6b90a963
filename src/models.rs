//! Server identity captured at startup and the JSON bodies built from it.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Host name reported when the OS lookup fails.
pub const UNKNOWN_HOSTNAME: &str = "unknown";

// ---

/// Process-wide identity, computed once before the listener starts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    // ---
    pub hostname: String,
    pub time_started: DateTime<Utc>,

    /// Monotonic start point used for uptime; not part of the wire format.
    #[serde(skip)]
    started_at: Instant,
}

impl ServerInfo {
    // ---
    pub fn new(hostname: impl Into<String>) -> Self {
        // ---
        Self {
            hostname: hostname.into(),
            time_started: Utc::now(),
            started_at: Instant::now(),
        }
    }

    /// Resolve the host name from the OS and stamp the current time.
    pub fn capture() -> Self {
        // ---
        let hostname = match hostname::get().map(|h| h.into_string()) {
            Ok(Ok(name)) if !name.is_empty() => name,
            Ok(Ok(_)) => {
                tracing::warn!("OS returned an empty hostname, using '{UNKNOWN_HOSTNAME}'");
                UNKNOWN_HOSTNAME.to_string()
            }
            Ok(Err(raw)) => {
                tracing::warn!("Hostname {:?} is not valid UTF-8, using '{UNKNOWN_HOSTNAME}'", raw);
                UNKNOWN_HOSTNAME.to_string()
            }
            Err(e) => {
                tracing::warn!("Failed to resolve hostname: {}, using '{UNKNOWN_HOSTNAME}'", e);
                UNKNOWN_HOSTNAME.to_string()
            }
        };

        Self::new(hostname)
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

/// JSON response body for the `/health` endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime: String,
}

impl HealthResponse {
    pub fn from_info(info: &ServerInfo) -> Self {
        Self {
            status: "healthy",
            uptime: humantime::format_duration(info.uptime()).to_string(),
        }
    }
}

/// JSON response body for the `/metrics` endpoint.
///
/// Both counters are placeholders and always report zero; nothing samples
/// the runtime.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResponse {
    pub memory_alloc: u64,
    pub goroutines: u64,
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use serde_json::json;

    #[test]
    fn test_server_info_wire_shape() {
        // ---
        let info = ServerInfo::new("web-01");
        let value = serde_json::to_value(&info).unwrap();

        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2, "only hostname and timeStarted are exposed");
        assert_eq!(obj["hostname"], "web-01");

        let started: DateTime<Utc> = obj["timeStarted"].as_str().unwrap().parse().unwrap();
        assert_eq!(started, info.time_started);
    }

    #[test]
    fn test_capture_never_yields_empty_hostname() {
        // ---
        let info = ServerInfo::capture();
        assert!(!info.hostname.is_empty());
        assert!(info.time_started.timestamp() > 0);
    }

    #[test]
    fn test_health_reports_healthy() {
        // ---
        let info = ServerInfo::new("web-01");
        let health = HealthResponse::from_info(&info);

        assert_eq!(health.status, "healthy");
        assert!(!health.uptime.is_empty());
        assert!(humantime::parse_duration(&health.uptime).is_ok());
    }

    #[test]
    fn test_health_uptime_grows() {
        // ---
        let info = ServerInfo::new("web-01");
        let first = HealthResponse::from_info(&info);
        std::thread::sleep(Duration::from_millis(5));
        let second = HealthResponse::from_info(&info);

        let first = humantime::parse_duration(&first.uptime).unwrap();
        let second = humantime::parse_duration(&second.uptime).unwrap();
        assert!(second > first, "uptime did not grow: {:?} -> {:?}", first, second);
    }

    #[test]
    fn test_metrics_placeholder_is_zero() {
        // ---
        let value = serde_json::to_value(MetricsResponse::default()).unwrap();
        assert_eq!(value, json!({"memoryAlloc": 0, "goroutines": 0}));
    }
}
