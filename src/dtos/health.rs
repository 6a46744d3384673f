//! Health DTO - risposta di `GET /health`

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct HealthDTO {
    pub status: &'static str,
    /// ISO-8601, millisecondi, suffisso `Z`
    pub timestamp: String,
}

impl HealthDTO {
    pub fn ok_at(now: DateTime<Utc>) -> Self {
        Self {
            status: "OK",
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_health_serialization() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap();
        let json = serde_json::to_value(HealthDTO::ok_at(now)).unwrap();
        assert_eq!(json["status"], "OK");
        assert_eq!(json["timestamp"], "2024-03-05T14:07:09.000Z");
    }
}
