//! Meeting shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum MeetingType {
    Instant,
    Scheduled,
    RecurringNoFixedTime,
    RecurringFixedTime,
}

impl From<MeetingType> for u8 {
    fn from(value: MeetingType) -> Self {
        match value {
            MeetingType::Instant => 1,
            MeetingType::Scheduled => 2,
            MeetingType::RecurringNoFixedTime => 3,
            MeetingType::RecurringFixedTime => 8,
        }
    }
}

impl TryFrom<u8> for MeetingType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MeetingType::Instant),
            2 => Ok(MeetingType::Scheduled),
            3 => Ok(MeetingType::RecurringNoFixedTime),
            8 => Ok(MeetingType::RecurringFixedTime),
            other => Err(format!("invalid meeting type: {other}")),
        }
    }
}

/// A scheduled or instant meeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub uuid: String,
    pub id: u64,
    pub host_id: String,
    pub topic: String,
    #[serde(rename = "type")]
    pub meeting_type: MeetingType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    pub duration: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agenda: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meeting_type_values() {
        assert_eq!(serde_json::to_string(&MeetingType::Scheduled).unwrap(), "2");
        assert_eq!(
            serde_json::to_string(&MeetingType::RecurringFixedTime).unwrap(),
            "8"
        );
        let parsed: MeetingType = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, MeetingType::RecurringNoFixedTime);
        assert!(serde_json::from_str::<MeetingType>("4").is_err());
    }

    #[test]
    fn test_meeting_deserializes_api_shape() {
        let json = r#"{
            "uuid": "4444AAAiAAAAAiAiAiiAii==",
            "id": 1100000,
            "host_id": "x1yCzABCDEfg23HiJKl4mN",
            "topic": "Quarterly review",
            "type": 2,
            "start_time": "2026-09-05T07:32:55Z",
            "duration": 60,
            "timezone": "America/Los_Angeles",
            "join_url": "https://example.com/j/1100000"
        }"#;
        let meeting: Meeting = serde_json::from_str(json).unwrap();
        assert_eq!(meeting.id, 1100000);
        assert_eq!(meeting.meeting_type, MeetingType::Scheduled);
        assert_eq!(meeting.timezone.as_deref(), Some("America/Los_Angeles"));
        assert!(meeting.agenda.is_none());
    }
}
