//! Webinar shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{
    ApprovalType, Audio, AudioRecording, Occurrence, Recurrence, RegistrationType,
};

/// Kind of webinar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum WebinarType {
    Webinar,
    RecurringNoFixedTime,
    RecurringFixedTime,
}

impl From<WebinarType> for u8 {
    fn from(value: WebinarType) -> Self {
        match value {
            WebinarType::Webinar => 5,
            WebinarType::RecurringNoFixedTime => 6,
            WebinarType::RecurringFixedTime => 9,
        }
    }
}

impl TryFrom<u8> for WebinarType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(WebinarType::Webinar),
            6 => Ok(WebinarType::RecurringNoFixedTime),
            9 => Ok(WebinarType::RecurringFixedTime),
            other => Err(format!("invalid webinar type: {other}")),
        }
    }
}

/// Webinar feature settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebinarSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_video: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panelists_video: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub practice_session: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hd_video: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_type: Option<ApprovalType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_type: Option<RegistrationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<Audio>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_recording: Option<AudioRecording>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_registration: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_share_button: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_multiple_devices: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrants_email_notification: Option<bool>,
}

/// Full details of a webinar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebinarDetails {
    pub uuid: String,
    pub id: u64,
    pub host_id: String,
    pub topic: String,
    #[serde(rename = "type")]
    pub webinar_type: WebinarType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    pub duration: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agenda: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrences: Option<Vec<Occurrence>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<WebinarSettings>,
}
