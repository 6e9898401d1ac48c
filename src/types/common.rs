//! Shapes shared across meeting and webinar endpoints: pagination envelopes,
//! scheduling records, and registrant CRUD parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Envelope for unpaginated list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse {
    pub total_records: u32,
}

/// Envelope for paginated list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse {
    pub total_records: u32,
    pub page_count: u32,
    pub page_number: u32,
    pub page_size: u32,
}

/// Account-defined tracking field attached to meetings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingField {
    pub field: String,
    pub value: String,
}

/// A single occurrence of a recurring meeting or webinar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occurrence {
    pub occurrence_id: String,
    pub start_time: DateTime<Utc>,
    pub duration: u32,
    pub status: String,
}

/// How registrations are approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ApprovalType {
    /// Automatically approve.
    Automatic,
    /// Manually approve.
    Manual,
    /// No registration required.
    NoRegistration,
}

impl From<ApprovalType> for u8 {
    fn from(value: ApprovalType) -> Self {
        match value {
            ApprovalType::Automatic => 0,
            ApprovalType::Manual => 1,
            ApprovalType::NoRegistration => 2,
        }
    }
}

impl TryFrom<u8> for ApprovalType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ApprovalType::Automatic),
            1 => Ok(ApprovalType::Manual),
            2 => Ok(ApprovalType::NoRegistration),
            other => Err(format!("invalid approval type: {other}")),
        }
    }
}

/// How attendees register for recurring sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum RegistrationType {
    /// Register once and attend any occurrence.
    RegisterOnce,
    /// Register for each occurrence separately.
    RegisterEachOccurrence,
    /// Register once and choose one or more occurrences.
    RegisterOnceChooseOccurrences,
}

impl From<RegistrationType> for u8 {
    fn from(value: RegistrationType) -> Self {
        match value {
            RegistrationType::RegisterOnce => 1,
            RegistrationType::RegisterEachOccurrence => 2,
            RegistrationType::RegisterOnceChooseOccurrences => 3,
        }
    }
}

impl TryFrom<u8> for RegistrationType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(RegistrationType::RegisterOnce),
            2 => Ok(RegistrationType::RegisterEachOccurrence),
            3 => Ok(RegistrationType::RegisterOnceChooseOccurrences),
            other => Err(format!("invalid registration type: {other}")),
        }
    }
}

/// Audio options for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audio {
    Both,
    Telephony,
    Voip,
}

/// Where recordings are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioRecording {
    Local,
    Cloud,
    None,
}

/// Recurrence schedule for recurring meetings and webinars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recurrence {
    #[serde(rename = "type")]
    pub recurrence_type: RecurrenceType,
    pub repeat_interval: u32,
    pub weekly_days: String,
    pub monthly_day: u32,
    pub monthly_week: i32,
    pub monthly_week_day: u32,
    pub end_times: u32,
    pub end_date_time: DateTime<Utc>,
}

/// Frequency of a recurrence schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum RecurrenceType {
    Daily,
    Weekly,
    Monthly,
}

impl From<RecurrenceType> for u8 {
    fn from(value: RecurrenceType) -> Self {
        match value {
            RecurrenceType::Daily => 1,
            RecurrenceType::Weekly => 2,
            RecurrenceType::Monthly => 3,
        }
    }
}

impl TryFrom<u8> for RecurrenceType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(RecurrenceType::Daily),
            2 => Ok(RecurrenceType::Weekly),
            3 => Ok(RecurrenceType::Monthly),
            other => Err(format!("invalid recurrence type: {other}")),
        }
    }
}

/// Approval state of a registrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrantStatus {
    Approved,
    Pending,
    Denied,
}

/// A custom registration question and its answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A meeting or webinar registrant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registrant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub email: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchasing_time_frame: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_in_purchase_process: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_of_employees: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_questions: Option<Vec<Question>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RegistrantStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_url: Option<String>,
}

/// Query parameters for listing registrants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListRegistrantsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrence_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RegistrantStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
}

/// Response from listing registrants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListRegistrantsResponse {
    #[serde(flatten)]
    pub pagination: PaginatedResponse,
    pub registrants: Vec<Registrant>,
}

/// Query parameters for adding a registrant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddRegistrantParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrence_ids: Option<String>,
}

/// Response from adding a registrant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddRegistrantResponse {
    pub id: u64,
    pub join_url: String,
    pub registrant_id: String,
    pub start_time: DateTime<Utc>,
    pub topic: String,
}

/// Action applied when updating registrant status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrantStatusAction {
    Approve,
    Cancel,
    Deny,
}

/// Reference to a registrant by id and/or email.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrantRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Body for updating registrant status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRegistrantStatusBody {
    pub action: RegistrantStatusAction,
    pub registrants: Vec<RegistrantRef>,
}

/// Query parameters for updating registrant status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateRegistrantStatusParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrence_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approval_type_round_trip() {
        let json = serde_json::to_string(&ApprovalType::Manual).unwrap();
        assert_eq!(json, "1");
        let back: ApprovalType = serde_json::from_str("2").unwrap();
        assert_eq!(back, ApprovalType::NoRegistration);
        assert!(serde_json::from_str::<ApprovalType>("7").is_err());
    }

    #[test]
    fn test_registration_type_values() {
        assert_eq!(
            serde_json::to_string(&RegistrationType::RegisterOnce).unwrap(),
            "1"
        );
        assert_eq!(
            serde_json::to_string(&RegistrationType::RegisterOnceChooseOccurrences).unwrap(),
            "3"
        );
        assert!(serde_json::from_str::<RegistrationType>("0").is_err());
    }

    #[test]
    fn test_audio_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Audio::Telephony).unwrap(), "\"telephony\"");
        assert_eq!(
            serde_json::to_string(&AudioRecording::Cloud).unwrap(),
            "\"cloud\""
        );
    }

    #[test]
    fn test_registrant_optional_fields_omitted() {
        let registrant = Registrant {
            id: None,
            email: "ada@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: None,
            address: None,
            city: None,
            country: None,
            zip: None,
            state: None,
            phone: None,
            industry: None,
            org: None,
            job_title: None,
            purchasing_time_frame: None,
            role_in_purchase_process: None,
            no_of_employees: None,
            comments: None,
            custom_questions: None,
            status: None,
            create_time: None,
            join_url: None,
        };
        let json = serde_json::to_string(&registrant).unwrap();
        assert_eq!(json, r#"{"email":"ada@example.com","first_name":"Ada"}"#);
    }

    #[test]
    fn test_recurrence_type_field_name() {
        let json = r#"{
            "type": 2,
            "repeat_interval": 1,
            "weekly_days": "2,4",
            "monthly_day": 0,
            "monthly_week": 0,
            "monthly_week_day": 0,
            "end_times": 10,
            "end_date_time": "2026-01-01T00:00:00Z"
        }"#;
        let recurrence: Recurrence = serde_json::from_str(json).unwrap();
        assert_eq!(recurrence.recurrence_type, RecurrenceType::Weekly);
        assert_eq!(recurrence.end_times, 10);
    }

    #[test]
    fn test_list_registrants_response_flattens_pagination() {
        let json = r#"{
            "total_records": 1,
            "page_count": 1,
            "page_number": 1,
            "page_size": 30,
            "registrants": [{"email": "ada@example.com", "first_name": "Ada"}]
        }"#;
        let response: ListRegistrantsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.pagination.page_size, 30);
        assert_eq!(response.registrants.len(), 1);
        assert_eq!(response.registrants[0].email, "ada@example.com");
    }

    #[test]
    fn test_update_registrant_status_body() {
        let body = UpdateRegistrantStatusBody {
            action: RegistrantStatusAction::Deny,
            registrants: vec![RegistrantRef {
                id: Some("r1".to_string()),
                email: None,
            }],
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"action":"deny","registrants":[{"id":"r1"}]}"#);
    }
}
