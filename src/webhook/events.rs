//! Webhook event payloads, tagged by the `event` discriminator.
//!
//! Modeled as a closed sum type so a match over [`WebhookEvent`] is checked
//! for exhaustiveness as new event kinds are added.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::common::{Occurrence, Recurrence, Registrant};
use crate::types::meetings::MeetingType;
use crate::types::webinars::{WebinarSettings, WebinarType};

/// Standard webhook payload: the account the event belongs to plus the
/// affected object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPayload<T> {
    pub account_id: String,
    pub object: T,
}

/// Payload for "updated" events, carrying the object before the change
/// alongside the object after it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangePayload<T> {
    pub account_id: String,
    pub object: T,
    pub old_object: T,
}

/// Payload of the one-time endpoint ownership challenge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlValidationPayload {
    #[serde(rename = "plainToken")]
    pub plain_token: String,
}

/// Participant data carried in participant-level meeting events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookParticipant {
    pub user_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_time: Option<DateTime<Utc>>,
}

/// The meeting subset delivered in webhook payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookMeeting {
    pub id: u64,
    pub uuid: String,
    pub host_id: String,
    pub topic: String,
    #[serde(rename = "type")]
    pub meeting_type: MeetingType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    pub duration: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// A webhook meeting together with the participant the event concerns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookMeetingParticipant {
    #[serde(flatten)]
    pub meeting: WebhookMeeting,
    pub participant: WebhookParticipant,
}

/// The webinar subset delivered in webhook payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookWebinar {
    pub id: u64,
    pub uuid: String,
    pub host_id: String,
    pub topic: String,
    #[serde(rename = "type")]
    pub webinar_type: WebinarType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    pub duration: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agenda: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrences: Option<Vec<Occurrence>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<WebinarSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_url: Option<String>,
}

/// A webhook webinar together with the registrant the event concerns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookWebinarRegistrant {
    #[serde(flatten)]
    pub webinar: WebhookWebinar,
    pub registrant: Registrant,
}

/// An inbound webhook callback, discriminated by the `event` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum WebhookEvent {
    #[serde(rename = "meeting.started")]
    MeetingStarted { payload: EventPayload<WebhookMeeting> },
    #[serde(rename = "meeting.ended")]
    MeetingEnded { payload: EventPayload<WebhookMeeting> },
    #[serde(rename = "meeting.participant_jbh_joined")]
    ParticipantJoinedBeforeHost {
        payload: EventPayload<WebhookMeetingParticipant>,
    },
    #[serde(rename = "meeting.participant_joined")]
    ParticipantJoined {
        payload: EventPayload<WebhookMeetingParticipant>,
    },
    #[serde(rename = "meeting.participant_left")]
    ParticipantLeft {
        payload: EventPayload<WebhookMeetingParticipant>,
    },
    #[serde(rename = "webinar.created")]
    WebinarCreated { payload: EventPayload<WebhookWebinar> },
    #[serde(rename = "webinar.updated")]
    WebinarUpdated { payload: ChangePayload<WebhookWebinar> },
    #[serde(rename = "webinar.deleted")]
    WebinarDeleted { payload: EventPayload<WebhookWebinar> },
    #[serde(rename = "webinar.registration_created")]
    WebinarRegistrationCreated {
        payload: EventPayload<WebhookWebinarRegistrant>,
    },
    #[serde(rename = "webinar.registration_approved")]
    WebinarRegistrationApproved {
        payload: EventPayload<WebhookWebinarRegistrant>,
    },
    #[serde(rename = "webinar.registration_denied")]
    WebinarRegistrationDenied {
        payload: EventPayload<WebhookWebinarRegistrant>,
    },
    #[serde(rename = "webinar.registration_cancelled")]
    WebinarRegistrationCancelled {
        payload: EventPayload<WebhookWebinarRegistrant>,
    },
    #[serde(rename = "endpoint.url_validation")]
    EndpointUrlValidation { payload: UrlValidationPayload },
}

impl WebhookEvent {
    /// The `event` discriminator string, as delivered on the wire.
    pub fn event_name(&self) -> &'static str {
        match self {
            WebhookEvent::MeetingStarted { .. } => "meeting.started",
            WebhookEvent::MeetingEnded { .. } => "meeting.ended",
            WebhookEvent::ParticipantJoinedBeforeHost { .. } => "meeting.participant_jbh_joined",
            WebhookEvent::ParticipantJoined { .. } => "meeting.participant_joined",
            WebhookEvent::ParticipantLeft { .. } => "meeting.participant_left",
            WebhookEvent::WebinarCreated { .. } => "webinar.created",
            WebhookEvent::WebinarUpdated { .. } => "webinar.updated",
            WebhookEvent::WebinarDeleted { .. } => "webinar.deleted",
            WebhookEvent::WebinarRegistrationCreated { .. } => "webinar.registration_created",
            WebhookEvent::WebinarRegistrationApproved { .. } => "webinar.registration_approved",
            WebhookEvent::WebinarRegistrationDenied { .. } => "webinar.registration_denied",
            WebhookEvent::WebinarRegistrationCancelled { .. } => "webinar.registration_cancelled",
            WebhookEvent::EndpointUrlValidation { .. } => "endpoint.url_validation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_meeting_json() -> &'static str {
        r#"{
            "event": "meeting.started",
            "payload": {
                "account_id": "AAAAAABBBB",
                "object": {
                    "id": 1100000,
                    "uuid": "4444AAAiAAAAAiAiAiiAii==",
                    "host_id": "x1yCzABCDEfg23HiJKl4mN",
                    "topic": "Standup",
                    "type": 2,
                    "start_time": "2026-09-05T07:32:55Z",
                    "duration": 15,
                    "timezone": "UTC"
                }
            }
        }"#
    }

    #[test]
    fn test_meeting_started_deserializes() {
        let event: WebhookEvent = serde_json::from_str(sample_meeting_json()).unwrap();
        assert_eq!(event.event_name(), "meeting.started");
        match event {
            WebhookEvent::MeetingStarted { payload } => {
                assert_eq!(payload.account_id, "AAAAAABBBB");
                assert_eq!(payload.object.topic, "Standup");
                assert_eq!(payload.object.meeting_type, MeetingType::Scheduled);
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_event_round_trips() {
        let event: WebhookEvent = serde_json::from_str(sample_meeting_json()).unwrap();
        let json = serde_json::to_string(&event).unwrap();
        let back: WebhookEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
        // The discriminator survives serialization under its wire name.
        assert!(json.starts_with(r#"{"event":"meeting.started""#));
    }

    #[test]
    fn test_participant_event_flattens_meeting_fields() {
        let json = r#"{
            "event": "meeting.participant_joined",
            "payload": {
                "account_id": "AAAAAABBBB",
                "object": {
                    "id": 1100000,
                    "uuid": "4444AAAiAAAAAiAiAiiAii==",
                    "host_id": "x1yCzABCDEfg23HiJKl4mN",
                    "topic": "Standup",
                    "type": 2,
                    "duration": 15,
                    "participant": {
                        "user_name": "Ada Lovelace",
                        "user_id": "167782040",
                        "join_time": "2026-09-05T07:33:10Z"
                    }
                }
            }
        }"#;
        let event: WebhookEvent = serde_json::from_str(json).unwrap();
        match event {
            WebhookEvent::ParticipantJoined { payload } => {
                assert_eq!(payload.object.meeting.id, 1100000);
                assert_eq!(payload.object.participant.user_name, "Ada Lovelace");
                assert_eq!(payload.object.participant.id, None);
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_webinar_updated_carries_old_object() {
        let json = r#"{
            "event": "webinar.updated",
            "payload": {
                "account_id": "AAAAAABBBB",
                "object": {
                    "id": 998877,
                    "uuid": "dZ4vlebhSumUv6abcdefgh==",
                    "host_id": "u2pRdCyAQGC3h04Kabcdef",
                    "topic": "Product launch (rescheduled)",
                    "type": 5,
                    "duration": 90
                },
                "old_object": {
                    "id": 998877,
                    "uuid": "dZ4vlebhSumUv6abcdefgh==",
                    "host_id": "u2pRdCyAQGC3h04Kabcdef",
                    "topic": "Product launch",
                    "type": 5,
                    "duration": 60
                }
            }
        }"#;
        let event: WebhookEvent = serde_json::from_str(json).unwrap();
        match event {
            WebhookEvent::WebinarUpdated { payload } => {
                assert_eq!(payload.object.duration, 90);
                assert_eq!(payload.old_object.duration, 60);
                assert_eq!(payload.old_object.topic, "Product launch");
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_registration_event_carries_registrant() {
        let json = r#"{
            "event": "webinar.registration_approved",
            "payload": {
                "account_id": "AAAAAABBBB",
                "object": {
                    "id": 998877,
                    "uuid": "dZ4vlebhSumUv6abcdefgh==",
                    "host_id": "u2pRdCyAQGC3h04Kabcdef",
                    "topic": "Product launch",
                    "type": 5,
                    "duration": 90,
                    "registrant": {
                        "id": "reg_1",
                        "email": "ada@example.com",
                        "first_name": "Ada"
                    }
                }
            }
        }"#;
        let event: WebhookEvent = serde_json::from_str(json).unwrap();
        match event {
            WebhookEvent::WebinarRegistrationApproved { payload } => {
                assert_eq!(payload.object.webinar.id, 998877);
                assert_eq!(payload.object.registrant.email, "ada@example.com");
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_url_validation_payload_wire_name() {
        let json = r#"{"event":"endpoint.url_validation","payload":{"plainToken":"abc123"}}"#;
        let event: WebhookEvent = serde_json::from_str(json).unwrap();
        match &event {
            WebhookEvent::EndpointUrlValidation { payload } => {
                assert_eq!(payload.plain_token, "abc123");
            }
            other => panic!("unexpected variant: {:?}", other),
        }
        assert_eq!(serde_json::to_string(&event).unwrap(), json);
    }

    #[test]
    fn test_unknown_event_is_rejected() {
        let json = r#"{"event":"recording.completed","payload":{}}"#;
        assert!(serde_json::from_str::<WebhookEvent>(json).is_err());
    }
}
