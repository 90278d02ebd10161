use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::interview::application::ports::outgoing::meeting_provisioner::{
    MeetingDetails, MeetingProvisionError, MeetingProvisioner,
};

pub const DEFAULT_CALENDAR_API_URL: &str = "https://www.googleapis.com/calendar/v3";

//
// ──────────────────────────────────────────────────────────
// Calendar API payloads
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EventResource {
    summary: String,
    description: String,
    start: EventDateTime,
    end: EventDateTime,
    conference_data: ConferenceRequest,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EventDateTime {
    date_time: String,
    time_zone: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConferenceRequest {
    create_request: CreateConferenceRequest,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateConferenceRequest {
    request_id: String,
    conference_solution_key: ConferenceSolutionKey,
}

#[derive(Debug, Serialize)]
struct ConferenceSolutionKey {
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreatedEvent {
    conference_data: Option<ConferenceDataResponse>,
    hangout_link: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConferenceDataResponse {
    entry_points: Option<Vec<EntryPoint>>,
}

#[derive(Debug, Deserialize)]
struct EntryPoint {
    uri: Option<String>,
}

pub(crate) fn extract_meet_link(event: &CreatedEvent) -> Option<String> {
    event
        .conference_data
        .as_ref()
        .and_then(|data| data.entry_points.as_ref())
        .and_then(|points| points.iter().find_map(|p| p.uri.clone()))
        .or_else(|| event.hangout_link.clone())
}

//
// ──────────────────────────────────────────────────────────
// Adapter
// ──────────────────────────────────────────────────────────
//

/// Creates a calendar event with an attached Meet conference and returns
/// the conference entry-point URI. Any transport or remote-side failure
/// collapses into `Unavailable`; the caller aborts the mutation on it.
#[derive(Clone)]
pub struct GoogleMeetProvisioner {
    http: reqwest::Client,
    base_url: String,
    calendar_id: String,
    access_token: String,
    time_zone: String,
}

impl GoogleMeetProvisioner {
    pub fn new(
        http: reqwest::Client,
        base_url: String,
        access_token: String,
        time_zone: String,
    ) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            calendar_id: "primary".to_string(),
            access_token,
            time_zone,
        }
    }

    fn event_resource(
        &self,
        title: &str,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> EventResource {
        EventResource {
            summary: title.to_string(),
            description: "Interview meeting".to_string(),
            start: EventDateTime {
                date_time: start_time.format("%Y-%m-%dT%H:%M:%S").to_string(),
                time_zone: self.time_zone.clone(),
            },
            end: EventDateTime {
                date_time: end_time.format("%Y-%m-%dT%H:%M:%S").to_string(),
                time_zone: self.time_zone.clone(),
            },
            conference_data: ConferenceRequest {
                create_request: CreateConferenceRequest {
                    request_id: Uuid::new_v4().to_string(),
                    conference_solution_key: ConferenceSolutionKey {
                        kind: "hangoutsMeet".to_string(),
                    },
                },
            },
        }
    }
}

#[async_trait]
impl MeetingProvisioner for GoogleMeetProvisioner {
    async fn create_meeting(
        &self,
        title: &str,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> Result<MeetingDetails, MeetingProvisionError> {
        let url = format!(
            "{}/calendars/{}/events?conferenceDataVersion=1",
            self.base_url, self.calendar_id
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&self.event_resource(title, start_time, end_time))
            .send()
            .await
            .map_err(|e| {
                error!("Calendar API request failed: {}", e);
                MeetingProvisionError::Unavailable(e.to_string())
            })?
            .error_for_status()
            .map_err(|e| {
                error!("Calendar API rejected the event: {}", e);
                MeetingProvisionError::Unavailable(e.to_string())
            })?;

        let event: CreatedEvent = response.json().await.map_err(|e| {
            MeetingProvisionError::Unavailable(format!("undecodable event response: {}", e))
        })?;

        let meeting_link = extract_meet_link(&event).ok_or_else(|| {
            MeetingProvisionError::Unavailable("event has no conference entry point".to_string())
        })?;

        info!("Created meeting: {}", meeting_link);

        Ok(MeetingDetails {
            meeting_link,
            title: title.to_string(),
            start_time,
            end_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn link_comes_from_the_first_entry_point() {
        let event: CreatedEvent = serde_json::from_value(json!({
            "conferenceData": {
                "entryPoints": [
                    {"uri": "https://meet.google.com/abc-defg-hij"},
                    {"uri": "tel:+1-555-0100"}
                ]
            },
            "hangoutLink": "https://meet.google.com/fallback"
        }))
        .unwrap();

        assert_eq!(
            extract_meet_link(&event).as_deref(),
            Some("https://meet.google.com/abc-defg-hij")
        );
    }

    #[test]
    fn hangout_link_is_the_fallback() {
        let event: CreatedEvent = serde_json::from_value(json!({
            "hangoutLink": "https://meet.google.com/fallback"
        }))
        .unwrap();

        assert_eq!(
            extract_meet_link(&event).as_deref(),
            Some("https://meet.google.com/fallback")
        );
    }

    #[test]
    fn missing_conference_data_yields_no_link() {
        let event: CreatedEvent = serde_json::from_value(json!({})).unwrap();
        assert!(extract_meet_link(&event).is_none());
    }
}
