use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Allowed interview length in minutes.
pub const MIN_DURATION_MINUTES: i32 = 15;
pub const MAX_DURATION_MINUTES: i32 = 90;
pub const DEFAULT_DURATION_MINUTES: i32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterviewMode {
    Online,
    InPerson,
}

impl fmt::Display for InterviewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterviewMode::Online => write!(f, "ONLINE"),
            InterviewMode::InPerson => write!(f, "IN_PERSON"),
        }
    }
}

impl FromStr for InterviewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ONLINE" => Ok(InterviewMode::Online),
            "IN_PERSON" => Ok(InterviewMode::InPerson),
            other => Err(format!("unknown interview mode: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterviewStatus {
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}

impl fmt::Display for InterviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterviewStatus::Scheduled => write!(f, "SCHEDULED"),
            InterviewStatus::Completed => write!(f, "COMPLETED"),
            InterviewStatus::Cancelled => write!(f, "CANCELLED"),
            InterviewStatus::NoShow => write!(f, "NO_SHOW"),
        }
    }
}

impl FromStr for InterviewStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SCHEDULED" => Ok(InterviewStatus::Scheduled),
            "COMPLETED" => Ok(InterviewStatus::Completed),
            "CANCELLED" => Ok(InterviewStatus::Cancelled),
            "NO_SHOW" => Ok(InterviewStatus::NoShow),
            other => Err(format!("unknown interview status: {other}")),
        }
    }
}

/// The scheduled interview. Exactly one of `meeting_link` / `location` is
/// populated depending on `mode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interview {
    pub id: i64,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub duration_minutes: i32,
    pub mode: InterviewMode,
    pub status: InterviewStatus,
    pub meeting_title: Option<String>,
    pub meeting_link: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub feedback: Option<String>,
    pub candidate_id: i64,
    pub job_id: i64,
    pub user_email: String,
}

impl Interview {
    pub fn starts_at(&self) -> NaiveDateTime {
        self.scheduled_date.and_time(self.scheduled_time)
    }

    pub fn ends_at(&self) -> NaiveDateTime {
        self.starts_at() + chrono::Duration::minutes(self.duration_minutes as i64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeRange {
    Next3Days,
    NextWeek,
    NextMonth,
    Custom,
}

/// Ad-hoc filter for the filtered listing. All fields optional; CUSTOM time
/// ranges take their bounds from `date_from` / `date_to`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterviewFilter {
    pub mode: Option<InterviewMode>,
    pub status: Option<InterviewStatus>,
    pub time_range: Option<TimeRange>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl InterviewFilter {
    /// A CUSTOM range needs at least one bound, and the bounds must not be
    /// inverted.
    pub fn validate(&self) -> Result<(), String> {
        if self.time_range == Some(TimeRange::Custom)
            && self.date_from.is_none()
            && self.date_to.is_none()
        {
            return Err("custom time range requires date_from or date_to".to_string());
        }
        if let (Some(from), Some(to)) = (self.date_from, self.date_to) {
            if from > to {
                return Err("date_from must not be after date_to".to_string());
            }
        }
        Ok(())
    }
}
