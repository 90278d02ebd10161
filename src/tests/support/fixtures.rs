use chrono::{Duration, Local, NaiveDate, NaiveTime};

use crate::modules::interview::application::ports::incoming::use_cases::ScheduleInterviewCommand;
use crate::modules::interview::domain::entities::{
    Interview, InterviewMode, InterviewStatus,
};

pub fn tomorrow() -> NaiveDate {
    Local::now().date_naive() + Duration::days(1)
}

pub fn ten_am() -> NaiveTime {
    NaiveTime::from_hms_opt(10, 0, 0).unwrap()
}

pub fn online_interview(id: i64) -> Interview {
    Interview {
        id,
        scheduled_date: tomorrow(),
        scheduled_time: ten_am(),
        duration_minutes: 30,
        mode: InterviewMode::Online,
        status: InterviewStatus::Scheduled,
        meeting_title: Some("Tech screen".to_string()),
        meeting_link: Some("https://meet/xyz".to_string()),
        location: None,
        description: Some("First round".to_string()),
        feedback: None,
        candidate_id: 7,
        job_id: 3,
        user_email: "a@b.com".to_string(),
    }
}

pub fn in_person_interview(id: i64) -> Interview {
    Interview {
        mode: InterviewMode::InPerson,
        meeting_title: None,
        meeting_link: None,
        location: Some("Room 2".to_string()),
        ..online_interview(id)
    }
}

pub fn online_schedule_command() -> ScheduleInterviewCommand {
    ScheduleInterviewCommand {
        scheduled_date: tomorrow(),
        scheduled_time: ten_am(),
        duration_minutes: 30,
        mode: InterviewMode::Online,
        meeting_title: Some("Tech screen".to_string()),
        location: None,
        description: None,
        candidate_id: 7,
        job_id: 3,
        user_email: "a@b.com".to_string(),
    }
}

pub fn in_person_schedule_command() -> ScheduleInterviewCommand {
    ScheduleInterviewCommand {
        mode: InterviewMode::InPerson,
        meeting_title: None,
        location: Some("Room 2".to_string()),
        ..online_schedule_command()
    }
}
