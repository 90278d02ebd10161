use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::modules::interview::application::ports::outgoing::interview_repository::NewInterview;
use crate::modules::interview::domain::entities::Interview;

// SeaORM model for the "interviews" table. Mode and status are stored as
// text and parsed into the domain enums on the way out.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "interviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub scheduled_date: Date,
    pub scheduled_time: Time,
    pub duration_minutes: i32,

    #[sea_orm(column_type = "Text")]
    pub mode: String,
    #[sea_orm(column_type = "Text")]
    pub status: String,

    pub meeting_title: Option<String>,
    pub meeting_link: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub feedback: Option<String>,

    pub candidate_id: i64,
    pub job_id: i64,
    pub user_email: String,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Result<Interview, String> {
        Ok(Interview {
            id: self.id,
            scheduled_date: self.scheduled_date,
            scheduled_time: self.scheduled_time,
            duration_minutes: self.duration_minutes,
            mode: self.mode.parse()?,
            status: self.status.parse()?,
            meeting_title: self.meeting_title.clone(),
            meeting_link: self.meeting_link.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
            feedback: self.feedback.clone(),
            candidate_id: self.candidate_id,
            job_id: self.job_id,
            user_email: self.user_email.clone(),
        })
    }
}

pub fn active_model_from_new(data: &NewInterview) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        scheduled_date: Set(data.scheduled_date),
        scheduled_time: Set(data.scheduled_time),
        duration_minutes: Set(data.duration_minutes),
        mode: Set(data.mode.to_string()),
        status: Set(data.status.to_string()),
        meeting_title: Set(data.meeting_title.clone()),
        meeting_link: Set(data.meeting_link.clone()),
        location: Set(data.location.clone()),
        description: Set(data.description.clone()),
        feedback: Set(None),
        candidate_id: Set(data.candidate_id),
        job_id: Set(data.job_id),
        user_email: Set(data.user_email.clone()),
        created_at: Set(chrono::Utc::now().into()),
        updated_at: Set(chrono::Utc::now().into()),
    }
}

pub fn active_model_from_domain(interview: &Interview) -> ActiveModel {
    ActiveModel {
        id: Set(interview.id),
        scheduled_date: Set(interview.scheduled_date),
        scheduled_time: Set(interview.scheduled_time),
        duration_minutes: Set(interview.duration_minutes),
        mode: Set(interview.mode.to_string()),
        status: Set(interview.status.to_string()),
        meeting_title: Set(interview.meeting_title.clone()),
        meeting_link: Set(interview.meeting_link.clone()),
        location: Set(interview.location.clone()),
        description: Set(interview.description.clone()),
        feedback: Set(interview.feedback.clone()),
        candidate_id: Set(interview.candidate_id),
        job_id: Set(interview.job_id),
        user_email: Set(interview.user_email.clone()),
        created_at: NotSet,
        updated_at: Set(chrono::Utc::now().into()),
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
