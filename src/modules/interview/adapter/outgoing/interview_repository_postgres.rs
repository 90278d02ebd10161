use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use std::sync::Arc;

use crate::modules::interview::adapter::outgoing::sea_orm_entity::interviews::{
    self, Entity,
};
use crate::modules::interview::application::ports::outgoing::interview_repository::{
    InterviewRepository, InterviewRepositoryError, NewInterview,
};
use crate::modules::interview::domain::entities::Interview;

#[derive(Clone)]
pub struct InterviewRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl InterviewRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> InterviewRepositoryError {
    match e {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => InterviewRepositoryError::NotFound,
        other => InterviewRepositoryError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl InterviewRepository for InterviewRepositoryPostgres {
    async fn insert(&self, data: NewInterview) -> Result<Interview, InterviewRepositoryError> {
        let model = interviews::active_model_from_new(&data)
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?;

        model
            .to_domain()
            .map_err(InterviewRepositoryError::SerializationError)
    }

    async fn update(&self, interview: Interview) -> Result<Interview, InterviewRepositoryError> {
        let model = interviews::active_model_from_domain(&interview);
        let updated = Entity::update(model)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .to_domain()
            .map_err(InterviewRepositoryError::SerializationError)
    }

    async fn exists(&self, id: i64) -> Result<bool, InterviewRepositoryError> {
        let count = Entity::find_by_id(id)
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(count > 0)
    }
}
