use async_trait::async_trait;
use chrono::{Duration, Local, Months, NaiveDate};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::sync::Arc;

use crate::modules::interview::adapter::outgoing::sea_orm_entity::interviews::{
    Column, Entity, Model,
};
use crate::modules::interview::application::ports::outgoing::interview_query::{
    InterviewQuery, InterviewQueryError, PageRequest, PageResult,
};
use crate::modules::interview::domain::entities::{
    Interview, InterviewFilter, InterviewMode, InterviewStatus, TimeRange,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct InterviewQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl InterviewQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> InterviewQueryError {
    InterviewQueryError::DatabaseError(e.to_string())
}

fn models_to_domain(models: Vec<Model>) -> Result<Vec<Interview>, InterviewQueryError> {
    models
        .into_iter()
        .map(|m| m.to_domain().map_err(InterviewQueryError::SerializationError))
        .collect()
}

/// Resolves a filter's time range into an inclusive scheduled-date window.
/// Relative ranges are anchored at the current date.
pub(crate) fn filter_window(filter: &InterviewFilter) -> Option<(NaiveDate, NaiveDate)> {
    let today = Local::now().date_naive();
    match filter.time_range? {
        TimeRange::Next3Days => Some((today, today + Duration::days(3))),
        TimeRange::NextWeek => Some((today, today + Duration::days(7))),
        TimeRange::NextMonth => Some((
            today,
            today
                .checked_add_months(Months::new(1))
                .unwrap_or(today + Duration::days(30)),
        )),
        TimeRange::Custom => {
            let from = filter.date_from.unwrap_or(today);
            let to = filter.date_to.unwrap_or(today);
            Some((from, to))
        }
    }
}

fn filter_conditions(filter: &InterviewFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(mode) = filter.mode {
        condition = condition.add(Column::Mode.eq(mode.to_string()));
    }
    if let Some(status) = filter.status {
        condition = condition.add(Column::Status.eq(status.to_string()));
    }
    if let Some((from, to)) = filter_window(filter) {
        condition = condition.add(Column::ScheduledDate.between(from, to));
    }

    condition
}

#[async_trait]
impl InterviewQuery for InterviewQueryPostgres {
    async fn find_by_id(&self, id: i64) -> Result<Option<Interview>, InterviewQueryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        model
            .map(|m| m.to_domain().map_err(InterviewQueryError::SerializationError))
            .transpose()
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Interview>, InterviewQueryError> {
        let models = Entity::find()
            .order_by_asc(Column::ScheduledDate)
            .offset(page.offset())
            .limit(page.size)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models_to_domain(models)
    }

    async fn count(&self) -> Result<u64, InterviewQueryError> {
        Entity::find().count(&*self.db).await.map_err(map_db_err)
    }

    async fn list_by_candidate(
        &self,
        candidate_id: i64,
        page: PageRequest,
    ) -> Result<Vec<Interview>, InterviewQueryError> {
        let models = Entity::find()
            .filter(Column::CandidateId.eq(candidate_id))
            .order_by_asc(Column::ScheduledDate)
            .offset(page.offset())
            .limit(page.size)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models_to_domain(models)
    }

    async fn count_by_candidate(&self, candidate_id: i64) -> Result<u64, InterviewQueryError> {
        Entity::find()
            .filter(Column::CandidateId.eq(candidate_id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn list_by_status(
        &self,
        status: InterviewStatus,
        page: PageRequest,
    ) -> Result<Vec<Interview>, InterviewQueryError> {
        let models = Entity::find()
            .filter(Column::Status.eq(status.to_string()))
            .order_by_asc(Column::ScheduledDate)
            .offset(page.offset())
            .limit(page.size)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models_to_domain(models)
    }

    async fn count_by_status(&self, status: InterviewStatus) -> Result<u64, InterviewQueryError> {
        Entity::find()
            .filter(Column::Status.eq(status.to_string()))
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn list_by_mode(
        &self,
        mode: InterviewMode,
        page: PageRequest,
    ) -> Result<Vec<Interview>, InterviewQueryError> {
        let models = Entity::find()
            .filter(Column::Mode.eq(mode.to_string()))
            .order_by_asc(Column::ScheduledDate)
            .offset(page.offset())
            .limit(page.size)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models_to_domain(models)
    }

    async fn count_by_mode(&self, mode: InterviewMode) -> Result<u64, InterviewQueryError> {
        Entity::find()
            .filter(Column::Mode.eq(mode.to_string()))
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn list_filtered(
        &self,
        filter: &InterviewFilter,
        page: PageRequest,
    ) -> Result<PageResult<Interview>, InterviewQueryError> {
        let condition = filter_conditions(filter);

        let query = Entity::find().filter(condition);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .order_by_asc(Column::ScheduledDate)
            .order_by_asc(Column::ScheduledTime)
            .offset(page.offset())
            .limit(page.size)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult {
            items: models_to_domain(models)?,
            page: page.page,
            size: page.size,
            total,
        })
    }
}
