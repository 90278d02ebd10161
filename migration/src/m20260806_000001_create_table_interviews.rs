use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create interviews table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Interviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Interviews::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Interviews::ScheduledDate).date().not_null())
                    .col(ColumnDef::new(Interviews::ScheduledTime).time().not_null())
                    .col(
                        ColumnDef::new(Interviews::DurationMinutes)
                            .integer()
                            .not_null()
                            .default(15),
                    )
                    .col(ColumnDef::new(Interviews::Mode).text().not_null())
                    .col(ColumnDef::new(Interviews::Status).text().not_null())
                    .col(ColumnDef::new(Interviews::MeetingTitle).text())
                    .col(ColumnDef::new(Interviews::MeetingLink).text())
                    .col(ColumnDef::new(Interviews::Location).text())
                    .col(ColumnDef::new(Interviews::Description).text())
                    .col(ColumnDef::new(Interviews::Feedback).text())
                    .col(
                        ColumnDef::new(Interviews::CandidateId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Interviews::JobId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Interviews::UserEmail)
                            .string_len(254)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Interviews::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Interviews::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // The keyed listings each get their own index
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_interviews_candidate_id
                ON interviews (candidate_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_interviews_status
                ON interviews (status);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_interviews_mode
                ON interviews (mode);
                "#,
            )
            .await?;

        // Paginated listings and filter windows sort on the schedule
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_interviews_scheduled_date
                ON interviews (scheduled_date, scheduled_time);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Interviews::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Interviews {
    Table,
    Id,
    ScheduledDate,
    ScheduledTime,
    DurationMinutes,
    Mode,
    Status,
    MeetingTitle,
    MeetingLink,
    Location,
    Description,
    Feedback,
    CandidateId,
    JobId,
    UserEmail,
    CreatedAt,
    UpdatedAt,
}
