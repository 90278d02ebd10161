pub mod event_publisher;
pub mod interview_cache;
pub mod interview_query;
pub mod interview_repository;
pub mod jobs_directory;
pub mod meeting_provisioner;
pub mod user_directory;

pub use event_publisher::{
    EventPublishError, InterviewCancelledEvent, InterviewCreatedEvent, InterviewEventPublisher,
    InterviewUpdatedEvent,
};
pub use interview_cache::{CacheRegion, InterviewCache, InterviewCacheError, MutationKind};
pub use interview_query::{InterviewQuery, InterviewQueryError, PageRequest, PageResult};
pub use interview_repository::{InterviewRepository, InterviewRepositoryError, NewInterview};
pub use jobs_directory::{DirectoryError, JobsDirectory};
pub use meeting_provisioner::{MeetingDetails, MeetingProvisionError, MeetingProvisioner};
pub use user_directory::UserDirectory;
