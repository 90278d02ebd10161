pub mod interview_use_cases;
pub mod ports;
pub mod services;

pub use interview_use_cases::InterviewUseCases;
