pub mod auth;
pub mod dashboard;
pub mod homeworks;
pub mod subjects;

pub use auth::AuthService;
pub use dashboard::DashboardService;
pub use homeworks::HomeworkService;
pub use subjects::SubjectService;
