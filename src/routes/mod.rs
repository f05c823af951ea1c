pub mod auth;

pub mod dashboard;

pub mod homeworks;

pub mod subjects;

pub use auth::configure_auth_routes;
pub use dashboard::configure_dashboard_routes;
pub use homeworks::configure_homeworks_routes;
pub use subjects::configure_subjects_routes;
