pub mod auth;
pub mod common;
pub mod dashboard;
pub mod homeworks;
pub mod subjects;

pub use common::response::{ErrorResponse, MessageResponse, SuccessResponse};

/// 应用启动时间，用于统计预处理耗时
#[derive(Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
