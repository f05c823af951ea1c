pub mod entities;
pub mod responses;

pub use responses::DashboardItem;
