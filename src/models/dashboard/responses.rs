use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct DashboardItem {
    pub id: i64,
    pub title: Option<String>,
    pub image: Option<String>,
}
