use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homeworks.ts")]
pub struct PendingHomeworkItem {
    pub homeworkp_id: i64,
    pub subject_id: String,
    pub standred: String,
    pub division: Option<String>,
    pub date_of_given: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub teacher_name: String,
    pub date_of_creation: Option<String>,
}

/// 一条已批改/待批改的提交记录；images 合并自 image_submit 的多行
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homeworks.ts")]
pub struct SubmittedHomework {
    pub submitted_id: i64,
    pub homeworkpending_id: i64,
    pub subject_id: String,
    pub date_of_given_submitted: Option<String>,
    pub description: Option<String>,
    // 0 = 未批改，1 = 通过，2 = 退回；只由批改后台写入
    pub approval_status: i32,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homeworks.ts")]
pub struct EvolutionSummary {
    pub student_name: String,
    #[serde(rename = "totalHomework")]
    pub total_homework: i64,
    #[serde(rename = "approvedHomework")]
    pub approved_homework: i64,
    #[serde(rename = "pendingHomework")]
    pub pending_homework: i64,
}
