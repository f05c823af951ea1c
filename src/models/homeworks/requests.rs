use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homeworks.ts")]
pub struct PendingHomeworkQuery {
    #[serde(rename = "subjectName")]
    pub subject_name: Option<String>,
    pub standard: Option<String>,
    pub division: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homeworks.ts")]
pub struct SubmittedHomeworkQuery {
    #[serde(rename = "studentId")]
    pub student_id: Option<String>,
    #[serde(rename = "subjectName")]
    pub subject_name: Option<String>,
}

/// 学习进度汇总查询
///
/// `standred` 是旧库列名的拼写，查询串沿用以兼容现有前端。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homeworks.ts")]
pub struct EvolutionSummaryQuery {
    pub subject_name: Option<String>,
    pub standred: Option<String>,
    pub division: Option<String>,
    pub student_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homeworks.ts")]
pub struct SubmitHomeworkRequest {
    pub homeworkpending_id: Option<i64>,
    pub subject_id: Option<String>,
    pub student_id: Option<String>,
    pub description: Option<String>,
    // base64 编码的图片，至少一张
    pub images: Option<Vec<String>>,
}

/// 校验通过后的提交，交给存储层在一个事务里落库
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub homeworkpending_id: i64,
    pub subject_id: String,
    pub student_id: String,
    pub description: String,
    pub images: Vec<String>,
}
