use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subjects.ts")]
pub struct SubjectItem {
    pub subject_code: String,
    pub subject_name: String,
    pub stand: String,
    pub division: Option<String>,
    // 联查作业表时使用的带前缀主键
    pub subject_code_prefixed: String,
    pub image: Option<String>,
}
