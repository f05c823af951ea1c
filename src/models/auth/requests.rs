use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 必填字段一律用 Option 接收：缺失与空白都要在访问存储之前以 400 拒绝。

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct CheckCollegeRequest {
    pub college_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginRequest {
    #[serde(rename = "studentId")]
    pub student_id: Option<String>,
    #[serde(rename = "collegeCode")]
    pub college_code: Option<String>,
    pub password: Option<String>,
}
