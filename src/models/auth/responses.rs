use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 登录成功返回的学生档案
///
/// 字段名保持既有前端依赖的列名（Name、std 等来自旧库的命名）。
/// 凭据（密码哈希）不回传——旧接口把存储的密码原样带回，这里不再保留。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct StudentData {
    pub studentid: String,
    #[serde(rename = "Name")]
    pub name: String,
    pub std: String,
    pub roll_no: Option<String>,
    pub division: Option<String>,
    pub stud_dob: Option<String>,
    pub mobile: Option<String>,
    pub profile_img: Option<String>,
    pub college_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub data: StudentData,
}

impl LoginResponse {
    pub fn new(data: StudentData) -> Self {
        Self {
            success: true,
            message: "Successfully logged in".to_string(),
            data,
        }
    }
}
