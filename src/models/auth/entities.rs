//! 认证相关查询行
//!
//! 这些结构体直接承接 SQL 查询结果（列名在语句里统一别名为 snake_case），
//! 再转换为 responses 中的业务形状。

use sea_orm::FromQueryResult;

/// College 目录行
#[derive(Debug, Clone, FromQueryResult)]
pub struct CollegeRow {
    pub college_id: i64,
    pub college_code: String,
    pub name: String,
}

/// 登录联查行：Student × College
///
/// `password` 列是 Argon2 哈希，只参与验证，不进响应。
#[derive(Debug, Clone, FromQueryResult)]
pub struct StudentLoginRow {
    pub studentid: String,
    pub name: String,
    pub std: String,
    pub roll_no: Option<String>,
    pub division: Option<String>,
    pub stud_dob: Option<chrono::NaiveDate>,
    pub mobile: Option<String>,
    pub password: String,
    pub profile_img: Option<Vec<u8>>,
    pub college_code: String,
}

impl StudentLoginRow {
    pub fn into_student_data(self) -> super::responses::StudentData {
        super::responses::StudentData {
            studentid: self.studentid,
            name: self.name,
            std: self.std,
            roll_no: self.roll_no,
            division: self.division,
            stud_dob: self.stud_dob.map(|d| d.to_string()),
            mobile: self.mobile,
            profile_img: crate::utils::to_base64(self.profile_img),
            college_code: self.college_code,
        }
    }
}
