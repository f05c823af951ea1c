//! 科目查询行

use sea_orm::FromQueryResult;

#[derive(Debug, Clone, FromQueryResult)]
pub struct SubjectRow {
    pub subject_code: String,
    pub subject_name: String,
    pub stand: String,
    pub division: Option<String>,
    pub subject_code_prefixed: String,
    pub image: Option<Vec<u8>>,
}

impl SubjectRow {
    pub fn into_item(self) -> super::responses::SubjectItem {
        super::responses::SubjectItem {
            subject_code: self.subject_code,
            subject_name: self.subject_name,
            stand: self.stand,
            division: self.division,
            subject_code_prefixed: self.subject_code_prefixed,
            image: crate::utils::to_base64(self.image),
        }
    }
}
