//! 科目存储操作

use super::SeaOrmStorage;
use crate::errors::{EduPortalError, Result};
use crate::models::subjects::entities::SubjectRow;
use sea_orm::{FromQueryResult, Statement};

impl SeaOrmStorage {
    /// 按年级列科目
    pub async fn list_subjects_by_standard_impl(&self, standard: &str) -> Result<Vec<SubjectRow>> {
        let sql = format!(
            "SELECT subject_code, subject_name, stand, division, subject_code_prefixed, image \
             FROM {} WHERE stand = ?",
            self.tables.subject
        );
        let stmt = Statement::from_sql_and_values(
            self.db.get_database_backend(),
            sql,
            [standard.into()],
        );

        SubjectRow::find_by_statement(stmt)
            .all(&self.db)
            .await
            .map_err(|e| EduPortalError::database_operation(format!("Subject query failed: {e}")))
    }
}
