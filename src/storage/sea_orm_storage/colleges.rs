//! 学校目录存储操作

use super::SeaOrmStorage;
use crate::errors::{EduPortalError, Result};
use crate::models::auth::entities::CollegeRow;
use sea_orm::{FromQueryResult, Statement};

impl SeaOrmStorage {
    /// 按校验码查学校
    pub async fn find_college_by_code_impl(
        &self,
        college_code: &str,
    ) -> Result<Option<CollegeRow>> {
        let sql = format!(
            "SELECT CollegeID AS college_id, college_code, name FROM {} WHERE college_code = ?",
            self.tables.college
        );
        let stmt = Statement::from_sql_and_values(
            self.db.get_database_backend(),
            sql,
            [college_code.into()],
        );

        CollegeRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| EduPortalError::database_operation(format!("College lookup failed: {e}")))
    }
}
