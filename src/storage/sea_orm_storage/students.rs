//! 学生存储操作

use super::SeaOrmStorage;
use crate::errors::{EduPortalError, Result};
use crate::models::auth::entities::StudentLoginRow;
use sea_orm::{ConnectionTrait, FromQueryResult, Statement};

impl SeaOrmStorage {
    /// 登录联查：学生 × 学校目录
    ///
    /// 凭据核对不进 WHERE 子句——password 列是 Argon2 哈希，由服务层验证。
    pub async fn find_student_for_login_impl(
        &self,
        student_id: &str,
        college_code: &str,
    ) -> Result<Option<StudentLoginRow>> {
        let sql = format!(
            "SELECT \
                s.studentid, s.Name AS name, s.std, s.roll_no, s.division, \
                s.stud_dob, s.mobile, s.password, s.profile_img, c.college_code \
             FROM {student} s \
             JOIN {college} c ON s.college_id = c.CollegeID \
             WHERE s.studentid = ? AND c.college_code = ?",
            student = self.tables.student,
            college = self.tables.college,
        );
        let stmt = Statement::from_sql_and_values(
            self.db.get_database_backend(),
            sql,
            [student_id.into(), college_code.into()],
        );

        StudentLoginRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| EduPortalError::database_operation(format!("Login query failed: {e}")))
    }

    /// 查学生姓名
    pub async fn get_student_name_impl(&self, student_id: &str) -> Result<Option<String>> {
        let sql = format!(
            "SELECT Name AS name FROM {} WHERE studentid = ?",
            self.tables.student
        );
        let stmt = Statement::from_sql_and_values(
            self.db.get_database_backend(),
            sql,
            [student_id.into()],
        );

        let row = self
            .db
            .query_one_raw(stmt)
            .await
            .map_err(|e| EduPortalError::database_operation(format!("Name lookup failed: {e}")))?;

        match row {
            Some(row) => {
                let name: String = row.try_get("", "name").map_err(|e| {
                    EduPortalError::database_operation(format!("Name column read failed: {e}"))
                })?;
                Ok(Some(name))
            }
            None => Ok(None),
        }
    }
}
