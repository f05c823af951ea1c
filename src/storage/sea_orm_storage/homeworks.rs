//! 作业存储操作
//!
//! 唯一的多语句写路径在 `create_submission_impl`：提交主行与图片行
//! 必须同生同灭，整个关键区占用同一连接，期间不插入其他语句。

use super::SeaOrmStorage;
use crate::errors::{EduPortalError, Result};
use crate::models::homeworks::{
    entities::{PendingHomeworkRow, SubmittedHomeworkRow},
    requests::NewSubmission,
};
use sea_orm::{
    ConnectionTrait, DatabaseTransaction, FromQueryResult, Statement, TransactionTrait, Value,
};

impl SeaOrmStorage {
    /// 待完成作业：homework_pending × subject × teacher，
    /// 左联 homework_submitted 取 NULL 反连接排除已有提交的作业
    pub async fn list_pending_homework_impl(
        &self,
        subject_name: &str,
        standard: &str,
        division: &str,
    ) -> Result<Vec<PendingHomeworkRow>> {
        let sql = format!(
            "SELECT \
                hp.homeworkp_id, hp.subject_id, hp.standred, hp.Division AS division, \
                hp.date_of_given, hp.description, hp.image, t.teacher_name, \
                hp.date_of_creation \
             FROM {homework_pending} hp \
             JOIN {subject} s ON hp.subject_id = s.subject_code_prefixed \
             JOIN {teacher} t ON hp.teacher_id = t.teacher_id \
             LEFT JOIN {homework_submitted} hs ON hs.homeworkpending_id = hp.homeworkp_id \
             WHERE s.subject_name = ? AND hp.standred = ? AND hp.Division = ? \
               AND hs.submitted_id IS NULL",
            homework_pending = self.tables.homework_pending,
            subject = self.tables.subject,
            teacher = self.tables.teacher,
            homework_submitted = self.tables.homework_submitted,
        );
        let stmt = Statement::from_sql_and_values(
            self.db.get_database_backend(),
            sql,
            [subject_name.into(), standard.into(), division.into()],
        );

        PendingHomeworkRow::find_by_statement(stmt)
            .all(&self.db)
            .await
            .map_err(|e| {
                EduPortalError::database_operation(format!("Pending homework query failed: {e}"))
            })
    }

    /// 已提交作业：homework_submitted × homework_pending × subject，
    /// 左联 image_submit，每张图片一行，行序交给存储（按提交 ID 排序）
    pub async fn list_submitted_homework_impl(
        &self,
        student_id: &str,
        subject_name: &str,
    ) -> Result<Vec<SubmittedHomeworkRow>> {
        let sql = format!(
            "SELECT \
                hs.submitted_id, hs.homeworkpending_id, hs.subject_id, \
                hs.date_of_given_submitted, hs.description, hs.approval_status, \
                img.image \
             FROM {homework_submitted} hs \
             JOIN {homework_pending} hp ON hs.homeworkpending_id = hp.homeworkp_id \
             JOIN {subject} s ON hs.subject_id = s.subject_code_prefixed \
             LEFT JOIN {image_submit} img ON img.homeworksubmitted_id = hs.submitted_id \
             WHERE hs.student_id = ? AND s.subject_name = ? \
             ORDER BY hs.submitted_id",
            homework_submitted = self.tables.homework_submitted,
            homework_pending = self.tables.homework_pending,
            subject = self.tables.subject,
            image_submit = self.tables.image_submit,
        );
        let stmt = Statement::from_sql_and_values(
            self.db.get_database_backend(),
            sql,
            [student_id.into(), subject_name.into()],
        );

        SubmittedHomeworkRow::find_by_statement(stmt)
            .all(&self.db)
            .await
            .map_err(|e| {
                EduPortalError::database_operation(format!("Submitted homework query failed: {e}"))
            })
    }

    /// 科目内布置的作业总数
    pub async fn count_assigned_homework_impl(
        &self,
        subject_name: &str,
        standard: &str,
        division: &str,
    ) -> Result<i64> {
        let sql = format!(
            "SELECT COUNT(*) AS count \
             FROM {homework_pending} hp \
             JOIN {subject} s ON hp.subject_id = s.subject_code_prefixed \
             WHERE s.subject_name = ? AND hp.standred = ? AND hp.Division = ?",
            homework_pending = self.tables.homework_pending,
            subject = self.tables.subject,
        );
        self.count_query(sql, vec![subject_name.into(), standard.into(), division.into()])
            .await
    }

    /// 该学生已通过批改的提交数（approval_status = 1）
    pub async fn count_approved_homework_impl(
        &self,
        student_id: &str,
        subject_name: &str,
    ) -> Result<i64> {
        let sql = format!(
            "SELECT COUNT(*) AS count \
             FROM {homework_submitted} hs \
             JOIN {subject} s ON hs.subject_id = s.subject_code_prefixed \
             WHERE hs.student_id = ? AND s.subject_name = ? AND hs.approval_status = 1",
            homework_submitted = self.tables.homework_submitted,
            subject = self.tables.subject,
        );
        self.count_query(sql, vec![student_id.into(), subject_name.into()])
            .await
    }

    /// 该学生尚未提交的作业数：布置的作业反连接该生的提交
    pub async fn count_unsubmitted_homework_impl(
        &self,
        subject_name: &str,
        standard: &str,
        division: &str,
        student_id: &str,
    ) -> Result<i64> {
        let sql = format!(
            "SELECT COUNT(*) AS count \
             FROM {homework_pending} hp \
             JOIN {subject} s ON hp.subject_id = s.subject_code_prefixed \
             LEFT JOIN {homework_submitted} hs \
               ON hs.homeworkpending_id = hp.homeworkp_id AND hs.student_id = ? \
             WHERE s.subject_name = ? AND hp.standred = ? AND hp.Division = ? \
               AND hs.submitted_id IS NULL",
            homework_pending = self.tables.homework_pending,
            subject = self.tables.subject,
            homework_submitted = self.tables.homework_submitted,
        );
        self.count_query(
            sql,
            vec![
                student_id.into(),
                subject_name.into(),
                standard.into(),
                division.into(),
            ],
        )
        .await
    }

    async fn count_query(&self, sql: String, values: Vec<Value>) -> Result<i64> {
        let stmt = Statement::from_sql_and_values(self.db.get_database_backend(), sql, values);
        let row = self
            .db
            .query_one_raw(stmt)
            .await
            .map_err(|e| EduPortalError::database_operation(format!("Count query failed: {e}")))?
            .ok_or_else(|| EduPortalError::database_operation("Count query returned no row"))?;

        row.try_get("", "count")
            .map_err(|e| EduPortalError::database_operation(format!("Count column read failed: {e}")))
    }

    /// 提交作业
    ///
    /// 主行插入、图片批量插入、提交，全部在一个事务里；任何一步失败
    /// （约束冲突、连接丢失、图片数据损坏）都整体回滚，不留孤儿行。
    pub async fn create_submission_impl(&self, submission: NewSubmission) -> Result<i64> {
        let txn = self.db.begin().await.map_err(|e| {
            EduPortalError::transaction(format!("Failed to begin transaction: {e}"))
        })?;

        match self.insert_submission_rows(&txn, submission).await {
            Ok(submitted_id) => {
                txn.commit().await.map_err(|e| {
                    EduPortalError::transaction(format!("Failed to commit submission: {e}"))
                })?;
                Ok(submitted_id)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Submission rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }

    async fn insert_submission_rows(
        &self,
        txn: &DatabaseTransaction,
        submission: NewSubmission,
    ) -> Result<i64> {
        let backend = self.db.get_database_backend();

        // 1. 插入提交主行；approval_status 由批改后台写入，这里不触碰
        let sql = format!(
            "INSERT INTO {} \
                (homeworkpending_id, subject_id, student_id, date_of_given_submitted, description) \
             VALUES (?, ?, ?, ?, ?)",
            self.tables.homework_submitted
        );
        let result = txn
            .execute_raw(Statement::from_sql_and_values(
                backend,
                sql,
                [
                    submission.homeworkpending_id.into(),
                    submission.subject_id.into(),
                    submission.student_id.into(),
                    chrono::Utc::now().naive_utc().into(),
                    submission.description.into(),
                ],
            ))
            .await
            .map_err(|e| {
                EduPortalError::database_operation(format!("Submission insert failed: {e}"))
            })?;

        let submitted_id = result.last_insert_id() as i64;

        // 2. 图片批量插入为一条多行语句；base64 在事务内解码，
        //    任何一张损坏都会让整个提交回滚
        let mut placeholders = Vec::with_capacity(submission.images.len());
        let mut values: Vec<Value> = Vec::with_capacity(submission.images.len() * 2);
        for encoded in &submission.images {
            let blob = crate::utils::image::from_base64(encoded).map_err(|e| {
                EduPortalError::image_decode(format!("Submitted image is not valid base64: {e}"))
            })?;
            placeholders.push("(?, ?)");
            values.push(blob.into());
            values.push(submitted_id.into());
        }

        let sql = format!(
            "INSERT INTO {} (image, homeworksubmitted_id) VALUES {}",
            self.tables.image_submit,
            placeholders.join(", ")
        );
        txn.execute_raw(Statement::from_sql_and_values(backend, sql, values))
            .await
            .map_err(|e| {
                EduPortalError::database_operation(format!("Image insert failed: {e}"))
            })?;

        Ok(submitted_id)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{SeaOrmStorage, TableRefs};
    use crate::models::homeworks::requests::NewSubmission;
    use sea_orm::{ConnectionTrait, Database, Statement};

    /// 内存 SQLite 上的真库事务测试。表名不带 schema 前缀，
    /// 池限一个连接，保证建表与后续语句落在同一个连接上。
    async fn sqlite_storage() -> SeaOrmStorage {
        let mut opt = sea_orm::ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1);
        let db = Database::connect(opt).await.expect("SQLite connect failed");

        for sql in [
            "CREATE TABLE homework_submitted ( \
                submitted_id INTEGER PRIMARY KEY AUTOINCREMENT, \
                homeworkpending_id INTEGER NOT NULL, \
                subject_id TEXT NOT NULL, \
                student_id TEXT NOT NULL, \
                date_of_given_submitted TEXT, \
                description TEXT, \
                approval_status INTEGER NOT NULL DEFAULT 0)",
            "CREATE TABLE image_submit ( \
                image_id INTEGER PRIMARY KEY AUTOINCREMENT, \
                image BLOB NOT NULL, \
                homeworksubmitted_id INTEGER NOT NULL)",
        ] {
            db.execute_raw(Statement::from_string(db.get_database_backend(), sql))
                .await
                .expect("table creation failed");
        }

        let tables = TableRefs {
            college: "College".into(),
            dashboard: "dashboard".into(),
            student: "Student".into(),
            subject: "subject".into(),
            teacher: "teacher".into(),
            homework_pending: "homework_pending".into(),
            homework_submitted: "homework_submitted".into(),
            image_submit: "image_submit".into(),
        };

        SeaOrmStorage { db, tables }
    }

    fn submission(images: Vec<&str>) -> NewSubmission {
        NewSubmission {
            homeworkpending_id: 7,
            subject_id: "MTH10".into(),
            student_id: "S1001".into(),
            description: "chapter 4 exercises".into(),
            images: images.into_iter().map(String::from).collect(),
        }
    }

    async fn table_count(storage: &SeaOrmStorage, table: &str) -> i64 {
        storage
            .count_query(format!("SELECT COUNT(*) AS count FROM {table}"), vec![])
            .await
            .expect("count failed")
    }

    #[tokio::test]
    async fn test_submission_commits_main_row_and_images() {
        let storage = sqlite_storage().await;

        let id = storage
            .create_submission_impl(submission(vec!["YWJj", "ZGVm"]))
            .await
            .expect("submission failed");
        assert!(id > 0);
        assert_eq!(table_count(&storage, "homework_submitted").await, 1);
        assert_eq!(table_count(&storage, "image_submit").await, 2);
    }

    #[tokio::test]
    async fn test_broken_image_rolls_back_whole_submission() {
        let storage = sqlite_storage().await;

        let result = storage
            .create_submission_impl(submission(vec!["YWJj", "not//valid!!"]))
            .await;
        assert!(result.is_err());
        // 主行与图片行都不能留下
        assert_eq!(table_count(&storage, "homework_submitted").await, 0);
        assert_eq!(table_count(&storage, "image_submit").await, 0);
    }
}
