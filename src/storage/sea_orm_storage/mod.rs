//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 MySQL 和 SQLite。
//! 两个 schema 的名称来自配置，启动时校验一次后拼成常量表引用；
//! 所有用户输入都通过 `?` 占位符绑定，语句文本里绝不出现请求参数。

mod colleges;
mod dashboard;
mod homeworks;
mod students;
mod subjects;

use crate::config::AppConfig;
use crate::errors::{EduPortalError, Result};
use crate::utils::validate_schema_name;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// 启动时由两个 schema 名渲染出的表引用
#[derive(Debug, Clone)]
pub(crate) struct TableRefs {
    pub college: String,
    pub dashboard: String,
    pub student: String,
    pub subject: String,
    pub teacher: String,
    pub homework_pending: String,
    pub homework_submitted: String,
    pub image_submit: String,
}

impl TableRefs {
    fn new(directory_schema: &str, college_schema: &str) -> Self {
        let qualify = |schema: &str, table: &str| format!("`{schema}`.`{table}`");
        Self {
            college: qualify(directory_schema, "College"),
            dashboard: qualify(directory_schema, "dashboard"),
            student: qualify(college_schema, "Student"),
            subject: qualify(college_schema, "subject"),
            teacher: qualify(college_schema, "teacher"),
            homework_pending: qualify(college_schema, "homework_pending"),
            homework_submitted: qualify(college_schema, "homework_submitted"),
            image_submit: qualify(college_schema, "image_submit"),
        }
    }
}

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
    pub(crate) tables: TableRefs,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();

        validate_schema_name(&config.database.directory_schema).map_err(|e| {
            EduPortalError::database_config(format!(
                "Invalid directory schema '{}': {e}",
                config.database.directory_schema
            ))
        })?;
        validate_schema_name(&config.database.college_schema).map_err(|e| {
            EduPortalError::database_config(format!(
                "Invalid college schema '{}': {e}",
                config.database.college_schema
            ))
        })?;

        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        let tables = TableRefs::new(
            &config.database.directory_schema,
            &config.database.college_schema,
        );

        info!("SeaORM storage initialized, database: {}", db_url);

        Ok(Self { db, tables })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| EduPortalError::database_config(format!("SQLite URL parse error: {e}")))?
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| {
                EduPortalError::database_connection(format!("SQLite connection failed: {e}"))
            })?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// MySQL 连接
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt).await.map_err(|e| {
            EduPortalError::database_connection(format!("Could not connect to database: {e}"))
        })
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    ///
    /// 语句统一使用 `?` 占位符，因此只接受 MySQL 与 SQLite。
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") || url.starts_with("mysql://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else {
            Err(EduPortalError::database_config(format!(
                "Cannot infer database type from URL: {url}. Supported: mysql://, sqlite://, or .db/.sqlite file paths"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    auth::entities::{CollegeRow, StudentLoginRow},
    dashboard::entities::DashboardRow,
    homeworks::{
        entities::{PendingHomeworkRow, SubmittedHomeworkRow},
        requests::NewSubmission,
    },
    subjects::entities::SubjectRow,
};
use crate::storage::Storage;

#[async_trait::async_trait]
impl Storage for SeaOrmStorage {
    async fn find_college_by_code(&self, college_code: &str) -> Result<Option<CollegeRow>> {
        self.find_college_by_code_impl(college_code).await
    }

    async fn find_student_for_login(
        &self,
        student_id: &str,
        college_code: &str,
    ) -> Result<Option<StudentLoginRow>> {
        self.find_student_for_login_impl(student_id, college_code)
            .await
    }

    async fn get_student_name(&self, student_id: &str) -> Result<Option<String>> {
        self.get_student_name_impl(student_id).await
    }

    async fn list_dashboard_rows(&self) -> Result<Vec<DashboardRow>> {
        self.list_dashboard_rows_impl().await
    }

    async fn list_subjects_by_standard(&self, standard: &str) -> Result<Vec<SubjectRow>> {
        self.list_subjects_by_standard_impl(standard).await
    }

    async fn list_pending_homework(
        &self,
        subject_name: &str,
        standard: &str,
        division: &str,
    ) -> Result<Vec<PendingHomeworkRow>> {
        self.list_pending_homework_impl(subject_name, standard, division)
            .await
    }

    async fn list_submitted_homework(
        &self,
        student_id: &str,
        subject_name: &str,
    ) -> Result<Vec<SubmittedHomeworkRow>> {
        self.list_submitted_homework_impl(student_id, subject_name)
            .await
    }

    async fn count_assigned_homework(
        &self,
        subject_name: &str,
        standard: &str,
        division: &str,
    ) -> Result<i64> {
        self.count_assigned_homework_impl(subject_name, standard, division)
            .await
    }

    async fn count_approved_homework(&self, student_id: &str, subject_name: &str) -> Result<i64> {
        self.count_approved_homework_impl(student_id, subject_name)
            .await
    }

    async fn count_unsubmitted_homework(
        &self,
        subject_name: &str,
        standard: &str,
        division: &str,
        student_id: &str,
    ) -> Result<i64> {
        self.count_unsubmitted_homework_impl(subject_name, standard, division, student_id)
            .await
    }

    async fn create_submission(&self, submission: NewSubmission) -> Result<i64> {
        self.create_submission_impl(submission).await
    }
}
