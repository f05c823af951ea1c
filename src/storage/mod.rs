use std::sync::Arc;

use crate::errors::Result;
use crate::models::{
    auth::entities::{CollegeRow, StudentLoginRow},
    dashboard::entities::DashboardRow,
    homeworks::{
        entities::{PendingHomeworkRow, SubmittedHomeworkRow},
        requests::NewSubmission,
    },
    subjects::entities::SubjectRow,
};

pub mod sea_orm_storage;

#[cfg(test)]
pub mod mock;

/// 存储层接口
///
/// 每个方法对应一次逻辑操作：借出一个连接、执行绑定参数的语句、归还连接。
/// 只有 `create_submission` 在一个事务里占用同一连接执行多条语句。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学校目录
    // 按校验码查学校
    async fn find_college_by_code(&self, college_code: &str) -> Result<Option<CollegeRow>>;

    /// 学生
    // 登录联查：学生 × 学校目录（密码哈希随行返回，由调用方验证）
    async fn find_student_for_login(
        &self,
        student_id: &str,
        college_code: &str,
    ) -> Result<Option<StudentLoginRow>>;
    // 查学生姓名
    async fn get_student_name(&self, student_id: &str) -> Result<Option<String>>;

    /// 仪表盘
    // 列出全部仪表盘条目
    async fn list_dashboard_rows(&self) -> Result<Vec<DashboardRow>>;

    /// 科目
    // 按年级列科目
    async fn list_subjects_by_standard(&self, standard: &str) -> Result<Vec<SubjectRow>>;

    /// 作业
    // 待完成作业：三表联查 + 反连接排除已有提交的条目
    async fn list_pending_homework(
        &self,
        subject_name: &str,
        standard: &str,
        division: &str,
    ) -> Result<Vec<PendingHomeworkRow>>;
    // 已提交作业：联查图片表，每张图片一行
    async fn list_submitted_homework(
        &self,
        student_id: &str,
        subject_name: &str,
    ) -> Result<Vec<SubmittedHomeworkRow>>;
    // 科目内布置的作业总数
    async fn count_assigned_homework(
        &self,
        subject_name: &str,
        standard: &str,
        division: &str,
    ) -> Result<i64>;
    // 该学生已通过批改的提交数
    async fn count_approved_homework(&self, student_id: &str, subject_name: &str) -> Result<i64>;
    // 该学生尚未提交的作业数
    async fn count_unsubmitted_homework(
        &self,
        subject_name: &str,
        standard: &str,
        division: &str,
        student_id: &str,
    ) -> Result<i64>;
    // 提交作业：主行与图片行在一个事务里写入，返回新提交 ID
    async fn create_submission(&self, submission: NewSubmission) -> Result<i64>;
}

/// 创建存储后端
pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
