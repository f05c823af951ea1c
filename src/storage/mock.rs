//! 测试用存储替身
//!
//! 预置查询结果并统计访问次数，供服务层测试验证
//! “缺参直接 400、一次存储都不碰”这类性质。

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::{EduPortalError, Result};
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

#[derive(Default)]
pub struct MockStorage {
    // 每次存储访问 +1
    pub calls: AtomicUsize,
    pub college: Option<CollegeRow>,
    pub student: Option<StudentLoginRow>,
    pub student_name: Option<String>,
    pub dashboard_rows: Vec<DashboardRow>,
    pub subjects: Vec<SubjectRow>,
    pub pending: Vec<PendingHomeworkRow>,
    pub submitted: Vec<SubmittedHomeworkRow>,
    pub assigned_count: i64,
    pub approved_count: i64,
    pub unsubmitted_count: i64,
    pub submissions: Mutex<Vec<NewSubmission>>,
    // true 时所有操作返回存储错误
    pub fail: bool,
}

impl MockStorage {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(EduPortalError::database_operation("mock storage failure"))
        } else {
            Ok(())
        }
    }
}

#[async_trait::async_trait]
impl Storage for MockStorage {
    async fn find_college_by_code(&self, college_code: &str) -> Result<Option<CollegeRow>> {
        self.record_call()?;
        Ok(self
            .college
            .clone()
            .filter(|c| c.college_code == college_code))
    }

    async fn find_student_for_login(
        &self,
        student_id: &str,
        college_code: &str,
    ) -> Result<Option<StudentLoginRow>> {
        self.record_call()?;
        Ok(self
            .student
            .clone()
            .filter(|s| s.studentid == student_id && s.college_code == college_code))
    }

    async fn get_student_name(&self, _student_id: &str) -> Result<Option<String>> {
        self.record_call()?;
        Ok(self.student_name.clone())
    }

    async fn list_dashboard_rows(&self) -> Result<Vec<DashboardRow>> {
        self.record_call()?;
        Ok(self.dashboard_rows.clone())
    }

    async fn list_subjects_by_standard(&self, _standard: &str) -> Result<Vec<SubjectRow>> {
        self.record_call()?;
        Ok(self.subjects.clone())
    }

    async fn list_pending_homework(
        &self,
        _subject_name: &str,
        _standard: &str,
        _division: &str,
    ) -> Result<Vec<PendingHomeworkRow>> {
        self.record_call()?;
        Ok(self.pending.clone())
    }

    async fn list_submitted_homework(
        &self,
        _student_id: &str,
        _subject_name: &str,
    ) -> Result<Vec<SubmittedHomeworkRow>> {
        self.record_call()?;
        Ok(self.submitted.clone())
    }

    async fn count_assigned_homework(
        &self,
        _subject_name: &str,
        _standard: &str,
        _division: &str,
    ) -> Result<i64> {
        self.record_call()?;
        Ok(self.assigned_count)
    }

    async fn count_approved_homework(
        &self,
        _student_id: &str,
        _subject_name: &str,
    ) -> Result<i64> {
        self.record_call()?;
        Ok(self.approved_count)
    }

    async fn count_unsubmitted_homework(
        &self,
        _subject_name: &str,
        _standard: &str,
        _division: &str,
        _student_id: &str,
    ) -> Result<i64> {
        self.record_call()?;
        Ok(self.unsubmitted_count)
    }

    async fn create_submission(&self, submission: NewSubmission) -> Result<i64> {
        self.record_call()?;
        self.submissions
            .lock()
            .expect("mock submissions lock poisoned")
            .push(submission);
        Ok(42)
    }
}
