//! 作业查询行与行整形
//!
//! 已提交作业的联查结果每张图片一行；`group_submission_rows` 按
//! `submitted_id` 合并成一条记录，图片按存储返回顺序收进 `images`。

use sea_orm::FromQueryResult;

use super::responses::{PendingHomeworkItem, SubmittedHomework};

/// 待完成作业联查行：homework_pending × subject × teacher（反连接排除已提交）
#[derive(Debug, Clone, FromQueryResult)]
pub struct PendingHomeworkRow {
    pub homeworkp_id: i64,
    pub subject_id: String,
    pub standred: String,
    pub division: Option<String>,
    pub date_of_given: Option<chrono::NaiveDate>,
    pub description: Option<String>,
    pub image: Option<Vec<u8>>,
    pub teacher_name: String,
    pub date_of_creation: Option<chrono::NaiveDateTime>,
}

impl PendingHomeworkRow {
    pub fn into_item(self) -> PendingHomeworkItem {
        PendingHomeworkItem {
            homeworkp_id: self.homeworkp_id,
            subject_id: self.subject_id,
            standred: self.standred,
            division: self.division,
            date_of_given: self.date_of_given.map(|d| d.to_string()),
            description: self.description,
            image: crate::utils::to_base64(self.image),
            teacher_name: self.teacher_name,
            date_of_creation: self.date_of_creation.map(|d| d.to_string()),
        }
    }
}

/// 已提交作业联查行：homework_submitted × homework_pending × subject，
/// 左联 image_submit，每张图片一行，无图片时 image 为 NULL
#[derive(Debug, Clone, FromQueryResult)]
pub struct SubmittedHomeworkRow {
    pub submitted_id: i64,
    pub homeworkpending_id: i64,
    pub subject_id: String,
    pub date_of_given_submitted: Option<chrono::NaiveDateTime>,
    pub description: Option<String>,
    pub approval_status: i32,
    pub image: Option<Vec<u8>>,
}

/// 按 submitted_id 合并图片行，保持存储返回的先后顺序。
/// 没有任何图片的提交得到空的 images 列表，而不是缺字段。
pub fn group_submission_rows(rows: Vec<SubmittedHomeworkRow>) -> Vec<SubmittedHomework> {
    let mut grouped: Vec<SubmittedHomework> = Vec::new();

    for row in rows {
        let image = crate::utils::to_base64(row.image);

        match grouped
            .iter_mut()
            .find(|s| s.submitted_id == row.submitted_id)
        {
            Some(existing) => {
                if let Some(img) = image {
                    existing.images.push(img);
                }
            }
            None => {
                let mut submission = SubmittedHomework {
                    submitted_id: row.submitted_id,
                    homeworkpending_id: row.homeworkpending_id,
                    subject_id: row.subject_id,
                    date_of_given_submitted: row.date_of_given_submitted.map(|d| d.to_string()),
                    description: row.description,
                    approval_status: row.approval_status,
                    images: Vec::new(),
                };
                if let Some(img) = image {
                    submission.images.push(img);
                }
                grouped.push(submission);
            }
        }
    }

    grouped
}
