use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::homeworks::{NewSubmission, SubmitHomeworkRequest};
use crate::models::{ErrorResponse, SuccessResponse};
use crate::utils::validate::required_field;

use super::HomeworkService;

pub async fn submit_homework(
    service: &HomeworkService,
    submit_request: SubmitHomeworkRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 1. 全部字段必填
    let (Some(homeworkpending_id), Some(subject_id), Some(student_id), Some(description)) = (
        submit_request.homeworkpending_id,
        required_field(&submit_request.subject_id),
        required_field(&submit_request.student_id),
        required_field(&submit_request.description),
    ) else {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(
            "homeworkpending_id, subject_id, student_id, description and images are required parameters",
        )));
    };

    // 2. 至少一张图片
    let images = match submit_request.images {
        Some(images) if !images.is_empty() => images,
        _ => {
            return Ok(HttpResponse::BadRequest()
                .json(ErrorResponse::new("images must be a non-empty list")));
        }
    };

    let submission = NewSubmission {
        homeworkpending_id,
        subject_id: subject_id.to_string(),
        student_id: student_id.to_string(),
        description: description.to_string(),
        images,
    };

    // 3. 事务写入；失败时存储层已回滚，细节只进日志
    let storage = service.get_storage(request);
    match storage.create_submission(submission).await {
        Ok(submitted_id) => {
            tracing::info!("Homework submission {} recorded", submitted_id);
            Ok(HttpResponse::Ok().json(SuccessResponse::new()))
        }
        Err(e) => {
            tracing::error!("Homework submission failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::internal()))
        }
    }
}
