use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::ErrorResponse;
use crate::models::homeworks::{SubmittedHomeworkQuery, entities::group_submission_rows};
use crate::utils::validate::required_field;

use super::HomeworkService;

pub async fn list_submitted(
    service: &HomeworkService,
    query: SubmittedHomeworkQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (Some(student_id), Some(subject_name)) = (
        required_field(&query.student_id),
        required_field(&query.subject_name),
    ) else {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(
            "studentId and subjectName are required parameters",
        )));
    };

    let storage = service.get_storage(request);
    match storage
        .list_submitted_homework(student_id, subject_name)
        .await
    {
        Ok(rows) if rows.is_empty() => Ok(HttpResponse::NotFound()
            .json(ErrorResponse::new("No submitted homework found"))),
        Ok(rows) => Ok(HttpResponse::Ok().json(group_submission_rows(rows))),
        Err(e) => {
            tracing::error!("Submitted homework query failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::internal()))
        }
    }
}
