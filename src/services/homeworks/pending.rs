use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::ErrorResponse;
use crate::models::homeworks::PendingHomeworkQuery;
use crate::utils::validate::required_field;

use super::HomeworkService;

pub async fn list_pending(
    service: &HomeworkService,
    query: PendingHomeworkQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (Some(subject_name), Some(standard), Some(division)) = (
        required_field(&query.subject_name),
        required_field(&query.standard),
        required_field(&query.division),
    ) else {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(
            "subjectName, standard and division are required parameters",
        )));
    };

    let storage = service.get_storage(request);
    match storage
        .list_pending_homework(subject_name, standard, division)
        .await
    {
        Ok(rows) => {
            let items: Vec<_> = rows.into_iter().map(|row| row.into_item()).collect();
            Ok(HttpResponse::Ok().json(items))
        }
        Err(e) => {
            tracing::error!("Pending homework query failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::internal()))
        }
    }
}
