use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::ErrorResponse;
use crate::models::subjects::SubjectListQuery;
use crate::utils::validate::required_field;

use super::SubjectService;

pub async fn list_subjects(
    service: &SubjectService,
    query: SubjectListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(standard) = required_field(&query.standard) else {
        return Ok(HttpResponse::BadRequest()
            .json(ErrorResponse::new("standard is a required parameter")));
    };

    let storage = service.get_storage(request);
    match storage.list_subjects_by_standard(standard).await {
        Ok(rows) => {
            let items: Vec<_> = rows.into_iter().map(|row| row.into_item()).collect();
            Ok(HttpResponse::Ok().json(items))
        }
        Err(e) => {
            tracing::error!("Subject query failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::internal()))
        }
    }
}
