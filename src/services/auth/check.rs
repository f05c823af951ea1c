use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::auth::CheckCollegeRequest;
use crate::models::{ErrorResponse, MessageResponse};
use crate::utils::validate::required_field;

use super::AuthService;

pub async fn handle_check(
    service: &AuthService,
    check_request: CheckCollegeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 1. 校验必填字段，不合格就不碰存储
    let Some(college_code) = required_field(&check_request.college_code) else {
        return Ok(HttpResponse::BadRequest()
            .json(ErrorResponse::new("college_code is a required parameter")));
    };

    // 2. 按唯一键查目录
    let storage = service.get_storage(request);
    match storage.find_college_by_code(college_code).await {
        Ok(Some(_)) => {
            Ok(HttpResponse::Ok().json(MessageResponse::new("College code found")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ErrorResponse::new("College code not found"))),
        Err(e) => {
            tracing::error!("College code check failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::internal()))
        }
    }
}
