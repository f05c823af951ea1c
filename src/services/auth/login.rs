use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::ErrorResponse;
use crate::models::auth::{LoginRequest, responses::LoginResponse};
use crate::utils::password::verify_password;
use crate::utils::validate::required_field;

use super::AuthService;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 1. 三个字段都必填
    let (Some(student_id), Some(college_code), Some(password)) = (
        required_field(&login_request.student_id),
        required_field(&login_request.college_code),
        required_field(&login_request.password),
    ) else {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(
            "studentId, collegeCode, and password are required parameters",
        )));
    };

    // 2. 联查学生与学校目录
    let storage = service.get_storage(request);
    match storage.find_student_for_login(student_id, college_code).await {
        Ok(Some(student)) => {
            // 3. 验证密码哈希。旧接口在 SQL 里比对明文密码，查不到行即 404；
            //    这里验证失败同样回 404，对外契约不变
            if !verify_password(password, &student.password) {
                return Ok(HttpResponse::NotFound()
                    .json(ErrorResponse::new("Student not found or invalid credentials")));
            }

            tracing::info!("Student {} logged in successfully", student.studentid);
            Ok(HttpResponse::Ok().json(LoginResponse::new(student.into_student_data())))
        }
        Ok(None) => Ok(HttpResponse::NotFound()
            .json(ErrorResponse::new("Student not found or invalid credentials"))),
        Err(e) => {
            tracing::error!("Login query failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::internal()))
        }
    }
}
