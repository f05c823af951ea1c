use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::auth::{CheckCollegeRequest, LoginRequest};
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn check_college_code(
    req: HttpRequest,
    body: web::Json<CheckCollegeRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .check_college_code(body.into_inner(), &req)
        .await
}

pub async fn login(req: HttpRequest, body: web::Json<LoginRequest>) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login(body.into_inner(), &req).await
}

// 配置路由（路径是既有移动端写死的，不加版本前缀）
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/check", web::post().to(check_college_code))
        .route("/login", web::post().to(login));
}
