use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::subjects::SubjectListQuery;
use crate::services::SubjectService;

// 懒加载的全局 SubjectService 实例
static SUBJECT_SERVICE: Lazy<SubjectService> = Lazy::new(SubjectService::new_lazy);

pub async fn list_subjects(
    req: HttpRequest,
    query: web::Query<SubjectListQuery>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.list_subjects(query.into_inner(), &req).await
}

// 配置路由
pub fn configure_subjects_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/subjects", web::get().to(list_subjects));
}
