use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::homeworks::{
    EvolutionSummaryQuery, PendingHomeworkQuery, SubmitHomeworkRequest, SubmittedHomeworkQuery,
};
use crate::services::HomeworkService;

// 懒加载的全局 HomeworkService 实例
static HOMEWORK_SERVICE: Lazy<HomeworkService> = Lazy::new(HomeworkService::new_lazy);

// 待完成作业
pub async fn list_pending(
    req: HttpRequest,
    query: web::Query<PendingHomeworkQuery>,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE.list_pending(query.into_inner(), &req).await
}

// 已提交作业
pub async fn list_submitted(
    req: HttpRequest,
    query: web::Query<SubmittedHomeworkQuery>,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE
        .list_submitted(query.into_inner(), &req)
        .await
}

// 学习进度汇总
pub async fn evolution_summary(
    req: HttpRequest,
    query: web::Query<EvolutionSummaryQuery>,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE
        .evolution_summary(query.into_inner(), &req)
        .await
}

// 提交作业
pub async fn submit_homework(
    req: HttpRequest,
    body: web::Json<SubmitHomeworkRequest>,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE
        .submit_homework(body.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_homeworks_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/homework_pending", web::get().to(list_pending))
        .route("/homework_submitted", web::get().to(list_submitted))
        .route("/evolution-homework", web::get().to(evolution_summary))
        .route("/submit_homework", web::post().to(submit_homework));
}
