use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::DashboardService;

// 懒加载的全局 DashboardService 实例
static DASHBOARD_SERVICE: Lazy<DashboardService> = Lazy::new(DashboardService::new_lazy);

pub async fn list_dashboard(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.list_dashboard(&req).await
}

// 配置路由
pub fn configure_dashboard_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/dashboard", web::get().to(list_dashboard));
}
