use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::ErrorResponse;

use super::DashboardService;

pub async fn list_dashboard(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_dashboard_rows().await {
        Ok(rows) => {
            let items: Vec<_> = rows.into_iter().map(|row| row.into_item()).collect();
            Ok(HttpResponse::Ok().json(items))
        }
        Err(e) => {
            tracing::error!("Dashboard query failed: {}", e);
            // 既有前端匹配这个大小写
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Internal Server Error")))
        }
    }
}
