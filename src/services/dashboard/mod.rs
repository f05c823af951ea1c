pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct DashboardService {
    storage: Option<Arc<dyn Storage>>,
}

impl DashboardService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    #[cfg(test)]
    pub fn with_storage(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage: Some(storage),
        }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 列出仪表盘内容
    pub async fn list_dashboard(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_dashboard(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dashboard::entities::DashboardRow;
    use crate::storage::mock::MockStorage;
    use actix_web::body::to_bytes;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_dashboard_returns_bare_array() {
        let mock = Arc::new(MockStorage {
            dashboard_rows: vec![
                DashboardRow {
                    dashboard_id: 1,
                    dashboard_title: Some("Annual Day".into()),
                    dashboard_image: Some(b"img".to_vec()),
                },
                DashboardRow {
                    dashboard_id: 2,
                    dashboard_title: None,
                    dashboard_image: None,
                },
            ],
            ..Default::default()
        });
        let service = DashboardService::with_storage(mock);
        let request = TestRequest::default().to_http_request();

        let resp = service.list_dashboard(&request).await.unwrap();
        assert_eq!(resp.status(), 200);

        let bytes = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"id": 1, "title": "Annual Day", "image": "data:image/jpeg;base64,aW1n"},
                {"id": 2, "title": null, "image": null},
            ])
        );
    }

    #[actix_web::test]
    async fn test_dashboard_storage_error_is_500() {
        let mock = Arc::new(MockStorage {
            fail: true,
            ..Default::default()
        });
        let service = DashboardService::with_storage(mock);
        let request = TestRequest::default().to_http_request();

        let resp = service.list_dashboard(&request).await.unwrap();
        assert_eq!(resp.status(), 500);
    }
}
