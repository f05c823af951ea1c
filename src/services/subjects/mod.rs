pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::subjects::SubjectListQuery;
use crate::storage::Storage;

pub struct SubjectService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubjectService {
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

    // 按年级列科目
    pub async fn list_subjects(
        &self,
        query: SubjectListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_subjects(self, query, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::subjects::entities::SubjectRow;
    use crate::storage::mock::MockStorage;
    use actix_web::body::to_bytes;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_missing_standard_is_400_before_storage() {
        let mock = Arc::new(MockStorage::default());
        let service = SubjectService::with_storage(mock.clone());
        let request = TestRequest::default().to_http_request();

        let resp = service
            .list_subjects(SubjectListQuery { standard: None }, &request)
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);
        assert_eq!(mock.call_count(), 0);
    }

    #[actix_web::test]
    async fn test_list_subjects_encodes_images() {
        let mock = Arc::new(MockStorage {
            subjects: vec![SubjectRow {
                subject_code: "MTH".into(),
                subject_name: "Mathematics".into(),
                stand: "10".into(),
                division: Some("B".into()),
                subject_code_prefixed: "MTH10".into(),
                image: Some(b"pic".to_vec()),
            }],
            ..Default::default()
        });
        let service = SubjectService::with_storage(mock);
        let request = TestRequest::default().to_http_request();

        let resp = service
            .list_subjects(
                SubjectListQuery {
                    standard: Some("10".into()),
                },
                &request,
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);

        let bytes = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json[0]["subject_name"], serde_json::json!("Mathematics"));
        assert_eq!(json[0]["image"], serde_json::json!("cGlj"));
    }
}
