pub mod pending;
pub mod submit;
pub mod submitted;
pub mod summary;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::homeworks::{
    EvolutionSummaryQuery, PendingHomeworkQuery, SubmitHomeworkRequest, SubmittedHomeworkQuery,
};
use crate::storage::Storage;

pub struct HomeworkService {
    storage: Option<Arc<dyn Storage>>,
}

impl HomeworkService {
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

    // 待完成作业列表
    pub async fn list_pending(
        &self,
        query: PendingHomeworkQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        pending::list_pending(self, query, request).await
    }

    // 已提交作业列表（按提交合并图片）
    pub async fn list_submitted(
        &self,
        query: SubmittedHomeworkQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submitted::list_submitted(self, query, request).await
    }

    // 学习进度汇总
    pub async fn evolution_summary(
        &self,
        query: EvolutionSummaryQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        summary::evolution_summary(self, query, request).await
    }

    // 提交作业（事务写入）
    pub async fn submit_homework(
        &self,
        submit_request: SubmitHomeworkRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_homework(self, submit_request, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::homeworks::entities::SubmittedHomeworkRow;
    use crate::storage::mock::MockStorage;
    use actix_web::body::to_bytes;
    use actix_web::test::TestRequest;

    async fn body_json(resp: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(resp.into_body()).await.expect("body read failed");
        serde_json::from_slice(&bytes).expect("body is not JSON")
    }

    fn submitted_row(submitted_id: i64, image: Option<&[u8]>) -> SubmittedHomeworkRow {
        SubmittedHomeworkRow {
            submitted_id,
            homeworkpending_id: 7,
            subject_id: "MTH10".into(),
            date_of_given_submitted: None,
            description: Some("chapter 4".into()),
            approval_status: 0,
            image: image.map(|b| b.to_vec()),
        }
    }

    fn submit_request() -> SubmitHomeworkRequest {
        SubmitHomeworkRequest {
            homeworkpending_id: Some(7),
            subject_id: Some("MTH10".into()),
            student_id: Some("S1001".into()),
            description: Some("done".into()),
            images: Some(vec!["YWJj".into()]),
        }
    }

    #[actix_web::test]
    async fn test_pending_missing_fields_is_400_before_storage() {
        let mock = Arc::new(MockStorage::default());
        let service = HomeworkService::with_storage(mock.clone());
        let request = TestRequest::default().to_http_request();

        let resp = service
            .list_pending(
                PendingHomeworkQuery {
                    subject_name: Some("Mathematics".into()),
                    standard: None,
                    division: Some("B".into()),
                },
                &request,
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);
        assert_eq!(mock.call_count(), 0);
    }

    #[actix_web::test]
    async fn test_submitted_groups_images_per_submission() {
        let mock = Arc::new(MockStorage {
            submitted: vec![
                submitted_row(1, Some(b"a")),
                submitted_row(1, Some(b"b")),
                submitted_row(1, Some(b"c")),
                submitted_row(2, None),
            ],
            ..Default::default()
        });
        let service = HomeworkService::with_storage(mock);
        let request = TestRequest::default().to_http_request();

        let resp = service
            .list_submitted(
                SubmittedHomeworkQuery {
                    student_id: Some("S1001".into()),
                    subject_name: Some("Mathematics".into()),
                },
                &request,
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);

        let json = body_json(resp).await;
        let list = json.as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["images"].as_array().unwrap().len(), 3);
        // 没有图片的提交仍有空列表字段
        assert_eq!(list[1]["images"], serde_json::json!([]));
    }

    #[actix_web::test]
    async fn test_submitted_empty_is_404() {
        let mock = Arc::new(MockStorage::default());
        let service = HomeworkService::with_storage(mock);
        let request = TestRequest::default().to_http_request();

        let resp = service
            .list_submitted(
                SubmittedHomeworkQuery {
                    student_id: Some("S1001".into()),
                    subject_name: Some("Mathematics".into()),
                },
                &request,
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn test_summary_runs_four_queries() {
        let mock = Arc::new(MockStorage {
            student_name: Some("Asha Patil".into()),
            assigned_count: 12,
            approved_count: 8,
            unsubmitted_count: 3,
            ..Default::default()
        });
        let service = HomeworkService::with_storage(mock.clone());
        let request = TestRequest::default().to_http_request();

        let resp = service
            .evolution_summary(
                EvolutionSummaryQuery {
                    subject_name: Some("Mathematics".into()),
                    standred: Some("10".into()),
                    division: Some("B".into()),
                    student_id: Some("S1001".into()),
                },
                &request,
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(mock.call_count(), 4);

        let json = body_json(resp).await;
        assert_eq!(
            json,
            serde_json::json!({
                "student_name": "Asha Patil",
                "totalHomework": 12,
                "approvedHomework": 8,
                "pendingHomework": 3,
            })
        );
    }

    #[actix_web::test]
    async fn test_summary_unknown_student_is_404() {
        let mock = Arc::new(MockStorage::default());
        let service = HomeworkService::with_storage(mock.clone());
        let request = TestRequest::default().to_http_request();

        let resp = service
            .evolution_summary(
                EvolutionSummaryQuery {
                    subject_name: Some("Mathematics".into()),
                    standred: Some("10".into()),
                    division: Some("B".into()),
                    student_id: Some("S404".into()),
                },
                &request,
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), 404);
        // 名字查询之后不再继续计数查询
        assert_eq!(mock.call_count(), 1);
    }

    #[actix_web::test]
    async fn test_submit_missing_fields_is_400_before_storage() {
        let mock = Arc::new(MockStorage::default());
        let service = HomeworkService::with_storage(mock.clone());
        let request = TestRequest::default().to_http_request();

        let mut req = submit_request();
        req.description = None;
        let resp = service.submit_homework(req, &request).await.unwrap();
        assert_eq!(resp.status(), 400);
        assert_eq!(mock.call_count(), 0);
    }

    #[actix_web::test]
    async fn test_submit_empty_images_is_400_before_storage() {
        let mock = Arc::new(MockStorage::default());
        let service = HomeworkService::with_storage(mock.clone());
        let request = TestRequest::default().to_http_request();

        let mut req = submit_request();
        req.images = Some(vec![]);
        let resp = service.submit_homework(req, &request).await.unwrap();
        assert_eq!(resp.status(), 400);
        assert_eq!(
            body_json(resp).await,
            serde_json::json!({"error": "images must be a non-empty list"})
        );
        assert_eq!(mock.call_count(), 0);
    }

    #[actix_web::test]
    async fn test_submit_success() {
        let mock = Arc::new(MockStorage::default());
        let service = HomeworkService::with_storage(mock.clone());
        let request = TestRequest::default().to_http_request();

        let resp = service
            .submit_homework(submit_request(), &request)
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(body_json(resp).await, serde_json::json!({"success": true}));

        let submissions = mock.submissions.lock().unwrap();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].homeworkpending_id, 7);
        assert_eq!(submissions[0].images, vec!["YWJj".to_string()]);
    }

    #[actix_web::test]
    async fn test_submit_storage_failure_is_500_generic() {
        let mock = Arc::new(MockStorage {
            fail: true,
            ..Default::default()
        });
        let service = HomeworkService::with_storage(mock);
        let request = TestRequest::default().to_http_request();

        let resp = service
            .submit_homework(submit_request(), &request)
            .await
            .unwrap();
        assert_eq!(resp.status(), 500);
        assert_eq!(
            body_json(resp).await,
            serde_json::json!({"error": "Internal server error"})
        );
    }
}
