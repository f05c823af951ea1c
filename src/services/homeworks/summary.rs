use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::Result;
use crate::models::ErrorResponse;
use crate::models::homeworks::{EvolutionSummaryQuery, responses::EvolutionSummary};
use crate::storage::Storage;
use crate::utils::validate::required_field;

use super::HomeworkService;

pub async fn evolution_summary(
    service: &HomeworkService,
    query: EvolutionSummaryQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (Some(subject_name), Some(standard), Some(division), Some(student_id)) = (
        required_field(&query.subject_name),
        required_field(&query.standred),
        required_field(&query.division),
        required_field(&query.student_id),
    ) else {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(
            "subject_name, standred, division and student_id are required parameters",
        )));
    };

    let storage = service.get_storage(request);

    // 姓名查不到就提前结束，计数查询不再执行
    let student_name = match storage.get_student_name(student_id).await {
        Ok(Some(name)) => name,
        Ok(None) => {
            return Ok(
                HttpResponse::NotFound().json(ErrorResponse::new("Student not found"))
            );
        }
        Err(e) => {
            tracing::error!("Student name lookup failed: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ErrorResponse::internal()));
        }
    };

    // 三个计数依次执行，共用同一个借出逻辑（每次一条语句）
    match collect_counts(&storage, subject_name, standard, division, student_id).await {
        Ok((total, approved, pending)) => Ok(HttpResponse::Ok().json(EvolutionSummary {
            student_name,
            total_homework: total,
            approved_homework: approved,
            pending_homework: pending,
        })),
        Err(e) => {
            tracing::error!("Evolution summary counts failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::internal()))
        }
    }
}

async fn collect_counts(
    storage: &std::sync::Arc<dyn Storage>,
    subject_name: &str,
    standard: &str,
    division: &str,
    student_id: &str,
) -> Result<(i64, i64, i64)> {
    let total = storage
        .count_assigned_homework(subject_name, standard, division)
        .await?;
    let approved = storage
        .count_approved_homework(student_id, subject_name)
        .await?;
    let pending = storage
        .count_unsubmitted_homework(subject_name, standard, division, student_id)
        .await?;
    Ok((total, approved, pending))
}
