//! REST API endpoint for trigger content analysis

use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::api::error::ApiError;
use crate::model::AggregateReport;
use crate::service::AnalysisService;

/// Request body for text analysis
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Script or document text to screen
    pub text: String,
}

/// Per-category confirmation result
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryConfidence {
    pub category: String,
    /// `"<STATUS> (<count>/<total> chunks)"`
    pub confidence: String,
}

/// Response body for text analysis
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponse {
    pub results: Vec<CategoryConfidence>,
}

impl From<AggregateReport> for AnalyzeResponse {
    fn from(report: AggregateReport) -> Self {
        let total = report.total_chunks;
        let results = report
            .findings
            .into_iter()
            .map(|f| CategoryConfidence {
                category: f.category.name().to_string(),
                confidence: format!("{} ({}/{} chunks)", f.status, f.confirmations, total),
            })
            .collect();
        Self { results }
    }
}

/// Screen a text document for trigger content
#[utoipa::path(
    post,
    path = "/v1/analysis",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis completed", body = AnalyzeResponse),
        (status = 400, description = "Empty input text"),
        (status = 502, description = "Model backend failure"),
        (status = 500, description = "Internal server error")
    ),
    tag = "analysis"
)]
#[post("/v1/analysis")]
pub async fn analyze_text(
    service: web::Data<AnalysisService>,
    body: web::Json<AnalyzeRequest>,
) -> Result<HttpResponse, ApiError> {
    let report = service.analyze(&body.text).await?;
    Ok(HttpResponse::Ok().json(AnalyzeResponse::from(report)))
}

/// Configure analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(analyze_text);
}

#[derive(OpenApi)]
#[openapi(
    paths(
        analyze_text,
        crate::api::health::liveness,
        crate::api::health::readiness
    ),
    components(schemas(AnalyzeRequest, AnalyzeResponse, CategoryConfidence)),
    tags(
        (name = "analysis", description = "Trigger content analysis"),
        (name = "health", description = "Service health probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, CategoryFinding, CategoryStatus};

    #[test]
    fn confidence_strings_follow_the_report_format() {
        let report = AggregateReport {
            total_chunks: 2,
            findings: vec![
                CategoryFinding {
                    category: Category::Violence,
                    confirmations: 1,
                    status: CategoryStatus::Confirmed,
                },
                CategoryFinding {
                    category: Category::Death,
                    confirmations: 0,
                    status: CategoryStatus::NotFound,
                },
            ],
        };

        let response = AnalyzeResponse::from(report);

        assert_eq!(response.results[0].category, "VIOLENCE");
        assert_eq!(response.results[0].confidence, "CONFIRMED (1/2 chunks)");
        assert_eq!(response.results[1].category, "DEATH");
        assert_eq!(response.results[1].confidence, "NOT FOUND (0/2 chunks)");
    }
}
