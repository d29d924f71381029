use std::fmt;

use serde::Serialize;
use utoipa::ToSchema;

use crate::model::Category;

/// Final per-category confirmation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CategoryStatus {
    Confirmed,
    NotFound,
}

impl fmt::Display for CategoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryStatus::Confirmed => f.write_str("CONFIRMED"),
            CategoryStatus::NotFound => f.write_str("NOT FOUND"),
        }
    }
}

/// Confirmation outcome for one category across all windows
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryFinding {
    pub category: Category,
    /// Number of windows that confirmed the category
    pub confirmations: usize,
    pub status: CategoryStatus,
}

/// Final analysis report, one finding per category in report order.
///
/// Built once per analysis and immutable once returned. Invariant:
/// `confirmations <= total_chunks` for every finding.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AggregateReport {
    /// Number of windows the input was split into
    pub total_chunks: usize,
    pub findings: Vec<CategoryFinding>,
}
