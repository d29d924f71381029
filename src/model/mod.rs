pub mod category;
pub mod config;
pub mod report;

pub use category::{Category, Verdict, VerdictVector};
pub use config::{AnalysisConfig, Config};
pub use report::{AggregateReport, CategoryFinding, CategoryStatus};
