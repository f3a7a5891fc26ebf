use crate::common::*;

#[doc = r#"
    Fatal failure classes of a report run.

    Travels inside `anyhow::Error` and is recovered by callers with `downcast_ref::<ReportError>()`.
    An empty (crate, algorithm) group is not an error: it is reported through `ChartLayout::empty_groups`.
"#]
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("[ConnectionError] {0}")]
    Connection(String),
    #[error("[QueryError] collection '{collection}': {reason}")]
    Query { collection: String, reason: String },
    #[error("[InvalidConfig] {0}")]
    InvalidConfig(String),
}

impl ReportError {
    pub fn query(collection: &str, reason: impl std::fmt::Display) -> Self {
        ReportError::Query {
            collection: collection.to_string(),
            reason: reason.to_string(),
        }
    }
}
