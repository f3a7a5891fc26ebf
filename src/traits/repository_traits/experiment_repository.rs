use crate::common::*;

use crate::model::experiment::experiment_record::*;

#[async_trait]
pub trait ExperimentRepository: Send + Sync {
    #[doc = r#"
        Fetches every row of the named result table.

        # Errors
        `ReportError::Query` when the table does not exist, the name is not a plain
        identifier, or a row cannot be decoded into an `ExperimentRecord`.
    "#]
    async fn fetch_collection(&self, table_name: &str) -> Result<Vec<ExperimentRecord>, anyhow::Error>;
}
