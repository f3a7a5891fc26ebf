use crate::common::*;

use std::sync::Mutex;

use crate::enums::report_error::*;
use crate::model::experiment::experiment_record::*;
use crate::traits::repository_traits::experiment_repository::*;

pub fn sample_record(crate_name: &str, gen: i64, mir_coverage: f64) -> ExperimentRecord {
    ExperimentRecord::new(crate_name.to_string(), gen, mir_coverage, Some(10.0), Some(5.0), Some(42.0))
}

#[doc = "Experiment store backed by a map of table name → rows. Unknown tables fail like a missing PostgreSQL relation."]
#[derive(Debug, Default)]
pub struct InMemoryExperimentRepository {
    tables: BTreeMap<String, Vec<ExperimentRecord>>,
    fetched: Mutex<Vec<String>>,
}

impl InMemoryExperimentRepository {
    pub fn with_table(mut self, table_name: &str, records: Vec<ExperimentRecord>) -> Self {
        self.tables.insert(table_name.to_string(), records);
        self
    }

    pub fn fetched_tables(&self) -> Vec<String> {
        self.fetched
            .lock()
            .map(|fetched| fetched.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ExperimentRepository for InMemoryExperimentRepository {
    async fn fetch_collection(&self, table_name: &str) -> Result<Vec<ExperimentRecord>, anyhow::Error> {
        if let Ok(mut fetched) = self.fetched.lock() {
            fetched.push(table_name.to_string());
        }

        self.tables
            .get(table_name)
            .cloned()
            .ok_or_else(|| ReportError::query(table_name, "table does not exist").into())
    }
}
