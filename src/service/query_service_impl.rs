use crate::common::*;

use crate::enums::algorithm::*;
use crate::model::experiment::{experiment_record::*, source_collection::*};
use crate::traits::{repository_traits::experiment_repository::*, service_traits::query_service::*};

#[derive(Debug, new)]
pub struct QueryServiceImpl<R: ExperimentRepository> {
    experiment_repo: Arc<R>,
}

#[async_trait]
impl<R> QueryService for QueryServiceImpl<R>
where
    R: ExperimentRepository,
{
    async fn fetch_source_collections(
        &self,
        table_prefix: &str,
    ) -> anyhow::Result<Vec<SourceCollection>> {
        let mut collections: Vec<SourceCollection> = Vec::with_capacity(Algorithm::SOURCES.len());

        for algorithm in Algorithm::SOURCES {
            let table_name: String = algorithm.table_name(table_prefix);

            let records: Vec<ExperimentRecord> = self
                .experiment_repo
                .fetch_collection(&table_name)
                .await
                .with_context(|| {
                    format!(
                        "[QueryServiceImpl->fetch_source_collections] Failed to fetch {} ({})",
                        table_name, algorithm
                    )
                })?;

            collections.push(SourceCollection::new(algorithm, records));
        }

        Ok(collections)
    }
}
