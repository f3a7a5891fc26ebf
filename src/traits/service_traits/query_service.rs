use crate::common::*;

use crate::model::experiment::source_collection::*;

#[async_trait]
pub trait QueryService {
    #[doc = r#"
        Fetches the four result collections, each tagged with the algorithm that produced it.
        Fails on the first collection that cannot be read; nothing partial is returned.
    "#]
    async fn fetch_source_collections(
        &self,
        table_prefix: &str,
    ) -> anyhow::Result<Vec<SourceCollection>>;
}
