use crate::common::*;

use crate::dto::report_outcome::*;
use crate::model::report::report_config::*;

#[async_trait]
pub trait ReportService {
    #[doc = r#"
        Fetches the experiment collections, reduces them to the target generation and renders
        the coverage boxplot described by `report_config`.
    "#]
    async fn generate_coverage_report(
        &self,
        report_config: &ReportConfig,
    ) -> anyhow::Result<ReportOutcome>;
}
