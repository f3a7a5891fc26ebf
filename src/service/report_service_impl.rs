use crate::common::*;
use crate::traits::service_traits::{chart_service::*, query_service::*, report_service::*};
use crate::utils_modules::{dataset_utils::*, io_utils::*};

use crate::model::{
    experiment::{labeled_record::*, source_collection::*},
    report::report_config::*,
};

use crate::dto::{chart_layout::*, metric_group::*, report_outcome::*};

#[derive(Debug, new)]
pub struct ReportServiceImpl<Q: QueryService, C: ChartService> {
    query_service: Q,
    chart_service: C,
}

impl<Q, C> ReportServiceImpl<Q, C>
where
    Q: QueryService + Sync,
    C: ChartService,
{
    #[doc = "Logs every (crate, algorithm) pair that has no value at the target generation"]
    fn warn_empty_groups(&self, layout: &ChartLayout, target_generation: i64) {
        for empty in layout.empty_groups() {
            warn!(
                "[ReportServiceImpl->warn_empty_groups] EmptyResult: no records for crate '{}' / {} at generation {}; the box is omitted",
                empty.crate_name(),
                empty.algorithm(),
                target_generation
            );
        }
    }
}

#[async_trait]
impl<Q, C> ReportService for ReportServiceImpl<Q, C>
where
    Q: QueryService + Sync,
    C: ChartService,
{
    #[doc = r#"
        1. 네 개의 실험 테이블을 조회하여 알고리즘 라벨을 부착
        2. 제외 대상 crate 제거 → 병합 → 목표 세대(gen) 필터링
        3. (crate, algorithm) 별로 metric 값을 묶어 차트 레이아웃 생성
        4. PNG 저장, 설정되어 있으면 레이아웃 JSON 도 함께 저장
    "#]
    async fn generate_coverage_report(
        &self,
        report_config: &ReportConfig,
    ) -> anyhow::Result<ReportOutcome> {
        let experiment: &ExperimentConfig = report_config.experiment();
        let chart: &ChartConfig = report_config.chart();

        let collections: Vec<SourceCollection> = self
            .query_service
            .fetch_source_collections(experiment.table_prefix())
            .await?;

        let fetched_cnt: usize = collections.iter().map(|c| c.records().len()).sum();

        let dataset: Vec<LabeledRecord> = prepare_dataset(
            collections,
            experiment.excluded_crates(),
            *experiment.target_generation(),
        );

        info!(
            "[ReportServiceImpl->generate_coverage_report] {} of {} fetched records remain at generation {}, plotting '{}'",
            dataset.len(),
            fetched_cnt,
            experiment.target_generation(),
            experiment.metric().column_name()
        );

        let groups: Vec<MetricGroup> = group_metric_values(
            &dataset,
            *experiment.metric(),
            experiment.crate_order(),
            experiment.algorithm_order(),
        );

        let layout: ChartLayout = ChartLayout::build(report_config, &groups);
        self.warn_empty_groups(&layout, *experiment.target_generation());

        self.chart_service
            .generate_grouped_boxplot(&layout, chart.output_path())
            .await?;

        if let Some(layout_path) = chart.layout_path() {
            write_json_to_file(layout_path, &layout).with_context(|| {
                format!(
                    "[ReportServiceImpl->generate_coverage_report] Failed to write layout to {:?}",
                    layout_path
                )
            })?;
        }

        Ok(ReportOutcome::new(
            chart.output_path().clone(),
            chart.layout_path().clone(),
            dataset.len(),
            layout.box_count(),
            layout.empty_groups().len(),
        ))
    }
}
