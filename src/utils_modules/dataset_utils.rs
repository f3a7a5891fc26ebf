use crate::common::*;

use crate::dto::metric_group::*;
use crate::enums::{algorithm::*, coverage_metric::*};
use crate::model::experiment::{labeled_record::*, source_collection::*};

#[doc = "Attaches the collection's algorithm to every one of its records"]
pub fn label_collection(collection: SourceCollection) -> Vec<LabeledRecord> {
    let SourceCollection { algorithm, records } = collection;

    records
        .into_iter()
        .map(|record| LabeledRecord::new(algorithm, record))
        .collect()
}

#[doc = "Drops records of held-out crates"]
pub fn exclude_crates(records: Vec<LabeledRecord>, excluded_crates: &[String]) -> Vec<LabeledRecord> {
    records
        .into_iter()
        .filter(|r| !excluded_crates.contains(&r.record.crate_name))
        .collect()
}

pub fn concat_collections(collections: Vec<Vec<LabeledRecord>>) -> Vec<LabeledRecord> {
    collections.into_iter().flatten().collect()
}

#[doc = "Keeps only records of generation `target_generation`"]
pub fn filter_generation(records: Vec<LabeledRecord>, target_generation: i64) -> Vec<LabeledRecord> {
    records
        .into_iter()
        .filter(|r| r.record.gen == target_generation)
        .collect()
}

#[doc = r#"
    Label → exclude → concatenate → filter by generation.

    Every collection is labeled and cleaned of excluded crates on its own before the
    collections are concatenated; the generation filter runs on the combined set.
"#]
pub fn prepare_dataset(
    collections: Vec<SourceCollection>,
    excluded_crates: &[String],
    target_generation: i64,
) -> Vec<LabeledRecord> {
    let labeled: Vec<Vec<LabeledRecord>> = collections
        .into_iter()
        .map(|collection| exclude_crates(label_collection(collection), excluded_crates))
        .collect();

    filter_generation(concat_collections(labeled), target_generation)
}

#[doc = r#"
    Collects `metric` values per (crate, algorithm) pair.

    Returns one group for every pair of `crate_order` × `algorithm_order`, in that order,
    including pairs without any value. Records whose crate or algorithm is not part of the
    orders are not grouped. Values are ascending; records where the metric is NULL are skipped.
"#]
pub fn group_metric_values(
    records: &[LabeledRecord],
    metric: CoverageMetric,
    crate_order: &[String],
    algorithm_order: &[Algorithm],
) -> Vec<MetricGroup> {
    let mut buckets: BTreeMap<(usize, usize), Vec<f64>> = BTreeMap::new();
    let mut ungrouped: usize = 0;

    for labeled in records {
        let crate_index: Option<usize> = crate_order
            .iter()
            .position(|c| *c == labeled.record.crate_name);
        let algorithm_index: Option<usize> =
            algorithm_order.iter().position(|a| *a == labeled.algorithm);

        let (Some(c), Some(a)) = (crate_index, algorithm_index) else {
            ungrouped += 1;
            continue;
        };

        if let Some(value) = metric.value_of(&labeled.record) {
            buckets.entry((c, a)).or_default().push(value);
        }
    }

    if ungrouped > 0 {
        info!(
            "[dataset_utils->group_metric_values] {} record(s) belong to crates or algorithms outside the configured order and are not plotted",
            ungrouped
        );
    }

    let mut groups: Vec<MetricGroup> = Vec::with_capacity(crate_order.len() * algorithm_order.len());

    for (c, crate_name) in crate_order.iter().enumerate() {
        for (a, algorithm) in algorithm_order.iter().enumerate() {
            let mut values: Vec<f64> = buckets.remove(&(c, a)).unwrap_or_default();
            values.sort_by(|x, y| x.total_cmp(y));
            groups.push(MetricGroup::new(crate_name.clone(), *algorithm, values));
        }
    }

    groups
}
