use crate::common::*;

use crate::model::experiment::experiment_record::*;

#[doc = "Numeric column of an experiment row that is drawn on the y-axis"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CoverageMetric {
    #[default]
    MirCoverage,
    TestsLength,
    Tests,
    CoveredTargets,
}

impl CoverageMetric {
    pub fn column_name(&self) -> &'static str {
        match self {
            CoverageMetric::MirCoverage => "mir_coverage",
            CoverageMetric::TestsLength => "tests_length",
            CoverageMetric::Tests => "tests",
            CoverageMetric::CoveredTargets => "covered_targets",
        }
    }

    pub fn default_axis_label(&self) -> &'static str {
        match self {
            CoverageMetric::MirCoverage => "Basic block coverage",
            CoverageMetric::TestsLength => "Test length",
            CoverageMetric::Tests => "Tests",
            CoverageMetric::CoveredTargets => "Covered targets",
        }
    }

    #[doc = "Value of this metric for a record. Auxiliary columns are nullable."]
    pub fn value_of(&self, record: &ExperimentRecord) -> Option<f64> {
        match self {
            CoverageMetric::MirCoverage => Some(record.mir_coverage),
            CoverageMetric::TestsLength => record.tests_length,
            CoverageMetric::Tests => record.tests,
            CoverageMetric::CoveredTargets => record.covered_targets,
        }
    }
}
