use crate::common::*;

use crate::utils_modules::{pg_cell_utils::*, traits::*};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct ExperimentRecord {
    #[serde(rename = "crate")]
    pub crate_name: String,
    pub gen: i64,
    pub mir_coverage: f64,
    pub tests_length: Option<f64>,
    pub tests: Option<f64>,
    pub covered_targets: Option<f64>,
}

impl ExperimentRecord {
    #[doc = r#"
        Decodes one record from per-column cells.

        `crate`, `gen` and `mir_coverage` are required and must be non-null: a NULL coverage
        value fails the whole fetch as a `QueryError` rather than being dropped from the plot.
        `tests_length`, `tests` and `covered_targets` may be NULL or absent from older tables.
    "#]
    pub fn from_cells<F>(mut cell: F) -> anyhow::Result<Self>
    where
        F: FnMut(&str) -> anyhow::Result<PgCell>,
    {
        Ok(ExperimentRecord {
            crate_name: cell_to_text("crate", cell("crate")?)?,
            gen: cell_to_int("gen", cell("gen")?)?,
            mir_coverage: cell_to_float("mir_coverage", cell("mir_coverage")?)?,
            tests_length: cell_to_optional_float("tests_length", cell("tests_length")?)?,
            tests: cell_to_optional_float("tests", cell("tests")?)?,
            covered_targets: cell_to_optional_float("covered_targets", cell("covered_targets")?)?,
        })
    }
}

impl FromPgRow for ExperimentRecord {
    fn from_pg_row(row: &Row) -> anyhow::Result<Self> {
        Self::from_cells(|column| read_pg_cell(row, column))
            .context("[ExperimentRecord->from_pg_row] row cannot be decoded")
    }
}
