use crate::common::*;

use crate::enums::algorithm::*;
use crate::model::experiment::experiment_record::*;

#[doc = "Every row of one result table, tagged with the algorithm that produced the table"]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct SourceCollection {
    pub algorithm: Algorithm,
    pub records: Vec<ExperimentRecord>,
}
