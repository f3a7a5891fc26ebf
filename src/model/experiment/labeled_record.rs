use crate::common::*;

use crate::enums::algorithm::*;
use crate::model::experiment::experiment_record::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct LabeledRecord {
    pub algorithm: Algorithm,
    pub record: ExperimentRecord,
}
