use crate::common::*;

use crate::enums::algorithm::*;

#[doc = "Metric values of one (crate, algorithm) pair at the target generation, ascending"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct MetricGroup {
    pub crate_name: String,
    pub algorithm: Algorithm,
    pub values: Vec<f64>,
}
