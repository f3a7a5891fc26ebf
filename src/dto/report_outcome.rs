use crate::common::*;

#[derive(Debug, Clone, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct ReportOutcome {
    pub image_path: PathBuf,
    pub layout_path: Option<PathBuf>,
    pub record_count: usize,
    pub box_count: usize,
    pub empty_group_count: usize,
}
