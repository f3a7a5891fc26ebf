pub mod box_stats;
pub mod chart_layout;
pub mod metric_group;
pub mod report_outcome;
