pub mod algorithm;
pub mod coverage_metric;
pub mod report_error;
