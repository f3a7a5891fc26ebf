pub mod chart_service;
pub mod query_service;
pub mod report_service;
