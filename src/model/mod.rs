pub mod configs;
pub mod experiment;
pub mod report;
