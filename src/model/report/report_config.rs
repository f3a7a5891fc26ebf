use crate::common::*;

use crate::enums::{algorithm::*, coverage_metric::*, report_error::*};

#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct ReportConfig {
    #[serde(default)]
    pub experiment: ExperimentConfig,
    pub chart: ChartConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct ExperimentConfig {
    pub table_prefix: String,
    pub target_generation: i64,
    pub excluded_crates: Vec<String>,
    pub crate_order: Vec<String>,
    pub algorithm_order: Vec<Algorithm>,
    pub metric: CoverageMetric,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            table_prefix: "experiments_".to_string(),
            target_generation: 99,
            excluded_crates: vec!["toycrate".to_string()],
            crate_order: ["time", "gamie", "lsd", "humantime", "quick_xml", "tight"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            algorithm_order: vec![
                Algorithm::SeededDynamosa,
                Algorithm::Dynamosa,
                Algorithm::SeededRandomSearch,
                Algorithm::RandomSearch,
            ],
            metric: CoverageMetric::MirCoverage,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct ChartConfig {
    pub output_path: PathBuf,
    #[serde(default)]
    pub layout_path: Option<PathBuf>,
    #[serde(default = "default_x_label")]
    pub x_label: String,
    #[serde(default)]
    pub y_label: Option<String>,
    #[serde(default = "default_dpi")]
    pub dpi: u32,
    #[serde(default = "default_width_inch")]
    pub width_inch: f64,
    #[serde(default = "default_height_inch")]
    pub height_inch: f64,
    #[serde(default = "default_tick_rotation")]
    pub tick_rotation: u32,
    #[serde(default = "default_despine_offset")]
    pub despine_offset: u32,
}

fn default_x_label() -> String {
    "Crate".to_string()
}

fn default_dpi() -> u32 {
    300
}

fn default_width_inch() -> f64 {
    6.4
}

fn default_height_inch() -> f64 {
    4.8
}

fn default_tick_rotation() -> u32 {
    90
}

fn default_despine_offset() -> u32 {
    10
}

impl ChartConfig {
    #[doc = "Configured y-axis label, or the metric's own label"]
    pub fn y_axis_label(&self, metric: CoverageMetric) -> String {
        self.y_label
            .clone()
            .unwrap_or_else(|| metric.default_axis_label().to_string())
    }
}

impl ReportConfig {
    #[doc = r#"
        Rejects configurations that cannot produce a well-defined chart.

        1. crate order must be non-empty and free of duplicates
        2. algorithm order must be non-empty and free of duplicates
        3. target generation must be non-negative
        4. DPI and figure size must be positive
        5. tick rotation must be a quarter turn (0, 90, 180, 270)
    "#]
    pub fn validate(&self) -> Result<(), ReportError> {
        let experiment: &ExperimentConfig = &self.experiment;

        if experiment.crate_order.is_empty() {
            return Err(ReportError::InvalidConfig(
                "experiment.crate_order must name at least one crate".to_string(),
            ));
        }

        let mut seen_crates: HashSet<&str> = HashSet::new();
        for crate_name in &experiment.crate_order {
            if !seen_crates.insert(crate_name.as_str()) {
                return Err(ReportError::InvalidConfig(format!(
                    "experiment.crate_order lists '{}' more than once",
                    crate_name
                )));
            }
        }

        if experiment.algorithm_order.is_empty() {
            return Err(ReportError::InvalidConfig(
                "experiment.algorithm_order must name at least one algorithm".to_string(),
            ));
        }

        let mut seen_algorithms: HashSet<Algorithm> = HashSet::new();
        for algorithm in &experiment.algorithm_order {
            if !seen_algorithms.insert(*algorithm) {
                return Err(ReportError::InvalidConfig(format!(
                    "experiment.algorithm_order lists '{}' more than once",
                    algorithm
                )));
            }
        }

        if experiment.target_generation < 0 {
            return Err(ReportError::InvalidConfig(format!(
                "experiment.target_generation must be >= 0, got {}",
                experiment.target_generation
            )));
        }

        let chart: &ChartConfig = &self.chart;

        if chart.dpi == 0 {
            return Err(ReportError::InvalidConfig(
                "chart.dpi must be positive".to_string(),
            ));
        }

        if !(chart.width_inch > 0.0 && chart.height_inch > 0.0) {
            return Err(ReportError::InvalidConfig(format!(
                "chart figure size must be positive, got {} x {} inch",
                chart.width_inch, chart.height_inch
            )));
        }

        if ![0, 90, 180, 270].contains(&chart.tick_rotation) {
            return Err(ReportError::InvalidConfig(format!(
                "chart.tick_rotation must be 0, 90, 180 or 270, got {}",
                chart.tick_rotation
            )));
        }

        Ok(())
    }
}
