use crate::common::*;

use crate::dto::{box_stats::*, metric_group::*};
use crate::enums::algorithm::*;
use crate::model::report::report_config::*;
use crate::utils_modules::stats_utils::*;

/* Fraction of one category slot shared by the boxes of that category */
pub const GROUP_WIDTH: f64 = 0.8;
/* Fraction of one hue slot a box actually covers */
pub const BOX_WIDTH_RATIO: f64 = 0.9;

const POINTS_PER_INCH: f64 = 72.0;

#[doc = r#"
    Structural description of the grouped boxplot.

    Built purely from the report configuration and the grouped metric values, so two runs over
    unchanged data produce equal layouts (and equal JSON). The chart service renders exactly this.

    X coordinates are category units: crate `i` spans `[i, i + 1)` with its tick at `i + 0.5`.
"#]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct ChartLayout {
    pub width_px: u32,
    pub height_px: u32,
    pub dpi: u32,
    pub x_label: String,
    pub y_label: String,
    pub x_tick_labels: Vec<String>,
    pub hue_labels: Vec<String>,
    pub tick_rotation: u32,
    pub despine_offset_px: u32,
    pub y_range: (f64, f64),
    pub data_span: (f64, f64),
    pub boxes: Vec<BoxPlacement>,
    pub empty_groups: Vec<EmptyGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct BoxPlacement {
    pub crate_name: String,
    pub algorithm: Algorithm,
    pub crate_index: usize,
    pub hue_index: usize,
    pub center_x: f64,
    pub width: f64,
    pub stats: BoxStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct EmptyGroup {
    pub crate_name: String,
    pub algorithm: Algorithm,
}

impl ChartLayout {
    #[doc = r#"
        Places one box per non-empty (crate, algorithm) group.

        1. crates follow `crate_order` on the x axis, algorithms follow `algorithm_order` inside each crate slot
        2. groups whose crate or algorithm is not in the configured orders are ignored
        3. groups without values are recorded in `empty_groups` and get no box
        4. the y range covers every whisker and flier with 5% padding
    "#]
    pub fn build(report_config: &ReportConfig, groups: &[MetricGroup]) -> Self {
        let experiment: &ExperimentConfig = report_config.experiment();
        let chart: &ChartConfig = report_config.chart();

        let crate_order: &[String] = experiment.crate_order();
        let algorithm_order: &[Algorithm] = experiment.algorithm_order();

        let hue_slot: f64 = GROUP_WIDTH / algorithm_order.len().max(1) as f64;

        let mut boxes: Vec<BoxPlacement> = Vec::new();
        let mut empty_groups: Vec<EmptyGroup> = Vec::new();

        for group in groups {
            let Some(crate_index) = crate_order.iter().position(|c| c == group.crate_name())
            else {
                continue;
            };

            let Some(hue_index) = algorithm_order.iter().position(|a| a == group.algorithm())
            else {
                continue;
            };

            let Some(stats) = compute_box_stats(group.values()) else {
                empty_groups.push(EmptyGroup::new(group.crate_name().clone(), *group.algorithm()));
                continue;
            };

            let center_x: f64 = crate_index as f64 + 0.5 - GROUP_WIDTH / 2.0
                + hue_slot * (hue_index as f64 + 0.5);

            boxes.push(BoxPlacement::new(
                group.crate_name().clone(),
                *group.algorithm(),
                crate_index,
                hue_index,
                center_x,
                hue_slot * BOX_WIDTH_RATIO,
                stats,
            ));
        }

        boxes.sort_by_key(|b| (b.crate_index, b.hue_index));

        let data_span: (f64, f64) = Self::calc_data_span(&boxes);
        let y_range: (f64, f64) = Self::calc_y_range(data_span, boxes.is_empty());

        let dpi: u32 = *chart.dpi();

        ChartLayout {
            width_px: (chart.width_inch() * dpi as f64).round() as u32,
            height_px: (chart.height_inch() * dpi as f64).round() as u32,
            dpi,
            x_label: chart.x_label().clone(),
            y_label: chart.y_axis_label(*experiment.metric()),
            x_tick_labels: crate_order.to_vec(),
            hue_labels: algorithm_order.iter().map(|a| a.label().to_string()).collect(),
            tick_rotation: *chart.tick_rotation(),
            despine_offset_px: (*chart.despine_offset() as f64 * dpi as f64 / POINTS_PER_INCH)
                .round() as u32,
            y_range,
            data_span,
            boxes,
            empty_groups,
        }
    }

    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }

    #[doc = "Typographic points to pixels at the layout's DPI"]
    pub fn points_to_px(&self, points: f64) -> f64 {
        points * self.dpi as f64 / POINTS_PER_INCH
    }

    pub fn x_range(&self) -> (f64, f64) {
        (0.0, self.x_tick_labels.len() as f64)
    }

    pub fn tick_positions(&self) -> Vec<f64> {
        (0..self.x_tick_labels.len())
            .map(|i| i as f64 + 0.5)
            .collect()
    }

    fn calc_data_span(boxes: &[BoxPlacement]) -> (f64, f64) {
        if boxes.is_empty() {
            return (0.0, 1.0);
        }

        boxes.iter().fold((f64::MAX, f64::MIN), |(lo, hi), b| {
            (lo.min(b.stats.drawn_min()), hi.max(b.stats.drawn_max()))
        })
    }

    fn calc_y_range(data_span: (f64, f64), no_boxes: bool) -> (f64, f64) {
        if no_boxes {
            return data_span;
        }

        let (lo, hi) = data_span;
        let spread: f64 = hi - lo;

        let padding: f64 = if spread > 0.0 {
            spread * 0.05
        } else {
            (hi.abs() * 0.05).max(0.05)
        };

        (lo - padding, hi + padding)
    }
}
