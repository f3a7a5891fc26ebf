use crate::common::*;

use crate::dto::chart_layout::*;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Render a grouped box-and-whisker chart described by `layout` and save it as a PNG
        # Arguments
        * `layout` - Fully resolved chart structure (orders, boxes, labels, pixel size)
        * `output_path` - Path where the chart image will be saved
    "]
    async fn generate_grouped_boxplot(
        &self,
        layout: &ChartLayout,
        output_path: &Path,
    ) -> anyhow::Result<()>;
}
