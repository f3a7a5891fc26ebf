use crate::common::*;
use crate::dto::chart_layout::*;
use crate::traits::service_traits::chart_service::*;
use plotters::coord::{ranged1d::Ranged, types::RangedCoordf64};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

/* hue colors, in algorithm order */
const HUE_PALETTE: [RGBColor; 6] = [
    RGBColor(76, 114, 176),
    RGBColor(221, 132, 82),
    RGBColor(85, 168, 104),
    RGBColor(196, 78, 82),
    RGBColor(129, 114, 179),
    RGBColor(147, 120, 96),
];

const EDGE_COLOR: RGBColor = RGBColor(61, 61, 61);
const GRID_COLOR: RGBColor = RGBColor(204, 204, 204);
const TEXT_COLOR: RGBColor = RGBColor(38, 38, 38);

const TICK_FONT_PT: f64 = 11.0;
const LABEL_FONT_PT: f64 = 12.0;
const LINE_WIDTH_PT: f64 = 1.25;

const Y_LABEL_COUNT: usize = 8;

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl;

impl ChartServiceImpl {
    fn hue_color(hue_index: usize) -> RGBColor {
        HUE_PALETTE[hue_index % HUE_PALETTE.len()]
    }

    #[doc = "Counter-clockwise tick rotation in degrees → plotters (clockwise) font transform"]
    fn tick_transform(tick_rotation: u32) -> FontTransform {
        match tick_rotation {
            90 => FontTransform::Rotate270,
            180 => FontTransform::Rotate180,
            270 => FontTransform::Rotate90,
            _ => FontTransform::None,
        }
    }

    #[doc = "Anchor of a rotated x tick label, so that its end touches the axis"]
    fn tick_anchor(tick_rotation: u32) -> Pos {
        match tick_rotation {
            90 => Pos::new(HPos::Right, VPos::Center),
            270 => Pos::new(HPos::Left, VPos::Center),
            _ => Pos::new(HPos::Center, VPos::Top),
        }
    }

    #[doc = "The y values plotters labels for `y_lo..y_hi`, first and last of which bound the trimmed left spine"]
    fn y_tick_values(y_lo: f64, y_hi: f64) -> Vec<f64> {
        RangedCoordf64::from(y_lo..y_hi).key_points(Y_LABEL_COUNT)
    }

    #[doc = r#"
        Synchronous plotters rendering of `layout`.

        1. white canvas of `width_px × height_px`, y grid lines only
        2. one filled box series per algorithm (drives the legend), then outlines, medians, whiskers and fliers
        3. no axis frame: the left and bottom spines are drawn by hand, pushed out by the despine
           offset and trimmed to the outermost y ticks / first and last crate tick
        4. crate names are drawn at the slot centers, rotated by `tick_rotation`
    "#]
    fn draw_boxplot(layout: &ChartLayout, output_path: &str) -> anyhow::Result<()> {
        let root = BitMapBackend::new(output_path, (*layout.width_px(), *layout.height_px()))
            .into_drawing_area();
        root.fill(&WHITE)?;

        let tick_px: f64 = layout.points_to_px(TICK_FONT_PT);
        let label_px: f64 = layout.points_to_px(LABEL_FONT_PT);
        let line_px: u32 = layout.points_to_px(LINE_WIDTH_PT).round().max(1.0) as u32;
        let offset_px: i32 = *layout.despine_offset_px() as i32;

        let vertical_ticks: bool = matches!(*layout.tick_rotation(), 90 | 270);
        let longest_tick: f64 = layout
            .x_tick_labels()
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(1) as f64;

        let tick_extent: f64 = if vertical_ticks {
            tick_px * 0.62 * longest_tick
        } else {
            tick_px * 1.5
        };

        let x_label_area: u32 = (tick_extent + label_px * 2.0) as u32 + offset_px as u32;
        let y_label_area: u32 = (tick_px * 3.5 + label_px * 2.0) as u32 + offset_px as u32;

        let (x_lo, x_hi) = layout.x_range();
        let (y_lo, y_hi) = *layout.y_range();

        let mut chart = ChartBuilder::on(&root)
            .margin((label_px * 0.5) as u32)
            .x_label_area_size(x_label_area)
            .y_label_area_size(y_label_area)
            .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

        /* x tick labels are drawn by hand at the category centers */
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(0)
            .y_labels(Y_LABEL_COUNT)
            .x_desc(layout.x_label().as_str())
            .y_desc(layout.y_label().as_str())
            .axis_style(ShapeStyle::from(&TRANSPARENT))
            .bold_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(line_px))
            .light_line_style(ShapeStyle::from(&TRANSPARENT))
            .set_all_tick_mark_size(0)
            .y_label_style(("sans-serif", tick_px).into_font().color(&TEXT_COLOR))
            .axis_desc_style(("sans-serif", label_px).into_font().color(&TEXT_COLOR))
            .y_label_formatter(&|y| format!("{:.2}", y))
            .draw()?;

        let edge_style: ShapeStyle = ShapeStyle::from(&EDGE_COLOR).stroke_width(line_px);
        let legend_half: i32 = (tick_px * 0.4) as i32;

        /* Filled boxes, one series per algorithm so that each gets a legend entry */
        for (hue_index, hue_label) in layout.hue_labels().iter().enumerate() {
            let color: RGBColor = Self::hue_color(hue_index);

            chart
                .draw_series(
                    layout
                        .boxes()
                        .iter()
                        .filter(|b| *b.hue_index() == hue_index)
                        .map(|b| {
                            let half: f64 = b.width() / 2.0;
                            Rectangle::new(
                                [
                                    (b.center_x() - half, *b.stats().q3()),
                                    (b.center_x() + half, *b.stats().q1()),
                                ],
                                color.filled(),
                            )
                        }),
                )?
                .label(hue_label.as_str())
                .legend(move |(x, y)| {
                    Rectangle::new(
                        [(x, y - legend_half), (x + legend_half * 2, y + legend_half)],
                        color.filled(),
                    )
                });
        }

        /* Box outlines */
        chart.draw_series(layout.boxes().iter().map(|b| {
            let half: f64 = b.width() / 2.0;
            Rectangle::new(
                [
                    (b.center_x() - half, *b.stats().q3()),
                    (b.center_x() + half, *b.stats().q1()),
                ],
                edge_style,
            )
        }))?;

        /* Medians, whiskers and caps */
        chart.draw_series(layout.boxes().iter().flat_map(|b| {
            let x: f64 = *b.center_x();
            let half: f64 = b.width() / 2.0;
            let cap: f64 = half * 0.5;
            let stats = b.stats();

            vec![
                PathElement::new(vec![(x - half, *stats.median()), (x + half, *stats.median())], edge_style),
                PathElement::new(vec![(x, *stats.q1()), (x, *stats.whisker_low())], edge_style),
                PathElement::new(vec![(x, *stats.q3()), (x, *stats.whisker_high())], edge_style),
                PathElement::new(
                    vec![(x - cap, *stats.whisker_low()), (x + cap, *stats.whisker_low())],
                    edge_style,
                ),
                PathElement::new(
                    vec![(x - cap, *stats.whisker_high()), (x + cap, *stats.whisker_high())],
                    edge_style,
                ),
            ]
        }))?;

        /* Fliers */
        let flier_radius: i32 = (tick_px * 0.2).max(2.0) as i32;
        chart.draw_series(layout.boxes().iter().flat_map(|b| {
            let x: f64 = *b.center_x();
            b.stats()
                .fliers()
                .iter()
                .map(move |v| Circle::new((x, *v), flier_radius, edge_style))
                .collect::<Vec<_>>()
        }))?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(WHITE.mix(0.8))
            .border_style(&GRID_COLOR)
            .label_font(("sans-serif", tick_px).into_font().color(&TEXT_COLOR))
            .draw()?;

        /* Despined axes, trimmed to the outermost ticks */
        let (x_pixels, y_pixels) = chart.plotting_area().get_pixel_range();
        let spine_style: ShapeStyle = ShapeStyle::from(&TEXT_COLOR).stroke_width(line_px);
        let left_x: i32 = x_pixels.start - offset_px;
        let bottom_y: i32 = y_pixels.end + offset_px;

        let y_ticks: Vec<f64> = Self::y_tick_values(y_lo, y_hi);
        if let (Some(lowest), Some(highest)) = (y_ticks.first(), y_ticks.last()) {
            let (_, spine_bottom) = chart.backend_coord(&(x_lo, *lowest));
            let (_, spine_top) = chart.backend_coord(&(x_lo, *highest));

            root.draw(&PathElement::new(
                vec![(left_x, spine_top), (left_x, spine_bottom)],
                spine_style,
            ))?;
        }

        let tick_style: TextStyle = ("sans-serif", tick_px)
            .into_font()
            .transform(Self::tick_transform(*layout.tick_rotation()))
            .color(&TEXT_COLOR)
            .pos(Self::tick_anchor(*layout.tick_rotation()));
        let label_gap: i32 = (tick_px * 0.3) as i32;

        let ticks: Vec<f64> = layout.tick_positions();
        for (tick_x, tick_label) in ticks.iter().zip(layout.x_tick_labels()) {
            let (px, _) = chart.backend_coord(&(*tick_x, y_lo));
            root.draw(&Text::new(
                tick_label.as_str(),
                (px, bottom_y + label_gap),
                tick_style.clone(),
            ))?;
        }

        if let (Some(first), Some(last)) = (ticks.first(), ticks.last()) {
            let (first_x, _) = chart.backend_coord(&(*first, y_lo));
            let (last_x, _) = chart.backend_coord(&(*last, y_lo));

            root.draw(&PathElement::new(
                vec![(first_x, bottom_y), (last_x, bottom_y)],
                spine_style,
            ))?;
        }

        root.present()?;
        Ok(())
    }
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn generate_grouped_boxplot(
        &self,
        layout: &ChartLayout,
        output_path: &std::path::Path,
    ) -> anyhow::Result<()> {
        /* Create parent directory if it doesn't exist */
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let output_path_str: String = output_path.to_string_lossy().to_string();
        let layout: ChartLayout = layout.clone();

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || Self::draw_boxplot(&layout, &output_path_str));

        let drawing_result: Result<(), anyhow::Error> = handle.await.context(
            "[ChartServiceImpl->generate_grouped_boxplot] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result
            .context("[ChartServiceImpl->generate_grouped_boxplot] drawing/present failed")?;

        info!("Boxplot generated successfully: {:?}", output_path);

        Ok(())
    }
}
