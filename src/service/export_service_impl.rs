use crate::common::*;

use plotters::element::Pie;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::dto::{dashboard_document::*, panel::*};
use crate::enums::insight_tone::*;
use crate::env_configuration::env_config::*;
use crate::model::configs::export_config::*;
use crate::traits::service_traits::export_service::*;
use crate::utils_modules::format_utils::*;

/* Interactive tools removed from / added to the plotly mode bar. */
const REMOVED_TOOLS: [&str; 2] = ["lasso2d", "select2d"];
const ADDED_TOOLS: [&str; 2] = ["drawline", "eraseshape"];

const VERTICAL_SPACING: f64 = 0.08;

const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<title>{{TITLE}}</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js" charset="utf-8"></script>
</head>
<body style="margin:0;background:rgb(248,249,250);">
<div id="dashboard" style="width:100%;max-width:1920px;margin:0 auto;"></div>
<script>
const figure = {{FIGURE_JSON}};
const config = {{CONFIG_JSON}};
Plotly.newPlot("dashboard", figure.data, figure.layout, config);
</script>
<footer style="text-align:center;font-family:Arial,sans-serif;font-size:11px;color:#7f8c8d;">
Generated at {{GENERATED_AT}}
</footer>
</body>
</html>
"#;

#[derive(Debug, Clone, new)]
pub struct ExportServiceImpl {
    config: ExportConfig,
}

impl ExportServiceImpl {
    #[doc = "
        Paper-coordinate y domains of the three grid rows, top-down, with a
        fixed vertical gap between rows. Plotly measures y from the bottom.
    "]
    fn row_domains(row_heights: &[f64; 3], spacing: f64) -> [[f64; 2]; 3] {
        let usable: f64 = 1.0 - spacing * 2.0;
        let scaled: Vec<f64> = row_heights.iter().map(|h| h * usable).collect();

        let top: [f64; 2] = [1.0 - scaled[0], 1.0];
        let middle: [f64; 2] = [top[0] - spacing - scaled[1], top[0] - spacing];
        let bottom: [f64; 2] = [middle[0] - spacing - scaled[2], middle[0] - spacing];

        [top, middle, bottom]
    }

    #[doc = "
        Pixel bounds of the three grid rows of the static raster, below the
        title band. Top-down, end-exclusive.
    "]
    pub(crate) fn grid_row_bounds(
        height: u32,
        header_band: u32,
        ratios: &[f64; 3],
    ) -> [(u32, u32); 3] {
        let available: f64 = (height - header_band) as f64;

        let first_end: u32 = header_band + (ratios[0] * available) as u32;
        let second_end: u32 = first_end + (ratios[1] * available) as u32;

        [
            (header_band, first_end),
            (first_end, second_end),
            (second_end, height),
        ]
    }

    fn insight_fill(tone: InsightTone) -> &'static str {
        match tone {
            InsightTone::Positive => "rgba(39, 174, 96, 0.15)",
            InsightTone::Neutral => "rgba(243, 156, 18, 0.15)",
            InsightTone::Warning => "rgba(231, 76, 60, 0.15)",
        }
    }

    fn figure_json(&self, document: &DashboardDocument) -> Value {
        let rows: [[f64; 2]; 3] = Self::row_domains(document.row_heights(), VERTICAL_SPACING);
        let left_col: [f64; 2] = [0.0, 0.45];
        let right_col: [f64; 2] = [0.55, 1.0];

        let mut traces: Vec<Value> = Vec::new();

        for panel in document.panels() {
            match panel {
                Panel::Kpi(kpi) => {
                    traces.push(json!({
                        "type": "indicator",
                        "mode": "number+delta+gauge",
                        "value": kpi.total_value(),
                        "title": {"text": "Total Portfolio Value<br><sub>vs Industry Benchmark</sub>", "font": {"size": 20}},
                        "number": {"prefix": "$", "font": {"size": 42}},
                        "delta": {
                            "reference": kpi.benchmark_total(),
                            "relative": true,
                            "valueformat": ".1%",
                            "increasing": {"color": "#2ecc71"},
                            "decreasing": {"color": "#e74c3c"}
                        },
                        "gauge": {
                            "axis": {"range": [Value::Null, kpi.target_total()]},
                            "bar": {"color": "rgb(31, 119, 180)"},
                            "steps": [
                                {"range": [0.0, kpi.benchmark_total()], "color": "rgba(231, 76, 60, 0.2)"},
                                {"range": [kpi.benchmark_total(), kpi.target_total()], "color": "rgba(46, 204, 113, 0.2)"}
                            ],
                            "threshold": {
                                "line": {"color": "red", "width": 4},
                                "thickness": 0.75,
                                "value": kpi.benchmark_total()
                            }
                        },
                        "domain": {"x": left_col, "y": rows[0]}
                    }));
                }
                Panel::Bar(bar) => {
                    let texts: Vec<String> = bar
                        .values()
                        .iter()
                        .zip(bar.vs_benchmark().iter())
                        .map(|(value, pct)| {
                            format!("{}<br>{}", format_currency(*value), format_signed_percent(*pct))
                        })
                        .collect();

                    traces.push(json!({
                        "type": "bar",
                        "name": "Actual",
                        "x": bar.categories(),
                        "y": bar.values(),
                        "text": texts,
                        "textposition": "outside",
                        "marker": {
                            "color": bar.bar_colors(),
                            "line": {"color": "rgb(8,48,107)", "width": 1.5}
                        },
                        "xaxis": "x",
                        "yaxis": "y"
                    }));

                    traces.push(json!({
                        "type": "scatter",
                        "mode": "lines",
                        "name": "Industry Benchmark",
                        "x": bar.categories(),
                        "y": vec![bar.benchmark(); bar.categories().len()],
                        "line": {"color": "orange", "width": 3, "dash": "dash"},
                        "xaxis": "x",
                        "yaxis": "y"
                    }));

                    traces.push(json!({
                        "type": "scatter",
                        "mode": "lines",
                        "name": "Target",
                        "x": bar.categories(),
                        "y": vec![bar.target(); bar.categories().len()],
                        "line": {"color": "green", "width": 3, "dash": "dot"},
                        "xaxis": "x",
                        "yaxis": "y"
                    }));
                }
                Panel::Trend(trend) => {
                    let mut zone_x: Vec<String> = trend.period_labels().clone();
                    zone_x.extend(trend.period_labels().iter().rev().cloned());
                    let mut zone_y: Vec<f64> = trend.target_trend().clone();
                    zone_y.extend(trend.benchmark_trend().iter().rev().copied());

                    traces.push(json!({
                        "type": "scatter",
                        "name": "Target Zone",
                        "x": zone_x,
                        "y": zone_y,
                        "fill": "toself",
                        "fillcolor": "rgba(46, 204, 113, 0.1)",
                        "line": {"color": "rgba(255,255,255,0)"},
                        "hoverinfo": "skip",
                        "xaxis": "x2",
                        "yaxis": "y2"
                    }));

                    traces.push(json!({
                        "type": "scatter",
                        "mode": "lines+markers",
                        "name": format!("Projection ({:+.0}%/period)", trend.growth_rate() * 100.0),
                        "x": trend.period_labels(),
                        "y": trend.projected_values(),
                        "line": {"color": "rgb(31, 119, 180)", "width": 4},
                        "marker": {"size": 12, "color": "rgb(31, 119, 180)", "line": {"color": "white", "width": 2}},
                        "xaxis": "x2",
                        "yaxis": "y2"
                    }));

                    traces.push(json!({
                        "type": "scatter",
                        "mode": "lines",
                        "name": "Benchmark Trend",
                        "x": trend.period_labels(),
                        "y": trend.benchmark_trend(),
                        "line": {"color": "orange", "width": 2, "dash": "dash"},
                        "xaxis": "x2",
                        "yaxis": "y2"
                    }));
                }
                Panel::Breakdown(breakdown) => {
                    let colors: Vec<&str> =
                        breakdown.statuses().iter().map(|s| s.color()).collect();

                    traces.push(json!({
                        "type": "pie",
                        "labels": breakdown.labels(),
                        "values": breakdown.values(),
                        "hole": 0.45,
                        "marker": {"colors": colors, "line": {"color": "white", "width": 3}},
                        "textinfo": "label+percent",
                        "textposition": "outside",
                        "pull": breakdown.pulls(),
                        "domain": {"x": right_col, "y": rows[1]},
                        "showlegend": false
                    }));
                }
                Panel::Drilldown(drilldown) => {
                    let metrics: Vec<String> =
                        drilldown.rows().iter().map(|r| r.metric.clone()).collect();
                    let currents: Vec<String> = drilldown
                        .rows()
                        .iter()
                        .map(|r| format_currency(r.value))
                        .collect();
                    let benchmarks: Vec<String> = drilldown
                        .rows()
                        .iter()
                        .map(|r| format_currency(r.benchmark))
                        .collect();
                    let targets: Vec<String> = drilldown
                        .rows()
                        .iter()
                        .map(|r| format_currency(r.target))
                        .collect();
                    let deviations: Vec<String> = drilldown
                        .rows()
                        .iter()
                        .map(|r| format_signed_percent(r.vs_benchmark))
                        .collect();
                    let statuses: Vec<&str> =
                        drilldown.rows().iter().map(|r| r.status.label()).collect();
                    let actions: Vec<&str> =
                        drilldown.rows().iter().map(|r| r.action.label()).collect();
                    let status_fills: Vec<&str> = drilldown
                        .rows()
                        .iter()
                        .map(|r| r.status.cell_fill())
                        .collect();

                    traces.push(json!({
                        "type": "table",
                        "header": {
                            "values": ["<b>Metric</b>", "<b>Current</b>", "<b>Benchmark</b>", "<b>Target</b>",
                                       "<b>vs Benchmark</b>", "<b>Status</b>", "<b>Action</b>"],
                            "fill": {"color": "rgb(31, 119, 180)"},
                            "font": {"color": "white", "size": 13},
                            "align": "left",
                            "height": 40
                        },
                        "cells": {
                            "values": [metrics, currents, benchmarks, targets, deviations, statuses, actions],
                            "fill": {"color": [
                                "white",
                                status_fills,
                                "white",
                                "white",
                                "white",
                                "white",
                                "white"
                            ]},
                            "font": {"size": 12},
                            "align": "left",
                            "height": 35
                        },
                        "columnwidth": [150, 100, 100, 100, 120, 140, 120],
                        "domain": {"x": [0.0, 1.0], "y": rows[2]}
                    }));
                }
                Panel::Placeholder => { /* reserved grid cell */ }
            }
        }

        let layout: Value = json!({
            "title": {
                "text": format!("<b>{}</b><br><sub>{}</sub>", document.title(), document.subtitle()),
                "x": 0.5,
                "xanchor": "center",
                "font": {"size": 26, "color": "#2c3e50"}
            },
            "showlegend": true,
            "legend": {"orientation": "h", "yanchor": "bottom", "y": 1.02, "xanchor": "right", "x": 1, "font": {"size": 11}},
            "height": self.config.image_height(),
            "font": {"family": "Arial, sans-serif", "size": 12},
            "plot_bgcolor": "white",
            "paper_bgcolor": "rgb(248, 249, 250)",
            "margin": {"t": 140, "b": 60, "l": 60, "r": 60},
            "hovermode": "closest",
            "xaxis": {"domain": right_col, "anchor": "y",
                      "showgrid": true, "gridcolor": "rgba(128, 128, 128, 0.2)",
                      "showline": true, "linewidth": 2, "linecolor": "rgb(204, 204, 204)"},
            "yaxis": {"domain": rows[0], "anchor": "x",
                      "showgrid": true, "gridcolor": "rgba(128, 128, 128, 0.2)",
                      "showline": true, "linewidth": 2, "linecolor": "rgb(204, 204, 204)"},
            "xaxis2": {"domain": left_col, "anchor": "y2",
                       "showgrid": true, "gridcolor": "rgba(128, 128, 128, 0.2)",
                       "showline": true, "linewidth": 2, "linecolor": "rgb(204, 204, 204)"},
            "yaxis2": {"domain": rows[1], "anchor": "x2",
                       "showgrid": true, "gridcolor": "rgba(128, 128, 128, 0.2)",
                       "showline": true, "linewidth": 2, "linecolor": "rgb(204, 204, 204)"},
            "annotations": [{
                "text": document.insight().text(),
                "xref": "paper", "yref": "paper",
                "x": 0.5, "y": 0.985,
                "xanchor": "center",
                "showarrow": false,
                "font": {"size": 13, "color": document.insight().tone().color()},
                "bgcolor": Self::insight_fill(*document.insight().tone()),
                "bordercolor": document.insight().tone().color(),
                "borderwidth": 2,
                "borderpad": 12
            }]
        });

        json!({"data": traces, "layout": layout})
    }

    fn renderer_config_json(&self) -> Value {
        json!({
            "displayModeBar": true,
            "displaylogo": false,
            "modeBarButtonsToAdd": ADDED_TOOLS,
            "modeBarButtonsToRemove": REMOVED_TOOLS,
            "toImageButtonOptions": {
                "format": "png",
                "filename": "account_health_dashboard",
                "width": self.config.image_width(),
                "height": self.config.image_height(),
                "scale": self.config.image_scale()
            }
        })
    }

    fn load_template() -> String {
        let template_path: &str = &DASHBOARD_TEMPLATE_PATH;

        match fs::read_to_string(template_path) {
            Ok(template) => template,
            Err(_) => DEFAULT_TEMPLATE.to_string(),
        }
    }

    fn render_html(&self, document: &DashboardDocument) -> anyhow::Result<String> {
        let figure: Value = self.figure_json(document);
        let config: Value = self.renderer_config_json();

        let html_content: String = Self::load_template()
            .replace("{{TITLE}}", document.title())
            .replace("{{FIGURE_JSON}}", &serde_json::to_string(&figure)?)
            .replace("{{CONFIG_JSON}}", &serde_json::to_string(&config)?)
            .replace(
                "{{GENERATED_AT}}",
                &Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            );

        Ok(html_content)
    }
}

#[async_trait]
impl ExportService for ExportServiceImpl {
    async fn export_interactive(&self, document: &DashboardDocument) -> anyhow::Result<PathBuf> {
        let output_path: PathBuf = PathBuf::from(self.config.html_output_path());

        if let Some(parent) = output_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let html_content: String = self.render_html(document)?;

        tokio::fs::write(&output_path, html_content)
            .await
            .context("[ExportServiceImpl->export_interactive] failed to write HTML document")?;

        info!(
            "Interactive dashboard written successfully: {:?}",
            output_path
        );

        Ok(output_path)
    }

    async fn export_static(&self, document: &DashboardDocument) -> anyhow::Result<PathBuf> {
        let output_path: PathBuf = PathBuf::from(self.config.image_output_path());

        if let Some(parent) = output_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let document: DashboardDocument = document.clone();
        let config: ExportConfig = self.config.clone();
        let path_for_render: PathBuf = output_path.clone();

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || render_static_image(&document, &config, &path_for_render));

        let drawing_result: Result<(), anyhow::Error> = handle.await.context(
            "[ExportServiceImpl->export_static] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result.context("[ExportServiceImpl->export_static] drawing/present failed")?;

        info!("Static dashboard image written successfully: {:?}", output_path);

        Ok(output_path)
    }
}

/* ---- synchronous plotters rendering below ---- */

const THEME_BG: RGBColor = RGBColor(248, 249, 250);
const THEME_TEXT: RGBColor = RGBColor(44, 62, 80);
const THEME_GRID: RGBColor = RGBColor(204, 204, 204);
const ACTUAL_BLUE: RGBColor = RGBColor(31, 119, 180);
const STATUS_GREEN: RGBColor = RGBColor(46, 204, 113);
const STATUS_AMBER: RGBColor = RGBColor(243, 156, 18);
const STATUS_RED: RGBColor = RGBColor(231, 76, 60);
const BENCHMARK_ORANGE: RGBColor = RGBColor(255, 165, 0);
const TARGET_GREEN: RGBColor = RGBColor(0, 128, 0);

fn status_rgb(color_hex: &str) -> RGBColor {
    match color_hex {
        "#2ecc71" => STATUS_GREEN,
        "#f39c12" => STATUS_AMBER,
        _ => STATUS_RED,
    }
}

fn render_static_image(
    document: &DashboardDocument,
    config: &ExportConfig,
    output_path: &Path,
) -> anyhow::Result<()> {
    let scale: u32 = *config.image_scale();
    let width: u32 = config.image_width() * scale;
    let height: u32 = config.image_height() * scale;

    let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
    root.fill(&THEME_BG)?;

    let header_band: u32 = height / 10;

    draw_header(&root, document, width, header_band, scale)?;

    let row_bounds: [(u32, u32); 3] =
        ExportServiceImpl::grid_row_bounds(height, header_band, document.row_heights());

    let cells = root.split_by_breakpoints(
        [width / 2],
        [header_band, row_bounds[0].1, row_bounds[1].1],
    );

    for panel in document.panels() {
        match panel {
            Panel::Kpi(kpi) => draw_kpi(&cells[2], kpi, scale)?,
            Panel::Bar(bar) => draw_bar(&cells[3], bar, scale)?,
            Panel::Trend(trend) => draw_trend(&cells[4], trend, scale)?,
            Panel::Breakdown(breakdown) => draw_breakdown(&cells[5], breakdown, scale)?,
            Panel::Drilldown(drilldown) => {
                let table_area = root.margin(row_bounds[2].0, 0, 0, 0);
                draw_drilldown(&table_area, drilldown, scale)?;
            }
            Panel::Placeholder => { /* reserved grid cell */ }
        }
    }

    root.present()?;

    Ok(())
}

type Area<'a> = DrawingArea<BitMapBackend<'a>, plotters::coord::Shift>;

fn centered_style(size: u32, color: &RGBColor) -> TextStyle<'static> {
    ("sans-serif", size)
        .into_font()
        .color(color)
        .pos(Pos::new(HPos::Center, VPos::Center))
}

fn draw_header(
    root: &Area,
    document: &DashboardDocument,
    width: u32,
    header_band: u32,
    scale: u32,
) -> anyhow::Result<()> {
    let center_x: i32 = (width / 2) as i32;

    root.draw(&Text::new(
        document.title().clone(),
        (center_x, (header_band / 3) as i32),
        centered_style(26 * scale, &THEME_TEXT),
    ))?;

    root.draw(&Text::new(
        document.subtitle().clone(),
        (center_x, (header_band * 3 / 5) as i32),
        centered_style(13 * scale, &THEME_TEXT),
    ))?;

    let insight_color: RGBColor = status_rgb(document.insight().tone().color());
    root.draw(&Text::new(
        document.insight().text().clone(),
        (center_x, (header_band * 5 / 6) as i32),
        centered_style(13 * scale, &insight_color),
    ))?;

    Ok(())
}

fn draw_kpi(area: &Area, kpi: &crate::dto::panel::kpi_panel::KpiPanel, scale: u32) -> anyhow::Result<()> {
    let (w, h) = area.dim_in_pixel();
    let center_x: i32 = (w / 2) as i32;

    area.draw(&Text::new(
        "Total Portfolio Value",
        (center_x, (h / 6) as i32),
        centered_style(18 * scale, &THEME_TEXT),
    ))?;

    area.draw(&Text::new(
        format_currency(*kpi.total_value()),
        (center_x, (h * 2 / 5) as i32),
        centered_style(38 * scale, &ACTUAL_BLUE),
    ))?;

    let delta_pct: f64 =
        (kpi.total_value() - kpi.benchmark_total()) / kpi.benchmark_total() * 100.0;
    let delta_color: RGBColor = if delta_pct >= 0.0 { STATUS_GREEN } else { STATUS_RED };

    area.draw(&Text::new(
        format!("{} vs benchmark", format_signed_percent(delta_pct)),
        (center_x, (h * 11 / 20) as i32),
        centered_style(15 * scale, &delta_color),
    ))?;

    /* Banded gauge: [0, benchmark_total] / [benchmark_total, target_total],
    with a marker at the current total. */
    let gauge_top: i32 = (h * 7 / 10) as i32;
    let gauge_bottom: i32 = gauge_top + (10 * scale) as i32;
    let gauge_left: i32 = (w / 10) as i32;
    let gauge_right: i32 = (w * 9 / 10) as i32;
    let gauge_span: f64 = (gauge_right - gauge_left) as f64;
    let gauge_max: f64 = *kpi.target_total();

    let to_px = |value: f64| -> i32 {
        let ratio: f64 = (value / gauge_max).clamp(0.0, 1.0);
        gauge_left + (ratio * gauge_span) as i32
    };

    area.draw(&Rectangle::new(
        [(gauge_left, gauge_top), (to_px(*kpi.benchmark_total()), gauge_bottom)],
        STATUS_RED.mix(0.2).filled(),
    ))?;
    area.draw(&Rectangle::new(
        [(to_px(*kpi.benchmark_total()), gauge_top), (gauge_right, gauge_bottom)],
        STATUS_GREEN.mix(0.2).filled(),
    ))?;
    area.draw(&Rectangle::new(
        [(gauge_left, gauge_top), (to_px(*kpi.total_value()), gauge_bottom)],
        ACTUAL_BLUE.filled(),
    ))?;

    Ok(())
}

fn draw_bar(area: &Area, bar: &crate::dto::panel::bar_panel::BarPanel, scale: u32) -> anyhow::Result<()> {
    let categories: Vec<String> = bar.categories().clone();
    let n: usize = categories.len();
    if n == 0 {
        return Ok(());
    }

    let max_value: f64 = bar
        .values()
        .iter()
        .copied()
        .fold(*bar.target(), f64::max);
    let min_value: f64 = bar.values().iter().copied().fold(0.0, f64::min);
    let y_max: f64 = max_value * 1.15;
    let y_min: f64 = if min_value < 0.0 { min_value * 1.15 } else { 0.0 };

    let mut chart = ChartBuilder::on(area)
        .caption(
            "Performance vs Benchmarks",
            ("sans-serif", 18 * scale).into_font().color(&THEME_TEXT),
        )
        .margin(15 * scale)
        .x_label_area_size(30 * scale)
        .y_label_area_size(45 * scale)
        .build_cartesian_2d(-0.5f64..(n as f64 - 0.5), y_min..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(THEME_GRID.mix(0.3))
        .x_labels(n)
        .x_label_formatter(&|x| {
            let idx: usize = x.round().max(0.0) as usize;
            categories.get(idx).cloned().unwrap_or_default()
        })
        .x_label_style(("sans-serif", 11 * scale).into_font().color(&THEME_TEXT))
        .y_label_style(("sans-serif", 11 * scale).into_font().color(&THEME_TEXT))
        .draw()?;

    chart.draw_series(bar.values().iter().enumerate().map(|(i, value)| {
        let color: RGBColor = if *value >= *bar.benchmark() {
            STATUS_GREEN
        } else {
            STATUS_RED
        };
        Rectangle::new(
            [(i as f64 - 0.35, 0.0), (i as f64 + 0.35, *value)],
            color.filled(),
        )
    }))?;

    chart.draw_series(LineSeries::new(
        [(-0.5f64, *bar.benchmark()), (n as f64 - 0.5, *bar.benchmark())],
        ShapeStyle::from(&BENCHMARK_ORANGE).stroke_width(3),
    ))?;

    chart.draw_series(LineSeries::new(
        [(-0.5f64, *bar.target()), (n as f64 - 0.5, *bar.target())],
        ShapeStyle::from(&TARGET_GREEN).stroke_width(3),
    ))?;

    Ok(())
}

fn draw_trend(area: &Area, trend: &crate::dto::panel::trend_panel::TrendPanel, scale: u32) -> anyhow::Result<()> {
    let labels: Vec<String> = trend.period_labels().clone();
    let periods: usize = labels.len();
    if periods < 2 {
        return Ok(());
    }

    let y_max: f64 = trend
        .target_trend()
        .iter()
        .chain(trend.projected_values().iter())
        .copied()
        .fold(f64::MIN, f64::max)
        * 1.1;
    let y_min: f64 = trend
        .benchmark_trend()
        .iter()
        .chain(trend.projected_values().iter())
        .copied()
        .fold(f64::MAX, f64::min)
        * 0.9;

    let mut chart = ChartBuilder::on(area)
        .caption(
            format!(
                "Trend Projection with Targets ({:+.0}%/period)",
                trend.growth_rate() * 100.0
            ),
            ("sans-serif", 18 * scale).into_font().color(&THEME_TEXT),
        )
        .margin(15 * scale)
        .x_label_area_size(30 * scale)
        .y_label_area_size(45 * scale)
        .build_cartesian_2d(0..periods - 1, y_min..y_max)?;

    chart
        .configure_mesh()
        .light_line_style(THEME_GRID.mix(0.3))
        .x_labels(periods)
        .x_label_formatter(&|x| labels.get(*x).cloned().unwrap_or_default())
        .x_label_style(("sans-serif", 11 * scale).into_font().color(&THEME_TEXT))
        .y_label_style(("sans-serif", 11 * scale).into_font().color(&THEME_TEXT))
        .draw()?;

    /* Target zone between the two reference trends. */
    let mut zone: Vec<(usize, f64)> = trend
        .target_trend()
        .iter()
        .enumerate()
        .map(|(i, y)| (i, *y))
        .collect();
    zone.extend(
        trend
            .benchmark_trend()
            .iter()
            .enumerate()
            .rev()
            .map(|(i, y)| (i, *y)),
    );
    chart.draw_series(std::iter::once(Polygon::new(
        zone,
        STATUS_GREEN.mix(0.1).filled(),
    )))?;

    chart.draw_series(LineSeries::new(
        trend
            .projected_values()
            .iter()
            .enumerate()
            .map(|(i, y)| (i, *y)),
        ShapeStyle::from(&ACTUAL_BLUE).stroke_width(4),
    ))?;

    chart.draw_series(LineSeries::new(
        trend
            .benchmark_trend()
            .iter()
            .enumerate()
            .map(|(i, y)| (i, *y)),
        ShapeStyle::from(&BENCHMARK_ORANGE).stroke_width(2),
    ))?;

    chart.draw_series(LineSeries::new(
        trend
            .target_trend()
            .iter()
            .enumerate()
            .map(|(i, y)| (i, *y)),
        ShapeStyle::from(&TARGET_GREEN).stroke_width(2),
    ))?;

    Ok(())
}

fn draw_breakdown(
    area: &Area,
    breakdown: &crate::dto::panel::breakdown_panel::BreakdownPanel,
    scale: u32,
) -> anyhow::Result<()> {
    let (w, h) = area.dim_in_pixel();

    area.draw(&Text::new(
        "Distribution & Drill-Down",
        ((w / 2) as i32, (15 * scale) as i32),
        centered_style(18 * scale, &THEME_TEXT),
    ))?;

    let center: (i32, i32) = ((w / 2) as i32, (h / 2) as i32);
    let radius: f64 = (w.min(h) as f64) * 0.3;
    let sizes: Vec<f64> = breakdown.values().clone();
    let colors: Vec<RGBColor> = breakdown
        .statuses()
        .iter()
        .map(|status| status_rgb(status.color()))
        .collect();
    let labels: Vec<String> = breakdown.labels().clone();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style(("sans-serif", 12 * scale).into_font().color(&THEME_TEXT));

    area.draw(&pie)?;

    Ok(())
}

fn draw_drilldown(
    area: &Area,
    drilldown: &crate::dto::panel::drilldown_panel::DrilldownPanel,
    scale: u32,
) -> anyhow::Result<()> {
    let (w, h) = area.dim_in_pixel();

    let header_style: TextStyle = ("sans-serif", 13 * scale)
        .into_font()
        .color(&WHITE);
    let cell_style: TextStyle = ("sans-serif", 12 * scale).into_font().color(&THEME_TEXT);

    let columns: [(&str, f64); 7] = [
        ("Metric", 0.02),
        ("Current", 0.22),
        ("Benchmark", 0.34),
        ("Target", 0.47),
        ("vs Benchmark", 0.59),
        ("Status", 0.73),
        ("Action", 0.87),
    ];

    let row_height: i32 = (22 * scale) as i32;
    let header_y: i32 = (10 * scale) as i32;

    area.draw(&Rectangle::new(
        [(0, 0), (w as i32, header_y + row_height)],
        ACTUAL_BLUE.filled(),
    ))?;

    for (label, x_frac) in columns {
        area.draw(&Text::new(
            label,
            ((w as f64 * x_frac) as i32, header_y),
            header_style.clone(),
        ))?;
    }

    let max_rows: usize = ((h as i32 - header_y - row_height) / row_height).max(0) as usize;

    for (row_idx, row) in drilldown.rows().iter().take(max_rows).enumerate() {
        let y: i32 = header_y + row_height * (row_idx as i32 + 1) + (6 * scale) as i32;

        let cells: [String; 7] = [
            row.metric.clone(),
            format_currency(row.value),
            format_currency(row.benchmark),
            format_currency(row.target),
            format_signed_percent(row.vs_benchmark),
            row.status.label().to_string(),
            row.action.label().to_string(),
        ];

        for ((_, x_frac), cell) in columns.iter().zip(cells.iter()) {
            area.draw(&Text::new(
                cell.clone(),
                ((w as f64 * x_frac) as i32, y),
                cell_style.clone(),
            ))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{dashboard_summary::*, insight_banner::*};
    use crate::dto::panel::kpi_panel::*;
    use crate::enums::insight_tone::*;

    fn document() -> DashboardDocument {
        DashboardDocument::new(
            "Executive Account Health Dashboard".to_string(),
            "subtitle".to_string(),
            vec![Panel::Kpi(KpiPanel::new(600.0, 660.0, 720.0)), Panel::Placeholder],
            [0.30, 0.35, 0.35],
            InsightBanner::new(InsightTone::Warning, "Action Required".to_string()),
            DashboardSummary::new(600.0, 660.0, 720.0, -9.1),
        )
    }

    #[test]
    fn row_domains_respect_heights_and_spacing() {
        let rows: [[f64; 2]; 3] =
            ExportServiceImpl::row_domains(&[0.30, 0.35, 0.35], 0.08);

        /* usable = 0.84 */
        assert!((rows[0][1] - 1.0).abs() < 1e-9);
        assert!((rows[0][1] - rows[0][0] - 0.252).abs() < 1e-9);
        assert!((rows[1][1] - rows[1][0] - 0.294).abs() < 1e-9);
        assert!((rows[2][1] - rows[2][0] - 0.294).abs() < 1e-9);
        assert!(rows[2][0].abs() < 1e-9);
    }

    #[test]
    fn grid_row_bounds_partition_the_canvas() {
        let bounds: [(u32, u32); 3] =
            ExportServiceImpl::grid_row_bounds(1300, 140, &[0.30, 0.35, 0.35]);

        assert_eq!(bounds[0], (140, 488));
        assert_eq!(bounds[1], (488, 894));
        assert_eq!(bounds[2], (894, 1300));
    }

    #[test]
    fn renderer_config_toggles_the_named_tools() {
        let service: ExportServiceImpl = ExportServiceImpl::new(ExportConfig::default());

        let config: Value = service.renderer_config_json();

        assert_eq!(config["modeBarButtonsToRemove"], json!(["lasso2d", "select2d"]));
        assert_eq!(config["modeBarButtonsToAdd"], json!(["drawline", "eraseshape"]));
        assert_eq!(config["toImageButtonOptions"]["width"], json!(1920));
        assert_eq!(config["toImageButtonOptions"]["height"], json!(1300));
        assert_eq!(config["toImageButtonOptions"]["scale"], json!(2));
    }

    #[test]
    fn html_embeds_figure_and_runtime_reference() {
        let service: ExportServiceImpl = ExportServiceImpl::new(ExportConfig::default());

        let html: String = service.render_html(&document()).unwrap();

        assert!(html.contains("cdn.plot.ly"));
        assert!(html.contains("\"indicator\""));
        assert!(html.contains("Action Required"));
        assert!(html.contains("lasso2d"));
        assert!(html.contains("drawline"));
    }

    #[tokio::test]
    async fn interactive_export_writes_the_document() {
        let dir = tempfile::tempdir().unwrap();
        let html_path: PathBuf = dir.path().join("dashboard.html");

        let config: ExportConfig = ExportConfig {
            html_output_path: html_path.to_string_lossy().to_string(),
            ..ExportConfig::default()
        };
        let service: ExportServiceImpl = ExportServiceImpl::new(config);

        let written: PathBuf = service.export_interactive(&document()).await.unwrap();

        assert_eq!(written, html_path);
        let html: String = std::fs::read_to_string(&html_path).unwrap();
        assert!(html.contains("Plotly.newPlot"));
    }
}
