// File: crates/scaling-plots/src/charts.rs
// Summary: The four report charts: row selection, per-program series, and rendering to PNG.

use std::path::{Path, PathBuf};

use anyhow::Result;
use plot_core::{Chart, Figure, FigureSize, RenderOptions, Series, SeriesStyle, TextSizes};
use tracing::{debug, warn};

use crate::config::{ProgramStyle, ReportConfig, WORKER_CPU, WORKER_IO, WORKER_MEM};
use crate::record::Metric;
use crate::table::BenchmarkTable;

/// Which legend text a series uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendLabel {
    Long,
    Short,
}

/// A chart of one worker type with one series per program.
#[derive(Clone, Copy, Debug)]
pub struct SinglePanel {
    pub file_name: &'static str,
    pub title: &'static str,
    pub worker_type: &'static str,
    pub metric: Metric,
    pub y_label: &'static str,
}

/// One panel per worker type, side by side, same metric everywhere.
#[derive(Clone, Copy, Debug)]
pub struct PerWorker {
    pub file_name: &'static str,
    pub worker_types: [&'static str; 3],
    pub metric: Metric,
    pub y_label: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub enum ChartPlan {
    Single(SinglePanel),
    PerWorker(PerWorker),
}

impl ChartPlan {
    pub fn file_name(&self) -> &'static str {
        match self {
            ChartPlan::Single(p) => p.file_name,
            ChartPlan::PerWorker(p) => p.file_name,
        }
    }

    /// Short purpose shown in the closing file list.
    pub fn purpose(&self) -> &'static str {
        match self {
            ChartPlan::Single(p) => match p.worker_type {
                WORKER_CPU => "CPU utilization scaling",
                WORKER_MEM => "Memory utilization scaling",
                WORKER_IO => "I/O CPU utilization scaling",
                _ => "Utilization scaling",
            },
            ChartPlan::PerWorker(_) => "Execution time comparison",
        }
    }
}

pub const SCALE_LABEL: &str = "Scale (Count)";
pub const PANEL_SCALE_LABEL: &str = "Scale";

/// The report's charts, in output order.
pub fn report_plans() -> [ChartPlan; 4] {
    [
        ChartPlan::Single(SinglePanel {
            file_name: "MT25081_cpu_vs_components.png",
            title: "CPU Utilization vs Scale - CPU Worker",
            worker_type: WORKER_CPU,
            metric: Metric::CpuPercent,
            y_label: "CPU Utilization (%)",
        }),
        ChartPlan::Single(SinglePanel {
            file_name: "MT25081_mem_vs_components.png",
            title: "Memory Utilization vs Scale - Memory Worker",
            worker_type: WORKER_MEM,
            metric: Metric::MemoryPercent,
            y_label: "Memory Utilization (%)",
        }),
        ChartPlan::Single(SinglePanel {
            file_name: "MT25081_io_vs_components.png",
            title: "CPU Utilization vs Scale - I/O Worker",
            worker_type: WORKER_IO,
            metric: Metric::CpuPercent,
            y_label: "CPU Utilization (%)",
        }),
        ChartPlan::PerWorker(PerWorker {
            file_name: "MT25081_time_vs_components.png",
            worker_types: [WORKER_CPU, WORKER_MEM, WORKER_IO],
            metric: Metric::ExecutionTime,
            y_label: "Time (seconds)",
        }),
    ]
}

/// Known programs first (always present), then any other program in first-seen order.
pub fn program_styles(table: &BenchmarkTable, cfg: &ReportConfig) -> Vec<ProgramStyle> {
    let mut styles = cfg.programs.clone();
    let extras = table.programs().into_iter().filter(|p| cfg.style_of(p).is_none());
    for (nth, program) in extras.enumerate() {
        styles.push(cfg.fallback_style(program, nth));
    }
    styles
}

/// One series per program for rows of `worker_type`, points sorted by scale.
/// A program without matching rows yields an empty series.
pub fn program_series(
    table: &BenchmarkTable,
    worker_type: &str,
    metric: Metric,
    cfg: &ReportConfig,
    label: LegendLabel,
) -> Vec<Series> {
    program_styles(table, cfg)
        .into_iter()
        .map(|style| {
            let data = table
                .select(worker_type, &style.program)
                .map(|r| (r.scale as f64, metric.value(r)))
                .collect();
            let text = match label {
                LegendLabel::Long => style.label.clone(),
                LegendLabel::Short => style.short_label.clone(),
            };
            let mut series = Series::with_data(text, data).with_style(SeriesStyle {
                color: style.color,
                marker: style.marker,
                line_width: cfg.line_width,
                marker_size: cfg.marker_size,
            });
            series.sort_by_x();
            if series.is_empty() {
                warn!(worker_type, program = %style.program, column = metric.column(), "no rows for series");
            }
            series
        })
        .collect()
}

fn panel(table: &BenchmarkTable, cfg: &ReportConfig, worker_type: &str, metric: Metric, label: LegendLabel) -> Chart {
    let mut chart = Chart::new();
    for s in program_series(table, worker_type, metric, cfg, label) {
        chart.add_series(s);
    }
    chart.autoscale();
    chart
}

pub fn build_single(table: &BenchmarkTable, plan: &SinglePanel, cfg: &ReportConfig) -> Chart {
    let mut chart = panel(table, cfg, plan.worker_type, plan.metric, LegendLabel::Long).with_title(plan.title);
    chart.x_axis.label = SCALE_LABEL.to_string();
    chart.y_axis.label = plan.y_label.to_string();
    chart
}

pub fn build_per_worker(table: &BenchmarkTable, plan: &PerWorker, cfg: &ReportConfig) -> Figure {
    let panels = plan
        .worker_types
        .iter()
        .map(|worker| {
            let mut chart = panel(table, cfg, worker, plan.metric, LegendLabel::Short)
                .with_title(format!("Execution Time - {} Worker", worker.to_uppercase()));
            chart.x_axis.label = PANEL_SCALE_LABEL.to_string();
            chart.y_axis.label = plan.y_label.to_string();
            chart
        })
        .collect();
    Figure::row(panels)
}

pub fn single_options(cfg: &ReportConfig) -> RenderOptions {
    RenderOptions {
        size: FigureSize::new(cfg.chart_size.0, cfg.chart_size.1, cfg.dpi),
        text: TextSizes { title: 14.0, label: 12.0, tick: 10.0, legend: 11.0 },
        ..RenderOptions::default()
    }
}

pub fn figure_options(cfg: &ReportConfig) -> RenderOptions {
    RenderOptions {
        size: FigureSize::new(cfg.figure_size.0, cfg.figure_size.1, cfg.dpi),
        text: TextSizes { title: 12.0, label: 11.0, tick: 10.0, legend: 10.0 },
        ..RenderOptions::default()
    }
}

/// Build and write one chart into `out_dir`, replacing any existing file.
pub fn render_plan(table: &BenchmarkTable, plan: &ChartPlan, cfg: &ReportConfig, out_dir: &Path) -> Result<PathBuf> {
    let out = out_dir.join(plan.file_name());
    match plan {
        ChartPlan::Single(p) => build_single(table, p, cfg).render_to_png(&single_options(cfg), &out)?,
        ChartPlan::PerWorker(p) => build_per_worker(table, p, cfg).render_to_png(&figure_options(cfg), &out)?,
    }
    debug!(path = %out.display(), "chart written");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::BenchmarkRecord;

    fn rec(program: &str, worker: &str, scale: u32, cpu: f64, mem: f64, time: f64) -> BenchmarkRecord {
        BenchmarkRecord {
            program: program.into(),
            worker_type: worker.into(),
            scale,
            avg_cpu_percent: cpu,
            avg_memory_percent: mem,
            execution_time_sec: time,
        }
    }

    #[test]
    fn cpu_series_sorted_and_filtered() {
        let table = BenchmarkTable::new(vec![
            rec("progA", "cpu", 8, 76.0, 3.08, 4.0),
            rec("progA", "mem", 4, 99.0, 2.0, 9.0),
            rec("progA", "cpu", 2, 10.0, 1.0, 5.0),
            rec("progB", "cpu", 2, 50.0, 0.4, 3.0),
        ]);
        let cfg = ReportConfig::default();
        let series = program_series(&table, "cpu", Metric::CpuPercent, &cfg, LegendLabel::Long);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, "Program A (Processes)");
        assert_eq!(series[0].data_xy, vec![(2.0, 10.0), (8.0, 76.0)]);
        assert_eq!(series[1].label, "Program B (Threads)");
        assert_eq!(series[1].data_xy, vec![(2.0, 50.0)]);
    }

    #[test]
    fn missing_worker_type_gives_empty_series() {
        let table = BenchmarkTable::new(vec![rec("progA", "cpu", 2, 10.0, 1.0, 5.0)]);
        let cfg = ReportConfig::default();
        let series = program_series(&table, "io", Metric::CpuPercent, &cfg, LegendLabel::Short);
        assert_eq!(series.len(), 2);
        assert!(series.iter().all(|s| s.is_empty()));
        assert_eq!(series[1].label, "Threads");
    }

    #[test]
    fn unknown_programs_follow_known_ones() {
        let table = BenchmarkTable::new(vec![
            rec("progZ", "cpu", 2, 1.0, 1.0, 1.0),
            rec("progB", "cpu", 2, 2.0, 1.0, 1.0),
            rec("progY", "cpu", 4, 3.0, 1.0, 1.0),
        ]);
        let cfg = ReportConfig::default();
        let names: Vec<String> = program_styles(&table, &cfg).into_iter().map(|s| s.program).collect();
        assert_eq!(names, vec!["progA", "progB", "progZ", "progY"]);
    }

    #[test]
    fn duplicate_scales_keep_file_order() {
        let table = BenchmarkTable::new(vec![
            rec("progA", "mem", 4, 0.0, 2.0, 0.0),
            rec("progA", "mem", 2, 0.0, 1.0, 0.0),
            rec("progA", "mem", 4, 0.0, 3.0, 0.0),
        ]);
        let series = program_series(&table, "mem", Metric::MemoryPercent, &ReportConfig::default(), LegendLabel::Long);
        assert_eq!(series[0].data_xy, vec![(2.0, 1.0), (4.0, 2.0), (4.0, 3.0)]);
    }

    #[test]
    fn time_figure_has_three_panels_in_fixed_order() {
        let table = BenchmarkTable::new(vec![rec("progA", "io", 2, 0.0, 0.0, 45.0)]);
        let plans = report_plans();
        let ChartPlan::PerWorker(plan) = &plans[3] else { panic!("fourth plan is the time figure") };
        let fig = build_per_worker(&table, plan, &ReportConfig::default());
        let titles: Vec<&str> = fig.panels.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Execution Time - CPU Worker", "Execution Time - MEM Worker", "Execution Time - IO Worker"]);
        assert!(fig.panels[0].series.iter().all(|s| s.is_empty()));
        assert_eq!(fig.panels[2].series[0].data_xy, vec![(2.0, 45.0)]);
        assert_eq!(fig.panels[2].x_axis.label, "Scale");
    }

    #[test]
    fn single_chart_labels_and_range() {
        let table = BenchmarkTable::new(vec![
            rec("progA", "cpu", 2, 10.0, 1.0, 5.0),
            rec("progA", "cpu", 8, 76.0, 3.08, 4.0),
        ]);
        let plans = report_plans();
        let ChartPlan::Single(plan) = &plans[0] else { panic!("first plan is single-panel") };
        let chart = build_single(&table, plan, &ReportConfig::default());
        assert_eq!(chart.title, "CPU Utilization vs Scale - CPU Worker");
        assert_eq!(chart.x_axis.label, "Scale (Count)");
        assert_eq!(chart.y_axis.label, "CPU Utilization (%)");
        assert!(chart.x_axis.min < 2.0 && chart.x_axis.max > 8.0);
    }

    #[test]
    fn plan_file_names_are_distinct() {
        let plans = report_plans();
        let mut names: Vec<&str> = plans.iter().map(|p| p.file_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 4);
    }
}
