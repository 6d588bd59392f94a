// File: crates/scaling-plots/src/config.rs
// Summary: Fixed report constants (file names, columns, program styling, figure sizes).

use std::path::PathBuf;

use plot_core::{Color, Marker};

/// Benchmark table read from the working directory.
pub const INPUT_FILE: &str = "MT25081_Part_D_CSV.csv";
/// Command that produces `INPUT_FILE`; named when the file is missing.
pub const PRODUCER_COMMAND: &str = "bash MT25081_Part_D_scaling.sh";

pub const COL_PROGRAM: &str = "Program";
pub const COL_WORKER_TYPE: &str = "Worker_Type";
pub const COL_SCALE: &str = "Scale";
pub const COL_CPU: &str = "AvgCPU_Percent";
pub const COL_MEMORY: &str = "AvgMemory_Percent";
pub const COL_TIME: &str = "ExecutionTime_Sec";

pub const REQUIRED_COLUMNS: [&str; 6] = [COL_PROGRAM, COL_WORKER_TYPE, COL_SCALE, COL_CPU, COL_MEMORY, COL_TIME];

pub const WORKER_CPU: &str = "cpu";
pub const WORKER_MEM: &str = "mem";
pub const WORKER_IO: &str = "io";

/// Appearance of one program's series across every chart.
#[derive(Clone, Debug)]
pub struct ProgramStyle {
    pub program: String,
    /// Legend text on single-panel charts.
    pub label: String,
    /// Legend text on the multi-panel time figure.
    pub short_label: String,
    pub color: Color,
    pub marker: Marker,
}

#[derive(Clone, Debug)]
pub struct ReportConfig {
    pub input_file: PathBuf,
    pub producer_command: String,
    /// Known programs, always plotted in this order.
    pub programs: Vec<ProgramStyle>,
    /// Color/marker rotation for programs not listed in `programs`.
    pub fallback_styles: Vec<(Color, Marker)>,
    pub dpi: f32,
    /// Single-panel chart size in inches.
    pub chart_size: (f32, f32),
    /// Three-panel figure size in inches.
    pub figure_size: (f32, f32),
    /// Series line width in points.
    pub line_width: f32,
    /// Marker diameter in points.
    pub marker_size: f32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from(INPUT_FILE),
            producer_command: PRODUCER_COMMAND.to_string(),
            programs: vec![
                ProgramStyle {
                    program: "progA".into(),
                    label: "Program A (Processes)".into(),
                    short_label: "Processes".into(),
                    color: Color::from_rgb(0x2e, 0x86, 0xab),
                    marker: Marker::Circle,
                },
                ProgramStyle {
                    program: "progB".into(),
                    label: "Program B (Threads)".into(),
                    short_label: "Threads".into(),
                    color: Color::from_rgb(0xa2, 0x3b, 0x72),
                    marker: Marker::Square,
                },
            ],
            fallback_styles: vec![
                (Color::from_rgb(0xf1, 0x8f, 0x01), Marker::TriangleUp),
                (Color::from_rgb(0x3b, 0x1f, 0x2b), Marker::Diamond),
            ],
            dpi: 300.0,
            chart_size: (14.0, 8.0),
            figure_size: (18.0, 5.0),
            line_width: 2.5,
            marker_size: 8.0,
        }
    }
}

impl ReportConfig {
    pub fn style_of(&self, program: &str) -> Option<&ProgramStyle> {
        self.programs.iter().find(|p| p.program == program)
    }

    /// Style for the `nth` program outside the known list, cycling through the fallbacks.
    pub fn fallback_style(&self, program: &str, nth: usize) -> ProgramStyle {
        let (color, marker) = if self.fallback_styles.is_empty() {
            (Color::from_rgb(0x55, 0x55, 0x55), Marker::Circle)
        } else {
            self.fallback_styles[nth % self.fallback_styles.len()]
        };
        ProgramStyle {
            program: program.to_string(),
            label: program.to_string(),
            short_label: program.to_string(),
            color,
            marker,
        }
    }
}
