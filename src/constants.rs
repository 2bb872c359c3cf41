// src/constants.rs

use plotters::style::colors::{BLACK, BLUE, RED};
use plotters::style::RGBColor;

// Plot dimensions used by the save helpers.
pub const PLOT_WIDTH: u32 = 1600;
pub const PLOT_HEIGHT: u32 = 500;

// --- Tick Selection ---
// Candidate steps are TICK_STEP_BASES × 10^k for k in 0..=TICK_MAX_EXPONENT.
pub const TICK_STEP_BASES: [i64; 3] = [1, 2, 5];
pub const TICK_MAX_EXPONENT: u32 = 8;
// A step is accepted only if it produces fewer ticks than this.
pub const MAX_TICKS: usize = 8;

pub const BASES_PER_KB: i64 = 1_000;
pub const BASES_PER_MB: i64 = 1_000_000;
pub const UNIT_SUFFIX_BP: &str = " (bp)";
pub const UNIT_SUFFIX_KB: &str = " (Kb)";
pub const UNIT_SUFFIX_MB: &str = " (Mb)";

// --- Plot Region Derivation ---
pub const X_WIDTH_MARGIN_FACTOR: f64 = 1.01;
pub const X_ORIGIN_MARGIN_FRACTION: f64 = 0.005;
pub const Y_SCALE_HEADROOM_FACTOR: f64 = 1.05;
// The y-axis extends scale / Y_BELOW_ZERO_DIVISOR below zero.
pub const Y_BELOW_ZERO_DIVISOR: f64 = 20.0;
// Used when the data gives no positive maximum to derive a scale from.
pub const FALLBACK_Y_SCALE: f64 = 1.0;

// Over-scale segments are pinned just under the top of the frame.
pub const SEGMENT_CLAMP_FRACTION: f64 = 0.99;

// --- Plot Color Assignments ---
pub const COLOR_GENOME_DATA: &RGBColor = &BLUE;
pub const COLOR_OVER_SCALE: &RGBColor = &RED;
pub const COLOR_REFERENCE_LINE: RGBColor = RGBColor(128, 128, 128);
pub const COLOR_FRAME: &RGBColor = &BLACK;
pub const COLOR_TITLE: &RGBColor = &BLACK;

// Marker radius (px) and stroke widths
pub const DEFAULT_MARKER_SIZE: u32 = 3;
pub const OVER_SCALE_MARKER_SIZE: u32 = 8;
pub const DEFAULT_SEGMENT_LINE_WIDTH: u32 = 3;
pub const REFERENCE_LINE_WIDTH: u32 = 1;
pub const LINE_WIDTH_FRAME: u32 = 1;

// --- Layout (px) ---
pub const TITLE_AREA_HEIGHT_PX: u32 = 40;
pub const TITLE_OFFSET_X_PX: i32 = 10;
pub const TITLE_OFFSET_Y_PX: i32 = 10;
pub const CHART_MARGIN_PX: u32 = 10;
pub const X_LABEL_AREA_PX: u32 = 60;
pub const Y_LABEL_AREA_PX: u32 = 70;
pub const TICK_LENGTH_PX: i32 = 5;
pub const TICK_LABEL_GAP_PX: i32 = 3;
pub const Y_LABEL_COUNT: usize = 6;

// --- Font Sizes ---
pub const FONT_SIZE_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 16;
pub const FONT_SIZE_TICK_LABEL: i32 = 13;

// --- mrCaNaVaR Preset ---
pub const MRCANAVAR_Y_LABEL: &str = "mrCaNaVaR Calling";
// Copy-number levels marked on every mrCaNaVaR plot.
pub const MRCANAVAR_REFERENCE_LEVELS: [f64; 4] = [0.0, 2.0, 4.0, 10.0];

// src/constants.rs
