// src/genome_plot.rs

//! Genome plots: a frame with position ticks, plus points or segments drawn
//! against chromosomal position.

use std::ops::Range;

use plotters::style::RGBColor;

use crate::constants::{
    COLOR_GENOME_DATA, COLOR_OVER_SCALE, DEFAULT_MARKER_SIZE, DEFAULT_SEGMENT_LINE_WIDTH,
    FALLBACK_Y_SCALE, OVER_SCALE_MARKER_SIZE, SEGMENT_CLAMP_FRACTION, X_ORIGIN_MARGIN_FRACTION,
    X_WIDTH_MARGIN_FACTOR, Y_BELOW_ZERO_DIVISOR, Y_SCALE_HEADROOM_FACTOR,
};
use crate::error::{GenomePlotError, Result};
use crate::surface::{PlotSurface, Spine};
use crate::ticks::{define_x_ticks, LabelUnit, TickSet};

/// Display parameters shared by the plot functions.
///
/// `x_origin`, `x_width` and `y_scale` are derived from the data when `None`.
#[derive(Debug, Clone)]
pub struct GenomePlotOptions {
    pub chromosome: String,
    pub plot_id: String,
    pub x_origin: Option<i64>,
    pub x_width: Option<i64>,
    pub y_scale: Option<f64>,
    pub y_label: String,
    pub color: RGBColor,
    /// Marker radius in pixels.
    pub marker_size: u32,
    pub line_width: u32,
    pub label_unit: LabelUnit,
}

impl Default for GenomePlotOptions {
    fn default() -> Self {
        Self {
            chromosome: String::new(),
            plot_id: String::new(),
            x_origin: None,
            x_width: None,
            y_scale: None,
            y_label: String::new(),
            color: *COLOR_GENOME_DATA,
            marker_size: DEFAULT_MARKER_SIZE,
            line_width: DEFAULT_SEGMENT_LINE_WIDTH,
            label_unit: LabelUnit::default(),
        }
    }
}

/// The displayed window: `x_origin..x_origin + x_width` by `-y_scale/20..y_scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRegion {
    pub x_origin: i64,
    pub x_width: i64,
    pub y_scale: f64,
}

impl PlotRegion {
    /// Right edge of the window. Saturates; [`create_genome_plot`] rejects
    /// regions whose end does not fit in an `i64`.
    pub fn x_end(&self) -> i64 {
        self.x_origin.saturating_add(self.x_width)
    }

    pub fn x_range(&self) -> Range<f64> {
        self.x_origin as f64..self.x_end() as f64
    }

    pub fn y_range(&self) -> Range<f64> {
        -self.y_scale / Y_BELOW_ZERO_DIVISOR..self.y_scale
    }

    fn validate(&self) -> Result<()> {
        if self.x_width <= 0 {
            return Err(GenomePlotError::InvalidRegion(format!(
                "x width must be positive, got {}",
                self.x_width
            )));
        }
        if self.x_origin.checked_add(self.x_width).is_none() {
            return Err(GenomePlotError::InvalidRegion(format!(
                "x range {} + {} overflows",
                self.x_origin, self.x_width
            )));
        }
        if !self.y_scale.is_finite() || self.y_scale <= 0.0 {
            return Err(GenomePlotError::InvalidRegion(format!(
                "y scale must be a positive number, got {}",
                self.y_scale
            )));
        }
        Ok(())
    }
}

fn check_length(what: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(GenomePlotError::LengthMismatch {
            what,
            expected,
            found,
        });
    }
    Ok(())
}

fn check_segments(start_positions: &[i64], end_positions: &[i64]) -> Result<()> {
    for (index, (&start, &end)) in start_positions.iter().zip(end_positions).enumerate() {
        if end < start {
            return Err(GenomePlotError::InvalidSegment { index, start, end });
        }
    }
    Ok(())
}

fn max_finite(values: &[f64]) -> Option<f64> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
}

/// Resolves the plot window from the data extent `[x_min, x_max]` and `values`,
/// letting explicit options win.
///
/// The width gets a 1% margin and the origin is pulled back by half a percent
/// of the width, so edge points are not drawn on the frame. Both are applied to
/// explicit values as well.
pub fn derive_region(
    x_min: i64,
    x_max: i64,
    values: &[f64],
    options: &GenomePlotOptions,
) -> Result<PlotRegion> {
    if let Some(width) = options.x_width {
        if width <= 0 {
            return Err(GenomePlotError::InvalidRegion(format!(
                "x width must be positive, got {width}"
            )));
        }
    }
    if let Some(scale) = options.y_scale {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(GenomePlotError::InvalidRegion(format!(
                "y scale must be a positive number, got {scale}"
            )));
        }
    }

    let raw_width = match options.x_width {
        Some(width) => width,
        None => x_max.checked_sub(x_min).ok_or_else(|| {
            GenomePlotError::InvalidRegion(format!("data extent {x_min}..{x_max} overflows"))
        })?,
    };
    let x_width = ((raw_width as f64 * X_WIDTH_MARGIN_FACTOR).floor() as i64).max(1);
    let raw_origin = options.x_origin.unwrap_or(x_min);
    let x_origin = (raw_origin as f64 - x_width as f64 * X_ORIGIN_MARGIN_FRACTION).floor() as i64;

    let y_scale = options.y_scale.unwrap_or_else(|| {
        max_finite(values)
            .map(|max| max * Y_SCALE_HEADROOM_FACTOR)
            .filter(|scale| *scale > 0.0)
            .unwrap_or(FALLBACK_Y_SCALE)
    });

    let region = PlotRegion {
        x_origin,
        x_width,
        y_scale,
    };
    region.validate()?;
    Ok(region)
}

/// Sets up an empty genome plot frame on `surface`.
///
/// Axis limits come from `region`; title, y label and tick labelling from
/// `options`. Returns the ticks applied to the x-axis.
pub fn create_genome_plot<S: PlotSurface + ?Sized>(
    surface: &mut S,
    region: &PlotRegion,
    options: &GenomePlotOptions,
) -> Result<TickSet> {
    region.validate()?;
    let ticks = define_x_ticks(region.x_origin, region.x_end(), options.label_unit)?;

    // Scales and hides frames
    surface.set_limits(region.x_range(), region.y_range());
    surface.set_spine_visible(Spine::Top, false);
    surface.set_spine_visible(Spine::Right, false);
    surface.set_spine_visible(Spine::Left, false);

    surface.set_title(&format!("{}  CHR: {}", options.plot_id, options.chromosome));
    surface.set_y_label(&options.y_label);
    surface.set_x_label(&format!("Position{}", ticks.unit));
    surface.set_x_ticks(&ticks);

    Ok(ticks)
}

/// Plots `values` at `positions` on a new frame.
pub fn create_genome_plot_with_points<S: PlotSurface + ?Sized>(
    surface: &mut S,
    positions: &[i64],
    values: &[f64],
    options: &GenomePlotOptions,
) -> Result<PlotRegion> {
    check_length("values", positions.len(), values.len())?;
    let x_min = positions.iter().copied().min().ok_or(GenomePlotError::EmptyData)?;
    let x_max = positions.iter().copied().max().ok_or(GenomePlotError::EmptyData)?;

    let region = derive_region(x_min, x_max, values, options)?;
    create_genome_plot(surface, &region, options)?;
    add_points_to_genome_plot(surface, positions, values, options.color, options.marker_size)?;
    Ok(region)
}

/// Plots one horizontal segment per `(start, end, value)` on a new frame.
pub fn create_genome_plot_with_segments<S: PlotSurface + ?Sized>(
    surface: &mut S,
    start_positions: &[i64],
    end_positions: &[i64],
    values: &[f64],
    options: &GenomePlotOptions,
) -> Result<PlotRegion> {
    check_length("end positions", start_positions.len(), end_positions.len())?;
    check_length("values", start_positions.len(), values.len())?;
    check_segments(start_positions, end_positions)?;
    let x_min = start_positions
        .iter()
        .copied()
        .min()
        .ok_or(GenomePlotError::EmptyData)?;
    let x_max = end_positions
        .iter()
        .copied()
        .max()
        .ok_or(GenomePlotError::EmptyData)?;

    let region = derive_region(x_min, x_max, values, options)?;
    create_genome_plot(surface, &region, options)?;
    add_segments_to_genome_plot(
        surface,
        start_positions,
        end_positions,
        values,
        options.color,
        options.line_width,
    )?;
    Ok(region)
}

/// Draws point markers on an existing frame.
///
/// Points at or above the y scale are drawn as large red markers pinned to the
/// scale instead of leaving the frame. Non-finite values are skipped.
pub fn add_points_to_genome_plot<S: PlotSurface + ?Sized>(
    surface: &mut S,
    positions: &[i64],
    values: &[f64],
    color: RGBColor,
    marker_size: u32,
) -> Result<()> {
    check_length("values", positions.len(), values.len())?;
    let y_scale = surface.y_limits().end;

    let (in_scale, over_scale): (Vec<(f64, f64)>, Vec<(f64, f64)>) = positions
        .iter()
        .zip(values)
        .filter(|(_, value)| value.is_finite())
        .map(|(&position, &value)| (position as f64, value))
        .partition(|&(_, value)| value < y_scale);

    surface.draw_markers(&in_scale, color, marker_size);

    if !over_scale.is_empty() {
        log::debug!(
            "{} of {} points exceed y scale {}; pinned to the scale",
            over_scale.len(),
            positions.len(),
            y_scale
        );
        let pinned: Vec<(f64, f64)> = over_scale.iter().map(|&(x, _)| (x, y_scale)).collect();
        surface.draw_markers(&pinned, *COLOR_OVER_SCALE, OVER_SCALE_MARKER_SIZE);
    }
    Ok(())
}

/// Draws horizontal segments on an existing frame.
///
/// Segments above the y scale are drawn red at 99% of the scale.
pub fn add_segments_to_genome_plot<S: PlotSurface + ?Sized>(
    surface: &mut S,
    start_positions: &[i64],
    end_positions: &[i64],
    values: &[f64],
    color: RGBColor,
    line_width: u32,
) -> Result<()> {
    check_length("end positions", start_positions.len(), end_positions.len())?;
    check_length("values", start_positions.len(), values.len())?;
    check_segments(start_positions, end_positions)?;

    let y_scale = surface.y_limits().end;
    let mut clamped = 0usize;
    for ((&start, &end), &value) in start_positions.iter().zip(end_positions).zip(values) {
        if !value.is_finite() {
            continue;
        }
        // Corrects values too high
        let (value, current_color) = if value > y_scale {
            clamped += 1;
            (y_scale * SEGMENT_CLAMP_FRACTION, *COLOR_OVER_SCALE)
        } else {
            (value, color)
        };
        surface.draw_segment(
            (start as f64, value),
            (end as f64, value),
            current_color,
            line_width,
        );
    }

    if clamped > 0 {
        log::debug!(
            "{} of {} segments exceed y scale {}; clamped",
            clamped,
            values.len(),
            y_scale
        );
    }
    Ok(())
}


// src/genome_plot.rs
