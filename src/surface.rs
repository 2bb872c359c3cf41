// src/surface.rs

//! The drawable a genome plot is issued against.
//!
//! Plot functions only talk to this trait, so callers can route the draw calls
//! into their own figure. [`crate::chart_surface::ChartSurface`] is the
//! plotters-backed implementation shipped with the crate.

use std::ops::Range;

use plotters::style::RGBColor;

use crate::ticks::TickSet;

/// One of the four frame lines around the plotting area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spine {
    Top,
    Right,
    Bottom,
    Left,
}

impl Spine {
    pub const ALL: [Spine; 4] = [Spine::Top, Spine::Right, Spine::Bottom, Spine::Left];
}

pub trait PlotSurface {
    /// Sets the data coordinates shown on each axis.
    fn set_limits(&mut self, x: Range<f64>, y: Range<f64>);

    fn y_limits(&self) -> Range<f64>;

    fn set_spine_visible(&mut self, spine: Spine, visible: bool);

    fn set_title(&mut self, title: &str);

    fn set_x_label(&mut self, label: &str);

    fn set_y_label(&mut self, label: &str);

    /// Replaces the x-axis ticks and their labels.
    fn set_x_ticks(&mut self, ticks: &TickSet);

    /// Draws a filled circular marker of radius `size` pixels at every point.
    fn draw_markers(&mut self, points: &[(f64, f64)], color: RGBColor, size: u32);

    fn draw_segment(&mut self, from: (f64, f64), to: (f64, f64), color: RGBColor, width: u32);

    /// Horizontal line across the whole x range.
    fn draw_hline(&mut self, y: f64, color: RGBColor, width: u32);
}

// src/surface.rs
