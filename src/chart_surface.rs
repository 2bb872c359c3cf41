// src/chart_surface.rs

use plotters::backend::{BitMapBackend, DrawingBackend, SVGBackend};
use plotters::chart::ChartBuilder;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, PathElement, Text};
use plotters::style::colors::WHITE;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::constants::{
    CHART_MARGIN_PX, COLOR_FRAME, COLOR_TITLE, LINE_WIDTH_FRAME, PLOT_HEIGHT, PLOT_WIDTH,
    TICK_LABEL_GAP_PX, TICK_LENGTH_PX, TITLE_AREA_HEIGHT_PX, TITLE_OFFSET_X_PX,
    TITLE_OFFSET_Y_PX, X_LABEL_AREA_PX, Y_LABEL_AREA_PX, Y_LABEL_COUNT,
};
use crate::font_config::{title_font, FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_TICK_LABEL};
use crate::surface::{PlotSurface, Spine};
use crate::ticks::TickSet;

/// Default image size for the save helpers.
pub const DEFAULT_PLOT_SIZE: (u32, u32) = (PLOT_WIDTH, PLOT_HEIGHT);

/// A draw call recorded in data coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Markers {
        points: Vec<(f64, f64)>,
        color: RGBColor,
        size: u32,
    },
    Segment {
        from: (f64, f64),
        to: (f64, f64),
        color: RGBColor,
        width: u32,
    },
    HLine {
        y: f64,
        color: RGBColor,
        width: u32,
    },
}

/// Everything set on a [`ChartSurface`] so far.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_ticks: Option<TickSet>,
    pub hidden_spines: Vec<Spine>,
    pub primitives: Vec<Primitive>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            x_range: 0.0..1.0,
            y_range: 0.0..1.0,
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            x_ticks: None,
            hidden_spines: Vec::new(),
            primitives: Vec::new(),
        }
    }
}

impl Scene {
    pub fn spine_visible(&self, spine: Spine) -> bool {
        !self.hidden_spines.contains(&spine)
    }

    pub fn has_valid_ranges(&self) -> bool {
        self.x_range.end > self.x_range.start && self.y_range.end > self.y_range.start
    }

    /// All marker points in drawing order, with their colour and size.
    pub fn markers(&self) -> impl Iterator<Item = ((f64, f64), RGBColor, u32)> + '_ {
        self.primitives.iter().flat_map(|p| match p {
            Primitive::Markers {
                points,
                color,
                size,
            } => points.iter().map(|&pt| (pt, *color, *size)).collect::<Vec<_>>(),
            _ => Vec::new(),
        })
    }

    /// All segments as `(from, to, color)`.
    pub fn segments(&self) -> impl Iterator<Item = ((f64, f64), (f64, f64), RGBColor)> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Segment {
                from, to, color, ..
            } => Some((*from, *to, *color)),
            _ => None,
        })
    }

    pub fn hlines(&self) -> impl Iterator<Item = (f64, RGBColor, u32)> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::HLine { y, color, width } => Some((*y, *color, *width)),
            _ => None,
        })
    }
}

/// Y-axis label formatting: "k"/"M" for large values, one decimal for small
/// fractional values (copy-number style), integers otherwise.
pub fn format_y_tick(y: f64) -> String {
    if y.abs() >= 1_000_000.0 {
        format!("{:.1}M", y / 1_000_000.0)
    } else if y.abs() >= 1000.0 {
        format!("{:.0}k", y / 1000.0)
    } else if y.abs() < 10.0 && y.fract() != 0.0 {
        format!("{:.1}", y)
    } else {
        format!("{:.0}", y)
    }
}

/// A [`PlotSurface`] that records the plot and rasterises it with plotters.
#[derive(Debug, Clone, Default)]
pub struct ChartSurface {
    scene: Scene,
}

impl ChartSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn into_scene(self) -> Scene {
        self.scene
    }

    /// Draws the recorded plot onto `area`.
    ///
    /// The title goes in a strip above the chart, left aligned. X ticks and
    /// spines are drawn by hand since plotters' mesh only knows its own tick
    /// placement and an all-or-nothing axis frame.
    pub fn render<DB>(&self, area: &DrawingArea<DB, Shift>) -> Result<(), Box<dyn Error>>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let scene = &self.scene;
        if !scene.has_valid_ranges() {
            return Err(format!(
                "Invalid plot ranges: x {:?}, y {:?}",
                scene.x_range, scene.y_range
            )
            .into());
        }

        area.fill(&WHITE)?;
        let (title_area, plot_area) = area.split_vertically(TITLE_AREA_HEIGHT_PX);
        title_area.draw(&Text::new(
            scene.title.as_str(),
            (TITLE_OFFSET_X_PX, TITLE_OFFSET_Y_PX),
            title_font().color(COLOR_TITLE),
        ))?;

        let mut chart = ChartBuilder::on(&plot_area)
            .margin(CHART_MARGIN_PX)
            .x_label_area_size(X_LABEL_AREA_PX)
            .y_label_area_size(Y_LABEL_AREA_PX)
            .build_cartesian_2d(scene.x_range.clone(), scene.y_range.clone())?;

        chart
            .configure_mesh()
            .disable_mesh()
            .disable_x_axis()
            .disable_y_axis()
            .x_labels(0)
            .y_labels(Y_LABEL_COUNT)
            .y_label_formatter(&|y| format_y_tick(*y))
            .x_desc(scene.x_label.as_str())
            .y_desc(scene.y_label.as_str())
            .label_style(FONT_TUPLE_TICK_LABEL)
            .axis_desc_style(FONT_TUPLE_AXIS_LABEL)
            .draw()?;

        let (x0, x1) = (scene.x_range.start, scene.x_range.end);
        let (y0, y1) = (scene.y_range.start, scene.y_range.end);

        for spine in Spine::ALL {
            if !scene.spine_visible(spine) {
                continue;
            }
            let line = match spine {
                Spine::Top => vec![(x0, y1), (x1, y1)],
                Spine::Right => vec![(x1, y0), (x1, y1)],
                Spine::Bottom => vec![(x0, y0), (x1, y0)],
                Spine::Left => vec![(x0, y0), (x0, y1)],
            };
            chart.draw_series(std::iter::once(PathElement::new(
                line,
                COLOR_FRAME.stroke_width(LINE_WIDTH_FRAME),
            )))?;
        }

        if let Some(ticks) = &scene.x_ticks {
            let area_offset = plot_area.get_base_pixel();
            for tick in &ticks.ticks {
                let x = tick.position as f64;
                if x < x0 || x > x1 {
                    continue;
                }
                let (px, py) = chart.backend_coord(&(x, y0));
                let (px, py) = (px - area_offset.0, py - area_offset.1);
                plot_area.draw(&PathElement::new(
                    vec![(px, py), (px, py + TICK_LENGTH_PX)],
                    COLOR_FRAME.stroke_width(LINE_WIDTH_FRAME),
                ))?;
                plot_area.draw(&Text::new(
                    tick.label.as_str(),
                    (px, py + TICK_LENGTH_PX + TICK_LABEL_GAP_PX),
                    FONT_TUPLE_TICK_LABEL
                        .into_font()
                        .color(COLOR_FRAME)
                        .pos(Pos::new(HPos::Center, VPos::Top)),
                ))?;
            }
        }

        for primitive in &scene.primitives {
            match primitive {
                Primitive::Markers {
                    points,
                    color,
                    size,
                } => {
                    chart.draw_series(
                        points
                            .iter()
                            .map(|&point| Circle::new(point, *size, color.filled())),
                    )?;
                }
                Primitive::Segment {
                    from,
                    to,
                    color,
                    width,
                } => {
                    chart.draw_series(std::iter::once(PathElement::new(
                        vec![*from, *to],
                        color.stroke_width(*width),
                    )))?;
                }
                Primitive::HLine { y, color, width } => {
                    chart.draw_series(std::iter::once(PathElement::new(
                        vec![(x0, *y), (x1, *y)],
                        color.stroke_width(*width),
                    )))?;
                }
            }
        }

        Ok(())
    }

    /// Renders to a PNG file of `size` pixels.
    pub fn save_png<P: AsRef<Path>>(&self, path: P, size: (u32, u32)) -> Result<(), Box<dyn Error>> {
        let path = path.as_ref();
        let root_area = BitMapBackend::new(path, size).into_drawing_area();
        self.render(&root_area)?;
        root_area.present()?;
        log::info!("Genome plot saved as '{}'.", path.display());
        Ok(())
    }

    /// Renders to an SVG file of `size` pixels.
    pub fn save_svg<P: AsRef<Path>>(&self, path: P, size: (u32, u32)) -> Result<(), Box<dyn Error>> {
        let path = path.as_ref();
        let root_area = SVGBackend::new(path, size).into_drawing_area();
        self.render(&root_area)?;
        root_area.present()?;
        log::info!("Genome plot saved as '{}'.", path.display());
        Ok(())
    }
}

impl PlotSurface for ChartSurface {
    fn set_limits(&mut self, x: Range<f64>, y: Range<f64>) {
        self.scene.x_range = x;
        self.scene.y_range = y;
    }

    fn y_limits(&self) -> Range<f64> {
        self.scene.y_range.clone()
    }

    fn set_spine_visible(&mut self, spine: Spine, visible: bool) {
        self.scene.hidden_spines.retain(|&s| s != spine);
        if !visible {
            self.scene.hidden_spines.push(spine);
        }
    }

    fn set_title(&mut self, title: &str) {
        self.scene.title = title.to_string();
    }

    fn set_x_label(&mut self, label: &str) {
        self.scene.x_label = label.to_string();
    }

    fn set_y_label(&mut self, label: &str) {
        self.scene.y_label = label.to_string();
    }

    fn set_x_ticks(&mut self, ticks: &TickSet) {
        self.scene.x_ticks = Some(ticks.clone());
    }

    fn draw_markers(&mut self, points: &[(f64, f64)], color: RGBColor, size: u32) {
        if points.is_empty() {
            return;
        }
        self.scene.primitives.push(Primitive::Markers {
            points: points.to_vec(),
            color,
            size,
        });
    }

    fn draw_segment(&mut self, from: (f64, f64), to: (f64, f64), color: RGBColor, width: u32) {
        self.scene.primitives.push(Primitive::Segment {
            from,
            to,
            color,
            width,
        });
    }

    fn draw_hline(&mut self, y: f64, color: RGBColor, width: u32) {
        self.scene
            .primitives
            .push(Primitive::HLine { y, color, width });
    }
}


// src/chart_surface.rs
