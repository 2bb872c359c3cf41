// src/lib.rs - Library interface

pub mod chart_surface;
pub mod constants;
pub mod error;
pub mod font_config;
pub mod genome_plot;
pub mod presets;
pub mod surface;
pub mod ticks;

pub use chart_surface::{ChartSurface, Primitive, Scene};
pub use error::{GenomePlotError, TickError};
pub use genome_plot::{
    add_points_to_genome_plot, add_segments_to_genome_plot, create_genome_plot,
    create_genome_plot_with_points, create_genome_plot_with_segments, derive_region,
    GenomePlotOptions, PlotRegion,
};
pub use presets::mrcanavar_plot;
pub use surface::{PlotSurface, Spine};
pub use ticks::{define_x_ticks, LabelUnit, Tick, TickSet};
