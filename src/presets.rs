// src/presets.rs

//! Ready-made plots for specific annotation formats.

use crate::constants::{
    COLOR_REFERENCE_LINE, MRCANAVAR_REFERENCE_LEVELS, MRCANAVAR_Y_LABEL, REFERENCE_LINE_WIDTH,
};
use crate::error::Result;
use crate::genome_plot::{create_genome_plot_with_segments, GenomePlotOptions, PlotRegion};
use crate::surface::{PlotSurface, Spine};

/// Converts BED-style 0-based starts to closed 1-based starts.
pub fn bed_starts_to_one_based(start_positions: &[i64]) -> Vec<i64> {
    start_positions.iter().map(|start| start + 1).collect()
}

/// Plots mrCaNaVaR copy-number calls.
///
/// Segments come in BED convention: the first base of the genome is 0 and a
/// segment spans `start..end - 1`. Starts are shifted to 1-based before
/// plotting; ends already are the last covered base in 1-based terms.
///
/// The y label is fixed, the bottom frame line is hidden and grey reference
/// lines mark copy numbers 0, 2, 4 and 10. Other fields of `options` apply as
/// for [`create_genome_plot_with_segments`].
pub fn mrcanavar_plot<S: PlotSurface + ?Sized>(
    surface: &mut S,
    start_positions: &[i64],
    end_positions: &[i64],
    values: &[f64],
    options: &GenomePlotOptions,
) -> Result<PlotRegion> {
    let one_based_starts = bed_starts_to_one_based(start_positions);
    let options = GenomePlotOptions {
        y_label: MRCANAVAR_Y_LABEL.to_string(),
        ..options.clone()
    };

    let region = create_genome_plot_with_segments(
        surface,
        &one_based_starts,
        end_positions,
        values,
        &options,
    )?;

    surface.set_spine_visible(Spine::Bottom, false);
    for &level in &MRCANAVAR_REFERENCE_LEVELS {
        surface.draw_hline(level, COLOR_REFERENCE_LINE, REFERENCE_LINE_WIDTH);
    }
    Ok(region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart_surface::ChartSurface;
    use crate::error::GenomePlotError;

    #[test]
    fn test_bed_starts_shift_by_one() {
        assert_eq!(bed_starts_to_one_based(&[0, 99, 1_000]), vec![1, 100, 1_001]);
        assert!(bed_starts_to_one_based(&[]).is_empty());
    }

    #[test]
    fn test_preset_frame_and_reference_lines() {
        let mut surface = ChartSurface::new();
        let options = GenomePlotOptions {
            chromosome: "1".to_string(),
            plot_id: "sample".to_string(),
            y_label: "ignored".to_string(),
            y_scale: Some(12.0),
            ..Default::default()
        };
        mrcanavar_plot(&mut surface, &[0, 5000], &[5000, 9000], &[2.0, 3.1], &options).unwrap();

        let scene = surface.scene();
        assert_eq!(scene.y_label, MRCANAVAR_Y_LABEL);
        assert!(!scene.spine_visible(Spine::Bottom));
        let levels: Vec<f64> = scene.hlines().map(|(y, _, _)| y).collect();
        assert_eq!(levels, vec![0.0, 2.0, 4.0, 10.0]);
        assert!(scene
            .hlines()
            .all(|(_, color, width)| color == COLOR_REFERENCE_LINE && width == 1));
    }

    #[test]
    fn test_empty_bed_interval_is_rejected() {
        let mut surface = ChartSurface::new();
        let result = mrcanavar_plot(
            &mut surface,
            &[100],
            &[100],
            &[2.0],
            &GenomePlotOptions::default(),
        );
        assert!(matches!(result, Err(GenomePlotError::InvalidSegment { .. })));
    }
}

// src/presets.rs
