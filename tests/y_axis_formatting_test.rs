// tests/y_axis_formatting_test.rs

use genome_plot::chart_surface::format_y_tick;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_number_y_axis_formatting() {
        // Copy-number scales are small; fractional gridlines keep one decimal.
        assert_eq!(format_y_tick(0.0), "0");
        assert_eq!(format_y_tick(0.5), "0.5");
        assert_eq!(format_y_tick(2.0), "2");
        assert_eq!(format_y_tick(2.5), "2.5");
        assert_eq!(format_y_tick(-0.6), "-0.6");
        assert_eq!(format_y_tick(10.0), "10");
    }

    #[test]
    fn test_depth_y_axis_formatting() {
        // Read depth can reach thousands
        assert_eq!(format_y_tick(100.0), "100");
        assert_eq!(format_y_tick(1000.0), "1k");
        assert_eq!(format_y_tick(12500.0), "12k");
        assert_eq!(format_y_tick(1_000_000.0), "1.0M");
        assert_eq!(format_y_tick(2_500_000.0), "2.5M");
    }
}
