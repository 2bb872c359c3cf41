// src/ticks.rs

//! Position tick selection for the x-axis of genome plots.
//!
//! A "nice" step is picked from `{1, 2, 5} × 10^k`: the smallest step whose
//! multiples inside the displayed range number fewer than [`MAX_TICKS`].

use crate::constants::{
    BASES_PER_KB, BASES_PER_MB, MAX_TICKS, TICK_MAX_EXPONENT, TICK_STEP_BASES, UNIT_SUFFIX_BP,
    UNIT_SUFFIX_KB, UNIT_SUFFIX_MB,
};
use crate::error::TickError;

/// How tick labels are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelUnit {
    /// Raw base-pair positions, no unit suffix.
    #[default]
    Bases,
    /// Rescaled to Kb or Mb depending on the step, with a unit suffix.
    Scaled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    pub position: i64,
    pub label: String,
}

/// Ordered ticks for one axis plus the unit suffix for the axis label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickSet {
    pub step: i64,
    pub ticks: Vec<Tick>,
    pub unit: &'static str,
}

impl TickSet {
    pub fn positions(&self) -> Vec<i64> {
        self.ticks.iter().map(|t| t.position).collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.ticks.iter().map(|t| t.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}

/// Candidate steps in ascending order.
fn candidate_steps() -> impl Iterator<Item = i64> {
    (0..=TICK_MAX_EXPONENT).flat_map(|exponent| {
        let multiplicator = 10_i64.pow(exponent);
        TICK_STEP_BASES.iter().map(move |base| base * multiplicator)
    })
}

fn largest_step() -> i64 {
    TICK_STEP_BASES[TICK_STEP_BASES.len() - 1] * 10_i64.pow(TICK_MAX_EXPONENT)
}

fn first_multiple_at_or_above(value: i64, step: i64) -> i64 {
    let floor = value.div_euclid(step) * step;
    if floor < value {
        floor.saturating_add(step)
    } else {
        floor
    }
}

fn last_multiple_at_or_below(value: i64, step: i64) -> i64 {
    value.div_euclid(step) * step
}

fn tick_count(init_position: i64, end_position: i64, step: i64) -> usize {
    let first = first_multiple_at_or_above(init_position, step);
    let last = last_multiple_at_or_below(end_position, step);
    if last < first {
        0
    } else {
        // Both are multiples of `step`, so the quotient is exact.
        ((last as i128 - first as i128) / step as i128 + 1) as usize
    }
}

/// Smallest candidate step giving fewer than [`MAX_TICKS`] ticks over
/// `[init_position, end_position]`.
pub fn choose_step(init_position: i64, end_position: i64) -> Result<i64, TickError> {
    if end_position < init_position {
        return Err(TickError::InvalidRange {
            start: init_position,
            end: end_position,
        });
    }

    candidate_steps()
        .find(|&step| tick_count(init_position, end_position, step) < MAX_TICKS)
        .ok_or(TickError::RangeTooWide {
            start: init_position,
            end: end_position,
            max_step: largest_step(),
            max_ticks: MAX_TICKS,
        })
}

/// Divisor and unit suffix for labels at the given step.
fn label_scale(step: i64, unit: LabelUnit) -> (i64, &'static str) {
    match unit {
        LabelUnit::Bases => (1, ""),
        LabelUnit::Scaled if step >= BASES_PER_MB => (BASES_PER_MB, UNIT_SUFFIX_MB),
        LabelUnit::Scaled if step >= BASES_PER_KB => (BASES_PER_KB, UNIT_SUFFIX_KB),
        LabelUnit::Scaled => (1, UNIT_SUFFIX_BP),
    }
}

/// Formats an integer with `,` as the thousands separator.
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Defines the x ticks appropriate for the genome range of a plot.
///
/// Ticks are the multiples of the chosen step inside
/// `[init_position, end_position]`. With [`LabelUnit::Scaled`] the labels are
/// divided down to Kb or Mb; the step is always a multiple of the divisor in
/// that case, so labels stay integral.
pub fn define_x_ticks(
    init_position: i64,
    end_position: i64,
    unit: LabelUnit,
) -> Result<TickSet, TickError> {
    let step = choose_step(init_position, end_position)?;
    let first = first_multiple_at_or_above(init_position, step);
    let last = last_multiple_at_or_below(end_position, step);
    let (divisor, suffix) = label_scale(step, unit);

    let ticks: Vec<Tick> = (first..=last)
        .step_by(step as usize)
        .map(|position| Tick {
            position,
            label: format_thousands(position / divisor),
        })
        .collect();

    log::debug!(
        "x ticks for {}..{}: step {} ({} ticks){}",
        init_position,
        end_position,
        step,
        ticks.len(),
        suffix
    );

    Ok(TickSet {
        step,
        ticks,
        unit: suffix,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_steps_are_ascending() {
        let steps: Vec<i64> = candidate_steps().collect();
        assert_eq!(&steps[..6], &[1, 2, 5, 10, 20, 50]);
        assert!(steps.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(*steps.last().unwrap(), largest_step());
    }

    #[test]
    fn test_multiples_round_inwards() {
        assert_eq!(first_multiple_at_or_above(1001, 200), 1200);
        assert_eq!(first_multiple_at_or_above(1000, 200), 1000);
        assert_eq!(first_multiple_at_or_above(-150, 100), -100);
        assert_eq!(last_multiple_at_or_below(1999, 200), 1800);
        assert_eq!(last_multiple_at_or_below(-150, 100), -200);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1_250_000), "1,250,000");
        assert_eq!(format_thousands(-45_000), "-45,000");
    }

    #[test]
    fn test_small_range_uses_step_twenty() {
        let ticks = define_x_ticks(0, 100, LabelUnit::Bases).unwrap();
        assert_eq!(ticks.step, 20);
        assert_eq!(ticks.positions(), vec![0, 20, 40, 60, 80, 100]);
        assert_eq!(ticks.unit, "");
    }

    #[test]
    fn test_eight_ticks_is_too_many() {
        // Step 1 would give 0..=7, exactly eight ticks.
        let ticks = define_x_ticks(0, 7, LabelUnit::Bases).unwrap();
        assert_eq!(ticks.step, 2);
        assert_eq!(ticks.positions(), vec![0, 2, 4, 6]);
    }

    #[test]
    fn test_zero_width_range() {
        let ticks = define_x_ticks(42, 42, LabelUnit::Bases).unwrap();
        assert_eq!(ticks.step, 1);
        assert_eq!(ticks.positions(), vec![42]);
    }

    #[test]
    fn test_scaled_labels_in_kb() {
        let ticks = define_x_ticks(1000, 1_001_000, LabelUnit::Scaled).unwrap();
        assert_eq!(ticks.step, 200_000);
        assert_eq!(ticks.labels(), vec!["200", "400", "600", "800", "1,000"]);
        assert_eq!(ticks.unit, " (Kb)");
    }

    #[test]
    fn test_scaled_labels_in_mb() {
        let ticks = define_x_ticks(0, 50_000_000, LabelUnit::Scaled).unwrap();
        assert_eq!(ticks.step, 10_000_000);
        assert_eq!(ticks.labels(), vec!["0", "10", "20", "30", "40", "50"]);
        assert_eq!(ticks.unit, " (Mb)");
    }

    #[test]
    fn test_scaled_labels_stay_in_bases_for_short_ranges() {
        let ticks = define_x_ticks(10, 60, LabelUnit::Scaled).unwrap();
        assert_eq!(ticks.step, 10);
        assert_eq!(ticks.unit, " (bp)");
        assert_eq!(ticks.labels(), vec!["10", "20", "30", "40", "50", "60"]);
    }

    #[test]
    fn test_raw_labels_have_separators() {
        let ticks = define_x_ticks(1_000_000, 1_006_000, LabelUnit::Bases).unwrap();
        assert_eq!(ticks.step, 1000);
        assert_eq!(ticks.labels()[0], "1,000,000");
        assert_eq!(ticks.labels()[6], "1,006,000");
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        assert_eq!(
            define_x_ticks(100, 10, LabelUnit::Bases),
            Err(TickError::InvalidRange { start: 100, end: 10 })
        );
    }

    #[test]
    fn test_range_too_wide_is_rejected() {
        let err = choose_step(0, 5_000_000_000).unwrap_err();
        assert!(matches!(err, TickError::RangeTooWide { max_step: 500_000_000, .. }));
    }

    #[test]
    fn test_widest_accepted_range() {
        // 0, 5e8, ..., 3.5e9 is eight ticks; one base less gives seven.
        assert!(choose_step(0, 3_500_000_000).is_err());
        assert_eq!(choose_step(0, 3_499_999_999).unwrap(), 500_000_000);
    }
}

// src/ticks.rs
