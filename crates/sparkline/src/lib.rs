//! Sparkline Bar Math
//!
//! Maps a counter's value log to normalized bar heights for display.
//! Pure functions only; rendering lives with the caller.

/// How many of the most recent log entries a chart shows.
pub const WINDOW: usize = 20;

/// A single normalized bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    /// Height as a percentage of the tallest magnitude, 0.0..=100.0
    pub height: f64,
    /// Whether the underlying value was below zero
    pub negative: bool,
}

/// Normalize a value log into bars for the most recent [`WINDOW`] entries.
///
/// The scale is the largest magnitude across the whole log, floored at 1
/// so an all-zero log divides cleanly.
pub fn bars(values: &[i64]) -> Vec<Bar> {
    let scale = values
        .iter()
        .map(|v| v.unsigned_abs())
        .max()
        .unwrap_or(0)
        .max(1) as f64;

    let start = values.len().saturating_sub(WINDOW);
    values[start..]
        .iter()
        .map(|&v| Bar {
            height: v.unsigned_abs() as f64 / scale * 100.0,
            negative: v < 0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_zero_log_produces_zero_heights() {
        let bars = bars(&[0, 0, 0]);
        assert_eq!(bars.len(), 3);
        assert!(bars.iter().all(|b| b.height == 0.0 && !b.negative));
    }

    #[test]
    fn empty_log_produces_no_bars() {
        assert!(bars(&[]).is_empty());
    }

    #[test]
    fn single_entry_fills_the_chart() {
        assert_eq!(
            bars(&[5]),
            vec![Bar {
                height: 100.0,
                negative: false
            }]
        );
    }

    #[test]
    fn long_log_is_windowed_to_the_last_entries() {
        let log: Vec<i64> = (1..=25).collect();
        let bars = bars(&log);
        assert_eq!(bars.len(), WINDOW);
        // First rendered bar corresponds to log entry 6 (25 - 20 + 1).
        assert_eq!(bars[0].height, 6.0 / 25.0 * 100.0);
        assert_eq!(bars[WINDOW - 1].height, 100.0);
    }

    #[test]
    fn scale_covers_entries_outside_the_window() {
        let mut log = vec![1000];
        log.extend(1..=24i64);
        let bars = bars(&log);
        assert_eq!(bars.len(), WINDOW);
        assert!(bars.iter().all(|b| b.height <= 100.0));
        assert_eq!(bars[WINDOW - 1].height, 24.0 / 1000.0 * 100.0);
    }

    #[test]
    fn negative_values_use_magnitude_and_flag_sign() {
        let bars = bars(&[-10, 5]);
        assert_eq!(bars[0].height, 100.0);
        assert!(bars[0].negative);
        assert_eq!(bars[1].height, 50.0);
        assert!(!bars[1].negative);
    }

    #[test]
    fn i64_min_magnitude_does_not_overflow() {
        let bars = bars(&[i64::MIN]);
        assert_eq!(bars[0].height, 100.0);
        assert!(bars[0].negative);
    }
}
