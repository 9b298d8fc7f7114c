//! X-axis label subsampling.

/// Keep every `stride`-th time, starting with the first.
///
/// Yields `ceil(times.len() / stride)` labels; a zero stride is treated as 1.
pub fn subsample_ticks(times: &[String], stride: usize) -> Vec<String> {
    times.iter().step_by(stride.max(1)).cloned().collect()
}

/// Whether the time at `index` carries a tick label.
pub const fn is_tick_index(index: usize, stride: usize) -> bool {
    stride <= 1 || index % stride == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn times(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("{:02}:{:02}", 8 + i / 6, (i % 6) * 10)).collect()
    }

    #[test]
    fn test_every_third() {
        let all = times(7);
        assert_eq!(subsample_ticks(&all, 3), vec!["08:00", "08:30", "09:00"]);
    }

    #[test]
    fn test_empty_and_short() {
        assert!(subsample_ticks(&[], 3).is_empty());
        assert_eq!(subsample_ticks(&times(2), 3), vec!["08:00"]);
    }

    #[test]
    fn test_zero_stride_keeps_everything() {
        assert_eq!(subsample_ticks(&times(4), 0).len(), 4);
        assert!(is_tick_index(5, 0));
    }

    #[test]
    fn test_tick_index() {
        assert!(is_tick_index(0, 3));
        assert!(!is_tick_index(1, 3));
        assert!(!is_tick_index(2, 3));
        assert!(is_tick_index(3, 3));
    }
}
