// Math utilities and helper functions

/// Reduce `value` into `[0, len)`.
///
/// Returns `None` when `len` is zero, since there is nothing to index into.
pub fn wrap_index(value: usize, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(value % len)
    }
}

/// Number of whole `step`s that fit in `elapsed`.
///
/// Negative or non-finite `elapsed` counts as zero. `step` must be positive.
pub fn whole_steps(elapsed: f64, step: f64) -> u64 {
    if !elapsed.is_finite() || elapsed <= 0.0 {
        return 0;
    }
    (elapsed / step).floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_index() {
        assert_eq!(wrap_index(5, 8), Some(5));
        assert_eq!(wrap_index(13, 8), Some(5));
        assert_eq!(wrap_index(104, 104), Some(0));
        assert_eq!(wrap_index(3, 0), None);
    }

    #[test]
    fn test_whole_steps() {
        assert_eq!(whole_steps(250.0, 100.0), 2);
        assert_eq!(whole_steps(99.9, 100.0), 0);
        assert_eq!(whole_steps(100.0, 100.0), 1);
        assert_eq!(whole_steps(-20.0, 100.0), 0);
        assert_eq!(whole_steps(f64::NAN, 100.0), 0);
    }
}
