//! Small comparison helpers used by the builder and the renderer.

use std::cmp::Ordering;

/// Returns `true` when `low <= value <= high`.
///
/// ```
/// use epc_qr::validate::in_range;
///
/// assert!(in_range(&1, &10, &10));
/// assert!(!in_range(&1.0, &10.0, &0.5));
/// ```
pub fn in_range<T: PartialOrd>(low: &T, high: &T, value: &T) -> bool {
    low <= value && value <= high
}

/// Compares the length of `bytes` with `max`.
pub fn size_cmp(bytes: &[u8], max: usize) -> Ordering {
    bytes.len().cmp(&max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_ints() {
        assert!(in_range(&1, &10, &5));
        assert!(in_range(&1, &10, &1));
        assert!(!in_range(&1, &10, &0));
        assert!(!in_range(&1, &10, &11));
    }

    #[test]
    fn in_range_rejects_nan() {
        assert!(!in_range(&0.01, &10.0, &f64::NAN));
    }

    #[test]
    fn size_cmp_orders() {
        assert_eq!(size_cmp(&[1, 2, 3], 5), Ordering::Less);
        assert_eq!(size_cmp(&[1, 2, 3, 4, 5], 5), Ordering::Equal);
        assert_eq!(size_cmp(&[1, 2, 3, 4, 5, 6], 5), Ordering::Greater);
    }
}
