//! Input sequence generation.
//!
//! All drivers fill their input with the same sequence `0, 1, 2, …, n-1`
//! so the computed sum can be checked against a closed form.

/// Fill a vector with the sequence `0.0, 1.0, 2.0, …, len-1`.
pub fn iota(len: usize) -> Vec<f64> {
    (0..len).map(|i| i as f64).collect()
}

/// Exact sum of `iota(len)`: `len * (len - 1) / 2`.
///
/// Evaluated in integer arithmetic so it stays exact for every array size
/// the benchmarks use (f64 represents integers exactly up to 2^53).
pub fn iota_sum(len: usize) -> f64 {
    if len == 0 {
        return 0.0;
    }
    (len as u128 * (len as u128 - 1) / 2) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iota_small() {
        assert_eq!(iota(4), vec![0.0, 1.0, 2.0, 3.0]);
        assert!(iota(0).is_empty());
    }

    #[test]
    fn test_iota_sum_matches_iterator() {
        for len in [0usize, 1, 2, 255, 256, 1000, 1 << 15] {
            let direct: f64 = iota(len).iter().sum();
            assert_eq!(direct, iota_sum(len), "len = {}", len);
        }
    }
}
