//! Random data helpers.

use rand::Rng;

/// Returns a random integer in `[min, max]`, both ends inclusive.
pub fn random_int_inclusive(min: i64, max: i64) -> i64 {
    if min >= max {
        return min;
    }
    rand::rng().random_range(min..=max)
}

/// Returns `len` random integers drawn from the half-open range
/// `[min, max)`.
pub fn random_array(len: usize, min: i64, max: i64) -> Vec<i64> {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| {
            if min >= max {
                min
            } else {
                rng.random_range(min..max)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_range_is_honored() {
        for _ in 0..200 {
            let n = random_int_inclusive(3, 5);
            assert!((3..=5).contains(&n));
        }
    }

    #[test]
    fn test_degenerate_range_returns_min() {
        assert_eq!(random_int_inclusive(7, 7), 7);
        assert_eq!(random_int_inclusive(7, 3), 7);
    }

    #[test]
    fn test_array_length_and_range() {
        let items = random_array(64, 0, 10);
        assert_eq!(items.len(), 64);
        assert!(items.iter().all(|n| (0..10).contains(n)));
    }

    #[test]
    fn test_half_open_upper_bound_is_excluded() {
        let items = random_array(200, 0, 2);
        assert!(items.iter().all(|n| *n == 0 || *n == 1));
    }
}
