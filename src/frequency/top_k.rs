use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// A distinct value and the number of times it occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Frequency {
    pub value: i64,
    pub count: usize,
}

/// Return the `k` most frequent distinct values in `values`.
///
/// Order is highest count first, ties in first-seen order; treat the result
/// as a set. Fails unless `1 <= k <= distinct values`.
pub fn top_k_frequent(values: &[i64], k: usize) -> Result<Vec<i64>> {
    Ok(top_k_with_counts(values, k)?
        .into_iter()
        .map(|f| f.value)
        .collect())
}

/// Like [`top_k_frequent`], keeping each value's occurrence count.
///
/// Counting sort over a bucket array indexed by count: O(n) time and space.
pub fn top_k_with_counts(values: &[i64], k: usize) -> Result<Vec<Frequency>> {
    let mut counts: HashMap<i64, usize> = HashMap::with_capacity(values.len());
    let mut first_seen = Vec::new();

    for &value in values {
        match counts.entry(value) {
            Entry::Occupied(mut e) => *e.get_mut() += 1,
            Entry::Vacant(e) => {
                e.insert(1);
                first_seen.push(value);
            }
        }
    }

    if k == 0 || k > first_seen.len() {
        return Err(Error::InvalidArgument(format!(
            "k must be between 1 and the number of distinct values ({}), got {}",
            first_seen.len(),
            k
        )));
    }

    // buckets[c] holds every value seen exactly c times
    let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); values.len() + 1];
    for value in first_seen {
        buckets[counts[&value]].push(value);
    }

    debug!(
        len = values.len(),
        distinct = counts.len(),
        k,
        "selecting most frequent values"
    );

    let mut result = Vec::with_capacity(k);
    for (count, bucket) in buckets.iter().enumerate().skip(1).rev() {
        for &value in bucket {
            result.push(Frequency { value, count });
            if result.len() == k {
                return Ok(result);
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn as_set(values: Vec<i64>) -> HashSet<i64> {
        values.into_iter().collect()
    }

    fn count_of(values: &[i64], target: i64) -> usize {
        values.iter().filter(|&&v| v == target).count()
    }

    #[test]
    fn test_basic() {
        let result = top_k_frequent(&[1, 2, 2, 3, 3, 3], 2).unwrap();
        assert_eq!(as_set(result), HashSet::from([2, 3]));
    }

    #[test]
    fn test_single_value() {
        assert_eq!(top_k_frequent(&[7], 1).unwrap(), vec![7]);
    }

    #[test]
    fn test_all_distinct() {
        let result = top_k_frequent(&[4, 5, 6], 3).unwrap();
        assert_eq!(as_set(result), HashSet::from([4, 5, 6]));
    }

    #[test]
    fn test_ordered_by_count_then_first_seen() {
        let result = top_k_with_counts(&[5, 1, 1, 5, 9, 9, 9, -2], 4).unwrap();
        assert_eq!(
            result,
            vec![
                Frequency { value: 9, count: 3 },
                Frequency { value: 5, count: 2 },
                Frequency { value: 1, count: 2 },
                Frequency { value: -2, count: 1 },
            ]
        );
    }

    #[test]
    fn test_returned_values_dominate_rest() {
        let values = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9, 3, 2, 3];
        let distinct: HashSet<i64> = values.iter().copied().collect();

        for k in 1..=distinct.len() {
            let picked = as_set(top_k_frequent(&values, k).unwrap());
            assert_eq!(picked.len(), k);

            let min_picked = picked.iter().map(|&v| count_of(&values, v)).min().unwrap();
            for &other in distinct.difference(&picked) {
                assert!(count_of(&values, other) <= min_picked);
            }
        }
    }

    #[test]
    fn test_k_zero_rejected() {
        let err = top_k_frequent(&[1, 2], 0).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_k_above_distinct_rejected() {
        let err = top_k_frequent(&[1, 1, 2], 3).unwrap_err();
        assert!(err.to_string().contains("(2)"));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(top_k_frequent(&[], 1).is_err());
    }
}
