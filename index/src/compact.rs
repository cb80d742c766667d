use crate::{IndexError, Interval, Value};
use itertools::Itertools;

/// Collapses an ascending sequence of values into the ordered list of maximal intervals covering them.
///
/// Two consecutive values that differ by exactly one end up in the same interval.
/// Repeated values are absorbed in the interval of their first occurrence.
///
/// The input is *not* sorted by this function: values must be given in ascending order
/// (see [`compact_unsorted`] otherwise).
///
/// # Errors
/// Returns [`IndexError::EmptyKnownSet`] if `values` is empty.
pub fn compact(values: &[Value]) -> Result<Vec<Interval>, IndexError> {
    if values.is_empty() {
        return Err(IndexError::EmptyKnownSet);
    }
    let intervals = values
        .iter()
        .map(|&v| Interval::singleton(v))
        .coalesce(|run, next| {
            debug_assert!(run.end <= next.start, "Unsorted values: {} after {}", next.start, run.end);
            if run.touches(&next) {
                Ok(Interval::new(run.start, run.end.max(next.end)))
            } else {
                Err((run, next))
            }
        })
        .collect_vec();
    Ok(intervals)
}

/// Same as [`compact`] but accepts values in any order.
pub fn compact_unsorted(mut values: Vec<Value>) -> Result<Vec<Interval>, IndexError> {
    values.sort_unstable();
    values.dedup();
    compact(&values)
}
