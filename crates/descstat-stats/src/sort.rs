/// Sorts values in ascending order with a top-down merge sort.
///
/// The input slice is left untouched and a freshly allocated, sorted vector is
/// returned. The sort is stable: when two elements compare equal, the one that
/// appeared first in `values` also comes first in the output.
///
/// Elements that are not comparable (such as `NaN`) never win a comparison
/// against their neighbour, so their final position is deterministic but not
/// meaningful.
///
/// # Complexity
///
/// O(n log n) comparisons and O(n log n) temporary allocation.
///
/// # Examples
///
/// ```
/// use descstat_stats::sort::merge_sort;
///
/// let values = [3.0, 1.0, 2.0, 1.0];
/// assert_eq!(merge_sort(&values), vec![1.0, 1.0, 2.0, 3.0]);
/// assert_eq!(values, [3.0, 1.0, 2.0, 1.0]);
/// ```
#[must_use]
pub fn merge_sort<T>(values: &[T]) -> Vec<T>
where
    T: PartialOrd + Copy,
{
    if values.len() <= 1 {
        return values.to_vec();
    }
    let mid = values.len() / 2;
    let left = merge_sort(&values[..mid]);
    let right = merge_sort(&values[mid..]);
    merge(&left, &right)
}

/// Merges two sorted runs, taking from `left` on ties.
fn merge<T>(left: &[T], right: &[T]) -> Vec<T>
where
    T: PartialOrd + Copy,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}
