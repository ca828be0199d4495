//! Offset-set removal shared by the list-backed stores

/// Remove the elements at `offsets`, returning them in ascending offset order
///
/// Duplicate offsets are removed once; out-of-range offsets are skipped and
/// logged.
pub(crate) fn remove_offsets<T>(items: &mut Vec<T>, offsets: &[usize], list: &str) -> Vec<T> {
    let mut sorted: Vec<usize> = offsets.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let len = items.len();
    let (valid, invalid): (Vec<usize>, Vec<usize>) = sorted.into_iter().partition(|&i| i < len);
    if !invalid.is_empty() {
        tracing::warn!(list, ?invalid, len, "ignoring out-of-range offsets");
    }

    let mut removed: Vec<T> = valid.into_iter().rev().map(|i| items.remove(i)).collect();
    removed.reverse();
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_in_any_order_once() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        let removed = remove_offsets(&mut items, &[3, 1, 3], "test");
        assert_eq!(removed, vec!['b', 'd']);
        assert_eq!(items, vec!['a', 'c']);
    }

    #[test]
    fn skips_out_of_range() {
        let mut items = vec![1, 2];
        let removed = remove_offsets(&mut items, &[0, 9], "test");
        assert_eq!(removed, vec![1]);
        assert_eq!(items, vec![2]);
    }

    #[test]
    fn empty_offsets_remove_nothing() {
        let mut items = vec![1, 2];
        assert!(remove_offsets(&mut items, &[], "test").is_empty());
        assert_eq!(items.len(), 2);
    }
}
