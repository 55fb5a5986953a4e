//! Merge sort over slices of cheap-to-copy handles.
//!
//! The sort entry points run these on `&T` so records are never moved or
//! cloned while ordering. Both strategies are stable: on ties the element from
//! the left run, which came earlier in the input, is taken first.

use std::cmp::Ordering;

/// Merge sorted runs `left` and `right` onto the end of `out`.
///
/// Takes the head of `left` unless it compares strictly greater than the head
/// of `right`, then appends whatever tail remains.
pub fn merge_into<T, F>(left: &[T], right: &[T], out: &mut Vec<T>, compare: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut i = 0;
    let mut j = 0;

    while i < left.len() && j < right.len() {
        if compare(&left[i], &right[j]) != Ordering::Greater {
            out.push(left[i]);
            i += 1;
        } else {
            out.push(right[j]);
            j += 1;
        }
    }

    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
}

/// Recursive top-down merge sort.
///
/// Splits at `len / 2`, sorts both halves and merges them. Recursion depth is
/// `log2(len)`.
pub fn top_down<T, F>(items: &[T], compare: &mut F) -> Vec<T>
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items.to_vec();
    }

    let (left, right) = items.split_at(items.len() / 2);
    let left = top_down(left, compare);
    let right = top_down(right, compare);

    let mut out = Vec::with_capacity(items.len());
    merge_into(&left, &right, &mut out, compare);
    out
}

/// Iterative bottom-up merge sort.
///
/// Merges adjacent runs of width 1, 2, 4, ... between two buffers, so stack
/// usage is constant regardless of input length.
pub fn bottom_up<T, F>(items: &[T], compare: &mut F) -> Vec<T>
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    let mut src = items.to_vec();
    if len <= 1 {
        return src;
    }

    let mut dst = Vec::with_capacity(len);
    let mut width = 1;

    while width < len {
        dst.clear();

        let mut lo = 0;
        while lo < len {
            let mid = usize::min(lo + width, len);
            let hi = usize::min(mid + width, len);
            merge_into(&src[lo..mid], &src[mid..hi], &mut dst, compare);
            lo = hi;
        }

        std::mem::swap(&mut src, &mut dst);
        width = width.saturating_mul(2);
    }

    src
}

#[cfg(test)]
mod tests {
    use super::*;

    // Sort (key, tag) pairs by key only so ties expose stability.
    fn by_key(a: &(u8, usize), b: &(u8, usize)) -> Ordering {
        a.0.cmp(&b.0)
    }

    fn tagged(keys: &[u8]) -> Vec<(u8, usize)> {
        keys.iter().copied().zip(0..).collect()
    }

    #[test]
    fn merge_prefers_left_on_ties() {
        let left = [(1, 0), (2, 1)];
        let right = [(1, 2), (3, 3)];
        let mut out = Vec::new();
        merge_into(&left, &right, &mut out, &mut by_key);
        assert_eq!(out, vec![(1, 0), (1, 2), (2, 1), (3, 3)]);
    }

    #[test]
    fn merge_appends_tails() {
        let mut out = vec![(0, 9)];
        merge_into(&[(5, 0), (6, 1)], &[(1, 2)], &mut out, &mut by_key);
        assert_eq!(out, vec![(0, 9), (1, 2), (5, 0), (6, 1)]);

        let mut out = Vec::new();
        merge_into(&[], &[(1, 0)], &mut out, &mut by_key);
        assert_eq!(out, vec![(1, 0)]);
    }

    #[test]
    fn base_cases() {
        let empty: [(u8, usize); 0] = [];
        assert!(top_down(&empty, &mut by_key).is_empty());
        assert!(bottom_up(&empty, &mut by_key).is_empty());
        assert_eq!(top_down(&[(7, 0)], &mut by_key), vec![(7, 0)]);
        assert_eq!(bottom_up(&[(7, 0)], &mut by_key), vec![(7, 0)]);
    }

    #[test]
    fn both_strategies_sort_stably() {
        let input = tagged(&[3, 1, 2, 1, 3, 0, 2, 1, 0]);
        let expected = {
            let mut v = input.clone();
            v.sort_by(by_key);
            v
        };

        assert_eq!(top_down(&input, &mut by_key), expected);
        assert_eq!(bottom_up(&input, &mut by_key), expected);
    }

    #[test]
    fn odd_lengths_and_reversed_input() {
        for len in 2..40u8 {
            let keys: Vec<u8> = (0..len).rev().collect();
            let input = tagged(&keys);
            let sorted = bottom_up(&input, &mut by_key);
            assert!(sorted.windows(2).all(|w| w[0].0 <= w[1].0));
            assert_eq!(sorted, top_down(&input, &mut by_key));
        }
    }

    #[test]
    fn equal_comparator_keeps_order() {
        let input = tagged(&[5, 4, 3, 2, 1]);
        let mut equal = |_: &(u8, usize), _: &(u8, usize)| Ordering::Equal;
        assert_eq!(top_down(&input, &mut equal), input);
        assert_eq!(bottom_up(&input, &mut equal), input);
    }
}
