//! Stable reordering

/// Move the element at `from` to `to`, shifting the elements in between
///
/// Extract-then-reinsert, never a swap: every other element keeps its
/// relative order. `to` past the end is clamped to the last slot.
/// Returns `false` when `from` is out of range.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() {
        return false;
    }
    let to = to.min(items.len() - 1);
    if from != to {
        let item = items.remove(from);
        items.insert(to, item);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn move_forward_shifts_intervening_back() {
        let mut v = vec!['a', 'b', 'c', 'd', 'e'];
        assert!(move_item(&mut v, 1, 3));
        assert_eq!(v, vec!['a', 'c', 'd', 'b', 'e']);
    }

    #[test]
    fn move_backward_shifts_intervening_forward() {
        let mut v = vec!['a', 'b', 'c', 'd', 'e'];
        assert!(move_item(&mut v, 4, 0));
        assert_eq!(v, vec!['e', 'a', 'b', 'c', 'd']);
    }

    #[test]
    fn target_past_end_is_clamped() {
        let mut v = vec![1, 2, 3];
        assert!(move_item(&mut v, 0, 99));
        assert_eq!(v, vec![2, 3, 1]);
    }

    #[test]
    fn source_out_of_range_is_rejected() {
        let mut v = vec![1, 2, 3];
        assert!(!move_item(&mut v, 3, 0));
        assert_eq!(v, vec![1, 2, 3]);

        let mut empty: Vec<u8> = Vec::new();
        assert!(!move_item(&mut empty, 0, 0));
    }

    proptest! {
        #[test]
        fn prop_move_preserves_order_of_untouched(
            len in 1usize..40,
            from_seed in any::<usize>(),
            to_seed in any::<usize>(),
        ) {
            let original: Vec<usize> = (0..len).collect();
            let from = from_seed % len;
            let to = to_seed % len;

            let mut moved = original.clone();
            prop_assert!(move_item(&mut moved, from, to));

            prop_assert_eq!(moved.len(), len);
            prop_assert_eq!(moved[to], from);

            let rest_before: Vec<usize> = original.iter().copied().filter(|&x| x != from).collect();
            let rest_after: Vec<usize> = moved.iter().copied().filter(|&x| x != from).collect();
            prop_assert_eq!(rest_before, rest_after);
        }
    }
}
