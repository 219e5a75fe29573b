use std::cmp::Ordering;

use crate::error::ListError;
use crate::list::{List, RawList};

impl<T> List<T> {
    /// Sort the list with its configured comparator.
    ///
    /// The chain ends up in non-decreasing precedence order: the element
    /// taking precedence over every other sits at the tail, so [`pop`]
    /// yields elements highest-precedence-first. Ties never swap. A list
    /// without a comparator has every element at equal precedence and is
    /// already sorted.
    ///
    /// # Complexity
    ///
    /// Bubble sort over a linked chain: *O*(*n*²) comparisons and swaps,
    /// plus *O*(*n*²) head-walks since every adjacent access relocates
    /// its nodes from the head. Suitable for small lists only.
    ///
    /// # Examples
    ///
    /// ```
    /// use guarded_list::List;
    /// use std::sync::Arc;
    ///
    /// let list = List::new(
    ///     None,
    ///     Some(Arc::new(|a: &i32, b: &i32| a.cmp(b))),
    ///     Arc::new(drop),
    /// )
    /// .unwrap();
    /// for value in [63, 255, 127] {
    ///     list.push(value).unwrap();
    /// }
    ///
    /// list.sort().unwrap();
    ///
    /// assert_eq!(list.pop(), Some(255));
    /// assert_eq!(list.pop(), Some(127));
    /// assert_eq!(list.pop(), Some(63));
    /// ```
    ///
    /// [`pop`]: List::pop
    pub fn sort(&self) -> Result<(), ListError> {
        self.with_inner(|raw| match raw.cmp.clone() {
            Some(cmp) => bubble_sort(raw, &mut |a, b| cmp(a, b)),
            None => Ok(()),
        })
    }

    /// Sort the list with an explicit comparator, overriding the
    /// configured one for this call only. Same ordering contract as
    /// [`sort`](List::sort).
    ///
    /// # Examples
    ///
    /// ```
    /// use guarded_list::List;
    /// use std::sync::Arc;
    ///
    /// let list = List::new(None, None, Arc::new(drop)).unwrap();
    /// for value in [2, 3, 1] {
    ///     list.push(value).unwrap();
    /// }
    ///
    /// // reverse the precedence: smallest value pops first
    /// list.sort_by(|a, b| b.cmp(a)).unwrap();
    /// assert_eq!(list.pop(), Some(1));
    /// assert_eq!(list.pop(), Some(2));
    /// assert_eq!(list.pop(), Some(3));
    /// ```
    pub fn sort_by<F>(&self, mut compare: F) -> Result<(), ListError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.with_inner(|raw| bubble_sort(raw, &mut compare))
    }

    /// Reverse the list in place by swapping payloads between symmetric
    /// positions from both ends toward the middle. Empty and
    /// single-element lists are already reversed.
    ///
    /// # Examples
    ///
    /// ```
    /// use guarded_list::List;
    /// use std::sync::Arc;
    ///
    /// let list = List::new(None, None, Arc::new(drop)).unwrap();
    /// for value in [1, 2, 3] {
    ///     list.push(value).unwrap();
    /// }
    ///
    /// list.reverse().unwrap();
    /// assert_eq!(list.shift(), Some(3));
    /// assert_eq!(list.shift(), Some(2));
    /// assert_eq!(list.shift(), Some(1));
    /// ```
    pub fn reverse(&self) -> Result<(), ListError> {
        self.with_inner(|raw| {
            let len = raw.len;
            for front in 0..len / 2 {
                let back = len - 1 - front;
                let a = raw.node_at(front).ok_or(ListError::BadEntry)?;
                let b = raw.node_at(back).ok_or(ListError::BadEntry)?;
                // SAFETY: both nodes came from walking this chain and the
                // indices are distinct.
                unsafe { RawList::swap_elements(a, b) };
            }
            Ok(())
        })
    }
}

/// Repeat full passes until the sortedness check confirms no adjacent
/// pair is out of order.
fn bubble_sort<T, F>(raw: &mut RawList<T>, compare: &mut F) -> Result<(), ListError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    while !is_sorted(raw, compare)? {
        bubble_pass(raw, compare)?;
    }
    Ok(())
}

/// One pass over all adjacent pairs, swapping payloads wherever the left
/// element takes precedence over its right neighbor. Each pair is
/// relocated from the head, which is what makes the whole sort
/// *O*(*n*²) walks on top of *O*(*n*²) comparisons.
fn bubble_pass<T, F>(raw: &mut RawList<T>, compare: &mut F) -> Result<(), ListError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    for at in 0..raw.len.saturating_sub(1) {
        let a = raw.node_at(at).ok_or(ListError::BadEntry)?;
        let b = raw.node_at(at + 1).ok_or(ListError::BadEntry)?;
        // SAFETY: `node_at` only yields live nodes of this chain, and the
        // two indices are distinct.
        unsafe {
            if compare(&a.as_ref().element, &b.as_ref().element) == Ordering::Greater {
                RawList::swap_elements(a, b);
            }
        }
    }
    Ok(())
}

/// The termination check between passes: sorted means no adjacent pair
/// has the left element taking precedence over the right.
fn is_sorted<T, F>(raw: &RawList<T>, compare: &mut F) -> Result<bool, ListError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    for at in 0..raw.len.saturating_sub(1) {
        let a = raw.node_at(at).ok_or(ListError::BadEntry)?;
        let b = raw.node_at(at + 1).ok_or(ListError::BadEntry)?;
        // SAFETY: `node_at` only yields live nodes of this chain.
        unsafe {
            if compare(&a.as_ref().element, &b.as_ref().element) == Ordering::Greater {
                return Ok(false);
            }
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::sync::Arc;

    fn ordered(values: &[i32]) -> List<i32> {
        let list = List::new(
            None,
            Some(Arc::new(|a: &i32, b: &i32| a.cmp(b))),
            Arc::new(drop),
        )
        .unwrap();
        for &value in values {
            list.push(value).unwrap();
        }
        list
    }

    fn pops(list: &List<i32>) -> Vec<i32> {
        let mut popped = Vec::new();
        while let Some(value) = list.pop() {
            popped.push(value);
        }
        popped
    }

    #[test]
    fn sort_pops_highest_precedence_first() {
        let list = ordered(&[63, 255, 127]);
        list.sort().unwrap();
        assert_eq!(pops(&list), vec![255, 127, 63]);
    }

    #[test]
    fn sort_handles_trivial_lists() {
        let list = ordered(&[]);
        assert_eq!(list.sort(), Ok(()));
        assert!(list.is_empty());

        let list = ordered(&[1]);
        assert_eq!(list.sort(), Ok(()));
        assert_eq!(pops(&list), vec![1]);
    }

    #[test]
    fn sort_without_comparator_is_a_no_op() {
        let list = List::new(None, None, Arc::new(drop)).unwrap();
        for value in [3, 1, 2] {
            list.push(value).unwrap();
        }
        list.sort().unwrap();
        assert_eq!(pops(&list), vec![2, 1, 3]);
    }

    #[test]
    fn sort_keeps_duplicates() {
        let list = ordered(&[5, 1, 5, 3, 1]);
        list.sort().unwrap();
        assert_eq!(pops(&list), vec![5, 5, 3, 1, 1]);
    }

    #[test]
    fn sort_by_overrides_the_configured_comparator() {
        let list = ordered(&[2, 3, 1]);
        list.sort_by(|a, b| b.cmp(a)).unwrap();
        assert_eq!(pops(&list), vec![1, 2, 3]);
    }

    #[test]
    fn sort_is_idempotent() {
        let list = ordered(&[4, 2, 8, 6]);
        list.sort().unwrap();
        list.sort().unwrap();
        assert_eq!(pops(&list), vec![8, 6, 4, 2]);
    }

    #[test]
    fn reverse_even_length_round_trips() {
        let list = ordered(&[255, 127, 63, 63]);
        list.reverse().unwrap();
        assert_eq!(pops(&list), vec![255, 127, 63, 63]);
    }

    #[test]
    fn reverse_twice_restores_order() {
        let list = ordered(&[1, 2, 3, 4, 5]);
        list.reverse().unwrap();
        list.reverse().unwrap();
        assert_eq!(pops(&list), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn reverse_handles_trivial_lists() {
        let list = ordered(&[]);
        assert_eq!(list.reverse(), Ok(()));

        let list = ordered(&[7]);
        assert_eq!(list.reverse(), Ok(()));
        assert_eq!(pops(&list), vec![7]);
    }
}
