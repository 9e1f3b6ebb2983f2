//! Bounded FIFO tabu memory.

use std::collections::VecDeque;

/// Short-term memory of recently applied moves.
///
/// Holds at most `capacity` entries; pushing onto a full list evicts the
/// oldest entry. Lists are short (proportional to the tour length), so
/// membership is a linear scan.
#[derive(Debug, Clone)]
pub struct TabuList<M> {
    capacity: usize,
    entries: VecDeque<M>,
}

impl<M: PartialEq> TabuList<M> {
    /// Creates an empty list holding at most `capacity` moves.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Records `mv`, evicting the oldest entry if the list is full.
    pub fn push(&mut self, mv: M) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(mv);
    }

    /// Returns `true` if `mv` is currently tabu.
    pub fn contains(&self, mv: &M) -> bool {
        self.entries.contains(mv)
    }

    /// Forgets every move.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &M> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_evicts_oldest() {
        let mut list = TabuList::new(2);
        list.push(1);
        list.push(2);
        list.push(3);
        assert!(!list.contains(&1));
        assert!(list.contains(&2));
        assert!(list.contains(&3));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut list = TabuList::new(3);
        list.push("a");
        list.clear();
        assert!(list.is_empty());
        assert!(!list.contains(&"a"));
    }

    #[test]
    fn test_zero_capacity_raised() {
        let mut list = TabuList::new(0);
        assert_eq!(list.capacity(), 1);
        list.push(7);
        list.push(8);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![8]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_bounded_and_fifo(
            capacity in 1usize..10,
            pushes in proptest::collection::vec(0u32..100, 0..50),
        ) {
            let mut list = TabuList::new(capacity);
            for &mv in &pushes {
                list.push(mv);
                prop_assert!(list.len() <= capacity);
            }
            let keep = pushes.len().min(capacity);
            let expected = &pushes[pushes.len() - keep..];
            let actual: Vec<u32> = list.iter().copied().collect();
            prop_assert_eq!(actual.as_slice(), expected);
        }
    }
}
