//! Canonical vertex sets.

use std::cmp::Ordering;

/// Identifier of a vertex in the input graph. Identifiers are 1-based.
pub type VertexId = u32;

/// A set of vertices in canonical form: members sorted ascending.
///
/// Two sets are equal iff their canonical sequences are element-wise equal.
/// Duplicate members are tolerated rather than removed; legitimate inputs
/// are sets, so equality over the sorted sequences is sufficient.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexSet {
    members: Vec<VertexId>,
}

impl VertexSet {
    /// Create an empty vertex set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonicalize a raw member list by sorting it ascending.
    pub fn from_unsorted(mut members: Vec<VertexId>) -> Self {
        members.sort_unstable();
        Self { members }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate over the members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.members.iter().copied()
    }

    /// Set difference `self - other`, computed as a linear merge over the
    /// two canonical sequences.
    pub fn difference(&self, other: &VertexSet) -> Vec<VertexId> {
        let mut diff = Vec::new();
        let mut i = 0;
        let mut j = 0;
        while i < self.members.len() && j < other.members.len() {
            match self.members[i].cmp(&other.members[j]) {
                Ordering::Less => {
                    diff.push(self.members[i]);
                    i += 1;
                }
                Ordering::Greater => {
                    j += 1;
                }
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
            }
        }
        diff.extend_from_slice(&self.members[i..]);
        diff
    }

    /// Canonical textual key for this set.
    ///
    /// Equal sets produce identical keys, unequal sets distinct keys; used
    /// for membership tests in a seen-states collection.
    pub fn key(&self) -> String {
        let mut key = String::new();
        for v in &self.members {
            key.push_str(&v.to_string());
            key.push(' ');
        }
        key
    }
}

impl FromIterator<VertexId> for VertexSet {
    fn from_iter<I: IntoIterator<Item = VertexId>>(iter: I) -> Self {
        Self::from_unsorted(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_sorts_members() {
        let set = VertexSet::from_unsorted(vec![3, 1, 2]);

        assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_permutations_are_equal() {
        let a = VertexSet::from_unsorted(vec![5, 1, 9]);
        let b = VertexSet::from_unsorted(vec![9, 5, 1]);

        assert_eq!(a, b);
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn test_unequal_sets_have_distinct_keys() {
        let a = VertexSet::from_unsorted(vec![1, 2]);
        let b = VertexSet::from_unsorted(vec![1, 3]);

        assert_ne!(a, b);
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn test_difference_is_left_minus_right() {
        let a = VertexSet::from_unsorted(vec![1, 3, 5]);
        let b = VertexSet::from_unsorted(vec![3, 4, 6]);

        assert_eq!(a.difference(&b), vec![1, 5]);
        assert_eq!(b.difference(&a), vec![4, 6]);
    }

    #[test]
    fn test_difference_with_empty_set() {
        let a = VertexSet::from_unsorted(vec![2, 7]);
        let empty = VertexSet::new();

        assert_eq!(a.difference(&empty), vec![2, 7]);
        assert!(empty.difference(&a).is_empty());
    }

    #[test]
    fn test_empty_set() {
        let set = VertexSet::new();

        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.key(), "");
    }
}
