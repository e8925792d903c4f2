//! Shortest-edit-script elements.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// The manipulation kind of a single [`SesElement`].
///
/// The derived order (`Delete < Common < Add`) participates in the secondary
/// total order over edit-script elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EditKind {
    /// The element is present in `a` but not in `b`.
    Delete,
    /// The element is present in both sequences.
    Common,
    /// The element is present in `b` but not in `a`.
    Add,
}

/// One entry of a shortest edit script.
///
/// Indices are 1-based positions into the caller's original, unswapped
/// sequences; the unused side of an insertion or deletion carries `0`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SesElement<T> {
    /// The sequence element this entry manipulates.
    pub value: T,
    /// How the element participates in the transformation.
    pub kind: EditKind,
    /// 1-based position in the original `a`, or `0` for an [`EditKind::Add`].
    pub a_index: usize,
    /// 1-based position in the original `b`, or `0` for an [`EditKind::Delete`].
    pub b_index: usize,
}

impl<T> SesElement<T> {
    /// Total order over elements under the caller's value comparator:
    /// value first, then kind, then the two positions.
    pub fn compare_by<C>(&self, other: &Self, cmp: C) -> Ordering
    where
        C: Fn(&T, &T) -> Ordering,
    {
        cmp(&self.value, &other.value)
            .then_with(|| self.kind.cmp(&other.kind))
            .then_with(|| self.a_index.cmp(&other.a_index))
            .then_with(|| self.b_index.cmp(&other.b_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elem(value: char, kind: EditKind, a_index: usize, b_index: usize) -> SesElement<char> {
        SesElement {
            value,
            kind,
            a_index,
            b_index,
        }
    }

    #[test]
    fn kind_order_is_delete_common_add() {
        assert!(EditKind::Delete < EditKind::Common);
        assert!(EditKind::Common < EditKind::Add);
    }

    #[test]
    fn compare_by_value_dominates() {
        let x = elem('a', EditKind::Add, 0, 9);
        let y = elem('b', EditKind::Delete, 1, 0);
        assert_eq!(x.compare_by(&y, |p, q| p.cmp(q)), Ordering::Less);
    }

    #[test]
    fn compare_by_falls_through_to_positions() {
        let x = elem('a', EditKind::Common, 1, 1);
        let y = elem('a', EditKind::Common, 1, 2);
        assert_eq!(x.compare_by(&y, |p, q| p.cmp(q)), Ordering::Less);
        assert_eq!(x.compare_by(&x.clone(), |p, q| p.cmp(q)), Ordering::Equal);
    }
}
