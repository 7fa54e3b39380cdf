//! Persistent append-only sequence.

use std::fmt;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeSeq, Serializer};

struct Node<T> {
    prev: Option<Arc<Node<T>>>,
    last: T,
    len: usize,
}

/// An ordered sequence that grows at the right end without mutating any
/// earlier state.
///
/// Every [`append`](Self::append) returns a new sequence sharing its prefix
/// with the old one, so holders of an older sequence never observe later
/// appends. `append`, [`split_last`](Self::split_last), `len` and `clone`
/// are O(1).
pub struct OrderedSequence<T> {
    tail: Option<Arc<Node<T>>>,
}

impl<T> OrderedSequence<T> {
    /// The empty sequence.
    pub fn new() -> Self {
        Self { tail: None }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.tail.as_ref().map_or(0, |n| n.len)
    }

    /// Whether there are no elements.
    pub fn is_empty(&self) -> bool {
        self.tail.is_none()
    }

    /// A new sequence with `elem` after all elements of `self`.
    pub fn append(&self, elem: T) -> Self {
        let len = self.len() + 1;
        Self {
            tail: Some(Arc::new(Node {
                prev: self.tail.clone(),
                last: elem,
                len,
            })),
        }
    }

    /// The last element.
    pub fn last(&self) -> Option<&T> {
        self.tail.as_deref().map(|n| &n.last)
    }

    /// The sequence without its last element, and that element.
    pub fn split_last(&self) -> Option<(Self, &T)> {
        let node = self.tail.as_deref()?;
        Some((
            Self {
                tail: node.prev.clone(),
            },
            &node.last,
        ))
    }

    /// Element at `index`, counting from the front. O(n).
    pub fn get(&self, index: usize) -> Option<&T> {
        let len = self.len();
        if index >= len {
            return None;
        }
        self.iter_rev().nth(len - 1 - index)
    }

    /// Elements from front to back.
    ///
    /// Nodes link backwards, so this first collects `len` references into a
    /// buffer: O(n) time and memory per call. Use
    /// [`iter_rev`](Self::iter_rev) when order does not matter.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        let mut items: Vec<&T> = self.iter_rev().collect();
        items.reverse();
        items.into_iter()
    }

    /// Elements from back to front, without buffering.
    pub fn iter_rev(&self) -> impl Iterator<Item = &T> {
        let mut cur = self.tail.as_deref();
        std::iter::from_fn(move || {
            let node = cur?;
            cur = node.prev.as_deref();
            Some(&node.last)
        })
    }

    /// Whether both sequences share one representation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.tail, &other.tail) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Clone> OrderedSequence<T> {
    /// Copy the elements into a `Vec`, front to back.
    pub fn to_vec(&self) -> Vec<T> {
        let mut items: Vec<T> = self.iter_rev().cloned().collect();
        items.reverse();
        items
    }
}

impl<T> Clone for OrderedSequence<T> {
    fn clone(&self) -> Self {
        Self {
            tail: self.tail.clone(),
        }
    }
}

impl<T> Default for OrderedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlink nodes one at a time; the default recursive drop overflows the
// stack on long sequences.
impl<T> Drop for OrderedSequence<T> {
    fn drop(&mut self) {
        let mut cur = self.tail.take();
        while let Some(node) = cur {
            match Arc::try_unwrap(node) {
                Ok(mut node) => cur = node.prev.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T> FromIterator<T> for OrderedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |seq, elem| seq.append(elem))
    }
}

impl<T> From<Vec<T>> for OrderedSequence<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: PartialEq> PartialEq for OrderedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter_rev().eq(other.iter_rev())
    }
}

impl<T: Eq> Eq for OrderedSequence<T> {}

impl<T: fmt::Debug> fmt::Debug for OrderedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Serialize> Serialize for OrderedSequence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for elem in self.iter() {
            seq.serialize_element(elem)?;
        }
        seq.end()
    }
}
