use crate::{IndexError, Strategy, Value};

/// A set of values supporting exact membership tests, used as backend of an [`ExactSetIndex`].
pub trait ExactSet: Default + Send + Sync {
    const SIGNATURE: &'static str;

    fn build(values: &[Value]) -> Self;
    fn contains(&self, value: Value) -> bool;
    fn len(&self) -> usize;
}

impl ExactSet for std::collections::HashSet<Value> {
    const SIGNATURE: &'static str = "HASH_SET";

    fn build(values: &[Value]) -> Self {
        values.iter().copied().collect()
    }

    fn contains(&self, value: Value) -> bool {
        std::collections::HashSet::contains(self, &value)
    }

    fn len(&self) -> usize {
        std::collections::HashSet::len(self)
    }
}

/// Table sized for the exact number of values, without the slack left by incremental growth.
impl ExactSet for hashbrown::HashSet<Value> {
    const SIGNATURE: &'static str = "SPARSE_HASH_SET";

    fn build(values: &[Value]) -> Self {
        let mut set = hashbrown::HashSet::with_capacity(values.len());
        set.extend(values.iter().copied());
        set.shrink_to_fit();
        set
    }

    fn contains(&self, value: Value) -> bool {
        hashbrown::HashSet::contains(self, &value)
    }

    fn len(&self) -> usize {
        hashbrown::HashSet::len(self)
    }
}

/// Stores every known value individually, without any compaction.
#[derive(Clone, Default, Debug)]
pub struct ExactSetIndex<S> {
    set: S,
}

pub type HashSetIndex = ExactSetIndex<std::collections::HashSet<Value>>;
pub type SparseHashSetIndex = ExactSetIndex<hashbrown::HashSet<Value>>;

impl<S: ExactSet> ExactSetIndex<S> {
    pub const SIGNATURE: &'static str = S::SIGNATURE;

    pub fn new(known: &[Value]) -> Result<Self, IndexError> {
        let mut index = Self::default();
        index.prepare(known)?;
        Ok(index)
    }
}

impl<S: ExactSet> Strategy for ExactSetIndex<S> {
    fn prepare(&mut self, known: &[Value]) -> Result<(), IndexError> {
        if known.is_empty() {
            return Err(IndexError::EmptyKnownSet);
        }
        self.set = S::build(known);
        tracing::debug!("{} values", self.set.len());
        Ok(())
    }

    fn contains(&self, value: Value) -> bool {
        self.set.contains(value)
    }

    fn signature(&self) -> &'static str {
        S::SIGNATURE
    }

    fn num_entries(&self) -> usize {
        self.set.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_membership<S: ExactSet>() {
        let index = ExactSetIndex::<S>::new(&[1, 2, 3, 7, 8, 10, 10]).unwrap();
        assert_eq!(index.num_entries(), 6);
        assert_eq!(index.run(&[2, 5, 8, 9, 10, 11]), 3);
        assert!(index.contains(1));
        assert!(!index.contains(0));
        assert!(!index.contains(u32::MAX));
    }

    #[test]
    fn test_membership() {
        check_membership::<std::collections::HashSet<Value>>();
        check_membership::<hashbrown::HashSet<Value>>();
    }

    #[test]
    fn test_signatures() {
        assert_eq!(HashSetIndex::default().signature(), "HASH_SET");
        assert_eq!(SparseHashSetIndex::default().signature(), "SPARSE_HASH_SET");
    }
}
