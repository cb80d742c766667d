use crate::{IndexError, Strategy, Value, compact};
use std::collections::BTreeMap;

/// Ranges of known values stored in an ordered map, keyed by their first value.
#[derive(Clone, Default, Debug)]
pub struct OrderedMapIndex {
    // start -> end
    ranges: BTreeMap<Value, Value>,
}

impl OrderedMapIndex {
    pub const SIGNATURE: &'static str = "ORDERED_MAP";

    pub fn new(known: &[Value]) -> Result<Self, IndexError> {
        let mut index = Self::default();
        index.prepare(known)?;
        Ok(index)
    }
}

impl Strategy for OrderedMapIndex {
    fn prepare(&mut self, known: &[Value]) -> Result<(), IndexError> {
        let intervals = compact(known)?;
        self.ranges = intervals.iter().map(|i| (i.start, i.end)).collect();
        tracing::debug!("{} ranges", self.ranges.len());
        Ok(())
    }

    fn contains(&self, value: Value) -> bool {
        // the only candidate is the last range starting before the value
        match self.ranges.range(..=value).next_back() {
            Some((_, &end)) => value <= end,
            None => false,
        }
    }

    fn signature(&self) -> &'static str {
        Self::SIGNATURE
    }

    fn num_entries(&self) -> usize {
        self.ranges.len()
    }
}
