//! Validated index expressions.

use std::fmt;

use ndb_value::errors::too_many_indices;
use ndb_value::ConvertResult;
use smallvec::SmallVec;

use crate::axis::AxisIndex;

/// Inline capacity for entries; almost every index has at most four.
type Entries = SmallVec<[AxisIndex; 4]>;

/// Ordered axis entries plus the number of array axes they consume.
///
/// The consumed count never exceeds `max_dims`: [`push`](Self::push) rejects
/// the entry that would cross it instead of truncating.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexExpression {
    entries: Entries,
    consumed: usize,
    max_dims: usize,
}

impl IndexExpression {
    pub fn new(max_dims: usize) -> Self {
        IndexExpression {
            entries: SmallVec::new(),
            consumed: 0,
            max_dims,
        }
    }

    /// Append an entry.
    ///
    /// # Errors
    ///
    /// `TooManyIndices` if the entry would take the consumed-axes count past
    /// `max_dims`. The expression is unchanged on failure.
    pub fn push(&mut self, entry: AxisIndex) -> ConvertResult<()> {
        let consumed = self.consumed + entry.consumed_axes();
        if consumed > self.max_dims {
            return Err(too_many_indices(consumed, self.max_dims));
        }
        tracing::trace!(%entry, consumed, "index entry");
        self.entries.push(entry);
        self.consumed = consumed;
        Ok(())
    }

    pub fn entries(&self) -> &[AxisIndex] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of array axes the entries address.
    pub fn consumed_axes(&self) -> usize {
        self.consumed
    }

    pub fn max_dims(&self) -> usize {
        self.max_dims
    }

    pub fn has_ellipsis(&self) -> bool {
        self.entries.iter().any(|e| matches!(e, AxisIndex::Ellipsis))
    }

    /// Any entry is an integer array or boolean mask.
    pub fn is_fancy(&self) -> bool {
        self.entries.iter().any(AxisIndex::is_fancy)
    }

    pub fn new_axis_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, AxisIndex::NewAxis))
            .count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AxisIndex> {
        self.entries.iter()
    }
}

impl IntoIterator for IndexExpression {
    type Item = AxisIndex;
    type IntoIter = smallvec::IntoIter<[AxisIndex; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a IndexExpression {
    type Item = &'a AxisIndex;
    type IntoIter = std::slice::Iter<'a, AxisIndex>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for IndexExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{entry}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests;
