use crate::Record;

/// Sorts records ascending by their full header (byte order).
pub fn sort_by_header(records: &mut [Record]) {
    records.sort_by(|a, b| a.header().cmp(b.header()));
}

/// Resolves identifiers against a record collection.
///
/// Lookups go through an index of `(identifier, position)` pairs sorted by
/// identifier, so the binary search stays valid even when header order and
/// identifier order disagree (`>a\tz` sorts before `>a b` by header, while
/// `a` sorts before `a\tz` by identifier). The index sort is stable: when
/// identifiers collide, the record appearing first in the collection wins.
pub struct Selector<'a> {
    records: &'a [Record],
    index: Vec<(&'a [u8], usize)>,
}

impl<'a> Selector<'a> {
    pub fn new(records: &'a [Record]) -> Self {
        let mut index: Vec<_> = records
            .iter()
            .enumerate()
            .map(|(pos, record)| (record.id(), pos))
            .collect();
        index.sort_by(|a, b| a.0.cmp(b.0));
        Self { records, index }
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns the record whose identifier equals `id`, if any.
    pub fn lookup(&self, id: &[u8]) -> Option<&'a Record> {
        let first = self.index.partition_point(|(key, _)| *key < id);
        match self.index.get(first) {
            Some(&(key, pos)) if key == id => Some(&self.records[pos]),
            _ => None,
        }
    }

    /// Looks up every identifier in order, skipping the unmatched ones.
    pub fn select<I, T>(&self, ids: I) -> Vec<&'a Record>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        ids.into_iter()
            .filter_map(|id| self.lookup(id.as_ref()))
            .collect()
    }
}
