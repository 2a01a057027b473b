use super::{
    compare::{compare_within_division, DivisionKey},
    record::{RawRecord, Record},
};
use crate::utils::util::Result;
use std::slice;

/// Records in catalog order. Built only by [`sort`] or [`sort_records`] and never
/// modified afterwards; a new fetch produces a new collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedCollection {
    records: Vec<Record>,
}

impl OrderedCollection {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }
}

impl<'a> IntoIterator for &'a OrderedCollection {
    type Item = &'a Record;
    type IntoIter = slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Validates fetched records and orders them.
///
/// Fails on the first record without a string `division`; nothing is sorted in
/// that case.
pub fn sort(raw_records: Vec<RawRecord>) -> Result<OrderedCollection> {
    let records = raw_records
        .into_iter()
        .enumerate()
        .map(|(position, raw)| Record::from_raw(raw, position))
        .collect::<Result<Vec<_>>>()?;
    Ok(sort_records(records))
}

/// Orders validated records. Records the comparator cannot tell apart keep
/// their input order.
pub fn sort_records(records: Vec<Record>) -> OrderedCollection {
    if records.len() < 2 {
        return OrderedCollection { records };
    }

    let mut keyed_records = records
        .into_iter()
        .enumerate()
        .map(|(record_ordinal, record)| (DivisionKey::new(&record.division), record_ordinal, record))
        .collect::<Vec<_>>();
    keyed_records.sort_by(|(left_key, left_idx, left), (right_key, right_idx, right)| {
        left_key
            .cmp(right_key)
            .then_with(|| compare_within_division(left, right))
            .then_with(|| left_idx.cmp(right_idx))
    });

    let records = keyed_records
        .into_iter()
        .map(|(_, _, record)| record)
        .collect::<Vec<_>>();
    log::debug!("Sorter: ordered {} records", records.len());
    OrderedCollection { records }
}
