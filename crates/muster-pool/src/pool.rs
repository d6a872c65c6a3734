//! The resource pool and its handles.

use std::fmt;

use crate::error::PoolError;

/// Index-stable handle to a record in a [`ResourcePool`].
///
/// Handles are positions in the pool's insertion order and stay valid for
/// the pool's lifetime — records are never removed, only exhausted. This
/// keeps record identity stable under any re-sorting or filtering the
/// caller performs on its own views of the data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct PoolHandle(u32);

impl PoolHandle {
    /// Position of the record in insertion order.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PoolHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug)]
struct Entry<R> {
    record: R,
    remaining: u32,
}

/// A mutable collection of resource records with per-record capacity.
///
/// Records keep their insertion order, which is the deterministic scan
/// order the matching engine's tie-breaking relies on.
#[derive(Clone, Debug)]
pub struct ResourcePool<R> {
    entries: Vec<Entry<R>>,
}

impl<R> ResourcePool<R> {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a pool from records, assigning each its capacity.
    pub fn from_records<I>(records: I, capacity: impl Fn(&R) -> u32) -> Self
    where
        I: IntoIterator<Item = R>,
    {
        let mut pool = Self::new();
        for record in records {
            let cap = capacity(&record);
            let _ = pool.insert(record, cap);
        }
        pool
    }

    /// Add a record with `capacity` remaining uses; returns its handle.
    pub fn insert(&mut self, record: R, capacity: u32) -> PoolHandle {
        let index = u32::try_from(self.entries.len()).expect("pool size fits in u32");
        self.entries.push(Entry {
            record,
            remaining: capacity,
        });
        PoolHandle(index)
    }

    /// Number of records, including exhausted ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pool holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The record behind `handle`, if the handle belongs to this pool.
    pub fn record(&self, handle: PoolHandle) -> Option<&R> {
        self.entries.get(handle.index()).map(|e| &e.record)
    }

    /// Remaining capacity of `handle`.
    pub fn remaining(&self, handle: PoolHandle) -> Option<u32> {
        self.entries.get(handle.index()).map(|e| e.remaining)
    }

    /// Records with capacity left, in insertion order.
    pub fn available(&self) -> impl Iterator<Item = (PoolHandle, &R)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.remaining > 0)
            .map(|(i, e)| (PoolHandle(i as u32), &e.record))
    }

    /// Consume one unit of capacity on `handle`.
    ///
    /// Failing here is an invariant violation, not a recoverable
    /// condition: callers check availability first. Capacity never goes
    /// below zero.
    pub fn reserve(&mut self, handle: PoolHandle) -> Result<(), PoolError> {
        let entry = self
            .entries
            .get_mut(handle.index())
            .ok_or(PoolError::UnknownHandle { handle })?;
        if entry.remaining == 0 {
            return Err(PoolError::CapacityExhausted { handle });
        }
        entry.remaining -= 1;
        Ok(())
    }

    /// Total capacity left across all records.
    pub fn total_remaining(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.remaining)).sum()
    }
}

impl<R> Default for ResourcePool<R> {
    fn default() -> Self {
        Self::new()
    }
}
