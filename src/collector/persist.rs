//! Bulk persistence of a [`Collector`].
//!
//! Layout: a `u64` little-endian record count followed by that many records,
//! each written by the element's [`Encode`] implementation. Removed slots are
//! never written, so on-disk positions are compacted. Loading appends, and
//! every loaded element starts out active.

use std::io::{Read, Write};

use super::Collector;
use crate::{
    error::CollectorError,
    fs::Store,
    logging::collector_log,
    option::{LoadPolicy, SaveMode},
    serdes::{Decode, Encode},
};

impl<T> Collector<T>
where
    T: Decode,
{
    /// Append the collection stored under `name` after the existing slots.
    ///
    /// Existing slots keep their indices and removal flags; every loaded
    /// element starts out active. Returns the number of elements loaded.
    ///
    /// # Errors
    /// Fails if `name` cannot be opened or its header is unusable, in which
    /// case the collection is left untouched, or if the stream ends early, in
    /// which case the configured [`LoadPolicy`] decides whether the records
    /// appended before the fault are kept.
    pub fn load<S>(&mut self, store: &S, name: &str) -> Result<usize, CollectorError>
    where
        S: Store + ?Sized,
    {
        let result = store
            .open_read(name)
            .map_err(CollectorError::from)
            .and_then(|mut reader| self.load_from(&mut reader));

        match &result {
            Ok(records) => collector_log!(
                log::Level::Info,
                "collection_loaded",
                "name={} records={}",
                name,
                records
            ),
            Err(err) => collector_log!(
                log::Level::Warn,
                "collection_load_failed",
                "name={} slots={} error={}",
                name,
                self.len(),
                err
            ),
        }
        result
    }

    /// Append the records read from `reader` after the existing slots.
    ///
    /// # Errors
    /// See [`Collector::load`].
    pub fn load_from<R>(&mut self, reader: &mut R) -> Result<usize, CollectorError>
    where
        R: Read,
    {
        let count = u64::decode(reader)?;
        if let Some(max_records) = self.option.max_records {
            if count > max_records {
                return Err(CollectorError::Corrupt("record count exceeds configured limit"));
            }
        }
        let count = usize::try_from(count)
            .map_err(|_| CollectorError::Corrupt("record count does not fit in memory"))?;

        let len = self.items.len();
        let result = self.decode_records(reader, count);
        if result.is_err() && self.option.load_policy == LoadPolicy::Rollback {
            // Appended slots are all active, so `removed_count` is unaffected.
            self.items.truncate(len);
            self.removed.truncate(len);
        }
        debug_assert!(self.invariant());
        result.map(|()| count)
    }

    fn decode_records<R>(&mut self, reader: &mut R, count: usize) -> Result<(), CollectorError>
    where
        R: Read,
    {
        let reserve = count.min(self.option.preallocate_limit);
        self.items.reserve(reserve);
        self.removed.reserve(reserve);

        for index in 0..count {
            let item = T::decode(reader).map_err(|err| CollectorError::Decode {
                index,
                source: Box::new(err),
            })?;
            self.add(item);
        }
        Ok(())
    }
}

impl<T> Collector<T>
where
    T: Encode,
{
    /// Write the active elements to the resource called `name`, replacing
    /// whatever it held.
    ///
    /// Returns the number of elements written.
    ///
    /// # Errors
    /// Fails if `name` cannot be opened for writing or any write fails. The
    /// contents of the resource are unspecified after a failure.
    pub fn save<S>(&self, store: &S, name: &str) -> Result<usize, CollectorError>
    where
        S: Store + ?Sized,
    {
        let result = store
            .open_write(name)
            .map_err(CollectorError::from)
            .and_then(|mut writer| self.save_to(&mut writer));

        match &result {
            Ok(records) => collector_log!(
                log::Level::Info,
                "collection_saved",
                "name={} records={} removed={}",
                name,
                records,
                self.removed_count
            ),
            Err(err) => collector_log!(
                log::Level::Warn,
                "collection_save_failed",
                "name={} error={}",
                name,
                err
            ),
        }
        result
    }

    /// Write the active elements to `writer` and flush it.
    ///
    /// # Errors
    /// See [`Collector::save`].
    pub fn save_to<W>(&self, writer: &mut W) -> Result<usize, CollectorError>
    where
        W: Write,
    {
        debug_assert!(self.invariant());

        let active = self.active_len();
        (active as u64).encode(writer)?;

        let scanned = match self.option.save_mode {
            SaveMode::Compact => self.items.len(),
            SaveMode::Legacy => active,
        };
        let mut written = 0;
        for index in 0..scanned {
            if self.removed[index] {
                continue;
            }
            self.items[index]
                .encode(writer)
                .map_err(|err| CollectorError::Encode {
                    index,
                    source: Box::new(err),
                })?;
            written += 1;
        }
        writer.flush()?;

        if written != active {
            debug_assert_eq!(self.option.save_mode, SaveMode::Legacy);
            collector_log!(
                log::Level::Warn,
                "legacy_save_truncated",
                "header={} written={}",
                active,
                written
            );
        }
        Ok(written)
    }
}
