/// Which elements `save` writes after the length prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveMode {
    /// Scan every slot and write each non-removed element. The prefix always
    /// equals the number of records written.
    #[default]
    Compact,
    /// Visit only slots `0..active_len` and write the non-removed ones among
    /// them. Reproduces files written by older releases byte for byte: when
    /// removed slots sit in that prefix, survivors past it are dropped and
    /// the prefix overstates the record count.
    Legacy,
}

/// What `load` leaves behind when the stream faults after the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Restore the contents held before the call.
    #[default]
    Rollback,
    /// Keep the elements decoded before the fault.
    KeepPartial,
}

/// Default ceiling on the capacity reserved from an untrusted length prefix.
pub const DEFAULT_PREALLOCATE_LIMIT: usize = 4096;

/// Persistence settings of a [`Collector`](crate::Collector).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorOption {
    pub(crate) save_mode: SaveMode,
    pub(crate) load_policy: LoadPolicy,
    pub(crate) max_records: Option<u64>,
    pub(crate) preallocate_limit: usize,
}

impl Default for CollectorOption {
    fn default() -> Self {
        CollectorOption {
            save_mode: SaveMode::default(),
            load_policy: LoadPolicy::default(),
            max_records: None,
            preallocate_limit: DEFAULT_PREALLOCATE_LIMIT,
        }
    }
}

impl CollectorOption {
    /// Select how removed slots are skipped on save.
    pub fn save_mode(self, save_mode: SaveMode) -> Self {
        CollectorOption { save_mode, ..self }
    }

    /// Select what a failed load leaves behind.
    pub fn load_policy(self, load_policy: LoadPolicy) -> Self {
        CollectorOption {
            load_policy,
            ..self
        }
    }

    /// Reject streams whose length prefix exceeds `max_records`.
    pub fn max_records(self, max_records: u64) -> Self {
        CollectorOption {
            max_records: Some(max_records),
            ..self
        }
    }

    /// Cap the capacity reserved before any record is decoded.
    pub fn preallocate_limit(self, preallocate_limit: usize) -> Self {
        CollectorOption {
            preallocate_limit,
            ..self
        }
    }
}
