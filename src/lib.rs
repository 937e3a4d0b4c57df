#![deny(missing_docs)]
//! Index-addressed collections with tombstone removal and bulk persistence.
//!
//! A [`Collector`] hands out a stable index for every element it stores.
//! Removing an element only marks its slot, so indices held by callers keep
//! their meaning. Saving writes the surviving elements as a length-prefixed
//! sequence of records; loading reads one back with every element active.
//!
//! ```
//! use collector::{fs::MemFs, Collector};
//!
//! let store = MemFs::new();
//! let mut names = Collector::new();
//! names.add("ada".to_string());
//! let grace = names.add("grace".to_string());
//! names.add("linus".to_string());
//! names.remove(grace);
//!
//! assert_eq!(names.save(&store, "names").unwrap(), 2);
//!
//! let mut loaded = Collector::<String>::new();
//! loaded.load(&store, "names").unwrap();
//! assert_eq!(loaded.len(), 2);
//! assert_eq!(loaded[1], "linus");
//! ```

mod collector;
mod error;
mod logging;

pub mod fs;

/// Persistence settings.
pub mod option;

pub mod serdes;

pub use crate::{
    collector::{Collector, Iter},
    error::{BoxedError, CollectorError},
    option::{CollectorOption, LoadPolicy, SaveMode},
    serdes::{Decode, Encode},
};
