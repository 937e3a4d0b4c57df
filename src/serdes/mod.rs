//! Element codecs used when a collection is persisted.
//!
//! A collection never interprets the bytes of its elements; it delegates each
//! record boundary to [`Encode`] and [`Decode`].

mod arc;
mod boolean;
#[cfg(feature = "type_bytes")]
mod bytes;
mod num;
pub(crate) mod option;
mod string;
mod vec;

use std::io::{self, Read, Write};

pub use option::{DecodeError as OptionDecodeError, EncodeError as OptionEncodeError};

/// Writes exactly one logical record to a byte sink.
pub trait Encode {
    /// Error raised while encoding.
    type Error: From<io::Error> + std::error::Error + Send + Sync + 'static;

    /// Encode `self` into `writer`.
    fn encode<W>(&self, writer: &mut W) -> Result<(), Self::Error>
    where
        W: Write;

    /// Number of bytes [`Encode::encode`] will write.
    fn size(&self) -> usize;
}

impl<T: Encode> Encode for &T {
    type Error = T::Error;

    fn encode<W>(&self, writer: &mut W) -> Result<(), Self::Error>
    where
        W: Write,
    {
        Encode::encode(*self, writer)
    }

    fn size(&self) -> usize {
        Encode::size(*self)
    }
}

/// Reads exactly one logical record from a byte source.
pub trait Decode: Sized {
    /// Error raised while decoding.
    type Error: From<io::Error> + std::error::Error + Send + Sync + 'static;

    /// Decode one value from `reader`.
    fn decode<R>(reader: &mut R) -> Result<Self, Self::Error>
    where
        R: Read;
}
