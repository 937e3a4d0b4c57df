use std::io::{self, Read, Write};

use thiserror::Error;

use super::{Decode, Encode};

/// Error raised while encoding an `Option<V>`.
#[derive(Debug, Error)]
pub enum EncodeError<E>
where
    E: std::error::Error,
{
    /// Writing the tag byte failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    /// Encoding the payload failed.
    #[error("inner error: {0}")]
    Inner(#[source] E),
}

/// Error raised while decoding an `Option<V>`.
#[derive(Debug, Error)]
pub enum DecodeError<E>
where
    E: std::error::Error,
{
    /// Reading the tag byte failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    /// The tag byte was neither 0 nor 1.
    #[error("invalid option tag: {0}")]
    InvalidTag(u8),
    /// Decoding the payload failed.
    #[error("inner error: {0}")]
    Inner(#[source] E),
}

impl<V> Encode for Option<V>
where
    V: Encode,
{
    type Error = EncodeError<V::Error>;

    fn encode<W>(&self, writer: &mut W) -> Result<(), Self::Error>
    where
        W: Write,
    {
        match self {
            None => writer.write_all(&[0])?,
            Some(v) => {
                writer.write_all(&[1])?;
                v.encode(writer).map_err(EncodeError::Inner)?;
            }
        }
        Ok(())
    }

    fn size(&self) -> usize {
        match self {
            None => 1,
            Some(v) => 1 + v.size(),
        }
    }
}

impl<V> Decode for Option<V>
where
    V: Decode,
{
    type Error = DecodeError<V::Error>;

    fn decode<R: Read>(reader: &mut R) -> Result<Self, Self::Error> {
        let mut o = [0];
        reader.read_exact(&mut o)?;
        match o[0] {
            0 => Ok(None),
            1 => Ok(Some(V::decode(reader).map_err(DecodeError::Inner)?)),
            tag => Err(DecodeError::InvalidTag(tag)),
        }
    }
}
