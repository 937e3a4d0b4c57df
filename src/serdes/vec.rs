use std::{
    io::{self, Read, Write},
    mem::size_of,
};

use crate::serdes::{Decode, Encode};

impl<T> Decode for Vec<T>
where
    T: Decode,
{
    type Error = T::Error;

    fn decode<R>(reader: &mut R) -> Result<Self, Self::Error>
    where
        R: Read,
    {
        let len = u32::decode(reader)? as usize;
        // The prefix is untrusted, so only a bounded amount is reserved up front.
        let mut items = Vec::with_capacity(len.min(1024));

        for _ in 0..len {
            items.push(T::decode(reader)?);
        }
        Ok(items)
    }
}

impl<T> Encode for Vec<T>
where
    T: Encode,
{
    type Error = T::Error;

    fn encode<W>(&self, writer: &mut W) -> Result<(), Self::Error>
    where
        W: Write,
    {
        let len = u32::try_from(self.len()).map_err(|_| {
            io::Error::new(io::ErrorKind::InvalidInput, "vec longer than u32::MAX items")
        })?;
        len.encode(writer)?;

        for item in self {
            item.encode(writer)?;
        }
        Ok(())
    }

    fn size(&self) -> usize {
        self.iter().map(|item| item.size()).sum::<usize>() + size_of::<u32>()
    }
}
