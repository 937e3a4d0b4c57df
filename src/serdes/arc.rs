use std::{
    io::{Read, Write},
    sync::Arc,
};

use super::{Decode, Encode};

impl<T> Decode for Arc<T>
where
    T: Decode,
{
    type Error = T::Error;

    fn decode<R>(reader: &mut R) -> Result<Self, Self::Error>
    where
        R: Read,
    {
        Ok(Arc::from(T::decode(reader)?))
    }
}

impl<T> Encode for Arc<T>
where
    T: Encode,
{
    type Error = T::Error;

    fn encode<W>(&self, writer: &mut W) -> Result<(), Self::Error>
    where
        W: Write,
    {
        self.as_ref().encode(writer)
    }

    fn size(&self) -> usize {
        Encode::size(self.as_ref())
    }
}
