use std::{
    io::{self, Read, Write},
    mem::size_of,
};

use crate::serdes::{Decode, Encode};

impl Encode for bool {
    type Error = io::Error;

    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
        u8::from(*self).encode(writer)
    }

    fn size(&self) -> usize {
        size_of::<u8>()
    }
}

impl Decode for bool {
    type Error = io::Error;

    fn decode<R: Read>(reader: &mut R) -> Result<Self, Self::Error> {
        match u8::decode(reader)? {
            0 => Ok(false),
            1 => Ok(true),
            tag => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("invalid bool byte: {tag}"),
            )),
        }
    }
}
