use std::{
    io::{self, Read, Write},
    mem::size_of,
};

use bytes::Bytes;

use crate::serdes::{Decode, Encode};

fn encode_slice<W: Write>(slice: &[u8], writer: &mut W) -> Result<(), io::Error> {
    let len = u32::try_from(slice.len()).map_err(|_| {
        io::Error::new(io::ErrorKind::InvalidInput, "buffer longer than u32::MAX bytes")
    })?;
    len.encode(writer)?;
    writer.write_all(slice)
}

impl Encode for &[u8] {
    type Error = io::Error;

    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
        encode_slice(self, writer)
    }

    fn size(&self) -> usize {
        size_of::<u32>() + self.len()
    }
}

impl Encode for Bytes {
    type Error = io::Error;

    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
        encode_slice(self, writer)
    }

    fn size(&self) -> usize {
        size_of::<u32>() + self.len()
    }
}

impl Decode for Bytes {
    type Error = io::Error;

    fn decode<R: Read>(reader: &mut R) -> Result<Self, Self::Error> {
        let len = u32::decode(reader)? as u64;
        let mut buf = Vec::new();
        reader.by_ref().take(len).read_to_end(&mut buf)?;
        if buf.len() as u64 != len {
            return Err(io::ErrorKind::UnexpectedEof.into());
        }

        Ok(Bytes::from(buf))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use bytes::Bytes;

    use crate::serdes::{Decode, Encode};

    #[test]
    fn test_encode_decode() {
        let source = Bytes::from_static(b"hello! Collector");

        let mut bytes = Vec::new();
        source.encode(&mut bytes).unwrap();
        assert_eq!(bytes.len(), source.size());

        let decoded = Bytes::decode(&mut Cursor::new(bytes)).unwrap();
        assert_eq!(source, decoded);
    }
}
