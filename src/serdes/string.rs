use std::{
    io::{self, Read, Write},
    mem::size_of,
};

use super::{Decode, Encode};

fn encode_len<W: Write>(len: usize, writer: &mut W) -> Result<(), io::Error> {
    let len = u32::try_from(len).map_err(|_| {
        io::Error::new(io::ErrorKind::InvalidInput, "string longer than u32::MAX bytes")
    })?;
    len.encode(writer)
}

impl<'r> Encode for &'r str {
    type Error = io::Error;

    fn encode<W>(&self, writer: &mut W) -> Result<(), Self::Error>
    where
        W: Write,
    {
        encode_len(self.len(), writer)?;
        writer.write_all(self.as_bytes())
    }

    fn size(&self) -> usize {
        size_of::<u32>() + self.len()
    }
}

impl Encode for String {
    type Error = io::Error;

    fn encode<W>(&self, writer: &mut W) -> Result<(), Self::Error>
    where
        W: Write,
    {
        self.as_str().encode(writer)
    }

    fn size(&self) -> usize {
        self.as_str().size()
    }
}

impl Decode for String {
    type Error = io::Error;

    fn decode<R: Read>(reader: &mut R) -> Result<Self, Self::Error> {
        let len = u32::decode(reader)? as u64;
        let mut buf = Vec::new();
        reader.by_ref().take(len).read_to_end(&mut buf)?;
        if buf.len() as u64 != len {
            return Err(io::ErrorKind::UnexpectedEof.into());
        }

        String::from_utf8(buf).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::serdes::{Decode, Encode};

    #[test]
    fn test_encode_decode() {
        let source_0 = "Hello! World";
        let source_1 = "Hello! Collector".to_string();

        let mut bytes = Vec::new();
        source_0.encode(&mut bytes).unwrap();
        source_1.encode(&mut bytes).unwrap();
        assert_eq!(bytes.len(), source_0.size() + source_1.size());

        let mut cursor = Cursor::new(bytes);
        let decoded_0 = String::decode(&mut cursor).unwrap();
        let decoded_1 = String::decode(&mut cursor).unwrap();

        assert_eq!(source_0, decoded_0);
        assert_eq!(source_1, decoded_1);
    }

    #[test]
    fn rejects_invalid_utf8() {
        let mut bytes = Vec::new();
        2u32.encode(&mut bytes).unwrap();
        bytes.extend_from_slice(&[0xC3, 0x28]);

        let err = String::decode(&mut Cursor::new(bytes)).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[test]
    fn rejects_truncated_payload() {
        let mut bytes = Vec::new();
        "truncated".encode(&mut bytes).unwrap();
        bytes.truncate(bytes.len() - 3);

        let err = String::decode(&mut Cursor::new(bytes)).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
    }
}
