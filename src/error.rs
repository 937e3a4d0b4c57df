use std::io;

/// Boxed element codec error.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error returned when a collection fails to load or save.
#[derive(Debug, thiserror::Error)]
pub enum CollectorError {
    /// Opening, reading, writing or flushing the resource failed.
    #[error("collector io error: {0}")]
    Io(#[from] io::Error),
    /// An element could not be encoded.
    #[error("collector encode error at index {index}: {source}")]
    Encode {
        /// In-memory index of the element.
        index: usize,
        /// Codec error.
        #[source]
        source: BoxedError,
    },
    /// An element could not be decoded.
    #[error("collector decode error at record {index}: {source}")]
    Decode {
        /// Position of the record in the stream.
        index: usize,
        /// Codec error.
        #[source]
        source: BoxedError,
    },
    /// The stream header is unusable.
    #[error("collector corrupt: {0}")]
    Corrupt(&'static str),
}
