//! Contains the Error and Result type used by the decoder.

/// An error found while decoding NBT data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

/// The category of a decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A read ran past the end of the input part way through a value.
    UnexpectedEof,

    /// A tag id outside 0..=11 was found.
    InvalidTagId,

    /// A list, array or string carried a negative length.
    NegativeLength,

    /// Compounds and lists were nested deeper than the decoder allows.
    DepthLimit,

    /// A compressed input could not be inflated.
    CorruptStream,

    /// An underlying I/O operation failed.
    Io,

    /// Any other errors. Users should match this with a wildcard `_`; errors
    /// in this category may move to new variants.
    Other,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub(crate) fn unexpected_eof(offset: usize) -> Error {
        Error {
            msg: format!("unexpected end of input at offset {}", offset),
            kind: ErrorKind::UnexpectedEof,
        }
    }

    pub(crate) fn invalid_tag(byte: u8, offset: usize) -> Error {
        Error {
            msg: format!("invalid tag id at offset {}, byte 0x{:02x}", offset, byte),
            kind: ErrorKind::InvalidTagId,
        }
    }

    pub(crate) fn list_of_end(len: i32, offset: usize) -> Error {
        Error {
            msg: format!(
                "list with End element id and nonzero length {} at offset {}",
                len, offset
            ),
            kind: ErrorKind::InvalidTagId,
        }
    }

    pub(crate) fn negative_length(len: i32, offset: usize) -> Error {
        Error {
            msg: format!("negative length {} at offset {}", len, offset),
            kind: ErrorKind::NegativeLength,
        }
    }

    pub(crate) fn depth_limit() -> Error {
        Error {
            msg: "nesting exceeds the decoder depth limit".to_owned(),
            kind: ErrorKind::DepthLimit,
        }
    }

    pub(crate) fn no_root() -> Error {
        Error {
            msg: "invalid nbt: no root tag".to_owned(),
            kind: ErrorKind::Other,
        }
    }

    pub(crate) fn corrupt_stream(e: std::io::Error) -> Error {
        Error {
            msg: format!("corrupt compressed stream: {}", e),
            kind: ErrorKind::CorruptStream,
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Error {
                msg: e.to_string(),
                kind: ErrorKind::UnexpectedEof,
            },
            _ => Error {
                msg: format!("io error: {}", e),
                kind: ErrorKind::Io,
            },
        }
    }
}
